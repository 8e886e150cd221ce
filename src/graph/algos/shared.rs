use crate::bail_invalid;
use crate::error::Result;
use crate::graph::Graph;
use std::collections::HashMap;
use std::hash::Hash;

/// Reject start/target vertices the graph does not know about
pub fn check_endpoints<G>(graph: &G, start: &G::Vertex, target: &G::Vertex) -> Result<()>
where
    G: Graph + ?Sized,
{
    if !graph.contains_vertex(start) {
        bail_invalid!("start vertex", start);
    }
    if !graph.contains_vertex(target) {
        bail_invalid!("target vertex", target);
    }
    Ok(())
}

/// Walk a predecessor map back from `target` to `start` and return the
/// vertices in forward order.
///
/// Returns `None` when the chain breaks before reaching `start`.
pub fn reconstruct_path<V>(start: &V, target: &V, predecessors: &HashMap<V, V>) -> Option<Vec<V>>
where
    V: Clone + Eq + Hash,
{
    let mut vertices = vec![target.clone()];
    let mut current = target;

    while current != start {
        current = predecessors.get(current)?;
        vertices.push(current.clone());
    }

    vertices.reverse();
    Some(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_reconstruct_chain() {
        let predecessors = HashMap::from([('b', 'a'), ('c', 'b'), ('d', 'c'), ('x', 'y')]);
        assert_eq!(
            reconstruct_path(&'a', &'d', &predecessors),
            Some(vec!['a', 'b', 'c', 'd'])
        );
    }

    #[test]
    fn test_reconstruct_start_equals_target() {
        let predecessors: HashMap<char, char> = HashMap::new();
        assert_eq!(reconstruct_path(&'a', &'a', &predecessors), Some(vec!['a']));
    }

    #[test]
    fn test_reconstruct_broken_chain() {
        let predecessors = HashMap::from([('c', 'b')]);
        assert_eq!(reconstruct_path(&'a', &'c', &predecessors), None);
    }

    #[test]
    fn test_check_endpoints() {
        let graph = BTreeMap::from([(1u8, vec![2u8]), (2, vec![])]);
        assert!(check_endpoints(&graph, &1, &2).is_ok());

        let err = check_endpoints(&graph, &9, &2).unwrap_err();
        assert_eq!(err.to_string(), "invalid start vertex: 9");

        let err = check_endpoints(&graph, &1, &9).unwrap_err();
        assert_eq!(err.to_string(), "invalid target vertex: 9");
    }
}
