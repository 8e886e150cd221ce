use crate::error::Result;
use crate::graph::algos::shared::check_endpoints;
use crate::graph::path::Path;
use crate::graph::types::Weight;
use crate::graph::Graph;
use crate::trace_time;
use std::collections::HashSet;
use std::time::Instant;

/// One level of the backtracking search: a vertex on the current walk and the
/// neighbours of it that have not been tried yet.
struct Frame<V> {
    vertex: V,
    pending: std::vec::IntoIter<V>,
}

/// Find some path from `start` to `target` by backtracking depth-first search.
///
/// Neighbours are tried in the order the graph returns them; the first branch
/// that reaches `target` wins, so the result is not necessarily shortest.
/// Every vertex entered is recorded in the path's visited set, including dead
/// ends. Uses an explicit stack, so walk length is not limited by the call stack.
#[tracing::instrument(skip_all, fields(start = ?start, target = ?target))]
pub fn depth_first_search<G>(
    graph: &G,
    start: &G::Vertex,
    target: &G::Vertex,
) -> Result<Option<Path<G::Vertex>>>
where
    G: Graph + ?Sized,
{
    check_endpoints(graph, start, target)?;
    let started = Instant::now();

    let mut visited: HashSet<G::Vertex> = HashSet::new();
    visited.insert(start.clone());

    if start == target {
        return Ok(Some(Path::single(start.clone(), visited)));
    }

    let mut stack = vec![Frame {
        vertex: start.clone(),
        pending: graph.neighbours(start).into_iter(),
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(neighbour) = frame.pending.next() else {
            // dead end
            stack.pop();
            continue;
        };

        if !visited.insert(neighbour.clone()) {
            continue;
        }

        if neighbour == *target {
            let mut vertices: Vec<G::Vertex> =
                stack.into_iter().map(|frame| frame.vertex).collect();
            vertices.push(neighbour);

            tracing::debug!(
                length = vertices.len(),
                visited = visited.len(),
                "depth-first search reached target"
            );
            trace_time!(started, "depth_first_search");
            return Ok(Some(Path::new(vertices, visited, Weight::ZERO)));
        }

        let pending = graph.neighbours(&neighbour).into_iter();
        stack.push(Frame {
            vertex: neighbour,
            pending,
        });
    }

    tracing::debug!(visited = visited.len(), "depth-first search exhausted");
    trace_time!(started, "depth_first_search");
    Ok(None)
}
