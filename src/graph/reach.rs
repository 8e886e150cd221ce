//! Reachability and adjacency listing over the subgraph seen from one vertex

use crate::bail_invalid;
use crate::error::Result;
use crate::graph::Graph;
use std::collections::{HashSet, VecDeque};
use std::fmt::{Display, Write};

/// Every vertex reachable from `first`, in breadth-first discovery order.
///
/// `first` is always the first element, even when it has no outgoing edges.
/// Directed graphs only follow outgoing edges.
pub fn reachable_order<G>(graph: &G, first: &G::Vertex) -> Result<Vec<G::Vertex>>
where
    G: Graph + ?Sized,
{
    if !graph.contains_vertex(first) {
        bail_invalid!("first vertex", first);
    }

    let mut seen: HashSet<G::Vertex> = HashSet::new();
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    seen.insert(first.clone());
    queue.push_back(first.clone());

    while let Some(current) = queue.pop_front() {
        for neighbour in graph.neighbours(&current) {
            if seen.insert(neighbour.clone()) {
                queue.push_back(neighbour);
            }
        }
        order.push(current);
    }

    Ok(order)
}

/// Every vertex reachable from `first`, including `first` itself
#[tracing::instrument(skip_all, fields(first = ?first))]
pub fn reachable_set<G>(graph: &G, first: &G::Vertex) -> Result<HashSet<G::Vertex>>
where
    G: Graph + ?Sized,
{
    let reachable: HashSet<G::Vertex> = reachable_order(graph, first)?.into_iter().collect();
    tracing::debug!(reachable = reachable.len(), "collected reachable vertices");
    Ok(reachable)
}

/// Formats the adjacency list of the subgraph reachable from `first`:
///
/// ```text
/// Graph adjacency list:
/// vertex1: [neighbour11,neighbour12]
/// vertex2: [neighbour21]
/// ```
///
/// Vertices appear in breadth-first discovery order, neighbours in the order
/// the graph returns them.
pub fn format_adjacency_list<G>(graph: &G, first: &G::Vertex) -> Result<String>
where
    G: Graph + ?Sized,
    G::Vertex: Display,
{
    let mut output = String::from("Graph adjacency list:\n");

    for vertex in reachable_order(graph, first)? {
        let neighbours = graph
            .neighbours(&vertex)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        // Writing to a String cannot fail
        let _ = writeln!(output, "{}: [{}]", vertex, neighbours);
    }

    Ok(output)
}
