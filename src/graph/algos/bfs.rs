use crate::error::{GraphError, Result};
use crate::graph::algos::shared::{check_endpoints, reconstruct_path};
use crate::graph::path::Path;
use crate::graph::types::Weight;
use crate::graph::Graph;
use crate::trace_time;
use std::collections::{HashMap, HashSet, VecDeque};
use std::time::Instant;

/// Find a path with the fewest edges from `start` to `target`.
///
/// Level-order expansion over a FIFO queue with a predecessor map. Every
/// neighbour examined is recorded in the path's visited set. The target is
/// recognised when it is first seen as a neighbour, before it is enqueued.
#[tracing::instrument(skip_all, fields(start = ?start, target = ?target))]
pub fn breadth_first_search<G>(
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

    // The start vertex is its own root: it is marked as seen but has no predecessor.
    let mut predecessors: HashMap<G::Vertex, G::Vertex> = HashMap::new();
    let mut queue: VecDeque<G::Vertex> = VecDeque::new();
    queue.push_back(start.clone());

    while let Some(current) = queue.pop_front() {
        for neighbour in graph.neighbours(&current) {
            visited.insert(neighbour.clone());

            if neighbour == *target {
                predecessors.insert(neighbour, current);
                // every enqueued vertex has a predecessor chain back to start
                let vertices = reconstruct_path(start, target, &predecessors).ok_or_else(|| {
                    GraphError::internal("breadth-first predecessor chain is broken")
                })?;

                tracing::debug!(
                    edges = vertices.len() - 1,
                    visited = visited.len(),
                    "breadth-first search reached target"
                );
                trace_time!(started, "breadth_first_search");
                return Ok(Some(Path::new(vertices, visited, Weight::ZERO)));
            }

            if neighbour != *start && !predecessors.contains_key(&neighbour) {
                predecessors.insert(neighbour.clone(), current.clone());
                queue.push_back(neighbour);
            }
        }
    }

    tracing::debug!(visited = visited.len(), "breadth-first search exhausted");
    trace_time!(started, "breadth_first_search");
    Ok(None)
}
