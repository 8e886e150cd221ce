use crate::error::Result;
use crate::graph::algos::{breadth_first_search, depth_first_search, dijkstra_shortest_path};
use crate::graph::path::Path;
use crate::graph::types::Strategy;
use crate::graph::Graph;

/// Find a path between two vertices with the selected strategy.
///
/// Unweighted strategies ignore `weight` while searching; their result has its
/// total weight recalculated with it afterwards so every strategy reports a
/// comparable weight.
#[tracing::instrument(skip_all, fields(strategy = %strategy, start = ?start, target = ?target))]
pub fn find_path<G, W>(
    graph: &G,
    strategy: Strategy,
    start: &G::Vertex,
    target: &G::Vertex,
    weight: W,
) -> Result<Option<Path<G::Vertex>>>
where
    G: Graph + ?Sized,
    W: Fn(&G::Vertex, &G::Vertex) -> f64,
{
    let path = match strategy {
        Strategy::DepthFirst => depth_first_search(graph, start, target)?,
        Strategy::BreadthFirst => breadth_first_search(graph, start, target)?,
        Strategy::Dijkstra => return dijkstra_shortest_path(graph, start, target, weight),
    };

    Ok(path.map(|mut path| {
        path.recalculate_total_weight(&weight);
        path
    }))
}
