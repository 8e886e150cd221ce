use crate::error::Result;
use crate::graph::path::Path;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait for providing graph adjacency.
///
/// The graph owns no traversal state. Every search in this crate only ever
/// calls `neighbours` (and `contains_vertex` on its arguments), so any type that
/// can answer "who is one edge away from `v`" can be searched. Directed graphs
/// return outgoing edges only; undirected graphs must report each edge from both
/// endpoints.
pub trait Graph {
    type Vertex: Clone + Eq + Hash + Debug;

    /// Distinct vertices one edge away from `vertex`, in the graph's preferred order.
    ///
    /// Must be side-effect free; searches call it many times. The order only
    /// breaks ties between equally good choices.
    fn neighbours(&self, vertex: &Self::Vertex) -> Vec<Self::Vertex>;

    /// Whether `vertex` belongs to this graph.
    ///
    /// Searches reject absent start/target vertices before traversing anything.
    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool {
        let _ = vertex;
        true
    }

    /// Every vertex reachable from `first`, including `first` itself
    fn reachable_set(&self, first: &Self::Vertex) -> Result<HashSet<Self::Vertex>> {
        crate::graph::reach::reachable_set(self, first)
    }

    /// Adjacency listing of the subgraph reachable from `first`
    fn format_adjacency_list(&self, first: &Self::Vertex) -> Result<String>
    where
        Self::Vertex: Display,
    {
        crate::graph::reach::format_adjacency_list(self, first)
    }

    fn depth_first_search(
        &self,
        start: &Self::Vertex,
        target: &Self::Vertex,
    ) -> Result<Option<Path<Self::Vertex>>> {
        crate::graph::algos::depth_first_search(self, start, target)
    }

    fn breadth_first_search(
        &self,
        start: &Self::Vertex,
        target: &Self::Vertex,
    ) -> Result<Option<Path<Self::Vertex>>> {
        crate::graph::algos::breadth_first_search(self, start, target)
    }

    fn dijkstra_shortest_path<W>(
        &self,
        start: &Self::Vertex,
        target: &Self::Vertex,
        weight: W,
    ) -> Result<Option<Path<Self::Vertex>>>
    where
        Self: Sized,
        W: Fn(&Self::Vertex, &Self::Vertex) -> f64,
    {
        crate::graph::algos::dijkstra_shortest_path(self, start, target, weight)
    }
}

impl<G: Graph + ?Sized> Graph for &G {
    type Vertex = G::Vertex;

    fn neighbours(&self, vertex: &Self::Vertex) -> Vec<Self::Vertex> {
        (**self).neighbours(vertex)
    }

    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool {
        (**self).contains_vertex(vertex)
    }
}

/// Adjacency map: a vertex that is not a key has no neighbours.
///
/// A vertex belongs to the graph when it is a key or appears in any
/// neighbour list, so sinks need no empty entry.
impl<V> Graph for HashMap<V, Vec<V>>
where
    V: Clone + Eq + Hash + Debug,
{
    type Vertex = V;

    fn neighbours(&self, vertex: &V) -> Vec<V> {
        self.get(vertex).cloned().unwrap_or_default()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.contains_key(vertex) || self.values().any(|targets| targets.contains(vertex))
    }
}

/// Adjacency map with deterministic key order; membership as for `HashMap`.
impl<V> Graph for BTreeMap<V, Vec<V>>
where
    V: Clone + Ord + Hash + Debug,
{
    type Vertex = V;

    fn neighbours(&self, vertex: &V) -> Vec<V> {
        self.get(vertex).cloned().unwrap_or_default()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.contains_key(vertex) || self.values().any(|targets| targets.contains(vertex))
    }
}
