//! Walk representation shared by all searches

use crate::config::DisplayConfig;
use crate::graph::types::Weight;
use crate::graph::Graph;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt::{self, Display};
use std::hash::Hash;

/// A directed walk through a graph.
///
/// Representation invariants:
/// 1. consecutive vertices are neighbours in the graph that produced the path,
///    i.e. `vertices[i]` is in `neighbours(vertices[i - 1])`
/// 2. a path with one vertex starts and ends at the same vertex
/// 3. a path without vertices is empty and has neither start nor end
///
/// `visited` records every vertex the search entered and is only meant for
/// analysing a search; it is a superset of `vertices`.
#[derive(Debug, Clone, Serialize)]
pub struct Path<V: Eq + Hash> {
    vertices: Vec<V>,
    total_weight: Weight,
    visited: HashSet<V>,
}

impl<V: Eq + Hash> Default for Path<V> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            total_weight: Weight::ZERO,
            visited: HashSet::new(),
        }
    }
}

impl<V: Clone + Eq + Hash> Path<V> {
    pub(crate) fn new(vertices: Vec<V>, visited: HashSet<V>, total_weight: Weight) -> Self {
        Self {
            vertices,
            total_weight,
            visited,
        }
    }

    /// One-vertex path produced when start and target coincide
    pub(crate) fn single(vertex: V, mut visited: HashSet<V>) -> Self {
        visited.insert(vertex.clone());
        Self::new(vec![vertex], visited, Weight::ZERO)
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<V> {
        self.vertices
    }

    pub fn visited(&self) -> &HashSet<V> {
        &self.visited
    }

    pub fn total_weight(&self) -> f64 {
        self.total_weight.value()
    }

    pub fn start(&self) -> Option<&V> {
        self.vertices.first()
    }

    pub fn end(&self) -> Option<&V> {
        self.vertices.last()
    }

    /// Number of vertices on the walk
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges on the walk
    pub fn edge_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    /// Recalculates the total weight from a function giving the weight of the
    /// edge between two neighbouring vertices.
    pub fn recalculate_total_weight<W>(&mut self, weight: W)
    where
        W: Fn(&V, &V) -> f64,
    {
        self.total_weight = self
            .vertices
            .windows(2)
            .fold(Weight::ZERO, |acc, pair| acc + Weight::new(weight(&pair[0], &pair[1])));
    }

    /// Whether every consecutive pair of vertices is an edge of `graph`
    pub fn is_walk_in<G>(&self, graph: &G) -> bool
    where
        G: Graph<Vertex = V> + ?Sized,
    {
        self.vertices
            .windows(2)
            .all(|pair| graph.neighbours(&pair[0]).contains(&pair[1]))
    }

    /// Render with explicit display settings
    pub fn display_with<'a>(&'a self, config: &'a DisplayConfig) -> PathDisplay<'a, V> {
        PathDisplay { path: self, config }
    }
}

/// Text rendering of a [`Path`]; long paths keep only their head and tail.
pub struct PathDisplay<'a, V: Eq + Hash> {
    path: &'a Path<V>,
    config: &'a DisplayConfig,
}

impl<V: Display + Eq + Hash> Display for PathDisplay<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path;
        // zero disables abbreviation
        let cut = match self.config.path_cut {
            0 => usize::MAX,
            cut => cut,
        };
        write!(
            f,
            "Weight={:.*} Length={} visited={} (",
            self.config.weight_precision,
            path.total_weight.value(),
            path.vertices.len(),
            path.visited.len()
        )?;

        // Indices strictly between the head and the tail are elided.
        let tail_start = path.vertices.len().saturating_sub(cut);
        let mut separator = "";
        for (index, vertex) in path.vertices.iter().enumerate() {
            if index < cut || index >= tail_start {
                write!(f, "{}{}", separator, vertex)?;
                separator = ", ";
            } else if index == cut {
                write!(f, "{}...", separator)?;
            }
        }
        write!(f, ")")
    }
}

impl<V: Display + Clone + Eq + Hash> Display for Path<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.display_with(&DisplayConfig::default()).fmt(f)
    }
}
