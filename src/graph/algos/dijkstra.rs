use crate::error::{GraphError, Result};
use crate::graph::algos::shared::{check_endpoints, reconstruct_path};
use crate::graph::path::Path;
use crate::graph::types::Weight;
use crate::graph::Graph;
use crate::trace_time;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::Hash;
use std::time::Instant;

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated weight).
///
/// Entries with equal weight pop in insertion order, so the first route to
/// reach a given distance wins ties. Only the slot into the spanning tree is
/// stored; the vertex itself lives in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub node: usize,
    pub accumulated_weight: Weight,
    pub sequence: u64,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.accumulated_weight
            .cmp(&other.accumulated_weight)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// Per-vertex record of the partial shortest-path spanning tree
struct SpanningTreeNode<V> {
    vertex: V,
    parent: Option<usize>,
    finalized: bool,
    best_distance: Weight,
}

/// State tracked during a Dijkstra search
struct DijkstraState<V> {
    nodes: Vec<SpanningTreeNode<V>>,
    slots: HashMap<V, usize>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    sequence: u64,
}

impl<V: Clone + Eq + Hash> DijkstraState<V> {
    fn new() -> Self {
        Self {
            nodes: Vec::new(),
            slots: HashMap::new(),
            heap: BinaryHeap::new(),
            sequence: 0,
        }
    }

    /// Slot of `vertex` in the spanning tree, creating an unreached node if needed
    fn slot(&mut self, vertex: &V) -> usize {
        if let Some(&slot) = self.slots.get(vertex) {
            return slot;
        }
        let slot = self.nodes.len();
        self.nodes.push(SpanningTreeNode {
            vertex: vertex.clone(),
            parent: None,
            finalized: false,
            best_distance: Weight::INFINITY,
        });
        self.slots.insert(vertex.clone(), slot);
        slot
    }

    fn push(&mut self, node: usize) {
        self.heap.push(Reverse(HeapEntry {
            node,
            accumulated_weight: self.nodes[node].best_distance,
            sequence: self.sequence,
        }));
        self.sequence += 1;
    }

    /// Predecessor map of the spanning tree, keyed by vertex
    fn predecessors(&self) -> HashMap<V, V> {
        self.nodes
            .iter()
            .filter_map(|node| {
                node.parent
                    .map(|parent| (node.vertex.clone(), self.nodes[parent].vertex.clone()))
            })
            .collect()
    }

    fn finalized_vertices(&self) -> HashSet<V> {
        self.nodes
            .iter()
            .filter(|node| node.finalized)
            .map(|node| node.vertex.clone())
            .collect()
    }
}

/// Find a path with the smallest total weight from `start` to `target`.
///
/// `weight(from, to)` gives the weight of the edge between two neighbouring
/// vertices and must be finite and non-negative; a violating edge aborts the
/// search with [`GraphError::InvalidWeight`].
///
/// The priority queue uses lazy re-insertion: a relaxed vertex is pushed again
/// rather than re-keyed, and stale entries are skipped when popped. The visited
/// set of the returned path holds every finalized vertex.
#[tracing::instrument(skip_all, fields(start = ?start, target = ?target))]
pub fn dijkstra_shortest_path<G, W>(
    graph: &G,
    start: &G::Vertex,
    target: &G::Vertex,
    weight: W,
) -> Result<Option<Path<G::Vertex>>>
where
    G: Graph + ?Sized,
    W: Fn(&G::Vertex, &G::Vertex) -> f64,
{
    check_endpoints(graph, start, target)?;
    let started = Instant::now();

    let mut state = DijkstraState::new();
    let root = state.slot(start);
    state.nodes[root].best_distance = Weight::ZERO;
    state.push(root);

    while let Some(Reverse(HeapEntry {
        node: current,
        accumulated_weight,
        ..
    })) = state.heap.pop()
    {
        if state.nodes[current].finalized || accumulated_weight > state.nodes[current].best_distance
        {
            continue;
        }
        state.nodes[current].finalized = true;

        let current_vertex = state.nodes[current].vertex.clone();
        if current_vertex == *target {
            // a finalized vertex other than start always has a parent
            let vertices = reconstruct_path(start, target, &state.predecessors())
                .ok_or_else(|| GraphError::internal("spanning tree does not lead back to start"))?;
            let visited = state.finalized_vertices();

            tracing::debug!(
                edges = vertices.len() - 1,
                visited = visited.len(),
                total_weight = accumulated_weight.value(),
                "dijkstra reached target"
            );
            trace_time!(started, "dijkstra_shortest_path");
            return Ok(Some(Path::new(vertices, visited, accumulated_weight)));
        }

        for neighbour in graph.neighbours(&current_vertex) {
            let next = state.slot(&neighbour);
            if state.nodes[next].finalized {
                continue;
            }

            let edge = Weight::new(weight(&current_vertex, &neighbour));
            if !edge.is_valid_edge() {
                tracing::warn!(
                    from = ?current_vertex,
                    to = ?neighbour,
                    weight = edge.value(),
                    "edge weight violates the non-negative precondition"
                );
                return Err(GraphError::invalid_weight(
                    &current_vertex,
                    &neighbour,
                    edge.value(),
                ));
            }

            let candidate = accumulated_weight + edge;
            if candidate < state.nodes[next].best_distance {
                tracing::trace!(
                    vertex = ?neighbour,
                    distance = candidate.value(),
                    "relaxed"
                );
                state.nodes[next].best_distance = candidate;
                state.nodes[next].parent = Some(current);
                state.push(next);
            }
        }
    }

    tracing::debug!(
        finalized = state.nodes.iter().filter(|node| node.finalized).count(),
        "dijkstra exhausted"
    );
    trace_time!(started, "dijkstra_shortest_path");
    Ok(None)
}
