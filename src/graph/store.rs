//! Directed weighted graph store
//!
//! The store owns the vertex set and the per-vertex outgoing adjacency, plus
//! the observer registry the algorithms notify. Adjacency is an ordered
//! map-of-maps so every iteration the algorithms perform is deterministic
//! for a fixed insertion history.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{GraphError, Result};
use crate::graph::algos;
use crate::graph::algos::dijkstra::ShortestPath;
use crate::graph::algos::traversal::Discipline;
use crate::graph::observer::{GraphObserver, ObserverSet};

/// Non-negative edge weight as stored.
pub type Weight = u64;

/// Capability bound for vertex identity.
///
/// `Eq`/`Hash` back the visited and finalized sets, `Ord` supplies the
/// stable ordering used for deterministic tie-breaking, `Clone` lets the
/// engines own frontier entries, and `Debug` renders identities in errors
/// and tracing output. Blanket-implemented for any qualifying type.
pub trait VertexId: Eq + Hash + Ord + Clone + Debug {}

impl<T: Eq + Hash + Ord + Clone + Debug> VertexId for T {}

/// Vertex set plus per-vertex outgoing neighbor-to-weight mapping.
pub(crate) type Adjacency<V> = BTreeMap<V, BTreeMap<V, Weight>>;

/// A directed graph with non-negative integer edge weights and an observer
/// registry.
///
/// At most one directed edge exists per ordered vertex pair; re-inserting a
/// pair silently overwrites the weight. Vertices and edges are never
/// removed. The store is read-only for the duration of an algorithm run;
/// the entry points take `&mut self` only because notifying observers is a
/// mutation of the registry.
pub struct Graph<V: VertexId> {
    adjacency: Adjacency<V>,
    observers: ObserverSet<V>,
}

impl<V: VertexId> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexId> Graph<V> {
    /// Create an empty graph with no observers.
    pub fn new() -> Self {
        Graph {
            adjacency: BTreeMap::new(),
            observers: ObserverSet::new(),
        }
    }

    /// Register an observer. Delivery follows registration order; the same
    /// observer logic registered twice is notified twice.
    pub fn add_observer(&mut self, observer: Box<dyn GraphObserver<V>>) {
        self.observers.push(observer);
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Add a vertex with an empty outgoing adjacency.
    ///
    /// Fails with [`GraphError::DuplicateVertex`] if the vertex is already
    /// present.
    pub fn insert_vertex(&mut self, vertex: V) -> Result<()> {
        if self.adjacency.contains_key(&vertex) {
            return Err(GraphError::duplicate_vertex(&vertex));
        }
        self.adjacency.insert(vertex, BTreeMap::new());
        Ok(())
    }

    /// Whether the vertex is in the graph. Never fails.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Iterate the vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// Set (or silently overwrite) the weight of the directed edge
    /// `from` → `to`.
    ///
    /// Fails with [`GraphError::InvalidWeight`] on a negative weight and
    /// with [`GraphError::UnknownVertex`] if either endpoint is absent. The
    /// weight check comes first: a negative weight is rejected regardless
    /// of vertex membership.
    pub fn insert_edge(&mut self, from: &V, to: &V, weight: i64) -> Result<()> {
        if weight < 0 {
            return Err(GraphError::InvalidWeight { weight });
        }
        if !self.adjacency.contains_key(to) {
            return Err(GraphError::unknown_vertex(to));
        }
        let Some(outgoing) = self.adjacency.get_mut(from) else {
            return Err(GraphError::unknown_vertex(from));
        };
        outgoing.insert(to.clone(), weight as Weight);
        Ok(())
    }

    /// Weight of the edge `from` → `to`, or `None` if no such edge exists
    /// (distinct from a zero weight).
    ///
    /// Fails with [`GraphError::UnknownVertex`] if either endpoint is
    /// absent.
    pub fn weight(&self, from: &V, to: &V) -> Result<Option<Weight>> {
        if !self.adjacency.contains_key(to) {
            return Err(GraphError::unknown_vertex(to));
        }
        let Some(outgoing) = self.adjacency.get(from) else {
            return Err(GraphError::unknown_vertex(from));
        };
        Ok(outgoing.get(to).copied())
    }

    /// Breadth-first search from `start`, concluding as soon as `target` is
    /// visited. Returns whether the target was reached; an unreachable
    /// target is `Ok(false)`, not an error.
    pub fn breadth_first_search(&mut self, start: &V, target: &V) -> Result<bool> {
        algos::traversal::traverse(
            &self.adjacency,
            &mut self.observers,
            start,
            target,
            Discipline::BreadthFirst,
        )
    }

    /// Depth-first search from `start`, concluding as soon as `target` is
    /// visited. Returns whether the target was reached; an unreachable
    /// target is `Ok(false)`, not an error.
    pub fn depth_first_search(&mut self, start: &V, target: &V) -> Result<bool> {
        algos::traversal::traverse(
            &self.adjacency,
            &mut self.observers,
            start,
            target,
            Discipline::DepthFirst,
        )
    }

    /// Dijkstra shortest path from `start` to `end`.
    ///
    /// Finalizes every vertex in the graph (not just those on the way to
    /// `end`), then reconstructs the least-cost path. Fails with
    /// [`GraphError::UnreachableTarget`] when no path exists.
    pub fn shortest_path(&mut self, start: &V, end: &V) -> Result<ShortestPath<V>> {
        algos::dijkstra::shortest_path(&self.adjacency, &mut self.observers, start, end)
    }
}
