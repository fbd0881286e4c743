//! Observer protocol for algorithm progress
//!
//! Observers are registered on a [`Graph`](crate::graph::Graph) and receive
//! events synchronously, in registration order, from the same call stack as
//! the running algorithm. There is no buffering and no per-observer
//! isolation: an observer failure aborts delivery to the remaining observers
//! for that event and surfaces to the algorithm's caller.

use crate::error::{GraphError, ObserverError, Result};
use crate::graph::algos::traversal::Discipline;
use crate::graph::store::{VertexId, Weight};

/// Receives progress events from the graph algorithms.
///
/// All methods default to a no-op so an observer only implements the events
/// it cares about. Returning an error aborts the running algorithm.
///
/// Event order per algorithm:
/// - BFS / DFS: `search_started` once, `vertex_visited` once per distinct
///   vertex in visit order, `search_concluded` exactly once if and only if
///   the target was visited (immediately after its visit, nothing after).
/// - Shortest path: `shortest_path_started` once, `vertex_finalized` once
///   per vertex in non-decreasing cost order (`None` means unreachable and
///   sorts last), `path_computed` once after every vertex is finalized.
#[allow(unused_variables)]
pub trait GraphObserver<V: VertexId> {
    /// A breadth-first or depth-first search is starting.
    fn search_started(&mut self, discipline: Discipline) -> std::result::Result<(), ObserverError> {
        Ok(())
    }

    /// The search visited a vertex for the first time.
    fn vertex_visited(&mut self, vertex: &V) -> std::result::Result<(), ObserverError> {
        Ok(())
    }

    /// The search reached its target; no further events follow.
    fn search_concluded(&mut self) -> std::result::Result<(), ObserverError> {
        Ok(())
    }

    /// A shortest-path computation is starting.
    fn shortest_path_started(&mut self) -> std::result::Result<(), ObserverError> {
        Ok(())
    }

    /// A vertex's cost became final. `None` is the infinite cost of a
    /// vertex unreachable from the start.
    fn vertex_finalized(
        &mut self,
        vertex: &V,
        cost: Option<Weight>,
    ) -> std::result::Result<(), ObserverError> {
        Ok(())
    }

    /// The start-to-end path was reconstructed; no further events follow.
    fn path_computed(&mut self, path: &[V]) -> std::result::Result<(), ObserverError> {
        Ok(())
    }
}

/// Ordered collection of observers with fail-fast delivery.
pub(crate) struct ObserverSet<V> {
    observers: Vec<Box<dyn GraphObserver<V>>>,
}

impl<V: VertexId> ObserverSet<V> {
    pub(crate) fn new() -> Self {
        ObserverSet {
            observers: Vec::new(),
        }
    }

    /// Append an observer. Registering the same logic twice means it is
    /// notified twice; no deduplication is performed.
    pub(crate) fn push(&mut self, observer: Box<dyn GraphObserver<V>>) {
        self.observers.push(observer);
    }

    pub(crate) fn len(&self) -> usize {
        self.observers.len()
    }

    /// Deliver one event to every observer in registration order, wrapping
    /// the first failure and skipping the rest.
    fn deliver(
        &mut self,
        event: &'static str,
        mut notify: impl FnMut(&mut dyn GraphObserver<V>) -> std::result::Result<(), ObserverError>,
    ) -> Result<()> {
        for observer in &mut self.observers {
            notify(observer.as_mut()).map_err(|e| GraphError::Observer {
                event,
                reason: e.0,
            })?;
        }
        Ok(())
    }

    pub(crate) fn search_started(&mut self, discipline: Discipline) -> Result<()> {
        self.deliver("search_started", |o| o.search_started(discipline))
    }

    pub(crate) fn vertex_visited(&mut self, vertex: &V) -> Result<()> {
        self.deliver("vertex_visited", |o| o.vertex_visited(vertex))
    }

    pub(crate) fn search_concluded(&mut self) -> Result<()> {
        self.deliver("search_concluded", |o| o.search_concluded())
    }

    pub(crate) fn shortest_path_started(&mut self) -> Result<()> {
        self.deliver("shortest_path_started", |o| o.shortest_path_started())
    }

    pub(crate) fn vertex_finalized(&mut self, vertex: &V, cost: Option<Weight>) -> Result<()> {
        self.deliver("vertex_finalized", |o| o.vertex_finalized(vertex, cost))
    }

    pub(crate) fn path_computed(&mut self, path: &[V]) -> Result<()> {
        self.deliver("path_computed", |o| o.path_computed(path))
    }
}

/// Observer that forwards every event to `tracing` at debug level.
///
/// Useful for watching an algorithm run without writing a bespoke observer:
/// `graph.add_observer(Box::new(TraceObserver));`
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceObserver;

impl<V: VertexId> GraphObserver<V> for TraceObserver {
    fn search_started(&mut self, discipline: Discipline) -> std::result::Result<(), ObserverError> {
        tracing::debug!(?discipline, "search started");
        Ok(())
    }

    fn vertex_visited(&mut self, vertex: &V) -> std::result::Result<(), ObserverError> {
        tracing::debug!(vertex = ?vertex, "vertex visited");
        Ok(())
    }

    fn search_concluded(&mut self) -> std::result::Result<(), ObserverError> {
        tracing::debug!("search concluded");
        Ok(())
    }

    fn shortest_path_started(&mut self) -> std::result::Result<(), ObserverError> {
        tracing::debug!("shortest path started");
        Ok(())
    }

    fn vertex_finalized(
        &mut self,
        vertex: &V,
        cost: Option<Weight>,
    ) -> std::result::Result<(), ObserverError> {
        tracing::debug!(vertex = ?vertex, cost = ?cost, "vertex finalized");
        Ok(())
    }

    fn path_computed(&mut self, path: &[V]) -> std::result::Result<(), ObserverError> {
        tracing::debug!(len = path.len(), path = ?path, "path computed");
        Ok(())
    }
}
