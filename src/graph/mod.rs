//! Graph store and algorithm engines
//!
//! Provides the directed weighted graph and its observable algorithms:
//! - BFS / DFS traversal with a shared frontier-driven engine
//! - Dijkstra label-setting shortest paths with path reconstruction
//! - Observer protocol for synchronous, ordered progress notification

pub mod algos;
pub mod observer;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use algos::dijkstra::ShortestPath;
pub use algos::traversal::Discipline;
pub use observer::{GraphObserver, TraceObserver};
pub use store::{Graph, VertexId, Weight};
