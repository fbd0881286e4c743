//! Pathgraph
//!
//! A directed, weighted graph with three observable algorithms: breadth-first
//! search, depth-first search, and Dijkstra-style shortest paths. Algorithm
//! progress is reported synchronously to registered observers in a fixed
//! event order, which makes the engines suitable for visualization and
//! step-by-step inspection.

pub mod error;
pub mod graph;
pub mod logging;
pub mod maze;

pub use error::{GraphError, Result};
pub use graph::{Discipline, Graph, GraphObserver, ShortestPath, TraceObserver, VertexId, Weight};
