//! Algorithm engines operating over the graph store
//!
//! The engines read the adjacency, drive their own state, and notify the
//! observer registry as they progress. They never mutate the store.

pub mod dijkstra;
pub mod traversal;
