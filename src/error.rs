//! Error types for pathgraph
//!
//! Every failure is synchronous, local, and non-retryable: the store and the
//! algorithm engines perform no internal recovery, so each error surfaces to
//! the caller at the point of the violating operation.

use thiserror::Error;

/// Errors raised by the graph store and the algorithm engines.
///
/// Vertex identities are rendered through `Debug` at construction time so
/// the enum stays non-generic.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex was inserted twice.
    #[error("vertex already present: {vertex}")]
    DuplicateVertex { vertex: String },

    /// An operation referenced a vertex absent from the store.
    #[error("unknown vertex: {vertex}")]
    UnknownVertex { vertex: String },

    /// An edge insertion supplied a negative weight.
    #[error("invalid edge weight: {weight} (weights must be non-negative)")]
    InvalidWeight { weight: i64 },

    /// Shortest-path reconstruction could not connect the end vertex back to
    /// the start: the end is unreachable.
    #[error("no path from {start} to {end}")]
    UnreachableTarget { start: String, end: String },

    /// An observer refused an event; delivery to later observers was
    /// aborted and the algorithm stopped.
    #[error("observer failed on {event}: {reason}")]
    Observer { event: &'static str, reason: String },
}

impl GraphError {
    /// Build an `UnknownVertex` error from any debuggable vertex.
    pub fn unknown_vertex(vertex: &impl std::fmt::Debug) -> Self {
        GraphError::UnknownVertex {
            vertex: format!("{vertex:?}"),
        }
    }

    /// Build a `DuplicateVertex` error from any debuggable vertex.
    pub fn duplicate_vertex(vertex: &impl std::fmt::Debug) -> Self {
        GraphError::DuplicateVertex {
            vertex: format!("{vertex:?}"),
        }
    }

    /// Build an `UnreachableTarget` error from debuggable endpoints.
    pub fn unreachable_target(start: &impl std::fmt::Debug, end: &impl std::fmt::Debug) -> Self {
        GraphError::UnreachableTarget {
            start: format!("{start:?}"),
            end: format!("{end:?}"),
        }
    }
}

/// Failure reported by an observer while handling an event.
///
/// The registry wraps this into [`GraphError::Observer`] together with the
/// name of the event being delivered.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ObserverError(pub String);

impl ObserverError {
    pub fn new(reason: impl Into<String>) -> Self {
        ObserverError(reason.into())
    }
}

/// Result type for pathgraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
