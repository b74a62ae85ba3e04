// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackerError {
    #[error("Edge must have exactly 2 endpoints (got {0})")]
    EdgeArity(usize),

    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    #[error("Edge not found: {from} -> {to}")]
    EdgeNotFound { from: String, to: String },

    #[error("Percentage must be between 0 and 100, inclusive (got {0})")]
    PercentOutOfRange(f64),

    #[error("Duration of task '{0}' is undefined: start and end dates must both be set")]
    DurationUndefined(String),

    #[error("The project root task cannot be removed")]
    RootTask,
}

impl TrackerError {
    pub(crate) fn vertex_not_found<V: std::fmt::Debug>(vertex: &V) -> Self {
        TrackerError::VertexNotFound(format!("{vertex:?}"))
    }

    pub(crate) fn edge_not_found<V: std::fmt::Debug>(from: &V, to: &V) -> Self {
        TrackerError::EdgeNotFound {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
