// src/lib.rs

//! In-memory project tracking built on a small generic graph.
//!
//! - [`graph`]: ordered vertices plus adjacency sets, directed or undirected.
//! - [`project`]: tasks linked by prerequisite edges under a `"start"` root.
//! - [`errors`]: the crate-wide error type.
//! - [`logging`]: `tracing` subscriber setup.

pub mod errors;
pub mod graph;
pub mod logging;
pub mod project;

pub use errors::{Result, TrackerError};
pub use graph::{Edge, Graph, Vertex};
pub use project::{Project, Task, ROOT_TASK_NAME};
