// src/graph/mod.rs

//! Generic vertex/edge container.
//!
//! - [`store`] holds [`Graph`], the ordered vertex list plus adjacency sets,
//!   with directed or undirected semantics chosen at construction.
//! - [`edge`] defines [`Edge`], the ordered vertex pair accepted by the
//!   edge operations.
//!
//! The graph has no traversal algorithms; it only keeps its invariants
//! across insertions and removals.

pub mod store;
pub mod edge;

pub use self::store::{Graph, Vertex};
pub use self::edge::Edge;
