// src/graph/edge.rs

//! Ordered vertex pairs.

use crate::errors::{Result, TrackerError};

/// An ordered pair of vertices.
///
/// In a directed graph the edge runs `from -> to`. In an undirected graph the
/// order only matters for which endpoint is looked up first.
///
/// Tuples convert infallibly. Sequences go through [`TryFrom`] and fail with
/// [`TrackerError::EdgeArity`] unless they hold exactly two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<V> {
    pub from: V,
    pub to: V,
}

impl<V> Edge<V> {
    pub fn new(from: V, to: V) -> Self {
        Self { from, to }
    }

    /// The same edge with its endpoints swapped.
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from((from, to): (V, V)) -> Self {
        Self { from, to }
    }
}

impl<V> TryFrom<Vec<V>> for Edge<V> {
    type Error = TrackerError;

    fn try_from(endpoints: Vec<V>) -> Result<Self> {
        let len = endpoints.len();
        let mut iter = endpoints.into_iter();
        match (iter.next(), iter.next(), iter.next()) {
            (Some(from), Some(to), None) => Ok(Self { from, to }),
            _ => Err(TrackerError::EdgeArity(len)),
        }
    }
}

impl<V: Clone> TryFrom<&[V]> for Edge<V> {
    type Error = TrackerError;

    fn try_from(endpoints: &[V]) -> Result<Self> {
        match endpoints {
            [from, to] => Ok(Self {
                from: from.clone(),
                to: to.clone(),
            }),
            _ => Err(TrackerError::EdgeArity(endpoints.len())),
        }
    }
}
