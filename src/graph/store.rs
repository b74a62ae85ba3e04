// src/graph/store.rs

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use tracing::{debug, error, warn};

use crate::errors::{Result, TrackerError};
use crate::graph::edge::Edge;

/// Capabilities a value needs to be stored as a vertex.
///
/// Identity is whatever `Eq` + `Hash` say it is. The hash of a vertex must not
/// change while it is part of a graph.
pub trait Vertex: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> Vertex for T {}

/// In-memory graph with ordered vertices and set-based adjacency.
///
/// - `vertices` keeps insertion order and never holds duplicates.
/// - every present vertex owns an adjacency entry (possibly empty); absent
///   vertices have none, so a lookup for an unknown vertex is distinguishable
///   from a vertex without neighbors.
/// - an undirected graph stores each edge in both endpoint sets.
///
/// Directedness is fixed at construction.
#[derive(Debug, Clone)]
pub struct Graph<V: Vertex> {
    vertices: Vec<V>,
    adjacency: HashMap<V, HashSet<V>>,
    directed: bool,
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Self::new(false)
    }
}

impl<V: Vertex> Graph<V> {
    /// Empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            vertices: Vec::new(),
            adjacency: HashMap::new(),
            directed,
        }
    }

    /// Graph seeded with `vertices` (in order) and no edges.
    pub fn with_vertices(vertices: impl IntoIterator<Item = V>, directed: bool) -> Self {
        let mut graph = Self::new(directed);
        graph.add_vertices(vertices);
        graph
    }

    /// Graph seeded with `vertices`, then `edges` replayed through
    /// [`Graph::add_edge`] in order.
    ///
    /// Fails on the first edge whose endpoints are not among `vertices`.
    pub fn from_parts<I, E>(vertices: I, edges: E, directed: bool) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator,
        E::Item: Into<Edge<V>>,
    {
        let mut graph = Self::with_vertices(vertices, directed);
        graph.add_edges(edges)?;
        Ok(graph)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of vertices (not edges).
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Neighbor set of `vertex`, or `None` if the vertex is not in the graph.
    pub fn neighbors(&self, vertex: &V) -> Option<&HashSet<V>> {
        self.adjacency.get(vertex)
    }

    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|neighbors| neighbors.contains(to))
    }

    /// Number of distinct edges.
    ///
    /// Undirected edges are stored twice but counted once; a self-loop is
    /// stored once either way.
    pub fn edge_count(&self) -> usize {
        let stored: usize = self.adjacency.values().map(HashSet::len).sum();
        if self.directed {
            return stored;
        }
        let self_loops = self
            .adjacency
            .iter()
            .filter(|(vertex, neighbors)| neighbors.contains(*vertex))
            .count();
        (stored + self_loops) / 2
    }

    /// `(vertex, neighbors)` pairs in vertex insertion order.
    pub fn adjacency(&self) -> impl Iterator<Item = (&V, &HashSet<V>)> {
        self.vertices
            .iter()
            .filter_map(|vertex| self.adjacency.get(vertex).map(|n| (vertex, n)))
    }

    /// Insert `vertex` at the end of the vertex order.
    ///
    /// Returns `false` (and changes nothing) if it is already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            debug!(vertex = ?vertex, "vertex already present; ignoring");
            return false;
        }

        debug!(vertex = ?vertex, "adding vertex");
        self.adjacency.insert(vertex.clone(), HashSet::new());
        self.vertices.push(vertex);
        true
    }

    pub fn add_vertices(&mut self, vertices: impl IntoIterator<Item = V>) {
        for vertex in vertices {
            self.add_vertex(vertex);
        }
    }

    /// Connect two existing vertices.
    ///
    /// Both endpoints must already be vertices; edges never create them.
    /// Returns `Ok(false)` if the edge was already present.
    pub fn add_edge(&mut self, edge: impl Into<Edge<V>>) -> Result<bool> {
        let Edge { from, to } = edge.into();
        self.ensure_vertex(&from)?;
        self.ensure_vertex(&to)?;

        let mut inserted = self.neighbors_mut(&from)?.insert(to.clone());
        if !self.directed {
            inserted |= self.neighbors_mut(&to)?.insert(from.clone());
        }

        if inserted {
            debug!(from = ?from, to = ?to, directed = self.directed, "added edge");
        } else {
            debug!(from = ?from, to = ?to, "edge already present; ignoring");
        }
        Ok(inserted)
    }

    /// Add edges in order, stopping at the first failure.
    ///
    /// Edges added before the failing one stay in the graph.
    pub fn add_edges<E>(&mut self, edges: E) -> Result<()>
    where
        E: IntoIterator,
        E::Item: Into<Edge<V>>,
    {
        for edge in edges {
            self.add_edge(edge)?;
        }
        Ok(())
    }

    /// Remove `vertex` together with every edge into or out of it.
    ///
    /// Returns the stored vertex.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<V> {
        let position = self
            .vertices
            .iter()
            .position(|v| v == vertex)
            .ok_or_else(|| TrackerError::vertex_not_found(vertex))?;

        // Directed graphs have no back-links, so every set has to be checked.
        for neighbors in self.adjacency.values_mut() {
            neighbors.remove(vertex);
        }
        self.adjacency.remove(vertex);
        let removed = self.vertices.remove(position);

        debug!(vertex = ?removed, remaining = self.vertices.len(), "removed vertex");
        Ok(removed)
    }

    /// Remove an existing edge.
    ///
    /// Unlike [`Graph::add_edge`], a missing edge is an error.
    pub fn remove_edge(&mut self, edge: impl Into<Edge<V>>) -> Result<()> {
        let Edge { from, to } = edge.into();

        if !self.neighbors_mut(&from)?.remove(&to) {
            warn!(from = ?from, to = ?to, "cannot remove missing edge");
            return Err(TrackerError::edge_not_found(&from, &to));
        }

        if !self.directed && from != to {
            let reverse_removed = self
                .adjacency
                .get_mut(&to)
                .is_some_and(|neighbors| neighbors.remove(&from));
            if !reverse_removed {
                error!(from = ?from, to = ?to, "undirected adjacency was not symmetric");
                debug_assert!(reverse_removed, "undirected adjacency must be symmetric");
            }
        }

        debug!(from = ?from, to = ?to, "removed edge");
        Ok(())
    }

    fn ensure_vertex(&self, vertex: &V) -> Result<()> {
        if self.adjacency.contains_key(vertex) {
            Ok(())
        } else {
            Err(TrackerError::vertex_not_found(vertex))
        }
    }

    fn neighbors_mut(&mut self, vertex: &V) -> Result<&mut HashSet<V>> {
        self.adjacency
            .get_mut(vertex)
            .ok_or_else(|| TrackerError::vertex_not_found(vertex))
    }
}

impl<V: Vertex> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph(")?;
        let mut map = f.debug_map();
        for (vertex, neighbors) in self.adjacency() {
            let ordered = self
                .vertices
                .iter()
                .filter(|v| neighbors.contains(*v))
                .collect();
            map.entry(vertex, &NeighborList(ordered));
        }
        map.finish()?;
        write!(f, ")")
    }
}

/// Neighbor set rendered in vertex insertion order.
struct NeighborList<'a, V>(Vec<&'a V>);

impl<V: fmt::Debug> fmt::Debug for NeighborList<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(&self.0).finish()
    }
}
