use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::warn;

use crate::{GraphError, Weight};

/// Weighted directed graph.
/// Should be implemented by the graph the solver runs on.
pub trait DirectedGraph {
    /// Uniquely identify a vertex that belongs to the graph.
    type VertexId: Debug + Clone + Ord + Hash;

    /// Gets an iterator over all the outgoing edges from the given vertex.
    /// For each edge returns the edge end vertex and the edge weight.
    /// Returns an empty iterator if the vertex doesn't belong to the graph.
    fn vertex_exiting_edges(
        &self,
        vertex: &Self::VertexId,
    ) -> impl Iterator<Item = (Self::VertexId, Weight)>;

    /// Gets the weight of the directed edge that goes from the first to the second vertex.
    /// Returns None if the edge doesn't belong to the graph.
    fn edge_weight(&self, from: &Self::VertexId, to: &Self::VertexId) -> Option<Weight> {
        self.vertex_exiting_edges(from)
            .find(|(vertex, _)| vertex == to)
            .map(|(_, weight)| weight)
    }
}

/// Graph that maps each vertex to its outbound edges, and each outbound edge end vertex to the
/// edge weight.
///
/// All the stored weights are finite and not negative.
#[derive(Debug, Clone)]
pub struct WeightedGraph<N> {
    adjacency: FxHashMap<N, FxHashMap<N, Weight>>,
}

impl<N> Default for WeightedGraph<N> {
    fn default() -> Self {
        Self {
            adjacency: FxHashMap::default(),
        }
    }
}

impl<N: Debug + Clone + Eq + Hash> WeightedGraph<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the graph from a list of directed edges (start vertex, end vertex, weight).
    pub fn try_from_edges<I>(edges: I) -> Result<Self, GraphError<N>>
    where
        I: IntoIterator<Item = (N, N, f64)>,
    {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Builds the graph from a mapping of each vertex to its outbound edges, for example a
    /// `HashMap<N, HashMap<N, f64>>`.
    pub fn try_from_adjacency<I, E>(adjacency: I) -> Result<Self, GraphError<N>>
    where
        I: IntoIterator<Item = (N, E)>,
        E: IntoIterator<Item = (N, f64)>,
    {
        let mut graph = Self::new();
        for (from, edges) in adjacency {
            graph.add_node(from.clone());
            for (to, weight) in edges {
                graph.add_edge(from.clone(), to, weight)?;
            }
        }
        Ok(graph)
    }

    /// Adds a vertex without edges, does nothing if the vertex already belongs to the graph.
    pub fn add_node(&mut self, vertex: N) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Adds the directed edge, replacing the weight of an existing edge between the same
    /// vertices. The end vertex is added to the graph if missing.
    pub fn add_edge(&mut self, from: N, to: N, weight: f64) -> Result<(), GraphError<N>> {
        if !Weight::from(weight).is_valid() {
            warn!("Rejecting edge {from:?} -> {to:?} with weight {weight}");
            return Err(GraphError::InvalidWeight { from, to, weight });
        }

        self.add_node(to.clone());
        self.adjacency
            .entry(from)
            .or_default()
            .insert(to, Weight::from(weight));

        Ok(())
    }

    pub fn contains_node(&self, vertex: &N) -> bool {
        self.adjacency.contains_key(vertex)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// Gets an iterator over all the directed edges of the graph.
    /// For each edge returns the start vertex, the end vertex and the weight.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, Weight)> {
        self.adjacency
            .iter()
            .flat_map(|(from, edges)| edges.iter().map(move |(to, &weight)| (from, to, weight)))
    }
}

impl<N: Debug + Clone + Ord + Hash> DirectedGraph for WeightedGraph<N> {
    type VertexId = N;

    fn vertex_exiting_edges(&self, vertex: &N) -> impl Iterator<Item = (N, Weight)> {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flatten()
            .map(|(to, &weight)| (to.clone(), weight))
    }

    fn edge_weight(&self, from: &N, to: &N) -> Option<Weight> {
        self.adjacency.get(from)?.get(to).copied()
    }
}

pub mod path;
