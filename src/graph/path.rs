use crate::{DirectedGraph, Weight};

/// Returns true only if all the vertices of the path are sequentially connected by directed
/// edges in the given graph. An empty path and a single vertex path are connected.
pub fn is_path_connected<G: DirectedGraph>(graph: &G, path: &[G::VertexId]) -> bool {
    path_weight(graph, path).is_some()
}

/// Gets the total weight of the edges that sequentially connect the vertices of the path.
/// Returns None if any two consecutive vertices are not connected in the given graph.
pub fn path_weight<G: DirectedGraph>(graph: &G, path: &[G::VertexId]) -> Option<Weight> {
    path.windows(2)
        .map(|window| graph.edge_weight(&window[0], &window[1]))
        .sum()
}
