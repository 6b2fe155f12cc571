use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum GraphError<VertexId> {
    #[error("Edge {from:?} -> {to:?} has an invalid weight {weight}, expected finite and >= 0")]
    InvalidWeight {
        from: VertexId,
        to: VertexId,
        weight: f64,
    },
}

#[derive(Error, Debug, PartialEq, Clone)]
pub enum RouteError<VertexId> {
    #[error("Cannot route on graph: {0}")]
    InvalidGraph(#[from] GraphError<VertexId>),
    #[error("Vertex {0:?} is not reachable from the origin")]
    UnreachableNode(VertexId),
}
