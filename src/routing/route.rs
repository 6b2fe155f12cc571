use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{RouteError, Weight};

/// Best known way of reaching a vertex from the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Route<VertexId> {
    /// The previous vertex on the best known path from the origin.
    pub parent: VertexId,
    /// The cumulative weight of the best known path from the origin.
    pub total_weight: Weight,
}

/// Routes from an origin to every vertex reachable from it.
/// The origin never has a route since it has no predecessor.
#[derive(Debug, Clone)]
pub struct RouteTable<VertexId> {
    origin: VertexId,
    routes: FxHashMap<VertexId, Route<VertexId>>,
}

impl<VertexId: Eq + Hash> PartialEq for RouteTable<VertexId> {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin && self.routes == other.routes
    }
}

impl<VertexId: Eq + Hash> RouteTable<VertexId> {
    pub(crate) fn new(origin: VertexId) -> Self {
        Self {
            origin,
            routes: FxHashMap::default(),
        }
    }

    pub(crate) fn insert(&mut self, vertex: VertexId, route: Route<VertexId>) {
        debug_assert!(vertex != self.origin);
        self.routes.insert(vertex, route);
    }

    pub fn origin(&self) -> &VertexId {
        &self.origin
    }

    pub fn get(&self, vertex: &VertexId) -> Option<&Route<VertexId>> {
        self.routes.get(vertex)
    }

    pub fn parent(&self, vertex: &VertexId) -> Option<&VertexId> {
        self.get(vertex).map(|route| &route.parent)
    }

    /// Gets the shortest distance from the origin to the vertex, zero for the origin itself.
    /// Returns None if the vertex is not reachable.
    pub fn total_weight(&self, vertex: &VertexId) -> Option<Weight> {
        if *vertex == self.origin {
            Some(Weight::ZERO)
        } else {
            self.get(vertex).map(|route| route.total_weight)
        }
    }

    /// Returns true if the vertex is the origin or if it can be reached from the origin.
    pub fn contains(&self, vertex: &VertexId) -> bool {
        *vertex == self.origin || self.routes.contains_key(vertex)
    }

    /// Number of vertices reached from the origin, the origin excluded.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VertexId, &Route<VertexId>)> {
        self.routes.iter()
    }
}

/// Ordered sequence of vertices from start to finish, never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<VertexId> {
    nodes: Vec<VertexId>,
    weight: Weight,
}

impl<VertexId: PartialEq> Path<VertexId> {
    pub fn nodes(&self) -> &[VertexId] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<VertexId> {
        self.nodes
    }

    /// Total weight of the edges of the path.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn start(&self) -> &VertexId {
        &self.nodes[0]
    }

    pub fn finish(&self) -> &VertexId {
        &self.nodes[self.nodes.len() - 1]
    }

    /// Number of vertices of the path.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Gets an iterator over the directed edges (start vertex, end vertex) of the path.
    pub fn edges(&self) -> impl DoubleEndedIterator<Item = (&VertexId, &VertexId)> {
        self.nodes.windows(2).map(|window| (&window[0], &window[1]))
    }

    /// Returns true only if the directed edge is traversed by the path.
    pub fn contains_edge(&self, from: &VertexId, to: &VertexId) -> bool {
        self.edges().any(|(start, end)| start == from && end == to)
    }
}

/// Unpacks the path from start to finish following the routes from finish back to the origin.
///
/// The routes are expected to be computed from the start vertex, if finish cannot be reached
/// from start then an [`RouteError::UnreachableNode`] is returned.
pub fn reconstruct<VertexId>(
    routes: &RouteTable<VertexId>,
    start: VertexId,
    finish: VertexId,
) -> Result<Path<VertexId>, RouteError<VertexId>>
where
    VertexId: Debug + Clone + Eq + Hash,
{
    if start == finish {
        return Ok(Path {
            nodes: vec![start],
            weight: Weight::ZERO,
        });
    }

    let Some(weight) = routes.get(&finish).map(|route| route.total_weight) else {
        debug!("Cannot reconstruct path {start:?} -> {finish:?}: no route to {finish:?}");
        return Err(RouteError::UnreachableNode(finish));
    };

    let mut nodes = vec![finish.clone()];
    let mut next = &finish;

    while let Some(route) = routes.get(next) {
        next = &route.parent;
        nodes.push(next.clone());
    }

    if *next != start {
        debug!("Cannot reconstruct path {start:?} -> {finish:?}: routes start at {next:?}");
        return Err(RouteError::UnreachableNode(finish));
    }

    nodes.reverse();
    Ok(Path { nodes, weight })
}
