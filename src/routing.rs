pub mod route;

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashSet;
use tracing::{debug, trace, warn};

use crate::{DirectedGraph, GraphError, Path, Route, RouteError, RouteTable, Weight, reconstruct};

#[derive(Debug, Clone, Copy, Default)]
pub struct SolverConfig {
    /// Maximum total weight of the routes from the origin, vertices that cannot be reached
    /// within this weight are considered unreachable. None for an unbounded search.
    pub max_weight: Option<Weight>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct HeapElement<VertexId> {
    /// Current shortest distance from origin to this vertex.
    distance: Weight,
    vertex: VertexId,
}

// std::BinaryHeap is a max heap, reverse the order to pop the closest vertex first.
impl<VertexId: Ord> Ord for HeapElement<VertexId> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            // closest vertices at the same distance pop by ascending ID
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl<VertexId: Ord> PartialOrd for HeapElement<VertexId> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes the shortest routes from the origin to every vertex reachable from it.
pub fn solve<G: DirectedGraph>(
    graph: &G,
    origin: G::VertexId,
) -> Result<RouteTable<G::VertexId>, RouteError<G::VertexId>> {
    solve_with_config(&SolverConfig::default(), graph, origin)
}

/// Computes the shortest routes from the origin to every vertex reachable from it within the
/// configured maximum weight.
///
/// Vertices are finalized in order of increasing distance from the origin, vertices at the
/// same distance in order of their ID. A route is only replaced by a strictly cheaper one,
/// therefore among routes of equal weight the first discovered is kept.
///
/// Returns an [`RouteError::InvalidGraph`] if a negative, NaN or infinite edge weight is found.
pub fn solve_with_config<G: DirectedGraph>(
    config: &SolverConfig,
    graph: &G,
    origin: G::VertexId,
) -> Result<RouteTable<G::VertexId>, RouteError<G::VertexId>> {
    debug!("Solving routes from {origin:?} with {config:?}");

    // best known route (value) from origin to the vertex (key)
    let mut routes = RouteTable::new(origin.clone());

    // vertices whose shortest distance from origin is final
    let mut visited = FxHashSet::default();

    // priority queue of discovered vertices that may need to be visited
    let mut frontier = BinaryHeap::from([HeapElement {
        distance: Weight::ZERO,
        vertex: origin,
    }]);

    while let Some(element) = frontier.pop() {
        // stale element: the vertex was already reached in a cheaper way
        if !visited.insert(element.vertex.clone()) {
            continue;
        }

        for (vertex_to, weight) in graph.vertex_exiting_edges(&element.vertex) {
            if !weight.is_valid() {
                warn!(
                    "Invalid weight {weight} on edge {:?} -> {vertex_to:?}",
                    element.vertex
                );
                return Err(GraphError::InvalidWeight {
                    from: element.vertex.clone(),
                    to: vertex_to,
                    weight: weight.value(),
                }
                .into());
            }

            if visited.contains(&vertex_to) {
                continue;
            }

            // may overflow to infinity, which still ranks after every finite distance
            let distance = element.distance + weight;
            if config.max_weight.is_some_and(|max_weight| distance > max_weight) {
                continue;
            }

            // check if we can follow the current path to reach the neighbor in a cheaper way
            let is_cheaper = routes
                .get(&vertex_to)
                .is_none_or(|route| distance < route.total_weight);

            if is_cheaper {
                trace!("Relax {vertex_to:?} via {:?} at {distance}", element.vertex);

                routes.insert(
                    vertex_to.clone(),
                    Route {
                        parent: element.vertex.clone(),
                        total_weight: distance,
                    },
                );
                frontier.push(HeapElement {
                    distance,
                    vertex: vertex_to,
                });
            }
        }
    }

    debug!("Solved {} routes from {:?}", routes.len(), routes.origin());
    Ok(routes)
}

/// Computes the shortest path from start to finish.
pub fn shortest_path<G: DirectedGraph>(
    graph: &G,
    start: G::VertexId,
    finish: G::VertexId,
) -> Result<Path<G::VertexId>, RouteError<G::VertexId>> {
    shortest_path_with_config(&SolverConfig::default(), graph, start, finish)
}

/// Computes the shortest path from start to finish, finish is considered unreachable if its
/// distance from start exceeds the configured maximum weight.
pub fn shortest_path_with_config<G: DirectedGraph>(
    config: &SolverConfig,
    graph: &G,
    start: G::VertexId,
    finish: G::VertexId,
) -> Result<Path<G::VertexId>, RouteError<G::VertexId>> {
    debug!("Computing shortest path {start:?} -> {finish:?}");
    let routes = solve_with_config(config, graph, start.clone())?;
    reconstruct(&routes, start, finish)
}
