use std::sync::LazyLock;

use dijkstra_route::WeightedGraph;

pub static SCENARIO_1_GRAPH: LazyLock<WeightedGraph<&'static str>> = LazyLock::new(|| {
    WeightedGraph::try_from_adjacency([
        ("start", vec![("a", 6.0), ("b", 2.0)]),
        ("a", vec![("finish", 1.0)]),
        ("b", vec![("a", 3.0), ("finish", 5.0)]),
    ])
    .unwrap()
});

pub static SCENARIO_2_GRAPH: LazyLock<WeightedGraph<&'static str>> = LazyLock::new(|| {
    WeightedGraph::try_from_adjacency([
        ("start", vec![("a", 5.0), ("c", 2.0)]),
        ("a", vec![("b", 4.0), ("d", 2.0)]),
        ("b", vec![("d", 6.0), ("finish", 3.0)]),
        ("c", vec![("a", 8.0), ("d", 7.0)]),
        ("d", vec![("finish", 1.0)]),
    ])
    .unwrap()
});

pub static SINGLE_NODE_GRAPH: LazyLock<WeightedGraph<&'static str>> = LazyLock::new(|| {
    WeightedGraph::try_from_adjacency([("start", vec![])]).unwrap()
});

// start -> a -> finish, and z that is not connected to anything
pub static DISCONNECTED_GRAPH: LazyLock<WeightedGraph<&'static str>> = LazyLock::new(|| {
    WeightedGraph::try_from_adjacency([
        ("start", vec![("a", 1.5)]),
        ("a", vec![("finish", 2.5)]),
        ("z", vec![]),
    ])
    .unwrap()
});
