//! Shortest-path tests for the identity-driven Dijkstra

use fixed_binheap::pathfinding::Graph;

/// Grid where moving right costs 1 and moving down costs 2
fn weighted_grid(width: u32, height: u32) -> Graph<(u32, u32), u32> {
    let mut graph = Graph::new();
    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                graph.add_edge((x, y), (x + 1, y), 1);
                graph.add_edge((x + 1, y), (x, y), 1);
            }
            if y + 1 < height {
                graph.add_edge((x, y), (x, y + 1), 2);
                graph.add_edge((x, y + 1), (x, y), 2);
            }
        }
    }
    graph
}

#[test]
fn test_grid_distances() {
    let graph = weighted_grid(10, 10);
    let paths = graph.shortest_paths(&(0, 0)).unwrap();

    for y in 0..10 {
        for x in 0..10 {
            assert_eq!(paths.distance_to(&(x, y)), Some(x + 2 * y));
        }
    }

    let path = paths.path_to(&(9, 9)).unwrap();
    assert_eq!(path.len(), 19);
    assert_eq!(path.first(), Some(&(0, 0)));
    assert_eq!(path.last(), Some(&(9, 9)));
    let cost: u32 = path
        .windows(2)
        .map(|step| if step[0].1 == step[1].1 { 1 } else { 2 })
        .sum();
    assert_eq!(cost, 27);
}

#[test]
fn test_classic_textbook_graph() {
    let mut graph = Graph::new();
    graph.add_edge("s", "t", 10u64);
    graph.add_edge("s", "y", 5);
    graph.add_edge("t", "x", 1);
    graph.add_edge("t", "y", 2);
    graph.add_edge("y", "t", 3);
    graph.add_edge("y", "x", 9);
    graph.add_edge("y", "z", 2);
    graph.add_edge("x", "z", 4);
    graph.add_edge("z", "x", 6);
    graph.add_edge("z", "s", 7);

    let paths = graph.shortest_paths(&"s").unwrap();
    assert_eq!(paths.distance_to(&"s"), Some(0));
    assert_eq!(paths.distance_to(&"t"), Some(8));
    assert_eq!(paths.distance_to(&"x"), Some(9));
    assert_eq!(paths.distance_to(&"y"), Some(5));
    assert_eq!(paths.distance_to(&"z"), Some(7));
    assert_eq!(paths.path_to(&"x"), Some(vec!["s", "y", "t", "x"]));
}

#[test]
fn test_zero_cost_edges_and_parallel_edges() {
    let mut graph = Graph::new();
    graph.add_edge(1, 2, 0u32);
    graph.add_edge(2, 3, 5);
    graph.add_edge(2, 3, 1);
    graph.add_edge(1, 3, 3);

    let paths = graph.shortest_paths(&1).unwrap();
    assert_eq!(paths.distance_to(&3), Some(1));
    assert_eq!(paths.path_to(&3), Some(vec![1, 2, 3]));
}

#[test]
fn test_disconnected_component() {
    let mut graph = Graph::new();
    graph.add_edge('a', 'b', 1u32);
    graph.add_edge('c', 'd', 1);

    let paths = graph.shortest_paths(&'a').unwrap();
    assert_eq!(paths.distance_to(&'b'), Some(1));
    assert_eq!(paths.distance_to(&'c'), None);
    assert_eq!(paths.path_to(&'d'), None);
}
