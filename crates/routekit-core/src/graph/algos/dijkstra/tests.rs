use super::*;
use crate::graph::algos::floyd_warshall::all_pairs_shortest_paths;
use crate::graph::GraphBuilder;

/// Directed adjacency from the standalone Dijkstra script
fn script_graph() -> Graph {
    GraphBuilder::labelled(["A", "B", "C", "D"])
        .directed(true)
        .labelled_edge("A", "B", 3.0)
        .labelled_edge("A", "C", 1.0)
        .labelled_edge("B", "D", 2.0)
        .labelled_edge("C", "B", 1.0)
        .labelled_edge("C", "D", 4.0)
        .build()
        .unwrap()
}

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let near = HeapEntry {
        node: 4,
        distance: 1.0,
    };
    let far = HeapEntry {
        node: 0,
        distance: 2.5,
    };
    assert_eq!(near.cmp(&far), Ordering::Less);
    assert_eq!(far.cmp(&near), Ordering::Greater);

    let mut heap = BinaryHeap::new();
    heap.push(Reverse(far));
    heap.push(Reverse(near));
    assert_eq!(heap.pop().map(|Reverse(e)| e.node), Some(4));
}

#[test]
fn test_script_graph_from_a() {
    let graph = script_graph();
    let a = graph.resolve("A").unwrap();
    let result = shortest_paths_from(&graph, a).unwrap();

    // B=2 and D=4, not 3 and 5: C->B (1) makes A->C->B cheaper than A->B (3)
    assert_eq!(result.distances, vec![0.0, 2.0, 1.0, 4.0]);
    assert_eq!(result.source, a);
}

#[test]
fn test_unreached_nodes_stay_infinite() {
    let graph = script_graph();
    let d = graph.resolve("D").unwrap();
    let result = shortest_paths_from(&graph, d).unwrap();

    assert_eq!(result.distance(d), 0.0);
    assert_eq!(result.reachable_count(), 1);
    assert!(!result.is_reachable(graph.resolve("A").unwrap()));
}

#[test]
fn test_negative_weight_rejected() {
    let graph = GraphBuilder::new(3)
        .directed(true)
        .allow_negative_weights(true)
        .edge(0, 1, 2.0)
        .edge(1, 2, -1.0)
        .build()
        .unwrap();

    let err = shortest_paths_from(&graph, 0).unwrap_err();
    assert!(matches!(
        err,
        RouteError::NegativeWeight {
            from: 1,
            to: 2,
            ..
        }
    ));
}

#[test]
fn test_empty_graph_rejected() {
    let graph = Graph::from_edges(0, &[], false).unwrap();
    assert!(matches!(
        shortest_paths_from(&graph, 0),
        Err(RouteError::EmptyGraph { .. })
    ));
}

#[test]
fn test_unknown_source_rejected() {
    let graph = script_graph();
    assert!(matches!(
        shortest_paths_from(&graph, 4),
        Err(RouteError::UnknownNode(_))
    ));
}

#[test]
fn test_zero_weight_edges() {
    let graph = Graph::from_edges(3, &[(0, 1, 0.0), (1, 2, 0.0)], false).unwrap();
    let result = shortest_paths_from(&graph, 2).unwrap();
    assert_eq!(result.distances, vec![0.0, 0.0, 0.0]);
}

#[test]
fn test_matches_floyd_warshall_rows() {
    let graphs = [
        script_graph(),
        Graph::from_edges(
            6,
            &[
                (0, 1, 7.0),
                (0, 2, 9.0),
                (0, 5, 14.0),
                (1, 2, 10.0),
                (1, 3, 15.0),
                (2, 3, 11.0),
                (2, 5, 2.0),
                (3, 4, 6.0),
                (4, 5, 9.0),
            ],
            false,
        )
        .unwrap(),
        Graph::from_edges(5, &[(0, 1, 1.5), (1, 0, 0.5), (3, 4, 2.0)], true).unwrap(),
    ];

    for graph in &graphs {
        let all_pairs = all_pairs_shortest_paths(graph);
        for source in graph.nodes() {
            let single = shortest_paths_from(graph, source).unwrap();
            assert_eq!(
                single.distances.as_slice(),
                all_pairs.distances.row(source),
                "source {}",
                source
            );
        }
    }
}
