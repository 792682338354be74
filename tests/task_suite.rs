//! Task suite tests: the nine algorithms and the registry dispatcher.

use std::collections::BTreeSet;

use flatgraph::graph::Graph;
use flatgraph::tasks::{self, TaskOutput, Topology, TASKS};
use flatgraph::types::error::GraphError;

fn directed_weighted(edges: &[(&str, &str, &str)]) -> Graph {
    let mut graph = Graph::new();
    for &(from, to, price) in edges {
        graph.add_edge(from, to, Some(price)).unwrap();
    }
    graph
}

fn directed_unweighted(edges: &[(&str, &str)]) -> Graph {
    let mut graph = Graph::from_attributes("directed", "not_weighted").unwrap();
    for &(from, to) in edges {
        graph.add_edge(from, to, None).unwrap();
    }
    graph
}

fn undirected_weighted(edges: &[(&str, &str, &str)]) -> Graph {
    let mut graph = Graph::from_attributes("not_directed", "weighted").unwrap();
    for &(from, to, price) in edges {
        graph.add_edge(from, to, Some(price)).unwrap();
    }
    graph
}

fn names(set: &BTreeSet<String>) -> Vec<&str> {
    set.iter().map(String::as_str).collect()
}

// ==================== Task 1: Out-Degree Dominators ====================

#[test]
fn test_out_degree_dominators() {
    let graph = directed_unweighted(&[("a", "b"), ("a", "c"), ("b", "c")]);

    let over_c = tasks::out_degree_dominators(&graph, "c").unwrap();
    assert_eq!(names(&over_c), vec!["a", "b"]);

    let over_b = tasks::out_degree_dominators(&graph, "b").unwrap();
    assert_eq!(names(&over_b), vec!["a"]);

    let over_a = tasks::out_degree_dominators(&graph, "a").unwrap();
    assert!(over_a.is_empty());
}

#[test]
fn test_out_degree_dominators_requires_directed() {
    let graph = undirected_weighted(&[("a", "b", "1")]);
    assert!(matches!(
        tasks::out_degree_dominators(&graph, "a").unwrap_err(),
        GraphError::RequiresDirected
    ));
}

#[test]
fn test_out_degree_dominators_unknown_vertex() {
    let graph = directed_unweighted(&[("a", "b")]);
    assert!(matches!(
        tasks::out_degree_dominators(&graph, "nope").unwrap_err(),
        GraphError::VertexNotFound(_)
    ));
}

// ==================== Task 2: Non-Neighbors ====================

#[test]
fn test_non_neighbors() {
    let mut graph = undirected_weighted(&[("a", "b", "1")]);
    graph.add_vertex("c").unwrap();
    graph.add_vertex("d").unwrap();

    let rest = tasks::non_neighbors(&graph, "a").unwrap();
    assert_eq!(names(&rest), vec!["c", "d"]);
}

#[test]
fn test_non_neighbors_requires_undirected() {
    let graph = directed_unweighted(&[("a", "b")]);
    assert!(matches!(
        tasks::non_neighbors(&graph, "a").unwrap_err(),
        GraphError::RequiresUndirected
    ));
}

// ==================== Task 3: Reciprocal Filter ====================

#[test]
fn test_reciprocal_filter_keeps_mutual_edges() {
    let mut graph = directed_weighted(&[("a", "b", "1"), ("b", "a", "2"), ("a", "c", "3")]);
    graph.add_vertex("island").unwrap();

    let filtered = tasks::reciprocal_filter(&graph).unwrap();

    assert!(filtered.exists_edge("a", "b"));
    assert!(filtered.exists_edge("b", "a"));
    assert!(!filtered.exists_edge("a", "c"));
    // vertices survive even when their edges do not
    assert_eq!(filtered.vertex_count(), 4);
    // the source graph is untouched
    assert!(graph.exists_edge("a", "c"));
}

#[test]
fn test_reciprocal_filter_requires_directed() {
    let graph = undirected_weighted(&[("a", "b", "1")]);
    assert!(matches!(
        tasks::reciprocal_filter(&graph).unwrap_err(),
        GraphError::RequiresDirected
    ));
}

// ==================== Task 4: Tree/Forest Classifier ====================

#[test]
fn test_classifier_cycle_is_neither() {
    let graph = directed_unweighted(&[("a", "b"), ("b", "c"), ("c", "a")]);
    assert_eq!(tasks::classify(&graph).unwrap(), Topology::Neither);
}

#[test]
fn test_classifier_tree() {
    let graph = directed_unweighted(&[("a", "b"), ("a", "c")]);
    assert_eq!(tasks::classify(&graph).unwrap(), Topology::Tree);
}

#[test]
fn test_classifier_forest() {
    let graph = directed_unweighted(&[("a", "b"), ("c", "d")]);
    assert_eq!(tasks::classify(&graph).unwrap(), Topology::Forest);
}

#[test]
fn test_classifier_high_in_degree_is_neither() {
    let graph = directed_unweighted(&[("a", "c"), ("b", "c")]);
    assert_eq!(tasks::classify(&graph).unwrap(), Topology::Neither);
}

#[test]
fn test_classifier_deep_chain_does_not_overflow() {
    // explicit-stack DFS: a long chain must classify fine
    let mut graph = Graph::from_attributes("directed", "not_weighted").unwrap();
    for i in 0..2_000 {
        graph
            .add_edge(&format!("v{}", i), &format!("v{}", i + 1), None)
            .unwrap();
    }
    assert_eq!(tasks::classify(&graph).unwrap(), Topology::Tree);
}

#[test]
fn test_classifier_display_names() {
    assert_eq!(Topology::Tree.to_string(), "tree");
    assert_eq!(Topology::Forest.to_string(), "forest");
    assert_eq!(Topology::Neither.to_string(), "neither");
}

// ==================== Task 5: Equidistant Frontier ====================

#[test]
fn test_equidistant_frontier_on_a_path() {
    let graph = undirected_weighted(&[("a", "b", "1"), ("b", "c", "1")]);
    let frontier = tasks::equidistant_frontier(&graph, "a", "c").unwrap();
    assert_eq!(names(&frontier), vec!["b"]);
}

#[test]
fn test_equidistant_frontier_directed() {
    // d is one hop from both sources; c is only reached from a
    let graph = directed_unweighted(&[("a", "d"), ("b", "d"), ("a", "c")]);
    let frontier = tasks::equidistant_frontier(&graph, "a", "b").unwrap();
    assert_eq!(names(&frontier), vec!["d"]);
}

#[test]
fn test_equidistant_frontier_same_vertex_fails() {
    let graph = directed_unweighted(&[("a", "b")]);
    assert!(matches!(
        tasks::equidistant_frontier(&graph, "a", "a").unwrap_err(),
        GraphError::SameVertex(_)
    ));
}

// ==================== Task 6: Minimum Spanning Tree ====================

#[test]
fn test_mst_triangle() {
    let graph = undirected_weighted(&[("1", "2", "1"), ("2", "3", "2"), ("1", "3", "3")]);
    let tree = tasks::minimum_spanning_tree(&graph).unwrap();

    assert!(!tree.is_directed());
    assert!(tree.is_weighted());
    assert_eq!(tree.vertex_count(), 3);
    assert_eq!(tree.edge_count(), 2);
    assert!(tree.exists_edge("1", "2"));
    assert!(tree.exists_edge("2", "3"));
    assert!(!tree.exists_edge("1", "3"));

    let total: f64 = [("1", "2"), ("2", "3")]
        .iter()
        .map(|(x, y)| {
            tree.edge_price(x, y)
                .unwrap()
                .unwrap()
                .parse::<f64>()
                .unwrap()
        })
        .sum();
    assert_eq!(total, 3.0);
}

#[test]
fn test_mst_requires_undirected_weighted() {
    let graph = directed_weighted(&[("a", "b", "1")]);
    assert!(matches!(
        tasks::minimum_spanning_tree(&graph).unwrap_err(),
        GraphError::RequiresUndirected
    ));

    let mut unweighted = Graph::from_attributes("not_directed", "not_weighted").unwrap();
    unweighted.add_edge("a", "b", None).unwrap();
    assert!(matches!(
        tasks::minimum_spanning_tree(&unweighted).unwrap_err(),
        GraphError::RequiresWeighted
    ));
}

#[test]
fn test_mst_disconnected_fails() {
    let graph = undirected_weighted(&[("a", "b", "1"), ("c", "d", "1")]);
    assert!(matches!(
        tasks::minimum_spanning_tree(&graph).unwrap_err(),
        GraphError::Disconnected
    ));
}

#[test]
fn test_mst_single_vertex() {
    let mut graph = Graph::from_attributes("not_directed", "weighted").unwrap();
    graph.add_vertex("only").unwrap();
    let tree = tasks::minimum_spanning_tree(&graph).unwrap();
    assert_eq!(tree.vertex_count(), 1);
    assert_eq!(tree.edge_count(), 0);
}

// ==================== Task 7: Shortest-Path Counts ====================

#[test]
fn test_shortest_path_counts_with_tie() {
    let graph = directed_weighted(&[
        ("A", "B", "1"),
        ("A", "C", "1"),
        ("B", "D", "1"),
        ("C", "D", "1"),
    ]);
    let counts = tasks::shortest_path_counts(&graph, "A").unwrap();

    assert_eq!(counts["A"], 1);
    assert_eq!(counts["B"], 1);
    assert_eq!(counts["C"], 1);
    assert_eq!(counts["D"], 2);
}

#[test]
fn test_shortest_path_counts_prefers_cheaper_route() {
    // the direct edge A -> C is beaten by A -> B -> C
    let graph = directed_weighted(&[("A", "C", "5"), ("A", "B", "1"), ("B", "C", "1")]);
    let counts = tasks::shortest_path_counts(&graph, "A").unwrap();
    assert_eq!(counts["C"], 1);
}

#[test]
fn test_shortest_path_counts_skips_unreachable() {
    let mut graph = directed_weighted(&[("A", "B", "1")]);
    graph.add_vertex("far").unwrap();
    let counts = tasks::shortest_path_counts(&graph, "A").unwrap();
    assert!(!counts.contains_key("far"));
}

#[test]
fn test_shortest_path_counts_rejects_negative_weight() {
    let graph = directed_weighted(&[("A", "B", "-1")]);
    assert!(matches!(
        tasks::shortest_path_counts(&graph, "A").unwrap_err(),
        GraphError::NegativeWeight { .. }
    ));
}

#[test]
fn test_shortest_path_counts_rejects_non_numeric_price() {
    let graph = directed_weighted(&[("A", "B", "cheap")]);
    assert!(matches!(
        tasks::shortest_path_counts(&graph, "A").unwrap_err(),
        GraphError::NonNumericWeight(_)
    ));
}

// ==================== Task 8: Bounded K-Shortest Paths ====================

#[test]
fn test_k_shortest_paths_enumerates_ties() {
    let graph = directed_weighted(&[
        ("A", "B", "1"),
        ("A", "C", "1"),
        ("B", "D", "1"),
        ("C", "D", "1"),
    ]);

    // enumeration order, not necessarily sorted by length
    let paths = tasks::k_shortest_paths(&graph, "A", "D", 5).unwrap();
    assert_eq!(paths.len(), 2);
    assert!(paths.contains(&"A -> B -> D".to_string()));
    assert!(paths.contains(&"A -> C -> D".to_string()));

    let truncated = tasks::k_shortest_paths(&graph, "A", "D", 1).unwrap();
    assert_eq!(truncated.len(), 1);
}

#[test]
fn test_k_shortest_paths_unreachable_is_empty() {
    let mut graph = directed_weighted(&[("A", "B", "1")]);
    graph.add_vertex("far").unwrap();
    let paths = tasks::k_shortest_paths(&graph, "A", "far", 3).unwrap();
    assert!(paths.is_empty());
}

#[test]
fn test_k_shortest_paths_allows_negative_edges() {
    let graph = directed_weighted(&[("a", "b", "-1"), ("b", "c", "2")]);
    let paths = tasks::k_shortest_paths(&graph, "a", "c", 2).unwrap();
    assert_eq!(paths, vec!["a -> b -> c".to_string()]);
}

#[test]
fn test_k_shortest_paths_detects_negative_cycle() {
    let graph = directed_weighted(&[("a", "b", "1"), ("b", "a", "-2")]);
    assert!(matches!(
        tasks::k_shortest_paths(&graph, "a", "b", 2).unwrap_err(),
        GraphError::NegativeCycle
    ));
}

#[test]
fn test_k_shortest_paths_fractional_weights_settle() {
    // uniform floating-point arithmetic: no spurious negative cycle
    let graph = directed_weighted(&[("a", "b", "0.5"), ("b", "c", "0.25"), ("a", "c", "0.75")]);
    let paths = tasks::k_shortest_paths(&graph, "a", "c", 5).unwrap();
    assert_eq!(paths.len(), 2);
}

// ==================== Task 9: All-Pairs Shortest Paths ====================

#[test]
fn test_all_pairs_reconstructs_paths() {
    let graph = directed_weighted(&[("1", "2", "1"), ("2", "3", "2"), ("1", "3", "10")]);
    let paths = tasks::all_pairs_shortest_paths(&graph).unwrap();

    let one_to_three = &paths[&("1".to_string(), "3".to_string())];
    assert_eq!(one_to_three, &vec!["1".to_string(), "2".to_string(), "3".to_string()]);

    // self pairs carry the trivial path
    assert_eq!(
        paths[&("2".to_string(), "2".to_string())],
        vec!["2".to_string()]
    );

    // unreachable pairs are omitted
    assert!(!paths.contains_key(&("3".to_string(), "1".to_string())));
}

#[test]
fn test_all_pairs_pair_count() {
    let graph = directed_weighted(&[("1", "2", "1"), ("2", "3", "2"), ("1", "3", "10")]);
    let paths = tasks::all_pairs_shortest_paths(&graph).unwrap();
    // (1,1) (1,2) (1,3) (2,2) (2,3) (3,3)
    assert_eq!(paths.len(), 6);
}

#[test]
fn test_all_pairs_requires_weighted() {
    let graph = directed_unweighted(&[("a", "b")]);
    assert!(matches!(
        tasks::all_pairs_shortest_paths(&graph).unwrap_err(),
        GraphError::RequiresWeighted
    ));
}

// ==================== Registry Tests ====================

#[test]
fn test_registry_has_nine_ordered_tasks() {
    assert_eq!(TASKS.len(), 9);
    assert_eq!(TASKS[0].name, "out-degree-dominators");
    assert_eq!(TASKS[5].name, "minimum-spanning-tree");
    assert_eq!(TASKS[8].name, "all-pairs-shortest-paths");
    assert_eq!(TASKS[7].params, &["from", "to", "count"][..]);
}

#[test]
fn test_run_task_dispatches_report() {
    let graph = directed_unweighted(&[("a", "b"), ("b", "c"), ("c", "a")]);
    match tasks::run_task(3, &graph, &[]).unwrap() {
        TaskOutput::Report(report) => assert_eq!(report, "neither"),
        other => panic!("Expected a report, got {:?}", other),
    }
}

#[test]
fn test_run_task_dispatches_graph() {
    let graph = undirected_weighted(&[("1", "2", "1"), ("2", "3", "2"), ("1", "3", "3")]);
    match tasks::run_task(5, &graph, &[]).unwrap() {
        TaskOutput::Graph(tree) => assert_eq!(tree.edge_count(), 2),
        other => panic!("Expected a graph, got {:?}", other),
    }
}

#[test]
fn test_run_task_checks_argument_count() {
    let graph = Graph::new();
    match tasks::run_task(0, &graph, &[]).unwrap_err() {
        GraphError::BadTaskArguments { expected, got, .. } => {
            assert_eq!(expected, 1);
            assert_eq!(got, 0);
        }
        e => panic!("Expected BadTaskArguments, got {:?}", e),
    }
}

#[test]
fn test_run_task_unknown_index() {
    let graph = Graph::new();
    assert!(matches!(
        tasks::run_task(9, &graph, &[]).unwrap_err(),
        GraphError::UnknownTask(9)
    ));
}

#[test]
fn test_run_task_invalid_count_argument() {
    let graph = directed_weighted(&[("a", "b", "1")]);
    assert!(matches!(
        tasks::run_task(7, &graph, &["a", "b", "lots"]).unwrap_err(),
        GraphError::InvalidCount(_)
    ));
}
