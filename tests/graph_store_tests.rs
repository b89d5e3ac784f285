use keyed_sssp::graph::{Edge, Graph, KeyedGraph};
use keyed_sssp::Error;

// Test that a fresh graph has no vertices or edges
#[test]
fn test_empty_graph_counts() {
    let graph: KeyedGraph<&str, u32> = KeyedGraph::new();

    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_with_capacity_starts_empty() {
    let graph: KeyedGraph<&str, u32> = KeyedGraph::with_capacity(64);

    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
}

// Test that counts and membership track added vertices
#[test]
fn test_add_vertex_updates_counts() {
    let mut graph = KeyedGraph::new();
    graph
        .add_vertex("A", vec![Edge::new("B", 1u32), Edge::new("D", 4)])
        .unwrap();
    graph.add_vertex("B", vec![Edge::new("A", 2)]).unwrap();

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.has_vertex(&"A"));
    assert!(graph.has_vertex(&"B"));
    // "D" appears only as a destination, so it is not a vertex of the graph
    assert!(!graph.has_vertex(&"D"));
}

#[test]
fn test_vertices_enumerates_all_labels() {
    let mut graph = KeyedGraph::new();
    graph.add_vertex("A", vec![Edge::new("B", 1u32)]).unwrap();
    graph.add_vertex("B", Vec::new()).unwrap();
    graph.add_vertex("C", Vec::new()).unwrap();

    let mut labels: Vec<&str> = graph.vertices().copied().collect();
    labels.sort();
    assert_eq!(labels, vec!["A", "B", "C"]);
}

// Test the replacement semantics of re-adding a label
#[test]
fn test_re_adding_a_vertex_replaces_its_edges() {
    let mut graph = KeyedGraph::new();
    graph
        .add_vertex("A", vec![Edge::new("B", 1u32), Edge::new("C", 2)])
        .unwrap();
    graph.add_vertex("A", vec![Edge::new("D", 7)]).unwrap();

    let edges: Vec<&Edge<&str, u32>> = graph.neighbors(&"A").collect();
    assert_eq!(edges, vec![&Edge::new("D", 7)], "New edge list should supersede the old");
    assert_eq!(graph.vertex_count(), 1);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_neighbors_of_unknown_label_is_empty() {
    let mut graph = KeyedGraph::new();
    graph.add_vertex("A", vec![Edge::new("B", 1u32)]).unwrap();

    assert_eq!(graph.neighbors(&"missing").count(), 0);
}

// Test that negative weights are rejected without mutating the store
#[test]
fn test_negative_weight_is_rejected() {
    let mut graph: KeyedGraph<&str, i32> = KeyedGraph::new();

    let err = graph
        .add_vertex("A", vec![Edge::new("B", -3)])
        .unwrap_err();
    assert!(matches!(err, Error::NegativeWeight { .. }));
    assert!(err.to_string().contains("Negative edge weight"));

    assert!(!graph.has_vertex(&"A"), "Failed insertion should not add the vertex");
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_failed_insertion_keeps_previous_edges() {
    let mut graph: KeyedGraph<&str, i32> = KeyedGraph::new();
    graph.add_vertex("A", vec![Edge::new("B", 2)]).unwrap();

    // The second edge is invalid, so the whole replacement must be dropped
    let result = graph.add_vertex("A", vec![Edge::new("B", 1), Edge::new("C", -1)]);
    assert!(result.is_err());

    let edges: Vec<&Edge<&str, i32>> = graph.neighbors(&"A").collect();
    assert_eq!(edges, vec![&Edge::new("B", 2)], "Previous edges should survive a failed re-add");
}

#[test]
fn test_unsigned_weights_accept_zero() {
    let mut graph = KeyedGraph::new();
    graph.add_vertex("A", vec![Edge::new("B", 0u64)]).unwrap();

    assert_eq!(graph.edge_count(), 1);
}
