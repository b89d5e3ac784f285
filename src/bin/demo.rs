use keyed_sssp::{Dijkstra, Edge, KeyedGraph, ShortestPathAlgorithm};

fn main() -> keyed_sssp::Result<()> {
    // Initialize logging
    env_logger::init();

    // Reference graph: undirected edges encoded one directed edge each way
    let mut graph = KeyedGraph::new();
    graph.add_vertex("A", vec![Edge::new("B", 1u32), Edge::new("C", 4)])?;
    graph.add_vertex(
        "B",
        vec![Edge::new("A", 1), Edge::new("C", 2), Edge::new("D", 5)],
    )?;
    graph.add_vertex(
        "C",
        vec![Edge::new("A", 4), Edge::new("B", 2), Edge::new("D", 1)],
    )?;
    graph.add_vertex("D", vec![Edge::new("B", 5), Edge::new("C", 1)])?;

    let result = Dijkstra::new().compute_shortest_paths(&graph, &"A")?;

    println!("Shortest path tree: {:?}", result.predecessors);
    println!("Shortest distances from vertex A: {:?}", result.distances);

    Ok(())
}
