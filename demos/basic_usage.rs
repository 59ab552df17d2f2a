//! Basic create -> link -> traverse flow.

use undirected_graph::*;

fn main() -> GraphResult<()> {
    // Create vertices standalone, then register them with the graph
    let mut graph = Graph::new();
    let alice = graph.create_vertex("alice");
    let bob = graph.create_vertex("bob");
    let carol = graph.create_vertex("carol");
    let dave = graph.create_vertex("dave");
    let erin = graph.create_vertex("erin");
    graph.add_vertices([alice, bob, carol, dave, erin]);

    // Link them
    graph.add_edge(alice, bob);
    graph.add_edge(alice, carol);
    graph.add_edge(carol, dave);

    println!(
        "Graph created with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    println!("DFS from alice: {:?}", graph.depth_first_search(alice));
    println!("BFS from alice: {:?}", graph.breadth_first_search(alice));
    println!("erin is unreachable: {:?}", graph.depth_first_search(erin));

    // Bounded traversal with depths
    let params = TraversalParams {
        max_depth: 1,
        ..TraversalParams::new(alice, TraversalOrder::BreadthFirst)
    };
    let result = traverse(&graph, &params)?;
    for id in &result.visited {
        let depth = result.depths.get(id).unwrap_or(&0);
        if let Some(name) = graph.value(*id) {
            println!("  [depth {}] {}", depth, name);
        }
    }

    // Removing a vertex drops its edges, but the record stays readable
    graph.remove_vertex(carol);
    println!(
        "After removing carol: {} edges, carol = {:?}",
        graph.edge_count(),
        graph.value(carol)
    );

    // Strict variants explain what the permissive ones silently skip
    if let Err(e) = graph.try_add_edge(carol, dave) {
        println!("try_add_edge: {}", e);
    }

    Ok(())
}
