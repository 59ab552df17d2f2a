//! undirected-graph — in-memory undirected graph with DFS/BFS traversal.
//!
//! Vertices live in a per-graph arena and are identified by [`VertexId`]
//! handles, so two vertices holding equal values are still distinct nodes.
//! Edges are symmetric: connecting `a` to `b` always connects `b` to `a`.
//! Mutations that name vertices outside the graph are silent no-ops.
//!
//! ```
//! use undirected_graph::Graph;
//!
//! let mut graph = Graph::new();
//! let a = graph.insert_vertex(1);
//! let b = graph.insert_vertex(2);
//! let c = graph.insert_vertex(3);
//! graph.add_edge(a, b);
//! graph.add_edge(b, c);
//!
//! assert_eq!(graph.breadth_first_search(a), vec![&1, &2, &3]);
//! assert_eq!(graph.depth_first_search(a), vec![&1, &2, &3]);
//! assert!(graph.depth_first_search(None).is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::{CliConfig, OutputFormat};
pub use graph::{
    breadth_first, depth_first, traverse, Graph, GraphBuilder, TraversalOrder, TraversalParams,
    TraversalResult,
};
pub use types::{
    AdjacencySet, GraphError, GraphResult, Vertex, VertexId, DEFAULT_MAX_DEPTH,
    DEFAULT_MAX_RESULTS,
};
