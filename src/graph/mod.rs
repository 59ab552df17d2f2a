//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod traversal;
pub mod undirected_graph;

pub use builder::GraphBuilder;
pub use traversal::{
    breadth_first, depth_first, traverse, TraversalOrder, TraversalParams, TraversalResult,
};
pub use undirected_graph::Graph;
