//! All data types for the undirected graph library.

pub mod adjacency;
pub mod error;
pub mod vertex;

pub use adjacency::AdjacencySet;
pub use error::{GraphError, GraphResult};
pub use vertex::{Vertex, VertexId};

/// Default maximum depth for bounded traversals.
pub const DEFAULT_MAX_DEPTH: u32 = u32::MAX;

/// Default maximum number of vertices a bounded traversal returns.
pub const DEFAULT_MAX_RESULTS: usize = usize::MAX;
