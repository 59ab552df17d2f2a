//! Error types for the undirected graph library.

use thiserror::Error;

use super::VertexId;

/// All errors that can occur in the undirected graph library.
///
/// The permissive graph operations never return these; they are produced by
/// the strict `try_*` variants, bounded traversal, configuration loading and
/// the command-line front end.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Handle was never issued by this graph.
    #[error("Vertex {0} not found")]
    VertexNotFound(VertexId),

    /// Vertex exists but is not currently a member of the graph.
    #[error("Vertex {0} is not a member of the graph")]
    NotAMember(VertexId),

    /// No vertex is registered under this name.
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    /// Vertex name that cannot be used on the command line.
    #[error("Invalid vertex name: {0:?} (names may not contain `-`)")]
    InvalidVertexName(String),

    /// Malformed edge specification on the command line.
    #[error("Invalid edge specification: {0:?} (expected `a-b`)")]
    InvalidEdgeSpec(String),

    /// Traversal order name not recognised.
    #[error("Unknown traversal order: {0} (expected dfs or bfs)")]
    UnknownOrder(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// JSON output could not be produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    /// Process exit code the `ugraph` binary reports for this error.
    ///
    /// 1 I/O, 2 config parse, 3 invalid argument, 4 vertex not found,
    /// 5 output serialization.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Config(_) => 2,
            Self::InvalidVertexName(_) | Self::InvalidEdgeSpec(_) | Self::UnknownOrder(_) => 3,
            Self::UnknownVertex(_) | Self::VertexNotFound(_) | Self::NotAMember(_) => 4,
            Self::Json(_) => 5,
        }
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_has_an_exit_code() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let config = toml::from_str::<toml::Table>("= nope").unwrap_err();
        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let id = VertexId::new(0, 0);

        let cases = [
            (GraphError::Io(io), 1),
            (GraphError::Config(config), 2),
            (GraphError::InvalidVertexName("a-b".into()), 3),
            (GraphError::InvalidEdgeSpec("ab".into()), 3),
            (GraphError::UnknownOrder("dijkstra".into()), 3),
            (GraphError::UnknownVertex("z".into()), 4),
            (GraphError::VertexNotFound(id), 4),
            (GraphError::NotAMember(id), 4),
            (GraphError::Json(json), 5),
        ];
        for (error, code) in cases {
            assert_eq!(error.exit_code(), code, "{error}");
        }
    }
}
