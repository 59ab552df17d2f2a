//! Fluent API for building Graph instances.

use crate::types::VertexId;

use super::undirected_graph::next_graph_id;
use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Handles returned by [`vertex`](Self::vertex) are the handles the built
/// graph uses, so edges can be declared before the graph exists.
pub struct GraphBuilder<T> {
    graph_id: u32,
    values: Vec<T>,
    edges: Vec<(VertexId, VertexId)>,
}

impl<T> GraphBuilder<T> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            graph_id: next_graph_id(),
            values: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a member vertex, returns its handle.
    pub fn vertex(&mut self, value: T) -> VertexId {
        let id = VertexId::new(self.graph_id, self.values.len());
        self.values.push(value);
        id
    }

    /// Add a member vertex for each value, in order.
    pub fn vertices(&mut self, values: impl IntoIterator<Item = T>) -> Vec<VertexId> {
        values.into_iter().map(|v| self.vertex(v)).collect()
    }

    /// Add an edge between two vertices.
    pub fn link(&mut self, a: VertexId, b: VertexId) -> &mut Self {
        self.edges.push((a, b));
        self
    }

    /// Connect consecutive vertices: `path(&[a, b, c])` links a-b and b-c.
    pub fn path(&mut self, ids: &[VertexId]) -> &mut Self {
        for pair in ids.windows(2) {
            self.link(pair[0], pair[1]);
        }
        self
    }

    /// Build the final Graph. Edges naming undeclared handles are skipped,
    /// exactly as [`Graph::add_edge`] skips non-members.
    pub fn build(self) -> Graph<T> {
        let mut graph = Graph::with_graph_id(self.graph_id, self.values.len());
        for value in self.values {
            graph.insert_vertex(value);
        }
        for (a, b) in self.edges {
            graph.add_edge(a, b);
        }
        graph
    }
}

impl<T> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
