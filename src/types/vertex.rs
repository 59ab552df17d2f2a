//! Vertex handles and the vertex record.

use serde::Serialize;

use super::AdjacencySet;

/// Stable handle identifying one vertex of one graph.
///
/// Identity is carried by the handle, never by the payload: two vertices
/// holding equal values still have distinct handles. The handle also records
/// which graph issued it, so a graph treats handles from any other graph as
/// absent. The upper 32 bits hold the graph id, the lower 32 the arena index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct VertexId(u64);

impl VertexId {
    pub(crate) fn new(graph: u32, index: usize) -> Self {
        Self((u64::from(graph) << 32) | (index as u64 & 0xFFFF_FFFF))
    }

    pub(crate) fn graph(self) -> u32 {
        (self.0 >> 32) as u32
    }

    pub(crate) fn index(self) -> usize {
        (self.0 & 0xFFFF_FFFF) as usize
    }

    /// The raw numeric value of this handle.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "g{}#{}", self.graph(), self.index())
    }
}

/// One node: a value plus the handles of its neighbors.
///
/// Vertices are passive records. They are created by
/// [`Graph::create_vertex`](crate::graph::Graph::create_vertex) and their
/// adjacency is only ever changed by the graph's edge operations.
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    id: VertexId,
    value: T,
    adjacent: AdjacencySet,
}

impl<T> Vertex<T> {
    pub(crate) fn new(id: VertexId, value: T) -> Self {
        Self::with_adjacent(id, value, AdjacencySet::new())
    }

    pub(crate) fn with_adjacent(id: VertexId, value: T, adjacent: AdjacencySet) -> Self {
        Self {
            id,
            value,
            adjacent,
        }
    }

    /// Handle of this vertex.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// The stored payload.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Mutable access to the stored payload.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Neighbors of this vertex, in the order the edges were established.
    pub fn adjacent(&self) -> &AdjacencySet {
        &self.adjacent
    }

    /// Whether `other` is in this vertex's adjacency set.
    pub fn is_adjacent_to(&self, other: VertexId) -> bool {
        self.adjacent.contains(other)
    }

    /// Whether this vertex has an edge to itself.
    pub fn has_self_loop(&self) -> bool {
        self.adjacent.contains(self.id)
    }

    pub(crate) fn adjacent_mut(&mut self) -> &mut AdjacencySet {
        &mut self.adjacent
    }

    /// Consume the vertex and return its payload.
    pub fn into_value(self) -> T {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_vertex_has_no_neighbors() {
        let v = Vertex::new(VertexId::new(0, 3), "a");
        assert_eq!(v.id().as_u64(), 3);
        assert_eq!(*v.value(), "a");
        assert!(v.adjacent().is_empty());
        assert!(!v.has_self_loop());
    }

    #[test]
    fn initial_adjacency_is_kept() {
        let adjacent: AdjacencySet = [VertexId::new(0, 1), VertexId::new(0, 2)]
            .into_iter()
            .collect();
        let v = Vertex::with_adjacent(VertexId::new(0, 0), 10, adjacent);
        assert!(v.is_adjacent_to(VertexId::new(0, 1)));
        assert!(v.is_adjacent_to(VertexId::new(0, 2)));
        assert_eq!(v.into_value(), 10);
    }

    #[test]
    fn display_names_graph_and_index() {
        assert_eq!(VertexId::new(0, 7).to_string(), "g0#7");
        assert_eq!(VertexId::new(3, 1).to_string(), "g3#1");
    }

    #[test]
    fn graph_and_index_are_separate() {
        let a = VertexId::new(1, 5);
        let b = VertexId::new(2, 5);
        assert_ne!(a, b);
        assert_eq!(a.index(), b.index());
        assert_eq!(a.graph(), 1);
        assert_eq!(b.graph(), 2);
    }
}
