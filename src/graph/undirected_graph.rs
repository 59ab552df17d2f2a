//! Core graph structure: a vertex arena plus a membership record.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU32, Ordering};

use log::{debug, trace};

use crate::types::{AdjacencySet, GraphError, GraphResult, Vertex, VertexId};

use super::traversal;

/// Source of per-graph ids stamped into every issued handle.
static NEXT_GRAPH_ID: AtomicU32 = AtomicU32::new(0);

pub(crate) fn next_graph_id() -> u32 {
    NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed)
}

/// Arena slot: the vertex record and whether it is currently a member.
#[derive(Debug, Clone)]
struct Slot<T> {
    vertex: Vertex<T>,
    member: bool,
}

/// An undirected graph over vertices identified by [`VertexId`].
///
/// Every vertex created through the graph lives in its arena for the
/// graph's whole lifetime, whether or not it is currently a member. This
/// lets callers keep reading a vertex after [`remove_vertex`](Self::remove_vertex),
/// while edge operations only ever act on members.
///
/// Mutations with arguments that are not members are silent no-ops. The
/// `try_*` variants report the same conditions as [`GraphError`]s instead.
///
/// Handles issued by another graph are never members of this one. A clone
/// shares its source's id, so handles stay valid across `clone()`.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// Stamped into every handle this graph issues.
    graph_id: u32,
    /// All vertices ever created, indexed by handle.
    slots: Vec<Slot<T>>,
    /// Number of slots flagged as members.
    member_count: usize,
}

impl<T> Graph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a new empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_graph_id(next_graph_id(), capacity)
    }

    /// Graph with a pre-reserved id, for builders that hand out handles early.
    pub(crate) fn with_graph_id(graph_id: u32, capacity: usize) -> Self {
        Self {
            graph_id,
            slots: Vec::with_capacity(capacity),
            member_count: 0,
        }
    }

    // ==================== Vertex creation ====================

    /// Create a standalone vertex. It is not a member until
    /// [`add_vertex`](Self::add_vertex) is called with its handle.
    pub fn create_vertex(&mut self, value: T) -> VertexId {
        let id = self.next_id();
        self.slots.push(Slot {
            vertex: Vertex::new(id, value),
            member: false,
        });
        id
    }

    /// Create a standalone vertex with an initial adjacency set.
    ///
    /// The set is stored as given, without making the listed vertices
    /// adjacent back. Handles this graph never issued are dropped.
    pub fn create_vertex_with_adjacent(
        &mut self,
        value: T,
        adjacent: impl IntoIterator<Item = VertexId>,
    ) -> VertexId {
        let id = self.next_id();
        let known = self.slots.len();
        let graph_id = self.graph_id;
        let adjacent: AdjacencySet = adjacent
            .into_iter()
            .filter(|n| {
                // `id` itself is allowed: it becomes valid once pushed below.
                let valid = n.graph() == graph_id && (n.index() < known || *n == id);
                if !valid {
                    debug!("create_vertex_with_adjacent: dropping unknown neighbor {n}");
                }
                valid
            })
            .collect();
        self.slots.push(Slot {
            vertex: Vertex::with_adjacent(id, value, adjacent),
            member: false,
        });
        id
    }

    /// Create a vertex and add it to the graph in one step.
    pub fn insert_vertex(&mut self, value: T) -> VertexId {
        let id = self.create_vertex(value);
        self.add_vertex(id);
        id
    }

    // ==================== Membership ====================

    /// Add a vertex to the graph. Returns `true` if it was not already a
    /// member. Unknown handles are ignored.
    pub fn add_vertex(&mut self, id: VertexId) -> bool {
        match self.slot_mut(id) {
            Some(slot) if !slot.member => {
                slot.member = true;
                self.member_count += 1;
                true
            }
            Some(_) => false,
            None => {
                debug!("add_vertex ignored: {id} was never created by this graph");
                false
            }
        }
    }

    /// Add every vertex in `ids`, in order, skipping those already present.
    pub fn add_vertices(&mut self, ids: impl IntoIterator<Item = VertexId>) {
        for id in ids {
            self.add_vertex(id);
        }
    }

    /// Whether `id` is currently a member of the graph.
    pub fn contains(&self, id: VertexId) -> bool {
        self.slot(id).is_some_and(|slot| slot.member)
    }

    // ==================== Edges ====================

    /// Connect two member vertices. Returns `true` if the edge is new.
    ///
    /// A no-op when either endpoint is not a member. `add_edge(v, v)` makes
    /// `v` adjacent to itself.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> bool {
        if !self.contains(a) || !self.contains(b) {
            debug!("add_edge ignored: {a} or {b} is not a member");
            return false;
        }
        let inserted = self.slots[a.index()].vertex.adjacent_mut().insert(b);
        self.slots[b.index()].vertex.adjacent_mut().insert(a);
        trace!("add_edge {a} -- {b} (new: {inserted})");
        inserted
    }

    /// Disconnect two member vertices. Returns `true` if an edge was removed.
    ///
    /// A no-op when either endpoint is not a member or no edge exists.
    pub fn remove_edge(&mut self, a: VertexId, b: VertexId) -> bool {
        if !self.contains(a) || !self.contains(b) {
            debug!("remove_edge ignored: {a} or {b} is not a member");
            return false;
        }
        let removed = self.slots[a.index()].vertex.adjacent_mut().remove(b);
        self.slots[b.index()].vertex.adjacent_mut().remove(a);
        trace!("remove_edge {a} -- {b} (removed: {removed})");
        removed
    }

    /// Remove a vertex and every edge incident to it. Returns `true` if the
    /// vertex was a member.
    ///
    /// The vertex record stays readable through [`vertex`](Self::vertex).
    pub fn remove_vertex(&mut self, id: VertexId) -> bool {
        if !self.contains(id) {
            debug!("remove_vertex ignored: {id} is not a member");
            return false;
        }
        // remove_edge mutates this very set, so walk a copy of it.
        let neighbors = self.slots[id.index()].vertex.adjacent().snapshot();
        for neighbor in neighbors {
            self.remove_edge(id, neighbor);
        }
        self.slots[id.index()].member = false;
        self.member_count -= 1;
        trace!("remove_vertex {id}");
        true
    }

    /// Like [`add_edge`](Self::add_edge), but reports why nothing happened.
    pub fn try_add_edge(&mut self, a: VertexId, b: VertexId) -> GraphResult<bool> {
        self.require_member(a)?;
        self.require_member(b)?;
        Ok(self.add_edge(a, b))
    }

    /// Like [`remove_edge`](Self::remove_edge), but reports why nothing happened.
    pub fn try_remove_edge(&mut self, a: VertexId, b: VertexId) -> GraphResult<bool> {
        self.require_member(a)?;
        self.require_member(b)?;
        Ok(self.remove_edge(a, b))
    }

    /// Like [`remove_vertex`](Self::remove_vertex), but fails for non-members.
    pub fn try_remove_vertex(&mut self, id: VertexId) -> GraphResult<()> {
        self.require_member(id)?;
        self.remove_vertex(id);
        Ok(())
    }

    // ==================== Queries ====================

    /// Number of member vertices.
    pub fn vertex_count(&self) -> usize {
        self.member_count
    }

    /// Whether the graph has no members.
    pub fn is_empty(&self) -> bool {
        self.member_count == 0
    }

    /// Number of undirected edges between members. A self-loop counts once.
    pub fn edge_count(&self) -> usize {
        let mut seen: HashSet<(VertexId, VertexId)> = HashSet::new();
        for slot in self.slots.iter().filter(|s| s.member) {
            let u = slot.vertex.id();
            for v in slot.vertex.adjacent() {
                if self.contains(v) {
                    seen.insert((u.min(v), u.max(v)));
                }
            }
        }
        seen.len()
    }

    /// Member handles, in creation order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.slots
            .iter()
            .filter(|slot| slot.member)
            .map(|slot| slot.vertex.id())
    }

    /// The vertex record for `id`, member or not.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.slot(id).map(|slot| &slot.vertex)
    }

    /// The value stored at `id`.
    pub fn value(&self, id: VertexId) -> Option<&T> {
        self.vertex(id).map(Vertex::value)
    }

    /// Mutable access to the value stored at `id`.
    pub fn value_mut(&mut self, id: VertexId) -> Option<&mut T> {
        self.slot_mut(id).map(|slot| slot.vertex.value_mut())
    }

    /// Neighbors of `id` in edge insertion order. Empty for unknown handles.
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        match self.slot(id) {
            Some(slot) => slot.vertex.adjacent().as_slice(),
            None => &[],
        }
    }

    /// Whether `b` is in `a`'s adjacency set.
    pub fn are_adjacent(&self, a: VertexId, b: VertexId) -> bool {
        self.slot(a)
            .is_some_and(|slot| slot.vertex.is_adjacent_to(b))
    }

    /// Degree of `id`, counting only edges to members. A self-loop
    /// contributes 2.
    pub fn degree(&self, id: VertexId) -> Option<usize> {
        self.vertex(id).map(|v| {
            v.adjacent()
                .iter()
                .filter(|&n| self.contains(n))
                .map(|n| if n == id { 2 } else { 1 })
                .sum()
        })
    }

    // ==================== Traversal ====================

    /// Values in depth-first pre-order from `start`.
    ///
    /// Returns an empty sequence when `start` is `None` or unknown.
    pub fn depth_first_search(&self, start: impl Into<Option<VertexId>>) -> Vec<&T> {
        match start.into() {
            Some(start) => self.values_of(traversal::depth_first(self, start)),
            None => Vec::new(),
        }
    }

    /// Values in breadth-first order from `start`.
    ///
    /// Returns an empty sequence when `start` is `None` or unknown, the same
    /// as [`depth_first_search`](Self::depth_first_search).
    pub fn breadth_first_search(&self, start: impl Into<Option<VertexId>>) -> Vec<&T> {
        match start.into() {
            Some(start) => self.values_of(traversal::breadth_first(self, start)),
            None => Vec::new(),
        }
    }

    /// Number of vertex records in the arena, members or not.
    pub(crate) fn arena_len(&self) -> usize {
        self.slots.len()
    }

    fn values_of(&self, ids: Vec<VertexId>) -> Vec<&T> {
        ids.into_iter().filter_map(|id| self.value(id)).collect()
    }

    fn next_id(&self) -> VertexId {
        VertexId::new(self.graph_id, self.slots.len())
    }

    fn slot(&self, id: VertexId) -> Option<&Slot<T>> {
        if id.graph() != self.graph_id {
            return None;
        }
        self.slots.get(id.index())
    }

    fn slot_mut(&mut self, id: VertexId) -> Option<&mut Slot<T>> {
        if id.graph() != self.graph_id {
            return None;
        }
        self.slots.get_mut(id.index())
    }

    fn require_member(&self, id: VertexId) -> GraphResult<()> {
        match self.slot(id) {
            Some(slot) if slot.member => Ok(()),
            Some(_) => Err(GraphError::NotAMember(id)),
            None => Err(GraphError::VertexNotFound(id)),
        }
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}
