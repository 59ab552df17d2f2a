//! Insertion-ordered set of vertex handles.

use super::VertexId;

/// Set of neighbor handles that iterates in insertion order.
///
/// Neighbor lists are short in practice, so membership is a linear scan over
/// a contiguous vector. Keeping insertion order makes traversal order
/// deterministic: neighbors are explored in the order their edges were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencySet {
    members: Vec<VertexId>,
}

impl AdjacencySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of handles in the set.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether `id` is in the set.
    pub fn contains(&self, id: VertexId) -> bool {
        self.members.contains(&id)
    }

    /// Iterate handles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.members.iter().copied()
    }

    /// Handles as a slice, in insertion order.
    pub fn as_slice(&self) -> &[VertexId] {
        &self.members
    }

    /// Copy of the current members, safe to iterate while the set changes.
    pub fn snapshot(&self) -> Vec<VertexId> {
        self.members.clone()
    }

    /// Insert `id`. Returns `false` if it was already present.
    pub(crate) fn insert(&mut self, id: VertexId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.members.push(id);
        true
    }

    /// Remove `id`, keeping the order of the rest. Returns `false` if absent.
    pub(crate) fn remove(&mut self, id: VertexId) -> bool {
        match self.members.iter().position(|&m| m == id) {
            Some(pos) => {
                self.members.remove(pos);
                true
            }
            None => false,
        }
    }
}

impl FromIterator<VertexId> for AdjacencySet {
    fn from_iter<I: IntoIterator<Item = VertexId>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl<'a> IntoIterator for &'a AdjacencySet {
    type Item = VertexId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, VertexId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: usize) -> VertexId {
        VertexId::new(0, n)
    }

    #[test]
    fn insert_is_idempotent() {
        let mut set = AdjacencySet::new();
        assert!(set.insert(id(1)));
        assert!(!set.insert(id(1)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn remove_keeps_order() {
        let mut set: AdjacencySet = [id(3), id(1), id(2)].into_iter().collect();
        assert!(set.remove(id(1)));
        assert!(!set.remove(id(1)));
        assert_eq!(set.as_slice(), &[id(3), id(2)]);
    }

    #[test]
    fn from_iter_deduplicates() {
        let set: AdjacencySet = [id(5), id(5), id(4)].into_iter().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![id(5), id(4)]);
    }

    #[test]
    fn snapshot_is_detached() {
        let mut set: AdjacencySet = [id(0), id(1)].into_iter().collect();
        let snap = set.snapshot();
        for n in &snap {
            set.remove(*n);
        }
        assert!(set.is_empty());
        assert_eq!(snap.len(), 2);
    }
}
