//! Disjoint-set forest shared between the round controller and its workers.
//!
//! Parents are stored as atomics so that workers can call [`DisjointSet::find`]
//! through a shared reference while scanning edges, compressing paths as they
//! go. Structural merges go through [`DisjointSet::union`], which takes
//! `&mut self`; the borrow checker therefore guarantees no union runs while a
//! scan holds the structure.
//!
//! Between two unions the forest is fixed, so every compression write stores
//! the one root of the tree being walked. Concurrent compressions of
//! overlapping paths can reorder those writes but never lose a link or
//! introduce a cycle.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::graph::VertexId;

pub(crate) struct DisjointSet {
    parents: Vec<AtomicUsize>,
    ranks: Vec<u32>,
    components: usize,
}

impl DisjointSet {
    pub(crate) fn new(vertex_count: usize) -> Self {
        Self {
            parents: (0..vertex_count).map(AtomicUsize::new).collect(),
            ranks: vec![0; vertex_count],
            components: vertex_count,
        }
    }

    pub(crate) const fn components(&self) -> usize {
        self.components
    }

    /// Returns the representative of `vertex`'s component.
    ///
    /// Every node visited on the way is re-pointed directly at the root.
    pub(crate) fn find(&self, vertex: VertexId) -> VertexId {
        let mut root = vertex;
        loop {
            let parent = self.parent(root);
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut current = vertex;
        while current != root {
            let next = self.parent(current);
            if next != root {
                self.parents[current].store(root, Ordering::Release);
            }
            current = next;
        }
        root
    }

    /// Merges the components containing `left` and `right` by rank.
    ///
    /// On equal ranks the root of `left` becomes the parent. Returns `false`
    /// when both already share a component, leaving the count unchanged.
    pub(crate) fn union(&mut self, left: VertexId, right: VertexId) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }

        let left_rank = self.ranks[left_root];
        let right_rank = self.ranks[right_root];
        let (parent, child) = if left_rank < right_rank {
            (right_root, left_root)
        } else {
            (left_root, right_root)
        };

        *self.parents[child].get_mut() = parent;
        if left_rank == right_rank {
            self.ranks[parent] = self.ranks[parent].saturating_add(1);
        }
        self.components = self.components.saturating_sub(1);
        true
    }

    fn parent(&self, vertex: VertexId) -> VertexId {
        self.parents[vertex].load(Ordering::Acquire)
    }

    #[cfg(test)]
    fn rank(&self, vertex: VertexId) -> u32 {
        self.ranks[vertex]
    }
}
