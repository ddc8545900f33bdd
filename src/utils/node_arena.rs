use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::Color;

/// Arena index of the sentinel node.
pub(crate) const NIL: usize = 0;

/// A node in the Red-Black tree containing the key and structural information.
#[derive(Debug, Clone)]
pub(crate) struct Node<K> {
    /// The stored key, `None` for the sentinel and for released slots
    pub(crate) key: Option<K>,

    /// Index of parent node in the arena (`NIL` if this is the root)
    pub(crate) parent: usize,

    /// Index of left child node in the arena (`NIL` if no left child)
    pub(crate) left: usize,

    /// Index of right child node in the arena (`NIL` if no right child)
    pub(crate) right: usize,

    /// Color of this node (Red or Black) used for Red-Black tree balancing
    pub(crate) color: Color,
}

impl<K> Node<K> {
    /// A black, keyless node with every link pointing at the sentinel
    const fn vacant() -> Self {
        Self {
            key: None,
            parent: NIL,
            left: NIL,
            right: NIL,
            color: Color::Black,
        }
    }
}

/// Slot storage for tree nodes.
///
/// Slot 0 always holds the sentinel. Released slots are pushed on a LIFO free list
/// and handed out again before the arena grows.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<K> {
    /// All slots, live or released, sentinel first
    nodes: Vec<Node<K>>,

    /// Stack of released slot indices available for allocation
    free_list: Vec<usize>,
}

impl<K> NodeArena<K> {
    /// Creates an arena with room for `capacity` nodes besides the sentinel.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.saturating_add(1));
        nodes.push(Node::vacant());
        Self {
            nodes,
            free_list: Vec::new(),
        }
    }

    /// Number of slots the arena can hold without reallocating, sentinel excluded
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity() - 1
    }

    /// Returns the node in slot `idx`, if the slot exists
    #[inline]
    pub(crate) fn get(&self, idx: usize) -> Option<&Node<K>> {
        self.nodes.get(idx)
    }

    /// Stores a new red node with sentinel children under `parent` and returns its slot.
    pub(crate) fn allocate(&mut self, key: K, parent: usize) -> usize {
        let node = Node {
            key: Some(key),
            parent,
            left: NIL,
            right: NIL,
            color: Color::Red,
        };

        match self.free_list.pop() {
            Some(idx) => {
                self.nodes[idx] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Returns slot `idx` to the free list and hands back the key it held.
    pub(crate) fn release(&mut self, idx: usize) -> Option<K> {
        debug_assert!(idx != NIL, "the sentinel slot is never released");
        let key = core::mem::replace(&mut self.nodes[idx], Node::vacant()).key;
        self.free_list.push(idx);
        key
    }

    /// Restores the sentinel's self links after its fields were used as scratch.
    #[inline]
    pub(crate) fn reset_sentinel(&mut self) {
        self.nodes[NIL] = Node::vacant();
    }

    /// Drops every node except the sentinel, keeping the allocation.
    pub(crate) fn clear(&mut self) {
        self.nodes.truncate(1);
        self.free_list.clear();
        self.reset_sentinel();
    }

    /// Shrinks the arena down to its live slots when nothing has been released.
    pub(crate) fn shrink_to_fit(&mut self) {
        if self.free_list.is_empty() {
            self.nodes.shrink_to_fit();
        }
        self.free_list.shrink_to_fit();
    }
}

impl<K> Index<usize> for NodeArena<K> {
    type Output = Node<K>;

    #[inline]
    fn index(&self, idx: usize) -> &Node<K> {
        &self.nodes[idx]
    }
}

impl<K> IndexMut<usize> for NodeArena<K> {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut Node<K> {
        &mut self.nodes[idx]
    }
}
