use crate::{
    Color, NodeRef,
    utils::{NIL, Node, NodeArena},
};

mod delete;
mod insert;
mod query;
mod rotation;
mod validate;

/// An ordered key set backed by a sentinel-based Red-Black tree.
///
/// Search, insertion and deletion run in O(log n). Nodes live in an arena and refer to
/// each other by index, with a single black sentinel slot standing in for every absent
/// child and for the parent of the root. Deleted slots are recycled through a free list.
///
/// Nodes are exposed through [`NodeRef`] handles and a read-only accessor surface
/// ([`key`](Self::key), [`color`](Self::color), [`left`](Self::left),
/// [`right`](Self::right), [`parent`](Self::parent), [`height`](Self::height)) so that
/// renderers and other collaborators can walk the structure without mutating it.
///
/// # Examples
///
/// ```
/// # use rbtree_core::{Color, RbTree};
/// let mut tree = RbTree::new();
/// for key in [8, 18, 5, 15, 17, 25, 40, 80] {
///     tree.insert(key).unwrap();
/// }
///
/// let root = tree.root();
/// assert_eq!(tree.key(root), Some(&17));
/// assert_eq!(tree.color(root), Color::Black);
///
/// assert_eq!(tree.delete(&25), Ok(25));
/// assert!(tree.delete(&100).is_err());
/// assert_eq!(tree.len(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct RbTree<K> {
    /// Node storage, slot 0 is the sentinel
    nodes: NodeArena<K>,

    /// Index of the root node, `NIL` when the tree is empty
    root: usize,

    /// Number of keys currently stored
    len: usize,
}

impl<K> RbTree<K> {
    /// Creates an empty tree.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty tree with arena room for `capacity` keys.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Number of keys that can be inserted before the arena reallocates
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: NodeArena::with_capacity(capacity),
            root: NIL,
            len: 0,
        }
    }

    /// Returns the number of keys in the tree
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no keys
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of node slots the tree can hold without reallocating
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Removes every key, keeping the allocated arena for reuse.
    ///
    /// Every previously returned [`NodeRef`] becomes stale.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = NIL;
        self.len = 0;
    }

    /// Releases unused arena memory.
    ///
    /// Slots freed by deletions stay reserved until the tree is cleared, since live
    /// nodes may sit above them in the arena.
    pub fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit();
    }

    /// Returns the root node, or the sentinel when the tree is empty
    #[inline]
    pub const fn root(&self) -> NodeRef {
        NodeRef(self.root)
    }

    /// Returns the sentinel handle of this tree
    #[inline]
    pub const fn sentinel(&self) -> NodeRef {
        NodeRef::SENTINEL
    }

    /// Returns `true` if `node` is the sentinel
    #[inline]
    pub const fn is_sentinel(&self, node: NodeRef) -> bool {
        node.is_sentinel()
    }

    /// Returns the key stored in `node`.
    ///
    /// The sentinel, released slots and handles from another tree that fall outside
    /// this arena all yield `None`.
    #[inline]
    pub fn key(&self, node: NodeRef) -> Option<&K> {
        self.nodes.get(node.0).and_then(|n| n.key.as_ref())
    }

    /// Returns the color of `node`. The sentinel is always [`Color::Black`].
    #[inline]
    pub fn color(&self, node: NodeRef) -> Color {
        self.nodes.get(node.0).map_or(Color::Black, |n| n.color)
    }

    /// Returns the left child of `node`, or the sentinel if it has none
    #[inline]
    pub fn left(&self, node: NodeRef) -> NodeRef {
        self.link(node, |n| n.left)
    }

    /// Returns the right child of `node`, or the sentinel if it has none
    #[inline]
    pub fn right(&self, node: NodeRef) -> NodeRef {
        self.link(node, |n| n.right)
    }

    /// Returns the parent of `node`, or the sentinel for the root
    #[inline]
    pub fn parent(&self, node: NodeRef) -> NodeRef {
        self.link(node, |n| n.parent)
    }

    /// Returns the height of the subtree rooted at `node`.
    ///
    /// Height counts the nodes on the longest downward path, so the sentinel has
    /// height 0 and a leaf has height 1.
    ///
    /// # Arguments
    ///
    /// * `node` - Root of the subtree to measure
    ///
    /// # Returns
    ///
    /// * `usize` - The subtree height, 0 for the sentinel or a released slot
    pub fn height(&self, node: NodeRef) -> usize {
        if self.is_live(node.0) {
            self.subtree_height(node.0)
        } else {
            0
        }
    }

    fn subtree_height(&self, node: usize) -> usize {
        if node == NIL {
            return 0;
        }
        let left = self.subtree_height(self.nodes[node].left);
        let right = self.subtree_height(self.nodes[node].right);
        left.max(right) + 1
    }

    /// Reads a link of a live node; the sentinel and stale handles link to the sentinel.
    #[inline]
    fn link(&self, node: NodeRef, field: impl Fn(&Node<K>) -> usize) -> NodeRef {
        if node.is_sentinel() {
            return NodeRef::SENTINEL;
        }
        match self.nodes.get(node.0) {
            Some(n) if n.key.is_some() => NodeRef(field(n)),
            _ => NodeRef::SENTINEL,
        }
    }

    /// Returns `true` if `idx` names a slot currently holding a key
    #[inline]
    fn is_live(&self, idx: usize) -> bool {
        idx != NIL && self.nodes.get(idx).is_some_and(|n| n.key.is_some())
    }
}

impl<K> Default for RbTree<K> {
    fn default() -> Self {
        Self::new()
    }
}
