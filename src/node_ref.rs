use core::fmt;

/// Handle to a node slot inside an [`RbTree`](crate::RbTree).
///
/// Handles are plain arena indices. They carry no borrow of the tree, so they can be
/// held across mutations: a handle returned for some key keeps naming that key's
/// node until that key is deleted, even when other deletions restructure the tree
/// around it. After its key is deleted the slot may be reused by a later insertion.
///
/// [`NodeRef::SENTINEL`] is the distinguished handle of the tree's black sentinel.
/// Queries return it to signal "not found", "empty" or "no neighbour".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeRef(pub(crate) usize);

impl NodeRef {
    /// The sentinel handle, standing for every absent child and the root's parent
    pub const SENTINEL: NodeRef = NodeRef(0);

    /// Returns `true` if this handle names the sentinel
    #[inline]
    pub const fn is_sentinel(self) -> bool {
        self.0 == Self::SENTINEL.0
    }

    /// Returns `Some(self)` for a real node and `None` for the sentinel
    ///
    /// # Examples
    ///
    /// ```
    /// # use rbtree_core::RbTree;
    /// let mut tree = RbTree::new();
    /// tree.insert(7).unwrap();
    ///
    /// assert!(tree.find(&7).get().is_some());
    /// assert!(tree.find(&8).get().is_none());
    /// ```
    #[inline]
    pub const fn get(self) -> Option<NodeRef> {
        if self.is_sentinel() { None } else { Some(self) }
    }

    /// Raw arena index of the node
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl Default for NodeRef {
    fn default() -> Self {
        Self::SENTINEL
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sentinel() {
            f.write_str("nil")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}
