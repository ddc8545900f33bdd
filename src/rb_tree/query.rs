use core::{borrow::Borrow, cmp::Ordering};

use super::RbTree;
use crate::{NodeRef, utils::NIL};

impl<K> RbTree<K> {
    /// Returns the node holding the smallest key, or the sentinel if the tree is empty
    #[inline]
    pub fn minimum(&self) -> NodeRef {
        NodeRef(self.subtree_min(self.root))
    }

    /// Returns the node holding the largest key, or the sentinel if the tree is empty
    #[inline]
    pub fn maximum(&self) -> NodeRef {
        NodeRef(self.subtree_max(self.root))
    }

    /// Returns the leftmost node of the subtree rooted at `node`.
    ///
    /// The sentinel and stale handles yield the sentinel.
    pub fn subtree_minimum(&self, node: NodeRef) -> NodeRef {
        if !self.is_live(node.0) {
            return NodeRef::SENTINEL;
        }
        NodeRef(self.subtree_min(node.0))
    }

    /// Returns the rightmost node of the subtree rooted at `node`.
    ///
    /// The sentinel and stale handles yield the sentinel.
    pub fn subtree_maximum(&self, node: NodeRef) -> NodeRef {
        if !self.is_live(node.0) {
            return NodeRef::SENTINEL;
        }
        NodeRef(self.subtree_max(node.0))
    }

    /// Returns the node holding the next larger key.
    ///
    /// # Arguments
    ///
    /// * `node` - A node of this tree
    ///
    /// # Returns
    ///
    /// * `NodeRef` - The in-order successor, or the sentinel if `node` holds the
    ///   largest key (or is itself the sentinel or stale)
    ///
    /// # Examples
    ///
    /// ```
    /// # use rbtree_core::RbTree;
    /// let mut tree = RbTree::new();
    /// for key in [20, 10, 30] {
    ///     tree.insert(key).unwrap();
    /// }
    ///
    /// let mut keys = vec![];
    /// let mut node = tree.minimum();
    /// while let Some(key) = tree.key(node) {
    ///     keys.push(*key);
    ///     node = tree.successor(node);
    /// }
    /// assert_eq!(keys, [10, 20, 30]);
    /// assert!(tree.successor(tree.maximum()).is_sentinel());
    /// ```
    pub fn successor(&self, node: NodeRef) -> NodeRef {
        let mut x = node.0;
        if !self.is_live(x) {
            return NodeRef::SENTINEL;
        }

        let right = self.nodes[x].right;
        if right != NIL {
            return NodeRef(self.subtree_min(right));
        }

        let mut y = self.nodes[x].parent;
        while y != NIL && x == self.nodes[y].right {
            x = y;
            y = self.nodes[y].parent;
        }
        NodeRef(y)
    }

    /// Returns the node holding the next smaller key.
    ///
    /// # Arguments
    ///
    /// * `node` - A node of this tree
    ///
    /// # Returns
    ///
    /// * `NodeRef` - The in-order predecessor, or the sentinel if `node` holds the
    ///   smallest key (or is itself the sentinel or stale)
    pub fn predecessor(&self, node: NodeRef) -> NodeRef {
        let mut x = node.0;
        if !self.is_live(x) {
            return NodeRef::SENTINEL;
        }

        let left = self.nodes[x].left;
        if left != NIL {
            return NodeRef(self.subtree_max(left));
        }

        let mut y = self.nodes[x].parent;
        while y != NIL && x == self.nodes[y].left {
            x = y;
            y = self.nodes[y].parent;
        }
        NodeRef(y)
    }

    /// Returns the smallest key, or `None` if the tree is empty
    #[inline]
    pub fn min_key(&self) -> Option<&K> {
        self.key(self.minimum())
    }

    /// Returns the largest key, or `None` if the tree is empty
    #[inline]
    pub fn max_key(&self) -> Option<&K> {
        self.key(self.maximum())
    }

    pub(super) fn subtree_min(&self, mut node: usize) -> usize {
        while node != NIL {
            let left = self.nodes[node].left;
            if left == NIL {
                break;
            }
            node = left;
        }
        node
    }

    pub(super) fn subtree_max(&self, mut node: usize) -> usize {
        while node != NIL {
            let right = self.nodes[node].right;
            if right == NIL {
                break;
            }
            node = right;
        }
        node
    }
}

impl<K: Ord> RbTree<K> {
    /// Looks a key up.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to search for, or any borrowed form of it
    ///
    /// # Returns
    ///
    /// * `NodeRef` - The node holding `key`, or the sentinel if it is absent
    ///
    /// # Examples
    ///
    /// ```
    /// # use rbtree_core::RbTree;
    /// let mut tree = RbTree::new();
    /// tree.insert(String::from("beta")).unwrap();
    ///
    /// let node = tree.find("beta");
    /// assert_eq!(tree.key(node).map(String::as_str), Some("beta"));
    /// assert!(tree.find("gamma").is_sentinel());
    /// ```
    pub fn find<Q>(&self, key: &Q) -> NodeRef
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root;

        while let Some(node_key) = self.nodes[current].key.as_ref() {
            current = match key.cmp(node_key.borrow()) {
                Ordering::Equal => return NodeRef(current),
                Ordering::Less => self.nodes[current].left,
                Ordering::Greater => self.nodes[current].right,
            };
        }
        NodeRef::SENTINEL
    }

    /// Returns `true` if the tree contains `key`
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        !self.find(key).is_sentinel()
    }
}
