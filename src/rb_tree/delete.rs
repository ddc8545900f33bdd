use core::borrow::Borrow;

use log::{debug, trace};

use super::RbTree;
use crate::{Color, KeyNotFoundError, utils::NIL};

impl<K: Ord> RbTree<K> {
    /// Removes a key from the tree and returns it.
    ///
    /// If the removed node had two children its in-order successor node is relinked
    /// into its position, so handles to every other key stay valid.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to remove, or any borrowed form of it
    ///
    /// # Returns
    ///
    /// * `Result<K, KeyNotFoundError>` - The removed key, or `KeyNotFoundError` if the
    ///   key is not present, in which case the tree is unchanged
    ///
    /// # Examples
    ///
    /// ```
    /// # use rbtree_core::{KeyNotFoundError, RbTree};
    /// let mut tree = RbTree::new();
    /// tree.insert(String::from("alpha")).unwrap();
    ///
    /// assert_eq!(tree.delete("alpha"), Ok(String::from("alpha")));
    /// assert_eq!(tree.delete("alpha"), Err(KeyNotFoundError));
    /// assert!(tree.is_empty());
    /// ```
    pub fn delete<Q>(&mut self, key: &Q) -> Result<K, KeyNotFoundError>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let node = self.find(key);
        if node.is_sentinel() {
            debug!("delete: key is not in the tree, tree unchanged");
            return Err(KeyNotFoundError);
        }

        let removed = self.delete_node(node.0);
        self.len -= 1;

        debug_assert!(
            self.check_invariants().is_ok(),
            "RB tree invariants violated after removal"
        );

        removed.ok_or(KeyNotFoundError)
    }

    /// Unlinks node `z`, rebalances, and releases its slot.
    fn delete_node(&mut self, z: usize) -> Option<K> {
        let z_left = self.nodes[z].left;
        let z_right = self.nodes[z].right;

        let mut removed_color = self.nodes[z].color;
        let x;

        if z_left == NIL {
            x = z_right;
            self.transplant(z, z_right);
        } else if z_right == NIL {
            x = z_left;
            self.transplant(z, z_left);
        } else {
            let y = self.subtree_min(z_right);
            removed_color = self.nodes[y].color;
            x = self.nodes[y].right;

            if self.nodes[y].parent == z {
                // x may be the sentinel; its parent is scratch for the fixup below
                self.nodes[x].parent = y;
            } else {
                self.transplant(y, x);
                self.nodes[y].right = z_right;
                self.nodes[z_right].parent = y;
            }

            self.transplant(z, y);
            self.nodes[y].left = z_left;
            self.nodes[z_left].parent = y;
            self.nodes[y].color = self.nodes[z].color;
        }

        if removed_color == Color::Black {
            self.delete_fixup(x);
        }

        self.nodes.reset_sentinel();
        self.nodes.release(z)
    }

    /// Replaces the subtree rooted at `u` with the subtree rooted at `v`.
    ///
    /// `v.parent` is assigned even when `v` is the sentinel.
    fn transplant(&mut self, u: usize, v: usize) {
        let u_parent = self.nodes[u].parent;

        if u_parent == NIL {
            self.root = v;
        } else if u == self.nodes[u_parent].left {
            self.nodes[u_parent].left = v;
        } else {
            self.nodes[u_parent].right = v;
        }

        self.nodes[v].parent = u_parent;
    }

    /// Restores the red-black properties after a black node was spliced out above `x`.
    ///
    /// `x` carries one extra unit of blackness until it reaches the root or a red node.
    fn delete_fixup(&mut self, mut x: usize) {
        while x != self.root && self.nodes[x].color == Color::Black {
            let parent = self.nodes[x].parent;

            if x == self.nodes[parent].left {
                let mut w = self.nodes[parent].right;

                if self.nodes[w].color == Color::Red {
                    trace!("delete fixup at #{x}: red sibling, rotate parent");
                    self.nodes[w].color = Color::Black;
                    self.nodes[parent].color = Color::Red;
                    self.rotate_left(parent);
                    w = self.nodes[parent].right;
                }

                let near = self.nodes[w].left;
                let far = self.nodes[w].right;
                if self.nodes[near].color == Color::Black && self.nodes[far].color == Color::Black {
                    trace!("delete fixup at #{x}: black nephews, move up");
                    self.nodes[w].color = Color::Red;
                    x = parent;
                } else {
                    if self.nodes[far].color == Color::Black {
                        trace!("delete fixup at #{x}: red near nephew, rotate sibling");
                        self.nodes[near].color = Color::Black;
                        self.nodes[w].color = Color::Red;
                        self.rotate_right(w);
                        w = self.nodes[parent].right;
                    }

                    trace!("delete fixup at #{x}: red far nephew, rotate parent");
                    self.nodes[w].color = self.nodes[parent].color;
                    self.nodes[parent].color = Color::Black;
                    let far = self.nodes[w].right;
                    self.nodes[far].color = Color::Black;
                    self.rotate_left(parent);
                    x = self.root;
                }
            } else {
                let mut w = self.nodes[parent].left;

                if self.nodes[w].color == Color::Red {
                    trace!("delete fixup at #{x}: red sibling, rotate parent");
                    self.nodes[w].color = Color::Black;
                    self.nodes[parent].color = Color::Red;
                    self.rotate_right(parent);
                    w = self.nodes[parent].left;
                }

                let near = self.nodes[w].right;
                let far = self.nodes[w].left;
                if self.nodes[near].color == Color::Black && self.nodes[far].color == Color::Black {
                    trace!("delete fixup at #{x}: black nephews, move up");
                    self.nodes[w].color = Color::Red;
                    x = parent;
                } else {
                    if self.nodes[far].color == Color::Black {
                        trace!("delete fixup at #{x}: red near nephew, rotate sibling");
                        self.nodes[near].color = Color::Black;
                        self.nodes[w].color = Color::Red;
                        self.rotate_left(w);
                        w = self.nodes[parent].left;
                    }

                    trace!("delete fixup at #{x}: red far nephew, rotate parent");
                    self.nodes[w].color = self.nodes[parent].color;
                    self.nodes[parent].color = Color::Black;
                    let far = self.nodes[w].left;
                    self.nodes[far].color = Color::Black;
                    self.rotate_right(parent);
                    x = self.root;
                }
            }
        }

        self.nodes[x].color = Color::Black;
    }
}
