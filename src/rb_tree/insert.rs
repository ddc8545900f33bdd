use core::cmp::Ordering;

use log::{debug, trace};

use super::RbTree;
use crate::{Color, DuplicateKeyError, NodeRef, utils::NIL};

impl<K: Ord> RbTree<K> {
    /// Inserts a key into the tree.
    ///
    /// The new node is linked in as a red leaf and the tree is then rebalanced. If the
    /// key is already present nothing changes and the key is dropped.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to insert
    ///
    /// # Returns
    ///
    /// * `Result<NodeRef, DuplicateKeyError>` - Handle of the new node, or
    ///   `DuplicateKeyError` if the key already exists
    ///
    /// # Examples
    ///
    /// ```
    /// # use rbtree_core::{DuplicateKeyError, RbTree};
    /// let mut tree = RbTree::new();
    /// let node = tree.insert("alpha").unwrap();
    ///
    /// assert_eq!(tree.key(node), Some(&"alpha"));
    /// assert_eq!(tree.insert("alpha"), Err(DuplicateKeyError));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> Result<NodeRef, DuplicateKeyError> {
        let (parent, side) = match self.find_insertion_parent(&key) {
            Ok(slot) => slot,
            Err(existing) => {
                debug!("insert: key already exists at #{existing}, tree unchanged");
                return Err(DuplicateKeyError);
            }
        };

        let node = self.nodes.allocate(key, parent);
        self.link_to_parent(node, parent, side);
        self.len += 1;

        self.insert_fixup(node);

        debug_assert!(
            self.check_invariants().is_ok(),
            "RB tree invariants violated after insertion"
        );

        Ok(NodeRef(node))
    }

    /// Walks down from the root to the leaf position for `key`.
    ///
    /// Returns the would-be parent and which side of it the key belongs on, or the
    /// index of the node already holding `key`.
    fn find_insertion_parent(&self, key: &K) -> Result<(usize, Ordering), usize> {
        let mut parent = NIL;
        let mut side = Ordering::Equal;
        let mut current = self.root;

        while let Some(current_key) = self.nodes[current].key.as_ref() {
            parent = current;
            side = key.cmp(current_key);
            current = match side {
                Ordering::Less => self.nodes[current].left,
                Ordering::Greater => self.nodes[current].right,
                Ordering::Equal => return Err(current),
            };
        }

        Ok((parent, side))
    }

    fn link_to_parent(&mut self, node: usize, parent: usize, side: Ordering) {
        if parent == NIL {
            self.root = node;
        } else if side == Ordering::Less {
            self.nodes[parent].left = node;
        } else {
            self.nodes[parent].right = node;
        }
    }

    /// Restores the red-black properties after `z` was linked in as a red leaf.
    ///
    /// On every iteration `z` is red and the only possible violation is a red parent.
    /// The sentinel parent of the root is black, so the loop never climbs past it.
    fn insert_fixup(&mut self, mut z: usize) {
        while self.nodes[self.nodes[z].parent].color == Color::Red {
            let parent = self.nodes[z].parent;
            let grandparent = self.nodes[parent].parent;

            if parent == self.nodes[grandparent].left {
                let uncle = self.nodes[grandparent].right;

                if self.nodes[uncle].color == Color::Red {
                    trace!("insert fixup at #{z}: red uncle, recolor");
                    self.nodes[parent].color = Color::Black;
                    self.nodes[uncle].color = Color::Black;
                    self.nodes[grandparent].color = Color::Red;
                    z = grandparent;
                } else {
                    if z == self.nodes[parent].right {
                        trace!("insert fixup at #{z}: inner child, rotate parent");
                        z = parent;
                        self.rotate_left(z);
                    }
                    trace!("insert fixup at #{z}: outer child, rotate grandparent");
                    let parent = self.nodes[z].parent;
                    let grandparent = self.nodes[parent].parent;
                    self.nodes[parent].color = Color::Black;
                    self.nodes[grandparent].color = Color::Red;
                    self.rotate_right(grandparent);
                }
            } else {
                let uncle = self.nodes[grandparent].left;

                if self.nodes[uncle].color == Color::Red {
                    trace!("insert fixup at #{z}: red uncle, recolor");
                    self.nodes[parent].color = Color::Black;
                    self.nodes[uncle].color = Color::Black;
                    self.nodes[grandparent].color = Color::Red;
                    z = grandparent;
                } else {
                    if z == self.nodes[parent].left {
                        trace!("insert fixup at #{z}: inner child, rotate parent");
                        z = parent;
                        self.rotate_right(z);
                    }
                    trace!("insert fixup at #{z}: outer child, rotate grandparent");
                    let parent = self.nodes[z].parent;
                    let grandparent = self.nodes[parent].parent;
                    self.nodes[parent].color = Color::Black;
                    self.nodes[grandparent].color = Color::Red;
                    self.rotate_left(grandparent);
                }
            }
        }

        let root = self.root;
        self.nodes[root].color = Color::Black;
    }
}
