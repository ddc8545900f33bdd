use super::RbTree;
use crate::{Color, InvariantViolation, NodeRef, utils::NIL};

impl<K: Ord> RbTree<K> {
    /// Verifies every red-black and search tree property of the tree.
    ///
    /// Checks that the sentinel and root are black, no red node has a red child,
    /// every root-to-leaf path has the same number of black nodes, keys are strictly
    /// ordered, parent links mirror child links, and the recorded length matches the
    /// number of reachable nodes. Runs in O(n).
    ///
    /// # Returns
    ///
    /// * `Result<usize, InvariantViolation>` - The black height of the tree (black
    ///   nodes on any root-to-leaf path, sentinel excluded), or the first violation found
    ///
    /// # Examples
    ///
    /// ```
    /// # use rbtree_core::RbTree;
    /// let mut tree = RbTree::new();
    /// for key in 0..10 {
    ///     tree.insert(key).unwrap();
    /// }
    /// assert!(tree.check_invariants().is_ok());
    /// ```
    pub fn check_invariants(&self) -> Result<usize, InvariantViolation> {
        let sentinel = &self.nodes[NIL];
        if sentinel.color != Color::Black {
            return Err(InvariantViolation::RedSentinel);
        }
        if sentinel.left != NIL || sentinel.right != NIL {
            return Err(InvariantViolation::SentinelLinks);
        }

        if self.root == NIL {
            return match self.len {
                0 => Ok(0),
                expected => Err(InvariantViolation::LengthMismatch { expected, found: 0 }),
            };
        }

        if self.nodes[self.root].color != Color::Black {
            return Err(InvariantViolation::RedRoot);
        }
        if self.nodes[self.root].parent != NIL {
            return Err(InvariantViolation::BrokenParentLink {
                node: NodeRef(self.root),
            });
        }

        let mut found = 0;
        let black_height = self.verify_subtree(self.root, None, None, &mut found)?;

        if found != self.len {
            return Err(InvariantViolation::LengthMismatch {
                expected: self.len,
                found,
            });
        }
        Ok(black_height)
    }

    /// Checks the subtree at `node` against the exclusive key bounds `lower` and
    /// `upper`, counting its nodes into `found`. Returns its black height.
    fn verify_subtree(
        &self,
        node: usize,
        lower: Option<&K>,
        upper: Option<&K>,
        found: &mut usize,
    ) -> Result<usize, InvariantViolation> {
        if node == NIL {
            return Ok(0);
        }

        let current = &self.nodes[node];
        let Some(key) = current.key.as_ref() else {
            // a released slot is still linked into the tree
            return Err(InvariantViolation::BrokenParentLink {
                node: NodeRef(node),
            });
        };
        *found += 1;

        if lower.is_some_and(|lower| key <= lower) || upper.is_some_and(|upper| key >= upper) {
            return Err(InvariantViolation::OrderViolation {
                node: NodeRef(node),
            });
        }

        for child in [current.left, current.right] {
            if child == NIL {
                continue;
            }
            if self.nodes[child].parent != node {
                return Err(InvariantViolation::BrokenParentLink {
                    node: NodeRef(child),
                });
            }
            if current.color == Color::Red && self.nodes[child].color == Color::Red {
                return Err(InvariantViolation::RedRedEdge {
                    node: NodeRef(node),
                });
            }
        }

        let left_height = self.verify_subtree(current.left, lower, Some(key), found)?;
        let right_height = self.verify_subtree(current.right, Some(key), upper, found)?;

        if left_height != right_height {
            return Err(InvariantViolation::BlackHeightMismatch {
                node: NodeRef(node),
            });
        }

        match current.color {
            Color::Black => Ok(left_height + 1),
            Color::Red => Ok(left_height),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::{Color, InvariantViolation, RbTree};

    fn build(keys: &[i32]) -> RbTree<i32> {
        let mut tree = RbTree::new();
        for &key in keys {
            tree.insert(key).unwrap();
        }
        tree
    }

    #[test]
    fn test_valid_trees_report_black_height() {
        assert_eq!(RbTree::<i32>::new().check_invariants(), Ok(0));
        assert_eq!(build(&[1]).check_invariants(), Ok(1));
        assert_eq!(build(&[2, 1, 3]).check_invariants(), Ok(1));
        assert_eq!(build(&[5, 3, 7, 1]).check_invariants(), Ok(2));
    }

    #[test]
    fn test_detects_red_root() {
        let mut tree = build(&[1]);
        let root = tree.root;
        tree.nodes[root].color = Color::Red;
        assert_eq!(tree.check_invariants(), Err(InvariantViolation::RedRoot));
    }

    #[test]
    fn test_detects_red_sentinel() {
        let mut tree = build(&[1]);
        tree.nodes[0].color = Color::Red;
        assert_eq!(tree.check_invariants(), Err(InvariantViolation::RedSentinel));
    }

    #[test]
    fn test_detects_red_red_edge() {
        let mut tree = build(&[5, 3, 7, 1]);
        let three = tree.find(&3);
        tree.nodes[three.0].color = Color::Red;
        assert_eq!(
            tree.check_invariants(),
            Err(InvariantViolation::RedRedEdge { node: three })
        );
    }

    #[test]
    fn test_detects_black_height_mismatch() {
        let mut tree = build(&[2, 1, 3]);
        let one = tree.find(&1);
        tree.nodes[one.0].color = Color::Black;
        assert_eq!(
            tree.check_invariants(),
            Err(InvariantViolation::BlackHeightMismatch { node: tree.root() })
        );
    }

    #[test]
    fn test_detects_order_violation() {
        let mut tree = build(&[2, 1, 3]);
        let one = tree.find(&1);
        tree.nodes[one.0].key = Some(10);
        assert_eq!(
            tree.check_invariants(),
            Err(InvariantViolation::OrderViolation { node: one })
        );
    }

    #[test]
    fn test_detects_broken_parent_link() {
        let mut tree = build(&[2, 1, 3]);
        let three = tree.find(&3);
        let one = tree.find(&1);
        tree.nodes[three.0].parent = one.0;
        assert_eq!(
            tree.check_invariants(),
            Err(InvariantViolation::BrokenParentLink { node: three })
        );
    }

    #[test]
    fn test_detects_length_mismatch() {
        let mut tree = build(&[2, 1, 3]);
        tree.len = 4;
        assert_eq!(
            tree.check_invariants(),
            Err(InvariantViolation::LengthMismatch {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn test_detects_sentinel_links() {
        let mut tree = build(&[2]);
        tree.nodes[0].left = 1;
        assert_eq!(
            tree.check_invariants(),
            Err(InvariantViolation::SentinelLinks)
        );
    }
}
