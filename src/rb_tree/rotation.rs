use log::trace;

use super::RbTree;
use crate::utils::NIL;

impl<K> RbTree<K> {
    /// Promotes the right child `y` of `x` into `x`'s position.
    ///
    /// `y`'s left subtree becomes `x`'s right subtree. In-order key order is preserved
    /// and colors are left untouched.
    pub(super) fn rotate_left(&mut self, x: usize) {
        let y = self.nodes[x].right;
        debug_assert!(x != NIL && y != NIL, "rotate_left needs a right child");
        trace!("rotate left at #{x}");

        let y_left = self.nodes[y].left;
        self.nodes[x].right = y_left;
        if y_left != NIL {
            self.nodes[y_left].parent = x;
        }

        let x_parent = self.nodes[x].parent;
        self.nodes[y].parent = x_parent;

        if x_parent == NIL {
            self.root = y;
        } else if x == self.nodes[x_parent].left {
            self.nodes[x_parent].left = y;
        } else {
            self.nodes[x_parent].right = y;
        }

        self.nodes[y].left = x;
        self.nodes[x].parent = y;
    }

    /// Promotes the left child `x` of `y` into `y`'s position. Mirror of
    /// [`rotate_left`](Self::rotate_left).
    pub(super) fn rotate_right(&mut self, y: usize) {
        let x = self.nodes[y].left;
        debug_assert!(y != NIL && x != NIL, "rotate_right needs a left child");
        trace!("rotate right at #{y}");

        let x_right = self.nodes[x].right;
        self.nodes[y].left = x_right;
        if x_right != NIL {
            self.nodes[x_right].parent = y;
        }

        let y_parent = self.nodes[y].parent;
        self.nodes[x].parent = y_parent;

        if y_parent == NIL {
            self.root = x;
        } else if y == self.nodes[y_parent].left {
            self.nodes[y_parent].left = x;
        } else {
            self.nodes[y_parent].right = x;
        }

        self.nodes[x].right = y;
        self.nodes[y].parent = x;
    }
}
