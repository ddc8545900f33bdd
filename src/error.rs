use crate::NodeRef;

/// Returned by [`RbTree::insert`](crate::RbTree::insert) when the key is already present.
///
/// The insertion is a no-op: the tree is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("key already exists in the tree")]
pub struct DuplicateKeyError;

/// Returned by [`RbTree::delete`](crate::RbTree::delete) when the key is not present.
///
/// The deletion is a no-op: the tree is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("key is not in the tree")]
pub struct KeyNotFoundError;

/// Any recoverable error reported by tree operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Insert of a key already present
    #[error(transparent)]
    DuplicateKey(#[from] DuplicateKeyError),
    /// Delete of a key not present
    #[error(transparent)]
    KeyNotFound(#[from] KeyNotFoundError),
}

/// A broken red-black or search tree property, as reported by
/// [`RbTree::check_invariants`](crate::RbTree::check_invariants).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    /// The root node is red
    #[error("root is red")]
    RedRoot,
    /// The sentinel is red
    #[error("sentinel is red")]
    RedSentinel,
    /// The sentinel's children do not point back at the sentinel
    #[error("sentinel child links are not self-referential")]
    SentinelLinks,
    /// A red node has a red child
    #[error("red node {node} has a red child")]
    RedRedEdge {
        /// The red parent
        node: NodeRef,
    },
    /// The two subtrees of a node have different black heights
    #[error("subtrees of {node} have different black heights")]
    BlackHeightMismatch {
        /// The node whose subtrees disagree
        node: NodeRef,
    },
    /// A node's key is out of order relative to its ancestors
    #[error("key of {node} violates search tree ordering")]
    OrderViolation {
        /// The misplaced node
        node: NodeRef,
    },
    /// A child's parent link does not point at its actual parent
    #[error("parent link of {node} is broken")]
    BrokenParentLink {
        /// The child with the wrong parent link
        node: NodeRef,
    },
    /// The number of reachable nodes differs from the recorded length
    #[error("tree records {expected} keys but {found} are reachable")]
    LengthMismatch {
        /// Recorded number of keys
        expected: usize,
        /// Number of nodes reachable from the root
        found: usize,
    },
}
