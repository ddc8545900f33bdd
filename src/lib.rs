#![doc = include_str!("../README.md")]
#![no_std]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]

extern crate alloc;

mod utils;

mod color;
pub use color::Color;

mod node_ref;
pub use node_ref::NodeRef;

mod error;
pub use error::{DuplicateKeyError, Error, InvariantViolation, KeyNotFoundError};

mod rb_tree;
pub use rb_tree::RbTree;

pub use ordered_float::OrderedFloat;

/// A tree keyed by floating point numbers.
///
/// Floats are only partially ordered, so keys are wrapped in [`OrderedFloat`], which
/// orders `NaN` above every other value and treats all `NaN`s as equal.
///
/// # Examples
///
/// ```
/// # use rbtree_core::{FloatRbTree, OrderedFloat};
/// let mut tree = FloatRbTree::new();
/// for price in [101.5, 99.25, 100.0] {
///     tree.insert(OrderedFloat(price)).unwrap();
/// }
///
/// assert_eq!(tree.min_key(), Some(&OrderedFloat(99.25)));
/// assert!(tree.contains(&OrderedFloat(100.0)));
/// ```
pub type FloatRbTree<T> = RbTree<OrderedFloat<T>>;
