use std::collections::BTreeSet;

use rbtree_core::{DuplicateKeyError, FloatRbTree, KeyNotFoundError, OrderedFloat, RbTree};

/// Operations applied to both the tree and the model set.
#[derive(proptest_derive::Arbitrary, Debug, Clone, Copy)]
enum TreeOperation {
    Insert(#[proptest(strategy = "0u16..512")] u16),
    Delete(#[proptest(strategy = "0u16..512")] u16),
}

fn keys_ascending(tree: &RbTree<u16>) -> Vec<u16> {
    let mut keys = Vec::with_capacity(tree.len());
    let mut node = tree.minimum();
    while let Some(&key) = tree.key(node) {
        keys.push(key);
        node = tree.successor(node);
    }
    keys
}

fn keys_descending(tree: &RbTree<u16>) -> Vec<u16> {
    let mut keys = Vec::with_capacity(tree.len());
    let mut node = tree.maximum();
    while let Some(&key) = tree.key(node) {
        keys.push(key);
        node = tree.predecessor(node);
    }
    keys
}

proptest::proptest! {
    #[test]
    /// Check that the tree behaves like a [`BTreeSet`] under random inserts and
    /// deletes, and that the red-black invariants hold after every single step.
    fn sanity_check(ops: Vec<TreeOperation>) {
        let mut tree = RbTree::new();
        let mut model = BTreeSet::new();

        for op in ops {
            match op {
                TreeOperation::Insert(key) => {
                    let expected = if model.insert(key) { Ok(()) } else { Err(DuplicateKeyError) };
                    proptest::prop_assert_eq!(tree.insert(key).map(|_| ()), expected);
                }
                TreeOperation::Delete(key) => {
                    let expected = if model.remove(&key) { Ok(key) } else { Err(KeyNotFoundError) };
                    proptest::prop_assert_eq!(tree.delete(&key), expected);
                }
            }

            proptest::prop_assert!(tree.check_invariants().is_ok(), "{:?}", tree.check_invariants());
            proptest::prop_assert_eq!(tree.len(), model.len());
        }

        let expected: Vec<u16> = model.iter().copied().collect();
        proptest::prop_assert_eq!(keys_ascending(&tree), expected.clone());

        let mut reversed = expected;
        reversed.reverse();
        proptest::prop_assert_eq!(keys_descending(&tree), reversed);

        proptest::prop_assert_eq!(tree.min_key(), model.first());
        proptest::prop_assert_eq!(tree.max_key(), model.last());
    }

    #[test]
    /// `find` returns a real node exactly for the keys inserted and not deleted since.
    fn membership(inserted in proptest::collection::vec(0u16..256, 0..128),
                  deleted in proptest::collection::vec(0u16..256, 0..128)) {
        let mut tree = RbTree::new();
        let mut model = BTreeSet::new();

        for key in inserted {
            let _ = tree.insert(key);
            model.insert(key);
        }
        for key in deleted {
            let _ = tree.delete(&key);
            model.remove(&key);
        }

        for key in 0u16..256 {
            let node = tree.find(&key);
            proptest::prop_assert_eq!(!node.is_sentinel(), model.contains(&key));
            if model.contains(&key) {
                proptest::prop_assert_eq!(tree.key(node), Some(&key));
            }
        }
    }

    #[test]
    /// Red-black balance keeps the height within `2 * log2(n + 1)`.
    fn height_is_logarithmic(keys in proptest::collection::btree_set(proptest::num::u32::ANY, 1..1024)) {
        let mut tree = RbTree::new();
        for &key in &keys {
            tree.insert(key).unwrap();
        }

        let n = keys.len() as f64;
        let bound = 2.0 * (n + 1.0).log2();
        proptest::prop_assert!(tree.height(tree.root()) as f64 <= bound);
    }
}

#[test]
fn test_float_keys() {
    let mut tree = FloatRbTree::new();
    let inputs = [10.0, 10.5, 11.2, 10.9, 11.5, f64::INFINITY, f64::NEG_INFINITY, f64::NAN];

    for value in inputs {
        tree.insert(OrderedFloat(value)).unwrap();
    }
    assert_eq!(tree.insert(OrderedFloat(f64::NAN)), Err(DuplicateKeyError));

    assert_eq!(tree.min_key(), Some(&OrderedFloat(f64::NEG_INFINITY)));
    // NaN sorts above every other value
    assert!(tree.max_key().is_some_and(|key| key.0.is_nan()));
    assert_eq!(tree.delete(&OrderedFloat(10.9)), Ok(OrderedFloat(10.9)));
    assert!(tree.check_invariants().is_ok());
}

#[test]
fn test_sliding_window() {
    let mut tree = RbTree::new();
    let inputs = [10, 15, 12, 19, 11, 25, 13, 17, 21, 14, 30, 16];

    for (i, &value) in inputs.iter().enumerate() {
        if i >= 5 {
            let expired = inputs[i - 5];
            assert_eq!(tree.delete(&expired), Ok(expired), "failed to expire at step {i}");
        }
        tree.insert(value).unwrap();

        assert!(tree.len() <= 5, "window overflowed at step {i}");
        let window = &inputs[i.saturating_sub(4)..=i];
        assert_eq!(tree.min_key(), window.iter().min());
        assert_eq!(tree.max_key(), window.iter().max());
    }
}
