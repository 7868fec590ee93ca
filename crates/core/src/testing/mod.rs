//! Property-based testing generators and laws for the functional core

use crate::functional::prelude::*;
use crate::types::{Object, Value};
use proptest::prelude::*;

/// Property-based test generators
pub mod generators {
    use super::*;
    use proptest::collection::vec;

    /// Scalars that never produce NaN, so equality stays reflexive
    pub fn scalar() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            (-1000i32..1000).prop_map(Value::from),
            "[a-z]{0,6}".prop_map(Value::from),
        ]
    }

    /// Arbitrarily nested arrays of scalars
    pub fn nested() -> impl Strategy<Value = Value> {
        scalar().prop_recursive(4, 64, 6, |inner| {
            vec(inner, 0..6).prop_map(Value::Array)
        })
    }

    /// Small objects drawn from a narrow key alphabet so keys collide often
    pub fn object() -> impl Strategy<Value = Object> {
        vec(("[a-e]{1,2}", scalar()), 0..10)
            .prop_map(|entries| entries.into_iter().collect::<Object>())
    }

    /// An object together with a selection mask over its keys
    pub fn object_with_mask() -> impl Strategy<Value = (Object, Vec<bool>)> {
        object().prop_flat_map(|o| {
            let len = o.len();
            (Just(o), vec(any::<bool>(), len))
        })
    }
}

#[cfg(test)]
mod property_tests {
    use super::generators::*;
    use super::*;
    use proptest::proptest;
    use std::collections::HashSet;

    proptest! {
        /// Flattening twice is the same as flattening once
        #[test]
        fn flatten_is_idempotent(items in proptest::collection::vec(nested(), 0..8)) {
            let once = flatten(&items);
            prop_assert_eq!(flatten(&once), once.clone());
            prop_assert!(once.iter().all(|v| !matches!(v, Value::Array(_))));
        }

        /// pick and omit split the keys of an object with no overlap and no gap
        #[test]
        fn pick_and_omit_partition_keys((o, mask) in object_with_mask()) {
            let chosen: Vec<String> = object_keys(&o)
                .into_iter()
                .zip(mask)
                .filter_map(|(key, keep)| keep.then_some(key))
                .collect();
            let picked = pick(&o, &chosen);
            let omitted = omit(&o, &chosen);

            prop_assert_eq!(picked.len() + omitted.len(), o.len());
            for key in object_keys(&o) {
                prop_assert!(picked.contains_key(&key) != omitted.contains_key(&key));
            }
        }

        /// The first source to mention a key decides its value
        #[test]
        fn merge_first_writer_wins(a in object(), b in object()) {
            let result = merged(&[&a, &b]);
            for (key, value) in &result {
                let expected = a.get(key).or_else(|| b.get(key));
                prop_assert_eq!(Some(value), expected);
            }
            let distinct: HashSet<&String> = a.keys().chain(b.keys()).collect();
            prop_assert_eq!(result.len(), distinct.len());
        }

        /// Rebuilding an object from its pairs yields the same object
        #[test]
        fn pairs_rebuild_the_object(o in object()) {
            let items: Vec<Value> = pairs(&o)
                .into_iter()
                .map(|(key, value)| Value::Array(vec![Value::from(key), value]))
                .collect();
            prop_assert_eq!(zip_object(&items, None).unwrap(), o);
        }

        /// Every object loosely equals itself on all of its keys
        #[test]
        fn equal_for_keys_is_reflexive(o in object()) {
            prop_assert!(equal_for_keys(&o, &o, None));
        }
    }
}
