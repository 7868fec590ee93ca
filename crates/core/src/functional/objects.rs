//! Object and key primitives
//!
//! Everything here returns freshly allocated mappings except [`merge`] and
//! [`remove_from`], which mutate their first argument.

use crate::types::{Dict, HostValue};

/// All keys of `object`, in insertion order
pub fn object_keys<V>(object: &Dict<V>) -> Vec<String> {
    object.keys().cloned().collect()
}

/// A copy of `object` holding only the listed keys; unknown keys are skipped
pub fn pick<V, K>(object: &Dict<V>, keys: &[K]) -> Dict<V>
where
    V: Clone,
    K: AsRef<str>,
{
    object
        .iter()
        .filter(|(key, _)| keys.iter().any(|k| k.as_ref() == key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// A copy of `object` without the listed keys
pub fn omit<V, K>(object: &Dict<V>, keys: &[K]) -> Dict<V>
where
    V: Clone,
    K: AsRef<str>,
{
    object
        .iter()
        .filter(|(key, _)| !keys.iter().any(|k| k.as_ref() == key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Copy every key of `sources` that `dst` does not have yet into `dst`.
///
/// First writer wins: a key already in `dst`, or set by an earlier source,
/// is never overwritten. **Mutates and returns `dst`**; use [`merged`] for a
/// fresh mapping.
pub fn merge<'d, V: Clone>(dst: &'d mut Dict<V>, sources: &[&Dict<V>]) -> &'d mut Dict<V> {
    for source in sources {
        for (key, value) in source.iter() {
            if !dst.contains_key(key) {
                dst.insert(key.clone(), value.clone());
            }
        }
    }
    dst
}

/// Pure form of [`merge`]: first-writer-wins union of `sources`
pub fn merged<V: Clone>(sources: &[&Dict<V>]) -> Dict<V> {
    let mut dst = Dict::new();
    merge(&mut dst, sources);
    dst
}

/// Last-writer-wins union of `sources`.
///
/// A key keeps the position of its first appearance but takes the value of
/// its last one.
pub fn extend<V: Clone>(sources: &[&Dict<V>]) -> Dict<V> {
    let mut dst = Dict::new();
    for source in sources {
        for (key, value) in source.iter() {
            dst.insert(key.clone(), value.clone());
        }
    }
    dst
}

/// A mapping layered over a borrowed parent.
///
/// Own entries shadow the parent's; anything else is looked up in the
/// parent at read time, so the parent is shared rather than copied.
#[derive(Debug, Clone)]
pub struct Inherited<'p, V> {
    parent: &'p Dict<V>,
    own: Dict<V>,
}

/// Layer `extra` over `parent`
pub fn inherit<'p, V: Clone>(parent: &'p Dict<V>, extra: &Dict<V>) -> Inherited<'p, V> {
    Inherited {
        parent,
        own: extra.clone(),
    }
}

impl<'p, V: Clone> Inherited<'p, V> {
    pub fn get(&self, key: &str) -> Option<&V> {
        self.own.get(key).or_else(|| self.parent.get(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.own.contains_key(key) || self.parent.contains_key(key)
    }

    /// Set an own entry; the parent is never written
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        self.own.insert(key.into(), value)
    }

    pub fn own(&self) -> &Dict<V> {
        &self.own
    }

    pub fn parent(&self) -> &'p Dict<V> {
        self.parent
    }

    /// Visible keys: own keys first, then parent keys not shadowed
    pub fn keys(&self) -> Vec<&str> {
        self.own
            .keys()
            .chain(self.parent.keys().filter(|key| !self.own.contains_key(*key)))
            .map(String::as_str)
            .collect()
    }

    /// Collapse the layers into one mapping, own values winning
    pub fn flattened(&self) -> Dict<V> {
        self.keys()
            .into_iter()
            .filter_map(|key| self.get(key).map(|value| (key.to_string(), value.clone())))
            .collect()
    }
}

/// Index of the first element equal to `value` at or after `from_index`.
///
/// A negative `from_index` counts back from the end and clamps at zero.
/// `None` means not found.
pub fn index_of<T: PartialEq>(array: &[T], value: &T, from_index: Option<isize>) -> Option<usize> {
    let len = array.len();
    let start = match from_index.unwrap_or(0) {
        from if from < 0 => len.saturating_sub(from.unsigned_abs()),
        from => from.unsigned_abs(),
    };
    if start >= len {
        return None;
    }
    array[start..]
        .iter()
        .position(|item| item == value)
        .map(|offset| start + offset)
}

/// Alias of [`index_of`]
pub use self::index_of as array_search;

/// Loose comparison of `a` and `b` restricted to `keys`.
///
/// With `keys` as `None` every key of `a` is compared. A key missing from
/// both sides is equal; a key missing from one side equals a nullish value on
/// the other. Stops at the first mismatch.
pub fn equal_for_keys<V: HostValue>(a: &Dict<V>, b: &Dict<V>, keys: Option<&[&str]>) -> bool {
    let matches = |key: &str| match (a.get(key), b.get(key)) {
        (Some(left), Some(right)) => left.loose_eq(right),
        (None, None) => true,
        (Some(present), None) | (None, Some(present)) => present.is_nullish(),
    };

    match keys {
        Some(keys) => keys.iter().all(|key| matches(key)),
        None => a.keys().all(|key| matches(key)),
    }
}

/// The entries of `values` named in `keys` whose value is defined, in `keys` order
pub fn filter_by_keys<V, K>(keys: &[K], values: &Dict<V>) -> Dict<V>
where
    V: HostValue,
    K: AsRef<str>,
{
    let mut filtered = Dict::new();
    for name in keys {
        let name = name.as_ref();
        if let Some(value) = values.get(name).filter(|value| value.is_defined()) {
            filtered.insert(name.to_string(), value.clone());
        }
    }
    filtered
}

/// Curried in-place removal of the first element equal to the argument.
///
/// **Mutates `array`.** Absence is a no-op. The returned closure hands the
/// same vector back so calls can be chained.
pub fn remove_from<'a, T: PartialEq>(array: &'a mut Vec<T>) -> impl FnOnce(&T) -> &'a mut Vec<T> {
    move |obj: &T| {
        if let Some(idx) = array.iter().position(|item| item == obj) {
            array.remove(idx);
        }
        array
    }
}

/// Pure form of [`remove_from`]
pub fn without<T: PartialEq + Clone>(array: &[T], obj: &T) -> Vec<T> {
    let mut copy = array.to_vec();
    remove_from(&mut copy)(obj);
    copy
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{object_from_json, Object, Value};
    use serde_json::json;

    fn object(json: serde_json::Value) -> Object {
        object_from_json(json).unwrap()
    }

    #[test]
    fn test_object_keys_in_insertion_order() {
        let o = object(json!({"z": 1, "a": 2, "m": 3}));
        assert_eq!(object_keys(&o), vec!["z", "a", "m"]);
    }

    #[test]
    fn test_pick_skips_unknown_keys() {
        let o = object(json!({"a": 1, "b": 2, "c": 3}));
        let picked = pick(&o, &["c", "a", "nope"]);
        assert_eq!(picked, object(json!({"a": 1, "c": 3})));
        assert_eq!(object_keys(&picked), vec!["a", "c"]);
    }

    #[test]
    fn test_omit_drops_listed_keys() {
        let o = object(json!({"a": 1, "b": 2, "c": 3}));
        assert_eq!(omit(&o, &["b"]), object(json!({"a": 1, "c": 3})));
        assert_eq!(omit(&o, &[] as &[&str]), o);
    }

    #[test]
    fn test_merge_first_writer_wins() {
        let mut dst = Object::new();
        let first = object(json!({"a": 1}));
        let second = object(json!({"a": 2, "b": 3}));
        merge(&mut dst, &[&first, &second]);
        assert_eq!(dst, object(json!({"a": 1, "b": 3})));
    }

    #[test]
    fn test_merge_keeps_existing_destination_keys() {
        let mut dst = object(json!({"a": "mine"}));
        let source = object(json!({"a": "theirs", "b": "new"}));
        let returned = merge(&mut dst, &[&source]);
        returned.insert("c".to_string(), Value::from(true));
        assert_eq!(dst, object(json!({"a": "mine", "b": "new", "c": true})));
    }

    #[test]
    fn test_merged_leaves_sources_untouched() {
        let first = object(json!({"a": 1}));
        let second = object(json!({"b": 2}));
        let result = merged(&[&first, &second]);
        assert_eq!(result, object(json!({"a": 1, "b": 2})));
        assert_eq!(first, object(json!({"a": 1})));
    }

    #[test]
    fn test_extend_last_writer_wins() {
        let first = object(json!({"a": 1, "b": 1}));
        let second = object(json!({"a": 2}));
        let result = extend(&[&first, &second]);
        assert_eq!(result, object(json!({"a": 2, "b": 1})));
        assert_eq!(object_keys(&result), vec!["a", "b"]);
    }

    #[test]
    fn test_inherit_reads_through_to_parent() {
        let parent = object(json!({"a": 1, "b": 2}));
        let mut child = inherit(&parent, &object(json!({"b": 20, "c": 30})));

        assert_eq!(child.get("a"), Some(&Value::from(1)));
        assert_eq!(child.get("b"), Some(&Value::from(20)));
        assert_eq!(child.get("z"), None);
        assert_eq!(child.keys(), vec!["b", "c", "a"]);

        child.insert("a", Value::from(10));
        assert_eq!(child.get("a"), Some(&Value::from(10)));
        assert_eq!(parent["a"], Value::from(1));
        assert_eq!(child.own().len(), 3);
    }

    #[test]
    fn test_inherit_flattens_like_extend() {
        let parent = object(json!({"a": 1, "b": 2}));
        let extra = object(json!({"b": 3}));
        let flat = inherit(&parent, &extra).flattened();
        assert_eq!(flat, extend(&[&parent, &extra]));
        assert_eq!(object_keys(&flat), vec!["b", "a"]);
    }

    #[test]
    fn test_index_of() {
        let items = vec!["a", "b", "c", "b"];
        assert_eq!(index_of(&items, &"b", None), Some(1));
        assert_eq!(index_of(&items, &"b", Some(2)), Some(3));
        assert_eq!(index_of(&items, &"z", None), None);
        assert_eq!(index_of(&items, &"a", Some(10)), None);
    }

    #[test]
    fn test_index_of_negative_from_index() {
        let items = vec![1, 2, 3, 1];
        assert_eq!(index_of(&items, &1, Some(-1)), Some(3));
        assert_eq!(index_of(&items, &2, Some(-2)), None);
        assert_eq!(index_of(&items, &1, Some(-100)), Some(0));
        assert_eq!(array_search(&items, &3, None), Some(2));
    }

    #[test]
    fn test_index_of_is_strict() {
        let items = vec![Value::from("1")];
        assert_eq!(index_of(&items, &Value::from(1), None), None);
    }

    #[test]
    fn test_equal_for_keys_is_loose() {
        let a = object(json!({"id": 5, "name": "x"}));
        let b = object(json!({"id": "5", "name": "x", "extra": true}));
        assert!(equal_for_keys(&a, &b, None));
        assert!(!equal_for_keys(&b, &a, None));
        assert!(equal_for_keys(&a, &b, Some(&["id"])));
    }

    #[test]
    fn test_equal_for_keys_missing_keys() {
        let a = object(json!({"a": null}));
        let b = Object::new();
        assert!(equal_for_keys(&a, &b, None));
        assert!(equal_for_keys(&b, &b, Some(&["ghost"])));
        let c = object(json!({"a": 0}));
        assert!(!equal_for_keys(&c, &b, None));
    }

    #[test]
    fn test_equal_for_keys_empty_key_list() {
        let a = object(json!({"a": 1}));
        let b = object(json!({"a": 2}));
        assert!(equal_for_keys(&a, &b, Some(&[])));
        assert!(!equal_for_keys(&a, &b, None));
    }

    #[test]
    fn test_filter_by_keys_keeps_defined_values() {
        let mut values = object(json!({"a": 1, "b": null, "c": 3}));
        values.insert("d".to_string(), Value::Undefined);
        let filtered = filter_by_keys(&["c", "b", "d", "missing", "a"], &values);
        assert_eq!(object_keys(&filtered), vec!["c", "b", "a"]);
        assert_eq!(filtered["b"], Value::Null);
    }

    #[test]
    fn test_remove_from_mutates_in_place() {
        let mut items = vec![1, 2, 3, 2];
        remove_from(&mut items)(&2);
        assert_eq!(items, vec![1, 3, 2]);
        let again = remove_from(&mut items)(&9);
        assert_eq!(again, &vec![1, 3, 2]);
    }

    #[test]
    fn test_without_leaves_original() {
        let items = vec!["a", "b"];
        assert_eq!(without(&items, &"a"), vec!["b"]);
        assert_eq!(items, vec!["a", "b"]);
    }
}
