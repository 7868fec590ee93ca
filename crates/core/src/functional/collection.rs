//! Shape-preserving collection helpers
//!
//! `map`, `filter` and `find` work over a [`Container`], handing the callback
//! each value together with its [`Key`]. The remaining helpers build mappings
//! out of sequences and back.

use super::predicates::prop;
use crate::errors::{Error, Result};
use crate::types::{Container, Dict, Key, Object, Value};

/// Replace every value with `f(value, key)`, keeping the container's shape
pub fn map<T, U, F>(collection: &Container<T>, mut f: F) -> Container<U>
where
    F: FnMut(&T, Key<'_>) -> U,
{
    match collection {
        Container::Seq(items) => Container::Seq(
            items
                .iter()
                .enumerate()
                .map(|(i, value)| f(value, Key::Index(i)))
                .collect(),
        ),
        Container::Map(entries) => Container::Map(
            entries
                .iter()
                .map(|(name, value)| (name.clone(), f(value, Key::Name(name))))
                .collect(),
        ),
    }
}

/// Keep the entries for which `predicate(value, key)` holds, keeping the container's shape
pub fn filter<T, P>(collection: &Container<T>, mut predicate: P) -> Container<T>
where
    T: Clone,
    P: FnMut(&T, Key<'_>) -> bool,
{
    match collection {
        Container::Seq(items) => Container::Seq(
            items
                .iter()
                .enumerate()
                .filter(|(i, value)| predicate(value, Key::Index(*i)))
                .map(|(_, value)| value.clone())
                .collect(),
        ),
        Container::Map(entries) => Container::Map(
            entries
                .iter()
                .filter(|(name, value)| predicate(value, Key::Name(name)))
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
        ),
    }
}

/// Curried [`map`]: fix the callback now, apply it to containers later
pub fn map_with<T, U, F>(f: F) -> impl Fn(&Container<T>) -> Container<U>
where
    F: Fn(&T, Key<'_>) -> U,
{
    move |collection: &Container<T>| map(collection, &f)
}

/// Curried [`filter`]
pub fn filter_with<T, P>(predicate: P) -> impl Fn(&Container<T>) -> Container<T>
where
    T: Clone,
    P: Fn(&T, Key<'_>) -> bool,
{
    move |collection: &Container<T>| filter(collection, &predicate)
}

/// First value in iteration order matching `predicate`, `None` when nothing matches
pub fn find<T, P>(collection: &Container<T>, mut predicate: P) -> Option<&T>
where
    P: FnMut(&T, Key<'_>) -> bool,
{
    collection
        .iter()
        .find(|(key, value)| predicate(value, *key))
        .map(|(_, value)| value)
}

/// Read the property `key` off every element
pub fn pluck(collection: &Container<Value>, key: &str) -> Container<Value> {
    let read = prop(key);
    map(collection, |value, _| read(value))
}

/// Index items by the value of their `prop_name` property.
///
/// The property value is coerced to a key string; items without the property
/// land under `"undefined"`. When two items share a key the later one wins.
pub fn index_by(items: &[Value], prop_name: &str) -> Object {
    index_by_with(items, |item| {
        item.get(prop_name)
            .map_or_else(|| Value::Undefined.to_key_string(), Value::to_key_string)
    })
}

/// Index items by a computed key; later items win on collisions
pub fn index_by_with<T, K, F>(items: &[T], key_of: F) -> Dict<T>
where
    T: Clone,
    K: Into<String>,
    F: Fn(&T) -> K,
{
    let mut result = Dict::new();
    let mut replaced = 0usize;
    for item in items {
        let previous = result.insert(key_of(item).into(), item.clone());
        if previous.is_some() {
            replaced += 1;
        }
    }
    if replaced > 0 {
        tracing::trace!(replaced, "index keys collided, later items kept");
    }
    result
}

/// Build a mapping from parallel key and value sequences.
///
/// With `values`, `keys[i]` maps to `values[i]` and the lengths must match.
/// Without `values`, every element of `keys` must itself be an array
/// `[key, value]`; a missing slot reads as `Undefined`.
pub fn zip_object(keys: &[Value], values: Option<&[Value]>) -> Result<Object> {
    match values {
        Some(values) => {
            if keys.len() != values.len() {
                return Err(Error::length_mismatch(keys.len(), values.len()));
            }
            Ok(keys
                .iter()
                .zip(values)
                .map(|(key, value)| (key.to_key_string(), value.clone()))
                .collect())
        }
        None => keys
            .iter()
            .enumerate()
            .try_fold(Object::new(), |mut memo, (index, item)| {
                let pair = item
                    .as_array()
                    .ok_or_else(|| Error::not_an_array(index, item.to_string()))?;
                let key = pair.first().cloned().unwrap_or_default();
                let value = pair.get(1).cloned().unwrap_or_default();
                memo.insert(key.to_key_string(), value);
                Ok(memo)
            }),
    }
}

/// Key/value pairs of a mapping, in iteration order
pub fn pairs<V: Clone>(object: &Dict<V>) -> Vec<(String, V)> {
    object
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Completely flatten arbitrarily nested arrays
pub fn flatten(array: &[Value]) -> Vec<Value> {
    fn flatten_into(input: &[Value], output: &mut Vec<Value>) {
        for value in input {
            match value {
                Value::Array(nested) => flatten_into(nested, output),
                other => output.push(other.clone()),
            }
        }
    }

    let mut output = Vec::with_capacity(array.len());
    flatten_into(array, &mut output);
    output
}

/// Flatten exactly one level of nesting
pub fn unnest(list: &[Value]) -> Vec<Value> {
    let mut result = Vec::with_capacity(list.len());
    for value in list {
        match value {
            Value::Array(nested) => result.extend(nested.iter().cloned()),
            other => result.push(other.clone()),
        }
    }
    result
}

/// Split an object into single-entry objects and hand each to `callback`
pub fn unroll<U, F>(object: &Object, mut callback: F) -> Vec<U>
where
    F: FnMut(Object) -> U,
{
    object
        .iter()
        .map(|(key, value)| {
            let mut single = Object::new();
            single.insert(key.clone(), value.clone());
            callback(single)
        })
        .collect()
}
