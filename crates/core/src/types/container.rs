//! Shape tag for the shape-preserving collection helpers

use super::value::{Dict, Value};
use crate::errors::{Error, Result};
use std::fmt;

/// A collection that is either an ordered sequence or a key/value mapping.
///
/// `map` and `filter` return the same variant they were given.
#[derive(Debug, Clone, PartialEq)]
pub enum Container<T> {
    Seq(Vec<T>),
    Map(Dict<T>),
}

/// Position of an element inside a [`Container`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    Index(usize),
    Name(&'a str),
}

impl Key<'_> {
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Name(_) => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Index(_) => None,
            Key::Name(name) => Some(name),
        }
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl<T> Container<T> {
    pub fn len(&self) -> usize {
        match self {
            Container::Seq(items) => items.len(),
            Container::Map(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_seq(&self) -> bool {
        matches!(self, Container::Seq(_))
    }

    /// Iterate `(key, value)` entries in order
    pub fn iter(&self) -> Entries<'_, T> {
        match self {
            Container::Seq(items) => Entries::Seq(items.iter().enumerate()),
            Container::Map(map) => Entries::Map(map.iter()),
        }
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.iter().map(|(_, value)| value)
    }

    pub fn into_seq(self) -> Option<Vec<T>> {
        match self {
            Container::Seq(items) => Some(items),
            Container::Map(_) => None,
        }
    }

    pub fn into_map(self) -> Option<Dict<T>> {
        match self {
            Container::Seq(_) => None,
            Container::Map(map) => Some(map),
        }
    }
}

/// Iterator over the entries of a [`Container`]
pub enum Entries<'a, T> {
    Seq(std::iter::Enumerate<std::slice::Iter<'a, T>>),
    Map(indexmap::map::Iter<'a, String, T>),
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (Key<'a>, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Entries::Seq(iter) => iter.next().map(|(i, value)| (Key::Index(i), value)),
            Entries::Map(iter) => iter
                .next()
                .map(|(name, value)| (Key::Name(name.as_str()), value)),
        }
    }
}

impl<'a, T> IntoIterator for &'a Container<T> {
    type Item = (Key<'a>, &'a T);
    type IntoIter = Entries<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<Vec<T>> for Container<T> {
    fn from(items: Vec<T>) -> Self {
        Container::Seq(items)
    }
}

impl<T> From<Dict<T>> for Container<T> {
    fn from(map: Dict<T>) -> Self {
        Container::Map(map)
    }
}

impl TryFrom<Value> for Container<Value> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => Ok(Container::Seq(items)),
            Value::Object(map) => Ok(Container::Map(map)),
            other => Err(Error::type_mismatch("array or object", other.kind().to_string())),
        }
    }
}

impl From<Container<Value>> for Value {
    fn from(container: Container<Value>) -> Self {
        match container {
            Container::Seq(items) => Value::Array(items),
            Container::Map(map) => Value::Object(map),
        }
    }
}
