//! Functional programming utilities for the statetree workspace
//!
//! Pure higher-order helpers over sequences and mappings, predicate
//! combinators, composition and currying, plus the small object/key
//! primitives the hierarchy resolver is built from.
//!
//! Two helpers mutate their input on purpose and say so in their docs:
//! [`objects::merge`] writes into `dst` and [`objects::remove_from`] edits the
//! vector in place. Each has a pure twin ([`objects::merged`],
//! [`objects::without`]).

pub mod collection;
pub mod composition;
pub mod curry;
pub mod objects;
pub mod predicates;

// Re-export commonly used functions
pub use collection::{
    filter, filter_with, find, flatten, index_by, index_by_with, map, map_with, pairs, pluck,
    unnest, unroll, zip_object,
};
pub use composition::{backward_compose, compose, forward_compose, pipe, BoxFn};
pub use curry::{curry, curry_with, Applied, Curried};
pub use objects::{
    array_search, equal_for_keys, extend, filter_by_keys, index_of, inherit, merge, merged,
    object_keys, omit, pick, remove_from, without, Inherited,
};
pub use predicates::{and, eq, identity, is, is_eq, is_null, not, or, parse, pattern, prop, val};

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::collection::*;
    pub use super::composition::*;
    pub use super::curry::*;
    pub use super::objects::*;
    pub use super::predicates::*;
    pub use crate::{compose, pipe};
}
