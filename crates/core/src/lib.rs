//! Core value model, errors, and functional utilities for `statetree`.
//!
//! This crate holds the pieces every other crate in the workspace builds on.
//! Nothing in here keeps state between calls.
//!
//! ## Key Components
//!
//! - **`errors`**: the primary `Error` enum and `Result` alias, plus the
//!   `ResultExt` trait for attaching context.
//! - **`types`**: the dynamic `Value` carried in parameter bags, the
//!   `HostValue` capability trait, and the `Container` shape tag used by the
//!   shape-preserving collection helpers.
//! - **`functional`**: `map`/`filter`/`pick`/`omit`/`merge`, predicate
//!   combinators, composition and currying, and the small object/key
//!   primitives used by the hierarchy resolver.
//! - **`constants`**: shared static names.

pub mod constants;
pub mod errors;
pub mod functional;
pub mod types;

#[cfg(test)]
mod testing;

pub use self::{
    constants::*,
    errors::{Error, Result, ResultExt},
    types::*,
};
