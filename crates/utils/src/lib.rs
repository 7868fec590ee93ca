//! Shared utilities for statetree
//!
//! Currently just the tracing setup the other crates and their tests use.

pub mod tracing;

pub use self::tracing::*;
