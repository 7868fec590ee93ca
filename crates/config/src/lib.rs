//! Option defaulting for statetree
//!
//! Callers pass loosely-typed option bags; this crate fills them in from
//! ordered default layers and turns the result into typed options.

pub mod defaults;
pub mod options;

pub use defaults::defaults;
pub use options::TransitionOptions;
