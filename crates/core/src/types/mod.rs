//! Core data types for `statetree`.
//!
//! ## Organization
//!
//! - **`value`**: the dynamic `Value` carried in parameter bags and the
//!   ordered `Dict`/`Object` mappings built from it
//! - **`host`**: the `HostValue` capability trait (defined-check, loose
//!   equality, deep copy, deep equality)
//! - **`container`**: the `Container` shape tag that lets `map`/`filter`/`find`
//!   preserve sequence-vs-mapping shape

pub mod container;
pub mod host;
pub mod value;

// Re-export all public types for convenient access
pub use container::*;
pub use host::*;
pub use value::*;
