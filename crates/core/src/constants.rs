/// Constants used throughout the statetree workspace
// Logging
pub const STATETREE_LOG_VAR: &str = "STATETREE_LOG";
pub const FALLBACK_LOG_VAR: &str = "RUST_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

// Node declaration keys
pub const ABSTRACT_KEY: &str = "abstract";
pub const PARAMS_KEY: &str = "params";

// Key strings produced when coercing non-string values into mapping keys
pub const UNDEFINED_KEY: &str = "undefined";
pub const NULL_KEY: &str = "null";
pub const OBJECT_KEY: &str = "[object Object]";
