//! Typed transition options

use crate::defaults::defaults;
use serde::{Deserialize, Serialize};
use statetree_core::types::{Object, Value};
use statetree_core::{Result, ResultExt};

/// How a transition treats parameters and already-active states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionOptions {
    /// Carry parameter values over from the current state
    pub inherit: bool,
    /// Re-enter every state on the target path even if its params are unchanged
    pub reload: bool,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            inherit: true,
            reload: false,
        }
    }
}

impl TransitionOptions {
    /// The lowest default layer, also the set of recognised option keys
    pub fn builtin_defaults() -> Object {
        let builtin = Self::default();
        let mut layer = Object::new();
        layer.insert("inherit".to_string(), Value::from(builtin.inherit));
        layer.insert("reload".to_string(), Value::from(builtin.reload));
        layer
    }

    /// Resolve options from an untyped bag against the built-in defaults
    pub fn from_object(opts: &Object) -> Result<Self> {
        Self::from_layers(opts, &[])
    }

    /// Resolve options with caller default layers ahead of the built-in one.
    ///
    /// Earlier layers win over later ones; a defined key of `opts` wins over
    /// every layer. Keys that are not options are ignored.
    pub fn from_layers(opts: &Object, layers: &[&Object]) -> Result<Self> {
        let builtin = Self::builtin_defaults();
        let mut stack = layers.to_vec();
        stack.push(&builtin);

        let resolved = defaults(opts, &stack);
        let json = serde_json::Value::from(Value::Object(resolved));
        let options: Self = serde_json::from_value(json).context("invalid transition options")?;
        tracing::debug!(
            inherit = options.inherit,
            reload = options.reload,
            "resolved transition options"
        );
        Ok(options)
    }
}
