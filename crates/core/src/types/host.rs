//! Host primitives the functional core depends on
//!
//! The collection helpers never inspect values directly. Everything they need
//! to know about a value (is it defined, is it nullish, do two values compare
//! loosely equal) goes through [`HostValue`], so callers can run the helpers
//! over `Value`, plain JSON, `Option<T>`, or scalar std types alike. Deep copy
//! and deep equality are `Clone` and `PartialEq`.

use super::value::Value;

/// Capability set required of values stored in mappings handled by the core
pub trait HostValue: Clone + PartialEq {
    /// False only for the "absent" sentinel of the representation
    fn is_defined(&self) -> bool {
        true
    }

    /// True for values that compare loosely equal to an absent value
    fn is_nullish(&self) -> bool {
        !self.is_defined()
    }

    /// Coercive equality; defaults to strict equality
    fn loose_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl HostValue for Value {
    fn is_defined(&self) -> bool {
        !self.is_undefined()
    }

    fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    fn loose_eq(&self, other: &Self) -> bool {
        loose_equals(self, other)
    }
}

impl HostValue for serde_json::Value {
    fn is_nullish(&self) -> bool {
        self.is_null()
    }

    fn loose_eq(&self, other: &Self) -> bool {
        loose_equals(&Value::from(self.clone()), &Value::from(other.clone()))
    }
}

impl<T: HostValue> HostValue for Option<T> {
    fn is_defined(&self) -> bool {
        self.as_ref().is_some_and(HostValue::is_defined)
    }

    fn is_nullish(&self) -> bool {
        self.as_ref().map_or(true, HostValue::is_nullish)
    }

    fn loose_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.loose_eq(b),
            (None, None) => true,
            (Some(present), None) | (None, Some(present)) => present.is_nullish(),
        }
    }
}

macro_rules! strict_host_value {
    ($($ty:ty),* $(,)?) => {
        $(impl HostValue for $ty {})*
    };
}

strict_host_value!(bool, i32, i64, u32, u64, usize, f64, String);

impl HostValue for &str {}

/// Loose equality over [`Value`].
///
/// `Undefined` and `Null` equal each other and nothing else. A boolean
/// compares as `1`/`0`, a string against a number compares by its numeric
/// parse, and a composite against a scalar compares by its key string.
/// Composites of the same kind compare structurally.
pub fn loose_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined | Value::Null, Value::Undefined | Value::Null) => true,
        (Value::Undefined | Value::Null, _) | (_, Value::Undefined | Value::Null) => false,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => x == y,
        (Value::Object(x), Value::Object(y)) => x == y,
        (Value::Bool(_), _) => loose_equals(&Value::Number(a.to_number()), b),
        (_, Value::Bool(_)) => loose_equals(a, &Value::Number(b.to_number())),
        (Value::Number(x), Value::String(_)) => *x == b.to_number(),
        (Value::String(_), Value::Number(y)) => a.to_number() == *y,
        (Value::Array(_) | Value::Object(_), Value::Number(_) | Value::String(_)) => {
            loose_equals(&Value::String(a.to_key_string()), b)
        }
        (Value::Number(_) | Value::String(_), Value::Array(_) | Value::Object(_)) => {
            loose_equals(a, &Value::String(b.to_key_string()))
        }
        (Value::Array(_), Value::Object(_)) | (Value::Object(_), Value::Array(_)) => false,
    }
}
