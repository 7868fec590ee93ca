//! Predicate combinators and property accessors

use crate::types::{Value, ValueKind};

/// A boxed predicate, for when predicates have to be stored side by side
pub type Predicate<T> = Box<dyn Fn(&T) -> bool>;

/// Negate a predicate
pub fn not<T, F>(f: F) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    move |value: &T| !f(value)
}

/// Both predicates; `f2` is not evaluated when `f1` fails
pub fn and<T, F, G>(f1: F, f2: G) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    F: Fn(&T) -> bool,
    G: Fn(&T) -> bool,
{
    move |value: &T| f1(value) && f2(value)
}

/// Either predicate; `f2` is not evaluated when `f1` holds
pub fn or<T, F, G>(f1: F, f2: G) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    F: Fn(&T) -> bool,
    G: Fn(&T) -> bool,
{
    move |value: &T| f1(value) || f2(value)
}

/// Strict equality with `comp`
pub fn eq<T: PartialEq>(comp: T) -> impl Fn(&T) -> bool {
    move |value: &T| *value == comp
}

/// Runtime kind check
pub fn is(kind: ValueKind) -> impl Fn(&Value) -> bool {
    move |value: &Value| value.kind() == kind
}

/// Whether two accessors agree on the same input
pub fn is_eq<T, U, F, G>(f1: F, f2: G) -> impl Fn(&T) -> bool
where
    T: ?Sized,
    U: PartialEq,
    F: Fn(&T) -> U,
    G: Fn(&T) -> U,
{
    move |value: &T| f1(value) == f2(value)
}

pub fn is_null(value: &Value) -> bool {
    value.is_null()
}

/// A function that always returns `v`
pub fn val<T: Clone>(v: T) -> impl Fn() -> T {
    move || v.clone()
}

pub fn identity<T>(x: T) -> T {
    x
}

/// Property accessor.
///
/// A nullish input is returned as-is; a missing property reads as `Undefined`.
pub fn prop(name: impl Into<String>) -> impl Fn(&Value) -> Value {
    let name = name.into();
    move |obj: &Value| match obj {
        Value::Undefined | Value::Null => obj.clone(),
        _ => obj.get(&name).cloned().unwrap_or_default(),
    }
}

/// Dotted-path accessor: `parse("a.b.c")` reads `obj.a.b.c`
pub fn parse(path: &str) -> impl Fn(&Value) -> Value {
    let accessors: Vec<_> = path
        .split('.')
        .map(|segment| prop(segment.to_owned()))
        .collect();
    move |obj: &Value| {
        accessors
            .iter()
            .fold(obj.clone(), |current, accessor| accessor(&current))
    }
}

/// First-match dispatch: runs the handler of the first case whose predicate holds
pub fn pattern<T, U>(
    cases: Vec<(Predicate<T>, Box<dyn Fn(&T) -> U>)>,
) -> impl Fn(&T) -> Option<U> {
    move |value: &T| {
        cases
            .iter()
            .find(|(matches, _)| matches(value))
            .map(|(_, handler)| handler(value))
    }
}
