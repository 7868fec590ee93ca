//! Function composition

/// A boxed unary function, the element type of [`compose`] and [`pipe`]
pub type BoxFn<T> = Box<dyn Fn(T) -> T>;

/// Compose a list of functions right-to-left: `compose([f, g, h])(x) == f(g(h(x)))`.
///
/// An empty list composes to the identity.
pub fn compose<T>(fns: Vec<BoxFn<T>>) -> impl Fn(T) -> T {
    move |value| fns.iter().rev().fold(value, |acc, f| f(acc))
}

/// Compose a list of functions left-to-right: `pipe([f, g, h])(x) == h(g(f(x)))`
pub fn pipe<T>(fns: Vec<BoxFn<T>>) -> impl Fn(T) -> T {
    move |value| fns.iter().fold(value, |acc, f| f(acc))
}

/// Forward composition operator (f >> g)
pub fn forward_compose<A, B, C, F, G>(f: F, g: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |a| g(f(a))
}

/// Backward composition operator (g << f)
pub fn backward_compose<A, B, C, F, G>(g: G, f: F) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |a| g(f(a))
}

/// Right-to-left composition of functions with differing types
#[macro_export]
macro_rules! compose {
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {
        $crate::functional::composition::backward_compose($f, $crate::compose!($($rest),+))
    };
}

/// Left-to-right composition of functions with differing types
#[macro_export]
macro_rules! pipe {
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {
        $crate::functional::composition::forward_compose($f, $crate::pipe!($($rest),+))
    };
}
