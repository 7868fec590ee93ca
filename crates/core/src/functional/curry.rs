//! Currying with an explicit accumulator
//!
//! Rust closures do not expose their arity, so the arity is declared up front
//! and the function receives all accumulated arguments as one `Vec`.

use std::fmt;
use std::rc::Rc;

/// A function waiting for `arity` arguments, holding the ones seen so far
pub struct Curried<A, R> {
    func: Rc<dyn Fn(Vec<A>) -> R>,
    arity: usize,
    args: Vec<A>,
}

/// Result of feeding arguments to a [`Curried`] function
pub enum Applied<A, R> {
    /// Still short of the declared arity
    Partial(Curried<A, R>),
    /// The function ran
    Complete(R),
}

/// Curry `func`, which runs once `arity` arguments have been accumulated
///
/// The result is always a [`Curried`], even when `arity` is already met.
/// A zero-arity function therefore runs on the first `apply` or `call`,
/// so `curry(0, f).apply([])` is the way to invoke it with no arguments.
pub fn curry<A, R, F>(arity: usize, func: F) -> Curried<A, R>
where
    F: Fn(Vec<A>) -> R + 'static,
{
    curry_with(arity, func, Vec::new())
}

/// Curry `func` with some arguments already supplied
pub fn curry_with<A, R, F>(arity: usize, func: F, initial_args: Vec<A>) -> Curried<A, R>
where
    F: Fn(Vec<A>) -> R + 'static,
{
    Curried {
        func: Rc::new(func),
        arity,
        args: initial_args,
    }
}

impl<A: Clone, R> Curried<A, R> {
    /// Add `args` to a copy of the accumulator and run the function if the
    /// declared arity is reached. `self` is left untouched, so one partial
    /// can branch into several independent chains.
    pub fn apply(&self, args: impl IntoIterator<Item = A>) -> Applied<A, R> {
        let mut accumulated = self.args.clone();
        accumulated.extend(args);
        if accumulated.len() >= self.arity {
            Applied::Complete((self.func)(accumulated))
        } else {
            Applied::Partial(Curried {
                func: Rc::clone(&self.func),
                arity: self.arity,
                args: accumulated,
            })
        }
    }

    /// Shorthand for applying a single argument
    pub fn call(&self, arg: A) -> Applied<A, R> {
        self.apply(std::iter::once(arg))
    }
}

impl<A, R> Curried<A, R> {
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Arguments still needed before the function runs
    pub fn pending(&self) -> usize {
        self.arity.saturating_sub(self.args.len())
    }

    pub fn args(&self) -> &[A] {
        &self.args
    }
}

impl<A: Clone, R> Clone for Curried<A, R> {
    fn clone(&self) -> Self {
        Self {
            func: Rc::clone(&self.func),
            arity: self.arity,
            args: self.args.clone(),
        }
    }
}

impl<A: fmt::Debug, R> fmt::Debug for Curried<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curried")
            .field("arity", &self.arity)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

impl<A, R> Applied<A, R> {
    pub fn complete(self) -> Option<R> {
        match self {
            Applied::Complete(result) => Some(result),
            Applied::Partial(_) => None,
        }
    }

    pub fn partial(self) -> Option<Curried<A, R>> {
        match self {
            Applied::Partial(curried) => Some(curried),
            Applied::Complete(_) => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Applied::Complete(_))
    }
}
