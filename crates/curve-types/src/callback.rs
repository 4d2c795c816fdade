//! Callback contracts shared by every combinator.
//!
//! Guards are optional and borrowed as trait objects so that `None` can be
//! written without naming a closure type. Transforms, sinks and visitors are
//! plain generic `FnMut` parameters on the combinators themselves; they are
//! never optional.
//!
//! Elements reach callbacks by shared reference. The value computed by a
//! transform is moved into the sink.

use std::convert::Infallible;

/// Optional unary guard over an element.
pub type Guard<'a, T> = Option<&'a mut dyn FnMut(&T) -> bool>;

/// Optional binary guard over an element pair, or a key and an element.
pub type BiGuard<'a, T, U> = Option<&'a mut dyn FnMut(&T, &U) -> bool>;

/// Optional ternary guard over a key and an element pair.
pub type TriGuard<'a, K, T, U> = Option<&'a mut dyn FnMut(&K, &T, &U) -> bool>;

/// Unwrap the result of a `try_` combinator driven by infallible callbacks.
pub fn into_ok<R>(result: Result<R, Infallible>) -> R {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Evaluate an optional unary guard. An absent guard passes.
pub fn passes<T: ?Sized>(guard: &mut Guard<'_, T>, t: &T) -> bool {
    match guard {
        Some(g) => g(t),
        None => true,
    }
}

/// Evaluate an optional binary guard. An absent guard passes.
pub fn passes_bi<T: ?Sized, U: ?Sized>(guard: &mut BiGuard<'_, T, U>, t: &T, u: &U) -> bool {
    match guard {
        Some(g) => g(t, u),
        None => true,
    }
}

/// Evaluate an optional ternary guard. An absent guard passes.
pub fn passes_tri<K: ?Sized, T: ?Sized, U: ?Sized>(
    guard: &mut TriGuard<'_, K, T, U>,
    k: &K,
    t: &T,
    u: &U,
) -> bool {
    match guard {
        Some(g) => g(k, t, u),
        None => true,
    }
}
