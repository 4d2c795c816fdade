//! The [`Curve`] container.
//!
//! A curve wraps a private `Vec<T>` and exposes only what callers need:
//! append, length, index access and iteration. The value type `V` is the
//! type produced by transforms and handed to sinks; a curve never stores
//! values of that type.

use std::fmt;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use curve_types::{CurveError, Result, TraversalConfig};

/// An ordered sequence of `T` whose combinators produce values of type `V`.
///
/// Element order is insertion order. Combinators only read the elements.
#[derive(Serialize, Deserialize)]
pub struct Curve<T, V> {
    items: Vec<T>,
    #[serde(skip)]
    config: TraversalConfig,
    #[serde(skip)]
    _value: PhantomData<fn() -> V>,
}

impl<T, V> Curve<T, V> {
    /// Create an empty curve.
    pub fn new() -> Self {
        Self::from(Vec::new())
    }

    /// Replace the diagnostics configuration.
    pub fn with_config(mut self, config: TraversalConfig) -> Self {
        self.config = config;
        self
    }

    /// The diagnostics configuration.
    pub fn config(&self) -> &TraversalConfig {
        &self.config
    }

    /// Append an element at the end.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the curve has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The element at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// The element at `index`, or [`CurveError::IndexOutOfBounds`].
    pub fn get_checked(&self, index: usize) -> Result<&T> {
        self.items.get(index).ok_or(CurveError::IndexOutOfBounds {
            index,
            len: self.items.len(),
        })
    }

    /// Iterate the elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consume the curve and return its elements.
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }

    /// Check whether a zip with `other` would visit any pair.
    ///
    /// Returns `Ok` exactly when the zip combinators would call their
    /// sink or visitor at least once (guards aside). Zips skip silently;
    /// the error says why.
    pub fn check_zip<U>(&self, other: Option<&Curve<U, V>>) -> Result<()> {
        let other = other.ok_or(CurveError::MissingPartner)?;
        if self.is_empty() {
            return Err(CurveError::EmptyCurve);
        }
        if other.len() != self.len() {
            return Err(CurveError::LengthMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(())
    }
}

impl<T, V> Default for Curve<T, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, V> Clone for Curve<T, V> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            config: self.config,
            _value: PhantomData,
        }
    }
}

impl<T: fmt::Debug, V> fmt::Debug for Curve<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curve").field("items", &self.items).finish()
    }
}

// Equality is over the elements only; config is diagnostics.
impl<T: PartialEq, V> PartialEq for Curve<T, V> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq, V> Eq for Curve<T, V> {}

impl<T, V> From<Vec<T>> for Curve<T, V> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items,
            config: TraversalConfig::default(),
            _value: PhantomData,
        }
    }
}

impl<T, V> FromIterator<T> for Curve<T, V> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T, V> Extend<T> for Curve<T, V> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T, V> IntoIterator for Curve<T, V> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T, V> IntoIterator for &'a Curve<T, V> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
