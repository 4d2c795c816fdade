//! The [`CurveGroup`] container.

use std::borrow::Borrow;
use std::collections::hash_map;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use curve_core::Curve;
use curve_types::{CurveError, Result, TraversalConfig};

/// A registry of independent curves, one per key.
///
/// Curves under different keys are unrelated and may differ in length.
/// Iteration order over keys is unspecified.
#[derive(Serialize, Deserialize)]
#[serde(bound(
    serialize = "K: Serialize + Eq + Hash, T: Serialize",
    deserialize = "K: Deserialize<'de> + Eq + Hash, T: Deserialize<'de>"
))]
pub struct CurveGroup<K, T, V> {
    curves: HashMap<K, Curve<T, V>>,
    #[serde(skip)]
    config: TraversalConfig,
}

impl<K: Eq + Hash, T, V> CurveGroup<K, T, V> {
    /// Create an empty group.
    pub fn new() -> Self {
        Self {
            curves: HashMap::new(),
            config: TraversalConfig::default(),
        }
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

    /// Associate `curve` with `key`, returning the curve it replaces.
    pub fn insert(&mut self, key: K, curve: Curve<T, V>) -> Option<Curve<T, V>> {
        self.curves.insert(key, curve)
    }

    /// Remove the curve under `key`.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<Curve<T, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.curves.remove(key)
    }

    /// The curve under `key`, if any.
    pub fn get<Q>(&self, key: &Q) -> Option<&Curve<T, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.curves.get(key)
    }

    /// Mutable access to the curve under `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut Curve<T, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.curves.get_mut(key)
    }

    /// The curve under `key`, or [`CurveError::KeyNotFound`].
    pub fn curve<Q>(&self, key: &Q) -> Result<&Curve<T, V>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.curves
            .get(key)
            .ok_or_else(|| CurveError::key_not_found(&key))
    }

    /// Returns `true` if `key` has a curve.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.curves.contains_key(key)
    }

    /// Iterate the keys.
    pub fn keys(&self) -> hash_map::Keys<'_, K, Curve<T, V>> {
        self.curves.keys()
    }

    /// Iterate `(key, curve)` entries.
    pub fn iter(&self) -> hash_map::Iter<'_, K, Curve<T, V>> {
        self.curves.iter()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Returns `true` if the group has no keys.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Sum of the lengths of every curve in the group.
    pub fn total_len(&self) -> usize {
        self.curves.values().map(Curve::len).sum()
    }
}

impl<K: Eq + Hash, T, V> Default for CurveGroup<K, T, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, T: Clone, V> Clone for CurveGroup<K, T, V> {
    fn clone(&self) -> Self {
        Self {
            curves: self.curves.clone(),
            config: self.config,
        }
    }
}

impl<K: fmt::Debug, T: fmt::Debug, V> fmt::Debug for CurveGroup<K, T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurveGroup")
            .field("curves", &self.curves)
            .finish()
    }
}

impl<K: Eq + Hash, T: PartialEq, V> PartialEq for CurveGroup<K, T, V> {
    fn eq(&self, other: &Self) -> bool {
        self.curves == other.curves
    }
}

impl<K: Eq + Hash, T: Eq, V> Eq for CurveGroup<K, T, V> {}

impl<K: Eq + Hash, T, V> FromIterator<(K, Curve<T, V>)> for CurveGroup<K, T, V> {
    fn from_iter<I: IntoIterator<Item = (K, Curve<T, V>)>>(iter: I) -> Self {
        let mut group = Self::new();
        group.extend(iter);
        group
    }
}

impl<K: Eq + Hash, T, V> Extend<(K, Curve<T, V>)> for CurveGroup<K, T, V> {
    fn extend<I: IntoIterator<Item = (K, Curve<T, V>)>>(&mut self, iter: I) {
        self.curves.extend(iter);
    }
}

impl<'a, K, T, V> IntoIterator for &'a CurveGroup<K, T, V> {
    type Item = (&'a K, &'a Curve<T, V>);
    type IntoIter = hash_map::Iter<'a, K, Curve<T, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.curves.iter()
    }
}
