//! Key-aware combinators on [`CurveGroup`].
//!
//! The per-curve combinators wrap binary and ternary callbacks into the
//! unary and binary shapes [`Curve`] expects, closing over the key, and then
//! delegate. The key-set traversals walk this group's keys only.

use std::hash::Hash;

use tracing::{debug, trace};

use curve_core::Curve;
use curve_types::{into_ok, passes_bi, passes_tri, BiGuard, TriGuard};

use crate::group::CurveGroup;

impl<K: Eq + Hash, T, V> CurveGroup<K, T, V> {
    // -----------------------------------------------------------------------
    // Per-curve combinators
    // -----------------------------------------------------------------------

    /// Visit `(key, t)` for every element `t` of `curve`, in order.
    pub fn for_each_with_key(
        &self,
        curve: &Curve<T, V>,
        key: &K,
        mut visit: impl FnMut(&K, &T),
    ) {
        curve.traversal(|t| visit(key, t));
    }

    /// Fallible form of [`CurveGroup::for_each_with_key`].
    pub fn try_for_each_with_key<E>(
        &self,
        curve: &Curve<T, V>,
        key: &K,
        mut visit: impl FnMut(&K, &T) -> Result<(), E>,
    ) -> Result<(), E> {
        curve.try_traversal(|t| visit(key, t)).map(|_| ())
    }

    /// For every element `t` of `curve` whose `(key, t)` passes `guard`,
    /// sink `(t, transform(key, t))`.
    pub fn guarded_map_and_consume_with_key(
        &self,
        curve: &Curve<T, V>,
        key: &K,
        guard: BiGuard<'_, K, T>,
        transform: impl FnMut(&K, &T) -> V,
        mut sink: impl FnMut(&T, V),
    ) {
        into_ok(self.try_guarded_map_and_consume_with_key(curve, key, guard, transform, |t, v| {
            sink(t, v);
            Ok(())
        }))
    }

    /// Fallible form of [`CurveGroup::guarded_map_and_consume_with_key`].
    pub fn try_guarded_map_and_consume_with_key<E>(
        &self,
        curve: &Curve<T, V>,
        key: &K,
        mut guard: BiGuard<'_, K, T>,
        mut transform: impl FnMut(&K, &T) -> V,
        sink: impl FnMut(&T, V) -> Result<(), E>,
    ) -> Result<(), E> {
        let mut keyed_guard = |t: &T| passes_bi(&mut guard, key, t);
        curve
            .try_guarded_map_and_consume(Some(&mut keyed_guard), |t| transform(key, t), sink)
            .map(|_| ())
    }

    /// Zip `curve_a` with `curve_b` and, for every pair `(t, u)` whose
    /// `(key, t, u)` passes `guard`, sink `(t, transform(key, t, u))`.
    ///
    /// Skipped exactly like [`Curve::paired_traversal`]: when `curve_a` is
    /// empty, `curve_b` is absent, or the lengths differ. Skip diagnostics
    /// follow this group's configuration, not the curve's.
    pub fn guarded_zip_map_and_consume_with_key<U>(
        &self,
        curve_a: &Curve<T, V>,
        curve_b: Option<&Curve<U, V>>,
        key: &K,
        guard: TriGuard<'_, K, T, U>,
        transform: impl FnMut(&K, &T, &U) -> V,
        mut sink: impl FnMut(&T, V),
    ) {
        into_ok(self.try_guarded_zip_map_and_consume_with_key(
            curve_a,
            curve_b,
            key,
            guard,
            transform,
            |t, v| {
                sink(t, v);
                Ok(())
            },
        ))
    }

    /// Fallible form of [`CurveGroup::guarded_zip_map_and_consume_with_key`].
    pub fn try_guarded_zip_map_and_consume_with_key<U, E>(
        &self,
        curve_a: &Curve<T, V>,
        curve_b: Option<&Curve<U, V>>,
        key: &K,
        mut guard: TriGuard<'_, K, T, U>,
        mut transform: impl FnMut(&K, &T, &U) -> V,
        mut sink: impl FnMut(&T, V) -> Result<(), E>,
    ) -> Result<(), E> {
        let mut keyed_guard = |t: &T, u: &U| passes_tri(&mut guard, key, t, u);
        curve_a
            .try_paired_traversal_with(curve_b, self.config(), |t, u| {
                Curve::<T, V>::try_guarded_bi_process(
                    t,
                    u,
                    Some(&mut keyed_guard),
                    |a, b| transform(key, a, b),
                    &mut sink,
                )
            })
            .map(|_| ())
    }

    // -----------------------------------------------------------------------
    // Key-set traversals
    // -----------------------------------------------------------------------

    /// Visit `(key, curve)` once for every key in the group.
    pub fn for_each_key(&self, mut visit: impl FnMut(&K, &Curve<T, V>)) -> &Self {
        into_ok(self.try_for_each_key(|k, curve| {
            visit(k, curve);
            Ok(())
        }))
    }

    /// Fallible form of [`CurveGroup::for_each_key`].
    pub fn try_for_each_key<E>(
        &self,
        mut visit: impl FnMut(&K, &Curve<T, V>) -> Result<(), E>,
    ) -> Result<&Self, E> {
        trace!(keys = self.len(), "group key traversal");
        for (k, curve) in self.iter() {
            visit(k, curve)?;
        }
        Ok(self)
    }

    /// Visit `(key, curve, other.get(key))` once for every key of this group.
    ///
    /// Keys found only in `other` are never visited. A key missing from
    /// `other` reaches the visitor as `None`. Nothing is visited when
    /// `other` is absent.
    pub fn for_each_key_paired<U>(
        &self,
        other: Option<&CurveGroup<K, U, V>>,
        mut visit: impl FnMut(&K, &Curve<T, V>, Option<&Curve<U, V>>),
    ) -> &Self {
        into_ok(self.try_for_each_key_paired(other, |k, a, b| {
            visit(k, a, b);
            Ok(())
        }))
    }

    /// Fallible form of [`CurveGroup::for_each_key_paired`].
    pub fn try_for_each_key_paired<U, E>(
        &self,
        other: Option<&CurveGroup<K, U, V>>,
        mut visit: impl FnMut(&K, &Curve<T, V>, Option<&Curve<U, V>>) -> Result<(), E>,
    ) -> Result<&Self, E> {
        let Some(other) = other else {
            if self.config().trace_skips {
                debug!(keys = self.len(), "paired key traversal skipped: no partner group");
            }
            return Ok(self);
        };
        trace!(keys = self.len(), "group paired key traversal");
        let mut missing = 0usize;
        for (k, curve) in self.iter() {
            let partner = other.get(k);
            if partner.is_none() {
                missing += 1;
            }
            visit(k, curve, partner)?;
        }
        if missing > 0 && self.config().trace_missing_keys {
            debug!(missing, "paired key traversal: keys absent from partner group");
        }
        Ok(self)
    }
}
