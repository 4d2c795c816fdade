//! Traversal, guarded processing and zip combinators on [`Curve`].
//!
//! The infallible combinators are thin wrappers over their `try_` siblings
//! with an uninhabited error type. All of them return the curve itself so
//! calls can be chained.

use tracing::{debug, trace};

use curve_types::{into_ok, passes, passes_bi, BiGuard, Guard, TraversalConfig};

use crate::curve::Curve;

impl<T, V> Curve<T, V> {
    // -----------------------------------------------------------------------
    // Element-level processing
    // -----------------------------------------------------------------------

    /// Transform `item` and hand the result to `sink`, if `guard` passes.
    ///
    /// An absent guard always passes.
    pub fn guarded_process(
        item: &T,
        guard: Guard<'_, T>,
        transform: impl FnMut(&T) -> V,
        mut sink: impl FnMut(&T, V),
    ) {
        into_ok(Self::try_guarded_process(item, guard, transform, |t, v| {
            sink(t, v);
            Ok(())
        }))
    }

    /// Fallible form of [`Curve::guarded_process`]; the sink's error is
    /// returned unchanged.
    pub fn try_guarded_process<E>(
        item: &T,
        mut guard: Guard<'_, T>,
        mut transform: impl FnMut(&T) -> V,
        mut sink: impl FnMut(&T, V) -> Result<(), E>,
    ) -> Result<(), E> {
        process_one(item, &mut guard, &mut transform, &mut sink)
    }

    /// Transform the pair `(a, b)` and hand `(a, value)` to `sink`, if
    /// `guard` passes.
    ///
    /// The sink receives the first operand, never the second.
    pub fn guarded_bi_process<U>(
        a: &T,
        b: &U,
        guard: BiGuard<'_, T, U>,
        transform: impl FnMut(&T, &U) -> V,
        mut sink: impl FnMut(&T, V),
    ) {
        into_ok(Self::try_guarded_bi_process(a, b, guard, transform, |t, v| {
            sink(t, v);
            Ok(())
        }))
    }

    /// Fallible form of [`Curve::guarded_bi_process`].
    pub fn try_guarded_bi_process<U, E>(
        a: &T,
        b: &U,
        mut guard: BiGuard<'_, T, U>,
        mut transform: impl FnMut(&T, &U) -> V,
        mut sink: impl FnMut(&T, V) -> Result<(), E>,
    ) -> Result<(), E> {
        process_pair(a, b, &mut guard, &mut transform, &mut sink)
    }

    // -----------------------------------------------------------------------
    // Traversals
    // -----------------------------------------------------------------------

    /// Visit every element in index order.
    pub fn traversal(&self, mut visit: impl FnMut(&T)) -> &Self {
        into_ok(self.try_traversal(|t| {
            visit(t);
            Ok(())
        }))
    }

    /// Visit every element in index order, stopping at the first error.
    pub fn try_traversal<E>(
        &self,
        mut visit: impl FnMut(&T) -> Result<(), E>,
    ) -> Result<&Self, E> {
        trace!(len = self.len(), "curve traversal");
        for item in self.iter() {
            visit(item)?;
        }
        Ok(self)
    }

    /// Visit `(self[i], other[i])` for every index, in order.
    ///
    /// Nothing is visited when this curve is empty, `other` is absent, or
    /// the lengths differ. Use [`Curve::check_zip`] to find out which.
    pub fn paired_traversal<U>(
        &self,
        other: Option<&Curve<U, V>>,
        mut visit: impl FnMut(&T, &U),
    ) -> &Self {
        into_ok(self.try_paired_traversal(other, |t, u| {
            visit(t, u);
            Ok(())
        }))
    }

    /// Fallible form of [`Curve::paired_traversal`].
    pub fn try_paired_traversal<U, E>(
        &self,
        other: Option<&Curve<U, V>>,
        visit: impl FnMut(&T, &U) -> Result<(), E>,
    ) -> Result<&Self, E> {
        self.try_paired_traversal_with(other, self.config(), visit)
    }

    /// [`Curve::try_paired_traversal`] with skip diagnostics gated by
    /// `config` instead of this curve's own configuration.
    ///
    /// Containers that walk curves on behalf of their own configuration,
    /// such as a group, go through here.
    pub fn try_paired_traversal_with<U, E>(
        &self,
        other: Option<&Curve<U, V>>,
        config: &TraversalConfig,
        mut visit: impl FnMut(&T, &U) -> Result<(), E>,
    ) -> Result<&Self, E> {
        match other {
            Some(other) if !self.is_empty() && other.len() == self.len() => {
                trace!(len = self.len(), "curve paired traversal");
                for (t, u) in self.iter().zip(other.iter()) {
                    visit(t, u)?;
                }
            }
            _ if config.trace_skips => self.note_skipped_zip(other.map(Curve::len)),
            _ => {}
        }
        Ok(self)
    }

    fn note_skipped_zip(&self, partner_len: Option<usize>) {
        match partner_len {
            None => debug!(len = self.len(), "zip skipped: no partner curve"),
            Some(partner_len) if partner_len != self.len() => debug!(
                len = self.len(),
                partner_len,
                "zip skipped: length mismatch"
            ),
            Some(_) => {}
        }
    }

    // -----------------------------------------------------------------------
    // Composite combinators
    // -----------------------------------------------------------------------

    /// Alias of [`Curve::traversal`].
    pub fn for_each(&self, visit: impl FnMut(&T)) -> &Self {
        self.traversal(visit)
    }

    /// Alias of [`Curve::try_traversal`].
    pub fn try_for_each<E>(&self, visit: impl FnMut(&T) -> Result<(), E>) -> Result<&Self, E> {
        self.try_traversal(visit)
    }

    /// Transform every element and sink `(element, value)`.
    pub fn map_and_consume(
        &self,
        transform: impl FnMut(&T) -> V,
        sink: impl FnMut(&T, V),
    ) -> &Self {
        self.guarded_map_and_consume(None, transform, sink)
    }

    /// Fallible form of [`Curve::map_and_consume`].
    pub fn try_map_and_consume<E>(
        &self,
        transform: impl FnMut(&T) -> V,
        sink: impl FnMut(&T, V) -> Result<(), E>,
    ) -> Result<&Self, E> {
        self.try_guarded_map_and_consume(None, transform, sink)
    }

    /// Transform and sink every element that passes `guard`.
    pub fn guarded_map_and_consume(
        &self,
        guard: Guard<'_, T>,
        transform: impl FnMut(&T) -> V,
        mut sink: impl FnMut(&T, V),
    ) -> &Self {
        into_ok(self.try_guarded_map_and_consume(guard, transform, |t, v| {
            sink(t, v);
            Ok(())
        }))
    }

    /// Fallible form of [`Curve::guarded_map_and_consume`].
    pub fn try_guarded_map_and_consume<E>(
        &self,
        mut guard: Guard<'_, T>,
        mut transform: impl FnMut(&T) -> V,
        mut sink: impl FnMut(&T, V) -> Result<(), E>,
    ) -> Result<&Self, E> {
        self.try_traversal(|t| process_one(t, &mut guard, &mut transform, &mut sink))
    }

    /// Zip with `other`, transform every pair and sink
    /// `(self[i], value)`.
    pub fn zip_map_and_consume<U>(
        &self,
        other: Option<&Curve<U, V>>,
        transform: impl FnMut(&T, &U) -> V,
        sink: impl FnMut(&T, V),
    ) -> &Self {
        self.guarded_zip_map_and_consume(other, None, transform, sink)
    }

    /// Fallible form of [`Curve::zip_map_and_consume`].
    pub fn try_zip_map_and_consume<U, E>(
        &self,
        other: Option<&Curve<U, V>>,
        transform: impl FnMut(&T, &U) -> V,
        sink: impl FnMut(&T, V) -> Result<(), E>,
    ) -> Result<&Self, E> {
        self.try_guarded_zip_map_and_consume(other, None, transform, sink)
    }

    /// Zip with `other` and transform and sink every pair that passes
    /// `guard`.
    pub fn guarded_zip_map_and_consume<U>(
        &self,
        other: Option<&Curve<U, V>>,
        guard: BiGuard<'_, T, U>,
        transform: impl FnMut(&T, &U) -> V,
        mut sink: impl FnMut(&T, V),
    ) -> &Self {
        into_ok(
            self.try_guarded_zip_map_and_consume(other, guard, transform, |t, v| {
                sink(t, v);
                Ok(())
            }),
        )
    }

    /// Fallible form of [`Curve::guarded_zip_map_and_consume`].
    pub fn try_guarded_zip_map_and_consume<U, E>(
        &self,
        other: Option<&Curve<U, V>>,
        mut guard: BiGuard<'_, T, U>,
        mut transform: impl FnMut(&T, &U) -> V,
        mut sink: impl FnMut(&T, V) -> Result<(), E>,
    ) -> Result<&Self, E> {
        self.try_paired_traversal(other, |t, u| {
            process_pair(t, u, &mut guard, &mut transform, &mut sink)
        })
    }
}

fn process_one<T, V, E>(
    item: &T,
    guard: &mut Guard<'_, T>,
    transform: &mut impl FnMut(&T) -> V,
    sink: &mut impl FnMut(&T, V) -> Result<(), E>,
) -> Result<(), E> {
    if passes(guard, item) {
        let value = transform(item);
        sink(item, value)?;
    }
    Ok(())
}

fn process_pair<T, U, V, E>(
    a: &T,
    b: &U,
    guard: &mut BiGuard<'_, T, U>,
    transform: &mut impl FnMut(&T, &U) -> V,
    sink: &mut impl FnMut(&T, V) -> Result<(), E>,
) -> Result<(), E> {
    if passes_bi(guard, a, b) {
        let value = transform(a, b);
        sink(a, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use proptest::prelude::*;
    use tracing_subscriber::fmt::MakeWriter;

    type IntCurve = Curve<i32, i32>;

    // ---- Traversal ----

    #[test]
    fn traversal_visits_in_index_order() {
        let curve = IntCurve::from(vec![4, 2, 7]);
        let mut seen = Vec::new();
        curve.traversal(|t| seen.push(*t));
        assert_eq!(seen, vec![4, 2, 7]);
    }

    #[test]
    fn traversal_of_empty_curve_visits_nothing() {
        let curve = IntCurve::new();
        let mut calls = 0;
        curve.for_each(|_| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn combinators_return_the_same_curve() {
        let curve = IntCurve::from(vec![1, 2]);
        let returned = curve
            .traversal(|_| {})
            .map_and_consume(|t| *t, |_, _| {})
            .zip_map_and_consume::<i32>(None, |a, b| a + b, |_, _| {});
        assert!(std::ptr::eq(returned, &curve));
    }

    // ---- Element-level processing ----

    #[test]
    fn guarded_process_without_guard_sinks_once() {
        let mut sunk = Vec::new();
        IntCurve::guarded_process(&3, None, |t| t * 2, |t, v| sunk.push((*t, v)));
        assert_eq!(sunk, vec![(3, 6)]);
    }

    #[test]
    fn guarded_process_respects_guard() {
        let mut sunk = Vec::new();
        let mut transforms = 0;
        IntCurve::guarded_process(
            &3,
            Some(&mut |t: &i32| *t > 5),
            |t| {
                transforms += 1;
                t * 2
            },
            |t, v| sunk.push((*t, v)),
        );
        assert!(sunk.is_empty());
        assert_eq!(transforms, 0);

        IntCurve::guarded_process(
            &8,
            Some(&mut |t: &i32| *t > 5),
            |t| t * 2,
            |t, v| sunk.push((*t, v)),
        );
        assert_eq!(sunk, vec![(8, 16)]);
    }

    #[test]
    fn guarded_bi_process_sinks_first_operand() {
        let mut sunk = Vec::new();
        IntCurve::guarded_bi_process(&1, &"ab", None, |a, b: &&str| a + b.len() as i32, |t, v| {
            sunk.push((*t, v))
        });
        assert_eq!(sunk, vec![(1, 3)]);

        IntCurve::guarded_bi_process(
            &1,
            &"ab",
            Some(&mut |_: &i32, b: &&str| b.is_empty()),
            |a, b: &&str| a + b.len() as i32,
            |t, v| sunk.push((*t, v)),
        );
        assert_eq!(sunk.len(), 1);
    }

    // ---- Map and consume ----

    #[test]
    fn map_and_consume_sinks_every_element() {
        let curve = IntCurve::from(vec![1, 2, 3]);
        let mut sunk = Vec::new();
        curve.map_and_consume(|t| t * t, |t, v| sunk.push((*t, v)));
        assert_eq!(sunk, vec![(1, 1), (2, 4), (3, 9)]);
    }

    #[test]
    fn guarded_map_and_consume_filters_elements() {
        let curve = IntCurve::from(vec![1, 2, 3, 4]);
        let mut sunk = Vec::new();
        curve.guarded_map_and_consume(
            Some(&mut |t: &i32| t % 2 == 0),
            |t| t + 100,
            |t, v| sunk.push((*t, v)),
        );
        assert_eq!(sunk, vec![(2, 102), (4, 104)]);
    }

    // ---- Zip ----

    #[test]
    fn zip_map_and_consume_pairs_by_index() {
        let a = IntCurve::from(vec![1, 2, 3]);
        let b = IntCurve::from(vec![10, 20, 30]);
        let mut collected = Vec::new();
        a.zip_map_and_consume(Some(&b), |x, y| x + y, |_, v| collected.push(v));
        assert_eq!(collected, vec![11, 22, 33]);
    }

    #[test]
    fn zip_with_length_mismatch_is_skipped() {
        let a = IntCurve::from(vec![1, 2]);
        let b = IntCurve::from(vec![1, 2, 3]);
        let mut calls = 0;
        let returned = a.zip_map_and_consume(Some(&b), |x, y| x + y, |_, _| calls += 1);
        assert_eq!(calls, 0);
        assert!(std::ptr::eq(returned, &a));
        assert_eq!(a.as_slice(), &[1, 2]);
    }

    #[test]
    fn zip_without_partner_is_skipped() {
        let a = IntCurve::from(vec![1, 2]);
        let mut calls = 0;
        a.paired_traversal::<i32>(None, |_, _| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn zip_of_empty_curves_is_skipped() {
        let a = IntCurve::new();
        let b = IntCurve::new();
        let mut calls = 0;
        a.paired_traversal(Some(&b), |_, _| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn guarded_zip_sinks_only_passing_pairs() {
        let a = IntCurve::from(vec![5, 1, 9]);
        let b = IntCurve::from(vec![2, 3, 2]);
        let mut first_operands = Vec::new();
        a.guarded_zip_map_and_consume(
            Some(&b),
            Some(&mut |x: &i32, y: &i32| x > y),
            |x, y| x - y,
            |t, _| first_operands.push(*t),
        );
        assert_eq!(first_operands, vec![5, 9]);
    }

    #[test]
    fn zip_accepts_partner_of_another_element_type() {
        let a = IntCurve::from(vec![1, 2]);
        let b: Curve<&str, i32> = Curve::from(vec!["a", "bcd"]);
        let mut sunk = Vec::new();
        a.zip_map_and_consume(Some(&b), |x, y| x * y.len() as i32, |t, v| sunk.push((*t, v)));
        assert_eq!(sunk, vec![(1, 1), (2, 6)]);
    }

    // ---- Failure propagation ----

    #[test]
    fn sink_error_stops_the_walk() {
        let curve = IntCurve::from(vec![1, 2, 3, 4]);
        let mut sunk = Vec::new();
        let result = curve.try_map_and_consume(
            |t| t * 10,
            |t, v| {
                if *t == 3 {
                    return Err(format!("refused {t}"));
                }
                sunk.push(v);
                Ok(())
            },
        );
        assert_eq!(result.unwrap_err(), "refused 3");
        assert_eq!(sunk, vec![10, 20]);
    }

    #[test]
    fn zip_sink_error_is_returned_unchanged() {
        let a = IntCurve::from(vec![1, 2, 3]);
        let b = IntCurve::from(vec![1, 0, 1]);
        let mut visited = 0;
        let result = a.try_guarded_zip_map_and_consume(
            Some(&b),
            None,
            |x, y| x * y,
            |_, v| {
                visited += 1;
                if v == 0 {
                    Err(v)
                } else {
                    Ok(())
                }
            },
        );
        assert_eq!(result.unwrap_err(), 0);
        assert_eq!(visited, 2);
    }

    #[test]
    fn visitor_error_stops_traversal() {
        let curve = IntCurve::from(vec![1, 2, 3]);
        let mut seen = Vec::new();
        let result = curve.try_for_each(|t| {
            seen.push(*t);
            if *t == 2 {
                Err("stop")
            } else {
                Ok(())
            }
        });
        assert_eq!(result.unwrap_err(), "stop");
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    #[should_panic(expected = "transform failed")]
    fn panicking_transform_propagates() {
        let curve = IntCurve::from(vec![1]);
        curve.map_and_consume(|_| panic!("transform failed"), |_, _| {});
    }

    // ---- Diagnostics ----

    /// Helper: a `MakeWriter` that appends formatted events to a buffer.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Helper: run `f` under a scoped subscriber and return what it logged.
    fn capture(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(captured.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    /// Helper: zip `curve` against a shorter partner and against none.
    fn skip_both_ways(curve: &IntCurve) {
        let shorter = IntCurve::from(vec![0]);
        curve.zip_map_and_consume(Some(&shorter), |a, b| a + b, |_, _| {});
        curve.zip_map_and_consume::<i32>(None, |a, b| a + b, |_, _| {});
    }

    #[test]
    fn verbose_curve_logs_skipped_zips() {
        let curve = IntCurve::from(vec![1, 2]).with_config(TraversalConfig::verbose());
        let out = capture(|| skip_both_ways(&curve));
        assert!(out.contains("zip skipped: length mismatch"), "{out}");
        assert!(out.contains("partner_len=1"), "{out}");
        assert!(out.contains("zip skipped: no partner curve"), "{out}");
    }

    #[test]
    fn quiet_curve_logs_no_skips() {
        let curve = IntCurve::from(vec![1, 2]).with_config(TraversalConfig::quiet());
        let out = capture(|| skip_both_ways(&curve));
        assert!(!out.contains("zip skipped"), "{out}");
    }

    #[test]
    fn explicit_config_overrides_the_curves_own() {
        let curve = IntCurve::from(vec![1, 2]).with_config(TraversalConfig::verbose());
        let quiet = TraversalConfig::quiet();
        let mut calls = 0;
        let out = capture(|| {
            let result: Result<_, Infallible> =
                curve.try_paired_traversal_with::<i32, _>(None, &quiet, |_, _| {
                    calls += 1;
                    Ok(())
                });
            assert!(result.is_ok());
        });
        assert_eq!(calls, 0);
        assert!(!out.contains("zip skipped"), "{out}");
    }

    #[test]
    fn matching_zip_logs_no_skip() {
        let curve = IntCurve::from(vec![1, 2]).with_config(TraversalConfig::verbose());
        let partner = IntCurve::from(vec![3, 4]);
        let out = capture(|| {
            curve.zip_map_and_consume(Some(&partner), |a, b| a + b, |_, _| {});
        });
        assert!(!out.contains("zip skipped"), "{out}");
        assert!(out.contains("curve paired traversal"), "{out}");
    }

    // ---- Properties ----

    proptest! {
        #[test]
        fn traversal_visits_each_element_once(items in prop::collection::vec(any::<i32>(), 0..64)) {
            let curve = IntCurve::from(items.clone());
            let mut seen = Vec::new();
            curve.traversal(|t| seen.push(*t));
            prop_assert_eq!(seen, items);
        }

        #[test]
        fn guarded_map_and_consume_is_idempotent(items in prop::collection::vec(-100i32..100, 0..32)) {
            let curve = IntCurve::from(items);
            let run = |curve: &IntCurve| {
                let mut sunk = Vec::new();
                curve.guarded_map_and_consume(
                    Some(&mut |t: &i32| *t >= 0),
                    |t| t * 3,
                    |t, v| sunk.push((*t, v)),
                );
                sunk
            };
            prop_assert_eq!(run(&curve), run(&curve));
        }

        #[test]
        fn zip_fires_iff_lengths_match(
            a in prop::collection::vec(any::<i16>(), 0..16),
            b in prop::collection::vec(any::<i16>(), 0..16),
        ) {
            let left: Curve<i16, i32> = Curve::from(a.clone());
            let right: Curve<i16, i32> = Curve::from(b.clone());
            let mut calls = 0usize;
            left.zip_map_and_consume(Some(&right), |x, y| *x as i32 + *y as i32, |_, _| calls += 1);
            let expected = if !a.is_empty() && a.len() == b.len() { a.len() } else { 0 };
            prop_assert_eq!(calls, expected);
        }
    }
}
