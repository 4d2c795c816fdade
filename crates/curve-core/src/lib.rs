//! Ordered curves with guarded map-and-consume combinators.
//!
//! A [`Curve`] is an insertion-ordered sequence of elements. On top of the
//! usual append/index/length surface it offers combinators that walk the
//! elements in index order and, for each one, optionally evaluate a guard,
//! compute a value with a transform, and hand `(element, value)` to a sink.
//! The zip combinators walk two curves in lockstep and are skipped silently
//! when the partner is absent or has a different length.
//!
//! # Modules
//!
//! - [`curve`] -- The [`Curve`] container and its inspection helpers
//! - [`combinator`] -- Traversal, guarded processing and zip combinators
//!
//! # Failure handling
//!
//! Every combinator has a `try_` sibling whose sink (or visitor) returns a
//! `Result`. The first `Err` stops the walk and is returned as-is; sinks that
//! already ran are not undone.

pub mod combinator;
pub mod curve;

pub use curve::Curve;
pub use curve_types::{BiGuard, CurveError, Guard, TraversalConfig};
