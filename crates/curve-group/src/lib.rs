//! Keyed groups of curves.
//!
//! A [`CurveGroup`] maps each key to exactly one [`Curve`]. Its combinators
//! inject a key into the guard and transform callbacks before delegating to
//! the curve's own combinators, and walk the key set of one group or of two
//! groups side by side.
//!
//! Several combinators take the curve to walk as an explicit argument
//! instead of looking it up by key, so a caller may pair a key with a curve
//! stored elsewhere. [`CurveGroup::for_each_key_paired`] relies on this to
//! zip the curves of two groups.
//!
//! # Modules
//!
//! - [`group`] -- The [`CurveGroup`] container
//! - [`combinator`] -- Key-aware combinators and key-set traversals

pub mod combinator;
pub mod group;

pub use curve_core::Curve;
pub use curve_types::{BiGuard, CurveError, TraversalConfig, TriGuard};
pub use group::CurveGroup;
