//! Foundation types for curve combinators.
//!
//! This crate holds what [`curve-core`] and [`curve-group`] share: the
//! callback contracts handed to every traversal, the error taxonomy of the
//! checked inspection helpers, and the configuration that gates traversal
//! diagnostics.
//!
//! # Key Types
//!
//! - [`Guard`] / [`BiGuard`] / [`TriGuard`] -- Optional predicates of one, two
//!   and three arguments; `None` means "always true"
//! - [`CurveError`] -- Errors returned by checked lookups and zip probes
//! - [`TraversalConfig`] -- Which skip and missing-key diagnostics are emitted
//!
//! [`curve-core`]: ../curve_core/index.html
//! [`curve-group`]: ../curve_group/index.html

pub mod callback;
pub mod config;
pub mod error;

pub use callback::{into_ok, passes, passes_bi, passes_tri, BiGuard, Guard, TriGuard};
pub use config::TraversalConfig;
pub use error::{CurveError, Result};
