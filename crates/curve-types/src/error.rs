//! Error types for checked curve and group inspection.
//!
//! The combinators never return these: skips are silent and callback
//! failures are handed back unmodified. Only the explicit lookup and probe
//! helpers report a [`CurveError`].

use thiserror::Error;

/// Errors returned by checked curve and group helpers.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CurveError {
    /// An index past the end of a curve was requested.
    #[error("index {index} out of bounds for curve of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Two curves cannot be zipped because their lengths differ.
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// A zip was probed on an empty curve; it would visit nothing.
    #[error("curve is empty")]
    EmptyCurve,

    /// A zip was probed without a partner curve.
    #[error("no partner curve supplied")]
    MissingPartner,

    /// The key has no curve in the group.
    #[error("key not found: {key}")]
    KeyNotFound { key: String },
}

impl CurveError {
    /// Build a [`CurveError::KeyNotFound`] from any debuggable key.
    pub fn key_not_found(key: &impl std::fmt::Debug) -> Self {
        Self::KeyNotFound {
            key: format!("{key:?}"),
        }
    }
}

/// Convenience type alias for checked curve operations.
pub type Result<T> = std::result::Result<T, CurveError>;
