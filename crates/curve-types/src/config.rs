use serde::{Deserialize, Serialize};

/// Diagnostics emitted while traversing curves and groups.
///
/// Configuration never changes what a combinator does; it only decides
/// which `tracing` events are emitted on the silent paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    /// Emit a `debug` event when a zip is skipped because the partner is
    /// absent or has a different length.
    pub trace_skips: bool,
    /// Emit a `debug` event when a paired key traversal hands the visitor an
    /// absent partner container.
    pub trace_missing_keys: bool,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            trace_skips: true,
            trace_missing_keys: true,
        }
    }
}

impl TraversalConfig {
    /// No diagnostics at all.
    pub fn quiet() -> Self {
        Self {
            trace_skips: false,
            trace_missing_keys: false,
        }
    }

    /// Every diagnostic enabled.
    pub fn verbose() -> Self {
        Self {
            trace_skips: true,
            trace_missing_keys: true,
        }
    }
}
