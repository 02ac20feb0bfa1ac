//! Error types for the picker core.

use std::path::PathBuf;

use crate::interaction::gesture::DragPhase;
use crate::interaction::sinks::SinkError;

/// Errors returned while dispatching gestures.
#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    /// A move/end/terminate arrived with no drag in progress.
    #[error("{phase} received while no drag is active")]
    NotDragging { phase: DragPhase },

    /// A host-supplied sink failed. The error is passed through untouched.
    #[error("event sink failed: {0}")]
    Sink(#[source] SinkError),
}

/// Errors that can occur while loading a [`PickerConfig`](crate::PickerConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read picker config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid picker config: {0}")]
    Parse(#[from] serde_json::Error),
}
