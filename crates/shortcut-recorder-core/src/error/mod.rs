use error_location::ErrorLocation;
use thiserror::Error;

/// Recorder errors with source location tracking.
///
/// None of these ever reach the user interface. The controller logs them
/// and falls back to a local state transition.
#[derive(Error, Debug)]
pub enum RecorderError {
    /// A textual shortcut could not be parsed.
    #[error("Invalid shortcut {input:?}: {reason} {location}")]
    InvalidShortcut {
        /// The rejected input string.
        input: String,
        /// Human-readable reason for failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The UI loop dropped its task receiver.
    #[error("UI loop closed, dropped task: {task} {location}")]
    UiLoopClosed {
        /// Description of the task that could not be delivered.
        task: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The persistence gate task panicked or was cancelled.
    #[error("Persistence gate task failed: {reason} {location}")]
    GateTaskFailed {
        /// Description of the join failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`RecorderError`].
pub type Result<T> = std::result::Result<T, RecorderError>;
