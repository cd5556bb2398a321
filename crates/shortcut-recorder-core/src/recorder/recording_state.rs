use crate::{monitor::EventMonitor, pause::PauseGuard};

use std::time::Instant;

use uuid::Uuid;

/// Resources held for the duration of one recording session.
///
/// Dropping the session releases the event monitor and lowers the pause flag.
#[derive(Debug)]
pub(crate) struct RecordingSession {
    /// Unique session ID for log correlation.
    pub(crate) session_id: Uuid,
    /// When recording started.
    pub(crate) started_at: Instant,
    pub(crate) monitor: EventMonitor,
    _pause: PauseGuard,
}

impl RecordingSession {
    pub(crate) fn new(monitor: EventMonitor, pause: PauseGuard) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            started_at: Instant::now(),
            monitor,
            _pause: pause,
        }
    }
}

/// Recording state of a recorder control.
///
/// A monitor exists exactly when the state is `Recording`.
#[derive(Debug, Default)]
pub(crate) enum RecordingState {
    /// Not listening for shortcuts.
    #[default]
    Idle,
    /// Intercepting input.
    Recording(RecordingSession),
}
