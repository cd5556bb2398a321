use std::io::Write;

use shortcut_recorder_core::collab::AlertSink;
use tracing::{debug, warn};

/// Rings the terminal bell on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl AlertSink for TerminalBell {
    fn beep(&self) {
        debug!("Alert");
        let mut stderr = std::io::stderr();
        if let Err(e) = stderr.write_all(b"\x07").and_then(|()| stderr.flush()) {
            warn!(error = ?e, "Failed to ring terminal bell");
        }
    }
}
