use crate::{CoreResult, RecorderError, UiTask};

use std::panic::Location;

use error_location::ErrorLocation;
use tokio::sync::mpsc;

/// Receiving half of the UI task queue, drained by the host's UI loop.
pub type UiReceiver = mpsc::UnboundedReceiver<UiTask>;

/// Sending half of the UI task queue.
///
/// Cloneable and `Send`, so gate continuations running on the async runtime
/// can hand their results back to the UI thread.
#[derive(Debug, Clone)]
pub struct UiSender {
    tx: mpsc::UnboundedSender<UiTask>,
}

impl UiSender {
    /// Post a task to run on the next turn of the UI loop.
    #[track_caller]
    pub fn post(&self, task: UiTask) -> CoreResult<()> {
        self.tx.send(task).map_err(|e| RecorderError::UiLoopClosed {
            task: format!("{:?}", e.0.kind),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

/// Create the UI task queue.
pub fn ui_channel() -> (UiSender, UiReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (UiSender { tx }, rx)
}
