use shortcut_recorder_core::UiTask;

use uuid::Uuid;

/// Events delivered to the main UI thread through the event loop proxy.
///
/// The main thread owns the window, the recorder, and the
/// `GlobalHotKeyManager`, so everything that touches them flows through here.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Deferred recorder work: gate answers and focus restores.
    Ui(UiTask),
    /// The bound global hotkey was pressed while no recorder was recording.
    HotkeyPressed {
        /// Unique press ID for log correlation.
        press_id: Uuid,
    },
}
