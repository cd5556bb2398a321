//! Shortcut Recorder Core Library
//!
//! The state machine behind a "record a keyboard shortcut" control: focus
//! driven recording sessions, a strict filter over raw input events, and an
//! asynchronous commit protocol the caller can veto.
//!
//! The library owns no window and no event loop. The host feeds it raw input,
//! window focus notifications, and the tasks it posts to its own UI queue.
//!
//! # Example
//!
//! ```no_run
//! use shortcut_recorder_core::{RecorderController, Shortcut, ui_channel};
//!
//! # async fn host() -> shortcut_recorder_core::CoreResult<()> {
//! let (ui_tx, mut ui_rx) = ui_channel();
//! let initial: Shortcut = "super+shift+KeyU".parse()?;
//!
//! let mut recorder = RecorderController::new(
//!     Some(initial),
//!     |candidate: Option<Shortcut>| async move {
//!         println!("Saving {:?}", candidate);
//!         true
//!     },
//!     ui_tx,
//!     tokio::runtime::Handle::current(),
//! );
//!
//! recorder.focus();
//! // ... route raw input through recorder.handle_raw_event(..) ...
//!
//! while let Some(task) = ui_rx.recv().await {
//!     if let Some(change) = recorder.handle_ui_task(task) {
//!         println!("Now bound to {:?}", change.current);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod collab;
mod error;
pub mod input;
pub mod monitor;
pub mod pause;
mod recorder;
mod shortcut;
mod ui_queue;
mod ui_task;
pub mod window;

pub use {
    error::{RecorderError, Result as CoreResult},
    recorder::{
        RecorderBuilder, RecorderController, RecorderDisplay, RecorderId, ShortcutChange, filter,
    },
    shortcut::{Platform, SHORTCUT_MODIFIERS, Shortcut},
    ui_queue::{UiReceiver, UiSender, ui_channel},
    ui_task::{UiTask, UiTaskKind},
};

/// Key and modifier identifiers used by [`Shortcut`].
pub use global_hotkey::hotkey::{Code, Modifiers};

#[cfg(test)]
mod tests;
