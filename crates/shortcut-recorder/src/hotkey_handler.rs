//! Global hotkey for the recorded shortcut.
//!
//! `HotkeyRegistrar` owns the `GlobalHotKeyManager` on the main thread and
//! rebinds it whenever the recorder commits. `HotkeyHandler` runs on the
//! tokio runtime, listens on the global event channel, and forwards presses
//! of the bound hotkey towards the event loop. Presses are dropped while any
//! recorder is recording, so a user re-recording the same combination does
//! not trigger it.

use crate::{AppError, AppEvent, AppResult};

use std::{panic::Location, time::Duration};

use error_location::ErrorLocation;
use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState, hotkey::HotKey};
use shortcut_recorder_core::{Shortcut, pause::PauseFlag};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Owns the hotkey registration.
///
/// Must live on a thread with a message pump (the main thread running the
/// `tao` event loop) so that `WM_HOTKEY` messages are dispatched on Windows.
pub struct HotkeyRegistrar {
    manager: GlobalHotKeyManager,
    current: Option<HotKey>,
    bound_tx: watch::Sender<Option<u32>>,
}

impl HotkeyRegistrar {
    /// Create the manager. Nothing is registered yet.
    #[track_caller]
    pub fn new() -> AppResult<(Self, watch::Receiver<Option<u32>>)> {
        let manager =
            GlobalHotKeyManager::new().map_err(|e| AppError::HotkeyRegistrationFailed {
                reason: format!("Failed to create manager: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let (bound_tx, bound_rx) = watch::channel(None);

        Ok((
            Self {
                manager,
                current: None,
                bound_tx,
            },
            bound_rx,
        ))
    }

    /// Id of the registered hotkey, if any.
    pub fn bound_id(&self) -> Option<u32> {
        self.current.map(|hotkey| hotkey.id())
    }

    /// Replace the registered hotkey with `shortcut`.
    ///
    /// On failure the previous hotkey stays unregistered and the handler
    /// stops forwarding presses.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn rebind(&mut self, shortcut: Option<Shortcut>) -> AppResult<()> {
        if let Some(previous) = self.current.take() {
            self.manager
                .unregister(previous)
                .map_err(|e| AppError::HotkeyRegistrationFailed {
                    reason: format!("Failed to unregister {}: {}", Shortcut::from(previous), e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
            debug!(hotkey = %Shortcut::from(previous), "Global hotkey unregistered");
        }
        self.bound_tx.send_replace(None);

        let Some(shortcut) = shortcut else {
            info!("Global hotkey cleared");
            return Ok(());
        };

        let hotkey = shortcut.to_hotkey();
        self.manager
            .register(hotkey)
            .map_err(|e| AppError::HotkeyRegistrationFailed {
                reason: format!("Failed to register {}: {}", shortcut, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.current = Some(hotkey);
        self.bound_tx.send_replace(Some(hotkey.id()));

        info!(hotkey = %shortcut, "Global hotkey registered");

        Ok(())
    }
}

/// Forwards presses of the bound hotkey to the event loop.
pub struct HotkeyHandler {
    bound_rx: watch::Receiver<Option<u32>>,
    pause: PauseFlag,
    app_tx: mpsc::UnboundedSender<AppEvent>,
}

impl HotkeyHandler {
    /// Create a handler following the registrar's bound id.
    pub fn new(
        bound_rx: watch::Receiver<Option<u32>>,
        pause: PauseFlag,
        app_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            bound_rx,
            pause,
            app_tx,
        }
    }

    /// Whether `event` should reach the application.
    pub fn should_dispatch(event: &GlobalHotKeyEvent, bound: Option<u32>, paused: bool) -> bool {
        event.state == HotKeyState::Pressed && bound == Some(event.id) && !paused
    }

    /// Run the hotkey handler event loop.
    ///
    /// This method blocks until a shutdown signal is received.
    #[instrument(skip_all)]
    pub async fn run(&self, mut shutdown_rx: watch::Receiver<bool>) -> AppResult<()> {
        let receiver = GlobalHotKeyEvent::receiver().clone();
        let (event_tx, mut event_rx) = mpsc::channel(32);

        // GlobalHotKeyEvent::receiver() is a blocking crossbeam receiver, so a
        // single blocking task forwards into the async channel. It exits on the
        // first send after event_rx is dropped.
        let handle = tokio::task::spawn_blocking(move || {
            while let Ok(event) = receiver.recv() {
                if event_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Hotkey handler shutting down");
                    break;
                }
                Some(event) = event_rx.recv() => {
                    self.handle_event(&event);
                }
            }
        }

        drop(event_rx);

        match tokio::time::timeout(Duration::from_secs(1), handle).await {
            Ok(Ok(())) => debug!("Hotkey event forwarder stopped cleanly"),
            Ok(Err(e)) => warn!(error = ?e, "Hotkey event forwarder task panicked"),
            Err(_) => debug!(
                "Hotkey event forwarder did not stop within timeout, \
                   will be cleaned up on exit"
            ),
        }

        Ok(())
    }

    pub(crate) fn handle_event(&self, event: &GlobalHotKeyEvent) {
        let bound = *self.bound_rx.borrow();
        let paused = self.pause.is_paused();

        if !Self::should_dispatch(event, bound, paused) {
            if paused && bound == Some(event.id) {
                debug!(hotkey_id = event.id, "Hotkey ignored while recording");
            }
            return;
        }

        let press_id = Uuid::new_v4();
        if let Err(e) = self.app_tx.send(AppEvent::HotkeyPressed { press_id }) {
            warn!(error = ?e, "Event loop closed, dropping hotkey press");
            return;
        }

        info!(press_id = %press_id, "Hotkey pressed");
    }
}
