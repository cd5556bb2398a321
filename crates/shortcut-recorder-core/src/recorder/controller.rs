//! The recorder control's state machine.
//!
//! Focus starts a recording session, the session's monitor feeds raw input
//! through the event filter, and accepted input becomes a commit attempt that
//! the caller's persistence gate may veto. Gate answers come back as UI tasks
//! and apply whether or not the session is still running.

use crate::{
    RecorderBuilder, RecorderError, RecorderId, Shortcut, UiSender, UiTask, UiTaskKind,
    collab::{AlertSink, Localizer, PersistenceGate, PlaceholderKey, ShortcutDecoder, ShortcutValidator},
    input::{EventKind, Propagation, RawInputEvent, Rect},
    monitor::EventTap,
    pause::PauseFlag,
    recorder::{
        RecorderDisplay, ShortcutChange,
        filter::{self, FilterAction, FilterContext},
        recording_state::{RecordingSession, RecordingState},
    },
    window::{FocusGuard, WindowFocusEvent, WindowFocusHub, WindowSubscription},
};

use std::panic::Location;

use error_location::ErrorLocation;
use tokio::runtime::Handle;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Event kinds intercepted while recording.
const MONITORED_EVENTS: [EventKind; 3] = [
    EventKind::KeyDown,
    EventKind::PrimaryMouseUp,
    EventKind::SecondaryMouseUp,
];

/// Interactive control that records a keyboard shortcut.
///
/// Lives on the UI thread. Everything except the persistence gate runs
/// synchronously inside the host's event handlers.
pub struct RecorderController {
    id: RecorderId,
    current: Option<Shortcut>,
    text: String,
    placeholder: String,
    caret_visible: bool,
    focused: bool,
    frame: Rect,
    state: RecordingState,
    focus_guard: FocusGuard,
    window: Option<WindowSubscription>,
    gate: Box<dyn PersistenceGate>,
    decoder: Box<dyn ShortcutDecoder>,
    validator: Box<dyn ShortcutValidator>,
    localizer: Box<dyn Localizer>,
    alert: Box<dyn AlertSink>,
    tap: EventTap,
    pause: PauseFlag,
    ui: UiSender,
    runtime: Handle,
}

impl RecorderController {
    /// Create a recorder bound to an initial value and a commit gate.
    ///
    /// `runtime` runs gate futures; `ui` carries their answers back to the
    /// UI loop, which must hand them to [`handle_ui_task`](Self::handle_ui_task).
    pub fn new(
        initial: Option<Shortcut>,
        on_change: impl PersistenceGate + 'static,
        ui: UiSender,
        runtime: Handle,
    ) -> Self {
        Self::builder(ui, runtime)
            .initial(initial)
            .on_change(on_change)
            .build()
    }

    /// Start configuring a recorder with default collaborators.
    pub fn builder(ui: UiSender, runtime: Handle) -> RecorderBuilder {
        RecorderBuilder::new(ui, runtime)
    }

    pub(crate) fn from_builder(builder: RecorderBuilder) -> Self {
        let id = RecorderId::new();
        let placeholder = builder.localizer.localize(PlaceholderKey::RecordShortcut);

        let mut recorder = Self {
            id,
            current: None,
            text: String::new(),
            placeholder,
            caret_visible: true,
            focused: false,
            frame: builder.frame,
            state: RecordingState::Idle,
            focus_guard: FocusGuard::new(id, builder.ui.clone()),
            window: None,
            gate: builder.gate,
            decoder: builder.decoder,
            validator: builder.validator,
            localizer: builder.localizer,
            alert: builder.alert,
            tap: builder.tap,
            pause: builder.pause,
            ui: builder.ui,
            runtime: builder.runtime,
        };
        recorder.set_current_shortcut(builder.initial);

        debug!(recorder = %id, initial = ?builder.initial, "Recorder created");

        recorder
    }

    /// Identity used to route UI tasks and notifications to this recorder.
    pub fn id(&self) -> RecorderId {
        self.id
    }

    /// The stored shortcut.
    pub fn current_shortcut(&self) -> Option<Shortcut> {
        self.current
    }

    /// Replace the stored shortcut and the displayed text.
    pub fn set_current_shortcut(&mut self, value: Option<Shortcut>) {
        self.current = value;
        self.text = value.map(|shortcut| shortcut.to_string()).unwrap_or_default();
    }

    /// Whether a recording session is active.
    pub fn is_recording(&self) -> bool {
        matches!(self.state, RecordingState::Recording(_))
    }

    /// Whether the control holds focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the control may become the focus target right now.
    pub fn accepts_focus(&self) -> bool {
        self.focus_guard.can_accept_focus()
    }

    /// Control bounds in window coordinates.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Update the control bounds after a layout pass.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    /// Snapshot of everything the UI layer draws.
    pub fn display(&self) -> RecorderDisplay {
        RecorderDisplay {
            text: self.text.clone(),
            placeholder: self.placeholder.clone(),
            caret_visible: self.caret_visible,
            shows_clear_button: !self.text.is_empty(),
            accepts_focus: self.accepts_focus(),
            is_focused: self.focused,
            is_recording: self.is_recording(),
        }
    }

    /// Try to make the control the focus target, starting a recording session.
    ///
    /// Returns `false` while the focus guard is armed.
    #[instrument(skip(self), fields(recorder = %self.id))]
    pub fn focus(&mut self) -> bool {
        if !self.focus_guard.can_accept_focus() {
            debug!("Focus refused while guard is armed");
            return false;
        }

        self.focused = true;
        self.begin_recording();
        true
    }

    /// Give up focus and end any recording session.
    pub fn blur(&mut self) {
        self.focused = false;
        self.end_recording();
    }

    /// Host end-of-editing notification.
    ///
    /// Ends the session even when a commit is still waiting on the gate.
    pub fn end_editing(&mut self) {
        self.blur();
    }

    fn begin_recording(&mut self) {
        // Release the previous session's monitor before installing a new one.
        self.state = RecordingState::Idle;

        let monitor = self.tap.install(self.id, &MONITORED_EVENTS);
        let session = RecordingSession::new(monitor, self.pause.acquire());
        let session_id = session.session_id;
        self.state = RecordingState::Recording(session);

        self.placeholder = self.localizer.localize(PlaceholderKey::PressShortcut);
        self.caret_visible = false;

        info!(recorder = %self.id, session_id = %session_id, "Recording started");
    }

    /// End the recording session. Safe to call when not recording.
    pub fn end_recording(&mut self) {
        let RecordingState::Recording(session) = std::mem::take(&mut self.state) else {
            return;
        };

        let session_id = session.session_id;
        let duration = session.started_at.elapsed();
        // Releases the monitor and the pause flag.
        drop(session);

        self.placeholder = self.localizer.localize(PlaceholderKey::RecordShortcut);
        self.caret_visible = true;

        info!(
            recorder = %self.id,
            session_id = %session_id,
            duration_ms = duration.as_millis(),
            "Recording ended"
        );
    }

    /// Ask the persistence gate to adopt `candidate`.
    ///
    /// Returns immediately with the commit's log id. The answer arrives as a
    /// [`UiTaskKind::CommitResolved`] task; nothing changes until then, and
    /// nothing changes at all if the gate refuses.
    #[instrument(skip(self), fields(recorder = %self.id))]
    pub fn try_commit(&self, candidate: Option<Shortcut>) -> Uuid {
        let commit_id = Uuid::new_v4();
        let request = self.gate.request(candidate);
        let runtime = self.runtime.clone();
        let ui = self.ui.clone();
        let recorder = self.id;

        debug!(commit_id = %commit_id, "Commit requested");

        self.runtime.spawn(async move {
            let accepted = match runtime.spawn(request).await {
                Ok(accepted) => accepted,
                Err(e) => {
                    let error = RecorderError::GateTaskFailed {
                        reason: e.to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    };
                    warn!(commit_id = %commit_id, error = %error, "Treating failed gate as refusal");
                    false
                }
            };

            let task = UiTask {
                recorder,
                kind: UiTaskKind::CommitResolved {
                    commit_id,
                    candidate,
                    accepted,
                },
            };

            if let Err(e) = ui.post(task) {
                warn!(commit_id = %commit_id, error = ?e, "Commit answer dropped");
            }
        });

        commit_id
    }

    /// Remove the stored shortcut, subject to the gate.
    pub fn clear(&self) -> Uuid {
        self.try_commit(None)
    }

    /// Host report that the field text was edited.
    ///
    /// An emptied field is an implicit clear; focus is requested again so a
    /// replacement can be typed straight away.
    pub fn text_did_change(&mut self, text: &str) {
        self.text = text.to_string();

        if !text.is_empty() {
            return;
        }

        self.clear();
        if !self.focused {
            self.focus();
        }
    }

    /// Run the event filter over an event delivered before normal dispatch.
    ///
    /// Events are only examined while recording and only for monitored kinds;
    /// everything else is forwarded untouched.
    pub fn handle_raw_event(&mut self, event: &RawInputEvent) -> Propagation {
        let intercepted = match &self.state {
            RecordingState::Recording(session) => session.monitor.intercepts(event.kind()),
            RecordingState::Idle => false,
        };
        if !intercepted {
            return Propagation::Forward;
        }

        let verdict = filter::evaluate(
            event,
            &FilterContext {
                frame: self.frame,
                current: self.current.as_ref(),
                decoder: self.decoder.as_ref(),
                validator: self.validator.as_ref(),
            },
        );

        debug!(
            recorder = %self.id,
            action = ?verdict.action,
            propagation = ?verdict.propagation,
            "Input event filtered"
        );

        match verdict.action {
            FilterAction::Blur | FilterAction::Reselect => self.blur(),
            FilterAction::Clear => {
                self.clear();
            }
            FilterAction::Commit(shortcut) => {
                self.try_commit(Some(shortcut));
                self.blur();
            }
            FilterAction::Refused(rejection) => {
                info!(recorder = %self.id, reason = %rejection, "Shortcut refused by validator");
                self.alert.beep();
            }
            FilterAction::Undecodable => self.alert.beep(),
            FilterAction::Ignore => {}
        }

        verdict.propagation
    }

    /// Join a window: subscribe to its key-focus notifications and arm the
    /// focus guard.
    #[instrument(skip(self, window), fields(recorder = %self.id, window_id = %window.window_id()))]
    pub fn attach_to_window(&mut self, window: &WindowFocusHub) {
        // Drop any old subscription before taking the new one.
        self.window = None;
        self.window = Some(window.subscribe(self.id));
        self.focus_guard.rearm();
    }

    /// Leave the window: unsubscribe and end recording.
    #[instrument(skip(self), fields(recorder = %self.id))]
    pub fn detach_from_window(&mut self) {
        if self.window.take().is_none() {
            debug!("Detach without a window");
        }
        self.focused = false;
        self.end_recording();
    }

    /// Handle a key-focus notification from the attached window.
    pub fn handle_window_event(&mut self, event: WindowFocusEvent) {
        if self.window.is_none() {
            debug!(recorder = %self.id, event = ?event, "Window notification after detach ignored");
            return;
        }

        match event {
            WindowFocusEvent::BecameKey => self.focus_guard.rearm(),
            WindowFocusEvent::ResignedKey => {
                self.end_recording();
                self.focused = false;
            }
        }
    }

    /// Run a task posted to the UI loop for this recorder.
    ///
    /// Returns the change when an accepted commit updated the stored value.
    pub fn handle_ui_task(&mut self, task: UiTask) -> Option<ShortcutChange> {
        if task.recorder != self.id {
            warn!(recorder = %self.id, target = %task.recorder, "UI task routed to wrong recorder");
            return None;
        }

        match task.kind {
            UiTaskKind::RestoreFocusability { generation } => {
                self.focus_guard.restore(generation);
                None
            }
            UiTaskKind::CommitResolved {
                commit_id,
                candidate,
                accepted,
            } => {
                if !accepted {
                    info!(recorder = %self.id, commit_id = %commit_id, "Commit refused by gate");
                    return None;
                }

                let previous = self.current;
                self.set_current_shortcut(candidate);

                info!(
                    recorder = %self.id,
                    commit_id = %commit_id,
                    shortcut = %self.text,
                    "Shortcut committed"
                );

                Some(ShortcutChange {
                    previous,
                    current: candidate,
                })
            }
        }
    }
}

impl Drop for RecorderController {
    fn drop(&mut self) {
        self.end_recording();
        self.window = None;
    }
}
