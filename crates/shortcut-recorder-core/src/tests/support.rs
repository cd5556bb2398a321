use crate::{
    Code, Modifiers, RecorderController, Shortcut, ShortcutChange, UiReceiver, UiTaskKind,
    collab::AlertSink,
    input::{MouseButton, Point, RawInputEvent, RawKeyEvent, Rect},
    monitor::EventTap,
    pause::PauseFlag,
    ui_channel,
    window::WindowFocusHub,
};

use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use tokio::{runtime::Handle, time::timeout};

pub(crate) const FRAME: Rect = Rect {
    origin: Point { x: 10.0, y: 10.0 },
    width: 200.0,
    height: 24.0,
};

#[derive(Clone, Default)]
pub(crate) struct CountingAlert(pub(crate) Arc<AtomicUsize>);

impl AlertSink for CountingAlert {
    fn beep(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

pub(crate) fn shortcut(code: Code, modifiers: Modifiers) -> Shortcut {
    Shortcut::new(code, modifiers)
}

pub(crate) fn key(code: &str, modifiers: Modifiers) -> RawInputEvent {
    RawInputEvent::KeyDown(RawKeyEvent::new(code, modifiers))
}

pub(crate) fn click(button: MouseButton, x: f64, y: f64) -> RawInputEvent {
    RawInputEvent::MouseUp {
        button,
        location: Point::new(x, y),
    }
}

/// A recorder wired to isolated collaborators that record what happened.
pub(crate) struct Harness {
    pub(crate) recorder: RecorderController,
    pub(crate) ui_rx: UiReceiver,
    pub(crate) gate_calls: Arc<Mutex<Vec<Option<Shortcut>>>>,
    pub(crate) alerts: Arc<AtomicUsize>,
    pub(crate) tap: EventTap,
    pub(crate) pause: PauseFlag,
    pub(crate) hub: WindowFocusHub,
    resolved: usize,
}

impl Harness {
    /// Must be called from inside a tokio runtime.
    pub(crate) fn new(initial: Option<Shortcut>, accept: bool) -> Self {
        Self::with_shared(initial, accept, EventTap::new(), PauseFlag::new())
    }

    pub(crate) fn with_shared(
        initial: Option<Shortcut>,
        accept: bool,
        tap: EventTap,
        pause: PauseFlag,
    ) -> Self {
        let (ui_tx, ui_rx) = ui_channel();
        let gate_calls = Arc::new(Mutex::new(Vec::new()));
        let alert = CountingAlert::default();
        let alerts = Arc::clone(&alert.0);

        let calls = Arc::clone(&gate_calls);
        let gate = move |candidate: Option<Shortcut>| {
            calls
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push(candidate);
            async move { accept }
        };

        let recorder = RecorderController::builder(ui_tx, Handle::current())
            .initial(initial)
            .on_change(gate)
            .alert(alert)
            .event_tap(tap.clone())
            .pause_flag(pause.clone())
            .frame(FRAME)
            .build();

        Self {
            recorder,
            ui_rx,
            gate_calls,
            alerts,
            tap,
            pause,
            hub: WindowFocusHub::new(),
            resolved: 0,
        }
    }

    pub(crate) fn gate_calls(&self) -> Vec<Option<Shortcut>> {
        self.gate_calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub(crate) fn alert_count(&self) -> usize {
        self.alerts.load(Ordering::SeqCst)
    }

    /// Deliver every pending gate answer and queued UI task to the recorder.
    pub(crate) async fn settle(&mut self) -> Vec<ShortcutChange> {
        let mut changes = Vec::new();

        while self.resolved < self.gate_calls().len() {
            let task = match timeout(Duration::from_secs(1), self.ui_rx.recv()).await {
                Ok(Some(task)) => task,
                _ => break,
            };
            if matches!(task.kind, UiTaskKind::CommitResolved { .. }) {
                self.resolved += 1;
            }
            changes.extend(self.recorder.handle_ui_task(task));
        }

        while let Ok(task) = self.ui_rx.try_recv() {
            changes.extend(self.recorder.handle_ui_task(task));
        }

        changes
    }
}
