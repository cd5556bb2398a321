//! The `tao` window hosting a single recorder control.
//!
//! The whole window client area stands in for the control's text field. The
//! title bar mirrors what the field would display.

use crate::{
    AppError, AppResult, AppEvent,
    input_translation::{key_code_name, modifiers_from, mouse_button},
};

use std::panic::Location;

use error_location::ErrorLocation;
use shortcut_recorder_core::{
    Modifiers, RecorderController, RecorderDisplay, ShortcutChange, UiTask,
    input::{MouseButton, Point, Propagation, RawInputEvent, RawKeyEvent, Rect},
    monitor::EventTap,
    window::{WindowFocusEvent, WindowFocusHub},
};
use tao::{
    dpi::LogicalSize,
    event::{ElementState, WindowEvent},
    event_loop::EventLoopWindowTarget,
    window::{Window, WindowBuilder, WindowId},
};
use tracing::{debug, info};
use uuid::Uuid;

/// Bounds of the recorder control in window coordinates.
pub const CONTROL_FRAME: Rect = Rect {
    origin: Point { x: 12.0, y: 12.0 },
    width: 296.0,
    height: 40.0,
};

const WINDOW_WIDTH: f64 = 320.0;
const WINDOW_HEIGHT: f64 = 64.0;

/// What the event loop should do after a window event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowOutcome {
    /// Keep running.
    Continue,
    /// The user closed the window.
    Close,
}

/// Title text for a recorder's display state.
pub fn window_title(display: &RecorderDisplay, hotkey_presses: u64) -> String {
    let body = if display.text.is_empty() {
        display.placeholder.as_str()
    } else {
        display.text.as_str()
    };
    let marker = if display.is_recording { "● " } else { "" };

    if hotkey_presses == 0 {
        format!("{marker}{body}")
    } else {
        format!("{marker}{body} ({hotkey_presses} presses)")
    }
}

/// Main-thread owner of the window, its focus hub and the recorder.
pub struct RecorderWindow {
    window: Window,
    hub: WindowFocusHub,
    recorder: RecorderController,
    tap: EventTap,
    cursor: Point,
    modifiers: Modifiers,
    hotkey_presses: u64,
}

impl RecorderWindow {
    /// Open the window and attach `recorder` to it.
    #[track_caller]
    pub fn new(
        target: &EventLoopWindowTarget<AppEvent>,
        mut recorder: RecorderController,
        tap: EventTap,
    ) -> AppResult<Self> {
        let window = WindowBuilder::new()
            .with_title(recorder.display().placeholder)
            .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_resizable(false)
            .build(target)
            .map_err(|e| AppError::WindowError {
                reason: format!("Failed to create window: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let hub = WindowFocusHub::new();
        recorder.set_frame(CONTROL_FRAME);
        recorder.attach_to_window(&hub);

        info!(window_id = %hub.window_id(), recorder = %recorder.id(), "Recorder window opened");

        let host = Self {
            window,
            hub,
            recorder,
            tap,
            cursor: Point::default(),
            modifiers: Modifiers::empty(),
            hotkey_presses: 0,
        };
        host.refresh_title();

        Ok(host)
    }

    /// Id used to route `tao` window events here.
    pub fn window_id(&self) -> WindowId {
        self.window.id()
    }

    /// Feed a `tao` window event through the recorder.
    pub fn handle_window_event(&mut self, event: &WindowEvent<'_>) -> WindowOutcome {
        match event {
            WindowEvent::CloseRequested => {
                self.recorder.detach_from_window();
                return WindowOutcome::Close;
            }
            WindowEvent::Focused(true) => self.notify(WindowFocusEvent::BecameKey),
            WindowEvent::Focused(false) => self.notify(WindowFocusEvent::ResignedKey),
            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f64>(self.window.scale_factor());
                self.cursor = Point::new(logical.x, logical.y);
            }
            WindowEvent::ModifiersChanged(state) => {
                self.modifiers = modifiers_from(*state);
                self.dispatch(&RawInputEvent::FlagsChanged(self.modifiers));
            }
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button,
                ..
            } => self.mouse_up(mouse_button(*button)),
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                if let Some(code) = key_code_name(event.physical_key) {
                    let raw = RawInputEvent::KeyDown(RawKeyEvent::new(code, self.modifiers));
                    self.dispatch(&raw);
                }
            }
            _ => return WindowOutcome::Continue,
        }

        self.refresh_title();
        WindowOutcome::Continue
    }

    /// Run deferred recorder work posted through the UI queue.
    pub fn handle_ui_task(&mut self, task: UiTask) -> Option<ShortcutChange> {
        let change = self.recorder.handle_ui_task(task);
        self.refresh_title();
        change
    }

    /// Count a press of the bound global hotkey in the title.
    pub fn record_hotkey_press(&mut self, press_id: Uuid) {
        self.hotkey_presses += 1;
        debug!(press_id = %press_id, presses = self.hotkey_presses, "Hotkey press shown");
        self.refresh_title();
    }

    fn mouse_up(&mut self, button: MouseButton) {
        let raw = RawInputEvent::MouseUp {
            button,
            location: self.cursor,
        };
        if self.dispatch(&raw) == Propagation::Swallow {
            return;
        }

        // Normal dispatch: a click on the field focuses it.
        if button == MouseButton::Primary
            && CONTROL_FRAME.contains(self.cursor)
            && !self.recorder.is_focused()
        {
            self.recorder.focus();
        }
    }

    /// Offer an event to installed monitors, most recent first.
    fn dispatch(&mut self, event: &RawInputEvent) -> Propagation {
        for owner in self.tap.interceptors(event.kind()) {
            if owner != self.recorder.id() {
                continue;
            }
            if self.recorder.handle_raw_event(event) == Propagation::Swallow {
                return Propagation::Swallow;
            }
        }
        Propagation::Forward
    }

    fn notify(&mut self, event: WindowFocusEvent) {
        if self.hub.subscribers().contains(&self.recorder.id()) {
            self.recorder.handle_window_event(event);
        }
    }

    fn refresh_title(&self) {
        self.window
            .set_title(&window_title(&self.recorder.display(), self.hotkey_presses));
    }
}
