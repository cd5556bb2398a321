use crate::{
    RecorderController, Shortcut, UiSender,
    collab::{
        AlertSink, AllowAll, CodeNameDecoder, EnglishLabels, Localizer, PersistenceGate,
        ShortcutDecoder, ShortcutValidator, SilentAlert, accept_all,
    },
    input::Rect,
    monitor::EventTap,
    pause::PauseFlag,
};

use tokio::runtime::Handle;

/// Configures a [`RecorderController`].
///
/// Every collaborator has a default: accept-all gate, code-name decoder,
/// allow-all validator, English labels, silent alert, and the process-wide
/// event tap and pause flag.
pub struct RecorderBuilder {
    pub(super) ui: UiSender,
    pub(super) runtime: Handle,
    pub(super) initial: Option<Shortcut>,
    pub(super) gate: Box<dyn PersistenceGate>,
    pub(super) decoder: Box<dyn ShortcutDecoder>,
    pub(super) validator: Box<dyn ShortcutValidator>,
    pub(super) localizer: Box<dyn Localizer>,
    pub(super) alert: Box<dyn AlertSink>,
    pub(super) tap: EventTap,
    pub(super) pause: PauseFlag,
    pub(super) frame: Rect,
}

impl RecorderBuilder {
    pub(crate) fn new(ui: UiSender, runtime: Handle) -> Self {
        Self {
            ui,
            runtime,
            initial: None,
            gate: Box::new(accept_all()),
            decoder: Box::new(CodeNameDecoder),
            validator: Box::new(AllowAll),
            localizer: Box::new(EnglishLabels),
            alert: Box::new(SilentAlert),
            tap: EventTap::shared(),
            pause: PauseFlag::global(),
            frame: Rect::default(),
        }
    }

    /// Initial stored shortcut.
    pub fn initial(mut self, initial: Option<Shortcut>) -> Self {
        self.initial = initial;
        self
    }

    /// Gate consulted before every change.
    pub fn on_change(mut self, gate: impl PersistenceGate + 'static) -> Self {
        self.gate = Box::new(gate);
        self
    }

    /// Raw key decoder.
    pub fn decoder(mut self, decoder: impl ShortcutDecoder + 'static) -> Self {
        self.decoder = Box::new(decoder);
        self
    }

    /// Caller policy over acceptable shortcuts.
    pub fn validator(mut self, validator: impl ShortcutValidator + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    /// Placeholder text source.
    pub fn localizer(mut self, localizer: impl Localizer + 'static) -> Self {
        self.localizer = Box::new(localizer);
        self
    }

    /// Audible alert primitive.
    pub fn alert(mut self, alert: impl AlertSink + 'static) -> Self {
        self.alert = Box::new(alert);
        self
    }

    /// Event tap to install monitors in.
    pub fn event_tap(mut self, tap: EventTap) -> Self {
        self.tap = tap;
        self
    }

    /// Pause flag raised while recording.
    pub fn pause_flag(mut self, pause: PauseFlag) -> Self {
        self.pause = pause;
        self
    }

    /// Initial control bounds in window coordinates.
    pub fn frame(mut self, frame: Rect) -> Self {
        self.frame = frame;
        self
    }

    /// Finish configuration.
    pub fn build(self) -> RecorderController {
        RecorderController::from_builder(self)
    }
}
