use crate::input::Point;

use global_hotkey::hotkey::Modifiers;

/// Mouse buttons distinguished by the event filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left button, or the single button of a trackpad click.
    Primary,
    /// Right button, or a secondary click.
    Secondary,
    /// Any other button.
    Other,
}

/// Kinds of raw input event a monitor can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A non-modifier key went down.
    KeyDown,
    /// A non-modifier key went up.
    KeyUp,
    /// Only the modifier state changed.
    FlagsChanged,
    /// Any mouse button went down.
    MouseDown,
    /// Primary mouse button released.
    PrimaryMouseUp,
    /// Secondary mouse button released.
    SecondaryMouseUp,
    /// Another mouse button released.
    OtherMouseUp,
}

/// Keys the event filter treats specially when pressed without modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialKey {
    /// Focus advance.
    Tab,
    /// Cancel.
    Escape,
    /// The main delete key (`Backspace` on PC layouts).
    Delete,
    /// The forward delete key.
    ForwardDelete,
    /// A dedicated backspace key, such as the numpad one.
    Backspace,
}

impl SpecialKey {
    /// Classify a W3C `KeyboardEvent.code` name.
    pub fn from_code_name(code: &str) -> Option<Self> {
        match code {
            "Tab" => Some(Self::Tab),
            "Escape" => Some(Self::Escape),
            "Backspace" => Some(Self::Delete),
            "Delete" => Some(Self::ForwardDelete),
            "NumpadBackspace" => Some(Self::Backspace),
            _ => None,
        }
    }

    /// Whether this key clears the recorder.
    pub fn is_deletion(&self) -> bool {
        matches!(self, Self::Delete | Self::ForwardDelete | Self::Backspace)
    }
}

/// A keyboard event as reported by the host platform.
#[derive(Debug, Clone, PartialEq)]
pub struct RawKeyEvent {
    /// W3C `KeyboardEvent.code` name of the physical key (e.g. `KeyK`).
    pub code: String,
    /// Modifier flags held when the key was pressed, unnormalised.
    pub modifiers: Modifiers,
    /// Special key classification, if any.
    pub special: Option<SpecialKey>,
}

impl RawKeyEvent {
    /// Create a key event, classifying special keys from the code name.
    pub fn new(code: impl Into<String>, modifiers: Modifiers) -> Self {
        let code = code.into();
        let special = SpecialKey::from_code_name(&code);
        Self {
            code,
            modifiers,
            special,
        }
    }
}

/// Raw input event delivered by the host before normal dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInputEvent {
    /// Key pressed.
    KeyDown(RawKeyEvent),
    /// Key released.
    KeyUp(RawKeyEvent),
    /// Modifier state changed without a key press.
    FlagsChanged(Modifiers),
    /// Mouse button pressed.
    MouseDown {
        /// Which button.
        button: MouseButton,
        /// Pointer location in window coordinates.
        location: Point,
    },
    /// Mouse button released.
    MouseUp {
        /// Which button.
        button: MouseButton,
        /// Pointer location in window coordinates.
        location: Point,
    },
}

impl RawInputEvent {
    /// The subscription kind this event belongs to.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::KeyDown(_) => EventKind::KeyDown,
            Self::KeyUp(_) => EventKind::KeyUp,
            Self::FlagsChanged(_) => EventKind::FlagsChanged,
            Self::MouseDown { .. } => EventKind::MouseDown,
            Self::MouseUp { button, .. } => match button {
                MouseButton::Primary => EventKind::PrimaryMouseUp,
                MouseButton::Secondary => EventKind::SecondaryMouseUp,
                MouseButton::Other => EventKind::OtherMouseUp,
            },
        }
    }

    /// The key payload of genuine key-input events.
    pub fn key_event(&self) -> Option<&RawKeyEvent> {
        match self {
            Self::KeyDown(key) | Self::KeyUp(key) => Some(key),
            _ => None,
        }
    }
}

/// Whether an intercepted event continues to its normal target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// Deliver the event normally.
    Forward,
    /// Consume the event.
    Swallow,
}
