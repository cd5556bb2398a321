use crate::Shortcut;

/// Observable UI state of a recorder control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecorderDisplay {
    /// Field text: the rendered shortcut, or empty.
    pub text: String,
    /// Placeholder shown while the text is empty.
    pub placeholder: String,
    /// Whether the text caret is drawn.
    pub caret_visible: bool,
    /// Whether the clear button is shown.
    pub shows_clear_button: bool,
    /// Whether the control may currently take focus.
    pub accepts_focus: bool,
    /// Whether the control holds focus.
    pub is_focused: bool,
    /// Whether a recording session is active.
    pub is_recording: bool,
}

/// An accepted change of the stored shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortcutChange {
    /// Value before the commit.
    pub previous: Option<Shortcut>,
    /// Value after the commit.
    pub current: Option<Shortcut>,
}
