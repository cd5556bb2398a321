/// Placeholder strings the recorder needs translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKey {
    /// Idle prompt.
    RecordShortcut,
    /// Prompt while recording.
    PressShortcut,
}

impl PlaceholderKey {
    /// Lookup key in string tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RecordShortcut => "record_shortcut",
            Self::PressShortcut => "press_shortcut",
        }
    }
}

/// Localized placeholder lookup.
pub trait Localizer {
    /// Text for `key` in the user's language.
    fn localize(&self, key: PlaceholderKey) -> String;
}

/// Built-in English strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLabels;

impl Localizer for EnglishLabels {
    fn localize(&self, key: PlaceholderKey) -> String {
        let label = match key {
            PlaceholderKey::RecordShortcut => "Record Shortcut",
            PlaceholderKey::PressShortcut => "Press Shortcut",
        };
        label.to_string()
    }
}
