use crate::{
    CoreResult, RecorderError,
    shortcut::{Platform, key_label, normalize_modifiers},
};

use std::{fmt, panic::Location, str::FromStr};

use error_location::ErrorLocation;
use global_hotkey::hotkey::{Code, HotKey, Modifiers};

/// A key combined with a set of modifier keys.
///
/// Modifiers are normalised on construction: `META` folds into `SUPER` and
/// lock or function flags are dropped, so two shortcuts compare equal
/// whenever a user would consider them the same combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shortcut {
    key: Code,
    modifiers: Modifiers,
}

impl Shortcut {
    /// Create a shortcut from a key and raw modifier flags.
    pub fn new(key: Code, modifiers: Modifiers) -> Self {
        Self {
            key,
            modifiers: normalize_modifiers(modifiers),
        }
    }

    /// The non-modifier key.
    pub fn key(&self) -> Code {
        self.key
    }

    /// The normalised modifier set.
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Build a hotkey that can be registered with `GlobalHotKeyManager`.
    pub fn to_hotkey(&self) -> HotKey {
        let mods = if self.modifiers.is_empty() {
            None
        } else {
            Some(self.modifiers)
        };
        HotKey::new(mods, self.key)
    }

    /// Format as a config string accepted by [`FromStr`] (e.g. `ctrl+shift+KeyK`).
    pub fn to_config_string(&self) -> String {
        let mut parts = Vec::with_capacity(5);

        if self.modifiers.contains(Modifiers::CONTROL) {
            parts.push("ctrl".to_string());
        }
        if self.modifiers.contains(Modifiers::ALT) {
            parts.push("alt".to_string());
        }
        if self.modifiers.contains(Modifiers::SHIFT) {
            parts.push("shift".to_string());
        }
        if self.modifiers.contains(Modifiers::SUPER) {
            parts.push("super".to_string());
        }
        parts.push(self.key.to_string());

        parts.join("+")
    }

    /// Render for a specific platform.
    ///
    /// macOS uses the `⌃⌥⇧⌘K` symbol form, other platforms `Ctrl+Shift+K`.
    pub fn render(&self, platform: Platform) -> String {
        let symbols = platform == Platform::MacOS;
        let mut out = String::new();

        let ordered = [
            (Modifiers::CONTROL, "⌃", "Ctrl"),
            (Modifiers::ALT, "⌥", "Alt"),
            (Modifiers::SHIFT, "⇧", "Shift"),
            (Modifiers::SUPER, "⌘", "Super"),
        ];

        for (flag, symbol, name) in ordered {
            if !self.modifiers.contains(flag) {
                continue;
            }
            if symbols {
                out.push_str(symbol);
            } else {
                out.push_str(name);
                out.push('+');
            }
        }

        out.push_str(&key_label(self.key, symbols));
        out
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Platform::current()))
    }
}

impl FromStr for Shortcut {
    type Err = RecorderError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        let hotkey: HotKey = s.parse().map_err(|e| RecorderError::InvalidShortcut {
            input: s.to_string(),
            reason: format!("{}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self::new(hotkey.key, hotkey.mods))
    }
}

impl From<HotKey> for Shortcut {
    fn from(hotkey: HotKey) -> Self {
        Self::new(hotkey.key, hotkey.mods)
    }
}
