use global_hotkey::hotkey::{Code, Modifiers};

/// Modifier flags that take part in shortcut identity.
pub const SHORTCUT_MODIFIERS: Modifiers = Modifiers::CONTROL
    .union(Modifiers::ALT)
    .union(Modifiers::SHIFT)
    .union(Modifiers::SUPER);

/// Platform used for display formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Symbol rendering (`⌘⇧K`).
    MacOS,
    /// Named rendering (`Ctrl+Shift+K`).
    Windows,
    /// Named rendering (`Ctrl+Shift+K`).
    Linux,
}

impl Platform {
    /// Platform this binary was compiled for.
    pub fn current() -> Self {
        #[cfg(target_os = "macos")]
        {
            Platform::MacOS
        }
        #[cfg(target_os = "windows")]
        {
            Platform::Windows
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            Platform::Linux
        }
    }
}

/// Fold `META` into `SUPER` and drop everything that is not a shortcut modifier.
pub(crate) fn normalize_modifiers(raw: Modifiers) -> Modifiers {
    let mut mods = raw;
    if mods.contains(Modifiers::META) {
        mods.remove(Modifiers::META);
        mods.insert(Modifiers::SUPER);
    }
    mods & SHORTCUT_MODIFIERS
}

pub(crate) fn key_label(code: Code, symbols: bool) -> String {
    let special = match code {
        Code::Enter | Code::NumpadEnter => Some(("↩", "Enter")),
        Code::Escape => Some(("⎋", "Esc")),
        Code::Tab => Some(("⇥", "Tab")),
        Code::Backspace => Some(("⌫", "Backspace")),
        Code::Delete => Some(("⌦", "Delete")),
        Code::Space => Some(("Space", "Space")),
        Code::ArrowUp => Some(("↑", "Up")),
        Code::ArrowDown => Some(("↓", "Down")),
        Code::ArrowLeft => Some(("←", "Left")),
        Code::ArrowRight => Some(("→", "Right")),
        Code::PageUp => Some(("⇞", "PageUp")),
        Code::PageDown => Some(("⇟", "PageDown")),
        Code::Home => Some(("↖", "Home")),
        Code::End => Some(("↘", "End")),
        _ => None,
    };

    if let Some((symbol, name)) = special {
        let label = if symbols { symbol } else { name };
        return label.to_string();
    }

    let name = code.to_string();
    if let Some(letter) = name.strip_prefix("Key") {
        return letter.to_string();
    }
    if let Some(digit) = name.strip_prefix("Digit") {
        return digit.to_string();
    }
    name
}
