//! Which shortcuts may be bound globally.

use shortcut_recorder_core::{
    Modifiers, Shortcut,
    collab::{Rejection, ShortcutValidator},
};

/// Requires a modifier other than Shift, except for function keys.
///
/// A bare letter or `Shift+letter` would steal ordinary typing once it is
/// registered as a global hotkey.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalShortcutPolicy;

impl GlobalShortcutPolicy {
    fn is_function_key(shortcut: &Shortcut) -> bool {
        let name = shortcut.key().to_string();
        name.strip_prefix('F')
            .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()))
    }
}

impl ShortcutValidator for GlobalShortcutPolicy {
    fn validate(&self, shortcut: &Shortcut) -> Result<(), Rejection> {
        if Self::is_function_key(shortcut) {
            return Ok(());
        }

        let mut significant = shortcut.modifiers();
        significant.remove(Modifiers::SHIFT);

        if significant.is_empty() {
            return Err(Rejection::new(format!(
                "{} needs Ctrl, Alt or Super to be a global shortcut",
                shortcut
            )));
        }

        Ok(())
    }
}
