use crate::{Shortcut, input::RawKeyEvent};

use std::str::FromStr;

use global_hotkey::hotkey::Code;

/// Turns a raw key event into a [`Shortcut`].
pub trait ShortcutDecoder {
    /// `None` for malformed or unsupported events.
    fn decode(&self, event: &RawKeyEvent) -> Option<Shortcut>;
}

/// Decodes the W3C code name carried by the event.
///
/// Modifier keys on their own and unidentified codes do not decode.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeNameDecoder;

impl ShortcutDecoder for CodeNameDecoder {
    fn decode(&self, event: &RawKeyEvent) -> Option<Shortcut> {
        let code = Code::from_str(&event.code).ok()?;
        if is_modifier_code(code) || code == Code::Unidentified {
            return None;
        }
        Some(Shortcut::new(code, event.modifiers))
    }
}

fn is_modifier_code(code: Code) -> bool {
    matches!(
        code,
        Code::ShiftLeft
            | Code::ShiftRight
            | Code::ControlLeft
            | Code::ControlRight
            | Code::AltLeft
            | Code::AltRight
            | Code::MetaLeft
            | Code::MetaRight
            | Code::CapsLock
            | Code::NumLock
            | Code::ScrollLock
            | Code::Fn
            | Code::FnLock
    )
}
