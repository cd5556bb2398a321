//! Conversion from `tao` window events to recorder input.

use shortcut_recorder_core::{Modifiers, input::MouseButton};
use tao::{
    event::MouseButton as TaoMouseButton,
    keyboard::{KeyCode, ModifiersState},
};

/// Modifier flags as the recorder sees them.
pub fn modifiers_from(state: ModifiersState) -> Modifiers {
    let mut mods = Modifiers::empty();
    if state.control_key() {
        mods |= Modifiers::CONTROL;
    }
    if state.alt_key() {
        mods |= Modifiers::ALT;
    }
    if state.shift_key() {
        mods |= Modifiers::SHIFT;
    }
    if state.super_key() {
        mods |= Modifiers::SUPER;
    }
    mods
}

/// Left is primary, right is secondary, anything else is other.
pub fn mouse_button(button: TaoMouseButton) -> MouseButton {
    match button {
        TaoMouseButton::Left => MouseButton::Primary,
        TaoMouseButton::Right => MouseButton::Secondary,
        _ => MouseButton::Other,
    }
}

/// Modifier keys arrive as `ModifiersChanged`, never as key presses.
pub fn is_modifier_key(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::ShiftLeft
            | KeyCode::ShiftRight
            | KeyCode::ControlLeft
            | KeyCode::ControlRight
            | KeyCode::AltLeft
            | KeyCode::AltRight
            | KeyCode::SuperLeft
            | KeyCode::SuperRight
            | KeyCode::CapsLock
            | KeyCode::Fn
            | KeyCode::FnLock
    )
}

/// W3C code name of a physical key, or `None` for modifier keys.
///
/// `tao` names its key codes after the W3C `code` values, so the debug name
/// is the code name. Unidentified keys produce a name the decoder rejects.
pub fn key_code_name(code: KeyCode) -> Option<String> {
    if is_modifier_key(code) {
        return None;
    }
    Some(format!("{:?}", code))
}
