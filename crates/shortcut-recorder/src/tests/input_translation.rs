use crate::input_translation::{is_modifier_key, key_code_name, modifiers_from, mouse_button};

use shortcut_recorder_core::{
    Code, Modifiers, Shortcut,
    collab::{CodeNameDecoder, ShortcutDecoder},
    input::{MouseButton, RawKeyEvent, SpecialKey},
};
use tao::{
    event::MouseButton as TaoMouseButton,
    keyboard::{KeyCode, ModifiersState},
};

/// WHAT: tao modifier state maps onto recorder modifiers
/// WHY: Shortcut identity depends on the modifier set
#[test]
fn given_modifier_state_when_translating_then_flags_match() {
    let state = ModifiersState::SHIFT | ModifiersState::SUPER;

    assert_eq!(modifiers_from(state), Modifiers::SHIFT | Modifiers::SUPER);
    assert_eq!(modifiers_from(ModifiersState::empty()), Modifiers::empty());
}

/// WHAT: Left and right buttons are primary and secondary
/// WHY: Only those mouse-ups can blur the recorder
#[test]
fn given_tao_buttons_when_translating_then_primary_secondary_other() {
    assert_eq!(mouse_button(TaoMouseButton::Left), MouseButton::Primary);
    assert_eq!(mouse_button(TaoMouseButton::Right), MouseButton::Secondary);
    assert_eq!(mouse_button(TaoMouseButton::Middle), MouseButton::Other);
}

/// WHAT: Modifier keys produce no key press
/// WHY: Holding Cmd alone must not count as an undecodable key
#[test]
fn given_modifier_keys_when_naming_then_none() {
    assert!(is_modifier_key(KeyCode::SuperLeft));
    assert_eq!(key_code_name(KeyCode::ShiftRight), None);
    assert_eq!(key_code_name(KeyCode::CapsLock), None);
}

/// WHAT: Key names decode into shortcuts
/// WHY: The host and the decoder must agree on code names
#[test]
fn given_letter_key_when_named_then_decodes_with_modifiers() {
    // Given: Ctrl held and K pressed
    let name = key_code_name(KeyCode::KeyK);
    assert_eq!(name.as_deref(), Some("KeyK"));

    // When: Building and decoding the raw event
    let raw = RawKeyEvent::new(name.unwrap_or_default(), Modifiers::CONTROL);
    let decoded = CodeNameDecoder.decode(&raw);

    // Then: Ctrl+K
    assert_eq!(decoded, Some(Shortcut::new(Code::KeyK, Modifiers::CONTROL)));
}

/// WHAT: Navigation and deletion keys are classified as special
/// WHY: The filter's Tab, Escape and Clear rules rely on it
#[test]
fn given_special_keys_when_named_then_classified() {
    let special = |code| {
        key_code_name(code).and_then(|name| RawKeyEvent::new(name, Modifiers::empty()).special)
    };

    assert_eq!(special(KeyCode::Tab), Some(SpecialKey::Tab));
    assert_eq!(special(KeyCode::Escape), Some(SpecialKey::Escape));
    assert_eq!(special(KeyCode::Backspace), Some(SpecialKey::Delete));
    assert_eq!(special(KeyCode::Delete), Some(SpecialKey::ForwardDelete));
    assert_eq!(special(KeyCode::KeyA), None);
}
