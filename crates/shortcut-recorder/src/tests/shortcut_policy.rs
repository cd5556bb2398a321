use crate::GlobalShortcutPolicy;

use shortcut_recorder_core::{Code, Modifiers, Shortcut, collab::ShortcutValidator};

/// WHAT: Letters need a non-Shift modifier
/// WHY: A bare or shifted letter would swallow ordinary typing system-wide
#[test]
fn given_letter_shortcuts_when_validating_then_only_real_modifiers_pass() {
    let policy = GlobalShortcutPolicy;

    assert!(policy.validate(&Shortcut::new(Code::KeyK, Modifiers::empty())).is_err());
    assert!(policy.validate(&Shortcut::new(Code::KeyK, Modifiers::SHIFT)).is_err());
    assert!(policy.validate(&Shortcut::new(Code::KeyK, Modifiers::CONTROL)).is_ok());
    assert!(
        policy
            .validate(&Shortcut::new(Code::KeyK, Modifiers::SHIFT | Modifiers::SUPER))
            .is_ok()
    );
}

/// WHAT: Function keys are allowed bare
/// WHY: F-keys do not type text
#[test]
fn given_function_key_when_validating_then_accepted_without_modifiers() {
    let policy = GlobalShortcutPolicy;

    assert!(policy.validate(&Shortcut::new(Code::F5, Modifiers::empty())).is_ok());
    assert!(policy.validate(&Shortcut::new(Code::F12, Modifiers::SHIFT)).is_ok());
}

/// WHAT: Keys whose names merely start with F are not function keys
/// WHY: The function-key check must not admit names like `Fn`
#[test]
fn given_non_function_key_starting_with_f_when_validating_then_rejected() {
    let policy = GlobalShortcutPolicy;

    // Given: A bare key named "Fn"
    let rejection = policy
        .validate(&Shortcut::new(Code::Fn, Modifiers::empty()))
        .err();

    // Then: Refused with a reason naming the shortcut
    assert!(rejection.is_some_and(|r| r.reason.contains("needs Ctrl, Alt or Super")));
}
