use crate::{
    Code, Modifiers, Shortcut,
    collab::{AllowAll, CodeNameDecoder},
    filter::{CLICK_MARGIN, FilterAction, FilterContext, evaluate},
    input::{MouseButton, Propagation, RawInputEvent, RawKeyEvent, SpecialKey},
    tests::support::{FRAME, click, key},
};

fn verdict_for(event: &RawInputEvent, current: Option<&Shortcut>) -> (FilterAction, Propagation) {
    let ctx = FilterContext {
        frame: FRAME,
        current,
        decoder: &CodeNameDecoder,
        validator: &AllowAll,
    };
    let verdict = evaluate(event, &ctx);
    (verdict.action, verdict.propagation)
}

/// WHAT: Each rule of the policy table produces its action and propagation
/// WHY: The filter is the control's acceptance contract
#[test]
fn given_policy_table_when_evaluated_then_each_rule_matches() {
    let current = Shortcut::new(Code::KeyU, Modifiers::SUPER | Modifiers::SHIFT);

    let cases = [
        (key("Tab", Modifiers::empty()), FilterAction::Blur, Propagation::Forward),
        (key("Escape", Modifiers::empty()), FilterAction::Blur, Propagation::Swallow),
        (key("Backspace", Modifiers::empty()), FilterAction::Clear, Propagation::Swallow),
        (key("Delete", Modifiers::empty()), FilterAction::Clear, Propagation::Swallow),
        (
            key("KeyU", Modifiers::SUPER | Modifiers::SHIFT),
            FilterAction::Reselect,
            Propagation::Swallow,
        ),
        (
            key("KeyY", Modifiers::SUPER),
            FilterAction::Commit(Shortcut::new(Code::KeyY, Modifiers::SUPER)),
            Propagation::Swallow,
        ),
        (key("MetaLeft", Modifiers::SUPER), FilterAction::Undecodable, Propagation::Swallow),
    ];

    for (event, action, propagation) in cases {
        assert_eq!(verdict_for(&event, Some(&current)), (action, propagation), "{event:?}");
    }
}

/// WHAT: Modified Escape is recorded instead of cancelling
/// WHY: Special handling only applies with no modifiers held
#[test]
fn given_modified_escape_when_evaluated_then_committed() {
    let event = key("Escape", Modifiers::CONTROL);

    let (action, _) = verdict_for(&event, None);

    assert_eq!(
        action,
        FilterAction::Commit(Shortcut::new(Code::Escape, Modifiers::CONTROL))
    );
}

/// WHAT: Caps lock does not count as a modifier for special keys
/// WHY: Escape must cancel even with caps lock on
#[test]
fn given_caps_lock_when_escape_evaluated_then_blur() {
    let event = key("Escape", Modifiers::CAPS_LOCK);

    assert_eq!(
        verdict_for(&event, None),
        (FilterAction::Blur, Propagation::Swallow)
    );
}

/// WHAT: The click margin bounds the inside region
/// WHY: Near-miss clicks should not cancel recording
#[test]
fn given_clicks_around_margin_when_evaluated_then_boundary_respected() {
    let left = FRAME.origin.x;
    let top = FRAME.origin.y;

    let just_inside = click(MouseButton::Primary, left - CLICK_MARGIN, top);
    let just_outside = click(MouseButton::Primary, left - CLICK_MARGIN - 0.5, top);

    assert_eq!(
        verdict_for(&just_inside, None),
        (FilterAction::Ignore, Propagation::Swallow)
    );
    assert_eq!(
        verdict_for(&just_outside, None),
        (FilterAction::Blur, Propagation::Forward)
    );
}

/// WHAT: Special keys come from host classification
/// WHY: Hosts may classify keys beyond the W3C name table
#[test]
fn given_host_classified_tab_when_evaluated_then_blur_forward() {
    let mut raw = RawKeyEvent::new("Unidentified", Modifiers::empty());
    raw.special = Some(SpecialKey::Tab);

    assert_eq!(
        verdict_for(&RawInputEvent::KeyDown(raw), None),
        (FilterAction::Blur, Propagation::Forward)
    );
}
