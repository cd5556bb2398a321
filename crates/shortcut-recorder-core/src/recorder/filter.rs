//! Acceptance policy for raw input intercepted during a recording session.

use crate::{
    Shortcut,
    collab::{Rejection, ShortcutDecoder, ShortcutValidator},
    input::{MouseButton, Propagation, RawInputEvent, Rect, SpecialKey},
    shortcut::normalize_modifiers,
};

/// Clicks this close to the control still count as inside it.
pub const CLICK_MARGIN: f64 = 3.0;

/// State change requested by the filter.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterAction {
    /// End the session and give up focus.
    Blur,
    /// Commit `None`; the session continues.
    Clear,
    /// The stored shortcut was entered again; blur without committing.
    Reselect,
    /// Attempt to commit the shortcut, then blur.
    Commit(Shortcut),
    /// The caller's validator refused the shortcut; alert and keep recording.
    Refused(Rejection),
    /// The key event did not decode; alert and keep recording.
    Undecodable,
    /// Nothing to do.
    Ignore,
}

/// Outcome of filtering one event.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    /// State change to apply.
    pub action: FilterAction,
    /// Whether the original event continues to its target.
    pub propagation: Propagation,
}

impl Verdict {
    fn forward(action: FilterAction) -> Self {
        Self {
            action,
            propagation: Propagation::Forward,
        }
    }

    fn swallow(action: FilterAction) -> Self {
        Self {
            action,
            propagation: Propagation::Swallow,
        }
    }
}

/// What the filter needs to know about the recorder.
pub struct FilterContext<'a> {
    /// Control bounds in window coordinates.
    pub frame: Rect,
    /// Currently stored shortcut.
    pub current: Option<&'a Shortcut>,
    /// Raw key to shortcut mapping.
    pub decoder: &'a dyn ShortcutDecoder,
    /// Caller policy over acceptable shortcuts.
    pub validator: &'a dyn ShortcutValidator,
}

/// Decide what to do with one intercepted event. The first matching rule wins.
pub fn evaluate(event: &RawInputEvent, ctx: &FilterContext<'_>) -> Verdict {
    if let RawInputEvent::MouseUp { button, location } = event {
        let hit_area = ctx.frame.inset(-CLICK_MARGIN, -CLICK_MARGIN);
        let tracked = matches!(button, MouseButton::Primary | MouseButton::Secondary);
        if tracked && !hit_area.contains(*location) {
            return Verdict::forward(FilterAction::Blur);
        }
    }

    let Some(key) = event.key_event() else {
        return Verdict::swallow(FilterAction::Ignore);
    };

    if normalize_modifiers(key.modifiers).is_empty() {
        match key.special {
            Some(SpecialKey::Tab) => return Verdict::forward(FilterAction::Blur),
            Some(SpecialKey::Escape) => return Verdict::swallow(FilterAction::Blur),
            Some(special) if special.is_deletion() => {
                return Verdict::swallow(FilterAction::Clear);
            }
            _ => {}
        }
    }

    let Some(shortcut) = ctx.decoder.decode(key) else {
        return Verdict::swallow(FilterAction::Undecodable);
    };

    if ctx.current == Some(&shortcut) {
        return Verdict::swallow(FilterAction::Reselect);
    }

    if let Err(rejection) = ctx.validator.validate(&shortcut) {
        return Verdict::swallow(FilterAction::Refused(rejection));
    }

    Verdict::swallow(FilterAction::Commit(shortcut))
}
