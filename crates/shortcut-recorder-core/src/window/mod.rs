//! Window key-focus subscriptions and the focus guard.

mod focus_guard;
mod window_hub;

pub use {
    focus_guard::FocusGuard,
    window_hub::{WindowFocusEvent, WindowFocusHub, WindowSubscription},
};
