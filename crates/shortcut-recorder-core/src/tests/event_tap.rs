use crate::{RecorderId, input::EventKind, monitor::EventTap};

/// WHAT: Monitors unregister themselves on drop
/// WHY: Interception must end with the owning session
#[test]
fn given_installed_monitor_when_dropped_then_removed_from_tap() {
    // Given: A tap with one monitor
    let tap = EventTap::new();
    let owner = RecorderId::new();
    let monitor = tap.install(owner, &[EventKind::KeyDown]);
    assert_eq!(tap.interceptors(EventKind::KeyDown), vec![owner]);
    assert!(monitor.intercepts(EventKind::KeyDown));
    assert!(!monitor.intercepts(EventKind::FlagsChanged));

    // When: The monitor is dropped
    drop(monitor);

    // Then: The tap is empty
    assert_eq!(tap.active_monitors(), 0);
    assert!(tap.interceptors(EventKind::KeyDown).is_empty());
}

/// WHAT: Interceptors are listed most recent first, filtered by kind
/// WHY: The newest recorder sees input before older ones
#[test]
fn given_several_monitors_when_queried_then_most_recent_first() {
    // Given: Two monitors with different masks
    let tap = EventTap::new();
    let older = RecorderId::new();
    let newer = RecorderId::new();
    let _a = tap.install(older, &[EventKind::KeyDown, EventKind::PrimaryMouseUp]);
    let _b = tap.install(newer, &[EventKind::KeyDown]);

    // Then: Order and filtering follow installation and masks
    assert_eq!(tap.interceptors(EventKind::KeyDown), vec![newer, older]);
    assert_eq!(tap.interceptors(EventKind::PrimaryMouseUp), vec![older]);
    assert!(tap.interceptors(EventKind::SecondaryMouseUp).is_empty());
}
