use crate::{CONTROL_FRAME, recorder_window::window_title};

use shortcut_recorder_core::{RecorderDisplay, input::Point};

fn display(text: &str, is_recording: bool) -> RecorderDisplay {
    RecorderDisplay {
        text: text.to_string(),
        placeholder: "Record Shortcut".to_string(),
        caret_visible: !is_recording,
        shows_clear_button: !text.is_empty(),
        accepts_focus: true,
        is_focused: is_recording,
        is_recording,
    }
}

/// WHAT: The title shows the placeholder when nothing is stored
/// WHY: The title bar stands in for the field's text
#[test]
fn given_empty_text_when_titling_then_placeholder() {
    assert_eq!(window_title(&display("", false), 0), "Record Shortcut");
}

/// WHAT: Recording is marked and presses are counted
/// WHY: Users need to see that keystrokes are being captured
#[test]
fn given_recording_with_presses_when_titling_then_marker_and_count() {
    let title = window_title(&display("⌘⇧U", true), 3);

    assert_eq!(title, "● ⌘⇧U (3 presses)");
}

/// WHAT: The control frame sits inside the window client area
/// WHY: Clicks outside the field must be able to reach the margin test
#[test]
fn given_control_frame_when_probing_then_edges_inside_and_outside() {
    assert!(CONTROL_FRAME.contains(Point::new(12.0, 12.0)));
    assert!(!CONTROL_FRAME.contains(Point::new(308.0, 30.0)));
    assert!(!CONTROL_FRAME.contains(Point::new(2.0, 2.0)));
}
