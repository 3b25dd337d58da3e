use super::*;

// =============================================================
// is_compact
// =============================================================

#[test]
fn threshold_itself_is_not_compact() {
    assert!(!is_compact(0.0));
    assert!(!is_compact(20.0));
}

#[test]
fn just_past_threshold_is_compact() {
    assert!(is_compact(20.5));
    assert!(is_compact(21.0));
    assert!(is_compact(4000.0));
}

// =============================================================
// HeaderState
// =============================================================

#[test]
fn header_state_default_is_expanded_and_closed() {
    let state = HeaderState::default();
    assert!(!state.compact);
    assert!(!state.menu_open);
}

#[test]
fn scrolling_past_threshold_toggles_once() {
    let mut state = HeaderState::default();
    let changes = (0..=21)
        .map(f64::from)
        .filter(|&y| state.observe_scroll(y))
        .count();
    assert_eq!(changes, 1);
    assert!(state.compact);
}

#[test]
fn scrolling_back_below_threshold_reverts() {
    let mut state = HeaderState::default();
    assert!(state.observe_scroll(21.0));
    assert!(state.observe_scroll(19.0));
    assert!(!state.compact);
}

#[test]
fn repeated_offsets_on_same_side_report_no_change() {
    let mut state = HeaderState::default();
    assert!(state.observe_scroll(100.0));
    assert!(!state.observe_scroll(250.0));
    assert!(!state.observe_scroll(21.0));
}

#[test]
fn even_number_of_toggles_restores_menu() {
    let mut state = HeaderState::default();
    for _ in 0..4 {
        state.toggle_menu();
    }
    assert!(!state.menu_open);
    state.toggle_menu();
    assert!(state.menu_open);
}

#[test]
fn menu_and_scroll_are_independent() {
    let mut state = HeaderState::default();
    state.toggle_menu();
    state.observe_scroll(300.0);
    assert!(state.menu_open);
    state.toggle_menu();
    assert!(state.compact);
}

#[test]
fn header_class_switches_density() {
    let relaxed = HeaderState::default().header_class();
    let compact = HeaderState { compact: true, menu_open: false }.header_class();
    assert!(relaxed.contains("py-5"));
    assert!(compact.contains("py-3"));
    assert!(compact.contains("backdrop-blur-md"));
}
