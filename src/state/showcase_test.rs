use super::*;

#[test]
fn dialog_is_closed_initially() {
    let state = ShowcaseState::new();
    assert!(!state.is_open());
    assert_eq!(state.selected_id(), None);
}

#[test]
fn open_selects_the_project() {
    let mut state = ShowcaseState::new();
    state.open("proj1");
    assert!(state.is_open());
    assert_eq!(state.selected_id(), Some("proj1"));
}

#[test]
fn open_replaces_a_previous_selection() {
    let mut state = ShowcaseState::new();
    state.open("proj1");
    state.open("proj2");
    assert_eq!(state.selected_id(), Some("proj2"));
}

#[test]
fn close_is_idempotent() {
    let mut state = ShowcaseState::new();
    state.open("proj1");
    state.close();
    state.close();
    assert!(!state.is_open());
}
