use super::*;

#[test]
fn nothing_is_expanded_initially() {
    let state = TimelineState::new();
    assert!(!state.is_expanded("exp1"));
}

#[test]
fn toggle_expands_a_collapsed_entry() {
    let mut state = TimelineState::new();
    state.toggle("exp1");
    assert!(state.is_expanded("exp1"));
}

#[test]
fn toggle_collapses_the_expanded_entry() {
    let mut state = TimelineState::new();
    state.toggle("exp1");
    state.toggle("exp1");
    assert!(!state.is_expanded("exp1"));
}

#[test]
fn expanding_one_entry_collapses_the_other() {
    let mut state = TimelineState::new();
    state.toggle("exp1");
    state.toggle("exp2");
    assert!(!state.is_expanded("exp1"));
    assert!(state.is_expanded("exp2"));
}
