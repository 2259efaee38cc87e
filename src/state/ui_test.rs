use super::*;

#[test]
fn ui_state_default_debug_hidden() {
    let state = UiState::default();
    assert!(!state.debug_visible);
}

#[test]
fn ui_state_default_debug_output_empty() {
    let state = UiState::default();
    assert!(state.debug_output.is_empty());
}
