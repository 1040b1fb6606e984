use super::*;

#[test]
fn ui_state_default_menu_closed() {
    let state = UiState::default();
    assert!(!state.menu_open);
}

#[test]
fn ui_state_default_back_to_top_hidden() {
    let state = UiState::default();
    assert!(!state.show_back_to_top);
}
