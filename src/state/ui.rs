//! Transient UI chrome state (mobile menu, back-to-top visibility).
//!
//! DESIGN
//! ======
//! Keeps ephemeral presentation flags out of `Settings` so nothing transient
//! is ever persisted. Both flags are recomputed from environment events.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the mobile menu panel and the back-to-top control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub menu_open: bool,
    pub show_back_to_top: bool,
}
