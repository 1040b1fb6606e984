//! Application-level settings.
//!
//! DESIGN
//! ======
//! The theme is an explicitly owned value provided through context rather
//! than ambient document state. `util::theme::toggle` is its single writer;
//! components only read it.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use crate::util::theme::Theme;

/// Owned application settings, provided via context from `App`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub theme: Theme,
}
