//! Shared page state modules.
//!
//! DESIGN
//! ======
//! State is split between durable `settings` (theme preference) and
//! transient `ui` flags so components can depend on the smaller model.

pub mod settings;
pub mod ui;
