//! Utility helpers isolating browser/environment concerns.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each behavior lives behind a small module whose browser side is gated on
//! the `csr` feature, so the decision logic stays testable in native builds.

pub mod navigation;
pub mod scroll;
pub mod theme;
