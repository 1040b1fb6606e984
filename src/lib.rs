//! # saastra-landing
//!
//! Leptos + WASM single-page marketing site for the Saastra product suite.
//! The page is static content with three browser behaviors layered on top:
//! a persisted light/dark theme, smooth in-page anchor scrolling, and a
//! back-to-top control that appears past a scroll threshold.
//!
//! This crate contains the page components, shared state types, the page
//! stylesheet, and the utility modules that own the browser integration.

pub mod app;
pub mod components;
pub mod content;
pub mod state;
pub mod styles;
pub mod util;
