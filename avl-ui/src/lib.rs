//! Shared Dioxus layer for the AVILIGHT single-page app.
//!
//! This crate provides:
//! - `js_bridge`: browser interop (timer-backed async sleep, random rolls)
//! - `state`: reactive AppState with Dioxus Signals
//! - `theme`: light/dark palette tokens read by every page
//! - `components`: reusable RSX components (cards, badges, pagination, etc.)

pub mod components;
pub mod js_bridge;
pub mod state;
pub mod theme;
