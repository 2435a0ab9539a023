//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the app-wide reactive signals into a single struct
//! provided via `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`.

use avl_db::Database;
use dioxus::prelude::*;

/// Shared application state for the AVILIGHT app.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Database instance (None until the catalog has been loaded)
    pub db: Signal<Option<Database>>,
    /// Whether the app is still loading the embedded datasets
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Light theme when true, the default dark theme otherwise
    pub light_mode: Signal<bool>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            light_mode: Signal::new(false),
        }
    }
}
