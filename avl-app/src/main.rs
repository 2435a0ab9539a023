//! AVILIGHT, the avian biodiversity vs light pollution dashboard.
//!
//! Single-page WASM app for Metro Manila bird monitoring: a national risk
//! map, NCR analytics maps, the 757-entry species catalog, statistical
//! reports, and admin settings. All datasets are embedded fixtures; the
//! species catalog and per-site observation series are loaded into an
//! in-memory SQLite database on startup.
//!
//! Data flow:
//! 1. Fixture CSV/JSON files are embedded in `avl-dataset` via `include_str!`.
//! 2. On mount, `Database::open_populated()` expands the catalog and the
//!    2014-2024 per-site observation grid into SQLite.
//! 3. Pages query typed rows through `avl-db` and derive display values
//!    with `avl-analytics`.

use avl_db::Database;
use avl_ui::state::AppState;
use dioxus::prelude::*;

mod pages;
mod shell;

use pages::{Analytics, Dashboard, Home, Landing, Reports, Settings, Species};
use shell::Shell;

/// Routes: the landing page renders standalone, everything else inside the
/// shared shell layout.
#[derive(Debug, Clone, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Landing {},

    #[layout(Shell)]
        #[route("/app")]
        Home {},
        #[route("/app/dashboard")]
        Dashboard {},
        #[route("/app/analytics")]
        Analytics {},
        #[route("/app/species")]
        Species {},
        #[route("/app/reports")]
        Reports {},
        #[route("/app/settings")]
        Settings {},
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("avilight-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the embedded datasets into the in-memory database on mount
    use_effect(move || match Database::open_populated() {
        Ok(db) => {
            state.db.set(Some(db));
            state.loading.set(false);
        }
        Err(e) => {
            log::error!("Failed to initialize database: {}", e);
            state
                .error_msg
                .set(Some(format!("Database initialization failed: {}", e)));
            state.loading.set(false);
        }
    });

    rsx! {
        Router::<Route> {}
    }
}
