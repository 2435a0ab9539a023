//! In-memory SQLite database layer for the AVILIGHT survey data.
//!
//! This crate loads the expanded species catalog and the generated per-site
//! observation counts into an in-memory SQLite database and exposes typed
//! query methods for the Dioxus WASM frontend and the native CLI.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in
//!   single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to `wasm32-unknown-unknown`)
//! - Source data comes from `avl-dataset` (embedded fixtures expanded at
//!   load time); the observation rows are generated through
//!   `avl-analytics::series::site_counts`
//! - Catalog pages are filtered in SQL: `LIKE` over lowered name columns,
//!   `LIMIT`/`OFFSET` for paging, and a separate count query
//!
//! # Usage
//!
//! ```rust
//! use avl_db::Database;
//! use avl_db::models::SpeciesFilter;
//!
//! let db = Database::open_populated().unwrap();
//! let filter = SpeciesFilter {
//!     query: "kingfisher".to_string(),
//!     ..SpeciesFilter::default()
//! };
//! let total = db.count_species(&filter).unwrap();
//! let first_page = db.query_species_page(&filter, 1).unwrap();
//! assert!(first_page.len() <= 50 && total >= first_page.len());
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`] for the full SQL schema.
//!
//! - `species` - The 757-entry catalog
//! - `site_observations` - 18 sites x 11 years x 13 month slots

mod loader;
pub mod models;
mod queries;
pub mod schema;

use avl_dataset::geo::ObservationSite;
use avl_dataset::species::SpeciesEntry;
use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database holding the survey data.
///
/// Cheaply cloneable (via `Rc`) and suitable for sharing across Dioxus
/// components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the full schema applied.
    ///
    /// The database is empty after creation; use the `load_*` methods to
    /// populate it, or [`Database::open_populated`] for the embedded data.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }

    /// Create a database preloaded with the embedded survey datasets: the
    /// expanded catalog and the generated observation rows.
    pub fn open_populated() -> anyhow::Result<Self> {
        let db = Database::new()?;
        db.load_species_catalog(&SpeciesEntry::get_catalog_vector())?;
        db.load_site_observations(&ObservationSite::get_site_vector())?;
        Ok(db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_creates_successfully() {
        let db = Database::new();
        assert!(db.is_ok(), "Database should create without errors");
    }

    #[test]
    fn database_is_cloneable() {
        let db = Database::new().unwrap();
        let db2 = db.clone();
        db.load_species_catalog(&SpeciesEntry::get_catalog_vector())
            .unwrap();
        let total = db2
            .count_species(&models::SpeciesFilter::default())
            .unwrap();
        assert_eq!(total, 757, "Clone should see same data via shared Rc");
    }

    #[test]
    fn database_starts_empty() {
        let db = Database::new().unwrap();
        let total = db.count_species(&models::SpeciesFilter::default()).unwrap();
        assert_eq!(total, 0, "New database should have no species");
    }
}
