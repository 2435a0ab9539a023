//! SQL schema definitions for the in-memory SQLite database.
//!
//! The schema is applied as a single batch when the database is initialized.

/// Returns the full SQL schema as a single batch string.
///
/// This creates the following tables:
///
/// - `species` - The expanded 757-entry catalog (id, names, tolerance,
///   migration, `|`-joined sites, description)
/// - `site_observations` - Generated per-site counts, one row per
///   (site, year, month slot) with month 0 holding the annual aggregate
///
/// Filtered catalog pages are served with `LIKE` over lowered name columns
/// plus `LIMIT`/`OFFSET`; a separate `COUNT(*)` query drives pagination.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS species (
        id INTEGER PRIMARY KEY,
        common_name TEXT NOT NULL,
        scientific_name TEXT NOT NULL,
        tolerance TEXT NOT NULL,
        migration TEXT NOT NULL,
        sites TEXT NOT NULL,
        description TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_species_tolerance ON species(tolerance);
    CREATE INDEX IF NOT EXISTS idx_species_migration ON species(migration);

    CREATE TABLE IF NOT EXISTS site_observations (
        site TEXT NOT NULL,
        site_ord INTEGER NOT NULL,
        year INTEGER NOT NULL,
        month INTEGER NOT NULL,
        resident INTEGER NOT NULL,
        migratory INTEGER NOT NULL,
        light_tolerant INTEGER NOT NULL,
        light_sensitive INTEGER NOT NULL,
        PRIMARY KEY (site, year, month)
    );
    CREATE INDEX IF NOT EXISTS idx_site_obs_year_month ON site_observations(year, month);

    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        for table in ["species", "site_observations"] {
            let count: i64 = conn
                .query_row(
                    &format!(
                        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='{}'",
                        table
                    ),
                    [],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Table '{}' should exist", table);
        }
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema())
            .expect("Applying schema twice should succeed due to IF NOT EXISTS");
    }
}
