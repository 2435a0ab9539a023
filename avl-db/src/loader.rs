//! Loading functions for populating the in-memory SQLite database.
//!
//! The catalog loader takes the expanded species entries from
//! `avl-dataset`; the observation loader generates the full
//! site x year x month grid through `avl-analytics` and inserts every row.

use crate::Database;
use avl_analytics::series::site_counts;
use avl_dataset::geo::ObservationSite;
use avl_dataset::series::{FIRST_YEAR, LAST_YEAR};
use avl_dataset::species::SpeciesEntry;
use rusqlite::params;

impl Database {
    /// Load the species catalog. Entries with an existing id are replaced,
    /// so reloading is idempotent.
    ///
    /// The sites list is stored `|`-joined, mirroring the fixture format.
    pub fn load_species_catalog(&self, entries: &[SpeciesEntry]) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut count = 0u32;
        for entry in entries {
            conn.execute(
                "INSERT OR REPLACE INTO species
                 (id, common_name, scientific_name, tolerance, migration, sites, description)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    entry.id,
                    entry.common_name,
                    entry.scientific_name,
                    entry.tolerance,
                    entry.migration,
                    entry.sites.join("|"),
                    entry.description,
                ],
            )?;
            count += 1;
        }
        log::info!("[AVL Debug] loader: Loaded {} species entries", count);
        Ok(())
    }

    /// Generate and load the per-site observation counts: one row per
    /// (site, year 2014-2024, month slot 0-12), where slot 0 is the annual
    /// aggregate.
    pub fn load_site_observations(&self, sites: &[ObservationSite]) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut count = 0u32;
        for (ord, site) in sites.iter().enumerate() {
            for year in FIRST_YEAR..=LAST_YEAR {
                for month in 0..=12u32 {
                    let counts = site_counts(site, year, month);
                    conn.execute(
                        "INSERT OR REPLACE INTO site_observations
                         (site, site_ord, year, month, resident, migratory, light_tolerant, light_sensitive)
                         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                        params![
                            site.name,
                            ord as i64,
                            year,
                            month,
                            counts.resident,
                            counts.migratory,
                            counts.light_tolerant,
                            counts.light_sensitive,
                        ],
                    )?;
                    count += 1;
                }
            }
        }
        log::info!("[AVL Debug] loader: Loaded {} site observation rows", count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SpeciesFilter;

    fn sample_sites() -> Vec<ObservationSite> {
        vec![
            ObservationSite {
                name: "La Mesa Watershed".to_string(),
                lat: 14.72,
                lon: 121.12,
                resident: 42,
                migratory: 28,
                light_tolerant: 18,
                light_sensitive: 24,
            },
            ObservationSite {
                name: "UP Diliman Campus".to_string(),
                lat: 14.65,
                lon: 121.07,
                resident: 31,
                migratory: 14,
                light_tolerant: 20,
                light_sensitive: 11,
            },
        ]
    }

    #[test]
    fn loads_full_catalog() {
        let db = Database::new().unwrap();
        db.load_species_catalog(&SpeciesEntry::get_catalog_vector())
            .unwrap();
        let total = db.count_species(&SpeciesFilter::default()).unwrap();
        assert_eq!(total, 757);
    }

    #[test]
    fn reloading_catalog_is_idempotent() {
        let db = Database::new().unwrap();
        let catalog = SpeciesEntry::get_catalog_vector();
        db.load_species_catalog(&catalog).unwrap();
        db.load_species_catalog(&catalog).unwrap();
        let total = db.count_species(&SpeciesFilter::default()).unwrap();
        assert_eq!(total, 757, "INSERT OR REPLACE should not duplicate rows");
    }

    #[test]
    fn observation_grid_covers_all_slots() {
        let db = Database::new().unwrap();
        db.load_site_observations(&sample_sites()).unwrap();
        // 2 sites x 11 years x 13 month slots
        let rows = db.query_month_counts(2014, 0).unwrap();
        assert_eq!(rows.len(), 2);
        let all_2020 = db.query_month_counts(2020, 6).unwrap();
        assert_eq!(all_2020.len(), 2);
    }

    #[test]
    fn generated_counts_match_the_formula() {
        let db = Database::new().unwrap();
        db.load_site_observations(&sample_sites()).unwrap();
        let rows = db.query_month_counts(2024, 2).unwrap();
        let la_mesa = &rows[0];
        assert_eq!(la_mesa.site, "La Mesa Watershed");
        assert_eq!(la_mesa.resident, 47); // 42 + 10*0.5
        assert_eq!(la_mesa.migratory, (28.0_f64 * 1.9 + 10.0 * 0.3).round() as i32);
    }
}
