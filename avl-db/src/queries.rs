//! Typed query methods for the catalog and observation tables.
//!
//! Catalog filtering happens in SQL so the 757-entry table never has to be
//! materialized in the UI: the name match runs as `LIKE` over lowered
//! columns and the category filters treat `'All'` as a wildcard. Pages are
//! 50 rows; the matching count comes from a separate query.

use crate::models::{SiteObservationRow, SpeciesFilter};
use crate::Database;
use avl_analytics::paging::PAGE_SIZE;
use avl_dataset::species::SpeciesEntry;
use rusqlite::params;

/// `%query%` pattern over the lowered query string.
fn like_pattern(query: &str) -> String {
    format!("%{}%", query.trim().to_lowercase())
}

impl Database {
    // ───────────────────── Catalog Queries ─────────────────────

    /// Count catalog entries matching the filter.
    pub fn count_species(&self, filter: &SpeciesFilter) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM species
             WHERE (LOWER(common_name) LIKE ?1 OR LOWER(scientific_name) LIKE ?1)
               AND (?2 = 'All' OR tolerance = ?2)
               AND (?3 = 'All' OR migration = ?3)",
            params![
                like_pattern(&filter.query),
                filter.tolerance,
                filter.migration
            ],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    /// Get one 50-row page of catalog entries matching the filter, in
    /// catalog id order. Pages are 1-based.
    pub fn query_species_page(
        &self,
        filter: &SpeciesFilter,
        page: usize,
    ) -> anyhow::Result<Vec<SpeciesEntry>> {
        let offset = (page.max(1) - 1) * PAGE_SIZE;
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT id, common_name, scientific_name, tolerance, migration, sites, description
             FROM species
             WHERE (LOWER(common_name) LIKE ?1 OR LOWER(scientific_name) LIKE ?1)
               AND (?2 = 'All' OR tolerance = ?2)
               AND (?3 = 'All' OR migration = ?3)
             ORDER BY id
             LIMIT ?4 OFFSET ?5",
        )?;
        let rows = stmt
            .query_map(
                params![
                    like_pattern(&filter.query),
                    filter.tolerance,
                    filter.migration,
                    PAGE_SIZE as i64,
                    offset as i64
                ],
                |row| {
                    let sites: String = row.get(5)?;
                    Ok(SpeciesEntry {
                        id: row.get(0)?,
                        common_name: row.get(1)?,
                        scientific_name: row.get(2)?,
                        tolerance: row.get(3)?,
                        migration: row.get(4)?,
                        sites: sites.split('|').map(|s| s.to_string()).collect(),
                        description: row.get(6)?,
                    })
                },
            )?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[AVL Debug] query: query_species_page page {} returned {} entries",
            page,
            rows.len()
        );
        Ok(rows)
    }

    // ───────────────────── Observation Queries ─────────────────────

    /// Get every site's counts for a (year, month slot), in fixture order.
    ///
    /// Month slot 0 is the annual aggregate, 1-12 are calendar months.
    pub fn query_month_counts(
        &self,
        year: i32,
        month: u32,
    ) -> anyhow::Result<Vec<SiteObservationRow>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT site, year, month, resident, migratory, light_tolerant, light_sensitive
             FROM site_observations
             WHERE year = ?1 AND month = ?2
             ORDER BY site_ord",
        )?;
        let rows = stmt
            .query_map(params![year, month], |row| {
                Ok(SiteObservationRow {
                    site: row.get(0)?,
                    year: row.get(1)?,
                    month: row.get(2)?,
                    resident: row.get(3)?,
                    migratory: row.get(4)?,
                    light_tolerant: row.get(5)?,
                    light_sensitive: row.get(6)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[AVL Debug] query: query_month_counts returned {} records",
            rows.len()
        );
        Ok(rows)
    }

    /// Get one site's annual aggregates across all survey years, ordered
    /// chronologically.
    pub fn query_site_series(&self, site: &str) -> anyhow::Result<Vec<SiteObservationRow>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT site, year, month, resident, migratory, light_tolerant, light_sensitive
             FROM site_observations
             WHERE site = ?1 AND month = 0
             ORDER BY year",
        )?;
        let rows = stmt
            .query_map(params![site], |row| {
                Ok(SiteObservationRow {
                    site: row.get(0)?,
                    year: row.get(1)?,
                    month: row.get(2)?,
                    resident: row.get(3)?,
                    migratory: row.get(4)?,
                    light_tolerant: row.get(5)?,
                    light_sensitive: row.get(6)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[AVL Debug] query: query_site_series returned {} records",
            rows.len()
        );
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use avl_dataset::geo::ObservationSite;

    fn populated_db() -> Database {
        Database::open_populated().unwrap()
    }

    #[test]
    fn unfiltered_count_is_full_catalog() {
        let db = populated_db();
        assert_eq!(db.count_species(&SpeciesFilter::default()).unwrap(), 757);
    }

    #[test]
    fn first_page_holds_fifty_in_id_order() {
        let db = populated_db();
        let page = db
            .query_species_page(&SpeciesFilter::default(), 1)
            .unwrap();
        assert_eq!(page.len(), 50);
        assert_eq!(page[0].id, 1);
        assert_eq!(page[49].id, 50);
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let db = populated_db();
        let page = db
            .query_species_page(&SpeciesFilter::default(), 16)
            .unwrap();
        // 757 = 15 * 50 + 7
        assert_eq!(page.len(), 7);
        assert_eq!(page[6].id, 757);
    }

    #[test]
    fn like_filter_matches_reference_filter() {
        let db = populated_db();
        let filter = SpeciesFilter {
            query: "Kingfisher".to_string(),
            ..SpeciesFilter::default()
        };
        let db_total = db.count_species(&filter).unwrap();
        let reference: Vec<_> = SpeciesEntry::get_catalog_vector()
            .into_iter()
            .filter(|e| {
                e.common_name.to_lowercase().contains("kingfisher")
                    || e.scientific_name.to_lowercase().contains("kingfisher")
            })
            .collect();
        assert_eq!(db_total, reference.len());
        let page = db.query_species_page(&filter, 1).unwrap();
        assert_eq!(page[0].id, reference[0].id);
    }

    #[test]
    fn category_filters_combine() {
        let db = populated_db();
        let filter = SpeciesFilter {
            query: String::new(),
            tolerance: "Sensitive".to_string(),
            migration: "Migratory".to_string(),
        };
        let total = db.count_species(&filter).unwrap();
        let reference = SpeciesEntry::get_catalog_vector()
            .into_iter()
            .filter(|e| e.tolerance == "Sensitive" && e.migration == "Migratory")
            .count();
        assert_eq!(total, reference);
        assert!(total > 0);
    }

    #[test]
    fn filtering_is_idempotent() {
        let db = populated_db();
        let filter = SpeciesFilter {
            query: "philippine".to_string(),
            ..SpeciesFilter::default()
        };
        let first = db.count_species(&filter).unwrap();
        let second = db.count_species(&filter).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn month_counts_return_all_sites_in_order() {
        let db = populated_db();
        let rows = db.query_month_counts(2024, 0).unwrap();
        let sites = ObservationSite::get_site_vector();
        assert_eq!(rows.len(), sites.len());
        for (row, site) in rows.iter().zip(sites.iter()) {
            assert_eq!(row.site, site.name);
        }
    }

    #[test]
    fn site_series_spans_the_survey_years() {
        let db = populated_db();
        let series = db.query_site_series("La Mesa Watershed").unwrap();
        assert_eq!(series.len(), 11);
        assert_eq!(series[0].year, 2014);
        assert_eq!(series[10].year, 2024);
        assert!(series[10].total() > series[0].total());
    }
}
