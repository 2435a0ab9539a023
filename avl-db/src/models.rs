//! Query parameter and result structs for the catalog and observation
//! tables.

/// Filter settings for the species catalog table.
///
/// `tolerance` and `migration` use `"All"` as the no-filter wildcard; the
/// query string matches case-insensitively against either name column.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesFilter {
    pub query: String,
    pub tolerance: String,
    pub migration: String,
}

impl Default for SpeciesFilter {
    fn default() -> Self {
        SpeciesFilter {
            query: String::new(),
            tolerance: "All".to_string(),
            migration: "All".to_string(),
        }
    }
}

/// One generated observation row: counts at a site for a (year, month slot).
///
/// Month slot 0 is the annual aggregate, 1-12 are calendar months.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteObservationRow {
    pub site: String,
    pub year: i32,
    pub month: i32,
    pub resident: i32,
    pub migratory: i32,
    pub light_tolerant: i32,
    pub light_sensitive: i32,
}

impl SiteObservationRow {
    /// Sum of all four category counts.
    pub fn total(&self) -> i32 {
        self.resident + self.migratory + self.light_tolerant + self.light_sensitive
    }
}
