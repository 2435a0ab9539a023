use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Embedded JSON data for the 17 NCR city and municipality records.
pub static NCR_CITIES_JSON: &str = include_str!("../../fixtures/ncr_cities.json");

/// A (feature, importance) pair from a SHAP breakdown.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ShapPair {
    pub feature: String,
    pub value: f64,
}

/// One NCR city or municipality with its survey attributes.
///
/// Polygon vertices and the label anchor are (lat, lon) pairs. The richness
/// map is keyed by `"{tolerance}-{migration}"` with `All` as the wildcard on
/// either side; not every combination is present, so lookups fall back along
/// a wildcard chain (see the analytics layer).
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CityRecord {
    pub id: String,
    pub name: String,
    pub polygon: Vec<[f64; 2]>,
    pub label_at: [f64; 2],
    pub dominant_land_cover: String,
    pub land_cover_pct: i32,
    pub richness: HashMap<String, i32>,
    pub total_species: i32,
    pub observation_sites: i32,
    pub species: Vec<String>,
    pub shap: Vec<ShapPair>,
}

impl CityRecord {
    /// Parse a JSON string of city records.
    pub fn parse_cities_json(json_object: &str) -> anyhow::Result<Vec<CityRecord>> {
        let cities: Vec<CityRecord> = serde_json::from_str(json_object)?;
        Ok(cities)
    }

    /// Get the NCR city vector from the embedded JSON.
    pub fn get_city_vector() -> Vec<CityRecord> {
        if let Ok(c) = CityRecord::parse_cities_json(NCR_CITIES_JSON) {
            c
        } else {
            panic!("failed to parse ncr cities json")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_vector_has_seventeen_records() {
        let cities = CityRecord::get_city_vector();
        assert_eq!(cities.len(), 17);
    }

    #[test]
    fn city_records_spot_check() {
        let cities = CityRecord::get_city_vector();
        let qc = cities.iter().find(|c| c.id == "quezon-city").unwrap();
        assert_eq!(qc.name, "Quezon City");
        assert_eq!(qc.total_species, 47);
        assert_eq!(qc.observation_sites, 15);
        assert_eq!(qc.dominant_land_cover, "Urban & Built-up");
        assert_eq!(qc.shap.len(), 5);
        assert_eq!(qc.shap[0].feature, "Light Intensity");
    }

    #[test]
    fn every_city_has_wildcard_richness_keys() {
        let cities = CityRecord::get_city_vector();
        for city in &cities {
            assert!(
                city.richness.contains_key("All-All"),
                "missing All-All for {}",
                city.id
            );
            assert!(city.richness.contains_key("Tolerant-All"));
            assert!(city.richness.contains_key("All-Migratory"));
            assert!(!city.species.is_empty());
            assert_eq!(city.species.len(), city.total_species as usize);
        }
    }
}
