//! Richness lookup against the per-city survey records.

use avl_dataset::cities::CityRecord;
use avl_dataset::constants::MONTHLY_RICHNESS_OFFSETS;

/// Resolve a city's richness for a tolerance/migration filter and a month.
///
/// Keys into the city's richness map are tried most-specific first:
/// `"{tol}-{mig}"`, then `"{tol}-All"`, then `"All-{mig}"`, then
/// `"All-All"`, falling back to the city's flat species total. The seasonal
/// offset for the month (0 = January) is added before rounding. Months past
/// 11 contribute no offset.
pub fn city_richness(city: &CityRecord, tolerance: &str, migration: &str, month: usize) -> i32 {
    let base = city
        .richness
        .get(&format!("{}-{}", tolerance, migration))
        .or_else(|| city.richness.get(&format!("{}-All", tolerance)))
        .or_else(|| city.richness.get(&format!("All-{}", migration)))
        .or_else(|| city.richness.get("All-All"))
        .copied()
        .unwrap_or(city.total_species);
    let offset = MONTHLY_RICHNESS_OFFSETS.get(month).copied().unwrap_or(0.0);
    (base as f64 + offset).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use avl_dataset::cities::CityRecord;
    use std::collections::HashMap;

    fn sample_city() -> CityRecord {
        let mut richness = HashMap::new();
        richness.insert("All-All".to_string(), 21);
        richness.insert("Tolerant-All".to_string(), 18);
        richness.insert("Sensitive-All".to_string(), 14);
        richness.insert("All-Resident".to_string(), 19);
        richness.insert("All-Migratory".to_string(), 12);
        CityRecord {
            id: "sample".to_string(),
            name: "Sample".to_string(),
            polygon: vec![],
            label_at: [14.5, 121.0],
            dominant_land_cover: "Urban & Built-up".to_string(),
            land_cover_pct: 80,
            richness,
            total_species: 21,
            observation_sites: 5,
            species: vec![],
            shap: vec![],
        }
    }

    #[test]
    fn exact_key_wins() {
        let city = sample_city();
        assert_eq!(city_richness(&city, "All", "Resident", 0), 19);
        assert_eq!(city_richness(&city, "Tolerant", "All", 0), 18);
    }

    #[test]
    fn missing_pair_falls_back_to_tolerance_wildcard() {
        let city = sample_city();
        // no "Sensitive-Resident" key, so "Sensitive-All" answers
        assert_eq!(city_richness(&city, "Sensitive", "Resident", 0), 14);
    }

    #[test]
    fn empty_map_falls_back_to_total() {
        let mut city = sample_city();
        city.richness.clear();
        assert_eq!(city_richness(&city, "All", "All", 0), 21);
    }

    #[test]
    fn month_offset_is_added() {
        let city = sample_city();
        let january = city_richness(&city, "All", "All", 0);
        let june = city_richness(&city, "All", "All", 5);
        assert_eq!(june - january, 4);
        // out-of-range months contribute nothing
        assert_eq!(city_richness(&city, "All", "All", 99), january);
    }

    #[test]
    fn shipped_cities_always_positive() {
        let cities = CityRecord::get_city_vector();
        for city in &cities {
            for tol in ["All", "Tolerant", "Sensitive"] {
                for mig in ["All", "Resident", "Migratory"] {
                    for month in 0..12 {
                        let r = city_richness(city, tol, mig, month);
                        assert!(r > 0, "non-positive richness for {}", city.id);
                    }
                }
            }
        }
    }
}
