//! Dataset summary printed to stdout.

use avl_dataset::cities::CityRecord;
use avl_dataset::geo::{Island, ObservationSite, RiskZone};
use avl_dataset::series::{self, FIRST_YEAR, LAST_YEAR};
use avl_dataset::species::SpeciesEntry;

/// Print counts for every bundled dataset and the yearly richness trend.
/// With `trends` the per-year tolerance and migration totals follow.
pub fn run_summary(trends: bool) -> anyhow::Result<()> {
    for line in count_lines() {
        println!("{}", line);
    }
    println!();
    for line in trend_lines() {
        println!("{}", line);
    }
    if trends {
        println!();
        for line in tolerance_lines() {
            println!("{}", line);
        }
    }
    Ok(())
}

fn count_lines() -> Vec<String> {
    let catalog = SpeciesEntry::get_catalog_vector();
    let islands = Island::get_island_vector();
    let zones = RiskZone::get_risk_zone_vector();
    let sites = ObservationSite::get_site_vector();
    let cities = CityRecord::get_city_vector();

    let low = zones.iter().filter(|z| z.risk == "Low").count();
    let medium = zones.iter().filter(|z| z.risk == "Medium").count();
    let high = zones.iter().filter(|z| z.risk == "High").count();
    let recorded: i32 = sites.iter().map(|s| s.total()).sum();

    vec![
        "AVILIGHT dataset summary".to_string(),
        format!("  species catalog:   {} entries", catalog.len()),
        format!("  archipelago:       {} islands", islands.len()),
        format!(
            "  risk zones:        {} ({} low, {} medium, {} high)",
            zones.len(),
            low,
            medium,
            high
        ),
        format!(
            "  observation sites: {} ({} birds recorded)",
            sites.len(),
            recorded
        ),
        format!("  NCR cities:        {}", cities.len()),
    ]
}

fn trend_lines() -> Vec<String> {
    let mut lines = vec![
        format!("Richness vs light pollution, {}-{}:", FIRST_YEAR, LAST_YEAR),
        "  year  richness  light index".to_string(),
    ];
    for point in series::get_richness_light_vector() {
        lines.push(format!(
            "  {}  {:>8.1}  {:>11.1}",
            point.year, point.richness, point.light_index
        ));
    }
    lines
}

fn tolerance_lines() -> Vec<String> {
    let mut lines = vec![
        "Tolerance and migration totals:".to_string(),
        "  year  tolerant  sensitive  resident  migratory".to_string(),
    ];
    for row in series::get_tolerance_migration_vector() {
        lines.push(format!(
            "  {}  {:>8}  {:>9}  {:>8}  {:>9}",
            row.year, row.tolerant, row.sensitive, row.resident, row.migratory
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_cover_every_bundled_dataset() {
        let lines = count_lines();
        assert_eq!(lines.len(), 6);
        assert!(lines[1].contains("757 entries"));
        assert!(lines[2].contains("13 islands"));
        assert!(lines[5].contains("17"));
    }

    #[test]
    fn every_zone_lands_in_one_risk_level() {
        let zones = RiskZone::get_risk_zone_vector();
        let known = zones
            .iter()
            .filter(|z| matches!(z.risk.as_str(), "Low" | "Medium" | "High"))
            .count();
        assert_eq!(known, zones.len());
    }

    #[test]
    fn trend_table_covers_every_survey_year() {
        let lines = trend_lines();
        assert_eq!(lines.len(), 2 + (LAST_YEAR - FIRST_YEAR + 1) as usize);
        assert!(lines[2].starts_with("  2014"));
        assert!(lines.last().unwrap().starts_with("  2024"));
    }

    #[test]
    fn tolerance_table_prints_first_year_totals() {
        let lines = tolerance_lines();
        assert!(lines[2].contains("318"));
        assert!(lines[2].contains("210"));
    }
}
