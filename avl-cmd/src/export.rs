//! Dataset export implementation.

use avl_dataset::cities::CityRecord;
use avl_dataset::geo::{ObservationSite, RiskZone};
use avl_dataset::species::SpeciesEntry;
use chrono::Local;
use log::info;
use std::path::Path;

/// Export the bundled datasets into the output directory.
///
/// Writes the full expanded species catalog, the national risk zones and
/// the observation sites as CSV in the column layout the dataset parsers
/// expect, the NCR city records as JSON, plus a small manifest recording
/// row counts and the export time.
pub fn run_export(output: &str) -> anyhow::Result<()> {
    let dir = Path::new(output);
    std::fs::create_dir_all(dir)?;

    let catalog = SpeciesEntry::get_catalog_vector();
    let zones = RiskZone::get_risk_zone_vector();
    let sites = ObservationSite::get_site_vector();
    let cities = CityRecord::get_city_vector();

    info!("Writing {} species catalog entries", catalog.len());
    std::fs::write(dir.join("species_catalog.csv"), species_csv(&catalog)?)?;

    info!("Writing {} risk zones", zones.len());
    std::fs::write(dir.join("risk_zones.csv"), zone_csv(&zones)?)?;

    info!("Writing {} observation sites", sites.len());
    std::fs::write(dir.join("observation_sites.csv"), site_csv(&sites)?)?;

    info!("Writing {} NCR city records", cities.len());
    std::fs::write(
        dir.join("ncr_cities.json"),
        serde_json::to_string_pretty(&cities)?,
    )?;

    let stamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    std::fs::write(
        dir.join("manifest.txt"),
        manifest(&stamp, catalog.len(), zones.len(), sites.len(), cities.len()),
    )?;

    info!("Export complete. Output: {}", output);
    Ok(())
}

/// Serialize species entries in the layout `parse_base_csv` reads back.
///
/// Sites are `|`-joined into a single column; descriptions keep their
/// embedded commas through the writer's quoting.
fn species_csv(entries: &[SpeciesEntry]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record([
        "id",
        "common_name",
        "scientific_name",
        "tolerance",
        "migration",
        "sites",
        "description",
    ])?;
    for entry in entries {
        let id = entry.id.to_string();
        let sites = entry.sites.join("|");
        wtr.write_record([
            id.as_str(),
            entry.common_name.as_str(),
            entry.scientific_name.as_str(),
            entry.tolerance.as_str(),
            entry.migration.as_str(),
            sites.as_str(),
            entry.description.as_str(),
        ])?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush species csv: {}", e))?;
    Ok(String::from_utf8(bytes)?)
}

fn zone_csv(zones: &[RiskZone]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["name", "lat", "lon", "risk", "detail"])?;
    for zone in zones {
        let lat = zone.lat.to_string();
        let lon = zone.lon.to_string();
        wtr.write_record([
            zone.name.as_str(),
            lat.as_str(),
            lon.as_str(),
            zone.risk.as_str(),
            zone.detail.as_str(),
        ])?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush risk zone csv: {}", e))?;
    Ok(String::from_utf8(bytes)?)
}

fn site_csv(sites: &[ObservationSite]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record([
        "name",
        "lat",
        "lon",
        "resident",
        "migratory",
        "light_tolerant",
        "light_sensitive",
    ])?;
    for site in sites {
        let lat = site.lat.to_string();
        let lon = site.lon.to_string();
        let resident = site.resident.to_string();
        let migratory = site.migratory.to_string();
        let tolerant = site.light_tolerant.to_string();
        let sensitive = site.light_sensitive.to_string();
        wtr.write_record([
            site.name.as_str(),
            lat.as_str(),
            lon.as_str(),
            resident.as_str(),
            migratory.as_str(),
            tolerant.as_str(),
            sensitive.as_str(),
        ])?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush site csv: {}", e))?;
    Ok(String::from_utf8(bytes)?)
}

fn manifest(stamp: &str, species: usize, zones: usize, sites: usize, cities: usize) -> String {
    format!(
        "AVILIGHT dataset export\ngenerated: {}\n\nspecies_catalog.csv: {} rows\nrisk_zones.csv: {} rows\nobservation_sites.csv: {} rows\nncr_cities.json: {} records\n",
        stamp, species, zones, sites, cities
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_export_round_trips_through_the_parser() {
        let catalog = SpeciesEntry::get_catalog_vector();
        let csv = species_csv(&catalog[..5]).unwrap();
        let parsed = SpeciesEntry::parse_base_csv(&csv).unwrap();
        assert_eq!(parsed, catalog[..5].to_vec());
    }

    #[test]
    fn site_export_round_trips_through_the_parser() {
        let sites = ObservationSite::get_site_vector();
        let csv = site_csv(&sites).unwrap();
        let parsed = ObservationSite::parse_site_csv(&csv).unwrap();
        assert_eq!(parsed, sites);
    }

    #[test]
    fn zone_export_keeps_the_expected_header_and_row_count() {
        let zones = RiskZone::get_risk_zone_vector();
        let csv = zone_csv(&zones).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("name,lat,lon,risk,detail"));
        assert_eq!(csv.lines().count(), zones.len() + 1);
    }

    #[test]
    fn city_export_round_trips_through_the_parser() {
        let cities = CityRecord::get_city_vector();
        let json = serde_json::to_string_pretty(&cities).unwrap();
        let parsed = CityRecord::parse_cities_json(&json).unwrap();
        assert_eq!(parsed, cities);
    }

    #[test]
    fn manifest_reports_row_counts_and_the_stamp() {
        let text = manifest("2025-06-01 12:00:00", 757, 18, 18, 17);
        assert!(text.contains("generated: 2025-06-01 12:00:00"));
        assert!(text.contains("species_catalog.csv: 757 rows"));
        assert!(text.contains("ncr_cities.json: 17 records"));
    }
}
