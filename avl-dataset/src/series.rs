use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// Embedded CSV data: per-year parameters of the monthly observation curve.
pub static YEARLY_OBSERVATIONS_CSV: &str = include_str!("../../fixtures/yearly_observations.csv");

/// Embedded CSV data: 2014-2024 mean richness and light-pollution index.
pub static RICHNESS_LIGHT_TREND_CSV: &str =
    include_str!("../../fixtures/richness_light_trend.csv");

/// Embedded CSV data: 2014-2024 tolerance and migration totals.
pub static TOLERANCE_MIGRATION_CSV: &str =
    include_str!("../../fixtures/tolerance_migration_by_year.csv");

/// Embedded CSV data: normalized light vs richness samples, 11 years x 5 sites.
pub static LIGHT_VS_RICHNESS_CSV: &str = include_str!("../../fixtures/light_vs_richness.csv");

/// Embedded CSV data: per-site light exposure levels and base richness.
pub static SITE_LIGHT_EXPOSURE_CSV: &str =
    include_str!("../../fixtures/site_light_exposure.csv");

/// First year covered by the survey series.
pub const FIRST_YEAR: i32 = 2014;

/// Last year covered by the survey series.
pub const LAST_YEAR: i32 = 2024;

/// Per-year parameters for the monthly observation curve.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct YearlyObservation {
    pub year: i32,
    /// Baseline monthly count.
    pub base: f64,
    /// Peak monthly count at the top of the season.
    pub peak: f64,
    /// Sinusoidal jitter amplitude.
    pub offset: f64,
}

/// One year of the richness vs light-pollution trend.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct RichnessLightPoint {
    pub year: i32,
    pub richness: f64,
    pub light_index: f64,
}

/// One year of tolerance and migration category totals.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ToleranceMigrationYear {
    pub year: i32,
    pub tolerant: i32,
    pub sensitive: i32,
    pub resident: i32,
    pub migratory: i32,
}

/// One normalized (light, richness) sample for a site and year.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LightRichnessSample {
    pub year: i32,
    pub site: String,
    pub light: f64,
    pub richness: f64,
}

/// Per-site light exposure level with base richness for the ranking chart.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SiteLightExposure {
    pub site: String,
    /// "Low", "Moderate" or "High".
    pub light_level: String,
    /// Radiance in nW/cm²/sr.
    pub light_val: f64,
    /// Normalized base richness the yearly ranking grows from.
    pub base: f64,
}

fn records_of(csv_object: &str) -> csv::Reader<&[u8]> {
    ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_object.as_bytes())
}

/// Parse the yearly observation-curve parameters.
pub fn parse_yearly_observations(csv_object: &str) -> anyhow::Result<Vec<YearlyObservation>> {
    let mut rows: Vec<YearlyObservation> = Vec::new();
    for row in records_of(csv_object).records() {
        let rho = row?;
        rows.push(YearlyObservation {
            year: rho.get(0).unwrap_or("").trim().parse::<i32>()?,
            base: rho.get(1).unwrap_or("").trim().parse::<f64>()?,
            peak: rho.get(2).unwrap_or("").trim().parse::<f64>()?,
            offset: rho.get(3).unwrap_or("").trim().parse::<f64>()?,
        });
    }
    Ok(rows)
}

/// Parse the richness vs light-index trend.
pub fn parse_richness_light_trend(csv_object: &str) -> anyhow::Result<Vec<RichnessLightPoint>> {
    let mut rows: Vec<RichnessLightPoint> = Vec::new();
    for row in records_of(csv_object).records() {
        let rho = row?;
        rows.push(RichnessLightPoint {
            year: rho.get(0).unwrap_or("").trim().parse::<i32>()?,
            richness: rho.get(1).unwrap_or("").trim().parse::<f64>()?,
            light_index: rho.get(2).unwrap_or("").trim().parse::<f64>()?,
        });
    }
    Ok(rows)
}

/// Parse the per-year tolerance and migration totals.
pub fn parse_tolerance_migration(csv_object: &str) -> anyhow::Result<Vec<ToleranceMigrationYear>> {
    let mut rows: Vec<ToleranceMigrationYear> = Vec::new();
    for row in records_of(csv_object).records() {
        let rho = row?;
        rows.push(ToleranceMigrationYear {
            year: rho.get(0).unwrap_or("").trim().parse::<i32>()?,
            tolerant: rho.get(1).unwrap_or("").trim().parse::<i32>()?,
            sensitive: rho.get(2).unwrap_or("").trim().parse::<i32>()?,
            resident: rho.get(3).unwrap_or("").trim().parse::<i32>()?,
            migratory: rho.get(4).unwrap_or("").trim().parse::<i32>()?,
        });
    }
    Ok(rows)
}

/// Parse the normalized light vs richness samples.
pub fn parse_light_vs_richness(csv_object: &str) -> anyhow::Result<Vec<LightRichnessSample>> {
    let mut rows: Vec<LightRichnessSample> = Vec::new();
    for row in records_of(csv_object).records() {
        let rho = row?;
        rows.push(LightRichnessSample {
            year: rho.get(0).unwrap_or("").trim().parse::<i32>()?,
            site: String::from(rho.get(1).unwrap_or("").trim()),
            light: rho.get(2).unwrap_or("").trim().parse::<f64>()?,
            richness: rho.get(3).unwrap_or("").trim().parse::<f64>()?,
        });
    }
    Ok(rows)
}

/// Parse the per-site light exposure table.
pub fn parse_site_light_exposure(csv_object: &str) -> anyhow::Result<Vec<SiteLightExposure>> {
    let mut rows: Vec<SiteLightExposure> = Vec::new();
    for row in records_of(csv_object).records() {
        let rho = row?;
        rows.push(SiteLightExposure {
            site: String::from(rho.get(0).unwrap_or("").trim()),
            light_level: String::from(rho.get(1).unwrap_or("").trim()),
            light_val: rho.get(2).unwrap_or("").trim().parse::<f64>()?,
            base: rho.get(3).unwrap_or("").trim().parse::<f64>()?,
        });
    }
    Ok(rows)
}

/// Get the yearly observation parameters from the embedded CSV.
pub fn get_yearly_observation_vector() -> Vec<YearlyObservation> {
    if let Ok(r) = parse_yearly_observations(YEARLY_OBSERVATIONS_CSV) {
        r
    } else {
        panic!("failed to parse yearly observations csv")
    }
}

/// Get the richness/light trend from the embedded CSV.
pub fn get_richness_light_vector() -> Vec<RichnessLightPoint> {
    if let Ok(r) = parse_richness_light_trend(RICHNESS_LIGHT_TREND_CSV) {
        r
    } else {
        panic!("failed to parse richness light trend csv")
    }
}

/// Get the tolerance/migration totals from the embedded CSV.
pub fn get_tolerance_migration_vector() -> Vec<ToleranceMigrationYear> {
    if let Ok(r) = parse_tolerance_migration(TOLERANCE_MIGRATION_CSV) {
        r
    } else {
        panic!("failed to parse tolerance migration csv")
    }
}

/// Get the light vs richness samples from the embedded CSV.
pub fn get_light_vs_richness_vector() -> Vec<LightRichnessSample> {
    if let Ok(r) = parse_light_vs_richness(LIGHT_VS_RICHNESS_CSV) {
        r
    } else {
        panic!("failed to parse light vs richness csv")
    }
}

/// Get the site light exposure table from the embedded CSV.
pub fn get_site_light_exposure_vector() -> Vec<SiteLightExposure> {
    if let Ok(r) = parse_site_light_exposure(SITE_LIGHT_EXPOSURE_CSV) {
        r
    } else {
        panic!("failed to parse site light exposure csv")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yearly_observations_cover_2014_to_2024() {
        let rows = get_yearly_observation_vector();
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[0].year, FIRST_YEAR);
        assert_eq!(rows[10].year, LAST_YEAR);
        assert_eq!(rows[0].base, 95.0);
        assert_eq!(rows[0].peak, 130.0);
        // the 2020 lockdown year spikes above its neighbors
        let y2020 = rows.iter().find(|r| r.year == 2020).unwrap();
        assert_eq!(y2020.peak, 188.0);
    }

    #[test]
    fn richness_trend_moves_opposite_to_light() {
        let rows = get_richness_light_vector();
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[0].richness, 77.2);
        assert_eq!(rows[0].light_index, 68.0);
        assert!(rows[10].richness > rows[0].richness);
        assert!(rows[10].light_index < rows[0].light_index);
    }

    #[test]
    fn tolerance_migration_rows_parse() {
        let rows = get_tolerance_migration_vector();
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[0].tolerant, 318);
        assert_eq!(rows[10].migratory, 245);
    }

    #[test]
    fn light_vs_richness_covers_five_sites_per_year() {
        let rows = get_light_vs_richness_vector();
        assert_eq!(rows.len(), 55);
        let y2014: Vec<_> = rows.iter().filter(|r| r.year == 2014).collect();
        assert_eq!(y2014.len(), 5);
        assert_eq!(y2014[0].site, "La Mesa Watershed");
        assert_eq!(y2014[0].light, 0.285);
    }

    #[test]
    fn site_light_exposure_has_twenty_sites() {
        let rows = get_site_light_exposure_vector();
        assert_eq!(rows.len(), 20);
        assert_eq!(rows[0].site, "La Mesa Eco Park");
        assert_eq!(rows[0].light_level, "Low");
        assert_eq!(rows[0].base, 0.89);
    }
}
