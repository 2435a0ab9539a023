use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// Embedded JSON outlines for the 13-island national map.
pub static ARCHIPELAGO_JSON: &str = include_str!("../../fixtures/archipelago.json");

/// Embedded CSV data for the monitored light-pollution risk zones.
pub static RISK_ZONES_CSV: &str = include_str!("../../fixtures/risk_zones.csv");

/// Embedded CSV data for the bird observation sites with base counts.
pub static OBSERVATION_SITES_CSV: &str = include_str!("../../fixtures/observation_sites.csv");

/// The first six risk zones are the Metro Manila cluster; the national map
/// derives its "Metro Manila" label box from their bounding rectangle.
pub const METRO_MANILA_ZONE_COUNT: usize = 6;

/// One island outline for the national map. Ring vertices are (lon, lat).
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Island {
    pub name: String,
    pub ring: Vec<[f64; 2]>,
}

impl Island {
    /// Parse a JSON string of island outlines.
    pub fn parse_islands_json(json_object: &str) -> anyhow::Result<Vec<Island>> {
        let islands: Vec<Island> = serde_json::from_str(json_object)?;
        Ok(islands)
    }

    /// Get the island vector from the embedded JSON.
    pub fn get_island_vector() -> Vec<Island> {
        if let Ok(i) = Island::parse_islands_json(ARCHIPELAGO_JSON) {
            i
        } else {
            panic!("failed to parse archipelago json")
        }
    }
}

/// A monitored light-pollution zone on the national map.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct RiskZone {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// "Low", "Medium" or "High".
    pub risk: String,
    /// Radiance detail shown in the marker popover (nW/cm²/sr).
    pub detail: String,
}

impl RiskZone {
    /// Parse a CSV string of risk zones.
    ///
    /// Expected CSV columns: name, lat, lon, risk, detail.
    pub fn parse_risk_zone_csv(csv_object: &str) -> anyhow::Result<Vec<RiskZone>> {
        let mut zones: Vec<RiskZone> = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let rho = row?;
            zones.push(RiskZone {
                name: String::from(rho.get(0).unwrap_or("").trim()),
                lat: rho.get(1).unwrap_or("").trim().parse::<f64>()?,
                lon: rho.get(2).unwrap_or("").trim().parse::<f64>()?,
                risk: String::from(rho.get(3).unwrap_or("").trim()),
                detail: String::from(rho.get(4).unwrap_or("").trim()),
            });
        }
        Ok(zones)
    }

    /// Get the risk zone vector from the embedded CSV.
    pub fn get_risk_zone_vector() -> Vec<RiskZone> {
        if let Ok(z) = RiskZone::parse_risk_zone_csv(RISK_ZONES_CSV) {
            z
        } else {
            panic!("failed to parse risk zones csv")
        }
    }
}

/// A bird observation site with its baseline category counts.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ObservationSite {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub resident: i32,
    pub migratory: i32,
    pub light_tolerant: i32,
    pub light_sensitive: i32,
}

impl ObservationSite {
    /// Parse a CSV string of observation sites.
    ///
    /// Expected CSV columns: name, lat, lon, resident, migratory,
    /// light_tolerant, light_sensitive.
    pub fn parse_site_csv(csv_object: &str) -> anyhow::Result<Vec<ObservationSite>> {
        let mut sites: Vec<ObservationSite> = Vec::new();
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv_object.as_bytes());
        for row in rdr.records() {
            let rho = row?;
            sites.push(ObservationSite {
                name: String::from(rho.get(0).unwrap_or("").trim()),
                lat: rho.get(1).unwrap_or("").trim().parse::<f64>()?,
                lon: rho.get(2).unwrap_or("").trim().parse::<f64>()?,
                resident: rho.get(3).unwrap_or("0").trim().parse::<i32>()?,
                migratory: rho.get(4).unwrap_or("0").trim().parse::<i32>()?,
                light_tolerant: rho.get(5).unwrap_or("0").trim().parse::<i32>()?,
                light_sensitive: rho.get(6).unwrap_or("0").trim().parse::<i32>()?,
            });
        }
        Ok(sites)
    }

    /// Get the observation site vector from the embedded CSV.
    pub fn get_site_vector() -> Vec<ObservationSite> {
        if let Ok(s) = ObservationSite::parse_site_csv(OBSERVATION_SITES_CSV) {
            s
        } else {
            panic!("failed to parse observation sites csv")
        }
    }

    /// Sum of all four category counts.
    pub fn total(&self) -> i32 {
        self.resident + self.migratory + self.light_tolerant + self.light_sensitive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn island_vector_has_thirteen_outlines() {
        let islands = Island::get_island_vector();
        assert_eq!(islands.len(), 13);
        assert_eq!(islands[0].name, "luzon");
        assert_eq!(islands[0].ring.len(), 30);
    }

    #[test]
    fn risk_zone_vector_has_eighteen_zones() {
        let zones = RiskZone::get_risk_zone_vector();
        assert_eq!(zones.len(), 18);
        let la_mesa = &zones[0];
        assert_eq!(la_mesa.name, "La Mesa Watershed");
        assert_eq!(la_mesa.risk, "Low");
        assert_eq!(la_mesa.detail, "28.5 nW/cm²/sr");
    }

    #[test]
    fn site_vector_has_eighteen_sites() {
        let sites = ObservationSite::get_site_vector();
        assert_eq!(sites.len(), 18);
        let la_mesa = &sites[0];
        assert_eq!(la_mesa.name, "La Mesa Watershed");
        assert_eq!(la_mesa.resident, 42);
        assert_eq!(la_mesa.total(), 42 + 28 + 18 + 24);
    }
}
