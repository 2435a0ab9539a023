//! Generated observation series: per-site monthly counts, the yearly
//! observation curve, the per-site richness ranking, and marker scaling
//! for the national map.

use avl_dataset::geo::ObservationSite;
use avl_dataset::series::{SiteLightExposure, FIRST_YEAR};

/// Relative shape of the in-year observation season, one weight per month.
/// Normalized against its own peak of 38.
pub const MONTH_SHAPE: [f64; 12] = [
    0.0, 3.0, 11.0, 24.0, 33.0, 38.0, 36.0, 30.0, 24.0, 18.0, 10.0, 3.0,
];

/// Species counts at one site for one (year, month) slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteCounts {
    pub resident: i32,
    pub migratory: i32,
    pub light_tolerant: i32,
    pub light_sensitive: i32,
}

impl SiteCounts {
    pub fn total(&self) -> i32 {
        self.resident + self.migratory + self.light_tolerant + self.light_sensitive
    }
}

/// Migration multiplier for a calendar month (1-12). Month slot 0 is the
/// annual aggregate and keeps factor 1.0; the boost months span the
/// northern winter (Oct-Mar).
pub fn migration_factor(month: u32) -> f64 {
    match month {
        0 => 1.0,
        1 => 1.8,
        2 => 1.9,
        3 => 1.6,
        10 => 1.4,
        11 => 1.7,
        12 => 1.9,
        _ => 0.6,
    }
}

/// Counts at a site for a given year and month slot (0 = annual, 1-12 =
/// Jan-Dec). Counts drift slightly upward with the year index so later
/// survey years read busier.
pub fn site_counts(site: &ObservationSite, year: i32, month: u32) -> SiteCounts {
    let yi = (year - FIRST_YEAR) as f64;
    let mf = migration_factor(month);
    SiteCounts {
        resident: (site.resident as f64 + yi * 0.5).round() as i32,
        migratory: (site.migratory as f64 * mf + yi * 0.3).round() as i32,
        light_tolerant: (site.light_tolerant as f64 + yi * 0.2).round() as i32,
        light_sensitive: (site.light_sensitive as f64 + yi * 0.4).round() as i32,
    }
}

/// Monthly observation counts for one year's (base, peak, offset) curve
/// parameters.
pub fn monthly_observation_curve(base: f64, peak: f64, offset: f64) -> Vec<i32> {
    MONTH_SHAPE
        .iter()
        .enumerate()
        .map(|(i, shape)| {
            (base + (shape / 38.0) * (peak - base) + offset * (i as f64 * 0.5).sin()).round()
                as i32
        })
        .collect()
}

/// ALAN index percentage shown on the dashboard for a year. 2020 dips for
/// the lockdown effect.
pub fn light_intensity_pct(year: i32) -> i32 {
    let lockdown_dip = if year == 2020 { -4.0 } else { 0.0 };
    (72.0 + (year - FIRST_YEAR) as f64 * 0.8 + lockdown_dip).round() as i32
}

/// Percent change between this year's peak count and the previous year's,
/// rounded to one decimal.
pub fn peak_change_pct(curr_max: f64, prev_max: f64) -> f64 {
    ((curr_max - prev_max) / prev_max * 1000.0).round() / 10.0
}

/// One site in the yearly richness ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedSite {
    pub site: String,
    pub light_level: String,
    pub light_val: f64,
    pub richness: f64,
}

/// Normalized per-site richness for a year, sorted descending.
///
/// Sites under darker skies recover faster: the yearly growth rate is
/// 0.012 for Low exposure, 0.007 for Moderate and 0.003 for High, with the
/// value capped at 1.0 and rounded to three decimals.
pub fn site_richness_ranking(sites: &[SiteLightExposure], year: i32) -> Vec<RankedSite> {
    let t = (year - FIRST_YEAR) as f64;
    let mut ranked: Vec<RankedSite> = sites
        .iter()
        .map(|s| {
            let rate = match s.light_level.as_str() {
                "Low" => 0.012,
                "Moderate" => 0.007,
                _ => 0.003,
            };
            let richness = (s.base + t * rate).min(1.0);
            RankedSite {
                site: s.site.clone(),
                light_level: s.light_level.clone(),
                light_val: s.light_val,
                richness: (richness * 1000.0).round() / 1000.0,
            }
        })
        .collect();
    ranked.sort_by(|a, b| b.richness.partial_cmp(&a.richness).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}

/// Normalize a site total into 0..=1 against the 80-230 display range.
pub fn marker_norm(total: i32) -> f64 {
    ((total as f64 - 80.0) / 150.0).clamp(0.0, 1.0)
}

/// Marker radius in px (4-11) for a site total.
pub fn marker_radius(total: i32) -> f64 {
    (4.0 + marker_norm(total) * 7.0).round()
}

/// Marker fill opacity (0.4-0.9) for a site total.
pub fn marker_opacity(total: i32) -> f64 {
    0.4 + marker_norm(total) * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use avl_dataset::geo::ObservationSite;
    use avl_dataset::series::get_site_light_exposure_vector;

    fn la_mesa() -> ObservationSite {
        ObservationSite {
            name: "La Mesa Watershed".to_string(),
            lat: 14.72,
            lon: 121.12,
            resident: 42,
            migratory: 28,
            light_tolerant: 18,
            light_sensitive: 24,
        }
    }

    #[test]
    fn annual_counts_for_first_year_match_base() {
        let counts = site_counts(&la_mesa(), 2014, 0);
        assert_eq!(counts.resident, 42);
        assert_eq!(counts.migratory, 28);
        assert_eq!(counts.light_tolerant, 18);
        assert_eq!(counts.light_sensitive, 24);
        assert_eq!(counts.total(), 112);
    }

    #[test]
    fn winter_months_multiply_migrants() {
        let site = la_mesa();
        let february = site_counts(&site, 2014, 2);
        let june = site_counts(&site, 2014, 6);
        assert_eq!(february.migratory, (28.0_f64 * 1.9).round() as i32);
        assert_eq!(june.migratory, (28.0_f64 * 0.6).round() as i32);
        // non-migratory categories are unchanged by the month
        assert_eq!(february.resident, june.resident);
    }

    #[test]
    fn later_years_drift_upward() {
        let site = la_mesa();
        let y2014 = site_counts(&site, 2014, 0);
        let y2024 = site_counts(&site, 2024, 0);
        assert_eq!(y2024.resident, 47); // 42 + 10*0.5
        assert_eq!(y2024.light_sensitive, 28); // 24 + 10*0.4
        assert!(y2024.total() > y2014.total());
    }

    #[test]
    fn observation_curve_peaks_in_june() {
        let curve = monthly_observation_curve(95.0, 130.0, 2.0);
        assert_eq!(curve.len(), 12);
        assert_eq!(curve[0], 95); // January sits at base
        let max = curve.iter().max().unwrap();
        assert_eq!(curve[5], *max);
    }

    #[test]
    fn light_intensity_dips_in_2020() {
        assert_eq!(light_intensity_pct(2014), 72);
        assert_eq!(light_intensity_pct(2020), 73); // 76.8 - 4
        assert_eq!(light_intensity_pct(2021), 78);
        assert_eq!(light_intensity_pct(2024), 80);
    }

    #[test]
    fn peak_change_keeps_one_decimal() {
        assert_eq!(peak_change_pct(188.0, 143.0), 31.5);
        assert_eq!(peak_change_pct(168.0, 188.0), -10.6);
    }

    #[test]
    fn ranking_is_sorted_and_capped() {
        let sites = get_site_light_exposure_vector();
        let ranked = site_richness_ranking(&sites, 2024);
        assert_eq!(ranked.len(), 20);
        for pair in ranked.windows(2) {
            assert!(pair[0].richness >= pair[1].richness);
        }
        for r in &ranked {
            assert!(r.richness <= 1.0);
        }
        // low-light sites climb 0.012 per year
        let la_mesa = ranked.iter().find(|r| r.site == "La Mesa Eco Park").unwrap();
        assert_eq!(la_mesa.richness, 1.0); // 0.89 + 10 * 0.012 caps at 1
    }

    #[test]
    fn marker_scale_clamps_to_display_range() {
        assert_eq!(marker_radius(80), 4.0);
        assert_eq!(marker_radius(230), 11.0);
        assert_eq!(marker_radius(60), 4.0);
        assert_eq!(marker_radius(400), 11.0);
        assert!((marker_opacity(155) - 0.65).abs() < 1e-9);
    }
}
