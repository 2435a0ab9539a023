//! Small fixed tables that ship inside the binary rather than as fixture
//! files: month names, report matrices, audit rows, and the static lists
//! shown on the home, dashboard and settings pages.

/// Short month names used by the dashboard selectors.
pub const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Full month names used by the analytics filters.
pub const MONTHS_LONG: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Seasonal richness offsets added on top of a city's richness value,
/// indexed by month (0 = January).
pub const MONTHLY_RICHNESS_OFFSETS: [f64; 12] =
    [0.0, 0.0, 1.0, 2.0, 3.0, 4.0, 4.0, 3.0, 2.0, 1.0, 1.0, 0.0];

/// Migratory-season boost applied by the prediction formula, indexed by
/// month (0 = January). Peaks across the northern winter months.
pub const MIGRATORY_MONTH_BOOSTS: [f64; 12] = [
    0.0, 0.2, 0.3, 0.15, 0.0, 0.0, 0.0, 0.0, 0.0, 0.1, 0.25, 0.35,
];

/// One row of the environmental correlation matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationRow {
    pub label: &'static str,
    pub pair: &'static str,
    pub value: f64,
    pub direction: &'static str,
}

/// Pearson coefficients between the monitored environmental variables.
pub const CORRELATION_MATRIX: [CorrelationRow; 6] = [
    CorrelationRow {
        label: "Light vs Richness",
        pair: "Artificial Light at Night ↔ Bird Richness",
        value: -0.72,
        direction: "Strong Negative",
    },
    CorrelationRow {
        label: "NDVI vs Richness",
        pair: "Vegetation Index (NDVI) ↔ Bird Richness",
        value: 0.68,
        direction: "Strong Positive",
    },
    CorrelationRow {
        label: "Temp vs Richness",
        pair: "Land Surface Temperature ↔ Bird Richness",
        value: -0.31,
        direction: "Mild Negative",
    },
    CorrelationRow {
        label: "Elevation vs Richness",
        pair: "Elevation (m) ↔ Bird Richness",
        value: 0.25,
        direction: "Mild Positive",
    },
    CorrelationRow {
        label: "Light vs NDVI",
        pair: "Artificial Light at Night ↔ Vegetation Index",
        value: -0.45,
        direction: "Moderate Negative",
    },
    CorrelationRow {
        label: "Temp vs Light",
        pair: "Land Surface Temperature ↔ Artificial Light",
        value: 0.32,
        direction: "Mild Positive",
    },
];

/// One row of the KBA/PA light-exposure audit table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AuditRow {
    pub rank: i32,
    pub name: &'static str,
    pub kind: &'static str,
    pub light: f64,
    pub species: i32,
    pub sensitive_pct: i32,
    pub score: i32,
    pub grade: &'static str,
}

/// Key Biodiversity Areas and Protected Areas ranked by conservation score.
pub const KBA_AUDIT: [AuditRow; 5] = [
    AuditRow {
        rank: 1,
        name: "La Mesa Watershed",
        kind: "KBA",
        light: 28.5,
        species: 85,
        sensitive_pct: 42,
        score: 82,
        grade: "A",
    },
    AuditRow {
        rank: 2,
        name: "Marikina Watershed",
        kind: "PA",
        light: 32.1,
        species: 72,
        sensitive_pct: 48,
        score: 79,
        grade: "B",
    },
    AuditRow {
        rank: 3,
        name: "Las Piñas-Parañaque Critical Habitat",
        kind: "KBA",
        light: 38.7,
        species: 92,
        sensitive_pct: 58,
        score: 75,
        grade: "B",
    },
    AuditRow {
        rank: 4,
        name: "Laguna de Bay Wetlands",
        kind: "KBA",
        light: 35.4,
        species: 125,
        sensitive_pct: 52,
        score: 71,
        grade: "B",
    },
    AuditRow {
        rank: 5,
        name: "Ninoy Aquino Parks & Wildlife Center",
        kind: "PA",
        light: 45.2,
        species: 48,
        sensitive_pct: 35,
        score: 68,
        grade: "C",
    },
];

/// One bar group of the species-distribution-by-area chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesDistRow {
    pub name: &'static str,
    pub short_name: &'static str,
    pub total: i32,
    pub sensitive: i32,
    pub tolerant: i32,
}

/// Species counts per key conservation area.
pub const SPECIES_DISTRIBUTION: [SpeciesDistRow; 5] = [
    SpeciesDistRow {
        name: "La Mesa Watershed",
        short_name: "La Mesa",
        total: 85,
        sensitive: 36,
        tolerant: 49,
    },
    SpeciesDistRow {
        name: "NAPWC",
        short_name: "NAPWC",
        total: 48,
        sensitive: 17,
        tolerant: 31,
    },
    SpeciesDistRow {
        name: "Las Piñas-Parañaque",
        short_name: "LPPCHEA",
        total: 92,
        sensitive: 53,
        tolerant: 39,
    },
    SpeciesDistRow {
        name: "Marikina Watershed",
        short_name: "Marikina",
        total: 72,
        sensitive: 35,
        tolerant: 37,
    },
    SpeciesDistRow {
        name: "Laguna de Bay",
        short_name: "Laguna de Bay",
        total: 125,
        sensitive: 65,
        tolerant: 60,
    },
];

/// One point of the light-exposure vs species-count scatter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterPoint {
    pub light: f64,
    pub species: i32,
    pub site: &'static str,
    pub kind: &'static str,
    pub grade: &'static str,
}

/// Light exposure against total species for the audited areas.
pub const LIGHT_SPECIES_SCATTER: [ScatterPoint; 5] = [
    ScatterPoint {
        light: 28.5,
        species: 85,
        site: "La Mesa Watershed",
        kind: "KBA",
        grade: "A",
    },
    ScatterPoint {
        light: 32.1,
        species: 72,
        site: "Marikina Watershed",
        kind: "PA",
        grade: "B",
    },
    ScatterPoint {
        light: 35.4,
        species: 125,
        site: "Laguna de Bay Wetlands",
        kind: "KBA",
        grade: "B",
    },
    ScatterPoint {
        light: 38.7,
        species: 92,
        site: "Las Piñas-Parañaque Critical Habitat",
        kind: "KBA",
        grade: "B",
    },
    ScatterPoint {
        light: 45.2,
        species: 48,
        site: "Ninoy Aquino Parks & Wildlife Center",
        kind: "PA",
        grade: "C",
    },
];

/// Fill colors for the land-cover classes on the analytics map.
pub const LAND_COLORS: [(&str, &str); 10] = [
    ("Urban & Built-up", "#e53935"),
    ("Water Bodies", "#42a5f5"),
    ("Forest", "#2e7d32"),
    ("Croplands", "#fdd835"),
    ("Grasslands", "#66bb6a"),
    ("Wetlands", "#00897b"),
    ("Savannas", "#fb8c00"),
    ("Woody Savannas", "#5d4037"),
    ("Cropland Mosaics", "#f06a1e"),
    ("Barren", "#8d6e63"),
];

/// Land-cover classes shown in the map legend (Savannas has no NCR extent).
pub const LAND_LEGEND_TYPES: [&str; 9] = [
    "Urban & Built-up",
    "Water Bodies",
    "Forest",
    "Croplands",
    "Grasslands",
    "Wetlands",
    "Woody Savannas",
    "Cropland Mosaics",
    "Barren",
];

/// A fixed (feature, importance) weight for the SHAP rankings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapWeight {
    pub feature: &'static str,
    pub value: f64,
}

/// Region-wide feature importances shown when no city is selected.
pub const GLOBAL_SHAP: [ShapWeight; 5] = [
    ShapWeight {
        feature: "Light Intensity",
        value: 0.45,
    },
    ShapWeight {
        feature: "NDVI",
        value: 0.26,
    },
    ShapWeight {
        feature: "Temperature",
        value: 0.16,
    },
    ShapWeight {
        feature: "Elevation",
        value: 0.07,
    },
    ShapWeight {
        feature: "Distance to Water",
        value: 0.06,
    },
];

/// Marker colors for the per-site scatter series.
pub const SITE_COLORS: [&str; 5] = ["#22c55e", "#3b82f6", "#f59e0b", "#a855f7", "#ef4444"];

/// One entry in the dashboard's recent-updates feed. `tone` selects the
/// icon and tint: "alert", "success" or "info".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecentUpdate {
    pub tone: &'static str,
    pub title: &'static str,
    pub time: &'static str,
}

/// Static feed shown under the national map.
pub const RECENT_UPDATES: [RecentUpdate; 3] = [
    RecentUpdate {
        tone: "alert",
        title: "High light intensity detected in Zone A3",
        time: "2 hours ago",
    },
    RecentUpdate {
        tone: "success",
        title: "Bird richness increased by 12%",
        time: "5 hours ago",
    },
    RecentUpdate {
        tone: "info",
        title: "Monitoring update scheduled",
        time: "1 day ago",
    },
];

/// One placeholder announcement on the home page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Announcement {
    pub title: &'static str,
    pub date: &'static str,
    pub tag: &'static str,
}

/// Placeholder DENR-BMB announcements (the live feed is not wired up).
pub const ANNOUNCEMENTS: [Announcement; 3] = [
    Announcement {
        title: "Wildlife Week 2024 Celebration",
        date: "Dec 10, 2024",
        tag: "Event",
    },
    Announcement {
        title: "Updated Protected Area Guidelines",
        date: "Nov 28, 2024",
        tag: "Policy",
    },
    Announcement {
        title: "Bird Survey Results: Metro Manila",
        date: "Nov 15, 2024",
        tag: "Report",
    },
];

/// One row of the model versions table on the settings page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelVersion {
    pub version: &'static str,
    pub date: &'static str,
    pub status: &'static str,
}

/// Registered prediction-model versions.
pub const MODEL_VERSIONS: [ModelVersion; 3] = [
    ModelVersion {
        version: "v2.1.0",
        date: "2025-01-10",
        status: "Active",
    },
    ModelVersion {
        version: "v2.0.3",
        date: "2025-12-15",
        status: "Backup",
    },
    ModelVersion {
        version: "v2.0.2",
        date: "2025-11-05",
        status: "Archived",
    },
];

/// One row of the validation & error log on the settings page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationLogRow {
    pub ts: &'static str,
    pub kind: &'static str,
    pub issue: &'static str,
    pub status: &'static str,
}

/// Recent data-validation incidents.
pub const VALIDATION_LOGS: [ValidationLogRow; 3] = [
    ValidationLogRow {
        ts: "2026-02-05 14:23",
        kind: "Spatial",
        issue: "12 observations outside Philippines bounds (lat > 20°N)",
        status: "Rejected",
    },
    ValidationLogRow {
        ts: "2026-02-03 09:15",
        kind: "Format",
        issue: "Date format inconsistent in batch upload #3847",
        status: "Resolved",
    },
    ValidationLogRow {
        ts: "2026-02-01 16:42",
        kind: "Duplicate",
        issue: "45 duplicate records detected in eBird sync",
        status: "Cleaned",
    },
];

/// One row of the security & access log on the settings page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccessLogRow {
    pub user: &'static str,
    pub action: &'static str,
    pub time: &'static str,
}

/// Recent account activity.
pub const ACCESS_LOGS: [AccessLogRow; 3] = [
    AccessLogRow {
        user: "giancarloregalado05@gmail.com",
        action: "Logged in",
        time: "Just now",
    },
    AccessLogRow {
        user: "admin@avilight.ph",
        action: "Model upload v2.1.0",
        time: "2 days ago",
    },
    AccessLogRow {
        user: "researcher@denr.gov",
        action: "Downloaded report",
        time: "3 days ago",
    },
];

/// One row of the system health list. `tone` is "success", "warning" or
/// "info".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthRow {
    pub label: &'static str,
    pub value: &'static str,
    pub tone: &'static str,
}

/// Monitoring status across core services.
pub const SYSTEM_HEALTH: [HealthRow; 5] = [
    HealthRow {
        label: "API Response Time",
        value: "125ms",
        tone: "info",
    },
    HealthRow {
        label: "Database Status",
        value: "Healthy",
        tone: "success",
    },
    HealthRow {
        label: "Model Serving",
        value: "Online",
        tone: "success",
    },
    HealthRow {
        label: "Satellite Data Sync",
        value: "Active",
        tone: "success",
    },
    HealthRow {
        label: "Disk Usage",
        value: "68%",
        tone: "warning",
    },
];

/// One row of the KBA/PA monitoring table on the home page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonitoredArea {
    pub name: &'static str,
    pub kind: &'static str,
    pub species: i32,
    pub light_exposure: f64,
    pub status: &'static str,
}

/// Conservation areas tracked on the executive summary.
pub const MONITORED_AREAS: [MonitoredArea; 5] = [
    MonitoredArea {
        name: "La Mesa Watershed",
        kind: "KBA",
        species: 85,
        light_exposure: 28.5,
        status: "Protected",
    },
    MonitoredArea {
        name: "Ninoy Aquino Parks & Wildlife Center",
        kind: "PA",
        species: 48,
        light_exposure: 45.2,
        status: "Protected",
    },
    MonitoredArea {
        name: "Las Piñas-Parañaque Critical Habitat",
        kind: "KBA",
        species: 92,
        light_exposure: 38.7,
        status: "Protected",
    },
    MonitoredArea {
        name: "Marikina Watershed",
        kind: "PA",
        species: 72,
        light_exposure: 32.1,
        status: "Protected",
    },
    MonitoredArea {
        name: "Laguna de Bay Wetlands",
        kind: "KBA",
        species: 125,
        light_exposure: 35.4,
        status: "Partially Protected",
    },
];

/// Look up the fill color for a land-cover class.
pub fn land_color(class: &str) -> &'static str {
    for (name, color) in LAND_COLORS.iter() {
        if *name == class {
            return color;
        }
    }
    "#9e9e9e"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correlation_matrix_values_stay_in_range() {
        for row in CORRELATION_MATRIX.iter() {
            assert!(row.value >= -1.0 && row.value <= 1.0);
        }
        assert_eq!(CORRELATION_MATRIX[0].value, -0.72);
    }

    #[test]
    fn audit_rows_are_ranked() {
        for (i, row) in KBA_AUDIT.iter().enumerate() {
            assert_eq!(row.rank, i as i32 + 1);
        }
        // scores descend with rank
        for pair in KBA_AUDIT.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn global_shap_sums_to_one() {
        let sum: f64 = GLOBAL_SHAP.iter().map(|w| w.value).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn land_color_lookup() {
        assert_eq!(land_color("Forest"), "#2e7d32");
        assert_eq!(land_color("Water Bodies"), "#42a5f5");
        assert_eq!(land_color("unknown class"), "#9e9e9e");
    }

    #[test]
    fn legend_omits_savannas() {
        assert!(!LAND_LEGEND_TYPES.contains(&"Savannas"));
        assert_eq!(LAND_LEGEND_TYPES.len(), LAND_COLORS.len() - 1);
    }
}
