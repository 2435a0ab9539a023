//! Color scales shared by the maps and report charts.

/// Gradient stops of the richness legend strip, dark blue to amber.
pub const LEGEND_STOPS: [&str; 5] = ["#1a1e78", "#1565c0", "#42a5f5", "#fff176", "#f9a825"];

/// Tick values under the richness legend strip.
pub const LEGEND_TICKS: [i32; 5] = [0, 12, 25, 37, 50];

/// Unrounded channels for a normalized position `t` in 0..=1.
///
/// Four linear segments joined continuously at 0.28 / 0.54 / 0.78.
fn channels(t: f64) -> (f64, f64, f64) {
    if t < 0.28 {
        let s = t / 0.28;
        (20.0 + s * 18.0, 30.0 + s * 66.0, 120.0 + s * 100.0)
    } else if t < 0.54 {
        let s = (t - 0.28) / 0.26;
        (38.0 + s * 112.0, 96.0 + s * 116.0, 220.0 - s * 110.0)
    } else if t < 0.78 {
        let s = (t - 0.54) / 0.24;
        (150.0 + s * 105.0, 212.0 + s * 30.0, 110.0 - s * 110.0)
    } else {
        let s = (t - 0.78) / 0.22;
        (255.0, 242.0 - s * 138.0, 0.0)
    }
}

/// Heatmap fill for a richness value. Values saturate at 50.
pub fn richness_color(v: f64) -> String {
    let t = (v / 50.0).min(1.0);
    let (r, g, b) = channels(t);
    format!(
        "rgb({},{},{})",
        r.round() as u8,
        g.round() as u8,
        b.round() as u8
    )
}

/// Marker color for a risk level.
pub fn risk_color(risk: &str) -> &'static str {
    match risk {
        "High" => "#ef4444",
        "Medium" => "#eab308",
        _ => "#22c55e",
    }
}

/// Bar color for a site's light-exposure level.
pub fn light_level_color(level: &str) -> &'static str {
    match level {
        "Low" => "#22c55e",
        "Moderate" => "#84cc16",
        _ => "#eab308",
    }
}

/// Bar color for a correlation coefficient.
pub fn correlation_color(v: f64) -> &'static str {
    if v > 0.5 {
        "#22c55e"
    } else if v > 0.0 {
        "#86efac"
    } else if v > -0.5 {
        "#eab308"
    } else {
        "#ef4444"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_stay_in_rgb_range() {
        let mut v = 0.0;
        while v <= 50.0 {
            let (r, g, b) = channels((v / 50.0_f64).min(1.0));
            for c in [r, g, b] {
                assert!(
                    (0.0..=255.0).contains(&c),
                    "channel {} out of range at v={}",
                    c,
                    v
                );
            }
            v += 0.25;
        }
    }

    #[test]
    fn segments_join_continuously() {
        for boundary in [0.28, 0.54, 0.78] {
            let below = channels(boundary - 1e-9);
            let at = channels(boundary);
            assert!((below.0 - at.0).abs() < 0.001);
            assert!((below.1 - at.1).abs() < 0.001);
            assert!((below.2 - at.2).abs() < 0.001);
        }
    }

    #[test]
    fn brightness_climbs_across_boundaries() {
        let brightness = |t: f64| {
            let (r, g, b) = channels(t);
            r + g + b
        };
        assert!(brightness(0.0) < brightness(0.28));
        assert!(brightness(0.28) < brightness(0.54));
        assert!(brightness(0.54) < brightness(0.78));
    }

    #[test]
    fn endpoint_colors() {
        assert_eq!(richness_color(0.0), "rgb(20,30,120)");
        assert_eq!(richness_color(50.0), "rgb(255,104,0)");
        // values beyond the saturation point clamp
        assert_eq!(richness_color(500.0), richness_color(50.0));
    }

    #[test]
    fn risk_and_level_colors() {
        assert_eq!(risk_color("Low"), "#22c55e");
        assert_eq!(risk_color("Medium"), "#eab308");
        assert_eq!(risk_color("High"), "#ef4444");
        assert_eq!(light_level_color("Moderate"), "#84cc16");
        assert_eq!(correlation_color(-0.72), "#ef4444");
        assert_eq!(correlation_color(0.68), "#22c55e");
        assert_eq!(correlation_color(0.32), "#86efac");
        assert_eq!(correlation_color(-0.31), "#eab308");
    }
}
