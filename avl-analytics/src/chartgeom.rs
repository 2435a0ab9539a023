//! SVG path and layout helpers for the hand-drawn charts.
//!
//! Pages compose these into `path`/`polyline` attributes; nothing here
//! touches the DOM.

use std::f64::consts::PI;

/// Linearly map `v` from the domain `(d0, d1)` into the range `(r0, r1)`.
pub fn scale(v: f64, d0: f64, d1: f64, r0: f64, r1: f64) -> f64 {
    if (d1 - d0).abs() < f64::EPSILON {
        return r0;
    }
    r0 + (v - d0) / (d1 - d0) * (r1 - r0)
}

/// Build an SVG line path (`M x,y L x,y ...`) through the points.
pub fn polyline_path(points: &[(f64, f64)]) -> String {
    let mut path = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        let op = if i == 0 { 'M' } else { 'L' };
        path.push_str(&format!("{}{:.1},{:.1} ", op, x, y));
    }
    path.trim_end().to_string()
}

/// Close a line path down to a baseline so it can be filled as an area.
pub fn area_path(points: &[(f64, f64)], baseline_y: f64) -> String {
    if points.is_empty() {
        return String::new();
    }
    let first_x = points[0].0;
    let last_x = points[points.len() - 1].0;
    format!(
        "{} L{:.1},{:.1} L{:.1},{:.1} Z",
        polyline_path(points),
        last_x,
        baseline_y,
        first_x,
        baseline_y
    )
}

/// A point on a circle at `angle` radians clockwise from 12 o'clock.
fn arc_point(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    (cx + r * angle.sin(), cy - r * angle.cos())
}

/// SVG path for one donut segment between two angles in radians, measured
/// clockwise from 12 o'clock. Sweeps over half a turn set the large-arc
/// flag.
pub fn donut_segment(
    cx: f64,
    cy: f64,
    r_inner: f64,
    r_outer: f64,
    start: f64,
    end: f64,
) -> String {
    let large = if end - start > PI { 1 } else { 0 };
    let (x0, y0) = arc_point(cx, cy, r_outer, start);
    let (x1, y1) = arc_point(cx, cy, r_outer, end);
    let (x2, y2) = arc_point(cx, cy, r_inner, end);
    let (x3, y3) = arc_point(cx, cy, r_inner, start);
    format!(
        "M{:.2},{:.2} A{:.2},{:.2} 0 {} 1 {:.2},{:.2} L{:.2},{:.2} A{:.2},{:.2} 0 {} 0 {:.2},{:.2} Z",
        x0, y0, r_outer, r_outer, large, x1, y1, x2, y2, r_inner, r_inner, large, x3, y3
    )
}

/// Anchor for a segment's percentage label: the angular midpoint at the
/// middle of the ring.
pub fn segment_label_at(
    cx: f64,
    cy: f64,
    r_inner: f64,
    r_outer: f64,
    start: f64,
    end: f64,
) -> (f64, f64) {
    arc_point(cx, cy, (r_inner + r_outer) / 2.0, (start + end) / 2.0)
}

/// Turn category counts into consecutive (start, end) angle pairs covering
/// the full ring, in input order.
pub fn donut_angles(counts: &[f64]) -> Vec<(f64, f64)> {
    let total: f64 = counts.iter().sum();
    if total <= 0.0 {
        return counts.iter().map(|_| (0.0, 0.0)).collect();
    }
    let mut angles = Vec::with_capacity(counts.len());
    let mut acc = 0.0;
    for c in counts {
        let sweep = c / total * 2.0 * PI;
        angles.push((acc, acc + sweep));
        acc += sweep;
    }
    angles
}

/// `count` evenly spaced tick values from `min` to `max` inclusive.
pub fn axis_ticks(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count < 2 {
        return vec![min];
    }
    (0..count)
        .map(|i| min + (max - min) * i as f64 / (count - 1) as f64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyline_path_formats_points() {
        let path = polyline_path(&[(0.0, 140.0), (30.0, 90.0), (60.0, 40.0)]);
        assert_eq!(path, "M0.0,140.0 L30.0,90.0 L60.0,40.0");
    }

    #[test]
    fn area_path_closes_to_baseline() {
        let path = area_path(&[(0.0, 100.0), (50.0, 20.0)], 140.0);
        assert!(path.starts_with("M0.0,100.0"));
        assert!(path.ends_with("L50.0,140.0 L0.0,140.0 Z"));
    }

    #[test]
    fn empty_series_yield_empty_paths() {
        assert_eq!(polyline_path(&[]), "");
        assert_eq!(area_path(&[], 140.0), "");
    }

    #[test]
    fn donut_angles_cover_the_ring() {
        let angles = donut_angles(&[1.0, 1.0, 2.0]);
        assert_eq!(angles.len(), 3);
        assert!((angles[0].1 - PI / 2.0).abs() < 1e-9);
        assert!((angles[2].1 - 2.0 * PI).abs() < 1e-9);
    }

    #[test]
    fn majority_segment_sets_large_arc_flag() {
        let small = donut_segment(50.0, 50.0, 20.0, 40.0, 0.0, PI / 2.0);
        let large = donut_segment(50.0, 50.0, 20.0, 40.0, 0.0, 1.5 * PI);
        assert!(small.contains(" 0 1 "));
        assert!(large.contains(" 1 1 "));
    }

    #[test]
    fn label_sits_at_mid_ring() {
        // quarter segment starting at 12 o'clock: midpoint points northeast
        let (x, y) = segment_label_at(0.0, 0.0, 20.0, 40.0, 0.0, PI / 2.0);
        assert!(x > 0.0 && y < 0.0);
        let r = (x * x + y * y).sqrt();
        assert!((r - 30.0).abs() < 1e-9);
    }

    #[test]
    fn ticks_span_the_domain() {
        assert_eq!(axis_ticks(0.0, 50.0, 5), vec![0.0, 12.5, 25.0, 37.5, 50.0]);
        assert_eq!(axis_ticks(10.0, 10.0, 1), vec![10.0]);
    }

    #[test]
    fn scale_maps_linearly() {
        assert_eq!(scale(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
        assert_eq!(scale(0.0, 0.0, 10.0, 140.0, 0.0), 140.0);
        // degenerate domain collapses to the range start
        assert_eq!(scale(3.0, 7.0, 7.0, 0.0, 1.0), 0.0);
    }
}
