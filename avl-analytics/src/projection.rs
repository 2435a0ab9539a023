//! Affine projections from geographic coordinates to the SVG canvases.
//!
//! Both maps use the same plate-carree style transform, just with different
//! anchors and scales. There is deliberately no inverse: nothing maps pixels
//! back to coordinates.

/// Affine transform from (lon, lat) to SVG canvas coordinates:
/// `x = (lon - lon_min) * lon_scale`, `y = (lat_max - lat) * lat_scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapProjection {
    pub lon_min: f64,
    pub lat_max: f64,
    pub lon_scale: f64,
    pub lat_scale: f64,
}

/// Projection for the national archipelago map.
pub const ARCHIPELAGO: MapProjection = MapProjection {
    lon_min: 116.8,
    lat_max: 21.8,
    lon_scale: 46.0,
    lat_scale: 42.0,
};

/// viewBox of the archipelago SVG surface.
pub const ARCHIPELAGO_VIEWBOX: &str = "-10 115 460 575";

/// Projection for the NCR city map, tightly zoomed on Metro Manila:
/// lon 120.82..121.22 and lat 14.30..14.86 onto a 560x700 canvas
/// (scales 560/0.40 and 700/0.56).
pub const NCR: MapProjection = MapProjection {
    lon_min: 120.82,
    lat_max: 14.86,
    lon_scale: 1400.0,
    lat_scale: 1250.0,
};

/// Width of the NCR canvas in SVG units.
pub const NCR_WIDTH: f64 = 560.0;

/// Height of the NCR canvas in SVG units.
pub const NCR_HEIGHT: f64 = 700.0;

impl MapProjection {
    /// Project (lon, lat) to canvas coordinates.
    pub fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        (
            (lon - self.lon_min) * self.lon_scale,
            (self.lat_max - lat) * self.lat_scale,
        )
    }

    /// Project and format as an `"x,y"` pair with one-decimal precision,
    /// ready for SVG point attributes.
    pub fn point(&self, lon: f64, lat: f64) -> String {
        let (x, y) = self.project(lon, lat);
        format!("{:.1},{:.1}", x, y)
    }

    /// Build an SVG `points` attribute from a ring of (lon, lat) vertices.
    pub fn points_lonlat(&self, ring: &[[f64; 2]]) -> String {
        ring.iter()
            .map(|v| self.point(v[0], v[1]))
            .collect::<Vec<String>>()
            .join(" ")
    }

    /// Build an SVG `points` attribute from a ring of (lat, lon) vertices,
    /// the order used by the city polygon fixtures.
    pub fn points_latlon(&self, ring: &[[f64; 2]]) -> String {
        ring.iter()
            .map(|v| self.point(v[1], v[0]))
            .collect::<Vec<String>>()
            .join(" ")
    }
}

/// Whether a projected point lands on the NCR canvas. Context labels
/// outside this box are skipped instead of clipped mid-glyph.
pub fn within_ncr_canvas(x: f64, y: f64) -> bool {
    (0.0..=NCR_WIDTH).contains(&x) && (0.0..=NCR_HEIGHT).contains(&y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archipelago_projects_manila() {
        let (x, y) = ARCHIPELAGO.project(120.98, 14.60);
        assert!((x - 192.28).abs() < 1e-9);
        assert!((y - 302.4).abs() < 1e-9);
    }

    #[test]
    fn ncr_bounds_map_to_canvas_corners() {
        assert_eq!(NCR.point(120.82, 14.86), "0.0,0.0");
        assert_eq!(NCR.point(121.22, 14.30), "560.0,700.0");
    }

    #[test]
    fn ncr_projects_la_mesa() {
        // La Mesa Watershed sits at (121.12 E, 14.72 N)
        assert_eq!(NCR.point(121.12, 14.72), "420.0,175.0");
    }

    #[test]
    fn points_attribute_joins_vertices() {
        let ring = [[120.82, 14.86], [121.22, 14.86], [121.22, 14.30]];
        assert_eq!(
            NCR.points_lonlat(&ring),
            "0.0,0.0 560.0,0.0 560.0,700.0"
        );
    }

    #[test]
    fn latlon_rings_swap_vertex_order() {
        let ring = [[14.86, 120.82]];
        assert_eq!(NCR.points_latlon(&ring), "0.0,0.0");
    }

    #[test]
    fn canvas_bounds_filter() {
        assert!(within_ncr_canvas(0.0, 0.0));
        assert!(within_ncr_canvas(560.0, 700.0));
        assert!(!within_ncr_canvas(-0.1, 10.0));
        assert!(!within_ncr_canvas(10.0, 700.1));
    }
}
