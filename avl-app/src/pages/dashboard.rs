//! National dashboard: the archipelago SVG map with toggleable risk-zone
//! and observation layers, the yearly richness trend and the at-risk
//! summary cards. Island outlines, halos and marker tooltips are injected
//! SVG strings; the hoverable markers themselves are native nodes so they
//! can carry mouse handlers.

use avl_analytics::chartgeom::{area_path, axis_ticks, polyline_path, scale};
use avl_analytics::colormap::risk_color;
use avl_analytics::projection::{ARCHIPELAGO, ARCHIPELAGO_VIEWBOX};
use avl_analytics::series::{
    light_intensity_pct, marker_opacity, marker_radius, monthly_observation_curve,
    peak_change_pct,
};
use avl_dataset::constants::{MONTHS_SHORT, RECENT_UPDATES};
use avl_dataset::geo::{Island, ObservationSite, RiskZone, METRO_MANILA_ZONE_COUNT};
use avl_dataset::series::{get_yearly_observation_vector, FIRST_YEAR, LAST_YEAR};
use avl_db::models::SiteObservationRow;
use avl_ui::components::YearSelect;
use avl_ui::state::AppState;
use avl_ui::theme::Theme;
use dioxus::prelude::*;

/// Which marker layer the national map shows.
#[derive(Debug, Clone, Copy, PartialEq)]
enum MapView {
    Risk,
    Historical,
}

/// Month-slot label: 0 = "All", 1-12 = short month names.
fn month_label(month: u32) -> &'static str {
    if month == 0 {
        "All"
    } else {
        MONTHS_SHORT[(month - 1) as usize % 12]
    }
}

/// Cut a marker label to `max` characters with an ellipsis.
fn truncate_label(name: &str, max: usize) -> String {
    if name.chars().count() > max {
        let cut: String = name.chars().take(max).collect();
        format!("{cut}…")
    } else {
        name.to_string()
    }
}

/// Static under-layers of the national map: marker gradients, the sea
/// grid, the 13 island outlines and the Metro Manila label box.
fn map_base_svg(light: bool, zones: &[RiskZone]) -> String {
    let island_fill = if light { "#b8c2d4" } else { "#28334a" };
    let island_stroke = if light { "#96a3b8" } else { "#1c2438" };
    let grid_stroke = if light {
        "rgba(0,0,0,0.04)"
    } else {
        "rgba(255,255,255,0.02)"
    };

    let mut s = String::from("<defs>");
    for level in ["Low", "Medium", "High"] {
        let color = risk_color(level);
        s.push_str(&format!(
            "<radialGradient id=\"mg-{level}\" cx=\"50%\" cy=\"50%\" r=\"50%\">\
             <stop offset=\"0%\" stop-color=\"{color}\" stop-opacity=\"0.7\"/>\
             <stop offset=\"100%\" stop-color=\"{color}\" stop-opacity=\"0\"/>\
             </radialGradient>"
        ));
    }
    s.push_str(
        "<radialGradient id=\"mg-obs\" cx=\"50%\" cy=\"50%\" r=\"50%\">\
         <stop offset=\"0%\" stop-color=\"#60a5fa\" stop-opacity=\"0.6\"/>\
         <stop offset=\"100%\" stop-color=\"#60a5fa\" stop-opacity=\"0\"/>\
         </radialGradient>",
    );
    s.push_str(&format!(
        "<pattern id=\"seaGrid\" width=\"20\" height=\"20\" patternUnits=\"userSpaceOnUse\">\
         <path d=\"M 20 0 L 0 0 0 20\" fill=\"none\" stroke=\"{grid_stroke}\" stroke-width=\"0.5\"/>\
         </pattern></defs>"
    ));
    s.push_str("<rect x=\"-20\" y=\"100\" width=\"500\" height=\"610\" fill=\"url(#seaGrid)\"/>");

    for island in Island::get_island_vector() {
        s.push_str(&format!(
            "<polygon points=\"{}\" fill=\"{island_fill}\" stroke=\"{island_stroke}\" stroke-width=\"0.8\" stroke-linejoin=\"round\"/>",
            ARCHIPELAGO.points_lonlat(&island.ring)
        ));
    }

    // Label box over the bounding rectangle of the Metro Manila cluster
    let dots: Vec<(f64, f64)> = zones
        .iter()
        .take(METRO_MANILA_ZONE_COUNT)
        .map(|z| ARCHIPELAGO.project(z.lon, z.lat))
        .collect();
    if !dots.is_empty() {
        let min_x = dots.iter().map(|d| d.0).fold(f64::INFINITY, f64::min);
        let max_x = dots.iter().map(|d| d.0).fold(f64::NEG_INFINITY, f64::max);
        let min_y = dots.iter().map(|d| d.1).fold(f64::INFINITY, f64::min);
        let max_y = dots.iter().map(|d| d.1).fold(f64::NEG_INFINITY, f64::max);
        let cx = (min_x + max_x) / 2.0;
        let cy = (min_y + max_y) / 2.0;
        s.push_str(&format!(
            "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"62\" height=\"13\" rx=\"2\" fill=\"rgba(0,0,0,0.5)\" stroke=\"rgba(255,255,255,0.25)\" stroke-width=\"0.5\"/>",
            cx - 30.0,
            cy - 22.0
        ));
        s.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" fill=\"rgba(255,255,255,0.9)\" font-size=\"6\" font-weight=\"600\">Metro Manila</text>",
            cx + 1.0,
            cy - 12.0
        ));
    }
    s
}

/// Soft radial halo under a hovered risk marker.
fn risk_halo_svg(x: f64, y: f64, risk: &str) -> String {
    format!("<circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"20\" fill=\"url(#mg-{risk})\"/>")
}

/// Popover for a hovered risk marker. Flips left of the marker near the
/// right edge and above it near the bottom edge.
fn risk_tooltip_svg(zone: &RiskZone, x: f64, y: f64) -> String {
    let (w, h) = (118.0, 40.0);
    let tx = if x > 320.0 { x - w - 6.0 } else { x + 11.0 };
    let ty = if y > 630.0 { y - h - 4.0 } else { y - 6.0 };
    let color = risk_color(&zone.risk);
    let name = truncate_label(&zone.name, 17);
    let mut s = format!(
        "<g style=\"pointer-events: none;\">\
         <rect x=\"{tx:.1}\" y=\"{ty:.1}\" width=\"{w}\" height=\"{h}\" rx=\"4\" fill=\"#141c2e\" stroke=\"#2a3550\" stroke-width=\"0.8\"/>\
         <rect x=\"{tx:.1}\" y=\"{ty:.1}\" width=\"3\" height=\"{h}\" rx=\"2\" fill=\"{color}\"/>"
    );
    s.push_str(&format!(
        "<text x=\"{:.1}\" y=\"{:.1}\" fill=\"white\" font-size=\"7.5\" font-weight=\"600\">{name}</text>",
        tx + 9.0,
        ty + 14.0
    ));
    s.push_str(&format!(
        "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"38\" height=\"11\" rx=\"2\" fill=\"{color}25\"/>",
        tx + 9.0,
        ty + 22.0
    ));
    s.push_str(&format!(
        "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" fill=\"{color}\" font-size=\"6.5\" font-weight=\"600\">{} Risk</text>",
        tx + 28.0,
        ty + 30.0,
        zone.risk
    ));
    s.push_str(&format!(
        "<text x=\"{:.1}\" y=\"{:.1}\" fill=\"#9ca3af\" font-size=\"6.5\">{}</text>",
        tx + 54.0,
        ty + 30.0,
        zone.detail
    ));
    s.push_str("</g>");
    s
}

/// Soft radial halo under a hovered observation marker.
fn obs_halo_svg(x: f64, y: f64, r: f64) -> String {
    format!(
        "<circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"{:.1}\" fill=\"url(#mg-obs)\"/>",
        r + 14.0
    )
}

/// Popover for a hovered observation marker: period badge, the four
/// category counts and the site total.
fn obs_tooltip_svg(
    name: &str,
    year: i32,
    month: u32,
    counts: [i32; 4],
    x: f64,
    y: f64,
) -> String {
    let (w, h) = (148.0, 80.0);
    let tx = if x > 300.0 { x - w - 8.0 } else { x + 12.0 };
    let ty = if y > 620.0 { y - h - 4.0 } else { y - 8.0 };
    let total: i32 = counts.iter().sum();
    let mut s = format!(
        "<g style=\"pointer-events: none;\">\
         <rect x=\"{tx:.1}\" y=\"{ty:.1}\" width=\"{w}\" height=\"{h}\" rx=\"4\" fill=\"#0f172a\" stroke=\"#334155\" stroke-width=\"0.8\"/>\
         <rect x=\"{tx:.1}\" y=\"{ty:.1}\" width=\"3\" height=\"{h}\" rx=\"2\" fill=\"#3b82f6\"/>"
    );
    s.push_str(&format!(
        "<text x=\"{:.1}\" y=\"{:.1}\" fill=\"white\" font-size=\"7\" font-weight=\"700\">{}</text>",
        tx + 9.0,
        ty + 13.0,
        truncate_label(name, 20)
    ));
    s.push_str(&format!(
        "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"60\" height=\"9\" rx=\"2\" fill=\"rgba(59,130,246,0.2)\"/>",
        tx + 9.0,
        ty + 17.0
    ));
    s.push_str(&format!(
        "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" fill=\"#93c5fd\" font-size=\"5.5\" font-weight=\"600\">{year} · {}</text>",
        tx + 39.0,
        ty + 24.0,
        month_label(month)
    ));
    s.push_str(&format!(
        "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"#1e293b\" stroke-width=\"0.8\"/>",
        tx + 5.0,
        ty + 30.0,
        tx + w - 5.0,
        ty + 30.0
    ));
    let rows = [
        ("Resident", counts[0], "#34d399"),
        ("Migratory", counts[1], "#f59e0b"),
        ("Light Tolerant", counts[2], "#60a5fa"),
        ("Light Sensitive", counts[3], "#f87171"),
    ];
    for (i, (label, value, color)) in rows.iter().enumerate() {
        let row_y = ty + 38.0 + i as f64 * 11.0;
        s.push_str(&format!(
            "<circle cx=\"{:.1}\" cy=\"{row_y:.1}\" r=\"2.5\" fill=\"{color}\"/>",
            tx + 11.0
        ));
        s.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" fill=\"#cbd5e1\" font-size=\"6\">{label}</text>",
            tx + 16.0,
            row_y + 3.0
        ));
        s.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" fill=\"{color}\" font-size=\"6.5\" font-weight=\"700\">{value}</text>",
            tx + w - 8.0,
            row_y + 3.0
        ));
    }
    s.push_str(&format!(
        "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"#1e293b\" stroke-width=\"0.8\"/>",
        tx + 5.0,
        ty + 72.0,
        tx + w - 5.0,
        ty + 72.0
    ));
    s.push_str(&format!(
        "<text x=\"{:.1}\" y=\"{:.1}\" fill=\"#94a3b8\" font-size=\"5.5\">Total unique species:</text>",
        tx + 9.0,
        ty + 78.0
    ));
    s.push_str(&format!(
        "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" fill=\"white\" font-size=\"6.5\" font-weight=\"700\">{total}</text>",
        tx + w - 8.0,
        ty + 78.0
    ));
    s.push_str("</g>");
    s
}

/// Area chart of one year's monthly observation curve.
fn richness_trend_svg(counts: &[i32], grid_color: &str) -> String {
    let (x0, x1, y0, y1) = (30.0, 414.0, 6.0, 118.0);
    let lo = counts.iter().copied().min().unwrap_or(0) as f64 - 10.0;
    let hi = counts.iter().copied().max().unwrap_or(0) as f64 + 10.0;
    let mut s = String::from(
        "<svg viewBox=\"0 0 420 150\" width=\"100%\" xmlns=\"http://www.w3.org/2000/svg\">\
         <defs><linearGradient id=\"birdGrad\" x1=\"0\" y1=\"0\" x2=\"0\" y2=\"1\">\
         <stop offset=\"5%\" stop-color=\"#3b82f6\" stop-opacity=\"0.35\"/>\
         <stop offset=\"95%\" stop-color=\"#3b82f6\" stop-opacity=\"0\"/>\
         </linearGradient></defs>",
    );
    for t in axis_ticks(lo, hi, 4) {
        let y = scale(t, lo, hi, y1, y0);
        s.push_str(&format!(
            "<line x1=\"{x0}\" y1=\"{y:.1}\" x2=\"{x1}\" y2=\"{y:.1}\" stroke=\"{grid_color}\" stroke-dasharray=\"3 3\"/>"
        ));
        s.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" font-size=\"10\" fill=\"#6b7280\">{:.0}</text>",
            x0 - 4.0,
            y + 3.5,
            t
        ));
    }
    let mut pts = Vec::with_capacity(counts.len());
    for (i, count) in counts.iter().enumerate() {
        let x = x0 + (x1 - x0) * i as f64 / (counts.len() - 1).max(1) as f64;
        pts.push((x, scale(*count as f64, lo, hi, y1, y0)));
        s.push_str(&format!(
            "<text x=\"{x:.1}\" y=\"134\" text-anchor=\"middle\" font-size=\"10\" fill=\"#6b7280\">{}</text>",
            MONTHS_SHORT[i % 12]
        ));
    }
    s.push_str(&format!(
        "<path d=\"{}\" fill=\"url(#birdGrad)\"/>",
        area_path(&pts, y1)
    ));
    s.push_str(&format!(
        "<path d=\"{}\" fill=\"none\" stroke=\"#3b82f6\" stroke-width=\"2\"/>",
        polyline_path(&pts)
    ));
    for (x, y) in &pts {
        s.push_str(&format!(
            "<circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"2.5\" fill=\"#3b82f6\"/>"
        ));
    }
    s.push_str("</svg>");
    s
}

/// The zoomable archipelago map with its marker layers and legend.
#[component]
fn ArchipelagoMap(
    light: bool,
    view: MapView,
    year: i32,
    month: u32,
    rows: Vec<SiteObservationRow>,
) -> Element {
    let mut zoom = use_signal(|| 1.0f64);
    let mut hovered_risk = use_signal(|| None::<usize>);
    let mut hovered_obs = use_signal(|| None::<usize>);

    let bg = if light { "#dde3ef" } else { "#111827" };
    let zones = RiskZone::get_risk_zone_vector();
    let sites = ObservationSite::get_site_vector();
    let base = map_base_svg(light, &zones);
    // Round away float drift from repeated ±0.2 steps
    let zoom_now = (zoom() * 100.0).round() / 100.0;
    let zoom_pct = (zoom_now * 100.0).round() as i32;

    rsx! {
        div {
            style: "position: relative; width: 100%; height: 100%; min-height: 480px; display: flex; flex-direction: column; border-radius: 8px; overflow: hidden; background: {bg};",

            // Zoom controls
            div {
                style: "position: absolute; top: 12px; left: 12px; z-index: 10; display: flex; flex-direction: column; gap: 4px;",
                button {
                    style: "width: 28px; height: 28px; display: flex; align-items: center; justify-content: center; border-radius: 4px; background: rgba(30,37,56,0.9); border: 1px solid #2a2f42; color: #d1d5db; cursor: pointer; font-size: 14px;",
                    onclick: move |_| zoom.set((zoom() + 0.2).min(2.4)),
                    "+"
                }
                button {
                    style: "width: 28px; height: 28px; display: flex; align-items: center; justify-content: center; border-radius: 4px; background: rgba(30,37,56,0.9); border: 1px solid #2a2f42; color: #d1d5db; cursor: pointer; font-size: 14px;",
                    onclick: move |_| zoom.set((zoom() - 0.2).max(0.6)),
                    "−"
                }
                span {
                    style: "text-align: center; font-size: 10px; color: #6b7280;",
                    "{zoom_pct}%"
                }
            }

            // Legend
            div {
                style: "position: absolute; top: 12px; right: 12px; z-index: 10; background: rgba(26,32,48,0.95); border: 1px solid #2a2f42; border-radius: 8px; padding: 10px 12px;",
                match view {
                    MapView::Risk => rsx! {
                        p {
                            style: "margin: 0 0 8px 0; font-size: 9px; font-weight: 700; letter-spacing: 0.08em; text-transform: uppercase; color: #6b7280;",
                            "Light Risk Zones"
                        }
                        for level in ["Low", "Medium", "High"] {
                            {
                                let dot = risk_color(level);
                                rsx! {
                                    div {
                                        style: "display: flex; align-items: center; gap: 8px; margin-bottom: 6px;",
                                        span { style: "width: 10px; height: 10px; border-radius: 50%; background: {dot};" }
                                        span { style: "font-size: 11px; color: #d1d5db;", "{level} Risk" }
                                    }
                                }
                            }
                        }
                    },
                    MapView::Historical => rsx! {
                        p {
                            style: "margin: 0 0 8px 0; font-size: 9px; font-weight: 700; letter-spacing: 0.08em; text-transform: uppercase; color: #6b7280;",
                            "Species Richness"
                        }
                        div {
                            style: "display: flex; align-items: center; gap: 4px; margin-bottom: 4px;",
                            span { style: "width: 10px; height: 10px; border-radius: 50%; background: rgba(30,58,138,0.6); border: 1px solid #60a5fa;" }
                            span { style: "font-size: 11px; color: #d1d5db;", "Low" }
                            span { style: "width: 14px; height: 14px; border-radius: 50%; background: rgba(59,130,246,0.6); border: 1px solid #93c5fd; margin-left: 4px;" }
                            span { style: "font-size: 11px; color: #d1d5db;", "High" }
                        }
                        p { style: "margin: 4px 0 0 0; font-size: 9px; color: #6b7280;", "Hover circle for details" }
                    },
                }
            }

            // Map surface
            div {
                style: "flex: 1; overflow: hidden; display: flex; align-items: center; justify-content: center; padding: 8px;",
                svg {
                    view_box: ARCHIPELAGO_VIEWBOX,
                    preserve_aspect_ratio: "xMidYMid meet",
                    style: "width: 100%; height: 100%; transform: scale({zoom_now}); transform-origin: center center; transition: transform 0.25s cubic-bezier(0.4,0,0.2,1);",

                    g { dangerous_inner_html: "{base}" }

                    if view == MapView::Risk {
                        for (i, zone) in zones.iter().enumerate() {
                            {
                                let (x, y) = ARCHIPELAGO.project(zone.lon, zone.lat);
                                let hov = hovered_risk() == Some(i);
                                let color = risk_color(&zone.risk);
                                let (outer_r, outer_w, inner_r) = if hov { (8.5, 2.0, 5.0) } else { (6.5, 1.5, 3.8) };
                                rsx! {
                                    g {
                                        if hov {
                                            g { dangerous_inner_html: risk_halo_svg(x, y, &zone.risk) }
                                        }
                                        circle {
                                            cx: "{x}",
                                            cy: "{y}",
                                            r: "{outer_r}",
                                            fill: "rgba(0,0,0,0.45)",
                                            stroke: "{color}",
                                            stroke_width: "{outer_w}",
                                            style: "transition: all 0.15s ease;",
                                        }
                                        circle {
                                            cx: "{x}",
                                            cy: "{y}",
                                            r: "{inner_r}",
                                            fill: "{color}",
                                            style: "transition: all 0.15s ease; cursor: pointer;",
                                            onmouseenter: move |_| hovered_risk.set(Some(i)),
                                            onmouseleave: move |_| hovered_risk.set(None),
                                        }
                                        if hov {
                                            g { dangerous_inner_html: risk_tooltip_svg(zone, x, y) }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    if view == MapView::Historical {
                        for (i, site) in sites.iter().enumerate() {
                            {
                                let (x, y) = ARCHIPELAGO.project(site.lon, site.lat);
                                let counts = match rows.get(i) {
                                    Some(c) => [c.resident, c.migratory, c.light_tolerant, c.light_sensitive],
                                    None => [site.resident, site.migratory, site.light_tolerant, site.light_sensitive],
                                };
                                let total: i32 = counts.iter().sum();
                                let r = marker_radius(total);
                                let op = marker_opacity(total);
                                let hov = hovered_obs() == Some(i);
                                let (ring_r, ring_w, ring_stroke) = if hov {
                                    (r + 4.0, 1.8, "#93c5fd")
                                } else {
                                    (r + 2.0, 1.0, "#60a5fa")
                                };
                                let dot_r = if hov { r + 1.0 } else { r };
                                let ring_fill = format!("rgba(96,165,250,{:.3})", op * 0.35);
                                let dot_fill = format!("rgba(59,130,246,{:.2})", op);
                                rsx! {
                                    g {
                                        if hov {
                                            g { dangerous_inner_html: obs_halo_svg(x, y, r) }
                                        }
                                        circle {
                                            cx: "{x}",
                                            cy: "{y}",
                                            r: "{ring_r}",
                                            fill: "{ring_fill}",
                                            stroke: "{ring_stroke}",
                                            stroke_width: "{ring_w}",
                                            style: "transition: all 0.15s ease;",
                                        }
                                        circle {
                                            cx: "{x}",
                                            cy: "{y}",
                                            r: "{dot_r}",
                                            fill: "{dot_fill}",
                                            style: "transition: all 0.15s ease; cursor: pointer;",
                                            onmouseenter: move |_| hovered_obs.set(Some(i)),
                                            onmouseleave: move |_| hovered_obs.set(None),
                                        }
                                        if hov {
                                            g { dangerous_inner_html: obs_tooltip_svg(&site.name, year, month, counts, x, y) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    let state = use_context::<AppState>();
    let light = (state.light_mode)();
    let theme = Theme::from_mode(light);

    let mut map_view = use_signal(|| MapView::Risk);
    let mut year = use_signal(|| LAST_YEAR);
    let mut month = use_signal(|| 0u32);
    let mut month_rows = use_signal(Vec::<SiteObservationRow>::new);

    // Refresh marker counts whenever the period changes
    use_effect(move || {
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };
        match db.query_month_counts(year(), month()) {
            Ok(rows) => month_rows.set(rows),
            Err(e) => log::error!("Observation counts query failed: {}", e),
        }
    });

    let card = if light {
        "background: #ffffff; border: 1px solid #e5e7eb; border-radius: 8px;"
    } else {
        "background: #1e2538; border: 1px solid #2a2f42; border-radius: 8px;"
    };
    let grid_color = if light { "#e5e7eb" } else { "#2a2f42" };
    let label_color = if light { "#6b7280" } else { "#9ca3af" };

    let year_now = year();
    let month_now = month();
    let month_name = month_label(month_now);
    let view_now = map_view();

    let params = get_yearly_observation_vector();
    let idx = (((year_now - FIRST_YEAR).max(0)) as usize).min(params.len() - 1);
    let curve = monthly_observation_curve(params[idx].base, params[idx].peak, params[idx].offset);
    let prev_idx = idx.saturating_sub(1);
    let prev_curve = monthly_observation_curve(
        params[prev_idx].base,
        params[prev_idx].peak,
        params[prev_idx].offset,
    );
    let max_count = curve.iter().copied().max().unwrap_or(0);
    let prev_max = prev_curve.iter().copied().max().unwrap_or(0);
    let pct_change = peak_change_pct(max_count as f64, prev_max as f64);
    let pct_up = max_count >= prev_max;
    let trend_svg = richness_trend_svg(&curve, grid_color);

    let zones = RiskZone::get_risk_zone_vector();
    let at_risk = zones.iter().filter(|z| z.risk != "Low").count();
    let light_pct = light_intensity_pct(year_now);

    // Metro Manila category totals for the selected period
    let rows_now = month_rows();
    let mut mm_totals = [0i32; 4];
    for row in rows_now.iter().take(METRO_MANILA_ZONE_COUNT) {
        mm_totals[0] += row.resident;
        mm_totals[1] += row.migratory;
        mm_totals[2] += row.light_tolerant;
        mm_totals[3] += row.light_sensitive;
    }
    let mm_grand: i32 = mm_totals.iter().sum();

    let toggle_base = "display: flex; align-items: center; gap: 6px; padding: 6px 12px; border-radius: 6px; font-size: 12px; font-weight: 600; cursor: pointer;";
    let risk_active = view_now == MapView::Risk;
    let hist_active = view_now == MapView::Historical;
    let risk_btn = if risk_active {
        format!("{toggle_base} background: rgba(249,115,22,0.2); color: #fdba74; border: 1px solid rgba(249,115,22,0.4);")
    } else {
        format!("{toggle_base} background: transparent; color: #9ca3af; border: 1px solid transparent;")
    };
    let hist_btn = if hist_active {
        format!("{toggle_base} background: rgba(59,130,246,0.2); color: #93c5fd; border: 1px solid rgba(59,130,246,0.4);")
    } else {
        format!("{toggle_base} background: transparent; color: #9ca3af; border: 1px solid transparent;")
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; min-height: 100%; background: {theme.page_bg}; color: {theme.text};",

            // Dataset banner
            div {
                style: "display: flex; align-items: center; gap: 12px; background: #1a3a4a; border-bottom: 1px solid rgba(14,116,144,0.4); padding: 10px 24px;",
                span { style: "width: 8px; height: 8px; border-radius: 2px; background: #22d3ee;" }
                p {
                    style: "margin: 0; font-size: 13px; color: #67e8f9;",
                    span { style: "font-weight: 600;", "Dataset Period: 2014 – 2024 | Monitoring Status: 2014 – 2024" }
                    span { style: "color: rgba(34,211,238,0.7);", " — Displaying year: " }
                    span { style: "font-weight: 700; color: #a5f3fc;", "{year_now}" }
                }
            }

            div {
                style: "flex: 1; display: grid; grid-template-columns: 3fr 2fr; gap: 0; min-height: 0;",

                // Map column
                div {
                    style: "padding: 16px; display: flex; flex-direction: column; gap: 12px; min-height: 540px;",

                    div {
                        style: "display: flex; align-items: center; gap: 8px; flex-wrap: wrap;",
                        div {
                            style: "display: flex; align-items: center; gap: 4px; border-radius: 8px; padding: 4px; background: #0f172a; border: 1px solid #2a2f42;",
                            button {
                                style: "{risk_btn}",
                                onclick: move |_| map_view.set(MapView::Risk),
                                "Risk Zones"
                            }
                            button {
                                style: "{hist_btn}",
                                onclick: move |_| map_view.set(MapView::Historical),
                                "Historical Observation"
                            }
                        }
                        if hist_active {
                            div {
                                style: "display: flex; align-items: center; gap: 8px; flex-wrap: wrap;",
                                YearSelect {
                                    value: year_now,
                                    on_change: move |y| year.set(y),
                                    label: "Year:".to_string(),
                                }
                                label {
                                    style: "display: inline-flex; align-items: center; gap: 6px; font-size: 12px; color: {theme.text_muted};",
                                    "Month:"
                                    select {
                                        style: "padding: 4px 8px; border-radius: 6px; font-size: 12px; font-weight: 700; border: 1px solid {theme.input_border}; background: {theme.input_bg}; color: {theme.text};",
                                        onchange: move |evt| {
                                            if let Ok(m) = evt.value().parse::<u32>() {
                                                month.set(m);
                                            }
                                        },
                                        option { value: "0", selected: month_now == 0, "All" }
                                        for (i, name) in MONTHS_SHORT.iter().enumerate() {
                                            option {
                                                value: "{i + 1}",
                                                selected: month_now == (i + 1) as u32,
                                                "{name}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    div {
                        style: "flex: 1; min-height: 0;",
                        ArchipelagoMap {
                            light,
                            view: view_now,
                            year: year_now,
                            month: month_now,
                            rows: rows_now.clone(),
                        }
                    }
                }

                // Stats column
                div {
                    style: "display: flex; flex-direction: column; gap: 12px; padding: 16px; overflow-y: auto;",

                    div {
                        style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px;",
                        div {
                            style: "{card} padding: 16px;",
                            p {
                                style: "margin: 0 0 8px 0; font-size: 11px; font-weight: 600; text-transform: uppercase; letter-spacing: 0.1em; color: {label_color};",
                                "At Risk Zones"
                            }
                            div {
                                style: "display: flex; align-items: flex-end; gap: 8px; margin-bottom: 4px;",
                                span { style: "font-size: 34px; font-weight: 700; line-height: 1; color: {theme.heading};", "{at_risk}" }
                                span { style: "font-size: 11px; font-weight: 600; color: #f87171;", "↓ -5%" }
                            }
                            p {
                                style: "margin: 0; font-size: 11px; line-height: 1.6; color: {theme.text_muted};",
                                "Sites with "
                                span { style: "font-weight: 600; color: #facc15;", "Medium" }
                                " or "
                                span { style: "font-weight: 600; color: #f87171;", "High" }
                                " ALAN (>30 nW)."
                            }
                        }
                        div {
                            style: "{card} padding: 16px;",
                            p {
                                style: "margin: 0 0 8px 0; font-size: 11px; font-weight: 600; text-transform: uppercase; letter-spacing: 0.1em; color: {label_color};",
                                "Light Intensity"
                            }
                            div {
                                style: "display: flex; align-items: flex-end; gap: 8px; margin-bottom: 4px;",
                                span { style: "font-size: 34px; font-weight: 700; line-height: 1; color: {theme.heading};", "{light_pct}%" }
                                if year_now == 2020 {
                                    span { style: "font-size: 11px; font-weight: 600; color: #4ade80;", "↓ -4%" }
                                } else {
                                    span { style: "font-size: 11px; font-weight: 600; color: #fb923c;", "↑ +8%" }
                                }
                            }
                            p {
                                style: "margin: 0; font-size: 11px; line-height: 1.6; color: {theme.text_muted};",
                                "ALAN index for "
                                span { style: "font-weight: 600; color: {theme.heading};", "{year_now}" }
                                "."
                                if year_now == 2020 {
                                    " ↓ COVID effect."
                                }
                            }
                        }
                    }

                    if hist_active {
                        div {
                            style: "{card} padding: 16px;",
                            p {
                                style: "margin: 0 0 12px 0; font-size: 11px; font-weight: 600; text-transform: uppercase; letter-spacing: 0.1em; color: {label_color};",
                                "{year_now} · {month_name} — Metro Manila Summary"
                            }
                            div {
                                style: "display: flex; flex-direction: column; gap: 10px;",
                                for (label, value, bar_color, text_color) in [
                                    ("Resident", mm_totals[0], "#10b981", "#34d399"),
                                    ("Migratory", mm_totals[1], "#f59e0b", "#fbbf24"),
                                    ("Light Tolerant", mm_totals[2], "#3b82f6", "#60a5fa"),
                                    ("Light Sensitive", mm_totals[3], "#ef4444", "#f87171"),
                                ] {
                                    {
                                        let pct = if mm_grand > 0 {
                                            (value as f64 / mm_grand as f64 * 100.0).round() as i32
                                        } else {
                                            0
                                        };
                                        let track = if light { "#e5e7eb" } else { "#2a2f42" };
                                        rsx! {
                                            div {
                                                div {
                                                    style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 4px;",
                                                    span { style: "font-size: 11px; color: {theme.text_muted};", "{label}" }
                                                    span { style: "font-size: 11px; font-weight: 700; color: {text_color};", "{value} spp." }
                                                }
                                                div {
                                                    style: "height: 6px; border-radius: 9999px; background: {track};",
                                                    div { style: "height: 6px; border-radius: 9999px; background: {bar_color}; width: {pct}%; transition: width 0.4s ease;" }
                                                }
                                            }
                                        }
                                    }
                                }
                                p {
                                    style: "margin: 0; padding-top: 6px; border-top: 1px solid {grid_color}; font-size: 11px; color: {theme.text_muted};",
                                    "Total unique sightings (Metro Manila, 6 sites):"
                                    span { style: "margin-left: 4px; font-weight: 700; color: {theme.heading};", "{mm_grand}" }
                                }
                            }
                        }
                    }

                    // Trend card
                    div {
                        style: "{card} padding: 16px;",
                        div {
                            style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 4px;",
                            p {
                                style: "margin: 0; font-size: 11px; font-weight: 600; text-transform: uppercase; letter-spacing: 0.1em; color: {label_color};",
                                "Bird Richness Trend"
                            }
                            span { style: "font-size: 11px; color: {theme.text_muted};", "2014 – 2024" }
                        }
                        div {
                            style: "display: flex; align-items: center; gap: 8px; margin: 8px 0 12px 0;",
                            span { style: "font-size: 11px; color: {theme.text_muted};", "Year:" }
                            input {
                                r#type: "range",
                                min: "2014",
                                max: "2024",
                                value: "{year_now}",
                                style: "flex: 1; height: 4px; accent-color: #3b82f6; cursor: pointer;",
                                oninput: move |evt| {
                                    if let Ok(y) = evt.value().parse::<i32>() {
                                        year.set(y);
                                    }
                                },
                            }
                            {
                                let chip = if light {
                                    "background: #dbeafe; color: #1d4ed8;"
                                } else {
                                    "background: rgba(59,130,246,0.2); color: #93c5fd;"
                                };
                                rsx! {
                                    span { style: "flex-shrink: 0; padding: 2px 8px; border-radius: 4px; font-size: 11px; font-weight: 700; {chip}", "{year_now}" }
                                }
                            }
                        }
                        div {
                            style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 8px;",
                            span {
                                style: "font-size: 11px; color: {theme.text_muted};",
                                "Peak: "
                                span { style: "font-weight: 600; color: {theme.heading};", "{max_count} species" }
                            }
                            if pct_up {
                                span { style: "font-size: 11px; font-weight: 600; color: #4ade80;", "↑ +{pct_change}% vs prev year" }
                            } else {
                                span { style: "font-size: 11px; font-weight: 600; color: #f87171;", "↓ {pct_change}% vs prev year" }
                            }
                        }
                        div { dangerous_inner_html: "{trend_svg}" }
                        if year_now == 2020 {
                            p {
                                style: "margin: 6px 0 0 0; font-size: 11px; font-style: italic; color: rgba(34,211,238,0.8);",
                                "↑ 2020 spike attributed to COVID-19 lockdowns reducing light emission."
                            }
                        }
                        if year_now == 2017 {
                            p {
                                style: "margin: 6px 0 0 0; font-size: 11px; font-style: italic; color: rgba(74,222,128,0.8);",
                                "↑ 2017 was the highest richness year prior to 2020."
                            }
                        }
                    }

                    // Recent updates
                    div {
                        style: "{card} padding: 16px;",
                        p {
                            style: "margin: 0 0 12px 0; font-size: 11px; font-weight: 600; text-transform: uppercase; letter-spacing: 0.1em; color: {label_color};",
                            "Recent Updates"
                        }
                        div {
                            style: "display: flex; flex-direction: column; gap: 8px;",
                            for item in RECENT_UPDATES.iter() {
                                {
                                    let (icon, icon_color, icon_bg) = match item.tone {
                                        "alert" => ("⚠", "#f87171", "rgba(239,68,68,0.1)"),
                                        "success" => ("✓", "#4ade80", "rgba(34,197,94,0.1)"),
                                        _ => ("ℹ", "#60a5fa", "rgba(59,130,246,0.1)"),
                                    };
                                    let row_border = if light { "#f3f4f6" } else { "#2a2f42" };
                                    rsx! {
                                        div {
                                            style: "display: flex; align-items: center; gap: 12px; padding: 12px; border-radius: 8px; border: 1px solid {row_border}; cursor: pointer;",
                                            div {
                                                style: "width: 24px; height: 24px; border-radius: 50%; display: flex; align-items: center; justify-content: center; flex-shrink: 0; font-size: 12px; color: {icon_color}; background: {icon_bg};",
                                                "{icon}"
                                            }
                                            div {
                                                style: "min-width: 0;",
                                                p { style: "margin: 0; font-size: 12px; font-weight: 600; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; color: {theme.heading};", "{item.title}" }
                                                p { style: "margin: 0; font-size: 11px; color: {theme.text_muted};", "{item.time}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_layer_draws_every_island() {
        let zones = RiskZone::get_risk_zone_vector();
        let svg = map_base_svg(false, &zones);
        assert_eq!(svg.matches("<polygon").count(), 13);
        assert!(svg.contains("Metro Manila"));
        assert!(svg.contains("url(#seaGrid)"));
    }

    #[test]
    fn risk_tooltip_flips_near_the_right_edge() {
        let zone = RiskZone {
            name: "Tacloban KBA".to_string(),
            lat: 11.2,
            lon: 125.0,
            risk: "High".to_string(),
            detail: "48.3 nW/cm²/sr".to_string(),
        };
        // x=377.2 is past the flip threshold so the box sits left of the marker
        let (x, y) = ARCHIPELAGO.project(zone.lon, zone.lat);
        assert!(x > 320.0);
        let svg = risk_tooltip_svg(&zone, x, y);
        assert!(svg.contains(&format!("x=\"{:.1}\"", x - 118.0 - 6.0)));
        assert!(svg.contains("High Risk"));
    }

    #[test]
    fn long_marker_labels_are_truncated() {
        assert_eq!(truncate_label("Las Piñas-Parañaque", 17), "Las Piñas-Parañaq…");
        assert_eq!(truncate_label("NAPWC", 17), "NAPWC");
    }

    #[test]
    fn obs_tooltip_lists_categories_and_total() {
        let svg = obs_tooltip_svg("La Mesa Watershed", 2024, 0, [47, 31, 20, 28], 190.0, 297.0);
        assert!(svg.contains("La Mesa Watershed"));
        assert!(svg.contains("2024 · All"));
        assert!(svg.contains(">126</text>"));
        assert_eq!(svg.matches("<circle").count(), 4);
    }

    #[test]
    fn month_labels_cover_all_slots() {
        assert_eq!(month_label(0), "All");
        assert_eq!(month_label(1), "Jan");
        assert_eq!(month_label(12), "Dec");
    }

    #[test]
    fn trend_chart_scales_to_its_own_range() {
        let curve = monthly_observation_curve(95.0, 130.0, 2.0);
        let svg = richness_trend_svg(&curve, "#2a2f42");
        // one dot per month on top of the area fill
        assert_eq!(svg.matches("r=\"2.5\"").count(), 12);
        assert!(svg.contains("birdGrad"));
    }
}
