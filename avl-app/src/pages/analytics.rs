//! NCR analytics page: the zoomed Metro Manila city map with land-cover
//! and richness-heatmap modes, SHAP rankings, the city explainer panel and
//! the prediction sandbox. Water, graticule and the outlined city labels
//! are injected SVG strings; the city polygons are native nodes carrying
//! hover and click handlers.

use avl_analytics::chartgeom::scale;
use avl_analytics::colormap::{richness_color, LEGEND_STOPS, LEGEND_TICKS};
use avl_analytics::prediction::{predict_richness, PredictionInput, PredictionResult};
use avl_analytics::projection::{within_ncr_canvas, NCR, NCR_HEIGHT, NCR_WIDTH};
use avl_analytics::richness::city_richness;
use avl_dataset::cities::CityRecord;
use avl_dataset::constants::{land_color, GLOBAL_SHAP, LAND_COLORS, LAND_LEGEND_TYPES, MONTHS_LONG};
use avl_ui::js_bridge::sleep_ms;
use avl_ui::state::AppState;
use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

/// Which fill the city polygons use.
#[derive(Debug, Clone, Copy, PartialEq)]
enum MapMode {
    LandCover,
    Richness,
}

/// Bar colors for the per-city SHAP breakdown, in ranking order.
const SHAP_BAR_COLORS: [&str; 5] = ["#22c55e", "#3b82f6", "#f59e0b", "#8b5cf6", "#06b6d4"];

/// Surrounding place labels: (label, lat, lon). Labels that project
/// outside the canvas are skipped.
const CONTEXT_LABELS: [(&str, f64, f64); 5] = [
    ("Manila Bay", 14.60, 120.84),
    ("Laguna de Bay", 14.45, 121.18),
    ("Bulacan", 14.84, 120.97),
    ("Rizal / Antipolo", 14.62, 121.20),
    ("Cavite", 14.36, 120.90),
];

fn cover_index(name: &str) -> Option<usize> {
    LAND_COLORS.iter().position(|(n, _)| *n == name)
}

/// City label size by name length, so long names stay inside their polygon.
fn label_font_size(name: &str) -> f64 {
    let n = name.chars().count();
    if n > 9 {
        7.5
    } else if n > 6 {
        9.0
    } else {
        10.0
    }
}

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;")
}

/// Static under-layers of the NCR map: graticule, Manila Bay and Laguna
/// de Bay with a diagonal-hatch overlay, and the surrounding place labels.
fn ncr_base_svg() -> String {
    let mut s = String::from(
        "<defs><pattern id=\"bay-diag\" x=\"0\" y=\"0\" width=\"10\" height=\"10\" patternUnits=\"userSpaceOnUse\">\
         <line x1=\"0\" y1=\"10\" x2=\"10\" y2=\"0\" stroke=\"#7ab8d4\" stroke-width=\"1\" opacity=\"0.5\"/>\
         </pattern></defs>",
    );
    for lon in [121.0, 121.1, 121.2] {
        let (x, _) = NCR.project(lon, NCR.lat_max);
        s.push_str(&format!(
            "<line x1=\"{x:.1}\" y1=\"0\" x2=\"{x:.1}\" y2=\"{NCR_HEIGHT}\" stroke=\"rgba(0,0,0,0.07)\" stroke-width=\"0.7\" stroke-dasharray=\"4 4\"/>"
        ));
    }
    for lat in [14.4, 14.5, 14.6, 14.7, 14.8] {
        let (_, y) = NCR.project(NCR.lon_min, lat);
        s.push_str(&format!(
            "<line x1=\"0\" y1=\"{y:.1}\" x2=\"{NCR_WIDTH}\" y2=\"{y:.1}\" stroke=\"rgba(0,0,0,0.07)\" stroke-width=\"0.7\" stroke-dasharray=\"4 4\"/>"
        ));
    }

    // Manila Bay follows the west coast; Laguna de Bay cuts the southeast corner
    let bay = format!(
        "0,0 {} {} {} {} {} {} {} {} {} 0,{NCR_HEIGHT}",
        NCR.point(120.90, 14.82),
        NCR.point(120.91, 14.70),
        NCR.point(120.93, 14.67),
        NCR.point(120.96, 14.62),
        NCR.point(120.97, 14.55),
        NCR.point(120.97, 14.52),
        NCR.point(120.99, 14.45),
        NCR.point(120.96, 14.43),
        NCR.point(120.96, 14.38),
    );
    let (_, lake_top_y) = NCR.project(121.22, 14.57);
    let lake = format!(
        "{} {NCR_WIDTH},{lake_top_y:.1} {NCR_WIDTH},{NCR_HEIGHT} {}",
        NCR.point(121.13, 14.57),
        NCR.point(121.13, 14.38),
    );
    for water in [&bay, &lake] {
        s.push_str(&format!("<polygon points=\"{water}\" fill=\"#c8dce8\"/>"));
        s.push_str(&format!(
            "<polygon points=\"{water}\" fill=\"url(#bay-diag)\"/>"
        ));
    }

    for (label, lat, lon) in CONTEXT_LABELS {
        let (x, y) = NCR.project(lon, lat);
        if !within_ncr_canvas(x, y) {
            continue;
        }
        s.push_str(&format!(
            "<text x=\"{x:.1}\" y=\"{y:.1}\" text-anchor=\"middle\" fill=\"rgba(80,90,100,0.55)\" font-size=\"11\" font-style=\"italic\">{label}</text>"
        ));
    }
    s
}

/// Outlined name label for every city, stroked with the opposite tone so
/// it reads against any polygon fill. Filtered-out cities fade with their
/// polygon.
fn city_labels_svg(
    cities: &[CityRecord],
    light: bool,
    hovered: Option<usize>,
    selected: Option<usize>,
    covers: &[bool; 10],
) -> String {
    let mut s = String::new();
    for (i, city) in cities.iter().enumerate() {
        let (lx, ly) = NCR.project(city.label_at[1], city.label_at[0]);
        let lifted = selected == Some(i) || hovered == Some(i);
        let (fill, stroke) = if light || lifted {
            ("#ffffff", "rgba(0,0,0,0.75)")
        } else {
            ("rgba(0,0,0,0.85)", "rgba(255,255,255,0.75)")
        };
        let stroke_w = if lifted { 2.2 } else { 2.6 };
        let weight = if selected == Some(i) { 700 } else { 600 };
        let opacity = if cover_index(&city.dominant_land_cover)
            .map(|ix| !covers[ix])
            .unwrap_or(false)
        {
            0.22
        } else {
            1.0
        };
        s.push_str(&format!(
            "<text x=\"{lx:.1}\" y=\"{ly:.1}\" text-anchor=\"middle\" fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"{stroke_w}\" paint-order=\"stroke\" opacity=\"{opacity}\" font-size=\"{}\" font-weight=\"{weight}\">{}</text>",
            label_font_size(&city.name),
            xml_escape(&city.name)
        ));
    }
    s
}

/// Popover for a hovered city, anchored at its label point and flipped
/// left of the anchor near the east edge.
fn ncr_tooltip_svg(city: &CityRecord, richness: i32, show_richness: bool, light: bool) -> String {
    let w = 150.0;
    let h = if show_richness { 60.0 } else { 47.0 };
    let (lx, ly) = NCR.project(city.label_at[1], city.label_at[0]);
    let tx = if lx > 380.0 { lx - w - 12.0 } else { lx + 12.0 };
    let ty = (ly - h - 6.0).max(6.0);
    let (bg, border, title, muted) = if light {
        ("#ffffff", "#d1d5db", "#111827", "#374151")
    } else {
        ("#0d1117", "#2a3550", "#ffffff", "#9ca3af")
    };
    let mut s = format!(
        "<rect x=\"{tx:.1}\" y=\"{ty:.1}\" width=\"{w}\" height=\"{h}\" rx=\"6\" fill=\"{bg}\" stroke=\"{border}\"/>"
    );
    s.push_str(&format!(
        "<text x=\"{:.1}\" y=\"{:.1}\" fill=\"{title}\" font-size=\"9\" font-weight=\"700\">{}</text>",
        tx + 9.0,
        ty + 13.0,
        xml_escape(&city.name)
    ));
    s.push_str(&format!(
        "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"7\" height=\"7\" rx=\"1\" fill=\"{}\"/>",
        tx + 9.0,
        ty + 19.0,
        land_color(&city.dominant_land_cover)
    ));
    s.push_str(&format!(
        "<text x=\"{:.1}\" y=\"{:.1}\" fill=\"{muted}\" font-size=\"8\">{}</text>",
        tx + 20.0,
        ty + 25.5,
        xml_escape(&city.dominant_land_cover)
    ));
    if show_richness {
        s.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" fill=\"#22d3ee\" font-size=\"8\">{richness} predicted species</text>",
            tx + 9.0,
            ty + 38.0
        ));
    }
    s.push_str(&format!(
        "<text x=\"{:.1}\" y=\"{:.1}\" fill=\"#06b6d4\" font-size=\"7\">Click to explore →</text>",
        tx + 9.0,
        ty + h - 8.0
    ));
    s
}

/// Vertical bar chart of five SHAP weights against a fixed 0..0.6 axis.
fn shap_chart_svg(rows: &[(String, f64)]) -> String {
    let (x0, x1, y0, y1) = (48.0, 544.0, 14.0, 182.0);
    let mut s = String::from(
        "<svg viewBox=\"0 0 560 240\" width=\"100%\" xmlns=\"http://www.w3.org/2000/svg\">",
    );
    for i in 0..=6 {
        let t = i as f64 * 0.1;
        let y = scale(t, 0.0, 0.6, y1, y0);
        s.push_str(&format!(
            "<line x1=\"{x0}\" y1=\"{y:.1}\" x2=\"{x1}\" y2=\"{y:.1}\" stroke=\"#1e2535\" stroke-dasharray=\"3 3\"/>"
        ));
        s.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" font-size=\"10\" fill=\"#6b7280\">{t:.1}</text>",
            x0 - 6.0,
            y + 3.5
        ));
    }
    s.push_str(
        "<text transform=\"rotate(-90 12 98)\" x=\"12\" y=\"98\" text-anchor=\"middle\" font-size=\"10\" fill=\"#6b7280\">(mean |SHAP| value)</text>",
    );
    let slot = (x1 - x0) / rows.len().max(1) as f64;
    for (i, (feature, value)) in rows.iter().enumerate() {
        let bw = slot.min(60.0);
        let bx = x0 + slot * i as f64 + (slot - bw) / 2.0;
        let bh = value / 0.6 * (y1 - y0);
        let by = y1 - bh;
        s.push_str(&format!(
            "<rect x=\"{bx:.1}\" y=\"{by:.1}\" width=\"{bw:.1}\" height=\"{bh:.1}\" rx=\"3\" fill=\"#22c55e\"/>"
        ));
        let cx = x0 + slot * i as f64 + slot / 2.0;
        s.push_str(&format!(
            "<text x=\"{cx:.1}\" y=\"202\" text-anchor=\"end\" transform=\"rotate(-10 {cx:.1} 202)\" font-size=\"11\" fill=\"#9ca3af\">{feature}</text>"
        ));
    }
    s.push_str(
        "<rect x=\"230\" y=\"224\" width=\"10\" height=\"10\" fill=\"#22c55e\"/>\
         <text x=\"246\" y=\"233\" font-size=\"11\" fill=\"#9ca3af\">Feature Importance</text>",
    );
    s.push_str("</svg>");
    s
}

/// Rounded filter pill with an optional color dot.
#[component]
fn Pill(
    label: String,
    active: bool,
    light: bool,
    #[props(default = String::new())] dot: String,
    on_click: EventHandler<MouseEvent>,
) -> Element {
    let style = if active {
        if light {
            "background: #2563eb; color: #ffffff; border: 1px solid transparent;"
        } else {
            "background: #161b22; color: #9ca3af; border: 1px solid transparent;"
        }
    } else if light {
        "background: transparent; color: #374151; border: 1px solid #d1d5db;"
    } else {
        "background: transparent; color: #9ca3af; border: 1px solid #2a2f42;"
    };
    rsx! {
        button {
            style: "display: inline-flex; align-items: center; gap: 6px; padding: 4px 12px; border-radius: 9999px; font-size: 12px; cursor: pointer; white-space: nowrap; flex-shrink: 0; {style}",
            onclick: move |evt| on_click.call(evt),
            if !dot.is_empty() {
                span { style: "width: 8px; height: 8px; border-radius: 50%; flex-shrink: 0; background: {dot};" }
            }
            "{label}"
        }
    }
}

/// Labeled numeric field for the prediction form.
#[component]
fn NumInput(
    label: String,
    value: f64,
    min: f64,
    max: f64,
    step: f64,
    light: bool,
    on_change: EventHandler<f64>,
) -> Element {
    let field = if light {
        "background: #ffffff; border: 1px solid #d1d5db; color: #111827;"
    } else {
        "background: #0d1117; border: 1px solid #2a2f42; color: #e5e7eb;"
    };
    let label_color = if light { "#374151" } else { "#9ca3af" };
    rsx! {
        div {
            label {
                style: "display: block; font-size: 12px; font-weight: 600; margin-bottom: 4px; color: {label_color};",
                "{label}"
            }
            input {
                r#type: "number",
                min: "{min}",
                max: "{max}",
                step: "{step}",
                value: "{value}",
                style: "width: 100%; box-sizing: border-box; border-radius: 4px; padding: 6px 8px; font-size: 13px; font-weight: 600; outline: none; {field}",
                oninput: move |evt| {
                    if let Ok(v) = evt.value().parse::<f64>() {
                        on_change.call(v);
                    }
                },
            }
        }
    }
}

/// Search box plus the selected-city breakdown: land cover, filtered
/// richness, species chips and the per-city SHAP bars.
#[component]
fn CitySearchPanel(
    light: bool,
    cities: Vec<CityRecord>,
    richness: Vec<i32>,
    mut search_text: Signal<String>,
    found: Option<usize>,
    searched: bool,
    mut expand_species: Signal<bool>,
    on_search: EventHandler<()>,
) -> Element {
    let text_primary = if light { "#111827" } else { "#ffffff" };
    let text_secondary = if light { "#374151" } else { "#9ca3af" };
    let section_border = if light { "#e5e7eb" } else { "#1e2535" };
    let input_style = if light {
        "background: #ffffff; border: 1px solid #d1d5db; color: #111827;"
    } else {
        "background: #161b22; border: 1px solid #2a2f42; color: #e5e7eb;"
    };
    let track = if light { "#e5e7eb" } else { "#1e2535" };
    let expand_now = expand_species();

    rsx! {
        div {
            style: "padding: 24px;",
            h2 {
                style: "margin: 0 0 16px 0; font-size: 15px; font-weight: 700; color: {text_primary};",
                "Local Explainer – Search City"
            }
            label {
                style: "display: block; font-size: 13px; margin-bottom: 8px; color: {text_secondary};",
                "Enter City / Municipality Name:"
            }
            input {
                r#type: "text",
                value: "{search_text}",
                placeholder: "e.g. Manila, Quezon City, Taguig...",
                style: "width: 100%; box-sizing: border-box; border-radius: 4px; padding: 8px 12px; font-size: 13px; outline: none; margin-bottom: 12px; {input_style}",
                oninput: move |evt| search_text.set(evt.value()),
                onkeydown: move |evt: Event<KeyboardData>| {
                    if evt.key() == Key::Enter {
                        on_search.call(());
                    }
                },
            }
            button {
                style: "padding: 8px 20px; border-radius: 4px; border: none; background: #2563eb; color: #ffffff; font-size: 13px; cursor: pointer; margin-bottom: 16px;",
                onclick: move |_| on_search.call(()),
                "Search"
            }

            if searched && found.is_none() {
                div {
                    style: "border-radius: 4px; padding: 8px 12px; background: rgba(127,29,29,0.2); border: 1px solid rgba(153,27,27,0.4); color: #f87171; font-size: 13px; margin-bottom: 16px;",
                    "City not found. Try: Manila, Makati, Taguig, Quezon City…"
                }
            }

            match found {
                None => rsx! {},
                Some(ix) => {
                    let city = &cities[ix];
                    let r = richness.get(ix).copied().unwrap_or(city.total_species);
                    let cover_dot = land_color(&city.dominant_land_cover);
                    let extra = city.species.len().saturating_sub(8);
                    let max_shap = city
                        .shap
                        .iter()
                        .map(|p| p.value)
                        .fold(f64::MIN, f64::max)
                        .max(1e-9);
                    rsx! {
                        div {
                            style: "display: flex; flex-direction: column; gap: 12px;",
                            div {
                                style: "border-radius: 4px; padding: 8px 12px; background: rgba(19,78,74,0.3); border: 1px solid rgba(15,118,110,0.5); font-size: 13px;",
                                span { style: "color: {text_secondary};", "Found: " }
                                span { style: "font-weight: 700; color: #5eead4;", "{city.name}" }
                            }
                            div {
                                style: "display: flex; align-items: center; justify-content: space-between; padding: 4px 0; border-bottom: 1px solid {section_border};",
                                span { style: "font-size: 12px; font-weight: 600; color: {text_secondary};", "City / Area" }
                                span { style: "font-size: 13px; font-weight: 700; color: {text_primary};", "{city.name}" }
                            }
                            div {
                                style: "display: flex; align-items: center; justify-content: space-between; padding: 4px 0; border-bottom: 1px solid {section_border};",
                                span { style: "font-size: 12px; font-weight: 600; color: {text_secondary};", "Dominant Land Cover" }
                                div {
                                    style: "display: flex; align-items: center; gap: 8px;",
                                    span { style: "width: 12px; height: 12px; border-radius: 2px; background: {cover_dot};" }
                                    span { style: "font-size: 12px; color: {text_secondary};", "{city.dominant_land_cover} ({city.land_cover_pct}%)" }
                                }
                            }
                            div {
                                style: "display: flex; align-items: center; justify-content: space-between; padding: 4px 0; border-bottom: 1px solid {section_border};",
                                span { style: "font-size: 12px; font-weight: 600; color: {text_secondary};", "Total Unique Species" }
                                span { style: "font-size: 13px; font-weight: 700; color: #22d3ee;", "{r} species" }
                            }
                            div {
                                style: "display: flex; align-items: center; justify-content: space-between; padding: 4px 0; border-bottom: 1px solid {section_border};",
                                span { style: "font-size: 12px; font-weight: 600; color: {text_secondary};", "Observation Sites" }
                                span { style: "font-size: 13px; font-weight: 700; color: {text_primary};", "{city.observation_sites} sites" }
                            }

                            div {
                                p {
                                    style: "margin: 0 0 8px 0; font-size: 12px; font-weight: 600; color: {text_secondary};",
                                    "Species Observed in this City"
                                }
                                div {
                                    style: "display: flex; flex-direction: column; gap: 4px;",
                                    for sp in city.species.iter().take(if expand_now { usize::MAX } else { 8 }) {
                                        div {
                                            style: "display: flex; align-items: center; gap: 8px;",
                                            span { style: "width: 6px; height: 6px; border-radius: 50%; flex-shrink: 0; background: #06b6d4;" }
                                            span { style: "font-size: 12px; color: {text_secondary};", "{sp}" }
                                        }
                                    }
                                }
                                if city.species.len() > 8 {
                                    button {
                                        style: "margin-top: 6px; background: none; border: none; padding: 0; font-size: 12px; color: #60a5fa; cursor: pointer;",
                                        onclick: move |_| expand_species.set(!expand_species()),
                                        if expand_now { "▲ Show less" } else { "▼ +{extra} more species" }
                                    }
                                }
                            }

                            div {
                                p {
                                    style: "margin: 0 0 8px 0; font-size: 12px; font-weight: 600; color: {text_secondary};",
                                    "Environmental Factors (SHAP)"
                                }
                                div {
                                    style: "display: flex; flex-direction: column; gap: 8px;",
                                    for (i, pair) in city.shap.iter().enumerate() {
                                        {
                                            let color = SHAP_BAR_COLORS[i % SHAP_BAR_COLORS.len()];
                                            let width = (pair.value / max_shap * 100.0).round() as i32;
                                            let value_txt = format!("{:.2}", pair.value);
                                            rsx! {
                                                div {
                                                    div {
                                                        style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 2px;",
                                                        span { style: "font-size: 11px; color: {text_secondary};", "{pair.feature}" }
                                                        span { style: "font-size: 11px; font-weight: 600; color: {color};", "{value_txt}" }
                                                    }
                                                    div {
                                                        style: "height: 8px; border-radius: 9999px; overflow: hidden; background: {track};",
                                                        div { style: "height: 8px; border-radius: 9999px; background: {color}; width: {width}%; transition: width 0.5s ease;" }
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
    }
}

#[component]
pub fn Analytics() -> Element {
    let state = use_context::<AppState>();
    let light = (state.light_mode)();

    let mut view_mode = use_signal(|| MapMode::LandCover);
    let mut tolerance = use_signal(|| "All".to_string());
    let mut migration = use_signal(|| "All".to_string());
    let mut month = use_signal(|| 0usize);

    let mut hovered = use_signal(|| None::<usize>);
    let mut search_text = use_signal(String::new);
    let mut found_city = use_signal(|| None::<usize>);
    let mut searched = use_signal(|| false);
    let mut expand_species = use_signal(|| false);

    let mut covers = use_signal(|| [true; 10]);
    let mut show_lc_filter = use_signal(|| false);

    let mut pred_input = use_signal(PredictionInput::default);
    let mut prediction = use_signal(|| None::<PredictionResult>);
    let mut pred_running = use_signal(|| false);

    let mut run_search = move || {
        let q = search_text().trim().to_lowercase();
        if q.is_empty() {
            found_city.set(None);
            searched.set(false);
            return;
        }
        let cities = CityRecord::get_city_vector();
        let hit = cities
            .iter()
            .position(|c| c.name.to_lowercase().contains(&q) || c.id.contains(&q));
        found_city.set(hit);
        searched.set(true);
        expand_species.set(false);
    };

    let run_prediction = move |_| {
        spawn(async move {
            pred_running.set(true);
            sleep_ms(600).await;
            let mut input = pred_input();
            input.month = month();
            prediction.set(Some(predict_richness(&input)));
            pred_running.set(false);
        });
    };

    let cities = CityRecord::get_city_vector();
    let covers_now = covers();
    let mode_now = view_mode();
    let tol_now = tolerance();
    let mig_now = migration();
    let month_now = month();
    let month_long = MONTHS_LONG[month_now % 12];
    let hovered_now = hovered();
    let found_now = found_city();
    let searched_now = searched();
    let pred_now = pred_input();
    let prediction_now = prediction();
    let running_now = pred_running();

    let richness: Vec<i32> = cities
        .iter()
        .map(|c| city_richness(c, &tol_now, &mig_now, month_now))
        .collect();
    let base = ncr_base_svg();
    let labels = city_labels_svg(&cities, light, hovered_now, found_now, &covers_now);

    let all_selected = covers_now.iter().all(|b| *b);
    let selected_count = covers_now.iter().filter(|b| **b).count();
    let visible_cities = cities
        .iter()
        .filter(|c| {
            cover_index(&c.dominant_land_cover)
                .map(|ix| covers_now[ix])
                .unwrap_or(true)
        })
        .count();

    let found_name = found_now.map(|ix| cities[ix].name.clone());
    let shap_rows: Vec<(String, f64)> = match found_now {
        Some(ix) => cities[ix]
            .shap
            .iter()
            .map(|p| (p.feature.clone(), p.value))
            .collect(),
        None => GLOBAL_SHAP
            .iter()
            .map(|w| (w.feature.to_string(), w.value))
            .collect(),
    };
    let shap_title = match &found_name {
        Some(name) => format!("City Feature Importance (SHAP) — {name}"),
        None => "Global Feature Importance (SHAP)".to_string(),
    };
    let interpretation = match found_now {
        Some(ix) => {
            let c = &cities[ix];
            format!(
                "In {}, {} ({:.2}) and {} ({:.2}) are the strongest drivers of bird species richness.",
                c.name,
                c.shap[0].feature.to_lowercase(),
                c.shap[0].value,
                c.shap[1].feature,
                c.shap[1].value
            )
        }
        None => "Light intensity and NDVI are the strongest predictors of bird species richness \
                 in Metro Manila. Higher light pollution consistently reduces species diversity, \
                 while vegetation cover (NDVI) has a positive effect."
            .to_string(),
    };
    let shap_svg = shap_chart_svg(&shap_rows);
    let city_count = cities.len();
    let legend_gradient = format!("linear-gradient(to right,{})", LEGEND_STOPS.join(","));

    let page_bg = if light { "#ffffff" } else { "#0d1117" };
    let text_color = if light { "#111827" } else { "#ffffff" };
    let text_primary = if light { "#111827" } else { "#ffffff" };
    let text_secondary = if light { "#374151" } else { "#9ca3af" };
    let nav_border = if light { "#e5e7eb" } else { "#1e2535" };
    let divider = if light { "#d1d5db" } else { "#2a2f42" };
    let grid_bg = if light { "#f9fafb" } else { "#0d1117" };
    let section_border = if light { "#e5e7eb" } else { "#1e2535" };
    let dropdown_style = if light {
        "background: #ffffff; border: 1px solid #d1d5db;"
    } else {
        "background: #0f1623; border: 1px solid #2a2f42;"
    };
    let field_style = if light {
        "background: #ffffff; border: 1px solid #d1d5db; color: #111827;"
    } else {
        "background: #0d1117; border: 1px solid #2a2f42; color: #e5e7eb;"
    };
    let hint_style = if light {
        "background: rgba(243,244,246,0.8); border: 1px solid #d1d5db; color: #374151;"
    } else {
        "background: rgba(17,17,17,0.8); border: 1px solid #333333; color: #e5e7eb;"
    };
    let divider_style =
        format!("width: 1px; height: 20px; background: {divider}; margin: 0 2px; flex-shrink: 0;");
    let lc_button = if all_selected {
        "background: #2563eb;"
    } else {
        "background: #ea580c;"
    };
    let month_chip = if light {
        "background: #f3e8ff; color: #7e22ce;"
    } else {
        "background: rgba(168,85,247,0.2); color: #d8b4fe;"
    };
    let run_style = if running_now {
        "background: rgba(126,34,206,0.6); cursor: not-allowed;"
    } else {
        "background: #9333ea; cursor: pointer;"
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; min-height: 100%; background: {page_bg}; color: {text_color};",

            // Filter bar
            nav {
                style: "position: sticky; top: 0; z-index: 20; display: flex; height: 44px; flex-shrink: 0; background: {page_bg}; border-bottom: 1px solid {nav_border};",
                div {
                    style: "display: flex; align-items: center; gap: 8px; padding: 0 16px; flex: 1; overflow-x: auto;",
                    span { style: "font-size: 12px; flex-shrink: 0; color: {text_secondary};", "View" }
                    Pill {
                        label: "Land Cover".to_string(),
                        active: mode_now == MapMode::LandCover,
                        light,
                        dot: "#42a5f5".to_string(),
                        on_click: move |_| view_mode.set(MapMode::LandCover),
                    }
                    Pill {
                        label: "Richness".to_string(),
                        active: mode_now == MapMode::Richness,
                        light,
                        dot: "#8b5cf6".to_string(),
                        on_click: move |_| view_mode.set(MapMode::Richness),
                    }
                    span { style: "{divider_style}" }
                    span { style: "font-size: 12px; flex-shrink: 0; color: {text_secondary};", "Tolerance" }
                    Pill {
                        label: "All".to_string(),
                        active: tol_now == "All",
                        light,
                        on_click: move |_| tolerance.set("All".to_string()),
                    }
                    Pill {
                        label: "🔆 Sensitive".to_string(),
                        active: tol_now == "Sensitive",
                        light,
                        dot: "#fbbf24".to_string(),
                        on_click: move |_| tolerance.set("Sensitive".to_string()),
                    }
                    Pill {
                        label: "🌙 Tolerant".to_string(),
                        active: tol_now == "Tolerant",
                        light,
                        dot: "#f97316".to_string(),
                        on_click: move |_| tolerance.set("Tolerant".to_string()),
                    }
                    span { style: "{divider_style}" }
                    span { style: "font-size: 12px; flex-shrink: 0; color: {text_secondary};", "Migration" }
                    Pill {
                        label: "All".to_string(),
                        active: mig_now == "All",
                        light,
                        on_click: move |_| migration.set("All".to_string()),
                    }
                    Pill {
                        label: "🐦 Resident".to_string(),
                        active: mig_now == "Resident",
                        light,
                        dot: "#22c55e".to_string(),
                        on_click: move |_| migration.set("Resident".to_string()),
                    }
                    Pill {
                        label: "✈️ Migratory".to_string(),
                        active: mig_now == "Migratory",
                        light,
                        dot: "#38bdf8".to_string(),
                        on_click: move |_| migration.set("Migratory".to_string()),
                    }
                    if mode_now == MapMode::LandCover {
                        span { style: "{divider_style}" }
                        span { style: "font-size: 12px; flex-shrink: 0; color: {text_secondary};", "Month" }
                        span { style: "font-size: 12px; flex-shrink: 0; width: 68px; color: #93c5fd;", "{month_long}" }
                        input {
                            r#type: "range",
                            min: "0",
                            max: "11",
                            value: "{month_now}",
                            style: "width: 112px; flex-shrink: 0; height: 4px; accent-color: #3b82f6; cursor: pointer;",
                            oninput: move |evt| {
                                if let Ok(m) = evt.value().parse::<usize>() {
                                    month.set(m.min(11));
                                }
                            },
                        }
                    }
                }

                // Land-cover multi-select
                div {
                    style: "position: relative; display: flex; align-items: center; padding: 0 12px; flex-shrink: 0;",
                    button {
                        style: "display: inline-flex; align-items: center; gap: 6px; padding: 4px 12px; border-radius: 9999px; border: none; font-size: 12px; color: #ffffff; cursor: pointer; white-space: nowrap; {lc_button}",
                        onclick: move |_| show_lc_filter.set(!show_lc_filter()),
                        span { style: "width: 8px; height: 8px; border-radius: 50%; background: rgba(255,255,255,0.5);" }
                        "Land Cover"
                        if !all_selected {
                            span {
                                style: "background: rgba(255,255,255,0.25); border-radius: 9999px; padding: 1px 6px; font-size: 9px;",
                                "{selected_count}/10"
                            }
                        }
                        "▾"
                    }
                    if show_lc_filter() {
                        div {
                            style: "position: absolute; top: 40px; right: 0; z-index: 100; width: 224px; border-radius: 8px; overflow: hidden; box-shadow: 0 25px 50px -12px rgba(0,0,0,0.4); {dropdown_style}",
                            div {
                                style: "display: flex; align-items: center; justify-content: space-between; padding: 8px 12px; border-bottom: 1px solid {nav_border};",
                                span { style: "font-size: 12px; font-weight: 700; color: {text_primary};", "Filter by Land Cover" }
                                button {
                                    style: "background: none; border: none; padding: 0; font-size: 12px; color: #60a5fa; cursor: pointer;",
                                    onclick: move |_| {
                                        let next = if covers().iter().all(|b| *b) { [false; 10] } else { [true; 10] };
                                        covers.set(next);
                                    },
                                    if all_selected { "Clear all" } else { "Select all" }
                                }
                            }
                            div {
                                style: "padding: 4px 0; max-height: 288px; overflow-y: auto;",
                                for (i, (name, color)) in LAND_COLORS.iter().enumerate() {
                                    {
                                        let on = covers_now[i];
                                        let row_color = if on {
                                            if light { "#1f2937" } else { "#e5e7eb" }
                                        } else {
                                            text_secondary
                                        };
                                        rsx! {
                                            label {
                                                style: "display: flex; align-items: center; gap: 10px; padding: 6px 12px; cursor: pointer;",
                                                input {
                                                    r#type: "checkbox",
                                                    checked: on,
                                                    style: "accent-color: #3b82f6; width: 14px; height: 14px; flex-shrink: 0;",
                                                    onchange: move |_| {
                                                        let mut next = covers();
                                                        next[i] = !next[i];
                                                        covers.set(next);
                                                    },
                                                }
                                                span { style: "width: 12px; height: 12px; border-radius: 2px; flex-shrink: 0; background: {color};" }
                                                span { style: "font-size: 12px; color: {row_color};", "{name}" }
                                            }
                                        }
                                    }
                                }
                            }
                            div {
                                style: "padding: 8px 12px; border-top: 1px solid {nav_border}; font-size: 10px; color: {text_secondary};",
                                "{selected_count} of 10 types shown · {visible_cities} cities visible"
                            }
                        }
                    }
                }
            }

            // NCR map
            div {
                style: "position: relative; width: 100%; height: 62vh; min-height: 440px; overflow: hidden; border-bottom: 1px solid {section_border};",
                svg {
                    view_box: "0 0 560 700",
                    preserve_aspect_ratio: "xMidYMid meet",
                    style: "display: block; width: 100%; height: 100%; background: #e8e8e0;",

                    g { dangerous_inner_html: "{base}" }

                    for (i, city) in cities.iter().enumerate() {
                        {
                            let filtered = cover_index(&city.dominant_land_cover)
                                .map(|ix| !covers_now[ix])
                                .unwrap_or(false);
                            let fill = if filtered {
                                "#888888".to_string()
                            } else if mode_now == MapMode::LandCover {
                                land_color(&city.dominant_land_cover).to_string()
                            } else {
                                richness_color(richness[i] as f64)
                            };
                            let sel = found_now == Some(i);
                            let hov = hovered_now == Some(i);
                            let fill_op = if sel { 0.94 } else if hov { 0.90 } else { 0.80 };
                            let stroke = if sel { "#ffffff" } else if hov { "#ffffffaa" } else { "#111111" };
                            let stroke_w = if sel { 2.2 } else if hov { 1.8 } else { 1.0 };
                            let g_op = if filtered { 0.22 } else { 1.0 };
                            let cursor = if filtered { "default" } else { "pointer" };
                            let points = NCR.points_latlon(&city.polygon);
                            let name = city.name.clone();
                            rsx! {
                                polygon {
                                    points: "{points}",
                                    fill: "{fill}",
                                    stroke: "{stroke}",
                                    stroke_width: "{stroke_w}",
                                    style: "opacity: {g_op}; fill-opacity: {fill_op}; stroke-linejoin: round; cursor: {cursor}; transition: fill-opacity 0.1s;",
                                    onmouseenter: move |_| {
                                        if !filtered {
                                            hovered.set(Some(i));
                                        }
                                    },
                                    onmouseleave: move |_| hovered.set(None),
                                    onclick: move |_| {
                                        if !filtered {
                                            search_text.set(name.clone());
                                            found_city.set(Some(i));
                                            searched.set(true);
                                            expand_species.set(false);
                                        }
                                    },
                                }
                            }
                        }
                    }

                    g { style: "pointer-events: none;", dangerous_inner_html: "{labels}" }

                    match hovered_now {
                        Some(h) => rsx! {
                            g {
                                style: "pointer-events: none;",
                                dangerous_inner_html: ncr_tooltip_svg(&cities[h], richness[h], mode_now == MapMode::Richness, light),
                            }
                        },
                        None => rsx! {},
                    }
                }

                // Decorative zoom buttons
                div {
                    style: "position: absolute; top: 12px; left: 12px; display: flex; flex-direction: column; border-radius: 4px; overflow: hidden; border: 1px solid #bbbbbb; box-shadow: 0 4px 6px rgba(0,0,0,0.1);",
                    button { style: "width: 28px; height: 28px; display: flex; align-items: center; justify-content: center; background: #ffffff; border: none; border-bottom: 1px solid #bbbbbb; color: #374151; cursor: pointer; font-size: 14px;", "+" }
                    button { style: "width: 28px; height: 28px; display: flex; align-items: center; justify-content: center; background: #ffffff; border: none; color: #374151; cursor: pointer; font-size: 14px;", "−" }
                }

                // Legend
                div {
                    style: "position: absolute; bottom: 32px; left: 12px; background: rgba(255,255,255,0.92); border: 1px solid #d1d5db; border-radius: 8px; padding: 12px; box-shadow: 0 10px 15px rgba(0,0,0,0.1);",
                    if mode_now == MapMode::LandCover {
                        p { style: "margin: 0 0 8px 0; font-size: 12px; font-weight: 700; color: #1f2937;", "Land Cover Types" }
                        for name in LAND_LEGEND_TYPES {
                            {
                                let color = land_color(name);
                                rsx! {
                                    div {
                                        style: "display: flex; align-items: center; gap: 8px; margin-bottom: 4px;",
                                        span { style: "width: 14px; height: 14px; border-radius: 2px; flex-shrink: 0; background: {color};" }
                                        span { style: "font-size: 11px; color: #4b5563;", "{name}" }
                                    }
                                }
                            }
                        }
                    } else {
                        p { style: "margin: 0 0 8px 0; font-size: 12px; font-weight: 700; color: #1f2937;", "Species Richness" }
                        div {
                            style: "display: flex; align-items: center; gap: 8px; margin-bottom: 4px;",
                            span { style: "font-size: 10px; color: #4b5563;", "Low" }
                            div { style: "width: 100px; height: 12px; border-radius: 4px; background: {legend_gradient};" }
                            span { style: "font-size: 10px; color: #4b5563;", "High" }
                        }
                        div {
                            style: "display: flex; justify-content: space-between; width: 112px;",
                            for tick in LEGEND_TICKS {
                                span { style: "font-size: 9px; color: #4b5563;", "{tick}" }
                            }
                        }
                    }
                }

                div {
                    style: "position: absolute; bottom: 12px; left: 50%; transform: translateX(-50%); border-radius: 9999px; padding: 6px 16px; font-size: 12px; pointer-events: none; white-space: nowrap; {hint_style}",
                    "Click a city area to explore predictions"
                }
                div {
                    style: "position: absolute; bottom: 4px; right: 8px; font-size: 9px; opacity: 0.7; color: {text_secondary};",
                    "© AVILIGHT NCR Map"
                }
            }

            // Bottom section swaps with the map mode
            if mode_now == MapMode::LandCover {
                div {
                    style: "display: grid; grid-template-columns: 1fr 1fr; background: {grid_bg};",
                    div {
                        style: "padding: 24px; border-right: 1px solid {section_border};",
                        h2 { style: "margin: 0 0 4px 0; font-size: 15px; font-weight: 700; color: {text_primary};", "{shap_title}" }
                        match &found_name {
                            Some(name) => rsx! {
                                p {
                                    style: "margin: 0 0 16px 0; font-size: 12px; color: {text_secondary};",
                                    "Showing local SHAP values for "
                                    span { style: "color: #22d3ee;", "{name}" }
                                    "."
                                }
                            },
                            None => rsx! {
                                p {
                                    style: "margin: 0 0 16px 0; font-size: 12px; color: {text_secondary};",
                                    "Average feature importance across all {city_count} NCR municipalities."
                                }
                            },
                        }
                        div { dangerous_inner_html: "{shap_svg}" }
                        p {
                            style: "margin: 8px 0 0 0; font-size: 12px; line-height: 1.6; color: {text_secondary};",
                            span { style: "font-weight: 600;", "Interpretation: " }
                            "{interpretation}"
                        }
                    }
                    CitySearchPanel {
                        light,
                        cities: cities.clone(),
                        richness: richness.clone(),
                        search_text,
                        found: found_now,
                        searched: searched_now,
                        expand_species,
                        on_search: move |_| run_search(),
                    }
                }
            } else {
                div {
                    style: "display: grid; grid-template-columns: 1fr 1fr; background: {grid_bg};",

                    // Covariates and hyperparameters
                    div {
                        style: "padding: 24px; display: flex; flex-direction: column; gap: 24px; border-right: 1px solid {section_border};",
                        div {
                            h2 { style: "margin: 0 0 16px 0; font-size: 15px; font-weight: 700; color: {text_primary};", "Prediction Covariates" }
                            div {
                                style: "display: flex; flex-direction: column; gap: 16px;",
                                div {
                                    label { style: "display: block; font-size: 12px; font-weight: 600; margin-bottom: 4px; color: {text_secondary};", "Land Type" }
                                    select {
                                        style: "width: 100%; border-radius: 4px; padding: 6px 8px; font-size: 13px; font-weight: 600; outline: none; {field_style}",
                                        onchange: move |evt| pred_input.write().land_type = evt.value(),
                                        for (name, _) in LAND_COLORS.iter() {
                                            option { value: "{name}", selected: pred_now.land_type == *name, "{name}" }
                                        }
                                    }
                                }
                                div {
                                    style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px;",
                                    NumInput {
                                        label: "Land Temp (°C)".to_string(),
                                        value: pred_now.land_temp,
                                        min: 10.0,
                                        max: 45.0,
                                        step: 0.5,
                                        light,
                                        on_change: move |v| pred_input.write().land_temp = v,
                                    }
                                    NumInput {
                                        label: "ALAN (nW/cm²/sr)".to_string(),
                                        value: pred_now.alan,
                                        min: 0.0,
                                        max: 120.0,
                                        step: 1.0,
                                        light,
                                        on_change: move |v| pred_input.write().alan = v,
                                    }
                                    NumInput {
                                        label: "Precipitation (mm)".to_string(),
                                        value: pred_now.precipitation,
                                        min: 0.0,
                                        max: 600.0,
                                        step: 5.0,
                                        light,
                                        on_change: move |v| pred_input.write().precipitation = v,
                                    }
                                    NumInput {
                                        label: "NDVI (%)".to_string(),
                                        value: pred_now.ndvi,
                                        min: 0.0,
                                        max: 100.0,
                                        step: 1.0,
                                        light,
                                        on_change: move |v| pred_input.write().ndvi = v,
                                    }
                                }
                                div {
                                    label { style: "display: block; font-size: 12px; font-weight: 600; margin-bottom: 4px; color: {text_secondary};", "Month" }
                                    div {
                                        style: "display: flex; align-items: center; gap: 12px;",
                                        input {
                                            r#type: "range",
                                            min: "0",
                                            max: "11",
                                            value: "{month_now}",
                                            style: "flex: 1; height: 4px; accent-color: #a855f7; cursor: pointer;",
                                            oninput: move |evt| {
                                                if let Ok(m) = evt.value().parse::<usize>() {
                                                    month.set(m.min(11));
                                                }
                                            },
                                        }
                                        span {
                                            style: "flex-shrink: 0; min-width: 72px; text-align: center; padding: 4px 8px; border-radius: 4px; font-size: 12px; font-weight: 700; {month_chip}",
                                            "{month_long}"
                                        }
                                    }
                                }
                            }
                        }
                        div {
                            style: "border-top: 1px solid {section_border}; padding-top: 20px;",
                            h3 {
                                style: "margin: 0 0 16px 0; font-size: 13px; font-weight: 700; color: {text_primary};",
                                "Model Hyperparameters "
                                span { style: "font-size: 12px; font-weight: 400; color: {text_secondary};", "(Random Forest / XGBoost)" }
                            }
                            div {
                                style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px;",
                                NumInput {
                                    label: "N Trees".to_string(),
                                    value: pred_now.n_trees,
                                    min: 10.0,
                                    max: 500.0,
                                    step: 10.0,
                                    light,
                                    on_change: move |v| pred_input.write().n_trees = v,
                                }
                                NumInput {
                                    label: "Max Depth".to_string(),
                                    value: pred_now.max_depth,
                                    min: 1.0,
                                    max: 20.0,
                                    step: 1.0,
                                    light,
                                    on_change: move |v| pred_input.write().max_depth = v,
                                }
                                div {
                                    style: "grid-column: span 2;",
                                    NumInput {
                                        label: "Learning Rate".to_string(),
                                        value: pred_now.learning_rate,
                                        min: 0.001,
                                        max: 1.0,
                                        step: 0.01,
                                        light,
                                        on_change: move |v| pred_input.write().learning_rate = v,
                                    }
                                }
                            }
                        }
                        button {
                            style: "display: flex; align-items: center; justify-content: center; gap: 8px; width: 100%; padding: 10px; border-radius: 8px; border: none; font-size: 13px; font-weight: 700; color: #ffffff; {run_style}",
                            disabled: running_now,
                            onclick: run_prediction,
                            if running_now { "Running Model…" } else { "▶ Run Prediction" }
                        }
                    }

                    // Prediction output and the city explainer
                    div {
                        style: "display: flex; flex-direction: column;",
                        div {
                            style: "padding: 24px; border-bottom: 1px solid {section_border};",
                            h2 { style: "margin: 0 0 16px 0; font-size: 15px; font-weight: 700; color: {text_primary};", "Predicted Species Richness" }
                            match prediction_now {
                                None => {
                                    let empty = if light {
                                        "background: #f9fafb; border: 1px solid #e5e7eb;"
                                    } else {
                                        "background: #0d1117; border: 1px solid #2a2f42;"
                                    };
                                    rsx! {
                                        div {
                                            style: "border-radius: 8px; padding: 24px; text-align: center; {empty}",
                                            p { style: "margin: 0; font-size: 13px; color: {text_secondary};", "Configure covariates and hyperparameters," }
                                            p {
                                                style: "margin: 0; font-size: 13px; color: {text_secondary};",
                                                "then click "
                                                span { style: "font-weight: 600; color: #c084fc;", "Run Prediction" }
                                                " to see results."
                                            }
                                        }
                                    }
                                }
                                Some(r) => {
                                    let total_card = if light {
                                        "background: #faf5ff; border: 1px solid #e9d5ff;"
                                    } else {
                                        "background: rgba(88,28,135,0.2); border: 1px solid rgba(126,34,206,0.4);"
                                    };
                                    let rows_card = if light {
                                        "background: #ffffff; border: 1px solid #e5e7eb;"
                                    } else {
                                        "background: #0d1117; border: 1px solid #2a2f42;"
                                    };
                                    let track = if light { "#f3f4f6" } else { "#1e2535" };
                                    rsx! {
                                        div {
                                            style: "display: flex; flex-direction: column; gap: 12px;",
                                            div {
                                                style: "border-radius: 8px; padding: 16px; {total_card}",
                                                div {
                                                    style: "display: flex; align-items: center; justify-content: space-between;",
                                                    span { style: "font-size: 13px; font-weight: 700; color: {text_primary};", "Total Predicted Species" }
                                                    span { style: "font-size: 24px; font-weight: 800; color: #c084fc;", "{r.total}" }
                                                }
                                                p {
                                                    style: "margin: 4px 0 0 0; font-size: 12px; color: {text_secondary};",
                                                    "Based on {month_long} · {pred_now.land_type} · ALAN {pred_now.alan} nW/cm²/sr"
                                                }
                                            }
                                            div {
                                                style: "border-radius: 8px; overflow: hidden; {rows_card}",
                                                for (j, (label, val, color, bar, desc)) in [
                                                    ("Light Sensitive", r.light_sensitive, "#f87171", "#ef4444", "Species avoided by high ALAN"),
                                                    ("Light Tolerant", r.light_tolerant, "#60a5fa", "#3b82f6", "Species adapted to lit environments"),
                                                    ("Resident", r.resident, "#34d399", "#10b981", "Year-round breeding species"),
                                                    ("Migratory", r.migratory, "#fbbf24", "#f59e0b", "Seasonal visitors"),
                                                ].into_iter().enumerate() {
                                                    {
                                                        let pct = ((val as f64 / r.total.max(1) as f64) * 100.0).round() as i32;
                                                        let top = if j == 0 {
                                                            String::new()
                                                        } else {
                                                            format!("border-top: 1px solid {section_border};")
                                                        };
                                                        rsx! {
                                                            div {
                                                                style: "padding: 12px 16px; {top}",
                                                                div {
                                                                    style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 4px;",
                                                                    span { style: "font-size: 12px; font-weight: 700; color: {text_primary};", "{label}" }
                                                                    span { style: "font-size: 16px; font-weight: 800; color: {color};", "{val}" }
                                                                }
                                                                p { style: "margin: 0 0 6px 0; font-size: 12px; color: {text_secondary};", "{desc}" }
                                                                div {
                                                                    style: "height: 6px; border-radius: 9999px; background: {track};",
                                                                    div { style: "height: 6px; border-radius: 9999px; background: {bar}; width: {pct}%; transition: width 0.5s ease;" }
                                                                }
                                                            }
                                                        }
                                                    }
                                                }
                                            }
                                            p {
                                                style: "margin: 0; font-size: 12px; font-style: italic; color: {text_secondary};",
                                                "Prototype model — values are illustrative. Connect a trained model endpoint for production predictions."
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        CitySearchPanel {
                            light,
                            cities: cities.clone(),
                            richness: richness.clone(),
                            search_text,
                            found: found_now,
                            searched: searched_now,
                            expand_species,
                            on_search: move |_| run_search(),
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
    fn label_sizes_step_down_for_long_names() {
        assert_eq!(label_font_size("Pasig"), 10.0);
        assert_eq!(label_font_size("Caloocan"), 9.0);
        assert_eq!(label_font_size("Muntinlupa"), 7.5);
        // ñ counts as one character, not two bytes
        assert_eq!(label_font_size("Parañaque"), 9.0);
    }

    #[test]
    fn land_colors_cover_every_city() {
        for city in CityRecord::get_city_vector() {
            assert!(cover_index(&city.dominant_land_cover).is_some(), "{}", city.id);
        }
    }

    #[test]
    fn base_layer_has_graticule_and_water() {
        let svg = ncr_base_svg();
        assert_eq!(svg.matches("stroke-dasharray=\"4 4\"").count(), 8);
        assert_eq!(svg.matches("<polygon").count(), 4);
        assert!(svg.contains("Manila Bay"));
        assert!(svg.contains("Laguna de Bay"));
    }

    #[test]
    fn every_city_gets_an_outlined_label() {
        let cities = CityRecord::get_city_vector();
        let svg = city_labels_svg(&cities, false, None, None, &[true; 10]);
        assert_eq!(svg.matches("<text").count(), 17);
        assert!(svg.contains("paint-order=\"stroke\""));
    }

    #[test]
    fn filtered_cities_fade_their_labels() {
        let cities = CityRecord::get_city_vector();
        // LAND_COLORS[0] is Urban & Built-up, the dominant class for most of NCR
        let mut covers = [true; 10];
        covers[0] = false;
        let svg = city_labels_svg(&cities, false, None, None, &covers);
        assert!(svg.contains("opacity=\"0.22\""));
    }

    #[test]
    fn tooltip_escapes_land_cover_ampersand() {
        let cities = CityRecord::get_city_vector();
        let city = cities
            .iter()
            .find(|c| c.dominant_land_cover.contains('&'))
            .unwrap();
        let svg = ncr_tooltip_svg(city, 21, false, false);
        assert!(svg.contains("&amp;"));
        assert!(!svg.contains("predicted species"));
    }

    #[test]
    fn tooltip_reports_richness_in_heatmap_mode() {
        let cities = CityRecord::get_city_vector();
        let svg = ncr_tooltip_svg(&cities[0], 33, true, false);
        assert!(svg.contains("33 predicted species"));
    }

    #[test]
    fn tooltip_flips_for_eastern_cities() {
        let cities = CityRecord::get_city_vector();
        let marikina = cities.iter().find(|c| c.id == "marikina").unwrap();
        let (lx, _) = NCR.project(marikina.label_at[1], marikina.label_at[0]);
        assert!(lx > 380.0);
        let svg = ncr_tooltip_svg(marikina, 38, true, false);
        let tx = lx - 150.0 - 12.0;
        assert!(svg.contains(&format!("x=\"{tx:.1}\"")));
    }

    #[test]
    fn shap_chart_draws_one_bar_per_feature() {
        let rows: Vec<(String, f64)> = GLOBAL_SHAP
            .iter()
            .map(|w| (w.feature.to_string(), w.value))
            .collect();
        let svg = shap_chart_svg(&rows);
        // five bars plus the legend swatch
        assert_eq!(svg.matches("<rect").count(), 6);
        assert!(svg.contains("(mean |SHAP| value)"));
        assert!(svg.contains("Light Intensity"));
    }
}
