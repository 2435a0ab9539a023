//! Statistical reports page: simulated exports, the environmental
//! correlation matrix, the KBA/PA audit table and the year-parameterized
//! distribution charts. All charts are SVG strings assembled by the pure
//! builders at the top of this module.

use avl_analytics::chartgeom::{
    area_path, axis_ticks, donut_angles, donut_segment, polyline_path, scale, segment_label_at,
};
use avl_analytics::colormap::{correlation_color, light_level_color};
use avl_analytics::series::site_richness_ranking;
use avl_dataset::constants::{
    CORRELATION_MATRIX, KBA_AUDIT, LIGHT_SPECIES_SCATTER, SITE_COLORS, SPECIES_DISTRIBUTION,
};
use avl_dataset::series::{
    get_light_vs_richness_vector, get_richness_light_vector, get_site_light_exposure_vector,
    get_tolerance_migration_vector, LightRichnessSample, FIRST_YEAR,
};
use avl_ui::components::{Badge, DownloadButton, DownloadStatus, YearSelect};
use avl_ui::js_bridge::{random, sleep_ms};
use avl_ui::state::AppState;
use avl_ui::theme::Theme;
use dioxus::prelude::*;

/// Walks one export button through Loading and either back to Idle via
/// Done (4 s later) or into Error. Roughly one run in ten fails.
fn run_download(mut status: Signal<DownloadStatus>) {
    spawn(async move {
        status.set(DownloadStatus::Loading);
        sleep_ms(2200).await;
        if random() > 0.1 {
            status.set(DownloadStatus::Done);
            sleep_ms(4000).await;
            status.set(DownloadStatus::Idle);
        } else {
            status.set(DownloadStatus::Error);
        }
    });
}

/// (text, background, border) for the "CSV Dataset" source badge.
fn csv_badge_colors(light: bool) -> (&'static str, &'static str, &'static str) {
    if light {
        ("#15803d", "#dcfce7", "#86efac")
    } else {
        ("#4ade80", "rgba(22,163,74,0.2)", "rgba(22,163,74,0.3)")
    }
}

/// (text, background, border) for the "Sample JSON" source badge.
fn json_badge_colors(light: bool) -> (&'static str, &'static str, &'static str) {
    if light {
        ("#0f766e", "#f0fdfa", "#5eead4")
    } else {
        ("#2dd4bf", "rgba(20,184,166,0.2)", "rgba(20,184,166,0.3)")
    }
}

/// (text, background, border) for a KBA or PA type chip.
fn kind_badge_colors(kind: &str, light: bool) -> (&'static str, &'static str, &'static str) {
    match (kind, light) {
        ("KBA", true) => ("#0f766e", "#ccfbf1", "#5eead4"),
        ("KBA", false) => ("#2dd4bf", "rgba(13,148,136,0.2)", "rgba(13,148,136,0.3)"),
        (_, true) => ("#7e22ce", "#f3e8ff", "#d8b4fe"),
        (_, false) => ("#c084fc", "rgba(147,51,234,0.2)", "rgba(147,51,234,0.3)"),
    }
}

/// (text, background, border) for an audit grade chip.
fn grade_colors(grade: &str, light: bool) -> (&'static str, &'static str, &'static str) {
    match (grade, light) {
        ("A", true) => ("#15803d", "#dcfce7", "#86efac"),
        ("A", false) => ("#4ade80", "rgba(34,197,94,0.2)", "rgba(34,197,94,0.4)"),
        ("B", true) => ("#1d4ed8", "#dbeafe", "#93c5fd"),
        ("B", false) => ("#60a5fa", "rgba(59,130,246,0.2)", "rgba(59,130,246,0.4)"),
        ("C", true) => ("#a16207", "#fef9c3", "#fde047"),
        ("C", false) => ("#facc15", "rgba(234,179,8,0.2)", "rgba(234,179,8,0.4)"),
        (_, true) => ("#b91c1c", "#fee2e2", "#fca5a5"),
        (_, false) => ("#f87171", "rgba(239,68,68,0.2)", "rgba(239,68,68,0.4)"),
    }
}

/// Vertical bar chart of the six Pearson coefficients over a -1..1 axis
/// with a solid reference line at zero.
fn correlation_chart_svg(theme: &Theme, light: bool) -> String {
    let (x0, x1, y0, y1) = (48.0, 624.0, 14.0, 262.0);
    let mut s = String::from(
        "<svg viewBox=\"0 0 640 300\" width=\"100%\" xmlns=\"http://www.w3.org/2000/svg\">",
    );
    for t in axis_ticks(-1.0, 1.0, 9) {
        let y = scale(t, -1.0, 1.0, y1, y0);
        s.push_str(&format!(
            "<line x1=\"{x0}\" y1=\"{y:.1}\" x2=\"{x1}\" y2=\"{y:.1}\" stroke=\"{}\" stroke-dasharray=\"3 3\"/>",
            theme.grid
        ));
        s.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" font-size=\"11\" fill=\"{}\">{}</text>",
            x0 - 6.0,
            y + 3.5,
            theme.axis,
            t
        ));
    }
    let zero_y = scale(0.0, -1.0, 1.0, y1, y0);
    let zero_stroke = if light { "#9ca3af" } else { "#4b5563" };
    s.push_str(&format!(
        "<line x1=\"{x0}\" y1=\"{zero_y:.1}\" x2=\"{x1}\" y2=\"{zero_y:.1}\" stroke=\"{zero_stroke}\" stroke-width=\"1.5\"/>",
    ));
    let slot = (x1 - x0) / CORRELATION_MATRIX.len() as f64;
    for (i, row) in CORRELATION_MATRIX.iter().enumerate() {
        let center = x0 + slot * (i as f64 + 0.5);
        let top = scale(row.value, -1.0, 1.0, y1, y0);
        let (bar_y, bar_h) = if row.value >= 0.0 {
            (top, zero_y - top)
        } else {
            (zero_y, top - zero_y)
        };
        s.push_str(&format!(
            "<rect x=\"{:.1}\" y=\"{:.1}\" width=\"56\" height=\"{:.1}\" rx=\"3\" fill=\"{}\"/>",
            center - 28.0,
            bar_y,
            bar_h,
            correlation_color(row.value)
        ));
        s.push_str(&format!(
            "<text x=\"{center:.1}\" y=\"280\" text-anchor=\"middle\" font-size=\"11\" fill=\"{}\">{}</text>",
            theme.axis, row.label
        ));
    }
    s.push_str(&format!(
        "<text x=\"12\" y=\"{zero_y:.1}\" transform=\"rotate(-90, 12, {zero_y:.1})\" text-anchor=\"middle\" font-size=\"10\" fill=\"{}\">Correlation Coefficient</text>",
        theme.axis
    ));
    s.push_str("</svg>");
    s
}

/// Horizontal species-count bars for the five audited areas, 0..140 domain.
fn distribution_chart_svg(theme: &Theme) -> String {
    let (x0, x1) = (104.0, 500.0);
    let band = 36.0;
    let mut s = String::from(
        "<svg viewBox=\"0 0 520 230\" width=\"100%\" xmlns=\"http://www.w3.org/2000/svg\">",
    );
    for t in axis_ticks(0.0, 140.0, 5) {
        let x = scale(t, 0.0, 140.0, x0, x1);
        s.push_str(&format!(
            "<line x1=\"{x:.1}\" y1=\"8\" x2=\"{x:.1}\" y2=\"188\" stroke=\"{}\" stroke-dasharray=\"3 3\"/>",
            theme.grid
        ));
        s.push_str(&format!(
            "<text x=\"{x:.1}\" y=\"206\" text-anchor=\"middle\" font-size=\"11\" fill=\"{}\">{}</text>",
            theme.axis, t
        ));
    }
    for (i, row) in SPECIES_DISTRIBUTION.iter().enumerate() {
        let band_y = 8.0 + band * i as f64;
        let w = scale(row.total as f64, 0.0, 140.0, 0.0, x1 - x0);
        s.push_str(&format!(
            "<rect x=\"{x0}\" y=\"{:.1}\" width=\"{w:.1}\" height=\"22\" rx=\"3\" fill=\"#22c55e\"/>",
            band_y + 7.0
        ));
        s.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" font-size=\"11\" fill=\"{}\">{}</text>",
            x0 - 6.0,
            band_y + 22.0,
            theme.axis,
            row.short_name
        ));
    }
    s.push_str("</svg>");
    s
}

/// Scatter of light exposure (25..50 nW) against species count (30..140)
/// for the audited areas.
fn exposure_scatter_svg(theme: &Theme) -> String {
    let (x0, x1, y0, y1) = (48.0, 504.0, 14.0, 200.0);
    let mut s = String::from(
        "<svg viewBox=\"0 0 520 260\" width=\"100%\" xmlns=\"http://www.w3.org/2000/svg\">",
    );
    for t in axis_ticks(25.0, 50.0, 6) {
        let x = scale(t, 25.0, 50.0, x0, x1);
        s.push_str(&format!(
            "<line x1=\"{x:.1}\" y1=\"{y0}\" x2=\"{x:.1}\" y2=\"{y1}\" stroke=\"{}\" stroke-dasharray=\"3 3\"/>",
            theme.grid
        ));
        s.push_str(&format!(
            "<text x=\"{x:.1}\" y=\"216\" text-anchor=\"middle\" font-size=\"11\" fill=\"{}\">{}</text>",
            theme.axis, t
        ));
    }
    for t in axis_ticks(30.0, 140.0, 6) {
        let y = scale(t, 30.0, 140.0, y1, y0);
        s.push_str(&format!(
            "<line x1=\"{x0}\" y1=\"{y:.1}\" x2=\"{x1}\" y2=\"{y:.1}\" stroke=\"{}\" stroke-dasharray=\"3 3\"/>",
            theme.grid
        ));
        s.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" font-size=\"11\" fill=\"{}\">{}</text>",
            x0 - 6.0,
            y + 3.5,
            theme.axis,
            t
        ));
    }
    for p in LIGHT_SPECIES_SCATTER.iter() {
        let cx = scale(p.light, 25.0, 50.0, x0, x1);
        let cy = scale(p.species as f64, 30.0, 140.0, y1, y0);
        s.push_str(&format!(
            "<circle cx=\"{cx:.1}\" cy=\"{cy:.1}\" r=\"7\" fill=\"#22c55e\" fill-opacity=\"0.85\" stroke=\"#15803d\" stroke-width=\"1.5\"/>",
        ));
    }
    s.push_str(&format!(
        "<text x=\"276\" y=\"244\" text-anchor=\"middle\" font-size=\"10\" fill=\"{}\">Light Exposure (nW/cm²/sr)</text>",
        theme.axis
    ));
    s.push_str(&format!(
        "<text x=\"12\" y=\"107\" transform=\"rotate(-90, 12, 107)\" text-anchor=\"middle\" font-size=\"10\" fill=\"{}\">Species Count</text>",
        theme.axis
    ));
    s.push_str("</svg>");
    s
}

/// Dual area chart of mean richness and the light-pollution index,
/// 2014-2024, over a 40..95 axis.
fn trend_chart_svg(theme: &Theme, light: bool) -> String {
    let (x0, x1, y0, y1) = (46.0, 624.0, 12.0, 240.0);
    let rows = get_richness_light_vector();
    let rich_top = if light { 0.3 } else { 0.15 };
    let light_top = if light { 0.35 } else { 0.25 };
    let mut s = String::from(
        "<svg viewBox=\"0 0 640 280\" width=\"100%\" xmlns=\"http://www.w3.org/2000/svg\">",
    );
    s.push_str(&format!(
        "<defs>\
         <linearGradient id=\"richGrad\" x1=\"0\" y1=\"0\" x2=\"0\" y2=\"1\">\
         <stop offset=\"5%\" stop-color=\"#22c55e\" stop-opacity=\"{rich_top}\"/>\
         <stop offset=\"95%\" stop-color=\"#22c55e\" stop-opacity=\"0\"/>\
         </linearGradient>\
         <linearGradient id=\"lightGrad\" x1=\"0\" y1=\"0\" x2=\"0\" y2=\"1\">\
         <stop offset=\"5%\" stop-color=\"#ef4444\" stop-opacity=\"{light_top}\"/>\
         <stop offset=\"95%\" stop-color=\"#ef4444\" stop-opacity=\"0.05\"/>\
         </linearGradient>\
         </defs>",
    ));
    for t in axis_ticks(40.0, 95.0, 6) {
        let y = scale(t, 40.0, 95.0, y1, y0);
        s.push_str(&format!(
            "<line x1=\"{x0}\" y1=\"{y:.1}\" x2=\"{x1}\" y2=\"{y:.1}\" stroke=\"{}\" stroke-dasharray=\"3 3\"/>",
            theme.grid
        ));
        s.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" font-size=\"11\" fill=\"{}\">{}</text>",
            x0 - 6.0,
            y + 3.5,
            theme.axis,
            t
        ));
    }
    let mut rich_pts = Vec::with_capacity(rows.len());
    let mut light_pts = Vec::with_capacity(rows.len());
    for row in &rows {
        let x = scale(row.year as f64, 2014.0, 2024.0, x0, x1);
        s.push_str(&format!(
            "<line x1=\"{x:.1}\" y1=\"{y0}\" x2=\"{x:.1}\" y2=\"{y1}\" stroke=\"{}\" stroke-dasharray=\"3 3\"/>",
            theme.grid
        ));
        s.push_str(&format!(
            "<text x=\"{x:.1}\" y=\"258\" text-anchor=\"middle\" font-size=\"11\" fill=\"{}\">{}</text>",
            theme.axis, row.year
        ));
        rich_pts.push((x, scale(row.richness, 40.0, 95.0, y1, y0)));
        light_pts.push((x, scale(row.light_index, 40.0, 95.0, y1, y0)));
    }
    s.push_str(&format!(
        "<path d=\"{}\" fill=\"url(#richGrad)\"/>",
        area_path(&rich_pts, y1)
    ));
    s.push_str(&format!(
        "<path d=\"{}\" fill=\"url(#lightGrad)\"/>",
        area_path(&light_pts, y1)
    ));
    s.push_str(&format!(
        "<path d=\"{}\" fill=\"none\" stroke=\"#22c55e\" stroke-width=\"2\"/>",
        polyline_path(&rich_pts)
    ));
    s.push_str(&format!(
        "<path d=\"{}\" fill=\"none\" stroke=\"#ef4444\" stroke-width=\"2\"/>",
        polyline_path(&light_pts)
    ));
    for (x, y) in &rich_pts {
        s.push_str(&format!(
            "<circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"3\" fill=\"#22c55e\"/>"
        ));
    }
    for (x, y) in &light_pts {
        s.push_str(&format!(
            "<circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"3\" fill=\"#ef4444\"/>"
        ));
    }
    s.push_str("</svg>");
    s
}

/// Donut of category counts with white percentage labels. Labels under 4%
/// of the pool are suppressed; each slice gives up 3 degrees of padding.
fn donut_svg(slices: &[(f64, &str)]) -> String {
    let counts: Vec<f64> = slices.iter().map(|(v, _)| *v).collect();
    let total: f64 = counts.iter().sum();
    let angles = donut_angles(&counts);
    let pad = 3.0_f64.to_radians();
    let mut s = String::from(
        "<svg viewBox=\"0 0 280 280\" width=\"100%\" xmlns=\"http://www.w3.org/2000/svg\">",
    );
    for (i, (start, end)) in angles.iter().enumerate() {
        if end - start <= pad {
            continue;
        }
        s.push_str(&format!(
            "<path d=\"{}\" fill=\"{}\"/>",
            donut_segment(140.0, 140.0, 60.0, 100.0, start + pad / 2.0, end - pad / 2.0),
            slices[i].1
        ));
        let pct = if total > 0.0 { counts[i] / total } else { 0.0 };
        if pct >= 0.04 {
            let (lx, ly) = segment_label_at(140.0, 140.0, 60.0, 100.0, *start, *end);
            s.push_str(&format!(
                "<text x=\"{lx:.1}\" y=\"{ly:.1}\" text-anchor=\"middle\" dominant-baseline=\"central\" font-size=\"12\" font-weight=\"700\" fill=\"#fff\">{:.0}%</text>",
                pct * 100.0
            ));
        }
    }
    s.push_str("</svg>");
    s
}

/// Scatter of one year's normalized (light, richness) samples, one color
/// per monitored site, over a 0..1 x 0..1 grid.
fn lp_scatter_svg(theme: &Theme, samples: &[LightRichnessSample]) -> String {
    let (x0, x1, y0, y1) = (52.0, 610.0, 12.0, 290.0);
    let mut s = String::from(
        "<svg viewBox=\"0 0 640 360\" width=\"100%\" xmlns=\"http://www.w3.org/2000/svg\">",
    );
    for t in axis_ticks(0.0, 1.0, 11) {
        let x = scale(t, 0.0, 1.0, x0, x1);
        let y = scale(t, 0.0, 1.0, y1, y0);
        s.push_str(&format!(
            "<line x1=\"{x:.1}\" y1=\"{y0}\" x2=\"{x:.1}\" y2=\"{y1}\" stroke=\"{}\" stroke-dasharray=\"3 3\"/>",
            theme.grid
        ));
        s.push_str(&format!(
            "<line x1=\"{x0}\" y1=\"{y:.1}\" x2=\"{x1}\" y2=\"{y:.1}\" stroke=\"{}\" stroke-dasharray=\"3 3\"/>",
            theme.grid
        ));
        s.push_str(&format!(
            "<text x=\"{x:.1}\" y=\"306\" text-anchor=\"middle\" font-size=\"11\" fill=\"{}\">{}</text>",
            theme.axis, t
        ));
        s.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" font-size=\"11\" fill=\"{}\">{}</text>",
            x0 - 6.0,
            y + 3.5,
            theme.axis,
            t
        ));
    }
    for (i, sample) in samples.iter().enumerate() {
        let color = SITE_COLORS[i % SITE_COLORS.len()];
        let cx = scale(sample.light, 0.0, 1.0, x0, x1);
        let cy = scale(sample.richness, 0.0, 1.0, y1, y0);
        s.push_str(&format!(
            "<circle cx=\"{cx:.1}\" cy=\"{cy:.1}\" r=\"8\" fill=\"{color}\" fill-opacity=\"0.85\" stroke=\"{color}\" stroke-width=\"1\"/>",
        ));
    }
    s.push_str(&format!(
        "<text x=\"331\" y=\"334\" text-anchor=\"middle\" font-size=\"11\" fill=\"{}\">Avg Light Pollution (VIIRS radiance, nW/cm²/sr)</text>",
        theme.axis
    ));
    s.push_str(&format!(
        "<text x=\"14\" y=\"151\" transform=\"rotate(-90, 14, 151)\" text-anchor=\"middle\" font-size=\"11\" fill=\"{}\">Avg Unique Species Count (normalized)</text>",
        theme.axis
    ));
    s.push_str("</svg>");
    s
}

/// Horizontal top-20 site ranking for a year, bars tinted by light level.
fn ranking_chart_svg(theme: &Theme, year: i32) -> String {
    let ranked = site_richness_ranking(&get_site_light_exposure_vector(), year);
    let (x0, x1) = (166.0, 600.0);
    let band = 23.0;
    let rows_bottom = 6.0 + band * ranked.len() as f64;
    let mut s = String::from(
        "<svg viewBox=\"0 0 640 520\" width=\"100%\" xmlns=\"http://www.w3.org/2000/svg\">",
    );
    for t in axis_ticks(0.0, 1.0, 11) {
        let x = scale(t, 0.0, 1.0, x0, x1);
        s.push_str(&format!(
            "<line x1=\"{x:.1}\" y1=\"6\" x2=\"{x:.1}\" y2=\"{rows_bottom:.1}\" stroke=\"{}\" stroke-dasharray=\"3 3\"/>",
            theme.grid
        ));
        s.push_str(&format!(
            "<text x=\"{x:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"11\" fill=\"{}\">{}</text>",
            rows_bottom + 18.0,
            theme.axis,
            t
        ));
    }
    for (i, row) in ranked.iter().enumerate() {
        let band_y = 6.0 + band * i as f64;
        let w = scale(row.richness, 0.0, 1.0, 0.0, x1 - x0);
        s.push_str(&format!(
            "<rect x=\"{x0}\" y=\"{:.1}\" width=\"{w:.1}\" height=\"14\" rx=\"3\" fill=\"{}\"/>",
            band_y + 4.5,
            light_level_color(&row.light_level)
        ));
        s.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" font-size=\"10\" fill=\"{}\">{}</text>",
            x0 - 6.0,
            band_y + 15.0,
            theme.axis,
            row.site
        ));
    }
    s.push_str(&format!(
        "<text x=\"383\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"11\" fill=\"{}\">Avg Unique Species Count</text>",
        rows_bottom + 42.0,
        theme.axis
    ));
    s.push_str("</svg>");
    s
}

#[component]
pub fn Reports() -> Element {
    let state = use_context::<AppState>();
    let light = (state.light_mode)();
    let theme = Theme::from_mode(light);

    let mut tol_year = use_signal(|| FIRST_YEAR);
    let mut lp_year = use_signal(|| FIRST_YEAR);
    let mut ps_year = use_signal(|| FIRST_YEAR);
    let geojson_status = use_signal(DownloadStatus::default);
    let pdf_status = use_signal(DownloadStatus::default);
    let csv_status = use_signal(DownloadStatus::default);

    let panel = format!(
        "background: {}; border: 1px solid {}; border-radius: 12px; padding: 20px;",
        theme.panel_bg, theme.panel_border
    );
    let heading_style = format!(
        "margin: 0 0 16px 0; font-size: 13px; font-weight: 700; color: {};",
        theme.heading
    );
    let csv_badge = csv_badge_colors(light);
    let json_badge = json_badge_colors(light);
    let cyan = if light { "#0e7490" } else { "#22d3ee" };
    let progress_bg = if light { "#e5e7eb" } else { "#1e2538" };

    let tol_rows = get_tolerance_migration_vector();
    let tol_year_now = tol_year();
    let tol_idx = ((tol_year_now - FIRST_YEAR).max(0) as usize).min(tol_rows.len() - 1);
    let tol_row = tol_rows[tol_idx].clone();
    let tol_pool = tol_row.tolerant + tol_row.sensitive;
    let mig_pool = tol_row.resident + tol_row.migratory;
    let tolerant_pct = tol_row.tolerant as f64 / tol_pool as f64 * 100.0;
    let resident_pct = tol_row.resident as f64 / mig_pool as f64 * 100.0;

    let lp_year_now = lp_year();
    let lp_samples: Vec<LightRichnessSample> = get_light_vs_richness_vector()
        .into_iter()
        .filter(|r| r.year == lp_year_now)
        .collect();
    let ps_year_now = ps_year();

    let corr_svg = correlation_chart_svg(&theme, light);
    let dist_svg = distribution_chart_svg(&theme);
    let expo_svg = exposure_scatter_svg(&theme);
    let trend_svg = trend_chart_svg(&theme, light);
    let tol_donut = donut_svg(&[
        (tol_row.tolerant as f64, "#22c55e"),
        (tol_row.sensitive as f64, "#ef4444"),
    ]);
    let mig_donut = donut_svg(&[
        (tol_row.resident as f64, "#3b82f6"),
        (tol_row.migratory as f64, "#f59e0b"),
    ]);
    let lp_svg = lp_scatter_svg(&theme, &lp_samples);
    let ranking_svg = ranking_chart_svg(&theme, ps_year_now);

    rsx! {
        div {
            style: "min-height: 100%; padding: 24px; background: {theme.page_bg}; color: {theme.text}; box-sizing: border-box; display: flex; flex-direction: column; gap: 20px;",

            div {
                h1 {
                    style: "margin: 0; font-size: 20px; font-weight: 700; color: {theme.heading};",
                    "Statistical Reports & Data Visualization"
                }
                p {
                    style: "margin: 4px 0 0 0; font-size: 13px; color: {theme.text_muted};",
                    "Comprehensive analysis and export capabilities"
                }
            }

            // Simulated exports
            div {
                style: "{panel}",
                p { style: "{heading_style}", "Export Data" }
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 20px;",
                    DownloadButton {
                        label: "Download GeoJSON".to_string(),
                        color: "#2563eb".to_string(),
                        status: geojson_status(),
                        on_click: move |_| run_download(geojson_status),
                    }
                    DownloadButton {
                        label: "Download PDF Report".to_string(),
                        color: "#dc2626".to_string(),
                        status: pdf_status(),
                        on_click: move |_| run_download(pdf_status),
                    }
                    DownloadButton {
                        label: "Export CSV Data".to_string(),
                        color: "#7c3aed".to_string(),
                        status: csv_status(),
                        on_click: move |_| run_download(csv_status),
                    }
                }
            }

            // Correlation matrix
            div {
                style: "{panel}",
                p { style: "{heading_style}", "Environmental Feature Correlation Matrix" }
                div { dangerous_inner_html: "{corr_svg}" }
                div {
                    style: "display: flex; flex-wrap: wrap; align-items: center; gap: 16px; margin-top: 12px;",
                    for (color, label) in [
                        ("#22c55e", "Strong positive (> 0.5)"),
                        ("#86efac", "Positive (0 – 0.5)"),
                        ("#eab308", "Negative (−0.5 – 0)"),
                        ("#ef4444", "Strong negative (< −0.5)"),
                    ] {
                        div {
                            style: "display: flex; align-items: center; gap: 6px;",
                            span { style: "width: 12px; height: 12px; border-radius: 2px; background: {color};" }
                            span { style: "font-size: 11px; color: {theme.text_muted};", "{label}" }
                        }
                    }
                }
                p {
                    style: "margin: 12px 0 0 0; font-size: 11px; color: {theme.text_muted};",
                    span { style: "font-weight: 600; color: {theme.heading};", "Interpretation: " }
                    "Light intensity shows strong negative correlation (−0.72) with species count; NDVI shows strong positive correlation (0.68)."
                }
            }

            // KBA/PA audit
            div {
                style: "{panel}",
                div {
                    style: "display: flex; align-items: center; gap: 12px; margin-bottom: 16px;",
                    span { style: "font-size: 13px; font-weight: 700; color: {theme.heading};", "KBA/PA Performance Audit" }
                    Badge {
                        text: "▪ Sample JSON".to_string(),
                        color: json_badge.0.to_string(),
                        background: json_badge.1.to_string(),
                        border: json_badge.2.to_string(),
                    }
                }
                div {
                    style: "overflow-x: auto;",
                    table {
                        style: "width: 100%; border-collapse: collapse;",
                        thead {
                            tr {
                                for header in ["Rank", "Area Name", "Type", "Light Exposure", "Species Count", "Sensitive Species %", "Effectiveness Score", "Grade"] {
                                    th {
                                        style: "text-align: left; padding: 0 16px 12px 0; white-space: nowrap; font-size: 11px; font-weight: 600; color: {theme.text_muted};",
                                        "{header}"
                                    }
                                }
                            }
                        }
                        tbody {
                            for (i, row) in KBA_AUDIT.iter().enumerate() {
                                {
                                    let row_bg = if i % 2 == 0 { theme.row_alt } else { "transparent" };
                                    let kind = kind_badge_colors(row.kind, light);
                                    let grade = grade_colors(row.grade, light);
                                    rsx! {
                                        tr {
                                            style: "background: {row_bg};",
                                            td { style: "padding: 12px 16px 12px 0; font-size: 13px; font-weight: 700; color: {theme.heading};", "{row.rank}" }
                                            td {
                                                style: "padding: 12px 24px 12px 0;",
                                                span { style: "font-size: 13px; font-weight: 600; color: {cyan};", "{row.name}" }
                                            }
                                            td {
                                                style: "padding: 12px 16px 12px 0;",
                                                Badge {
                                                    text: row.kind.to_string(),
                                                    color: kind.0.to_string(),
                                                    background: kind.1.to_string(),
                                                    border: kind.2.to_string(),
                                                }
                                            }
                                            td { style: "padding: 12px 16px 12px 0; font-size: 13px; color: {theme.text_muted};", "{row.light}" }
                                            td { style: "padding: 12px 16px 12px 0; font-size: 13px; color: {theme.text_muted};", "{row.species}" }
                                            td { style: "padding: 12px 16px 12px 0; font-size: 13px; color: {theme.text_muted};", "{row.sensitive_pct}%" }
                                            td {
                                                style: "padding: 12px 16px 12px 0; min-width: 140px;",
                                                div {
                                                    style: "width: 100%; height: 8px; border-radius: 9999px; overflow: hidden; background: {progress_bg};",
                                                    div { style: "height: 100%; border-radius: 9999px; background: #3b82f6; width: {row.score}%;" }
                                                }
                                                span { style: "display: block; margin-top: 4px; font-size: 11px; color: {theme.text_muted};", "{row.score}%" }
                                            }
                                            td {
                                                style: "padding: 12px 0;",
                                                span {
                                                    style: "display: inline-flex; align-items: center; justify-content: center; width: 28px; height: 28px; border-radius: 50%; font-size: 11px; font-weight: 700; color: {grade.0}; background: {grade.1}; border: 1px solid {grade.2};",
                                                    "{row.grade}"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                div {
                    style: "margin-top: 16px; padding-top: 16px; border-top: 1px solid {theme.divider};",
                    p { style: "margin: 0 0 8px 0; font-size: 11px; font-weight: 700; color: {theme.heading};", "Audit Criteria:" }
                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 8px 16px;",
                        for (grade_label, grade_key, description) in [
                            ("Grade A (80–100)", "A", "Excellent — low light exposure, high diversity"),
                            ("Grade B (70–79)", "B", "Good — moderate effectiveness"),
                            ("Grade C (60–69)", "C", "Fair — needs improvement"),
                            ("Grade D (<60)", "D", "Poor — urgent intervention required"),
                        ] {
                            {
                                let chip = grade_colors(grade_key, light);
                                rsx! {
                                    div {
                                        style: "display: flex; align-items: center; gap: 8px;",
                                        Badge {
                                            text: grade_label.to_string(),
                                            color: chip.0.to_string(),
                                            background: chip.1.to_string(),
                                            border: chip.2.to_string(),
                                        }
                                        span { style: "font-size: 11px; color: {theme.text_muted};", "{description}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            // Distribution + exposure scatter, side by side
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(340px, 1fr)); gap: 20px;",
                div {
                    style: "{panel}",
                    div {
                        style: "display: flex; align-items: center; gap: 12px; margin-bottom: 16px;",
                        span { style: "font-size: 13px; font-weight: 700; color: {theme.heading};", "Species Distribution by Area" }
                        Badge {
                            text: "▪ Sample JSON".to_string(),
                            color: json_badge.0.to_string(),
                            background: json_badge.1.to_string(),
                            border: json_badge.2.to_string(),
                        }
                    }
                    div { dangerous_inner_html: "{dist_svg}" }
                }
                div {
                    style: "{panel}",
                    div {
                        style: "display: flex; align-items: center; gap: 12px; margin-bottom: 16px;",
                        span { style: "font-size: 13px; font-weight: 700; color: {theme.heading};", "Light Exposure vs Species Count" }
                        Badge {
                            text: "▪ Sample JSON".to_string(),
                            color: json_badge.0.to_string(),
                            background: json_badge.1.to_string(),
                            border: json_badge.2.to_string(),
                        }
                    }
                    div { dangerous_inner_html: "{expo_svg}" }
                }
            }

            // Historical trends
            div {
                style: "{panel}",
                p { style: "{heading_style}", "Historical Trends (2014–2024)" }
                div { dangerous_inner_html: "{trend_svg}" }
                div {
                    style: "display: flex; justify-content: center; gap: 20px; margin-top: 8px;",
                    for (color, label) in [("#22c55e", "Average Species Richness"), ("#ef4444", "Light Pollution Index")] {
                        div {
                            style: "display: flex; align-items: center; gap: 6px;",
                            span { style: "width: 12px; height: 12px; border-radius: 2px; background: {color};" }
                            span { style: "font-size: 11px; color: {theme.axis};", "{label}" }
                        }
                    }
                }
            }

            // Tolerance and migration donuts
            div {
                style: "{panel}",
                div {
                    style: "display: flex; align-items: center; justify-content: space-between; flex-wrap: wrap; gap: 12px; margin-bottom: 20px;",
                    div {
                        style: "display: flex; align-items: center; gap: 12px; flex-wrap: wrap;",
                        span { style: "font-size: 13px; font-weight: 700; color: {theme.heading};", "Distribution of Light Tolerance & Migration Status" }
                        Badge {
                            text: "▪ CSV Dataset".to_string(),
                            color: csv_badge.0.to_string(),
                            background: csv_badge.1.to_string(),
                            border: csv_badge.2.to_string(),
                        }
                    }
                    YearSelect {
                        value: tol_year_now,
                        on_change: move |y| tol_year.set(y),
                        label: "Year:".to_string(),
                    }
                }
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 24px;",
                    div {
                        p { style: "margin: 0 0 4px 0; text-align: center; font-size: 13px; font-weight: 600; color: {theme.heading};", "Light Tolerance — {tol_year_now}" }
                        div {
                            style: "max-width: 280px; margin: 0 auto;",
                            dangerous_inner_html: "{tol_donut}",
                        }
                        div {
                            style: "display: flex; justify-content: center; gap: 24px; margin-top: 8px;",
                            for (color, label, value) in [("#22c55e", "Tolerant", tol_row.tolerant), ("#ef4444", "Sensitive", tol_row.sensitive)] {
                                div {
                                    style: "display: flex; align-items: center; gap: 6px;",
                                    span { style: "width: 12px; height: 12px; border-radius: 2px; background: {color};" }
                                    span {
                                        style: "font-size: 11px; color: {theme.text_muted};",
                                        "{label}: "
                                        span { style: "font-weight: 600; color: {theme.heading};", "{value}" }
                                    }
                                }
                            }
                        }
                        p {
                            style: "margin: 4px 0 0 0; text-align: center; font-size: 11px; color: {theme.text_muted};",
                            {format!("Total: {} · {:.1}% tolerant", tol_pool, tolerant_pct)}
                        }
                    }
                    div {
                        p { style: "margin: 0 0 4px 0; text-align: center; font-size: 13px; font-weight: 600; color: {theme.heading};", "Migration Status — {tol_year_now}" }
                        div {
                            style: "max-width: 280px; margin: 0 auto;",
                            dangerous_inner_html: "{mig_donut}",
                        }
                        div {
                            style: "display: flex; justify-content: center; gap: 24px; margin-top: 8px;",
                            for (color, label, value) in [("#3b82f6", "Resident", tol_row.resident), ("#f59e0b", "Migratory", tol_row.migratory)] {
                                div {
                                    style: "display: flex; align-items: center; gap: 6px;",
                                    span { style: "width: 12px; height: 12px; border-radius: 2px; background: {color};" }
                                    span {
                                        style: "font-size: 11px; color: {theme.text_muted};",
                                        "{label}: "
                                        span { style: "font-weight: 600; color: {theme.heading};", "{value}" }
                                    }
                                }
                            }
                        }
                        p {
                            style: "margin: 4px 0 0 0; text-align: center; font-size: 11px; color: {theme.text_muted};",
                            {format!("Total: {} · {:.1}% resident", mig_pool, resident_pct)}
                        }
                    }
                }
            }

            // Light pollution vs richness scatter
            div {
                style: "{panel}",
                div {
                    style: "display: flex; align-items: center; justify-content: space-between; flex-wrap: wrap; gap: 12px; margin-bottom: 16px;",
                    div {
                        style: "display: flex; align-items: center; gap: 12px; flex-wrap: wrap;",
                        span { style: "font-size: 13px; font-weight: 700; color: {theme.heading};", "Light Pollution vs Bird Richness" }
                        Badge {
                            text: "▪ CSV Dataset".to_string(),
                            color: csv_badge.0.to_string(),
                            background: csv_badge.1.to_string(),
                            border: csv_badge.2.to_string(),
                        }
                    }
                    YearSelect {
                        value: lp_year_now,
                        on_change: move |y| lp_year.set(y),
                        label: "Year:".to_string(),
                    }
                }
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 12px; margin-bottom: 12px;",
                    for (i, sample) in lp_samples.iter().enumerate() {
                        {
                            let color = SITE_COLORS[i % SITE_COLORS.len()];
                            rsx! {
                                div {
                                    style: "display: flex; align-items: center; gap: 6px;",
                                    span { style: "width: 12px; height: 12px; border-radius: 50%; background: {color};" }
                                    span { style: "font-size: 11px; color: {theme.text_muted};", "{sample.site}" }
                                }
                            }
                        }
                    }
                }
                div { dangerous_inner_html: "{lp_svg}" }
                p {
                    style: "margin: 16px 0 0 0; font-size: 11px; color: {theme.text_muted};",
                    span { style: "font-weight: 600; color: {theme.heading};", "Interpretation: " }
                    "Sites with lower normalized light pollution sustain higher bird species richness. Select a year to track annual shifts."
                }
            }

            // Per-site ranking
            div {
                style: "{panel}",
                div {
                    style: "display: flex; align-items: center; justify-content: space-between; flex-wrap: wrap; gap: 12px; margin-bottom: 16px;",
                    div {
                        style: "display: flex; align-items: center; gap: 12px; flex-wrap: wrap;",
                        span {
                            style: "font-size: 13px; font-weight: 700; color: {theme.heading};",
                            "Per Site Bird Richness — Top 20 Sites ({ps_year_now})"
                        }
                        Badge {
                            text: "▪ CSV Dataset".to_string(),
                            color: csv_badge.0.to_string(),
                            background: csv_badge.1.to_string(),
                            border: csv_badge.2.to_string(),
                        }
                    }
                    YearSelect {
                        value: ps_year_now,
                        on_change: move |y| ps_year.set(y),
                        label: "Year:".to_string(),
                    }
                }
                div { dangerous_inner_html: "{ranking_svg}" }
                div {
                    style: "display: flex; flex-wrap: wrap; align-items: center; gap: 20px; margin-top: 8px;",
                    for (level, range) in [("Low", "<15 nW/cm²/sr"), ("Moderate", "15–35 nW/cm²/sr"), ("High", ">35 nW/cm²/sr")] {
                        {
                            let color = light_level_color(level);
                            rsx! {
                                div {
                                    style: "display: flex; align-items: center; gap: 6px;",
                                    span { style: "width: 12px; height: 12px; border-radius: 2px; background: {color};" }
                                    span {
                                        style: "font-size: 11px; color: {theme.text_muted};",
                                        span { style: "font-weight: 600; color: {color};", "{level} light" }
                                        " ({range})"
                                    }
                                }
                            }
                        }
                    }
                }
                p {
                    style: "margin: 12px 0 0 0; font-size: 11px; color: {theme.text_muted};",
                    span { style: "font-weight: 600; color: {theme.heading};", "Note: " }
                    {format!("Average unique species count per observation site based on {} field data. Green areas such as La Mesa Eco Park and wetland parks show the highest bird species richness.", ps_year_now)}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correlation_chart_draws_one_bar_per_coefficient() {
        let svg = correlation_chart_svg(&Theme::from_mode(false), false);
        assert_eq!(svg.matches("<rect").count(), CORRELATION_MATRIX.len());
        // strong negative light coefficient gets the red bucket
        assert!(svg.contains("#ef4444"));
        assert!(svg.contains("Correlation Coefficient"));
    }

    #[test]
    fn donut_labels_skip_slivers() {
        let svg = donut_svg(&[(97.0, "#22c55e"), (3.0, "#ef4444")]);
        assert!(svg.contains(">97%<"));
        assert!(!svg.contains(">3%<"));
        // both slices still drawn
        assert_eq!(svg.matches("<path").count(), 2);
    }

    #[test]
    fn donut_splits_an_even_pool_in_half() {
        let svg = donut_svg(&[(50.0, "#3b82f6"), (50.0, "#f59e0b")]);
        assert_eq!(svg.matches(">50%<").count(), 2);
    }

    #[test]
    fn ranking_chart_covers_all_twenty_sites() {
        let svg = ranking_chart_svg(&Theme::from_mode(true), 2024);
        assert_eq!(svg.matches("<rect").count(), 20);
        assert!(svg.contains("La Mesa Eco Park"));
    }

    #[test]
    fn lp_scatter_plots_one_circle_per_site() {
        let samples: Vec<LightRichnessSample> = get_light_vs_richness_vector()
            .into_iter()
            .filter(|r| r.year == 2014)
            .collect();
        let svg = lp_scatter_svg(&Theme::from_mode(false), &samples);
        assert_eq!(svg.matches("r=\"8\"").count(), 5);
    }
}
