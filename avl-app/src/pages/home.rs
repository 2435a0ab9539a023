//! Home page: executive summary of the monitoring program.

use avl_dataset::constants::{ANNOUNCEMENTS, MONITORED_AREAS};
use avl_ui::components::{Badge, StatCard};
use avl_ui::state::AppState;
use avl_ui::theme::Theme;
use dioxus::prelude::*;

/// Chip tint for a VIIRS radiance reading.
fn light_chip(value: f64) -> (&'static str, &'static str, &'static str) {
    if value < 30.0 {
        ("#4ade80", "rgba(34,197,94,0.2)", "rgba(34,197,94,0.3)")
    } else if value < 40.0 {
        ("#facc15", "rgba(234,179,8,0.2)", "rgba(234,179,8,0.3)")
    } else {
        ("#fb923c", "rgba(249,115,22,0.2)", "rgba(249,115,22,0.3)")
    }
}

fn status_color(status: &str, light: bool) -> &'static str {
    match status {
        "Protected" => {
            if light {
                "#16a34a"
            } else {
                "#4ade80"
            }
        }
        "Partially Protected" => {
            if light {
                "#ca8a04"
            } else {
                "#facc15"
            }
        }
        _ => {
            if light {
                "#dc2626"
            } else {
                "#f87171"
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let light = (state.light_mode)();
    let theme = Theme::from_mode(light);

    rsx! {
        div {
            style: "padding: 24px; max-width: 1400px; margin: 0 auto; width: 100%; box-sizing: border-box;",

            div {
                style: "margin-bottom: 16px;",
                h1 {
                    style: "margin: 0; font-size: 24px; font-weight: 700; color: {theme.heading};",
                    "Home — Executive Summary"
                }
                p {
                    style: "margin: 4px 0 0 0; font-size: 13px; color: {theme.text_muted};",
                    "Overview of AVILIGHT monitoring status for Metro Manila. Latest data came from datasets last updated in 2024."
                }
            }

            // Dataset period banner
            div {
                style: "margin-bottom: 24px; display: flex; align-items: flex-start; gap: 12px; background: #1a3a4a; border: 1px solid rgba(14,116,144,0.4); border-radius: 8px; padding: 12px 16px;",
                span {
                    style: "margin-top: 4px; width: 10px; height: 10px; border-radius: 2px; background: #22d3ee; flex-shrink: 0;",
                }
                p {
                    style: "margin: 0; font-size: 13px; color: #67e8f9;",
                    span {
                        style: "font-weight: 600;",
                        "Dataset Period: 2014 – 2024 | Monitoring Status: 2014 – 2024"
                    }
                    span {
                        style: "color: rgba(34,211,238,0.7);",
                        " — All metrics, readings, and site analyses displayed are derived from historical datasets that was last updated in 2024."
                    }
                }
            }

            // Stat cards
            div {
                style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px; margin-bottom: 24px;",
                StatCard {
                    label: "Total Species Tracked".to_string(),
                    value: "757".to_string(),
                    detail: "Unique bird species in the current database".to_string(),
                }
                StatCard {
                    label: "Current Light Risk Level".to_string(),
                    value: "Medium".to_string(),
                    detail: "Metro Manila avg. VIIRS radiance: 36 nW/cm²/sr".to_string(),
                    dot_color: "#facc15".to_string(),
                }
                StatCard {
                    label: "KBAs Monitored".to_string(),
                    value: "3".to_string(),
                    detail: "Key Biodiversity Areas currently covered".to_string(),
                }
                StatCard {
                    label: "Protected Areas Monitored".to_string(),
                    value: "2".to_string(),
                    detail: "Protected Areas currently covered".to_string(),
                }
            }

            div {
                style: "display: grid; grid-template-columns: 2fr 1fr; gap: 16px;",

                // KBA / PA monitoring table
                div {
                    style: "background: {theme.card_bg}; border: 1px solid {theme.card_border}; border-radius: 8px; overflow: hidden;",
                    div {
                        style: "padding: 12px 16px; border-bottom: 1px solid {theme.card_border};",
                        h2 {
                            style: "margin: 0; font-size: 13px; font-weight: 600; color: {theme.heading};",
                            "KBA / PA Monitoring Status "
                            span {
                                style: "font-size: 11px; font-weight: 400; color: {theme.text_muted};",
                                "(2014 – 2024)"
                            }
                        }
                    }
                    table {
                        style: "width: 100%; border-collapse: collapse; font-size: 13px;",
                        thead {
                            tr {
                                style: "color: {theme.text_faint}; border-bottom: 1px solid {theme.card_border};",
                                th { style: "text-align: left; padding: 10px 16px; font-size: 11px; font-weight: 500;", "Site Name" }
                                th { style: "text-align: left; padding: 10px 12px; font-size: 11px; font-weight: 500;", "Type" }
                                th { style: "text-align: left; padding: 10px 12px; font-size: 11px; font-weight: 500;", "Species" }
                                th { style: "text-align: left; padding: 10px 12px; font-size: 11px; font-weight: 500;", "Light Exposure" }
                                th { style: "text-align: left; padding: 10px 12px; font-size: 11px; font-weight: 500;", "Status" }
                            }
                        }
                        tbody {
                            for area in MONITORED_AREAS {
                                {
                                    let (chip_fg, chip_bg, chip_border) = light_chip(area.light_exposure);
                                    let kind_bg = if area.kind == "KBA" { "#14b8a6" } else { "#3b82f6" };
                                    rsx! {
                                        tr {
                                            key: "{area.name}",
                                            style: "border-bottom: 1px solid {theme.divider};",
                                            td { style: "padding: 12px 16px; color: {theme.heading};", "{area.name}" }
                                            td {
                                                style: "padding: 12px;",
                                                Badge {
                                                    text: area.kind.to_string(),
                                                    color: "#ffffff".to_string(),
                                                    background: kind_bg.to_string(),
                                                }
                                            }
                                            td { style: "padding: 12px; color: {theme.text_muted};", "{area.species}" }
                                            td {
                                                style: "padding: 12px;",
                                                Badge {
                                                    text: format!("{} nW", area.light_exposure),
                                                    color: chip_fg.to_string(),
                                                    background: chip_bg.to_string(),
                                                    border: chip_border.to_string(),
                                                }
                                            }
                                            td {
                                                style: "padding: 12px;",
                                                color: status_color(area.status, light),
                                                "{area.status}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                // DENR-BMB announcements
                div {
                    style: "background: {theme.card_bg}; border: 1px solid {theme.card_border}; border-radius: 8px; overflow: hidden;",
                    div {
                        style: "display: flex; align-items: center; justify-content: space-between; padding: 12px 16px; border-bottom: 1px solid {theme.card_border};",
                        h2 {
                            style: "margin: 0; font-size: 13px; font-weight: 600; color: {theme.heading};",
                            "DENR-BMB Announcements"
                        }
                        button {
                            style: "border: none; background: transparent; font-size: 11px; color: {theme.accent}; cursor: pointer;",
                            "View All ›"
                        }
                    }
                    div {
                        style: "padding: 16px;",
                        div {
                            style: if light {
                                "border-radius: 8px; padding: 16px; background: #eff6ff; border: 1px solid #bfdbfe;"
                            } else {
                                "border-radius: 8px; padding: 16px; background: #1a2a3a; border: 1px solid rgba(29,78,216,0.3);"
                            },
                            div {
                                style: "margin-bottom: 8px;",
                                Badge {
                                    text: "Info".to_string(),
                                    color: if light { "#1d4ed8".to_string() } else { "#60a5fa".to_string() },
                                    background: if light { "#dbeafe".to_string() } else { "rgba(59,130,246,0.2)".to_string() },
                                }
                            }
                            p {
                                style: "margin: 0 0 4px 0; font-size: 13px; font-weight: 600; color: {theme.heading};",
                                "DENR-BMB FAPS – Recent Announcements"
                            }
                            p {
                                style: "margin: 0; font-size: 11px; color: {theme.text_muted};",
                                "Live announcements could not be loaded at this time. Visit the DENR-BMB FAPS portal for the latest updates."
                            }
                            a {
                                href: "#",
                                style: "display: inline-flex; align-items: center; gap: 4px; margin-top: 12px; font-size: 11px; text-decoration: none; color: {theme.accent};",
                                "Visit Portal ↗"
                            }
                        }
                        div {
                            style: "margin-top: 16px; display: flex; flex-direction: column; gap: 12px;",
                            for item in ANNOUNCEMENTS {
                                div {
                                    key: "{item.title}",
                                    style: "display: flex; align-items: flex-start; gap: 12px; padding: 12px; border-radius: 8px; cursor: pointer; border: 1px solid {theme.divider};",
                                    span {
                                        style: "margin-top: 2px; color: {theme.text_muted}; font-size: 12px;",
                                        "•"
                                    }
                                    div {
                                        style: "min-width: 0;",
                                        p {
                                            style: "margin: 0; font-size: 11px; font-weight: 500; color: {theme.heading}; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                                            "{item.title}"
                                        }
                                        div {
                                            style: "display: flex; align-items: center; gap: 8px; margin-top: 2px;",
                                            span {
                                                style: if light {
                                                    "font-size: 10px; padding: 1px 6px; border-radius: 4px; background: #f3f4f6; color: #6b7280;"
                                                } else {
                                                    "font-size: 10px; padding: 1px 6px; border-radius: 4px; background: rgba(255,255,255,0.1); color: #6b7280;"
                                                },
                                                "{item.tag}"
                                            }
                                            span {
                                                style: "font-size: 11px; color: {theme.text_muted};",
                                                "{item.date}"
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
