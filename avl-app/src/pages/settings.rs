//! Admin & staff controls: simulated observation/model ingestion, the
//! satellite fetch triggers, threshold configuration and the monitoring
//! tables. Every action resolves locally and reports through the corner
//! toast; nothing leaves the browser.

use avl_dataset::constants::{ACCESS_LOGS, MODEL_VERSIONS, SYSTEM_HEALTH, VALIDATION_LOGS};
use avl_ui::components::Toast;
use avl_ui::js_bridge::sleep_ms;
use avl_ui::state::AppState;
use avl_ui::theme::Theme;
use dioxus::html::HasFileData;
use dioxus::prelude::*;

/// Shows `message` in the corner toast and clears it 2.6 s later.
fn show_toast(mut toast: Signal<Option<String>>, message: String) {
    toast.set(Some(message));
    spawn(async move {
        sleep_ms(2600).await;
        toast.set(None);
    });
}

/// (background, text) for a validation-log type chip.
fn kind_pill(kind: &str) -> (&'static str, &'static str) {
    match kind {
        "Spatial" => ("rgba(217,119,6,0.2)", "#fcd34d"),
        "Format" => ("rgba(99,102,241,0.2)", "#a5b4fc"),
        _ => ("rgba(234,179,8,0.2)", "#fde047"),
    }
}

/// (background, text) for a validation-log status chip.
fn status_pill(status: &str) -> (&'static str, &'static str) {
    match status {
        "Rejected" => ("rgba(220,38,38,0.2)", "#f87171"),
        _ => ("rgba(5,150,105,0.2)", "#34d399"),
    }
}

fn version_status_color(status: &str) -> &'static str {
    match status {
        "Active" => "#34d399",
        "Backup" => "#60a5fa",
        _ => "#9ca3af",
    }
}

/// (background, text) for a system-health value pill.
fn health_pill(tone: &str, light: bool) -> (&'static str, &'static str) {
    match (tone, light) {
        ("success", true) => ("#ecfdf5", "#047857"),
        ("success", false) => ("rgba(5,150,105,0.2)", "#6ee7b7"),
        ("warning", true) => ("#fffbeb", "#b45309"),
        ("warning", false) => ("rgba(245,158,11,0.2)", "#fcd34d"),
        (_, true) => ("#eff6ff", "#1d4ed8"),
        (_, false) => ("rgba(59,130,246,0.2)", "#93c5fd"),
    }
}

/// Hidden file input behind a "Choose File" chip, reporting only the
/// picked file's name. The file itself is never read.
#[component]
fn FilePicker(
    light: bool,
    file_name: Option<String>,
    #[props(default = String::new())] accept: String,
    on_pick: EventHandler<String>,
) -> Element {
    let box_style = if light {
        "background: #f9fafb; border: 1px solid #d1d5db;"
    } else {
        "background: #141824; border: 1px solid #2a2f42;"
    };
    let chip_style = if light {
        "background: #ffffff; border: 1px solid #d1d5db; color: #1f2937;"
    } else {
        "background: #1e2538; border: 1px solid #2a2f42; color: #e5e7eb;"
    };
    let muted = if light { "#6b7280" } else { "#9ca3af" };
    let shown = file_name.unwrap_or_else(|| "No file chosen".to_string());

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 12px; padding: 8px 12px; border-radius: 8px; {box_style}",
            label {
                style: "display: inline-flex; align-items: center; gap: 8px; padding: 6px 12px; border-radius: 6px; font-size: 12px; cursor: pointer; flex-shrink: 0; {chip_style}",
                "Choose File"
                input {
                    r#type: "file",
                    accept: "{accept}",
                    style: "display: none;",
                    onchange: move |evt| {
                        if let Some(file) = evt.files().first() {
                            on_pick.call(file.name());
                        }
                    },
                }
            }
            span {
                style: "font-size: 12px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; color: {muted};",
                "{shown}"
            }
        }
    }
}

#[component]
pub fn Settings() -> Element {
    let state = use_context::<AppState>();
    let light = (state.light_mode)();
    let theme = Theme::from_mode(light);

    let toast = use_signal(|| None::<String>);
    let mut observation_file = use_signal(|| None::<String>);
    let mut model_file = use_signal(|| None::<String>);
    let mut spatial_checks_ready = use_signal(|| false);

    let observation_now = observation_file();
    let model_now = model_file();
    let toast_now = toast();
    let checks_ready = spatial_checks_ready();

    let card = if light {
        "background: #ffffff; border: 1px solid #e5e7eb;"
    } else {
        "background: #1e2538; border: 1px solid #2a2f42;"
    };
    let sub_panel = if light {
        "background: #f9fafb; border: 1px solid #e5e7eb;"
    } else {
        "background: #141824; border: 1px solid #2a2f42;"
    };
    let sub_bg = if light { "#f9fafb" } else { "#141824" };
    let input_style = if light {
        "background: #f9fafb; border: 1px solid #d1d5db; color: #1f2937;"
    } else {
        "background: #141824; border: 1px solid #2a2f42; color: #e5e7eb;"
    };
    let modis_dot = if light { "#16a34a" } else { "#34d399" };
    let h3_style = format!(
        "margin: 0; font-size: 11px; font-weight: 600; text-transform: uppercase; letter-spacing: 0.05em; color: {};",
        theme.text_muted
    );
    let label_style = format!(
        "display: block; font-size: 12px; margin-bottom: 4px; color: {};",
        theme.text_muted
    );
    let field_style = format!(
        "width: 100%; box-sizing: border-box; border-radius: 8px; padding: 8px 12px; font-size: 13px; outline: none; {input_style}"
    );
    let blue_btn = "display: inline-flex; align-items: center; gap: 8px; padding: 8px 16px; \
                    border-radius: 6px; border: none; background: #2563eb; color: #ffffff; \
                    font-size: 12px; font-weight: 500; cursor: pointer;";
    let small_btn = "display: inline-flex; align-items: center; gap: 8px; padding: 6px 12px; \
                     border-radius: 6px; border: none; background: #2563eb; color: #ffffff; \
                     font-size: 12px; font-weight: 500; cursor: pointer;";
    let th_style = format!(
        "text-align: left; padding: 8px 12px; font-weight: 500; color: {};",
        theme.text_muted
    );
    let switch_btn = if light {
        "padding: 4px 8px; border-radius: 6px; font-size: 10px; cursor: pointer; background: none; border: 1px solid #d1d5db; color: #374151;"
    } else {
        "padding: 4px 8px; border-radius: 6px; font-size: 10px; cursor: pointer; background: none; border: 1px solid #2a2f42; color: #d1d5db;"
    };

    rsx! {
        div {
            style: "padding: 24px; max-width: 1400px; margin: 0 auto;",
            div {
                style: "margin-bottom: 24px;",
                h1 {
                    style: "margin: 0; font-size: 24px; font-weight: 700; color: {theme.heading};",
                    "Admin & Staff Controls"
                }
                p {
                    style: "margin: 4px 0 0 0; font-size: 14px; color: {theme.text_muted};",
                    "Data management, model configuration, and system monitoring."
                }
            }

            div {
                style: "display: flex; flex-direction: column; gap: 16px;",

                // Observation ingestion
                div {
                    style: "border-radius: 8px; padding: 20px; {card}",
                    div {
                        style: "display: flex; align-items: flex-start; justify-content: space-between; margin-bottom: 8px;",
                        div {
                            h2 { style: "margin: 0; font-size: 14px; font-weight: 600; color: {theme.heading};", "Admin & Staff Controls" }
                            p { style: "margin: 4px 0 0 0; font-size: 12px; color: {theme.text_muted};", "Data ingestion for bird observations and system models." }
                        }
                        span { style: "width: 10px; height: 10px; border-radius: 50%; flex-shrink: 0; margin-top: 4px; background: {theme.accent};" }
                    }
                    div {
                        style: "margin-top: 16px;",
                        h3 { style: "{h3_style}", "Data Ingestion" }
                        p { style: "margin: 4px 0 0 0; font-size: 12px; color: {theme.text_muted};", "Upload bird observation CSV / Excel files from your local computer." }
                        div {
                            style: "margin-top: 12px; display: flex; flex-direction: column; gap: 12px;",
                            div {
                                label { style: "{label_style}", "Select CSV / Excel File" }
                                FilePicker {
                                    light,
                                    file_name: observation_now.clone(),
                                    accept: ".csv,application/vnd.ms-excel,application/vnd.openxmlformats-officedocument.spreadsheetml.sheet".to_string(),
                                    on_pick: move |name| observation_file.set(Some(name)),
                                }
                                p { style: "margin: 4px 0 0 0; font-size: 11px; color: {theme.text_muted};", "Accepted formats: CSV, XLSX. Max size: 50MB." }
                            }
                            div {
                                button {
                                    style: "{blue_btn}",
                                    onclick: move |_| {
                                        match observation_file() {
                                            Some(name) => {
                                                show_toast(toast, format!("Uploaded & validated \"{name}\"."));
                                                spatial_checks_ready.set(true);
                                            }
                                            None => show_toast(
                                                toast,
                                                "Please choose a file to upload first.".to_string(),
                                            ),
                                        }
                                    },
                                    "Upload & Validate"
                                }
                            }
                        }
                    }
                }

                // Satellite and weather fetch triggers
                div {
                    style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
                    div {
                        style: "border-radius: 8px; padding: 20px; {card}",
                        h3 { style: "{h3_style}", "Satellite Data Fetch" }
                        p { style: "margin: 4px 0 0 0; font-size: 12px; color: {theme.text_muted};", "Trigger fetches for the latest satellite-based environmental layers." }
                        div {
                            style: "margin-top: 16px; display: flex; flex-direction: column; gap: 16px;",
                            div {
                                style: "border-radius: 8px; padding: 12px; {sub_panel}",
                                div {
                                    style: "display: flex; align-items: center; gap: 8px; margin-bottom: 8px;",
                                    span { style: "width: 8px; height: 8px; border-radius: 50%; flex-shrink: 0; background: {theme.accent};" }
                                    span { style: "font-size: 12px; font-weight: 600; color: {theme.heading};", "NASA VIIRS (Light Pollution)" }
                                }
                                button {
                                    style: "{small_btn}",
                                    onclick: move |_| show_toast(toast, "Fetching latest VIIRS light pollution data.".to_string()),
                                    "Fetch Latest VIIRS Data"
                                }
                                p { style: "margin: 8px 0 0 0; font-size: 11px; color: {theme.text_muted};", "Status: Up to date." }
                            }
                            div {
                                style: "border-radius: 8px; padding: 12px; {sub_panel}",
                                div {
                                    style: "display: flex; align-items: center; gap: 8px; margin-bottom: 8px;",
                                    span { style: "width: 8px; height: 8px; border-radius: 50%; flex-shrink: 0; background: {modis_dot};" }
                                    span { style: "font-size: 12px; font-weight: 600; color: {theme.heading};", "MODIS NDVI (Vegetation)" }
                                }
                                button {
                                    style: "{small_btn}",
                                    onclick: move |_| show_toast(toast, "Fetching latest MODIS NDVI vegetation data.".to_string()),
                                    "Fetch Latest MODIS Data"
                                }
                                p { style: "margin: 8px 0 0 0; font-size: 11px; color: {theme.text_muted};", "Status: Update available." }
                            }
                        }
                    }
                    div {
                        style: "border-radius: 8px; padding: 20px; {card}",
                        h3 { style: "{h3_style}", "Weather Data (NOAA)" }
                        p { style: "margin: 4px 0 0 0; font-size: 12px; color: {theme.text_muted};", "Temperature and precipitation feeds for model inputs." }
                        div {
                            style: "margin-top: 16px; display: flex; flex-direction: column; gap: 12px; align-items: flex-start;",
                            button {
                                style: "{blue_btn}",
                                onclick: move |_| show_toast(toast, "Fetching latest NOAA climate data.".to_string()),
                                "Fetch NOAA Climate Data"
                            }
                            div {
                                style: "width: 100%; box-sizing: border-box; border-radius: 8px; padding: 12px; font-size: 11px; background: {sub_bg}; color: {theme.text_muted};",
                                p { style: "margin: 0;", "Auto-fetch schedule:" }
                                ul {
                                    style: "margin: 4px 0 0 0; padding-left: 18px; display: flex; flex-direction: column; gap: 2px;",
                                    li { "VIIRS: Weekly (Mondays)" }
                                    li { "MODIS: Bi-weekly (1st & 15th)" }
                                    li { "NOAA: Daily at 06:00 UTC" }
                                }
                            }
                        }
                    }
                }

                // Model versioning
                div {
                    style: "border-radius: 8px; padding: 20px; {card}",
                    div {
                        style: "display: grid; grid-template-columns: 1fr 1fr; gap: 24px;",
                        div {
                            h3 { style: "{h3_style}", "Upload New Model" }
                            p { style: "margin: 4px 0 0 0; font-size: 12px; color: {theme.text_muted};", "Upload a new model file and track active versions." }
                            div {
                                style: "margin-top: 12px; display: flex; flex-direction: column; gap: 12px;",
                                div {
                                    label { style: "{label_style}", "Model File" }
                                    FilePicker {
                                        light,
                                        file_name: model_now.clone(),
                                        on_pick: move |name| model_file.set(Some(name)),
                                    }
                                }
                                div {
                                    label { style: "{label_style}", "Version Name" }
                                    input { value: "v2.1.0", placeholder: "e.g. v2.1.0", style: "{field_style}" }
                                }
                                div {
                                    label { style: "{label_style}", "Description" }
                                    textarea { rows: "3", placeholder: "Describe model changes...", style: "{field_style} resize: none;" }
                                }
                                div {
                                    button {
                                        style: "{blue_btn}",
                                        onclick: move |_| {
                                            match model_file() {
                                                Some(name) => show_toast(toast, format!("Model \"{name}\" queued for upload.")),
                                                None => show_toast(
                                                    toast,
                                                    "Please choose a model file to upload first.".to_string(),
                                                ),
                                            }
                                        },
                                        "Upload Model"
                                    }
                                }
                            }
                        }
                        div {
                            h3 { style: "{h3_style}", "Active Model Versions" }
                            div {
                                style: "margin-top: 12px; border-radius: 8px; overflow: hidden; border: 1px dashed rgba(75,85,99,0.4);",
                                div {
                                    style: "display: grid; grid-template-columns: repeat(4, 1fr); padding: 8px 12px; font-size: 11px; background: rgba(0,0,0,0.1); color: {theme.text_muted};",
                                    span { "Version" }
                                    span { "Date" }
                                    span { "Status" }
                                    span { "Action" }
                                }
                                for row in MODEL_VERSIONS {
                                    {
                                        let status_color = version_status_color(row.status);
                                        rsx! {
                                            div {
                                                style: "display: grid; grid-template-columns: repeat(4, 1fr); align-items: center; padding: 8px 12px; font-size: 11px; border-top: 1px solid #2a2f42;",
                                                span { style: "color: {theme.heading};", "{row.version}" }
                                                span { style: "color: {theme.text_muted};", "{row.date}" }
                                                span { style: "color: {status_color};", "{row.status}" }
                                                span {
                                                    button {
                                                        style: "{switch_btn}",
                                                        onclick: move |_| show_toast(toast, format!("Switching active model to {}.", row.version)),
                                                        "Switch"
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

                // Threshold configuration
                div {
                    style: "border-radius: 8px; padding: 20px; {card}",
                    h2 { style: "margin: 0 0 16px 0; font-size: 14px; font-weight: 600; color: {theme.heading};", "Threshold Configuration" }
                    div {
                        style: "display: grid; grid-template-columns: 1fr 1fr; gap: 24px;",
                        div {
                            h3 { style: "{h3_style}", "Danger Zone Color Scales" }
                            div {
                                style: "margin-top: 12px; display: flex; flex-direction: column; gap: 12px;",
                                div {
                                    label { style: "{label_style}", "High Risk Threshold (Light Intensity)" }
                                    input { value: "60", style: "{field_style}" }
                                }
                                div {
                                    label { style: "{label_style}", "Moderate Risk Threshold" }
                                    input { value: "40", style: "{field_style}" }
                                }
                                div {
                                    label { style: "{label_style}", "Low Risk Threshold" }
                                    input { value: "25", style: "{field_style}" }
                                }
                            }
                        }
                        div {
                            h3 { style: "{h3_style}", "SHAP Alert Thresholds" }
                            div {
                                style: "margin-top: 12px; display: flex; flex-direction: column; gap: 12px;",
                                div {
                                    label { style: "{label_style}", "Critical Negative Impact" }
                                    input { value: "-5", style: "{field_style}" }
                                    p { style: "margin: 4px 0 0 0; font-size: 11px; color: {theme.text_muted};", "Cells turn red when SHAP value falls below this threshold." }
                                }
                                div {
                                    label { style: "{label_style}", "Warning Threshold" }
                                    input { value: "-3", style: "{field_style}" }
                                }
                                div {
                                    label { style: "{label_style}", "Positive Impact Threshold" }
                                    input { value: "2", style: "{field_style}" }
                                    p { style: "margin: 4px 0 0 0; font-size: 11px; color: {theme.text_muted};", "Cells turn green when SHAP values are above this threshold." }
                                }
                            }
                        }
                    }
                    div {
                        style: "margin-top: 16px;",
                        button {
                            style: "{blue_btn}",
                            onclick: move |_| show_toast(toast, "Threshold configuration saved.".to_string()),
                            "Save Configuration"
                        }
                    }
                }

                // Validation and error logs
                div {
                    style: "border-radius: 8px; padding: 20px; {card}",
                    h2 { style: "margin: 0 0 16px 0; font-size: 14px; font-weight: 600; color: {theme.heading};", "Validation & Error Logs" }
                    p { style: "margin: 0 0 12px 0; font-size: 12px; color: {theme.text_muted};", "Recent data quality issues." }
                    div {
                        style: "overflow-x: auto;",
                        table {
                            style: "min-width: 100%; border-collapse: separate; border-spacing: 0 4px; font-size: 12px;",
                            thead {
                                tr {
                                    th { style: "{th_style}", "Timestamp" }
                                    th { style: "{th_style}", "Type" }
                                    th { style: "{th_style}", "Issue" }
                                    th { style: "{th_style}", "Status" }
                                }
                            }
                            tbody {
                                for row in VALIDATION_LOGS {
                                    {
                                        let (kind_bg, kind_text) = kind_pill(row.kind);
                                        let (status_bg, status_text) = status_pill(row.status);
                                        rsx! {
                                            tr {
                                                style: "background: {sub_bg};",
                                                td {
                                                    style: "padding: 8px 12px; white-space: nowrap;",
                                                    span { style: "color: {theme.text_muted};", "{row.ts}" }
                                                }
                                                td {
                                                    style: "padding: 8px 12px; white-space: nowrap;",
                                                    span {
                                                        style: "display: inline-flex; padding: 2px 8px; border-radius: 9999px; font-size: 11px; background: {kind_bg}; color: {kind_text};",
                                                        "{row.kind}"
                                                    }
                                                }
                                                td {
                                                    style: "padding: 8px 12px;",
                                                    span { style: "color: {theme.heading};", "{row.issue}" }
                                                }
                                                td {
                                                    style: "padding: 8px 12px; white-space: nowrap;",
                                                    span {
                                                        style: "display: inline-flex; padding: 2px 8px; border-radius: 9999px; font-size: 11px; background: {status_bg}; color: {status_text};",
                                                        "{row.status}"
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

                // Spatial integrity checks
                div {
                    style: "border-radius: 8px; padding: 20px; {card}",
                    h2 { style: "margin: 0 0 16px 0; font-size: 14px; font-weight: 600; color: {theme.heading};", "Spatial Integrity Checks" }
                    if checks_ready {
                        div {
                            style: "border-radius: 8px; padding: 16px; font-size: 12px; background: #064e3b; border: 1px solid #059669;",
                            p { style: "margin: 0 0 8px 0; font-weight: 600; color: #6ee7b7;", "✓ All Checks Passed" }
                            ul {
                                style: "margin: 0; padding: 0; list-style: none; display: flex; flex-direction: column; gap: 4px; color: #d1fae5;",
                                li { "Latitude range: 14.2° to 14.9° N ✓" }
                                li { "Longitude range: 120.8° to 121.2° E ✓" }
                                li { "No offshore observations ✓" }
                                li { "All cells mapped to valid land cover ✓" }
                            }
                            match &observation_now {
                                Some(name) => rsx! {
                                    p {
                                        style: "margin: 12px 0 0 0; color: rgba(167,243,208,0.8);",
                                        "Last validated file: "
                                        span { style: "font-weight: 600;", "{name}" }
                                    }
                                },
                                None => rsx! {},
                            }
                        }
                    } else {
                        div {
                            style: "border-radius: 8px; padding: 16px; font-size: 12px; {sub_panel}",
                            p { style: "margin: 0; font-weight: 600; color: {theme.heading};", "No spatial integrity checks run yet." }
                            p {
                                style: "margin: 4px 0 0 0; color: {theme.text_muted};",
                                "Upload and validate a bird observation CSV/Excel file in the Data Ingestion section to run spatial integrity checks."
                            }
                        }
                    }
                }

                // Access logs and system health
                div {
                    style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
                    div {
                        style: "border-radius: 8px; padding: 20px; {card}",
                        h2 { style: "margin: 0 0 8px 0; font-size: 14px; font-weight: 600; color: {theme.heading};", "Security & Access Logs" }
                        p { style: "margin: 0 0 12px 0; font-size: 12px; color: {theme.text_muted};", "Recent account and model activity." }
                        div {
                            style: "overflow-x: auto;",
                            table {
                                style: "min-width: 100%; border-collapse: separate; border-spacing: 0 4px; font-size: 12px;",
                                thead {
                                    tr {
                                        th { style: "{th_style}", "User" }
                                        th { style: "{th_style}", "Action" }
                                        th { style: "{th_style}", "Time" }
                                    }
                                }
                                tbody {
                                    for row in ACCESS_LOGS {
                                        tr {
                                            style: "background: {sub_bg};",
                                            td {
                                                style: "padding: 8px 12px; white-space: nowrap;",
                                                span { style: "color: {theme.heading};", "{row.user}" }
                                            }
                                            td {
                                                style: "padding: 8px 12px;",
                                                span { style: "color: {theme.text_muted};", "{row.action}" }
                                            }
                                            td {
                                                style: "padding: 8px 12px; white-space: nowrap;",
                                                span { style: "color: {theme.text_muted};", "{row.time}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    div {
                        style: "border-radius: 8px; padding: 20px; {card}",
                        h2 { style: "margin: 0 0 8px 0; font-size: 14px; font-weight: 600; color: {theme.heading};", "System Health" }
                        p { style: "margin: 0 0 12px 0; font-size: 12px; color: {theme.text_muted};", "Monitoring status across core services." }
                        div {
                            style: "display: flex; flex-direction: column; gap: 12px; font-size: 12px;",
                            for item in SYSTEM_HEALTH {
                                {
                                    let (pill_bg, pill_text) = health_pill(item.tone, light);
                                    rsx! {
                                        div {
                                            style: "display: flex; align-items: center; justify-content: space-between; border-radius: 8px; padding: 8px 12px; background: {sub_bg};",
                                            span { style: "color: {theme.text_muted};", "{item.label}" }
                                            span {
                                                style: "display: inline-flex; align-items: center; justify-content: center; padding: 2px 8px; border-radius: 9999px; font-size: 11px; background: {pill_bg}; color: {pill_text};",
                                                "{item.value}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            match &toast_now {
                Some(msg) => rsx! {
                    Toast { message: msg.clone() }
                },
                None => rsx! {},
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_kinds_map_to_distinct_pills() {
        let pills: Vec<(&str, &str)> = VALIDATION_LOGS.iter().map(|r| kind_pill(r.kind)).collect();
        assert_eq!(pills.len(), 3);
        assert!(pills.windows(2).all(|w| w[0] != w[1]));
    }

    #[test]
    fn rejected_uploads_read_red() {
        assert_eq!(status_pill("Rejected").1, "#f87171");
        assert_eq!(status_pill("Resolved").1, "#34d399");
        assert_eq!(status_pill("Cleaned").1, "#34d399");
    }

    #[test]
    fn only_the_active_version_reads_green() {
        assert_eq!(version_status_color("Active"), "#34d399");
        assert_eq!(version_status_color("Backup"), "#60a5fa");
        assert_eq!(version_status_color("Archived"), "#9ca3af");
    }

    #[test]
    fn health_tones_resolve_in_both_modes() {
        for row in SYSTEM_HEALTH {
            let (dark_bg, dark_text) = health_pill(row.tone, false);
            let (light_bg, light_text) = health_pill(row.tone, true);
            assert!(dark_bg.starts_with("rgba("));
            assert!(light_bg.starts_with('#'));
            assert_ne!(dark_text, light_text);
        }
    }
}
