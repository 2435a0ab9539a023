//! Species catalog page: searchable, filterable 757-entry table backed by
//! the in-memory SQLite catalog, with a detail modal per species.

use avl_analytics::paging::{page_count, PAGE_SIZE};
use avl_dataset::species::SpeciesEntry;
use avl_db::models::SpeciesFilter;
use avl_ui::components::{Badge, LoadingSpinner, Pagination};
use avl_ui::state::AppState;
use avl_ui::theme::Theme;
use dioxus::prelude::*;

fn tolerance_badge(tolerance: &str) -> &'static str {
    if tolerance == "Sensitive" {
        "#dc2626"
    } else {
        "#15803d"
    }
}

fn migration_badge(migration: &str) -> &'static str {
    if migration == "Resident" {
        "#0d9488"
    } else {
        "#2563eb"
    }
}

#[component]
pub fn Species() -> Element {
    let state = use_context::<AppState>();
    let light = (state.light_mode)();
    let theme = Theme::from_mode(light);

    let mut search = use_signal(String::new);
    let mut tol_filter = use_signal(|| "All".to_string());
    let mut mig_filter = use_signal(|| "All".to_string());
    let mut page = use_signal(|| 1usize);
    let mut total = use_signal(|| 0usize);
    let mut rows = use_signal(Vec::<SpeciesEntry>::new);
    let mut selected = use_signal(|| None::<SpeciesEntry>);

    // Re-query the catalog whenever the filter or page changes
    use_effect(move || {
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };
        let filter = SpeciesFilter {
            query: search(),
            tolerance: tol_filter(),
            migration: mig_filter(),
        };
        match db.count_species(&filter) {
            Ok(n) => total.set(n),
            Err(e) => {
                log::error!("Species count failed: {}", e);
                return;
            }
        }
        match db.query_species_page(&filter, page()) {
            Ok(r) => rows.set(r),
            Err(e) => log::error!("Species page query failed: {}", e),
        }
    });

    let total_now = total();
    let page_now = page();
    let pages = page_count(total_now);
    let shown_from = if total_now == 0 {
        0
    } else {
        (page_now - 1) * PAGE_SIZE + 1
    };
    let shown_to = (page_now * PAGE_SIZE).min(total_now);

    let select_style = format!(
        "padding: 6px 12px; border-radius: 8px; font-size: 13px; border: 1px solid {}; background: {}; color: {};",
        theme.input_border, theme.input_bg, theme.text
    );

    rsx! {
        div {
            style: "min-height: 100%; padding: 24px; background: {theme.page_bg}; color: {theme.text}; box-sizing: border-box;",

            div {
                style: "margin-bottom: 20px;",
                h1 {
                    style: "margin: 0; font-size: 22px; font-weight: 700; color: {theme.heading};",
                    "Bird Species Catalog"
                }
                p {
                    style: "margin: 4px 0 0 0; font-size: 13px; color: {theme.text_muted};",
                    "Searchable library of 757 bird species recorded in Metro Manila"
                }
            }

            // Filter bar
            div {
                style: "background: {theme.panel_bg}; border: 1px solid {theme.panel_border}; border-radius: 12px; padding: 16px 20px; margin-bottom: 20px; display: flex; flex-wrap: wrap; align-items: center; gap: 12px;",
                input {
                    r#type: "text",
                    placeholder: "Search by name...",
                    value: "{search}",
                    style: "flex: 1; min-width: 180px; padding: 6px 12px; border-radius: 8px; font-size: 13px; border: 1px solid {theme.input_border}; background: {theme.input_bg}; color: {theme.text}; outline: none;",
                    oninput: move |evt| {
                        search.set(evt.value());
                        page.set(1);
                    },
                }
                select {
                    style: select_style.clone(),
                    onchange: move |evt| {
                        tol_filter.set(evt.value());
                        page.set(1);
                    },
                    option { value: "All", selected: tol_filter() == "All", "All Tolerance Levels" }
                    option { value: "Sensitive", selected: tol_filter() == "Sensitive", "Sensitive" }
                    option { value: "Tolerant", selected: tol_filter() == "Tolerant", "Tolerant" }
                }
                select {
                    style: select_style.clone(),
                    onchange: move |evt| {
                        mig_filter.set(evt.value());
                        page.set(1);
                    },
                    option { value: "All", selected: mig_filter() == "All", "All Migration Types" }
                    option { value: "Resident", selected: mig_filter() == "Resident", "Resident" }
                    option { value: "Migratory", selected: mig_filter() == "Migratory", "Migratory" }
                }
                button {
                    style: "padding: 6px 16px; border: none; border-radius: 8px; background: #7c3aed; color: #ffffff; font-size: 13px; cursor: pointer;",
                    onclick: move |_| {
                        search.set(String::new());
                        tol_filter.set("All".to_string());
                        mig_filter.set("All".to_string());
                        page.set(1);
                    },
                    "Clear"
                }
            }

            if (state.loading)() {
                LoadingSpinner {}
            } else {
                p {
                    style: "margin: 0 0 16px 0; font-size: 13px; color: {theme.text_muted};",
                    "Showing {shown_from}–{shown_to} of "
                    span { style: "font-weight: 600;", "{total_now}" }
                    " species"
                }

                if total_now == 0 {
                    div {
                        style: "padding: 32px; text-align: center; font-size: 13px; color: {theme.text_muted}; border: 1px dashed {theme.panel_border}; border-radius: 12px; margin-bottom: 24px;",
                        "No species matched your filters."
                    }
                } else {
                    div {
                        style: "background: {theme.panel_bg}; border: 1px solid {theme.panel_border}; border-radius: 12px; overflow: hidden; margin-bottom: 24px;",
                        table {
                            style: "width: 100%; border-collapse: collapse; font-size: 13px;",
                            thead {
                                tr {
                                    style: "color: {theme.text_faint}; border-bottom: 1px solid {theme.panel_border}; text-align: left;",
                                    th { style: "padding: 10px 16px; font-size: 11px; font-weight: 500;", "#" }
                                    th { style: "padding: 10px 12px; font-size: 11px; font-weight: 500;", "Common Name" }
                                    th { style: "padding: 10px 12px; font-size: 11px; font-weight: 500;", "Scientific Name" }
                                    th { style: "padding: 10px 12px; font-size: 11px; font-weight: 500;", "Tolerance" }
                                    th { style: "padding: 10px 12px; font-size: 11px; font-weight: 500;", "Migration" }
                                    th { style: "padding: 10px 12px;", "" }
                                }
                            }
                            tbody {
                                for entry in rows() {
                                    {
                                        let entry_for_modal = entry.clone();
                                        rsx! {
                                            tr {
                                                key: "{entry.id}",
                                                style: "border-bottom: 1px solid {theme.divider};",
                                                td { style: "padding: 10px 16px; color: {theme.text_faint};", "{entry.id}" }
                                                td { style: "padding: 10px 12px; font-weight: 600; color: {theme.heading};", "{entry.common_name}" }
                                                td { style: "padding: 10px 12px; font-style: italic; color: {theme.text_muted};", "{entry.scientific_name}" }
                                                td {
                                                    style: "padding: 10px 12px;",
                                                    Badge {
                                                        text: entry.tolerance.clone(),
                                                        color: "#ffffff".to_string(),
                                                        background: tolerance_badge(&entry.tolerance).to_string(),
                                                    }
                                                }
                                                td {
                                                    style: "padding: 10px 12px;",
                                                    Badge {
                                                        text: entry.migration.clone(),
                                                        color: "#ffffff".to_string(),
                                                        background: migration_badge(&entry.migration).to_string(),
                                                    }
                                                }
                                                td {
                                                    style: "padding: 10px 12px; text-align: right;",
                                                    button {
                                                        style: "padding: 6px 12px; border: none; border-radius: 8px; background: #2563eb; color: #ffffff; font-size: 12px; font-weight: 600; cursor: pointer;",
                                                        onclick: move |_| selected.set(Some(entry_for_modal.clone())),
                                                        "View Details"
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

                if pages > 1 {
                    div {
                        style: "display: flex; justify-content: center; padding-bottom: 24px;",
                        Pagination {
                            page: page_now,
                            page_count: pages,
                            on_select: move |p| page.set(p),
                        }
                    }
                }
            }

            // Detail modal
            if let Some(entry) = selected() {
                div {
                    style: if light {
                        "position: fixed; inset: 0; z-index: 50; display: flex; align-items: center; justify-content: center; padding: 16px; background: rgba(255,255,255,0.75); backdrop-filter: blur(4px);"
                    } else {
                        "position: fixed; inset: 0; z-index: 50; display: flex; align-items: center; justify-content: center; padding: 16px; background: rgba(0,0,0,0.75); backdrop-filter: blur(4px);"
                    },
                    onclick: move |_| selected.set(None),
                    div {
                        style: "background: {theme.panel_bg}; border: 1px solid {theme.panel_border}; border-radius: 16px; box-shadow: 0 25px 50px rgba(0,0,0,0.4); width: 100%; max-width: 560px; max-height: 90vh; overflow-y: auto; position: relative; padding: 24px;",
                        onclick: move |evt| evt.stop_propagation(),
                        button {
                            style: "position: absolute; top: 12px; right: 12px; width: 32px; height: 32px; border: none; border-radius: 50%; background: {theme.card_bg}; color: {theme.text_muted}; cursor: pointer;",
                            onclick: move |_| selected.set(None),
                            "✕"
                        }
                        h2 {
                            style: "margin: 0; font-size: 20px; font-weight: 800; color: {theme.heading};",
                            "{entry.common_name}"
                        }
                        p {
                            style: "margin: 2px 0 16px 0; font-size: 13px; font-style: italic; color: {theme.text_muted};",
                            "{entry.scientific_name}"
                        }
                        div {
                            style: "display: flex; align-items: center; gap: 8px; margin-bottom: 20px;",
                            span {
                                style: "font-size: 11px; font-weight: 600; color: {theme.text_muted};",
                                "Bird Type:"
                            }
                            Badge {
                                text: entry.tolerance.clone(),
                                color: "#ffffff".to_string(),
                                background: tolerance_badge(&entry.tolerance).to_string(),
                            }
                            Badge {
                                text: entry.migration.clone(),
                                color: "#ffffff".to_string(),
                                background: migration_badge(&entry.migration).to_string(),
                            }
                        }
                        div {
                            style: "background: {theme.card_bg}; border-radius: 12px; padding: 16px; margin-bottom: 16px;",
                            p {
                                style: "margin: 0 0 12px 0; font-size: 13px; font-weight: 700; color: {theme.heading};",
                                "Mostly Seen"
                            }
                            div {
                                style: "display: flex; flex-wrap: wrap; gap: 8px;",
                                for site in entry.sites.iter() {
                                    span {
                                        key: "{site}",
                                        style: "display: inline-flex; align-items: center; gap: 6px; padding: 4px 12px; border-radius: 999px; font-size: 12px; background: rgba(37,99,235,0.2); border: 1px solid rgba(37,99,235,0.3); color: #93c5fd;",
                                        span { style: "width: 6px; height: 6px; border-radius: 50%; background: #60a5fa;" }
                                        "{site}"
                                    }
                                }
                            }
                        }
                        div {
                            style: "background: {theme.card_bg}; border-radius: 12px; padding: 16px;",
                            p {
                                style: "margin: 0 0 8px 0; font-size: 13px; font-weight: 700; color: {theme.heading};",
                                "Description"
                            }
                            p {
                                style: "margin: 0; font-size: 13px; line-height: 1.6; color: {theme.text_muted};",
                                "{entry.description}"
                            }
                        }
                    }
                }
            }
        }
    }
}
