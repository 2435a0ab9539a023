//! Shared shell layout: navbar, theme toggle, account menu, and the
//! role-assignment overlay. Routed pages render through the `Outlet`.

use crate::Route;
use avl_ui::components::ErrorDisplay;
use avl_ui::state::AppState;
use avl_ui::theme::Theme;
use dioxus::prelude::*;

const NAV_ITEMS: [(&str, &str); 6] = [
    ("Home", "/app"),
    ("Dashboard", "/app/dashboard"),
    ("Analytics", "/app/analytics"),
    ("Species", "/app/species"),
    ("Reports", "/app/reports"),
    ("Settings", "/app/settings"),
];

const SIGNED_IN_EMAIL: &str = "giancarloregalado05@gmail.com";

fn route_for(path: &str) -> Route {
    match path {
        "/app/dashboard" => Route::Dashboard {},
        "/app/analytics" => Route::Analytics {},
        "/app/species" => Route::Species {},
        "/app/reports" => Route::Reports {},
        "/app/settings" => Route::Settings {},
        _ => Route::Home {},
    }
}

#[component]
pub fn Shell() -> Element {
    let mut state = use_context::<AppState>();
    let light = (state.light_mode)();
    let theme = Theme::from_mode(light);
    let current = use_route::<Route>();
    let nav = navigator();

    let mut mobile_open = use_signal(|| false);
    let mut user_menu_open = use_signal(|| false);
    let mut profile_open = use_signal(|| false);
    // Role-assignment rows shown in the profile overlay
    let mut assignments = use_signal(|| {
        vec![
            (SIGNED_IN_EMAIL.to_string(), "Admin".to_string()),
            ("admin@avilight.ph".to_string(), "No role".to_string()),
            ("researcher@denr.gov".to_string(), "No role".to_string()),
            ("observer@ncr.gov".to_string(), "No role".to_string()),
        ]
    });

    let shell_bg = if light { "#f3f4f6" } else { "#1a1f2e" };
    let toggle_label = if light { "Light" } else { "Dark" };

    rsx! {
        div {
            style: "min-height: 100vh; display: flex; flex-direction: column; background: {shell_bg}; color: {theme.text}; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            // Navbar
            nav {
                style: "position: sticky; top: 0; z-index: 50; display: flex; align-items: center; justify-content: space-between; padding: 12px 24px; background: {theme.nav_bg}; border-bottom: 1px solid {theme.panel_border};",
                div {
                    style: "display: flex; align-items: center; gap: 8px; cursor: pointer;",
                    onclick: move |_| {
                        nav.push(Route::Home {});
                    },
                    span {
                        style: "width: 10px; height: 10px; border-radius: 2px; background: {theme.accent};",
                    }
                    span {
                        style: "font-size: 13px; font-weight: 700; letter-spacing: 0.2em; color: {theme.heading};",
                        "AVILIGHT"
                    }
                }

                div {
                    style: "display: flex; align-items: center; gap: 4px;",
                    for (label, path) in NAV_ITEMS {
                        {
                            let active = current == route_for(path);
                            let link_style = if active {
                                format!(
                                    "padding: 6px 16px; border-radius: 4px; font-size: 13px; text-decoration: none; color: {}; background: {};",
                                    theme.accent, theme.accent_bg
                                )
                            } else {
                                format!(
                                    "padding: 6px 16px; border-radius: 4px; font-size: 13px; text-decoration: none; color: {};",
                                    theme.text_muted
                                )
                            };
                            rsx! {
                                Link {
                                    key: "{path}",
                                    to: route_for(path),
                                    style: link_style,
                                    "{label}"
                                }
                            }
                        }
                    }
                }

                div {
                    style: "display: flex; align-items: center; gap: 8px; position: relative;",
                    button {
                        style: "display: flex; align-items: center; gap: 6px; padding: 6px 10px; border-radius: 4px; font-size: 11px; border: 1px solid {theme.input_border}; background: transparent; color: {theme.text_muted}; cursor: pointer;",
                        onclick: move |_| {
                            let flipped = !(state.light_mode)();
                            state.light_mode.set(flipped);
                        },
                        "{toggle_label}"
                    }
                    button {
                        style: if user_menu_open() {
                            format!(
                                "padding: 8px 10px; border-radius: 4px; font-size: 11px; border: 1px solid {}; background: {}; color: {}; cursor: pointer;",
                                theme.accent, theme.accent_bg, theme.text
                            )
                        } else {
                            format!(
                                "padding: 8px 10px; border-radius: 4px; font-size: 11px; border: 1px solid {}; background: transparent; color: {}; cursor: pointer;",
                                theme.input_border, theme.text
                            )
                        },
                        onclick: move |_| {
                            let flipped = !user_menu_open();
                            user_menu_open.set(flipped);
                        },
                        "Account"
                    }
                    button {
                        style: "padding: 8px; border: none; background: transparent; color: {theme.text_muted}; cursor: pointer; font-size: 14px;",
                        onclick: move |_| {
                            let flipped = !mobile_open();
                            mobile_open.set(flipped);
                        },
                        if mobile_open() { "✕" } else { "☰" }
                    }

                    if user_menu_open() {
                        div {
                            style: "position: absolute; right: 0; top: 100%; margin-top: 8px; width: 256px; border-radius: 8px; box-shadow: 0 10px 15px rgba(0,0,0,0.25); font-size: 11px; background: {theme.nav_bg}; border: 1px solid {theme.panel_border};",
                            div {
                                style: "padding: 12px 16px; border-bottom: 1px solid {theme.divider};",
                                p { style: "margin: 0; font-size: 13px; font-weight: 600; color: {theme.heading};", "Account" }
                                p { style: "margin: 2px 0 0 0; color: {theme.text_muted};", "Signed in as" }
                                p { style: "margin: 2px 0 0 0; color: {theme.text};", "{SIGNED_IN_EMAIL}" }
                            }
                            div {
                                style: "padding: 12px 16px; display: flex; flex-direction: column; gap: 8px;",
                                for (label, value) in [
                                    ("Email", SIGNED_IN_EMAIL),
                                    ("Phone", "+63 9XX XXX XXXX"),
                                    ("Password", "••••••••"),
                                    ("Role", "Admin"),
                                ] {
                                    div {
                                        style: "display: flex; align-items: center; justify-content: space-between;",
                                        span { style: "color: {theme.text_muted};", "{label}" }
                                        span { style: "color: {theme.text};", "{value}" }
                                    }
                                }
                            }
                            div {
                                style: "padding: 8px 16px; border-top: 1px solid {theme.divider}; display: flex; flex-direction: column; gap: 4px;",
                                button {
                                    style: "text-align: left; border: none; background: transparent; border-radius: 4px; padding: 4px 8px; font-size: 11px; color: {theme.accent}; cursor: pointer;",
                                    onclick: move |_| {
                                        user_menu_open.set(false);
                                        profile_open.set(true);
                                    },
                                    "Manage profile & security"
                                }
                                button {
                                    style: "text-align: left; border: none; background: transparent; border-radius: 4px; padding: 4px 8px; font-size: 11px; color: {theme.danger}; cursor: pointer;",
                                    onclick: move |_| {
                                        user_menu_open.set(false);
                                        nav.push(Route::Landing {});
                                    },
                                    "Sign out"
                                }
                            }
                        }
                    }
                }
            }

            // Collapsible nav list for narrow viewports
            if mobile_open() {
                div {
                    style: "background: {theme.nav_bg}; border-bottom: 1px solid {theme.panel_border};",
                    for (label, path) in NAV_ITEMS {
                        {
                            let active = current == route_for(path);
                            let link_style = if active {
                                format!(
                                    "display: block; padding: 12px 24px; font-size: 13px; text-decoration: none; border-bottom: 1px solid {}; color: {}; background: {};",
                                    theme.divider, theme.accent, theme.accent_bg
                                )
                            } else {
                                format!(
                                    "display: block; padding: 12px 24px; font-size: 13px; text-decoration: none; border-bottom: 1px solid {}; color: {};",
                                    theme.divider, theme.text_muted
                                )
                            };
                            rsx! {
                                Link {
                                    key: "m-{path}",
                                    to: route_for(path),
                                    style: link_style,
                                    onclick: move |_| mobile_open.set(false),
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }

            main {
                style: "flex: 1; display: flex; flex-direction: column;",
                if let Some(err) = state.error_msg.read().as_ref() {
                    ErrorDisplay { message: err.clone() }
                }
                Outlet::<Route> {}
            }

            // Manage profile & security overlay
            if profile_open() {
                div {
                    style: "position: fixed; inset: 0; z-index: 50; display: flex; flex-direction: column; backdrop-filter: blur(6px);",
                    div {
                        style: "display: flex; align-items: center; padding: 12px 16px; background: {theme.nav_bg}; border-bottom: 1px solid {theme.panel_border};",
                        button {
                            style: "margin-right: 12px; border: none; background: transparent; font-size: 13px; color: {theme.text}; cursor: pointer;",
                            onclick: move |_| profile_open.set(false),
                            "← Back"
                        }
                        h2 {
                            style: "margin: 0; font-size: 13px; font-weight: 600; color: {theme.heading};",
                            "Manage profile & security"
                        }
                    }
                    div {
                        style: "flex: 1; overflow: auto; padding: 24px;",
                        background: if light { "#f9fafb" } else { "#111827" },
                        div {
                            style: "max-width: 640px; margin: 0 auto; border-radius: 12px; padding: 20px; background: {theme.nav_bg}; border: 1px solid {theme.panel_border};",
                            p { style: "margin: 0; font-size: 13px; font-weight: 600; color: {theme.heading};", "Assign admin access" }
                            p {
                                style: "margin: 4px 0 0 0; font-size: 11px; color: {theme.text_muted};",
                                "Choose which email addresses should have the Admin role. All other users will be treated as having no special role."
                            }
                            div {
                                style: "margin-top: 16px; border: 1px dashed {theme.input_border}; border-radius: 8px; overflow: hidden;",
                                div {
                                    style: "display: grid; grid-template-columns: 1.7fr 1fr; padding: 8px 12px; font-size: 11px; font-weight: 600; color: {theme.text_muted}; background: {theme.input_bg}; border-bottom: 1px solid {theme.panel_border};",
                                    span { "Email" }
                                    span { style: "text-align: right; padding-right: 4px;", "Role" }
                                }
                                for (idx, (email, role)) in assignments().into_iter().enumerate() {
                                    div {
                                        key: "{email}",
                                        style: "display: grid; grid-template-columns: 1.7fr 1fr; align-items: center; padding: 8px 12px; background: {theme.nav_bg}; border-bottom: 1px solid {theme.divider};",
                                        div {
                                            style: "padding-right: 12px;",
                                            p {
                                                style: if idx == 0 {
                                                    format!("margin: 0; font-size: 11px; font-weight: 600; color: {};", theme.text)
                                                } else {
                                                    format!("margin: 0; font-size: 11px; color: {};", theme.text)
                                                },
                                                "{email}"
                                            }
                                            if idx == 0 {
                                                p {
                                                    style: "margin: 2px 0 0 0; font-size: 10px; color: #34d399;",
                                                    "Currently signed-in user"
                                                }
                                            }
                                        }
                                        div {
                                            style: "display: flex; justify-content: flex-end;",
                                            select {
                                                style: "width: 128px; border-radius: 6px; padding: 4px 8px; font-size: 11px; border: 1px solid {theme.input_border}; background: {theme.input_bg}; color: {theme.text};",
                                                onchange: move |evt: Event<FormData>| {
                                                    let mut rows = assignments();
                                                    if let Some(row) = rows.get_mut(idx) {
                                                        row.1 = evt.value();
                                                    }
                                                    assignments.set(rows);
                                                },
                                                option { value: "Admin", selected: role == "Admin", "Admin" }
                                                option { value: "No role", selected: role == "No role", "No role" }
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
