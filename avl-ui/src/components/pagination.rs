//! Page button row for the species catalog table.

use crate::state::AppState;
use crate::theme::Theme;
use avl_analytics::paging::page_window;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct PaginationProps {
    /// Current 1-based page
    pub page: usize,
    pub page_count: usize,
    pub on_select: EventHandler<usize>,
}

/// Prev / numbered window / Next controls. The numbered window shows at
/// most 7 buttons centered on the current page.
#[component]
pub fn Pagination(props: PaginationProps) -> Element {
    let state = use_context::<AppState>();
    let theme = Theme::from_mode((state.light_mode)());

    let pages = page_window(props.page, props.page_count);
    let prev_disabled = props.page <= 1;
    let next_disabled = props.page >= props.page_count;
    let page = props.page;
    let page_count = props.page_count;

    let nav_style = |disabled: bool| {
        format!(
            "padding: 6px 10px; border-radius: 6px; font-size: 12px; border: 1px solid {}; background: {}; color: {}; cursor: {}; opacity: {};",
            theme.input_border,
            theme.input_bg,
            theme.text_muted,
            if disabled { "not-allowed" } else { "pointer" },
            if disabled { "0.5" } else { "1" },
        )
    };

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 6px; flex-wrap: wrap;",
            button {
                disabled: prev_disabled,
                style: nav_style(prev_disabled),
                onclick: move |_| {
                    if page > 1 {
                        props.on_select.call(page - 1);
                    }
                },
                "Prev"
            }
            for p in pages {
                button {
                    key: "{p}",
                    style: if p == page {
                        format!(
                            "padding: 6px 10px; border-radius: 6px; font-size: 12px; font-weight: 600; border: 1px solid {}; background: {}; color: {}; cursor: pointer;",
                            theme.accent, theme.accent_bg, theme.accent
                        )
                    } else {
                        format!(
                            "padding: 6px 10px; border-radius: 6px; font-size: 12px; border: 1px solid {}; background: {}; color: {}; cursor: pointer;",
                            theme.input_border, theme.input_bg, theme.text_muted
                        )
                    },
                    onclick: move |_| props.on_select.call(p),
                    "{p}"
                }
            }
            button {
                disabled: next_disabled,
                style: nav_style(next_disabled),
                onclick: move |_| {
                    if page < page_count {
                        props.on_select.call(page + 1);
                    }
                },
                "Next"
            }
        }
    }
}
