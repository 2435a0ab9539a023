//! Survey-year dropdown (2014-2024).

use crate::state::AppState;
use crate::theme::Theme;
use avl_dataset::series::{FIRST_YEAR, LAST_YEAR};
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct YearSelectProps {
    pub value: i32,
    pub on_change: EventHandler<i32>,
    /// Optional label rendered before the select
    #[props(default = String::new())]
    pub label: String,
}

#[component]
pub fn YearSelect(props: YearSelectProps) -> Element {
    let state = use_context::<AppState>();
    let theme = Theme::from_mode((state.light_mode)());
    let selected = props.value;

    let on_change = move |evt: Event<FormData>| {
        if let Ok(year) = evt.value().parse::<i32>() {
            props.on_change.call(year);
        }
    };

    rsx! {
        label {
            style: "display: inline-flex; align-items: center; gap: 6px; font-size: 12px; color: {theme.text_muted};",
            if !props.label.is_empty() {
                "{props.label}"
            }
            select {
                onchange: on_change,
                style: "padding: 4px 8px; border-radius: 6px; font-size: 12px; border: 1px solid {theme.input_border}; background: {theme.input_bg}; color: {theme.text};",
                for year in FIRST_YEAR..=LAST_YEAR {
                    option {
                        value: "{year}",
                        selected: year == selected,
                        "{year}"
                    }
                }
            }
        }
    }
}
