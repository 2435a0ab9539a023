//! Summary stat card used on the Home and Dashboard pages.

use crate::state::AppState;
use crate::theme::Theme;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct StatCardProps {
    /// Uppercase caption above the value
    pub label: String,
    /// Big headline value
    pub value: String,
    /// Small explanatory line under the value
    #[props(default = String::new())]
    pub detail: String,
    /// Optional dot color rendered beside the value (risk level cards)
    #[props(default = String::new())]
    pub dot_color: String,
}

#[component]
pub fn StatCard(props: StatCardProps) -> Element {
    let state = use_context::<AppState>();
    let theme = Theme::from_mode((state.light_mode)());

    rsx! {
        div {
            style: "background: {theme.card_bg}; border: 1px solid {theme.card_border}; border-radius: 8px; padding: 16px;",
            p {
                style: "margin: 0 0 8px 0; font-size: 11px; text-transform: uppercase; letter-spacing: 0.05em; color: {theme.text_muted};",
                "{props.label}"
            }
            div {
                style: "display: flex; align-items: center; gap: 8px; margin-bottom: 4px;",
                if !props.dot_color.is_empty() {
                    span {
                        style: "width: 14px; height: 14px; border-radius: 50%; background: {props.dot_color}; flex-shrink: 0;",
                    }
                }
                span {
                    style: "font-size: 30px; font-weight: 700; color: {theme.heading};",
                    "{props.value}"
                }
            }
            if !props.detail.is_empty() {
                p {
                    style: "margin: 0; font-size: 11px; color: {theme.text_muted};",
                    "{props.detail}"
                }
            }
        }
    }
}
