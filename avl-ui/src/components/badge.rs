//! Small colored pill for category labels.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct BadgeProps {
    pub text: String,
    /// Text color
    pub color: String,
    /// Fill, usually a translucent tint of the text color
    pub background: String,
    /// Optional border color; no border when empty
    #[props(default = String::new())]
    pub border: String,
}

/// Inline pill used for tolerance/migration categories and status chips.
#[component]
pub fn Badge(props: BadgeProps) -> Element {
    let border = if props.border.is_empty() {
        String::new()
    } else {
        format!(" border: 1px solid {};", props.border)
    };
    rsx! {
        span {
            style: "display: inline-flex; align-items: center; padding: 2px 8px; border-radius: 4px; font-size: 11px; font-weight: 600; color: {props.color}; background: {props.background};{border}",
            "{props.text}"
        }
    }
}
