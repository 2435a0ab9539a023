//! Bottom-right feedback toast.
//!
//! Pages own the message signal and the 2600 ms dismissal task; this
//! component only renders whatever message is currently set.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ToastProps {
    pub message: String,
}

#[component]
pub fn Toast(props: ToastProps) -> Element {
    let state = use_context::<AppState>();
    let bg = if (state.light_mode)() { "#111827" } else { "#000000" };

    rsx! {
        div {
            style: "position: fixed; bottom: 16px; right: 16px; z-index: 40; display: flex; align-items: center; gap: 8px; padding: 12px 16px; border-radius: 6px; box-shadow: 0 10px 15px rgba(0,0,0,0.3); font-size: 12px; background: {bg}; color: #f3f4f6;",
            span {
                style: "width: 8px; height: 8px; border-radius: 50%; background: #34d399; flex-shrink: 0;",
            }
            span { "{props.message}" }
        }
    }
}
