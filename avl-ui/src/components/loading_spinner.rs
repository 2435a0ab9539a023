//! Loading spinner component.

use dioxus::prelude::*;

/// Simple loading indicator shown while the embedded datasets load.
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #9ca3af;",
            "Loading data..."
        }
    }
}
