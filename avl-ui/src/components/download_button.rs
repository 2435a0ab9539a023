//! Simulated export button with its four-state status machine.

use dioxus::prelude::*;

/// Lifecycle of one simulated download.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum DownloadStatus {
    #[default]
    Idle,
    Loading,
    Done,
    Error,
}

#[derive(Props, Clone, PartialEq)]
pub struct DownloadButtonProps {
    /// Idle label, e.g. "Download GeoJSON"
    pub label: String,
    /// Button fill color
    pub color: String,
    pub status: DownloadStatus,
    pub on_click: EventHandler<MouseEvent>,
}

/// Export button that walks Idle -> Loading -> (Done | Error) and shows a
/// status note under itself. The owning page drives the transitions.
#[component]
pub fn DownloadButton(props: DownloadButtonProps) -> Element {
    let loading = props.status == DownloadStatus::Loading;
    let text = match props.status {
        DownloadStatus::Idle => props.label.clone(),
        DownloadStatus::Loading => "Downloading…".to_string(),
        DownloadStatus::Done => "Downloaded".to_string(),
        DownloadStatus::Error => "Retry".to_string(),
    };
    let opacity = if loading { "0.6" } else { "1" };
    let cursor = if loading { "not-allowed" } else { "pointer" };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; align-items: flex-start; gap: 4px;",
            button {
                disabled: loading,
                onclick: move |evt| props.on_click.call(evt),
                style: "display: flex; align-items: center; gap: 8px; min-width: 188px; padding: 8px 16px; border: none; border-radius: 8px; font-size: 13px; font-weight: 600; color: #ffffff; background: {props.color}; opacity: {opacity}; cursor: {cursor};",
                "{text}"
            }
            match props.status {
                DownloadStatus::Loading => rsx! {
                    p {
                        style: "margin: 0; padding-left: 4px; font-size: 11px; color: #9ca3af;",
                        "Download in progress, please wait…"
                    }
                },
                DownloadStatus::Done => rsx! {
                    p {
                        style: "margin: 0; padding-left: 4px; font-size: 11px; color: #22c55e;",
                        "File saved successfully."
                    }
                },
                DownloadStatus::Error => rsx! {
                    p {
                        style: "margin: 0; padding-left: 4px; font-size: 11px; color: #ef4444;",
                        "Download failed. Click to retry."
                    }
                },
                DownloadStatus::Idle => rsx! {},
            }
        }
    }
}
