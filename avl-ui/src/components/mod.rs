//! Reusable Dioxus RSX components for the AVILIGHT app.

mod badge;
mod download_button;
mod error_display;
mod loading_spinner;
mod pagination;
mod stat_card;
mod toast;
mod year_select;

pub use badge::Badge;
pub use download_button::{DownloadButton, DownloadStatus};
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use pagination::Pagination;
pub use stat_card::StatCard;
pub use toast::Toast;
pub use year_select::YearSelect;
