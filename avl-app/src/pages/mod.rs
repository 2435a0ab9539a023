//! One module per routed page.

mod analytics;
mod dashboard;
mod home;
mod landing;
mod reports;
mod settings;
mod species;

pub use analytics::Analytics;
pub use dashboard::Dashboard;
pub use home::Home;
pub use landing::Landing;
pub use reports::Reports;
pub use settings::Settings;
pub use species::Species;
