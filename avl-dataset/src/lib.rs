pub mod cities;
pub mod constants;
pub mod geo;
pub mod series;
pub mod species;
