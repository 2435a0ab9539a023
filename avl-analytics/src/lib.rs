//! Pure derived-value functions behind the AVILIGHT views.
//!
//! Everything in this crate is deterministic: affine map projections for the
//! two SVG maps, the richness lookup with its wildcard fallback chain, the
//! richness heatmap colormap, the prediction-sandbox formula, the generated
//! observation series, and SVG chart geometry helpers. No I/O and no state;
//! the database and UI layers call into here.

pub mod chartgeom;
pub mod colormap;
pub mod paging;
pub mod prediction;
pub mod projection;
pub mod richness;
pub mod series;
