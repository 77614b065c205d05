//! Thumbnail rewriter.
//!
//! ```text
//! discover ─→ route ─→ materialize (parallel) ─→ PathMap ─→ rewrite documents
//! ```
//!
//! Thumbnails mirror the asset tree under the thumbnail root. Only assets
//! whose thumbnail is in place after materialization enter the map, so a
//! failed resize leaves the page pointing at the original.

mod mapping;
mod resize;
mod rewrite;

pub use mapping::PathMap;
pub use resize::materialize_all;
pub use rewrite::rewrite_sources;
