//! Image asset discovery and path mapping.

mod route;
mod scan;

// Types
pub use route::{AssetPath, ThumbRoute};

// Scanning (pure functions)
pub use scan::discover;
