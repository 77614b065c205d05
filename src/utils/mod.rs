//! Shared utilities.
//!
//! - [`exec`]: external command builder with timeouts
//! - [`html`]: HTML text escaping
//! - [`path`]: path normalization and web-path rendering

pub mod exec;
pub mod html;
pub mod path;

/// Format count with noun, handling pluralization
///
/// # Examples
///
/// - `plural_count(0, "image")` -> `"0 images"`
/// - `plural_count(1, "image")` -> `"1 image"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}
