//! Configuration section definitions.
//!
//! Each module corresponds to a section in `gallerize.toml`:
//!
//! | Module   | TOML Section | Purpose                                   |
//! |----------|--------------|-------------------------------------------|
//! | `assets` | `[assets]`   | Asset root and accepted image extensions  |
//! | `index`  | `[index]`    | Gallery indexer target and markup         |
//! | `thumbs` | `[thumbs]`   | Thumbnail generation and `src` rewriting  |

mod assets;
mod index;
mod thumbs;

pub use assets::AssetsConfig;
pub use index::IndexConfig;
pub use thumbs::{RefreshPolicy, Resizer, ThumbsConfig};
