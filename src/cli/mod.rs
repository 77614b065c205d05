//! Command-line interface module.

mod args;
mod common;
pub mod index;
pub mod thumbs;

pub use args::{Cli, Commands, DEFAULT_CONFIG};
