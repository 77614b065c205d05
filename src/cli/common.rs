//! Document I/O shared by the indexer and the rewriter.
//!
//! Each page is read once, transformed in memory and written at most once.
//! Problems with a single page become report entries, never errors.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::debug;
use crate::report::{Outcome, RunReport};

/// Skip reason of pages whose transformation changed nothing.
pub const UNCHANGED: &str = "unchanged";

/// Read a page, recording why it can't be processed if it can't.
pub fn read_document(path: &Path, name: &str, report: &mut RunReport) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            report.warn(format!("document `{name}` not found"));
            report.push(name, Outcome::skipped("not found"));
            None
        }
        Err(e) => {
            report.push(name, Outcome::failed(format!("failed to read: {e}")));
            None
        }
    }
}

/// Write `updated` over `path` if it differs from `original`.
pub fn write_document(path: &Path, original: &str, updated: &str, dry: bool) -> Outcome {
    if original == updated {
        return Outcome::skipped(UNCHANGED);
    }
    if dry {
        debug!("dry"; "would update {}", path.display());
        return Outcome::Done;
    }
    match fs::write(path, updated) {
        Ok(()) => Outcome::Done,
        Err(e) => Outcome::failed(format!("failed to write: {e}")),
    }
}
