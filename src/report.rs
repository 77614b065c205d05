//! Per-item results of a batch run.
//!
//! Every asset and document touched by a command ends up as one
//! [`ItemReport`]. Nothing in a run is fatal: failures are collected here
//! and printed once the batch is over.

use std::fmt;

use crate::{debug, log};

/// Result of processing one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The item was processed (thumbnail written, document updated).
    Done,
    /// Nothing to do, with the reason.
    Skipped(String),
    /// Processing failed, with the reason. The run carried on.
    Failed(String),
}

impl Outcome {
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self::Skipped(reason.into())
    }

    pub fn failed(reason: impl fmt::Display) -> Self {
        Self::Failed(reason.to_string())
    }

    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// One processed item.
#[derive(Debug, Clone)]
pub struct ItemReport {
    /// Display name, usually a project-relative path.
    pub item: String,
    pub outcome: Outcome,
}

/// Collected outcomes of one kind of item (assets, documents).
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Log module used when printing, e.g. `thumbs`.
    module: &'static str,
    items: Vec<ItemReport>,
    warnings: Vec<String>,
}

impl RunReport {
    pub const fn new(module: &'static str) -> Self {
        Self {
            module,
            items: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn push(&mut self, item: impl Into<String>, outcome: Outcome) {
        self.items.push(ItemReport {
            item: item.into(),
            outcome,
        });
    }

    /// Record a condition worth surfacing that isn't tied to a failed item.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    #[cfg(test)]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn done(&self) -> usize {
        self.items.iter().filter(|i| i.outcome.is_done()).count()
    }

    pub fn failed(&self) -> usize {
        self.items.iter().filter(|i| i.outcome.is_failed()).count()
    }

    pub fn skipped(&self) -> usize {
        self.len() - self.done() - self.failed()
    }

    /// Outcome recorded for `item`, if any.
    pub fn outcome_of(&self, item: &str) -> Option<&Outcome> {
        self.items
            .iter()
            .find(|i| i.item == item)
            .map(|i| &i.outcome)
    }

    /// Print warnings and failures. Skips only show with `--verbose`.
    pub fn print_details(&self) {
        for warning in &self.warnings {
            log!("warning"; "{}", warning);
        }
        for item in &self.items {
            match &item.outcome {
                Outcome::Done => {}
                Outcome::Skipped(reason) => debug!(self.module; "skipped {}: {}", item.item, reason),
                Outcome::Failed(reason) => log!("error"; "{}: {}", item.item, reason),
            }
        }
    }
}
