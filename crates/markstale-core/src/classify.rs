use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Final status of a project directory within one run.
///
/// Directories missing from the [`ClassificationCache`] are unclassified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// At least one marker at or after the cutoff.
    Fresh,
    /// Has old markers and none at or after the cutoff.
    Stale,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Fresh => write!(f, "fresh"),
            Classification::Stale => write!(f, "stale"),
        }
    }
}

/// Per-directory classification, set at most once per run.
#[derive(Debug, Default)]
pub struct ClassificationCache {
    entries: HashMap<PathBuf, Classification>,
}

impl ClassificationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, dir: &Path) -> Option<Classification> {
        self.entries.get(dir).copied()
    }

    pub fn is_classified(&self, dir: &Path) -> bool {
        self.entries.contains_key(dir)
    }

    /// Record `classification` for `dir` unless it already has one.
    ///
    /// Returns the classification in effect afterwards; an existing value is never replaced.
    pub fn record(&mut self, dir: &Path, classification: Classification) -> Classification {
        *self
            .entries
            .entry(dir.to_path_buf())
            .or_insert(classification)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, classification: Classification) -> usize {
        self.entries
            .values()
            .filter(|c| **c == classification)
            .count()
    }
}
