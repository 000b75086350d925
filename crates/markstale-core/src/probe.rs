use crate::cutoff::Cutoff;
use crate::error::Result;
use crate::marker::{MarkerPattern, modified_time};
use std::path::Path;
use walkdir::WalkDir;

/// Answers whether a project directory holds at least one marker at or after the cutoff.
pub trait FreshnessProbe {
    fn has_fresh_marker(&self, dir: &Path) -> Result<bool>;
}

/// Probes the direct children of a directory on disk, stopping at the first fresh marker.
#[derive(Debug, Clone)]
pub struct FsProbe {
    pattern: MarkerPattern,
    cutoff: Cutoff,
}

impl FsProbe {
    pub fn new(pattern: MarkerPattern, cutoff: Cutoff) -> Self {
        Self { pattern, cutoff }
    }
}

impl FreshnessProbe for FsProbe {
    fn has_fresh_marker(&self, dir: &Path) -> Result<bool> {
        let entries = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false);

        for entry in entries {
            let entry = entry?;

            if !self.pattern.is_marker(&entry) {
                continue;
            }

            if self.cutoff.is_fresh(modified_time(&entry)?) {
                tracing::trace!(marker = %entry.path().display(), "fresh marker");
                return Ok(true);
            }
        }

        Ok(false)
    }
}
