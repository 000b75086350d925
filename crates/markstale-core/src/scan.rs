//! Scan driver.
//!
//! Walks the old markers of a mirror tree and classifies each parent project
//! directory the first time it shows up. The probe runs at most once per
//! directory, so the cost is linear in the number of distinct directories
//! holding an old marker.

use crate::classify::{Classification, ClassificationCache};
use crate::cutoff::{Cutoff, CutoffMode, DEFAULT_DAYS};
use crate::error::{Error, Result};
use crate::marker::{DEFAULT_SUFFIX, MarkerPattern, old_markers};
use crate::probe::{FreshnessProbe, FsProbe};
use crate::report::StaleReporter;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// User-facing scan settings, validated before any traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    pub root: PathBuf,
    pub days: u32,
    pub mode: CutoffMode,
    pub suffix: String,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            days: DEFAULT_DAYS,
            mode: CutoffMode::default(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

impl ScanOptions {
    pub fn validate(&self) -> Result<MarkerPattern> {
        let pattern = MarkerPattern::new(self.suffix.clone())?;

        match std::fs::metadata(&self.root) {
            Ok(metadata) if metadata.is_dir() => Ok(pattern),
            Ok(_) => Err(Error::config(format!(
                "root is not a directory: {}",
                self.root.display()
            ))),
            Err(err) => Err(Error::config(format!(
                "cannot access root {}: {}",
                self.root.display(),
                err
            ))),
        }
    }
}

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    /// Markers older than the cutoff, including repeats within one directory.
    pub old_markers: usize,
    /// Directories handed to the freshness probe.
    pub probed: usize,
    pub fresh: usize,
    pub stale: usize,
}

#[derive(Debug, Clone)]
pub struct Scanner {
    root: PathBuf,
    pattern: MarkerPattern,
    cutoff: Cutoff,
}

impl Scanner {
    /// Validate `options` and compute the run's cutoff from the current time.
    pub fn new(options: &ScanOptions) -> Result<Self> {
        let pattern = options.validate()?;
        let cutoff = Cutoff::from_days(options.days, options.mode)?;
        Ok(Self::with_cutoff(&options.root, pattern, cutoff))
    }

    pub fn with_cutoff(root: &Path, pattern: MarkerPattern, cutoff: Cutoff) -> Self {
        Self {
            root: root.to_path_buf(),
            pattern,
            cutoff,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn pattern(&self) -> &MarkerPattern {
        &self.pattern
    }

    pub fn cutoff(&self) -> Cutoff {
        self.cutoff
    }

    pub fn run<R>(&self, reporter: &mut R) -> Result<ScanSummary>
    where
        R: StaleReporter + ?Sized,
    {
        let probe = FsProbe::new(self.pattern.clone(), self.cutoff);
        self.run_with_probe(&probe, reporter)
    }

    pub fn run_with_probe<P, R>(&self, probe: &P, reporter: &mut R) -> Result<ScanSummary>
    where
        P: FreshnessProbe + ?Sized,
        R: StaleReporter + ?Sized,
    {
        let mut cache = ClassificationCache::new();
        let mut summary = ScanSummary::default();

        tracing::debug!(
            root = %self.root.display(),
            suffix = self.pattern.suffix(),
            cutoff = %self.cutoff,
            "scan started"
        );

        for entry in old_markers(&self.root, &self.pattern, self.cutoff) {
            let entry = entry?;
            summary.old_markers += 1;

            if cache.is_classified(&entry.project_dir) {
                continue;
            }

            summary.probed += 1;
            let classification = if probe.has_fresh_marker(&entry.project_dir)? {
                Classification::Fresh
            } else {
                Classification::Stale
            };
            cache.record(&entry.project_dir, classification);

            tracing::debug!(
                dir = %entry.project_dir.display(),
                %classification,
                "classified"
            );

            if classification == Classification::Stale {
                reporter.report(&entry.project_dir)?;
            }
        }

        summary.fresh = cache.count(Classification::Fresh);
        summary.stale = cache.count(Classification::Stale);

        tracing::info!(
            old_markers = summary.old_markers,
            probed = summary.probed,
            fresh = summary.fresh,
            stale = summary.stale,
            "scan finished"
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_options() {
        let options = ScanOptions::default();
        assert_eq!(options.root, PathBuf::from("."));
        assert_eq!(options.days, 5);
        assert_eq!(options.mode, CutoffMode::Elapsed);
        assert_eq!(options.suffix, ".hash");
    }

    #[test]
    fn test_validate_rejects_missing_root() {
        let temp = TempDir::new().unwrap();
        let options = ScanOptions {
            root: temp.path().join("missing"),
            ..ScanOptions::default()
        };

        assert!(matches!(options.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_validate_rejects_file_root() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file");
        std::fs::write(&file, "").unwrap();

        let options = ScanOptions {
            root: file,
            ..ScanOptions::default()
        };

        let err = options.validate().unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn test_validate_rejects_empty_suffix() {
        let temp = TempDir::new().unwrap();
        let options = ScanOptions {
            root: temp.path().to_path_buf(),
            suffix: String::new(),
            ..ScanOptions::default()
        };

        assert!(matches!(options.validate(), Err(Error::Config(_))));
    }
}
