//! Marker files and the old-marker enumerator.
//!
//! A marker is a regular file directly inside a project directory whose name
//! ends with the marker suffix (`.hash` by default, the sidecar the mirror
//! writes next to every verified artifact). Its modification time is the
//! project's "last touched" instant.

use crate::cutoff::Cutoff;
use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::{DirEntry, WalkDir};

pub const DEFAULT_SUFFIX: &str = ".hash";

/// File-name pattern recognizing marker files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPattern {
    suffix: String,
}

impl MarkerPattern {
    pub fn new(suffix: impl Into<String>) -> Result<Self> {
        let suffix = suffix.into();

        if suffix.is_empty() {
            return Err(Error::config("marker suffix must not be empty"));
        }

        if suffix.contains('/') || suffix.contains(std::path::MAIN_SEPARATOR) {
            return Err(Error::config(format!(
                "marker suffix must be a file-name suffix, got '{}'",
                suffix
            )));
        }

        Ok(Self { suffix })
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// A bare suffix (e.g. a file named `.hash`) is not a marker.
    pub fn matches(&self, file_name: &OsStr) -> bool {
        let name = file_name.as_encoded_bytes();
        name.len() > self.suffix.len() && name.ends_with(self.suffix.as_bytes())
    }

    pub(crate) fn is_marker(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_file() && self.matches(entry.file_name())
    }
}

impl Default for MarkerPattern {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

/// An old marker, as yielded by [`OldMarkers`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerEntry {
    pub path: PathBuf,
    pub project_dir: PathBuf,
    pub modified: SystemTime,
}

/// Lazy sequence of markers at `root/<dir>/<marker>` strictly older than the cutoff.
///
/// Entries come in file-name order. Symlinks are neither followed nor treated
/// as markers. The first traversal error is yielded as `Err`.
pub struct OldMarkers {
    walker: walkdir::IntoIter,
    pattern: MarkerPattern,
    cutoff: Cutoff,
}

impl OldMarkers {
    pub fn new(root: &Path, pattern: &MarkerPattern, cutoff: Cutoff) -> Self {
        let walker = WalkDir::new(root)
            .min_depth(2)
            .max_depth(2)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        Self {
            walker,
            pattern: pattern.clone(),
            cutoff,
        }
    }
}

impl Iterator for OldMarkers {
    type Item = Result<MarkerEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(err) => return Some(Err(err.into())),
            };

            if !self.pattern.is_marker(&entry) {
                continue;
            }

            let modified = match modified_time(&entry) {
                Ok(modified) => modified,
                Err(err) => return Some(Err(err)),
            };

            if !self.cutoff.is_old(modified) {
                continue;
            }

            let Some(project_dir) = entry.path().parent() else {
                continue;
            };

            tracing::trace!(marker = %entry.path().display(), "old marker");

            return Some(Ok(MarkerEntry {
                path: entry.path().to_path_buf(),
                project_dir: project_dir.to_path_buf(),
                modified,
            }));
        }
    }
}

/// Enumerate markers older than `cutoff` one level beneath `root`.
pub fn old_markers(root: &Path, pattern: &MarkerPattern, cutoff: Cutoff) -> OldMarkers {
    OldMarkers::new(root, pattern, cutoff)
}

pub(crate) fn modified_time(entry: &DirEntry) -> Result<SystemTime> {
    let metadata = entry.metadata()?;
    metadata
        .modified()
        .map_err(|err| Error::traversal(entry.path(), err))
}
