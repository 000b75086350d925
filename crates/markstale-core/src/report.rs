use crate::error::Result;
use std::path::{Path, PathBuf};

/// Receives each stale project directory once, at the moment it is confirmed.
pub trait StaleReporter {
    fn report(&mut self, dir: &Path) -> Result<()>;
}

impl StaleReporter for Vec<PathBuf> {
    fn report(&mut self, dir: &Path) -> Result<()> {
        self.push(dir.to_path_buf());
        Ok(())
    }
}
