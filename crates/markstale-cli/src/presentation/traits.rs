use super::view_models::ScanHeader;
use anyhow::Result;
use markstale_core::{ScanSummary, StaleReporter};

/// A stale reporter that also frames the run with a start and a finish.
pub trait ScanView: StaleReporter {
    fn render_start(&mut self, header: &ScanHeader) -> Result<()>;
    fn render_finish(&mut self, summary: &ScanSummary) -> Result<()>;
}
