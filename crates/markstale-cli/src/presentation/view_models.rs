use markstale_core::{CutoffMode, ScanSummary, Scanner};
use serde::Serialize;

/// What a run is about to do, shown before any result.
#[derive(Debug, Clone, Serialize)]
pub struct ScanHeader {
    pub days: u32,
    pub cutoff_mode: CutoffMode,
    pub cutoff: String,
    pub root: String,
    pub suffix: String,
}

impl ScanHeader {
    pub fn from_scanner(scanner: &Scanner) -> Self {
        let cutoff = scanner.cutoff();
        Self {
            days: cutoff.days(),
            cutoff_mode: cutoff.mode(),
            cutoff: cutoff.to_rfc3339(),
            root: scanner.root().display().to_string(),
            suffix: scanner.pattern().suffix().to_string(),
        }
    }
}

/// Complete result of a run, as rendered by `--format json`.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    #[serde(flatten)]
    pub header: ScanHeader,
    pub stale: Vec<String>,
    pub summary: ScanSummary,
}
