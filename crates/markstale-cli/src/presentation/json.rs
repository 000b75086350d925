use super::traits::ScanView;
use super::view_models::{ScanHeader, ScanReport};
use anyhow::{Context, Result};
use markstale_core::{ScanSummary, StaleReporter};
use std::io::Write;
use std::path::Path;

/// Collects the run and writes a single JSON document when it finishes.
pub struct JsonView<W: Write> {
    out: W,
    header: Option<ScanHeader>,
    stale: Vec<String>,
}

impl<W: Write> JsonView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            header: None,
            stale: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StaleReporter for JsonView<W> {
    fn report(&mut self, dir: &Path) -> markstale_core::Result<()> {
        self.stale.push(dir.display().to_string());
        Ok(())
    }
}

impl<W: Write> ScanView for JsonView<W> {
    fn render_start(&mut self, header: &ScanHeader) -> Result<()> {
        self.header = Some(header.clone());
        Ok(())
    }

    fn render_finish(&mut self, summary: &ScanSummary) -> Result<()> {
        let header = self
            .header
            .take()
            .context("scan finished before it was started")?;

        let report = ScanReport {
            header,
            stale: std::mem::take(&mut self.stale),
            summary: *summary,
        };

        serde_json::to_writer_pretty(&mut self.out, &report)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
