use super::traits::ScanView;
use super::view_models::ScanHeader;
use anyhow::Result;
use markstale_core::{ScanSummary, StaleReporter};
use owo_colors::OwoColorize;
use std::io::Write;
use std::path::Path;

/// Streams one stale directory per line as soon as it is confirmed.
pub struct ConsoleView<W: Write> {
    out: W,
    styled: bool,
    show_summary: bool,
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W, styled: bool, show_summary: bool) -> Self {
        Self {
            out,
            styled,
            show_summary,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_note(&mut self, line: &str) -> Result<()> {
        if self.styled {
            writeln!(self.out, "{}", line.dimmed())?;
        } else {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }
}

impl<W: Write> StaleReporter for ConsoleView<W> {
    fn report(&mut self, dir: &Path) -> markstale_core::Result<()> {
        writeln!(self.out, "{}", dir.display())?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> ScanView for ConsoleView<W> {
    fn render_start(&mut self, header: &ScanHeader) -> Result<()> {
        let unit = if header.days == 1 { "day" } else { "days" };
        let line = format!(
            "Looking for projects not touched in {} {} (cutoff {}, {})",
            header.days, unit, header.cutoff, header.cutoff_mode
        );
        self.write_note(&line)?;
        self.out.flush()?;
        Ok(())
    }

    fn render_finish(&mut self, summary: &ScanSummary) -> Result<()> {
        if self.show_summary {
            let line = format!(
                "{} stale, {} fresh ({} old markers, {} directories probed)",
                summary.stale, summary.fresh, summary.old_markers, summary.probed
            );
            self.write_note(&line)?;
        }
        self.out.flush()?;
        Ok(())
    }
}
