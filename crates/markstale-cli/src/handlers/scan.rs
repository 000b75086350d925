use crate::presentation::{ConsoleView, JsonView, ScanHeader, ScanView};
use crate::types::OutputFormat;
use anyhow::Result;
use is_terminal::IsTerminal;
use markstale_core::{ScanOptions, Scanner};
use std::io;

pub fn handle(options: &ScanOptions, format: OutputFormat, show_summary: bool) -> Result<()> {
    // Validation and cutoff errors surface here, before anything is printed.
    let scanner = Scanner::new(options)?;
    let header = ScanHeader::from_scanner(&scanner);

    let stdout = io::stdout();
    match format {
        OutputFormat::Plain => {
            let styled = stdout.is_terminal();
            let mut view = ConsoleView::new(stdout.lock(), styled, show_summary);
            render(&scanner, &header, &mut view)
        }
        OutputFormat::Json => {
            let mut view = JsonView::new(stdout.lock());
            render(&scanner, &header, &mut view)
        }
    }
}

fn render<V: ScanView>(scanner: &Scanner, header: &ScanHeader, view: &mut V) -> Result<()> {
    view.render_start(header)?;
    let summary = scanner.run(view)?;
    view.render_finish(&summary)
}
