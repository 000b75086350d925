use super::args::Cli;
use super::handlers;
use super::logging;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let options = cli.scan_options();
    tracing::debug!(?options, format = %cli.format, "parsed arguments");

    handlers::scan::handle(&options, cli.format, cli.summary)
}

/// Exit code for a failed run: configuration problems are 2, everything else 1.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<markstale_core::Error>()
        .map_or(1, markstale_core::Error::exit_code)
}
