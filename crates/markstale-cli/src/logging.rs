use crate::types::LogLevel;
use tracing_subscriber::EnvFilter;

/// Send diagnostics to stderr so stdout stays a clean list of paths.
pub fn init(level: LogLevel) {
    // Matches markstale_cli and markstale_core by prefix.
    let filter = EnvFilter::new(format!("markstale={level}"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
