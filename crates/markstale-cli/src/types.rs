use clap::ValueEnum;
use markstale_core::CutoffMode;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CutoffModeArg {
    /// now minus days x 24h
    Elapsed,
    /// start of today (local time) minus days calendar days
    Calendar,
}

impl fmt::Display for CutoffModeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CutoffModeArg::Elapsed => write!(f, "elapsed"),
            CutoffModeArg::Calendar => write!(f, "calendar"),
        }
    }
}

impl From<CutoffModeArg> for CutoffMode {
    fn from(mode: CutoffModeArg) -> Self {
        match mode {
            CutoffModeArg::Elapsed => CutoffMode::Elapsed,
            CutoffModeArg::Calendar => CutoffMode::Calendar,
        }
    }
}
