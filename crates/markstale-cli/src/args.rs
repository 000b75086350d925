use crate::types::{CutoffModeArg, LogLevel, OutputFormat};
use clap::Parser;
use markstale_core::{DEFAULT_SUFFIX, ScanOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "markstale")]
#[command(
    about = "List project directories whose marker files are all older than a threshold",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Age threshold in days
    #[arg(
        default_value = "5",
        value_parser = parse_days,
        allow_negative_numbers = true
    )]
    pub days: u32,

    /// Root of the mirror tree; project directories are its direct children
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// File-name suffix identifying marker files
    #[arg(long, default_value = DEFAULT_SUFFIX)]
    pub suffix: String,

    #[arg(long, default_value = "elapsed")]
    pub cutoff_mode: CutoffModeArg,

    #[arg(long, default_value = "plain")]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,

    /// Print scan counters after the list (plain format only)
    #[arg(long)]
    pub summary: bool,
}

impl Cli {
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            root: self.root.clone(),
            days: self.days,
            mode: self.cutoff_mode.into(),
            suffix: self.suffix.clone(),
        }
    }
}

fn parse_days(value: &str) -> Result<u32, String> {
    let trimmed = value.trim();

    if trimmed.starts_with('-') && trimmed[1..].chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("days must not be negative, got '{}'", value));
    }

    trimmed
        .parse::<u32>()
        .map_err(|_| format!("days must be a non-negative integer, got '{}'", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["markstale"]).unwrap();

        assert_eq!(cli.days, 5);
        assert_eq!(cli.root, PathBuf::from("."));
        assert_eq!(cli.suffix, ".hash");
        assert_eq!(cli.cutoff_mode, CutoffModeArg::Elapsed);
        assert_eq!(cli.format, OutputFormat::Plain);
        assert_eq!(cli.log_level, LogLevel::Warn);
        assert!(!cli.summary);
    }

    #[test]
    fn test_days_and_flags() {
        let cli = Cli::try_parse_from([
            "markstale",
            "30",
            "--root",
            "/srv/mirror/packages",
            "--cutoff-mode",
            "calendar",
            "--format",
            "json",
        ])
        .unwrap();

        let options = cli.scan_options();
        assert_eq!(options.days, 30);
        assert_eq!(options.root, PathBuf::from("/srv/mirror/packages"));
        assert_eq!(options.mode, markstale_core::CutoffMode::Calendar);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_zero_days_allowed() {
        let cli = Cli::try_parse_from(["markstale", "0"]).unwrap();
        assert_eq!(cli.days, 0);
    }

    #[test]
    fn test_negative_days_rejected() {
        let err = Cli::try_parse_from(["markstale", "-3"]).unwrap_err();
        assert!(err.to_string().contains("must not be negative"));
    }

    #[test]
    fn test_non_numeric_days_rejected() {
        let err = Cli::try_parse_from(["markstale", "five"]).unwrap_err();
        assert!(err.to_string().contains("non-negative integer"));
    }

    #[test]
    fn test_parse_days() {
        assert_eq!(parse_days("7"), Ok(7));
        assert_eq!(parse_days(" 7 "), Ok(7));
        assert!(parse_days("-0").is_err());
        assert!(parse_days("1.5").is_err());
        assert!(parse_days("").is_err());
        assert!(parse_days("99999999999").is_err());
    }
}
