//! Command-line flags, each backed by an environment variable.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use gildedrose_observability::LogFormat;

/// How the day-by-day report is written to stdout.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// `name, sellIn, quality` blocks, one per day.
    #[default]
    Text,
    /// A JSON array of day snapshots.
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "gilded-rose")]
#[command(about = "Simulate the Gilded Rose inventory day by day.")]
pub struct CommandLine {
    /// Number of days to simulate
    #[arg(long, env = "GILDED_ROSE_DAYS", default_value_t = 2)]
    pub days: u32,

    /// Inventory file, one "<name>, <sellIn>, <quality>" per line (defaults to the standard stock)
    #[arg(long, env = "GILDED_ROSE_INVENTORY")]
    pub inventory: Option<PathBuf>,

    /// Report format
    #[arg(long, env = "GILDED_ROSE_FORMAT", value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Log format (json or compact); logs go to stderr
    #[arg(long, env = "GILDED_ROSE_LOG_FORMAT", default_value = "json")]
    pub log_format: LogFormat,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub days: u32,
    pub inventory: Option<PathBuf>,
    pub format: ReportFormat,
    pub log_format: LogFormat,
}

impl From<CommandLine> for Config {
    fn from(cli: CommandLine) -> Self {
        Self {
            days: cli.days,
            inventory: cli.inventory,
            format: cli.format,
            log_format: cli.log_format,
        }
    }
}
