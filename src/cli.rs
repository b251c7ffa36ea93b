use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Track job applications in a desktop window
#[derive(Parser, Debug)]
#[command(name = "job-tracker", version, about)]
pub struct Cli {
    /// Database connection URL (overrides DATABASE_URL)
    #[arg(long, value_name = "URL")]
    pub database_url: Option<String>,

    /// Directory for log files (overrides LOG_DIR)
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Open the tracker window (default)
    #[default]
    Run,
    /// Check that the database is reachable
    Check,
    /// Print every application as JSON
    Export,
}
