//! CLI argument parsing for verdict
//!
//! Supports global flags: --format, --quiet, --verbose, --log-level,
//! --log-json. Both actions take the same pair of file paths so a demo run
//! can be replayed as a judge run without editing the command line.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use verdict_core::format::OutputFormat;

/// Verdict - fault-localization grading CLI
#[derive(Parser, Debug)]
#[command(name = "verdict")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. debug, verdict=trace)
    #[arg(long, global = true, env = "VERDICT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Grade a submitted result against the ground truth
    Judge {
        /// Ground-truth file (.csv, .yaml/.yml, or JSON)
        #[arg(long, short, default_value = "answer.json")]
        answer: PathBuf,

        /// Submitted result file (.csv, .yaml/.yml, or JSON)
        #[arg(long, short, default_value = "result.csv")]
        result: PathBuf,
    },

    /// Write a sample answer/result pair for a trial run
    Demo {
        /// Destination for the sample ground truth
        #[arg(long, short, default_value = "answer.json")]
        answer: PathBuf,

        /// Destination for the sample result
        #[arg(long, short, default_value = "result.csv")]
        result: PathBuf,
    },
}
