use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::io::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "eppi")]
#[command(about = "Greenness and practicality scorer for analytical chemistry methods", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a method profile and report the indices
    Score {
        /// Path to the profile (JSON, YAML, or TOML by extension)
        profile: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail on unrecognized field values instead of scoring them as zero
        #[arg(long)]
        strict: bool,

        /// Configuration file (defaults to .eppi.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Increase verbosity (repeatable); -v adds the component breakdown
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Write a starter .eppi.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Emit a fully-populated example profile in JSON
    Template {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
