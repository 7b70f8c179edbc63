//! The `score` command: profile in, report out.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::{ScoreConfig, ScoringMode};
use crate::io::output::{create_writer, OutputFormat, ScoreReport};
use crate::io::read_profile;
use crate::scoring::pipeline::score_method_detailed;

/// Resolved options for one `score` invocation.
#[derive(Debug)]
pub struct ScoreCommandConfig {
    pub profile: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub strict: bool,
    pub config: Option<PathBuf>,
    pub verbosity: u8,
}

/// Load configuration, score the profile, and write the report.
pub fn run_score(cmd: ScoreCommandConfig) -> Result<()> {
    let mut config = match &cmd.config {
        Some(path) => ScoreConfig::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ScoreConfig::load()?,
    };
    if cmd.strict {
        config.mode = ScoringMode::Strict;
    }

    let profile = read_profile(&cmd.profile)?;
    let (result, breakdown) = score_method_detailed(&profile, &config)
        .with_context(|| format!("failed to score {}", cmd.profile.display()))?;

    let breakdown = (cmd.verbosity > 0).then_some(breakdown);
    let report = ScoreReport::new(result, breakdown);

    let mut writer = match &cmd.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            create_writer(cmd.format, file)
        }
        None => create_writer(cmd.format, io::stdout()),
    };
    writer.write_report(&report)?;
    io::stdout().flush()?;
    Ok(())
}
