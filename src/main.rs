use anyhow::Result;
use clap::Parser;
use eppi::cli::{Cli, Commands};
use eppi::commands::{init_config, run_score, write_template, ScoreCommandConfig};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            profile,
            format,
            output,
            strict,
            config,
            verbosity,
        } => run_score(ScoreCommandConfig {
            profile,
            format,
            output,
            strict,
            config,
            verbosity,
        }),
        Commands::Init { force } => init_config(force),
        Commands::Template { output } => write_template(output.as_deref()),
    }
}
