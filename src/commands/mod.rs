//! CLI command implementations.
//!
//! - **score**: load a profile, run the scoring pipeline, render a report
//! - **init**: write a starter `.eppi.toml`
//! - **template**: emit an example profile document

pub mod init;
pub mod score;
pub mod template;

pub use init::init_config;
pub use score::{run_score, ScoreCommandConfig};
pub use template::write_template;
