use anyhow::Result;
use std::path::PathBuf;

use crate::io;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(".eppi.toml");

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# eppi configuration

# compat: unrecognized field values score zero (original behavior)
# strict: unrecognized field values abort with a validation error
mode = "compat"

# Weights combining the Environmental Index and practicality into the total.
# Must sum to 1.0.
[weights]
ei = 0.5
practicality = 0.5
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created .eppi.toml configuration file");

    Ok(())
}
