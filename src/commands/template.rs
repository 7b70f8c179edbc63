use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;

use crate::io::write_file;
use crate::profile::MethodProfile;

/// Emit a fully-populated example profile so integrators can see the wire
/// format with every key present.
pub fn write_template(output: Option<&Path>) -> Result<()> {
    let rendered = serde_json::to_string_pretty(&MethodProfile::template())?;
    match output {
        Some(path) => write_file(path, &rendered)?,
        None => {
            let mut stdout = io::stdout();
            stdout.write_all(rendered.as_bytes())?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}
