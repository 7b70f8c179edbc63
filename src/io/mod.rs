//! File I/O: profile loading by extension and small write helpers.

pub mod output;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::profile::MethodProfile;

/// Read a method profile from disk, picking the parser by file extension.
///
/// JSON is the native wire format; YAML and TOML documents with the same
/// shape are accepted for hand-written profiles.
pub fn read_profile(path: &Path) -> Result<MethodProfile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read profile {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("json")
        .to_ascii_lowercase();

    let profile = match extension.as_str() {
        "yaml" | "yml" => serde_yaml::from_str(&content)
            .with_context(|| format!("invalid YAML profile {}", path.display()))?,
        "toml" => toml::from_str(&content)
            .with_context(|| format!("invalid TOML profile {}", path.display()))?,
        _ => serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON profile {}", path.display()))?,
    };
    Ok(profile)
}

/// Write content to a file, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::io::Write as _;

    #[test]
    fn reads_json_profile() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"waste":{{"volume":"between1And10","biodegradable":false,"treatment":"none"}}}}"#
        )
        .unwrap();
        let profile = read_profile(file.path()).unwrap();
        assert!(!profile.waste.biodegradable);
    }

    #[test]
    fn reads_yaml_profile() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        let yaml = indoc! {"
            instrumentation:
              energy: moderate
              vaporEmission: true
        "};
        write!(file, "{yaml}").unwrap();
        let profile = read_profile(file.path()).unwrap();
        assert!(profile.instrumentation.vapor_emission);
    }

    #[test]
    fn read_profile_reports_missing_file() {
        let err = read_profile(Path::new("/nonexistent/profile.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read profile"));
    }
}
