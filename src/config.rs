//! Scoring configuration: mode, index weights, and the optional `.eppi.toml`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::ScoreError;

/// How the engine treats unrecognized wire spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    /// Original behavior: an unrecognized spelling or unmatched hazard
    /// combination contributes zero to its term and scoring completes.
    #[default]
    Compat,
    /// Fail fast: the first unrecognized spelling aborts with a
    /// [`ScoreError`].
    Strict,
}

impl ScoringMode {
    pub fn is_strict(&self) -> bool {
        matches!(self, ScoringMode::Strict)
    }
}

/// Weights combining the Environmental Index and the practicality score into
/// the total. Must each lie in [0,1] and sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexWeights {
    #[serde(default = "default_ei_weight")]
    pub ei: f64,
    #[serde(default = "default_practicality_weight")]
    pub practicality: f64,
}

fn default_ei_weight() -> f64 {
    0.5
}

fn default_practicality_weight() -> f64 {
    0.5
}

impl Default for IndexWeights {
    fn default() -> Self {
        Self {
            ei: default_ei_weight(),
            practicality: default_practicality_weight(),
        }
    }
}

impl IndexWeights {
    /// Validate ranges and that the weights sum to 1.0 (small float tolerance).
    pub fn validate(&self) -> Result<(), ScoreError> {
        for (name, value) in [("ei", self.ei), ("practicality", self.practicality)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ScoreError::InvalidWeights(format!(
                    "{} weight must be between 0.0 and 1.0, got {}",
                    name, value
                )));
            }
        }
        let sum = self.ei + self.practicality;
        if (sum - 1.0).abs() > 0.001 {
            return Err(ScoreError::InvalidWeights(format!(
                "weights must sum to 1.0, but sum to {:.3}",
                sum
            )));
        }
        Ok(())
    }
}

/// Full scoring configuration, loadable from `.eppi.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreConfig {
    #[serde(default)]
    pub mode: ScoringMode,
    #[serde(default)]
    pub weights: IndexWeights,
}

impl ScoreConfig {
    /// Strict-mode configuration with default weights.
    pub fn strict() -> Self {
        Self {
            mode: ScoringMode::Strict,
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.weights.validate()?;
        Ok(config)
    }

    /// Load `.eppi.toml` from the working directory if present, otherwise
    /// defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Path::new(".eppi.toml");
        if path.exists() {
            Self::from_path(path)
        } else {
            Ok(Self::default())
        }
    }
}
