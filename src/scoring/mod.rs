//! Scoring engine: five component scorers, the index aggregator, and the
//! interpretation-band classifier.
//!
//! All scorers are pure functions over a read-only [`crate::MethodProfile`];
//! each call builds a fresh [`ScoreResult`]. Scores live on a 0-100 scale and
//! every published field is clamped and rounded to one decimal place.

pub mod bands;
pub mod instrumentation;
pub mod pipeline;
pub mod practicality;
pub mod reagent;
pub mod sample_prep;
pub mod waste;

use serde::{Deserialize, Serialize};

use crate::config::ScoringMode;
use crate::errors::ScoreError;

/// Resolve one looked-up term according to the scoring mode.
///
/// `None` means the wire value matched no table row: compat mode keeps the
/// original silent-zero behavior, strict mode reports the offending spelling.
pub(crate) fn resolve_term(
    term: Option<f64>,
    mode: ScoringMode,
    field: &'static str,
    value: &str,
) -> Result<f64, ScoreError> {
    match term {
        Some(points) => Ok(points),
        None if mode.is_strict() => Err(ScoreError::unknown(field, value)),
        None => {
            log::debug!("field `{field}` value `{value}` matched no table row, scoring 0");
            Ok(0.0)
        }
    }
}

/// Clamp a raw score to the 0-100 scale.
pub(crate) fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Round to one decimal place, the precision of every published field.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Additive bonuses recorded by the instrumentation scorer and applied by the
/// aggregator at the total-score level. Carried unclamped.
///
/// These deliberately do not feed the instrumentation sub-score, so the
/// Environmental Index never reflects them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentationBonuses {
    pub multianalyte: f64,
    pub miniaturized: f64,
}

impl InstrumentationBonuses {
    pub fn total(&self) -> f64 {
        self.multianalyte + self.miniaturized
    }
}

/// Immutable output of one scoring pass.
///
/// Field names mirror the wire contract consumed by the presentation layer:
/// the five component scores plus `eiIndex` and `total`. All values are in
/// [0,100] with one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub sample_prep: f64,
    pub instrumentation: f64,
    pub reagent: f64,
    pub waste: f64,
    pub ei_index: f64,
    pub practicality: f64,
    pub total: f64,
}
