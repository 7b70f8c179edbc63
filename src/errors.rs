//! Error types for the scoring engine.
//!
//! In compat mode the engine is total: unrecognized spellings contribute zero
//! and the computation completes. Strict mode surfaces those as
//! [`ScoreError`] values instead, for integrations that want fail-fast
//! semantics. The CLI boundary wraps everything in `anyhow`.

use thiserror::Error;

/// Validation errors raised in strict scoring mode.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    /// A wire field carried a spelling the scorer does not recognize.
    #[error("unrecognized value `{value}` for field `{field}`")]
    UnknownVariant {
        field: &'static str,
        value: String,
    },

    /// A reagent entry's GHS class / signal word combination matches no
    /// hazard tier.
    #[error(
        "reagent entry {index} matches no hazard tier (ghsClass `{ghs_class}`, signalWord `{signal_word}`)"
    )]
    UnmatchedHazard {
        index: usize,
        ghs_class: String,
        signal_word: String,
    },

    /// Index weights failed validation (out of range or not summing to 1).
    #[error("invalid index weights: {0}")]
    InvalidWeights(String),
}

impl ScoreError {
    /// Shorthand for the common unknown-spelling case.
    pub fn unknown(field: &'static str, value: &str) -> Self {
        Self::UnknownVariant {
            field,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_variant_names_field_and_value() {
        let err = ScoreError::unknown("samplePrep.yield", "hgih");
        assert_eq!(
            err.to_string(),
            "unrecognized value `hgih` for field `samplePrep.yield`"
        );
    }

    #[test]
    fn unmatched_hazard_names_entry_index() {
        let err = ScoreError::UnmatchedHazard {
            index: 2,
            ghs_class: "one".to_string(),
            signal_word: "notAvailable".to_string(),
        };
        assert!(err.to_string().contains("entry 2"));
    }
}
