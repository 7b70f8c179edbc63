//! Instrumentation scorer.
//!
//! Returns the clamped energy/emission/automation score together with the
//! multianalyte and miniaturization bonuses. The bonuses never touch this
//! score; the aggregator adds them at the total level.

use crate::config::ScoringMode;
use crate::errors::ScoreError;
use crate::profile::{AutomationLevel, EnergyClass, InstrumentationProfile};

use super::{clamp_score, resolve_term, InstrumentationBonuses};

/// Instrumentation score plus the bonuses carried alongside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstrumentationScore {
    pub score: f64,
    pub bonuses: InstrumentationBonuses,
}

fn energy_base(value: &EnergyClass) -> Option<f64> {
    match value {
        EnergyClass::Non => Some(100.0),
        EnergyClass::Low => Some(95.0),
        EnergyClass::Moderate => Some(85.0),
        EnergyClass::High => Some(75.0),
        EnergyClass::Other(_) => None,
    }
}

/// Score the instrumentation section.
///
/// The automation penalty always applies: -5 for fully manual operation, -2
/// otherwise. There is no penalty-free branch; this mirrors the historical
/// behavior the downstream surfaces calibrated against.
pub fn score_instrumentation(
    profile: &InstrumentationProfile,
    mode: ScoringMode,
) -> Result<InstrumentationScore, ScoreError> {
    let mut score = resolve_term(
        energy_base(&profile.energy),
        mode,
        "instrumentation.energy",
        profile.energy.as_str(),
    )?;

    if profile.vapor_emission {
        score -= 20.0;
    }

    score -= match &profile.non_automated {
        AutomationLevel::Yes => 5.0,
        AutomationLevel::No | AutomationLevel::Semi => 2.0,
        AutomationLevel::Other(value) => {
            if mode.is_strict() {
                return Err(ScoreError::unknown("instrumentation.nonAutomated", value));
            }
            2.0
        }
    };

    let bonuses = InstrumentationBonuses {
        multianalyte: if profile.multianalyte { 5.0 } else { 0.0 },
        miniaturized: if profile.miniaturized { 10.0 } else { 0.0 },
    };

    Ok(InstrumentationScore {
        score: clamp_score(score),
        bonuses,
    })
}
