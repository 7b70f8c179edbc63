//! Sample-preparation scorer.
//!
//! Three main components (pre-synthesis, sampling procedure, extraction) are
//! averaged, then the unclamped other-conditions modifier is added on top.

use serde::Serialize;

use crate::config::ScoringMode;
use crate::errors::ScoreError;
use crate::profile::{
    AdsorbentAmount, AdsorbentNature, ExtractionSolvent, InstrumentRequirements, SamplePrepProfile,
    SampleThroughput, SolventVolume, Temperature, Yield,
};

use super::{clamp_score, resolve_term};

/// Per-component values behind the sample-preparation score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplePrepBreakdown {
    pub pre_synthesis: f64,
    pub sampling: f64,
    pub extraction: f64,
    /// Additive modifier, not averaged; may be negative.
    pub other_conditions: f64,
    pub score: f64,
}

fn yield_modifier(value: &Yield) -> Option<f64> {
    match value {
        Yield::High => Some(10.0),
        Yield::Moderate => Some(5.0),
        Yield::Low => Some(-5.0),
        Yield::Other(_) => None,
    }
}

fn temperature_modifier(value: &Temperature) -> Option<f64> {
    match value {
        Temperature::High => Some(-10.0),
        Temperature::Room => Some(-5.0),
        Temperature::Low => Some(5.0),
        Temperature::Other(_) => None,
    }
}

/// Hazard-style flags reward absence (+5) and penalize presence (-5).
fn flag_modifier(present: bool) -> f64 {
    if present {
        -5.0
    } else {
        5.0
    }
}

fn sampling_base(value: &InstrumentRequirements) -> Option<f64> {
    match value {
        InstrumentRequirements::None => Some(100.0),
        InstrumentRequirements::Minimal => Some(90.0),
        InstrumentRequirements::Moderate => Some(80.0),
        InstrumentRequirements::Extensive => Some(70.0),
        InstrumentRequirements::Other(_) => None,
    }
}

fn solvent_modifier(value: &ExtractionSolvent) -> Option<f64> {
    match value {
        ExtractionSolvent::Complete => Some(10.0),
        ExtractionSolvent::Partial => Some(5.0),
        ExtractionSolvent::NonGreen => Some(-10.0),
        ExtractionSolvent::Other(_) => None,
    }
}

fn solvent_volume_modifier(value: &SolventVolume) -> Option<f64> {
    match value {
        SolventVolume::LessThanTenth => Some(10.0),
        SolventVolume::TenthToOne => Some(5.0),
        SolventVolume::OneToTen => Some(-5.0),
        SolventVolume::MoreThanTen => Some(-10.0),
        SolventVolume::Other(_) => None,
    }
}

fn adsorbent_nature_modifier(value: &AdsorbentNature) -> Option<f64> {
    match value {
        AdsorbentNature::Renewable => Some(5.0),
        AdsorbentNature::NonRenewable => Some(0.0),
        AdsorbentNature::Other(_) => None,
    }
}

fn adsorbent_amount_modifier(value: &AdsorbentAmount) -> Option<f64> {
    match value {
        AdsorbentAmount::LessThanHalf => Some(10.0),
        AdsorbentAmount::HalfToOne => Some(5.0),
        AdsorbentAmount::MoreThanOne => Some(-10.0),
        AdsorbentAmount::Other(_) => None,
    }
}

fn throughput_modifier(value: &SampleThroughput) -> Option<f64> {
    match value {
        SampleThroughput::High => Some(5.0),
        SampleThroughput::Moderate => Some(0.0),
        SampleThroughput::Low => Some(-5.0),
        SampleThroughput::Other(_) => None,
    }
}

fn pre_synthesis_component(
    profile: &SamplePrepProfile,
    mode: ScoringMode,
) -> Result<f64, ScoreError> {
    if !profile.pre_synthesis.is_yes() && profile.pre_synthesis.is_known() {
        return Ok(100.0);
    }
    if mode.is_strict() && !profile.pre_synthesis.is_known() {
        return Err(ScoreError::unknown(
            "samplePrep.preSynthesis",
            profile.pre_synthesis.as_str(),
        ));
    }

    let mut score = 75.0;
    score += resolve_term(
        yield_modifier(&profile.synthesis_yield),
        mode,
        "samplePrep.yield",
        profile.synthesis_yield.as_str(),
    )?;
    score += resolve_term(
        temperature_modifier(&profile.temperature),
        mode,
        "samplePrep.temperature",
        profile.temperature.as_str(),
    )?;
    score += flag_modifier(profile.purification);
    score += flag_modifier(profile.energy_consumption);
    score += flag_modifier(profile.non_green_solvent);
    score += flag_modifier(profile.occupational_hazard);
    Ok(score.max(0.0))
}

fn sampling_component(profile: &SamplePrepProfile, mode: ScoringMode) -> Result<f64, ScoreError> {
    let base = resolve_term(
        sampling_base(&profile.instrument_requirements),
        mode,
        "samplePrep.instrumentRequirements",
        profile.instrument_requirements.as_str(),
    )?;
    Ok(base.max(0.0))
}

fn extraction_component(
    profile: &SamplePrepProfile,
    mode: ScoringMode,
) -> Result<f64, ScoreError> {
    if !profile.extraction_needed.is_yes() && profile.extraction_needed.is_known() {
        return Ok(100.0);
    }
    if mode.is_strict() && !profile.extraction_needed.is_known() {
        return Err(ScoreError::unknown(
            "samplePrep.extractionNeeded",
            profile.extraction_needed.as_str(),
        ));
    }

    let mut score = 70.0;
    score += resolve_term(
        solvent_modifier(&profile.solvent_type),
        mode,
        "samplePrep.solventType",
        profile.solvent_type.as_str(),
    )?;
    score += resolve_term(
        solvent_volume_modifier(&profile.solvent_volume),
        mode,
        "samplePrep.solventVolume",
        profile.solvent_volume.as_str(),
    )?;
    // Adsorbent fields only weigh in when the method actually uses one.
    if let Some(nature) = &profile.adsorbent_nature {
        score += resolve_term(
            adsorbent_nature_modifier(nature),
            mode,
            "samplePrep.adsorbentNature",
            nature.as_str(),
        )?;
    }
    if let Some(amount) = &profile.adsorbent_amount {
        score += resolve_term(
            adsorbent_amount_modifier(amount),
            mode,
            "samplePrep.adsorbentAmount",
            amount.as_str(),
        )?;
    }
    Ok(score.max(0.0))
}

fn other_conditions(profile: &SamplePrepProfile, mode: ScoringMode) -> Result<f64, ScoreError> {
    let mut modifier = 0.0;
    if profile.derivatization {
        modifier -= 10.0;
    }
    if profile.automated_preparation {
        modifier += 10.0;
    }
    modifier += resolve_term(
        throughput_modifier(&profile.sample_throughput),
        mode,
        "samplePrep.sampleThroughput",
        profile.sample_throughput.as_str(),
    )?;
    Ok(modifier)
}

/// Score the sample-preparation section.
///
/// The three main components are each floored at zero, averaged, and the
/// unclamped other-conditions modifier is added before the final clamp to
/// [0,100].
pub fn score_sample_prep(
    profile: &SamplePrepProfile,
    mode: ScoringMode,
) -> Result<SamplePrepBreakdown, ScoreError> {
    let pre_synthesis = pre_synthesis_component(profile, mode)?;
    let sampling = sampling_component(profile, mode)?;
    let extraction = extraction_component(profile, mode)?;
    let other = other_conditions(profile, mode)?;

    let score = clamp_score((pre_synthesis + sampling + extraction) / 3.0 + other);
    Ok(SamplePrepBreakdown {
        pre_synthesis,
        sampling,
        extraction,
        other_conditions: other,
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::YesNo;
    use pretty_assertions::assert_eq;

    fn base_profile() -> SamplePrepProfile {
        SamplePrepProfile::default()
    }

    #[test]
    fn greenest_profile_with_high_throughput_clamps_to_100() {
        // Components 100/100/100 average to 100, throughput adds 5, clamp wins.
        let profile = base_profile();
        let breakdown = score_sample_prep(&profile, ScoringMode::Compat).unwrap();
        assert_eq!(breakdown.pre_synthesis, 100.0);
        assert_eq!(breakdown.sampling, 100.0);
        assert_eq!(breakdown.extraction, 100.0);
        assert_eq!(breakdown.other_conditions, 5.0);
        assert_eq!(breakdown.score, 100.0);
    }

    #[test]
    fn pre_synthesis_modifiers_add_up() {
        let profile = SamplePrepProfile {
            pre_synthesis: YesNo::Yes,
            synthesis_yield: Yield::Moderate,
            temperature: Temperature::Room,
            purification: true,
            ..base_profile()
        };
        // 75 +5 -5 -5 +5 +5 +5 = 85
        let breakdown = score_sample_prep(&profile, ScoringMode::Compat).unwrap();
        assert_eq!(breakdown.pre_synthesis, 85.0);
    }

    #[test]
    fn pre_synthesis_with_every_hazard_present() {
        let profile = SamplePrepProfile {
            pre_synthesis: YesNo::Yes,
            synthesis_yield: Yield::Low,
            temperature: Temperature::High,
            purification: true,
            energy_consumption: true,
            non_green_solvent: true,
            occupational_hazard: true,
            ..base_profile()
        };
        // 75 -5 -10 -5*4 = 40
        let breakdown = score_sample_prep(&profile, ScoringMode::Compat).unwrap();
        assert_eq!(breakdown.pre_synthesis, 40.0);
    }

    #[test]
    fn sampling_is_a_direct_lookup() {
        for (requirement, expected) in [
            (InstrumentRequirements::None, 100.0),
            (InstrumentRequirements::Minimal, 90.0),
            (InstrumentRequirements::Moderate, 80.0),
            (InstrumentRequirements::Extensive, 70.0),
        ] {
            let profile = SamplePrepProfile {
                instrument_requirements: requirement,
                ..base_profile()
            };
            let breakdown = score_sample_prep(&profile, ScoringMode::Compat).unwrap();
            assert_eq!(breakdown.sampling, expected);
        }
    }

    #[test]
    fn extraction_modifiers_add_up() {
        let profile = SamplePrepProfile {
            extraction_needed: YesNo::Yes,
            solvent_type: ExtractionSolvent::Partial,
            solvent_volume: SolventVolume::TenthToOne,
            adsorbent_nature: Some(AdsorbentNature::Renewable),
            adsorbent_amount: Some(AdsorbentAmount::HalfToOne),
            ..base_profile()
        };
        // 70 +5 +5 +5 +5 = 90
        let breakdown = score_sample_prep(&profile, ScoringMode::Compat).unwrap();
        assert_eq!(breakdown.extraction, 90.0);
    }

    #[test]
    fn extraction_without_adsorbent_skips_those_modifiers() {
        let profile = SamplePrepProfile {
            extraction_needed: YesNo::Yes,
            solvent_type: ExtractionSolvent::NonGreen,
            solvent_volume: SolventVolume::MoreThanTen,
            ..base_profile()
        };
        // 70 -10 -10 = 50
        let breakdown = score_sample_prep(&profile, ScoringMode::Compat).unwrap();
        assert_eq!(breakdown.extraction, 50.0);
    }

    #[test]
    fn other_conditions_can_go_negative() {
        let profile = SamplePrepProfile {
            derivatization: true,
            sample_throughput: SampleThroughput::Low,
            ..base_profile()
        };
        let breakdown = score_sample_prep(&profile, ScoringMode::Compat).unwrap();
        assert_eq!(breakdown.other_conditions, -15.0);
        assert_eq!(breakdown.score, 85.0);
    }

    #[test]
    fn unknown_yield_scores_zero_in_compat_mode() {
        let profile = SamplePrepProfile {
            pre_synthesis: YesNo::Yes,
            synthesis_yield: Yield::Other("hgih".to_string()),
            ..base_profile()
        };
        // 75 +0 -5 +5 +5 +5 +5 = 90
        let breakdown = score_sample_prep(&profile, ScoringMode::Compat).unwrap();
        assert_eq!(breakdown.pre_synthesis, 90.0);
    }

    #[test]
    fn unknown_yield_errors_in_strict_mode() {
        let profile = SamplePrepProfile {
            pre_synthesis: YesNo::Yes,
            synthesis_yield: Yield::Other("hgih".to_string()),
            ..base_profile()
        };
        let err = score_sample_prep(&profile, ScoringMode::Strict).unwrap_err();
        assert_eq!(err, ScoreError::unknown("samplePrep.yield", "hgih"));
    }

    #[test]
    fn strict_mode_accepts_fully_known_profile() {
        let profile = SamplePrepProfile {
            pre_synthesis: YesNo::Yes,
            extraction_needed: YesNo::Yes,
            ..base_profile()
        };
        assert!(score_sample_prep(&profile, ScoringMode::Strict).is_ok());
    }
}
