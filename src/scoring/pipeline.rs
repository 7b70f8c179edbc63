//! Aggregation pipeline: runs the five component scorers and combines them
//! into the Environmental Index and the weighted total.

use serde::Serialize;

use crate::config::ScoreConfig;
use crate::errors::ScoreError;
use crate::profile::MethodProfile;

use super::instrumentation::score_instrumentation;
use super::practicality::score_practicality;
use super::reagent::score_reagents;
use super::sample_prep::{score_sample_prep, SamplePrepBreakdown};
use super::waste::score_waste;
use super::{clamp_score, round_to_tenth, InstrumentationBonuses, ScoreResult};

/// Pre-aggregation detail for verbose output and export surfaces.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub sample_prep: SamplePrepBreakdown,
    pub instrumentation_bonuses: InstrumentationBonuses,
    pub reagent_entries: Vec<f64>,
}

/// Run the full scoring pipeline and return the published result.
///
/// Pure over the profile: repeated calls with the same input produce
/// bit-identical results. In strict mode the first unrecognized wire value
/// aborts the computation.
pub fn score_method(
    profile: &MethodProfile,
    config: &ScoreConfig,
) -> Result<ScoreResult, ScoreError> {
    score_method_detailed(profile, config).map(|(result, _)| result)
}

/// Like [`score_method`] but also returns the per-component breakdown.
pub fn score_method_detailed(
    profile: &MethodProfile,
    config: &ScoreConfig,
) -> Result<(ScoreResult, ScoreBreakdown), ScoreError> {
    config.weights.validate()?;
    let mode = config.mode;

    let sample_prep = score_sample_prep(&profile.sample_prep, mode)?;
    let instrumentation = score_instrumentation(&profile.instrumentation, mode)?;
    let reagents = score_reagents(&profile.reagents, mode)?;
    let waste = score_waste(&profile.waste, mode)?;
    let practicality = score_practicality(&profile.practicality, mode)?;

    // Published component scores are rounded first; the indices derive from
    // the rounded values so the output is self-consistent.
    let sample_prep_score = round_to_tenth(sample_prep.score);
    let instrumentation_score = round_to_tenth(instrumentation.score);
    let reagent_score = round_to_tenth(reagents.score);
    let waste_score = round_to_tenth(waste);
    let practicality_score = round_to_tenth(practicality);

    // The EI is the unweighted mean of the four environmental components,
    // before any bonus application.
    let ei_index = round_to_tenth(
        (sample_prep_score + instrumentation_score + reagent_score + waste_score) / 4.0,
    );

    let total = round_to_tenth(clamp_score(
        ei_index * config.weights.ei
            + practicality_score * config.weights.practicality
            + instrumentation.bonuses.total(),
    ));

    log::debug!(
        "scored method: samplePrep={sample_prep_score} instrumentation={instrumentation_score} \
         reagent={reagent_score} waste={waste_score} ei={ei_index} \
         practicality={practicality_score} total={total}"
    );

    let result = ScoreResult {
        sample_prep: sample_prep_score,
        instrumentation: instrumentation_score,
        reagent: reagent_score,
        waste: waste_score,
        ei_index,
        practicality: practicality_score,
        total,
    };
    let breakdown = ScoreBreakdown {
        sample_prep,
        instrumentation_bonuses: instrumentation.bonuses,
        reagent_entries: reagents.entries,
    };
    Ok((result, breakdown))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{IndexWeights, ScoringMode};
    use crate::profile::{
        practicality::{
            AiIntegration, ExperimentDesign, InstrumentCost, Maintenance, MethodNature,
            ReagentAvailability, Sensitivity, ThroughputTier, ValidationExtent,
        },
        AdsorbentAmount, AdsorbentNature, AutomationLevel, EnergyClass, ExtractionSolvent,
        GhsClass, InstrumentRequirements, PracticalityProfile, ReagentEntry, ReagentVolume,
        SamplePrepProfile, SampleThroughput, SignalWord, SolventVolume, Temperature, WasteProfile,
        WasteTreatment, WasteVolume, YesNo, Yield,
    };
    use pretty_assertions::assert_eq;

    /// A representative non-trivial method touching every section.
    fn worked_profile() -> MethodProfile {
        MethodProfile {
            sample_prep: SamplePrepProfile {
                pre_synthesis: YesNo::Yes,
                synthesis_yield: Yield::Moderate,
                temperature: Temperature::Room,
                purification: true,
                automated_preparation: true,
                instrument_requirements: InstrumentRequirements::Minimal,
                extraction_needed: YesNo::Yes,
                solvent_type: ExtractionSolvent::Partial,
                solvent_volume: SolventVolume::TenthToOne,
                adsorbent_nature: Some(AdsorbentNature::Renewable),
                adsorbent_amount: Some(AdsorbentAmount::HalfToOne),
                sample_throughput: SampleThroughput::Moderate,
                ..SamplePrepProfile::default()
            },
            instrumentation: crate::profile::InstrumentationProfile {
                energy: EnergyClass::Low,
                multianalyte: true,
                non_automated: AutomationLevel::No,
                ..crate::profile::InstrumentationProfile::default()
            },
            reagents: vec![
                ReagentEntry {
                    solvent_type: "water".to_string(),
                    ghs_class: GhsClass::Zero,
                    signal_word: SignalWord::NotAvailable,
                    volume: ReagentVolume::LessThanOne,
                },
                ReagentEntry {
                    solvent_type: "ethanol".to_string(),
                    ghs_class: GhsClass::One,
                    signal_word: SignalWord::Warning,
                    volume: ReagentVolume::LessThanTen,
                },
                ReagentEntry {
                    solvent_type: "acetonitrile".to_string(),
                    ghs_class: GhsClass::Two,
                    signal_word: SignalWord::Danger,
                    volume: ReagentVolume::MoreThanHundred,
                },
            ],
            waste: WasteProfile {
                volume: WasteVolume::TenToHundred,
                biodegradable: true,
                treatment: WasteTreatment::LessThanTen,
            },
            practicality: PracticalityProfile {
                nature_of_method: MethodNature::Semiquantitative,
                design_of_experiment: ExperimentDesign::Partial,
                ai_integration: AiIntegration::Moderate,
                validation: ValidationExtent::Full,
                sensitivity: Sensitivity::Nanogram,
                reagent_availability: ReagentAvailability::LowCost,
                instrument_cost: InstrumentCost::OneSpecialMedium,
                maintenance: Maintenance::Long,
                throughput: ThroughputTier::Medium,
                ..PracticalityProfile::default()
            },
        }
    }

    #[test]
    fn worked_example_end_to_end() {
        let profile = worked_profile();
        let result = score_method(&profile, &ScoreConfig::default()).unwrap();

        // Sample prep: mean(85, 90, 90) + 10 = 98.333... -> 98.3
        assert_eq!(result.sample_prep, 98.3);
        // Instrumentation: 95 - 2 = 93; +5 multianalyte carried as bonus
        assert_eq!(result.instrumentation, 93.0);
        // Reagents: mean(100, 96, 55) = 83.666... -> 83.7
        assert_eq!(result.reagent, 83.7);
        // Waste: 60 + 10 + 10 = 80
        assert_eq!(result.waste, 80.0);
        // EI: (98.3 + 93 + 83.7 + 80) / 4 = 88.75 -> 88.8
        assert_eq!(result.ei_index, 88.8);
        // Practicality: 6+5+7+10+8+10+5+10+5+10 = 76
        assert_eq!(result.practicality, 76.0);
        // Total: 88.8*0.5 + 76*0.5 + 5 = 87.4
        assert_eq!(result.total, 87.4);
    }

    #[test]
    fn default_profile_scores_top_marks() {
        let profile = MethodProfile::default();
        let result = score_method(&profile, &ScoreConfig::default()).unwrap();
        assert_eq!(result.sample_prep, 100.0);
        assert_eq!(result.instrumentation, 98.0);
        assert_eq!(result.reagent, 100.0);
        assert_eq!(result.waste, 100.0);
        assert_eq!(result.ei_index, 99.5);
        assert_eq!(result.practicality, 100.0);
        // 99.5*0.5 + 100*0.5 = 99.75 -> 99.8
        assert_eq!(result.total, 99.8);
    }

    #[test]
    fn ei_is_the_mean_of_the_four_environmental_scores() {
        let result = score_method(&worked_profile(), &ScoreConfig::default()).unwrap();
        let mean =
            (result.sample_prep + result.instrumentation + result.reagent + result.waste) / 4.0;
        assert!((result.ei_index - mean).abs() <= 0.05 + 1e-9);
    }

    #[test]
    fn practicality_does_not_move_the_ei() {
        let mut profile = worked_profile();
        let before = score_method(&profile, &ScoreConfig::default()).unwrap();
        profile.practicality = PracticalityProfile {
            nature_of_method: MethodNature::Qualitative,
            ..PracticalityProfile::default()
        };
        let after = score_method(&profile, &ScoreConfig::default()).unwrap();
        assert_eq!(before.ei_index, after.ei_index);
        assert_ne!(before.total, after.total);
    }

    #[test]
    fn bonuses_raise_the_total_but_not_the_ei() {
        let mut profile = worked_profile();
        let with_bonus = score_method(&profile, &ScoreConfig::default()).unwrap();
        profile.instrumentation.multianalyte = false;
        let without_bonus = score_method(&profile, &ScoreConfig::default()).unwrap();

        assert_eq!(with_bonus.ei_index, without_bonus.ei_index);
        assert_eq!(with_bonus.total, without_bonus.total + 5.0);
    }

    #[test]
    fn total_is_clamped_after_bonuses() {
        let profile = MethodProfile {
            instrumentation: crate::profile::InstrumentationProfile {
                multianalyte: true,
                miniaturized: true,
                ..crate::profile::InstrumentationProfile::default()
            },
            ..MethodProfile::default()
        };
        let result = score_method(&profile, &ScoreConfig::default()).unwrap();
        assert_eq!(result.total, 100.0);
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let profile = worked_profile();
        let config = ScoreConfig::default();
        let first = score_method(&profile, &config).unwrap();
        let second = score_method(&profile, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn custom_weights_shift_the_total() {
        let config = ScoreConfig {
            weights: IndexWeights {
                ei: 0.7,
                practicality: 0.3,
            },
            ..ScoreConfig::default()
        };
        let result = score_method(&worked_profile(), &config).unwrap();
        // 88.8*0.7 + 76*0.3 + 5 = 89.96 -> 90.0
        assert_eq!(result.total, 90.0);
    }

    #[test]
    fn invalid_weights_are_rejected() {
        let config = ScoreConfig {
            weights: IndexWeights {
                ei: 0.9,
                practicality: 0.9,
            },
            ..ScoreConfig::default()
        };
        assert!(matches!(
            score_method(&worked_profile(), &config),
            Err(ScoreError::InvalidWeights(_))
        ));
    }

    #[test]
    fn strict_mode_propagates_component_errors() {
        let mut profile = worked_profile();
        profile.waste.volume = WasteVolume::Other("lots".to_string());
        let config = ScoreConfig {
            mode: ScoringMode::Strict,
            ..ScoreConfig::default()
        };
        let err = score_method(&profile, &config).unwrap_err();
        assert_eq!(err, ScoreError::unknown("waste.volume", "lots"));
    }

    #[test]
    fn breakdown_carries_component_detail() {
        let (result, breakdown) =
            score_method_detailed(&worked_profile(), &ScoreConfig::default()).unwrap();
        assert_eq!(breakdown.sample_prep.pre_synthesis, 85.0);
        assert_eq!(breakdown.sample_prep.sampling, 90.0);
        assert_eq!(breakdown.sample_prep.extraction, 90.0);
        assert_eq!(breakdown.sample_prep.other_conditions, 10.0);
        assert_eq!(breakdown.instrumentation_bonuses.multianalyte, 5.0);
        assert_eq!(breakdown.reagent_entries, vec![100.0, 96.0, 55.0]);
        assert_eq!(result.reagent, 83.7);
    }
}
