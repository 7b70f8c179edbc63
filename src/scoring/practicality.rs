//! Practicality scorer: ten additive criteria, summed without averaging.

use crate::config::ScoringMode;
use crate::errors::ScoreError;
use crate::profile::{
    practicality::{
        AiIntegration, ExperimentDesign, InstrumentCost, Maintenance, MethodNature,
        ReagentAvailability, Reusability, Sensitivity, ThroughputTier, ValidationExtent,
    },
    PracticalityProfile,
};

use super::{clamp_score, resolve_term};

fn nature_points(value: &MethodNature) -> Option<f64> {
    match value {
        MethodNature::Quantitative => Some(10.0),
        MethodNature::Semiquantitative => Some(6.0),
        MethodNature::Qualitative => Some(4.0),
        MethodNature::Other(_) => None,
    }
}

fn design_points(value: &ExperimentDesign) -> Option<f64> {
    match value {
        ExperimentDesign::Factorial => Some(10.0),
        ExperimentDesign::Partial => Some(5.0),
        ExperimentDesign::None => Some(0.0),
        ExperimentDesign::Other(_) => None,
    }
}

fn ai_points(value: &AiIntegration) -> Option<f64> {
    match value {
        AiIntegration::Advanced => Some(10.0),
        AiIntegration::Moderate => Some(7.0),
        AiIntegration::Basic => Some(3.0),
        AiIntegration::None => Some(0.0),
        AiIntegration::Other(_) => None,
    }
}

fn validation_points(value: &ValidationExtent) -> Option<f64> {
    match value {
        ValidationExtent::Full => Some(10.0),
        ValidationExtent::Partial => Some(5.0),
        ValidationExtent::None => Some(0.0),
        ValidationExtent::Other(_) => None,
    }
}

fn sensitivity_points(value: &Sensitivity) -> Option<f64> {
    match value {
        Sensitivity::Picogram => Some(10.0),
        Sensitivity::Nanogram => Some(8.0),
        Sensitivity::Microgram => Some(5.0),
        Sensitivity::More => Some(2.0),
        Sensitivity::Other(_) => None,
    }
}

fn reagent_availability_points(value: &ReagentAvailability) -> Option<f64> {
    match value {
        ReagentAvailability::LowCost => Some(10.0),
        ReagentAvailability::HighCost => Some(5.0),
        ReagentAvailability::Other(_) => None,
    }
}

fn instrument_cost_points(value: &InstrumentCost) -> Option<f64> {
    match value {
        InstrumentCost::AllLow => Some(10.0),
        InstrumentCost::OneSpecialMedium => Some(5.0),
        InstrumentCost::ManyHigh => Some(0.0),
        InstrumentCost::Other(_) => None,
    }
}

fn maintenance_points(value: &Maintenance) -> Option<f64> {
    match value {
        Maintenance::Long => Some(10.0),
        Maintenance::Moderate => Some(5.0),
        Maintenance::None => Some(0.0),
        Maintenance::Other(_) => None,
    }
}

fn throughput_points(value: &ThroughputTier) -> Option<f64> {
    match value {
        ThroughputTier::High => Some(10.0),
        ThroughputTier::Medium => Some(5.0),
        ThroughputTier::Low => Some(0.0),
        ThroughputTier::Other(_) => None,
    }
}

fn reusability_points(value: &Reusability) -> Option<f64> {
    match value {
        Reusability::Yes => Some(10.0),
        Reusability::No => Some(0.0),
        Reusability::Other(_) => None,
    }
}

/// Score the practicality section: the PPI, on the 0-100 scale.
pub fn score_practicality(
    profile: &PracticalityProfile,
    mode: ScoringMode,
) -> Result<f64, ScoreError> {
    let terms = [
        resolve_term(
            nature_points(&profile.nature_of_method),
            mode,
            "practicality.natureOfMethod",
            profile.nature_of_method.as_str(),
        )?,
        resolve_term(
            design_points(&profile.design_of_experiment),
            mode,
            "practicality.designOfExperiment",
            profile.design_of_experiment.as_str(),
        )?,
        resolve_term(
            ai_points(&profile.ai_integration),
            mode,
            "practicality.aiIntegration",
            profile.ai_integration.as_str(),
        )?,
        resolve_term(
            validation_points(&profile.validation),
            mode,
            "practicality.validation",
            profile.validation.as_str(),
        )?,
        resolve_term(
            sensitivity_points(&profile.sensitivity),
            mode,
            "practicality.sensitivity",
            profile.sensitivity.as_str(),
        )?,
        resolve_term(
            reagent_availability_points(&profile.reagent_availability),
            mode,
            "practicality.reagentAvailability",
            profile.reagent_availability.as_str(),
        )?,
        resolve_term(
            instrument_cost_points(&profile.instrument_cost),
            mode,
            "practicality.instrumentCost",
            profile.instrument_cost.as_str(),
        )?,
        resolve_term(
            maintenance_points(&profile.maintenance),
            mode,
            "practicality.maintenance",
            profile.maintenance.as_str(),
        )?,
        resolve_term(
            throughput_points(&profile.throughput),
            mode,
            "practicality.throughput",
            profile.throughput.as_str(),
        )?,
        resolve_term(
            reusability_points(&profile.reusability),
            mode,
            "practicality.reusability",
            profile.reusability.as_str(),
        )?,
    ];

    Ok(clamp_score(terms.iter().sum()))
}
