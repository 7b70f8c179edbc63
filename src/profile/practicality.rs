//! Practicality section: ten independent criteria, each worth up to 10 points.

use serde::{Deserialize, Serialize};

use super::wire_enum;

wire_enum! {
    /// Analytical nature of the method.
    MethodNature, default = Quantitative {
        Quantitative => "quantitative",
        Semiquantitative => "semiquantitative",
        Qualitative => "qualitative",
    }
}

wire_enum! {
    /// Design-of-experiment rigor during method development.
    ExperimentDesign, default = Factorial {
        Factorial => "factorial",
        Partial => "partial",
        None => "none",
    }
}

wire_enum! {
    /// Degree of AI/chemometric integration.
    AiIntegration, default = Advanced {
        Advanced => "advanced",
        Moderate => "moderate",
        Basic => "basic",
        None => "none",
    }
}

wire_enum! {
    /// Extent of method validation performed.
    ValidationExtent, default = Full {
        Full => "full",
        Partial => "partial",
        None => "none",
    }
}

wire_enum! {
    /// Detection sensitivity tier.
    Sensitivity, default = Picogram {
        Picogram => "picogram",
        Nanogram => "nanogram",
        Microgram => "microgram",
        More => "more",
    }
}

wire_enum! {
    /// Commercial availability and cost of reagents.
    ReagentAvailability, default = LowCost {
        LowCost => "lowCost",
        HighCost => "highCost",
    }
}

wire_enum! {
    /// Cost/availability tier of the instruments involved.
    InstrumentCost, default = AllLow {
        AllLow => "low",
        OneSpecialMedium => "medium",
        ManyHigh => "high",
    }
}

wire_enum! {
    /// Maintenance interval and instrument lifetime.
    Maintenance, default = Long {
        Long => "long",
        Moderate => "moderate",
        None => "none",
    }
}

wire_enum! {
    /// Sample throughput tier from a practicality standpoint.
    ThroughputTier, default = High {
        High => "high",
        Medium => "medium",
        Low => "low",
    }
}

wire_enum! {
    /// Whether the analytical device/sorbent is reusable.
    Reusability, default = Yes {
        Yes => "yes",
        No => "no",
    }
}

/// The ten practicality criteria. Defaults are the top tier of each, so an
/// untouched section scores 100.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PracticalityProfile {
    pub nature_of_method: MethodNature,
    pub design_of_experiment: ExperimentDesign,
    pub ai_integration: AiIntegration,
    pub validation: ValidationExtent,
    pub sensitivity: Sensitivity,
    pub reagent_availability: ReagentAvailability,
    pub instrument_cost: InstrumentCost,
    pub maintenance: Maintenance,
    pub throughput: ThroughputTier,
    pub reusability: Reusability,
}
