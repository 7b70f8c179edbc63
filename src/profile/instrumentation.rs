//! Instrumentation section of a method profile.

use serde::{Deserialize, Serialize};

use super::wire_enum;

wire_enum! {
    /// Energy demand class of the measuring instrument.
    EnergyClass, default = Non {
        Non => "non",
        Low => "low",
        Moderate => "moderate",
        High => "high",
    }
}

wire_enum! {
    /// Degree of manual operation.
    ///
    /// Tri-state on the wire; the scorer only distinguishes fully manual
    /// (`yes`) from everything else.
    AutomationLevel, default = No {
        No => "no",
        Semi => "semi",
        Yes => "yes",
    }
}

/// Instrumentation inputs: energy class plus emission/automation modifiers
/// and the two capability flags that turn into total-score bonuses.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InstrumentationProfile {
    pub energy: EnergyClass,
    pub vapor_emission: bool,
    pub multianalyte: bool,
    pub miniaturized: bool,
    pub non_automated: AutomationLevel,
}
