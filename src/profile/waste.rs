//! Waste section of a method profile.

use serde::{Deserialize, Serialize};

use super::wire_enum;

wire_enum! {
    /// Waste volume band, in mL.
    WasteVolume, default = LessThanOne {
        LessThanOne => "less1",
        OneToTen => "between1And10",
        TenToHundred => "between10And100",
        MoreThanHundred => "more100",
    }
}

wire_enum! {
    /// Share of waste sent to treatment, in percent.
    WasteTreatment, default = MoreThanTen {
        None => "none",
        LessThanTen => "less10",
        MoreThanTen => "more10",
    }
}

/// Waste inputs: generated volume plus biodegradability and treatment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WasteProfile {
    pub volume: WasteVolume,
    pub biodegradable: bool,
    pub treatment: WasteTreatment,
}

impl Default for WasteProfile {
    fn default() -> Self {
        Self {
            volume: WasteVolume::LessThanOne,
            biodegradable: true,
            treatment: WasteTreatment::MoreThanTen,
        }
    }
}
