//! Sample-preparation section of a method profile.

use serde::{Deserialize, Serialize};

use super::{wire_enum, YesNo};

wire_enum! {
    /// Reaction yield tier (cEF-based in the underlying methodology).
    Yield, default = High {
        High => "high",
        Moderate => "moderate",
        Low => "low",
    }
}

wire_enum! {
    /// Working temperature during pre-synthesis.
    Temperature, default = Room {
        High => "high",
        Room => "room",
        Low => "low",
    }
}

wire_enum! {
    /// Instrument demand of the sampling procedure.
    InstrumentRequirements, default = None {
        None => "none",
        Minimal => "minimal",
        Moderate => "moderate",
        Extensive => "extensive",
    }
}

wire_enum! {
    /// Solvent volume band for the extraction step, in mL.
    SolventVolume, default = LessThanTenth {
        LessThanTenth => "less0.1",
        TenthToOne => "0.1to1",
        OneToTen => "1to10",
        MoreThanTen => "more10",
    }
}

wire_enum! {
    /// Renewability of the extraction adsorbent.
    AdsorbentNature, default = Renewable {
        Renewable => "renewable",
        NonRenewable => "nonrenewable",
    }
}

wire_enum! {
    /// Adsorbent amount band, in grams.
    AdsorbentAmount, default = LessThanHalf {
        LessThanHalf => "less0.5",
        HalfToOne => "0.5to1",
        MoreThanOne => "more1",
    }
}

wire_enum! {
    /// Samples processed per unit time.
    SampleThroughput, default = High {
        High => "high",
        Moderate => "moderate",
        Low => "low",
    }
}

/// Greenness class of the extraction solvent.
///
/// Unlike the other wire enums this field is matched case-insensitively and
/// trimmed: the original form surface let integrators send free-text here and
/// the scorer normalized it before lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExtractionSolvent {
    Complete,
    Partial,
    NonGreen,
    /// Unrecognized spelling, preserved verbatim.
    Other(String),
}

impl ExtractionSolvent {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Complete => "complete",
            Self::Partial => "partial",
            Self::NonGreen => "nongreen",
            Self::Other(s) => s.as_str(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for ExtractionSolvent {
    fn from(s: String) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "complete" => Self::Complete,
            "partial" => Self::Partial,
            "nongreen" => Self::NonGreen,
            _ => Self::Other(s),
        }
    }
}

impl From<ExtractionSolvent> for String {
    fn from(v: ExtractionSolvent) -> Self {
        v.as_str().to_string()
    }
}

impl Default for ExtractionSolvent {
    fn default() -> Self {
        Self::Complete
    }
}

/// Sample-preparation inputs: pre-synthesis conditions, sampling procedure,
/// extraction step, and throughput modifiers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SamplePrepProfile {
    pub pre_synthesis: YesNo,
    #[serde(rename = "yield")]
    pub synthesis_yield: Yield,
    pub temperature: Temperature,
    pub purification: bool,
    pub energy_consumption: bool,
    pub non_green_solvent: bool,
    pub occupational_hazard: bool,
    pub derivatization: bool,
    pub automated_preparation: bool,
    pub instrument_requirements: InstrumentRequirements,
    pub extraction_needed: YesNo,
    pub solvent_type: ExtractionSolvent,
    pub solvent_volume: SolventVolume,
    pub adsorbent_nature: Option<AdsorbentNature>,
    pub adsorbent_amount: Option<AdsorbentAmount>,
    pub sample_throughput: SampleThroughput,
}
