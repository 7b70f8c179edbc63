//! Input data model for a described analytical method.
//!
//! A [`MethodProfile`] is the root document the caller hands to the scoring
//! pipeline. It deserializes from the camelCase wire format produced by the
//! form layer; every field carries a default so a partial document still
//! scores. The engine treats the profile as read-only input and never writes
//! back into it.
//!
//! Enum-valued fields keep unrecognized spellings instead of rejecting them
//! at parse time: each enum has an `Other(String)` catch-all so the scoring
//! mode decides whether a typo is a silent zero contribution (compat) or a
//! validation error (strict).

pub mod instrumentation;
pub mod practicality;
pub mod reagent;
pub mod sample_prep;
pub mod waste;

pub use instrumentation::{AutomationLevel, EnergyClass, InstrumentationProfile};
pub use practicality::PracticalityProfile;
pub use reagent::{GhsClass, ReagentEntry, ReagentVolume, SignalWord};
pub use sample_prep::{
    AdsorbentAmount, AdsorbentNature, ExtractionSolvent, InstrumentRequirements, SamplePrepProfile,
    SampleThroughput, SolventVolume, Temperature, Yield,
};
pub use waste::{WasteProfile, WasteTreatment, WasteVolume};

use serde::{Deserialize, Serialize};

/// Generates a wire-format string enum with an `Other(String)` catch-all.
///
/// Matching is exact (the wire format is camelCase-sensitive); anything else
/// lands in `Other` carrying the original spelling so strict-mode validation
/// can report it verbatim. Alias spellings map onto their canonical variant.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, default = $default:ident {
            $($variant:ident => $spelling:literal $(| $alias:literal)*),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            /// Unrecognized wire spelling, preserved verbatim.
            Other(String),
        }

        impl $name {
            /// Canonical wire spelling for this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $spelling,)+
                    Self::Other(s) => s.as_str(),
                }
            }

            /// True unless this value is an unrecognized spelling.
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Other(_))
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                match s.as_str() {
                    $($spelling $(| $alias)* => Self::$variant,)+
                    _ => Self::Other(s),
                }
            }
        }

        impl From<$name> for String {
            fn from(v: $name) -> Self {
                v.as_str().to_string()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }
    };
}

pub(crate) use wire_enum;

wire_enum! {
    /// Yes/no toggle stored as a string on the wire.
    YesNo, default = No {
        No => "no",
        Yes => "yes",
    }
}

impl YesNo {
    pub fn is_yes(&self) -> bool {
        matches!(self, YesNo::Yes)
    }
}

/// Root input document: one described analytical method.
///
/// Owned by the caller; the pipeline reads it and returns a fresh
/// [`crate::ScoreResult`] without touching the profile.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MethodProfile {
    pub sample_prep: SamplePrepProfile,
    pub instrumentation: InstrumentationProfile,
    pub reagents: Vec<ReagentEntry>,
    pub waste: WasteProfile,
    pub practicality: PracticalityProfile,
}

impl MethodProfile {
    /// Fully-populated example profile used by `eppi template`.
    ///
    /// Defaults everywhere except the reagent list, which gets one
    /// representative entry so the wire shape of entries is visible.
    pub fn template() -> Self {
        Self {
            reagents: vec![ReagentEntry::template()],
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_parses_to_defaults() {
        let profile: MethodProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile, MethodProfile::default());
    }

    #[test]
    fn unknown_spelling_is_preserved_not_rejected() {
        let parsed: YesNo = serde_json::from_str("\"maybe\"").unwrap();
        assert_eq!(parsed, YesNo::Other("maybe".to_string()));
        assert!(!parsed.is_known());
    }

    #[test]
    fn known_spellings_round_trip() {
        let json = serde_json::to_string(&YesNo::Yes).unwrap();
        assert_eq!(json, "\"yes\"");
        let back: YesNo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, YesNo::Yes);
    }

    #[test]
    fn profile_fields_use_camel_case_keys() {
        let profile = MethodProfile::default();
        let value = serde_json::to_value(&profile).unwrap();
        assert!(value.get("samplePrep").is_some());
        assert!(value.get("instrumentation").is_some());
        assert!(value.get("reagents").is_some());
        assert!(value.get("waste").is_some());
        assert!(value.get("practicality").is_some());
    }
}
