//! Reagent entries: GHS hazard classification inputs.

use serde::{Deserialize, Serialize};

use super::wire_enum;

wire_enum! {
    /// GHS signal word from the reagent's safety data sheet.
    SignalWord, default = NotAvailable {
        Warning => "warning",
        Danger => "danger",
        NotAvailable => "notAvailable",
    }
}

wire_enum! {
    /// GHS pictogram count tier.
    GhsClass, default = Zero {
        Zero => "zero",
        One => "one",
        Two => "two",
        Three => "three",
    }
}

wire_enum! {
    /// Reagent volume band, in mL.
    ///
    /// The two middle bands accept the legacy alias spellings that one of the
    /// original form surfaces emitted.
    ReagentVolume, default = LessThanOne {
        LessThanOne => "less1",
        LessThanTen => "less10" | "between1And10",
        TenToHundred => "between10And100" | "less100",
        MoreThanHundred => "more100",
    }
}

/// One reagent used by the method. Order of entries is irrelevant to scoring.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReagentEntry {
    /// Free-text reagent/solvent name; `water` (any casing) is special-cased
    /// by the scorer when the GHS class is zero.
    pub solvent_type: String,
    pub signal_word: SignalWord,
    pub ghs_class: GhsClass,
    pub volume: ReagentVolume,
}

impl ReagentEntry {
    /// True when this entry names water, ignoring case and whitespace.
    pub fn is_water(&self) -> bool {
        self.solvent_type.trim().eq_ignore_ascii_case("water")
    }

    /// Representative entry for the `eppi template` output.
    pub fn template() -> Self {
        Self {
            solvent_type: "water".to_string(),
            signal_word: SignalWord::NotAvailable,
            ghs_class: GhsClass::Zero,
            volume: ReagentVolume::LessThanOne,
        }
    }
}
