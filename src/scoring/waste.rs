//! Waste scorer: volume base plus biodegradability and treatment modifiers.

use crate::config::ScoringMode;
use crate::errors::ScoreError;
use crate::profile::{WasteProfile, WasteTreatment, WasteVolume};

use super::{clamp_score, resolve_term};

fn volume_base(value: &WasteVolume) -> Option<f64> {
    match value {
        WasteVolume::LessThanOne => Some(100.0),
        WasteVolume::OneToTen => Some(90.0),
        WasteVolume::TenToHundred => Some(60.0),
        WasteVolume::MoreThanHundred => Some(35.0),
        WasteVolume::Other(_) => None,
    }
}

fn treatment_modifier(value: &WasteTreatment) -> Option<f64> {
    match value {
        WasteTreatment::None => Some(-5.0),
        WasteTreatment::LessThanTen => Some(10.0),
        WasteTreatment::MoreThanTen => Some(20.0),
        WasteTreatment::Other(_) => None,
    }
}

/// Score the waste section, clamped to [0,100].
pub fn score_waste(profile: &WasteProfile, mode: ScoringMode) -> Result<f64, ScoreError> {
    let mut score = resolve_term(
        volume_base(&profile.volume),
        mode,
        "waste.volume",
        profile.volume.as_str(),
    )?;

    score += if profile.biodegradable { 10.0 } else { -10.0 };

    score += resolve_term(
        treatment_modifier(&profile.treatment),
        mode,
        "waste.treatment",
        profile.treatment.as_str(),
    )?;

    Ok(clamp_score(score))
}
