//! Reagent scorer: GHS hazard tiers averaged over all entries.
//!
//! The hazard-tier table lives here once and is shared by the aggregate
//! scorer and any per-entry UI helper through [`score_reagent_entry`], so the
//! two surfaces cannot drift apart.

use crate::config::ScoringMode;
use crate::errors::ScoreError;
use crate::profile::{GhsClass, ReagentEntry, ReagentVolume, SignalWord};

/// Per-entry scores and their mean.
#[derive(Debug, Clone, PartialEq)]
pub struct ReagentScores {
    pub entries: Vec<f64>,
    pub score: f64,
}

/// Scores across the four volume bands, greenest volume first.
type VolumeBandScores = [f64; 4];

const ONE_WARNING: VolumeBandScores = [98.0, 96.0, 94.0, 92.0];
const ONE_DANGER_TWO_WARNING: VolumeBandScores = [90.0, 85.0, 80.0, 75.0];
const TWO_DANGER: VolumeBandScores = [70.0, 65.0, 60.0, 55.0];
const THREE_ANY: VolumeBandScores = [50.0, 45.0, 40.0, 35.0];

fn volume_index(volume: &ReagentVolume) -> Option<usize> {
    match volume {
        ReagentVolume::LessThanOne => Some(0),
        ReagentVolume::LessThanTen => Some(1),
        ReagentVolume::TenToHundred => Some(2),
        ReagentVolume::MoreThanHundred => Some(3),
        ReagentVolume::Other(_) => None,
    }
}

/// Hazard tier for a class/signal combination. `None` means the combination
/// matches no tier (e.g. one pictogram with no signal word on record).
fn hazard_tier(ghs_class: &GhsClass, signal_word: &SignalWord) -> Option<&'static VolumeBandScores> {
    match (ghs_class, signal_word) {
        (GhsClass::One, SignalWord::Warning) => Some(&ONE_WARNING),
        (GhsClass::One, SignalWord::Danger) | (GhsClass::Two, SignalWord::Warning) => {
            Some(&ONE_DANGER_TWO_WARNING)
        }
        (GhsClass::Two, SignalWord::Danger) => Some(&TWO_DANGER),
        // Three pictograms dominate; the signal word is not consulted.
        (GhsClass::Three, _) => Some(&THREE_ANY),
        _ => None,
    }
}

/// Score one reagent entry on the 0-100 scale.
///
/// Water with GHS class zero, and class zero generally, score 100 regardless
/// of volume and signal word. Combinations outside the tier table score 0 in
/// compat mode; strict mode reports them with the entry index.
pub fn score_reagent_entry(
    entry: &ReagentEntry,
    index: usize,
    mode: ScoringMode,
) -> Result<f64, ScoreError> {
    // Covers the water-with-class-zero case: water never carries pictograms.
    if entry.ghs_class == GhsClass::Zero {
        return Ok(100.0);
    }

    let tier = hazard_tier(&entry.ghs_class, &entry.signal_word);
    let band = volume_index(&entry.volume);

    match (tier, band) {
        (Some(scores), Some(i)) => Ok(scores[i]),
        _ if mode.is_strict() => Err(ScoreError::UnmatchedHazard {
            index,
            ghs_class: entry.ghs_class.as_str().to_string(),
            signal_word: entry.signal_word.as_str().to_string(),
        }),
        _ => {
            log::debug!(
                "reagent entry {index} (ghsClass `{}`, signalWord `{}`, volume `{}`) matches no hazard tier, scoring 0",
                entry.ghs_class.as_str(),
                entry.signal_word.as_str(),
                entry.volume.as_str()
            );
            Ok(0.0)
        }
    }
}

/// Score the whole reagent list: arithmetic mean over entries, 100 when the
/// list is empty (water-only method).
pub fn score_reagents(
    reagents: &[ReagentEntry],
    mode: ScoringMode,
) -> Result<ReagentScores, ScoreError> {
    if reagents.is_empty() {
        return Ok(ReagentScores {
            entries: Vec::new(),
            score: 100.0,
        });
    }

    let entries = reagents
        .iter()
        .enumerate()
        .map(|(index, entry)| score_reagent_entry(entry, index, mode))
        .collect::<Result<Vec<f64>, ScoreError>>()?;

    let score = entries.iter().sum::<f64>() / entries.len() as f64;
    Ok(ReagentScores { entries, score })
}
