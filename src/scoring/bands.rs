//! Interpretation bands for the three indices.
//!
//! Band enums are ordered best-first so ordering comparisons read like tier
//! comparisons. Two historical threshold tables exist for the Environmental
//! Index and two label sets for the total; the report and gauge surfaces
//! diverged long ago and both are kept as separate entry points until the
//! product decides which one wins.

use serde::{Deserialize, Serialize};

/// Environmental Index interpretation band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EiBand {
    IdealGreen,
    MinimalImpact,
    ConsiderableImpact,
    SeriousImpact,
}

impl EiBand {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            EiBand::IdealGreen => "Ideal Green Method",
            EiBand::MinimalImpact => "Minimal Impact",
            EiBand::ConsiderableImpact => "Considerable Impact",
            EiBand::SeriousImpact => "Serious Impact",
        }
    }

    /// UI color-class identifier.
    pub fn css_class(&self) -> &'static str {
        match self {
            EiBand::IdealGreen => "dark-green",
            EiBand::MinimalImpact => "light-green",
            EiBand::ConsiderableImpact => "yellow",
            EiBand::SeriousImpact => "red",
        }
    }
}

/// EI bands as shown in the main report: 90/85/65 thresholds.
pub fn classify_ei_report(score: f64) -> EiBand {
    if score >= 90.0 {
        EiBand::IdealGreen
    } else if score >= 85.0 {
        EiBand::MinimalImpact
    } else if score >= 65.0 {
        EiBand::ConsiderableImpact
    } else {
        EiBand::SeriousImpact
    }
}

/// EI bands as shown on the gauge surface: 85/70/55 thresholds.
pub fn classify_ei_gauge(score: f64) -> EiBand {
    if score >= 85.0 {
        EiBand::IdealGreen
    } else if score >= 70.0 {
        EiBand::MinimalImpact
    } else if score >= 55.0 {
        EiBand::ConsiderableImpact
    } else {
        EiBand::SeriousImpact
    }
}

/// Performance Practicality Index interpretation band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PpiBand {
    Excellent,
    Acceptable,
    Impractical,
}

impl PpiBand {
    pub fn label(&self) -> &'static str {
        match self {
            PpiBand::Excellent => "Excellent",
            PpiBand::Acceptable => "Acceptable",
            PpiBand::Impractical => "Impractical",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            PpiBand::Excellent => "dark-green",
            PpiBand::Acceptable => "yellow",
            PpiBand::Impractical => "red",
        }
    }
}

/// PPI bands: 75/50 thresholds.
pub fn classify_ppi(score: f64) -> PpiBand {
    if score >= 75.0 {
        PpiBand::Excellent
    } else if score >= 50.0 {
        PpiBand::Acceptable
    } else {
        PpiBand::Impractical
    }
}

/// Total (EPPI) interpretation band.
///
/// The report and gauge surfaces share thresholds but label the bands
/// differently; both label sets are exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TotalBand {
    HighlyRecommended,
    Recommended,
    NeedsImprovement,
    NotRecommended,
}

impl TotalBand {
    /// Report-surface label.
    pub fn label(&self) -> &'static str {
        match self {
            TotalBand::HighlyRecommended => "Highly Recommended",
            TotalBand::Recommended => "Recommended",
            TotalBand::NeedsImprovement => "Needs Improvement",
            TotalBand::NotRecommended => "Not Recommended",
        }
    }

    /// Gauge-surface label.
    pub fn gauge_label(&self) -> &'static str {
        match self {
            TotalBand::HighlyRecommended => "Ideal Method",
            TotalBand::Recommended => "Good Method",
            TotalBand::NeedsImprovement => "Needs Improvement",
            TotalBand::NotRecommended => "Critical Concerns",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            TotalBand::HighlyRecommended => "dark-green",
            TotalBand::Recommended => "light-green",
            TotalBand::NeedsImprovement => "yellow",
            TotalBand::NotRecommended => "red",
        }
    }
}

/// Total bands for the report surface: 75/50/25 thresholds.
pub fn classify_total_report(score: f64) -> TotalBand {
    if score >= 75.0 {
        TotalBand::HighlyRecommended
    } else if score >= 50.0 {
        TotalBand::Recommended
    } else if score >= 25.0 {
        TotalBand::NeedsImprovement
    } else {
        TotalBand::NotRecommended
    }
}

/// Total bands for the gauge surface. Thresholds currently match the report
/// table; kept separate because the surfaces have diverged before.
pub fn classify_total_gauge(score: f64) -> TotalBand {
    if score >= 75.0 {
        TotalBand::HighlyRecommended
    } else if score >= 50.0 {
        TotalBand::Recommended
    } else if score >= 25.0 {
        TotalBand::NeedsImprovement
    } else {
        TotalBand::NotRecommended
    }
}
