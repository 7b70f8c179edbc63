// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod io;
pub mod profile;
pub mod scoring;

// Re-export commonly used types
pub use crate::config::{IndexWeights, ScoreConfig, ScoringMode};
pub use crate::errors::ScoreError;
pub use crate::profile::{
    InstrumentationProfile, MethodProfile, PracticalityProfile, ReagentEntry, SamplePrepProfile,
    WasteProfile,
};
pub use crate::scoring::bands::{
    classify_ei_gauge, classify_ei_report, classify_ppi, classify_total_gauge,
    classify_total_report, EiBand, PpiBand, TotalBand,
};
pub use crate::scoring::pipeline::{score_method, score_method_detailed, ScoreBreakdown};
pub use crate::scoring::reagent::score_reagent_entry;
pub use crate::scoring::{InstrumentationBonuses, ScoreResult};

pub use crate::io::output::{create_writer, OutputFormat, ScoreWriter};
