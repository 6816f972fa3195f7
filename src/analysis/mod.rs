//! The counting engine. Everything here works on a `DeckShape` and
//! returns exact counts.

/// Inclusive and exclusive counting and the containment table.
mod mode;
/// Export `CountMode` and the containment table.
pub use self::mode::{CountMode, ExclusionRule, PatternFlags, exclusion_rule};

/// Pair through five of a kind, from rank profiles.
mod rank_pattern;

/// Straights, flushes and straight flushes.
mod run_based;
/// Export the straight type count.
pub use self::run_based::{RUN_LENGTH, straight_types};

/// Results of an analysis.
mod result;
/// Export `AnalysisResult`
pub use self::result::{AnalysisResult, CategoryCount, ratio};

/// The analyzer facade.
mod analyzer;
/// Export `DeckAnalyzer`
pub use self::analyzer::DeckAnalyzer;
