//! Reports built on the counting engine: presets, printable
//! summaries, the traditional ladder, sweeps across hand sizes and CSV.
//!
//! Nothing here looks at partitions. It only uses `DeckAnalyzer` and
//! `AnalysisResult`.

/// Named decks.
mod preset;
/// Export `DeckPreset` and `describe`
pub use self::preset::{DeckPreset, describe};

/// Number formatting shared by the reports.
mod format;
pub use self::format::{format_count, format_odds, format_percent};

/// Printable single analysis.
mod summary;
/// Export `Summary`
pub use self::summary::Summary;

/// Best hand first ladder.
mod ladder;
/// Export `TraditionalLadder`
pub use self::ladder::{LadderRow, TraditionalLadder};

/// Several hand sizes of one deck.
mod sweep;
/// Export `HandSizeSweep`
pub use self::sweep::{Crossover, HandSizeSweep, RankingChange};

/// CSV output for sweeps.
mod csv;
pub use self::csv::{CSV_HEADER, write_csv};
