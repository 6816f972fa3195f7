use std::fmt;

use super::describe;
use super::format::{format_count, format_odds, format_percent};
use crate::analysis::{AnalysisResult, CountMode};

/// Printable overview of one analysis.
///
/// Lists the deck, the total number of hands, every possible category
/// with its count and probability, and then the same categories from
/// rarest to most common.
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a> {
    result: &'a AnalysisResult,
}

impl<'a> Summary<'a> {
    pub fn new(result: &'a AnalysisResult) -> Self {
        Self { result }
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;
        let shape = result.shape();

        writeln!(f, "{}", describe(shape))?;
        writeln!(f, "Hand size: {} cards", shape.hand_size())?;
        writeln!(
            f,
            "Total possible hands: {}",
            format_count(result.total_hands())
        )?;
        writeln!(f)?;
        writeln!(f, "Deck properties:")?;
        writeln!(f, "  - Cards per rank: {}", shape.cards_per_rank())?;
        writeln!(f, "  - Cards per suit: {}", shape.cards_per_suit())?;
        writeln!(f)?;

        match result.mode() {
            CountMode::Inclusive => writeln!(f, "HAND TYPE COUNTS (with overlaps)")?,
            CountMode::Exclusive => writeln!(f, "HAND TYPE COUNTS (exclusive)")?,
        }
        for row in result.iter().filter(|c| c.is_possible()) {
            writeln!(
                f,
                "{:<25} {:>14} hands  ({:>8})",
                row.category,
                format_count(&row.count),
                format_percent(row.probability, 2)
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Sum of probabilities: {} (overlaps cause >100%)",
            format_percent(result.probability_sum(), 1)
        )?;
        writeln!(f)?;

        writeln!(f, "RARITY RANKING (rarest to most common)")?;
        for (idx, row) in result.rarity_ranking().into_iter().enumerate() {
            let odds = result
                .odds(row.category)
                .map_or_else(|| "N/A".to_string(), format_odds);
            writeln!(
                f,
                "{}. {:<25} {:>9}  ({})",
                idx + 1,
                row.category,
                format_percent(row.probability, 4),
                odds
            )?;
        }
        Ok(())
    }
}
