use std::fmt;

use tracing::{Level, event};

use super::describe;
use super::format::{format_odds, format_percent};
use crate::analysis::{AnalysisResult, CountMode, DeckAnalyzer};
use crate::core::{Category, DeckShape, HandCensusError};

/// A category whose rarity rank moved somewhere in the sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingChange {
    pub category: Category,
    /// `(hand_size, rank)` for every size where the category is possible.
    pub history: Vec<(usize, usize)>,
    /// Largest rank minus smallest rank.
    pub range: usize,
}

/// Two categories that swap order between consecutive hand sizes.
///
/// `rarer` was the rarer of the two at `from_size` and is the more
/// common one at `to_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crossover {
    pub from_size: usize,
    pub to_size: usize,
    pub rarer: Category,
    pub other: Category,
}

/// One deck analyzed at several hand sizes.
#[derive(Debug, Clone)]
pub struct HandSizeSweep {
    base: DeckShape,
    mode: CountMode,
    results: Vec<AnalysisResult>,
}

fn analyze_size(
    base: &DeckShape,
    hand_size: usize,
    mode: CountMode,
) -> Result<AnalysisResult, HandCensusError> {
    let shape = base.with_hand_size(hand_size)?;
    event!(Level::INFO, hand_size, deck = %describe(&shape), "Analyzing hand size");
    Ok(DeckAnalyzer::new(shape).analyze_with(mode))
}

impl HandSizeSweep {
    /// Analyze the deck at each of `sizes`.
    ///
    /// Sizes bigger than the deck are skipped. If nothing is left the
    /// sweep fails with `EmptySweep`.
    pub fn run(
        num_ranks: usize,
        num_suits: usize,
        num_copies: usize,
        sizes: impl IntoIterator<Item = usize>,
        mode: CountMode,
    ) -> Result<Self, HandCensusError> {
        let base = DeckShape::new(num_ranks, num_suits, num_copies, 0)?;

        let mut sizes: Vec<usize> = sizes.into_iter().collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes.retain(|&size| {
            let fits = size <= base.total_cards();
            if !fits {
                event!(
                    Level::WARN,
                    hand_size = size,
                    total_cards = base.total_cards(),
                    "Skipping hand size larger than the deck"
                );
            }
            fits
        });
        if sizes.is_empty() {
            return Err(HandCensusError::EmptySweep);
        }

        #[cfg(feature = "parallel")]
        let results = {
            use rayon::prelude::*;
            sizes
                .par_iter()
                .map(|&size| analyze_size(&base, size, mode))
                .collect::<Result<Vec<_>, _>>()?
        };
        #[cfg(not(feature = "parallel"))]
        let results = sizes
            .iter()
            .map(|&size| analyze_size(&base, size, mode))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            base,
            mode,
            results,
        })
    }

    /// The deck with hand size zero.
    pub fn deck(&self) -> &DeckShape {
        &self.base
    }

    pub fn mode(&self) -> CountMode {
        self.mode
    }

    /// Hand sizes analyzed, smallest first.
    pub fn sizes(&self) -> Vec<usize> {
        self.results.iter().map(|r| r.shape().hand_size()).collect()
    }

    pub fn results(&self) -> &[AnalysisResult] {
        &self.results
    }

    pub fn get(&self, hand_size: usize) -> Option<&AnalysisResult> {
        self.results
            .iter()
            .find(|r| r.shape().hand_size() == hand_size)
    }

    /// Rarity rank of a category at one hand size, 1 being the rarest.
    pub fn rank(&self, hand_size: usize, category: Category) -> Option<usize> {
        self.get(hand_size)?.rarity_rank(category)
    }

    /// Categories whose rank isn't the same at every size, biggest
    /// moves first.
    pub fn ranking_changes(&self) -> Vec<RankingChange> {
        let mut changes: Vec<RankingChange> = Category::categories()
            .into_iter()
            .filter_map(|category| {
                let history: Vec<(usize, usize)> = self
                    .results
                    .iter()
                    .filter_map(|r| {
                        r.rarity_rank(category)
                            .map(|rank| (r.shape().hand_size(), rank))
                    })
                    .collect();
                let lowest = history.iter().map(|&(_, rank)| rank).min()?;
                let highest = history.iter().map(|&(_, rank)| rank).max()?;
                (highest > lowest).then(|| RankingChange {
                    category,
                    history,
                    range: highest - lowest,
                })
            })
            .collect();
        changes.sort_by(|a, b| b.range.cmp(&a.range));
        changes
    }

    /// Pairs of categories whose relative rarity flips from one hand
    /// size to the next.
    pub fn crossovers(&self) -> Vec<Crossover> {
        let mut found = Vec::new();
        for window in self.results.windows(2) {
            let (before, after) = (&window[0], &window[1]);
            let order: Vec<Category> = before
                .rarity_ranking()
                .into_iter()
                .map(|c| c.category)
                .collect();

            for (idx, &rarer) in order.iter().enumerate() {
                for &other in &order[idx + 1..] {
                    let flipped = match (after.rarity_rank(rarer), after.rarity_rank(other)) {
                        (Some(a), Some(b)) => a > b,
                        _ => false,
                    };
                    if flipped {
                        found.push(Crossover {
                            from_size: before.shape().hand_size(),
                            to_size: after.shape().hand_size(),
                            rarer,
                            other,
                        });
                    }
                }
            }
        }
        found
    }

    fn write_header(&self, f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(100))?;
        writeln!(f, "{title}")?;
        writeln!(f, "{}", "=".repeat(100))?;
        write!(f, "{:<25}", "Hand Type")?;
        for size in self.sizes() {
            write!(f, "{:>15} cd", size)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "-".repeat(100))
    }

    fn write_table(
        &self,
        f: &mut fmt::Formatter<'_>,
        title: &str,
        cell: impl Fn(&AnalysisResult, Category) -> Option<String>,
    ) -> fmt::Result {
        self.write_header(f, title)?;
        for category in Category::categories() {
            write!(f, "{:<25}", category)?;
            for result in &self.results {
                let text = cell(result, category).unwrap_or_else(|| "---".to_string());
                write!(f, "{:>18}", text)?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for HandSizeSweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", describe(&self.base))?;
        if self.mode.is_exclusive() {
            writeln!(f, "Exclusive counts")?;
        }
        writeln!(f)?;

        self.write_table(f, "PROBABILITY BY HAND SIZE", |result, category| {
            result
                .get(category)
                .filter(|c| c.is_possible())
                .map(|c| format_percent(c.probability, 3))
        })?;
        self.write_table(f, "RARITY RANKING (1 = rarest)", |result, category| {
            result.rarity_rank(category).map(|rank| rank.to_string())
        })?;
        self.write_table(f, "ODDS (1 in X)", |result, category| {
            result.odds(category).map(format_odds)
        })?;

        writeln!(f, "RANKING CHANGES")?;
        let changes = self.ranking_changes();
        if changes.is_empty() {
            writeln!(f, "  No ranking changes")?;
        }
        for change in changes {
            let history: Vec<String> = change
                .history
                .iter()
                .map(|(size, rank)| format!("{size}cd:#{rank}"))
                .collect();
            writeln!(
                f,
                "  {:<25} {} (range: {})",
                change.category,
                history.join(" -> "),
                change.range
            )?;
        }
        writeln!(f)?;

        writeln!(f, "CROSSOVERS")?;
        let crossovers = self.crossovers();
        if crossovers.is_empty() {
            writeln!(f, "  No crossovers detected")?;
        }
        for c in crossovers {
            writeln!(
                f,
                "  {} -> {} cards: '{}' and '{}' swap positions",
                c.from_size, c.to_size, c.rarer, c.other
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn test_standard_sweep() {
        let sweep = HandSizeSweep::run(13, 4, 1, [7, 5, 7], CountMode::Inclusive).unwrap();
        assert_eq!(vec![5, 7], sweep.sizes());
        assert_eq!(Some(1), sweep.rank(5, Category::StraightFlush));
        assert_eq!(Some(8), sweep.rank(7, Category::Pair));
        assert_eq!(None, sweep.rank(7, Category::FiveOfAKind));
        assert_eq!(None, sweep.rank(6, Category::Pair));
        // Five and seven cards rank the categories the same way.
        assert!(sweep.ranking_changes().is_empty());
        assert!(sweep.crossovers().is_empty());
    }

    #[test]
    fn test_pinochle_full_house_and_straight_swap() {
        let sweep = HandSizeSweep::run(6, 4, 2, [5, 7], CountMode::Inclusive).unwrap();

        let changes = sweep.ranking_changes();
        assert_eq!(2, changes.len());
        assert_eq!(Category::FullHouse, changes[0].category);
        assert_eq!(vec![(5, 5), (7, 6)], changes[0].history);
        assert_eq!(1, changes[0].range);
        assert_eq!(Category::Straight, changes[1].category);
        assert_eq!(vec![(5, 6), (7, 5)], changes[1].history);

        assert_eq!(
            vec![Crossover {
                from_size: 5,
                to_size: 7,
                rarer: Category::FullHouse,
                other: Category::Straight,
            }],
            sweep.crossovers()
        );
    }

    #[test]
    fn test_skips_sizes_beyond_deck() {
        let sweep = HandSizeSweep::run(6, 4, 2, [5, 49, 60], CountMode::Inclusive).unwrap();
        assert_eq!(vec![5], sweep.sizes());
        assert_eq!(
            Err(HandCensusError::EmptySweep),
            HandSizeSweep::run(9, 4, 1, [40], CountMode::Inclusive).map(|s| s.sizes())
        );
        assert_eq!(
            Err(HandCensusError::EmptySweep),
            HandSizeSweep::run(9, 4, 1, Vec::new(), CountMode::Inclusive).map(|s| s.sizes())
        );
    }

    #[test]
    fn test_bad_deck() {
        assert_eq!(
            Err(HandCensusError::ZeroSuits),
            HandSizeSweep::run(13, 0, 1, [5], CountMode::Inclusive).map(|s| s.sizes())
        );
    }

    #[test]
    fn test_exclusive_mode_carried() {
        let sweep = HandSizeSweep::run(13, 4, 1, [5], CountMode::Exclusive).unwrap();
        let result = sweep.get(5).unwrap();
        assert_eq!(CountMode::Exclusive, result.mode());
        assert_eq!(
            num::BigUint::from(10_200u32),
            result.count(Category::Straight)
        );
    }

    #[test]
    fn test_display() {
        let sweep = HandSizeSweep::run(6, 4, 2, [5, 7], CountMode::Inclusive).unwrap();
        let text = sweep.to_string();
        assert!(text.starts_with("Pinochle Deck (6 ranks × 4 suits × 2 copies = 48 cards)"));
        assert!(text.contains("PROBABILITY BY HAND SIZE"));
        assert!(text.contains("RARITY RANKING (1 = rarest)"));
        assert!(text.contains("ODDS (1 in X)"));
        assert!(text.contains("5cd:#5 -> 7cd:#6"));
        assert!(text.contains("5 -> 7 cards: 'Full house' and 'Straight' swap positions"));
    }
}
