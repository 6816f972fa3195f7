use num::BigUint;
use tracing::debug;

use super::mode::{ExclusionRule, exclusion_rule};
use super::{AnalysisResult, CountMode, rank_pattern, run_based};
use crate::core::{Category, DeckShape, PartitionCache, binomial};

/// Counts every hand category for one deck shape.
///
/// The analyzer owns a partition cache, so asking for several categories
/// of the same shape only generates the rank profiles once.
///
/// ```
/// use hand_census::analysis::DeckAnalyzer;
/// use hand_census::core::DeckShape;
/// use num::BigUint;
///
/// let analyzer = DeckAnalyzer::new(DeckShape::new(13, 4, 1, 5).unwrap());
/// assert_eq!(BigUint::from(2_598_960u32), analyzer.count_total_hands());
/// assert_eq!(BigUint::from(624u32), analyzer.count_four_of_a_kind(false));
/// assert_eq!(BigUint::from(10_200u32), analyzer.count_straight(true));
/// ```
#[derive(Debug)]
pub struct DeckAnalyzer {
    shape: DeckShape,
    cache: PartitionCache,
}

impl DeckAnalyzer {
    pub fn new(shape: DeckShape) -> Self {
        Self {
            shape,
            cache: PartitionCache::new(),
        }
    }

    pub fn shape(&self) -> &DeckShape {
        &self.shape
    }

    /// Every distinct hand: `C(total_cards, hand_size)`.
    pub fn count_total_hands(&self) -> BigUint {
        binomial(self.shape.total_cards(), self.shape.hand_size())
    }

    /// Hands in `category`, counted the way `mode` says.
    ///
    /// Never fails. A category the shape can't produce is zero.
    pub fn count(&self, category: Category, mode: CountMode) -> BigUint {
        if category.is_rank_pattern() {
            return rank_pattern::count(&self.shape, &self.cache, category, mode);
        }

        let inclusive = run_based::count(&self.shape, category);
        match (mode, exclusion_rule(category)) {
            (CountMode::Exclusive, ExclusionRule::Subtract(contained)) => {
                let overlap = run_based::count(&self.shape, contained);
                if overlap > inclusive {
                    BigUint::default()
                } else {
                    inclusive - overlap
                }
            }
            _ => inclusive,
        }
    }

    pub fn count_pair(&self, mode: impl Into<CountMode>) -> BigUint {
        self.count(Category::Pair, mode.into())
    }

    pub fn count_two_pair(&self, mode: impl Into<CountMode>) -> BigUint {
        self.count(Category::TwoPair, mode.into())
    }

    pub fn count_three_of_a_kind(&self, mode: impl Into<CountMode>) -> BigUint {
        self.count(Category::ThreeOfAKind, mode.into())
    }

    pub fn count_full_house(&self, mode: impl Into<CountMode>) -> BigUint {
        self.count(Category::FullHouse, mode.into())
    }

    /// Exclusive leaves out straight flushes.
    pub fn count_straight(&self, mode: impl Into<CountMode>) -> BigUint {
        self.count(Category::Straight, mode.into())
    }

    /// Exclusive leaves out straight flushes.
    pub fn count_flush(&self, mode: impl Into<CountMode>) -> BigUint {
        self.count(Category::Flush, mode.into())
    }

    pub fn count_four_of_a_kind(&self, mode: impl Into<CountMode>) -> BigUint {
        self.count(Category::FourOfAKind, mode.into())
    }

    pub fn count_straight_flush(&self, mode: impl Into<CountMode>) -> BigUint {
        self.count(Category::StraightFlush, mode.into())
    }

    pub fn count_five_of_a_kind(&self, mode: impl Into<CountMode>) -> BigUint {
        self.count(Category::FiveOfAKind, mode.into())
    }

    /// Inclusive counts and probabilities for all nine categories.
    pub fn analyze(&self) -> AnalysisResult {
        self.analyze_with(CountMode::Inclusive)
    }

    pub fn analyze_with(&self, mode: CountMode) -> AnalysisResult {
        let total = self.count_total_hands();
        let counts: Vec<(Category, BigUint)> = Category::categories()
            .into_iter()
            .map(|category| {
                let count = self.count(category, mode);
                debug!(shape = ?self.shape, ?mode, %category, %count, "Counted category");
                (category, count)
            })
            .collect();
        AnalysisResult::new(self.shape, mode, total, counts)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use num::Zero;

    use super::*;
    use crate::core::{DeckShapeBuilder, Partition, realize};

    fn analyzer(ranks: usize, suits: usize, copies: usize, hand: usize) -> DeckAnalyzer {
        DeckAnalyzer::new(DeckShape::new(ranks, suits, copies, hand).unwrap())
    }

    fn big(value: u64) -> BigUint {
        BigUint::from(value)
    }

    /// Decks with every hand size they allow, the whole deck included.
    fn shapes() -> Vec<DeckShape> {
        let mut shapes = Vec::new();
        for (ranks, suits, copies) in [
            (13, 4, 1),
            (9, 4, 1),
            (6, 4, 2),
            (13, 6, 1),
            (5, 4, 1),
            (4, 4, 1),
            (7, 1, 1),
            (3, 2, 3),
            (5, 2, 1),
            (10, 1, 1),
            (11, 1, 1),
        ] {
            for hand in 0..=ranks * suits * copies {
                if let Ok(shape) = DeckShape::new(ranks, suits, copies, hand) {
                    shapes.push(shape);
                }
            }
        }
        shapes
    }

    #[test_log::test]
    fn test_standard_five_card() {
        let a = analyzer(13, 4, 1, 5);
        assert_eq!(big(2_598_960), a.count_total_hands());
        assert_eq!(big(40), a.count_straight_flush(false));
        assert_eq!(big(624), a.count_four_of_a_kind(false));
        assert_eq!(big(3744), a.count_full_house(false));
        assert_eq!(big(10_240), a.count_straight(false));
        assert_eq!(big(10_200), a.count_straight(true));
        assert_eq!(big(5148), a.count_flush(false));
        assert_eq!(big(5108), a.count_flush(true));
    }

    #[test_log::test]
    fn test_standard_seven_card() {
        let a = analyzer(13, 4, 1, 7);
        assert_eq!(big(133_784_560), a.count_total_hands());
        assert_eq!(big(41_584), a.count_straight_flush(false));
        assert_eq!(big(6_412_688), a.count_straight(true));
        assert_eq!(big(4_047_644), a.count_flush(true));
    }

    #[test]
    fn test_standard_ten_card() {
        let a = analyzer(13, 4, 1, 10);
        assert_eq!(big(15_820_024_220), a.count_total_hands());
        assert_eq!(big(55_482_100), a.count_straight_flush(false));
        assert_eq!(big(4_051_217_344), a.count_straight(false));
    }

    #[test]
    fn test_every_standard_hand_size() {
        for hand in 0..=52 {
            let a = analyzer(13, 4, 1, hand);
            let result = a.analyze();
            assert!(result.iter().all(|c| c.count <= a.count_total_hands()));
            assert!(result.iter().all(|c| (0.0..=1.0).contains(&c.probability)));
        }
        // The whole deck holds everything but five of a kind.
        let whole = analyzer(13, 4, 1, 52).analyze();
        assert_eq!(8, whole.iter().filter(|c| c.is_possible()).count());
    }

    #[test]
    fn test_short_deck() {
        let a = analyzer(9, 4, 1, 5);
        assert_eq!(big(376_992), a.count_total_hands());
        assert_eq!(big(24), a.count_straight_flush(false));
    }

    #[test]
    fn test_five_of_a_kind_needs_copies() {
        assert_eq!(big(336), analyzer(6, 4, 2, 5).count_five_of_a_kind(false));
        assert!(analyzer(13, 4, 1, 7).count_five_of_a_kind(false).is_zero());
    }

    #[test]
    fn test_wide_deck() {
        let a = analyzer(13, 12, 1, 5);
        assert_eq!(big(721_656_936), a.count_total_hands());
        assert_eq!(big(401_410_152), a.count_pair(false));
    }

    #[test]
    fn test_mode_arguments_agree() {
        let a = analyzer(13, 4, 1, 5);
        assert_eq!(a.count_pair(true), a.count_pair(CountMode::Exclusive));
        assert_eq!(a.count_pair(false), a.count(Category::Pair, CountMode::Inclusive));
    }

    #[test]
    fn test_straight_identity_at_five_cards() {
        for shape in shapes().into_iter().filter(|s| s.hand_size() == 5) {
            let a = DeckAnalyzer::new(shape);
            assert_eq!(
                a.count_straight(false),
                a.count_straight(true) + a.count_straight_flush(false),
                "{shape:?}"
            );
        }
    }

    #[test]
    fn test_exclusive_never_exceeds_inclusive() {
        for shape in shapes() {
            let a = DeckAnalyzer::new(shape);
            let total = a.count_total_hands();
            for category in Category::categories() {
                let inclusive = a.count(category, CountMode::Inclusive);
                let exclusive = a.count(category, CountMode::Exclusive);
                assert!(exclusive <= inclusive, "{shape:?} {category}");
                assert!(inclusive <= total, "{shape:?} {category}");
            }
        }
    }

    #[test]
    fn test_partitions_tile_hand_space() {
        for shape in shapes() {
            let a = DeckAnalyzer::new(shape);
            let tiled: BigUint = a
                .cache
                .partitions(shape.hand_size(), shape.cards_per_rank(), shape.num_ranks())
                .iter()
                .map(|p: &Partition| realize(p, &shape))
                .sum();
            assert_eq!(a.count_total_hands(), tiled, "{shape:?}");
        }
    }

    #[test]
    fn test_repeatable() {
        let a = analyzer(6, 4, 2, 7);
        let first = a.analyze();
        let second = a.analyze();
        assert_eq!(first, second);
        assert_eq!(first, analyzer(6, 4, 2, 7).analyze());
    }

    #[test]
    fn test_too_few_ranks_for_runs() {
        let a = analyzer(4, 4, 1, 5);
        assert!(a.count_straight(false).is_zero());
        assert!(a.count_straight_flush(false).is_zero());
        // Five cards over four ranks always pair.
        assert_eq!(a.count_total_hands(), a.count_pair(false));
    }

    #[test]
    fn test_empty_hand() {
        let a = analyzer(13, 4, 1, 0);
        assert_eq!(big(1), a.count_total_hands());
        for category in Category::categories() {
            assert!(a.count(category, CountMode::Inclusive).is_zero());
        }
    }

    #[test]
    fn test_no_ranks() {
        let a = analyzer(0, 4, 1, 0);
        assert_eq!(big(1), a.count_total_hands());
        assert!(a.analyze().iter().all(|c| !c.is_possible()));
    }

    #[test]
    fn test_ace_high_only() {
        let shape = DeckShapeBuilder::default().ace_low(false).build().unwrap();
        let a = DeckAnalyzer::new(shape);
        assert_eq!(big(36), a.count_straight_flush(false));
        assert_eq!(big(9216), a.count_straight(false));
    }

    #[test_log::test]
    fn test_analyze() {
        let result = analyzer(13, 4, 1, 5).analyze();
        assert_eq!(CountMode::Inclusive, result.mode());
        assert_eq!(9, result.iter().count());
        assert_eq!(big(3744), result.count(Category::FullHouse));
        assert_relative_eq!(
            3744.0 / 2_598_960.0,
            result.probability(Category::FullHouse),
            epsilon = 1e-12
        );

        let exclusive = analyzer(13, 4, 1, 5).analyze_with(CountMode::Exclusive);
        assert_eq!(big(1_098_240), exclusive.count(Category::Pair));
    }
}
