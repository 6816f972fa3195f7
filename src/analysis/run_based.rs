use num::{BigUint, CheckedSub, One, Zero};

use crate::core::{Category, DeckShape, binomial};

/// Ranks (or suit cards) needed for a straight or a flush.
pub const RUN_LENGTH: usize = 5;

/// How many distinct five rank runs the deck has.
///
/// One per starting rank, plus the wheel when the top rank can also play
/// low. With exactly five ranks the wheel uses the same ranks as the only
/// natural run, so it isn't a new straight.
pub fn straight_types(shape: &DeckShape) -> usize {
    let ranks = shape.num_ranks();
    if ranks < RUN_LENGTH {
        return 0;
    }
    let wheel = usize::from(has_wheel(shape));
    ranks - (RUN_LENGTH - 1) + wheel
}

/// Whether the top rank also plays below the bottom four.
fn has_wheel(shape: &DeckShape) -> bool {
    shape.ace_low() && shape.num_ranks() > RUN_LENGTH
}

/// Picks of at most `hand` cards that hold no run, by size: entry `n` is
/// how many `n` card picks have no five present ranks in a row.
///
/// Each rank offers `width` cards. The walk goes from the bottom rank up,
/// tracking how many present ranks in a row end at the current one and
/// whether the bottom four are all present. A fifth rank in a row is a
/// run and is dropped. With `wheel`, a pick holding the top rank and the
/// bottom four is dropped at the end.
fn runless_picks(num_ranks: usize, width: usize, hand: usize, wheel: bool) -> Vec<BigUint> {
    let empty = || vec![BigUint::zero(); hand + 1];
    // Ways to take `j + 1` cards from one present rank.
    let present: Vec<BigUint> = (1..=width.min(hand)).map(|j| binomial(width, j)).collect();

    // states[streak][bottom_four]
    let mut states: Vec<[Vec<BigUint>; 2]> = (0..RUN_LENGTH).map(|_| [empty(), empty()]).collect();
    states[0][0][0] = BigUint::one();

    for rank in 0..num_ranks {
        let mut next: Vec<[Vec<BigUint>; 2]> =
            (0..RUN_LENGTH).map(|_| [empty(), empty()]).collect();
        for (streak, by_bottom) in states.iter().enumerate() {
            for (bottom_four, picks) in by_bottom.iter().enumerate() {
                if picks.iter().all(|ways| ways.is_zero()) {
                    continue;
                }
                // Rank missing: the streak resets.
                for (size, ways) in picks.iter().enumerate() {
                    next[0][bottom_four][size] += ways;
                }

                let longer = streak + 1;
                if longer == RUN_LENGTH {
                    continue;
                }
                let bottom = usize::from(
                    bottom_four == 1 || (rank == RUN_LENGTH - 2 && longer == RUN_LENGTH - 1),
                );
                let target = &mut next[longer][bottom];
                for (size, ways) in picks.iter().enumerate() {
                    if ways.is_zero() {
                        continue;
                    }
                    for (j, take) in present.iter().enumerate() {
                        let grown = size + j + 1;
                        if grown > hand {
                            break;
                        }
                        target[grown] += ways * take;
                    }
                }
            }
        }
        states = next;
    }

    let mut runless = empty();
    for (streak, by_bottom) in states.iter().enumerate() {
        for (bottom_four, picks) in by_bottom.iter().enumerate() {
            if wheel && bottom_four == 1 && streak > 0 {
                continue;
            }
            for (size, ways) in picks.iter().enumerate() {
                runless[size] += ways;
            }
        }
    }
    runless
}

/// `all` minus `excluded`, floored at zero.
fn complement(all: BigUint, excluded: &BigUint) -> BigUint {
    all.checked_sub(excluded).unwrap_or_default()
}

/// Hands where no single suit qualifies, given `ways(j)`: how many `j`
/// card picks from one suit do not qualify.
///
/// That's the `x^hand` coefficient of `(sum_j ways(j) x^j)^suits`. Going
/// through the complement counts a hand once even when two suits qualify.
fn hands_without(shape: &DeckShape, ways: impl Fn(usize) -> BigUint) -> BigUint {
    let hand = shape.hand_size();
    let per_suit: Vec<BigUint> = (0..=hand.min(shape.cards_per_suit())).map(ways).collect();

    let mut product = vec![BigUint::one()];
    for _ in 0..shape.num_suits() {
        let mut next = vec![BigUint::zero(); (product.len() + per_suit.len() - 1).min(hand + 1)];
        for (i, a) in product.iter().enumerate() {
            for (j, b) in per_suit.iter().enumerate().take(next.len() - i) {
                next[i + j] += a * b;
            }
        }
        product = next;
    }
    product.get(hand).cloned().unwrap_or_default()
}

/// Hands holding a straight.
pub(crate) fn straights(shape: &DeckShape) -> BigUint {
    let hand = shape.hand_size();
    if shape.num_ranks() < RUN_LENGTH || hand < RUN_LENGTH {
        return BigUint::zero();
    }
    if hand == RUN_LENGTH {
        // One card from each run rank, any suit and copy.
        return BigUint::from(straight_types(shape))
            * num::pow(BigUint::from(shape.cards_per_rank()), RUN_LENGTH);
    }
    let runless = runless_picks(
        shape.num_ranks(),
        shape.cards_per_rank(),
        hand,
        has_wheel(shape),
    );
    complement(binomial(shape.total_cards(), hand), &runless[hand])
}

/// Hands holding five or more cards of one suit.
pub(crate) fn flushes(shape: &DeckShape) -> BigUint {
    let hand = shape.hand_size();
    let per_suit = shape.cards_per_suit();
    if per_suit < RUN_LENGTH || hand < RUN_LENGTH {
        return BigUint::zero();
    }
    if hand == RUN_LENGTH {
        return BigUint::from(shape.num_suits()) * binomial(per_suit, RUN_LENGTH);
    }
    // Every hand minus the ones with at most four cards in each suit.
    let short_suits = hands_without(shape, |in_suit| {
        if in_suit < RUN_LENGTH {
            binomial(per_suit, in_suit)
        } else {
            BigUint::zero()
        }
    });
    complement(binomial(shape.total_cards(), hand), &short_suits)
}

/// Hands holding a straight flush.
pub(crate) fn straight_flushes(shape: &DeckShape) -> BigUint {
    let hand = shape.hand_size();
    if shape.num_ranks() < RUN_LENGTH || hand < RUN_LENGTH {
        return BigUint::zero();
    }
    if hand == RUN_LENGTH {
        return BigUint::from(shape.num_suits())
            * BigUint::from(straight_types(shape))
            * num::pow(BigUint::from(shape.num_copies()), RUN_LENGTH);
    }
    // Inside one suit each rank only offers its copies.
    let runless_in_suit =
        runless_picks(shape.num_ranks(), shape.num_copies(), hand, has_wheel(shape));
    let no_run_in_any_suit = hands_without(shape, |in_suit| runless_in_suit[in_suit].clone());
    complement(binomial(shape.total_cards(), hand), &no_run_in_any_suit)
}

/// Inclusive count for one of the run categories.
pub(crate) fn count(shape: &DeckShape, category: Category) -> BigUint {
    match category {
        Category::Straight => straights(shape),
        Category::Flush => flushes(shape),
        Category::StraightFlush => straight_flushes(shape),
        _ => BigUint::zero(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DeckShapeBuilder;

    fn counts(ranks: usize, suits: usize, copies: usize, hand: usize) -> [u64; 3] {
        let shape = DeckShape::new(ranks, suits, copies, hand).unwrap();
        [
            u64::try_from(straights(&shape)).unwrap(),
            u64::try_from(flushes(&shape)).unwrap(),
            u64::try_from(straight_flushes(&shape)).unwrap(),
        ]
    }

    #[test]
    fn test_straight_types() {
        let standard = DeckShape::new(13, 4, 1, 5).unwrap();
        assert_eq!(10, straight_types(&standard));
        let short = DeckShape::new(9, 4, 1, 5).unwrap();
        assert_eq!(6, straight_types(&short));
        let five = DeckShape::new(5, 4, 1, 5).unwrap();
        assert_eq!(1, straight_types(&five));
        let four = DeckShape::new(4, 4, 1, 5).unwrap();
        assert_eq!(0, straight_types(&four));
        let no_wheel = DeckShapeBuilder::default().ace_low(false).build().unwrap();
        assert_eq!(9, straight_types(&no_wheel));
    }

    #[test]
    fn test_standard_five_card() {
        assert_eq!([10_240, 5148, 40], counts(13, 4, 1, 5));
    }

    #[test]
    fn test_standard_seven_card() {
        assert_eq!([6_454_272, 4_089_228, 41_584], counts(13, 4, 1, 7));
    }

    #[test]
    fn test_standard_large_hands() {
        assert_eq!(
            [619_588_736, 491_448_100, 6_588_116],
            counts(13, 4, 1, 9)
        );
        assert_eq!(
            [4_051_217_344, 3_585_287_134, 55_482_100],
            counts(13, 4, 1, 10)
        );
        assert_eq!(
            [21_461_806_976, 21_076_866_408, 380_126_920],
            counts(13, 4, 1, 11)
        );
        assert_eq!(
            [94_674_009_184, 102_014_990_714, 2_177_910_310],
            counts(13, 4, 1, 12)
        );
        assert_eq!(
            [355_161_047_872, 412_247_470_340, 10_644_616_240],
            counts(13, 4, 1, 13)
        );
    }

    #[test]
    fn test_two_suits_counted_once() {
        // The whole deck: both suits hold a flush and a straight flush,
        // but it's still one hand.
        assert_eq!([1, 1, 1], counts(5, 2, 1, 10));
        // Ten cards from two suits of seven: the suits split 5/5 in
        // C(7, 5)^2 ways, each holding a flush in both suits.
        let shape = DeckShape::new(7, 2, 1, 10).unwrap();
        let per_suit_sum = BigUint::from(2u32)
            * (5..=7)
                .map(|k| binomial(7, k) * binomial(7, 10 - k))
                .sum::<BigUint>();
        assert_eq!(
            per_suit_sum - num::pow(binomial(7, 5), 2),
            flushes(&shape)
        );
    }

    #[test]
    fn test_short_deck() {
        assert_eq!([6144, 504, 24], counts(9, 4, 1, 5));
        assert_eq!([1_213_440, 186_120, 10_560], counts(9, 4, 1, 7));
    }

    #[test]
    fn test_duplicate_copies() {
        assert_eq!([98_304, 3168, 384], counts(6, 4, 2, 5));
        // Each required suit card has two copies, so the straight flush
        // needs at least one of each pair, not one fixed card.
        assert_eq!([20_987_904, 2_132_064, 287_424], counts(6, 4, 2, 7));
    }

    #[test]
    fn test_wide_decks() {
        assert_eq!([77_760, 7722, 60], counts(13, 6, 1, 5));
        assert_eq!([116_590_752, 16_741_296, 153_792], counts(13, 6, 1, 7));
    }

    #[test]
    fn test_too_few_ranks() {
        assert_eq!([0, 0, 0], counts(4, 4, 1, 5));
        assert_eq!([0, 0, 0], counts(4, 4, 1, 9));
    }

    #[test]
    fn test_too_few_cards() {
        assert_eq!([0, 0, 0], counts(13, 4, 1, 4));
    }

    #[test]
    fn test_long_runs_counted_once() {
        // Every card of one suit in a single suit deck: exactly one hand,
        // and it is one straight and one straight flush.
        assert_eq!([1, 1, 1], counts(7, 1, 1, 7));
        // Two runs in one hand, split by a gap or sharing the wheel's
        // top rank, are still one hand.
        assert_eq!([10, 10, 10], counts(10, 1, 1, 9));
        assert_eq!([11, 11, 11], counts(11, 1, 1, 10));
    }

    #[test]
    fn test_runless_picks() {
        // One card per rank over five ranks: only the full pick is a run.
        let runless = runless_picks(5, 1, 5, false);
        let expected: Vec<BigUint> = [1u32, 5, 10, 10, 5, 0].map(BigUint::from).to_vec();
        assert_eq!(expected, runless);
        // Six ranks with the wheel: three of the six five rank picks are
        // runs, and so is the full pick.
        let runless = runless_picks(6, 1, 6, true);
        assert_eq!(BigUint::from(3u32), runless[5]);
        assert!(runless[6].is_zero());
    }

    fn run_masks(ranks: usize, wheel: bool) -> Vec<u32> {
        let mut runs: Vec<u32> = (0..=ranks - RUN_LENGTH)
            .map(|low| 0b11111 << low)
            .collect();
        if wheel {
            runs.push(0b1111 | (1 << (ranks - 1)));
        }
        runs
    }

    fn holds_run(runs: &[u32], ranks: u32) -> bool {
        runs.iter().any(|&run| (ranks & run) == run)
    }

    /// Straights counted over the set of ranks a hand touches. The hands
    /// touching a given set of `k` ranks only depend on `k`.
    fn straights_by_rank_set(shape: &DeckShape) -> u128 {
        let ranks = shape.num_ranks();
        let hand = shape.hand_size();
        let width = shape.cards_per_rank();

        // touching[k][n]: n card picks that use every one of k ranks.
        let mut touching = vec![vec![0u128; hand + 1]];
        touching[0][0] = 1;
        for k in 1..=ranks {
            let mut next = vec![0u128; hand + 1];
            for (n, &ways) in touching[k - 1].iter().enumerate() {
                for j in 1..=width {
                    if n + j <= hand {
                        next[n + j] += ways * u128::try_from(binomial(width, j)).unwrap();
                    }
                }
            }
            touching.push(next);
        }

        let runs = run_masks(ranks, has_wheel(shape));
        (0u32..1 << ranks)
            .filter(|&set| holds_run(&runs, set))
            .map(|set| touching[set.count_ones() as usize][hand])
            .sum()
    }

    #[test]
    fn test_straights_match_rank_sets() {
        for (ranks, suits, copies) in [(13, 4, 1), (9, 2, 1), (10, 1, 1), (11, 1, 1), (6, 4, 2)] {
            for ace_low in [true, false] {
                for hand in 0..=ranks * suits * copies {
                    let shape = DeckShapeBuilder::default()
                        .ranks(ranks)
                        .suits(suits)
                        .copies(copies)
                        .hand_size(hand)
                        .ace_low(ace_low)
                        .build()
                        .unwrap();
                    assert_eq!(
                        straights_by_rank_set(&shape),
                        u128::try_from(straights(&shape)).unwrap(),
                        "{shape:?}"
                    );
                }
            }
        }
    }

    /// `[straight, flush, straight flush]` for every hand size, found by
    /// walking every subset of a small deck.
    fn enumerate_deck(ranks: usize, suits: usize, copies: usize, ace_low: bool) -> Vec<[u64; 3]> {
        let cards = ranks * suits * copies;
        let runs = run_masks(ranks, ace_low && ranks > RUN_LENGTH);
        let mut found = vec![[0u64; 3]; cards + 1];
        for hand in 0u32..1 << cards {
            let mut touched = 0u32;
            let mut ranks_in_suit = vec![0u32; suits];
            let mut cards_in_suit = vec![0usize; suits];
            for card in 0..cards {
                if (hand & (1 << card)) != 0 {
                    let rank = card / (suits * copies);
                    let suit = card / copies % suits;
                    touched |= 1 << rank;
                    ranks_in_suit[suit] |= 1 << rank;
                    cards_in_suit[suit] += 1;
                }
            }
            let size = hand.count_ones() as usize;
            found[size][0] += u64::from(holds_run(&runs, touched));
            found[size][1] += u64::from(cards_in_suit.iter().any(|&n| n >= RUN_LENGTH));
            found[size][2] += u64::from(ranks_in_suit.iter().any(|&r| holds_run(&runs, r)));
        }
        found
    }

    #[test]
    fn test_runs_match_enumeration() {
        for (ranks, suits, copies) in [
            (5, 2, 1),
            (6, 2, 1),
            (7, 2, 1),
            (5, 3, 1),
            (6, 1, 2),
            (7, 1, 2),
            (10, 1, 1),
            (11, 1, 1),
        ] {
            for ace_low in [true, false] {
                let expected = enumerate_deck(ranks, suits, copies, ace_low);
                for (hand, expected) in expected.into_iter().enumerate() {
                    let shape = DeckShapeBuilder::default()
                        .ranks(ranks)
                        .suits(suits)
                        .copies(copies)
                        .hand_size(hand)
                        .ace_low(ace_low)
                        .build()
                        .unwrap();
                    let engine = [straights(&shape), flushes(&shape), straight_flushes(&shape)]
                        .map(|c| u64::try_from(c).unwrap());
                    assert_eq!(expected, engine, "{shape:?}");
                }
            }
        }
    }
}
