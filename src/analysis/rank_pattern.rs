use num::{BigUint, Zero};

use super::{CountMode, PatternFlags};
use crate::core::{Category, DeckShape, PartitionCache, realize};

/// Could any hand of this shape show `category` at all?
///
/// These only short circuit. Summing over partitions would land on zero
/// anyway, just slower.
fn possible(shape: &DeckShape, category: Category) -> bool {
    let hand = shape.hand_size();
    let per_rank = shape.cards_per_rank();
    match category {
        Category::Pair => hand >= 2 && per_rank >= 2,
        Category::TwoPair => hand >= 4 && per_rank >= 2 && shape.num_ranks() >= 2,
        Category::ThreeOfAKind => hand >= 3 && per_rank >= 3,
        Category::FullHouse => shape.num_ranks() >= 2 && hand >= 5 && per_rank >= 3,
        Category::FourOfAKind => hand >= 4 && per_rank >= 4,
        Category::FiveOfAKind => hand >= 5 && per_rank >= 5,
        Category::Straight | Category::Flush | Category::StraightFlush => false,
    }
}

/// Count a rank pattern category by summing realized partitions of the
/// hand size that pass the category's test in `mode`.
pub(crate) fn count(
    shape: &DeckShape,
    cache: &PartitionCache,
    category: Category,
    mode: CountMode,
) -> BigUint {
    if !possible(shape, category) {
        return BigUint::zero();
    }
    cache
        .partitions(shape.hand_size(), shape.cards_per_rank(), shape.num_ranks())
        .iter()
        .filter(|p| PatternFlags::of(p).matches(category, mode))
        .map(|p| realize(p, shape))
        .sum()
}
