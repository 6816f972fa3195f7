use num::{BigUint, Zero};

use super::{DeckShape, Partition, binomial};

/// Count the hands whose rank multiplicity profile is exactly `partition`.
///
/// Ranks that share a count are chosen together with one binomial. Picking
/// them one at a time would count every ordering of those ranks as a
/// different hand.
///
/// A partition the deck can't hold (more parts than ranks, or a part
/// bigger than a rank's card count) realizes to zero.
///
/// ```
/// use hand_census::core::{DeckShape, Partition, realize};
/// use num::BigUint;
///
/// let shape = DeckShape::new(13, 4, 1, 5).unwrap();
/// // 13 ranks for the triple, 12 for the pair, C(4,3) * C(4,2) suits.
/// assert_eq!(BigUint::from(3744u32), realize(&Partition::new(vec![3, 2]), &shape));
/// ```
pub fn realize(partition: &Partition, shape: &DeckShape) -> BigUint {
    let cards_per_rank = shape.cards_per_rank();
    if partition.len() > shape.num_ranks() || partition.largest() > cards_per_rank {
        return BigUint::zero();
    }

    let mut remaining_ranks = shape.num_ranks();
    let mut ways = BigUint::from(1u32);
    for (value, count) in partition.groups() {
        ways *= binomial(remaining_ranks, count);
        remaining_ranks -= count;
        ways *= num::pow(binomial(cards_per_rank, value), count);
    }
    ways
}
