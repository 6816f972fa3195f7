#![no_main]

extern crate arbitrary;
extern crate hand_census;
extern crate libfuzzer_sys;

use hand_census::analysis::{CountMode, DeckAnalyzer};
use hand_census::core::{Category, DeckShapeBuilder, PartitionCache, binomial, realize};
use libfuzzer_sys::fuzz_target;
use num::BigUint;

#[derive(Debug, Clone, arbitrary::Arbitrary)]
struct Input {
    pub ranks: u8,
    pub suits: u8,
    pub copies: u8,
    pub hand_size: u8,
    pub ace_low: bool,
}

fuzz_target!(|input: Input| {
    // Keep the decks small enough that every run stays fast.
    let shape = match DeckShapeBuilder::default()
        .ranks(usize::from(input.ranks % 14))
        .suits(usize::from(input.suits % 7))
        .copies(usize::from(input.copies % 4))
        .hand_size(usize::from(input.hand_size % 13))
        .ace_low(input.ace_low)
        .build()
    {
        Ok(shape) => shape,
        Err(_) => return,
    };

    // Rank profiles split the hands with no gaps and no overlap.
    let cache = PartitionCache::new();
    let tiled: BigUint = cache
        .partitions(shape.hand_size(), shape.cards_per_rank(), shape.num_ranks())
        .iter()
        .map(|p| realize(p, &shape))
        .sum();
    assert_eq!(binomial(shape.total_cards(), shape.hand_size()), tiled);

    let analyzer = DeckAnalyzer::new(shape);
    let total = analyzer.count_total_hands();
    assert_eq!(tiled, total);

    for category in Category::categories() {
        let inclusive = analyzer.count(category, CountMode::Inclusive);
        let exclusive = analyzer.count(category, CountMode::Exclusive);
        assert!(exclusive <= inclusive);
        assert!(inclusive <= total);
    }

    if shape.hand_size() == 5 {
        assert_eq!(
            analyzer.count_straight(false),
            analyzer.count_straight(true) + analyzer.count_straight_flush(false)
        );
    }

    let result = analyzer.analyze();
    assert_eq!(9, result.iter().count());
    assert!(result.iter().all(|c| (0.0..=1.0).contains(&c.probability)));
});
