//! Exact counts of poker hand categories for any deck.
//!
//! A deck is described by a [`core::DeckShape`]: how many ranks, how many
//! suits, how many identical copies of each card, and how many cards make
//! a hand. [`analysis::DeckAnalyzer`] counts every category for that
//! shape exactly, with arbitrary precision integers, and the [`report`]
//! module turns those counts into summaries, ladders and sweeps across
//! hand sizes.
//!
//! ```
//! use hand_census::analysis::DeckAnalyzer;
//! use hand_census::core::{Category, DeckShape};
//! use num::BigUint;
//!
//! let shape = DeckShape::new(6, 4, 2, 5).unwrap();
//! let result = DeckAnalyzer::new(shape).analyze();
//! assert_eq!(BigUint::from(336u32), result.count(Category::FiveOfAKind));
//! ```

/// Shape agnostic building blocks: binomials, deck shapes, categories
/// and rank partitions.
pub mod core;
/// The counting engine.
pub mod analysis;
/// Summaries, ladders, sweeps and CSV built on top of the engine.
pub mod report;

#[cfg(feature = "serde")]
pub mod serde_utils;
