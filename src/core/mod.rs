//! This is the core module. It exports the building
//! blocks that know nothing about how a category is counted.

/// Exact binomial coefficients.
mod binomial;
/// Export `binomial`
pub use self::binomial::binomial;

/// The hand categories.
mod category;
/// Export `Category`
pub use self::category::Category;

/// Deck shape and its builder.
mod deck_shape;
/// Export `DeckShape` and `DeckShapeBuilder`
pub use self::deck_shape::{DeckShape, DeckShapeBuilder};

/// Error type for the library.
mod error;
pub use self::error::HandCensusError;

/// Integer partitions over rank counts.
mod partition;
/// Export `Partition` and the memo cache.
pub use self::partition::{Partition, PartitionCache};

/// Turning a partition into a hand count.
mod realize;
pub use self::realize::realize;
