use thiserror::Error;

/// This is the core error type for the
/// hand census library. It uses `thiserror` to provide
/// readable error messages.
///
/// Counting never fails. Errors only come from building a
/// deck shape that can't exist, or from parsing names.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum HandCensusError {
    #[error("Invalid configuration: a hand of {hand_size} cards can't be drawn from {total_cards} cards")]
    InvalidConfiguration {
        hand_size: usize,
        total_cards: usize,
    },
    #[error("A deck of {num_ranks} ranks, {num_suits} suits and {num_copies} copies has too many cards to count")]
    DeckTooLarge {
        num_ranks: usize,
        num_suits: usize,
        num_copies: usize,
    },
    #[error("A deck needs at least one suit")]
    ZeroSuits,
    #[error("A deck needs at least one copy of every card")]
    ZeroCopies,
    #[error("Unknown deck name: {0}")]
    UnknownDeck(String),
    #[error("Unknown hand category: {0}")]
    UnknownCategory(String),
    #[error("No hand size in the sweep fits in the deck")]
    EmptySweep,
}
