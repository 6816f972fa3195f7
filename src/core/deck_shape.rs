use tracing::debug;

use super::HandCensusError;

/// The shape of a deck and how many cards get drawn from it.
///
/// A deck has `num_ranks` distinct ranks, `num_suits` suits, and
/// `num_copies` identical copies of every (rank, suit) card. Everything
/// else is derived from those three numbers and never stored on its own,
/// so it can't drift.
///
/// ```
/// use hand_census::core::DeckShape;
///
/// let pinochle = DeckShape::new(6, 4, 2, 5).unwrap();
/// assert_eq!(8, pinochle.cards_per_rank());
/// assert_eq!(12, pinochle.cards_per_suit());
/// assert_eq!(48, pinochle.total_cards());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckShape {
    num_ranks: usize,
    num_suits: usize,
    num_copies: usize,
    hand_size: usize,
    /// Can the top rank also play below the lowest rank to make a run?
    ace_low: bool,
}

impl DeckShape {
    /// Create a new shape with ace-low runs enabled.
    ///
    /// @returns HandCensusError if the hand can't be drawn from this deck.
    pub fn new(
        num_ranks: usize,
        num_suits: usize,
        num_copies: usize,
        hand_size: usize,
    ) -> Result<Self, HandCensusError> {
        DeckShapeBuilder::default()
            .ranks(num_ranks)
            .suits(num_suits)
            .copies(num_copies)
            .hand_size(hand_size)
            .build()
    }

    pub fn num_ranks(&self) -> usize {
        self.num_ranks
    }

    pub fn num_suits(&self) -> usize {
        self.num_suits
    }

    pub fn num_copies(&self) -> usize {
        self.num_copies
    }

    pub fn hand_size(&self) -> usize {
        self.hand_size
    }

    pub fn ace_low(&self) -> bool {
        self.ace_low
    }

    /// How many cards share one rank.
    pub fn cards_per_rank(&self) -> usize {
        self.num_suits * self.num_copies
    }

    /// How many cards share one suit.
    pub fn cards_per_suit(&self) -> usize {
        self.num_ranks * self.num_copies
    }

    /// How many cards are in the whole deck.
    pub fn total_cards(&self) -> usize {
        self.num_ranks * self.num_suits * self.num_copies
    }

    /// The same deck with a different number of cards drawn.
    pub fn with_hand_size(&self, hand_size: usize) -> Result<Self, HandCensusError> {
        self.to_builder().hand_size(hand_size).build()
    }

    /// A builder pre-filled with this shape.
    pub fn to_builder(&self) -> DeckShapeBuilder {
        DeckShapeBuilder {
            num_ranks: self.num_ranks,
            num_suits: self.num_suits,
            num_copies: self.num_copies,
            hand_size: self.hand_size,
            ace_low: self.ace_low,
        }
    }
}

/// # DeckShapeBuilder
///
/// Builder for a `DeckShape`. It starts out as a standard 52 card deck
/// with five card hands; each setter replaces one value and hands the
/// builder back.
///
/// ## Examples
///
/// ```
/// use hand_census::core::DeckShapeBuilder;
///
/// let short_deck_holdem = DeckShapeBuilder::default()
///     .ranks(9)
///     .hand_size(7)
///     .build()
///     .unwrap();
/// assert_eq!(36, short_deck_holdem.total_cards());
/// ```
///
/// Asking for more cards than the deck holds is rejected:
///
/// ```
/// use hand_census::core::DeckShapeBuilder;
///
/// assert!(DeckShapeBuilder::default().ranks(2).hand_size(9).build().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct DeckShapeBuilder {
    num_ranks: usize,
    num_suits: usize,
    num_copies: usize,
    hand_size: usize,
    ace_low: bool,
}

impl DeckShapeBuilder {
    /// Set the number of distinct ranks.
    pub fn ranks(mut self, num_ranks: usize) -> Self {
        self.num_ranks = num_ranks;
        self
    }

    /// Set the number of suits.
    pub fn suits(mut self, num_suits: usize) -> Self {
        self.num_suits = num_suits;
        self
    }

    /// Set how many identical copies of each card there are.
    pub fn copies(mut self, num_copies: usize) -> Self {
        self.num_copies = num_copies;
        self
    }

    /// Set the number of cards drawn.
    pub fn hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Should the top rank be able to complete a run below the lowest rank?
    pub fn ace_low(mut self, ace_low: bool) -> Self {
        self.ace_low = ace_low;
        self
    }

    /// Validate and create the `DeckShape`.
    ///
    /// @returns HandCensusError if there are no suits, no copies, more
    /// cards than a `usize` can hold, or more cards drawn than the deck
    /// holds.
    pub fn build(self) -> Result<DeckShape, HandCensusError> {
        if self.num_suits == 0 {
            return Err(HandCensusError::ZeroSuits);
        }
        if self.num_copies == 0 {
            return Err(HandCensusError::ZeroCopies);
        }
        // Cards per rank first, then the whole deck.
        let total_cards = self
            .num_suits
            .checked_mul(self.num_copies)
            .and_then(|per_rank| per_rank.checked_mul(self.num_ranks))
            .ok_or(HandCensusError::DeckTooLarge {
                num_ranks: self.num_ranks,
                num_suits: self.num_suits,
                num_copies: self.num_copies,
            })?;
        let shape = DeckShape {
            num_ranks: self.num_ranks,
            num_suits: self.num_suits,
            num_copies: self.num_copies,
            hand_size: self.hand_size,
            ace_low: self.ace_low,
        };
        if shape.hand_size > total_cards {
            return Err(HandCensusError::InvalidConfiguration {
                hand_size: shape.hand_size,
                total_cards,
            });
        }
        debug!(
            ranks = shape.num_ranks,
            suits = shape.num_suits,
            copies = shape.num_copies,
            hand_size = shape.hand_size,
            "Built deck shape"
        );
        Ok(shape)
    }
}

impl Default for DeckShapeBuilder {
    fn default() -> Self {
        Self {
            num_ranks: 13,
            num_suits: 4,
            num_copies: 1,
            hand_size: 5,
            ace_low: true,
        }
    }
}
