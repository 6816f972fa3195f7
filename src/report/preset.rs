use std::fmt;
use std::str::FromStr;

use crate::core::{DeckShape, HandCensusError};

/// Well known decks, by their dimensions.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DeckPreset {
    /// 13 ranks, 4 suits. 52 cards.
    Standard,
    /// Nine through ace twice over. 48 cards.
    Pinochle,
    /// Six through ace. 36 cards.
    ShortDeck,
    /// Two standard decks shuffled together. 104 cards.
    Double,
    /// 13 ranks, 6 suits. 78 cards.
    SixSuit,
    /// 13 ranks, 12 suits. 156 cards.
    Wide,
}

const PRESETS: [DeckPreset; 6] = [
    DeckPreset::Standard,
    DeckPreset::Pinochle,
    DeckPreset::ShortDeck,
    DeckPreset::Double,
    DeckPreset::SixSuit,
    DeckPreset::Wide,
];

impl DeckPreset {
    /// Every preset.
    pub const fn values() -> [DeckPreset; 6] {
        PRESETS
    }

    /// `(num_ranks, num_suits, num_copies)`
    pub const fn dimensions(&self) -> (usize, usize, usize) {
        match self {
            DeckPreset::Standard => (13, 4, 1),
            DeckPreset::Pinochle => (6, 4, 2),
            DeckPreset::ShortDeck => (9, 4, 1),
            DeckPreset::Double => (13, 4, 2),
            DeckPreset::SixSuit => (13, 6, 1),
            DeckPreset::Wide => (13, 12, 1),
        }
    }

    /// Human readable name.
    pub const fn name(&self) -> &'static str {
        match self {
            DeckPreset::Standard => "Standard Deck",
            DeckPreset::Pinochle => "Pinochle Deck",
            DeckPreset::ShortDeck => "Short-Deck Poker",
            DeckPreset::Double => "Double Deck",
            DeckPreset::SixSuit => "Six-Suit Deck",
            DeckPreset::Wide => "Wide Deck",
        }
    }

    /// The kebab case name accepted by `from_str`.
    pub const fn key(&self) -> &'static str {
        match self {
            DeckPreset::Standard => "standard",
            DeckPreset::Pinochle => "pinochle",
            DeckPreset::ShortDeck => "short-deck",
            DeckPreset::Double => "double",
            DeckPreset::SixSuit => "six-suit",
            DeckPreset::Wide => "wide",
        }
    }

    /// Find the preset with exactly these dimensions.
    pub fn from_dimensions(ranks: usize, suits: usize, copies: usize) -> Option<Self> {
        PRESETS
            .into_iter()
            .find(|p| p.dimensions() == (ranks, suits, copies))
    }

    /// This deck with a hand size.
    pub fn shape(&self, hand_size: usize) -> Result<DeckShape, HandCensusError> {
        let (ranks, suits, copies) = self.dimensions();
        DeckShape::new(ranks, suits, copies, hand_size)
    }
}

impl fmt::Display for DeckPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for DeckPreset {
    type Err = HandCensusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        PRESETS
            .into_iter()
            .find(|p| p.key() == wanted)
            .ok_or_else(|| HandCensusError::UnknownDeck(s.to_string()))
    }
}

/// One line description of a deck, named if it's a preset.
///
/// ```
/// use hand_census::core::DeckShape;
/// use hand_census::report::describe;
///
/// let shape = DeckShape::new(6, 4, 2, 5).unwrap();
/// assert_eq!(
///     "Pinochle Deck (6 ranks × 4 suits × 2 copies = 48 cards)",
///     describe(&shape)
/// );
/// ```
pub fn describe(shape: &DeckShape) -> String {
    let name = DeckPreset::from_dimensions(shape.num_ranks(), shape.num_suits(), shape.num_copies())
        .map_or("Custom Deck", |p| p.name());
    format!(
        "{} ({} ranks × {} suits × {} copies = {} cards)",
        name,
        shape.num_ranks(),
        shape.num_suits(),
        shape.num_copies(),
        shape.total_cards()
    )
}
