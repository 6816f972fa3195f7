use std::fmt;
use std::str::FromStr;

use super::HandCensusError;

/// All the hand categories that can be counted.
///
/// Categories overlap on purpose. A full house also holds a pair,
/// two pair and three of a kind; a seven card hand can be a flush
/// and a straight without being a straight flush.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Category {
    /// Two cards of one rank.
    Pair,
    /// Two different ranks with two cards each.
    TwoPair,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Three of one rank and two of another.
    FullHouse,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// Four cards of one rank.
    FourOfAKind,
    /// Five consecutive ranks in one suit.
    StraightFlush,
    /// Five cards of one rank. Needs at least five cards per rank.
    FiveOfAKind,
}

/// Constant of all the categories, in report order.
/// This is what `Category::categories()` returns.
const CATEGORIES: [Category; 9] = [
    Category::Pair,
    Category::TwoPair,
    Category::ThreeOfAKind,
    Category::FullHouse,
    Category::Straight,
    Category::Flush,
    Category::FourOfAKind,
    Category::StraightFlush,
    Category::FiveOfAKind,
];

impl Category {
    /// Get all of the categories in report order.
    pub const fn categories() -> [Category; 9] {
        CATEGORIES
    }

    /// Short machine friendly name, used for csv and json.
    pub const fn key(&self) -> &'static str {
        match self {
            Category::Pair => "pair",
            Category::TwoPair => "two_pair",
            Category::ThreeOfAKind => "three_of_a_kind",
            Category::FullHouse => "full_house",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FourOfAKind => "four_of_a_kind",
            Category::StraightFlush => "straight_flush",
            Category::FiveOfAKind => "five_of_a_kind",
        }
    }

    /// Is this category decided by rank counts alone?
    ///
    /// Those are counted by summing over partitions. The rest need runs
    /// of ranks or suits and are counted by formula.
    pub const fn is_rank_pattern(&self) -> bool {
        !matches!(
            self,
            Category::Straight | Category::Flush | Category::StraightFlush
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Pair => "At least one pair",
            Category::TwoPair => "At least two pair",
            Category::ThreeOfAKind => "At least 3 of a kind",
            Category::FullHouse => "Full house",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FourOfAKind => "At least 4 of a kind",
            Category::StraightFlush => "Straight flush",
            Category::FiveOfAKind => "5 of a kind",
        };
        f.pad(name)
    }
}

impl FromStr for Category {
    type Err = HandCensusError;

    /// Parse the `key()` name. Dashes work in place of underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        CATEGORIES
            .into_iter()
            .find(|c| c.key() == normalized)
            .ok_or_else(|| HandCensusError::UnknownCategory(s.to_string()))
    }
}
