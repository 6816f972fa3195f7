use crate::core::{Category, Partition};

/// How a category is counted.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountMode {
    /// Every hand that holds at least this category.
    #[default]
    Inclusive,
    /// Hands that hold this category and none of the categories
    /// that always contain it.
    Exclusive,
}

impl CountMode {
    pub fn is_exclusive(&self) -> bool {
        *self == CountMode::Exclusive
    }
}

/// `true` means exclusive.
impl From<bool> for CountMode {
    fn from(exclusive: bool) -> Self {
        if exclusive {
            CountMode::Exclusive
        } else {
            CountMode::Inclusive
        }
    }
}

/// What exclusive counting removes from a category.
///
/// This can't be worked out from the predicates. A flush with a pair is
/// still an exclusive pair, because flush and pair are about different
/// things. The table in `exclusion_rule` is the source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionRule {
    /// Nothing sits above this category. Exclusive equals inclusive.
    Nothing,
    /// Drop rank profiles that also show a better rank pattern.
    BetterPatterns,
    /// Subtract every hand of another category, which always also
    /// belongs to this one.
    Subtract(Category),
}

/// The containment table.
pub const fn exclusion_rule(category: Category) -> ExclusionRule {
    match category {
        Category::Pair
        | Category::TwoPair
        | Category::ThreeOfAKind
        | Category::FourOfAKind => ExclusionRule::BetterPatterns,
        Category::Straight | Category::Flush => ExclusionRule::Subtract(Category::StraightFlush),
        Category::FullHouse | Category::StraightFlush | Category::FiveOfAKind => {
            ExclusionRule::Nothing
        }
    }
}

/// The rank patterns a single partition shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PatternFlags {
    pub pair: bool,
    pub two_pair: bool,
    pub triple: bool,
    pub four: bool,
    pub five: bool,
}

impl PatternFlags {
    pub fn of(partition: &Partition) -> Self {
        Self {
            pair: partition.has_at_least(2),
            two_pair: partition.count_at_least(2) >= 2,
            triple: partition.has_at_least(3),
            four: partition.has_at_least(4),
            five: partition.has_at_least(5),
        }
    }

    /// A triple plus a second rank with two or more cards.
    pub fn full_house(&self) -> bool {
        self.triple && self.two_pair
    }

    /// Inclusive test. Runs can't be seen in a rank profile, so
    /// straight, flush and straight flush are always `false` here.
    pub fn has(&self, category: Category) -> bool {
        match category {
            Category::Pair => self.pair,
            Category::TwoPair => self.two_pair,
            Category::ThreeOfAKind => self.triple,
            Category::FullHouse => self.full_house(),
            Category::FourOfAKind => self.four,
            Category::FiveOfAKind => self.five,
            Category::Straight | Category::Flush | Category::StraightFlush => false,
        }
    }

    /// Should a partition with these flags be counted for `category`?
    pub fn matches(&self, category: Category, mode: CountMode) -> bool {
        if !self.has(category) {
            return false;
        }
        if mode == CountMode::Inclusive {
            return true;
        }
        match (exclusion_rule(category), category) {
            (ExclusionRule::BetterPatterns, Category::Pair) => !self.two_pair && !self.triple,
            (ExclusionRule::BetterPatterns, Category::TwoPair) => !self.full_house(),
            (ExclusionRule::BetterPatterns, Category::ThreeOfAKind) => {
                !self.four && !self.full_house()
            }
            (ExclusionRule::BetterPatterns, Category::FourOfAKind) => !self.five,
            _ => true,
        }
    }
}
