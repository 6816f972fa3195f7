use std::fmt;

use num::{BigUint, Zero};

use super::format::{format_count, format_odds, format_percent};
use crate::analysis::{CountMode, DeckAnalyzer, ratio};
use crate::core::Category;

/// One rung of the ladder. `category` is `None` for high card.
#[derive(Debug, Clone, PartialEq)]
pub struct LadderRow {
    pub label: &'static str,
    pub category: Option<Category>,
    pub count: BigUint,
    pub probability: f64,
}

/// The classic best hand first ranking, built from exclusive counts.
///
/// Five of a kind sits on top when the deck can make it. High card is
/// every hand without a pair. Straights and flushes are
/// not taken out of the rank patterns, so the rows can add up to more
/// than the total number of hands.
#[derive(Debug, Clone, PartialEq)]
pub struct TraditionalLadder {
    total_hands: BigUint,
    rows: Vec<LadderRow>,
}

const RUNGS: [(&str, Category); 8] = [
    ("Straight flush", Category::StraightFlush),
    ("4 of a kind", Category::FourOfAKind),
    ("Full house", Category::FullHouse),
    ("Flush", Category::Flush),
    ("Straight", Category::Straight),
    ("3 of a kind", Category::ThreeOfAKind),
    ("Two pair", Category::TwoPair),
    ("Pair", Category::Pair),
];

impl TraditionalLadder {
    pub fn new(analyzer: &DeckAnalyzer) -> Self {
        let total_hands = analyzer.count_total_hands();
        let row = |label: &'static str, category: Option<Category>, count: BigUint| LadderRow {
            label,
            category,
            probability: ratio(&count, &total_hands),
            count,
        };

        let mut rows = Vec::with_capacity(RUNGS.len() + 2);
        let five = analyzer.count(Category::FiveOfAKind, CountMode::Exclusive);
        if !five.is_zero() {
            rows.push(row("5 of a kind", Some(Category::FiveOfAKind), five));
        }
        rows.extend(RUNGS.into_iter().map(|(label, category)| {
            row(label, Some(category), analyzer.count(category, CountMode::Exclusive))
        }));

        let paired = analyzer.count_pair(CountMode::Inclusive);
        let high_card = if paired > total_hands {
            BigUint::zero()
        } else {
            &total_hands - paired
        };
        rows.push(row("High card", None, high_card));

        Self { total_hands, rows }
    }

    pub fn total_hands(&self) -> &BigUint {
        &self.total_hands
    }

    /// Every rung, impossible ones included, best hand first. Five of a
    /// kind is only there when the deck can make it.
    pub fn rows(&self) -> &[LadderRow] {
        &self.rows
    }

    /// Sum of every row.
    pub fn total_shown(&self) -> BigUint {
        self.rows.iter().map(|r| &r.count).sum()
    }
}

impl fmt::Display for TraditionalLadder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<5} {:<20} {:>16} {:>12} {:>20}",
            "Rank", "Hand Type", "Count (excl)", "Probability", "Odds"
        )?;
        writeln!(f, "{}", "-".repeat(77))?;

        for (idx, row) in self.rows.iter().filter(|r| !r.count.is_zero()).enumerate() {
            writeln!(
                f,
                "{:<5} {:<20} {:>16} {:>12} {:>20}",
                idx + 1,
                row.label,
                format_count(&row.count),
                format_percent(row.probability, 4),
                format_odds(ratio(&self.total_hands, &row.count))
            )?;
        }

        let shown = self.total_shown();
        writeln!(f, "{}", "-".repeat(77))?;
        writeln!(
            f,
            "{:<26} {:>16} {:>12}",
            "Total",
            format_count(&shown),
            format_percent(ratio(&shown, &self.total_hands), 4)
        )?;
        writeln!(
            f,
            "Note: flushes and straights can also hold rank patterns, so the total can exceed {} hands.",
            format_count(&self.total_hands)
        )
    }
}
