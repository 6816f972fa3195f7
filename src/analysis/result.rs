use num::rational::BigRational;
use num::{BigInt, BigUint, ToPrimitive, Zero};

use super::CountMode;
use crate::core::{Category, DeckShape};

/// `count / total` as a float. Only used for reporting; the counts
/// themselves stay exact.
pub fn ratio(count: &BigUint, total: &BigUint) -> f64 {
    if total.is_zero() {
        return 0.0;
    }
    BigRational::new(BigInt::from(count.clone()), BigInt::from(total.clone()))
        .to_f64()
        .unwrap_or(0.0)
}

/// One row of an analysis.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCount {
    pub category: Category,
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_utils::decimal"))]
    pub count: BigUint,
    pub probability: f64,
}

impl CategoryCount {
    /// Is there any hand at all in this category?
    pub fn is_possible(&self) -> bool {
        !self.count.is_zero()
    }
}

/// Exact counts and probabilities for every category of one deck shape.
///
/// Categories overlap, so probabilities can add up to more than one.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    shape: DeckShape,
    mode: CountMode,
    #[cfg_attr(feature = "serde", serde(with = "crate::serde_utils::decimal"))]
    total_hands: BigUint,
    counts: Vec<CategoryCount>,
}

impl AnalysisResult {
    /// Build a result from raw counts. Probabilities are filled in here.
    pub fn new(
        shape: DeckShape,
        mode: CountMode,
        total_hands: BigUint,
        counts: impl IntoIterator<Item = (Category, BigUint)>,
    ) -> Self {
        let counts = counts
            .into_iter()
            .map(|(category, count)| CategoryCount {
                category,
                probability: ratio(&count, &total_hands),
                count,
            })
            .collect();
        Self {
            shape,
            mode,
            total_hands,
            counts,
        }
    }

    pub fn shape(&self) -> &DeckShape {
        &self.shape
    }

    pub fn mode(&self) -> CountMode {
        self.mode
    }

    pub fn total_hands(&self) -> &BigUint {
        &self.total_hands
    }

    /// All rows in category order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryCount> {
        self.counts.iter()
    }

    pub fn get(&self, category: Category) -> Option<&CategoryCount> {
        self.counts.iter().find(|c| c.category == category)
    }

    /// Exact count for a category, zero if it wasn't analyzed.
    pub fn count(&self, category: Category) -> BigUint {
        self.get(category)
            .map(|c| c.count.clone())
            .unwrap_or_default()
    }

    pub fn probability(&self, category: Category) -> f64 {
        self.get(category).map_or(0.0, |c| c.probability)
    }

    /// `count / total_hands` with no rounding at all.
    pub fn exact_probability(&self, category: Category) -> Option<BigRational> {
        if self.total_hands.is_zero() {
            return None;
        }
        self.get(category).map(|c| {
            BigRational::new(
                BigInt::from(c.count.clone()),
                BigInt::from(self.total_hands.clone()),
            )
        })
    }

    /// How many hands per hand in this category, the X in "1 in X".
    /// `None` for categories that can't happen.
    pub fn odds(&self, category: Category) -> Option<f64> {
        self.get(category)
            .filter(|c| c.is_possible())
            .map(|c| ratio(&self.total_hands, &c.count))
    }

    /// Sum of every category's probability. Above one means overlap.
    pub fn probability_sum(&self) -> f64 {
        self.counts.iter().map(|c| c.probability).sum()
    }

    /// Possible categories from rarest to most common. Ties keep
    /// category order.
    pub fn rarity_ranking(&self) -> Vec<&CategoryCount> {
        let mut possible: Vec<&CategoryCount> =
            self.counts.iter().filter(|c| c.is_possible()).collect();
        possible.sort_by(|a, b| a.count.cmp(&b.count));
        possible
    }

    /// 1 based position in `rarity_ranking`, 1 being the rarest.
    pub fn rarity_rank(&self, category: Category) -> Option<usize> {
        self.rarity_ranking()
            .iter()
            .position(|c| c.category == category)
            .map(|idx| idx + 1)
    }
}
