use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;

use tracing::trace;

/// A rank multiplicity profile.
///
/// Each part is how many cards of one rank are in the hand. Parts are
/// kept in descending order, so two partitions with the same parts are
/// equal and a generated set never holds the same profile twice.
///
/// `[3, 2]` is every full house in a five card hand: some rank shows
/// three times and some other rank shows twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Partition {
    parts: Vec<usize>,
}

impl Partition {
    /// The partition of zero.
    pub fn empty() -> Self {
        Self { parts: vec![] }
    }

    /// Create a partition from parts, sorting them descending and
    /// dropping zeros.
    pub fn new(mut parts: Vec<usize>) -> Self {
        parts.retain(|p| *p > 0);
        parts.sort_unstable_by(|a, b| b.cmp(a));
        Self { parts }
    }

    pub fn parts(&self) -> &[usize] {
        &self.parts
    }

    /// How many ranks show up in the hand.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Number of cards this partition covers.
    pub fn total(&self) -> usize {
        self.parts.iter().sum()
    }

    /// The largest part, or zero for the empty partition.
    pub fn largest(&self) -> usize {
        self.parts.first().copied().unwrap_or(0)
    }

    /// How many ranks have at least `min` cards.
    pub fn count_at_least(&self, min: usize) -> usize {
        // Descending, so everything that qualifies is at the front.
        self.parts.iter().take_while(|p| **p >= min).count()
    }

    /// Does any rank have at least `min` cards?
    pub fn has_at_least(&self, min: usize) -> bool {
        self.largest() >= min
    }

    /// Equal parts grouped together as `(value, how_many)`, largest value
    /// first.
    ///
    /// ```
    /// use hand_census::core::Partition;
    ///
    /// let p = Partition::new(vec![1, 2, 2, 1, 1]);
    /// assert_eq!(vec![(2, 2), (1, 3)], p.groups().collect::<Vec<_>>());
    /// ```
    pub fn groups(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.parts
            .chunk_by(|a, b| a == b)
            .map(|run| (run[0], run.len()))
    }
}

/// Key for one memoized generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct PartitionKey {
    n: usize,
    max_value: usize,
    max_length: usize,
}

/// Memoized integer partition generator.
///
/// Results are computed lazily the first time a `(n, max_value,
/// max_length)` triple is asked for and kept for the life of the cache.
/// The key space is bounded by the hand size so nothing is ever evicted.
///
/// The cache is owned by one analyzer. It uses a `RefCell` so that it
/// can fill in behind `&self`, which means it is `Send` but not `Sync`;
/// parallel work should give each thread its own cache.
#[derive(Debug, Default)]
pub struct PartitionCache {
    cache: RefCell<HashMap<PartitionKey, Arc<[Partition]>>>,
}

impl PartitionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every descending sequence of positive integers that sums to `n`,
    /// with no part above `max_value` and no more than `max_length`
    /// parts.
    ///
    /// Partitions come back largest first part first.
    ///
    /// ```
    /// use hand_census::core::PartitionCache;
    ///
    /// let cache = PartitionCache::new();
    /// let parts: Vec<Vec<usize>> = cache
    ///     .partitions(4, 4, 4)
    ///     .iter()
    ///     .map(|p| p.parts().to_vec())
    ///     .collect();
    /// assert_eq!(
    ///     vec![vec![4], vec![3, 1], vec![2, 2], vec![2, 1, 1], vec![1, 1, 1, 1]],
    ///     parts
    /// );
    /// ```
    pub fn partitions(&self, n: usize, max_value: usize, max_length: usize) -> Arc<[Partition]> {
        // Bounds above n can't change the answer. Clamping them lets
        // equivalent requests share a slot.
        let key = PartitionKey {
            n,
            max_value: max_value.min(n),
            max_length: max_length.min(n),
        };

        if let Some(found) = self.cache.borrow().get(&key) {
            return Arc::clone(found);
        }

        trace!(?key, "Partition cache miss");
        let generated = self.generate(key);
        self.cache.borrow_mut().insert(key, Arc::clone(&generated));
        generated
    }

    /// Number of distinct requests that have been memoized.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    fn generate(&self, key: PartitionKey) -> Arc<[Partition]> {
        if key.n == 0 {
            return Arc::from(vec![Partition::empty()]);
        }
        if key.max_length == 0 {
            return Arc::from(Vec::new());
        }

        let mut result = Vec::new();
        // Pick the largest part first. The rest can't use anything
        // bigger, which keeps each sequence descending and unique.
        for first in (1..=key.n.min(key.max_value)).rev() {
            let rest = self.partitions(key.n - first, first, key.max_length - 1);
            for sub in rest.iter() {
                let mut parts = Vec::with_capacity(sub.len() + 1);
                parts.push(first);
                parts.extend_from_slice(sub.parts());
                result.push(Partition { parts });
            }
        }
        Arc::from(result)
    }
}
