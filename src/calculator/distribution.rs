//! Frequency distributions over discrete symbols.

use serde::Serialize;
use std::collections::HashMap;
use std::hash::Hash;

/// Mapping from a symbol to the number of times it was observed.
///
/// Counts are unsigned, so a negative count cannot be represented. A symbol
/// recorded with a count of zero carries no probability mass but still
/// counts toward [`vocabulary_size`](Self::vocabulary_size).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyDistribution<S: Eq + Hash = String> {
    counts: HashMap<S, u64>,
}

impl<S: Eq + Hash> FrequencyDistribution<S> {
    /// Creates an empty distribution.
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Sets the count for a symbol, replacing any previous value.
    pub fn insert(&mut self, symbol: S, count: u64) {
        self.counts.insert(symbol, count);
    }

    /// Records one more occurrence of a symbol. Saturates at `u64::MAX`.
    pub fn record(&mut self, symbol: S) {
        let count = self.counts.entry(symbol).or_insert(0);
        *count = count.saturating_add(1);
    }

    /// Returns the count for a symbol, if present.
    pub fn count<Q>(&self, symbol: &Q) -> Option<u64>
    where
        S: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.counts.get(symbol).copied()
    }

    /// Number of distinct symbols, including those with a zero count.
    pub fn vocabulary_size(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts.
    ///
    /// Summed as `u128`, so it cannot overflow.
    pub fn total(&self) -> u128 {
        self.counts.values().map(|&c| u128::from(c)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates over the raw counts in arbitrary order.
    pub fn counts(&self) -> impl Iterator<Item = u64> + '_ {
        self.counts.values().copied()
    }

    /// Iterates over `(symbol, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, u64)> + '_ {
        self.counts.iter().map(|(s, &c)| (s, c))
    }

    /// True when every symbol has the same count.
    ///
    /// A single symbol is trivially uniform, as is a distribution whose
    /// counts are all zero. An empty distribution has no counts at all and
    /// is not uniform.
    pub fn is_uniform(&self) -> bool {
        let mut counts = self.counts();
        match counts.next() {
            Some(first) => counts.all(|c| c == first),
            None => false,
        }
    }
}

impl<S: Eq + Hash> Default for FrequencyDistribution<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Eq + Hash> FromIterator<(S, u64)> for FrequencyDistribution<S> {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

impl<S: Eq + Hash> Extend<S> for FrequencyDistribution<S> {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for symbol in iter {
            self.record(symbol);
        }
    }
}

impl<S: Eq + Hash> From<HashMap<S, u64>> for FrequencyDistribution<S> {
    fn from(counts: HashMap<S, u64>) -> Self {
        Self { counts }
    }
}

impl<'a> FromIterator<(&'a str, u64)> for FrequencyDistribution<String> {
    fn from_iter<I: IntoIterator<Item = (&'a str, u64)>>(iter: I) -> Self {
        iter.into_iter().map(|(s, c)| (s.to_owned(), c)).collect()
    }
}
