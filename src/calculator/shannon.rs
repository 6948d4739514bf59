//! Shannon entropy over discrete frequency data.
//!
//! All logarithms are base 2, so every value is in bits.

use super::distribution::FrequencyDistribution;
use std::hash::Hash;

/// Absolute tolerance for floating-point comparisons on entropy values.
pub const EPSILON: f64 = 1e-10;

/// Computes `-Σ p·log2(p)` for the given counts over `total` observations.
///
/// Zero counts are skipped, which is the `0·log2(0) = 0` convention.
/// Returns 0.0 when `total` is zero.
pub fn shannon_entropy(counts: impl IntoIterator<Item = u64>, total: u128) -> f64 {
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    let mut entropy = 0.0;

    for count in counts {
        if count > 0 {
            let p = count as f64 / total;
            entropy -= p * p.log2();
        }
    }

    entropy
}

/// Stateless entropy calculator.
///
/// Every method is a pure function of its arguments; the type exists so
/// callers can hold a calculator as a collaborator.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyCalculator;

impl EntropyCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Entropy of a frequency distribution, in bits.
    ///
    /// Returns 0.0 for an empty distribution or one whose counts sum to
    /// zero, and exactly 0.0 when at most one symbol has a nonzero count.
    pub fn calculate_entropy<S: Eq + Hash>(&self, distribution: &FrequencyDistribution<S>) -> f64 {
        if distribution.is_empty() {
            return 0.0;
        }
        shannon_entropy(distribution.counts(), distribution.total())
    }

    /// Character-level entropy of a single word.
    ///
    /// Each Unicode scalar value is an atomic, case-sensitive symbol.
    pub fn calculate_word_entropy(&self, word: &str) -> f64 {
        if word.is_empty() {
            return 0.0;
        }

        // every character is counted once, so the total is the length
        let mut frequencies = FrequencyDistribution::new();
        frequencies.extend(word.chars());
        shannon_entropy(frequencies.counts(), frequencies.total())
    }

    /// Entropy of a uniform distribution over `vocabulary_size` symbols.
    ///
    /// This is the ceiling for any distribution of that size. Zero symbols
    /// yields 0.0.
    pub fn maximum_entropy(&self, vocabulary_size: usize) -> f64 {
        if vocabulary_size == 0 {
            return 0.0;
        }
        (vocabulary_size as f64).log2()
    }

    /// Entropy divided by the maximum for the same vocabulary size, in `[0, 1]`.
    ///
    /// Vocabularies of zero or one symbol normalize to 0.0.
    pub fn calculate_normalized_entropy<S: Eq + Hash>(
        &self,
        distribution: &FrequencyDistribution<S>,
    ) -> f64 {
        let vocabulary_size = distribution.vocabulary_size();
        if vocabulary_size <= 1 {
            return 0.0;
        }

        let max_entropy = self.maximum_entropy(vocabulary_size);
        if max_entropy > 0.0 {
            self.calculate_entropy(distribution) / max_entropy
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(pairs: &[(&str, u64)]) -> FrequencyDistribution {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_uniform_distribution_is_log2_n() {
        let calc = EntropyCalculator::new();
        let d = dist(&[("the", 10), ("cat", 10), ("sat", 10), ("mat", 10)]);
        assert!((calc.calculate_entropy(&d) - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_skewed_distribution() {
        let calc = EntropyCalculator::new();
        let d = dist(&[("the", 50), ("cat", 10), ("sat", 5), ("mat", 2)]);

        let total = 67.0_f64;
        let expected: f64 = [50.0_f64, 10.0, 5.0, 2.0]
            .iter()
            .map(|c| {
                let p = c / total;
                -p * p.log2()
            })
            .sum();

        let entropy = calc.calculate_entropy(&d);
        assert!((entropy - expected).abs() < EPSILON);
        assert!(entropy < calc.maximum_entropy(4));
    }

    #[test]
    fn test_single_symbol_is_zero() {
        let calc = EntropyCalculator::new();
        assert_eq!(calc.calculate_entropy(&dist(&[("word", 100)])), 0.0);
    }

    #[test]
    fn test_empty_and_zero_totals() {
        let calc = EntropyCalculator::new();
        assert_eq!(calc.calculate_entropy(&FrequencyDistribution::<String>::new()), 0.0);
        assert_eq!(calc.calculate_entropy(&dist(&[("a", 0), ("b", 0), ("c", 0)])), 0.0);
    }

    #[test]
    fn test_zero_count_symbols_are_skipped() {
        let calc = EntropyCalculator::new();
        let with_zero = dist(&[("a", 5), ("b", 5), ("c", 0)]);
        assert!((calc.calculate_entropy(&with_zero) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_huge_counts_stay_within_bounds() {
        let calc = EntropyCalculator::new();
        let d = dist(&[("a", u64::MAX), ("b", 1)]);

        let entropy = calc.calculate_entropy(&d);
        assert!(entropy > 0.0);
        assert!(entropy <= calc.maximum_entropy(2) + EPSILON);

        let balanced = dist(&[("a", u64::MAX), ("b", u64::MAX)]);
        assert!((calc.calculate_entropy(&balanced) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_single_symbol_is_positive_zero() {
        let entropy = shannon_entropy([42], 42);
        assert_eq!(entropy, 0.0);
        assert!(entropy.is_sign_positive());
    }

    #[test]
    fn test_maximum_entropy() {
        let calc = EntropyCalculator::new();
        assert!((calc.maximum_entropy(8) - 3.0).abs() < EPSILON);
        assert!((calc.maximum_entropy(16) - 4.0).abs() < EPSILON);
        assert!((calc.maximum_entropy(1024) - 10.0).abs() < EPSILON);
        assert_eq!(calc.maximum_entropy(1), 0.0);
        assert_eq!(calc.maximum_entropy(0), 0.0);
    }

    #[test]
    fn test_normalized_entropy() {
        let calc = EntropyCalculator::new();

        let uniform = dist(&[("a", 10), ("b", 10), ("c", 10), ("d", 10)]);
        assert!((calc.calculate_normalized_entropy(&uniform) - 1.0).abs() < EPSILON);

        let skewed = dist(&[("a", 100), ("b", 10), ("c", 5), ("d", 1)]);
        let normalized = calc.calculate_normalized_entropy(&skewed);
        assert!(normalized > 0.0 && normalized < 1.0);

        assert_eq!(calc.calculate_normalized_entropy(&dist(&[("a", 3)])), 0.0);
        assert_eq!(
            calc.calculate_normalized_entropy(&FrequencyDistribution::<String>::new()),
            0.0
        );
    }

    #[test]
    fn test_word_entropy() {
        let calc = EntropyCalculator::new();
        assert!((calc.calculate_word_entropy("abcdef") - 6f64.log2()).abs() < EPSILON);
        assert_eq!(calc.calculate_word_entropy("aaaa"), 0.0);
        assert_eq!(calc.calculate_word_entropy(""), 0.0);
    }

    #[test]
    fn test_word_entropy_is_case_sensitive() {
        let calc = EntropyCalculator::new();
        assert!((calc.calculate_word_entropy("aA") - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_word_entropy_counts_code_points() {
        let calc = EntropyCalculator::new();
        // two distinct multi-byte scalars, one occurrence each
        assert!((calc.calculate_word_entropy("éü") - 1.0).abs() < EPSILON);
        assert_eq!(calc.calculate_word_entropy("ßßß"), 0.0);
    }
}
