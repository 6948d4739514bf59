//! Cross-checks for claimed entropy values.
//!
//! The calculator is the ground truth. Each check is a pure function of its
//! inputs and returns a fresh [`ValidationResult`]; failures are ordinary
//! return values, never errors.

use super::result::{CheckMetrics, ValidationResult};
use crate::calculator::{EntropyCalculator, FrequencyDistribution, EPSILON};
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Empirical per-word entropy range for natural-language text, in bits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinguisticRange {
    /// Inclusive lower bound.
    pub min_bits: f64,
    /// Inclusive upper bound.
    pub max_bits: f64,
}

impl Default for LinguisticRange {
    fn default() -> Self {
        Self {
            min_bits: 6.0,
            max_bits: 12.0,
        }
    }
}

/// Runs the validation battery against a calculator.
#[derive(Debug, Clone, Default)]
pub struct EntropyValidator {
    calculator: EntropyCalculator,
    linguistic_range: LinguisticRange,
}

impl EntropyValidator {
    /// Creates a validator with the default 6-12 bit linguistic range.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with a custom linguistic range.
    pub fn with_linguistic_range(linguistic_range: LinguisticRange) -> Self {
        Self {
            calculator: EntropyCalculator::new(),
            linguistic_range,
        }
    }

    pub fn calculator(&self) -> &EntropyCalculator {
        &self.calculator
    }

    pub fn linguistic_range(&self) -> LinguisticRange {
        self.linguistic_range
    }

    /// Checks that `entropy` lies in `[0, log2(vocabulary_size)]`.
    pub fn validate_entropy_bounds(&self, entropy: f64, vocabulary_size: usize) -> ValidationResult {
        let max_entropy = self.calculator.maximum_entropy(vocabulary_size);
        let metrics = CheckMetrics::Bounds {
            calculated_entropy: entropy,
            vocabulary_size,
            theoretical_minimum: 0.0,
            theoretical_maximum: max_entropy,
        };

        let result = if entropy < -EPSILON {
            ValidationResult::fail(format!("Entropy cannot be negative. Got: {entropy}"), metrics)
        } else if entropy > max_entropy + EPSILON {
            ValidationResult::fail(
                format!(
                    "Entropy {entropy:.4} exceeds maximum possible entropy {max_entropy:.4} \
                     for vocabulary size {vocabulary_size}"
                ),
                metrics,
            )
        } else {
            ValidationResult::pass("Entropy is within valid theoretical bounds", metrics)
        };

        trace_result(&result);
        result
    }

    /// Recomputes entropy from `distribution` and compares it with `claimed_entropy`.
    pub fn validate_entropy_calculation<S: Eq + Hash>(
        &self,
        distribution: &FrequencyDistribution<S>,
        claimed_entropy: f64,
    ) -> ValidationResult {
        let recalculated = self.calculator.calculate_entropy(distribution);
        let difference = (recalculated - claimed_entropy).abs();
        let metrics = CheckMetrics::Calculation {
            claimed_entropy,
            recalculated_entropy: recalculated,
            absolute_difference: difference,
            vocabulary_size: distribution.vocabulary_size(),
        };

        let result = if difference < EPSILON {
            ValidationResult::pass("Entropy calculation is correct", metrics)
        } else {
            ValidationResult::fail(
                format!(
                    "Entropy mismatch: claimed={claimed_entropy:.6}, \
                     calculated={recalculated:.6}, difference={difference:.6}"
                ),
                metrics,
            )
        };

        trace_result(&result);
        result
    }

    /// For a uniform distribution, checks that `entropy` equals `log2(N)`.
    ///
    /// A non-uniform distribution passes without comparison; the result is
    /// flagged by [`ValidationResult::is_skipped`].
    pub fn validate_uniform_distribution<S: Eq + Hash>(
        &self,
        distribution: &FrequencyDistribution<S>,
        entropy: f64,
    ) -> ValidationResult {
        let vocabulary_size = distribution.vocabulary_size();

        let result = if !distribution.is_uniform() {
            ValidationResult::pass(
                "Distribution is not uniform (no validation needed)",
                CheckMetrics::Uniform {
                    is_uniform: false,
                    entropy,
                    vocabulary_size,
                    expected_entropy: None,
                    difference: None,
                },
            )
        } else {
            let expected = self.calculator.maximum_entropy(vocabulary_size);
            let difference = (entropy - expected).abs();
            let metrics = CheckMetrics::Uniform {
                is_uniform: true,
                entropy,
                vocabulary_size,
                expected_entropy: Some(expected),
                difference: Some(difference),
            };

            if difference < EPSILON {
                ValidationResult::pass(
                    "Uniform distribution entropy is correct (equals log2(N))",
                    metrics,
                )
            } else {
                ValidationResult::fail(
                    format!(
                        "Uniform distribution entropy mismatch: expected={expected:.6}, got={entropy:.6}"
                    ),
                    metrics,
                )
            }
        };

        trace_result(&result);
        result
    }

    /// Checks per-word entropy against the empirical natural-language range.
    ///
    /// Text that is not natural language passes without comparison.
    pub fn validate_linguistic_range(&self, entropy: f64, is_natural_language: bool) -> ValidationResult {
        let LinguisticRange { min_bits, max_bits } = self.linguistic_range;

        let result = if !is_natural_language {
            ValidationResult::pass(
                "Non-natural language text (linguistic validation skipped)",
                CheckMetrics::Linguistic {
                    entropy,
                    is_natural_language,
                    expected_minimum: None,
                    expected_maximum: None,
                },
            )
        } else {
            let metrics = CheckMetrics::Linguistic {
                entropy,
                is_natural_language,
                expected_minimum: Some(min_bits),
                expected_maximum: Some(max_bits),
            };

            if entropy < min_bits {
                ValidationResult::fail(
                    format!(
                        "Entropy {entropy:.4} is unusually low for natural language \
                         (expected {min_bits:.1}-{max_bits:.1} bits)"
                    ),
                    metrics,
                )
            } else if entropy > max_bits {
                ValidationResult::fail(
                    format!(
                        "Entropy {entropy:.4} is unusually high for natural language \
                         (expected {min_bits:.1}-{max_bits:.1} bits)"
                    ),
                    metrics,
                )
            } else {
                ValidationResult::pass(
                    "Entropy is within expected range for natural language",
                    metrics,
                )
            }
        };

        trace_result(&result);
        result
    }

    /// Runs every applicable check, in order: bounds, calculation, uniform,
    /// then linguistic range when `is_natural_language` is set.
    ///
    /// Never short-circuits; a failing check does not prevent later ones.
    pub fn comprehensive_validation<S: Eq + Hash>(
        &self,
        distribution: &FrequencyDistribution<S>,
        calculated_entropy: f64,
        is_natural_language: bool,
    ) -> Vec<ValidationResult> {
        let mut results = Vec::with_capacity(4);

        results.push(self.validate_entropy_bounds(calculated_entropy, distribution.vocabulary_size()));
        results.push(self.validate_entropy_calculation(distribution, calculated_entropy));
        results.push(self.validate_uniform_distribution(distribution, calculated_entropy));
        if is_natural_language {
            results.push(self.validate_linguistic_range(calculated_entropy, true));
        }

        let failed = results.iter().filter(|r| !r.is_valid()).count();
        tracing::debug!(
            checks = results.len(),
            failed,
            entropy = calculated_entropy,
            "Comprehensive validation finished"
        );

        results
    }
}

fn trace_result(result: &ValidationResult) {
    if result.is_valid() {
        tracing::trace!(
            check = %result.kind(),
            skipped = result.is_skipped(),
            "Check passed"
        );
    } else {
        tracing::debug!(
            check = %result.kind(),
            reason = result.message(),
            "Check failed"
        );
    }
}
