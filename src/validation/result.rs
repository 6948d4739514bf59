//! Structured outcome of a single validation check.

use serde::Serialize;
use std::fmt;

/// Which check produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// Entropy lies in `[0, log2(N)]`.
    Bounds,
    /// Claimed entropy matches a recomputation.
    Calculation,
    /// Uniform distributions have entropy `log2(N)`.
    Uniform,
    /// Per-word entropy lies in the empirical natural-language range.
    Linguistic,
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CheckKind::Bounds => "theoretical bounds",
            CheckKind::Calculation => "calculation",
            CheckKind::Uniform => "uniform distribution",
            CheckKind::Linguistic => "linguistic range",
        };
        f.write_str(name)
    }
}

/// Diagnostics recorded by a check, one variant per check kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "check", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum CheckMetrics {
    Bounds {
        calculated_entropy: f64,
        vocabulary_size: usize,
        theoretical_minimum: f64,
        theoretical_maximum: f64,
    },
    Calculation {
        claimed_entropy: f64,
        recalculated_entropy: f64,
        absolute_difference: f64,
        vocabulary_size: usize,
    },
    Uniform {
        is_uniform: bool,
        entropy: f64,
        vocabulary_size: usize,
        /// Only present when the distribution is uniform.
        #[serde(skip_serializing_if = "Option::is_none")]
        expected_entropy: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        difference: Option<f64>,
    },
    Linguistic {
        entropy: f64,
        is_natural_language: bool,
        /// Only present when the text is natural language.
        #[serde(skip_serializing_if = "Option::is_none")]
        expected_minimum: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        expected_maximum: Option<f64>,
    },
}

/// A single diagnostic value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Bits(f64),
    Count(usize),
    Flag(bool),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Bits(v) => write!(f, "{v}"),
            MetricValue::Count(n) => write!(f, "{n}"),
            MetricValue::Flag(b) => write!(f, "{b}"),
        }
    }
}

impl CheckMetrics {
    pub fn kind(&self) -> CheckKind {
        match self {
            CheckMetrics::Bounds { .. } => CheckKind::Bounds,
            CheckMetrics::Calculation { .. } => CheckKind::Calculation,
            CheckMetrics::Uniform { .. } => CheckKind::Uniform,
            CheckMetrics::Linguistic { .. } => CheckKind::Linguistic,
        }
    }

    /// Flattens the metrics into named values, skipping absent ones.
    pub fn entries(&self) -> Vec<(&'static str, MetricValue)> {
        use MetricValue::{Bits, Count, Flag};

        let mut entries = Vec::with_capacity(5);
        match *self {
            CheckMetrics::Bounds {
                calculated_entropy,
                vocabulary_size,
                theoretical_minimum,
                theoretical_maximum,
            } => {
                entries.push(("calculatedEntropy", Bits(calculated_entropy)));
                entries.push(("vocabularySize", Count(vocabulary_size)));
                entries.push(("theoreticalMinimum", Bits(theoretical_minimum)));
                entries.push(("theoreticalMaximum", Bits(theoretical_maximum)));
            }
            CheckMetrics::Calculation {
                claimed_entropy,
                recalculated_entropy,
                absolute_difference,
                vocabulary_size,
            } => {
                entries.push(("claimedEntropy", Bits(claimed_entropy)));
                entries.push(("recalculatedEntropy", Bits(recalculated_entropy)));
                entries.push(("absoluteDifference", Bits(absolute_difference)));
                entries.push(("vocabularySize", Count(vocabulary_size)));
            }
            CheckMetrics::Uniform {
                is_uniform,
                entropy,
                vocabulary_size,
                expected_entropy,
                difference,
            } => {
                entries.push(("isUniform", Flag(is_uniform)));
                entries.push(("entropy", Bits(entropy)));
                entries.push(("vocabularySize", Count(vocabulary_size)));
                if let Some(expected) = expected_entropy {
                    entries.push(("expectedEntropy", Bits(expected)));
                }
                if let Some(difference) = difference {
                    entries.push(("difference", Bits(difference)));
                }
            }
            CheckMetrics::Linguistic {
                entropy,
                is_natural_language,
                expected_minimum,
                expected_maximum,
            } => {
                entries.push(("entropy", Bits(entropy)));
                entries.push(("isNaturalLanguage", Flag(is_natural_language)));
                if let Some(min) = expected_minimum {
                    entries.push(("expectedMinimum", Bits(min)));
                }
                if let Some(max) = expected_maximum {
                    entries.push(("expectedMaximum", Bits(max)));
                }
            }
        }
        entries
    }

    /// Looks up a single metric by its camelCase name.
    pub fn get(&self, name: &str) -> Option<MetricValue> {
        self.entries()
            .into_iter()
            .find_map(|(key, value)| (key == name).then_some(value))
    }
}

impl fmt::Display for CheckMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.entries().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        f.write_str("}")
    }
}

/// Verdict of one check.
///
/// A check that does not apply to its input (a non-uniform distribution for
/// the uniform check, non-natural-language text for the linguistic check)
/// reports `valid = true`. Use [`is_skipped`](Self::is_skipped) to tell a
/// skip apart from a pass on merit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    message: String,
    metrics: CheckMetrics,
}

impl ValidationResult {
    pub fn new(valid: bool, message: impl Into<String>, metrics: CheckMetrics) -> Self {
        Self {
            valid,
            message: message.into(),
            metrics,
        }
    }

    pub(crate) fn pass(message: impl Into<String>, metrics: CheckMetrics) -> Self {
        Self::new(true, message, metrics)
    }

    pub(crate) fn fail(message: impl Into<String>, metrics: CheckMetrics) -> Self {
        Self::new(false, message, metrics)
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn metrics(&self) -> &CheckMetrics {
        &self.metrics
    }

    pub fn kind(&self) -> CheckKind {
        self.metrics.kind()
    }

    /// True when the check did not apply and was folded into a pass.
    pub fn is_skipped(&self) -> bool {
        matches!(
            self.metrics,
            CheckMetrics::Uniform {
                is_uniform: false,
                ..
            } | CheckMetrics::Linguistic {
                is_natural_language: false,
                ..
            }
        )
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ValidationResult{{valid={}, message='{}', metrics={}}}",
            self.valid, self.message, self.metrics
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_omit_absent_fields() {
        let metrics = CheckMetrics::Uniform {
            is_uniform: false,
            entropy: 1.5,
            vocabulary_size: 3,
            expected_entropy: None,
            difference: None,
        };
        let keys: Vec<_> = metrics.entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["isUniform", "entropy", "vocabularySize"]);
    }

    #[test]
    fn test_get_by_name() {
        let metrics = CheckMetrics::Calculation {
            claimed_entropy: 5.0,
            recalculated_entropy: 1.5,
            absolute_difference: 3.5,
            vocabulary_size: 3,
        };
        assert_eq!(metrics.get("absoluteDifference"), Some(MetricValue::Bits(3.5)));
        assert_eq!(metrics.get("vocabularySize"), Some(MetricValue::Count(3)));
        assert_eq!(metrics.get("missing"), None);
    }

    #[test]
    fn test_skip_detection() {
        let skipped = ValidationResult::pass(
            "skipped",
            CheckMetrics::Linguistic {
                entropy: 3.0,
                is_natural_language: false,
                expected_minimum: None,
                expected_maximum: None,
            },
        );
        assert!(skipped.is_valid());
        assert!(skipped.is_skipped());

        let ran = ValidationResult::pass(
            "ran",
            CheckMetrics::Linguistic {
                entropy: 8.0,
                is_natural_language: true,
                expected_minimum: Some(6.0),
                expected_maximum: Some(12.0),
            },
        );
        assert!(!ran.is_skipped());
    }

    #[test]
    fn test_serializes_with_check_tag() {
        let result = ValidationResult::fail(
            "Entropy cannot be negative. Got: -1",
            CheckMetrics::Bounds {
                calculated_entropy: -1.0,
                vocabulary_size: 4,
                theoretical_minimum: 0.0,
                theoretical_maximum: 2.0,
            },
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["valid"], false);
        assert_eq!(json["metrics"]["check"], "bounds");
        assert_eq!(json["metrics"]["theoreticalMaximum"], 2.0);
    }
}
