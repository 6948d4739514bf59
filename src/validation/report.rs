//! Human-readable tally of a validation run.

use super::result::ValidationResult;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Ordered results of a validation run with pass/fail counts.
///
/// Checks are numbered from 1 in the order they were run.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    generated_at: DateTime<Utc>,
    passed: usize,
    failed: usize,
    results: Vec<ValidationResult>,
}

impl ValidationReport {
    pub fn new(results: Vec<ValidationResult>) -> Self {
        let passed = results.iter().filter(|r| r.is_valid()).count();
        Self {
            generated_at: Utc::now(),
            passed,
            failed: results.len() - passed,
            results,
        }
    }

    pub fn results(&self) -> &[ValidationResult] {
        &self.results
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Writes the report to stdout.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "=== Entropy Validation Report ===")?;
        writeln!(f)?;

        for (i, result) in self.results.iter().enumerate() {
            let status = if result.is_valid() { "✓ PASS" } else { "✗ FAIL" };
            writeln!(f, "Check {}: {}", i + 1, status)?;
            writeln!(f, "  {}", result.message())?;
            writeln!(f, "  Metrics: {}", result.metrics())?;
            writeln!(f)?;
        }

        writeln!(
            f,
            "Summary: {} passed, {} failed out of {} checks",
            self.passed,
            self.failed,
            self.results.len()
        )?;
        write!(f, "=================================")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::EntropyValidator;

    #[test]
    fn test_tally() {
        let validator = EntropyValidator::new();
        let report = ValidationReport::new(vec![
            validator.validate_entropy_bounds(1.5, 4),
            validator.validate_entropy_bounds(3.0, 4),
            validator.validate_linguistic_range(8.0, true),
        ]);

        assert_eq!(report.passed(), 2);
        assert_eq!(report.failed(), 1);
        assert!(!report.all_passed());
    }

    #[test]
    fn test_rendering_numbers_checks_from_one() {
        let validator = EntropyValidator::new();
        let report = ValidationReport::new(vec![
            validator.validate_entropy_bounds(1.5, 4),
            validator.validate_entropy_bounds(-1.0, 4),
        ]);

        let text = report.to_string();
        assert!(text.contains("Check 1: ✓ PASS"));
        assert!(text.contains("Check 2: ✗ FAIL"));
        assert!(text.contains("Summary: 1 passed, 1 failed out of 2 checks"));
    }

    #[test]
    fn test_empty_report_passes() {
        let report = ValidationReport::new(Vec::new());
        assert!(report.all_passed());
        assert_eq!(report.results().len(), 0);
    }
}
