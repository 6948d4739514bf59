//! Entropy validation.
//!
//! Cross-checks a claimed entropy value against theoretical bounds, a
//! recomputation, the uniform-distribution identity and empirical
//! linguistic norms. These are plausibility checks: a pass on the
//! linguistic range says nothing about correctness, only that the value
//! looks like natural-language text.

mod report;
mod result;
mod validator;

pub use report::ValidationReport;
pub use result::{CheckKind, CheckMetrics, MetricValue, ValidationResult};
pub use validator::{EntropyValidator, LinguisticRange};
