//! Word Entropy Library
//!
//! Shannon entropy over discrete word-level and character-level frequency
//! distributions, and a validator that cross-checks a claimed entropy
//! value against theoretical bounds, recomputation, the uniform-distribution
//! identity and empirical linguistic norms.
//!
//! # Architecture
//!
//! ```text
//! corpus → calculator → validation → report / metrics
//! ```
//!
//! The calculator is the ground truth; the validator holds one and never
//! mutates anything. Every operation is a pure function of its inputs.
//!
//! # Example
//!
//! ```
//! use word_entropy::{EntropyCalculator, EntropyValidator, FrequencyDistribution, ValidationReport};
//!
//! let distribution: FrequencyDistribution =
//!     [("the", 10), ("cat", 10), ("sat", 10), ("mat", 10)].into_iter().collect();
//!
//! let calculator = EntropyCalculator::new();
//! let entropy = calculator.calculate_entropy(&distribution);
//! assert!((entropy - 2.0).abs() < word_entropy::EPSILON);
//!
//! let validator = EntropyValidator::new();
//! let report = ValidationReport::new(validator.comprehensive_validation(&distribution, entropy, false));
//! assert!(report.all_passed());
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod calculator;
pub mod config;
pub mod corpus;
pub mod metrics;
pub mod validation;

// Re-export commonly used types at crate root
pub use calculator::{EntropyCalculator, FrequencyDistribution, EPSILON};
pub use config::{ConfigError, FileConfig};
pub use validation::{
    CheckKind, CheckMetrics, EntropyValidator, LinguisticRange, ValidationReport, ValidationResult,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
