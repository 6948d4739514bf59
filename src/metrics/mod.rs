//! Prometheus metrics for validation runs.
//!
//! # Metrics Exposed
//!
//! - `word_entropy_validation_runs_total` - Comprehensive validations performed
//! - `word_entropy_checks_passed_total` - Individual checks that passed
//! - `word_entropy_checks_failed_total` - Individual checks that failed
//! - `word_entropy_checks_skipped_total` - Checks that did not apply (counted as passed too)
//! - `word_entropy_last_entropy_bits` - Entropy of the most recent distribution
//! - `word_entropy_last_normalized_entropy` - Normalized entropy of the most recent distribution
//! - `word_entropy_last_vocabulary_size` - Vocabulary size of the most recent distribution
//!
//! # Example
//!
//! ```
//! use word_entropy::metrics::{MetricsRegistry, MetricsSnapshot};
//!
//! let registry = MetricsRegistry::new().expect("Failed to create registry");
//!
//! let snapshot = MetricsSnapshot {
//!     validation_runs: 1,
//!     checks_passed: 4,
//!     checks_failed: 0,
//!     checks_skipped: 1,
//!     entropy_bits: Some(4.9),
//!     normalized_entropy: Some(0.87),
//!     vocabulary_size: Some(50),
//! };
//!
//! registry.update(&snapshot);
//! ```

mod collector;

pub use collector::{MetricsError, MetricsRegistry, MetricsSnapshot};
