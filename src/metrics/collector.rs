//! Metrics collection and registry.

use crate::validation::ValidationReport;
use prometheus::{Encoder, Gauge, IntCounter, IntGauge, Registry, TextEncoder};
use thiserror::Error;

/// Errors that can occur during metrics operations.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),
}

/// Cumulative validation state for a metrics update.
#[derive(Debug, Clone, Default)]
pub struct MetricsSnapshot {
    /// Comprehensive validations performed.
    pub validation_runs: u64,
    /// Checks that passed, including skipped ones.
    pub checks_passed: u64,
    /// Checks that failed.
    pub checks_failed: u64,
    /// Checks that did not apply.
    pub checks_skipped: u64,
    /// Entropy of the most recent distribution.
    pub entropy_bits: Option<f64>,
    /// Normalized entropy of the most recent distribution.
    pub normalized_entropy: Option<f64>,
    /// Vocabulary size of the most recent distribution.
    pub vocabulary_size: Option<usize>,
}

/// Prometheus metrics registry for entropy validation.
pub struct MetricsRegistry {
    registry: Registry,

    // Validation counters
    validation_runs_total: IntCounter,
    checks_passed_total: IntCounter,
    checks_failed_total: IntCounter,
    checks_skipped_total: IntCounter,

    // Latest distribution
    last_entropy_bits: Gauge,
    last_normalized_entropy: Gauge,
    last_vocabulary_size: IntGauge,
}

impl MetricsRegistry {
    /// Creates a new registry with all validation metrics registered.
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let validation_runs_total = IntCounter::new(
            "word_entropy_validation_runs_total",
            "Total number of comprehensive validations performed",
        )?;
        let checks_passed_total = IntCounter::new(
            "word_entropy_checks_passed_total",
            "Total number of validation checks that passed",
        )?;
        let checks_failed_total = IntCounter::new(
            "word_entropy_checks_failed_total",
            "Total number of validation checks that failed",
        )?;
        let checks_skipped_total = IntCounter::new(
            "word_entropy_checks_skipped_total",
            "Total number of validation checks that did not apply",
        )?;

        let last_entropy_bits = Gauge::new(
            "word_entropy_last_entropy_bits",
            "Entropy of the most recently validated distribution, in bits",
        )?;
        let last_normalized_entropy = Gauge::new(
            "word_entropy_last_normalized_entropy",
            "Normalized entropy of the most recently validated distribution",
        )?;
        let last_vocabulary_size = IntGauge::new(
            "word_entropy_last_vocabulary_size",
            "Vocabulary size of the most recently validated distribution",
        )?;

        registry.register(Box::new(validation_runs_total.clone()))?;
        registry.register(Box::new(checks_passed_total.clone()))?;
        registry.register(Box::new(checks_failed_total.clone()))?;
        registry.register(Box::new(checks_skipped_total.clone()))?;
        registry.register(Box::new(last_entropy_bits.clone()))?;
        registry.register(Box::new(last_normalized_entropy.clone()))?;
        registry.register(Box::new(last_vocabulary_size.clone()))?;

        Ok(Self {
            registry,
            validation_runs_total,
            checks_passed_total,
            checks_failed_total,
            checks_skipped_total,
            last_entropy_bits,
            last_normalized_entropy,
            last_vocabulary_size,
        })
    }

    /// Updates all metrics from a snapshot.
    ///
    /// Counters only move forward: a snapshot with a lower total than the
    /// current counter value leaves the counter unchanged.
    pub fn update(&self, snapshot: &MetricsSnapshot) {
        advance(&self.validation_runs_total, snapshot.validation_runs);
        advance(&self.checks_passed_total, snapshot.checks_passed);
        advance(&self.checks_failed_total, snapshot.checks_failed);
        advance(&self.checks_skipped_total, snapshot.checks_skipped);

        if let Some(entropy) = snapshot.entropy_bits {
            self.last_entropy_bits.set(entropy);
        }
        if let Some(normalized) = snapshot.normalized_entropy {
            self.last_normalized_entropy.set(normalized);
        }
        if let Some(size) = snapshot.vocabulary_size {
            self.last_vocabulary_size.set(size as i64);
        }
    }

    /// Records one report on top of the current counters.
    pub fn record(&self, report: &ValidationReport, entropy_bits: f64, normalized: f64, vocabulary_size: usize) {
        let mut snapshot = MetricsSnapshot::from_report(report, entropy_bits, normalized, vocabulary_size);
        snapshot.validation_runs += self.validation_runs_total.get();
        snapshot.checks_passed += self.checks_passed_total.get();
        snapshot.checks_failed += self.checks_failed_total.get();
        snapshot.checks_skipped += self.checks_skipped_total.get();
        self.update(&snapshot);
    }

    /// Returns the underlying Prometheus registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Encodes all metrics in Prometheus text format.
    pub fn encode(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

fn advance(counter: &IntCounter, total: u64) {
    let current = counter.get();
    if total > current {
        counter.inc_by(total - current);
    }
}

impl MetricsSnapshot {
    /// Creates a snapshot for a single validation run.
    pub fn from_report(
        report: &ValidationReport,
        entropy_bits: f64,
        normalized_entropy: f64,
        vocabulary_size: usize,
    ) -> Self {
        Self {
            validation_runs: 1,
            checks_passed: report.passed() as u64,
            checks_failed: report.failed() as u64,
            checks_skipped: report.results().iter().filter(|r| r.is_skipped()).count() as u64,
            entropy_bits: Some(entropy_bits),
            normalized_entropy: Some(normalized_entropy),
            vocabulary_size: Some(vocabulary_size),
        }
    }
}
