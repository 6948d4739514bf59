//! Word Entropy CLI
//!
//! Command-line interface for computing and validating word-level and
//! character-level entropy.

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use word_entropy::{
    corpus,
    metrics::MetricsRegistry,
    EntropyCalculator, EntropyValidator, FileConfig, FrequencyDistribution, ValidationReport,
};

#[derive(Debug, Parser)]
#[command(name = "word-entropy", version, about = "Compute and cross-validate Shannon entropy of text")]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Walk through the built-in example distributions.
    Demo,
    /// Compute and validate the word-level entropy of a text file.
    Analyze {
        /// Text file to analyze.
        path: PathBuf,
        /// Treat the text as natural language (overrides the config file).
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        natural_language: Option<bool>,
        /// Validate this entropy value instead of the computed one.
        #[arg(long)]
        claimed: Option<f64>,
        /// Emit the result as JSON.
        #[arg(long)]
        json: bool,
        /// Print Prometheus metrics after the report.
        #[arg(long)]
        metrics: bool,
    },
    /// Character-level entropy of individual words.
    Word {
        #[arg(required = true)]
        words: Vec<String>,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisOutput<'a> {
    path: &'a Path,
    total_words: u128,
    vocabulary_size: usize,
    entropy: f64,
    maximum_entropy: f64,
    normalized_entropy: f64,
    validated_entropy: f64,
    report: &'a ValidationReport,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => match FileConfig::from_file(path) {
            Ok(config) => {
                info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                eprintln!("Failed to load config: {}", e);
                std::process::exit(1);
            }
        },
        None => FileConfig::default(),
    };

    let validator = EntropyValidator::with_linguistic_range(config.validation.linguistic_range());

    match cli.command {
        Command::Demo => run_demo(&validator),
        Command::Analyze {
            path,
            natural_language,
            claimed,
            json,
            metrics,
        } => {
            let natural_language = natural_language.unwrap_or(config.analysis.natural_language);
            let all_passed = run_analyze(
                &validator,
                &path,
                natural_language,
                config.analysis.lowercase,
                claimed,
                json,
                metrics,
            );
            if !all_passed {
                std::process::exit(2);
            }
        }
        Command::Word { words } => {
            let calculator = validator.calculator();
            for word in &words {
                println!(
                    "{}: {:.4} bits (max {:.4})",
                    word,
                    calculator.calculate_word_entropy(word),
                    calculator.maximum_entropy(word.chars().count())
                );
            }
        }
    }
}

fn run_analyze(
    validator: &EntropyValidator,
    path: &Path,
    natural_language: bool,
    lowercase: bool,
    claimed: Option<f64>,
    json: bool,
    with_metrics: bool,
) -> bool {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Failed to read {}: {}", path.display(), e);
            std::process::exit(1);
        }
    };

    let calculator = validator.calculator();
    let distribution = corpus::word_frequencies(&text, lowercase);
    if distribution.is_empty() {
        warn!("No words found in {}", path.display());
    }

    let entropy = calculator.calculate_entropy(&distribution);
    let normalized = calculator.calculate_normalized_entropy(&distribution);
    let vocabulary_size = distribution.vocabulary_size();
    let validated = claimed.unwrap_or(entropy);

    let report = ValidationReport::new(validator.comprehensive_validation(
        &distribution,
        validated,
        natural_language,
    ));

    if json {
        let output = AnalysisOutput {
            path,
            total_words: distribution.total(),
            vocabulary_size,
            entropy,
            maximum_entropy: calculator.maximum_entropy(vocabulary_size),
            normalized_entropy: normalized,
            validated_entropy: validated,
            report: &report,
        };
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Failed to serialize result: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("File: {}", path.display());
        println!("Total words: {}", distribution.total());
        println!("Vocabulary size: {}", vocabulary_size);
        println!("Calculated entropy: {:.4} bits", entropy);
        println!(
            "Maximum possible entropy: {:.4} bits",
            calculator.maximum_entropy(vocabulary_size)
        );
        println!("Normalized entropy: {:.4}", normalized);
        report.print();
    }

    if with_metrics {
        let encoded = MetricsRegistry::new().and_then(|registry| {
            registry.record(&report, entropy, normalized, vocabulary_size);
            registry.encode()
        });
        match encoded {
            Ok(text) => print!("{}", text),
            Err(e) => warn!("Metrics unavailable: {}", e),
        }
    }

    info!(
        "Validation finished: {} passed, {} failed",
        report.passed(),
        report.failed()
    );
    report.all_passed()
}

fn run_demo(validator: &EntropyValidator) {
    let calculator = validator.calculator();

    info!("Word Entropy v{}", word_entropy::VERSION);
    println!("=== Word Entropy Calculation and Validation Demo ===\n");

    // Example 1: uniform distribution reaches the maximum
    println!("Example 1: Uniform Distribution");
    println!("---------------------------------");
    let uniform: FrequencyDistribution =
        [("the", 10), ("cat", 10), ("sat", 10), ("mat", 10)].into_iter().collect();
    describe(calculator, &uniform);
    ValidationReport::new(validator.comprehensive_validation(
        &uniform,
        calculator.calculate_entropy(&uniform),
        false,
    ))
    .print();

    // Example 2: skew lowers entropy
    println!("\nExample 2: Skewed Distribution");
    println!("---------------------------------");
    let skewed: FrequencyDistribution =
        [("the", 50), ("cat", 10), ("sat", 5), ("mat", 2)].into_iter().collect();
    describe(calculator, &skewed);
    println!(
        "Normalized entropy: {:.4}",
        calculator.calculate_normalized_entropy(&skewed)
    );
    ValidationReport::new(validator.comprehensive_validation(
        &skewed,
        calculator.calculate_entropy(&skewed),
        false,
    ))
    .print();

    // Example 3
    println!("\nExample 3: Character-level Entropy");
    println!("---------------------------------");
    let word = "entropy";
    println!("Word: \"{}\"", word);
    println!(
        "Character-level entropy: {:.4} bits",
        calculator.calculate_word_entropy(word)
    );
    let mut chars: Vec<_> = corpus::character_frequencies(word).iter().map(|(c, n)| (*c, n)).collect();
    chars.sort_unstable();
    println!("Character frequencies: {:?}\n", chars);

    // Example 4: Zipfian vocabulary
    println!("\nExample 4: Natural Language Simulation");
    println!("---------------------------------");
    let natural = corpus::sample_natural_language();
    let entropy = calculator.calculate_entropy(&natural);
    println!("Simulated vocabulary size: {} words", natural.vocabulary_size());
    println!("Total word count: {}", natural.total());
    println!("Calculated entropy: {:.4} bits", entropy);
    ValidationReport::new(validator.comprehensive_validation(&natural, entropy, true)).print();

    // Example 5: a wrong claimed value is caught
    println!("\nExample 5: Error Detection");
    println!("---------------------------------");
    let test: FrequencyDistribution =
        [("word1", 20), ("word2", 30), ("word3", 50)].into_iter().collect();
    let correct = calculator.calculate_entropy(&test);
    let incorrect = 5.0;
    println!("Testing with incorrect entropy value...");
    println!("Correct entropy: {:.4}", correct);
    println!("Claimed entropy: {:.4}", incorrect);

    let check = validator.validate_entropy_calculation(&test, incorrect);
    println!(
        "\nValidation result: {}",
        if check.is_valid() { "PASS" } else { "FAIL" }
    );
    println!("Message: {}", check.message());
    println!("Metrics: {}", check.metrics());
    println!();

    println!("=== Demo Complete ===");
}

fn describe(calculator: &EntropyCalculator, distribution: &FrequencyDistribution) {
    let mut words: Vec<_> = distribution.iter().collect();
    words.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    println!("Word frequencies: {:?}", words);
    println!(
        "Calculated entropy: {:.4} bits",
        calculator.calculate_entropy(distribution)
    );
    println!(
        "Maximum possible entropy: {:.4} bits",
        calculator.maximum_entropy(distribution.vocabulary_size())
    );
}
