//! Entropy calculation.
//!
//! Pure, deterministic computation of Shannon entropy and related
//! quantities over word-level and character-level frequency data.
//! Nothing here holds state across calls.

mod distribution;
mod shannon;

pub use distribution::FrequencyDistribution;
pub use shannon::{shannon_entropy, EntropyCalculator, EPSILON};
