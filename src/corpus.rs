//! Building frequency distributions from text and synthetic data.

use crate::calculator::FrequencyDistribution;

/// The fifty most common English words, most frequent first.
pub const SAMPLE_VOCABULARY: [&str; 50] = [
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "I", //
    "it", "for", "not", "on", "with", "he", "as", "you", "do", "at", //
    "this", "but", "his", "by", "from", "they", "we", "say", "her", "she", //
    "or", "an", "will", "my", "one", "all", "would", "there", "their", "what", //
    "so", "up", "out", "if", "about", "who", "get", "which", "go", "me",
];

/// Counts the words in `text`.
///
/// A word is a maximal run of alphanumeric characters and apostrophes.
/// Everything else separates words.
pub fn word_frequencies(text: &str, lowercase: bool) -> FrequencyDistribution {
    let mut distribution = FrequencyDistribution::new();
    let mut tokens = 0usize;

    for token in text
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|t| t.trim_matches('\''))
        .filter(|t| !t.is_empty())
    {
        let word = if lowercase {
            token.to_lowercase()
        } else {
            token.to_owned()
        };
        distribution.record(word);
        tokens += 1;
    }

    tracing::debug!(
        tokens,
        vocabulary = distribution.vocabulary_size(),
        "Built word distribution"
    );
    distribution
}

/// Counts the characters of a single word.
pub fn character_frequencies(word: &str) -> FrequencyDistribution<char> {
    let mut distribution = FrequencyDistribution::new();
    distribution.extend(word.chars());
    distribution
}

/// Assigns Zipfian counts by rank: the word at rank `r` (1-based) gets
/// `max(1, floor(base_frequency / r^exponent))`.
pub fn zipfian<S: AsRef<str>>(
    words: &[S],
    base_frequency: u64,
    exponent: f64,
) -> FrequencyDistribution {
    words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let rank = (i + 1) as f64;
            let count = (base_frequency as f64 / rank.powf(exponent)) as u64;
            (word.as_ref().to_owned(), count.max(1))
        })
        .collect()
}

/// A simulated natural-language distribution over [`SAMPLE_VOCABULARY`].
pub fn sample_natural_language() -> FrequencyDistribution {
    zipfian(&SAMPLE_VOCABULARY, 1000, 1.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_frequencies_lowercases_and_splits() {
        let dist = word_frequencies("The cat sat. The cat, the mat!", true);
        assert_eq!(dist.count("the"), Some(3));
        assert_eq!(dist.count("cat"), Some(2));
        assert_eq!(dist.count("mat"), Some(1));
        assert_eq!(dist.vocabulary_size(), 4);
    }

    #[test]
    fn test_word_frequencies_keeps_case() {
        let dist = word_frequencies("The the", false);
        assert_eq!(dist.count("The"), Some(1));
        assert_eq!(dist.count("the"), Some(1));
    }

    #[test]
    fn test_contractions_stay_whole() {
        let dist = word_frequencies("don't 'quoted'", true);
        assert_eq!(dist.count("don't"), Some(1));
        assert_eq!(dist.count("quoted"), Some(1));
    }

    #[test]
    fn test_empty_text() {
        assert!(word_frequencies("  ... !!", true).is_empty());
    }

    #[test]
    fn test_character_frequencies() {
        let dist = character_frequencies("entropy");
        assert_eq!(dist.count(&'e'), Some(1));
        assert_eq!(dist.count(&'y'), Some(1));
        assert_eq!(dist.vocabulary_size(), 7);
    }

    #[test]
    fn test_zipfian_counts() {
        let dist = zipfian(&["a", "b", "c", "d"], 100, 1.0);
        assert_eq!(dist.count("a"), Some(100));
        assert_eq!(dist.count("b"), Some(50));
        assert_eq!(dist.count("c"), Some(33));
        assert_eq!(dist.count("d"), Some(25));
    }

    #[test]
    fn test_zipfian_floor_is_one() {
        let dist = zipfian(&["a", "b"], 1, 5.0);
        assert_eq!(dist.count("b"), Some(1));
    }

    #[test]
    fn test_sample_natural_language() {
        let dist = sample_natural_language();
        assert_eq!(dist.vocabulary_size(), 50);
        assert_eq!(dist.count("the"), Some(1000));
        assert!(!dist.is_uniform());
    }
}
