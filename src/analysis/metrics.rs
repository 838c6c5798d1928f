// Surface metrics of a piece of text.
//
// Counting rules match the documented scoring contract exactly:
// - words are whitespace-separated tokens
// - sentences are the non-empty fragments left after splitting on runs
//   of '.', '!' and '?'
// - average word length strips leading/trailing '.' ',' '!' '?' ';' ':'
//   from each token before measuring
// - ellipses are non-overlapping scans of the literal "..."
// - caps ratio counts uppercase characters against ALL characters, not
//   just letters
//
// Division-by-zero is avoided with max(count, 1) guards, so every field is
// well-defined for any input including the empty string.

use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

/// Characters stripped from token edges when measuring word length.
const EDGE_PUNCT: &[char] = &['.', ',', '!', '?', ';', ':'];

static SENTENCE_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence delimiter regex is valid"));

/// Raw surface metrics computed from a single text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub avg_word_length: f64,
    pub avg_sentence_length: f64,
    pub exclamation_count: usize,
    pub question_count: usize,
    pub ellipsis_count: usize,
    /// Fraction of all characters that are uppercase, in [0, 1].
    pub caps_ratio: f64,
}

/// Compute all surface metrics in one pass over the text.
pub fn compute_metrics(text: &str) -> TextMetrics {
    let word_count = text.split_whitespace().count();

    let sentence_count = SENTENCE_SPLIT
        .split(text)
        .filter(|fragment| !fragment.trim().is_empty())
        .count();

    // Mean token length after stripping edge punctuation. Lengths are in
    // characters, not bytes, so multi-byte input measures correctly.
    let stripped_len_sum: usize = text
        .split_whitespace()
        .map(|word| word.trim_matches(EDGE_PUNCT).chars().count())
        .sum();
    let avg_word_length = stripped_len_sum as f64 / word_count.max(1) as f64;

    let avg_sentence_length = word_count as f64 / sentence_count.max(1) as f64;

    let exclamation_count = text.matches('!').count();
    let question_count = text.matches('?').count();
    // str::matches scans left to right without overlap, so "......" counts
    // as two ellipses and "....." as one.
    let ellipsis_count = text.matches("...").count();

    let char_count = text.chars().count();
    let upper_count = text.chars().filter(|c| c.is_uppercase()).count();
    let caps_ratio = upper_count as f64 / char_count.max(1) as f64;

    TextMetrics {
        word_count,
        sentence_count,
        avg_word_length,
        avg_sentence_length,
        exclamation_count,
        question_count,
        ellipsis_count,
        caps_ratio,
    }
}

impl TextMetrics {
    /// All-zero metrics, the result for empty or whitespace-only input.
    pub fn zero() -> Self {
        Self {
            word_count: 0,
            sentence_count: 0,
            avg_word_length: 0.0,
            avg_sentence_length: 0.0,
            exclamation_count: 0,
            question_count: 0,
            ellipsis_count: 0,
            caps_ratio: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentence_runs_collapse() {
        let m = compute_metrics("One. Two! Three?");
        assert_eq!(m.sentence_count, 3);
        assert_eq!(m.word_count, 3);
    }

    #[test]
    fn trailing_delimiters_leave_no_phantom_sentence() {
        let m = compute_metrics("hello there friend!!!");
        assert_eq!(m.sentence_count, 1);
        assert_eq!(m.exclamation_count, 3);
    }

    #[test]
    fn ellipsis_counting_is_non_overlapping() {
        assert_eq!(compute_metrics("Hmm...... ok").ellipsis_count, 2);
        assert_eq!(compute_metrics("Wait.....").ellipsis_count, 1);
    }

    #[test]
    fn caps_ratio_counts_all_characters() {
        // "AB cd" is 2 uppercase out of 5 characters, space included
        let m = compute_metrics("AB cd");
        assert!((m.caps_ratio - 0.4).abs() < 1e-9);
    }

    #[test]
    fn word_length_strips_edge_punctuation() {
        // "this!" measures 4, "amazing!!" measures 7
        let m = compute_metrics("this! amazing!!");
        assert!((m.avg_word_length - 5.5).abs() < 1e-9);
    }

    #[test]
    fn empty_text_yields_zeroes() {
        assert_eq!(compute_metrics(""), TextMetrics::zero());
    }

    #[test]
    fn punctuation_only_text_has_words_but_no_sentences() {
        let m = compute_metrics("...");
        assert_eq!(m.word_count, 1);
        assert_eq!(m.sentence_count, 0);
        assert_eq!(m.ellipsis_count, 1);
        assert!((m.avg_word_length - 0.0).abs() < 1e-9);
        // word_count / max(sentence_count, 1)
        assert!((m.avg_sentence_length - 1.0).abs() < 1e-9);
    }
}
