// Fixed keyword lists and hit counting.
//
// Each trait formula reads hits against one of four small English word
// lists. Matching is exact: the text is lowercased and split on whitespace,
// and a token only counts if it equals a list entry byte for byte. A token
// with punctuation attached ("amazing!!") does not match.

use std::collections::HashSet;
use std::sync::LazyLock;

static ENTHUSIASM: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "amazing",
        "awesome",
        "incredible",
        "fantastic",
        "wonderful",
        "great",
        "love",
        "excited",
    ]
    .into_iter()
    .collect()
});

static UNCERTAINTY: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "maybe", "perhaps", "might", "possibly", "probably", "think", "guess", "suppose",
    ]
    .into_iter()
    .collect()
});

static ANALYTICAL: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "because",
        "therefore",
        "however",
        "although",
        "whereas",
        "consequently",
        "furthermore",
    ]
    .into_iter()
    .collect()
});

static EMOTIONAL: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "feel", "heart", "soul", "emotion", "passion", "dream", "hope", "fear",
    ]
    .into_iter()
    .collect()
});

/// Per-list hit counts for one text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeywordHits {
    pub enthusiasm: usize,
    pub uncertainty: usize,
    pub analytical: usize,
    pub emotional: usize,
}

/// Count keyword hits over an already-lowercased word list.
pub fn count_hits(words: &[&str]) -> KeywordHits {
    let mut hits = KeywordHits::default();
    for &word in words {
        if ENTHUSIASM.contains(word) {
            hits.enthusiasm += 1;
        }
        if UNCERTAINTY.contains(word) {
            hits.uncertainty += 1;
        }
        if ANALYTICAL.contains(word) {
            hits.analytical += 1;
        }
        if EMOTIONAL.contains(word) {
            hits.emotional += 1;
        }
    }
    hits
}
