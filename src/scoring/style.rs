// Writing-style trait scores.
//
// Five bounded trait scores computed from surface metrics and keyword hits
// via fixed weighted sums. The formulas are ad hoc heuristics with no
// statistical grounding; their exact arithmetic, including truncation
// toward zero and the evaluation-order quirk noted on agreeableness, is the
// behavioral contract.
//
// Each raw sum is truncated toward zero, capped at 100, and finally floored
// at 10. The floor runs after the cap.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::keywords::count_hits;
use crate::analysis::metrics::{compute_metrics, TextMetrics};

/// Trait score bounds. The floor applies after the cap.
const SCORE_FLOOR: i64 = 10;
const SCORE_CAP: i64 = 100;

/// Rounded, display-oriented subset of TextMetrics embedded in a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub word_count: usize,
    /// Mean token length after edge punctuation stripping, 2 decimals.
    pub avg_word_length: f64,
    /// Words per sentence, 2 decimals.
    pub avg_sentence_length: f64,
    /// Exclamation marks per sentence, 2 decimals.
    pub exclamation_ratio: f64,
    /// Uppercase fraction as a percentage 0-100, 2 decimals.
    pub caps_ratio: f64,
}

/// A scored personality profile for one text.
///
/// Serializes as the five lowercase trait names mapped to integers in
/// [10, 100] plus a nested `metrics` summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitScores {
    pub extroversion: u32,
    pub conscientiousness: u32,
    pub neuroticism: u32,
    pub openness: u32,
    pub agreeableness: u32,
    pub metrics: MetricsSummary,
}

impl TraitScores {
    /// The profile for empty or whitespace-only input: every trait at the
    /// floor, all metrics zero.
    pub fn floor() -> Self {
        Self {
            extroversion: SCORE_FLOOR as u32,
            conscientiousness: SCORE_FLOOR as u32,
            neuroticism: SCORE_FLOOR as u32,
            openness: SCORE_FLOOR as u32,
            agreeableness: SCORE_FLOOR as u32,
            metrics: MetricsSummary::from(&TextMetrics::zero()),
        }
    }

    /// Scores in fixed trait order, paired with their serialized names.
    pub fn named(&self) -> [(&'static str, u32); 5] {
        [
            ("extroversion", self.extroversion),
            ("conscientiousness", self.conscientiousness),
            ("neuroticism", self.neuroticism),
            ("openness", self.openness),
            ("agreeableness", self.agreeableness),
        ]
    }
}

impl From<&TextMetrics> for MetricsSummary {
    fn from(m: &TextMetrics) -> Self {
        Self {
            word_count: m.word_count,
            avg_word_length: round2(m.avg_word_length),
            avg_sentence_length: round2(m.avg_sentence_length),
            exclamation_ratio: round2(
                m.exclamation_count as f64 / m.sentence_count.max(1) as f64,
            ),
            caps_ratio: round2(m.caps_ratio * 100.0),
        }
    }
}

/// Score a text. Pure, infallible, and safe for any finite string.
///
/// Empty and whitespace-only input short-circuits to the floor profile so
/// callers that bypass boundary validation still get a well-defined result.
pub fn score_text(text: &str) -> TraitScores {
    if text.trim().is_empty() {
        return TraitScores::floor();
    }

    let metrics = compute_metrics(text);

    let lower = text.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    let hits = count_hits(&words);

    let unique_words = words.iter().collect::<HashSet<_>>().len();
    let long_words = words.iter().filter(|w| w.chars().count() > 7).count();
    let please_count = lower.matches("please").count();
    let thank_count = lower.matches("thank").count();

    debug!(
        word_count = metrics.word_count,
        sentence_count = metrics.sentence_count,
        enthusiasm = hits.enthusiasm,
        uncertainty = hits.uncertainty,
        analytical = hits.analytical,
        emotional = hits.emotional,
        "computed text signals"
    );

    let extroversion = cap(metrics.exclamation_count as f64 * 20.0
        + metrics.caps_ratio * 100.0
        + hits.enthusiasm as f64 * 15.0
        + (metrics.avg_sentence_length - 10.0).max(0.0) * 2.0);

    let structure_bonus = if metrics.avg_sentence_length > 8.0 {
        50.0
    } else {
        20.0
    };
    let conscientiousness = cap((metrics.avg_word_length - 4.0).max(0.0) * 20.0
        + hits.analytical as f64 * 25.0
        + (15.0 - metrics.avg_sentence_length).max(0.0) * 3.0
        + structure_bonus);

    let neuroticism = cap(metrics.ellipsis_count as f64 * 25.0
        + hits.uncertainty as f64 * 20.0
        + metrics.question_count as f64 * 15.0
        + hits.emotional as f64 * 10.0);

    let openness = cap(unique_words as f64 / metrics.word_count.max(1) as f64 * 100.0
        + long_words as f64 * 10.0
        + metrics.avg_word_length * 10.0);

    // Agreeableness reads neuroticism after the 100-cap and truncation but
    // before the 10-floor. The evaluation order is fixed.
    let agreeableness = cap(please_count as f64 * 30.0
        + thank_count as f64 * 25.0
        + (100.0 - neuroticism as f64 * 0.3)
        + (50.0 - metrics.exclamation_count as f64 * 5.0));

    TraitScores {
        extroversion: floor(extroversion),
        conscientiousness: floor(conscientiousness),
        neuroticism: floor(neuroticism),
        openness: floor(openness),
        agreeableness: floor(agreeableness),
        metrics: MetricsSummary::from(&metrics),
    }
}

/// Truncate toward zero and cap at 100. Raw sums can go negative (heavy
/// exclamation use inside agreeableness), so this stays signed.
fn cap(raw: f64) -> i64 {
    (raw as i64).min(SCORE_CAP)
}

/// Apply the lower bound. Runs after `cap`, never before.
fn floor(capped: i64) -> u32 {
    capped.max(SCORE_FLOOR) as u32
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
