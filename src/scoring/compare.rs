// Profile comparison and compatibility scoring.
//
// Two profiles are compared trait by trait. The compatibility percentage is
// 100 minus the mean absolute difference, clamped at zero and rounded to
// one decimal, then bucketed into four tiers for the analysis string.

use serde::{Deserialize, Serialize};

use super::describe::describe;
use super::style::{score_text, TraitScores};

/// Per-trait absolute score differences. Serializes as a trait name to
/// integer mapping in fixed trait order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitDifferences {
    pub extroversion: u32,
    pub conscientiousness: u32,
    pub neuroticism: u32,
    pub openness: u32,
    pub agreeableness: u32,
}

impl TraitDifferences {
    fn between(a: &TraitScores, b: &TraitScores) -> Self {
        Self {
            extroversion: a.extroversion.abs_diff(b.extroversion),
            conscientiousness: a.conscientiousness.abs_diff(b.conscientiousness),
            neuroticism: a.neuroticism.abs_diff(b.neuroticism),
            openness: a.openness.abs_diff(b.openness),
            agreeableness: a.agreeableness.abs_diff(b.agreeableness),
        }
    }

    pub fn total(&self) -> u32 {
        self.extroversion
            + self.conscientiousness
            + self.neuroticism
            + self.openness
            + self.agreeableness
    }
}

/// Compatibility tiers by thresholding the percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompatibilityTier {
    Low,
    Moderate,
    Good,
    High,
}

impl CompatibilityTier {
    /// Determine the tier from a compatibility percentage (0-100).
    pub fn from_compatibility(compatibility: f64) -> Self {
        match compatibility {
            c if c > 80.0 => CompatibilityTier::High,
            c if c > 60.0 => CompatibilityTier::Good,
            c if c > 40.0 => CompatibilityTier::Moderate,
            _ => CompatibilityTier::Low,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompatibilityTier::High => "High compatibility! Very similar personalities.",
            CompatibilityTier::Good => "Good compatibility with some differences.",
            CompatibilityTier::Moderate => "Moderate compatibility - complementary differences.",
            CompatibilityTier::Low => "Low compatibility - very different personalities.",
        }
    }
}

/// One side of a comparison: the scores plus their descriptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    pub personality: TraitScores,
    pub description: Vec<String>,
}

impl PersonalityProfile {
    pub fn new(scores: TraitScores) -> Self {
        let description = describe(&scores);
        Self {
            personality: scores,
            description,
        }
    }
}

/// The full result of comparing two profiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub person1: PersonalityProfile,
    pub person2: PersonalityProfile,
    pub differences: TraitDifferences,
    pub compatibility: f64,
    pub analysis: String,
}

/// Compare two already-scored profiles.
pub fn compare_scores(a: &TraitScores, b: &TraitScores) -> ComparisonResult {
    let differences = TraitDifferences::between(a, b);

    let raw = 100.0 - differences.total() as f64 / 5.0;
    let compatibility = round1(raw.max(0.0));

    let tier = CompatibilityTier::from_compatibility(compatibility);
    let analysis = format!("Compatibility score: {compatibility:.1}% - {}", tier.label());

    ComparisonResult {
        person1: PersonalityProfile::new(a.clone()),
        person2: PersonalityProfile::new(b.clone()),
        differences,
        compatibility,
        analysis,
    }
}

/// Score both texts and compare them.
pub fn compare_texts(text1: &str, text2: &str) -> ComparisonResult {
    compare_scores(&score_text(text1), &score_text(text2))
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_texts_are_fully_compatible() {
        let result = compare_texts("I love this so much!!!", "I love this so much!!!");
        assert_eq!(result.differences.total(), 0);
        assert_eq!(result.compatibility, 100.0);
        assert_eq!(
            CompatibilityTier::from_compatibility(result.compatibility),
            CompatibilityTier::High
        );
    }

    #[test]
    fn tier_boundaries_are_strict() {
        use CompatibilityTier::*;
        assert_eq!(CompatibilityTier::from_compatibility(80.1), High);
        assert_eq!(CompatibilityTier::from_compatibility(80.0), Good);
        assert_eq!(CompatibilityTier::from_compatibility(60.1), Good);
        assert_eq!(CompatibilityTier::from_compatibility(60.0), Moderate);
        assert_eq!(CompatibilityTier::from_compatibility(40.1), Moderate);
        assert_eq!(CompatibilityTier::from_compatibility(40.0), Low);
        assert_eq!(CompatibilityTier::from_compatibility(0.0), Low);
    }

    #[test]
    fn compatibility_never_negative() {
        // Maximum possible per-trait difference is 90, total 450, which
        // would give 100 - 90 = 10. The max(0) guard still holds for any
        // hypothetical inputs.
        let a = TraitScores {
            extroversion: 100,
            conscientiousness: 100,
            neuroticism: 100,
            openness: 100,
            agreeableness: 100,
            ..TraitScores::floor()
        };
        let b = TraitScores::floor();
        let result = compare_scores(&a, &b);
        assert_eq!(result.differences.total(), 450);
        assert_eq!(result.compatibility, 10.0);
    }

    #[test]
    fn analysis_embeds_rounded_percentage() {
        let result = compare_texts("one two three", "one two three");
        assert!(result.analysis.starts_with("Compatibility score: 100.0% - "));
    }
}
