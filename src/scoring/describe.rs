// Qualitative trait descriptions.
//
// Each trait maps its score to one of three levels with the same two
// breakpoints (>70, >40), but the wording differs per trait. The output is
// always five strings in fixed trait order.

use serde::{Deserialize, Serialize};

use super::style::TraitScores;

/// Qualitative level shared by all five traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraitLevel {
    Low,
    Moderate,
    High,
}

impl TraitLevel {
    /// Determine the level from a trait score (10-100).
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s > 70 => TraitLevel::High,
            s if s > 40 => TraitLevel::Moderate,
            _ => TraitLevel::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TraitLevel::Low => "Low",
            TraitLevel::Moderate => "Moderate",
            TraitLevel::High => "High",
        }
    }
}

impl std::fmt::Display for TraitLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Produce the five qualitative descriptions for a profile, in fixed trait
/// order: extroversion, conscientiousness, neuroticism, openness,
/// agreeableness.
pub fn describe(scores: &TraitScores) -> Vec<String> {
    vec![
        describe_extroversion(TraitLevel::from_score(scores.extroversion)),
        describe_conscientiousness(TraitLevel::from_score(scores.conscientiousness)),
        describe_neuroticism(TraitLevel::from_score(scores.neuroticism)),
        describe_openness(TraitLevel::from_score(scores.openness)),
        describe_agreeableness(TraitLevel::from_score(scores.agreeableness)),
    ]
}

fn describe_extroversion(level: TraitLevel) -> String {
    match level {
        TraitLevel::High => "Highly extroverted - energetic, outgoing, seeks social stimulation",
        TraitLevel::Moderate => "Moderately extroverted - balanced social energy",
        TraitLevel::Low => "Introverted - thoughtful, reserved, introspective",
    }
    .to_string()
}

fn describe_conscientiousness(level: TraitLevel) -> String {
    match level {
        TraitLevel::High => "Highly organized - detail-oriented, disciplined, methodical",
        TraitLevel::Moderate => "Moderately organized - balanced approach to structure",
        TraitLevel::Low => "Spontaneous - flexible, adaptable, creative",
    }
    .to_string()
}

fn describe_neuroticism(level: TraitLevel) -> String {
    match level {
        TraitLevel::High => "High sensitivity - emotionally reactive, stress-prone",
        TraitLevel::Moderate => "Moderate sensitivity - normal emotional responses",
        TraitLevel::Low => "Emotionally stable - calm, resilient, steady",
    }
    .to_string()
}

fn describe_openness(level: TraitLevel) -> String {
    match level {
        TraitLevel::High => "Highly creative - imaginative, curious, open to new ideas",
        TraitLevel::Moderate => "Moderately creative - balanced openness to experience",
        TraitLevel::Low => "Traditional - practical, conventional, focused",
    }
    .to_string()
}

fn describe_agreeableness(level: TraitLevel) -> String {
    match level {
        TraitLevel::High => "Highly cooperative - trusting, helpful, empathetic",
        TraitLevel::Moderate => "Moderately cooperative - balanced social approach",
        TraitLevel::Low => "Competitive - direct, challenging, independent",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_boundaries() {
        assert_eq!(TraitLevel::from_score(100), TraitLevel::High);
        assert_eq!(TraitLevel::from_score(71), TraitLevel::High);
        assert_eq!(TraitLevel::from_score(70), TraitLevel::Moderate);
        assert_eq!(TraitLevel::from_score(41), TraitLevel::Moderate);
        assert_eq!(TraitLevel::from_score(40), TraitLevel::Low);
        assert_eq!(TraitLevel::from_score(10), TraitLevel::Low);
    }

    #[test]
    fn level_display_matches_as_str() {
        for level in [TraitLevel::Low, TraitLevel::Moderate, TraitLevel::High] {
            assert_eq!(level.to_string(), level.as_str());
        }
    }
}
