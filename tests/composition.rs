// Composition tests: verifying that pure functions chain together correctly.
//
// These tests exercise the data flow between modules:
//   metrics + keywords -> trait scores -> descriptions -> comparison
// without any network or filesystem side effects.

use graphite::analysis::metrics::compute_metrics;
use graphite::scoring::compare::{compare_scores, compare_texts};
use graphite::scoring::describe::{describe, TraitLevel};
use graphite::scoring::style::score_text;

// ============================================================
// Chain: metrics -> scores
// ============================================================

#[test]
fn scores_embed_the_same_metrics_they_were_computed_from() {
    let text = "Numbers should line up. Exactly! Right?";
    let metrics = compute_metrics(text);
    let scores = score_text(text);

    assert_eq!(scores.metrics.word_count, metrics.word_count);
    let expected_ratio =
        metrics.exclamation_count as f64 / metrics.sentence_count.max(1) as f64;
    assert!((scores.metrics.exclamation_ratio - expected_ratio).abs() < 0.005);
    assert!((scores.metrics.caps_ratio - metrics.caps_ratio * 100.0).abs() < 0.005);
}

// ============================================================
// Chain: scores -> descriptions
// ============================================================

#[test]
fn high_extroversion_text_describes_as_extroverted() {
    let scores = score_text("OMG this is SO amazing!! I absolutely LOVE this!");
    assert!(scores.extroversion > 70);
    let descriptions = describe(&scores);
    assert_eq!(descriptions.len(), 5);
    assert!(descriptions[0].starts_with("Highly extroverted"));
}

#[test]
fn hesitant_text_describes_as_sensitive() {
    let scores = score_text(
        "Well... I'm not really sure about this. Maybe it could work? I guess we \
         could try it, but I don't know... what do you think? It might be okay, \
         but there could be issues...",
    );
    assert_eq!(TraitLevel::from_score(scores.neuroticism), TraitLevel::High);
    let descriptions = describe(&scores);
    assert!(descriptions[2].starts_with("High sensitivity"));
}

// ============================================================
// Chain: scores -> comparison
// ============================================================

#[test]
fn comparison_profiles_match_standalone_scoring() {
    let text1 = "Short and calm.";
    let text2 = "LOUD AND THRILLED!!!";
    let result = compare_texts(text1, text2);
    assert_eq!(result.person1.personality, score_text(text1));
    assert_eq!(result.person2.personality, score_text(text2));
    assert_eq!(result.person1.description, describe(&score_text(text1)));
}

#[test]
fn comparison_is_symmetric_in_compatibility() {
    let a = score_text("Measured, careful prose. Deliberate in every way.");
    let b = score_text("Wow!! Amazing stuff!! So great!!");
    let forward = compare_scores(&a, &b);
    let backward = compare_scores(&b, &a);
    assert_eq!(forward.compatibility, backward.compatibility);
    assert_eq!(forward.differences.total(), backward.differences.total());
}

// ============================================================
// Serialized shapes
// ============================================================

#[test]
fn trait_scores_serialize_with_contract_keys() {
    let json = serde_json::to_value(score_text("A sample for the wire format.")).unwrap();

    for trait_name in [
        "extroversion",
        "conscientiousness",
        "neuroticism",
        "openness",
        "agreeableness",
    ] {
        let value = json[trait_name].as_u64().expect("trait must be an integer");
        assert!((10..=100).contains(&value));
    }

    let metrics = json["metrics"].as_object().expect("metrics must nest");
    for key in [
        "word_count",
        "avg_word_length",
        "avg_sentence_length",
        "exclamation_ratio",
        "caps_ratio",
    ] {
        assert!(metrics.contains_key(key), "missing metrics key {key}");
    }
}

#[test]
fn comparison_serializes_with_contract_keys() {
    let result = compare_texts("first sample text", "second sample text");
    let json = serde_json::to_value(&result).unwrap();

    assert!(json["person1"]["personality"].is_object());
    assert!(json["person1"]["description"].is_array());
    assert!(json["person2"]["personality"].is_object());
    assert_eq!(json["differences"].as_object().unwrap().len(), 5);
    assert!(json["compatibility"].is_number());
    assert!(json["analysis"].is_string());
}

// ============================================================
// Determinism across the whole chain
// ============================================================

#[test]
fn full_chain_is_deterministic() {
    let text1 = "Consistency matters, because repeated runs must agree.";
    let text2 = "Do they though? Maybe... we should check!";
    let first = compare_texts(text1, text2);
    let second = compare_texts(text1, text2);
    assert_eq!(first, second);
}
