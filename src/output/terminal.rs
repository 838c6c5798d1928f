// Colored terminal output for profiles and comparisons.
//
// This module handles all terminal-specific formatting: score bars, colors,
// aligned columns. The main.rs display calls delegate here.

use colored::Colorize;

use crate::scoring::compare::ComparisonResult;
use crate::scoring::describe::TraitLevel;
use crate::scoring::style::TraitScores;

/// Display a scored profile with its descriptions.
pub fn display_profile(scores: &TraitScores, descriptions: &[String], source: &str) {
    println!("\n{}", "=== Personality Profile ===".bold());
    println!("  {} {}", "Text:".dimmed(), preview(source, 60).dimmed());
    println!();

    for (name, value) in scores.named() {
        let level = TraitLevel::from_score(value);
        println!(
            "  {:<18} {:>3}  {}  {}",
            capitalize(name),
            value,
            score_bar(value),
            colorize_level(level),
        );
    }

    println!("\n  {}", "Traits:".bold());
    for line in descriptions {
        println!("    - {line}");
    }

    let m = &scores.metrics;
    println!(
        "\n  {} {} words, avg word length {:.2}, avg sentence length {:.2}, caps {:.2}%",
        "Metrics:".dimmed(),
        m.word_count,
        m.avg_word_length,
        m.avg_sentence_length,
        m.caps_ratio,
    );
}

/// Display a comparison of two texts side by side.
pub fn display_comparison(result: &ComparisonResult) {
    println!("\n{}", "=== Compatibility Report ===".bold());
    println!();

    println!(
        "  {:<18} {:>8} {:>8} {:>6}",
        "Trait".dimmed(),
        "Text 1".dimmed(),
        "Text 2".dimmed(),
        "Diff".dimmed(),
    );
    println!("  {}", "-".repeat(44).dimmed());

    let p1 = &result.person1.personality;
    let p2 = &result.person2.personality;
    for ((name, a), (_, b)) in p1.named().into_iter().zip(p2.named()) {
        let diff = a.abs_diff(b);
        let diff_str = if diff >= 40 {
            diff.to_string().red().to_string()
        } else if diff >= 20 {
            diff.to_string().yellow().to_string()
        } else {
            diff.to_string().normal().to_string()
        };
        println!("  {:<18} {:>8} {:>8} {:>6}", capitalize(name), a, b, diff_str);
    }

    println!();
    let compat_str = format!("{:.1}%", result.compatibility);
    let compat_colored = if result.compatibility > 80.0 {
        compat_str.green().bold()
    } else if result.compatibility > 60.0 {
        compat_str.green()
    } else if result.compatibility > 40.0 {
        compat_str.yellow()
    } else {
        compat_str.red()
    };
    println!("  Compatibility: {compat_colored}");
    println!("  {}", result.analysis);
}

/// First characters of a text on a single line, for context headers.
fn preview(text: &str, max_chars: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .take(max_chars)
        .collect();
    if text.chars().count() > max_chars {
        format!("{flat}…")
    } else {
        flat
    }
}

fn score_bar(value: u32) -> String {
    // 10-100 maps to 1-20 filled cells
    let filled = (value as usize) / 5;
    format!("{}{}", "#".repeat(filled), ".".repeat(20 - filled))
}

fn colorize_level(level: TraitLevel) -> String {
    match level {
        TraitLevel::High => level.as_str().green().bold().to_string(),
        TraitLevel::Moderate => level.as_str().yellow().to_string(),
        TraitLevel::Low => level.as_str().dimmed().to_string(),
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_flattens_newlines() {
        assert_eq!(preview("a\nb\rc", 10), "a b c");
    }

    #[test]
    fn preview_truncates_long_text() {
        let p = preview(&"x".repeat(100), 10);
        assert_eq!(p.chars().count(), 11);
        assert!(p.ends_with('…'));
    }

    #[test]
    fn score_bar_spans_full_range() {
        assert_eq!(score_bar(10), format!("{}{}", "#".repeat(2), ".".repeat(18)));
        assert_eq!(score_bar(100), "#".repeat(20));
    }

    #[test]
    fn capitalize_first_letter_only() {
        assert_eq!(capitalize("extroversion"), "Extroversion");
    }
}
