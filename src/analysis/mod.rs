// Signal extraction from raw text.
//
// Everything the scoring formulas consume comes from here: surface metrics
// (word/sentence counts, punctuation, capitalization) and keyword hits
// against the fixed trait word lists. All functions are pure and tolerate
// arbitrary input, including empty strings.

use anyhow::Result;

pub mod keywords;
pub mod metrics;

/// Reject empty or whitespace-only input.
///
/// The scorer itself degrades gracefully on empty text; this check belongs
/// to the boundaries (CLI and HTTP handlers) so callers get a clear error
/// instead of a floor-valued profile.
pub fn validate_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        anyhow::bail!("No text provided: input is empty or whitespace-only");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_empty() {
        assert!(validate_text("").is_err());
    }

    #[test]
    fn validate_rejects_whitespace_only() {
        assert!(validate_text(" \t\n ").is_err());
    }

    #[test]
    fn validate_accepts_text() {
        assert!(validate_text("hello").is_ok());
    }
}
