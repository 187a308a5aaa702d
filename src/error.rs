//! Input validation in front of the summarizer.

use thiserror::Error;

use crate::summarizer::{is_blank, summarize, SummaryMode};

/// Errors surfaced to the user when a summary is requested.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummarizeError {
    /// The text is empty or whitespace only.
    #[error("No text to summarize")]
    EmptyInput,
}

impl SummarizeError {
    /// Longer explanation for notifications.
    pub fn detail(&self) -> &'static str {
        match self {
            SummarizeError::EmptyInput => "Please enter some text to summarize.",
        }
    }
}

/// Reject blank text before it reaches the summarizer.
pub fn validate_input(text: &str) -> Result<&str, SummarizeError> {
    if is_blank(text) {
        return Err(SummarizeError::EmptyInput);
    }
    Ok(text)
}

/// Validate, then summarize without any delay.
pub fn summarize_checked(text: &str, mode: SummaryMode) -> Result<String, SummarizeError> {
    let text = validate_input(text)?;
    Ok(summarize(text, mode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected() {
        assert_eq!(validate_input(""), Err(SummarizeError::EmptyInput));
        assert_eq!(validate_input("   "), Err(SummarizeError::EmptyInput));
        assert_eq!(validate_input("\n\t"), Err(SummarizeError::EmptyInput));
    }

    #[test]
    fn byte_order_mark_alone_is_blank() {
        assert_eq!(validate_input("\u{FEFF}"), Err(SummarizeError::EmptyInput));
        assert_eq!(validate_input(" \u{FEFF} "), Err(SummarizeError::EmptyInput));
        assert_eq!(validate_input("\u{FEFF}Text"), Ok("\u{FEFF}Text"));
    }

    #[test]
    fn text_is_passed_through_untrimmed() {
        assert_eq!(validate_input("  hi  "), Ok("  hi  "));
    }

    #[test]
    fn checked_summary_matches_core() {
        let text = "One. Two. Three.";
        for mode in SummaryMode::ALL {
            assert_eq!(summarize_checked(text, mode), Ok(summarize(text, mode)));
        }
        assert_eq!(
            summarize_checked(" ", SummaryMode::Detailed),
            Err(SummarizeError::EmptyInput)
        );
    }

    #[test]
    fn empty_input_messages() {
        let err = SummarizeError::EmptyInput;
        assert_eq!(err.to_string(), "No text to summarize");
        assert_eq!(err.detail(), "Please enter some text to summarize.");
    }
}
