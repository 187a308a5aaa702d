//! Mock summarization by sentence splitting and fixed templates.

use super::mode::SummaryMode;
use super::words::is_blank;

/// Static paragraph appended to detailed summaries.
pub const KEY_INSIGHTS: &str =
    "This text discusses important concepts that are relevant to academic study.";

/// Static conclusion appended to detailed summaries.
pub const CONCLUSION: &str =
    "The material presents valuable information for further research.";

/// Placeholders used when the text has fewer than three sentences.
pub const KEY_POINT_FALLBACKS: [&str; 3] = [
    "First main concept",
    "Second important idea",
    "Third key insight",
];

/// Closing line of a key-points summary.
pub const KEY_POINTS_CLOSING: &str =
    "These points represent the core ideas presented in the academic text.";

/// Split text on literal periods, dropping segments that are blank after
/// trimming. Surviving segments keep their surrounding whitespace.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split('.')
        .filter(|segment| !is_blank(segment))
        .collect()
}

/// Produce a mock summary of `text` in the requested style.
///
/// Never fails: missing sentences shorten the joined text or fall back to
/// placeholders. Callers are expected to reject blank input beforehand
/// (see [`crate::error::validate_input`]).
pub fn summarize(text: &str, mode: SummaryMode) -> String {
    let sentences = split_sentences(text);

    match mode {
        SummaryMode::Brief => format!("Brief Summary: {}.", join_first(&sentences, 2)),
        SummaryMode::Detailed => format!(
            "Detailed Summary:\n\n• Main points: {}.\n\n• Key insights: {}\n\n• Conclusion: {}",
            join_first(&sentences, 3),
            KEY_INSIGHTS,
            CONCLUSION,
        ),
        SummaryMode::KeyPoints => {
            let point = |index: usize| {
                sentences
                    .get(index)
                    .copied()
                    .unwrap_or(KEY_POINT_FALLBACKS[index])
            };
            format!(
                "Key Points:\n\n1. {}.\n2. {}.\n3. {}.\n\n{}",
                point(0),
                point(1),
                point(2),
                KEY_POINTS_CLOSING,
            )
        }
    }
}

fn join_first(sentences: &[&str], count: usize) -> String {
    sentences[..count.min(sentences.len())].join(". ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_untrimmed_segments() {
        assert_eq!(
            split_sentences("One. Two.  . Three"),
            vec!["One", " Two", " Three"]
        );
    }

    #[test]
    fn split_of_periods_only_is_empty() {
        assert!(split_sentences("...").is_empty());
        assert!(split_sentences(" . . ").is_empty());
        assert!(split_sentences("\u{FEFF}.").is_empty());
    }

    #[test]
    fn brief_uses_first_two_sentences() {
        assert_eq!(
            summarize("Alpha. Beta. Gamma.", SummaryMode::Brief),
            "Brief Summary: Alpha.  Beta."
        );
    }

    #[test]
    fn brief_with_single_sentence() {
        assert_eq!(
            summarize("Just this", SummaryMode::Brief),
            "Brief Summary: Just this."
        );
    }

    #[test]
    fn brief_without_sentences_still_terminates() {
        assert_eq!(summarize("...", SummaryMode::Brief), "Brief Summary: .");
    }

    #[test]
    fn detailed_with_two_sentences_joins_what_exists() {
        let summary = summarize("X. Y", SummaryMode::Detailed);
        assert!(summary.starts_with("Detailed Summary:\n\n• Main points: X.  Y.\n\n"));
        assert!(summary.ends_with(CONCLUSION));
    }

    #[test]
    fn keypoints_fill_all_fallbacks_when_no_sentences() {
        let summary = summarize(". .", SummaryMode::KeyPoints);
        assert_eq!(
            summary,
            "Key Points:\n\n1. First main concept.\n2. Second important idea.\n3. Third key insight.\n\nThese points represent the core ideas presented in the academic text."
        );
    }

    #[test]
    fn keypoints_ignore_sentences_past_the_third() {
        let summary = summarize("a. b. c. d. e", SummaryMode::KeyPoints);
        assert!(summary.contains("3.  c.\n"));
        assert!(!summary.contains(" d."));
    }
}
