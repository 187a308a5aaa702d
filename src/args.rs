//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use crate::config::Config;
use crate::error::{summarize_checked, SummarizeError};
use crate::summarizer::{word_count, SummaryMode};

#[derive(Debug, Parser)]
#[command(name = "study-summarizer", version, about = "Academic text summarizer for the terminal")]
pub struct Cli {
    /// Config file (default: <config dir>/study-summarizer/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Summary type: brief, detailed or keypoints
    #[arg(long, value_name = "MODE")]
    pub mode: Option<SummaryMode>,

    /// Simulated processing delay in milliseconds
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Summarize once and print to stdout instead of opening the UI
    #[arg(long)]
    pub print: bool,

    /// With --print: emit JSON with mode, word count and summary
    #[arg(long, requires = "print")]
    pub json: bool,

    /// With --print: read text from this file instead of stdin
    #[arg(long, value_name = "FILE", requires = "print")]
    pub input: Option<PathBuf>,
}

impl Cli {
    /// Apply command-line overrides on top of file values.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(mode) = self.mode {
            config.defaults.mode = mode;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.defaults.delay_ms = delay_ms;
        }
    }
}

#[derive(Debug, Serialize)]
struct PrintedSummary<'a> {
    mode: SummaryMode,
    word_count: usize,
    summary: &'a str,
}

/// Output of `--print` for `text`.
pub fn print_output(text: &str, mode: SummaryMode, json: bool) -> Result<String, SummarizeError> {
    let summary = summarize_checked(text, mode)?;
    if !json {
        return Ok(summary);
    }
    let printed = PrintedSummary {
        mode,
        word_count: word_count(text),
        summary: &summary,
    };
    // Serializing plain strings and integers cannot fail.
    Ok(serde_json::to_string_pretty(&printed).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "study-summarizer",
            "--config",
            "/tmp/c.toml",
            "--mode",
            "keypoints",
            "--delay-ms",
            "10",
            "--print",
            "--json",
            "--input",
            "notes.txt",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        assert_eq!(cli.mode, Some(SummaryMode::KeyPoints));
        assert_eq!(cli.delay_ms, Some(10));
        assert!(cli.print && cli.json);
        assert_eq!(cli.input, Some(PathBuf::from("notes.txt")));
    }

    #[test]
    fn json_requires_print() {
        assert!(Cli::try_parse_from(["study-summarizer", "--json"]).is_err());
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(Cli::try_parse_from(["study-summarizer", "--mode", "outline"]).is_err());
    }

    #[test]
    fn overrides_replace_file_values() {
        let cli = Cli::try_parse_from(["study-summarizer", "--mode", "detailed", "--delay-ms", "0"])
            .unwrap();
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.defaults.mode, SummaryMode::Detailed);
        assert_eq!(config.defaults.delay_ms, 0);
    }

    #[test]
    fn print_output_plain_and_json() {
        let plain = print_output("One. Two.", SummaryMode::Brief, false).unwrap();
        assert_eq!(plain, "Brief Summary: One.  Two.");

        let json = print_output("One. Two.", SummaryMode::Brief, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["mode"], "brief");
        assert_eq!(value["word_count"], 2);
        assert_eq!(value["summary"], plain);
    }

    #[test]
    fn print_output_rejects_blank_text() {
        assert_eq!(
            print_output(" \n", SummaryMode::Brief, true),
            Err(SummarizeError::EmptyInput)
        );
    }
}
