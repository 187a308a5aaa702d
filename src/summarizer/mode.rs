//! Output style selector for the mock summarizer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Output style of a generated summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryMode {
    /// First two sentences on one line.
    #[default]
    Brief,
    /// Main points line plus fixed insight and conclusion paragraphs.
    Detailed,
    /// Numbered list of exactly three items.
    KeyPoints,
}

/// Error returned when parsing an unknown mode name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown summary mode '{0}' (expected brief, detailed or keypoints)")]
pub struct ParseModeError(pub String);

impl SummaryMode {
    /// All modes in selector order.
    pub const ALL: [SummaryMode; 3] = [Self::Brief, Self::Detailed, Self::KeyPoints];

    /// Machine name used in config files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brief => "brief",
            Self::Detailed => "detailed",
            Self::KeyPoints => "keypoints",
        }
    }

    /// Human label shown in the selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::Brief => "Brief Summary",
            Self::Detailed => "Detailed Summary",
            Self::KeyPoints => "Key Points",
        }
    }

    /// Next mode in selector order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::Brief => Self::Detailed,
            Self::Detailed => Self::KeyPoints,
            Self::KeyPoints => Self::Brief,
        }
    }

    /// Previous mode in selector order, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            Self::Brief => Self::KeyPoints,
            Self::Detailed => Self::Brief,
            Self::KeyPoints => Self::Detailed,
        }
    }
}

impl fmt::Display for SummaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SummaryMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "brief" => Ok(Self::Brief),
            "detailed" => Ok(Self::Detailed),
            "keypoints" | "key-points" | "key_points" => Ok(Self::KeyPoints),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}
