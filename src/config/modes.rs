//! Progress display mode definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How per-file transfer progress is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressMode {
    /// Fixed-width status line rewritten in place (default).
    #[default]
    Line,
    /// Graphical progress bar.
    Bar,
    /// No per-file progress output.
    Quiet,
}

impl fmt::Display for ProgressMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressMode::Line => write!(f, "line"),
            ProgressMode::Bar => write!(f, "bar"),
            ProgressMode::Quiet => write!(f, "quiet"),
        }
    }
}

impl FromStr for ProgressMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "line" => Ok(ProgressMode::Line),
            "bar" => Ok(ProgressMode::Bar),
            "quiet" => Ok(ProgressMode::Quiet),
            _ => Err(format!("Unknown progress mode: {}", s)),
        }
    }
}
