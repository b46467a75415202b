//! Selector enumerations for the study dashboard.
//!
//! Both selectors travel as short string codes (`"B"`, `"heatmap"`) between
//! the fetch layer, the command line, and the derivation engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Partition of a study document into parallel sets of segments.
///
/// Every raw segment key starts with a parenthesized view-mode marker,
/// e.g. `"(B) Age"` or `"(T) Mindsets"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum ViewMode {
    /// Bottom-up (`B`).
    #[default]
    #[serde(rename = "B")]
    BottomUp,
    /// Top-down (`T`).
    #[serde(rename = "T")]
    TopDown,
    /// Response-time (`R`).
    #[serde(rename = "R")]
    ResponseTime,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::BottomUp, ViewMode::TopDown, ViewMode::ResponseTime];

    /// Returns the single-letter code used in segment keys.
    pub fn as_code(&self) -> &'static str {
        match self {
            ViewMode::BottomUp => "B",
            ViewMode::TopDown => "T",
            ViewMode::ResponseTime => "R",
        }
    }

    /// Returns the key prefix, e.g. `"(B)"`.
    pub fn key_prefix(&self) -> &'static str {
        match self {
            ViewMode::BottomUp => "(B)",
            ViewMode::TopDown => "(T)",
            ViewMode::ResponseTime => "(R)",
        }
    }

    /// Returns a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::BottomUp => "Bottom-up",
            ViewMode::TopDown => "Top-down",
            ViewMode::ResponseTime => "Response time",
        }
    }

    /// Returns true if the raw segment key belongs to this view mode.
    pub fn owns_key(&self, raw_key: &str) -> bool {
        raw_key.starts_with(self.key_prefix())
    }

    /// Raw key of this view mode's Overall segment.
    pub fn overall_key(&self) -> String {
        format!("{} Overall", self.key_prefix())
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

impl FromStr for ViewMode {
    type Err = ModelError;

    /// Accepts the letter codes and the spelled-out names (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['-', '_', ' '], "");
        match normalized.as_str() {
            "B" | "BOTTOMUP" => Ok(ViewMode::BottomUp),
            "T" | "TOPDOWN" => Ok(ViewMode::TopDown),
            "R" | "RESPONSETIME" => Ok(ViewMode::ResponseTime),
            _ => Err(ModelError::InvalidViewMode(s.to_string())),
        }
    }
}

/// How the detail pane renders the active segment's questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Table,
    Chart,
    Heatmap,
}

impl DisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayMode::Table => "table",
            DisplayMode::Chart => "chart",
            DisplayMode::Heatmap => "heatmap",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(DisplayMode::Table),
            "chart" | "bar" => Ok(DisplayMode::Chart),
            "heatmap" | "heat-map" => Ok(DisplayMode::Heatmap),
            _ => Err(ModelError::InvalidDisplayMode(s.to_string())),
        }
    }
}
