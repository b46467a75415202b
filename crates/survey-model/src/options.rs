//! Presentation defaults shared by the derivation engine and its renderers.

use serde::{Deserialize, Serialize};

use crate::enums::{DisplayMode, ViewMode};

/// Placeholder shown in tables for cells with no resolvable value.
pub const MISSING_CELL_PLACEHOLDER: &str = "N/A";

/// Options controlling how a study is presented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationOptions {
    /// View mode selected when a study is first opened.
    pub view_mode: ViewMode,

    /// Display mode selected when a study is first opened.
    pub display_mode: DisplayMode,

    /// Text rendered for table cells without a value.
    pub missing_placeholder: String,
}

impl Default for PresentationOptions {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::BottomUp,
            display_mode: DisplayMode::Table,
            missing_placeholder: MISSING_CELL_PLACEHOLDER.to_string(),
        }
    }
}

impl PresentationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_view_mode(mut self, view_mode: ViewMode) -> Self {
        self.view_mode = view_mode;
        self
    }

    pub fn with_display_mode(mut self, display_mode: DisplayMode) -> Self {
        self.display_mode = display_mode;
        self
    }

    pub fn with_missing_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.missing_placeholder = placeholder.into();
        self
    }
}
