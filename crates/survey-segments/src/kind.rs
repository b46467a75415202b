//! Segment types recognised by the column and cell rules.

use serde::Serialize;
use std::fmt;

use crate::display_name::{COMBINED, MARKET_SEGMENTS, OVERALL, PRELIM, display_name};

/// The type of a segment, derived once from its display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum SegmentKind {
    Overall,
    /// Mindset clusters; shown as "Mindset K of N" sub-tabs.
    MarketSegments,
    Age,
    Gender,
    Prelim,
    /// Present in the data but never given a tab.
    Combined,
    Other(String),
}

impl SegmentKind {
    pub fn from_display_name(name: &str) -> Self {
        match name {
            OVERALL => SegmentKind::Overall,
            MARKET_SEGMENTS => SegmentKind::MarketSegments,
            "Age" => SegmentKind::Age,
            "Gender" => SegmentKind::Gender,
            PRELIM => SegmentKind::Prelim,
            COMBINED => SegmentKind::Combined,
            other => SegmentKind::Other(other.to_string()),
        }
    }

    /// Kind of the segment stored under a raw `studyData` key.
    pub fn of_key(raw_key: &str) -> Self {
        Self::from_display_name(&display_name(raw_key))
    }

    pub fn name(&self) -> &str {
        match self {
            SegmentKind::Overall => OVERALL,
            SegmentKind::MarketSegments => MARKET_SEGMENTS,
            SegmentKind::Age => "Age",
            SegmentKind::Gender => "Gender",
            SegmentKind::Prelim => PRELIM,
            SegmentKind::Combined => COMBINED,
            SegmentKind::Other(name) => name,
        }
    }

    /// Returns true if questions of this kind render as an option-by-column grid.
    pub fn has_column_grid(&self) -> bool {
        matches!(
            self,
            SegmentKind::MarketSegments
                | SegmentKind::Age
                | SegmentKind::Gender
                | SegmentKind::Prelim
        )
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<SegmentKind> for String {
    fn from(kind: SegmentKind) -> Self {
        kind.name().to_string()
    }
}
