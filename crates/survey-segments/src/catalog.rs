//! Navigable segment tabs for a view mode.
//!
//! Tabs are derived from the raw `studyData` keys carrying the active view
//! mode's prefix. Market Segments data never gets a tab of its own: it is
//! split into one "Mindset 1 of N" sub-tab per mindset series present in its
//! base values.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use survey_model::{StudyData, ViewMode};

use crate::display_name::{COMBINED, MARKET_SEGMENTS, OVERALL, display_name};
use crate::kind::SegmentKind;

/// Base-value labels that open a mindset series sub-tab.
pub const MINDSET_SERIES_LABELS: [&str; 2] = ["Mindset 1 of 2", "Mindset 1 of 3"];

/// One navigable tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentConfig {
    /// Catalog-unique tab key, e.g. `"(B) Mindsets_Mindset 1 of 2"`.
    pub key: String,
    /// Display label.
    pub name: String,
    /// Raw `studyData` key holding the tab's data.
    pub parent_key: String,
    pub is_mindset_sub_tab: bool,
    /// Type of the parent segment.
    pub kind: SegmentKind,
}

impl SegmentConfig {
    fn tab(raw_key: &str, name: String) -> Self {
        let kind = SegmentKind::from_display_name(&name);
        Self {
            key: raw_key.to_string(),
            name,
            parent_key: raw_key.to_string(),
            is_mindset_sub_tab: false,
            kind,
        }
    }

    fn mindset_sub_tab(raw_key: &str, label: &str) -> Self {
        Self {
            key: format!("{raw_key}_{label}"),
            name: label.to_string(),
            parent_key: raw_key.to_string(),
            is_mindset_sub_tab: true,
            kind: SegmentKind::MarketSegments,
        }
    }
}

/// Build the sorted tab list for `view_mode`.
///
/// Returns an empty list when the document carries no segment data.
pub fn build_catalog(study_data: Option<&StudyData>, view_mode: ViewMode) -> Vec<SegmentConfig> {
    let Some(study_data) = study_data else {
        return Vec::new();
    };

    let mut catalog = Vec::new();
    for (raw_key, segment) in study_data {
        if !view_mode.owns_key(raw_key) {
            continue;
        }
        let name = display_name(raw_key);
        if name == MARKET_SEGMENTS {
            let before = catalog.len();
            for label in MINDSET_SERIES_LABELS {
                if segment.base_values.get(label).is_some() {
                    catalog.push(SegmentConfig::mindset_sub_tab(raw_key, label));
                }
            }
            if catalog.len() == before {
                // Data without a "Mindset 1 of N" base value stays unreachable.
                debug!(segment = %raw_key, "market segments without mindset series skipped");
            }
        } else if name != COMBINED {
            catalog.push(SegmentConfig::tab(raw_key, name));
        }
    }

    catalog.sort_by(compare_tabs);
    debug!(
        view_mode = %view_mode,
        tab_count = catalog.len(),
        "segment catalog built"
    );
    catalog
}

/// Overall first, then mindset sub-tabs, then everything else; by name within each group.
fn compare_tabs(a: &SegmentConfig, b: &SegmentConfig) -> Ordering {
    let rank = |tab: &SegmentConfig| (tab.name != OVERALL, !tab.is_mindset_sub_tab);
    rank(a).cmp(&rank(b)).then_with(|| a.name.cmp(&b.name))
}

pub fn find_by_key<'a>(catalog: &'a [SegmentConfig], key: &str) -> Option<&'a SegmentConfig> {
    catalog.iter().find(|tab| tab.key == key)
}

pub fn find_by_name<'a>(catalog: &'a [SegmentConfig], name: &str) -> Option<&'a SegmentConfig> {
    catalog.iter().find(|tab| tab.name == name)
}
