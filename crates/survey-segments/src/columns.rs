//! Table columns for a segment, one rule per segment kind.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use survey_model::{BaseValues, RawValue, Segment, StudyData, ViewMode};

use crate::catalog::SegmentConfig;
use crate::kind::SegmentKind;

/// `Mindset <X> of <Y>`; `Y` names the series.
static MINDSET_SERIES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Mindset (\d+) of (\d+)").expect("Invalid mindset series regex")
});

/// Age bracket labels such as `18 - 24` or `65+`.
static AGE_BRACKET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?: - \d+)?\+?").expect("Invalid age bracket regex"));

const PLACEHOLDER_PREFIX: &str = "Unnamed:";

/// One column of a segment table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentColumn {
    /// Base-value label; also the lookup key into option breakdowns.
    pub header: String,
    /// Respondent base for the column, zero when not numeric.
    pub count: f64,
}

impl SegmentColumn {
    fn from_base_value(header: &str, value: &RawValue) -> Self {
        Self {
            header: header.to_string(),
            count: value.as_number().unwrap_or(0.0),
        }
    }
}

/// Columns for the tab `config`, whose data is `segment`.
///
/// Kinds without a column rule yield no columns; callers render those
/// questions as an option list.
pub fn derive_columns(config: &SegmentConfig, segment: &Segment) -> Vec<SegmentColumn> {
    let base_values = &segment.base_values;
    match &config.kind {
        SegmentKind::MarketSegments => market_segment_columns(config, base_values),
        SegmentKind::Age => age_columns(base_values),
        SegmentKind::Gender => gender_columns(base_values),
        SegmentKind::Prelim => prelim_columns(base_values),
        SegmentKind::Overall | SegmentKind::Combined | SegmentKind::Other(_) => Vec::new(),
    }
}

/// Age columns shown on the Prelim tab, read from the view mode's Age segment.
pub fn prelim_age_columns(
    study_data: Option<&StudyData>,
    config: &SegmentConfig,
    view_mode: ViewMode,
) -> Vec<SegmentColumn> {
    if config.kind != SegmentKind::Prelim {
        return Vec::new();
    }
    let Some(study_data) = study_data else {
        return Vec::new();
    };
    study_data
        .iter()
        .find(|(raw_key, _)| {
            view_mode.owns_key(raw_key) && SegmentKind::of_key(raw_key) == SegmentKind::Age
        })
        .map(|(_, age)| age_columns(&age.base_values))
        .unwrap_or_default()
}

fn market_segment_columns(config: &SegmentConfig, base_values: &BaseValues) -> Vec<SegmentColumn> {
    if config.is_mindset_sub_tab {
        let Some(captures) = MINDSET_SERIES.captures(&config.name) else {
            return base_values
                .get(&config.name)
                .map(|value| vec![SegmentColumn::from_base_value(&config.name, value)])
                .unwrap_or_default();
        };
        let series = &captures[2];
        return sorted_columns(base_values.non_null().filter(|(label, _)| {
            MINDSET_SERIES
                .captures(label)
                .is_some_and(|other| &other[2] == series)
        }));
    }

    if config.name == SegmentKind::MarketSegments.name() && config.key == config.parent_key {
        return sorted_columns(
            base_values
                .non_null()
                .filter(|(label, _)| label.starts_with("Mindset")),
        );
    }

    Vec::new()
}

fn age_columns(base_values: &BaseValues) -> Vec<SegmentColumn> {
    base_values
        .non_null()
        .filter(|(label, _)| !label.starts_with(PLACEHOLDER_PREFIX) && AGE_BRACKET.is_match(label))
        .map(|(label, value)| SegmentColumn::from_base_value(label, value))
        .collect()
}

fn gender_columns(base_values: &BaseValues) -> Vec<SegmentColumn> {
    base_values
        .non_null()
        .filter(|(label, _)| {
            let label = label.to_lowercase();
            label == "male" || label == "female"
        })
        .map(|(label, value)| SegmentColumn::from_base_value(label, value))
        .collect()
}

fn prelim_columns(base_values: &BaseValues) -> Vec<SegmentColumn> {
    base_values
        .non_null()
        .filter(|(label, _)| !label.starts_with(PLACEHOLDER_PREFIX))
        .map(|(label, value)| SegmentColumn::from_base_value(label, value))
        .collect()
}

fn sorted_columns<'a>(entries: impl Iterator<Item = (&'a str, &'a RawValue)>) -> Vec<SegmentColumn> {
    let mut columns: Vec<SegmentColumn> = entries
        .map(|(label, value)| SegmentColumn::from_base_value(label, value))
        .collect();
    columns.sort_by(|a, b| a.header.cmp(&b.header));
    columns
}
