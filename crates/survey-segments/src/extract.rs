//! Per-option cell lookup.

use serde::{Serialize, Serializer};
use std::fmt;

use survey_model::{AnswerOption, LabelCounts, MISSING_CELL_PLACEHOLDER, RawValue};

use crate::columns::SegmentColumn;
use crate::kind::SegmentKind;

/// Raw value stored for `header` in the breakdown matching `kind`.
///
/// `None` when the breakdown is absent, the header is absent, or the stored
/// value is null.
pub fn lookup_cell<'a>(
    option: &'a AnswerOption,
    header: &str,
    kind: &SegmentKind,
) -> Option<&'a RawValue> {
    match kind {
        SegmentKind::MarketSegments => first_record_value(option.mindsets()?, header),
        SegmentKind::Prelim => first_record_value(option.prelim_answers()?, header),
        SegmentKind::Age => option.age_segments()?.get(header)?.as_ref(),
        SegmentKind::Gender => option.gender_segments()?.get(header)?.as_ref(),
        SegmentKind::Overall | SegmentKind::Combined | SegmentKind::Other(_) => {
            option.named_segments(kind.name())?.get(header)?.as_ref()
        }
    }
}

/// The first record holding `header` decides; later records are not consulted.
fn first_record_value<'a>(records: &'a [LabelCounts], header: &str) -> Option<&'a RawValue> {
    records
        .iter()
        .find_map(|record| record.get(header))
        .and_then(Option::as_ref)
}

/// A table cell.
#[derive(Debug, Clone, PartialEq)]
pub enum TableCell {
    Value(RawValue),
    Missing,
}

impl TableCell {
    pub fn is_missing(&self) -> bool {
        matches!(self, TableCell::Missing)
    }

    /// Display text, with `placeholder` for missing cells.
    pub fn render(&self, placeholder: &str) -> String {
        match self {
            TableCell::Value(value) => value.to_string(),
            TableCell::Missing => placeholder.to_string(),
        }
    }
}

impl fmt::Display for TableCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableCell::Value(value) => write!(f, "{value}"),
            TableCell::Missing => f.write_str(MISSING_CELL_PLACEHOLDER),
        }
    }
}

impl Serialize for TableCell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TableCell::Value(value) => value.serialize(serializer),
            TableCell::Missing => serializer.serialize_none(),
        }
    }
}

/// Table reading of a cell.
pub fn extract_cell(option: &AnswerOption, column: &SegmentColumn, kind: &SegmentKind) -> TableCell {
    lookup_cell(option, &column.header, kind)
        .cloned()
        .map_or(TableCell::Missing, TableCell::Value)
}

/// Numeric reading of a cell, `None` when absent or not numeric.
pub fn numeric_cell(option: &AnswerOption, column: &SegmentColumn, kind: &SegmentKind) -> Option<f64> {
    lookup_cell(option, &column.header, kind).and_then(RawValue::as_number)
}

/// Chart reading of a cell; unresolvable cells are zero.
pub fn chart_value(option: &AnswerOption, column: &SegmentColumn, kind: &SegmentKind) -> f64 {
    numeric_cell(option, column, kind).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_model::Breakdown;

    fn column(header: &str) -> SegmentColumn {
        SegmentColumn {
            header: header.to_string(),
            count: 0.0,
        }
    }

    fn counts(entries: &[(&str, Option<RawValue>)]) -> LabelCounts {
        entries
            .iter()
            .map(|(label, value)| (label.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn first_matching_mindset_record_wins() {
        let option = AnswerOption::new("Yes").with_breakdown(Breakdown::Mindsets(vec![
            counts(&[("Mindset 1 of 2", None)]),
            counts(&[("Mindset 1 of 2", Some(RawValue::from(4.0)))]),
            counts(&[("Mindset 2 of 2", Some(RawValue::from(6.0)))]),
        ]));
        let kind = SegmentKind::MarketSegments;
        assert_eq!(
            extract_cell(&option, &column("Mindset 1 of 2"), &kind),
            TableCell::Missing
        );
        assert_eq!(
            extract_cell(&option, &column("Mindset 2 of 2"), &kind),
            TableCell::Value(RawValue::from(6.0))
        );
    }

    #[test]
    fn absent_header_is_missing_in_tables_and_zero_in_charts() {
        let option = AnswerOption::new("No").with_breakdown(Breakdown::Age(counts(&[(
            "18 - 24",
            Some(RawValue::from(5.0)),
        )])));
        let header = column("65+");
        assert_eq!(extract_cell(&option, &header, &SegmentKind::Age).to_string(), "N/A");
        assert_eq!(chart_value(&option, &header, &SegmentKind::Age), 0.0);
        assert_eq!(numeric_cell(&option, &header, &SegmentKind::Age), None);
    }

    #[test]
    fn text_counts_coerce_for_charts() {
        let option = AnswerOption::new("No").with_breakdown(Breakdown::Gender(counts(&[
            ("Male", Some(RawValue::from("12"))),
            ("Female", Some(RawValue::from("few"))),
        ])));
        let kind = SegmentKind::Gender;
        assert_eq!(chart_value(&option, &column("Male"), &kind), 12.0);
        assert_eq!(chart_value(&option, &column("Female"), &kind), 0.0);
        assert_eq!(
            extract_cell(&option, &column("Female"), &kind).render("-"),
            "few"
        );
    }

    #[test]
    fn other_kinds_read_named_breakdown() {
        let option = AnswerOption::new("Maybe").with_breakdown(Breakdown::Named {
            segment: "Region".to_string(),
            counts: counts(&[("North", Some(RawValue::from(3.0)))]),
        });
        let kind = SegmentKind::Other("Region".to_string());
        assert_eq!(chart_value(&option, &column("North"), &kind), 3.0);
        assert!(extract_cell(&option, &column("South"), &kind).is_missing());
    }
}
