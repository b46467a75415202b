//! Bar-chart shapes.

use indexmap::IndexMap;
use serde::Serialize;

use survey_model::{BaseValues, Question, RawValue};

use crate::columns::SegmentColumn;
use crate::extract::chart_value;
use crate::kind::SegmentKind;

/// Series colors, cycled by column index.
pub const BAR_PALETTE: [&str; 10] = [
    "#8884d8", "#82ca9d", "#ffc658", "#ff8042", "#0088FE", "#00C49F", "#FFBB28", "#FF8042",
    "#a4de6c", "#d0ed57",
];

/// One option of a grouped bar chart: `{name, <header>: value, ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarRecord {
    pub name: String,
    #[serde(flatten)]
    pub values: IndexMap<String, f64>,
}

/// Descriptor of one bar series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarSeries {
    pub data_key: String,
    /// Legend label, `"<header> (<count>)"`.
    pub name: String,
    pub fill: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub question: String,
    pub records: Vec<BarRecord>,
    pub bars: Vec<BarSeries>,
}

const RECORD_NAME_KEY: &str = "name";

/// Record key for the series of `header`.
///
/// A header spelled like the record's own `name` field gets a suffix, so a
/// record never carries the key twice.
pub fn series_key(header: &str) -> String {
    if header == RECORD_NAME_KEY {
        format!("{header} (series)")
    } else {
        header.to_string()
    }
}

pub fn bar_series(columns: &[SegmentColumn]) -> Vec<BarSeries> {
    columns
        .iter()
        .zip(BAR_PALETTE.iter().cycle())
        .map(|(column, fill)| BarSeries {
            data_key: series_key(&column.header),
            name: format!("{} ({})", column.header, column.count),
            fill: (*fill).to_string(),
        })
        .collect()
}

/// Grouped bars for `question`, one record per option.
pub fn bar_chart(question: &Question, columns: &[SegmentColumn], kind: &SegmentKind) -> BarChart {
    let records = question
        .options
        .iter()
        .map(|option| BarRecord {
            name: option.text.clone(),
            values: columns
                .iter()
                .map(|column| (series_key(&column.header), chart_value(option, column, kind)))
                .collect(),
        })
        .collect();

    BarChart {
        question: question.text.clone(),
        records,
        bars: bar_series(columns),
    }
}

/// A `(name, value)` pair for single-series charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDatum {
    pub name: String,
    pub value: f64,
}

fn sort_descending(data: &mut [ChartDatum]) {
    data.sort_by(|a, b| b.value.total_cmp(&a.value));
}

/// Positive numeric base values, largest first.
///
/// With `keys`, only those labels are considered.
pub fn base_values_chart(base_values: &BaseValues, keys: Option<&[&str]>) -> Vec<ChartDatum> {
    let mut data: Vec<ChartDatum> = base_values
        .non_null()
        .filter(|(label, _)| keys.is_none_or(|keys| keys.contains(label)))
        .filter(|(label, _)| !label.starts_with("Unnamed:"))
        .filter_map(|(label, value)| match value {
            RawValue::Number(value) if *value > 0.0 => Some(ChartDatum {
                name: label.to_string(),
                value: *value,
            }),
            _ => None,
        })
        .collect();
    sort_descending(&mut data);
    data
}

/// Option totals of the question titled `text`, largest first.
///
/// Options whose `Total` is not a number are skipped.
pub fn option_totals_chart(questions: &[Question], text: &str) -> Vec<ChartDatum> {
    let Some(question) = questions.iter().find(|question| question.text == text) else {
        return Vec::new();
    };
    let mut data: Vec<ChartDatum> = question
        .options
        .iter()
        .filter_map(|option| match option.total {
            Some(RawValue::Number(total)) => Some(ChartDatum {
                name: option.text.clone(),
                value: total,
            }),
            _ => None,
        })
        .collect();
    sort_descending(&mut data);
    data
}
