//! Table projection of a question.

use serde::Serialize;

use survey_model::{Question, RawValue};

use crate::columns::SegmentColumn;
use crate::extract::{TableCell, extract_cell};
use crate::kind::SegmentKind;

/// One option row of a column grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub option: String,
    pub cells: Vec<TableCell>,
}

/// `(optiontext, Total)` for segments without columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionSummary {
    pub option: String,
    pub total: Option<RawValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum TableBody {
    Grid {
        columns: Vec<SegmentColumn>,
        rows: Vec<TableRow>,
    },
    Options {
        options: Vec<OptionSummary>,
    },
    /// The question has no options.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionTable {
    pub question: String,
    pub body: TableBody,
}

/// Tabulate `question` against `columns`.
///
/// Column-grid kinds with no derived columns render nothing, like a question
/// without options.
pub fn question_table(question: &Question, columns: &[SegmentColumn], kind: &SegmentKind) -> QuestionTable {
    let body = if question.options.is_empty() {
        TableBody::Empty
    } else if kind.has_column_grid() {
        if columns.is_empty() {
            TableBody::Empty
        } else {
            TableBody::Grid {
                columns: columns.to_vec(),
                rows: question
                    .options
                    .iter()
                    .map(|option| TableRow {
                        option: option.text.clone(),
                        cells: columns
                            .iter()
                            .map(|column| extract_cell(option, column, kind))
                            .collect(),
                    })
                    .collect(),
            }
        }
    } else {
        TableBody::Options {
            options: question
                .options
                .iter()
                .map(|option| OptionSummary {
                    option: option.text.clone(),
                    total: option.total.clone(),
                })
                .collect(),
        }
    };

    QuestionTable {
        question: question.text.clone(),
        body,
    }
}
