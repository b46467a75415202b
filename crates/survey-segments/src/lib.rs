//! Segment derivations for survey studies.
//!
//! Everything here is a pure function of a [`survey_model::StudyDocument`],
//! a [`survey_model::ViewMode`], and the selected tab key:
//!
//! - [`display_name`] maps raw `studyData` keys to tab labels
//! - [`build_catalog`] lists the tabs of a view mode
//! - [`Selection`] and [`reconcile`] keep the open tab across recomputations
//! - [`derive_columns`] and [`extract_cell`] produce table grids
//! - [`bar_chart`] and [`heatmap`] reshape questions for charts
//!
//! [`StudyView`] ties these together for a renderer.

pub mod catalog;
pub mod chart;
pub mod columns;
pub mod display_name;
pub mod error;
pub mod extract;
pub mod heatmap;
pub mod kind;
pub mod selection;
pub mod table;
pub mod view;

pub use catalog::{MINDSET_SERIES_LABELS, SegmentConfig, build_catalog, find_by_key, find_by_name};
pub use chart::{
    BAR_PALETTE, BarChart, BarRecord, BarSeries, ChartDatum, bar_chart, bar_series, series_key,
    base_values_chart, option_totals_chart,
};
pub use columns::{SegmentColumn, derive_columns, prelim_age_columns};
pub use display_name::display_name;
pub use error::{Result, SegmentsError};
pub use extract::{TableCell, chart_value, extract_cell, lookup_cell, numeric_cell};
pub use heatmap::{ColorScale, Heatmap, HeatmapCell, HeatmapPalette, Rgb, heatmap};
pub use kind::SegmentKind;
pub use selection::{
    ActiveSegment, Selection, SelectionState, overall_base_size, reconcile, resolve_active,
    retarget_name,
};
pub use table::{OptionSummary, QuestionTable, TableBody, TableRow, question_table};
pub use view::{QuestionProjection, StudyView};
