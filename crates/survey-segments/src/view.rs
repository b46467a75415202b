//! Presentation state for one opened study.
//!
//! [`StudyView`] owns everything that changes while a study is browsed: the
//! view mode, the display mode, the catalog for the view mode, and the tab
//! selection. Every other derivation is recomputed from that state on demand.

use serde::Serialize;
use tracing::{debug, instrument};

use survey_model::{DisplayMode, PresentationOptions, StudyData, StudyDocument, ViewMode};

use crate::catalog::{SegmentConfig, build_catalog, find_by_name};
use crate::chart::{BarChart, ChartDatum, bar_chart, option_totals_chart};
use crate::columns::{SegmentColumn, derive_columns, prelim_age_columns};
use crate::heatmap::{Heatmap, HeatmapPalette, heatmap};
use crate::selection::{ActiveSegment, Selection, overall_base_size, resolve_active};
use crate::table::{QuestionTable, question_table};

/// Rendering of one question under the current display mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum QuestionProjection {
    Table(QuestionTable),
    Chart(BarChart),
    /// Chart mode for segments without columns: option totals.
    Totals {
        question: String,
        data: Vec<ChartDatum>,
    },
    Heatmap(Heatmap),
}

#[derive(Debug, Clone)]
pub struct StudyView<'a> {
    study: Option<&'a StudyDocument>,
    view_mode: ViewMode,
    display_mode: DisplayMode,
    missing_placeholder: String,
    palette: HeatmapPalette,
    catalog: Vec<SegmentConfig>,
    selection: Selection,
}

impl<'a> StudyView<'a> {
    pub fn new(study: Option<&'a StudyDocument>, options: &PresentationOptions) -> Self {
        let catalog = build_catalog(study.and_then(|study| study.study_data.as_ref()), options.view_mode);
        let selection = Selection::new().on_catalog(&catalog);
        Self {
            study,
            view_mode: options.view_mode,
            display_mode: options.display_mode,
            missing_placeholder: options.missing_placeholder.clone(),
            palette: HeatmapPalette::default(),
            catalog,
            selection,
        }
    }

    pub fn with_palette(mut self, palette: HeatmapPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn study(&self) -> Option<&'a StudyDocument> {
        self.study
    }

    fn study_data(&self) -> Option<&'a StudyData> {
        self.study.and_then(|study| study.study_data.as_ref())
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn missing_placeholder(&self) -> &str {
        &self.missing_placeholder
    }

    pub fn catalog(&self) -> &[SegmentConfig] {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn active_key(&self) -> Option<&str> {
        self.selection.active_key()
    }

    /// Replace the document; the selection is kept when its key survives.
    pub fn set_study(&mut self, study: Option<&'a StudyDocument>) {
        self.study = study;
        self.rebuild_catalog();
    }

    /// Open the tab with `key`.
    pub fn select(&mut self, key: &str) {
        let selection = std::mem::take(&mut self.selection);
        self.selection = selection.select(key, &self.catalog);
    }

    /// Open the tab named `name`; returns false when no such tab exists.
    pub fn select_by_name(&mut self, name: &str) -> bool {
        let Some(key) = find_by_name(&self.catalog, name).map(|tab| tab.key.clone()) else {
            return false;
        };
        self.select(&key);
        true
    }

    /// Switch view mode, keeping the open tab by name where possible.
    #[instrument(skip(self), fields(from = %self.view_mode))]
    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        if view_mode == self.view_mode {
            return;
        }
        let selection = std::mem::take(&mut self.selection);
        self.selection = selection.on_view_mode_change(&self.catalog);
        self.view_mode = view_mode;
        self.rebuild_catalog();
    }

    pub fn set_display_mode(&mut self, display_mode: DisplayMode) {
        self.display_mode = display_mode;
    }

    fn rebuild_catalog(&mut self) {
        self.catalog = build_catalog(self.study_data(), self.view_mode);
        let selection = std::mem::take(&mut self.selection);
        self.selection = selection.on_catalog(&self.catalog);
        debug!(active_key = ?self.selection.active_key(), "selection reconciled");
    }

    pub fn active_segment(&self) -> Option<ActiveSegment<'_>> {
        resolve_active(self.study_data(), &self.catalog, self.selection.active_key())
    }

    /// Columns of the open tab.
    pub fn columns(&self) -> Vec<SegmentColumn> {
        self.active_segment()
            .map(|active| derive_columns(active.config, active.segment))
            .unwrap_or_default()
    }

    /// Age columns for the open Prelim tab.
    pub fn prelim_age_columns(&self) -> Vec<SegmentColumn> {
        self.active_segment()
            .map(|active| prelim_age_columns(self.study_data(), active.config, self.view_mode))
            .unwrap_or_default()
    }

    pub fn overall_base_size(&self) -> f64 {
        overall_base_size(self.study, self.view_mode)
    }

    /// One projection per question of the open tab.
    pub fn render(&self) -> Vec<QuestionProjection> {
        let Some(active) = self.active_segment() else {
            return Vec::new();
        };
        let kind = &active.config.kind;
        let columns = derive_columns(active.config, active.segment);
        let questions = active.segment.questions();

        questions
            .iter()
            .map(|question| match self.display_mode {
                DisplayMode::Table => QuestionProjection::Table(question_table(question, &columns, kind)),
                DisplayMode::Chart if kind.has_column_grid() => {
                    QuestionProjection::Chart(bar_chart(question, &columns, kind))
                }
                DisplayMode::Chart => QuestionProjection::Totals {
                    question: question.text.clone(),
                    data: option_totals_chart(questions, &question.text),
                },
                DisplayMode::Heatmap => {
                    QuestionProjection::Heatmap(heatmap(question, &columns, kind, self.palette))
                }
            })
            .collect()
    }
}
