//! Study list filters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use survey_model::StudyDocument;

use crate::dates::parse_study_date;

/// Filters applied to the study list. All set filters must match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyFilter {
    /// Case-insensitive substring of the title.
    pub search: String,

    /// Keywords that must all be present.
    pub tags: Vec<String>,

    /// Earliest calendar day the study may still be running on.
    pub from: Option<NaiveDate>,

    /// Latest calendar day the study may start on.
    pub to: Option<NaiveDate>,
}

impl StudyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_from(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    pub fn with_to(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }

    /// Returns true if any filter is set.
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || !self.tags.is_empty() || self.from.is_some() || self.to.is_some()
    }

    /// Add `tag` if absent, remove it if present.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(position) = self.tags.iter().position(|selected| selected == tag) {
            self.tags.remove(position);
        } else {
            self.tags.push(tag.to_string());
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, study: &StudyDocument) -> bool {
        self.matches_search(study) && self.matches_tags(study) && self.matches_dates(study)
    }

    fn matches_search(&self, study: &StudyDocument) -> bool {
        study
            .title
            .to_lowercase()
            .contains(&self.search.to_lowercase())
    }

    fn matches_tags(&self, study: &StudyDocument) -> bool {
        self.tags.iter().all(|tag| study.has_keyword(tag))
    }

    fn matches_dates(&self, study: &StudyDocument) -> bool {
        if self.from.is_none() && self.to.is_none() {
            return true;
        }
        let start = study.started.as_deref().and_then(parse_study_date);
        let effective_end = match study.ended.as_deref().filter(|text| !text.trim().is_empty()) {
            Some(ended) => parse_study_date(ended),
            None => start,
        };

        let starts_in_time = |to: NaiveDate| start.is_some_and(|start| start <= to);
        let runs_late_enough = |from: NaiveDate| effective_end.is_some_and(|end| end >= from);
        match (self.from, self.to) {
            (Some(from), Some(to)) => starts_in_time(to) && runs_late_enough(from),
            (Some(from), None) => runs_late_enough(from),
            (None, Some(to)) => starts_in_time(to),
            (None, None) => true,
        }
    }
}

/// Studies matching `filter`, in input order.
pub fn filter_studies<'a>(studies: &'a [StudyDocument], filter: &StudyFilter) -> Vec<&'a StudyDocument> {
    let matched: Vec<&StudyDocument> = studies.iter().filter(|study| filter.matches(study)).collect();
    debug!(
        total = studies.len(),
        matched = matched.len(),
        "study filter applied"
    );
    matched
}

/// Distinct keywords across `studies`, sorted case-insensitively.
pub fn all_tags(studies: &[StudyDocument]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for keyword in studies.iter().flat_map(|study| &study.keywords) {
        if !tags.contains(keyword) {
            tags.push(keyword.clone());
        }
    }
    tags.sort_by_cached_key(|tag| tag.to_lowercase());
    tags
}
