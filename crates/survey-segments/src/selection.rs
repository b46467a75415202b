//! Active tab tracking across catalog recomputations.
//!
//! Tab keys are scoped to a view mode, so switching view modes re-targets the
//! selection by tab *name*: the name of the open tab is parked as a pending
//! target and consumed by the next catalog recomputation.

use tracing::debug;

use survey_model::{Segment, StudyData, StudyDocument, ViewMode};

use crate::catalog::{SegmentConfig, find_by_key, find_by_name};
use crate::display_name::OVERALL;

/// Observable state of a [`Selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState<'a> {
    NoSelection,
    Selected(&'a str),
    /// A view-mode change is waiting for the next catalog.
    PendingRetarget {
        target_name: &'a str,
        active_key: Option<&'a str>,
    },
}

/// The active tab key plus a single-slot pending retarget name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    active_key: Option<String>,
    pending_target: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_key(&self) -> Option<&str> {
        self.active_key.as_deref()
    }

    pub fn pending_target(&self) -> Option<&str> {
        self.pending_target.as_deref()
    }

    pub fn state(&self) -> SelectionState<'_> {
        match (&self.pending_target, &self.active_key) {
            (Some(target_name), active_key) => SelectionState::PendingRetarget {
                target_name,
                active_key: active_key.as_deref(),
            },
            (None, Some(key)) => SelectionState::Selected(key),
            (None, None) => SelectionState::NoSelection,
        }
    }

    /// Apply a freshly built catalog.
    #[must_use]
    pub fn on_catalog(self, catalog: &[SegmentConfig]) -> Self {
        let (active_key, pending_target) = reconcile(
            catalog,
            self.pending_target.as_deref(),
            self.active_key.as_deref(),
        );
        Self {
            active_key,
            pending_target,
        }
    }

    /// Select a tab by key.
    ///
    /// An explicit choice drops any pending retarget. Unknown keys fall back
    /// like a stale selection.
    #[must_use]
    pub fn select(self, key: impl Into<String>, catalog: &[SegmentConfig]) -> Self {
        Self {
            active_key: Some(key.into()),
            pending_target: None,
        }
        .on_catalog(catalog)
    }

    /// Park the open tab's name ahead of a view-mode switch.
    ///
    /// `catalog` is the catalog of the view mode being left. A later call
    /// replaces any target that was not consumed yet.
    #[must_use]
    pub fn on_view_mode_change(self, catalog: &[SegmentConfig]) -> Self {
        let target = retarget_name(catalog, self.active_key.as_deref());
        debug!(target_name = %target, "selection retarget pending");
        Self {
            active_key: self.active_key,
            pending_target: Some(target),
        }
    }
}

/// Transition function for a catalog recomputation.
///
/// Returns the new active key and the new pending target. The pending target
/// is always consumed: a matching name wins, otherwise a still-valid key is
/// kept, otherwise Overall, otherwise the first tab.
pub fn reconcile(
    catalog: &[SegmentConfig],
    pending_target: Option<&str>,
    current_key: Option<&str>,
) -> (Option<String>, Option<String>) {
    if catalog.is_empty() {
        return (None, None);
    }

    if let Some(target) = pending_target {
        if let Some(tab) = find_by_name(catalog, target) {
            return (Some(tab.key.clone()), None);
        }
        debug!(target_name = target, "retarget name not in catalog");
    }

    if let Some(key) = current_key
        && find_by_key(catalog, key).is_some()
    {
        return (Some(key.to_string()), None);
    }

    let fallback = find_by_name(catalog, OVERALL).or_else(|| catalog.first());
    (fallback.map(|tab| tab.key.clone()), None)
}

/// Name to re-target after a view-mode switch: the open tab's, or Overall.
pub fn retarget_name(catalog: &[SegmentConfig], active_key: Option<&str>) -> String {
    active_key
        .and_then(|key| find_by_key(catalog, key))
        .map(|tab| tab.name.clone())
        .unwrap_or_else(|| OVERALL.to_string())
}

/// The tab the detail pane shows, with the segment holding its data.
#[derive(Debug, Clone, Copy)]
pub struct ActiveSegment<'a> {
    pub config: &'a SegmentConfig,
    pub segment: &'a Segment,
}

/// Resolve the active key to its tab and data segment.
///
/// Sub-tabs read their data from the parent key.
pub fn resolve_active<'a>(
    study_data: Option<&'a StudyData>,
    catalog: &'a [SegmentConfig],
    active_key: Option<&str>,
) -> Option<ActiveSegment<'a>> {
    let config = find_by_key(catalog, active_key?)?;
    let segment = study_data?.get(&config.parent_key)?;
    Some(ActiveSegment { config, segment })
}

/// Respondent base for the view mode's Overall segment.
///
/// Falls back to the study's respondent count, then zero.
pub fn overall_base_size(study: Option<&StudyDocument>, view_mode: ViewMode) -> f64 {
    let Some(study) = study else {
        return 0.0;
    };
    study
        .segment(&view_mode.overall_key())
        .and_then(|segment| segment.data.base_size.as_ref())
        .and_then(|base_size| base_size.as_number())
        .or_else(|| study.respondents.map(|count| count as f64))
        .unwrap_or(0.0)
}
