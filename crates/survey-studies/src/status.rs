//! Status badges for the study list.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use survey_model::StudyDocument;

use crate::dates::parse_study_date;

/// Status shown on a study card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualStatus {
    Completed,
    Ongoing,
    Scheduled,
    /// The raw `studyStatus` text.
    Other(String),
}

impl VisualStatus {
    pub fn label(&self) -> &str {
        match self {
            VisualStatus::Completed => "Completed",
            VisualStatus::Ongoing => "Ongoing",
            VisualStatus::Scheduled => "Scheduled",
            VisualStatus::Other(text) => text,
        }
    }
}

impl fmt::Display for VisualStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Status of `study` as of `today`.
///
/// An explicit `completed`/`ongoing` status wins; otherwise the study dates
/// decide. Unparseable dates count as absent.
pub fn visual_status(study: &StudyDocument, today: NaiveDate) -> VisualStatus {
    let status = study.status.to_lowercase();
    if status == "completed" {
        return VisualStatus::Completed;
    }
    if status == "ongoing" {
        return VisualStatus::Ongoing;
    }

    let start = study.started.as_deref().and_then(parse_study_date);
    let end = study.ended.as_deref().and_then(parse_study_date);
    match (start, end) {
        (_, Some(end)) if end < today => VisualStatus::Completed,
        (Some(start), end) if start <= today && end.is_none_or(|end| end >= today) => {
            VisualStatus::Ongoing
        }
        (Some(start), _) if start > today => VisualStatus::Scheduled,
        _ => VisualStatus::Other(study.status.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn study(status: &str, started: Option<&str>, ended: Option<&str>) -> StudyDocument {
        let mut study = StudyDocument::new("s");
        study.status = status.to_string();
        study.started = started.map(String::from);
        study.ended = ended.map(String::from);
        study
    }

    #[test]
    fn explicit_status_wins() {
        let today = day(2024, 6, 1);
        assert_eq!(
            visual_status(&study("COMPLETED", Some("2030-01-01"), None), today),
            VisualStatus::Completed
        );
        assert_eq!(
            visual_status(&study("ongoing", None, Some("2020-01-01")), today),
            VisualStatus::Ongoing
        );
    }

    #[test]
    fn dates_decide_otherwise() {
        let today = day(2024, 6, 1);
        let cases = [
            (Some("2024-01-01"), Some("2024-05-31"), VisualStatus::Completed),
            (Some("2024-05-01"), Some("2024-06-01"), VisualStatus::Ongoing),
            (Some("2024-06-01"), None, VisualStatus::Ongoing),
            (Some("2024-06-02"), None, VisualStatus::Scheduled),
            (None, None, VisualStatus::Other("Draft".into())),
            (Some("someday"), Some("never"), VisualStatus::Other("Draft".into())),
        ];
        for (started, ended, expected) in cases {
            assert_eq!(
                visual_status(&study("Draft", started, ended), today),
                expected,
                "{started:?} {ended:?}"
            );
        }
    }

    #[test]
    fn labels() {
        assert_eq!(VisualStatus::Scheduled.to_string(), "Scheduled");
        assert_eq!(VisualStatus::Other("Paused".into()).label(), "Paused");
    }
}
