//! Study list filtering over a realistic payload.

use chrono::NaiveDate;

use survey_model::StudyDocument;
use survey_studies::{StudyFilter, all_tags, filter_studies};

const STUDIES_JSON: &str = r#"[
    {
        "_id": "a",
        "studyTitle": "Morning Coffee Habits",
        "studyKeywords": ["coffee", "Morning"],
        "studyStarted": "2024-03-01T09:00:00Z",
        "studyEnded": "2024-03-20T18:00:00Z"
    },
    {
        "_id": "b",
        "studyTitle": "Tea rituals",
        "studyKeywords": ["tea", "morning"],
        "studyStarted": "2024-04-10T00:00:00Z"
    },
    {
        "_id": "c",
        "studyTitle": "Evening snacks",
        "studyKeywords": ["snacks"],
        "studyStarted": null
    }
]"#;

fn studies() -> Vec<StudyDocument> {
    serde_json::from_str(STUDIES_JSON).expect("parse studies")
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn ids(studies: &[StudyDocument], filter: &StudyFilter) -> Vec<String> {
    filter_studies(studies, filter)
        .into_iter()
        .map(|study| study.id.clone())
        .collect()
}

#[test]
fn empty_filter_keeps_everything() {
    let studies = studies();
    assert_eq!(ids(&studies, &StudyFilter::new()), vec!["a", "b", "c"]);
}

#[test]
fn search_is_case_insensitive() {
    let studies = studies();
    let filter = StudyFilter::new().with_search("COFFEE");
    assert_eq!(ids(&studies, &filter), vec!["a"]);
}

#[test]
fn every_tag_must_be_present() {
    let studies = studies();
    assert_eq!(
        ids(&studies, &StudyFilter::new().with_tags(["morning"])),
        vec!["b"]
    );
    assert!(ids(&studies, &StudyFilter::new().with_tags(["tea", "coffee"])).is_empty());
}

#[test]
fn date_window_overlap() {
    let studies = studies();

    // Overlaps study a only.
    let march = StudyFilter::new()
        .with_from(day(2024, 3, 15))
        .with_to(day(2024, 3, 31));
    assert_eq!(ids(&studies, &march), vec!["a"]);

    // Open-ended b has its start as effective end.
    let from_april = StudyFilter::new().with_from(day(2024, 4, 10));
    assert_eq!(ids(&studies, &from_april), vec!["b"]);

    let until_march = StudyFilter::new().with_to(day(2024, 3, 1));
    assert_eq!(ids(&studies, &until_march), vec!["a"]);
}

#[test]
fn missing_dates_fail_date_filters() {
    let studies = studies();
    let filter = StudyFilter::new().with_to(day(2030, 1, 1));
    assert!(!ids(&studies, &filter).contains(&"c".to_string()));
}

#[test]
fn tag_catalog_is_sorted_case_insensitively() {
    assert_eq!(
        all_tags(&studies()),
        vec!["coffee", "Morning", "morning", "snacks", "tea"]
    );
}
