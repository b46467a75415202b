//! Tests for survey-model types.

use survey_model::{PresentationOptions, RawValue, StudyDocument, ViewMode};

const STUDY_JSON: &str = r#"{
    "_id": "665f1c",
    "studyTitle": "Coffee habits",
    "studyStatus": "Completed",
    "studyRespondents": 240,
    "studyStarted": "2024-05-01T00:00:00Z",
    "studyEnded": "2024-05-10T00:00:00Z",
    "studyKeywords": ["coffee", "morning"],
    "studyCreatedBy": {
        "user": {
            "_id": "u1",
            "auth_type": "password",
            "companyName": null,
            "email": "owner@example.com",
            "firstName": "Sam",
            "lastName": null
        }
    },
    "studyData": {
        "(B) Overall": {
            "Base Values": {"Total": 240},
            "Data": {"Base Size": 240, "Questions": []}
        },
        "(B) Age": {
            "Base Values": {"18 - 24": 50, "25 - 34": 40, "Unnamed: 0": 10},
            "Data": {
                "Questions": [
                    {
                        "Question": "How many cups a day?",
                        "options": [
                            {"optiontext": "One", "Total": 90, "Age Segments": {"18 - 24": 20, "25 - 34": 15}}
                        ]
                    }
                ]
            }
        }
    }
}"#;

#[test]
fn study_document_deserializes() {
    let study: StudyDocument = serde_json::from_str(STUDY_JSON).expect("parse study");
    assert_eq!(study.id, "665f1c");
    assert_eq!(study.title, "Coffee habits");
    assert_eq!(study.respondents, Some(240));
    assert!(study.has_keyword("coffee"));
    let keys: Vec<&str> = study.segment_keys().collect();
    assert_eq!(keys, vec!["(B) Overall", "(B) Age"]);

    let age = study.segment("(B) Age").expect("age segment");
    let labels: Vec<&str> = age.base_values.iter().map(|(label, _)| label).collect();
    assert_eq!(labels, vec!["18 - 24", "25 - 34", "Unnamed: 0"]);
    let option = &age.questions()[0].options[0];
    assert_eq!(option.text, "One");
    assert_eq!(
        option.age_segments().and_then(|counts| counts.get("18 - 24").cloned().flatten()),
        Some(RawValue::Number(20.0))
    );
    let user = &study.created_by.as_ref().expect("creator").user;
    assert_eq!(user.email, "owner@example.com");
    assert_eq!(user.company_name, None);
}

#[test]
fn minimal_study_document_defaults() {
    let study: StudyDocument =
        serde_json::from_str(r#"{"_id": "x", "studyKeywords": null}"#).expect("parse study");
    assert!(study.keywords.is_empty());
    assert!(study.study_data.is_none());
    assert_eq!(study.segment_keys().count(), 0);
}

#[test]
fn null_segment_sections_default() {
    let study: StudyDocument = serde_json::from_str(
        r#"{"_id": "x", "studyData": {"(T) Gender": {"Base Values": null, "Data": {"Questions": null}}}}"#,
    )
    .expect("parse study");
    let gender = study.segment("(T) Gender").expect("gender");
    assert!(gender.base_values.is_empty());
    assert!(gender.questions().is_empty());
}

#[test]
fn study_document_round_trips() {
    let study: StudyDocument = serde_json::from_str(STUDY_JSON).expect("parse study");
    let json = serde_json::to_string(&study).expect("serialize study");
    let round: StudyDocument = serde_json::from_str(&json).expect("deserialize study");
    assert_eq!(round, study);
}

#[test]
fn presentation_options_builder() {
    let options = PresentationOptions::new()
        .with_view_mode(ViewMode::TopDown)
        .with_missing_placeholder("-");
    assert_eq!(options.view_mode, ViewMode::TopDown);
    assert_eq!(options.missing_placeholder, "-");
    assert_eq!(PresentationOptions::default().missing_placeholder, "N/A");
}
