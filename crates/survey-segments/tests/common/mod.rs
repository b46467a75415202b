use survey_model::StudyDocument;

pub const STUDY_JSON: &str = r#"{
    "_id": "studio-42",
    "studyTitle": "Snack preferences",
    "studyStatus": "Completed",
    "studyRespondents": 240,
    "studyData": {
        "(B) Gender": {
            "Base Values": {"Male": 130, "female": 110, "Other": 4},
            "Data": {
                "Questions": [
                    {
                        "Question": "Do you snack at night?",
                        "options": [
                            {"optiontext": "Yes", "Total": 150, "Gender Segments": {"Male": 80, "female": 70}},
                            {"optiontext": "No", "Total": 90, "Gender Segments": {"Male": 50}}
                        ]
                    }
                ]
            }
        },
        "(B) Overall": {
            "Base Values": {"Total": 240},
            "Data": {
                "Base Size": 240,
                "Questions": [
                    {
                        "Question": "Do you snack at night?",
                        "options": [
                            {"optiontext": "Yes", "Total": 150},
                            {"optiontext": "No", "Total": 90}
                        ]
                    }
                ]
            }
        },
        "(B) Mindsets": {
            "Base Values": {"Mindset 1 of 2": 120, "Mindset 2 of 2": 120, "Mindset 1 of 3": null},
            "Data": {
                "Questions": [
                    {
                        "Question": "Do you snack at night?",
                        "options": [
                            {"optiontext": "Yes", "Mindsets": [{"Mindset 1 of 2": 70}, {"Mindset 2 of 2": 80}]}
                        ]
                    }
                ]
            }
        },
        "(B) Age Groups": {
            "Base Values": {"18 - 24": 50, "25 - 34": 40, "Unnamed: 0": 10},
            "Data": {
                "Questions": [
                    {
                        "Question": "Do you snack at night?",
                        "options": [
                            {"optiontext": "Yes", "Age Segments": {"18 - 24": 30, "25 - 34": "20"}},
                            {"optiontext": "No", "Age Segments": {"18 - 24": 20}}
                        ]
                    }
                ]
            }
        },
        "(B) Combined": {
            "Base Values": {"Total": 240},
            "Data": {"Questions": []}
        },
        "(T) Overall": {
            "Base Values": {"Total": 200},
            "Data": {"Questions": []}
        },
        "(T) Age Groups": {
            "Base Values": {"18 - 24": 45, "65+": 12},
            "Data": {"Questions": []}
        },
        "(R) Prelim-Answer": {
            "Base Values": {"Yes": 30, "No": 20, "Unnamed: 3": 1},
            "Data": {
                "Questions": [
                    {
                        "Question": "Do you snack at work?",
                        "options": [
                            {"optiontext": "Often", "Prelim-Answer Segments": [{"Yes": 12}, {"No": "8"}, {"Yes": 99}]},
                            {"optiontext": "Never", "Prelim-Answer Segments": [{"No": null}, {"No": 4}]}
                        ]
                    }
                ]
            }
        },
        "(R) Age": {
            "Base Values": {"35 - 44": 25, "Unnamed: 1": 5},
            "Data": {"Questions": []}
        }
    }
}"#;

pub fn study() -> StudyDocument {
    serde_json::from_str(STUDY_JSON).expect("parse fixture study")
}
