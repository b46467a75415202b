//! Catalog, selection, and column derivation over a full study document.

mod common;

use proptest::prelude::*;

use survey_model::{
    BaseValues, DisplayMode, PresentationOptions, RawValue, Segment, StudyData, StudyDocument,
    ViewMode,
};
use survey_segments::{
    QuestionProjection, Selection, SelectionState, SegmentColumn, StudyView, build_catalog,
    derive_columns, display_name, find_by_name, overall_base_size, reconcile,
};

fn names(view_mode: ViewMode) -> Vec<String> {
    let study = common::study();
    build_catalog(study.study_data.as_ref(), view_mode)
        .into_iter()
        .map(|tab| tab.name)
        .collect()
}

#[test]
fn catalog_per_view_mode() {
    assert_eq!(
        names(ViewMode::BottomUp),
        vec!["Overall", "Mindset 1 of 2", "Age", "Gender"]
    );
    assert_eq!(names(ViewMode::TopDown), vec!["Overall", "Age"]);
    assert_eq!(names(ViewMode::ResponseTime), vec!["Age", "Prelim"]);
}

#[test]
fn catalog_snapshot() {
    let study = common::study();
    let catalog = build_catalog(study.study_data.as_ref(), ViewMode::TopDown);
    insta::assert_json_snapshot!(catalog, @r#"
    [
      {
        "key": "(T) Overall",
        "name": "Overall",
        "parent_key": "(T) Overall",
        "is_mindset_sub_tab": false,
        "kind": "Overall"
      },
      {
        "key": "(T) Age Groups",
        "name": "Age",
        "parent_key": "(T) Age Groups",
        "is_mindset_sub_tab": false,
        "kind": "Age"
      }
    ]
    "#);
}

#[test]
fn null_mindset_series_gets_no_sub_tab() {
    let study = common::study();
    let catalog = build_catalog(study.study_data.as_ref(), ViewMode::BottomUp);
    let sub_tab = find_by_name(&catalog, "Mindset 1 of 2").expect("sub-tab");
    assert_eq!(sub_tab.parent_key, "(B) Mindsets");
    assert!(find_by_name(&catalog, "Mindset 1 of 3").is_none());
    assert!(catalog.iter().all(|tab| tab.name != "Combined"));
}

#[test]
fn mindsets_without_known_series_get_no_tab() {
    let study: StudyDocument = serde_json::from_str(
        r#"{
            "_id": "four-way",
            "studyData": {
                "(B) Mindsets": {"Base Values": {"Mindset 1 of 4": 10, "Mindset 2 of 4": 5}},
                "(B) Gender": {"Base Values": {"Male": 3, "female": 4}}
            }
        }"#,
    )
    .unwrap();
    let catalog = build_catalog(study.study_data.as_ref(), ViewMode::BottomUp);
    let names: Vec<&str> = catalog.iter().map(|tab| tab.name.as_str()).collect();
    assert_eq!(names, vec!["Gender"]);
    assert!(catalog.iter().all(|tab| tab.parent_key != "(B) Mindsets"));
}

#[test]
fn swapped_document_keeps_surviving_tab() {
    let first = common::study();
    let mut refreshed = common::study();
    refreshed.respondents = Some(300);
    let mut without_gender = common::study();
    if let Some(data) = without_gender.study_data.as_mut() {
        data.shift_remove("(B) Gender");
    }

    let mut view = StudyView::new(Some(&first), &PresentationOptions::default());
    assert!(view.select_by_name("Gender"));

    view.set_study(Some(&refreshed));
    assert_eq!(view.active_key(), Some("(B) Gender"));
    assert_eq!(view.study().and_then(|study| study.respondents), Some(300));

    view.set_study(Some(&without_gender));
    assert_eq!(view.active_key(), Some("(B) Overall"));
    assert!(find_by_name(view.catalog(), "Gender").is_none());

    view.set_study(None);
    assert!(view.catalog().is_empty());
    assert_eq!(view.active_key(), None);
}

#[test]
fn display_mode_switch_keeps_open_tab() {
    let study = common::study();
    let mut view = StudyView::new(Some(&study), &PresentationOptions::default());
    assert!(view.select_by_name("Gender"));
    assert!(matches!(view.render().as_slice(), [QuestionProjection::Table(_)]));

    view.set_display_mode(DisplayMode::Chart);
    assert_eq!(view.display_mode(), DisplayMode::Chart);
    assert_eq!(view.active_key(), Some("(B) Gender"));
    assert!(matches!(view.render().as_slice(), [QuestionProjection::Chart(_)]));

    view.set_display_mode(DisplayMode::Heatmap);
    assert!(matches!(view.render().as_slice(), [QuestionProjection::Heatmap(_)]));
}

#[test]
fn age_columns_skip_placeholders() {
    let study = common::study();
    let catalog = build_catalog(study.study_data.as_ref(), ViewMode::BottomUp);
    let age = find_by_name(&catalog, "Age").expect("age tab");
    let segment = study.segment(&age.parent_key).expect("age segment");
    assert_eq!(
        derive_columns(age, segment),
        vec![
            SegmentColumn {
                header: "18 - 24".into(),
                count: 50.0
            },
            SegmentColumn {
                header: "25 - 34".into(),
                count: 40.0
            },
        ]
    );
}

#[test]
fn gender_columns_accept_only_male_and_female() {
    let study = common::study();
    let catalog = build_catalog(study.study_data.as_ref(), ViewMode::BottomUp);
    let gender = find_by_name(&catalog, "Gender").expect("gender tab");
    let segment = study.segment(&gender.parent_key).expect("gender segment");
    let headers: Vec<String> = derive_columns(gender, segment)
        .into_iter()
        .map(|column| column.header)
        .collect();
    assert_eq!(headers, vec!["Male", "female"]);
}

#[test]
fn retarget_by_name_across_view_modes() {
    let study = common::study();
    let mut view = StudyView::new(Some(&study), &PresentationOptions::default());
    assert_eq!(view.active_key(), Some("(B) Overall"));

    assert!(view.select_by_name("Age"));
    view.set_view_mode(ViewMode::TopDown);
    assert_eq!(view.active_key(), Some("(T) Age Groups"));
    assert_eq!(view.selection().pending_target(), None);

    view.set_view_mode(ViewMode::BottomUp);
    assert!(view.select_by_name("Gender"));
    view.set_view_mode(ViewMode::TopDown);
    assert_eq!(view.active_key(), Some("(T) Overall"));

    view.set_view_mode(ViewMode::BottomUp);
    assert!(view.select_by_name("Mindset 1 of 2"));
    view.set_view_mode(ViewMode::ResponseTime);
    assert_eq!(view.active_key(), Some("(R) Age"));
}

#[test]
fn only_latest_retarget_counts() {
    let study = common::study();
    let data = study.study_data.as_ref();
    let bottom_up = build_catalog(data, ViewMode::BottomUp);
    let top_down = build_catalog(data, ViewMode::TopDown);

    let selection = Selection::new()
        .select("(B) Gender", &bottom_up)
        .on_view_mode_change(&bottom_up)
        .select("(B) Age Groups", &bottom_up);
    // The explicit selection dropped the first target.
    assert_eq!(selection.state(), SelectionState::Selected("(B) Age Groups"));

    let selection = selection
        .on_view_mode_change(&bottom_up)
        .on_view_mode_change(&bottom_up);
    assert_eq!(selection.pending_target(), Some("Age"));
    let selection = selection.on_catalog(&top_down);
    assert_eq!(selection.active_key(), Some("(T) Age Groups"));
}

#[test]
fn selected_key_survives_unrelated_recomputation() {
    let study = common::study();
    let catalog = build_catalog(study.study_data.as_ref(), ViewMode::BottomUp);
    let (key, pending) = reconcile(&catalog, None, Some("(B) Gender"));
    assert_eq!(key.as_deref(), Some("(B) Gender"));
    assert_eq!(pending, None);
}

#[test]
fn overall_base_size_fallbacks() {
    let mut study = common::study();
    assert_eq!(overall_base_size(Some(&study), ViewMode::BottomUp), 240.0);

    study.respondents = Some(180);
    assert_eq!(overall_base_size(Some(&study), ViewMode::TopDown), 180.0);

    if let Some(overall) = study
        .study_data
        .as_mut()
        .and_then(|data| data.get_mut("(B) Overall"))
    {
        overall.data.base_size = Some(RawValue::Text("n/a".into()));
    }
    assert_eq!(overall_base_size(Some(&study), ViewMode::BottomUp), 180.0);

    study.respondents = None;
    assert_eq!(overall_base_size(Some(&study), ViewMode::ResponseTime), 0.0);
    assert_eq!(overall_base_size(None, ViewMode::BottomUp), 0.0);
}

#[test]
fn prelim_tab_reads_age_columns_of_its_view_mode() {
    let study = common::study();
    let options = PresentationOptions::default().with_view_mode(ViewMode::ResponseTime);
    let mut view = StudyView::new(Some(&study), &options);
    assert!(view.select_by_name("Prelim"));

    let headers: Vec<String> = view.columns().into_iter().map(|column| column.header).collect();
    assert_eq!(headers, vec!["Yes", "No"]);
    let age_headers: Vec<String> = view
        .prelim_age_columns()
        .into_iter()
        .map(|column| column.header)
        .collect();
    assert_eq!(age_headers, vec!["35 - 44"]);
}

fn segment_for(labels: &[String]) -> Segment {
    Segment {
        base_values: labels
            .iter()
            .map(|label| (label.clone(), Some(RawValue::from(1.0))))
            .collect::<BaseValues>(),
        ..Segment::default()
    }
}

fn study_data_strategy() -> impl Strategy<Value = StudyData> {
    let prefix = prop::sample::select(vec!["(B)", "(T)", "(R)"]);
    let name = prop::sample::select(vec![
        "Overall",
        "Age Groups",
        "Gender",
        "Mindsets",
        "Combined",
        "Prelim-Answer",
        "Region Segments",
        "income",
    ]);
    let labels = prop::collection::vec(
        prop::sample::select(vec!["Mindset 1 of 2", "Mindset 1 of 3", "Total", "18 - 24"]),
        0..4,
    );
    prop::collection::vec((prefix, name, labels), 0..12).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(prefix, name, labels)| {
                let labels: Vec<String> = labels.into_iter().map(String::from).collect();
                (format!("{prefix} {name}"), segment_for(&labels))
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn display_name_ignores_view_mode_prefix(name in "[A-Za-z -]{0,16}") {
        let bottom_up = display_name(&format!("(B) {name}"));
        prop_assert_eq!(&bottom_up, &display_name(&format!("(T) {name}")));
        prop_assert_eq!(&bottom_up, &display_name(&format!("(R) {name}")));
        prop_assert!(!bottom_up.contains("(B)"));
    }

    #[test]
    fn catalog_is_deterministic_and_overall_leads(
        data in study_data_strategy(),
        view_mode in prop::sample::select(ViewMode::ALL.to_vec()),
    ) {
        let first = build_catalog(Some(&data), view_mode);
        let second = build_catalog(Some(&data), view_mode);
        prop_assert_eq!(&first, &second);

        if let Some(position) = first.iter().position(|tab| tab.name == "Overall") {
            prop_assert_eq!(position, 0);
        }
        prop_assert!(first.iter().all(|tab| tab.name != "Combined"));
        prop_assert!(first.iter().all(|tab| tab.key.starts_with(view_mode.key_prefix())));
    }

    #[test]
    fn reconcile_always_lands_in_catalog(
        data in study_data_strategy(),
        target in prop::option::of(prop::sample::select(vec!["Overall", "Age", "Gender", "Nope"])),
    ) {
        let catalog = build_catalog(Some(&data), ViewMode::BottomUp);
        let (key, pending) = reconcile(&catalog, target, Some("(X) stale"));
        prop_assert!(pending.is_none());
        match key {
            Some(key) => prop_assert!(catalog.iter().any(|tab| tab.key == key)),
            None => prop_assert!(catalog.is_empty()),
        }
    }
}
