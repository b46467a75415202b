use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::option::AnswerOption;
use crate::value::{RawValue, null_as_default};

/// Mapping from raw segment key (e.g. `"(B) Age"`) to segment.
///
/// Key order follows the source document.
pub type StudyData = IndexMap<String, Segment>;

/// One surveyed study as returned by the studies API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "studyTitle", default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(rename = "studyStatus", default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(rename = "studyRespondents", default)]
    pub respondents: Option<u64>,
    #[serde(rename = "studyStarted", default)]
    pub started: Option<String>,
    #[serde(rename = "studyEnded", default)]
    pub ended: Option<String>,
    #[serde(rename = "studyKeywords", default, deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,
    #[serde(rename = "studyCreatedBy", default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<StudyCreatedBy>,
    #[serde(rename = "studyData", default)]
    pub study_data: Option<StudyData>,
}

impl StudyDocument {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            status: String::new(),
            respondents: None,
            started: None,
            ended: None,
            keywords: Vec::new(),
            created_by: None,
            study_data: None,
        }
    }

    /// Look up a segment by its raw key.
    pub fn segment(&self, raw_key: &str) -> Option<&Segment> {
        self.study_data.as_ref()?.get(raw_key)
    }

    /// Raw segment keys in document order.
    pub fn segment_keys(&self) -> impl Iterator<Item = &str> {
        self.study_data
            .iter()
            .flat_map(|data| data.keys().map(String::as_str))
    }

    pub fn has_keyword(&self, tag: &str) -> bool {
        self.keywords.iter().any(|keyword| keyword == tag)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudyCreatedBy {
    #[serde(default)]
    pub user: User,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub auth_type: String,
    #[serde(rename = "companyName", default)]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(rename = "firstName", default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: Option<String>,
}

/// A named slice of survey results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(rename = "Base Values", default, deserialize_with = "null_as_default")]
    pub base_values: BaseValues,
    #[serde(rename = "Data", default, deserialize_with = "null_as_default")]
    pub data: DataContent,
}

impl Segment {
    pub fn questions(&self) -> &[Question] {
        &self.data.questions
    }
}

/// Label to nullable count; the denominators behind a segment's columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaseValues(IndexMap<String, Option<RawValue>>);

impl BaseValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, value: Option<RawValue>) {
        self.0.insert(label.into(), value);
    }

    /// Non-null value for `label`.
    pub fn get(&self, label: &str) -> Option<&RawValue> {
        self.0.get(label).and_then(Option::as_ref)
    }

    /// All entries in document order, nulls included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&RawValue>)> {
        self.0
            .iter()
            .map(|(label, value)| (label.as_str(), value.as_ref()))
    }

    /// Entries with a non-null value, in document order.
    pub fn non_null(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.0
            .iter()
            .filter_map(|(label, value)| value.as_ref().map(|value| (label.as_str(), value)))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Option<RawValue>)> for BaseValues {
    fn from_iter<I: IntoIterator<Item = (K, Option<RawValue>)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(label, value)| (label.into(), value))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataContent {
    #[serde(rename = "Base Size", default, skip_serializing_if = "Option::is_none")]
    pub base_size: Option<RawValue>,
    #[serde(rename = "Questions", default, deserialize_with = "null_as_default")]
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "Question", default, deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn new(text: impl Into<String>, options: Vec<AnswerOption>) -> Self {
        Self {
            text: text.into(),
            options,
        }
    }
}
