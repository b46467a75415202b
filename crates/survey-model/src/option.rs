//! Answer options and their per-segment breakdowns.
//!
//! On the wire an option is a flat object: `optiontext`, an optional `Total`,
//! and any number of nested breakdown structures whose key names the segment
//! type they belong to (`"Age Segments"`, `"Mindsets"`, ...). Which of them are
//! present depends on the segment tab the option was read from, so they are
//! modelled as a list of [`Breakdown`] variants rather than optional fields.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::value::{RawValue, null_as_default};

/// Label to nullable count.
pub type LabelCounts = IndexMap<String, Option<RawValue>>;

pub const AGE_SEGMENTS_KEY: &str = "Age Segments";
pub const GENDER_SEGMENTS_KEY: &str = "Gender Segments";
pub const MINDSETS_KEY: &str = "Mindsets";
pub const PRELIM_ANSWER_SEGMENTS_KEY: &str = "Prelim-Answer Segments";
const NAMED_SEGMENTS_SUFFIX: &str = " Segments";

/// A segment-type specific breakdown of one option's responses.
#[derive(Debug, Clone, PartialEq)]
pub enum Breakdown {
    /// `"Age Segments"`: age bracket to count.
    Age(LabelCounts),
    /// `"Gender Segments"`: gender to count.
    Gender(LabelCounts),
    /// `"Mindsets"`: one record per mindset-series entry.
    Mindsets(Vec<LabelCounts>),
    /// `"Prelim-Answer Segments"`: one record per preliminary answer.
    PrelimAnswers(Vec<LabelCounts>),
    /// Any other `"<segment> Segments"` object.
    Named {
        segment: String,
        counts: LabelCounts,
    },
}

impl Breakdown {
    /// The wire key this breakdown is stored under.
    pub fn wire_key(&self) -> String {
        match self {
            Breakdown::Age(_) => AGE_SEGMENTS_KEY.to_string(),
            Breakdown::Gender(_) => GENDER_SEGMENTS_KEY.to_string(),
            Breakdown::Mindsets(_) => MINDSETS_KEY.to_string(),
            Breakdown::PrelimAnswers(_) => PRELIM_ANSWER_SEGMENTS_KEY.to_string(),
            Breakdown::Named { segment, .. } => format!("{segment}{NAMED_SEGMENTS_SUFFIX}"),
        }
    }

    fn from_wire(key: &str, value: &serde_json::Value) -> Option<Self> {
        match key {
            AGE_SEGMENTS_KEY => LabelCounts::deserialize(value).ok().map(Breakdown::Age),
            GENDER_SEGMENTS_KEY => LabelCounts::deserialize(value).ok().map(Breakdown::Gender),
            MINDSETS_KEY => Vec::<LabelCounts>::deserialize(value)
                .ok()
                .map(Breakdown::Mindsets),
            PRELIM_ANSWER_SEGMENTS_KEY => Vec::<LabelCounts>::deserialize(value)
                .ok()
                .map(Breakdown::PrelimAnswers),
            _ => {
                let segment = key.strip_suffix(NAMED_SEGMENTS_SUFFIX)?;
                let counts = LabelCounts::deserialize(value).ok()?;
                Some(Breakdown::Named {
                    segment: segment.to_string(),
                    counts,
                })
            }
        }
    }

    fn to_wire(&self) -> serde_json::Result<serde_json::Value> {
        match self {
            Breakdown::Age(counts) | Breakdown::Gender(counts) => serde_json::to_value(counts),
            Breakdown::Mindsets(records) | Breakdown::PrelimAnswers(records) => {
                serde_json::to_value(records)
            }
            Breakdown::Named { counts, .. } => serde_json::to_value(counts),
        }
    }
}

/// One answer option of a question.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireOption", into = "WireOption")]
pub struct AnswerOption {
    pub text: String,
    pub total: Option<RawValue>,
    pub breakdowns: Vec<Breakdown>,
    /// Keys that are not a recognised breakdown, kept verbatim.
    pub extra: IndexMap<String, serde_json::Value>,
}

impl AnswerOption {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_total(mut self, total: impl Into<RawValue>) -> Self {
        self.total = Some(total.into());
        self
    }

    pub fn with_breakdown(mut self, breakdown: Breakdown) -> Self {
        self.breakdowns.push(breakdown);
        self
    }

    pub fn age_segments(&self) -> Option<&LabelCounts> {
        self.breakdowns.iter().find_map(|breakdown| match breakdown {
            Breakdown::Age(counts) => Some(counts),
            _ => None,
        })
    }

    pub fn gender_segments(&self) -> Option<&LabelCounts> {
        self.breakdowns.iter().find_map(|breakdown| match breakdown {
            Breakdown::Gender(counts) => Some(counts),
            _ => None,
        })
    }

    pub fn mindsets(&self) -> Option<&[LabelCounts]> {
        self.breakdowns.iter().find_map(|breakdown| match breakdown {
            Breakdown::Mindsets(records) => Some(records.as_slice()),
            _ => None,
        })
    }

    pub fn prelim_answers(&self) -> Option<&[LabelCounts]> {
        self.breakdowns.iter().find_map(|breakdown| match breakdown {
            Breakdown::PrelimAnswers(records) => Some(records.as_slice()),
            _ => None,
        })
    }

    /// The `"<segment> Segments"` breakdown for an otherwise unmodelled segment type.
    pub fn named_segments(&self, segment: &str) -> Option<&LabelCounts> {
        self.breakdowns.iter().find_map(|breakdown| match breakdown {
            Breakdown::Named {
                segment: name,
                counts,
            } if name == segment => Some(counts),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireOption {
    #[serde(default, deserialize_with = "null_as_default")]
    optiontext: String,
    #[serde(rename = "Total", default, skip_serializing_if = "Option::is_none")]
    total: Option<RawValue>,
    #[serde(flatten)]
    rest: IndexMap<String, serde_json::Value>,
}

impl From<WireOption> for AnswerOption {
    fn from(wire: WireOption) -> Self {
        let mut breakdowns = Vec::new();
        let mut extra = IndexMap::new();
        for (key, value) in wire.rest {
            match Breakdown::from_wire(&key, &value) {
                Some(breakdown) => breakdowns.push(breakdown),
                None => {
                    extra.insert(key, value);
                }
            }
        }
        Self {
            text: wire.optiontext,
            total: wire.total,
            breakdowns,
            extra,
        }
    }
}

impl From<AnswerOption> for WireOption {
    fn from(option: AnswerOption) -> Self {
        let mut rest = IndexMap::new();
        for breakdown in &option.breakdowns {
            if let Ok(value) = breakdown.to_wire() {
                rest.insert(breakdown.wire_key(), value);
            }
        }
        rest.extend(option.extra);
        Self {
            optiontext: option.text,
            total: option.total,
            rest,
        }
    }
}
