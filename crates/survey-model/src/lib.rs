//! Data model for fetched survey studies.
//!
//! The types mirror the JSON returned by the studies API. Every structure is
//! read-only once deserialized; derivations live in `survey-segments`.

pub mod enums;
pub mod error;
pub mod option;
pub mod options;
pub mod study;
pub mod value;

pub use enums::{DisplayMode, ViewMode};
pub use error::{ModelError, Result};
pub use option::{AnswerOption, Breakdown, LabelCounts};
pub use options::{MISSING_CELL_PLACEHOLDER, PresentationOptions};
pub use study::{
    BaseValues, DataContent, Question, Segment, StudyCreatedBy, StudyData, StudyDocument, User,
};
pub use value::RawValue;
