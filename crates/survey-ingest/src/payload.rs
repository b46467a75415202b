//! Studies API payload parsing.
//!
//! The endpoint answers either `{"studies": [...]}` or a bare array. A single
//! document object is accepted too, as written by per-study exports.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use survey_model::StudyDocument;

use crate::error::{IngestError, Result};

const INLINE_ORIGIN: &str = "<input>";

#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope {
    Wrapped { studies: Vec<StudyDocument> },
    List(Vec<StudyDocument>),
    Single(Box<StudyDocument>),
}

impl Envelope {
    fn into_studies(self) -> Vec<StudyDocument> {
        match self {
            Envelope::Wrapped { studies } | Envelope::List(studies) => studies,
            Envelope::Single(study) => vec![*study],
        }
    }
}

fn parse_with_origin(json: &str, origin: &str) -> Result<Vec<StudyDocument>> {
    // Untagged errors carry no detail; re-parse the likely shape for one.
    match serde_json::from_str::<Envelope>(json) {
        Ok(envelope) => Ok(envelope.into_studies()),
        Err(_) => Err(IngestError::Parse {
            origin: origin.to_string(),
            source: shape_error(json),
        }),
    }
}

fn shape_error(json: &str) -> serde_json::Error {
    let value: serde_json::Value = match serde_json::from_str(json) {
        Ok(value) => value,
        Err(err) => return err,
    };
    let result = match value {
        serde_json::Value::Array(_) => serde_json::from_value::<Vec<StudyDocument>>(value).map(drop),
        serde_json::Value::Object(ref map) if map.contains_key("studies") => {
            serde_json::from_value::<Vec<StudyDocument>>(map["studies"].clone()).map(drop)
        }
        other => serde_json::from_value::<StudyDocument>(other).map(drop),
    };
    match result {
        Err(err) => err,
        Ok(()) => serde_json::Error::io(std::io::Error::other("unrecognised payload shape")),
    }
}

/// Parse a payload held in memory.
pub fn parse_studies(json: &str) -> Result<Vec<StudyDocument>> {
    parse_with_origin(json, INLINE_ORIGIN)
}

/// Parse a payload from a reader.
pub fn read_studies<R: Read>(mut reader: R) -> Result<Vec<StudyDocument>> {
    let mut json = String::new();
    reader
        .read_to_string(&mut json)
        .map_err(|source| IngestError::FileRead {
            path: INLINE_ORIGIN.into(),
            source,
        })?;
    parse_studies(&json)
}

/// Load every study from a payload file.
pub fn load_studies(path: &Path) -> Result<Vec<StudyDocument>> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let json = std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let studies = parse_with_origin(&json, &path.display().to_string())?;
    info!(path = %path.display(), study_count = studies.len(), "studies loaded");
    Ok(studies)
}

/// Find a study by its `_id`.
pub fn find_study<'a>(studies: &'a [StudyDocument], id: &str) -> Result<&'a StudyDocument> {
    let study = studies
        .iter()
        .find(|study| study.id == id)
        .ok_or_else(|| IngestError::StudyNotFound { id: id.to_string() })?;
    debug!(study_id = id, title = %study.title, "study resolved");
    Ok(study)
}
