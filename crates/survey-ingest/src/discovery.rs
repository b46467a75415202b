//! Payload discovery in export folders.

use std::path::{Path, PathBuf};

use tracing::warn;

use survey_model::StudyDocument;

use crate::error::{IngestError, Result};
use crate::payload::load_studies;

/// Lists all JSON files in a directory, sorted by filename.
pub fn list_payload_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::FileNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Load studies from a payload file, or from every payload in a directory.
///
/// Duplicate ids keep the first study seen.
pub fn load_source(path: &Path) -> Result<Vec<StudyDocument>> {
    if !path.is_dir() {
        return load_studies(path);
    }

    let mut studies: Vec<StudyDocument> = Vec::new();
    for file in list_payload_files(path)? {
        for study in load_studies(&file)? {
            if studies.iter().any(|existing| existing.id == study.id) {
                warn!(study_id = %study.id, file = %file.display(), "duplicate study id skipped");
                continue;
            }
            studies.push(study);
        }
    }
    Ok(studies)
}
