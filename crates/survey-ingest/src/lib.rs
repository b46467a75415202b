//! Loading of studies API payloads.
//!
//! Payloads are the JSON bodies returned by the studies endpoint, saved to
//! disk. Fetching them is out of scope; this crate only reads and parses.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use survey_ingest::{find_study, load_source};
//!
//! let studies = load_source(Path::new("exports/studies.json"))?;
//! let study = find_study(&studies, "665f1c")?;
//! ```

mod discovery;
mod error;
mod payload;

// === Error Types ===
pub use error::{IngestError, Result};

// === Parsing ===
pub use payload::{find_study, load_studies, parse_studies, read_studies};

// === Discovery ===
pub use discovery::{list_payload_files, load_source};
