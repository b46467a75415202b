//! Study list helpers: filtering, tag catalog, status badges, and dates.

pub mod dates;
pub mod error;
pub mod filter;
pub mod status;

pub use dates::{format_date, parse_filter_date, parse_study_date};
pub use error::{Result, StudiesError};
pub use filter::{StudyFilter, all_tags, filter_studies};
pub use status::{VisualStatus, visual_status};
