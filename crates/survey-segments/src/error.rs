use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SegmentsError {
    #[error("invalid color: {0} (expected #rrggbb)")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, SegmentsError>;
