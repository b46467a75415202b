use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StudiesError {
    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, StudiesError>;
