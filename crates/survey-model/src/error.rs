use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown view mode: {0} (expected B, T, or R)")]
    InvalidViewMode(String),
    #[error("unknown display mode: {0} (expected table, chart, or heatmap)")]
    InvalidDisplayMode(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
