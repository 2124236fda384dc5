pub mod csv;
pub mod json;
pub mod text;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
