//! Error types for the core pipeline

use thiserror::Error;

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(Debug, Error)]
pub enum ReportError {
    /// A `first_seen` / `last_seen` value that no supported format accepts.
    /// Fatal for the whole run.
    #[error("malformed timestamp in `{field}`: {value:?}")]
    MalformedTimestamp { field: &'static str, value: String },

    #[error("failed to render report: {0}")]
    Render(String),
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        ReportError::Render(err.to_string())
    }
}
