//! Error types for the bc-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error("Failed to read scenario file: {path}")]
    ScenarioFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Scenario validation failed: {0}")]
    Validation(String),

    #[error("Case not found: {0}")]
    CaseNotFound(String),

    #[error("Invalid sweep: {message}")]
    InvalidSweep { message: String },

    #[error("Unknown output key: {0}")]
    UnknownOutput(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for bc-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<bc_scenario::ScenarioError> for AppError {
    fn from(err: bc_scenario::ScenarioError) -> Self {
        AppError::Scenario(err.to_string())
    }
}

impl From<bc_scenario::ValidationError> for AppError {
    fn from(err: bc_scenario::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<bc_report::ReportError> for AppError {
    fn from(err: bc_report::ReportError) -> Self {
        AppError::Report(err.to_string())
    }
}
