//! bc-report: analysis reports and cycle diagram data.

pub mod diagrams;
pub mod hash;
pub mod report;

pub use hash::compute_analysis_id;
pub use report::{AnalysisReport, ReportSection};

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
