//! Shared application service layer for biocycle.
//!
//! This crate provides a unified interface for frontends, centralizing
//! business logic for scenario management, analysis execution, parametric
//! sweeps, and output querying.

pub mod analysis_service;
pub mod error;
pub mod query;
pub mod scenario_service;
pub mod sweep;

// Re-export key types for convenience
pub use analysis_service::{
    analyze_case, analyze_inputs, AnalysisOptions, AnalysisRequest, AnalysisResponse,
    AnalysisTiming,
};
pub use error::{AppError, AppResult};
pub use query::{output_keys, output_value, select_outputs};
pub use scenario_service::{get_case, list_cases, load_scenario, validate_scenario, CaseSummary};
pub use sweep::{run_sweep, SweepParameter, SweepRequest, SweepSeries, SweepSpacing};
