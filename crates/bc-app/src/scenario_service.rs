//! Scenario loading, validation, and case introspection.

use std::path::Path;

use bc_scenario::schema::{CaseDef, Scenario};
use tracing::debug;

use crate::error::{AppError, AppResult};

/// Summary of a case for listing.
#[derive(Debug, Clone)]
pub struct CaseSummary {
    pub id: String,
    pub name: String,
    pub biomass_flow_kg_s: f64,
    pub moisture_fraction: f64,
    pub turbine_inlet_temp_k: f64,
}

/// Load a scenario from a YAML file.
///
/// Every case is checked against the documented input domain on the way
/// in, so downstream services can evaluate without re-validating.
pub fn load_scenario(path: &Path) -> AppResult<Scenario> {
    debug!("Loading scenario from {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| AppError::ScenarioFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let scenario: Scenario = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Scenario(format!("Failed to parse scenario YAML: {}", e)))?;

    bc_scenario::validate_scenario(&scenario)?;

    Ok(scenario)
}

/// Validate scenario structure beyond the schema rules.
pub fn validate_scenario(scenario: &Scenario) -> AppResult<()> {
    if scenario.cases.is_empty() {
        return Err(AppError::Validation(
            "Scenario must have at least one case".to_string(),
        ));
    }

    Ok(())
}

/// List all cases in the scenario with summaries.
pub fn list_cases(scenario: &Scenario) -> Vec<CaseSummary> {
    scenario
        .cases
        .iter()
        .map(|case| CaseSummary {
            id: case.id.clone(),
            name: case.name.clone(),
            biomass_flow_kg_s: case.inputs.biomass_flow_kg_s,
            moisture_fraction: case.inputs.moisture_fraction,
            turbine_inlet_temp_k: case.inputs.turbine_inlet_temp_k,
        })
        .collect()
}

/// Get a specific case by ID.
pub fn get_case<'a>(scenario: &'a Scenario, case_id: &str) -> AppResult<&'a CaseDef> {
    scenario
        .cases
        .iter()
        .find(|c| c.id == case_id)
        .ok_or_else(|| AppError::CaseNotFound(case_id.to_string()))
}
