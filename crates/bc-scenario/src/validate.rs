//! Scenario validation logic.

use crate::schema::{CaseDef, SCENARIO_VERSION, Scenario};
use bc_model::PlantInputs;
use bc_model::inputs::domain;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Empty ID in {context}")]
    EmptyId { context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version != SCENARIO_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    let mut case_ids = HashSet::new();
    for case in &scenario.cases {
        if case.id.is_empty() {
            return Err(ValidationError::EmptyId {
                context: "cases".to_string(),
            });
        }
        if !case_ids.insert(&case.id) {
            return Err(ValidationError::DuplicateId {
                id: case.id.clone(),
                context: "cases".to_string(),
            });
        }
        validate_case(case)?;
    }

    Ok(())
}

fn validate_case(case: &CaseDef) -> Result<(), ValidationError> {
    validate_inputs(&case.id, &case.inputs)
}

/// Check every input against the documented domain. `context` names the
/// offending case in error messages.
pub fn validate_inputs(context: &str, inputs: &PlantInputs) -> Result<(), ValidationError> {
    check_range(
        context,
        "biomass_flow_kg_s",
        inputs.biomass_flow_kg_s,
        domain::BIOMASS_FLOW_KG_S,
    )?;
    check_range(
        context,
        "moisture_fraction",
        inputs.moisture_fraction,
        domain::MOISTURE_FRACTION,
    )?;
    check_range(context, "lhv_mj_kg", inputs.lhv_mj_kg, domain::LHV_MJ_KG)?;
    check_range(
        context,
        "boiler_pressure_mpa",
        inputs.boiler_pressure_mpa,
        domain::BOILER_PRESSURE_MPA,
    )?;
    check_range(
        context,
        "boiler_temperature_c",
        inputs.boiler_temperature_c,
        domain::BOILER_TEMPERATURE_C,
    )?;
    check_range(
        context,
        "condenser_pressure_mpa",
        inputs.condenser_pressure_mpa,
        domain::CONDENSER_PRESSURE_MPA,
    )?;
    check_range(
        context,
        "turbine_efficiency",
        inputs.turbine_efficiency,
        domain::TURBINE_EFFICIENCY,
    )?;
    check_range(
        context,
        "pressure_ratio",
        inputs.pressure_ratio,
        domain::PRESSURE_RATIO,
    )?;
    check_range(
        context,
        "compressor_efficiency",
        inputs.compressor_efficiency,
        domain::COMPRESSOR_EFFICIENCY,
    )?;
    check_range(
        context,
        "turbine_inlet_temp_k",
        inputs.turbine_inlet_temp_k,
        domain::TURBINE_INLET_TEMP_K,
    )?;
    Ok(())
}

fn check_range(
    context: &str,
    field: &str,
    value: f64,
    (min, max): (f64, f64),
) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidValue {
            field: format!("{context}.{field}"),
            value: value.to_string(),
            reason: "must be finite".to_string(),
        });
    }
    if value < min || value > max {
        return Err(ValidationError::InvalidValue {
            field: format!("{context}.{field}"),
            value: value.to_string(),
            reason: format!("outside [{min}, {max}]"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_with(cases: Vec<CaseDef>) -> Scenario {
        Scenario {
            version: SCENARIO_VERSION,
            name: "test".to_string(),
            description: String::new(),
            cases,
        }
    }

    fn case(id: &str) -> CaseDef {
        CaseDef {
            id: id.to_string(),
            name: id.to_string(),
            inputs: PlantInputs::default(),
        }
    }

    #[test]
    fn default_case_passes() {
        let scenario = scenario_with(vec![case("c1")]);
        validate_scenario(&scenario).unwrap();
    }

    #[test]
    fn rejects_unknown_version() {
        let mut scenario = scenario_with(vec![]);
        scenario.version = 2;
        let err = validate_scenario(&scenario).unwrap_err();
        assert!(matches!(err, ValidationError::UnsupportedVersion { version: 2 }));
    }

    #[test]
    fn rejects_duplicate_case_ids() {
        let scenario = scenario_with(vec![case("c1"), case("c1")]);
        let err = validate_scenario(&scenario).unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateId { .. }));
    }

    #[test]
    fn rejects_empty_case_id() {
        let scenario = scenario_with(vec![case("")]);
        let err = validate_scenario(&scenario).unwrap_err();
        assert!(matches!(err, ValidationError::EmptyId { .. }));
    }

    #[test]
    fn rejects_out_of_range_input() {
        let mut bad = case("c1");
        bad.inputs.lhv_mj_kg = 55.0;
        let err = validate_scenario(&scenario_with(vec![bad])).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("lhv_mj_kg"));
        assert!(msg.contains("c1"));
    }

    #[test]
    fn rejects_non_finite_input() {
        let mut bad = case("c1");
        bad.inputs.pressure_ratio = f64::NAN;
        let err = validate_scenario(&scenario_with(vec![bad])).unwrap_err();
        assert!(err.to_string().contains("must be finite"));
    }

    #[test]
    fn range_check_is_inclusive_at_both_ends() {
        let mut edge = case("c1");
        edge.inputs.moisture_fraction = 1.0;
        edge.inputs.turbine_efficiency = 0.5;
        validate_scenario(&scenario_with(vec![edge])).unwrap();
    }
}
