//! Scenario schema definitions.

use bc_model::PlantInputs;
use serde::{Deserialize, Serialize};

pub const SCENARIO_VERSION: u32 = 1;

/// A scenario file: a named collection of operating-point cases.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cases: Vec<CaseDef>,
}

/// One named operating point.
///
/// `inputs` defaults field-by-field to the reference operating point, so a
/// case only has to spell out its deviations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseDef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub inputs: PlantInputs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_inputs_default_to_reference_point() {
        let yaml = r#"
id: c1
name: Reference
"#;
        let case: CaseDef = serde_yaml::from_str(yaml).expect("parse failed");
        assert_eq!(case.inputs, PlantInputs::default());
    }

    #[test]
    fn case_inputs_partial_override() {
        let yaml = r#"
id: c2
name: Hot firing
inputs:
  turbine_inlet_temp_k: 1600.0
"#;
        let case: CaseDef = serde_yaml::from_str(yaml).expect("parse failed");
        assert_eq!(case.inputs.turbine_inlet_temp_k, 1600.0);
        assert_eq!(case.inputs.pressure_ratio, 8.0);
    }
}
