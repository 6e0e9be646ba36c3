//! Plant operating inputs.

use serde::{Deserialize, Serialize};

/// One operating point of the hybrid plant.
///
/// All fields are plain scalars; the unit is part of the field name.
/// `Default` is the reference operating point the plant was commissioned
/// at, so a scenario case only needs to spell out its deviations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlantInputs {
    /// Total wet biomass feed, kg/s
    pub biomass_flow_kg_s: f64,
    /// Fraction of the feed that is moisture (0..=1)
    pub moisture_fraction: f64,
    /// Lower heating value of the dry fraction, MJ/kg
    pub lhv_mj_kg: f64,
    /// Rankine boiler pressure, MPa
    pub boiler_pressure_mpa: f64,
    /// Rankine boiler outlet temperature, °C
    pub boiler_temperature_c: f64,
    /// Rankine condenser pressure, MPa
    pub condenser_pressure_mpa: f64,
    /// Isentropic efficiency shared by both cycles' turbines
    pub turbine_efficiency: f64,
    /// Brayton compressor pressure ratio
    pub pressure_ratio: f64,
    /// Brayton compressor isentropic efficiency
    pub compressor_efficiency: f64,
    /// Brayton turbine inlet temperature (T3), K
    pub turbine_inlet_temp_k: f64,
}

impl Default for PlantInputs {
    fn default() -> Self {
        Self {
            biomass_flow_kg_s: 10.0,
            moisture_fraction: 0.25,
            lhv_mj_kg: 18.0,
            boiler_pressure_mpa: 8.0,
            boiler_temperature_c: 500.0,
            condenser_pressure_mpa: 0.01,
            turbine_efficiency: 0.85,
            pressure_ratio: 8.0,
            compressor_efficiency: 0.88,
            turbine_inlet_temp_k: 1200.0,
        }
    }
}

/// Documented input domain, as (min, max) inclusive bounds.
///
/// [`evaluate`](crate::evaluate) itself is total and does not check these;
/// scenario validation enforces them before a case reaches the model.
pub mod domain {
    pub const BIOMASS_FLOW_KG_S: (f64, f64) = (0.01, 1000.0);
    pub const MOISTURE_FRACTION: (f64, f64) = (0.0, 1.0);
    pub const LHV_MJ_KG: (f64, f64) = (5.0, 30.0);
    pub const BOILER_PRESSURE_MPA: (f64, f64) = (0.1, 30.0);
    pub const BOILER_TEMPERATURE_C: (f64, f64) = (200.0, 700.0);
    pub const CONDENSER_PRESSURE_MPA: (f64, f64) = (0.001, 1.0);
    pub const TURBINE_EFFICIENCY: (f64, f64) = (0.5, 1.0);
    pub const PRESSURE_RATIO: (f64, f64) = (2.0, 20.0);
    pub const COMPRESSOR_EFFICIENCY: (f64, f64) = (0.5, 1.0);
    pub const TURBINE_INLET_TEMP_K: (f64, f64) = (800.0, 2000.0);
}
