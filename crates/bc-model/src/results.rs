//! The derived result record.

use serde::{Deserialize, Serialize};

use crate::inputs::PlantInputs;

/// Everything the model derives for one operating point, plus an echo of
/// the inputs so downstream consumers (reports, exports) never need to
/// re-thread the original call site.
///
/// The record is fully determined by the input tuple: same inputs, same
/// bits. It is created fresh on every evaluation and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlantResults {
    // Mass partition
    /// Dry (fuel) fraction of the feed, kg/s
    pub dry_mass_kg_s: f64,
    /// Moisture (steam-loop) fraction of the feed, kg/s
    pub moisture_mass_kg_s: f64,

    // Brayton state points
    pub t1_k: f64,
    pub t2_k: f64,
    pub t3_k: f64,
    pub t4_k: f64,
    pub p1_mpa: f64,
    pub p2_mpa: f64,

    // Rankine state points
    pub h1_kj_kg: f64,
    pub h2_kj_kg: f64,
    pub h3_kj_kg: f64,
    pub h4_kj_kg: f64,

    // Heat duties
    /// Fuel chemical energy released in the combustor, kW
    pub q_in_brayton_kw: f64,
    /// Boiler heat input to the steam loop, kW
    pub q_in_rankine_kw: f64,

    // Work terms
    pub w_compressor_kw: f64,
    pub w_turbine_brayton_kw: f64,
    pub w_turbine_rankine_kw: f64,
    pub w_pump_kw: f64,
    pub w_net_brayton_kw: f64,

    // Efficiencies (0.0 when the respective heat input is non-positive)
    pub eta_brayton: f64,
    pub eta_rankine: f64,
    pub eta_combined: f64,

    // Power outputs (negative net work clamps to zero)
    pub brayton_power_kw: f64,
    pub rankine_power_kw: f64,
    pub total_power_kw: f64,

    // Energy-flow summary
    pub useful_work_kw: f64,
    pub losses_kw: f64,

    /// Fuel burned by the gas turbine, kg/hr
    pub fuel_consumption_kg_hr: f64,

    // AD-HTC byproduct correlations
    pub gas_a_kg_hr: f64,
    pub gas_b_kg_hr: f64,
    pub methane_kg_hr: f64,
    pub htc_heating_kj: f64,

    /// Echo of the invocation inputs
    pub inputs: PlantInputs,
}
