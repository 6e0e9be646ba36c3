//! Rankine (steam) bottoming cycle.
//!
//! The moisture fraction of the feed is flashed through a conventional
//! pump → boiler → turbine → condenser loop. Enthalpies come from
//! fixed-point approximations anchored at a 500 °C / 8 MPa reference,
//! not from steam tables; the breakpoints and slopes below are part of
//! the model definition and are preserved exactly.
//!
//! ## Model
//!
//! ```text
//! w_pump = v_f * (P_boiler - P_cond) * 1000        (kJ/kg, incompressible)
//! h1     = saturated-liquid band of P_cond          (three-band step)
//! h2     = h1 + w_pump
//! h3     = 2800 + 2 * (T_boiler - 500)              (kJ/kg, T in °C)
//! Δh_s   = 1200 * (1 - 0.03 * (P_boiler - 8))       (kJ/kg)
//! h4     = h3 - η_t * Δh_s                          (clamped, see below)
//! ```
//!
//! The expansion outlet is clamped to `h1 + 50` whenever it would cross
//! below the condensate enthalpy, which keeps the turbine drop physical
//! for arbitrarily aggressive (out-of-domain) parameter combinations.
//!
//! Heat input and work terms scale with the moisture mass flow; cycle
//! efficiency is (turbine − pump) work over heat input, 0-guarded.

use bc_core::constants::KPA_PER_MPA;
use bc_core::ratio_or_zero;
use serde::{Deserialize, Serialize};

/// Specific volume of saturated feedwater, m³/kg.
pub const FEEDWATER_SPECIFIC_VOLUME_M3_KG: f64 = 0.00101;

/// Margin keeping the expansion outlet above the condensate enthalpy, kJ/kg.
pub const OUTLET_ENTHALPY_MARGIN_KJ_KG: f64 = 50.0;

// Saturated-liquid enthalpy bands over condenser pressure. Coarse by
// intent: the exact breakpoints (0.01 / 0.02 MPa) are model constants.
const LOW_BAND_LIMIT_MPA: f64 = 0.01;
const MID_BAND_LIMIT_MPA: f64 = 0.02;
const H_F_LOW_KJ_KG: f64 = 191.8;
const H_F_MID_KJ_KG: f64 = 251.4;
const H_F_HIGH_KJ_KG: f64 = 300.0;

// Boiler-outlet enthalpy: linear offset from the reference superheat state.
const BOILER_REF_ENTHALPY_KJ_KG: f64 = 2800.0;
const BOILER_REF_TEMPERATURE_C: f64 = 500.0;
const BOILER_ENTHALPY_SLOPE_KJ_KG_C: f64 = 2.0;

// Isentropic enthalpy drop: linear derating from the reference pressure.
const REF_ISENTROPIC_DROP_KJ_KG: f64 = 1200.0;
const REF_BOILER_PRESSURE_MPA: f64 = 8.0;
const DROP_DERATE_PER_MPA: f64 = 0.03;

/// Resolved steam-side state points and energy terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankineState {
    /// Condenser outlet (saturated liquid), kJ/kg
    pub h1_kj_kg: f64,
    /// Pump outlet, kJ/kg
    pub h2_kj_kg: f64,
    /// Boiler outlet (superheated steam), kJ/kg
    pub h3_kj_kg: f64,
    /// Turbine outlet, kJ/kg
    pub h4_kj_kg: f64,
    /// Boiler heat input, kW
    pub q_in_kw: f64,
    /// Turbine work, kW
    pub w_turbine_kw: f64,
    /// Pump work, kW
    pub w_pump_kw: f64,
    /// (turbine − pump) work / heat input, 0.0 when heat input is non-positive
    pub efficiency: f64,
}

/// Saturated-liquid enthalpy as a three-band step over condenser pressure.
fn condensate_enthalpy_kj_kg(condenser_pressure_mpa: f64) -> f64 {
    if condenser_pressure_mpa <= LOW_BAND_LIMIT_MPA {
        H_F_LOW_KJ_KG
    } else if condenser_pressure_mpa <= MID_BAND_LIMIT_MPA {
        H_F_MID_KJ_KG
    } else {
        H_F_HIGH_KJ_KG
    }
}

/// Evaluate the bottoming cycle for a given moisture flow.
pub fn evaluate(
    moisture_mass_kg_s: f64,
    boiler_pressure_mpa: f64,
    boiler_temperature_c: f64,
    condenser_pressure_mpa: f64,
    turbine_efficiency: f64,
) -> RankineState {
    let w_pump_per_kg =
        FEEDWATER_SPECIFIC_VOLUME_M3_KG * (boiler_pressure_mpa - condenser_pressure_mpa)
            * KPA_PER_MPA;

    let h1_kj_kg = condensate_enthalpy_kj_kg(condenser_pressure_mpa);
    let h2_kj_kg = h1_kj_kg + w_pump_per_kg;
    let h3_kj_kg = BOILER_REF_ENTHALPY_KJ_KG
        + BOILER_ENTHALPY_SLOPE_KJ_KG_C * (boiler_temperature_c - BOILER_REF_TEMPERATURE_C);

    let isentropic_drop_kj_kg = REF_ISENTROPIC_DROP_KJ_KG
        * (1.0 - DROP_DERATE_PER_MPA * (boiler_pressure_mpa - REF_BOILER_PRESSURE_MPA));
    let w_turbine_per_kg = isentropic_drop_kj_kg * turbine_efficiency;

    let mut h4_kj_kg = h3_kj_kg - w_turbine_per_kg;
    if h4_kj_kg < h1_kj_kg {
        h4_kj_kg = h1_kj_kg + OUTLET_ENTHALPY_MARGIN_KJ_KG;
    }

    let q_in_kw = moisture_mass_kg_s * (h3_kj_kg - h2_kj_kg);
    let w_turbine_kw = moisture_mass_kg_s * (h3_kj_kg - h4_kj_kg);
    let w_pump_kw = w_pump_per_kg * moisture_mass_kg_s;
    let efficiency = ratio_or_zero(w_turbine_kw - w_pump_kw, q_in_kw);

    RankineState {
        h1_kj_kg,
        h2_kj_kg,
        h3_kj_kg,
        h4_kj_kg,
        q_in_kw,
        w_turbine_kw,
        w_pump_kw,
        efficiency,
    }
}
