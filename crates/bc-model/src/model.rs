//! Whole-plant evaluation pipeline.

use bc_core::constants::{KJ_PER_MJ, SECONDS_PER_HOUR};
use bc_core::{positive_part, ratio_or_zero};

use crate::inputs::PlantInputs;
use crate::results::PlantResults;
use crate::{brayton, gas_yield, rankine};

/// Model revision baked into analysis fingerprints.
pub const MODEL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Evaluate the plant at one operating point.
///
/// Total over all finite inputs: degenerate denominators resolve to 0.0
/// efficiencies instead of NaN/Inf, and negative net work clamps out of
/// the combined figures. Callers are expected to keep inputs inside
/// [`inputs::domain`](crate::inputs::domain); nothing here checks that.
pub fn evaluate(inputs: &PlantInputs) -> PlantResults {
    // Stage 1: one feed stream, split once, routed to both cycles.
    let dry_mass_kg_s = inputs.biomass_flow_kg_s * (1.0 - inputs.moisture_fraction);
    let moisture_mass_kg_s = inputs.biomass_flow_kg_s * inputs.moisture_fraction;

    let lhv_kj_kg = inputs.lhv_mj_kg * KJ_PER_MJ;
    let q_in_brayton_kw = dry_mass_kg_s * lhv_kj_kg;

    // Stages 2 and 3: the cycles are thermodynamically independent.
    let gas_side = brayton::evaluate(
        dry_mass_kg_s,
        inputs.pressure_ratio,
        inputs.compressor_efficiency,
        inputs.turbine_efficiency,
        inputs.turbine_inlet_temp_k,
    );
    let steam_side = rankine::evaluate(
        moisture_mass_kg_s,
        inputs.boiler_pressure_mpa,
        inputs.boiler_temperature_c,
        inputs.condenser_pressure_mpa,
        inputs.turbine_efficiency,
    );

    // Stage 4: combined-cycle aggregation. The heat sources stay separate
    // up to here and only merge for the overall efficiency figure. Gross
    // Rankine turbine work enters the aggregate; the pump debit shows up
    // in rankine_power_kw below.
    let total_input_kw = q_in_brayton_kw + steam_side.q_in_kw;
    let useful_work_kw =
        positive_part(gas_side.w_net_kw) + positive_part(steam_side.w_turbine_kw);
    let eta_combined = ratio_or_zero(useful_work_kw, total_input_kw);

    // Stage 5: residual accounting.
    let losses_kw = total_input_kw - useful_work_kw;

    // Stage 6: byproduct correlations, coupled through eta_combined.
    let yields = gas_yield::evaluate(
        inputs.pressure_ratio,
        inputs.turbine_inlet_temp_k,
        eta_combined,
    );

    let brayton_power_kw = positive_part(gas_side.w_net_kw);
    let rankine_power_kw = positive_part(steam_side.w_turbine_kw - steam_side.w_pump_kw);
    let total_power_kw = brayton_power_kw + rankine_power_kw;

    // Stage 7: fuel back-calculation recovers the dry feed by construction.
    let fuel_kg_s = ratio_or_zero(q_in_brayton_kw, lhv_kj_kg);
    let fuel_consumption_kg_hr = fuel_kg_s * SECONDS_PER_HOUR;

    PlantResults {
        dry_mass_kg_s,
        moisture_mass_kg_s,
        t1_k: gas_side.t1_k,
        t2_k: gas_side.t2_k,
        t3_k: gas_side.t3_k,
        t4_k: gas_side.t4_k,
        p1_mpa: gas_side.p1_mpa,
        p2_mpa: gas_side.p2_mpa,
        h1_kj_kg: steam_side.h1_kj_kg,
        h2_kj_kg: steam_side.h2_kj_kg,
        h3_kj_kg: steam_side.h3_kj_kg,
        h4_kj_kg: steam_side.h4_kj_kg,
        q_in_brayton_kw,
        q_in_rankine_kw: steam_side.q_in_kw,
        w_compressor_kw: gas_side.w_compressor_kw,
        w_turbine_brayton_kw: gas_side.w_turbine_kw,
        w_turbine_rankine_kw: steam_side.w_turbine_kw,
        w_pump_kw: steam_side.w_pump_kw,
        w_net_brayton_kw: gas_side.w_net_kw,
        eta_brayton: gas_side.efficiency,
        eta_rankine: steam_side.efficiency,
        eta_combined,
        brayton_power_kw,
        rankine_power_kw,
        total_power_kw,
        useful_work_kw,
        losses_kw,
        fuel_consumption_kg_hr,
        gas_a_kg_hr: yields.gas_a_kg_hr,
        gas_b_kg_hr: yields.gas_b_kg_hr,
        methane_kg_hr: yields.methane_kg_hr,
        htc_heating_kj: yields.htc_heating_kj,
        inputs: *inputs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bc_core::{Tolerances, nearly_equal};

    #[test]
    fn repeated_evaluation_is_bit_identical() {
        let inputs = PlantInputs::default();
        let a = evaluate(&inputs);
        let b = evaluate(&inputs);
        assert_eq!(a, b);
    }

    #[test]
    fn feed_split_is_conservative() {
        let inputs = PlantInputs {
            moisture_fraction: 0.37,
            ..PlantInputs::default()
        };
        let results = evaluate(&inputs);
        assert!(nearly_equal(
            results.dry_mass_kg_s + results.moisture_mass_kg_s,
            inputs.biomass_flow_kg_s,
            Tolerances::default(),
        ));
    }

    #[test]
    fn power_totals_are_sums_of_clamped_parts() {
        let results = evaluate(&PlantInputs::default());
        assert_eq!(
            results.total_power_kw,
            results.brayton_power_kw + results.rankine_power_kw
        );
        assert!(results.brayton_power_kw >= 0.0);
        assert!(results.rankine_power_kw >= 0.0);
    }

    #[test]
    fn losses_close_the_energy_balance() {
        let results = evaluate(&PlantInputs::default());
        let total_in = results.q_in_brayton_kw + results.q_in_rankine_kw;
        assert_eq!(results.losses_kw, total_in - results.useful_work_kw);
    }
}
