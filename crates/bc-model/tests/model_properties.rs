//! Domain-wide behavioral properties of the plant model.

use bc_core::{Tolerances, nearly_equal};
use bc_model::inputs::domain;
use bc_model::{PlantInputs, evaluate};
use proptest::prelude::*;

fn range(bounds: (f64, f64)) -> std::ops::Range<f64> {
    bounds.0..bounds.1
}

/// Strategy over the full documented input domain.
fn arb_inputs() -> impl Strategy<Value = PlantInputs> {
    (
        (
            range(domain::BIOMASS_FLOW_KG_S),
            range(domain::MOISTURE_FRACTION),
            range(domain::LHV_MJ_KG),
            range(domain::BOILER_PRESSURE_MPA),
            range(domain::BOILER_TEMPERATURE_C),
        ),
        (
            range(domain::CONDENSER_PRESSURE_MPA),
            range(domain::TURBINE_EFFICIENCY),
            range(domain::PRESSURE_RATIO),
            range(domain::COMPRESSOR_EFFICIENCY),
            range(domain::TURBINE_INLET_TEMP_K),
        ),
    )
        .prop_map(
            |(
                (biomass_flow_kg_s, moisture_fraction, lhv_mj_kg, boiler_pressure_mpa, boiler_temperature_c),
                (condenser_pressure_mpa, turbine_efficiency, pressure_ratio, compressor_efficiency, turbine_inlet_temp_k),
            )| PlantInputs {
                biomass_flow_kg_s,
                moisture_fraction,
                lhv_mj_kg,
                boiler_pressure_mpa,
                boiler_temperature_c,
                condenser_pressure_mpa,
                turbine_efficiency,
                pressure_ratio,
                compressor_efficiency,
                turbine_inlet_temp_k,
            },
        )
}

/// Every numeric leaf of the serialized record must be a finite number.
/// serde_json turns non-finite floats into null, so a null is a failure.
fn assert_all_finite(value: &serde_json::Value, path: &str) {
    match value {
        serde_json::Value::Number(n) => {
            let v = n.as_f64().unwrap_or(f64::NAN);
            assert!(v.is_finite(), "{path} is not finite: {v}");
        }
        serde_json::Value::Object(map) => {
            for (key, child) in map {
                assert_all_finite(child, &format!("{path}.{key}"));
            }
        }
        other => panic!("{path}: unexpected non-numeric value {other:?}"),
    }
}

proptest! {
    #[test]
    fn feed_split_sums_to_the_feed(inputs in arb_inputs()) {
        let results = evaluate(&inputs);
        prop_assert!(nearly_equal(
            results.dry_mass_kg_s + results.moisture_mass_kg_s,
            inputs.biomass_flow_kg_s,
            Tolerances::default(),
        ));
    }

    #[test]
    fn evaluation_is_pure(inputs in arb_inputs()) {
        let first = evaluate(&inputs);
        let second = evaluate(&inputs);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_output_is_finite(inputs in arb_inputs()) {
        let results = evaluate(&inputs);
        let value = serde_json::to_value(results).expect("serialize");
        assert_all_finite(&value, "results");
    }

    #[test]
    fn efficiencies_stay_in_physical_bands(inputs in arb_inputs()) {
        let results = evaluate(&inputs);
        // The Rankine efficiency is a clamped, guarded ratio.
        prop_assert!((0.0..=1.0).contains(&results.eta_rankine));
        // The combined ratio puts air-flow-scaled Brayton work over
        // fuel-referenced heat input, so it can pass 1 on poor fuels;
        // non-negative and finite is the contract.
        prop_assert!(results.eta_combined.is_finite());
        prop_assert!(results.eta_combined >= 0.0);
        // Brayton net work may go negative at degenerate points, but the
        // efficiency never reaches unity and never degenerates to NaN.
        prop_assert!(results.eta_brayton.is_finite());
        prop_assert!(results.eta_brayton < 1.0);
    }

    #[test]
    fn power_outputs_never_negative(inputs in arb_inputs()) {
        let results = evaluate(&inputs);
        prop_assert!(results.brayton_power_kw >= 0.0);
        prop_assert!(results.rankine_power_kw >= 0.0);
        prop_assert!(results.total_power_kw >= 0.0);
        prop_assert!(results.useful_work_kw >= 0.0);
    }
}

#[test]
fn brayton_net_work_increases_with_firing_temperature() {
    let (min_tit, max_tit) = domain::TURBINE_INLET_TEMP_K;
    let steps = 25;
    let mut previous = None;
    for i in 0..=steps {
        let tit = min_tit + (max_tit - min_tit) * i as f64 / steps as f64;
        let inputs = PlantInputs {
            turbine_inlet_temp_k: tit,
            ..PlantInputs::default()
        };
        let w_net = evaluate(&inputs).w_net_brayton_kw;
        if let Some(prev) = previous {
            assert!(
                w_net > prev,
                "net work did not increase at T3 = {tit} K: {w_net} <= {prev}"
            );
        }
        previous = Some(w_net);
    }
}

#[test]
fn outlet_enthalpy_clamp_is_exact() {
    // Out-of-domain turbine efficiency drives h4 below h1; the model must
    // pin it to the condensate enthalpy plus the 50 kJ/kg margin.
    let inputs = PlantInputs {
        turbine_efficiency: 2.5,
        ..PlantInputs::default()
    };
    let results = evaluate(&inputs);
    assert_eq!(results.h4_kj_kg, results.h1_kj_kg + 50.0);
}

#[test]
fn brayton_efficiency_guard_engages_in_domain() {
    // Heavy compression with a cold firing temperature puts T2 above T3:
    // the air-side heat input is negative and the efficiency must be an
    // exact 0.0, not a NaN or a negative ratio artifact.
    let inputs = PlantInputs {
        pressure_ratio: 20.0,
        compressor_efficiency: 0.5,
        turbine_inlet_temp_k: 800.0,
        ..PlantInputs::default()
    };
    let results = evaluate(&inputs);
    assert!(results.t2_k > results.t3_k);
    assert_eq!(results.eta_brayton, 0.0);
}

#[test]
fn poor_fuel_drives_the_combined_ratio_past_unity() {
    // Bone-dry feed burning a minimum-LHV fuel at high firing temperature:
    // turbine work scales with the 20:1 air flow while the heat input only
    // counts fuel energy, so the combined ratio exceeds 1 inside the
    // documented domain.
    let inputs = PlantInputs {
        moisture_fraction: 0.0,
        lhv_mj_kg: 5.0,
        pressure_ratio: 2.0,
        compressor_efficiency: 0.99,
        turbine_efficiency: 0.99,
        turbine_inlet_temp_k: 1990.0,
        ..PlantInputs::default()
    };
    let results = evaluate(&inputs);
    assert!(results.eta_combined.is_finite());
    assert!(results.eta_combined > 1.0);
}

#[test]
fn lean_feed_keeps_the_working_flow_alive() {
    // 0.01 kg/s of bone-dry feed is far below the 1 kg/s working-flow
    // floor; compressor work must reflect exactly one kilogram per second.
    let inputs = PlantInputs {
        biomass_flow_kg_s: 0.01,
        moisture_fraction: 0.0,
        ..PlantInputs::default()
    };
    let results = evaluate(&inputs);
    let per_kg = 1.005 * (results.t2_k - results.t1_k);
    assert!(nearly_equal(
        results.w_compressor_kw,
        per_kg,
        Tolerances::default()
    ));
}
