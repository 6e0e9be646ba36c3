//! Query helpers for selecting named outputs from a result record.
//!
//! Keys are the snake_case field names of the derived outputs. Frontends
//! use them for CSV column selection and for tab-completion style listings.

use bc_model::PlantResults;

use crate::error::{AppError, AppResult};

const OUTPUT_KEYS: &[&str] = &[
    "dry_mass_kg_s",
    "moisture_mass_kg_s",
    "t1_k",
    "t2_k",
    "t3_k",
    "t4_k",
    "p1_mpa",
    "p2_mpa",
    "h1_kj_kg",
    "h2_kj_kg",
    "h3_kj_kg",
    "h4_kj_kg",
    "q_in_brayton_kw",
    "q_in_rankine_kw",
    "w_compressor_kw",
    "w_turbine_brayton_kw",
    "w_turbine_rankine_kw",
    "w_pump_kw",
    "w_net_brayton_kw",
    "eta_brayton",
    "eta_rankine",
    "eta_combined",
    "brayton_power_kw",
    "rankine_power_kw",
    "total_power_kw",
    "useful_work_kw",
    "losses_kw",
    "fuel_consumption_kg_hr",
    "gas_a_kg_hr",
    "gas_b_kg_hr",
    "methane_kg_hr",
    "htc_heating_kj",
];

/// All selectable output keys, in record order.
pub fn output_keys() -> &'static [&'static str] {
    OUTPUT_KEYS
}

/// Look up one derived output by key.
pub fn output_value(results: &PlantResults, key: &str) -> Option<f64> {
    let value = match key {
        "dry_mass_kg_s" => results.dry_mass_kg_s,
        "moisture_mass_kg_s" => results.moisture_mass_kg_s,
        "t1_k" => results.t1_k,
        "t2_k" => results.t2_k,
        "t3_k" => results.t3_k,
        "t4_k" => results.t4_k,
        "p1_mpa" => results.p1_mpa,
        "p2_mpa" => results.p2_mpa,
        "h1_kj_kg" => results.h1_kj_kg,
        "h2_kj_kg" => results.h2_kj_kg,
        "h3_kj_kg" => results.h3_kj_kg,
        "h4_kj_kg" => results.h4_kj_kg,
        "q_in_brayton_kw" => results.q_in_brayton_kw,
        "q_in_rankine_kw" => results.q_in_rankine_kw,
        "w_compressor_kw" => results.w_compressor_kw,
        "w_turbine_brayton_kw" => results.w_turbine_brayton_kw,
        "w_turbine_rankine_kw" => results.w_turbine_rankine_kw,
        "w_pump_kw" => results.w_pump_kw,
        "w_net_brayton_kw" => results.w_net_brayton_kw,
        "eta_brayton" => results.eta_brayton,
        "eta_rankine" => results.eta_rankine,
        "eta_combined" => results.eta_combined,
        "brayton_power_kw" => results.brayton_power_kw,
        "rankine_power_kw" => results.rankine_power_kw,
        "total_power_kw" => results.total_power_kw,
        "useful_work_kw" => results.useful_work_kw,
        "losses_kw" => results.losses_kw,
        "fuel_consumption_kg_hr" => results.fuel_consumption_kg_hr,
        "gas_a_kg_hr" => results.gas_a_kg_hr,
        "gas_b_kg_hr" => results.gas_b_kg_hr,
        "methane_kg_hr" => results.methane_kg_hr,
        "htc_heating_kj" => results.htc_heating_kj,
        _ => return None,
    };
    Some(value)
}

/// Resolve a list of keys, failing on the first unknown one.
pub fn select_outputs(results: &PlantResults, keys: &[String]) -> AppResult<Vec<f64>> {
    keys.iter()
        .map(|key| {
            output_value(results, key).ok_or_else(|| AppError::UnknownOutput(key.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bc_model::{PlantInputs, evaluate};

    #[test]
    fn every_listed_key_resolves() {
        let results = evaluate(&PlantInputs::default());
        for key in output_keys() {
            assert!(output_value(&results, key).is_some(), "missing key {key}");
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        let results = evaluate(&PlantInputs::default());
        assert_eq!(output_value(&results, "w_flux_capacitor_kw"), None);

        let err = select_outputs(&results, &["eta_combined".to_string(), "bogus".to_string()])
            .unwrap_err();
        assert!(matches!(err, AppError::UnknownOutput(_)));
    }

    #[test]
    fn values_match_the_record_fields() {
        let results = evaluate(&PlantInputs::default());
        assert_eq!(
            output_value(&results, "eta_combined"),
            Some(results.eta_combined)
        );
        assert_eq!(
            output_value(&results, "total_power_kw"),
            Some(results.total_power_kw)
        );
        let selected =
            select_outputs(&results, &["gas_a_kg_hr".to_string(), "losses_kw".to_string()])
                .unwrap();
        assert_eq!(selected, vec![results.gas_a_kg_hr, results.losses_kw]);
    }
}
