//! Plant analysis report assembly and plain-text rendering.
//!
//! A report is four tables: input echo, cycle efficiencies, energy
//! summary, and AD-HTC gas production. Sections carry pre-formatted
//! strings so every renderer (text, JSON export) shows identical values.

use bc_model::PlantResults;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const REPORT_TITLE: &str = "AD-HTC Nexus System Analysis Report";

pub const REPORT_FOOTER: &str =
    "AD-HTC Nexus - Integrated Anaerobic Digestion & Hydrothermal Carbonization Power Plant Analysis";

const TIMESTAMP_FORMAT: &str = "%B %d, %Y at %I:%M %p";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportSection {
    pub title: String,
    /// (label, formatted value) pairs, in presentation order.
    pub rows: Vec<(String, String)>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisReport {
    pub title: String,
    pub generated_at: String,
    pub analysis_id: String,
    pub sections: Vec<ReportSection>,
}

impl AnalysisReport {
    pub fn build(results: &PlantResults, analysis_id: &str) -> Self {
        Self::build_at(results, analysis_id, Utc::now())
    }

    /// Build against an explicit timestamp. `build` feeds in `Utc::now`;
    /// tests pass a fixed instant.
    pub fn build_at(
        results: &PlantResults,
        analysis_id: &str,
        generated: DateTime<Utc>,
    ) -> Self {
        AnalysisReport {
            title: REPORT_TITLE.to_string(),
            generated_at: generated.format(TIMESTAMP_FORMAT).to_string(),
            analysis_id: analysis_id.to_string(),
            sections: vec![
                inputs_section(results),
                efficiencies_section(results),
                energy_section(results),
                gas_section(results),
            ],
        }
    }

    /// Machine-readable form of the whole report.
    pub fn to_json(&self) -> crate::ReportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render as aligned plain text, one section per table.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');
        out.push_str(&format!("Generated on: {}\n", self.generated_at));
        out.push_str(&format!("Analysis ID: {}\n", self.analysis_id));

        for section in &self.sections {
            out.push('\n');
            out.push_str(&section.title);
            out.push('\n');
            let width = section
                .rows
                .iter()
                .map(|(label, _)| label.len())
                .max()
                .unwrap_or(0);
            for (label, value) in &section.rows {
                out.push_str(&format!("  {label:<width$}  {value}\n"));
            }
        }

        out.push('\n');
        out.push_str(REPORT_FOOTER);
        out.push('\n');
        out
    }
}

fn row(label: &str, value: String) -> (String, String) {
    (label.to_string(), value)
}

fn inputs_section(results: &PlantResults) -> ReportSection {
    let inputs = &results.inputs;
    ReportSection {
        title: "1. Inputs".to_string(),
        rows: vec![
            row("Biomass mass flow (kg/s)", format!("{}", inputs.biomass_flow_kg_s)),
            row("Moisture content (fraction)", format!("{}", inputs.moisture_fraction)),
            row("LHV (MJ/kg)", format!("{}", inputs.lhv_mj_kg)),
            row("Boiler pressure (MPa)", format!("{}", inputs.boiler_pressure_mpa)),
            row("Boiler temperature (°C)", format!("{}", inputs.boiler_temperature_c)),
            row("Condenser pressure (MPa)", format!("{}", inputs.condenser_pressure_mpa)),
            row("Compressor ratio", format!("{}", inputs.pressure_ratio)),
            row("Compressor efficiency", format!("{}", inputs.compressor_efficiency)),
            row("Turbine efficiency", format!("{}", inputs.turbine_efficiency)),
            row("Turbine inlet temp (K)", format!("{}", inputs.turbine_inlet_temp_k)),
        ],
    }
}

fn efficiencies_section(results: &PlantResults) -> ReportSection {
    ReportSection {
        title: "2. Cycle Efficiencies".to_string(),
        rows: vec![
            row("Rankine", format!("{:.2}%", results.eta_rankine * 100.0)),
            row("Brayton", format!("{:.2}%", results.eta_brayton * 100.0)),
            row("Combined", format!("{:.2}%", results.eta_combined * 100.0)),
        ],
    }
}

fn energy_section(results: &PlantResults) -> ReportSection {
    ReportSection {
        title: "3. Energy Summary".to_string(),
        rows: vec![
            row("Dry biomass mass flow (kg/s)", format!("{:.3}", results.dry_mass_kg_s)),
            row("Moisture mass flow (kg/s)", format!("{:.3}", results.moisture_mass_kg_s)),
            row("Fuel energy input (kW)", format!("{:.2}", results.q_in_brayton_kw)),
            row("Steam energy input (kW)", format!("{:.2}", results.q_in_rankine_kw)),
            row("Brayton net work (kW)", format!("{:.2}", results.w_net_brayton_kw)),
            row("Rankine turbine work (kW)", format!("{:.2}", results.w_turbine_rankine_kw)),
            row("Pump work (kW)", format!("{:.2}", results.w_pump_kw)),
            row("Total power (kW)", format!("{:.2}", results.total_power_kw)),
            row("Fuel consumption (kg/hr)", format!("{:.3}", results.fuel_consumption_kg_hr)),
        ],
    }
}

fn gas_section(results: &PlantResults) -> ReportSection {
    ReportSection {
        title: "4. AD-HTC Gas Production".to_string(),
        rows: vec![
            row("Gas A (kg/hr)", format!("{:.3}", results.gas_a_kg_hr)),
            row("Gas B (kg/hr)", format!("{:.3}", results.gas_b_kg_hr)),
            row("Methane (kg/hr)", format!("{:.3}", results.methane_kg_hr)),
            row("HTC Heating Load (kJ)", format!("{:.0}", results.htc_heating_kj)),
        ],
    }
}
