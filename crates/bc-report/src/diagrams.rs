//! Cycle diagram and chart data builders.
//!
//! Everything here is plain data for a front end to plot: state points,
//! process legs, saturation skeleton curves, and bar-chart entries. No
//! rendering happens in this crate.
//!
//! The Rankine h-s entropies are presentation heuristics (fixed offsets
//! scaled by boiler pressure and turbine efficiency), not property-table
//! lookups. The Brayton T-s entropies follow the ideal-gas relation
//!
//! ```text
//! s2 - s1 = Cp * ln(T2/T1) - R * ln(P2/P1)
//! ```
//!
//! chained across the four states with s1 = 0 as datum.

use bc_core::constants::{CP_AIR_KJ_PER_KG_K, R_AIR_KJ_PER_KG_K};
use bc_model::PlantResults;
use serde::{Deserialize, Serialize};

/// Floor applied to temperatures and pressures before taking logarithms.
const LOG_FLOOR: f64 = 1e-9;

const SATURATION_CURVE_POINTS: usize = 30;

// Rankine h-s presentation constants.
const HS_S1_KJ_KG_K: f64 = 0.8;
const HS_S2_KJ_KG_K: f64 = 0.85;
const HS_S3_BASE_KJ_KG_K: f64 = 6.5;
const HS_S3_PRESSURE_GAIN: f64 = 0.5;
const HS_S4_EXPANSION_SPREAD: f64 = 0.8;
const HS_REF_BOILER_PRESSURE_MPA: f64 = 8.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HsPoint {
    pub s_kj_kg_k: f64,
    pub h_kj_kg: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TsPoint {
    pub s_kj_kg_k: f64,
    pub t_k: f64,
}

/// Rankine cycle overlaid on a sketched saturation dome.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankineHsDiagram {
    /// States 1-4 in cycle order (condensate, feedwater, boiler exit,
    /// turbine exhaust).
    pub states: [HsPoint; 4],
    pub saturation_liquid: Vec<HsPoint>,
    pub saturation_vapor: Vec<HsPoint>,
}

impl RankineHsDiagram {
    /// Closed polyline 1 -> 2 -> 3 -> 4 -> 1 for the cycle trace.
    pub fn cycle_path(&self) -> Vec<HsPoint> {
        let mut path = self.states.to_vec();
        path.push(self.states[0]);
        path
    }
}

pub fn rankine_hs(results: &PlantResults) -> RankineHsDiagram {
    let pressure_factor = results.inputs.boiler_pressure_mpa / HS_REF_BOILER_PRESSURE_MPA;
    let s3 = HS_S3_BASE_KJ_KG_K + HS_S3_PRESSURE_GAIN * (pressure_factor - 1.0);
    let s4 = s3 + HS_S4_EXPANSION_SPREAD * (1.0 - results.inputs.turbine_efficiency);

    let states = [
        HsPoint {
            s_kj_kg_k: HS_S1_KJ_KG_K,
            h_kj_kg: results.h1_kj_kg,
        },
        HsPoint {
            s_kj_kg_k: HS_S2_KJ_KG_K,
            h_kj_kg: results.h2_kj_kg,
        },
        HsPoint {
            s_kj_kg_k: s3,
            h_kj_kg: results.h3_kj_kg,
        },
        HsPoint {
            s_kj_kg_k: s4,
            h_kj_kg: results.h4_kj_kg,
        },
    ];

    RankineHsDiagram {
        states,
        saturation_liquid: saturation_curve(0.5, 3.0, |s| 200.0 + 300.0 * s),
        saturation_vapor: saturation_curve(5.5, 8.5, |s| 2500.0 + 200.0 * (s - 5.5)),
    }
}

fn saturation_curve(s_min: f64, s_max: f64, h_of_s: impl Fn(f64) -> f64) -> Vec<HsPoint> {
    let step = (s_max - s_min) / (SATURATION_CURVE_POINTS - 1) as f64;
    (0..SATURATION_CURVE_POINTS)
        .map(|i| {
            let s = s_min + step * i as f64;
            HsPoint {
                s_kj_kg_k: s,
                h_kj_kg: h_of_s(s),
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProcessKind {
    IsentropicCompression,
    HeatAddition,
    IsentropicExpansion,
    HeatRejection,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ProcessLeg {
    pub kind: ProcessKind,
    pub from: TsPoint,
    pub to: TsPoint,
}

/// Brayton cycle in the T-s plane.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BraytonTsDiagram {
    /// States 1-4 (compressor inlet/outlet, turbine inlet/outlet).
    pub states: [TsPoint; 4],
}

impl BraytonTsDiagram {
    /// The four process legs in cycle order. Isentropic legs are drawn
    /// vertically at the inlet entropy; the state markers keep the entropy
    /// generated by the real process.
    pub fn legs(&self) -> [ProcessLeg; 4] {
        let [p1, p2, p3, p4] = self.states;
        [
            ProcessLeg {
                kind: ProcessKind::IsentropicCompression,
                from: p1,
                to: TsPoint {
                    s_kj_kg_k: p1.s_kj_kg_k,
                    t_k: p2.t_k,
                },
            },
            ProcessLeg {
                kind: ProcessKind::HeatAddition,
                from: p2,
                to: p3,
            },
            ProcessLeg {
                kind: ProcessKind::IsentropicExpansion,
                from: p3,
                to: TsPoint {
                    s_kj_kg_k: p3.s_kj_kg_k,
                    t_k: p4.t_k,
                },
            },
            ProcessLeg {
                kind: ProcessKind::HeatRejection,
                from: p4,
                to: p1,
            },
        ]
    }
}

pub fn brayton_ts(results: &PlantResults) -> BraytonTsDiagram {
    let t1 = results.t1_k.max(LOG_FLOOR);
    let t2 = results.t2_k.max(LOG_FLOOR);
    let t3 = results.t3_k.max(LOG_FLOOR);
    let t4 = results.t4_k.max(LOG_FLOOR);
    let p1 = results.p1_mpa.max(LOG_FLOOR);
    let p2 = results.p2_mpa.max(LOG_FLOOR);

    let s1 = 0.0;
    let s2 = CP_AIR_KJ_PER_KG_K * (t2 / t1).ln() - R_AIR_KJ_PER_KG_K * (p2 / p1).ln();
    let s3 = s2 + CP_AIR_KJ_PER_KG_K * (t3 / t2).ln();
    let s4 = s3 + CP_AIR_KJ_PER_KG_K * (t4 / t3).ln() - R_AIR_KJ_PER_KG_K * (p1 / p2).ln();

    BraytonTsDiagram {
        states: [
            TsPoint { s_kj_kg_k: s1, t_k: t1 },
            TsPoint { s_kj_kg_k: s2, t_k: t2 },
            TsPoint { s_kj_kg_k: s3, t_k: t3 },
            TsPoint { s_kj_kg_k: s4, t_k: t4 },
        ],
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartEntry {
    pub label: String,
    pub value: f64,
}

fn entry(label: &str, value: f64) -> ChartEntry {
    ChartEntry {
        label: label.to_string(),
        value,
    }
}

/// Bar-chart series for the plant energy balance, kW.
pub fn energy_flow_entries(results: &PlantResults) -> Vec<ChartEntry> {
    vec![
        entry("Fuel Input (kW)", results.q_in_brayton_kw),
        entry("Steam Input (kW)", results.q_in_rankine_kw),
        entry("Useful Work (kW)", results.useful_work_kw),
        entry("Losses (kW)", results.losses_kw),
    ]
}

/// Bar-chart series for byproduct gas production, kg/hr.
pub fn gas_production_entries(results: &PlantResults) -> Vec<ChartEntry> {
    vec![
        entry("Gas A", results.gas_a_kg_hr),
        entry("Gas B", results.gas_b_kg_hr),
        entry("Methane", results.methane_kg_hr),
    ]
}

/// Brayton state-point table: (state name, T formatted K, P formatted MPa).
pub fn brayton_state_rows(results: &PlantResults) -> Vec<(String, String, String)> {
    let states = [
        ("Compressor Inlet", results.t1_k, results.p1_mpa),
        ("Compressor Outlet", results.t2_k, results.p2_mpa),
        ("Turbine Inlet", results.t3_k, results.p2_mpa),
        ("Turbine Outlet", results.t4_k, results.p1_mpa),
    ];
    states
        .into_iter()
        .map(|(name, t_k, p_mpa)| (name.to_string(), format!("{t_k:.1}"), format!("{p_mpa:.3}")))
        .collect()
}
