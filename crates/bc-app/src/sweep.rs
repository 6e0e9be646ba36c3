//! Parametric sweep execution.
//!
//! Sweeps re-evaluate the plant model across a range of one input while
//! holding the rest of the base case fixed. Points are evaluated in
//! parallel; the model is pure, so order never matters.

use bc_core::numeric::{Tolerances, ensure_finite, nearly_equal};
use bc_model::{PlantInputs, PlantResults, evaluate};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AppError, AppResult};

/// Input field selected for sweeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepParameter {
    BiomassFlowKgS,
    MoistureFraction,
    LhvMjKg,
    BoilerPressureMpa,
    BoilerTemperatureC,
    CondenserPressureMpa,
    TurbineEfficiency,
    PressureRatio,
    CompressorEfficiency,
    TurbineInletTempK,
}

impl SweepParameter {
    pub const ALL: [SweepParameter; 10] = [
        SweepParameter::BiomassFlowKgS,
        SweepParameter::MoistureFraction,
        SweepParameter::LhvMjKg,
        SweepParameter::BoilerPressureMpa,
        SweepParameter::BoilerTemperatureC,
        SweepParameter::CondenserPressureMpa,
        SweepParameter::TurbineEfficiency,
        SweepParameter::PressureRatio,
        SweepParameter::CompressorEfficiency,
        SweepParameter::TurbineInletTempK,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BiomassFlowKgS => "biomass_flow_kg_s",
            Self::MoistureFraction => "moisture_fraction",
            Self::LhvMjKg => "lhv_mj_kg",
            Self::BoilerPressureMpa => "boiler_pressure_mpa",
            Self::BoilerTemperatureC => "boiler_temperature_c",
            Self::CondenserPressureMpa => "condenser_pressure_mpa",
            Self::TurbineEfficiency => "turbine_efficiency",
            Self::PressureRatio => "pressure_ratio",
            Self::CompressorEfficiency => "compressor_efficiency",
            Self::TurbineInletTempK => "turbine_inlet_temp_k",
        }
    }

    pub fn parse(name: &str) -> Option<SweepParameter> {
        Self::ALL.iter().copied().find(|p| p.as_str() == name)
    }

    /// Copy of `base` with this parameter set to `value`.
    pub fn apply(&self, base: &PlantInputs, value: f64) -> PlantInputs {
        let mut inputs = *base;
        match self {
            Self::BiomassFlowKgS => inputs.biomass_flow_kg_s = value,
            Self::MoistureFraction => inputs.moisture_fraction = value,
            Self::LhvMjKg => inputs.lhv_mj_kg = value,
            Self::BoilerPressureMpa => inputs.boiler_pressure_mpa = value,
            Self::BoilerTemperatureC => inputs.boiler_temperature_c = value,
            Self::CondenserPressureMpa => inputs.condenser_pressure_mpa = value,
            Self::TurbineEfficiency => inputs.turbine_efficiency = value,
            Self::PressureRatio => inputs.pressure_ratio = value,
            Self::CompressorEfficiency => inputs.compressor_efficiency = value,
            Self::TurbineInletTempK => inputs.turbine_inlet_temp_k = value,
        }
        inputs
    }
}

/// Spacing of sweep points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepSpacing {
    /// Uniformly spaced points
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

/// Request for a parametric sweep around a base operating point.
#[derive(Debug, Clone)]
pub struct SweepRequest {
    pub base: PlantInputs,
    pub parameter: SweepParameter,
    pub spacing: SweepSpacing,
    pub start: f64,
    pub end: f64,
    pub points: usize,
}

/// One evaluated sweep: `values[i]` produced `results[i]`.
#[derive(Debug, Clone)]
pub struct SweepSeries {
    pub parameter: SweepParameter,
    pub values: Vec<f64>,
    pub results: Vec<PlantResults>,
}

/// Generate the sweep axis and evaluate every point.
pub fn run_sweep(request: &SweepRequest) -> AppResult<SweepSeries> {
    let values = sweep_axis(request)?;

    debug!(
        "Sweeping {} over [{}, {}] with {} points",
        request.parameter.as_str(),
        request.start,
        request.end,
        values.len()
    );

    let results: Vec<PlantResults> = values
        .par_iter()
        .map(|&value| evaluate(&request.parameter.apply(&request.base, value)))
        .collect();

    Ok(SweepSeries {
        parameter: request.parameter,
        values,
        results,
    })
}

fn sweep_axis(request: &SweepRequest) -> AppResult<Vec<f64>> {
    if request.points < 2 {
        return Err(AppError::InvalidSweep {
            message: "Sweep must have at least 2 points".to_string(),
        });
    }

    ensure_finite(request.start, "sweep start").map_err(|e| AppError::InvalidSweep {
        message: e.to_string(),
    })?;
    ensure_finite(request.end, "sweep end").map_err(|e| AppError::InvalidSweep {
        message: e.to_string(),
    })?;

    if nearly_equal(request.start, request.end, Tolerances::default()) {
        return Err(AppError::InvalidSweep {
            message: "Start and end values must be different".to_string(),
        });
    }

    let axis = match request.spacing {
        SweepSpacing::Linear => linear_axis(request.start, request.end, request.points),
        SweepSpacing::Logarithmic => logarithmic_axis(request.start, request.end, request.points),
    };

    Ok(axis)
}

fn linear_axis(start: f64, end: f64, points: usize) -> Vec<f64> {
    let mut axis = Vec::with_capacity(points);
    let delta = (end - start) / (points - 1) as f64;

    for i in 0..points {
        axis.push(start + i as f64 * delta);
    }

    // Ensure exact endpoint
    axis[points - 1] = end;
    axis
}

fn logarithmic_axis(start: f64, end: f64, points: usize) -> Vec<f64> {
    // Both bounds must be positive on a log axis
    if start <= 0.0 || end <= 0.0 {
        return linear_axis(start, end, points);
    }

    let mut axis = Vec::with_capacity(points);
    let log_start = start.ln();
    let log_end = end.ln();
    let log_delta = (log_end - log_start) / (points - 1) as f64;

    for i in 0..points {
        axis.push((log_start + i as f64 * log_delta).exp());
    }

    // Ensure exact endpoint
    axis[points - 1] = end;
    axis
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(spacing: SweepSpacing, start: f64, end: f64, points: usize) -> SweepRequest {
        SweepRequest {
            base: PlantInputs::default(),
            parameter: SweepParameter::PressureRatio,
            spacing,
            start,
            end,
            points,
        }
    }

    #[test]
    fn linear_sweep_hits_exact_endpoints() {
        let series = run_sweep(&request(SweepSpacing::Linear, 4.0, 12.0, 5)).unwrap();
        assert_eq!(series.values.len(), 5);
        assert_eq!(series.values[0], 4.0);
        assert_eq!(series.values[4], 12.0);
        assert!((series.values[2] - 8.0).abs() < 1e-9);
        assert_eq!(series.results.len(), 5);
    }

    #[test]
    fn logarithmic_sweep_places_geometric_midpoint() {
        let series = run_sweep(&request(SweepSpacing::Logarithmic, 2.0, 18.0, 3)).unwrap();
        let expected_mid = (2.0f64 * 18.0).sqrt();
        assert!((series.values[1] - expected_mid).abs() / expected_mid < 1e-9);
        assert_eq!(series.values[2], 18.0);
    }

    #[test]
    fn logarithmic_sweep_falls_back_for_non_positive_bounds() {
        let mut req = request(SweepSpacing::Logarithmic, 0.0, 1.0, 3);
        req.parameter = SweepParameter::MoistureFraction;
        let series = run_sweep(&req).unwrap();
        assert_eq!(series.values, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn rejects_degenerate_requests() {
        assert!(run_sweep(&request(SweepSpacing::Linear, 4.0, 12.0, 1)).is_err());
        assert!(run_sweep(&request(SweepSpacing::Linear, 4.0, 4.0, 5)).is_err());
        assert!(run_sweep(&request(SweepSpacing::Linear, f64::NAN, 4.0, 5)).is_err());
    }

    #[test]
    fn swept_parameter_lands_in_each_result() {
        let series = run_sweep(&request(SweepSpacing::Linear, 4.0, 12.0, 5)).unwrap();
        for (value, results) in series.values.iter().zip(&series.results) {
            assert_eq!(results.inputs.pressure_ratio, *value);
        }
    }

    #[test]
    fn parameter_names_roundtrip() {
        for parameter in SweepParameter::ALL {
            assert_eq!(SweepParameter::parse(parameter.as_str()), Some(parameter));
        }
        assert_eq!(SweepParameter::parse("unknown"), None);
    }
}
