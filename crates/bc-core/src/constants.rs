//! Shared physical constants.
//!
//! The gas-side model is air-standard: the working fluid keeps the
//! properties of ambient air through combustion and expansion.

/// Ratio of specific heats for air.
pub const GAMMA_AIR: f64 = 1.4;

/// Specific heat of air at constant pressure, kJ/(kg·K).
pub const CP_AIR_KJ_PER_KG_K: f64 = 1.005;

/// Specific gas constant of air, kJ/(kg·K).
pub const R_AIR_KJ_PER_KG_K: f64 = 0.287;

/// Ambient (compressor inlet) temperature, K.
pub const AMBIENT_TEMPERATURE_K: f64 = 298.15;

/// Ambient (compressor inlet) pressure, MPa.
pub const AMBIENT_PRESSURE_MPA: f64 = 0.1013;

pub const KJ_PER_MJ: f64 = 1000.0;

pub const KPA_PER_MPA: f64 = 1000.0;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isentropic_exponent_of_air() {
        // (gamma - 1) / gamma for air is the familiar 0.2857...
        let k = (GAMMA_AIR - 1.0) / GAMMA_AIR;
        assert!((k - 0.285_714).abs() < 1e-6);
    }
}
