use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Static configuration of a fixed-pitch propeller.
///
/// Thrust and reaction torque follow the empirical square-of-rev-rate law
/// `T = c_t·ρ·D⁴·n²`, `Q = c_q·ρ·D⁵·n²` with `n` in revolutions per second.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropellerConfig {
    /// Propeller diameter (m).
    pub diameter: f64,
    /// Thrust coefficient (dimensionless).
    pub c_t: f64,
    /// Torque coefficient (dimensionless).
    pub c_q: f64,
}

impl PropellerConfig {
    pub fn new(diameter: f64, c_t: f64, c_q: f64) -> Result<Self, ConfigError> {
        if !(diameter.is_finite() && diameter > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "propeller diameter must be finite and positive, got {diameter}"
            )));
        }
        Ok(Self { diameter, c_t, c_q })
    }

    /// 20-inch fixed-pitch propeller of an Aerosonde-class UAV.
    pub fn aerosonde() -> Self {
        Self {
            diameter: 0.508,
            c_t: 0.102,
            c_q: 0.0092,
        }
    }

    /// Three-blade propeller of a DHC-6 Twin Otter, reduced to the same
    /// square-of-rev-rate law.
    pub fn twin_otter() -> Self {
        Self {
            diameter: 2.59,
            c_t: 0.088,
            c_q: 0.0135,
        }
    }
}
