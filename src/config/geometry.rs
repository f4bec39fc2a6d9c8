use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Reference geometry used to dimensionalize the aerodynamic coefficients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AircraftGeometry {
    /// The total wing area of the aircraft (m²).
    pub wing_area: f64,
    /// The wingspan of the aircraft (m).
    pub wing_span: f64,
    /// The mean aerodynamic chord of the aircraft (m).
    pub mac: f64,
}

impl AircraftGeometry {
    /// Creates a new `AircraftGeometry`, rejecting non-positive dimensions.
    pub fn new(wing_area: f64, wing_span: f64, mac: f64) -> Result<Self, ConfigError> {
        for (name, value) in [
            ("wing_area", wing_area),
            ("wing_span", wing_span),
            ("mac", mac),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }
        Ok(Self {
            wing_area,
            wing_span,
            mac,
        })
    }

    pub fn aerosonde() -> Self {
        Self {
            wing_area: 0.55,
            wing_span: 2.8956,
            mac: 0.18994,
        }
    }

    pub fn twin_otter() -> Self {
        Self {
            wing_area: 39.0,
            wing_span: 19.8,
            mac: 1.98,
        }
    }
}
