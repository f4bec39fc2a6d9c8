use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{
    AeroCoefficients, AircraftGeometry, FixedStartConfig, MassModel, PropellerConfig,
    RawAircraftConfig, StartConfig,
};
use crate::error::ConfigError;

/// The full fixed-wing aircraft configuration: mass, geometry, aerodynamic
/// derivatives, propeller and start state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirplaneConfig {
    /// Name of the aircraft, defaults to the preset name.
    pub name: String,
    /// Mass model of the aircraft, including weight and inertia properties.
    pub mass: MassModel,
    /// Reference geometry, such as wing area and mean chord.
    pub geometry: AircraftGeometry,
    /// Stability derivatives for forces and moments.
    pub aero_coef: AeroCoefficients,
    /// Propeller thrust/torque configuration.
    pub propeller: PropellerConfig,
    /// Initial position, speed and heading.
    pub start_config: StartConfig,
}

impl Default for AirplaneConfig {
    /// The Aerosonde configuration is chosen as the default for convenience.
    fn default() -> Self {
        Self::aerosonde()
    }
}

impl AirplaneConfig {
    pub fn aerosonde() -> Self {
        Self {
            name: "Aerosonde".to_string(),
            mass: MassModel::aerosonde(),
            geometry: AircraftGeometry::aerosonde(),
            aero_coef: AeroCoefficients::aerosonde(),
            propeller: PropellerConfig::aerosonde(),
            start_config: StartConfig::default(),
        }
    }

    pub fn twin_otter() -> Self {
        Self {
            name: "TwinOtter".to_string(),
            mass: MassModel::twin_otter(),
            geometry: AircraftGeometry::twin_otter(),
            aero_coef: AeroCoefficients::twin_otter(),
            propeller: PropellerConfig::twin_otter(),
            start_config: StartConfig::Fixed(FixedStartConfig {
                position: Vector3::new(0.0, 0.0, -1000.0),
                speed: 60.0,
                heading: 0.0,
            }),
        }
    }

    /// Creates an aircraft configuration by reading a flat YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file_contents = std::fs::read_to_string(path)?;
        let raw_config: RawAircraftConfig = serde_yaml::from_str(&file_contents)?;
        Self::from_raw_config(raw_config)
    }

    /// Converts a raw flat configuration into the structured form,
    /// validating the pieces that can later divide by zero.
    pub fn from_raw_config(raw: RawAircraftConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            name: raw.name.clone(),
            mass: MassModel::new(raw.mass, raw.ixx, raw.iyy, raw.izz, raw.ixz)?,
            geometry: AircraftGeometry::new(raw.wing_area, raw.wing_span, raw.mac)?,
            aero_coef: raw.aero_coefficients(),
            propeller: PropellerConfig::new(raw.prop_diameter, raw.c_t_prop, raw.c_q_prop)?,
            start_config: StartConfig::default(),
        })
    }
}

/// Configuration of the quadrotor variant: four identical fixed-pitch
/// rotors in plus configuration around the center of mass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuadrotorConfig {
    pub name: String,
    /// Mass model of the airframe.
    pub mass: MassModel,
    /// Distance from the center of mass to each rotor hub (m).
    pub arm_length: f64,
    /// Per-rotor thrust/torque configuration.
    pub rotor: PropellerConfig,
    /// Initial position, speed and heading.
    pub start_config: StartConfig,
}

impl Default for QuadrotorConfig {
    fn default() -> Self {
        Self {
            name: "Quad".to_string(),
            // Small research quad: 1.5 kg, near-diagonal inertia
            mass: MassModel {
                mass: 1.5,
                inertia: Matrix3::from_diagonal(&Vector3::new(0.0165, 0.0165, 0.0293)),
            },
            arm_length: 0.225,
            rotor: PropellerConfig {
                diameter: 0.2286,
                c_t: 0.109,
                c_q: 0.0091,
            },
            start_config: StartConfig::Fixed(FixedStartConfig {
                position: Vector3::new(0.0, 0.0, -100.0),
                speed: 0.0,
                heading: 0.0,
            }),
        }
    }
}

impl QuadrotorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.arm_length.is_finite() && self.arm_length > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "arm_length must be finite and positive, got {}",
                self.arm_length
            )));
        }
        Ok(())
    }
}

/// Configuration for any vehicle variant the crate can step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AircraftConfig {
    Airplane(AirplaneConfig),
    Quadrotor(QuadrotorConfig),
}
