use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Mass and inertia properties of a rigid body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MassModel {
    /// Total mass of the vehicle (kg).
    pub mass: f64,
    /// The inertia matrix (3x3) representing the moments and products of inertia.
    pub inertia: Matrix3<f64>,
}

impl MassModel {
    /// Creates a new `MassModel` from the principal moments and the x-z
    /// product of inertia.
    ///
    /// # Arguments
    /// * `mass` - Total mass of the vehicle (kg).
    /// * `ixx` - Moment of inertia about the x-axis (kg·m²).
    /// * `iyy` - Moment of inertia about the y-axis (kg·m²).
    /// * `izz` - Moment of inertia about the z-axis (kg·m²).
    /// * `ixz` - Product of inertia between the x and z axes (kg·m²).
    ///
    /// Rejects non-positive mass and singular inertia tensors: both would
    /// surface as a divide-by-zero in the kinetics step otherwise.
    pub fn new(mass: f64, ixx: f64, iyy: f64, izz: f64, ixz: f64) -> Result<Self, ConfigError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "mass must be finite and positive, got {mass}"
            )));
        }
        let inertia = Matrix3::from_columns(&[
            Vector3::new(ixx, 0.0, -ixz),
            Vector3::new(0.0, iyy, 0.0),
            Vector3::new(-ixz, 0.0, izz),
        ]);
        if inertia.try_inverse().is_none() {
            return Err(ConfigError::ValidationError(format!(
                "inertia matrix is singular (ixx={ixx}, iyy={iyy}, izz={izz}, ixz={ixz})"
            )));
        }
        Ok(Self { mass, inertia })
    }

    fn preset(mass: f64, ixx: f64, iyy: f64, izz: f64, ixz: f64) -> Self {
        let inertia = Matrix3::from_columns(&[
            Vector3::new(ixx, 0.0, -ixz),
            Vector3::new(0.0, iyy, 0.0),
            Vector3::new(-ixz, 0.0, izz),
        ]);
        Self { mass, inertia }
    }

    /// Aerosonde-class small UAV.
    pub fn aerosonde() -> Self {
        Self::preset(13.5, 0.8244, 1.135, 1.759, 0.1204)
    }

    /// DHC-6 Twin Otter.
    pub fn twin_otter() -> Self {
        Self::preset(4874.8, 28366.4, 32852.8, 52097.3, 1384.3)
    }
}
