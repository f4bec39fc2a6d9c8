use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Rigid-body mass properties plus the force/moment accumulator that the
/// per-step pipeline fills before the integrator runs.
///
/// `net_force` and `net_moment` are transient: they are overwritten on every
/// step by summing the categorized entries in `forces` and `moments`, all of
/// which must already be resolved into the body frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsComponent {
    pub mass: f64,
    pub inertia: Matrix3<f64>,
    pub net_force: Vector3<f64>,
    pub net_moment: Vector3<f64>,
    pub forces: Vec<Force>,
    pub moments: Vec<Moment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Force {
    pub vector: Vector3<f64>,
    pub frame: ReferenceFrame,
    pub category: ForceCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Moment {
    pub vector: Vector3<f64>,
    pub frame: ReferenceFrame,
    pub category: ForceCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ReferenceFrame {
    Body,
    Ground,
    Wind,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ForceCategory {
    Aerodynamic,
    Propulsive,
    Gravitational,
}

impl PhysicsComponent {
    /// Build a physics component, rejecting configurations that would
    /// later divide by zero in the kinetics step.
    pub fn new(mass: f64, inertia: Matrix3<f64>) -> Result<Self, ConfigError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "mass must be finite and positive, got {mass}"
            )));
        }
        if inertia.try_inverse().is_none() {
            return Err(ConfigError::ValidationError(
                "inertia matrix is singular".to_string(),
            ));
        }
        Ok(Self {
            mass,
            inertia,
            net_force: Vector3::zeros(),
            net_moment: Vector3::zeros(),
            forces: Vec::new(),
            moments: Vec::new(),
        })
    }

    pub fn add_force(&mut self, force: Force) {
        self.forces.push(force);
    }

    pub fn add_moment(&mut self, moment: Moment) {
        self.moments.push(moment);
    }

    pub fn clear_forces(&mut self) {
        self.forces.clear();
        self.moments.clear();
        self.net_force = Vector3::zeros();
        self.net_moment = Vector3::zeros();
    }

    /// Sum the accumulated loads into `net_force`/`net_moment`.
    ///
    /// Every entry must already be in the body frame; the orchestrator is
    /// responsible for rotating wind- and ground-frame loads before adding
    /// them.
    pub fn collect_net(&mut self) {
        debug_assert!(self.forces.iter().all(|f| f.frame == ReferenceFrame::Body));
        debug_assert!(self.moments.iter().all(|m| m.frame == ReferenceFrame::Body));
        self.net_force = self
            .forces
            .iter()
            .fold(Vector3::zeros(), |acc, f| acc + f.vector);
        self.net_moment = self
            .moments
            .iter()
            .fold(Vector3::zeros(), |acc, m| acc + m.vector);
    }
}
