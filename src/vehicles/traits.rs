use nalgebra::Vector3;

use crate::components::{AirData, AircraftControls, SpatialComponent};
use crate::error::PhysicsError;

/// The stepping contract shared by every vehicle variant.
///
/// A driver loop calls [`Aircraft::step`] once per simulation tick with the
/// control inputs, the ground-frame wind and an explicit step size. The call
/// is synchronous, fully owns the vehicle's state for its duration, and on
/// error leaves the persistent state exactly as it was.
pub trait Aircraft {
    /// Advance the vehicle by one fixed step of `dt` seconds.
    fn step(
        &mut self,
        controls: &AircraftControls,
        wind: &Vector3<f64>,
        dt: f64,
    ) -> Result<(), PhysicsError>;

    /// Position, attitude and body-frame velocities.
    fn spatial(&self) -> &SpatialComponent;

    /// Derived aerodynamic state (α, β, Va) from the last completed step.
    fn air_data(&self) -> &AirData;
}
