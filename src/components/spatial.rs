use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Component for storing the spatial state of a vehicle.
///
/// Position and attitude live in the NED ground frame (x north, y east,
/// z down); velocity and angular velocity are expressed in the body frame
/// (x forward, y right, z down).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpatialComponent {
    /// Position in the ground frame, NED [m]
    pub position: Vector3<f64>,

    /// Euler attitude: roll, pitch, yaw [deg]
    pub attitude: Vector3<f64>,

    /// Linear velocity in the body frame [m/s]
    pub velocity: Vector3<f64>,

    /// Angular velocity in the body frame (p, q, r) [rad/s]
    pub angular_velocity: Vector3<f64>,
}

impl Default for SpatialComponent {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            attitude: Vector3::zeros(),
            velocity: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
        }
    }
}

impl SpatialComponent {
    /// Create a new spatial component with initial values
    pub fn new(
        position: Vector3<f64>,
        attitude: Vector3<f64>,
        velocity: Vector3<f64>,
        angular_velocity: Vector3<f64>,
    ) -> Self {
        Self {
            position,
            attitude,
            velocity,
            angular_velocity,
        }
    }

    /// Create a new spatial component at a specific position
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a new spatial component at a position, flying straight and
    /// level along `heading` (deg) at `airspeed` (m/s).
    pub fn at_position_and_airspeed(
        position: Vector3<f64>,
        airspeed: f64,
        heading: f64,
    ) -> Self {
        Self {
            position,
            attitude: Vector3::new(0.0, 0.0, heading),
            velocity: Vector3::new(airspeed, 0.0, 0.0),
            angular_velocity: Vector3::zeros(),
        }
    }

    /// Roll angle [deg]
    pub fn roll(&self) -> f64 {
        self.attitude.x
    }

    /// Pitch angle [deg]
    pub fn pitch(&self) -> f64 {
        self.attitude.y
    }

    /// Yaw angle [deg]
    pub fn yaw(&self) -> f64 {
        self.attitude.z
    }

    /// Altitude above the ground-frame origin [m]. NED z points down.
    pub fn altitude(&self) -> f64 {
        -self.position.z
    }
}
