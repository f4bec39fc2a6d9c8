use serde::{Deserialize, Serialize};

/// Named control inputs for a fixed-wing aircraft.
///
/// Replaces the raw 4-element control vector: the positional indexing made
/// it too easy to transpose the throttle and rudder channels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ControlInputs {
    /// Aileron deflection (radians).
    pub aileron: f64,
    /// Elevator deflection (radians).
    pub elevator: f64,
    /// Commanded propeller speed (RPM).
    pub throttle: f64,
    /// Rudder deflection (radians).
    pub rudder: f64,
}

impl Default for ControlInputs {
    /// Provides a default state where all control surfaces are neutral.
    fn default() -> Self {
        Self {
            aileron: 0.0,
            elevator: 0.0,
            throttle: 0.0,
            rudder: 0.0,
        }
    }
}

/// Per-rotor speed commands for a quadrotor in plus configuration (RPM).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RotorCommands {
    pub front: f64,
    pub right: f64,
    pub rear: f64,
    pub left: f64,
}

/// Control inputs for any vehicle that implements the stepping contract.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum AircraftControls {
    FixedWing(ControlInputs),
    Quad(RotorCommands),
}

impl AircraftControls {
    /// Short variant name, used in control-mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            AircraftControls::FixedWing(_) => "fixed-wing",
            AircraftControls::Quad(_) => "quad",
        }
    }
}
