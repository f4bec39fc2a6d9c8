use thiserror::Error;

/// Domain errors raised while stepping the simulation.
///
/// These are deterministic numerical preconditions, not resource failures:
/// a violated precondition is reported to the caller instead of letting
/// NaN/infinity propagate into the persistent rigid-body state.
#[derive(Error, Debug)]
pub enum PhysicsError {
    #[error("altitude {altitude} m is outside the supported atmosphere band [0, 20000] m")]
    AltitudeOutOfRange { altitude: f64 },

    #[error("pitch {pitch} deg is too close to the +/-90 deg kinematic singularity")]
    PitchSingularity { pitch: f64 },

    #[error("control input mismatch: this vehicle expects {expected} controls, got {got}")]
    ControlMismatch {
        expected: &'static str,
        got: &'static str,
    },
}

/// Errors raised while building or loading a vehicle configuration.
///
/// Configuration problems (zero mass, singular inertia, malformed files)
/// are rejected at construction time, never discovered mid-simulation.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid aircraft configuration: {0}")]
    ValidationError(String),
}
