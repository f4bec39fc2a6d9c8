mod aero_coef;
mod aircraft;
mod geometry;
mod loader;
mod mass;
mod propulsion;
mod start;

pub use aero_coef::{
    AeroCoefficients, DragCoefficients, LiftCoefficients, PitchCoefficients, RollCoefficients,
    SideForceCoefficients, YawCoefficients,
};
pub use aircraft::{AircraftConfig, AirplaneConfig, QuadrotorConfig};
pub use geometry::AircraftGeometry;
pub use loader::RawAircraftConfig;
pub use mass::MassModel;
pub use propulsion::PropellerConfig;
pub use start::{FixedStartConfig, RandomStartPosConfig, StartConfig};
