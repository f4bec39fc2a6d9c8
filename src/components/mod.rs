pub mod air_data;
pub mod controls;
pub mod physics;
pub mod spatial;

pub use air_data::AirData;
pub use controls::{AircraftControls, ControlInputs, RotorCommands};
pub use physics::{Force, ForceCategory, Moment, PhysicsComponent, ReferenceFrame};
pub use spatial::SpatialComponent;
