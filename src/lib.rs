//! 6-DOF flight dynamics for powered fixed-wing aircraft.
//!
//! The crate advances a vehicle's translational and rotational state in
//! fixed time steps under aerodynamic, gravitational and propulsive loads.
//! It is a library core: an external control/guidance loop supplies the
//! control inputs, a ground-frame wind vector and the step size once per
//! tick, and reads position, attitude and air data back for feedback.

pub mod components;
pub mod config;
pub mod environment;
pub mod error;
pub mod systems;
pub mod transforms;
pub mod vehicles;

pub use components::{
    AirData, AircraftControls, ControlInputs, Force, ForceCategory, Moment, PhysicsComponent,
    ReferenceFrame, RotorCommands, SpatialComponent,
};
pub use config::{
    AeroCoefficients, AircraftConfig, AircraftGeometry, AirplaneConfig, MassModel,
    PropellerConfig, QuadrotorConfig, StartConfig,
};
pub use environment::{AtmosphereModel, AtmosphereState, StandardAtmosphere};
pub use error::{ConfigError, PhysicsError};
pub use vehicles::{Aircraft, Airplane, Quadrotor};
