pub mod aerodynamics;
pub mod air_data;
pub mod integrator;
pub mod propulsion;

pub use aerodynamics::aerodynamic_force_moment;
pub use air_data::AirDataCalculation;
pub use integrator::{kinematics, kinetics};
pub use propulsion::propulsive_force_moment;
