pub mod atmosphere;

pub use atmosphere::{AtmosphereModel, AtmosphereState, StandardAtmosphere};
