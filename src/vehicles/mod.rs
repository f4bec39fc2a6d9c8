mod airplane;
mod quadrotor;
mod traits;

pub use airplane::Airplane;
pub use quadrotor::Quadrotor;
pub use traits::Aircraft;

use crate::config::AircraftConfig;
use crate::error::ConfigError;

/// Construct the vehicle a configuration describes, behind the shared
/// stepping contract.
pub fn build(config: AircraftConfig) -> Result<Box<dyn Aircraft + Send + Sync>, ConfigError> {
    match config {
        AircraftConfig::Airplane(config) => Ok(Box::new(Airplane::new(config)?)),
        AircraftConfig::Quadrotor(config) => Ok(Box::new(Quadrotor::new(config)?)),
    }
}
