use serde::{Deserialize, Serialize};

use crate::error::PhysicsError;

/// Sea-level standard temperature [K]
pub const SEA_LEVEL_TEMPERATURE: f64 = 288.15;
/// Sea-level standard pressure [Pa]
pub const SEA_LEVEL_PRESSURE: f64 = 101_325.0;
/// Sea-level standard density [kg/m³]
pub const SEA_LEVEL_DENSITY: f64 = 1.225;
/// Sea-level standard gravity [m/s²]
pub const SEA_LEVEL_GRAVITY: f64 = 9.80665;

/// Effective Earth radius for the geopotential correction [km]
const EARTH_RADIUS_KM: f64 = 6356.766;
/// Tropopause geopotential height [km]
const TROPOPAUSE_KM: f64 = 11.0;
/// Top of the supported band [km]
const MAX_ALTITUDE_KM: f64 = 20.0;
/// Tropopause temperature, constant through the lower stratosphere [K]
const TROPOPAUSE_TEMPERATURE: f64 = 216.65;
/// Pressure scale height of the isothermal lower stratosphere [km]
const STRATOSPHERE_SCALE_KM: f64 = 6.34162;

/// Ambient conditions at one altitude, as produced by an [`AtmosphereModel`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AtmosphereState {
    /// Geometric altitude the state was evaluated at [m]
    pub altitude: f64,
    /// Static temperature [K]
    pub temperature: f64,
    /// Static pressure [Pa]
    pub pressure: f64,
    /// Density [kg/m³]
    pub density: f64,
    /// Gravitational acceleration [m/s²]
    pub gravity: f64,
    /// Speed of sound [m/s]
    pub speed_of_sound: f64,
}

impl Default for AtmosphereState {
    fn default() -> Self {
        Self {
            altitude: 0.0,
            temperature: SEA_LEVEL_TEMPERATURE,
            pressure: SEA_LEVEL_PRESSURE,
            density: SEA_LEVEL_DENSITY,
            gravity: SEA_LEVEL_GRAVITY,
            speed_of_sound: 20.0468 * SEA_LEVEL_TEMPERATURE.sqrt(),
        }
    }
}

/// Strategy interface for the altitude-to-ambient-conditions mapping.
///
/// Exactly one conforming implementation ships with the crate
/// ([`StandardAtmosphere`]); the trait exists so a driver can substitute a
/// constant-density or hot-day model without touching the vehicle code.
pub trait AtmosphereModel {
    /// Evaluate ambient conditions at a geometric altitude in meters,
    /// positive up. Altitudes outside the supported band fail fast rather
    /// than returning stale or extrapolated values.
    fn at_altitude(&self, altitude: f64) -> Result<AtmosphereState, PhysicsError>;
}

/// Two-layer International Standard Atmosphere, valid for geometric
/// altitudes in [0, 20] km.
///
/// Troposphere (H ≤ 11 km): linear temperature lapse,
/// `w = 1 - H/44.3308`, `T = T0·w`, `P = P0·w^5.2559`, `ρ = ρ0·w^4.2559`.
/// Lower stratosphere (11 < H ≤ 20 km): isothermal at 216.65 K with
/// exponentially decaying pressure and density.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StandardAtmosphere;

impl AtmosphereModel for StandardAtmosphere {
    fn at_altitude(&self, altitude: f64) -> Result<AtmosphereState, PhysicsError> {
        if !altitude.is_finite() || altitude < 0.0 || altitude > MAX_ALTITUDE_KM * 1000.0 {
            return Err(PhysicsError::AltitudeOutOfRange { altitude });
        }

        let z_km = altitude / 1000.0;
        // Geopotential height from geometric altitude, Earth-radius correction
        let h = z_km / (1.0 + z_km / EARTH_RADIUS_KM);

        let (temperature, pressure, density) = if h <= TROPOPAUSE_KM {
            let w = 1.0 - h / 44.3308;
            (
                SEA_LEVEL_TEMPERATURE * w,
                SEA_LEVEL_PRESSURE * w.powf(5.2559),
                SEA_LEVEL_DENSITY * w.powf(4.2559),
            )
        } else {
            let w11 = 1.0 - TROPOPAUSE_KM / 44.3308;
            let pressure_11 = SEA_LEVEL_PRESSURE * w11.powf(5.2559);
            let density_11 = SEA_LEVEL_DENSITY * w11.powf(4.2559);
            let decay = (-(h - TROPOPAUSE_KM) / STRATOSPHERE_SCALE_KM).exp();
            (
                TROPOPAUSE_TEMPERATURE,
                pressure_11 * decay,
                density_11 * decay,
            )
        };

        let gravity = SEA_LEVEL_GRAVITY / (1.0 + h / EARTH_RADIUS_KM).powi(2);
        let speed_of_sound = 20.0468 * temperature.sqrt();

        Ok(AtmosphereState {
            altitude,
            temperature,
            pressure,
            density,
            gravity,
            speed_of_sound,
        })
    }
}
