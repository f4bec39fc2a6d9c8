use nalgebra::Vector3;

use crate::components::{AirData, SpatialComponent};
use crate::transforms;

/// Below this relative-wind magnitude the flow direction is undefined and
/// α, β are reported as zero.
pub const MIN_AIRSPEED_THRESHOLD: f64 = 1e-6;

/// Computes the air-data set (α, β, Va, dynamic pressure) from the current
/// spatial state, the ground-frame wind and the ambient density.
pub struct AirDataCalculation;

impl AirDataCalculation {
    pub fn calculate(spatial: &SpatialComponent, wind: &Vector3<f64>, density: f64) -> AirData {
        // Wind arrives in the ground frame; the body-frame relative wind is
        // what the aerodynamics sees.
        let lbg = transforms::ground_to_body(spatial.roll(), spatial.pitch(), spatial.yaw());
        let wind_body = lbg * wind;
        let relative_velocity = spatial.velocity - wind_body;

        let du = relative_velocity.x;
        let dv = relative_velocity.y;
        let dw = relative_velocity.z;

        let airspeed = relative_velocity.norm();
        let alpha = Self::calculate_alpha(du, dw);
        let beta = Self::calculate_beta(du, dv, dw);
        let dynamic_pressure = 0.5 * density * airspeed * airspeed;

        AirData {
            true_airspeed: airspeed,
            alpha,
            beta,
            dynamic_pressure,
            density,
            relative_velocity,
            wind_velocity: *wind,
        }
    }

    fn calculate_alpha(du: f64, dw: f64) -> f64 {
        if du.abs() < MIN_AIRSPEED_THRESHOLD {
            0.0
        } else {
            dw.atan2(du)
        }
    }

    fn calculate_beta(du: f64, dv: f64, dw: f64) -> f64 {
        // With no flow in the x-z plane the sideslip angle is undefined and
        // reported as zero, even for a purely sideways relative wind.
        let planar = du.hypot(dw);
        if planar < MIN_AIRSPEED_THRESHOLD {
            0.0
        } else {
            dv.atan2(planar)
        }
    }
}
