use nalgebra::Vector3;

use crate::components::{AirData, ControlInputs};
use crate::config::{AeroCoefficients, AircraftGeometry};

/// Airspeed floor below which the aerodynamic load is treated as zero.
/// Nondimensionalizing body rates divides by airspeed, so anything slower
/// degenerates instead of producing NaN.
pub const MIN_AIRSPEED_THRESHOLD: f64 = 0.1;

/// Calculates the aerodynamic force and moment in the wind/stability frame.
///
/// The force follows the wind-axes convention (drag along -x, side force
/// along +y, lift along -z) and must be rotated into the body frame by the
/// orchestrator. The moment is roll/pitch/yaw about the body axes,
/// dimensionalized by span, chord and span respectively, and is used as-is.
pub fn aerodynamic_force_moment(
    geometry: &AircraftGeometry,
    coeffs: &AeroCoefficients,
    air_data: &AirData,
    angular_velocity: &Vector3<f64>,
    controls: &ControlInputs,
) -> (Vector3<f64>, Vector3<f64>) {
    let airspeed = air_data.true_airspeed;
    if airspeed < MIN_AIRSPEED_THRESHOLD || air_data.dynamic_pressure <= 1e-6 {
        return (Vector3::zeros(), Vector3::zeros());
    }

    let alpha = air_data.alpha;
    let beta = air_data.beta;
    let q_dyn = air_data.dynamic_pressure;

    // Nondimensional body rates
    let p = angular_velocity.x;
    let q = angular_velocity.y;
    let r = angular_velocity.z;
    let v_denom = 2.0 * airspeed;
    let p_hat = geometry.wing_span * p / v_denom;
    let q_hat = geometry.mac * q / v_denom;
    let r_hat = geometry.wing_span * r / v_denom;

    let c_lift = coeffs.lift.c_l_0
        + coeffs.lift.c_l_alpha * alpha
        + coeffs.lift.c_l_q * q_hat
        + coeffs.lift.c_l_deltae * controls.elevator;

    let c_drag = coeffs.drag.c_d_0
        + coeffs.drag.c_d_alpha * alpha
        + coeffs.drag.c_d_q * q_hat
        + coeffs.drag.c_d_deltae * controls.elevator;

    let c_side = coeffs.side_force.c_y_beta * beta
        + coeffs.side_force.c_y_p * p_hat
        + coeffs.side_force.c_y_r * r_hat
        + coeffs.side_force.c_y_deltaa * controls.aileron
        + coeffs.side_force.c_y_deltar * controls.rudder;

    let c_roll = coeffs.roll.c_l_beta * beta
        + coeffs.roll.c_l_p * p_hat
        + coeffs.roll.c_l_r * r_hat
        + coeffs.roll.c_l_deltaa * controls.aileron
        + coeffs.roll.c_l_deltar * controls.rudder;

    let c_pitch = coeffs.pitch.c_m_0
        + coeffs.pitch.c_m_alpha * alpha
        + coeffs.pitch.c_m_q * q_hat
        + coeffs.pitch.c_m_deltae * controls.elevator;

    let c_yaw = coeffs.yaw.c_n_beta * beta
        + coeffs.yaw.c_n_p * p_hat
        + coeffs.yaw.c_n_r * r_hat
        + coeffs.yaw.c_n_deltaa * controls.aileron
        + coeffs.yaw.c_n_deltar * controls.rudder;

    let qs = q_dyn * geometry.wing_area;
    let force = Vector3::new(-qs * c_drag, qs * c_side, -qs * c_lift);
    let moment = Vector3::new(
        qs * geometry.wing_span * c_roll,
        qs * geometry.mac * c_pitch,
        qs * geometry.wing_span * c_yaw,
    );

    (force, moment)
}
