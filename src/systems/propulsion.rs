use nalgebra::Vector3;

use crate::config::PropellerConfig;

/// Calculates propeller thrust and reaction torque in the body frame.
///
/// `Thrust = c_t·ρ·D⁴·(rpm/60)²` along +x; the reaction torque
/// `c_q·ρ·D⁵·(rpm/60)²` acts about −x, opposing the propeller's rotation.
pub fn propulsive_force_moment(
    prop: &PropellerConfig,
    density: f64,
    rpm: f64,
) -> (Vector3<f64>, Vector3<f64>) {
    let n = rpm / 60.0;
    let n2 = n * n;
    let thrust = prop.c_t * density * prop.diameter.powi(4) * n2;
    let torque = prop.c_q * density * prop.diameter.powi(5) * n2;

    (
        Vector3::new(thrust, 0.0, 0.0),
        Vector3::new(-torque, 0.0, 0.0),
    )
}
