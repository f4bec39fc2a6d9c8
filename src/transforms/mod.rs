//! Direction-cosine matrices between the ground, body and wind frames.
//!
//! Both builders return orthonormal matrices, so `transpose()` is the
//! inverse rotation in either direction.

use nalgebra::Matrix3;

/// Rotation from the NED ground frame to the body frame for a 3-2-1
/// (yaw ψ, pitch θ, roll φ) Euler sequence. Angles in degrees.
pub fn ground_to_body(roll: f64, pitch: f64, yaw: f64) -> Matrix3<f64> {
    let (s_phi, c_phi) = roll.to_radians().sin_cos();
    let (s_theta, c_theta) = pitch.to_radians().sin_cos();
    let (s_psi, c_psi) = yaw.to_radians().sin_cos();

    Matrix3::new(
        c_theta * c_psi,
        c_theta * s_psi,
        -s_theta,
        s_phi * s_theta * c_psi - c_phi * s_psi,
        s_phi * s_theta * s_psi + c_phi * c_psi,
        s_phi * c_theta,
        c_phi * s_theta * c_psi + s_phi * s_psi,
        c_phi * s_theta * s_psi - s_phi * c_psi,
        c_phi * c_theta,
    )
}

/// Rotation from the body frame to the wind/stability frame for angle of
/// attack `alpha` and sideslip `beta`. Angles in radians.
pub fn body_to_wind(alpha: f64, beta: f64) -> Matrix3<f64> {
    let (s_a, c_a) = alpha.sin_cos();
    let (s_b, c_b) = beta.sin_cos();

    Matrix3::new(
        c_a * c_b,
        s_b,
        s_a * c_b,
        -c_a * s_b,
        c_b,
        -s_a * s_b,
        -s_a,
        0.0,
        c_a,
    )
}
