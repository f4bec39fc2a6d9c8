//! Fixed-step explicit-Euler rigid-body integrator, split into the two
//! operations the per-tick pipeline invokes in order: kinetics (loads to
//! velocities) and kinematics (velocities to position and attitude).

use log::warn;
use nalgebra::Vector3;

use crate::components::{PhysicsComponent, SpatialComponent};
use crate::error::PhysicsError;
use crate::transforms;

/// The Euler-rate relation divides by cos(pitch); below this margin the
/// attitude representation has lost a degree of freedom and the step is
/// rejected instead of integrating toward infinity.
pub const MIN_COS_PITCH: f64 = 1e-4;

/// Advances body-frame velocity and angular velocity by one step from the
/// net force and moment.
///
/// `v̇ = F/m − ω×v`; angular acceleration is recovered by solving
/// `I·ω̇ = M − ω×(I·ω)` rather than forming an explicit inverse.
pub fn kinetics(physics: &PhysicsComponent, spatial: &mut SpatialComponent, dt: f64) {
    let omega = spatial.angular_velocity;

    let acceleration = physics.net_force / physics.mass - omega.cross(&spatial.velocity);

    let angular_momentum = physics.inertia * omega;
    let h_dot = physics.net_moment - omega.cross(&angular_momentum);
    let angular_acceleration = physics.inertia.lu().solve(&h_dot).unwrap_or_else(|| {
        // Construction validates invertibility, so this path is unreachable
        // for any vehicle built through the public API.
        warn!("inertia solve failed; holding angular velocity");
        Vector3::zeros()
    });

    spatial.velocity += acceleration * dt;
    spatial.angular_velocity += angular_acceleration * dt;
}

/// Advances position and Euler attitude by one step from the body-frame
/// velocities.
///
/// Fails fast at the pitch singularity; on error the spatial state is left
/// unchanged.
pub fn kinematics(spatial: &mut SpatialComponent, dt: f64) -> Result<(), PhysicsError> {
    let roll = spatial.roll().to_radians();
    let pitch = spatial.pitch().to_radians();

    if pitch.cos().abs() < MIN_COS_PITCH {
        return Err(PhysicsError::PitchSingularity {
            pitch: spatial.pitch(),
        });
    }

    // Position: body velocity rotated into the ground frame
    let lbg = transforms::ground_to_body(spatial.roll(), spatial.pitch(), spatial.yaw());
    let velocity_ground = lbg.transpose() * spatial.velocity;
    spatial.position += velocity_ground * dt;

    // Attitude: body rates mapped to Euler-angle rates
    let p = spatial.angular_velocity.x;
    let q = spatial.angular_velocity.y;
    let r = spatial.angular_velocity.z;
    let (s_phi, c_phi) = roll.sin_cos();
    let t_theta = pitch.tan();
    let sec_theta = 1.0 / pitch.cos();

    let roll_rate = p + (q * s_phi + r * c_phi) * t_theta;
    let pitch_rate = q * c_phi - r * s_phi;
    let yaw_rate = (q * s_phi + r * c_phi) * sec_theta;

    spatial.attitude += Vector3::new(
        roll_rate.to_degrees(),
        pitch_rate.to_degrees(),
        yaw_rate.to_degrees(),
    ) * dt;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Matrix3;

    fn test_physics(mass: f64) -> PhysicsComponent {
        PhysicsComponent::new(mass, Matrix3::from_diagonal(&Vector3::new(1.0, 2.0, 3.0)))
            .unwrap()
    }

    #[test]
    fn test_pure_force_integrates_exactly() {
        // With omega = 0 there is no cross term: v += (F/m)·dt exactly.
        let mut physics = test_physics(10.0);
        physics.net_force = Vector3::new(50.0, 0.0, 0.0);
        let mut spatial = SpatialComponent::default();

        kinetics(&physics, &mut spatial, 0.01);

        assert_eq!(spatial.velocity, Vector3::new(0.05, 0.0, 0.0));
        assert_eq!(spatial.angular_velocity, Vector3::zeros());
    }

    #[test]
    fn test_angular_acceleration_recovered_by_solve() {
        let mut physics = test_physics(10.0);
        physics.net_moment = Vector3::new(1.0, 2.0, 3.0);
        let mut spatial = SpatialComponent::default();

        kinetics(&physics, &mut spatial, 1.0);

        // Diagonal inertia diag(1,2,3): omega_dot = (1, 1, 1)
        assert_relative_eq!(spatial.angular_velocity.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(spatial.angular_velocity.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(spatial.angular_velocity.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_coriolis_term_couples_velocity() {
        let physics = test_physics(1.0);
        let mut spatial = SpatialComponent::default();
        spatial.velocity = Vector3::new(10.0, 0.0, 0.0);
        spatial.angular_velocity = Vector3::new(0.0, 0.0, 1.0); // yaw rate

        kinetics(&physics, &mut spatial, 0.1);

        // omega x v = (0,0,1)x(10,0,0) = (0,10,0); v_dot = -(0,10,0)
        assert_relative_eq!(spatial.velocity.y, -1.0, epsilon = 1e-12);
        assert_relative_eq!(spatial.velocity.x, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_level_flight_position_integration() {
        let mut spatial = SpatialComponent::default();
        spatial.velocity = Vector3::new(30.0, 0.0, 0.0);

        kinematics(&mut spatial, 0.1).unwrap();

        assert_relative_eq!(spatial.position.x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(spatial.position.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_heading_rotates_ground_track() {
        let mut spatial = SpatialComponent::default();
        spatial.attitude = Vector3::new(0.0, 0.0, 90.0);
        spatial.velocity = Vector3::new(30.0, 0.0, 0.0);

        kinematics(&mut spatial, 1.0).unwrap();

        // Heading east: body x-velocity becomes ground east displacement
        assert_relative_eq!(spatial.position.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(spatial.position.y, 30.0, epsilon = 1e-9);
    }

    #[test]
    fn test_pure_roll_rate_integrates_attitude() {
        let mut spatial = SpatialComponent::default();
        spatial.angular_velocity = Vector3::new(0.1, 0.0, 0.0);

        let steps = 100;
        for _ in 0..steps {
            kinematics(&mut spatial, 0.01).unwrap();
        }

        // 0.1 rad/s for 1 s
        assert_relative_eq!(spatial.roll(), 0.1_f64.to_degrees(), epsilon = 1e-9);
        assert_relative_eq!(spatial.pitch(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_pitch_singularity_is_rejected() {
        let mut spatial = SpatialComponent::default();
        spatial.attitude = Vector3::new(0.0, 90.0, 0.0);
        spatial.velocity = Vector3::new(10.0, 0.0, 0.0);

        let before = spatial.clone();
        let result = kinematics(&mut spatial, 0.01);

        assert!(matches!(
            result,
            Err(PhysicsError::PitchSingularity { .. })
        ));
        // State untouched on rejection
        assert_eq!(spatial.position, before.position);
        assert_eq!(spatial.attitude, before.attitude);
    }

    #[test]
    fn test_yaw_rate_couples_at_bank() {
        // At 45 deg bank a pure body pitch rate drives both pitch and yaw.
        let mut spatial = SpatialComponent::default();
        spatial.attitude = Vector3::new(45.0, 0.0, 0.0);
        spatial.angular_velocity = Vector3::new(0.0, 0.1, 0.0);

        kinematics(&mut spatial, 0.1).unwrap();

        assert!(spatial.pitch() > 0.0);
        assert!(spatial.yaw() > 0.0);
    }
}
