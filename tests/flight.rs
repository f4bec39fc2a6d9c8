//! End-to-end stepping scenarios exercising the whole per-tick pipeline.

use approx::assert_relative_eq;
use nalgebra::Vector3;

use sixdof::config::{FixedStartConfig, StartConfig};
use sixdof::{
    AeroCoefficients, Aircraft, AircraftControls, Airplane, AirplaneConfig, ControlInputs,
    StandardAtmosphere,
};
use sixdof::environment::AtmosphereModel;

/// A configuration with every aerodynamic derivative zeroed, for scenarios
/// that isolate gravity and thrust.
fn ballistic_config(altitude: f64) -> AirplaneConfig {
    let mut config = AirplaneConfig::aerosonde();
    config.aero_coef = AeroCoefficients {
        lift: sixdof::config::LiftCoefficients {
            c_l_0: 0.0,
            c_l_alpha: 0.0,
            c_l_q: 0.0,
            c_l_deltae: 0.0,
        },
        drag: sixdof::config::DragCoefficients {
            c_d_0: 0.0,
            c_d_alpha: 0.0,
            c_d_q: 0.0,
            c_d_deltae: 0.0,
        },
        side_force: sixdof::config::SideForceCoefficients {
            c_y_beta: 0.0,
            c_y_p: 0.0,
            c_y_r: 0.0,
            c_y_deltaa: 0.0,
            c_y_deltar: 0.0,
        },
        roll: sixdof::config::RollCoefficients {
            c_l_beta: 0.0,
            c_l_p: 0.0,
            c_l_r: 0.0,
            c_l_deltaa: 0.0,
            c_l_deltar: 0.0,
        },
        pitch: sixdof::config::PitchCoefficients {
            c_m_0: 0.0,
            c_m_alpha: 0.0,
            c_m_q: 0.0,
            c_m_deltae: 0.0,
        },
        yaw: sixdof::config::YawCoefficients {
            c_n_beta: 0.0,
            c_n_p: 0.0,
            c_n_r: 0.0,
            c_n_deltaa: 0.0,
            c_n_deltar: 0.0,
        },
    };
    config.start_config = StartConfig::Fixed(FixedStartConfig {
        position: Vector3::new(0.0, 0.0, -altitude),
        speed: 0.0,
        heading: 0.0,
    });
    config
}

fn neutral_controls() -> AircraftControls {
    AircraftControls::FixedWing(ControlInputs::default())
}

#[test]
fn gravity_only_free_fall_matches_half_g_t_squared() {
    let altitude = 2000.0;
    let mut airplane = Airplane::new(ballistic_config(altitude)).unwrap();

    let dt = 0.01;
    let steps = 100; // 1 second
    for _ in 0..steps {
        airplane.step(&neutral_controls(), &Vector3::zeros(), dt).unwrap();
    }

    let t = steps as f64 * dt;
    let gravity = StandardAtmosphere.at_altitude(altitude).unwrap().gravity;
    let expected_drop = 0.5 * gravity * t * t;
    let actual_drop = airplane.spatial().position.z; // NED: +z is down

    // Explicit Euler lags the analytic parabola by at most g·t·dt/2
    assert!(
        (actual_drop - expected_drop).abs() <= gravity * t * dt,
        "free-fall drop {actual_drop} m differs from ½gt² = {expected_drop} m beyond the Euler bound"
    );
    // Velocity integrates exactly for a constant force
    assert_relative_eq!(
        airplane.spatial().velocity.z,
        gravity * t,
        epsilon = 1e-2
    );
}

#[test]
fn powered_level_flight_stays_finite_and_in_band() {
    let mut config = AirplaneConfig {
        start_config: StartConfig::Fixed(FixedStartConfig {
            position: Vector3::new(0.0, 0.0, -1500.0),
            speed: 30.0,
            heading: 45.0,
        }),
        ..AirplaneConfig::aerosonde()
    };
    // Neutral ailerons cannot hold the propeller reaction torque; drop it
    // so ten hands-off seconds stay wings-level.
    config.propeller.c_q = 0.0;
    let mut airplane = Airplane::new(config).unwrap();
    let controls = AircraftControls::FixedWing(ControlInputs {
        throttle: 5000.0,
        ..Default::default()
    });

    for _ in 0..1000 {
        airplane.step(&controls, &Vector3::zeros(), 0.01).unwrap();
        let spatial = airplane.spatial();
        assert!(spatial.position.iter().all(|v| v.is_finite()));
        assert!(spatial.velocity.iter().all(|v| v.is_finite()));
        assert!(airplane.air_data().true_airspeed.is_finite());
    }

    // Ten seconds of powered flight should carry the aircraft forward
    let ground_distance = airplane.spatial().position.xy().norm();
    assert!(ground_distance > 100.0);
}

#[test]
fn steady_tailwind_extends_ground_track() {
    let make = || {
        Airplane::new(AirplaneConfig {
            start_config: StartConfig::Fixed(FixedStartConfig {
                position: Vector3::new(0.0, 0.0, -1000.0),
                speed: 30.0,
                heading: 0.0,
            }),
            ..AirplaneConfig::aerosonde()
        })
        .unwrap()
    };
    let mut calm = make();
    let mut tailwind = make();
    let controls = AircraftControls::FixedWing(ControlInputs {
        throttle: 4000.0,
        ..Default::default()
    });
    let wind = Vector3::new(10.0, 0.0, 0.0); // blowing north, same as heading

    for _ in 0..500 {
        calm.step(&controls, &Vector3::zeros(), 0.01).unwrap();
        tailwind.step(&controls, &wind, 0.01).unwrap();
    }

    // The tailwind lowers airspeed, hence drag, and the ground track grows
    assert!(tailwind.air_data().true_airspeed < calm.air_data().true_airspeed);
}

#[test]
fn vehicles_do_not_share_state() {
    let mut first = Airplane::new(ballistic_config(1000.0)).unwrap();
    let mut second = Airplane::new(ballistic_config(1000.0)).unwrap();
    let mut reference = Airplane::new(ballistic_config(1000.0)).unwrap();

    for _ in 0..50 {
        first.step(&neutral_controls(), &Vector3::zeros(), 0.01).unwrap();
        second.step(&neutral_controls(), &Vector3::zeros(), 0.01).unwrap();
    }
    for _ in 0..50 {
        reference.step(&neutral_controls(), &Vector3::zeros(), 0.01).unwrap();
    }

    // Stepping deterministic vehicles interleaved or alone is identical
    assert_eq!(first.spatial().position, reference.spatial().position);
    assert_eq!(second.spatial().position, reference.spatial().position);
}

#[test]
fn config_variants_build_and_step_behind_the_trait() {
    use sixdof::config::QuadrotorConfig;
    use sixdof::{AircraftConfig, RotorCommands};

    let configs = vec![
        (
            AircraftConfig::Airplane(AirplaneConfig::twin_otter()),
            AircraftControls::FixedWing(ControlInputs {
                throttle: 1200.0,
                ..Default::default()
            }),
        ),
        (
            AircraftConfig::Quadrotor(QuadrotorConfig::default()),
            AircraftControls::Quad(RotorCommands::default()),
        ),
    ];

    for (config, controls) in configs {
        let mut vehicle = sixdof::vehicles::build(config).unwrap();
        for _ in 0..50 {
            vehicle.step(&controls, &Vector3::zeros(), 0.01).unwrap();
        }
        assert!(vehicle.spatial().position.iter().all(|v| v.is_finite()));
        assert!(vehicle.air_data().true_airspeed.is_finite());
    }
}

#[test]
fn elevator_deflection_pitches_the_aircraft() {
    let config = AirplaneConfig {
        start_config: StartConfig::Fixed(FixedStartConfig {
            position: Vector3::new(0.0, 0.0, -1000.0),
            speed: 30.0,
            heading: 0.0,
        }),
        ..AirplaneConfig::aerosonde()
    };
    let mut neutral = Airplane::new(config.clone()).unwrap();
    let mut deflected = Airplane::new(config).unwrap();

    let up_elevator = AircraftControls::FixedWing(ControlInputs {
        elevator: -0.2, // c_m_deltae < 0: negative deflection pitches up
        throttle: 4000.0,
        ..Default::default()
    });
    let hands_off = AircraftControls::FixedWing(ControlInputs {
        throttle: 4000.0,
        ..Default::default()
    });

    for _ in 0..100 {
        neutral.step(&hands_off, &Vector3::zeros(), 0.01).unwrap();
        deflected.step(&up_elevator, &Vector3::zeros(), 0.01).unwrap();
    }

    assert!(deflected.spatial().pitch() > neutral.spatial().pitch());
}
