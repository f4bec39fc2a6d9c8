use nalgebra::Vector3;

use crate::components::{
    AirData, AircraftControls, Force, ForceCategory, Moment, PhysicsComponent, ReferenceFrame,
    SpatialComponent,
};
use crate::config::AirplaneConfig;
use crate::environment::{AtmosphereModel, StandardAtmosphere};
use crate::error::{ConfigError, PhysicsError};
use crate::systems::{
    aerodynamic_force_moment, kinematics, kinetics, propulsive_force_moment, AirDataCalculation,
};
use crate::transforms;
use crate::vehicles::Aircraft;

/// A powered fixed-wing aircraft.
///
/// Each instance owns its rigid-body state outright; multiple airplanes can
/// be stepped independently (or in parallel, one task per vehicle) since
/// nothing is shared between them.
pub struct Airplane {
    config: AirplaneConfig,
    atmosphere: Box<dyn AtmosphereModel + Send + Sync>,
    pub spatial: SpatialComponent,
    pub physics: PhysicsComponent,
    pub air_data: AirData,
}

impl Airplane {
    /// Build an airplane from its configuration, resolving the start state.
    ///
    /// Mass and inertia are validated here so a bad configuration is
    /// rejected before the first step rather than dividing by zero inside
    /// one.
    pub fn new(config: AirplaneConfig) -> Result<Self, ConfigError> {
        Self::with_atmosphere(config, Box::new(StandardAtmosphere))
    }

    /// Build an airplane with a caller-supplied atmosphere model.
    pub fn with_atmosphere(
        config: AirplaneConfig,
        atmosphere: Box<dyn AtmosphereModel + Send + Sync>,
    ) -> Result<Self, ConfigError> {
        let physics = PhysicsComponent::new(config.mass.mass, config.mass.inertia)?;
        let (position, speed, heading) = config.start_config.generate();
        let spatial = SpatialComponent::at_position_and_airspeed(position, speed, heading);

        Ok(Self {
            config,
            atmosphere,
            spatial,
            physics,
            air_data: AirData::default(),
        })
    }

    pub fn config(&self) -> &AirplaneConfig {
        &self.config
    }
}

impl Aircraft for Airplane {
    /// Per-tick pipeline: relative wind → α/β/Va → aerodynamic load →
    /// gravity → propulsion → sum → kinetics → kinematics.
    fn step(
        &mut self,
        controls: &AircraftControls,
        wind: &Vector3<f64>,
        dt: f64,
    ) -> Result<(), PhysicsError> {
        let inputs = match controls {
            AircraftControls::FixedWing(inputs) => inputs,
            other => {
                return Err(PhysicsError::ControlMismatch {
                    expected: "fixed-wing",
                    got: other.kind(),
                })
            }
        };

        let atmosphere = self.atmosphere.at_altitude(self.spatial.altitude())?;
        let air_data = AirDataCalculation::calculate(&self.spatial, wind, atmosphere.density);

        // Aerodynamic force arrives in the wind frame and needs rotating
        // into body; the moment is already about the body axes.
        let (force_wind, moment_body) = aerodynamic_force_moment(
            &self.config.geometry,
            &self.config.aero_coef,
            &air_data,
            &self.spatial.angular_velocity,
            inputs,
        );
        let lab_t = transforms::body_to_wind(air_data.alpha, air_data.beta).transpose();

        // Gravity acts along ground +z (NED, down); rotate into body
        let lbg =
            transforms::ground_to_body(self.spatial.roll(), self.spatial.pitch(), self.spatial.yaw());
        let gravity_ground = Vector3::new(0.0, 0.0, self.physics.mass * atmosphere.gravity);

        let (thrust, torque) =
            propulsive_force_moment(&self.config.propeller, atmosphere.density, inputs.throttle);

        self.physics.clear_forces();
        self.physics.add_force(Force {
            vector: lab_t * force_wind,
            frame: ReferenceFrame::Body,
            category: ForceCategory::Aerodynamic,
        });
        self.physics.add_moment(Moment {
            vector: moment_body,
            frame: ReferenceFrame::Body,
            category: ForceCategory::Aerodynamic,
        });
        self.physics.add_force(Force {
            vector: lbg * gravity_ground,
            frame: ReferenceFrame::Body,
            category: ForceCategory::Gravitational,
        });
        self.physics.add_force(Force {
            vector: thrust,
            frame: ReferenceFrame::Body,
            category: ForceCategory::Propulsive,
        });
        self.physics.add_moment(Moment {
            vector: torque,
            frame: ReferenceFrame::Body,
            category: ForceCategory::Propulsive,
        });
        self.physics.collect_net();

        // Integrate into a staging copy so a rejected step (e.g. pitch
        // singularity) cannot leave the persistent state half-updated.
        let mut next = self.spatial.clone();
        kinetics(&self.physics, &mut next, dt);
        kinematics(&mut next, dt)?;

        self.spatial = next;
        self.air_data = air_data;
        Ok(())
    }

    fn spatial(&self) -> &SpatialComponent {
        &self.spatial
    }

    fn air_data(&self) -> &AirData {
        &self.air_data
    }
}
