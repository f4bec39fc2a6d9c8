use nalgebra::Vector3;

use crate::components::{
    AirData, AircraftControls, Force, ForceCategory, Moment, PhysicsComponent, ReferenceFrame,
    RotorCommands, SpatialComponent,
};
use crate::config::QuadrotorConfig;
use crate::environment::{AtmosphereModel, StandardAtmosphere};
use crate::error::{ConfigError, PhysicsError};
use crate::systems::{kinematics, kinetics, propulsive_force_moment, AirDataCalculation};
use crate::transforms;
use crate::vehicles::Aircraft;

/// A quadrotor in plus configuration sharing the fixed-wing stepping
/// contract.
///
/// Front and rear rotors spin counterclockwise (viewed from above), left
/// and right clockwise; each rotor thrusts along body −z. The mixer maps
/// the four rotor speeds to a collective force plus roll/pitch/yaw moments,
/// then the same kinetics/kinematics advance the state.
pub struct Quadrotor {
    config: QuadrotorConfig,
    atmosphere: Box<dyn AtmosphereModel + Send + Sync>,
    pub spatial: SpatialComponent,
    pub physics: PhysicsComponent,
    pub air_data: AirData,
}

impl Quadrotor {
    pub fn new(config: QuadrotorConfig) -> Result<Self, ConfigError> {
        Self::with_atmosphere(config, Box::new(StandardAtmosphere))
    }

    /// Build a quadrotor with a caller-supplied atmosphere model.
    pub fn with_atmosphere(
        config: QuadrotorConfig,
        atmosphere: Box<dyn AtmosphereModel + Send + Sync>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
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

    pub fn config(&self) -> &QuadrotorConfig {
        &self.config
    }

    /// Per-rotor thrust and torque magnitudes at the given density.
    fn rotor_loads(&self, density: f64, commands: &RotorCommands) -> ([f64; 4], [f64; 4]) {
        let mut thrusts = [0.0; 4];
        let mut torques = [0.0; 4];
        for (i, rpm) in [commands.front, commands.right, commands.rear, commands.left]
            .into_iter()
            .enumerate()
        {
            let (force, moment) = propulsive_force_moment(&self.config.rotor, density, rpm);
            thrusts[i] = force.x;
            torques[i] = -moment.x;
        }
        (thrusts, torques)
    }
}

impl Aircraft for Quadrotor {
    fn step(
        &mut self,
        controls: &AircraftControls,
        wind: &Vector3<f64>,
        dt: f64,
    ) -> Result<(), PhysicsError> {
        let commands = match controls {
            AircraftControls::Quad(commands) => commands,
            other => {
                return Err(PhysicsError::ControlMismatch {
                    expected: "quad",
                    got: other.kind(),
                })
            }
        };

        let atmosphere = self.atmosphere.at_altitude(self.spatial.altitude())?;
        let air_data = AirDataCalculation::calculate(&self.spatial, wind, atmosphere.density);

        let ([t_front, t_right, t_rear, t_left], [q_front, q_right, q_rear, q_left]) =
            self.rotor_loads(atmosphere.density, commands);

        let collective = t_front + t_right + t_rear + t_left;
        let arm = self.config.arm_length;
        // CCW front/rear react clockwise on the body (+z yaw in NED),
        // CW left/right react the other way.
        let mixer_moment = Vector3::new(
            arm * (t_left - t_right),
            arm * (t_front - t_rear),
            (q_front + q_rear) - (q_right + q_left),
        );

        let lbg =
            transforms::ground_to_body(self.spatial.roll(), self.spatial.pitch(), self.spatial.yaw());
        let gravity_ground = Vector3::new(0.0, 0.0, self.physics.mass * atmosphere.gravity);

        self.physics.clear_forces();
        self.physics.add_force(Force {
            vector: Vector3::new(0.0, 0.0, -collective),
            frame: ReferenceFrame::Body,
            category: ForceCategory::Propulsive,
        });
        self.physics.add_moment(Moment {
            vector: mixer_moment,
            frame: ReferenceFrame::Body,
            category: ForceCategory::Propulsive,
        });
        self.physics.add_force(Force {
            vector: lbg * gravity_ground,
            frame: ReferenceFrame::Body,
            category: ForceCategory::Gravitational,
        });
        self.physics.collect_net();

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
