use serde::Deserialize;

use crate::config::aero_coef::{
    AeroCoefficients, DragCoefficients, LiftCoefficients, PitchCoefficients, RollCoefficients,
    SideForceCoefficients, YawCoefficients,
};

/// Flat deserialization target for aircraft YAML files.
///
/// The on-disk format is a single level of scalar fields; the structured
/// configuration is assembled (and validated) from this afterwards.
#[allow(non_snake_case)]
#[derive(Debug, Deserialize)]
pub struct RawAircraftConfig {
    /// Aircraft identification
    pub name: String,

    /// Mass properties
    pub mass: f64,
    pub ixx: f64,
    pub iyy: f64,
    pub izz: f64,
    pub ixz: f64,

    /// Geometry
    pub wing_area: f64,
    pub wing_span: f64,
    pub mac: f64,

    /// Lift coefficients
    pub c_L_0: f64,
    pub c_L_alpha: f64,
    pub c_L_q: f64,
    pub c_L_deltae: f64,

    /// Drag coefficients
    pub c_D_0: f64,
    pub c_D_alpha: f64,
    pub c_D_q: f64,
    pub c_D_deltae: f64,

    /// Side-force coefficients
    pub c_Y_beta: f64,
    pub c_Y_p: f64,
    pub c_Y_r: f64,
    pub c_Y_deltaa: f64,
    pub c_Y_deltar: f64,

    /// Roll-moment coefficients
    pub c_l_beta: f64,
    pub c_l_p: f64,
    pub c_l_r: f64,
    pub c_l_deltaa: f64,
    pub c_l_deltar: f64,

    /// Pitch-moment coefficients
    pub c_m_0: f64,
    pub c_m_alpha: f64,
    pub c_m_q: f64,
    pub c_m_deltae: f64,

    /// Yaw-moment coefficients
    pub c_n_beta: f64,
    pub c_n_p: f64,
    pub c_n_r: f64,
    pub c_n_deltaa: f64,
    pub c_n_deltar: f64,

    /// Propulsion
    pub prop_diameter: f64,
    pub c_t_prop: f64,
    pub c_q_prop: f64,
}

impl RawAircraftConfig {
    pub(crate) fn aero_coefficients(&self) -> AeroCoefficients {
        AeroCoefficients {
            lift: LiftCoefficients {
                c_l_0: self.c_L_0,
                c_l_alpha: self.c_L_alpha,
                c_l_q: self.c_L_q,
                c_l_deltae: self.c_L_deltae,
            },
            drag: DragCoefficients {
                c_d_0: self.c_D_0,
                c_d_alpha: self.c_D_alpha,
                c_d_q: self.c_D_q,
                c_d_deltae: self.c_D_deltae,
            },
            side_force: SideForceCoefficients {
                c_y_beta: self.c_Y_beta,
                c_y_p: self.c_Y_p,
                c_y_r: self.c_Y_r,
                c_y_deltaa: self.c_Y_deltaa,
                c_y_deltar: self.c_Y_deltar,
            },
            roll: RollCoefficients {
                c_l_beta: self.c_l_beta,
                c_l_p: self.c_l_p,
                c_l_r: self.c_l_r,
                c_l_deltaa: self.c_l_deltaa,
                c_l_deltar: self.c_l_deltar,
            },
            pitch: PitchCoefficients {
                c_m_0: self.c_m_0,
                c_m_alpha: self.c_m_alpha,
                c_m_q: self.c_m_q,
                c_m_deltae: self.c_m_deltae,
            },
            yaw: YawCoefficients {
                c_n_beta: self.c_n_beta,
                c_n_p: self.c_n_p,
                c_n_r: self.c_n_r,
                c_n_deltaa: self.c_n_deltaa,
                c_n_deltar: self.c_n_deltar,
            },
        }
    }
}
