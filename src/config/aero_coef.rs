//! Stability-derivative sets for the linear aerodynamic model.
//!
//! Each coefficient is evaluated as an affine sum of its derivatives times
//! the corresponding state or control term. Longitudinal sets (lift, drag,
//! pitch) depend on angle of attack, nondimensional pitch rate and elevator;
//! lateral sets (side force, roll, yaw) depend on sideslip, nondimensional
//! roll/yaw rates, aileron and rudder.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiftCoefficients {
    pub c_l_0: f64,
    pub c_l_alpha: f64,
    pub c_l_q: f64,
    pub c_l_deltae: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DragCoefficients {
    pub c_d_0: f64,
    pub c_d_alpha: f64,
    pub c_d_q: f64,
    pub c_d_deltae: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SideForceCoefficients {
    pub c_y_beta: f64,
    pub c_y_p: f64,
    pub c_y_r: f64,
    pub c_y_deltaa: f64,
    pub c_y_deltar: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollCoefficients {
    pub c_l_beta: f64,
    pub c_l_p: f64,
    pub c_l_r: f64,
    pub c_l_deltaa: f64,
    pub c_l_deltar: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PitchCoefficients {
    pub c_m_0: f64,
    pub c_m_alpha: f64,
    pub c_m_q: f64,
    pub c_m_deltae: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YawCoefficients {
    pub c_n_beta: f64,
    pub c_n_p: f64,
    pub c_n_r: f64,
    pub c_n_deltaa: f64,
    pub c_n_deltar: f64,
}

/// The six coefficient sets a vehicle carries: CL, CD, CY, Cl, Cm, Cn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AeroCoefficients {
    pub lift: LiftCoefficients,
    pub drag: DragCoefficients,
    pub side_force: SideForceCoefficients,
    pub roll: RollCoefficients,
    pub pitch: PitchCoefficients,
    pub yaw: YawCoefficients,
}

impl AeroCoefficients {
    /// Aerosonde-class small UAV derivatives.
    pub fn aerosonde() -> Self {
        Self {
            lift: LiftCoefficients {
                c_l_0: 0.28,
                c_l_alpha: 3.45,
                c_l_q: 0.0,
                c_l_deltae: -0.36,
            },
            drag: DragCoefficients {
                c_d_0: 0.03,
                c_d_alpha: 0.30,
                c_d_q: 0.0,
                c_d_deltae: 0.0,
            },
            side_force: SideForceCoefficients {
                c_y_beta: -0.98,
                c_y_p: 0.0,
                c_y_r: 0.0,
                c_y_deltaa: 0.0,
                c_y_deltar: -0.17,
            },
            roll: RollCoefficients {
                c_l_beta: -0.12,
                c_l_p: -0.26,
                c_l_r: 0.14,
                c_l_deltaa: 0.08,
                c_l_deltar: 0.105,
            },
            pitch: PitchCoefficients {
                c_m_0: -0.02338,
                c_m_alpha: -0.38,
                c_m_q: -3.6,
                c_m_deltae: -0.5,
            },
            yaw: YawCoefficients {
                c_n_beta: 0.25,
                c_n_p: 0.022,
                c_n_r: -0.35,
                c_n_deltaa: 0.06,
                c_n_deltar: -0.032,
            },
        }
    }

    /// DHC-6 Twin Otter derivatives (first-order terms).
    pub fn twin_otter() -> Self {
        Self {
            lift: LiftCoefficients {
                c_l_0: 0.215,
                c_l_alpha: 4.370,
                c_l_q: 25.05,
                c_l_deltae: 0.291,
            },
            drag: DragCoefficients {
                c_d_0: 0.108,
                c_d_alpha: 0.138,
                c_d_q: 0.0,
                c_d_deltae: 0.111,
            },
            side_force: SideForceCoefficients {
                c_y_beta: -0.885,
                c_y_p: -0.090,
                c_y_r: 1.697,
                c_y_deltaa: -0.051,
                c_y_deltar: -0.193,
            },
            roll: RollCoefficients {
                c_l_beta: -0.112,
                c_l_p: -0.413,
                c_l_r: 0.191,
                c_l_deltaa: -0.206,
                c_l_deltar: 0.116,
            },
            pitch: PitchCoefficients {
                c_m_0: 0.057,
                c_m_alpha: -1.419,
                c_m_q: -27.95,
                c_m_deltae: -1.626,
            },
            yaw: YawCoefficients {
                c_n_beta: 0.088,
                c_n_p: -0.043,
                c_n_r: -0.426,
                c_n_deltaa: 0.023,
                c_n_deltar: -0.087,
            },
        }
    }
}
