#![cfg_attr(docsrs, feature(doc_cfg))]
//! Closed-form per-tick movement kinematics for Quake-derived engines.
//!
//! The crate computes, in constant time, what one movement tick does to an
//! entity's velocity: ground friction, the full movement equation (FME) for
//! strafing, the strafe angle giving the largest or smallest resulting
//! speed, collision with a plane, and a few auxiliary rules. Velocities are
//! fixed-size `[f64; N]` buffers updated in place; rules that act on the
//! horizontal plane read and write only the first two components.
//!
//! Nothing here owns state or touches I/O. [`config::MovementVars`] turns
//! server movement variables and a frame time into the scalars the rules
//! take.
pub mod auxiliary;
pub mod collision;
pub mod config;
pub mod constants;
pub mod contract;
pub mod fme;
pub mod friction;
pub mod strafe;
pub mod vector_math;
pub use constants::*;

// Re-export commonly used items
pub use auxiliary::{hunt_vel, quantize_frame_time, water_move_vel};
pub use collision::collision_vel;
pub use config::{ConfigError, MovementVars, TickScalars};
pub use contract::PreconditionError;
pub use fme::{
    fme_maxaccel_cossin_theta, fme_maxaccel_costheta, fme_maxaccel_speed, fme_maxaccel_speed_c,
    fme_minaccel_speed, fme_speed, fme_vel_dir, fme_vel_theta,
};
pub use friction::{fric_speed, fric_speedsq, fric_vel};
pub use strafe::{StrafeDir, StrafeMode};
pub use vector_math::{dot_product, planar_speed, planar_speed_squared};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use strafekit::prelude::*;
    //! ```

    pub use crate::collision_vel;
    pub use crate::fme_maxaccel_speed;
    pub use crate::fme_speed;
    pub use crate::fme_vel_theta;
    pub use crate::fric_speed;
    pub use crate::fric_vel;
    pub use crate::MovementVars;
    pub use crate::StrafeDir;
    pub use crate::StrafeMode;
    pub use crate::TickScalars;
}
