//! Utility helpers for tests.
pub mod kinematics;
pub mod logging;

pub use kinematics::{angle_sweep, assert_vec_close, cosine_sweep, Mover};
pub use logging::init as init_logging;
