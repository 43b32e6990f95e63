//! Auxiliary velocity rules: hunting, frame-time quantization and swimming.

use crate::constants::{
    FRAME_TIME_STEPS_PER_SECOND, HUNT_BOOST_CAP, HUNT_PUSH, HUNT_SPEED_OFFSET, HUNT_SPEED_SCALE,
};
use crate::contract::{check_speed, check_unit, debug_precondition};
use crate::vector_math::dot_product;

/// Steers a hunting entity's velocity towards its target.
///
/// The current velocity is scaled by `min(50 / (speed + 10), 1.2)` and a
/// push of [`HUNT_PUSH`] is added along the unit direction `dir`. Slow
/// hunters (below [`HUNT_CAP_SPEED`](crate::constants::HUNT_CAP_SPEED),
/// about 31.67) keep the capped factor and build speed; faster ones have
/// their old velocity damped hyperbolically, so pursuit stays bounded.
///
/// # Panics
/// In debug builds, panics if `dir` is not a unit vector.
///
/// # Examples
/// ```
/// use strafekit::hunt_vel;
/// let mut vel = [0.0, 0.0, 0.0];
/// hunt_vel(&mut vel, &[0.0, 1.0, 0.0]);
/// assert_eq!(vel, [0.0, 300.0, 0.0]);
/// ```
pub fn hunt_vel<const N: usize>(v: &mut [f64; N], dir: &[f64; N]) {
    debug_precondition("hunt_vel", || check_unit(dir));

    let speed = dot_product(v, v).sqrt();
    let adjust = (HUNT_SPEED_SCALE / (speed + HUNT_SPEED_OFFSET)).min(HUNT_BOOST_CAP);
    for (vi, di) in v.iter_mut().zip(dir) {
        *vi = *vi * adjust + di * HUNT_PUSH;
    }
}

/// Floors a frame time to whole milliseconds.
///
/// Servers run movement on integer-millisecond frames
/// ([`FRAME_TIME_QUANTUM`](crate::constants::FRAME_TIME_QUANTUM)), so
/// anything shorter than one millisecond (or negative) yields `0`.
///
/// # Examples
/// ```
/// use strafekit::quantize_frame_time;
/// assert_eq!(quantize_frame_time(1.0 / 2000.0), 0.0);
/// assert!((quantize_frame_time(1.0 / 72.0) - 0.013).abs() < 1e-12);
/// ```
#[must_use]
pub fn quantize_frame_time(raw_dt: f64) -> f64 {
    let msec = (raw_dt * FRAME_TIME_STEPS_PER_SECOND).floor();
    (msec / FRAME_TIME_STEPS_PER_SECOND).max(0.0)
}

/// Applies one tick of swimming: water drag, then acceleration.
///
/// `speed` must be the full norm of `vel`. Drag scales the whole velocity by
/// `max(0, 1 - drag_factor)`, where `drag_factor` is the frame time times
/// the water friction. Acceleration then adds up to `accel_limit` along the
/// unit direction `accel_dir`, capped so that the dragged speed (not its
/// projection) does not pass `wish_speed`:
///
/// ```text
/// speed' = speed * max(0, 1 - drag_factor)
/// gamma2 = wish_speed - speed'    (no acceleration when gamma2 <= 0)
/// mu     = min(accel_limit, gamma2)
/// ```
///
/// # Panics
/// In debug builds, panics if `speed` is not the norm of `vel` or
/// `accel_dir` is not a unit vector.
pub fn water_move_vel<const N: usize>(
    vel: &mut [f64; N],
    speed: f64,
    accel_dir: &[f64; N],
    drag_factor: f64,
    wish_speed: f64,
    accel_limit: f64,
) {
    debug_precondition("water_move_vel", || {
        check_speed(&*vel, speed)?;
        check_unit(accel_dir)
    });

    let retain = (1.0 - drag_factor).max(0.0);
    for vi in vel.iter_mut() {
        *vi *= retain;
    }

    let gamma2 = wish_speed - speed * retain;
    if gamma2 <= 0.0 {
        return;
    }

    let mu = accel_limit.min(gamma2);
    for (vi, di) in vel.iter_mut().zip(accel_dir) {
        *vi += mu * di;
    }
}
