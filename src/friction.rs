//! Ground friction.
//!
//! Friction has three regimes. At or above the threshold `E` it is
//! geometric: the speed shrinks by the fraction `tau_k`. Below `E` it is
//! arithmetic: the fixed amount `tau_k * E` is removed. Once the speed falls
//! under both `tau_k * E` and [`FRICTION_STOP_FLOOR`] the entity stops.
//!
//! `tau_k` is the product of the frame time, the friction coefficient, the
//! entity friction and, near a ledge, the edge friction. The caller computes
//! it, or takes it from [`TickScalars`](crate::config::TickScalars).

use crate::constants::{FRICTION_STOP_FLOOR, FRICTION_STOP_FLOOR_SQ};
use crate::contract::{check_planar_speed, debug_precondition};
use crate::vector_math::planar_mut;

/// Computes the speed after applying ground friction.
///
/// Runs in constant time. When working on squared speeds use
/// [`fric_speedsq`] instead, which avoids the square root whenever
/// geometric friction applies.
///
/// # Examples
/// ```
/// use strafekit::fric_speed;
/// assert!((fric_speed(320.0, 100.0, 0.004) - 318.72).abs() < 1e-9);
/// assert!((fric_speed(80.0, 100.0, 0.004) - 79.6).abs() < 1e-9);
/// assert_eq!(fric_speed(0.05, 100.0, 0.004), 0.0);
/// ```
#[must_use]
pub fn fric_speed(speed: f64, stop_speed: f64, tau_k: f64) -> f64 {
    if speed >= stop_speed {
        return speed * (1.0 - tau_k);
    }

    let tau_e_k = tau_k * stop_speed;
    if speed >= tau_e_k && speed >= FRICTION_STOP_FLOOR {
        return speed - tau_e_k;
    }

    0.0
}

/// Applies ground friction to the horizontal components of `vel`.
///
/// `speed` must be the norm of the first two components of `vel`; passing it
/// in lets the caller share one square root between rules. Any third
/// component is left untouched. In the stopped regime both horizontal
/// components become exactly zero.
///
/// # Panics
/// In debug builds, panics if `speed` is not the planar norm of `vel`.
pub fn fric_vel<const N: usize>(vel: &mut [f64; N], speed: f64, stop_speed: f64, tau_k: f64) {
    debug_precondition("fric_vel", || check_planar_speed(&*vel, speed));
    let Some((vx, vy)) = planar_mut(vel) else {
        return;
    };

    if speed >= stop_speed {
        let scale = 1.0 - tau_k;
        *vx *= scale;
        *vy *= scale;
        return;
    }

    let tau_e_k = tau_k * stop_speed;
    if speed >= tau_e_k && speed >= FRICTION_STOP_FLOOR {
        let ratio = tau_e_k / speed;
        *vx -= *vx * ratio;
        *vy -= *vy * ratio;
        return;
    }

    *vx = 0.0;
    *vy = 0.0;
}

/// Computes the squared speed after applying ground friction.
///
/// Equivalent to squaring [`fric_speed`]. Viewed in isolation it is slower,
/// but a caller already tracking squared speeds (for example through
/// [`fme_maxaccel_speed_c`](crate::fme_maxaccel_speed_c)) skips the square
/// root in the common geometric regime. Only the arithmetic regime needs one.
#[must_use]
pub fn fric_speedsq(speedsq: f64, stop_speed: f64, tau_k: f64) -> f64 {
    if speedsq >= stop_speed * stop_speed {
        let scale = 1.0 - tau_k;
        return speedsq * scale * scale;
    }

    let tau_e_k = tau_k * stop_speed;
    let tau_e_k_sq = tau_e_k * tau_e_k;
    if speedsq >= tau_e_k_sq && speedsq >= FRICTION_STOP_FLOOR_SQ {
        return speedsq - 2.0 * speedsq.sqrt() * tau_e_k + tau_e_k_sq;
    }

    0.0
}
