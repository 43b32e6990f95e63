//! The full movement equation (FME).
//!
//! Acceleration adds at most `A` (`ke_tau_M_A`: surface friction × frame
//! time × wish speed × acceleration) along the wish direction, and never
//! pushes the component of velocity along that direction past the wish
//! speed `L`. With `theta` the angle between velocity and wish direction the
//! increment is
//!
//! ```text
//! gamma2 = L - speed * cos(theta)
//! mu     = min(A, gamma2)        (no acceleration when gamma2 <= 0)
//! speed' = sqrt(speed * (speed + 2 * mu * cos(theta)) + mu²)
//! ```
//!
//! The rules come in three calling conventions: scalar speed, velocity
//! vector, and squared speed. A caller that tracks the speed alongside the
//! velocity computes one square root per tick and shares it between them.

use crate::contract::{check_angle, check_planar_speed, check_unit, debug_precondition};
use crate::strafe::StrafeMode;
use crate::vector_math::{dot_product, planar_mut};

/// Computes the speed after applying the FME.
///
/// Runs in constant time.
///
/// # Examples
/// ```
/// use strafekit::fme_speed;
/// let speed = fme_speed(320.0, 0.0175, 30.0, 3.2);
/// assert!((speed - 320.071_991_901_8).abs() < 1e-9);
/// ```
#[must_use]
pub fn fme_speed(speed: f64, cos_theta: f64, wish_speed: f64, accel_limit: f64) -> f64 {
    let gamma2 = wish_speed - speed * cos_theta;
    if gamma2 <= 0.0 {
        return speed;
    }

    let mu = accel_limit.min(gamma2);
    (speed * (speed + 2.0 * mu * cos_theta) + mu * mu).sqrt()
}

/// Applies the FME to the horizontal components of `vel`.
///
/// `speed` must be the norm of the first two components and the angle pair
/// must satisfy `cos² + sin² = 1`. The velocity and the speed are passed
/// separately because the caller usually needs the speed anyway (for example
/// to call [`fme_maxaccel_costheta`]) and should take its square root once.
///
/// Given `cos_theta`, the sine is `±sqrt(1 - cos²)`; its sign picks the
/// strafing direction, positive for clockwise rotation and negative for
/// anticlockwise (see [`StrafeDir`](crate::StrafeDir)).
///
/// A velocity at rest has no direction to measure `theta` from and is left
/// unchanged; use [`fme_vel_dir`] to accelerate from rest.
///
/// # Panics
/// In debug builds, panics if `speed` is not the planar norm of `vel` or
/// the angle pair is off the unit circle.
pub fn fme_vel_theta<const N: usize>(
    vel: &mut [f64; N],
    speed: f64,
    cos_theta: f64,
    sin_theta: f64,
    wish_speed: f64,
    accel_limit: f64,
) {
    debug_precondition("fme_vel_theta", || {
        check_planar_speed(&*vel, speed)?;
        check_angle(cos_theta, sin_theta)
    });

    let gamma2 = wish_speed - speed * cos_theta;
    if gamma2 <= 0.0 || speed <= 0.0 {
        return;
    }
    let Some((vx, vy)) = planar_mut(vel) else {
        return;
    };

    let mu = accel_limit.min(gamma2);
    let ratio = mu / speed;
    let ax = *vx * cos_theta + *vy * sin_theta;
    let ay = *vy * cos_theta - *vx * sin_theta;
    *vx += ratio * ax;
    *vy += ratio * ay;
}

/// Applies the FME along an explicit unit wish direction.
///
/// The projection `dot(vel, dir)` stands in for `speed * cos(theta)`, so
/// this form needs no speed at all and works from rest. All `N` components
/// take part.
///
/// # Panics
/// In debug builds, panics if `dir` is not a unit vector.
pub fn fme_vel_dir<const N: usize>(
    vel: &mut [f64; N],
    dir: &[f64; N],
    wish_speed: f64,
    accel_limit: f64,
) {
    debug_precondition("fme_vel_dir", || check_unit(dir));

    let gamma2 = wish_speed - dot_product(vel, dir);
    if gamma2 <= 0.0 {
        return;
    }

    let mu = accel_limit.min(gamma2);
    for (v, d) in vel.iter_mut().zip(dir) {
        *v += mu * d;
    }
}

/// Computes `cos(theta)` for maximum acceleration.
///
/// Extremely cheap. There is no squared-speed variant because the common
/// partial-angle case divides by the speed anyway.
///
/// # Examples
/// ```
/// use strafekit::fme_maxaccel_costheta;
/// assert_eq!(fme_maxaccel_costheta(500.0, 3.0, 3.2), 0.0);
/// assert!((fme_maxaccel_costheta(1000.0, 30.0, 3.2) - 0.0268).abs() < 1e-12);
/// ```
#[must_use]
pub fn fme_maxaccel_costheta(speed: f64, wish_speed: f64, accel_limit: f64) -> f64 {
    StrafeMode::select(speed, wish_speed, accel_limit).cos_theta(speed, wish_speed, accel_limit)
}

/// Computes `cos(theta)` and a non-negative `sin(theta)` for maximum acceleration.
///
/// Negate the sine (or use [`StrafeDir`](crate::StrafeDir)) to strafe
/// anticlockwise.
#[must_use]
pub fn fme_maxaccel_cossin_theta(speed: f64, wish_speed: f64, accel_limit: f64) -> (f64, f64) {
    StrafeMode::select(speed, wish_speed, accel_limit).cos_sin_theta(
        speed,
        wish_speed,
        accel_limit,
    )
}

/// Computes the speed after applying the FME at maximum acceleration.
///
/// Equal to [`fme_speed`] evaluated at [`fme_maxaccel_costheta`], without
/// any trigonometry. Easier to use than [`fme_maxaccel_speed_c`] but slower
/// in the 90° and partial cases, which take a square root here.
///
/// # Examples
/// ```
/// use strafekit::fme_maxaccel_speed;
/// assert!((fme_maxaccel_speed(1000.0, 30.0, 3.2) - 1000.090_875_870_788_1).abs() < 1e-9);
/// assert!((fme_maxaccel_speed(700.0, 30.0, -3.2) - 703.2).abs() < 1e-9);
/// ```
#[must_use]
pub fn fme_maxaccel_speed(speed: f64, wish_speed: f64, accel_limit: f64) -> f64 {
    StrafeMode::select(speed, wish_speed, accel_limit).speed(speed, wish_speed, accel_limit)
}

/// Computes the constant to add to the squared speed at maximum acceleration.
///
/// After one tick the squared speed is `speedsq + C(speedsq)`. In the 90°
/// and partial cases `C` does not depend on `speedsq`, so a caller certain
/// the strafe type will not change computes it once and then each tick is a
/// single addition (see [`StrafeMode::is_speed_independent`]). The linear
/// and backward cases pay one square root.
///
/// Misusing a cached constant silently produces wrong speeds; when in doubt
/// use [`fme_maxaccel_speed`].
#[must_use]
pub fn fme_maxaccel_speed_c(speedsq: f64, wish_speed: f64, accel_limit: f64) -> f64 {
    StrafeMode::select_squared(speedsq, wish_speed, accel_limit).speed_c(
        speedsq,
        wish_speed,
        accel_limit,
    )
}

/// Computes the lowest speed reachable after one FME step.
///
/// Useful for braking. With a non-negative increment the extremes are always
/// reached with the acceleration collinear to the velocity, so the result is
/// the smaller of the forward and backward outcomes. Pushing backwards past
/// zero leaves the entity moving the other way, hence the absolute values.
///
/// With a negative increment the push only applies while
/// `cos(theta) < L / speed`, and sheds the most speed at the largest such
/// angle cosine. When the cap lies ahead of the speed that is straight
/// ahead. Otherwise the bound `cos(theta) = L / speed` is approached but not
/// reached, and the result is the limit `sqrt(speed² + A(2L + A))`, or
/// `speed` if that limit is higher. A cap at or behind `-speed` blocks every
/// angle.
#[must_use]
pub fn fme_minaccel_speed(speed: f64, wish_speed: f64, accel_limit: f64) -> f64 {
    if accel_limit < 0.0 {
        if wish_speed > speed {
            return (speed + accel_limit).abs();
        }
        if wish_speed <= -speed {
            return speed;
        }
        let limit_sq = speed * speed + accel_limit * (2.0 * wish_speed + accel_limit);
        return speed.min(limit_sq.max(0.0).sqrt());
    }

    let forward = if wish_speed <= speed {
        speed
    } else if wish_speed - speed < accel_limit {
        wish_speed
    } else {
        speed + accel_limit
    };

    let backward = if wish_speed <= -speed {
        speed
    } else if wish_speed + speed < accel_limit {
        wish_speed.abs()
    } else {
        (speed - accel_limit).abs()
    };

    forward.min(backward)
}
