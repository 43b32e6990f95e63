//! Strafe selection for maximum acceleration.
//!
//! [`StrafeMode`] names the branch the maximum-acceleration rules take for a
//! given speed, wish speed `L` and per-tick increment limit `A`. The free
//! functions in [`fme`](crate::fme) select a mode and evaluate it in one go.
//! A caller simulating many ticks under one strafe type can instead select
//! once, keep the mode, and evaluate it every tick.
//!
//! | Mode | Condition | Angle |
//! |---|---|---|
//! | [`Perpendicular`](StrafeMode::Perpendicular) | `A >= 0`, `0 <= L <= A` | 90° |
//! | [`Stalled`](StrafeMode::Stalled) | `A >= 0`, `L < 0` | 0°, no gain |
//! | [`Partial`](StrafeMode::Partial) | `A >= 0`, `L - A <= speed` | `acos((L - A) / speed)` |
//! | [`Linear`](StrafeMode::Linear) | `A >= 0`, `L - A > speed` | 0° |
//! | [`Backward`](StrafeMode::Backward) | `A < 0`, `-L < speed` | 180° |
//! | [`BackwardStalled`](StrafeMode::BackwardStalled) | `A < 0`, `-L >= speed` | 0°, no gain |

use log::trace;
use serde::{Deserialize, Serialize};

/// The maximum-acceleration branch for a speed, wish speed and increment limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrafeMode {
    /// The cap is within one tick's increment: accelerate at 90° ("zeta" strafing).
    Perpendicular,
    /// The cap is negative: no angle gains speed.
    Stalled,
    /// Turn just far enough that the whole increment fits under the cap.
    Partial,
    /// Too slow to need turning: accelerate straight ahead.
    Linear,
    /// A negative increment pushed backwards gains speed.
    Backward,
    /// A negative increment with the cap too far behind: no gain.
    BackwardStalled,
}

impl StrafeMode {
    /// Selects the mode from a speed.
    #[must_use]
    pub fn select(speed: f64, wish_speed: f64, accel_limit: f64) -> Self {
        let mode = if accel_limit >= 0.0 {
            if wish_speed <= accel_limit {
                if wish_speed >= 0.0 {
                    Self::Perpendicular
                } else {
                    Self::Stalled
                }
            } else if wish_speed - accel_limit <= speed {
                Self::Partial
            } else {
                Self::Linear
            }
        } else if -wish_speed < speed {
            Self::Backward
        } else {
            Self::BackwardStalled
        };
        trace!("speed {speed}, L {wish_speed}, A {accel_limit}: {mode:?}");
        mode
    }

    /// Selects the mode from a squared speed without taking its root.
    ///
    /// Agrees with [`select`](Self::select) for every non-negative speed.
    #[must_use]
    pub fn select_squared(speedsq: f64, wish_speed: f64, accel_limit: f64) -> Self {
        if accel_limit >= 0.0 {
            if wish_speed <= accel_limit {
                if wish_speed >= 0.0 {
                    return Self::Perpendicular;
                }
                return Self::Stalled;
            }
            let tmp = wish_speed - accel_limit;
            if tmp * tmp <= speedsq {
                return Self::Partial;
            }
            return Self::Linear;
        }

        if wish_speed > 0.0 || wish_speed * wish_speed < speedsq {
            Self::Backward
        } else {
            Self::BackwardStalled
        }
    }

    /// Whether [`speed_c`](Self::speed_c) is independent of the current speed.
    ///
    /// For these modes the constant can be computed once and added to the
    /// squared speed every tick. `Partial` stays selected as the speed grows,
    /// so its constant remains valid for as long as `L` and `A` are fixed.
    #[must_use]
    pub const fn is_speed_independent(self) -> bool {
        matches!(
            self,
            Self::Perpendicular | Self::Stalled | Self::Partial | Self::BackwardStalled
        )
    }

    /// Cosine of the optimal angle between velocity and acceleration.
    #[must_use]
    pub fn cos_theta(self, speed: f64, wish_speed: f64, accel_limit: f64) -> f64 {
        match self {
            Self::Perpendicular => 0.0,
            Self::Partial => (wish_speed - accel_limit) / speed,
            Self::Backward => -1.0,
            Self::Stalled | Self::Linear | Self::BackwardStalled => 1.0,
        }
    }

    /// Cosine and non-negative sine of the optimal angle.
    ///
    /// The sine is derived from the cosine without calling any inverse
    /// trigonometric function.
    #[must_use]
    pub fn cos_sin_theta(self, speed: f64, wish_speed: f64, accel_limit: f64) -> (f64, f64) {
        match self {
            Self::Perpendicular => (0.0, 1.0),
            Self::Partial => {
                let cos_theta = (wish_speed - accel_limit) / speed;
                (cos_theta, (1.0 - cos_theta * cos_theta).sqrt())
            }
            Self::Backward => (-1.0, 0.0),
            Self::Stalled | Self::Linear | Self::BackwardStalled => (1.0, 0.0),
        }
    }

    /// Speed after one tick of acceleration at the optimal angle.
    #[must_use]
    pub fn speed(self, speed: f64, wish_speed: f64, accel_limit: f64) -> f64 {
        match self {
            Self::Perpendicular => (speed * speed + wish_speed * wish_speed).sqrt(),
            Self::Partial => {
                let tmp = wish_speed - accel_limit;
                (speed * speed + accel_limit * (wish_speed + tmp)).sqrt()
            }
            Self::Linear => speed + accel_limit,
            Self::Backward => speed - accel_limit,
            Self::Stalled | Self::BackwardStalled => speed,
        }
    }

    /// The constant `C` with `new_speedsq = speedsq + C` at the optimal angle.
    ///
    /// `Linear` and `Backward` need the square root of `speedsq`; every other
    /// mode is free of roots.
    #[must_use]
    pub fn speed_c(self, speedsq: f64, wish_speed: f64, accel_limit: f64) -> f64 {
        match self {
            Self::Perpendicular => wish_speed * wish_speed,
            Self::Partial => accel_limit * (2.0 * wish_speed - accel_limit),
            Self::Linear => (2.0 * speedsq.sqrt() + accel_limit) * accel_limit,
            Self::Backward => (accel_limit - 2.0 * speedsq.sqrt()) * accel_limit,
            Self::Stalled | Self::BackwardStalled => 0.0,
        }
    }
}

/// Which way to turn while strafing.
///
/// The maximum-acceleration angle is reported with a non-negative sine;
/// the direction picks its sign before the angle is handed to
/// [`fme_vel_theta`](crate::fme_vel_theta).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StrafeDir {
    /// Rotate the velocity clockwise (positive sine).
    #[default]
    Clockwise,
    /// Rotate the velocity anticlockwise (negative sine).
    Anticlockwise,
}

impl StrafeDir {
    /// Applies the direction to a non-negative sine.
    #[must_use]
    pub fn apply(self, sin_theta: f64) -> f64 {
        match self {
            Self::Clockwise => sin_theta,
            Self::Anticlockwise => -sin_theta,
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Clockwise => Self::Anticlockwise,
            Self::Anticlockwise => Self::Clockwise,
        }
    }
}
