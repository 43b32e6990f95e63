//! Caller preconditions and their debug-build checks.
//!
//! The kinematic rules trust their inputs: a `speed` must match the velocity
//! it accompanies, directions and normals must be unit length, and a
//! `cos_theta`/`sin_theta` pair must lie on the unit circle. Release builds
//! never look at these. Debug builds run the checkers below on entry, log any
//! violation and panic, so a broken caller is caught in its own test suite
//! without changing the numbers a release build produces.

use log::error;
use thiserror::Error;

use crate::vector_math::{dot_product, planar_speed};

/// Relative tolerance applied by every precondition check.
pub const PRECONDITION_TOLERANCE: f64 = 1e-6;

/// A violated caller precondition.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PreconditionError {
    /// A direction or plane normal was not unit length.
    #[error("expected a unit vector, got norm {norm}")]
    NotUnit {
        /// Norm of the offending vector.
        norm: f64,
    },
    /// A supplied speed disagrees with the velocity it accompanies.
    #[error("speed {speed} does not match velocity norm {norm}")]
    SpeedMismatch {
        /// Speed passed by the caller.
        speed: f64,
        /// Norm measured from the velocity.
        norm: f64,
    },
    /// `cos_theta² + sin_theta²` is not one.
    #[error("angle pair is off the unit circle: cos² + sin² = {sum}")]
    InconsistentAngle {
        /// The measured `cos² + sin²`.
        sum: f64,
    },
}

fn within_tolerance(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= PRECONDITION_TOLERANCE * expected.abs().max(1.0)
}

/// Checks that `v` has unit norm.
///
/// # Errors
/// Returns [`PreconditionError::NotUnit`] when the norm is off by more than
/// [`PRECONDITION_TOLERANCE`].
pub fn check_unit<const N: usize>(v: &[f64; N]) -> Result<(), PreconditionError> {
    let norm = dot_product(v, v).sqrt();
    if within_tolerance(norm, 1.0) {
        Ok(())
    } else {
        Err(PreconditionError::NotUnit { norm })
    }
}

/// Checks that `speed` is the norm of the first two components of `vel`.
///
/// # Errors
/// Returns [`PreconditionError::SpeedMismatch`] on disagreement.
pub fn check_planar_speed<const N: usize>(
    vel: &[f64; N],
    speed: f64,
) -> Result<(), PreconditionError> {
    let norm = planar_speed(vel);
    if within_tolerance(speed, norm) {
        Ok(())
    } else {
        Err(PreconditionError::SpeedMismatch { speed, norm })
    }
}

/// Checks that `speed` is the full norm of `vel`.
///
/// # Errors
/// Returns [`PreconditionError::SpeedMismatch`] on disagreement.
pub fn check_speed<const N: usize>(vel: &[f64; N], speed: f64) -> Result<(), PreconditionError> {
    let norm = dot_product(vel, vel).sqrt();
    if within_tolerance(speed, norm) {
        Ok(())
    } else {
        Err(PreconditionError::SpeedMismatch { speed, norm })
    }
}

/// Checks that `cos_theta² + sin_theta² = 1`.
///
/// # Errors
/// Returns [`PreconditionError::InconsistentAngle`] when the pair is off the
/// unit circle.
pub fn check_angle(cos_theta: f64, sin_theta: f64) -> Result<(), PreconditionError> {
    let sum = cos_theta * cos_theta + sin_theta * sin_theta;
    if within_tolerance(sum, 1.0) {
        Ok(())
    } else {
        Err(PreconditionError::InconsistentAngle { sum })
    }
}

/// Runs `check` in debug builds and panics if it fails.
///
/// The closure is never invoked in release builds.
#[inline]
pub(crate) fn debug_precondition<F>(rule: &str, check: F)
where
    F: FnOnce() -> Result<(), PreconditionError>,
{
    if cfg!(debug_assertions) {
        if let Err(err) = check() {
            error!("{rule}: caller precondition violated: {err}");
            panic!("{rule}: caller precondition violated: {err}");
        }
    }
}
