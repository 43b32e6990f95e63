//! Velocity response to a planar surface.

use crate::contract::{check_unit, debug_precondition};
use crate::vector_math::dot_product;

/// Computes the velocity after colliding with a hyperplane.
///
/// `n` is the unit surface normal pointing into free space and `b` the
/// bounce coefficient: `1` removes the velocity component along the normal
/// (the entity slides along the surface), `2` reflects it elastically, and
/// values in between absorb part of the impact. The caller is responsible
/// for `n` being a unit vector.
///
/// # Panics
/// In debug builds, panics if `n` is not a unit vector.
///
/// # Examples
/// ```
/// use strafekit::collision_vel;
/// let mut vel = [1000.0, 0.0];
/// collision_vel(&mut vel, &[-0.6, 0.8], 1.0);
/// assert!((vel[0] - 640.0).abs() < 1e-9);
/// assert!((vel[1] - 480.0).abs() < 1e-9);
/// ```
pub fn collision_vel<const N: usize>(v: &mut [f64; N], n: &[f64; N], b: f64) {
    debug_precondition("collision_vel", || check_unit(n));

    let backoff = b * dot_product(v, n);
    for (vi, ni) in v.iter_mut().zip(n) {
        *vi -= backoff * ni;
    }
}
