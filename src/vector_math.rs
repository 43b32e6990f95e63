//! Basic vector math helper functions.
//!
//! Velocities, directions and plane normals are plain `[f64; N]` arrays with
//! `N` fixed at compile time. Computing a speed is left to the caller so that
//! a single square root can be shared by every rule evaluated in a tick.

/// Returns the dot product of two vectors.
///
/// # Examples
/// ```
/// use strafekit::dot_product;
/// let v = [3.0, 4.0, 12.0];
/// assert!((dot_product(&v, &v).sqrt() - 13.0).abs() < f64::EPSILON);
/// ```
#[inline]
#[must_use]
pub fn dot_product<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Returns the squared norm of the first two components.
///
/// Friction and angle-based acceleration act in the horizontal plane, so
/// their `speed` arguments are measured with this norm.
#[inline]
#[must_use]
pub fn planar_speed_squared<const N: usize>(v: &[f64; N]) -> f64 {
    v.iter().take(2).map(|x| x * x).sum()
}

/// Returns the norm of the first two components.
///
/// # Examples
/// ```
/// use strafekit::planar_speed;
/// let speed = planar_speed(&[3.0, 4.0, -100.0]);
/// assert!((speed - 5.0).abs() < f64::EPSILON);
/// ```
#[inline]
#[must_use]
pub fn planar_speed<const N: usize>(v: &[f64; N]) -> f64 {
    planar_speed_squared(v).sqrt()
}

/// Borrows the two horizontal components of a velocity mutably.
///
/// Fails to compile for vectors with fewer than two components.
#[inline]
pub(crate) fn planar_mut<const N: usize>(v: &mut [f64; N]) -> Option<(&mut f64, &mut f64)> {
    const { assert!(N >= 2, "planar rules need at least two components") };
    match v.as_mut_slice() {
        [x, y, ..] => Some((x, y)),
        _ => None,
    }
}
