//! Fixtures for driving the kinematic rules tick by tick.

use approx::relative_eq;
use strafekit::{
    fme_maxaccel_cossin_theta, fme_vel_theta, fric_vel, planar_speed, StrafeDir, TickScalars,
};

/// Evenly spaced cosines covering `[-1, 1]`, both ends included.
///
/// # Examples
/// ```
/// use test_utils::cosine_sweep;
/// let cosines: Vec<f64> = cosine_sweep(4).collect();
/// assert_eq!(cosines, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
/// ```
pub fn cosine_sweep(steps: u32) -> impl Iterator<Item = f64> {
    (0..=steps).map(move |i| -1.0 + 2.0 * f64::from(i) / f64::from(steps))
}

/// `(cos, sin)` pairs for `steps` angles evenly spaced around the circle.
pub fn angle_sweep(steps: u32) -> impl Iterator<Item = (f64, f64)> {
    (0..steps).map(move |i| {
        let theta = std::f64::consts::TAU * f64::from(i) / f64::from(steps);
        (theta.cos(), theta.sin())
    })
}

/// Asserts that two vectors agree component-wise within `max_relative`.
///
/// Components are also accepted when both are within `1e-9` of each other,
/// so zeros compare cleanly.
///
/// # Panics
/// Panics naming the first component that differs.
pub fn assert_vec_close<const N: usize>(actual: &[f64; N], expected: &[f64; N], max_relative: f64) {
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            relative_eq!(*a, *e, epsilon = 1e-9, max_relative = max_relative),
            "component {i}: got {a}, expected {e} (full vectors {actual:?} vs {expected:?})"
        );
    }
}

/// A moving entity whose speed is tracked alongside its velocity.
///
/// The planar speed is recomputed once per tick and shared by the friction
/// and strafing rules, the way a movement loop would do it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mover {
    /// Current velocity.
    pub vel: [f64; 3],
}

impl Mover {
    /// Creates a mover with the given velocity.
    ///
    /// # Examples
    /// ```
    /// use test_utils::Mover;
    /// let mover = Mover::new([3.0, 4.0, 0.0]);
    /// assert_eq!(mover.speed(), 5.0);
    /// ```
    #[must_use]
    pub const fn new(vel: [f64; 3]) -> Self {
        Self { vel }
    }

    /// Planar speed of the mover.
    #[must_use]
    pub fn speed(&self) -> f64 {
        planar_speed(&self.vel)
    }

    /// Applies one tick of ground friction.
    pub fn friction_tick(&mut self, tick: &TickScalars) {
        let speed = self.speed();
        fric_vel(&mut self.vel, speed, tick.stop_speed, tick.tau_k);
    }

    /// Applies one tick of optimal air strafing in direction `dir`.
    pub fn air_strafe_tick(&mut self, tick: &TickScalars, dir: StrafeDir) {
        self.strafe_tick(tick.air_wish_speed, tick.air_accel, dir);
    }

    /// Applies one tick of ground friction followed by optimal ground
    /// strafing in direction `dir`.
    pub fn ground_strafe_tick(&mut self, tick: &TickScalars, dir: StrafeDir) {
        self.friction_tick(tick);
        self.strafe_tick(tick.ground_wish_speed, tick.ground_accel, dir);
    }

    fn strafe_tick(&mut self, wish_speed: f64, accel_limit: f64, dir: StrafeDir) {
        let speed = self.speed();
        let (cos_theta, sin_theta) = fme_maxaccel_cossin_theta(speed, wish_speed, accel_limit);
        fme_vel_theta(
            &mut self.vel,
            speed,
            cos_theta,
            dir.apply(sin_theta),
            wish_speed,
            accel_limit,
        );
    }
}
