//! Movement variables and the per-tick scalars derived from them.
//!
//! The rule functions take their physical constants per call. This module
//! turns the server's movement variables and a frame time into those
//! constants so that callers do not have to remember which products feed
//! `tau_k` or `ke_tau_M_A`. Nothing here reads files: [`MovementVars`]
//! derives `serde` traits so it can be embedded in whatever configuration
//! the caller already loads.

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::auxiliary::quantize_frame_time;
use crate::constants::{
    AIR_WISH_SPEED_CAP, DEFAULT_ACCELERATE, DEFAULT_AIR_ACCELERATE, DEFAULT_EDGE_FRICTION,
    DEFAULT_ENTITY_FRICTION, DEFAULT_FRICTION, DEFAULT_MAX_SPEED, DEFAULT_STOP_SPEED,
    DEFAULT_SURFACE_FRICTION, DEFAULT_WATER_ACCELERATE, WATER_WISH_SPEED_SCALE,
};

/// Errors raised while deriving per-tick scalars.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A movement variable is negative, infinite or NaN.
    #[error("movement variable `{name}` must be finite and non-negative, got {value}")]
    InvalidVar {
        /// Name of the offending field.
        name: &'static str,
        /// Value supplied.
        value: f64,
    },
    /// The frame time quantizes to zero or is not finite.
    #[error("frame time {raw} quantizes to {quantized}; it must be at least one millisecond")]
    FrameTooShort {
        /// Frame time supplied.
        raw: f64,
        /// Frame time after quantization.
        quantized: f64,
    },
}

/// Server movement variables.
///
/// Missing fields fall back to [`MovementVars::default`] when deserialising.
///
/// # Examples
/// ```
/// use strafekit::config::MovementVars;
/// let vars = MovementVars::default();
/// let tick = vars.tick_scalars(0.001, false).expect("valid defaults");
/// assert!((tick.air_accel - 3.2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementVars {
    /// Ground friction coefficient.
    pub friction: f64,
    /// Extra friction multiplier applied near a ledge.
    pub edge_friction: f64,
    /// Friction threshold `E` between geometric and arithmetic friction.
    pub stop_speed: f64,
    /// Ground acceleration.
    pub accelerate: f64,
    /// Air acceleration.
    pub air_accelerate: f64,
    /// Water acceleration.
    pub water_accelerate: f64,
    /// Maximum wish speed.
    pub max_speed: f64,
    /// Friction multiplier of the moving entity.
    pub entity_friction: f64,
    /// Friction multiplier `k_e` of the surface being stood on.
    pub surface_friction: f64,
}

impl Default for MovementVars {
    fn default() -> Self {
        Self {
            friction: DEFAULT_FRICTION,
            edge_friction: DEFAULT_EDGE_FRICTION,
            stop_speed: DEFAULT_STOP_SPEED,
            accelerate: DEFAULT_ACCELERATE,
            air_accelerate: DEFAULT_AIR_ACCELERATE,
            water_accelerate: DEFAULT_WATER_ACCELERATE,
            max_speed: DEFAULT_MAX_SPEED,
            entity_friction: DEFAULT_ENTITY_FRICTION,
            surface_friction: DEFAULT_SURFACE_FRICTION,
        }
    }
}

/// Physical scalars for one tick, ready to pass to the rule functions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickScalars {
    /// Quantized frame time `tau`.
    pub tau: f64,
    /// Friction threshold `E`.
    pub stop_speed: f64,
    /// Fractional ground friction for this tick.
    pub tau_k: f64,
    /// Wish speed cap `L` on the ground.
    pub ground_wish_speed: f64,
    /// Largest ground speed increment (`ke_tau_M_A`).
    pub ground_accel: f64,
    /// Wish speed cap `L` in the air.
    pub air_wish_speed: f64,
    /// Largest air speed increment.
    pub air_accel: f64,
    /// Fraction of speed lost to water drag.
    pub water_drag: f64,
    /// Wish speed cap while swimming.
    pub water_wish_speed: f64,
    /// Largest water speed increment.
    pub water_accel: f64,
}

impl MovementVars {
    /// Checks that every variable is finite and non-negative.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidVar`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("friction", self.friction),
            ("edge_friction", self.edge_friction),
            ("stop_speed", self.stop_speed),
            ("accelerate", self.accelerate),
            ("air_accelerate", self.air_accelerate),
            ("water_accelerate", self.water_accelerate),
            ("max_speed", self.max_speed),
            ("entity_friction", self.entity_friction),
            ("surface_friction", self.surface_friction),
        ];
        match fields
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            Some((name, value)) => Err(ConfigError::InvalidVar { name, value }),
            None => Ok(()),
        }
    }

    /// Derives the per-tick scalars for a raw frame time.
    ///
    /// The frame time is quantized to whole milliseconds first. `on_edge`
    /// applies the edge friction multiplier to `tau_k`.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidVar`] for bad variables and
    /// [`ConfigError::FrameTooShort`] when the frame quantizes to zero.
    pub fn tick_scalars(&self, frame_time: f64, on_edge: bool) -> Result<TickScalars, ConfigError> {
        self.validate()?;
        let tau = quantize_frame_time(frame_time);
        if !frame_time.is_finite() || tau <= 0.0 {
            return Err(ConfigError::FrameTooShort {
                raw: frame_time,
                quantized: tau,
            });
        }

        let edge = if on_edge { self.edge_friction } else { 1.0 };
        let ke_tau = self.surface_friction * tau;
        let air_wish_speed = self.max_speed.min(AIR_WISH_SPEED_CAP);
        let water_wish_speed = self.max_speed * WATER_WISH_SPEED_SCALE;
        let scalars = TickScalars {
            tau,
            stop_speed: self.stop_speed,
            tau_k: tau * self.friction * self.entity_friction * edge,
            ground_wish_speed: self.max_speed,
            ground_accel: ke_tau * self.max_speed * self.accelerate,
            air_wish_speed,
            air_accel: ke_tau * self.max_speed * self.air_accelerate,
            water_drag: tau * self.friction * self.entity_friction,
            water_wish_speed,
            water_accel: ke_tau * water_wish_speed * self.water_accelerate,
        };
        debug!("derived tick scalars for frame time {frame_time}: {scalars:?}");
        Ok(scalars)
    }
}
