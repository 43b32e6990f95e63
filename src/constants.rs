//! Engine constants used across the movement rules.
//!
//! The cvar defaults mirror a stock server configuration and seed
//! [`MovementVars::default`](crate::config::MovementVars).

/// The initial jumping speed, before gravity is applied.
pub const JUMP_SPEED: f64 = 268.328_157_299_974_8;

/// Absolute speed below which ground friction brings an entity to rest.
pub const FRICTION_STOP_FLOOR: f64 = 0.1;
/// Square of [`FRICTION_STOP_FLOOR`], used by the squared-speed rules.
pub const FRICTION_STOP_FLOOR_SQ: f64 = FRICTION_STOP_FLOOR * FRICTION_STOP_FLOOR;

/// Granularity of server frame times, in seconds.
pub const FRAME_TIME_QUANTUM: f64 = 0.001;
/// Number of [`FRAME_TIME_QUANTUM`] steps in one second.
pub const FRAME_TIME_STEPS_PER_SECOND: f64 = 1000.0;

/// Wish speed cap applied to the projection test while airborne.
pub const AIR_WISH_SPEED_CAP: f64 = 30.0;
/// Fraction of the wish speed available while swimming.
pub const WATER_WISH_SPEED_SCALE: f64 = 0.8;

/// Upper bound on the velocity blend factor of a hunting entity.
pub const HUNT_BOOST_CAP: f64 = 1.2;
/// Numerator of the hyperbolic hunting blend factor.
pub const HUNT_SPEED_SCALE: f64 = 50.0;
/// Offset added to the speed in the hunting blend denominator.
pub const HUNT_SPEED_OFFSET: f64 = 10.0;
/// Speed added along the target direction on every hunting tick.
pub const HUNT_PUSH: f64 = 300.0;
/// Speed at which the hunting blend factor leaves its cap.
///
/// Below this the blend factor is [`HUNT_BOOST_CAP`].
pub const HUNT_CAP_SPEED: f64 = HUNT_SPEED_SCALE / HUNT_BOOST_CAP - HUNT_SPEED_OFFSET;

/// Default ground friction coefficient.
pub const DEFAULT_FRICTION: f64 = 4.0;
/// Default friction multiplier near a ledge.
pub const DEFAULT_EDGE_FRICTION: f64 = 2.0;
/// Default friction threshold (`E`).
pub const DEFAULT_STOP_SPEED: f64 = 100.0;
/// Default ground acceleration.
pub const DEFAULT_ACCELERATE: f64 = 10.0;
/// Default air acceleration.
pub const DEFAULT_AIR_ACCELERATE: f64 = 10.0;
/// Default water acceleration.
pub const DEFAULT_WATER_ACCELERATE: f64 = 10.0;
/// Default maximum wish speed.
pub const DEFAULT_MAX_SPEED: f64 = 320.0;
/// Per-entity friction multiplier for an ordinary player.
pub const DEFAULT_ENTITY_FRICTION: f64 = 1.0;
/// Surface friction multiplier (`k_e`) for ordinary ground.
pub const DEFAULT_SURFACE_FRICTION: f64 = 1.0;
