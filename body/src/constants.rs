//! Tuning constants for the player body.
//!
//! All distances are in blocks, velocities in blocks per tick and angles in degrees.
//! These values feed the `Default` impls in [`crate::settings`]; override them there
//! rather than editing the constants when a body needs different handling.

/// Vertical velocity set when a jump is triggered (blocks/tick).
pub const JUMP_IMPULSE: f32 = 0.12;

/// Vertical velocity magnitude forced while the descend action is held (blocks/tick).
pub const DESCEND_SPEED: f32 = 0.12;

/// Downward velocity accumulated every tick while not flying (blocks/tick^2).
pub const GRAVITY_PER_TICK: f32 = 0.005;

/// Horizontal acceleration per tick with ground or flight control.
pub const GROUND_ACCELERATION: f32 = 0.02;

/// Horizontal acceleration per tick while airborne (reduced air control).
pub const AIR_ACCELERATION: f32 = 0.005;

/// Multiplicative drag applied to X/Z velocity after every move.
pub const HORIZONTAL_DRAG: f32 = 0.91;

/// Multiplicative drag applied to Y velocity while flying.
pub const FLYING_VERTICAL_DRAG: f32 = 0.91;

/// Multiplicative drag applied to Y velocity while not flying.
///
/// Much weaker than the horizontal drag so falls keep most of their speed.
pub const FALLING_VERTICAL_DRAG: f32 = 0.98;

/// Extra X/Z friction applied on top of drag while standing on ground.
pub const GROUND_FRICTION: f32 = 0.8;

/// Squared-length threshold below which horizontal intent is ignored.
///
/// Guards the normalization in [`crate::kinematics::accelerate_relative`].
pub const MIN_INTENT_SQ: f32 = 0.01;

/// Full X/Z extent of the default body (blocks).
pub const BODY_WIDTH: f32 = 0.6;

/// Full Y extent of the default body (blocks).
pub const BODY_HEIGHT: f32 = 1.8;

/// Distance from the top of the body down to the eyes (blocks).
pub const EYE_OFFSET_FROM_TOP: f32 = 0.18;

/// Height above terrain at which a freshly spawned body is placed (blocks).
pub const SPAWN_HEIGHT_ABOVE_TERRAIN: f32 = 10.0;

/// Initial yaw of a spawned body (degrees).
pub const DEFAULT_YAW: f32 = 90.0;

/// Initial pitch of a spawned body (degrees).
pub const DEFAULT_PITCH: f32 = 0.0;

/// Pitch limit in both directions (degrees).
pub const MAX_PITCH: f32 = 90.0;
