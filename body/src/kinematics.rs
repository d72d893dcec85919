//! Per-tick velocity integration.
//!
//! These are the steps a tick runs around the collision move, split out so each can be
//! tested on its own. None of them touch position; [`crate::PlayerBody::tick`] strings them
//! together:
//!
//! 1. [`integrate`] before the move (jump/descend, gravity, horizontal acceleration).
//! 2. The collision move consumes the velocity as this tick's displacement.
//! 3. [`apply_drag`] after the move.

use nalgebra::Vector2;

use crate::{
    collision::Vec3, input::MovementIntent, settings::MovementSettings, utils::rotate_planar,
};

/// Contact and mode flags the integrator reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Support {
    pub on_ground: bool,
    pub can_fly: bool,
}

/// Jump and descend overrides, then gravity.
///
/// Descend is applied after jump, so it wins when both are held.
pub fn apply_vertical(
    velocity: &mut Vec3,
    intent: &MovementIntent,
    support: Support,
    settings: &MovementSettings,
) {
    if (support.on_ground || support.can_fly) && intent.jump() {
        velocity.y = settings.jump_impulse;
    }
    if intent.descend() {
        velocity.y = -settings.descend_speed;
    }
    if !support.can_fly {
        velocity.y -= settings.gravity;
    }
}

/// Add yaw-relative horizontal acceleration of magnitude `speed` to `velocity`.
///
/// Intent shorter than `sqrt(min_intent_sq)` is ignored rather than normalized. The result
/// is accumulated, not assigned, which is what carries momentum between ticks.
/// Returns whether any acceleration was applied.
pub fn accelerate_relative(
    velocity: &mut Vec3,
    intent_xz: Vector2<f32>,
    speed: f32,
    yaw_degrees: f32,
    min_intent_sq: f32,
) -> bool {
    let dist_sq = intent_xz.norm_squared();
    if dist_sq < min_intent_sq {
        return false;
    }

    let scaled = intent_xz * (speed / dist_sq.sqrt());
    let world = rotate_planar(scaled, yaw_degrees);
    velocity.x += world.x;
    velocity.z += world.y;
    true
}

/// Everything a tick does to velocity before the collision move.
pub fn integrate(
    velocity: &mut Vec3,
    intent: &MovementIntent,
    support: Support,
    yaw_degrees: f32,
    settings: &MovementSettings,
) {
    apply_vertical(velocity, intent, support, settings);
    let speed = settings.acceleration(support.on_ground, support.can_fly);
    accelerate_relative(
        velocity,
        intent.planar(),
        speed,
        yaw_degrees,
        settings.min_intent_sq,
    );
}

/// Post-move drag, plus ground friction when standing.
///
/// Standing absorbs all vertical velocity.
pub fn apply_drag(velocity: &mut Vec3, support: Support, settings: &MovementSettings) {
    velocity.x *= settings.horizontal_drag;
    velocity.y *= settings.vertical_drag(support.can_fly);
    velocity.z *= settings.horizontal_drag;

    if support.on_ground {
        velocity.x *= settings.ground_friction;
        velocity.y = 0.0;
        velocity.z *= settings.ground_friction;
    }
}
