/*!
Runtime configuration for the player body.

These structs carry the tuning constants from [`crate::constants`] as their defaults.
Keeping them as plain data makes it easy to load per-body overrides from game data
(enable the `serde` feature) while the defaults stay in one place.

Notes
- Distances are in blocks, velocities in blocks per tick.
- Every struct validates itself; a [`crate::PlayerBody`] only ever holds validated values,
  so the tick path does no checking of its own.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        AIR_ACCELERATION, BODY_HEIGHT, BODY_WIDTH, DESCEND_SPEED, EYE_OFFSET_FROM_TOP,
        FALLING_VERTICAL_DRAG, FLYING_VERTICAL_DRAG, GRAVITY_PER_TICK, GROUND_ACCELERATION,
        GROUND_FRICTION, HORIZONTAL_DRAG, JUMP_IMPULSE, MIN_INTENT_SQ,
    },
    error::BodyError,
};

/// Per-tick integration parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct MovementSettings {
    /// Vertical velocity set by a jump.
    pub jump_impulse: f32,
    /// Magnitude of the downward velocity forced by the descend action.
    pub descend_speed: f32,
    /// Velocity removed from Y every tick while not flying.
    pub gravity: f32,
    /// Horizontal acceleration on ground or while flying.
    pub ground_acceleration: f32,
    /// Horizontal acceleration while airborne.
    pub air_acceleration: f32,
    /// X/Z drag multiplier.
    pub horizontal_drag: f32,
    /// Y drag multiplier while flying.
    pub flying_vertical_drag: f32,
    /// Y drag multiplier while not flying.
    pub falling_vertical_drag: f32,
    /// Extra X/Z multiplier while grounded.
    pub ground_friction: f32,
    /// Squared intent length below which no acceleration is applied.
    pub min_intent_sq: f32,
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            jump_impulse: JUMP_IMPULSE,
            descend_speed: DESCEND_SPEED,
            gravity: GRAVITY_PER_TICK,
            ground_acceleration: GROUND_ACCELERATION,
            air_acceleration: AIR_ACCELERATION,
            horizontal_drag: HORIZONTAL_DRAG,
            flying_vertical_drag: FLYING_VERTICAL_DRAG,
            falling_vertical_drag: FALLING_VERTICAL_DRAG,
            ground_friction: GROUND_FRICTION,
            min_intent_sq: MIN_INTENT_SQ,
        }
    }
}

impl MovementSettings {
    /// Reject negative or non-finite values.
    pub fn validate(&self) -> Result<(), BodyError> {
        let fields = [
            ("jump_impulse", self.jump_impulse),
            ("descend_speed", self.descend_speed),
            ("gravity", self.gravity),
            ("ground_acceleration", self.ground_acceleration),
            ("air_acceleration", self.air_acceleration),
            ("horizontal_drag", self.horizontal_drag),
            ("flying_vertical_drag", self.flying_vertical_drag),
            ("falling_vertical_drag", self.falling_vertical_drag),
            ("ground_friction", self.ground_friction),
            ("min_intent_sq", self.min_intent_sq),
        ];

        match fields
            .into_iter()
            .find(|&(_, value)| !value.is_finite() || value < 0.0)
        {
            Some((name, value)) => Err(BodyError::InvalidSetting { name, value }),
            None => Ok(()),
        }
    }

    /// Horizontal acceleration for this tick given the current contact state.
    #[inline]
    pub fn acceleration(&self, on_ground: bool, can_fly: bool) -> f32 {
        if on_ground || can_fly {
            self.ground_acceleration
        } else {
            self.air_acceleration
        }
    }

    /// Vertical drag multiplier for the current flight state.
    #[inline]
    pub fn vertical_drag(&self, can_fly: bool) -> f32 {
        if can_fly {
            self.flying_vertical_drag
        } else {
            self.falling_vertical_drag
        }
    }
}

/// Dimensions of the body's collision hull and camera.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct BodyShape {
    /// Full extent on X and Z.
    pub width: f32,
    /// Full extent on Y.
    pub height: f32,
    /// Eye offset above the body's feet.
    pub eye_height: f32,
}

impl Default for BodyShape {
    fn default() -> Self {
        Self::new(BODY_WIDTH, BODY_HEIGHT)
    }
}

impl BodyShape {
    /// Shape with the eyes placed the default distance below the top.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            eye_height: height - EYE_OFFSET_FROM_TOP,
        }
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    pub fn validate(&self) -> Result<(), BodyError> {
        let extent_ok = |v: f32| v.is_finite() && v > 0.0;
        if !extent_ok(self.width) || !extent_ok(self.height) {
            return Err(BodyError::InvalidShape {
                width: self.width,
                height: self.height,
            });
        }
        if !self.eye_height.is_finite() || !(0.0..=self.height).contains(&self.eye_height) {
            return Err(BodyError::InvalidEyeHeight {
                eye_height: self.eye_height,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Region a body may be spawned into.
///
/// `width` spans X from 0, `length` spans Z from 0. Bodies appear a fixed distance above
/// `terrain_height` so they always start in the air.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpawnArea {
    pub width: f32,
    pub length: f32,
    pub terrain_height: f32,
}

impl SpawnArea {
    pub fn new(width: f32, length: f32, terrain_height: f32) -> Self {
        Self {
            width,
            length,
            terrain_height,
        }
    }

    pub fn validate(&self) -> Result<(), BodyError> {
        let extent_ok = |v: f32| v.is_finite() && v > 0.0;
        if !extent_ok(self.width) || !extent_ok(self.length) {
            return Err(BodyError::EmptySpawnArea {
                width: self.width,
                length: self.length,
            });
        }
        if !self.terrain_height.is_finite() {
            return Err(BodyError::NonFiniteTerrain(self.terrain_height));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(MovementSettings::default().validate().is_ok());
        assert!(BodyShape::default().validate().is_ok());
    }

    #[test]
    fn default_shape_puts_eyes_below_top() {
        let shape = BodyShape::default();
        assert!((shape.eye_height - 1.62).abs() < 1.0e-6);
        assert!((shape.half_width() - 0.3).abs() < 1.0e-6);
    }

    #[test]
    fn acceleration_depends_on_contact() {
        let s = MovementSettings::default();
        assert_eq!(s.acceleration(true, false), GROUND_ACCELERATION);
        assert_eq!(s.acceleration(false, true), GROUND_ACCELERATION);
        assert_eq!(s.acceleration(false, false), AIR_ACCELERATION);
    }

    #[test]
    fn negative_setting_is_named() {
        let s = MovementSettings {
            gravity: -1.0,
            ..MovementSettings::default()
        };
        assert_eq!(
            s.validate(),
            Err(BodyError::InvalidSetting {
                name: "gravity",
                value: -1.0
            })
        );
    }

    #[test]
    fn degenerate_shapes_are_rejected() {
        assert!(matches!(
            BodyShape::new(0.0, 1.8).validate(),
            Err(BodyError::InvalidShape { .. })
        ));
        assert!(matches!(
            BodyShape::new(0.6, f32::NAN).validate(),
            Err(BodyError::InvalidShape { .. })
        ));

        let mut tall_eyes = BodyShape::default();
        tall_eyes.eye_height = 2.5;
        assert!(matches!(
            tall_eyes.validate(),
            Err(BodyError::InvalidEyeHeight { .. })
        ));
    }

    #[test]
    fn spawn_area_needs_room() {
        assert!(SpawnArea::new(64.0, 64.0, 32.0).validate().is_ok());
        assert!(matches!(
            SpawnArea::new(0.0, 64.0, 32.0).validate(),
            Err(BodyError::EmptySpawnArea { .. })
        ));
        assert_eq!(
            SpawnArea::new(64.0, 64.0, f32::INFINITY).validate(),
            Err(BodyError::NonFiniteTerrain(f32::INFINITY))
        );
    }
}
