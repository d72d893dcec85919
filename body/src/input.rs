//! Logical movement actions and the per-tick intent sampled from them.

use nalgebra::Vector2;

use crate::{bitmask_flags::BitmaskFlags, define_bitmask_flags};

define_bitmask_flags!(InputAction, u8, {
    Forward,
    Backward,
    StrafeLeft,
    StrafeRight,
    Jump,
    Descend,
});

/// Answers whether a logical action is currently held.
///
/// Implemented by the input layer (keyboard, gamepad, replay, AI). The body queries it once
/// per action at the start of a tick.
pub trait ActionSource {
    fn is_active(&self, action: InputAction) -> bool;
}

impl<F: Fn(InputAction) -> bool> ActionSource for F {
    fn is_active(&self, action: InputAction) -> bool {
        self(action)
    }
}

/// Snapshot of the held actions for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MovementIntent {
    held: BitmaskFlags<u8>,
}

impl MovementIntent {
    pub fn new(actions: &[InputAction]) -> Self {
        Self {
            held: actions.iter().copied().collect(),
        }
    }

    /// Query every action on `source` exactly once.
    pub fn sample<S: ActionSource + ?Sized>(source: &S) -> Self {
        Self {
            held: InputAction::ALL
                .iter()
                .copied()
                .filter(|&a| source.is_active(a))
                .collect(),
        }
    }

    #[inline]
    pub fn held(&self, action: InputAction) -> bool {
        self.held.has(action)
    }

    pub fn with(mut self, action: InputAction) -> Self {
        self.held.add(action);
        self
    }

    #[inline]
    pub fn jump(&self) -> bool {
        self.held(InputAction::Jump)
    }

    #[inline]
    pub fn descend(&self) -> bool {
        self.held(InputAction::Descend)
    }

    /// Raw horizontal intent `(x, z)` with each component in `{-1, 0, 1}`.
    ///
    /// Forward is -Z and strafe-right is +X before yaw rotation. Opposing actions cancel.
    pub fn planar(&self) -> Vector2<f32> {
        let mut xz = Vector2::zeros();
        if self.held(InputAction::Forward) {
            xz.y -= 1.0;
        }
        if self.held(InputAction::Backward) {
            xz.y += 1.0;
        }
        if self.held(InputAction::StrafeLeft) {
            xz.x -= 1.0;
        }
        if self.held(InputAction::StrafeRight) {
            xz.x += 1.0;
        }
        xz
    }
}

impl ActionSource for MovementIntent {
    fn is_active(&self, action: InputAction) -> bool {
        self.held(action)
    }
}
