/*!
Math aliases and small value types shared by the collision submodules.

This module intentionally contains no algorithms.
*/

use nalgebra as na;

/// Common math aliases for clarity and consistency.
pub type Vec3 = na::Vector3<f32>;
pub type Point3 = na::Point3<f32>;

/// World axis. Also the resolution order index used by [`super::Resolution`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    /// Order in which the solver settles displacement: vertical first, then X, then Z.
    pub const RESOLVE_ORDER: [Axis; 3] = [Axis::Y, Axis::X, Axis::Z];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Unit vector along this axis scaled by `amount`.
    #[inline]
    pub fn vector(self, amount: f32) -> Vec3 {
        let mut v = Vec3::zeros();
        v[self.index()] = amount;
        v
    }
}
