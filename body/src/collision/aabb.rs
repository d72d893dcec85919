use super::types::Vec3;

/// Axis-aligned box used for the body's hull and for world collider geometry.
///
/// Invariant: `min_* <= max_*` on every axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min_x: f32,
    pub min_y: f32,
    pub min_z: f32,
    pub max_x: f32,
    pub max_y: f32,
    pub max_z: f32,
}

impl Aabb {
    #[inline]
    pub fn new(min_x: f32, min_y: f32, min_z: f32, max_x: f32, max_y: f32, max_z: f32) -> Self {
        debug_assert!(min_x <= max_x && min_y <= max_y && min_z <= max_z);
        Self {
            min_x,
            min_y,
            min_z,
            max_x,
            max_y,
            max_z,
        }
    }

    /// Box whose bottom face is centered on `feet`.
    ///
    /// X/Z span `feet ± half_width`, Y spans `feet.y ..= feet.y + height`.
    #[inline]
    pub fn from_feet(feet: Vec3, half_width: f32, height: f32) -> Self {
        Self::new(
            feet.x - half_width,
            feet.y,
            feet.z - half_width,
            feet.x + half_width,
            feet.y + height,
            feet.z + half_width,
        )
    }

    /// Unit cube occupying block `(x, y, z)`.
    #[inline]
    pub fn block(x: i32, y: i32, z: i32) -> Self {
        let (x, y, z) = (x as f32, y as f32, z as f32);
        Self::new(x, y, z, x + 1.0, y + 1.0, z + 1.0)
    }

    #[inline]
    pub fn min(&self) -> Vec3 {
        Vec3::new(self.min_x, self.min_y, self.min_z)
    }

    #[inline]
    pub fn max(&self) -> Vec3 {
        Vec3::new(self.max_x, self.max_y, self.max_z)
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max() - self.min()
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min() + self.max()) / 2.0
    }

    /// Point at the center of the bottom face.
    ///
    /// This is how a body's position is derived from its hull.
    #[inline]
    pub fn feet(&self) -> Vec3 {
        Vec3::new(
            (self.min_x + self.max_x) / 2.0,
            self.min_y,
            (self.min_z + self.max_z) / 2.0,
        )
    }

    /// Swept region covering this box moved anywhere along `delta`.
    ///
    /// Each face is pushed out only in the direction of travel.
    pub fn grow(&self, delta: Vec3) -> Self {
        let mut out = *self;
        if delta.x < 0.0 {
            out.min_x += delta.x;
        } else {
            out.max_x += delta.x;
        }
        if delta.y < 0.0 {
            out.min_y += delta.y;
        } else {
            out.max_y += delta.y;
        }
        if delta.z < 0.0 {
            out.min_z += delta.z;
        } else {
            out.max_z += delta.z;
        }
        out
    }

    /// Translate in place.
    #[inline]
    pub fn translate(&mut self, delta: Vec3) {
        self.min_x += delta.x;
        self.min_y += delta.y;
        self.min_z += delta.z;
        self.max_x += delta.x;
        self.max_y += delta.y;
        self.max_z += delta.z;
    }

    #[inline]
    pub fn moved(&self, delta: Vec3) -> Self {
        let mut out = *self;
        out.translate(delta);
        out
    }

    /// Strict overlap test. Boxes that only share a face do not intersect.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
            && self.min_z < other.max_z
            && self.max_z > other.min_z
    }

    #[inline]
    fn overlaps_y(&self, other: &Aabb) -> bool {
        other.max_y > self.min_y && other.min_y < self.max_y
    }

    #[inline]
    fn overlaps_x(&self, other: &Aabb) -> bool {
        other.max_x > self.min_x && other.min_x < self.max_x
    }

    #[inline]
    fn overlaps_z(&self, other: &Aabb) -> bool {
        other.max_z > self.min_z && other.min_z < self.max_z
    }

    /// Clip `dx`, the X travel of `moving`, so it stops at this box's faces.
    ///
    /// Only applies when `moving` overlaps this box on Y and Z and lies entirely on one side
    /// of it on X. The result has the sign of `dx` or is zero, and never a larger magnitude.
    pub fn clip_x_collide(&self, moving: &Aabb, dx: f32) -> f32 {
        if !self.overlaps_y(moving) || !self.overlaps_z(moving) {
            return dx;
        }
        clip_axis(dx, moving.min_x, moving.max_x, self.min_x, self.max_x)
    }

    /// Y counterpart of [`Aabb::clip_x_collide`].
    pub fn clip_y_collide(&self, moving: &Aabb, dy: f32) -> f32 {
        if !self.overlaps_x(moving) || !self.overlaps_z(moving) {
            return dy;
        }
        clip_axis(dy, moving.min_y, moving.max_y, self.min_y, self.max_y)
    }

    /// Z counterpart of [`Aabb::clip_x_collide`].
    pub fn clip_z_collide(&self, moving: &Aabb, dz: f32) -> f32 {
        if !self.overlaps_x(moving) || !self.overlaps_y(moving) {
            return dz;
        }
        clip_axis(dz, moving.min_z, moving.max_z, self.min_z, self.max_z)
    }
}

/// Restrict `delta` to the gap between the moving interval and the static one.
#[inline]
fn clip_axis(
    delta: f32,
    moving_min: f32,
    moving_max: f32,
    static_min: f32,
    static_max: f32,
) -> f32 {
    let mut delta = delta;
    if delta > 0.0 && moving_max <= static_min {
        let gap = static_min - moving_max;
        if gap < delta {
            delta = gap;
        }
    }
    if delta < 0.0 && moving_min >= static_max {
        let gap = static_max - moving_min;
        if gap > delta {
            delta = gap;
        }
    }
    delta
}
