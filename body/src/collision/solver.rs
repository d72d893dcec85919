use super::{
    aabb::Aabb,
    types::{Axis, Vec3},
    world::CollisionWorld,
};

/// Outcome of moving a hull through the world for one step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    /// Displacement that was asked for.
    pub requested: Vec3,
    /// Displacement actually applied to the hull.
    pub applied: Vec3,
    /// Per-axis flag (indexed by [`Axis::index`]) set when that axis was clipped.
    pub collided: [bool; 3],
}

impl Resolution {
    /// A step that moved the full requested distance.
    #[inline]
    pub fn unobstructed(requested: Vec3) -> Self {
        Self {
            requested,
            applied: requested,
            collided: [false; 3],
        }
    }

    #[inline]
    pub fn collided(&self, axis: Axis) -> bool {
        self.collided[axis.index()]
    }

    /// Downward travel was blocked. Hitting a ceiling on the way up does not count.
    #[inline]
    pub fn on_ground(&self) -> bool {
        self.collided(Axis::Y) && self.requested.y < 0.0
    }

    #[inline]
    pub fn any_collision(&self) -> bool {
        self.collided.iter().any(|&c| c)
    }
}

#[inline]
fn clip_along(collider: &Aabb, axis: Axis, moving: &Aabb, delta: f32) -> f32 {
    match axis {
        Axis::X => collider.clip_x_collide(moving, delta),
        Axis::Y => collider.clip_y_collide(moving, delta),
        Axis::Z => collider.clip_z_collide(moving, delta),
    }
}

/// Axis-sequential swept clipping of `hull` against `colliders`.
///
/// Y is settled first, then X against the Y-moved hull, then Z against the X/Y-moved hull,
/// so horizontal sliding is computed from the settled vertical position. Each axis takes
/// the most restrictive clip over all colliders and the hull is moved in place.
///
/// `colliders` must contain every solid box overlapping the swept region; see
/// [`Aabb::grow`]. Their order does not matter.
pub fn resolve(hull: &mut Aabb, requested: Vec3, colliders: &[Aabb]) -> Resolution {
    let mut applied = requested;
    let mut collided = [false; 3];

    for axis in Axis::RESOLVE_ORDER {
        let i = axis.index();
        let wanted = requested[i];
        let clipped = colliders
            .iter()
            .fold(wanted, |d, collider| clip_along(collider, axis, hull, d));

        hull.translate(axis.vector(clipped));
        applied[i] = clipped;
        collided[i] = clipped != wanted;
    }

    Resolution {
        requested,
        applied,
        collided,
    }
}

/// Move `hull` by the full `requested` displacement, ignoring all geometry.
pub fn translate_unclipped(hull: &mut Aabb, requested: Vec3) -> Resolution {
    for axis in Axis::RESOLVE_ORDER {
        hull.translate(axis.vector(requested[axis.index()]));
    }
    Resolution::unobstructed(requested)
}

/// Gather colliders for the swept region of this step into `scratch`, then [`resolve`].
///
/// `scratch` is cleared first; callers keep it around to avoid reallocating every tick.
pub fn sweep<W: CollisionWorld + ?Sized>(
    world: &W,
    hull: &mut Aabb,
    requested: Vec3,
    scratch: &mut Vec<Aabb>,
) -> Resolution {
    scratch.clear();
    world.collect_colliders(&hull.grow(requested), scratch);
    resolve(hull, requested, scratch)
}
