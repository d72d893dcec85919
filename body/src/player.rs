use rand::Rng;

use crate::{
    bitmask_flags::BitmaskFlags,
    collision::{self, Aabb, CollisionWorld, Point3, Resolution, Vec3},
    constants::SPAWN_HEIGHT_ABOVE_TERRAIN,
    define_bitmask_flags,
    error::BodyError,
    input::{ActionSource, MovementIntent},
    kinematics::{self, Support},
    orientation::Orientation,
    raytrace::{self, BlockRaycast, RayHit},
    settings::{BodyShape, MovementSettings, SpawnArea},
};

define_bitmask_flags!(BodyFlag, u8, {
    OnGround,
    CanFly,
    NoClip,
});

pub type BodyFlags = BitmaskFlags<u8>;

/// The player's kinematic body in the block world.
///
/// Owns its collision hull. After every completed move the hull and position agree:
/// `position.x/z` is the hull's horizontal center and `position.y` is its bottom.
///
/// Driven by one thread, once per fixed tick. Queries like [`PlayerBody::raytrace`] only
/// read and may be issued between ticks.
#[derive(Clone, Debug)]
pub struct PlayerBody {
    position: Vec3,
    previous_position: Vec3,
    velocity: Vec3,
    shape: BodyShape,
    orientation: Orientation,
    hull: Aabb,
    flags: BodyFlags,
    settings: MovementSettings,
    /// Collider buffer reused across moves.
    scratch: Vec<Aabb>,
}

impl PlayerBody {
    /// Place a body with its feet at `position`, at rest with the default orientation.
    pub fn new(
        position: Vec3,
        shape: BodyShape,
        settings: MovementSettings,
    ) -> Result<Self, BodyError> {
        check_position(position)?;
        shape.validate()?;
        settings.validate()?;

        Ok(Self {
            position,
            previous_position: position,
            velocity: Vec3::zeros(),
            shape,
            orientation: Orientation::default(),
            hull: Aabb::from_feet(position, shape.half_width(), shape.height),
            flags: BodyFlags::default(),
            settings,
            scratch: Vec::new(),
        })
    }

    /// Default-shaped body with default tuning.
    pub fn with_defaults(position: Vec3) -> Result<Self, BodyError> {
        Self::new(position, BodyShape::default(), MovementSettings::default())
    }

    /// Body at a random spot in `area`, dropped from above the terrain.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        area: &SpawnArea,
        shape: BodyShape,
        settings: MovementSettings,
    ) -> Result<Self, BodyError> {
        area.validate()?;
        let body = Self::new(random_spawn_point(rng, area), shape, settings)?;
        log::debug!("spawned body at {:?}", body.position);
        Ok(body)
    }

    /// Move to a fresh random spot in `area`.
    ///
    /// Velocity, flags and orientation carry over.
    pub fn respawn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        area: &SpawnArea,
    ) -> Result<(), BodyError> {
        area.validate()?;
        self.place(random_spawn_point(rng, area));
        log::debug!("respawned body at {:?}", self.position);
        Ok(())
    }

    /// Put the body's feet at `position` without collision.
    pub fn teleport(&mut self, position: Vec3) -> Result<(), BodyError> {
        check_position(position)?;
        self.place(position);
        log::debug!("teleported body to {:?}", self.position);
        Ok(())
    }

    fn place(&mut self, position: Vec3) {
        self.position = position;
        self.previous_position = position;
        self.hull = Aabb::from_feet(position, self.shape.half_width(), self.shape.height);
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Position at the start of the current tick, for render interpolation.
    #[inline]
    pub fn previous_position(&self) -> Vec3 {
        self.previous_position
    }

    /// Lerp between the previous and current positions; `partial` is the fraction of a tick
    /// elapsed since the last one.
    pub fn interpolated_position(&self, partial: f32) -> Vec3 {
        self.previous_position.lerp(&self.position, partial.clamp(0.0, 1.0))
    }

    #[inline]
    pub fn eye_position(&self) -> Vec3 {
        self.position + Vec3::new(0.0, self.shape.eye_height, 0.0)
    }

    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    #[inline]
    pub fn hull(&self) -> &Aabb {
        &self.hull
    }

    #[inline]
    pub fn shape(&self) -> &BodyShape {
        &self.shape
    }

    #[inline]
    pub fn settings(&self) -> &MovementSettings {
        &self.settings
    }

    #[inline]
    pub fn orientation(&self) -> &Orientation {
        &self.orientation
    }

    #[inline]
    pub fn flags(&self) -> BodyFlags {
        self.flags
    }

    #[inline]
    pub fn on_ground(&self) -> bool {
        self.flags.has(BodyFlag::OnGround)
    }

    #[inline]
    pub fn can_fly(&self) -> bool {
        self.flags.has(BodyFlag::CanFly)
    }

    #[inline]
    pub fn no_clip(&self) -> bool {
        self.flags.has(BodyFlag::NoClip)
    }

    pub fn set_can_fly(&mut self, on: bool) {
        self.flags.set(BodyFlag::CanFly, on);
    }

    pub fn set_no_clip(&mut self, on: bool) {
        self.flags.set(BodyFlag::NoClip, on);
    }

    /// Returns the new state.
    pub fn toggle_fly(&mut self) -> bool {
        self.flags.toggle(BodyFlag::CanFly)
    }

    /// Returns the new state.
    pub fn toggle_no_clip(&mut self) -> bool {
        self.flags.toggle(BodyFlag::NoClip)
    }

    /// Geometry is ignored only while flying with no-clip on; either flag alone still collides.
    #[inline]
    pub fn collides(&self) -> bool {
        !self.flags.has_all(&[BodyFlag::CanFly, BodyFlag::NoClip])
    }

    fn support(&self) -> Support {
        Support {
            on_ground: self.on_ground(),
            can_fly: self.can_fly(),
        }
    }

    /// Apply a look delta in degrees.
    pub fn turn(&mut self, dx: f32, dy: f32) {
        self.orientation.turn(dx, dy);
    }

    #[inline]
    pub fn look_vector(&self) -> Vec3 {
        self.orientation.look_vector()
    }

    /// Advance one tick, sampling `input` once.
    pub fn tick<W, S>(&mut self, world: &W, input: &S) -> Resolution
    where
        W: CollisionWorld + ?Sized,
        S: ActionSource + ?Sized,
    {
        self.tick_with_intent(world, MovementIntent::sample(input))
    }

    /// Advance one tick with an already sampled intent.
    pub fn tick_with_intent<W: CollisionWorld + ?Sized>(
        &mut self,
        world: &W,
        intent: MovementIntent,
    ) -> Resolution {
        self.previous_position = self.position;

        let support = self.support();
        kinematics::integrate(
            &mut self.velocity,
            &intent,
            support,
            self.orientation.yaw(),
            &self.settings,
        );

        let resolution = self.move_by(world, self.velocity);

        // The move may have landed or lifted off the body.
        let support = self.support();
        kinematics::apply_drag(&mut self.velocity, support, &self.settings);
        resolution
    }

    /// Move the hull by `delta` through `world`, then update velocity, ground state and
    /// position from the result.
    ///
    /// Each clipped axis zeroes its velocity component.
    pub fn move_by<W: CollisionWorld + ?Sized>(&mut self, world: &W, delta: Vec3) -> Resolution {
        let resolution = if self.collides() {
            collision::sweep(world, &mut self.hull, delta, &mut self.scratch)
        } else {
            collision::translate_unclipped(&mut self.hull, delta)
        };

        for (i, &collided) in resolution.collided.iter().enumerate() {
            if collided {
                self.velocity[i] = 0.0;
            }
        }

        let was_on_ground = self.on_ground();
        let on_ground = resolution.on_ground();
        self.flags.set(BodyFlag::OnGround, on_ground);
        if on_ground && !was_on_ground {
            log::trace!("landed at y={}", self.hull.min_y);
        }
        if resolution.any_collision() {
            log::trace!(
                "collision requested={:?} applied={:?}",
                resolution.requested,
                resolution.applied
            );
        }

        self.position = self.hull.feet();
        resolution
    }

    /// Target the block under the crosshair, up to `reach` from the eyes.
    pub fn raytrace<W: BlockRaycast + ?Sized>(&self, world: &W, reach: f32) -> Option<RayHit> {
        let start = Point3::from(self.eye_position());
        let end = raytrace::segment_end(start, self.look_vector(), reach);
        world.query_ray(start, end)
    }
}

fn check_position(position: Vec3) -> Result<(), BodyError> {
    if position.iter().all(|c| c.is_finite()) {
        Ok(())
    } else {
        Err(BodyError::NonFinitePosition {
            x: position.x,
            y: position.y,
            z: position.z,
        })
    }
}

fn random_spawn_point<R: Rng + ?Sized>(rng: &mut R, area: &SpawnArea) -> Vec3 {
    Vec3::new(
        rng.gen_range(0.0..area.width),
        area.terrain_height + SPAWN_HEIGHT_ABOVE_TERRAIN,
        rng.gen_range(0.0..area.length),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::StaticColliders;
    use crate::input::InputAction;
    use approx::assert_relative_eq;
    use rand::{SeedableRng, rngs::SmallRng};

    fn floor_world() -> StaticColliders {
        StaticColliders::new(vec![Aabb::new(-8.0, 0.0, -8.0, 8.0, 1.0, 8.0)])
    }

    #[test]
    fn new_builds_hull_from_feet() {
        let body = PlayerBody::with_defaults(Vec3::new(2.0, 5.0, -1.0)).unwrap();
        assert_eq!(body.hull().min_y, 5.0);
        assert_relative_eq!(body.hull().center().x, 2.0, epsilon = 1.0e-6);
        assert_relative_eq!(body.hull().size().y, 1.8, epsilon = 1.0e-6);
        assert_eq!(body.previous_position(), body.position());
        assert!(!body.on_ground());
    }

    #[test]
    fn new_rejects_bad_input() {
        assert!(matches!(
            PlayerBody::with_defaults(Vec3::new(f32::NAN, 0.0, 0.0)),
            Err(BodyError::NonFinitePosition { .. })
        ));
        assert!(matches!(
            PlayerBody::new(
                Vec3::zeros(),
                BodyShape::new(-1.0, 1.8),
                MovementSettings::default()
            ),
            Err(BodyError::InvalidShape { .. })
        ));
    }

    #[test]
    fn spawn_lands_above_terrain_inside_area() {
        let mut rng = SmallRng::seed_from_u64(7);
        let area = SpawnArea::new(64.0, 32.0, 20.0);
        for _ in 0..16 {
            let body = PlayerBody::spawn(
                &mut rng,
                &area,
                BodyShape::default(),
                MovementSettings::default(),
            )
            .unwrap();
            let p = body.position();
            assert!((0.0..64.0).contains(&p.x));
            assert!((0.0..32.0).contains(&p.z));
            assert_eq!(p.y, 30.0);
        }
    }

    #[test]
    fn respawn_keeps_velocity_and_resets_interpolation() {
        let mut rng = SmallRng::seed_from_u64(3);
        let area = SpawnArea::new(16.0, 16.0, 4.0);
        let mut body = PlayerBody::with_defaults(Vec3::new(1.0, 1.0, 1.0)).unwrap();
        body.set_velocity(Vec3::new(0.0, -0.3, 0.0));
        body.respawn(&mut rng, &area).unwrap();

        assert_eq!(body.velocity(), Vec3::new(0.0, -0.3, 0.0));
        assert_eq!(body.previous_position(), body.position());
        assert_eq!(body.hull().feet().y, 14.0);
        assert!(body.respawn(&mut rng, &SpawnArea::new(0.0, 1.0, 0.0)).is_err());
    }

    #[test]
    fn teleport_validates_and_moves_hull() {
        let mut body = PlayerBody::with_defaults(Vec3::zeros()).unwrap();
        body.teleport(Vec3::new(4.0, 8.0, 4.0)).unwrap();
        assert_eq!(body.hull().min_y, 8.0);
        assert!(body.teleport(Vec3::new(0.0, f32::INFINITY, 0.0)).is_err());
        assert_eq!(body.position(), Vec3::new(4.0, 8.0, 4.0));
    }

    #[test]
    fn falls_then_rests_on_floor() {
        let world = floor_world();
        let mut body = PlayerBody::with_defaults(Vec3::new(0.0, 3.0, 0.0)).unwrap();
        let idle = MovementIntent::default();

        for _ in 0..200 {
            body.tick_with_intent(&world, idle);
        }

        assert!(body.on_ground());
        assert_eq!(body.position().y, 1.0);
        assert_eq!(body.velocity().y, 0.0);
    }

    #[test]
    fn descend_wins_over_jump_during_tick() {
        let world = floor_world();
        let mut body = PlayerBody::with_defaults(Vec3::new(0.0, 1.0, 0.0)).unwrap();
        body.tick_with_intent(&world, MovementIntent::default());
        assert!(body.on_ground());

        let both = MovementIntent::new(&[InputAction::Jump, InputAction::Descend]);
        body.tick_with_intent(&world, both);
        // Blocked by the floor, so the body stays grounded and drag absorbs vertical velocity.
        assert!(body.on_ground());
        assert_eq!(body.position().y, 1.0);
        assert_eq!(body.velocity().y, 0.0);
    }

    #[test]
    fn drag_uses_contact_state_after_the_move() {
        let world = floor_world();
        let mut body = PlayerBody::with_defaults(Vec3::new(0.0, 1.5, 0.0)).unwrap();
        body.set_velocity(Vec3::new(0.1, -0.6, 0.0));
        assert!(!body.on_ground());

        body.tick_with_intent(&world, MovementIntent::default());
        // Landing this tick applies ground friction on top of air drag.
        assert!(body.on_ground());
        assert_relative_eq!(body.velocity().x, 0.1 * 0.91 * 0.8, epsilon = 1.0e-6);
        assert_eq!(body.velocity().y, 0.0);
    }

    #[test]
    fn jump_leaves_ground() {
        let world = floor_world();
        let mut body = PlayerBody::with_defaults(Vec3::new(0.0, 1.0, 0.0)).unwrap();
        body.tick_with_intent(&world, MovementIntent::default());
        assert!(body.on_ground());

        body.tick_with_intent(&world, MovementIntent::new(&[InputAction::Jump]));
        assert!(!body.on_ground());
        assert!(body.position().y > 1.0);
    }

    #[test]
    fn walking_forward_follows_yaw() {
        let world = floor_world();
        let mut body = PlayerBody::with_defaults(Vec3::new(0.0, 1.0, 0.0)).unwrap();
        // Settle onto the floor so ground acceleration applies.
        body.tick_with_intent(&world, MovementIntent::default());

        let fwd = MovementIntent::new(&[InputAction::Forward]);
        for _ in 0..10 {
            body.tick_with_intent(&world, fwd);
        }
        // Default yaw is 90, so forward is +X.
        assert!(body.position().x > 0.1);
        assert!(body.position().z.abs() < 1.0e-4);
        assert_eq!(body.previous_position().y, 1.0);
    }

    #[test]
    fn flying_ignores_gravity() {
        let world = StaticColliders::default();
        let mut body = PlayerBody::with_defaults(Vec3::new(0.0, 10.0, 0.0)).unwrap();
        body.set_can_fly(true);
        body.tick_with_intent(&world, MovementIntent::default());
        assert_eq!(body.position().y, 10.0);
    }

    #[test]
    fn either_flag_alone_still_collides() {
        let world = floor_world();
        let down = Vec3::new(0.0, -5.0, 0.0);

        let mut flying = PlayerBody::with_defaults(Vec3::new(0.0, 2.0, 0.0)).unwrap();
        flying.set_can_fly(true);
        flying.move_by(&world, down);
        assert_eq!(flying.position().y, 1.0);

        let mut ghost = PlayerBody::with_defaults(Vec3::new(0.0, 2.0, 0.0)).unwrap();
        ghost.set_no_clip(true);
        ghost.move_by(&world, down);
        assert_eq!(ghost.position().y, 1.0);
    }

    #[test]
    fn toggles_report_new_state() {
        let mut body = PlayerBody::with_defaults(Vec3::zeros()).unwrap();
        assert!(body.collides());
        assert!(body.toggle_fly());
        assert!(body.toggle_no_clip());
        assert!(!body.collides());
        assert!(!body.toggle_fly());
        assert!(body.collides());
    }

    #[test]
    fn interpolation_blends_ticks() {
        let world = StaticColliders::default();
        let mut body = PlayerBody::with_defaults(Vec3::new(0.0, 10.0, 0.0)).unwrap();
        body.set_velocity(Vec3::new(1.0, 0.0, 0.0));
        body.set_can_fly(true);
        body.tick_with_intent(&world, MovementIntent::default());

        let half = body.interpolated_position(0.5);
        assert_relative_eq!(half.x, 0.5, epsilon = 1.0e-6);
        assert_eq!(body.interpolated_position(2.0), body.position());
    }

    #[test]
    fn eye_sits_below_top_of_hull() {
        let body = PlayerBody::with_defaults(Vec3::new(0.0, 1.0, 0.0)).unwrap();
        assert_relative_eq!(body.eye_position().y, 2.62, epsilon = 1.0e-6);
    }
}
