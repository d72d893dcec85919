//! Block targeting contract.
//!
//! The body only builds the view segment; walking the voxel grid is the world's job.

use nalgebra::Vector3;

use crate::collision::{Point3, Vec3};

/// Face of a block struck by a ray.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockFace {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

impl BlockFace {
    pub const ALL: [BlockFace; 6] = [
        BlockFace::Down,
        BlockFace::Up,
        BlockFace::North,
        BlockFace::South,
        BlockFace::West,
        BlockFace::East,
    ];

    /// Outward unit normal. North is -Z, west is -X.
    pub fn normal(self) -> Vector3<i32> {
        match self {
            BlockFace::Down => Vector3::new(0, -1, 0),
            BlockFace::Up => Vector3::new(0, 1, 0),
            BlockFace::North => Vector3::new(0, 0, -1),
            BlockFace::South => Vector3::new(0, 0, 1),
            BlockFace::West => Vector3::new(-1, 0, 0),
            BlockFace::East => Vector3::new(1, 0, 0),
        }
    }

    /// Block coordinate adjacent to `block` across this face, e.g. where a placed block goes.
    pub fn offset(self, block: Vector3<i32>) -> Vector3<i32> {
        block + self.normal()
    }
}

/// Nearest solid block struck by a ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    /// Integer coordinate of the struck block.
    pub block: Vector3<i32>,
    pub face: BlockFace,
    /// Distance from the segment start to the hit point.
    pub distance: f32,
}

/// World-side ray query.
pub trait BlockRaycast {
    /// Nearest solid block on the segment `start..end`, or `None`.
    fn query_ray(&self, start: Point3, end: Point3) -> Option<RayHit>;
}

impl<W: BlockRaycast + ?Sized> BlockRaycast for &W {
    fn query_ray(&self, start: Point3, end: Point3) -> Option<RayHit> {
        (**self).query_ray(start, end)
    }
}

/// End point of a ray of length `reach` from `start` along unit `direction`.
#[inline]
pub fn segment_end(start: Point3, direction: Vec3, reach: f32) -> Point3 {
    start + direction * reach
}
