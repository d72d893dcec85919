//! Kinematic and collision core for a player body in a block world.
//!
//! The body turns per-tick movement intent and view orientation into a displacement,
//! clips it against axis-aligned block geometry one axis at a time, and builds the view
//! ray used for block targeting. World storage, input polling and voxel ray traversal
//! live outside this crate behind [`CollisionWorld`], [`ActionSource`] and [`BlockRaycast`].

pub mod bitmask_flags;
pub mod collision;
pub mod constants;
pub mod error;
pub mod input;
pub mod kinematics;
pub mod orientation;
pub mod player;
pub mod raytrace;
pub mod settings;
pub mod utils;

pub use collision::{
    Aabb, Axis, CollisionWorld, Point3, Resolution, StaticColliders, Vec3, resolve,
};
pub use error::BodyError;
pub use input::{ActionSource, InputAction, MovementIntent};
pub use orientation::Orientation;
pub use player::{BodyFlag, BodyFlags, PlayerBody};
pub use raytrace::{BlockFace, BlockRaycast, RayHit};
pub use settings::{BodyShape, MovementSettings, SpawnArea};
pub use utils::wrap_degrees;
