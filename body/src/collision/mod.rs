/*!
Collision root module.

Axis-aligned collision for the player body against block geometry. The code is split for
clarity:

- types:  math aliases and the `Axis` enum
- aabb:   the box primitive and its per-axis clip routines
- world:  the collider query contract and a linear-scan reference world
- solver: axis-sequential swept clipping (Y, then X, then Z)
*/

pub mod aabb;
pub mod solver;
pub mod types;
pub mod world;

// Re-export commonly used types and functions.
pub use aabb::Aabb;
pub use solver::{Resolution, resolve, sweep, translate_unclipped};
pub use types::{Axis, Point3, Vec3};
pub use world::{CollisionWorld, StaticColliders};
