use super::aabb::Aabb;

/// Source of solid geometry for collision queries.
///
/// Implemented by the block world. The body never caches what it gets back; it asks again
/// every move.
pub trait CollisionWorld {
    /// Append every solid box intersecting `region` to `out`.
    ///
    /// Must be complete: a solid box overlapping `region` that is left out can be walked
    /// through. Extra boxes are harmless. `out` is not cleared by the implementation.
    fn collect_colliders(&self, region: &Aabb, out: &mut Vec<Aabb>);

    /// Allocating convenience over [`CollisionWorld::collect_colliders`].
    fn colliders(&self, region: &Aabb) -> Vec<Aabb> {
        let mut out = Vec::new();
        self.collect_colliders(region, &mut out);
        out
    }
}

impl<W: CollisionWorld + ?Sized> CollisionWorld for &W {
    fn collect_colliders(&self, region: &Aabb, out: &mut Vec<Aabb>) {
        (**self).collect_colliders(region, out);
    }
}

/// Fixed set of collider boxes answered by a linear overlap scan.
///
/// Fine for tests, tools and small scenes. Large worlds should index their blocks instead.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaticColliders {
    boxes: Vec<Aabb>,
}

impl StaticColliders {
    pub fn new(boxes: Vec<Aabb>) -> Self {
        Self { boxes }
    }

    /// Unit block boxes for each `(x, y, z)` coordinate.
    pub fn from_blocks(blocks: impl IntoIterator<Item = (i32, i32, i32)>) -> Self {
        Self::new(
            blocks
                .into_iter()
                .map(|(x, y, z)| Aabb::block(x, y, z))
                .collect(),
        )
    }
}

impl CollisionWorld for StaticColliders {
    fn collect_colliders(&self, region: &Aabb, out: &mut Vec<Aabb>) {
        out.extend(self.boxes.iter().filter(|b| b.intersects(region)).copied());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_only_overlapping_boxes() {
        let world = StaticColliders::from_blocks([(0, 0, 0), (1, 0, 0), (5, 5, 5)]);
        let region = Aabb::new(0.5, 0.5, 0.5, 1.5, 1.5, 1.5);
        let found = world.colliders(&region);
        assert_eq!(found, vec![Aabb::block(0, 0, 0), Aabb::block(1, 0, 0)]);
    }

    #[test]
    fn collect_appends_without_clearing() {
        let world = StaticColliders::from_blocks([(0, 0, 0)]);
        let mut out = vec![Aabb::block(9, 9, 9)];
        world.collect_colliders(&Aabb::new(0.0, 0.0, 0.0, 0.5, 0.5, 0.5), &mut out);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn empty_world_yields_nothing() {
        let world = StaticColliders::default();
        assert!(world.colliders(&Aabb::block(0, 0, 0)).is_empty());
    }
}
