use crate::geometry::ShelfSolid;
use crate::math::{Point3, Vector3};
use crate::operations::assembly::ShelfUnit;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Size of the box along each axis.
    #[must_use]
    pub fn extent(&self) -> Vector3 {
        self.max - self.min
    }

    /// Returns `true` if `point` lies inside the box or within `tolerance` of it.
    #[must_use]
    pub fn contains(&self, point: &Point3, tolerance: f64) -> bool {
        (0..3).all(|i| point[i] >= self.min[i] - tolerance && point[i] <= self.max[i] + tolerance)
    }
}

/// Computes the axis-aligned bounding box of shelf geometry.
pub struct BoundingBox {
    points: Vec<Point3>,
}

impl BoundingBox {
    /// Creates a new `BoundingBox` query over arbitrary points.
    #[must_use]
    pub fn new(points: impl IntoIterator<Item = Point3>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// Bounds a single shelf in its own frame.
    #[must_use]
    pub fn of_solid(solid: &ShelfSolid) -> Self {
        Self::new(solid.vertices().iter().copied())
    }

    /// Bounds every placed shelf of a unit, in unit coordinates.
    #[must_use]
    pub fn of_unit(unit: &ShelfUnit) -> Self {
        Self::new(unit.world_vertices().into_iter().flatten())
    }

    /// Executes the query, returning `None` when there is nothing to bound.
    #[must_use]
    pub fn execute(&self) -> Option<Aabb> {
        let (first, rest) = self.points.split_first()?;
        let mut aabb = Aabb {
            min: *first,
            max: *first,
        };
        for p in rest {
            aabb.min = aabb.min.inf(p);
            aabb.max = aabb.max.sup(p);
        }
        Some(aabb)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::geometry::{Corner, ShelfParams};
    use crate::operations::assembly::UnitLayout;
    use crate::operations::creation::MakeShelf;
    use crate::style::StyleConfig;

    #[test]
    fn square_shelf_bounds() {
        let solid = MakeShelf::new(ShelfParams::new(12.0, 4.0, 6.0, 0.5))
            .execute()
            .unwrap();
        let aabb = BoundingBox::of_solid(&solid).execute().unwrap();
        assert_relative_eq!(aabb.min, Point3::new(0.0, -0.25, 0.0));
        assert_relative_eq!(aabb.max, Point3::new(12.0, 0.25, 6.0));
    }

    #[test]
    fn miters_never_grow_an_acute_shelf() {
        let params = ShelfParams::new(12.0, 4.0, 4.0, 0.5)
            .with_corner(Corner::LeftA, 60.0)
            .with_corner(Corner::RightB, 60.0);
        let solid = MakeShelf::new(params).execute().unwrap();
        let aabb = BoundingBox::of_solid(&solid).execute().unwrap();
        // tips stay at full length
        assert_relative_eq!(aabb.extent().x, 12.0);
    }

    #[test]
    fn empty_query_has_no_box() {
        assert!(BoundingBox::new(Vec::new()).execute().is_none());
    }

    #[test]
    fn unit_box_spans_its_width() {
        let style = StyleConfig::default();
        let unit = UnitLayout::new(80.0, &style)
            .execute(&mut StdRng::seed_from_u64(12))
            .unwrap();
        let aabb = BoundingBox::of_unit(&unit).execute().unwrap();

        // shelves fan out from nodes at x = 0 and x = 80
        assert!(aabb.min.x <= 0.0);
        assert!(aabb.max.x >= 80.0);
        // every shelf protrudes from the wall plane
        assert!(aabb.min.z >= -1e-9);
        assert!(aabb.max.z <= style.max_depth + 1e-9);
        for vertices in unit.world_vertices() {
            for v in &vertices {
                assert!(aabb.contains(v, 1e-9));
            }
        }
    }
}
