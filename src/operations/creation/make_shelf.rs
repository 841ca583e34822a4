use crate::error::{GeometryError, Result};
use crate::geometry::shelf::flatten;
use crate::geometry::{Corner, ShelfParams, ShelfSolid, SHELF_VERTEX_COUNT};
use crate::math::{Point3, TOLERANCE};

/// Computes the vertices of a mitered shelf from explicit parameters.
///
/// The board runs along x from its right end (`x = 0`) to its left end
/// (`x = length`), is `thickness` thick along y, and protrudes along z from
/// the wall (`z = 0`) to `right_depth`/`left_depth` at each end. Each present
/// corner angle pulls that corner inward so two shelves meeting at that
/// angle close flush.
pub struct MakeShelf {
    params: ShelfParams,
}

impl MakeShelf {
    /// Creates a new `MakeShelf` operation.
    #[must_use]
    pub fn new(params: ShelfParams) -> Self {
        Self { params }
    }

    /// Executes the operation, returning the shelf solid.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if the parameters describe a degenerate
    /// shelf; see [`MakeShelf::compute_vertices`].
    pub fn execute(&self) -> Result<ShelfSolid> {
        let vertices = self.compute_vertices()?;
        Ok(ShelfSolid::new(vertices, self.params.clone()))
    }

    /// Computes the flat `x, y, z` vertex buffer, for renderers updating an
    /// existing mesh in place. The face topology never changes.
    ///
    /// # Errors
    ///
    /// Same as [`MakeShelf::compute_vertices`].
    pub fn vertex_buffer(&self) -> Result<[f64; SHELF_VERTEX_COUNT * 3]> {
        Ok(flatten(&self.compute_vertices()?))
    }

    /// Computes the twelve vertex positions.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError`] if the length or thickness is not positive,
    /// a depth is negative, or a corner angle is not clear of 0°, 180° and
    /// 360°, where the miter is undefined.
    pub fn compute_vertices(&self) -> Result<[Point3; SHELF_VERTEX_COUNT]> {
        self.validate()?;

        let p = &self.params;
        let half = p.thickness / 2.0;
        let (left, right) = (p.length, 0.0);
        let (ld, rd) = (p.left_depth, p.right_depth);

        // back profile at z = 0, front profile at the end depths
        let mut vertices = [
            Point3::new(right, -half, 0.0),
            Point3::new(left, -half, 0.0),
            Point3::new(left, 0.0, 0.0),
            Point3::new(left, half, 0.0),
            Point3::new(right, half, 0.0),
            Point3::new(right, 0.0, 0.0),
            Point3::new(right, -half, rd),
            Point3::new(left, -half, ld),
            Point3::new(left, 0.0, ld),
            Point3::new(left, half, ld),
            Point3::new(right, half, rd),
            Point3::new(right, 0.0, rd),
        ];

        let delta_depth = ld - rd;
        for (corner, degrees) in p.corners.iter() {
            let (along, across) = corner_setback(degrees, p.thickness, delta_depth, p.length);
            let (back, front) = corner.vertices();
            let inward = corner.inward();
            vertices[back].x += inward * along;
            vertices[front].x += inward * along;
            vertices[front].z += inward * across;
        }

        Ok(vertices)
    }

    fn validate(&self) -> Result<()> {
        let p = &self.params;
        if !(p.length > 0.0 && p.length.is_finite()) {
            return Err(GeometryError::NonPositiveLength(p.length).into());
        }
        if !(p.thickness > 0.0 && p.thickness.is_finite()) {
            return Err(GeometryError::NonPositiveThickness(p.thickness).into());
        }
        for (name, value) in [("leftDepth", p.left_depth), ("rightDepth", p.right_depth)] {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(GeometryError::NegativeDepth { name, value }.into());
            }
        }
        for (corner, degrees) in p.corners.iter() {
            check_angle(corner, degrees)?;
        }
        Ok(())
    }
}

fn check_angle(corner: Corner, degrees: f64) -> Result<()> {
    // near 0° and 360° the setback diverges just as it does at 180°
    let in_range = degrees > TOLERANCE && degrees < 360.0 - TOLERANCE;
    if in_range && (degrees - 180.0).abs() > TOLERANCE {
        Ok(())
    } else {
        Err(GeometryError::DegenerateAngle { corner, degrees }.into())
    }
}

/// Setback of one corner for a joint of `degrees`.
///
/// Half the thickness is the side opposite half the joint angle, so the
/// corner moves `half / tan(angle / 2)` along the length. On a tapered shelf
/// the front edge also slides along depth in proportion to the taper.
fn corner_setback(degrees: f64, thickness: f64, delta_depth: f64, length: f64) -> (f64, f64) {
    let along = (thickness / 2.0) / (degrees.to_radians() / 2.0).tan();
    let across = delta_depth * along / length;
    (along, across)
}
