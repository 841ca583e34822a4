use crate::error::{GeometryError, Result};
use crate::geometry::{ShelfSolid, SHELF_FACES};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::TriangleMesh;

/// Triangles of each face of [`SHELF_FACES`], as vertex indices.
///
/// The two profiles are split along the line joining their bevel tips into
/// two trapezoids, which stay convex whatever the miter setbacks are.
pub const SHELF_TRIANGLES: [&[[usize; 3]]; 8] = [
    &[[8, 9, 10], [8, 10, 11], [11, 6, 7], [11, 7, 8]],
    &[[5, 4, 3], [5, 3, 2], [2, 1, 0], [2, 0, 5]],
    &[[1, 2, 8], [1, 8, 7]],
    &[[3, 9, 8], [3, 8, 2]],
    &[[6, 11, 5], [6, 5, 0]],
    &[[11, 10, 4], [11, 4, 5]],
    &[[4, 10, 9], [4, 9, 3]],
    &[[1, 7, 6], [1, 6, 0]],
];

/// Tessellates a shelf into a flat-shaded triangle mesh.
///
/// Every face gets its own copy of its vertices so that each carries the
/// face normal.
pub struct TessellateShelf<'a> {
    solid: &'a ShelfSolid,
}

impl<'a> TessellateShelf<'a> {
    /// Creates a new `TessellateShelf` operation.
    #[must_use]
    pub fn new(solid: &'a ShelfSolid) -> Self {
        Self { solid }
    }

    /// Executes the tessellation, returning a triangle mesh.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateFace`] if a face has collapsed to
    /// a line or point and has no normal.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<TriangleMesh> {
        let vertices = self.solid.vertices();
        let mut mesh = TriangleMesh::default();

        for (face_index, (face, triangles)) in SHELF_FACES.iter().zip(SHELF_TRIANGLES).enumerate() {
            let points: Vec<Point3> = face.iter().map(|&i| vertices[i]).collect();
            let normal = newell_normal(&points)
                .ok_or(GeometryError::DegenerateFace { face: face_index })?;

            let base = mesh.vertices.len() as u32;
            mesh.vertices.extend_from_slice(&points);
            mesh.normals.extend(std::iter::repeat(normal).take(points.len()));

            let local = |vertex: usize| -> u32 {
                // every triangle corner is a vertex of its face
                let slot = face.iter().position(|&i| i == vertex).unwrap_or(0);
                base + slot as u32
            };
            for tri in triangles {
                mesh.indices.push(tri.map(&local));
            }
        }

        Ok(mesh)
    }
}

/// Computes the normal of a polygon using Newell's method.
fn newell_normal(points: &[Point3]) -> Option<Vector3> {
    let n = points.len();
    let mut normal = Vector3::new(0.0, 0.0, 0.0);
    for i in 0..n {
        let curr = &points[i];
        let next = &points[(i + 1) % n];
        normal.x += (curr.y - next.y) * (curr.z + next.z);
        normal.y += (curr.z - next.z) * (curr.x + next.x);
        normal.z += (curr.x - next.x) * (curr.y + next.y);
    }
    normal.try_normalize(TOLERANCE)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::{Corner, ShelfParams};
    use crate::operations::creation::MakeShelf;

    fn shelf(params: ShelfParams) -> ShelfSolid {
        MakeShelf::new(params).execute().unwrap()
    }

    #[test]
    fn triangles_stay_within_their_face() {
        for (face, triangles) in SHELF_FACES.iter().zip(SHELF_TRIANGLES) {
            assert_eq!(triangles.len(), face.len() - 2);
            for tri in triangles {
                assert!(tri.iter().all(|i| face.contains(i)), "{tri:?} not in {face:?}");
            }
        }
    }

    #[test]
    fn flat_shaded_counts() {
        let mesh = TessellateShelf::new(&shelf(ShelfParams::new(10.0, 4.0, 4.0, 0.25)))
            .execute()
            .unwrap();
        assert_eq!(mesh.vertices.len(), 36);
        assert_eq!(mesh.normals.len(), 36);
        assert_eq!(mesh.indices.len(), 20);
    }

    #[test]
    fn square_shelf_normals_point_outward() {
        let mesh = TessellateShelf::new(&shelf(ShelfParams::new(10.0, 4.0, 4.0, 0.25)))
            .execute()
            .unwrap();

        // front profile vertices come first, then the back profile
        assert_relative_eq!(mesh.normals[0], Vector3::z(), epsilon = 1e-12);
        assert_relative_eq!(mesh.normals[6], -Vector3::z(), epsilon = 1e-12);
        // top and bottom faces follow the six bevels
        let top = 6 + 6 + 4 * 4;
        assert_relative_eq!(mesh.normals[top], Vector3::y(), epsilon = 1e-12);
        assert_relative_eq!(mesh.normals[top + 4], -Vector3::y(), epsilon = 1e-12);
    }

    #[test]
    fn triangle_winding_matches_face_normal() {
        let params = ShelfParams::new(14.0, 6.0, 3.5, 0.75)
            .with_corner(Corner::LeftA, 70.0)
            .with_corner(Corner::RightB, 250.0);
        let mesh = TessellateShelf::new(&shelf(params)).execute().unwrap();
        for tri in &mesh.indices {
            let [a, b, c] = tri.map(|i| mesh.vertices[i as usize]);
            let cross = (b - a).cross(&(c - a));
            assert!(cross.dot(&mesh.normals[tri[0] as usize]) > 0.0, "{tri:?}");
        }
    }

    #[test]
    fn merge_offsets_indices() {
        let solid = shelf(ShelfParams::new(10.0, 4.0, 4.0, 0.25));
        let single = TessellateShelf::new(&solid).execute().unwrap();
        let mut combined = single.clone();
        combined.merge(&single);
        assert_eq!(combined.vertices.len(), 72);
        assert_eq!(combined.indices[20], single.indices[0].map(|i| i + 36));
    }
}
