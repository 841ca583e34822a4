mod tessellate_shelf;
mod tessellate_unit;

pub use tessellate_shelf::{TessellateShelf, SHELF_TRIANGLES};
pub use tessellate_unit::TessellateUnit;

use crate::math::{transform_point, transform_vector, Matrix4, Point3, Vector3};

/// A triangle mesh approximation of a surface.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Appends `other`, offsetting its indices past the current vertices.
    #[allow(clippy::cast_possible_truncation)]
    pub fn merge(&mut self, other: &TriangleMesh) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.indices
            .extend(other.indices.iter().map(|t| t.map(|i| i + offset)));
    }

    /// Maps every vertex and normal through a rigid `matrix`.
    pub fn transform(&mut self, matrix: &Matrix4) {
        for v in &mut self.vertices {
            *v = transform_point(matrix, v);
        }
        for n in &mut self.normals {
            *n = transform_vector(matrix, n);
        }
    }
}
