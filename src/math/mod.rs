pub mod sampling;

pub use sampling::sample_quantized;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Transforms a point by a 4x4 matrix (homogeneous coordinates).
#[must_use]
pub fn transform_point(matrix: &Matrix4, point: &Point3) -> Point3 {
    let v = matrix * nalgebra::Vector4::new(point.x, point.y, point.z, 1.0);
    Point3::new(v.x, v.y, v.z)
}

/// Transforms a direction by a 4x4 matrix, ignoring its translation.
#[must_use]
pub fn transform_vector(matrix: &Matrix4, vector: &Vector3) -> Vector3 {
    let v = matrix * nalgebra::Vector4::new(vector.x, vector.y, vector.z, 0.0);
    Vector3::new(v.x, v.y, v.z)
}
