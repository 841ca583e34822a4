use nalgebra::{Rotation3, Vector3};

use crate::math::{Matrix4, Point3};

/// Local position and rotation about the z axis of a shelf or node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Translation relative to the parent frame.
    pub position: Point3,
    /// Rotation about z, in degrees, applied before the translation.
    pub rotation_degrees: f64,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            position: Point3::origin(),
            rotation_degrees: 0.0,
        }
    }
}

impl Placement {
    /// A placement rotated about the local origin.
    #[must_use]
    pub fn rotated(rotation_degrees: f64) -> Self {
        Self {
            rotation_degrees,
            ..Self::default()
        }
    }

    /// A placement translated without rotation.
    #[must_use]
    pub fn at(position: Point3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Homogeneous matrix mapping local coordinates into the parent frame.
    #[must_use]
    pub fn matrix(&self) -> Matrix4 {
        let rotation =
            Rotation3::from_axis_angle(&Vector3::z_axis(), self.rotation_degrees.to_radians());
        Matrix4::new_translation(&self.position.coords) * rotation.to_homogeneous()
    }
}
