use crate::math::Point3;
use crate::style::SurfaceRef;

/// Number of vertices of every shelf solid.
pub const SHELF_VERTEX_COUNT: usize = 12;

/// Face topology shared by every shelf, as indices into the vertex array.
///
/// Vertices `0..6` form the back profile (against the wall) and `6..12` the
/// front profile, both walked around the board's beveled outline:
///
/// ```text
///        4 _________________________ 3
///         /                         \
///      5 <                           > 2      y
///         \_________________________/         |
///        0                           1        +-- x
///   right end (x = 0)          left end (x = length)
/// ```
pub const SHELF_FACES: [&[usize]; 8] = [
    &[6, 7, 8, 9, 10, 11], // front
    &[5, 4, 3, 2, 1, 0],   // back
    &[1, 2, 8, 7],         // left bottom bevel
    &[3, 9, 8, 2],         // left top bevel
    &[6, 11, 5, 0],        // right bottom bevel
    &[11, 10, 4, 5],       // right top bevel
    &[4, 10, 9, 3],        // top
    &[1, 7, 6, 0],         // bottom
];

/// One of the four mitered corners of a shelf.
///
/// `A` corners sit on the top face (`+y`), `B` corners on the bottom face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    LeftA,
    LeftB,
    RightA,
    RightB,
}

impl Corner {
    /// All corners in miter application order.
    pub const ALL: [Self; 4] = [Self::LeftA, Self::LeftB, Self::RightA, Self::RightB];

    /// The `(back, front)` vertex pair forming this corner's edge.
    #[must_use]
    pub fn vertices(self) -> (usize, usize) {
        match self {
            Self::LeftA => (3, 9),
            Self::LeftB => (1, 7),
            Self::RightA => (4, 10),
            Self::RightB => (0, 6),
        }
    }

    /// Direction a setback moves the corner along the length axis.
    #[must_use]
    pub fn inward(self) -> f64 {
        match self {
            Self::LeftA | Self::LeftB => -1.0,
            Self::RightA | Self::RightB => 1.0,
        }
    }
}

/// The optional joint angles (degrees) at each corner of a shelf.
///
/// An absent angle leaves its corner square-cut at the full length.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CornerAngles {
    pub left_a: Option<f64>,
    pub left_b: Option<f64>,
    pub right_a: Option<f64>,
    pub right_b: Option<f64>,
}

impl CornerAngles {
    /// Returns the angle set for `corner`, if any.
    #[must_use]
    pub fn get(&self, corner: Corner) -> Option<f64> {
        match corner {
            Corner::LeftA => self.left_a,
            Corner::LeftB => self.left_b,
            Corner::RightA => self.right_a,
            Corner::RightB => self.right_b,
        }
    }

    /// Sets or clears the angle of `corner`.
    pub fn set(&mut self, corner: Corner, degrees: Option<f64>) {
        let slot = match corner {
            Corner::LeftA => &mut self.left_a,
            Corner::LeftB => &mut self.left_b,
            Corner::RightA => &mut self.right_a,
            Corner::RightB => &mut self.right_b,
        };
        *slot = degrees;
    }

    /// Iterates over the corners that carry an angle.
    pub fn iter(&self) -> impl Iterator<Item = (Corner, f64)> + '_ {
        Corner::ALL
            .into_iter()
            .filter_map(|corner| self.get(corner).map(|deg| (corner, deg)))
    }
}

/// Explicit parameters of a single shelf.
#[derive(Debug, Clone, PartialEq)]
pub struct ShelfParams {
    /// Tip-to-tip length along the x axis.
    pub length: f64,
    /// Depth (z) of the left end, at `x = length`.
    pub left_depth: f64,
    /// Depth (z) of the right end, at `x = 0`.
    pub right_depth: f64,
    /// Joint angles used to miter each corner.
    pub corners: CornerAngles,
    /// Board thickness along the y axis.
    pub thickness: f64,
    /// Surface carried through for the renderer.
    pub surface: Option<SurfaceRef>,
}

impl ShelfParams {
    /// Creates square-cut shelf parameters.
    #[must_use]
    pub fn new(length: f64, left_depth: f64, right_depth: f64, thickness: f64) -> Self {
        Self {
            length,
            left_depth,
            right_depth,
            corners: CornerAngles::default(),
            thickness,
            surface: None,
        }
    }

    /// Sets the joint angle of one corner.
    #[must_use]
    pub fn with_corner(mut self, corner: Corner, degrees: f64) -> Self {
        self.corners.set(corner, Some(degrees));
        self
    }

    /// Sets the surface reference.
    #[must_use]
    pub fn with_surface(mut self, surface: Option<SurfaceRef>) -> Self {
        self.surface = surface;
        self
    }
}

/// A computed shelf: twelve vertices over the fixed [`SHELF_FACES`] topology.
///
/// A solid is never edited; resizing means building a new one from new
/// [`ShelfParams`].
#[derive(Debug, Clone, PartialEq)]
pub struct ShelfSolid {
    vertices: [Point3; SHELF_VERTEX_COUNT],
    params: ShelfParams,
}

impl ShelfSolid {
    pub(crate) fn new(vertices: [Point3; SHELF_VERTEX_COUNT], params: ShelfParams) -> Self {
        Self { vertices, params }
    }

    /// Vertex positions in shelf-local coordinates.
    #[must_use]
    pub fn vertices(&self) -> &[Point3; SHELF_VERTEX_COUNT] {
        &self.vertices
    }

    /// The shared face topology.
    #[must_use]
    pub fn faces(&self) -> &'static [&'static [usize]; 8] {
        &SHELF_FACES
    }

    /// The parameters this solid was computed from.
    #[must_use]
    pub fn params(&self) -> &ShelfParams {
        &self.params
    }

    /// Flattens the vertices into `x, y, z` triples, in vertex order.
    #[must_use]
    pub fn vertex_buffer(&self) -> [f64; SHELF_VERTEX_COUNT * 3] {
        flatten(&self.vertices)
    }
}

pub(crate) fn flatten(vertices: &[Point3; SHELF_VERTEX_COUNT]) -> [f64; SHELF_VERTEX_COUNT * 3] {
    let mut buffer = [0.0; SHELF_VERTEX_COUNT * 3];
    for (chunk, v) in buffer.chunks_exact_mut(3).zip(vertices) {
        chunk.copy_from_slice(&[v.x, v.y, v.z]);
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_sizes_are_fixed() {
        let sizes: Vec<usize> = SHELF_FACES.iter().map(|f| f.len()).collect();
        assert_eq!(sizes, [6, 6, 4, 4, 4, 4, 4, 4]);
    }

    #[test]
    fn every_vertex_is_used_three_times() {
        // each vertex of a closed hexagonal prism touches exactly three faces
        let mut uses = [0; SHELF_VERTEX_COUNT];
        for face in SHELF_FACES {
            for &i in face {
                uses[i] += 1;
            }
        }
        assert!(uses.iter().all(|&n| n == 3), "{uses:?}");
    }

    #[test]
    fn every_edge_is_shared_by_two_faces_in_opposite_directions() {
        let mut directed = Vec::new();
        for face in SHELF_FACES {
            for k in 0..face.len() {
                directed.push((face[k], face[(k + 1) % face.len()]));
            }
        }
        for &(a, b) in &directed {
            assert_eq!(
                directed.iter().filter(|&&e| e == (b, a)).count(),
                1,
                "edge {a}->{b} has no single twin"
            );
        }
    }

    #[test]
    fn corner_angles_iterate_only_present() {
        let mut corners = CornerAngles::default();
        corners.set(Corner::RightA, Some(60.0));
        corners.set(Corner::LeftB, Some(45.0));
        let present: Vec<_> = corners.iter().collect();
        assert_eq!(present, [(Corner::LeftB, 45.0), (Corner::RightA, 60.0)]);
    }
}
