use crate::error::Result;
use crate::geometry::ShelfSolid;
use crate::tessellation::TessellateShelf;

/// Computes the volume of a shelf.
///
/// Tessellates the shelf and sums the signed tetrahedra
/// `(1/6) * v0 . (v1 x v2)` of all triangles against the origin.
pub struct Volume<'a> {
    solid: &'a ShelfSolid,
}

impl<'a> Volume<'a> {
    /// Creates a new `Volume` query.
    #[must_use]
    pub fn new(solid: &'a ShelfSolid) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the enclosed volume.
    ///
    /// # Errors
    ///
    /// Returns an error if the shelf cannot be tessellated.
    pub fn execute(&self) -> Result<f64> {
        let mesh = TessellateShelf::new(self.solid).execute()?;

        let signed_volume: f64 = mesh
            .indices
            .iter()
            .map(|tri| {
                let [v0, v1, v2] = tri.map(|i| mesh.vertices[i as usize].coords);
                v0.dot(&v1.cross(&v2))
            })
            .sum();

        Ok(signed_volume / 6.0)
    }
}
