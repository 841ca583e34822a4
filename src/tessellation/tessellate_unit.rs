use crate::error::Result;
use crate::operations::assembly::ShelfUnit;

use super::{TessellateShelf, TriangleMesh};

/// Tessellates every shelf of a unit into one mesh in unit coordinates.
pub struct TessellateUnit<'a> {
    unit: &'a ShelfUnit,
}

impl<'a> TessellateUnit<'a> {
    /// Creates a new `TessellateUnit` operation.
    #[must_use]
    pub fn new(unit: &'a ShelfUnit) -> Self {
        Self { unit }
    }

    /// Executes the tessellation, returning a single merged mesh.
    ///
    /// # Errors
    ///
    /// Returns the [`crate::error::GeometryError::DegenerateFace`] of the
    /// first shelf that cannot be tessellated, wrapped with its shelf and
    /// node index.
    pub fn execute(&self) -> Result<TriangleMesh> {
        let mut mesh = TriangleMesh::default();
        for (n, node) in self.unit.nodes().iter().enumerate() {
            let node_matrix = node.placement().matrix();
            for (s, shelf) in node.shelves().iter().enumerate() {
                let mut part = TessellateShelf::new(shelf.solid())
                    .execute()
                    .map_err(|e| e.at_shelf(s).at_node(n, node.node_type()))?;
                part.transform(&(node_matrix * shelf.placement().matrix()));
                mesh.merge(&part);
            }
        }
        Ok(mesh)
    }
}
