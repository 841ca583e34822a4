use rand::Rng;
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::geometry::{NodeType, SHELF_VERTEX_COUNT};
use crate::math::{Matrix4, Point3};
use crate::style::StyleConfig;

use super::{NodeAssembler, ShelfNode};

/// Number of node intervals the unit width is divided into.
pub const NODE_INTERVALS: u32 = 5;

/// A row of shelf nodes laid out along the x axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ShelfUnit {
    width: f64,
    nodes: Vec<ShelfNode>,
}

impl ShelfUnit {
    /// Width the unit was laid out over.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Nodes from left to right.
    #[must_use]
    pub fn nodes(&self) -> &[ShelfNode] {
        &self.nodes
    }

    /// Total number of shelves over all nodes.
    #[must_use]
    pub fn shelf_count(&self) -> usize {
        self.nodes.iter().map(|n| n.shelves().len()).sum()
    }

    /// Every shelf's vertices in unit coordinates, node by node.
    #[must_use]
    pub fn world_vertices(&self) -> Vec<[Point3; SHELF_VERTEX_COUNT]> {
        let identity = Matrix4::identity();
        self.nodes
            .iter()
            .flat_map(|node| node.world_vertices(&identity))
            .collect()
    }
}

/// Lays out the bottom row of a shelf unit.
///
/// A [`NodeType::BottomLeft`] node sits at `x = 0`, [`NodeType::Bottom`]
/// nodes follow every `width / 5` while still inside the width, and a
/// [`NodeType::BottomRight`] node closes the row at the first step at or past
/// the width. Every node draws from the same `rng` in that order.
pub struct UnitLayout<'a> {
    width: f64,
    style: &'a StyleConfig,
    closing_shelves: bool,
}

impl<'a> UnitLayout<'a> {
    /// Creates a new `UnitLayout` operation.
    #[must_use]
    pub fn new(width: f64, style: &'a StyleConfig) -> Self {
        Self {
            width,
            style,
            closing_shelves: false,
        }
    }

    /// Also builds a shelf across each node's closing angle.
    #[must_use]
    pub fn with_closing_shelves(mut self, closing_shelves: bool) -> Self {
        self.closing_shelves = closing_shelves;
        self
    }

    /// Executes the layout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositive`] if the width is not positive, or
    /// the first node failure wrapped with that node's index and type.
    pub fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<ShelfUnit> {
        if !(self.width > 0.0 && self.width.is_finite()) {
            return Err(ConfigError::NonPositive {
                name: "width",
                value: self.width,
            }
            .into());
        }
        self.style.validate()?;

        let spacing = self.width / f64::from(NODE_INTERVALS);
        let mut nodes = Vec::new();

        nodes.push(self.assemble(nodes.len(), NodeType::BottomLeft, 0.0, rng)?);
        let mut step = 1_u32;
        let mut x = spacing;
        while x < self.width {
            nodes.push(self.assemble(nodes.len(), NodeType::Bottom, x, rng)?);
            step += 1;
            x = f64::from(step) * spacing;
        }
        nodes.push(self.assemble(nodes.len(), NodeType::BottomRight, x, rng)?);

        let unit = ShelfUnit {
            width: self.width,
            nodes,
        };
        debug!(
            width = self.width,
            nodes = unit.nodes.len(),
            shelves = unit.shelf_count(),
            "laid out shelf unit"
        );
        Ok(unit)
    }

    fn assemble<R: Rng + ?Sized>(
        &self,
        index: usize,
        node_type: NodeType,
        x: f64,
        rng: &mut R,
    ) -> Result<ShelfNode> {
        NodeAssembler::new(node_type, self.style)
            .with_closing_shelf(self.closing_shelves)
            .with_position(Point3::new(x, 0.0, 0.0))
            .execute(rng)
            .map_err(|e| e.at_node(index, node_type))
    }
}
