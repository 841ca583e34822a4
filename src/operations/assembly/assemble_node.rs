use rand::Rng;
use tracing::{debug, trace, warn};

use crate::error::Result;
use crate::geometry::{
    AngleSet, Corner, NodeType, Placement, ShelfParams, ShelfSolid, SHELF_VERTEX_COUNT,
};
use crate::math::{sample_quantized, transform_point, Matrix4, Point3};
use crate::operations::creation::MakeShelf;
use crate::style::StyleConfig;

use super::AnglePartitioner;

/// Joint angle given to the left corners of a freshly assembled shelf.
///
/// The left end of a shelf belongs to whichever node it runs to, so it stays
/// at this placeholder until the two nodes are linked.
pub const LEFT_CORNER_PLACEHOLDER: f64 = 45.0;

/// A shelf solid together with its placement in the node's frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedShelf {
    solid: ShelfSolid,
    placement: Placement,
    closing: bool,
}

impl PlacedShelf {
    /// The shelf geometry in its own frame.
    #[must_use]
    pub fn solid(&self) -> &ShelfSolid {
        &self.solid
    }

    /// Position and rotation about z within the node.
    #[must_use]
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Returns `true` if this shelf fills the node's closing angle.
    #[must_use]
    pub fn is_closing(&self) -> bool {
        self.closing
    }

    /// Vertices mapped through this shelf's placement and then `parent`.
    #[must_use]
    pub fn transformed_vertices(&self, parent: &Matrix4) -> [Point3; SHELF_VERTEX_COUNT] {
        let matrix = parent * self.placement.matrix();
        (*self.solid.vertices()).map(|v| transform_point(&matrix, &v))
    }
}

/// A fan of shelves meeting along a shared edge.
#[derive(Debug, Clone, PartialEq)]
pub struct ShelfNode {
    node_type: NodeType,
    angles: AngleSet,
    depth: f64,
    shelves: Vec<PlacedShelf>,
    placement: Placement,
}

impl ShelfNode {
    /// Where in the unit this node sits.
    #[must_use]
    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    /// The angles the node's shelves were fanned over.
    #[must_use]
    pub fn angles(&self) -> &AngleSet {
        &self.angles
    }

    /// Depth shared by every shelf of the node.
    #[must_use]
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Shelves in fan order.
    #[must_use]
    pub fn shelves(&self) -> &[PlacedShelf] {
        &self.shelves
    }

    /// Position of the node within its unit.
    #[must_use]
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Every shelf's vertices in the frame that contains this node.
    #[must_use]
    pub fn world_vertices(&self, parent: &Matrix4) -> Vec<[Point3; SHELF_VERTEX_COUNT]> {
        let matrix = parent * self.placement.matrix();
        self.shelves
            .iter()
            .map(|shelf| shelf.transformed_vertices(&matrix))
            .collect()
    }
}

/// Builds the shelves of one node.
///
/// The node's angles come from [`AnglePartitioner`]. All shelves share one
/// sampled depth, each gets its own sampled length, and the right end of
/// shelf `s` is mitered against `angles[s]` (top) and the angle before it
/// (bottom), wrapping around to the closing angle for the first shelf.
/// Shelves are rotated about the node origin so each starts where the
/// previous one's angle ends.
///
/// By default no shelf is built for the closing angle: it only closes the
/// turn for the miter of the first shelf. [`NodeAssembler::with_closing_shelf`]
/// builds one there as well.
pub struct NodeAssembler<'a> {
    node_type: NodeType,
    style: &'a StyleConfig,
    closing_shelf: bool,
    position: Point3,
}

impl<'a> NodeAssembler<'a> {
    /// Creates a new `NodeAssembler` operation for a node at the origin.
    #[must_use]
    pub fn new(node_type: NodeType, style: &'a StyleConfig) -> Self {
        Self {
            node_type,
            style,
            closing_shelf: false,
            position: Point3::origin(),
        }
    }

    /// Also builds a shelf across the closing angle.
    #[must_use]
    pub fn with_closing_shelf(mut self, closing_shelf: bool) -> Self {
        self.closing_shelf = closing_shelf;
        self
    }

    /// Places the node at `position` within its unit.
    #[must_use]
    pub fn with_position(mut self, position: Point3) -> Self {
        self.position = position;
        self
    }

    /// Executes the assembly, drawing every random value from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ConfigError`] for an invalid style, or the
    /// [`crate::error::GeometryError`] of the first shelf that cannot be
    /// built, wrapped with that shelf's index.
    pub fn execute<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<ShelfNode> {
        let style = self.style;
        style.validate()?;

        let angles = AnglePartitioner::new(self.node_type, style).execute(rng)?;
        let depth = sample_quantized(rng, style.min_depth, style.max_depth, style.depth_increment);

        // a collapsed span has nothing for a closing shelf to close against
        let count = if self.closing_shelf && !angles.partitioned().is_empty() {
            angles.len()
        } else {
            angles.partitioned().len()
        };
        self.check_shelf_count(count);

        let mut shelves = Vec::with_capacity(count);
        let mut rotation = angles.start_angle().rem_euclid(360.0);
        for (s, (next_angle, previous_angle)) in angles.with_previous().enumerate().take(count) {
            let length = sample_quantized(
                rng,
                style.min_shelf_length,
                style.max_shelf_length,
                style.shelf_length_increment,
            );
            let params = ShelfParams::new(length, depth, depth, style.thickness)
                .with_corner(Corner::LeftA, LEFT_CORNER_PLACEHOLDER)
                .with_corner(Corner::LeftB, LEFT_CORNER_PLACEHOLDER)
                .with_corner(Corner::RightA, next_angle)
                .with_corner(Corner::RightB, previous_angle)
                .with_surface(style.surface.clone());

            let solid = MakeShelf::new(params).execute().map_err(|e| e.at_shelf(s))?;
            trace!(shelf = s, length, rotation, next_angle, "built shelf");

            shelves.push(PlacedShelf {
                solid,
                placement: Placement::rotated(rotation),
                closing: angles.closing_angle().is_some() && s + 1 == angles.len(),
            });
            rotation = (rotation + next_angle).rem_euclid(360.0);
        }

        debug!(
            node_type = ?self.node_type,
            start_angle = angles.start_angle(),
            shelves = shelves.len(),
            depth,
            "assembled node"
        );

        Ok(ShelfNode {
            node_type: self.node_type,
            angles,
            depth,
            shelves,
            placement: Placement::at(self.position),
        })
    }

    fn check_shelf_count(&self, count: usize) {
        let min = usize::try_from(self.style.min_shelves_per_node).unwrap_or(usize::MAX);
        let max = usize::try_from(self.style.max_shelves_per_node).unwrap_or(usize::MAX);
        if !(min..=max).contains(&count) {
            warn!(
                node_type = ?self.node_type,
                count,
                min,
                max,
                "node shelf count outside style bounds"
            );
        }
    }
}
