//! Plain data describing shelves, nodes and their placement.
//!
//! Nothing here samples random numbers or validates parameters; the
//! operations in [`crate::operations`] do that and produce these values.

pub mod angle_set;
pub mod node_type;
pub mod placement;
pub mod shelf;

pub use angle_set::AngleSet;
pub use node_type::{NodeSpan, NodeType};
pub use placement::Placement;
pub use shelf::{Corner, CornerAngles, ShelfParams, ShelfSolid, SHELF_FACES, SHELF_VERTEX_COUNT};
