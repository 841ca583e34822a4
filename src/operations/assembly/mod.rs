mod assemble_node;
mod layout_unit;
mod partition_angles;

pub use assemble_node::{NodeAssembler, PlacedShelf, ShelfNode, LEFT_CORNER_PLACEHOLDER};
pub use layout_unit::{ShelfUnit, UnitLayout, NODE_INTERVALS};
pub use partition_angles::AnglePartitioner;
