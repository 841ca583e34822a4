//! Procedural generator for freeform wall shelves.
//!
//! A shelf unit is a row of nodes. Each node fans several beveled shelves
//! around a shared edge, splitting a full turn into randomly sized angles,
//! and miters every shelf so neighbours meet flush. The output is plain
//! geometry: twelve vertices per shelf over a fixed face topology, plus the
//! placement of every shelf and node.
//!
//! ```no_run
//! use rand::SeedableRng;
//! use shelfgen::operations::assembly::UnitLayout;
//! use shelfgen::StyleConfig;
//!
//! let style = StyleConfig::default();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let unit = UnitLayout::new(100.0, &style).execute(&mut rng)?;
//! for vertices in unit.world_vertices() {
//!     println!("{vertices:?}");
//! }
//! # Ok::<(), shelfgen::ShelfError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod style;
pub mod tessellation;

pub use error::{ShelfError, Result};
pub use style::{StyleConfig, SurfaceRef};
