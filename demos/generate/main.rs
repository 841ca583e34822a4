//! Shelf unit generator: lays out one unit and logs what it built.
//!
//! Usage:
//! ```text
//! cargo run --example generate                          # width 100, seed 0
//! cargo run --example generate -- 72 42                 # width 72, seed 42
//! cargo run --example generate -- 72 42 style.json      # custom style sheet
//! RUST_LOG=shelfgen=trace cargo run --example generate  # every partition step
//! ```

use std::env;
use std::fs;
use std::process::ExitCode;

use rand::rngs::StdRng;
use rand::SeedableRng;
use shelfgen::operations::assembly::UnitLayout;
use shelfgen::operations::query::BoundingBox;
use shelfgen::tessellation::TessellateUnit;
use shelfgen::StyleConfig;
use tracing::{error, info};

fn main() -> ExitCode {
    // Default: WARN for everything, INFO for shelfgen.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("generate=info".parse().unwrap_or_default())
        .add_directive("shelfgen=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let width = args.first().and_then(|a| a.parse().ok()).unwrap_or(100.0);
    let seed = args.get(1).and_then(|a| a.parse().ok()).unwrap_or(0);

    let style = match args.get(2) {
        Some(path) => match fs::read_to_string(path) {
            Ok(text) => match StyleConfig::from_json(&text) {
                Ok(style) => style,
                Err(e) => {
                    error!(%path, "{e}");
                    return ExitCode::FAILURE;
                }
            },
            Err(e) => {
                error!(%path, "cannot read style sheet: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => StyleConfig::default(),
    };

    let mut rng = StdRng::seed_from_u64(seed);
    let unit = match UnitLayout::new(width, &style).execute(&mut rng) {
        Ok(unit) => unit,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    for (i, node) in unit.nodes().iter().enumerate() {
        info!(
            node = i,
            node_type = ?node.node_type(),
            x = node.placement().position.x,
            depth = node.depth(),
            angles = ?node.angles().angles(),
            shelves = node.shelves().len(),
        );
    }
    if let Some(aabb) = BoundingBox::of_unit(&unit).execute() {
        let extent = aabb.extent();
        info!(
            shelves = unit.shelf_count(),
            width = extent.x,
            height = extent.y,
            depth = extent.z,
            "unit bounds"
        );
    }
    match TessellateUnit::new(&unit).execute() {
        Ok(mesh) => info!(
            vertices = mesh.vertices.len(),
            triangles = mesh.indices.len(),
            "unit mesh"
        ),
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
