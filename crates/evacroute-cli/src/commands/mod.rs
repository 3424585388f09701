//! Handlers for the CLI subcommands. `main.rs` parses arguments and dispatches here.

pub mod nodes;
pub mod route;
pub mod stats;

use std::path::Path;

use anyhow::{Context, Result};

use evacroute_lib::{load_records, resolve_dataset_path, Building, GraphBuildOptions, GraphBuilder};

/// Resolve, load, and build the dataset shared by every subcommand.
pub fn load_building(dataset: Option<&Path>, bidirectional: bool) -> Result<Building> {
    let path = resolve_dataset_path(dataset).context("failed to locate the evacuation dataset")?;
    let records = load_records(&path)
        .with_context(|| format!("failed to load dataset from {}", path.display()))?;
    let builder = GraphBuilder::new(GraphBuildOptions {
        mirror_edges: bidirectional,
    });
    builder
        .build(&records)
        .with_context(|| format!("failed to build graph from {}", path.display()))
}
