//! Node listing grouped by type.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use evacroute_cli::OutputFormat;
use evacroute_lib::NodeType;

use super::load_building;

/// Handle the nodes subcommand, optionally keeping a single type.
pub fn handle_nodes_command(
    dataset: Option<&Path>,
    bidirectional: bool,
    format: OutputFormat,
    node_type: Option<NodeType>,
) -> Result<()> {
    let building = load_building(dataset, bidirectional)?;
    let mut groups = building.nodes().grouped_by_type();
    if let Some(kind) = node_type {
        groups.retain(|group, _| *group == kind);
    }

    let stdout = io::stdout();
    format
        .render_nodes(&mut stdout.lock(), &groups)
        .context("failed to write node listing")
}
