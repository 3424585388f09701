use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use evacroute_cli::OutputFormat;

use super::load_building;

/// Handle the stats subcommand.
pub fn handle_stats_command(
    dataset: Option<&Path>,
    bidirectional: bool,
    format: OutputFormat,
) -> Result<()> {
    let building = load_building(dataset, bidirectional)?;
    let stats = building.stats();

    let stdout = io::stdout();
    format
        .render_stats(&mut stdout.lock(), &stats)
        .context("failed to write graph statistics")
}
