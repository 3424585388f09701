//! Output formatting for routes, node listings, and graph statistics.
//!
//! Every renderer writes to a caller-supplied writer so the binary can target
//! stdout while tests capture into a buffer.

use std::collections::BTreeMap;
use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use evacroute_lib::{GraphStats, NodeType, RouteSummary};

/// Output formats supported by every subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Render a route summary.
    pub fn render_route<W: Write>(self, out: &mut W, summary: &RouteSummary) -> io::Result<()> {
        match self {
            OutputFormat::Text => out.write_all(summary.render_text().as_bytes()),
            OutputFormat::Json => write_json(out, summary),
        }
    }

    /// Render a grouped node listing.
    pub fn render_nodes<W: Write>(
        self,
        out: &mut W,
        groups: &BTreeMap<NodeType, Vec<String>>,
    ) -> io::Result<()> {
        match self {
            OutputFormat::Text => {
                for (kind, labels) in groups {
                    writeln!(out, "{} ({}):", kind, labels.len())?;
                    for label in labels {
                        writeln!(out, "  {}", label)?;
                    }
                }
                Ok(())
            }
            OutputFormat::Json => write_json(out, groups),
        }
    }

    /// Render graph statistics.
    pub fn render_stats<W: Write>(self, out: &mut W, stats: &GraphStats) -> io::Result<()> {
        match self {
            OutputFormat::Text => {
                writeln!(out, "Nodes: {}", stats.nodes)?;
                writeln!(out, "Edges: {}", stats.edges)?;
                writeln!(out, "Exits: {}", stats.exits)?;
                let floors = stats
                    .floors
                    .iter()
                    .map(|floor| floor.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                writeln!(out, "Floors: {}", floors)?;
                for (kind, count) in &stats.by_type {
                    writeln!(out, "  {}: {}", kind, count)?;
                }
                Ok(())
            }
            OutputFormat::Json => write_json(out, stats),
        }
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    out.write_all(b"\n")
}
