mod commands;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use evacroute_cli::OutputFormat;
use evacroute_lib::NodeType;

use commands::route::RouteCommandArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Evacuation route planning over building connection datasets")]
struct Cli {
    /// Dataset file (CSV or JSON). Defaults to the EVACROUTE_DATASET environment variable.
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Treat every connection as walkable in both directions.
    #[arg(long, global = true)]
    bidirectional: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route from a location to a destination or to the nearest exit.
    Route {
        /// Starting location label.
        #[arg(long = "from")]
        from: String,
        /// Destination label. When omitted, routes to the nearest exit.
        #[arg(long = "to")]
        to: Option<String>,
    },
    /// List locations grouped by type.
    Nodes {
        /// Only list locations of this type (classroom, corridor, stairwell, exit, other).
        #[arg(long = "type")]
        node_type: Option<NodeType>,
    },
    /// Show node, edge, exit, and floor counts.
    Stats,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let dataset = cli.dataset.as_deref();

    match cli.command {
        Command::Route { from, to } => commands::route::handle_route_command(
            dataset,
            cli.bidirectional,
            cli.format,
            &RouteCommandArgs { from, to },
        ),
        Command::Nodes { node_type } => commands::nodes::handle_nodes_command(
            dataset,
            cli.bidirectional,
            cli.format,
            node_type,
        ),
        Command::Stats => {
            commands::stats::handle_stats_command(dataset, cli.bidirectional, cli.format)
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
