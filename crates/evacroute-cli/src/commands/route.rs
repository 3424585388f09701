//! Route command handler for computing evacuation paths.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use evacroute_cli::{format_not_found_message, OutputFormat};
use evacroute_lib::{
    plan_route, RouteOutputKind, RouteRequest, RouteResult, RouteSummary, RouteTarget,
};

use super::load_building;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting node label.
    pub from: String,
    /// Destination label; `None` routes to the nearest exit.
    pub to: Option<String>,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library [`RouteRequest`].
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest {
            start: self.from.clone(),
            target: RouteTarget::from(self.to.as_deref()),
        }
    }

    fn output_kind(&self) -> RouteOutputKind {
        match self.to {
            Some(_) => RouteOutputKind::Route,
            None => RouteOutputKind::Evacuation,
        }
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    dataset: Option<&Path>,
    bidirectional: bool,
    format: OutputFormat,
    args: &RouteCommandArgs,
) -> Result<()> {
    let building = load_building(dataset, bidirectional)?;
    let request = args.to_request();

    let plan = match plan_route(&building, &request) {
        RouteResult::Found(plan) => plan,
        RouteResult::NotFound(reason) => {
            return Err(anyhow::anyhow!(format_not_found_message(&reason)));
        }
    };

    let summary = RouteSummary::from_plan(args.output_kind(), &building, &plan)
        .context("failed to build route summary for display")?;

    let stdout = io::stdout();
    format
        .render_route(&mut stdout.lock(), &summary)
        .context("failed to write route output")
}
