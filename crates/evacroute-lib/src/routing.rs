//! Route planning on top of a built [`Building`].
//!
//! This module provides:
//! - [`RouteTarget`] - Explicit destination or nearest exit
//! - [`RouteRequest`] - High-level route planning request
//! - [`RouteResult`] - Found plan or an explicit not-found outcome
//! - [`plan_route`] / [`find_route`] - Main entry points
//!
//! Unknown labels and unreachable destinations are ordinary outcomes of a
//! well-formed query and come back as [`RouteResult::NotFound`], not as
//! errors. Use [`RouteResult::into_result`] to turn them into an
//! [`Error`](crate::Error) when `?` is more convenient.
//!
//! # Example
//!
//! ```
//! use evacroute_lib::{build_graph, find_route, EdgeRecord};
//!
//! let records = vec![
//!     EdgeRecord::new("Aula_101", "Pasillo_1").with_total_weight(4.0),
//!     EdgeRecord::new("Pasillo_1", "Salida_Principal").with_total_weight(3.0),
//! ];
//! let building = build_graph(&records).unwrap();
//! let plan = find_route(&building, "Aula_101", None).into_result().unwrap();
//! assert_eq!(plan.total_cost, 7.0);
//! ```

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::graph::{Building, NodeCatalog};
use crate::node::NodeIndex;
use crate::path::{shortest_path_tree, ShortestPathTree};

/// Maximum number of label suggestions attached to an unknown label.
const MAX_SUGGESTIONS: usize = 3;

/// Where a route should end.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RouteTarget {
    /// Closest reachable node classified as an exit.
    #[default]
    NearestExit,
    /// A specific node label.
    Node(String),
}

impl From<Option<&str>> for RouteTarget {
    fn from(goal: Option<&str>) -> Self {
        match goal {
            Some(label) => RouteTarget::Node(label.to_string()),
            None => RouteTarget::NearestExit,
        }
    }
}

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: String,
    pub target: RouteTarget,
}

impl RouteRequest {
    /// Route from `start` to the nearest reachable exit.
    pub fn to_nearest_exit(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            target: RouteTarget::NearestExit,
        }
    }

    /// Route between two named nodes.
    pub fn between(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            target: RouteTarget::Node(goal.into()),
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub start: NodeIndex,
    pub goal: NodeIndex,
    pub total_cost: f64,
    pub steps: Vec<NodeIndex>,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Why a query produced no route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum NotFoundReason {
    /// Start or destination label is not in the graph.
    UnknownLabel {
        label: String,
        suggestions: Vec<String>,
    },
    /// Destination exists but no path leads to it.
    Unreachable { start: String, goal: String },
    /// No exit node can be reached from the start.
    NoReachableExit { start: String },
    /// Parent chain from the goal did not lead back to the start.
    BrokenPath { start: String, goal: String },
}

impl From<NotFoundReason> for Error {
    fn from(reason: NotFoundReason) -> Self {
        match reason {
            NotFoundReason::UnknownLabel { label, suggestions } => {
                Error::UnknownLabel { label, suggestions }
            }
            NotFoundReason::Unreachable { start, goal }
            | NotFoundReason::BrokenPath { start, goal } => Error::RouteNotFound { start, goal },
            NotFoundReason::NoReachableExit { start } => Error::NoReachableExit { start },
        }
    }
}

/// Outcome of a route query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "route", rename_all = "snake_case")]
pub enum RouteResult {
    Found(RoutePlan),
    NotFound(NotFoundReason),
}

impl RouteResult {
    pub fn is_found(&self) -> bool {
        matches!(self, RouteResult::Found(_))
    }

    pub fn plan(&self) -> Option<&RoutePlan> {
        match self {
            RouteResult::Found(plan) => Some(plan),
            RouteResult::NotFound(_) => None,
        }
    }

    /// Convert not-found outcomes into library errors.
    pub fn into_result(self) -> Result<RoutePlan> {
        match self {
            RouteResult::Found(plan) => Ok(plan),
            RouteResult::NotFound(reason) => Err(reason.into()),
        }
    }
}

/// Compute a route for the request against an immutable building snapshot.
pub fn plan_route(building: &Building, request: &RouteRequest) -> RouteResult {
    let nodes = building.nodes();

    let start = match resolve_label(nodes, &request.start) {
        Ok(index) => index,
        Err(reason) => return not_found(request, reason),
    };

    // Resolve the destination before searching so an unknown goal is
    // reported without running Dijkstra.
    let explicit_goal = match &request.target {
        RouteTarget::Node(label) => match resolve_label(nodes, label) {
            Ok(index) => Some((index, label.as_str())),
            Err(reason) => return not_found(request, reason),
        },
        RouteTarget::NearestExit => None,
    };

    let tree = shortest_path_tree(building.graph(), start);

    let goal = match explicit_goal {
        Some((goal, label)) => {
            if !tree.is_reachable(goal) {
                return not_found(
                    request,
                    NotFoundReason::Unreachable {
                        start: request.start.clone(),
                        goal: label.to_string(),
                    },
                );
            }
            goal
        }
        None => match nearest_exit(nodes, &tree) {
            Some(goal) => goal,
            None => {
                return not_found(
                    request,
                    NotFoundReason::NoReachableExit {
                        start: request.start.clone(),
                    },
                )
            }
        },
    };

    let Some(steps) = tree.path_to(goal) else {
        return not_found(
            request,
            NotFoundReason::BrokenPath {
                start: request.start.clone(),
                goal: nodes.label(goal).unwrap_or_default().to_string(),
            },
        );
    };

    let total_cost = tree.distance(goal).unwrap_or(f64::INFINITY);
    debug!(
        start = %request.start,
        goal = nodes.label(goal).unwrap_or_default(),
        total_cost,
        hops = steps.len().saturating_sub(1),
        "route found"
    );

    RouteResult::Found(RoutePlan {
        start,
        goal,
        total_cost,
        steps,
    })
}

/// Route from `start` to `goal`, or to the nearest exit when `goal` is `None`.
pub fn find_route(building: &Building, start: &str, goal: Option<&str>) -> RouteResult {
    plan_route(
        building,
        &RouteRequest {
            start: start.to_string(),
            target: goal.into(),
        },
    )
}

/// Cheapest reachable exit in `tree`.
///
/// Exits are scanned in ascending node index and only a strictly smaller
/// distance replaces the current best, so ties go to the lower index.
pub fn nearest_exit(nodes: &NodeCatalog, tree: &ShortestPathTree) -> Option<NodeIndex> {
    let mut best: Option<(NodeIndex, f64)> = None;
    for exit in nodes.exits() {
        let Some(distance) = tree.distance(exit) else {
            continue;
        };
        match best {
            Some((_, current)) if distance >= current => {}
            _ => best = Some((exit, distance)),
        }
    }
    best.map(|(exit, _)| exit)
}

fn resolve_label(
    nodes: &NodeCatalog,
    label: &str,
) -> std::result::Result<NodeIndex, NotFoundReason> {
    nodes
        .index_of(label)
        .ok_or_else(|| NotFoundReason::UnknownLabel {
            label: label.to_string(),
            suggestions: nodes.fuzzy_matches(label, MAX_SUGGESTIONS),
        })
}

fn not_found(request: &RouteRequest, reason: NotFoundReason) -> RouteResult {
    warn!(start = %request.start, ?reason, "no route found");
    RouteResult::NotFound(reason)
}
