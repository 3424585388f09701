use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::Building;
use crate::node::{NodeIndex, NodeType};
use crate::record::Floor;
use crate::routing::RoutePlan;

/// Classifies the query that produced a route summary.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RouteOutputKind {
    /// Route to the nearest exit.
    Evacuation,
    /// Route to an explicitly named node.
    Route,
}

impl RouteOutputKind {
    /// Human-readable label shown in textual renderings.
    pub fn label(self) -> &'static str {
        match self {
            RouteOutputKind::Evacuation => "Evacuation route",
            RouteOutputKind::Route => "Route",
        }
    }
}

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteEndpoint {
    pub index: NodeIndex,
    pub label: String,
    pub node_type: NodeType,
}

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub position: usize,
    pub index: NodeIndex,
    pub label: String,
    pub node_type: NodeType,
    pub floors: Vec<Floor>,
    /// Cost of the edge leading into this step; `None` for the first step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_cost: Option<f64>,
    pub cumulative_cost: f64,
}

/// Structured representation of a planned route that consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub kind: RouteOutputKind,
    pub hops: usize,
    pub total_cost: f64,
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with resolved labels and costs.
    pub fn from_plan(kind: RouteOutputKind, building: &Building, plan: &RoutePlan) -> Result<Self> {
        if plan.steps.is_empty() {
            return Err(Error::EmptyRoutePlan);
        }

        let nodes = building.nodes();
        let graph = building.graph();
        let mut steps = Vec::with_capacity(plan.steps.len());
        let mut cumulative = 0.0;
        let mut previous: Option<NodeIndex> = None;

        for (position, &index) in plan.steps.iter().enumerate() {
            let edge_cost = previous.and_then(|from| graph.edge_weight(from, index));
            cumulative += edge_cost.unwrap_or(0.0);
            steps.push(RouteStep {
                position,
                index,
                label: nodes.label(index).unwrap_or("<unknown>").to_string(),
                node_type: nodes.node_type_of(index).unwrap_or(NodeType::Other),
                floors: nodes
                    .floors_of(index)
                    .map(|floors| floors.iter().copied().collect())
                    .unwrap_or_default(),
                edge_cost,
                cumulative_cost: cumulative,
            });
            previous = Some(index);
        }

        let endpoint = |step: &RouteStep| RouteEndpoint {
            index: step.index,
            label: step.label.clone(),
            node_type: step.node_type,
        };
        let (Some(first), Some(last)) = (steps.first(), steps.last()) else {
            return Err(Error::EmptyRoutePlan);
        };
        let start = endpoint(first);
        let goal = endpoint(last);

        Ok(Self {
            kind,
            hops: plan.hop_count(),
            total_cost: plan.total_cost,
            start,
            goal,
            steps,
        })
    }

    /// Labels along the route in travel order.
    pub fn labels(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.label.as_str()).collect()
    }

    /// Render the summary as plain text.
    pub fn render_text(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "{} from {} to {} ({} hops, cost {:.2}):",
            self.kind.label(),
            self.start.label,
            self.goal.label,
            self.hops,
            self.total_cost
        );
        for step in &self.steps {
            let marker = if step.position == 0 {
                '+'
            } else if step.position + 1 == self.steps.len() {
                '-'
            } else {
                '|'
            };
            let _ = write!(
                buffer,
                "{} {} [{}{}]",
                marker,
                step.label,
                step.node_type,
                format_floors(&step.floors)
            );
            if let Some(cost) = step.edge_cost {
                let _ = write!(buffer, " +{:.2} = {:.2}", cost, step.cumulative_cost);
            }
            buffer.push('\n');
        }
        buffer
    }
}

fn format_floors(floors: &[Floor]) -> String {
    match floors {
        [] => String::new(),
        [floor] => format!(", floor {}", floor),
        many => format!(
            ", floors {}",
            many.iter()
                .map(|floor| floor.to_string())
                .collect::<Vec<_>>()
                .join("/")
        ),
    }
}
