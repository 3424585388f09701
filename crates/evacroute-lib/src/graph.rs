use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::node::{natural_cmp, NodeIndex, NodeType};
use crate::record::{EdgeRecord, Floor};

/// Minimum Jaro-Winkler similarity for a label to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Options controlling how edge records become adjacency entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphBuildOptions {
    /// Also emit `dest -> origin` with the same weight for every record.
    pub mirror_edges: bool,
}

/// Edge within the routing graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: NodeIndex,
    pub weight: f64,
    pub connection_type: String,
}

/// Adjacency list used by pathfinding algorithms.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Arc<Vec<Vec<Edge>>>,
}

impl Graph {
    /// Return the outgoing edges of a node, in record order.
    pub fn neighbours(&self, node: NodeIndex) -> &[Edge] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Cheapest direct edge from `from` to `to`, if any.
    pub fn edge_weight(&self, from: NodeIndex, to: NodeIndex) -> Option<f64> {
        self.neighbours(from)
            .iter()
            .filter(|edge| edge.target == to)
            .map(|edge| edge.weight)
            .min_by(f64::total_cmp)
    }
}

/// Label, type and floor tables for every node in a [`Graph`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeCatalog {
    labels: Vec<String>,
    label_index: HashMap<String, NodeIndex>,
    node_types: HashMap<String, NodeType>,
    node_floors: HashMap<String, BTreeSet<Floor>>,
}

impl NodeCatalog {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in index order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Lookup a node index by its case-sensitive label.
    pub fn index_of(&self, label: &str) -> Option<NodeIndex> {
        self.label_index.get(label).copied()
    }

    /// Lookup a node label by index.
    pub fn label(&self, index: NodeIndex) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn node_type(&self, label: &str) -> Option<NodeType> {
        self.node_types.get(label).copied()
    }

    pub fn node_type_of(&self, index: NodeIndex) -> Option<NodeType> {
        self.label(index).and_then(|label| self.node_type(label))
    }

    /// Floors a node has been seen on, in ascending order.
    pub fn floors(&self, label: &str) -> Option<&BTreeSet<Floor>> {
        self.node_floors.get(label)
    }

    pub fn floors_of(&self, index: NodeIndex) -> Option<&BTreeSet<Floor>> {
        self.label(index).and_then(|label| self.floors(label))
    }

    /// Indices of every exit node in ascending order.
    pub fn exits(&self) -> Vec<NodeIndex> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, label)| self.node_type(label).is_some_and(NodeType::is_exit))
            .map(|(index, _)| index)
            .collect()
    }

    /// Labels grouped by node type, each group in natural label order.
    pub fn grouped_by_type(&self) -> BTreeMap<NodeType, Vec<String>> {
        let mut grouped: BTreeMap<NodeType, Vec<String>> = BTreeMap::new();
        for label in &self.labels {
            let kind = self.node_type(label).unwrap_or(NodeType::Other);
            grouped.entry(kind).or_default().push(label.clone());
        }
        for labels in grouped.values_mut() {
            labels.sort_by(|a, b| natural_cmp(a, b));
        }
        grouped
    }

    /// Labels similar to `query`, best match first.
    pub fn fuzzy_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let needle = query.to_lowercase();
        let mut scored: Vec<(f64, &String)> = self
            .labels
            .iter()
            .map(|label| (strsim::jaro_winkler(&needle, &label.to_lowercase()), label))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| natural_cmp(a.1, b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, label)| label.clone())
            .collect()
    }

    fn intern(&mut self, label: &str) -> NodeIndex {
        if let Some(&index) = self.label_index.get(label) {
            return index;
        }
        let index = self.labels.len();
        self.labels.push(label.to_string());
        self.label_index.insert(label.to_string(), index);
        self.node_types.insert(label.to_string(), NodeType::classify(label));
        index
    }

    fn add_floor(&mut self, label: &str, floor: Floor) {
        self.node_floors
            .entry(label.to_string())
            .or_default()
            .insert(floor);
    }
}

/// Immutable building snapshot: adjacency plus node tables.
///
/// Cloning is cheap and the snapshot can be shared across threads; nothing
/// mutates it after [`GraphBuilder::build`] returns.
#[derive(Debug, Clone, Default)]
pub struct Building {
    graph: Graph,
    nodes: Arc<NodeCatalog>,
}

impl Building {
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn nodes(&self) -> &NodeCatalog {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Summary counts for diagnostics.
    pub fn stats(&self) -> GraphStats {
        let mut by_type: BTreeMap<NodeType, usize> = BTreeMap::new();
        let mut floors = BTreeSet::new();
        for label in self.nodes.labels() {
            let kind = self.nodes.node_type(label).unwrap_or(NodeType::Other);
            *by_type.entry(kind).or_default() += 1;
            if let Some(node_floors) = self.nodes.floors(label) {
                floors.extend(node_floors.iter().copied());
            }
        }

        GraphStats {
            nodes: self.node_count(),
            edges: self.edge_count(),
            exits: by_type.get(&NodeType::Exit).copied().unwrap_or(0),
            floors: floors.into_iter().collect(),
            by_type,
        }
    }
}

/// Diagnostic counts describing a built graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub exits: usize,
    pub floors: Vec<Floor>,
    pub by_type: BTreeMap<NodeType, usize>,
}

/// Turns edge records into a [`Building`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphBuilder {
    options: GraphBuildOptions,
}

impl GraphBuilder {
    pub fn new(options: GraphBuildOptions) -> Self {
        Self { options }
    }

    /// Build the graph from a batch of records.
    ///
    /// Node indices are assigned in first-seen order while scanning the
    /// records in sequence, origin before destination. The same input
    /// therefore always produces the same indices and adjacency order.
    ///
    /// The whole batch is validated before anything is built: a single bad
    /// record fails the call and no graph is returned.
    pub fn build(&self, records: &[EdgeRecord]) -> Result<Building> {
        let weights = records
            .iter()
            .enumerate()
            .map(|(position, record)| validate(position, record))
            .collect::<Result<Vec<f64>>>()?;

        let mut nodes = NodeCatalog::default();
        let mut edges: Vec<(NodeIndex, NodeIndex, f64, &str)> = Vec::with_capacity(records.len());

        for (record, weight) in records.iter().zip(weights) {
            let origin = nodes.intern(&record.origin_label);
            let dest = nodes.intern(&record.dest_label);
            nodes.add_floor(&record.origin_label, record.origin_floor);
            nodes.add_floor(&record.dest_label, record.dest_floor);
            edges.push((origin, dest, weight, record.connection_type.as_str()));
        }

        let mut adjacency: Vec<Vec<Edge>> = vec![Vec::new(); nodes.len()];
        for (origin, dest, weight, connection_type) in edges {
            adjacency[origin].push(Edge {
                target: dest,
                weight,
                connection_type: connection_type.to_string(),
            });
            if self.options.mirror_edges {
                adjacency[dest].push(Edge {
                    target: origin,
                    weight,
                    connection_type: connection_type.to_string(),
                });
            }
        }

        let building = Building {
            graph: Graph {
                adjacency: Arc::new(adjacency),
            },
            nodes: Arc::new(nodes),
        };

        info!(
            records = records.len(),
            nodes = building.node_count(),
            edges = building.edge_count(),
            mirrored = self.options.mirror_edges,
            "built evacuation graph"
        );

        Ok(building)
    }
}

/// Build a directed graph with default options.
pub fn build_graph(records: &[EdgeRecord]) -> Result<Building> {
    GraphBuilder::default().build(records)
}

fn validate(position: usize, record: &EdgeRecord) -> Result<f64> {
    if record.origin_label.trim().is_empty() {
        return Err(Error::MissingEndpoint {
            record: position,
            endpoint: "origin",
        });
    }
    if record.dest_label.trim().is_empty() {
        return Err(Error::MissingEndpoint {
            record: position,
            endpoint: "destination",
        });
    }

    if let Some((field, value)) = record
        .weight_inputs()
        .into_iter()
        .find(|(_, value)| !value.is_finite())
    {
        return Err(Error::InvalidWeightComponent {
            record: position,
            field,
            value,
        });
    }

    let weight = record.weight();
    if !weight.is_finite() || weight < 0.0 {
        return Err(Error::InvalidWeight {
            record: position,
            weight,
        });
    }

    debug!(
        record = position,
        origin = %record.origin_label,
        dest = %record.dest_label,
        weight,
        "resolved edge weight"
    );
    Ok(weight)
}
