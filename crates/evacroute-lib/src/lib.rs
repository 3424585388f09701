//! Evacuation route library entry points.
//!
//! This crate turns a table of building connections into a weighted directed
//! graph and runs shortest-path queries against it, either to a named node or
//! to the nearest exit. Higher-level consumers (the CLI) should only depend on
//! the functions exported here instead of reimplementing behavior.
//!
//! Graphs are built once with [`build_graph`] (or [`GraphBuilder`]) and are
//! immutable afterwards; a [`Building`] can be cloned cheaply and queried from
//! several threads at once.

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod graph;
pub mod node;
pub mod output;
pub mod path;
pub mod record;
pub mod routing;

pub use dataset::{load_records, resolve_dataset_path, DatasetFormat, DATASET_ENV_VAR};
pub use error::{Error, Result};
pub use graph::{
    build_graph, Building, Edge, Graph, GraphBuildOptions, GraphBuilder, GraphStats, NodeCatalog,
};
pub use node::{natural_cmp, NodeIndex, NodeType};
pub use output::{RouteEndpoint, RouteOutputKind, RouteStep, RouteSummary};
pub use path::{reconstruct_path, shortest_path_tree, ShortestPathTree};
pub use record::{EdgeRecord, Floor, WeightSource};
pub use routing::{
    find_route, nearest_exit, plan_route, NotFoundReason, RoutePlan, RouteRequest, RouteResult,
    RouteTarget,
};
