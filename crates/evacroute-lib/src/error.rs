use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the evacuation route library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an edge record lacks an origin or destination label.
    #[error("record {record} is missing its {endpoint} label")]
    MissingEndpoint {
        record: usize,
        endpoint: &'static str,
    },

    /// Raised when a present weight component is not a finite number.
    #[error("record {record} has a non-finite {field} value: {value}")]
    InvalidWeightComponent {
        record: usize,
        field: &'static str,
        value: f64,
    },

    /// Raised when the resolved edge weight is negative or not finite.
    #[error("record {record} resolves to invalid edge weight {weight}")]
    InvalidWeight { record: usize, weight: f64 },

    /// Raised when a dataset cell could not be interpreted for its column.
    #[error("record {record} has an invalid {field} value: '{value}'")]
    InvalidField {
        record: usize,
        field: String,
        value: String,
    },

    /// Raised when the dataset file extension is not recognised.
    #[error("unsupported dataset format for {path}; expected .csv or .json")]
    UnsupportedDatasetFormat { path: PathBuf },

    /// Dataset could not be located at the resolved path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No dataset path was given and `EVACROUTE_DATASET` is unset.
    #[error("no dataset configured; pass --dataset or set EVACROUTE_DATASET")]
    DatasetNotConfigured,

    /// Raised when a node label could not be found in the graph.
    #[error("unknown node label: {label}{}", format_suggestions(.suggestions))]
    UnknownLabel {
        label: String,
        suggestions: Vec<String>,
    },

    /// Raised when no route could be found between two nodes.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when no exit is reachable from the start node.
    #[error("no reachable exit from {start}")]
    NoReachableExit { start: String },

    /// Raised when a computed route plan lacks any nodes.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
