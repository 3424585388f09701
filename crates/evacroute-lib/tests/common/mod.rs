//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use evacroute_lib::{build_graph, load_records, Building, EdgeRecord};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Records of the two-floor campus fixture.
#[allow(dead_code)]
pub fn campus_records() -> Vec<EdgeRecord> {
    load_records(&fixtures_dir().join("campus.csv")).expect("load fixture campus.csv")
}

/// Directed graph of the campus fixture.
#[allow(dead_code)]
pub fn campus() -> Building {
    build_graph(&campus_records()).expect("campus fixture builds")
}

/// A -> B (4), B -> C (3), A -> C (10) with the last node named `goal`.
#[allow(dead_code)]
pub fn triangle(goal: &str) -> Vec<EdgeRecord> {
    vec![
        EdgeRecord::new("A", "B").with_total_weight(4.0),
        EdgeRecord::new("B", goal).with_total_weight(3.0),
        EdgeRecord::new("A", goal).with_total_weight(10.0),
    ]
}

#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
