//! Typed edge records and the edge weight policy.
//!
//! An [`EdgeRecord`] is one row of the connection table: two endpoint labels,
//! the floors they sit on and the raw physical attributes of the connection.
//! Every numeric attribute is optional and absence is distinct from zero.

use serde::{Deserialize, Serialize};

/// Floor identifier as it appears in the source data.
pub type Floor = i32;

/// One directed connection between two labelled locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub origin_label: String,
    pub dest_label: String,
    #[serde(default)]
    pub connection_type: String,
    pub origin_floor: Floor,
    pub dest_floor: Floor,
    #[serde(default)]
    pub distance_m: Option<f64>,
    #[serde(default)]
    pub height_m: Option<f64>,
    #[serde(default)]
    pub congestion_factor: Option<f64>,
    #[serde(default)]
    pub total_weight: Option<f64>,
}

/// Where the weight of an edge comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeightSource {
    /// Operator-supplied total that overrides every physical component.
    Explicit(f64),
    /// `(distance + height) * congestion`, with absent values already defaulted.
    Components {
        distance: f64,
        height: f64,
        congestion: f64,
    },
}

impl WeightSource {
    /// Resulting traversal cost.
    pub fn weight(self) -> f64 {
        match self {
            WeightSource::Explicit(total) => total,
            WeightSource::Components {
                distance,
                height,
                congestion,
            } => (distance + height) * congestion,
        }
    }
}

impl EdgeRecord {
    /// Record between two labels on floor 0 with no weight attributes.
    pub fn new(origin: impl Into<String>, dest: impl Into<String>) -> Self {
        Self {
            origin_label: origin.into(),
            dest_label: dest.into(),
            connection_type: String::new(),
            origin_floor: 0,
            dest_floor: 0,
            distance_m: None,
            height_m: None,
            congestion_factor: None,
            total_weight: None,
        }
    }

    #[must_use]
    pub fn with_connection_type(mut self, connection_type: impl Into<String>) -> Self {
        self.connection_type = connection_type.into();
        self
    }

    #[must_use]
    pub fn with_floors(mut self, origin: Floor, dest: Floor) -> Self {
        self.origin_floor = origin;
        self.dest_floor = dest;
        self
    }

    #[must_use]
    pub fn with_distance(mut self, meters: f64) -> Self {
        self.distance_m = Some(meters);
        self
    }

    #[must_use]
    pub fn with_height(mut self, meters: f64) -> Self {
        self.height_m = Some(meters);
        self
    }

    #[must_use]
    pub fn with_congestion(mut self, factor: f64) -> Self {
        self.congestion_factor = Some(factor);
        self
    }

    #[must_use]
    pub fn with_total_weight(mut self, weight: f64) -> Self {
        self.total_weight = Some(weight);
        self
    }

    /// Decide how this record's weight is computed.
    ///
    /// A present (non-NaN) `total_weight` always wins. Otherwise absent
    /// distance and height count as `0.0` and an absent congestion factor as
    /// `1.0`. NaN is treated the same as absence.
    pub fn weight_source(&self) -> WeightSource {
        match present(self.total_weight) {
            Some(total) => WeightSource::Explicit(total),
            None => WeightSource::Components {
                distance: present(self.distance_m).unwrap_or(0.0),
                height: present(self.height_m).unwrap_or(0.0),
                congestion: present(self.congestion_factor).unwrap_or(1.0),
            },
        }
    }

    /// Resolved traversal cost of this record.
    pub fn weight(&self) -> f64 {
        self.weight_source().weight()
    }

    /// Present components that feed the weight, paired with their field names.
    pub(crate) fn weight_inputs(&self) -> Vec<(&'static str, f64)> {
        if let Some(total) = present(self.total_weight) {
            return vec![("total_weight", total)];
        }
        [
            ("distance_m", self.distance_m),
            ("height_m", self.height_m),
            ("congestion_factor", self.congestion_factor),
        ]
        .into_iter()
        .filter_map(|(field, value)| present(value).map(|value| (field, value)))
        .collect()
    }
}

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| !v.is_nan())
}
