//! Loading edge records from CSV or JSON files.
//!
//! The loader only accepts the canonical column names (the [`EdgeRecord`]
//! field names, or the dataset's own `Nodo_origen`/`Peso_total` style names).
//! It does not guess at renamed or reformatted headers.

use std::env;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::record::{EdgeRecord, Floor};

/// Environment variable consulted when no dataset path is given explicitly.
pub const DATASET_ENV_VAR: &str = "EVACROUTE_DATASET";

/// File formats understood by [`load_records`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Csv,
    Json,
}

impl DatasetFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("csv") => Ok(DatasetFormat::Csv),
            Some("json") => Ok(DatasetFormat::Json),
            _ => Err(Error::UnsupportedDatasetFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Resolve the dataset location.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `EVACROUTE_DATASET` environment variable.
pub fn resolve_dataset_path(target: Option<&Path>) -> Result<PathBuf> {
    if let Some(explicit) = target {
        return Ok(explicit.to_path_buf());
    }

    if let Some(env_path) = env::var_os(DATASET_ENV_VAR) {
        if !env_path.is_empty() {
            debug!(path = ?env_path, "using dataset from {DATASET_ENV_VAR}");
            return Ok(PathBuf::from(env_path));
        }
    }

    Err(Error::DatasetNotConfigured)
}

/// Load every edge record from a `.csv` or `.json` file.
pub fn load_records(path: &Path) -> Result<Vec<EdgeRecord>> {
    if !path.exists() {
        return Err(Error::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }

    let format = DatasetFormat::from_path(path)?;
    let file = fs::File::open(path)?;
    let records = match format {
        DatasetFormat::Csv => records_from_csv(file)?,
        DatasetFormat::Json => records_from_json(file)?,
    };

    info!(
        path = %path.display(),
        records = records.len(),
        "loaded edge records"
    );
    Ok(records)
}

/// Parse CSV rows with a header line.
pub fn records_from_csv<R: Read>(reader: R) -> Result<Vec<EdgeRecord>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);
    csv_reader
        .deserialize::<RawRecord<String>>()
        .enumerate()
        .map(|(position, row)| row?.into_record(position))
        .collect()
}

/// Parse a JSON array of row objects.
pub fn records_from_json<R: Read>(reader: R) -> Result<Vec<EdgeRecord>> {
    let rows: Vec<RawRecord<Cell>> = serde_json::from_reader(reader)?;
    rows.into_iter()
        .enumerate()
        .map(|(position, row)| row.into_record(position))
        .collect()
}

/// A loosely typed cell: spreadsheets export numbers as text and vice versa.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Cell {
    Number(f64),
    Text(String),
}

impl Cell {
    fn display(&self) -> String {
        match self {
            Cell::Number(value) => value.to_string(),
            Cell::Text(text) => text.clone(),
        }
    }
}

/// Text column of a row.
///
/// CSV cells are read verbatim as strings, so `"007"` stays `"007"`. JSON
/// labels may also be bare numbers, which are rendered back to text.
trait LabelCell {
    fn into_label(self) -> String;
}

impl LabelCell for String {
    fn into_label(self) -> String {
        self
    }
}

impl LabelCell for Cell {
    fn into_label(self) -> String {
        match self {
            Cell::Number(value) if value.fract() == 0.0 => format!("{}", value as i64),
            Cell::Number(value) => value.to_string(),
            Cell::Text(text) => text,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "L: Deserialize<'de>"))]
struct RawRecord<L> {
    #[serde(default, alias = "Nodo_origen")]
    origin_label: Option<L>,
    #[serde(default, alias = "Nodo_destino")]
    dest_label: Option<L>,
    #[serde(default, alias = "Tipo_conexion")]
    connection_type: Option<L>,
    #[serde(default, alias = "Piso_origen")]
    origin_floor: Option<Cell>,
    #[serde(default, alias = "Piso_destino")]
    dest_floor: Option<Cell>,
    #[serde(default, alias = "Distancia_m")]
    distance_m: Option<Cell>,
    #[serde(default, alias = "Altura_m")]
    height_m: Option<Cell>,
    #[serde(default, alias = "Factor_congestion")]
    congestion_factor: Option<Cell>,
    #[serde(default, alias = "Peso_total")]
    total_weight: Option<Cell>,
}

impl<L: LabelCell> RawRecord<L> {
    // Blank endpoint labels are passed through; the graph builder owns that rule.
    fn into_record(self, position: usize) -> Result<EdgeRecord> {
        Ok(EdgeRecord {
            origin_label: self.origin_label.map(L::into_label).unwrap_or_default(),
            dest_label: self.dest_label.map(L::into_label).unwrap_or_default(),
            connection_type: self
                .connection_type
                .map(L::into_label)
                .unwrap_or_default(),
            origin_floor: floor(position, "origin_floor", self.origin_floor)?,
            dest_floor: floor(position, "dest_floor", self.dest_floor)?,
            distance_m: number(position, "distance_m", self.distance_m)?,
            height_m: number(position, "height_m", self.height_m)?,
            congestion_factor: number(position, "congestion_factor", self.congestion_factor)?,
            total_weight: number(position, "total_weight", self.total_weight)?,
        })
    }
}

fn number(position: usize, field: &str, cell: Option<Cell>) -> Result<Option<f64>> {
    match cell {
        None => Ok(None),
        Some(Cell::Number(value)) => Ok(Some(value)),
        Some(Cell::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<f64>()
                .map(Some)
                .map_err(|_| invalid(position, field, &text))
        }
    }
}

fn floor(position: usize, field: &str, cell: Option<Cell>) -> Result<Floor> {
    let Some(cell) = cell else {
        return Err(invalid(position, field, ""));
    };
    let shown = cell.display();
    let value = match cell {
        Cell::Number(value) => value,
        Cell::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| invalid(position, field, &shown))?,
    };
    if value.fract() != 0.0 || value < Floor::MIN as f64 || value > Floor::MAX as f64 {
        return Err(invalid(position, field, &shown));
    }
    Ok(value as Floor)
}

fn invalid(position: usize, field: &str, value: &str) -> Error {
    Error::InvalidField {
        record: position,
        field: field.to_string(),
        value: value.to_string(),
    }
}
