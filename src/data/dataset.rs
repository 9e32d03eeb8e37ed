/// Dataset loading: the coordinate list plus the warehouse-level (`Vx`)
/// and resource-quantity (`Vy`) matrices that feed the graph builder.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::core::types::ResourceData;
use crate::data::table::Table;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("table is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("bad number in column '{column}', row {row}: '{value}'")]
    BadNumber {
        column: &'static str,
        row: usize,
        value: String,
    },
}

/// External dataset shape: `Vx[i]` is the warehouse-level vector and
/// `Vy[i]` the resource quantities for point `i`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Dataset {
    pub coordinates: Vec<[f64; 2]>,
    #[serde(rename = "Vx")]
    pub vx: Vec<Vec<f64>>,
    #[serde(rename = "Vy")]
    pub vy: Vec<Vec<f64>>,
}

const COORD_COLUMNS: [&str; 2] = ["x", "y"];
const LEVEL_COLUMNS: [&str; 3] = ["w1", "w2", "w3"];
const RESOURCE_COLUMNS: [&str; 3] = ["r1", "r2", "r3"];

impl Dataset {
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Extract a dataset from a tabular source with columns
    /// `x, y, w1..w3, r1..r3`.
    pub fn from_table(table: &Table) -> Result<Self, DatasetError> {
        let xs = numeric_column(table, COORD_COLUMNS[0])?;
        let ys = numeric_column(table, COORD_COLUMNS[1])?;
        let coordinates = xs.into_iter().zip(ys).map(|(x, y)| [x, y]).collect();

        Ok(Self {
            coordinates,
            vx: numeric_matrix(table, &LEVEL_COLUMNS)?,
            vy: numeric_matrix(table, &RESOURCE_COLUMNS)?,
        })
    }

    pub fn resources(&self) -> ResourceData {
        ResourceData {
            vx: self.vx.clone(),
            vy: self.vy.clone(),
        }
    }
}

fn numeric_column(table: &Table, name: &'static str) -> Result<Vec<f64>, DatasetError> {
    let values = table
        .column(name)
        .ok_or(DatasetError::MissingColumn(name))?;

    values
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            value.parse::<f64>().map_err(|_| DatasetError::BadNumber {
                column: name,
                row,
                value: value.to_string(),
            })
        })
        .collect()
}

fn numeric_matrix(
    table: &Table,
    columns: &[&'static str; 3],
) -> Result<Vec<Vec<f64>>, DatasetError> {
    let mut cols = Vec::with_capacity(columns.len());
    for name in columns {
        cols.push(numeric_column(table, name)?);
    }

    let rows = cols.first().map(Vec::len).unwrap_or(0);
    Ok((0..rows)
        .map(|i| cols.iter().map(|c| c[i]).collect())
        .collect())
}
