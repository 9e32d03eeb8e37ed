/// Structural errors raised while building a graph from input data.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error(
        "input length mismatch: {coordinates} coordinates, \
         {warehouse_levels} warehouse-level vectors, {resources} resource vectors"
    )]
    DataMismatch {
        coordinates: usize,
        warehouse_levels: usize,
        resources: usize,
    },

    #[error("invalid {kind} vector at index {index}: expected {expected} entries, got {len}")]
    InvalidVector {
        kind: &'static str,
        index: usize,
        expected: usize,
        len: usize,
    },
}
