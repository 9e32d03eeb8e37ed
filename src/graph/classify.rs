/// Warehouse tier classification from level vectors.

use crate::core::config;
use crate::core::error::GraphError;
use crate::core::types::WarehouseClass;

/// Classify a warehouse-level vector into a tier.
///
/// Checked in strict priority order: a large-tier warehouse (index 2) wins
/// over medium (index 1), which wins over small (index 0). The checks are
/// exclusive, so exactly one class is returned.
pub fn classify(levels: &[f64]) -> Result<WarehouseClass, GraphError> {
    classify_at(levels, 0)
}

/// Same as [`classify`] but reports the point index in the error.
pub fn classify_at(levels: &[f64], index: usize) -> Result<WarehouseClass, GraphError> {
    if levels.len() != config::VECTOR_LEN {
        return Err(GraphError::InvalidVector {
            kind: "warehouse-level",
            index,
            expected: config::VECTOR_LEN,
            len: levels.len(),
        });
    }

    let class = if levels[2] > 0.0 {
        WarehouseClass::Large
    } else if levels[1] > 0.0 {
        WarehouseClass::Medium
    } else if levels[0] > 0.0 {
        WarehouseClass::Small
    } else {
        WarehouseClass::None
    };

    Ok(class)
}
