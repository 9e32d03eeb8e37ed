/// Common type definitions shared by the builder, controller, and surfaces.

use serde::Serialize;

use super::config;

/// Warehouse tier derived from a warehouse-level vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WarehouseClass {
    None,
    Small,
    Medium,
    Large,
}

impl WarehouseClass {
    pub fn color(&self) -> &'static str {
        match self {
            WarehouseClass::None => config::NODE_COLOR_NONE,
            WarehouseClass::Small => config::NODE_COLOR_SMALL,
            WarehouseClass::Medium => config::NODE_COLOR_MEDIUM,
            WarehouseClass::Large => config::NODE_COLOR_LARGE,
        }
    }

    pub fn symbol_size(&self) -> f64 {
        match self {
            WarehouseClass::None => config::NODE_SIZE_NONE,
            WarehouseClass::Small => config::NODE_SIZE_SMALL,
            WarehouseClass::Medium => config::NODE_SIZE_MEDIUM,
            WarehouseClass::Large => config::NODE_SIZE_LARGE,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WarehouseClass::None => config::NODE_LABEL_NONE,
            WarehouseClass::Small => config::NODE_LABEL_SMALL,
            WarehouseClass::Medium => config::NODE_LABEL_MEDIUM,
            WarehouseClass::Large => config::NODE_LABEL_LARGE,
        }
    }
}

/// A node in the spatial graph: one point with its visual encoding.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: usize,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub resources: Vec<f64>,
    pub class: WarehouseClass,
    pub symbol_size: f64,
    pub color: String,
    pub tooltip: String,
    pub fixed: bool,
}

/// Stroke style for one edge rendering state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStyle {
    pub color: String,
    pub width: f64,
}

/// An edge connecting two nodes, weighted by Euclidean distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub source: usize,
    pub target: usize,
    pub distance: f64,
    pub label: String,
    pub base_style: LineStyle,
    pub emphasis_style: LineStyle,
}

/// The complete graph descriptor handed to a render surface.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpatialGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl SpatialGraph {
    pub fn find_node(&self, id: usize) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

/// Warehouse-level and resource-quantity matrices, index-aligned with the
/// coordinate list. `vx[i]` holds tier counts (small, medium, large);
/// `vy[i]` holds quantities of the three commodities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceData {
    pub vx: Vec<Vec<f64>>,
    pub vy: Vec<Vec<f64>>,
}
