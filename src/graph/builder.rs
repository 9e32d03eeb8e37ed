/// Graph assembly: distance computation, distance-to-hue mapping, and
/// node/edge construction from coordinate and resource inputs.

use crate::core::config;
use crate::core::error::GraphError;
use crate::core::types::*;
use crate::graph::classify::classify_at;

/// Euclidean distance between two points.
pub fn distance(a: [f64; 2], b: [f64; 2]) -> f64 {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    (dx * dx + dy * dy).sqrt()
}

/// Map a distance onto an HSL hue in `[0, 240]`.
///
/// Close pairs map toward blue (240), far pairs toward red (0); distances
/// at or beyond [`config::MAX_EDGE_DISTANCE`] clamp to 0.
pub fn hue_from_distance(d: f64) -> f64 {
    (1.0 - (d / config::MAX_EDGE_DISTANCE).min(1.0)) * config::HUE_MAX
}

/// Emphasis stroke color for an edge of the given distance.
pub fn emphasis_color(d: f64) -> String {
    format!("hsl({:.1}, 100%, 50%)", hue_from_distance(d))
}

/// Build one node per point, with classification and visual encoding.
///
/// The three sequences must be index-aligned and of equal length; a
/// mismatch fails with [`GraphError::DataMismatch`] before any node is
/// built. Each warehouse-level and resource vector must carry exactly
/// three entries.
pub fn build_nodes(
    coordinates: &[[f64; 2]],
    warehouse_levels: &[Vec<f64>],
    resources: &[Vec<f64>],
) -> Result<Vec<GraphNode>, GraphError> {
    if coordinates.len() != warehouse_levels.len() || coordinates.len() != resources.len() {
        return Err(GraphError::DataMismatch {
            coordinates: coordinates.len(),
            warehouse_levels: warehouse_levels.len(),
            resources: resources.len(),
        });
    }

    let mut nodes = Vec::with_capacity(coordinates.len());
    for (i, coord) in coordinates.iter().enumerate() {
        let class = classify_at(&warehouse_levels[i], i)?;

        let quantities = &resources[i];
        if quantities.len() != config::VECTOR_LEN {
            return Err(GraphError::InvalidVector {
                kind: "resource",
                index: i,
                expected: config::VECTOR_LEN,
                len: quantities.len(),
            });
        }

        let name = format!("Site {}", i + 1);
        let tooltip = format!(
            "{}: resources {}, {}, {}; warehouse tier: {}",
            name,
            quantities[0],
            quantities[1],
            quantities[2],
            class.label()
        );

        nodes.push(GraphNode {
            id: i,
            name,
            x: coord[0],
            y: coord[1],
            resources: quantities.clone(),
            class,
            symbol_size: class.symbol_size(),
            color: class.color().to_string(),
            tooltip,
            fixed: true,
        });
    }

    Ok(nodes)
}

/// Build one edge per unordered node pair `(i, j)`, `i < j`, in
/// lexicographic order. Produces exactly `n(n-1)/2` edges.
pub fn build_edges(nodes: &[GraphNode]) -> Vec<GraphEdge> {
    let n = nodes.len();
    let mut edges = Vec::with_capacity(n * n.saturating_sub(1) / 2);

    for i in 0..n {
        for j in (i + 1)..n {
            let d = distance([nodes[i].x, nodes[i].y], [nodes[j].x, nodes[j].y]);
            edges.push(GraphEdge {
                source: i,
                target: j,
                distance: d,
                label: format!("{:.0}", d),
                base_style: LineStyle {
                    color: config::EDGE_BASE_COLOR.to_string(),
                    width: config::EDGE_BASE_WIDTH,
                },
                emphasis_style: LineStyle {
                    color: emphasis_color(d),
                    width: config::EDGE_BASE_WIDTH * config::EDGE_EMPHASIS_WIDTH_FACTOR,
                },
            });
        }
    }

    edges
}

/// Assemble the full graph descriptor. Pure function of its inputs:
/// identical inputs always yield an identical graph.
pub fn assemble_graph(
    coordinates: &[[f64; 2]],
    warehouse_levels: &[Vec<f64>],
    resources: &[Vec<f64>],
) -> Result<SpatialGraph, GraphError> {
    let nodes = build_nodes(coordinates, warehouse_levels, resources)?;
    let edges = build_edges(&nodes);
    Ok(SpatialGraph { nodes, edges })
}
