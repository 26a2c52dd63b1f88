//! Presentational helpers for routes.

use wayfind_core::NodeId;

use crate::network::RoadGraph;

/// Render a node sequence as its external ids joined with `-`,
/// e.g. `"a-b-c-d"`.  An empty sequence renders as an empty string.
pub fn dash_joined(graph: &RoadGraph, nodes: &[NodeId]) -> String {
    nodes
        .iter()
        .map(|&n| graph.node_id(n))
        .collect::<Vec<_>>()
        .join("-")
}
