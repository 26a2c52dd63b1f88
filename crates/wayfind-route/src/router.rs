//! Shortest-path engine and query-point resolution.
//!
//! Dijkstra's algorithm over the CSR graph with the cost function injected
//! via [`CostModel`].  Goal unreachable is a `None` result, not an error —
//! disconnected road networks are a fact of life, not a bug.
//!
//! # Determinism
//!
//! Heap entries order by cost with the node id as secondary key, so pops are
//! fully deterministic.  Among equal-cost routes the one found is
//! implementation-defined, but the total cost never varies.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use wayfind_core::{EdgeId, GeoPoint, NodeId};

use crate::cost::CostModel;
use crate::error::RouteError;
use crate::network::RoadGraph;

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a shortest-path query: the node sequence from start to goal
/// inclusive, and the total cost under the query's cost model (metres for
/// [`crate::cost::DistanceCost`], seconds for [`crate::cost::TravelTimeCost`]).
#[derive(Debug, Clone)]
pub struct Route {
    pub nodes: Vec<NodeId>,
    pub total_cost: f64,
}

impl Route {
    /// `true` if start and goal were the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() <= 1
    }

    /// Total physical length of the route in metres, independent of the
    /// cost model that produced it.
    pub fn length_m(&self, graph: &RoadGraph) -> f64 {
        graph.path_length_m(&self.nodes)
    }
}

// ── Query points ──────────────────────────────────────────────────────────────

/// A query endpoint: either an external node id or a coordinate to snap.
#[derive(Debug, Clone)]
pub enum QueryPoint {
    Node(String),
    Coord(GeoPoint),
}

/// Resolve a query point to a graph node.
///
/// # Errors
///
/// [`RouteError::UnknownNode`] for an id absent from the graph;
/// [`RouteError::SnapFailed`] for a coordinate with no node within the snap
/// tolerance.
pub fn resolve(graph: &RoadGraph, point: &QueryPoint) -> Result<NodeId, RouteError> {
    match point {
        QueryPoint::Node(id) => graph
            .resolve_id(id)
            .ok_or_else(|| RouteError::UnknownNode(id.clone())),
        QueryPoint::Coord(pos) => graph
            .snap(*pos)
            .ok_or(RouteError::SnapFailed { lat: pos.lat, lon: pos.lon }),
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Heap entry.  Ordered as a min-heap by cost, node id as tiebreaker.
#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    node: NodeId,
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the smallest cost.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-source shortest path from `from` to `to` under `cost_model`.
///
/// Returns `None` when the goal is unreachable.  `from == to` yields the
/// trivial one-node route at cost 0.
pub fn shortest_path(
    graph: &RoadGraph,
    cost_model: &impl CostModel,
    from: NodeId,
    to: NodeId,
) -> Option<Route> {
    if from == to {
        return Some(Route { nodes: vec![from], total_cost: 0.0 });
    }

    let n = graph.node_count();
    // dist[v] = best known cost to reach v.
    let mut dist = vec![f64::INFINITY; n];
    // prev_edge[v] = edge that reached v; EdgeId::INVALID for unreached nodes.
    let mut prev_edge = vec![EdgeId::INVALID; n];

    dist[from.index()] = 0.0;

    let mut heap = BinaryHeap::new();
    heap.push(State { cost: 0.0, node: from });

    while let Some(State { cost, node }) = heap.pop() {
        // Early exit: with non-negative edge costs no cheaper path to the
        // goal remains undiscovered once it is popped.
        if node == to {
            return Some(reconstruct(graph, &prev_edge, to, cost));
        }

        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }

        for edge in graph.out_edges(node) {
            let step = cost_model.edge_cost(graph, edge, cost);
            debug_assert!(step >= 0.0, "negative edge cost {step}");

            let neighbor = graph.edge_to[edge.index()];
            let candidate = cost + step;

            if candidate < dist[neighbor.index()] {
                dist[neighbor.index()] = candidate;
                prev_edge[neighbor.index()] = edge;
                heap.push(State { cost: candidate, node: neighbor });
            }
        }
    }

    None
}

/// Walk `prev_edge` backwards from the goal and reverse.  An explicit loop:
/// predecessor chains on large graphs are too deep for recursion.
fn reconstruct(graph: &RoadGraph, prev_edge: &[EdgeId], to: NodeId, total_cost: f64) -> Route {
    let mut nodes = vec![to];
    let mut cur = to;
    loop {
        let e = prev_edge[cur.index()];
        if e == EdgeId::INVALID {
            break;
        }
        cur = graph.edge_from[e.index()];
        nodes.push(cur);
    }
    nodes.reverse();
    Route { nodes, total_cost }
}
