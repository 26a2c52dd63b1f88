//! Pluggable edge-cost models for the shortest-path engine.
//!
//! The engine sees cost only through [`CostModel`], so the same search
//! serves both the metre-valued comparison runs and the second-valued
//! travel-time runs with signal delays.

use wayfind_core::EdgeId;

use crate::delay::SignalDelays;
use crate::network::RoadGraph;

/// Assumed average vehicle speed in metres per second (~50 km/h).
pub const AVERAGE_SPEED_MPS: f64 = 13.9;

/// Incremental traversal cost of a directed edge.
///
/// `cost_so_far` is the tentative arrival cost at the edge's source node.
/// The built-in models ignore it, but time-dependent models need it, so it
/// is part of the seam.  Implementations must return finite values ≥ 0;
/// negative costs break the Dijkstra invariant.
pub trait CostModel {
    fn edge_cost(&self, graph: &RoadGraph, edge: EdgeId, cost_so_far: f64) -> f64;
}

/// Physical edge length in metres.  Used for direct-distance routing and by
/// the sampler's path scoring.
pub struct DistanceCost;

impl CostModel for DistanceCost {
    #[inline]
    fn edge_cost(&self, graph: &RoadGraph, edge: EdgeId, _cost_so_far: f64) -> f64 {
        graph.edge_length_m[edge.index()]
    }
}

/// Travel time in seconds at a fixed average speed, plus the signal delay
/// charged for the edge (see [`SignalDelays::for_edge`]).
pub struct TravelTimeCost<'a> {
    delays: &'a SignalDelays,
    speed_mps: f64,
}

impl<'a> TravelTimeCost<'a> {
    /// Travel-time model at [`AVERAGE_SPEED_MPS`].
    pub fn new(delays: &'a SignalDelays) -> Self {
        Self { delays, speed_mps: AVERAGE_SPEED_MPS }
    }

    /// Travel-time model at a custom average speed (m/s, must be > 0).
    pub fn with_speed(delays: &'a SignalDelays, speed_mps: f64) -> Self {
        debug_assert!(speed_mps > 0.0);
        Self { delays, speed_mps }
    }
}

impl CostModel for TravelTimeCost<'_> {
    #[inline]
    fn edge_cost(&self, graph: &RoadGraph, edge: EdgeId, _cost_so_far: f64) -> f64 {
        graph.edge_length_m[edge.index()] / self.speed_mps + self.delays.for_edge(graph, edge)
    }
}
