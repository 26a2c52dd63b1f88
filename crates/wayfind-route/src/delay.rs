//! Traffic-signal delay table and its CSV loader.
//!
//! # Lookup convention
//!
//! Two entry shapes are accepted:
//!
//! - **node entry** — a waiting time at an intersection, charged when a
//!   traversed edge *arrives at* that node (destination-keyed);
//! - **turn entry** — a waiting time for one specific directed movement
//!   `from → to`, which overrides the node entry for that edge.
//!
//! [`SignalDelays::for_edge`] checks the turn entry first, then the
//! destination-node entry, and defaults to 0.
//!
//! # CSV format
//!
//! One row per entry.  An empty `to` field makes a node entry at `from`.
//!
//! ```csv
//! from,to,delay_secs
//! B,,10
//! A,B,2.5
//! ```

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use wayfind_core::{EdgeId, NodeId};

use crate::error::RouteError;
use crate::network::RoadGraph;

// ── SignalDelays ──────────────────────────────────────────────────────────────

/// Non-negative signal waiting times in seconds, keyed by node or by
/// directed node pair.  Built once per run; read-only during search.
#[derive(Debug, Clone, Default)]
pub struct SignalDelays {
    node: FxHashMap<NodeId, f64>,
    turn: FxHashMap<(NodeId, NodeId), f64>,
}

impl SignalDelays {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.node.is_empty() && self.turn.is_empty()
    }

    /// Register a waiting time charged on arrival at `node`.
    ///
    /// `graph` supplies the external id for error reporting.
    pub fn set_node(&mut self, graph: &RoadGraph, node: NodeId, secs: f64) -> Result<(), RouteError> {
        if secs < 0.0 {
            return Err(RouteError::NegativeDelay {
                at: graph.node_id(node).to_string(),
                secs,
            });
        }
        self.node.insert(node, secs);
        Ok(())
    }

    /// Register a waiting time for the directed movement `from → to`.
    pub fn set_turn(
        &mut self,
        graph: &RoadGraph,
        from: NodeId,
        to: NodeId,
        secs: f64,
    ) -> Result<(), RouteError> {
        if secs < 0.0 {
            return Err(RouteError::NegativeDelay {
                at: format!("{} -> {}", graph.node_id(from), graph.node_id(to)),
                secs,
            });
        }
        self.turn.insert((from, to), secs);
        Ok(())
    }

    /// Delay in seconds incurred by traversing `edge`: the matching turn
    /// entry if any, else the entry at the edge's destination node, else 0.
    pub fn for_edge(&self, graph: &RoadGraph, edge: EdgeId) -> f64 {
        let from = graph.edge_from[edge.index()];
        let to = graph.edge_to[edge.index()];
        if let Some(&d) = self.turn.get(&(from, to)) {
            return d;
        }
        self.node.get(&to).copied().unwrap_or(0.0)
    }
}

// ── CSV loading ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct DelayRecord {
    from: String,
    to: Option<String>,
    delay_secs: f64,
}

/// Load a [`SignalDelays`] table from a CSV file, resolving external node
/// ids against `graph`.
pub fn load_delays_csv(path: &Path, graph: &RoadGraph) -> Result<SignalDelays, RouteError> {
    let file = std::fs::File::open(path).map_err(RouteError::Io)?;
    load_delays_reader(file, graph)
}

/// Like [`load_delays_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded tables.
pub fn load_delays_reader<R: Read>(reader: R, graph: &RoadGraph) -> Result<SignalDelays, RouteError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut delays = SignalDelays::new();

    for result in csv_reader.deserialize::<DelayRecord>() {
        let row = result.map_err(|e| RouteError::Parse(e.to_string()))?;

        let from = resolve(graph, &row.from)?;
        match row.to.as_deref().filter(|s| !s.trim().is_empty()) {
            None => delays.set_node(graph, from, row.delay_secs)?,
            Some(to) => {
                let to = resolve(graph, to)?;
                delays.set_turn(graph, from, to, row.delay_secs)?;
            }
        }
    }

    Ok(delays)
}

fn resolve(graph: &RoadGraph, id: &str) -> Result<NodeId, RouteError> {
    graph
        .resolve_id(id.trim())
        .ok_or_else(|| RouteError::UnknownNode(id.trim().to_string()))
}
