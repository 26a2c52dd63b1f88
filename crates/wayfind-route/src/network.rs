//! Road graph representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_from[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! All edge arrays (`edge_from`, `edge_to`, `edge_length_m`, `edge_name`)
//! are sorted by source node and indexed by `EdgeId`.  Every node observed
//! during construction gets a CSR row, possibly empty, so adjacency lookups
//! never miss.
//!
//! # External ids
//!
//! Graph descriptions name nodes with arbitrary strings.  The builder
//! interns each string to a dense `NodeId` once; `node_ids` holds the
//! reverse table for display and query resolution.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) finds the nearest node to a `(lat, lon)` query.
//! Index points scale the longitude axis by `cos(lat)` so one unit means the
//! same ground distance on both axes; raw degrees would rank a longitude
//! neighbour too far at city latitudes (1° lon ≈ cos(lat) · 111 km).  The
//! caller-visible distance and the snap-tolerance check use the haversine
//! metric on the returned candidate.

use rstar::{AABB, PointDistance, RTree, RTreeObject};
use rustc_hash::FxHashMap;

use wayfind_core::{EdgeId, GeoPoint, NodeId};

/// Maximum distance (metres) within which a query coordinate may be matched
/// to an existing node.
pub const SNAP_TOLERANCE_M: f64 = 20.0;

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Project a coordinate into index space: latitude as-is, longitude scaled
/// by `cos(lat)` (equirectangular).  Euclidean distance in this space is
/// proportional to ground distance at city scale, so the nearest index
/// candidate is also the haversine-nearest node.
fn index_point(pos: GeoPoint) -> [f64; 2] {
    [pos.lat, pos.lon * pos.lat.to_radians().cos()]
}

/// Entry stored in the R-tree spatial index: a scaled `[lat, lon·cos(lat)]`
/// point with the associated `NodeId`.
#[derive(Clone, Debug)]
struct NodeEntry {
    point: [f64; 2], // index_point projection
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared Euclidean distance in the scaled space (error < 0.1 % at city
    /// scale); the exact haversine distance is computed on the candidate
    /// afterwards.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── RoadGraph ─────────────────────────────────────────────────────────────────

/// Directed road graph in CSR format plus a spatial index for node snapping.
///
/// Immutable once built; share it freely across queries.  Construct via
/// [`RoadGraphBuilder`] or [`crate::ingest::from_source`].
#[derive(Debug)]
pub struct RoadGraph {
    // ── Node data ─────────────────────────────────────────────────────────
    /// Geographic position of each node.  Indexed by `NodeId`.
    pub node_pos: Vec<GeoPoint>,

    /// External (document) id of each node.  Indexed by `NodeId`.
    pub node_ids: Vec<String>,

    // ── CSR edge adjacency ────────────────────────────────────────────────
    /// CSR row pointer.  Outgoing edges of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`.
    /// Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId = position in sorted order) ──────────
    /// Source node of each edge.  Redundant with CSR but required for
    /// efficient route reconstruction (trace `prev_edge` back to source).
    pub edge_from: Vec<NodeId>,

    /// Destination node of each edge.
    pub edge_to: Vec<NodeId>,

    /// Length of each edge in metres.  Always finite and ≥ 0.
    pub edge_length_m: Vec<f64>,

    /// Road name of each edge; empty string when the source supplied none.
    pub edge_name: Vec<String>,

    // ── Lookup structures ─────────────────────────────────────────────────
    id_index: FxHashMap<String, NodeId>,
    spatial_idx: RTree<NodeEntry>,
}

impl RoadGraph {
    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    // ── Id resolution ─────────────────────────────────────────────────────

    /// External id of `node`.
    #[inline]
    pub fn node_id(&self, node: NodeId) -> &str {
        &self.node_ids[node.index()]
    }

    /// Look up a node by its external id.
    pub fn resolve_id(&self, id: &str) -> Option<NodeId> {
        self.id_index.get(id).copied()
    }

    /// Position of `node`.
    #[inline]
    pub fn node_pos(&self, node: NodeId) -> GeoPoint {
        self.node_pos[node.index()]
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Out-degree of `node` (number of outgoing edges).
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    /// The `i`-th outgoing edge of `node` (`i < out_degree(node)`).
    #[inline]
    pub fn nth_out_edge(&self, node: NodeId, i: usize) -> EdgeId {
        debug_assert!(i < self.out_degree(node));
        EdgeId(self.node_out_start[node.index()] + i as u32)
    }

    /// First directed edge `from → to`, if one exists.
    pub fn find_edge(&self, from: NodeId, to: NodeId) -> Option<EdgeId> {
        self.out_edges(from).find(|&e| self.edge_to[e.index()] == to)
    }

    /// Total physical length in metres of a node sequence, summing the edge
    /// lengths of consecutive pairs.  A pair with no connecting edge
    /// contributes 0 (routes produced by this crate never contain one).
    pub fn path_length_m(&self, nodes: &[NodeId]) -> f64 {
        nodes
            .windows(2)
            .filter_map(|w| self.find_edge(w[0], w[1]))
            .map(|e| self.edge_length_m[e.index()])
            .sum()
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// Nearest node to `pos` and its haversine distance in metres.
    ///
    /// Returns `None` only if the graph has no nodes.  Exact ties are broken
    /// by index order.
    pub fn nearest_node(&self, pos: GeoPoint) -> Option<(NodeId, f64)> {
        self.spatial_idx
            .nearest_neighbor(&index_point(pos))
            .map(|e| (e.id, pos.distance_m(self.node_pos[e.id.index()])))
    }

    /// Snap `pos` to the nearest node within [`SNAP_TOLERANCE_M`].
    pub fn snap(&self, pos: GeoPoint) -> Option<NodeId> {
        match self.nearest_node(pos) {
            Some((id, d)) if d <= SNAP_TOLERANCE_M => Some(id),
            _ => None,
        }
    }
}

// ── RoadGraphBuilder ──────────────────────────────────────────────────────────

/// Construct a [`RoadGraph`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts nodes and directed edges in any order, as long as an
/// edge's endpoints were added first.  `build()` sorts edges by source node,
/// constructs the CSR arrays, and bulk-loads the R-tree.
///
/// # Example
///
/// ```
/// use wayfind_core::GeoPoint;
/// use wayfind_route::RoadGraphBuilder;
///
/// let mut b = RoadGraphBuilder::new();
/// let a = b.add_node("a", GeoPoint::new(30.69, -88.04));
/// let c = b.add_node("c", GeoPoint::new(30.70, -88.03));
/// b.add_road(a, c, 1_200.0, "Water St");
/// let graph = b.build();
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 2); // bidirectional
/// ```
pub struct RoadGraphBuilder {
    nodes: Vec<GeoPoint>,
    ids: Vec<String>,
    id_index: FxHashMap<String, NodeId>,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    from: NodeId,
    to: NodeId,
    length_m: f64,
    name: String,
}

impl RoadGraphBuilder {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            ids: Vec::new(),
            id_index: FxHashMap::default(),
            raw_edges: Vec::new(),
        }
    }

    /// Pre-allocate for the expected number of nodes and edges to reduce
    /// reallocations when bulk-loading a large document.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            ids: Vec::with_capacity(nodes),
            id_index: FxHashMap::default(),
            raw_edges: Vec::with_capacity(edges),
        }
    }

    /// Add a node under an external id and return its `NodeId` (sequential
    /// from 0).  Re-adding an existing id returns the original `NodeId` and
    /// keeps the first position.
    pub fn add_node(&mut self, id: impl Into<String>, pos: GeoPoint) -> NodeId {
        let id = id.into();
        if let Some(&existing) = self.id_index.get(&id) {
            return existing;
        }
        let node = NodeId(self.nodes.len() as u32);
        self.nodes.push(pos);
        self.ids.push(id.clone());
        self.id_index.insert(id, node);
        node
    }

    /// Look up a previously added node by its external id.
    pub fn lookup(&self, id: &str) -> Option<NodeId> {
        self.id_index.get(id).copied()
    }

    /// Position of a node added earlier (used by ingestion to derive edge
    /// lengths from endpoint coordinates).
    pub fn node_pos(&self, id: NodeId) -> GeoPoint {
        self.nodes[id.index()]
    }

    /// Add a **directed** edge from `from` to `to`.
    ///
    /// - `length_m`: physical length in metres; must be finite and ≥ 0.
    /// - `name`: road name, empty when unknown.
    pub fn add_directed_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        length_m: f64,
        name: impl Into<String>,
    ) {
        debug_assert!(length_m.is_finite() && length_m >= 0.0);
        self.raw_edges.push(RawEdge { from, to, length_m, name: name.into() });
    }

    /// Convenience: add edges in **both directions** for an undirected road
    /// segment (the common case for two-way streets).
    pub fn add_road(&mut self, a: NodeId, b: NodeId, length_m: f64, name: impl Into<String>) {
        let name = name.into();
        self.add_directed_edge(a, b, length_m, name.clone());
        self.add_directed_edge(b, a, length_m, name);
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.raw_edges.len()
    }

    /// Consume the builder and produce a [`RoadGraph`].
    ///
    /// Time complexity: O(E log E) for edge sort + O(N log N) for R-tree bulk
    /// load, where N = nodes, E = edges.
    pub fn build(self) -> RoadGraph {
        let node_count = self.nodes.len();
        let edge_count = self.raw_edges.len();

        // Sort edges by source node for CSR construction.
        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        // Build CSR row pointer (node_out_start).
        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        // Split sorted raw edges into parallel arrays.
        let edge_from: Vec<NodeId> = raw.iter().map(|e| e.from).collect();
        let edge_to: Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_length_m: Vec<f64> = raw.iter().map(|e| e.length_m).collect();
        let edge_name: Vec<String> = raw.into_iter().map(|e| e.name).collect();

        // Bulk-load R-tree for O(N log N) construction (faster than N inserts).
        let entries: Vec<NodeEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, &pos)| NodeEntry {
                point: index_point(pos),
                id: NodeId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        RoadGraph {
            node_pos: self.nodes,
            node_ids: self.ids,
            node_out_start,
            edge_from,
            edge_to,
            edge_length_m,
            edge_name,
            id_index: self.id_index,
            spatial_idx,
        }
    }
}

impl Default for RoadGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
