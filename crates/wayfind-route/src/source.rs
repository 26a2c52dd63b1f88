//! Attributed-element graph source: the input contract of the builder.
//!
//! A `GraphSource` is the markup-agnostic form of a GraphML-style document:
//! key definitions mapping opaque key ids to semantic attribute names, node
//! elements carrying `(key id, value)` data entries, and edge elements doing
//! the same plus source/target references.  Producing one from an actual
//! file is the job of an external markup parser; tests and demos build them
//! directly in code.

/// Maps an opaque key id (e.g. `"d4"`) to a semantic attribute name
/// (e.g. `"lat"`).  All key definitions are read before any node or edge.
#[derive(Debug, Clone)]
pub struct KeyDef {
    pub id: String,
    pub attr_name: String,
}

impl KeyDef {
    pub fn new(id: impl Into<String>, attr_name: impl Into<String>) -> Self {
        Self { id: id.into(), attr_name: attr_name.into() }
    }
}

/// A node element: a unique external id plus zero or more data entries.
#[derive(Debug, Clone)]
pub struct NodeElement {
    pub id: String,
    /// `(key id, raw value)` pairs, in document order.
    pub data: Vec<(String, String)>,
}

impl NodeElement {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), data: Vec::new() }
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.push((key.into(), value.into()));
        self
    }
}

/// An edge element: source and target node ids plus data entries.
#[derive(Debug, Clone)]
pub struct EdgeElement {
    pub source: String,
    pub target: String,
    /// `(key id, raw value)` pairs, in document order.
    pub data: Vec<(String, String)>,
}

impl EdgeElement {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self { source: source.into(), target: target.into(), data: Vec::new() }
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.push((key.into(), value.into()));
        self
    }
}

/// The complete attributed tree handed to [`crate::ingest::from_source`].
#[derive(Debug, Clone, Default)]
pub struct GraphSource {
    pub keys: Vec<KeyDef>,
    pub nodes: Vec<NodeElement>,
    pub edges: Vec<EdgeElement>,
}

impl GraphSource {
    pub fn new() -> Self {
        Self::default()
    }
}
