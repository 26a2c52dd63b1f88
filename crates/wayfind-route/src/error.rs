//! Route-subsystem error type.
//!
//! Only genuine failures live here.  "Goal unreachable" and "no sampled walk
//! reached the goal" are ordinary outcomes and are modelled as `None` results
//! by [`crate::router::shortest_path`] and [`crate::sampler::sample_route`],
//! never as errors.

use thiserror::Error;

/// Errors produced by `wayfind-route`.
#[derive(Debug, Error)]
pub enum RouteError {
    /// The attributed graph source contains no node elements at all.
    /// A caller receiving this has no graph to query and should abort the
    /// requested operation.
    #[error("graph source contains no nodes")]
    EmptySource,

    /// An attribute value was present but could not be parsed into its
    /// expected type.  Surfaced at ingestion time, once per attribute,
    /// instead of silently defaulting to zero at every read.
    #[error("element {element:?}: attribute {key:?} has unparsable value {value:?}")]
    BadAttribute {
        element: String,
        key: String,
        value: String,
    },

    /// A query or delay entry references a node id absent from the graph.
    #[error("node {0:?} not found in graph")]
    UnknownNode(String),

    /// A query coordinate has no graph node within the snap tolerance.
    #[error("no node within snap tolerance of ({lat:.6}, {lon:.6})")]
    SnapFailed { lat: f64, lon: f64 },

    /// Signal delays are waiting times and must be non-negative.
    #[error("negative signal delay {secs} s at {at}")]
    NegativeDelay { at: String, secs: f64 },

    #[error("delay table parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RouteResult<T> = Result<T, RouteError>;
