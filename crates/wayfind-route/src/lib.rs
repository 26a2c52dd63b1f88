//! `wayfind-route` — road-network graph, routing, and sampling.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`source`]  | `GraphSource` attributed-tree input contract                |
//! | [`network`] | `RoadGraph` (CSR + R-tree), `RoadGraphBuilder`, snapping    |
//! | [`ingest`]  | `from_source`, `AttrNames` attribute resolution             |
//! | [`delay`]   | `SignalDelays`, CSV delay loading                           |
//! | [`cost`]    | `CostModel` trait, `DistanceCost`, `TravelTimeCost`         |
//! | [`router`]  | `shortest_path`, `Route`, `QueryPoint`                      |
//! | [`sampler`] | `sample_route` random-walk baseline                         |
//! | [`format`]  | `dash_joined` route rendering                               |
//! | [`error`]   | `RouteError`, `RouteResult<T>`                              |
//!
//! # Typical flow
//!
//! ```text
//! GraphSource ── ingest::from_source ──> RoadGraph
//!                                          │
//!            QueryPoint ── router::resolve ┤
//!                                          ├─> router::shortest_path ─> Route
//!                                          └─> sampler::sample_route ─> SampledRoute
//! ```
//!
//! The graph and the delay table are immutable after construction; queries
//! borrow them read-only and own all of their search state.

pub mod cost;
pub mod delay;
pub mod error;
pub mod format;
pub mod ingest;
pub mod network;
pub mod router;
pub mod sampler;
pub mod source;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cost::{AVERAGE_SPEED_MPS, CostModel, DistanceCost, TravelTimeCost};
pub use delay::{SignalDelays, load_delays_csv, load_delays_reader};
pub use error::{RouteError, RouteResult};
pub use format::dash_joined;
pub use ingest::{AttrNames, from_source};
pub use network::{RoadGraph, RoadGraphBuilder, SNAP_TOLERANCE_M};
pub use router::{QueryPoint, Route, resolve, shortest_path};
pub use sampler::{SampledRoute, sample_route};
