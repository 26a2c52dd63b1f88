//! `wayfind-core` — foundational types for the wayfind routing toolkit.
//!
//! This crate has no `wayfind-*` dependencies and minimal external ones
//! (only `rand`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                   |
//! |----------|--------------------------------------------|
//! | [`geo`]  | `GeoPoint`, haversine distance             |
//! | [`ids`]  | `NodeId`, `EdgeId`                         |
//! | [`rng`]  | `SampleRng` (seedable randomness source)   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod geo;
pub mod ids;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::GeoPoint;
pub use ids::{EdgeId, NodeId};
pub use rng::SampleRng;
