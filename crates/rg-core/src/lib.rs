//! `rg-core` — foundational types for the `rust_rg` road graph pipeline.
//!
//! This crate is a dependency of every other `rg-*` crate.  It has no
//! `rg-*` dependencies and only `thiserror` (plus optional `serde`) as
//! external ones.
//!
//! # What lives here
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`geo`]    | `Coordinate`, haversine distance, metric projection        |
//! | [`ids`]    | `RoadId`, `JunctionId`                                     |
//! | [`config`] | `GraphConfig`                                              |
//! | [`error`]  | `RgError`, `RgResult`                                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::GraphConfig;
pub use error::{RgError, RgResult};
pub use geo::{Coordinate, haversine_km, project_to_metric};
pub use ids::{JunctionId, RoadId};
