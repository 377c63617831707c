//! `rg-graph` — road segment building, connectivity extraction, adjacency
//! indexing, and spatial queries.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`feature`] | `Feature` — input geometry boundary                         |
//! | [`road`]    | `Road`, `Side`, `ConnRange`                                 |
//! | [`builder`] | `GraphBuilder`, `RoadPool`, `BuildReport`                   |
//! | [`extract`] | `extract_component`, `Component`, `Incidence`               |
//! | [`index`]   | `build_connection_index`                                    |
//! | [`bounds`]  | `reference_point`, `compute_bounds`, `Bounds`               |
//! | [`graph`]   | `RoadGraph` (flat adjacency + R-tree)                       |
//! | [`error`]   | `GraphError`, `GraphResult<T>`                              |
//!
//! # Pipeline
//!
//! ```text
//! features → GraphBuilder → RoadPool → extract_component → Component
//!          → build_connection_index + compute_bounds → RoadGraph
//! ```
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Bounding-box reduction runs on Rayon.                     |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.        |

pub mod bounds;
pub mod builder;
pub mod error;
pub mod extract;
pub mod feature;
pub mod graph;
pub mod index;
pub mod road;


pub use bounds::{Bounds, compute_bounds, reference_point};
pub use builder::{BuildReport, GraphBuilder, RoadPool};
pub use error::{GraphError, GraphResult};
pub use extract::{Component, Incidence, Junction, extract_component};
pub use feature::Feature;
pub use graph::RoadGraph;
pub use index::build_connection_index;
pub use road::{ConnRange, Road, Side};
