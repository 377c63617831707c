//! Graph-pipeline error type.
//!
//! Only structural invariant violations are errors.  Noisy input (short
//! line strings, zero-length segments) is dropped, logged, and counted in
//! [`BuildReport`](crate::BuildReport) instead.

use thiserror::Error;

use rg_core::{Coordinate, RgError, RoadId};

/// Errors produced by `rg-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The same ordered segment was produced twice.  Indicates corrupt input
    /// geometry; the build is aborted rather than silently merged.
    #[error("duplicate road segment {start} -> {end}")]
    DuplicateSegment { start: Coordinate, end: Coordinate },

    /// A road filed under a junction touches it with neither endpoint.
    #[error("{road} is filed under {coordinate} but neither endpoint matches")]
    IncidenceMismatch { road: RoadId, coordinate: Coordinate },

    #[error(transparent)]
    Config(#[from] RgError),
}

pub type GraphResult<T> = Result<T, GraphError>;
