//! Flat adjacency index construction.
//!
//! # Layout
//!
//! Every junction owns one contiguous run of `connection_index`, holding the
//! ids of all roads that touch it (each exactly once).  A road finds the run
//! for either endpoint through `conn_start` / `conn_end`:
//!
//! ```text
//! connection_index[ conn.offset .. conn.offset + conn.count ]
//! ```
//!
//! Runs are laid out in junction order, so the array length equals the sum
//! of all junction degrees, i.e. `2 × road_count`.

use tracing::debug;

use rg_core::RoadId;

use crate::extract::Incidence;
use crate::road::{ConnRange, Road};
use crate::{GraphError, GraphResult};

/// Assign sequential ids to `roads`, then fill every road's `conn_start` /
/// `conn_end` from `incidence` and return the flat index.
///
/// `incidence` must refer to `roads` by position.
///
/// # Errors
///
/// [`GraphError::IncidenceMismatch`] if a road is filed under a coordinate
/// that is neither of its endpoints.
pub fn build_connection_index(roads: &mut [Road], incidence: &Incidence) -> GraphResult<Vec<RoadId>> {
    for (i, road) in roads.iter_mut().enumerate() {
        road.index = Some(RoadId(i as u32));
    }

    let mut flat: Vec<RoadId> = Vec::with_capacity(roads.len() * 2);
    for (_, junction) in incidence.iter() {
        let range = ConnRange {
            offset: flat.len() as u32,
            count:  junction.roads.len() as u32,
        };
        for &pos in &junction.roads {
            let id = RoadId(pos as u32);
            let mismatch = || GraphError::IncidenceMismatch { road: id, coordinate: junction.at };
            let road = roads.get_mut(pos).ok_or_else(mismatch)?;
            let side = road.side_of(&junction.at).ok_or_else(mismatch)?;
            flat.push(id);
            road.set_conn(side, range);
        }
    }

    debug!(entries = flat.len(), junctions = incidence.len(), "built connection index");
    Ok(flat)
}
