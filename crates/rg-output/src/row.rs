//! Serialized map records.
//!
//! Field names are part of the file contract and match what consumers read
//! (`minDistLat`, `connIndexStart`, `connectionRoadIndexList`, …).  There is
//! no version field.

use serde::{Deserialize, Serialize};
use tracing::warn;

use rg_core::{Coordinate, RoadId};
use rg_graph::{ConnRange, Road, RoadGraph};

use crate::{OutputError, OutputResult};

/// One road endpoint: angular position plus metric offsets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoordinateRecord {
    pub lat:       f64,
    pub long:      f64,
    pub dist_lat:  f64,
    pub dist_long: f64,
}

impl From<&Coordinate> for CoordinateRecord {
    fn from(c: &Coordinate) -> Self {
        Self { lat: c.lat, long: c.long, dist_lat: c.dist_lat, dist_long: c.dist_long }
    }
}

/// One road with its two adjacency runs.  An unassigned run is written as
/// index `-1`, count `0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadRecord {
    pub start:            CoordinateRecord,
    pub end:              CoordinateRecord,
    pub conn_index_start: i64,
    pub conn_count_start: u32,
    pub conn_index_end:   i64,
    pub conn_count_end:   u32,
}

fn wire_conn(conn: Option<ConnRange>) -> (i64, u32) {
    conn.map_or((-1, 0), |c| (i64::from(c.offset), c.count))
}

impl From<&Road> for RoadRecord {
    fn from(r: &Road) -> Self {
        let (conn_index_start, conn_count_start) = wire_conn(r.conn_start);
        let (conn_index_end, conn_count_end) = wire_conn(r.conn_end);
        Self {
            start: (&r.start).into(),
            end: (&r.end).into(),
            conn_index_start,
            conn_count_start,
            conn_index_end,
            conn_count_end,
        }
    }
}

/// The complete output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapFile {
    pub min_dist_lat:  f64,
    pub max_dist_lat:  f64,
    pub min_dist_long: f64,
    pub max_dist_long: f64,
    pub roads:         Vec<RoadRecord>,
    pub connection_road_index_list: Vec<i64>,
}

impl MapFile {
    pub fn from_graph(graph: &RoadGraph) -> Self {
        let b = graph.bounds();
        Self {
            min_dist_lat:  b.min_dist_lat,
            max_dist_lat:  b.max_dist_lat,
            min_dist_long: b.min_dist_long,
            max_dist_long: b.max_dist_long,
            roads:         graph.roads().iter().map(RoadRecord::from).collect(),
            connection_road_index_list: graph
                .connection_index()
                .iter()
                .map(|&id| RoadId::to_wire(Some(id)))
                .collect(),
        }
    }

    /// The road indices listed for one adjacency run, if it is in range.
    pub fn connections(&self, index: i64, count: u32) -> Option<&[i64]> {
        let start = usize::try_from(index).ok()?;
        let end = start.checked_add(count as usize)?;
        self.connection_road_index_list.get(start..end)
    }

    /// Check that every adjacency run lies inside the connection list and
    /// that every listed index names an existing road.
    ///
    /// Roads whose metric endpoints coincide are logged but kept: dropping
    /// them would shift every later index.
    pub fn validate(&self) -> OutputResult<()> {
        let road_count = self.roads.len() as i64;
        for (i, r) in self.roads.iter().enumerate() {
            for (side, index, count) in [
                ("start", r.conn_index_start, r.conn_count_start),
                ("end", r.conn_index_end, r.conn_count_end),
            ] {
                if self.connections(index, count).is_none() {
                    return Err(OutputError::InvalidMap(format!(
                        "road {i}: {side} run {index}+{count} outside connection list of length {}",
                        self.connection_road_index_list.len(),
                    )));
                }
            }
            if r.start.dist_lat == r.end.dist_lat && r.start.dist_long == r.end.dist_long {
                warn!(road = i, "zero-length road in metric space");
            }
        }

        if let Some(bad) = self
            .connection_road_index_list
            .iter()
            .find(|&&n| !(0..road_count).contains(&n))
        {
            return Err(OutputError::InvalidMap(format!(
                "connection list names road {bad}, but only {road_count} roads exist",
            )));
        }
        Ok(())
    }
}
