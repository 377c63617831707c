//! The finished road graph and its query surface.
//!
//! # Data layout
//!
//! Roads are stored in one `Vec` indexed by `RoadId`.  Adjacency is a
//! single flat array; the roads touching endpoint `side` of road `r` are
//!
//! ```text
//! connection_index[ r.conn(side).offset .. + r.conn(side).count ]
//! ```
//!
//! so endpoint-to-neighbours lookup is one slice, no hashing.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over the road segments in metric space answers
//! "which road is closest to this point" for picking and entity placement.

use rand::Rng;
use rstar::{AABB, PointDistance, RTree, RTreeObject};
use tracing::info;

use rg_core::{Coordinate, GraphConfig, RoadId};

use crate::bounds::{Bounds, compute_bounds};
use crate::builder::{BuildReport, GraphBuilder};
use crate::extract::{Component, extract_component};
use crate::feature::Feature;
use crate::index::build_connection_index;
use crate::road::{Road, Side, segment_distance_2};
use crate::GraphResult;

// ── R-tree segment entry ──────────────────────────────────────────────────────

/// Entry stored in the R-tree: one road segment in `[dist_lat, dist_long]`
/// metres.
#[derive(Clone)]
struct RoadEntry {
    a:  [f64; 2],
    b:  [f64; 2],
    id: RoadId,
}

impl RTreeObject for RoadEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.a, self.b)
    }
}

impl PointDistance for RoadEntry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        segment_distance_2(self.a, self.b, *point)
    }
}

// ── RoadGraph ─────────────────────────────────────────────────────────────────

/// One connected component of roads with metric coordinates and a flat
/// per-endpoint adjacency table.
///
/// Build with [`RoadGraph::build`] (whole pipeline) or
/// [`RoadGraph::from_component`] (indexing only).
pub struct RoadGraph {
    roads:            Vec<Road>,
    connection_index: Vec<RoadId>,
    bounds:           Bounds,
    reference:        Option<Coordinate>,
    spatial_idx:      RTree<RoadEntry>,
}

impl RoadGraph {
    /// A graph with no roads.
    pub fn empty() -> Self {
        Self {
            roads:            Vec::new(),
            connection_index: Vec::new(),
            bounds:           Bounds::default(),
            reference:        None,
            spatial_idx:      RTree::new(),
        }
    }

    /// Run the full pipeline: build the road pool from `features`, keep the
    /// component reachable from the first road, index adjacency, and compute
    /// the bounding box.
    ///
    /// # Errors
    ///
    /// `GraphError::Config` for an invalid `config`,
    /// `GraphError::DuplicateSegment` if the input repeats a segment, or if a
    /// reached road repeats a kept one once reoriented,
    /// `GraphError::IncidenceMismatch` if indexing finds an inconsistency.
    pub fn build<'a>(
        features: impl IntoIterator<Item = &'a Feature>,
        config:   &GraphConfig,
    ) -> GraphResult<(RoadGraph, BuildReport)> {
        config.validate()?;

        let mut builder = GraphBuilder::new();
        builder.add_features(features)?;
        let (pool, mut report) = builder.build();

        let component = extract_component(pool, config)?;
        report.discarded_roads = component.discarded;

        let graph = RoadGraph::from_component(component)?;
        Ok((graph, report))
    }

    /// Freeze an extracted component: assign ids, build the connection
    /// index, compute bounds, and bulk-load the R-tree.
    pub fn from_component(component: Component) -> GraphResult<Self> {
        let Component { mut roads, incidence, reference, .. } = component;

        let connection_index = build_connection_index(&mut roads, &incidence)?;
        let bounds = compute_bounds(&roads);

        let entries: Vec<RoadEntry> = roads
            .iter()
            .enumerate()
            .map(|(i, r)| RoadEntry {
                a:  r.start.metric(),
                b:  r.end.metric(),
                id: RoadId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        info!(
            roads = roads.len(),
            connections = connection_index.len(),
            width_m = bounds.width_m(),
            height_m = bounds.height_m(),
            "road graph ready"
        );

        Ok(Self { roads, connection_index, bounds, reference, spatial_idx })
    }

    // ── Dimensions & raw data ─────────────────────────────────────────────

    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }

    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    pub fn road(&self, id: RoadId) -> Option<&Road> {
        self.roads.get(id.index())
    }

    pub fn connection_index(&self) -> &[RoadId] {
        &self.connection_index
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Origin of the metric projection.  `None` for an empty graph.
    pub fn reference(&self) -> Option<Coordinate> {
        self.reference
    }

    // ── Adjacency ─────────────────────────────────────────────────────────

    /// Roads touching endpoint `side` of `id`, including `id` itself.
    ///
    /// Empty if `id` is out of range.
    #[inline]
    pub fn connections(&self, id: RoadId, side: Side) -> &[RoadId] {
        self.road(id)
            .and_then(|r| r.conn(side))
            .map_or(&[] as &[RoadId], |c| &self.connection_index[c.range()])
    }

    /// Every other road sharing an endpoint with `id`.
    pub fn neighbors(&self, id: RoadId) -> impl Iterator<Item = RoadId> + '_ {
        self.connections(id, Side::Start)
            .iter()
            .chain(self.connections(id, Side::End))
            .copied()
            .filter(move |&n| n != id)
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The road whose segment lies closest to `point` (`[dist_lat,
    /// dist_long]` metres).  `None` only for an empty graph.
    pub fn nearest_road(&self, point: [f64; 2]) -> Option<RoadId> {
        self.spatial_idx.nearest_neighbor(&point).map(|e| e.id)
    }

    /// A uniformly chosen road.  `None` for an empty graph.
    pub fn random_road<R: Rng>(&self, rng: &mut R) -> Option<RoadId> {
        if self.roads.is_empty() {
            return None;
        }
        Some(RoadId(rng.gen_range(0..self.roads.len()) as u32))
    }
}

impl Default for RoadGraph {
    fn default() -> Self {
        Self::empty()
    }
}
