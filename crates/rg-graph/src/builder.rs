//! Turn raw line-string features into a pool of road segments.
//!
//! Every consecutive pair of points in a line string becomes one directed
//! [`Road`].  Short line strings and zero-length segments are routine noise
//! in real datasets; they are logged, counted, and skipped.  An exact
//! duplicate segment is not noise: it aborts the build.

use rustc_hash::FxHashSet;
use tracing::{info, warn};

use rg_core::Coordinate;

use crate::feature::Feature;
use crate::road::Road;
use crate::{GraphError, GraphResult};

// ── BuildReport ───────────────────────────────────────────────────────────────

/// Counters describing what the builder (and later the extractor) did with
/// the input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Features seen, of any geometry kind.
    pub features: usize,
    /// Non-line-string features ignored.
    pub ignored_geometries: usize,
    /// Line strings with fewer than two points.
    pub malformed_line_strings: usize,
    /// Segments whose start equals their end.
    pub degenerate_segments: usize,
    /// Roads that entered the pool.
    pub built_roads: usize,
    /// Pool roads not reachable from the seed (or cut off by the cap).
    pub discarded_roads: usize,
}

// ── RoadPool ──────────────────────────────────────────────────────────────────

/// Unique roads in the order they were built.
///
/// The order carries no meaning for consumers but makes seed selection and
/// traversal deterministic.
#[derive(Clone, Debug, Default)]
pub struct RoadPool {
    pub roads: Vec<Road>,
}

impl RoadPool {
    pub fn len(&self) -> usize {
        self.roads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Accumulate features, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use rg_graph::{Feature, GraphBuilder};
///
/// let mut b = GraphBuilder::new();
/// b.add_feature(&Feature::line_string([[11.50, 48.10], [11.51, 48.10], [11.52, 48.11]])).unwrap();
/// let (pool, report) = b.build();
/// assert_eq!(pool.len(), 2);
/// assert_eq!(report.built_roads, 2);
/// ```
#[derive(Default)]
pub struct GraphBuilder {
    roads:  Vec<Road>,
    seen:   FxHashSet<((u64, u64), (u64, u64))>,
    report: BuildReport,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every feature in order, stopping at the first duplicate segment.
    pub fn add_features<'a>(&mut self, features: impl IntoIterator<Item = &'a Feature>) -> GraphResult<()> {
        for feature in features {
            self.add_feature(feature)?;
        }
        Ok(())
    }

    pub fn add_feature(&mut self, feature: &Feature) -> GraphResult<()> {
        self.report.features += 1;
        match feature {
            Feature::LineString(points) => self.add_line_string(points),
            Feature::Other { .. } => {
                self.report.ignored_geometries += 1;
                Ok(())
            }
        }
    }

    /// Split a line string into segments.  Pairs are stored as received:
    /// element 0 becomes `lat`, element 1 becomes `long`.
    pub fn add_line_string(&mut self, points: &[[f64; 2]]) -> GraphResult<()> {
        if points.len() < 2 {
            warn!(points = points.len(), "found road with fewer than two points, ignoring");
            self.report.malformed_line_strings += 1;
            return Ok(());
        }

        for pair in points.windows(2) {
            let start = Coordinate::new(pair[0][0], pair[0][1]);
            let end = Coordinate::new(pair[1][0], pair[1][1]);
            self.add_segment(start, end)?;
        }
        Ok(())
    }

    /// Add one directed segment.  Returns `Ok(false)` if it was degenerate
    /// and skipped.
    pub fn add_segment(&mut self, start: Coordinate, end: Coordinate) -> GraphResult<bool> {
        let Some(road) = Road::new(start, end) else {
            warn!(%start, "zero-length road segment, skipping");
            self.report.degenerate_segments += 1;
            return Ok(false);
        };

        if !self.seen.insert(road.key()) {
            return Err(GraphError::DuplicateSegment { start, end });
        }
        self.roads.push(road);
        self.report.built_roads += 1;
        Ok(true)
    }

    pub fn road_count(&self) -> usize {
        self.roads.len()
    }

    /// Consume the builder and hand over the pool.
    pub fn build(self) -> (RoadPool, BuildReport) {
        info!(
            roads = self.report.built_roads,
            features = self.report.features,
            skipped = self.report.malformed_line_strings + self.report.degenerate_segments,
            "built road pool"
        );
        (RoadPool { roads: self.roads }, self.report)
    }
}
