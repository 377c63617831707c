//! Connected-component extraction with endpoint seam repair.
//!
//! # Algorithm
//!
//! Depth-first flood from a seed road over shared endpoints:
//!
//! ```text
//! frontier = [seed]
//! while let Some(cur) = frontier.pop():
//!     record cur under cur.start and cur.end; append to result
//!     for r in pool (in order):
//!         r.start == cur.end  → r.start := cur.end             → frontier
//!         r.end   == cur.end  → reverse r; r.start := cur.end  → frontier
//! ```
//!
//! Overwriting `r.start` with the discovered coordinate makes both roads
//! carry the *same* value (metric offsets included), so adjacent roads never
//! disagree about a shared point even when the source parsed it twice.
//!
//! The seed is the first road of the pool.  Only `cur.end` is matched, so
//! roads reachable solely through the seed's `start` are not collected.
//!
//! # Storage
//!
//! Roads live in a single arena `Vec`; pool, frontier and result are lists
//! of arena positions, so no road is moved between containers while another
//! is being iterated.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, info};

use rg_core::{Coordinate, GraphConfig, JunctionId};

use crate::bounds::reference_point;
use crate::builder::RoadPool;
use crate::road::Road;
use crate::{GraphError, GraphResult};

// ── Incidence ─────────────────────────────────────────────────────────────────

/// Roads touching one shared coordinate.
#[derive(Clone, Debug)]
pub struct Junction {
    pub at: Coordinate,
    /// Positions in [`Component::roads`].
    pub roads: Vec<usize>,
}

/// Coordinate → incident roads, iterated in the order junctions were first
/// touched by the traversal.
#[derive(Clone, Debug, Default)]
pub struct Incidence {
    junctions: Vec<Junction>,
    lookup:    FxHashMap<Coordinate, JunctionId>,
}

impl Incidence {
    pub(crate) fn record(&mut self, at: Coordinate, road: usize) {
        let next = JunctionId(self.junctions.len() as u32);
        let id = *self.lookup.entry(at).or_insert(next);
        if id == next {
            self.junctions.push(Junction { at, roads: Vec::new() });
        }
        self.junctions[id.index()].roads.push(road);
    }

    pub fn len(&self) -> usize {
        self.junctions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.junctions.is_empty()
    }

    pub fn get(&self, at: &Coordinate) -> Option<&Junction> {
        self.lookup.get(at).map(|id| &self.junctions[id.index()])
    }

    pub fn iter(&self) -> impl Iterator<Item = (JunctionId, &Junction)> + '_ {
        self.junctions
            .iter()
            .enumerate()
            .map(|(i, j)| (JunctionId(i as u32), j))
    }
}

// ── Component ─────────────────────────────────────────────────────────────────

/// The single connected component kept from the pool.
#[derive(Clone, Debug, Default)]
pub struct Component {
    /// Kept roads in traversal (pop) order.  Endpoints carry metric offsets.
    pub roads: Vec<Road>,
    pub incidence: Incidence,
    /// Reference point of the metric projection; `None` for an empty pool.
    pub reference: Option<Coordinate>,
    /// Pool roads left behind.
    pub discarded: usize,
}

// ── Extraction ────────────────────────────────────────────────────────────────

/// Keep the component reachable from the first pool road.
///
/// # Errors
///
/// [`GraphError::DuplicateSegment`] if a road becomes an exact copy of an
/// already accepted road once it is oriented away from the joint
/// (`A→B` next to `B→A`).
pub fn extract_component(pool: RoadPool, config: &GraphConfig) -> GraphResult<Component> {
    let mut arena = pool.roads;
    let Some(reference) = reference_point(&arena) else {
        return Ok(Component::default());
    };
    debug!(%reference, "reference point");

    let mut waiting: Vec<usize> = (1..arena.len()).collect();
    let mut frontier: Vec<usize> = vec![0];
    let mut order: Vec<usize> = Vec::with_capacity(arena.len());
    let mut incidence = Incidence::default();

    arena[0].start.compute_offsets(&reference);
    arena[0].end.compute_offsets(&reference);
    let mut accepted: FxHashSet<_> = FxHashSet::default();
    accepted.insert(arena[0].key());

    while let Some(cur) = frontier.pop() {
        let pos = order.len();
        incidence.record(arena[cur].start, pos);
        incidence.record(arena[cur].end, pos);
        order.push(cur);

        if order.len() % config.progress_interval.max(1) == 0 {
            debug!(
                kept = order.len(),
                waiting = waiting.len(),
                frontier = frontier.len(),
                "extraction progress"
            );
        }
        if config.cap_reached(order.len()) {
            break;
        }

        let joint = arena[cur].end;
        let mut unmatched = Vec::with_capacity(waiting.len());
        for i in waiting.drain(..) {
            let road = &mut arena[i];
            if road.start == joint {
                // already oriented away from the joint
            } else if road.end == joint {
                road.reverse();
            } else {
                unmatched.push(i);
                continue;
            }

            road.start = joint;
            road.end.compute_offsets(&reference);
            if !accepted.insert(road.key()) {
                return Err(GraphError::DuplicateSegment { start: road.start, end: road.end });
            }
            frontier.push(i);
        }
        waiting = unmatched;
    }

    let discarded = waiting.len() + frontier.len();
    let mut slots: Vec<Option<Road>> = arena.into_iter().map(Some).collect();
    let roads: Vec<Road> = order.iter().filter_map(|&i| slots[i].take()).collect();

    info!(
        kept = roads.len(),
        discarded,
        junctions = incidence.len(),
        "extracted connected component"
    );

    Ok(Component { roads, incidence, reference: Some(reference), discarded })
}
