//! Directed road segment and its adjacency metadata.

use std::ops::Range;

use rg_core::{Coordinate, RoadId};

/// Which endpoint of a road.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Start,
    End,
}

/// A run of the flat connection index: `offset .. offset + count`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConnRange {
    pub offset: u32,
    pub count: u32,
}

impl ConnRange {
    #[inline]
    pub fn range(self) -> Range<usize> {
        let start = self.offset as usize;
        start..start + self.count as usize
    }
}

/// One directed segment between two distinct coordinates.
///
/// `index`, `conn_start` and `conn_end` stay `None` until the adjacency
/// indexer runs on the finished component.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Road {
    pub start: Coordinate,
    pub end: Coordinate,
    pub index: Option<RoadId>,
    pub conn_start: Option<ConnRange>,
    pub conn_end: Option<ConnRange>,
}

impl Road {
    /// Build a segment, or `None` if both endpoints are the same point.
    pub fn new(start: Coordinate, end: Coordinate) -> Option<Self> {
        if start == end {
            return None;
        }
        Some(Self { start, end, index: None, conn_start: None, conn_end: None })
    }

    #[inline]
    pub fn endpoint(&self, side: Side) -> &Coordinate {
        match side {
            Side::Start => &self.start,
            Side::End => &self.end,
        }
    }

    /// The side at which this road touches `at`, if any.
    #[inline]
    pub fn side_of(&self, at: &Coordinate) -> Option<Side> {
        if self.start == *at {
            Some(Side::Start)
        } else if self.end == *at {
            Some(Side::End)
        } else {
            None
        }
    }

    #[inline]
    pub fn conn(&self, side: Side) -> Option<ConnRange> {
        match side {
            Side::Start => self.conn_start,
            Side::End => self.conn_end,
        }
    }

    pub(crate) fn set_conn(&mut self, side: Side, range: ConnRange) {
        match side {
            Side::Start => self.conn_start = Some(range),
            Side::End => self.conn_end = Some(range),
        }
    }

    /// Swap the endpoints in place.
    #[inline]
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.start, &mut self.end);
    }

    /// Identity of the ordered segment.
    #[inline]
    pub fn key(&self) -> ((u64, u64), (u64, u64)) {
        (self.start.key(), self.end.key())
    }

    /// Shortest metric distance from `point` (`[dist_lat, dist_long]`) to
    /// this segment.
    pub fn distance_to(&self, point: [f64; 2]) -> f64 {
        segment_distance_2(self.start.metric(), self.end.metric(), point).sqrt()
    }
}

/// Squared distance from `p` to the segment `a`–`b`.
///
/// `p` is projected onto the segment and clamped to its ends; a segment
/// whose ends coincide is treated as a point.
pub(crate) fn segment_distance_2(a: [f64; 2], b: [f64; 2], p: [f64; 2]) -> f64 {
    let (dx, dy) = (b[0] - a[0], b[1] - a[1]);

    let len_sq = dx * dx + dy * dy;
    let t = if len_sq > 0.0 {
        (((p[0] - a[0]) * dx + (p[1] - a[1]) * dy) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let (nx, ny) = (a[0] + t * dx, a[1] + t * dy);
    (p[0] - nx).powi(2) + (p[1] - ny).powi(2)
}

impl PartialEq for Road {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl Eq for Road {}
