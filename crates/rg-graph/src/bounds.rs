//! Reference point selection and the metric bounding box.
//!
//! The per-coordinate projection itself lives in [`rg_core::geo`]; this
//! module works on whole road lists.

use rg_core::Coordinate;

use crate::road::Road;

/// Axis-aligned extent of all endpoints in metres from the reference point.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min_dist_lat: f64,
    pub max_dist_lat: f64,
    pub min_dist_long: f64,
    pub max_dist_long: f64,
}

impl Bounds {
    fn at(c: &Coordinate) -> Self {
        Self {
            min_dist_lat: c.dist_lat,
            max_dist_lat: c.dist_lat,
            min_dist_long: c.dist_long,
            max_dist_long: c.dist_long,
        }
    }

    fn union(self, other: Self) -> Self {
        Self {
            min_dist_lat: self.min_dist_lat.min(other.min_dist_lat),
            max_dist_lat: self.max_dist_lat.max(other.max_dist_lat),
            min_dist_long: self.min_dist_long.min(other.min_dist_long),
            max_dist_long: self.max_dist_long.max(other.max_dist_long),
        }
    }

    /// `true` if `c`'s metric offsets lie inside the box (edges included).
    pub fn contains(&self, c: &Coordinate) -> bool {
        (self.min_dist_lat..=self.max_dist_lat).contains(&c.dist_lat)
            && (self.min_dist_long..=self.max_dist_long).contains(&c.dist_long)
    }

    pub fn width_m(&self) -> f64 {
        self.max_dist_lat - self.min_dist_lat
    }

    pub fn height_m(&self) -> f64 {
        self.max_dist_long - self.min_dist_long
    }
}

fn road_bounds(road: &Road) -> Bounds {
    Bounds::at(&road.start).union(Bounds::at(&road.end))
}

/// The endpoint with the smallest latitude, ties broken by the smallest
/// longitude.  `None` for an empty list.
pub fn reference_point(roads: &[Road]) -> Option<Coordinate> {
    roads
        .iter()
        .flat_map(|r| [r.start, r.end])
        .reduce(|best, c| if c.precedes(&best) { c } else { best })
}

/// Min/max of every endpoint's metric offsets.
///
/// An empty list yields `Bounds::default()` (a degenerate all-zero range).
#[cfg(not(feature = "parallel"))]
pub fn compute_bounds(roads: &[Road]) -> Bounds {
    roads
        .iter()
        .map(road_bounds)
        .reduce(Bounds::union)
        .unwrap_or_default()
}

/// Min/max of every endpoint's metric offsets, reduced on the Rayon pool.
///
/// An empty list yields `Bounds::default()` (a degenerate all-zero range).
#[cfg(feature = "parallel")]
pub fn compute_bounds(roads: &[Road]) -> Bounds {
    use rayon::prelude::*;

    roads
        .par_iter()
        .map(road_bounds)
        .reduce_with(Bounds::union)
        .unwrap_or_default()
}
