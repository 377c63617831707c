//! Geographic coordinate type and metric projection.
//!
//! `Coordinate` keeps the angular position exactly as it was parsed (`f64`,
//! never rounded) because graph connectivity is decided by **bit-exact**
//! equality of endpoints.  The metric offsets (`dist_lat`, `dist_long`) are
//! derived data: they start at zero and are filled in by
//! [`Coordinate::compute_offsets`] once a reference point is known.
//!
//! # Projection
//!
//! The projection is an independent-axis, equirectangular-style
//! approximation: each axis offset is the great-circle distance along that
//! axis alone.  It is only meaningful for city-sized extents.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Mean Earth radius in kilometres (IUGG), as used by common haversine tools.
pub const EARTH_RADIUS_KM: f64 = 6_371.008_8;

// ── Coordinate ────────────────────────────────────────────────────────────────

/// A geographic point plus its metric offset from a reference point.
///
/// Equality and hashing consider **only** `lat` and `long`, compared by bit
/// pattern.  Two coordinates parsed from the same text are equal; two that
/// differ in the last ulp are not.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lat: f64,
    pub long: f64,
    /// Metres from the reference point along the latitude axis.
    /// Zero until [`compute_offsets`](Self::compute_offsets) runs.
    pub dist_lat: f64,
    /// Metres from the reference point along the longitude axis.
    pub dist_long: f64,
}

impl Coordinate {
    #[inline]
    pub fn new(lat: f64, long: f64) -> Self {
        Self { lat, long, dist_lat: 0.0, dist_long: 0.0 }
    }

    /// Store this coordinate's metric offsets relative to `reference`.
    pub fn compute_offsets(&mut self, reference: &Coordinate) {
        let (dist_lat, dist_long) = project_to_metric(reference, self);
        self.dist_lat = dist_lat;
        self.dist_long = dist_long;
    }

    /// Metric position as `[dist_lat, dist_long]`.
    #[inline]
    pub fn metric(&self) -> [f64; 2] {
        [self.dist_lat, self.dist_long]
    }

    /// Bit patterns of `(lat, long)`, the identity of this point.
    #[inline]
    pub fn key(&self) -> (u64, u64) {
        (self.lat.to_bits(), self.long.to_bits())
    }

    /// Ordering used for reference-point selection: latitude first, then
    /// longitude.
    #[inline]
    pub fn precedes(&self, other: &Coordinate) -> bool {
        self.lat < other.lat || (self.lat == other.lat && self.long < other.long)
    }
}

impl PartialEq for Coordinate {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.long)
    }
}

// ── Distance & projection ─────────────────────────────────────────────────────

/// Haversine great-circle distance in kilometres between two
/// `(lat, long)` pairs given in degrees.
pub fn haversine_km(a: (f64, f64), b: (f64, f64)) -> f64 {
    let d_lat = (b.0 - a.0).to_radians();
    let d_lon = (b.1 - a.1).to_radians();

    let lat1 = a.0.to_radians();
    let lat2 = b.0.to_radians();

    let h = (d_lat * 0.5).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Project `coordinate` to metres relative to `reference`.
///
/// Returns `(dist_lat, dist_long)`.  Both are unsigned great-circle lengths
/// measured along a single axis:
///
/// - `dist_lat`  = distance from `(reference.lat, 0)` to `(coordinate.lat, 0)`
/// - `dist_long` = distance from `(0, reference.long)` to `(0, coordinate.long)`
pub fn project_to_metric(reference: &Coordinate, coordinate: &Coordinate) -> (f64, f64) {
    let dist_lat = haversine_km((reference.lat, 0.0), (coordinate.lat, 0.0)) * 1_000.0;
    let dist_long = haversine_km((0.0, reference.long), (0.0, coordinate.long)) * 1_000.0;
    (dist_lat, dist_long)
}
