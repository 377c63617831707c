//! Input boundary: geometry features handed over by a vector-format parser.

/// One feature from the source dataset.
///
/// Only line strings carry road geometry.  Coordinate pairs are kept in the
/// axis order the source delivered them in (`[longitude, latitude]` for
/// GeoJSON); the pipeline never swaps them.
#[derive(Clone, Debug, PartialEq)]
pub enum Feature {
    LineString(Vec<[f64; 2]>),
    /// Any other geometry kind (points, polygons, …).  Ignored by the builder.
    Other { kind: String },
}

impl Feature {
    pub fn line_string(points: impl IntoIterator<Item = [f64; 2]>) -> Self {
        Feature::LineString(points.into_iter().collect())
    }

    pub fn other(kind: impl Into<String>) -> Self {
        Feature::Other { kind: kind.into() }
    }
}
