//! GeoJSON → `Feature` adapter.
//!
//! Positions are handed over in file order (`[longitude, latitude]`), only
//! truncated to their first two values; altitude is dropped.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use geojson::{GeoJson, Value};

use rg_graph::Feature;

/// Read every feature from a GeoJSON file.
pub fn load_features(path: &Path) -> Result<Vec<Feature>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    parse_features(BufReader::new(file)).with_context(|| format!("parsing {}", path.display()))
}

/// Read every feature from a GeoJSON document.  A bare geometry or a single
/// feature is accepted as a one-element collection.
pub fn parse_features<R: Read>(reader: R) -> Result<Vec<Feature>> {
    let geometries = match GeoJson::from_reader(reader)? {
        GeoJson::FeatureCollection(fc) => fc.features.into_iter().map(|f| f.geometry).collect(),
        GeoJson::Feature(f) => vec![f.geometry],
        GeoJson::Geometry(g) => vec![Some(g)],
    };

    geometries
        .into_iter()
        .map(|g| match g {
            Some(g) => convert(g.value),
            None => Ok(Feature::other("null")),
        })
        .collect()
}

fn convert(value: Value) -> Result<Feature> {
    let kind = match value {
        Value::LineString(positions) => {
            let mut points = Vec::with_capacity(positions.len());
            for p in positions {
                let [a, b, ..] = p[..] else {
                    bail!("position with {} values, need at least 2", p.len());
                };
                points.push([a, b]);
            }
            return Ok(Feature::LineString(points));
        }
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    };
    Ok(Feature::other(kind))
}
