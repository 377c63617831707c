//! `rg-output` — map file writer and reader for the rust_rg pipeline.
//!
//! The finished [`RoadGraph`](rg_graph::RoadGraph) is converted into a
//! [`MapFile`] and written as one JSON document:
//!
//! ```text
//! { minDistLat, maxDistLat, minDistLong, maxDistLong,
//!   roads: [ { start, end, connIndexStart, connCountStart,
//!              connIndexEnd, connCountEnd } ],
//!   connectionRoadIndexList: [ … ] }
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use rg_output::{JsonWriter, MapFile};
//!
//! let mut w = JsonWriter::new(Path::new("munich.json"))?;
//! w.write_map(&MapFile::from_graph(&graph))?;
//! w.finish()?;
//! ```

pub mod error;
pub mod json;
pub mod row;


pub use error::{OutputError, OutputResult};
pub use json::{JsonWriter, read_map, read_map_file, to_writer};
pub use row::{CoordinateRecord, MapFile, RoadRecord};
