//! JSON backend.
//!
//! Writes a single `MapFile` document.  The reader validates adjacency data
//! before handing the map out, since consumers index into it without bounds
//! checks.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::info;

use crate::{MapFile, OutputResult};

/// Writes a map file to disk.
pub struct JsonWriter {
    out:      BufWriter<File>,
    pretty:   bool,
    finished: bool,
}

impl JsonWriter {
    /// Create (or truncate) the file at `path`.
    pub fn new(path: &Path) -> OutputResult<Self> {
        let out = BufWriter::new(File::create(path)?);
        Ok(Self { out, pretty: false, finished: false })
    }

    /// Indent the output for human readers.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn write_map(&mut self, map: &MapFile) -> OutputResult<()> {
        to_writer(&mut self.out, map, self.pretty)?;
        info!(
            roads = map.roads.len(),
            connections = map.connection_road_index_list.len(),
            "map written"
        );
        Ok(())
    }

    /// Flush the underlying file.
    ///
    /// Idempotent; safe to call more than once.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}

/// Serialize `map` into any writer.
pub fn to_writer<W: Write>(writer: W, map: &MapFile, pretty: bool) -> OutputResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, map)?;
    } else {
        serde_json::to_writer(writer, map)?;
    }
    Ok(())
}

/// Parse and validate a map document.
///
/// # Errors
///
/// [`OutputError::Json`](crate::OutputError::Json) for malformed JSON or a
/// missing field, [`OutputError::InvalidMap`](crate::OutputError::InvalidMap)
/// for inconsistent adjacency data.
pub fn read_map<R: Read>(reader: R) -> OutputResult<MapFile> {
    let map: MapFile = serde_json::from_reader(reader)?;
    map.validate()?;
    info!(
        roads = map.roads.len(),
        connections = map.connection_road_index_list.len(),
        "map loaded"
    );
    Ok(map)
}

/// [`read_map`] from a file path.
pub fn read_map_file(path: &Path) -> OutputResult<MapFile> {
    read_map(BufReader::new(File::open(path)?))
}
