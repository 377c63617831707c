//! `mapgen` — convert a GeoJSON road export into a connected map file.
//!
//! Reads every `LineString` feature, keeps the component reachable from the
//! first road, and writes the metric map with its flat adjacency index.
//!
//! Run with:
//!   cargo run -p mapgen --release -- map/munich.geojson -o munich.json

mod input;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::{Level, info};

use rg_core::GraphConfig;
use rg_graph::RoadGraph;
use rg_output::{JsonWriter, MapFile};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GeoJSON file with the road line strings.
    input: PathBuf,

    /// Where to write the map file.
    #[arg(short, long, default_value = "map.json")]
    output: PathBuf,

    /// Stop once this many connected roads have been collected.
    #[arg(long)]
    max_roads: Option<usize>,

    /// Log traversal progress every N roads (visible with --verbose).
    #[arg(long, default_value_t = 10)]
    progress_interval: usize,

    /// Indent the JSON output.
    #[arg(long)]
    pretty: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let config = GraphConfig {
        max_roads: args.max_roads,
        progress_interval: args.progress_interval,
    };

    let t0 = Instant::now();
    info!(path = %args.input.display(), "loading features");
    let features = input::load_features(&args.input)?;

    let (graph, report) = RoadGraph::build(&features, &config)?;
    info!(
        features = report.features,
        built = report.built_roads,
        kept = graph.road_count(),
        discarded = report.discarded_roads,
        "reduced to connected road pieces"
    );

    let bounds = graph.bounds();
    info!(
        "suggested map size at least {:.1}x{:.1} meters",
        bounds.max_dist_lat, bounds.max_dist_long
    );

    let mut writer = JsonWriter::new(&args.output)?.pretty(args.pretty);
    writer.write_map(&MapFile::from_graph(&graph))?;
    writer.finish()?;

    info!(path = %args.output.display(), elapsed_ms = t0.elapsed().as_millis() as u64, "done");
    Ok(())
}
