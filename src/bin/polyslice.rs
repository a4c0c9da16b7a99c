use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use polyslice::io::{Document, Feature, FeatureCollection, Geometry};
use polyslice::operations::{split_geometry, HoleHandling, SliceOptions, SplitPieces};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "polyslice")]
#[command(about = "Split a GeoJSON polygon or line along a splitter line")]
struct Cmd {
    /// GeoJSON file holding the Polygon or LineString to split
    #[arg(long)]
    target: PathBuf,

    /// GeoJSON file holding the splitter LineString
    #[arg(long)]
    splitter: PathBuf,

    /// Output file for the resulting FeatureCollection; stdout if omitted
    #[arg(long)]
    out: Option<PathBuf>,

    /// Cutting-strip offsets to try, widest first
    #[arg(long, value_delimiter = ',')]
    offsets: Option<Vec<f64>>,

    /// Distance within which a fragment counts as touching the splitter
    #[arg(long)]
    tolerance: Option<f64>,

    /// Drop holes from fragments when a side comes out multi-part
    #[arg(long)]
    drop_multipart_holes: bool,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    init_tracing(cmd.verbose);

    let target = read_geometry(&cmd.target)?;
    let splitter = match read_geometry(&cmd.splitter)? {
        geo::Geometry::LineString(line) => line,
        _ => bail!("{}: splitter must be a LineString", cmd.splitter.display()),
    };

    let options = options(&cmd);
    let features = match split_geometry(target, splitter, &options)? {
        SplitPieces::Polygon(result) => {
            let outcome = if result.is_split() { "split" } else { "unchanged" };
            if let Some(reason) = result.reason() {
                tracing::warn!(%reason, "target left unchanged");
            }
            result
                .pieces()
                .iter()
                .enumerate()
                .map(|(i, piece)| {
                    Feature::new(Geometry::from(piece))
                        .with_property("piece", i)
                        .with_property("outcome", outcome)
                })
                .collect()
        }
        SplitPieces::Line(lines) => lines
            .iter()
            .enumerate()
            .map(|(i, line)| Feature::new(Geometry::from(line)).with_property("piece", i))
            .collect(),
    };

    let json = serde_json::to_string_pretty(&FeatureCollection::new(features))?;
    match &cmd.out {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("writing {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn read_geometry(path: &Path) -> Result<geo::Geometry<f64>> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let geometry = Document::parse(&text)
        .and_then(Document::into_geometry)
        .and_then(|g| g.to_geo())
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(geometry)
}

fn options(cmd: &Cmd) -> SliceOptions {
    let mut options = SliceOptions::default();
    if let Some(ladder) = &cmd.offsets {
        options = options.with_offset_ladder(ladder.clone());
    }
    if let Some(tolerance) = cmd.tolerance {
        options = options.with_overlap_tolerance(tolerance);
    }
    if cmd.drop_multipart_holes {
        options = options.with_hole_handling(HoleHandling::DropFromMultipart);
    }
    options
}
