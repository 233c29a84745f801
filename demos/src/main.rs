// Copyright 2025 the Kdplane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-line driver: load a point file into a 2-d tree and a brute-force set,
//! then run range and nearest-neighbor queries against them.
//!
//! Run:
//! - `cargo run -p kdplane_demos -- demos/data/input10.txt --range 0.2 0.2 0.6 0.6 --nearest 0.4 0.4 --check`
//! - `RUST_LOG=trace` shows every node the tree creates.

mod input;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use kdplane_index::{Point, PointSet, Rect, SpatialIndex};

#[derive(Parser)]
#[command(name = "kdplane")]
#[command(about = "Range and nearest-neighbor queries over a 2D point file")]
#[command(version)]
struct Cli {
    /// Point file: one `x y` pair per line
    file: PathBuf,

    /// Report points inside this rectangle
    #[arg(
        long,
        num_args = 4,
        value_names = ["XMIN", "YMIN", "XMAX", "YMAX"],
        allow_negative_numbers = true
    )]
    range: Option<Vec<f64>>,

    /// Report the point closest to this location
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    nearest: Option<Vec<f64>>,

    /// Restrict the tree to this region; points outside it are rejected
    #[arg(
        long,
        num_args = 4,
        value_names = ["XMIN", "YMIN", "XMAX", "YMAX"],
        allow_negative_numbers = true
    )]
    bounds: Option<Vec<f64>>,

    /// Cross-check every answer against the brute-force set
    #[arg(long)]
    check: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let points = input::read_points(&cli.file)?;
    log::info!("loaded {} points from {}", points.len(), cli.file.display());

    let mut kd = match cli.bounds.as_deref() {
        Some(b) => SpatialIndex::with_bounds(rect_arg(b)?),
        None => SpatialIndex::new(),
    };
    kd.try_extend(points.iter().copied())?;
    let brute = PointSet::try_from_points(points)?;
    println!(
        "{} distinct points, tree height {}",
        kd.len(),
        kd.height()
    );

    if let Some(r) = cli.range.as_deref() {
        let rect = rect_arg(r)?;
        run_range(&kd, &brute, rect, cli.check)?;
    }
    if let Some(&[x, y]) = cli.nearest.as_deref() {
        run_nearest(&kd, &brute, Point::try_new(x, y)?, cli.check)?;
    }
    Ok(())
}

fn rect_arg(v: &[f64]) -> Result<Rect, kdplane_index::Error> {
    // clap enforces the count.
    Rect::new(v[0], v[1], v[2], v[3])
}

fn run_range(
    kd: &SpatialIndex,
    brute: &PointSet,
    rect: Rect,
    check: bool,
) -> Result<(), Box<dyn Error>> {
    let mut hits: Vec<_> = kd.range(rect).collect();
    hits.sort();
    println!("{} points in {}:", hits.len(), fmt_rect(rect));
    for p in &hits {
        println!("  {}", fmt_point(*p));
    }
    if check {
        let want: Vec<_> = brute.range(rect).collect();
        if hits != want {
            return Err(format!(
                "range mismatch: tree found {}, brute force found {}",
                hits.len(),
                want.len()
            )
            .into());
        }
        log::info!("range result matches brute force");
    }
    Ok(())
}

fn run_nearest(
    kd: &SpatialIndex,
    brute: &PointSet,
    q: Point,
    check: bool,
) -> Result<(), Box<dyn Error>> {
    let Some((p, d)) = kd.nearest_with_distance(q)? else {
        println!("no points, so no nearest neighbor of {}", fmt_point(q));
        return Ok(());
    };
    println!(
        "nearest to {}: {} at distance {:.6}",
        fmt_point(q),
        fmt_point(p),
        d.sqrt()
    );
    if check {
        let (_, want) = brute
            .nearest_with_distance(q)?
            .ok_or("brute-force set is empty")?;
        if d != want {
            return Err(format!("nearest mismatch: tree {d}, brute force {want}").into());
        }
        log::info!("nearest distance matches brute force");
    }
    Ok(())
}

fn fmt_point(p: Point) -> String {
    format!("({:.6}, {:.6})", p.x(), p.y())
}

fn fmt_rect(r: Rect) -> String {
    format!(
        "[{}, {}] x [{}, {}]",
        r.min_x(),
        r.max_x(),
        r.min_y(),
        r.max_y()
    )
}
