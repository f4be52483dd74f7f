//! Write the query points of a model lattice to a grid point file.
//!
//! Usage: `generate-grid-points [--config FILE] [--output FILE]`
//!
//! Without `--config` the CVM-H low resolution elevation grid is used.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cvm_grid::config::{Config, GridConfig};
use cvm_grid::grid::GridSummary;
use cvm_grid::io::write_grid_points_file;
use cvm_grid::logging::init_logging;

#[derive(Parser, Debug)]
#[command(name = "generate-grid-points")]
#[command(about = "Enumerate lon/lat/elevation query points (elevation fastest)")]
struct Args {
    /// TOML configuration with a [grid] table
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output grid point file
    #[arg(long, default_value = "cvmh_elev_file.txt")]
    output: PathBuf,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let grid = match args.config {
        Some(ref path) => Config::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?
            .grid,
        None => GridConfig::cvmh_elevation_grid(),
    };
    let shape = grid.shape()?;

    let summary = GridSummary::from_shape(&shape);
    info!(%summary, "grid resolution");

    let n_pts = write_grid_points_file(&args.output, &shape)
        .with_context(|| format!("writing {}", args.output.display()))?;
    info!("Number of pts: {}", n_pts);

    Ok(())
}
