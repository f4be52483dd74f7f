//! Convert a velocity-model mesh file into a NetCDF volume.
//!
//! Usage: `mesh-to-netcdf <MESH_FILE> [--config FILE] [--output FILE]`
//!
//! The output defaults to the mesh path with a `.nc` extension. Without
//! `--config` the CVM-H full resolution depth mesh is assumed.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};

use cvm_grid::config::{Config, GridConfig};
use cvm_grid::io::{VolumeWriterConfig, netcdf_path_for, read_mesh_file, write_volume};
use cvm_grid::logging::init_logging;
use cvm_grid::mesh::{ReshapeError, reshape};

#[derive(Parser, Debug)]
#[command(name = "mesh-to-netcdf")]
#[command(about = "Reshape an ASCII material-property mesh into a NetCDF volume")]
struct Args {
    /// Mesh file produced by the model query tool
    mesh_file: PathBuf,

    /// TOML configuration with [grid] and optional [metadata] tables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output NetCDF file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let config = match args.config {
        Some(ref path) => {
            Config::from_file(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => Config::with_grid(GridConfig::cvmh_depth_mesh()),
    };
    let shape = config.grid.shape()?;
    info!(%shape, "grid configuration");

    info!("Reading cvm mesh file: {}", args.mesh_file.display());
    let records = read_mesh_file(&args.mesh_file)
        .with_context(|| format!("reading {}", args.mesh_file.display()))?;

    let mesh = match reshape(&records, &shape) {
        Ok(mesh) => mesh,
        Err(ReshapeError::ConfigurationMismatch { expected, actual }) => {
            error!(
                "Error matching number of lines in file (from params), (from file): {} {}",
                expected, actual
            );
            process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };
    drop(records);

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| netcdf_path_for(&args.mesh_file));
    let writer_config = VolumeWriterConfig::new(&output).with_metadata(config.metadata);
    write_volume(&writer_config, &mesh, &shape)
        .with_context(|| format!("writing {}", output.display()))?;

    info!("Completed NetCDF file creation: {}", output.display());
    Ok(())
}
