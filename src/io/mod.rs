//! I/O utilities for reading and writing model files.
//!
//! This module provides:
//! - **Grid point files**: query points for a velocity-model evaluator
//! - **Mesh files**: material properties returned by the evaluator
//! - **NetCDF output**: CF-style volumes with metadata (requires `netcdf` feature)
//!
//! # File Formats
//!
//! ## Grid Point Files
//!
//! ```text
//! -120.862 30.956 4000
//! -120.862 30.956 3900
//! ```
//!
//! ## Mesh Files
//!
//! At least 17 whitespace-separated columns; columns 0-2 are lon, lat, elev and
//! columns 14-16 are vp (m/s), vs (m/s), rho (kg/m^3).
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use cvm_grid::io::{read_mesh_file, write_grid_points_file};
//!
//! let n = write_grid_points_file(Path::new("points.txt"), &shape).unwrap();
//! let records = read_mesh_file(Path::new("mesh.txt")).unwrap();
//! assert_eq!(records.len(), n);
//! ```

mod grid_points;
mod mesh_reader;
#[cfg(feature = "netcdf")]
mod netcdf_io;

pub use grid_points::{write_grid_points, write_grid_points_file};
pub use mesh_reader::{MESH_MIN_COLUMNS, MeshFileError, parse_mesh_records, read_mesh_file};
#[cfg(feature = "netcdf")]
pub use netcdf_io::{NetCDFError, VolumeWriterConfig, netcdf_path_for, write_volume};
