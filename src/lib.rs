//! # cvm-grid
//!
//! Data preparation for 3D seismic velocity models.
//!
//! This crate provides the two steps around a velocity-model query tool:
//! - Regular lon/lat/elevation lattices and their query point files
//! - Reading the returned material-property mesh (vp, vs, rho)
//! - Reshaping the flat, depth-fastest mesh into `[lat][lon][depth]` volumes
//! - Writing the volumes as a NetCDF file with CF metadata
//!
//! # Example
//!
//! ```
//! use cvm_grid::grid::{GridEnumerator, GridShape};
//! use cvm_grid::mesh::{MeshRecord, reshape};
//! use cvm_grid::types::AxisSpec;
//!
//! let shape = GridShape::new(
//!     AxisSpec::new(-121.0, -113.0, 3).unwrap(),
//!     AxisSpec::new(31.0, 36.0, 2).unwrap(),
//!     AxisSpec::new(0.0, -1000.0, 2).unwrap(),
//! ).unwrap();
//!
//! let records: Vec<MeshRecord> = GridEnumerator::new(&shape)
//!     .map(|p| MeshRecord::new(p.lon, p.lat, p.elev as f64, 6000.0, 3000.0, 2700.0))
//!     .collect();
//!
//! let mesh = reshape(&records, &shape).unwrap();
//! assert_eq!(mesh.lons, vec![-121.0, -117.0, -113.0]);
//! assert_eq!(mesh.depths_km, vec![0.0, -1.0]);
//! ```

pub mod config;
pub mod grid;
pub mod io;
pub mod logging;
pub mod mesh;
pub mod types;

// Re-export main types for convenience
pub use config::{Config, ConfigError, DatasetMetadata, GridConfig};
pub use grid::{GridEnumerator, GridPoint, GridShape, GridSummary};
pub use mesh::{MeshRecord, ReshapeError, ReshapedMesh, VolumeField, reshape};
pub use types::{AxisError, AxisSpec, MISSING_VALUE, Sample};

// I/O
pub use io::{
    MeshFileError, parse_mesh_records, read_mesh_file, write_grid_points, write_grid_points_file,
};
#[cfg(feature = "netcdf")]
pub use io::{NetCDFError, VolumeWriterConfig, netcdf_path_for, write_volume};
