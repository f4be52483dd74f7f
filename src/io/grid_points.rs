//! Writer for grid point query files.
//!
//! # File Format
//!
//! ```text
//! -120.862 30.956 4000
//! -120.862 30.956 3900
//! -120.862 30.956 3800
//! ```
//!
//! One point per line: longitude and latitude with three decimals, elevation
//! as a signed integer in meters. Downstream query tools parse exactly this
//! layout.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::grid::{GridEnumerator, GridShape};

/// Write all points of `shape` to `writer` in enumeration order.
///
/// Returns the number of points written, which equals `shape.len()`.
pub fn write_grid_points<W: Write>(writer: &mut W, shape: &GridShape) -> io::Result<usize> {
    let mut n_pts = 0;
    for point in GridEnumerator::new(shape) {
        writeln!(writer, "{point}")?;
        n_pts += 1;
    }
    Ok(n_pts)
}

/// Write a grid point file.
///
/// # Example
///
/// ```ignore
/// use cvm_grid::config::GridConfig;
/// use cvm_grid::io::write_grid_points_file;
/// use std::path::Path;
///
/// let shape = GridConfig::cvmh_elevation_grid().shape()?;
/// let n = write_grid_points_file(Path::new("cvmh_elev_file.txt"), &shape)?;
/// println!("Number of pts: {}", n);
/// ```
pub fn write_grid_points_file(path: &Path, shape: &GridShape) -> io::Result<usize> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    let n_pts = write_grid_points(&mut writer, shape)?;
    writer.flush()?;
    info!(path = %path.display(), points = n_pts, "wrote grid point file");
    Ok(n_pts)
}
