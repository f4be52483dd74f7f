//! Reader for ASCII material-property mesh files.
//!
//! Mesh files are produced by a velocity-model query tool from a grid point
//! file. Each data line holds at least 17 whitespace-separated columns:
//!
//! ```text
//! col  0  1  2    ...   14  15  16
//!      lon lat elev ... vp  vs  rho
//! ```
//!
//! Velocities are in m/s and density in kg/m^3. Blank lines and lines starting
//! with `#` are ignored. Rows must follow the grid point enumeration order.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::mesh::MeshRecord;

/// Minimum number of columns in a mesh line.
pub const MESH_MIN_COLUMNS: usize = 17;

const COL_LON: usize = 0;
const COL_LAT: usize = 1;
const COL_ELEV: usize = 2;
const COL_VP: usize = 14;
const COL_VS: usize = 15;
const COL_RHO: usize = 16;

/// Error type for mesh file parsing.
#[derive(Debug, Error)]
pub enum MeshFileError {
    /// File I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line has fewer than 17 columns
    #[error("Line {line} has {found} columns, expected at least 17")]
    TooFewColumns { line: usize, found: usize },

    /// Numeric parse error with line number
    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },
}

/// Parse mesh records from a reader.
///
/// The whole table is materialised; reshaping needs random access to it.
pub fn parse_mesh_records<R: BufRead>(reader: R) -> Result<Vec<MeshRecord>, MeshFileError> {
    let mut records = Vec::new();

    for (line_idx, line_result) in reader.lines().enumerate() {
        let line_num = line_idx + 1;
        let line = line_result?;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        records.push(parse_mesh_line(trimmed, line_num)?);
    }

    Ok(records)
}

/// Parse a single data line.
fn parse_mesh_line(line: &str, line_num: usize) -> Result<MeshRecord, MeshFileError> {
    let columns: Vec<&str> = line.split_whitespace().collect();
    if columns.len() < MESH_MIN_COLUMNS {
        return Err(MeshFileError::TooFewColumns {
            line: line_num,
            found: columns.len(),
        });
    }

    let field = |col: usize, name: &str| -> Result<f64, MeshFileError> {
        columns[col]
            .parse::<f64>()
            .map_err(|e| MeshFileError::ParseError {
                line: line_num,
                message: format!("Invalid {} '{}': {}", name, columns[col], e),
            })
    };

    Ok(MeshRecord::new(
        field(COL_LON, "longitude")?,
        field(COL_LAT, "latitude")?,
        field(COL_ELEV, "elevation")?,
        field(COL_VP, "vp")?,
        field(COL_VS, "vs")?,
        field(COL_RHO, "rho")?,
    ))
}

/// Read a mesh file.
///
/// # Example
///
/// ```ignore
/// use cvm_grid::io::read_mesh_file;
/// use std::path::Path;
///
/// let records = read_mesh_file(Path::new("cvms_output_mesh.txt"))?;
/// println!("Total lines from mesh file: {}", records.len());
/// ```
pub fn read_mesh_file(path: &Path) -> Result<Vec<MeshRecord>, MeshFileError> {
    let file = File::open(path)?;
    let records = parse_mesh_records(BufReader::new(file))?;
    info!(path = %path.display(), records = records.len(), "read mesh file");
    Ok(records)
}
