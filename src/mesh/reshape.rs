//! Decoding a flat, depth-fastest record stream into 3D volumes.

use thiserror::Error;
use tracing::{debug, info};

use crate::grid::GridShape;
use crate::mesh::{MeshRecord, VolumeField};
use crate::types::{AxisError, DepthIndex, LatIndex, LonIndex, Sample};

/// Error type for mesh reshaping.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ReshapeError {
    /// The lattice itself cannot be sampled.
    #[error("invalid grid: {0}")]
    InvalidShape(#[from] AxisError),

    /// The record count does not match the lattice the caller claims.
    #[error(
        "mesh record count does not match the grid configuration: expected {expected}, found {actual}"
    )]
    ConfigurationMismatch { expected: usize, actual: usize },
}

/// Coordinate axes and property volumes recovered from a mesh.
#[derive(Clone, Debug, PartialEq)]
pub struct ReshapedMesh {
    /// Longitudes (degrees east), one per longitude column
    pub lons: Vec<f64>,
    /// Latitudes (degrees north)
    pub lats: Vec<f64>,
    /// Depths in km, as recorded in the mesh
    pub depths_km: Vec<f64>,
    /// P-wave velocity (km/s)
    pub vp: VolumeField,
    /// S-wave velocity (km/s)
    pub vs: VolumeField,
    /// Density (kg/m^3)
    pub rho: VolumeField,
}

impl ReshapedMesh {
    /// Number of cells with no data.
    pub fn missing_count(&self) -> usize {
        self.vp.len() - self.vp.valid_count()
    }
}

/// Reshape `records` (in enumeration order) into volumes on `shape`.
///
/// The coordinate axes are read back from the records themselves by striding
/// through the flat stream:
///
/// - depths from the first `n_depth` records (converted to km),
/// - latitudes from every `n_depth`-th record within the first longitude column,
/// - longitudes from every `n_depth * n_lat`-th record.
///
/// A record with vp and vs both zero marks a point with no data; all three
/// properties become [`Sample::Missing`] there and the recorded density is
/// ignored. Otherwise velocities are converted to km/s and density is kept.
///
/// # Errors
///
/// [`ReshapeError::InvalidShape`] when an axis of `shape` has fewer than two
/// samples or a non-finite endpoint, and
/// [`ReshapeError::ConfigurationMismatch`] when `records.len()` differs from
/// `shape.len()`.
pub fn reshape(records: &[MeshRecord], shape: &GridShape) -> Result<ReshapedMesh, ReshapeError> {
    shape.validate()?;

    let expected = shape.len();
    if records.len() != expected {
        return Err(ReshapeError::ConfigurationMismatch {
            expected,
            actual: records.len(),
        });
    }

    let (lons, lats, depths_km) = extract_axes(records, shape);
    debug!(
        n_lon = lons.len(),
        n_lat = lats.len(),
        n_depth = depths_km.len(),
        "extracted coordinate axes"
    );

    let (n_lat, n_lon, n_depth) = (shape.n_lat(), shape.n_lon(), shape.n_depth());
    let mut vp = VolumeField::missing(n_lat, n_lon, n_depth);
    let mut vs = VolumeField::missing(n_lat, n_lon, n_depth);
    let mut rho = VolumeField::missing(n_lat, n_lon, n_depth);

    let mut cur = 0;
    for lon_i in 0..n_lon {
        let lon = LonIndex::new(lon_i);
        for lat_i in 0..n_lat {
            let lat = LatIndex::new(lat_i);
            for depth_i in 0..n_depth {
                let depth = DepthIndex::new(depth_i);
                let (p, s, r) = convert_properties(&records[cur]);
                cur += 1;
                vp.set(lat, lon, depth, p);
                vs.set(lat, lon, depth, s);
                rho.set(lat, lon, depth, r);
            }
        }
    }

    let mesh = ReshapedMesh {
        lons,
        lats,
        depths_km,
        vp,
        vs,
        rho,
    };
    info!(
        cells = expected,
        missing = mesh.missing_count(),
        "reshaped mesh into volumes"
    );
    Ok(mesh)
}

/// Recover the longitude, latitude and depth (km) axes by striding.
fn extract_axes(records: &[MeshRecord], shape: &GridShape) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let depths_km = records[..shape.n_depth()]
        .iter()
        .map(MeshRecord::depth_km)
        .collect();

    let lats = records[..shape.lon_stride()]
        .iter()
        .step_by(shape.lat_stride())
        .map(|r| r.lat)
        .collect();

    let lons = records
        .iter()
        .step_by(shape.lon_stride())
        .map(|r| r.lon)
        .collect();

    (lons, lats, depths_km)
}

/// Apply the no-data rule and unit conversions to one record.
#[inline]
fn convert_properties(record: &MeshRecord) -> (Sample, Sample, Sample) {
    if record.is_undefined() {
        (Sample::Missing, Sample::Missing, Sample::Missing)
    } else {
        (
            Sample::Valid(record.vp_km_s()),
            Sample::Valid(record.vs_km_s()),
            Sample::Valid(record.rho),
        )
    }
}
