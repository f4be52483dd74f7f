//! NetCDF output for velocity-model volumes.
//!
//! Writes a reshaped mesh as a self-describing volume that IRIS EMC and
//! ParaView can load directly.
//!
//! # Layout
//!
//! ```text
//! dimensions:
//!     latitude = n_lat ; longitude = n_lon ; depth = n_depth ;
//! variables:
//!     float latitude(latitude) ;  float longitude(longitude) ;  float depth(depth) ;
//!     float vp(latitude, longitude, depth) ;
//!     float vs(latitude, longitude, depth) ;
//!     float rho(latitude, longitude, depth) ;
//! ```
//!
//! The leftmost dimension varies slowest, so depth is contiguous in the file.
//! Undefined cells hold `missing_value = -99999.0`.
//!
//! # Example
//!
//! ```rust,ignore
//! use cvm_grid::io::{VolumeWriterConfig, write_volume};
//!
//! let config = VolumeWriterConfig::new("cvms_output_mesh.nc")
//!     .with_title("Community Velocity Model - Harvard (CVM-H) v15.1");
//! write_volume(&config, &mesh, &shape)?;
//! ```

use std::path::{Path, PathBuf};

use chrono::Utc;
use netcdf::create;
use thiserror::Error;
use tracing::info;

use crate::config::DatasetMetadata;
use crate::grid::GridShape;
use crate::mesh::{ReshapedMesh, VolumeField};
use crate::types::MISSING_VALUE_F32;

/// Error type for NetCDF operations.
#[derive(Debug, Error)]
pub enum NetCDFError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// NetCDF library error
    #[error("NetCDF error: {0}")]
    NetCDF(#[from] netcdf::Error),

    /// Invalid data
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Output path for a mesh file: same stem, `.nc` extension.
pub fn netcdf_path_for(mesh_path: &Path) -> PathBuf {
    mesh_path.with_extension("nc")
}

/// Configuration for volume output.
#[derive(Debug, Clone)]
pub struct VolumeWriterConfig {
    /// Output file path
    pub path: PathBuf,
    /// Descriptive global attributes
    pub metadata: DatasetMetadata,
}

impl VolumeWriterConfig {
    /// Create a new configuration with the given output path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            metadata: DatasetMetadata::default(),
        }
    }

    /// Replace all descriptive metadata.
    pub fn with_metadata(mut self, metadata: DatasetMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Set the title attribute.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.metadata.title = title.into();
        self
    }

    /// Set the comment attribute.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.metadata.comment = Some(comment.into());
        self
    }
}

/// Per-variable attributes of a property field.
struct FieldAttributes {
    name: &'static str,
    long_name: &'static str,
    display_name: &'static str,
    units: &'static str,
    valid_range: [f32; 2],
}

const VP_ATTRS: FieldAttributes = FieldAttributes {
    name: "vp",
    long_name: "P Velocity",
    display_name: "P Velocity (km/s)",
    units: "km.s-1",
    valid_range: [0.0, 10.0],
};

const VS_ATTRS: FieldAttributes = FieldAttributes {
    name: "vs",
    long_name: "S Velocity",
    display_name: "S Velocity (km/s)",
    units: "km.s-1",
    valid_range: [0.0, 10.0],
};

const RHO_ATTRS: FieldAttributes = FieldAttributes {
    name: "rho",
    long_name: "Density",
    display_name: "Density (kg/m^3)",
    units: "kg.m-3",
    valid_range: [0.0, 10000.0],
};

const VOLUME_DIMS: [&str; 3] = ["latitude", "longitude", "depth"];

/// Write `mesh` as a NetCDF volume.
///
/// Lat/lon bounds and resolutions in the global attributes come from `shape`;
/// the vertical ones come from the depth axis recovered from the mesh (km).
pub fn write_volume(
    config: &VolumeWriterConfig,
    mesh: &ReshapedMesh,
    shape: &GridShape,
) -> Result<(), NetCDFError> {
    check_shape(mesh, shape)?;

    let mut file = create(&config.path)?;

    file.add_dimension("latitude", shape.n_lat())?;
    file.add_dimension("longitude", shape.n_lon())?;
    file.add_dimension("depth", shape.n_depth())?;

    {
        let mut lat_var = file.add_variable::<f32>("latitude", &["latitude"])?;
        lat_var.put_attribute("units", "degrees_north")?;
        lat_var.put_attribute("standard_name", "latitude")?;
        lat_var.put_attribute("long_name", "Latitude; positive north")?;
        lat_var.put_values(&to_f32(&mesh.lats), ..)?;
    }

    {
        let mut lon_var = file.add_variable::<f32>("longitude", &["longitude"])?;
        lon_var.put_attribute("units", "degrees_east")?;
        lon_var.put_attribute("standard_name", "longitude")?;
        lon_var.put_attribute("long_name", "Longitude; positive east")?;
        lon_var.put_values(&to_f32(&mesh.lons), ..)?;
    }

    {
        let mut dep_var = file.add_variable::<f32>("depth", &["depth"])?;
        dep_var.put_attribute("units", "km")?;
        dep_var.put_attribute("positive", "up")?;
        dep_var.put_attribute("long_name", "depth below sea level (bsl)")?;
        dep_var.put_values(&to_f32(&mesh.depths_km), ..)?;
    }

    let fields = [
        (&VP_ATTRS, &mesh.vp),
        (&VS_ATTRS, &mesh.vs),
        (&RHO_ATTRS, &mesh.rho),
    ];
    for (attrs, field) in fields {
        write_field(&mut file, attrs, field)?;
    }

    write_global_attributes(&mut file, &config.metadata, mesh, shape)?;

    info!(path = %config.path.display(), "wrote NetCDF volume");
    Ok(())
}

fn check_shape(mesh: &ReshapedMesh, shape: &GridShape) -> Result<(), NetCDFError> {
    shape
        .validate()
        .map_err(|e| NetCDFError::InvalidData(format!("invalid grid: {}", e)))?;

    let expected = (shape.n_lat(), shape.n_lon(), shape.n_depth());
    for field in [&mesh.vp, &mesh.vs, &mesh.rho] {
        if field.shape() != expected {
            return Err(NetCDFError::InvalidData(format!(
                "field shape {:?} does not match grid {:?}",
                field.shape(),
                expected
            )));
        }
    }
    if mesh.lats.len() != expected.0
        || mesh.lons.len() != expected.1
        || mesh.depths_km.len() != expected.2
    {
        return Err(NetCDFError::InvalidData(
            "coordinate axis lengths do not match grid".to_string(),
        ));
    }
    Ok(())
}

fn write_field(
    file: &mut netcdf::FileMut,
    attrs: &FieldAttributes,
    field: &VolumeField,
) -> Result<(), NetCDFError> {
    let mut var = file.add_variable::<f32>(attrs.name, &VOLUME_DIMS)?;
    var.put_attribute("long_name", attrs.long_name)?;
    var.put_attribute("display_name", attrs.display_name)?;
    var.put_attribute("units", attrs.units)?;
    var.put_attribute("valid_range", attrs.valid_range.to_vec())?;
    var.put_attribute("missing_value", MISSING_VALUE_F32)?;
    var.put_values(&field.encode_f32(), ..)?;
    Ok(())
}

fn write_global_attributes(
    file: &mut netcdf::FileMut,
    meta: &DatasetMetadata,
    mesh: &ReshapedMesh,
    shape: &GridShape,
) -> Result<(), NetCDFError> {
    file.add_attribute("title", meta.title.as_str())?;
    if let Some(ref id) = meta.id {
        file.add_attribute("id", id.as_str())?;
    }
    if let Some(ref summary) = meta.summary {
        file.add_attribute("summary", summary.as_str())?;
    }
    if let Some(ref reference) = meta.reference {
        file.add_attribute("reference", reference.as_str())?;
    }
    if let Some(ref references) = meta.references {
        file.add_attribute("references", references.as_str())?;
    }
    if let Some(ref keywords) = meta.keywords {
        file.add_attribute("keywords", keywords.as_str())?;
    }
    file.add_attribute("Conventions", "CF-1.6")?;
    file.add_attribute("Metadata_Conventions", "Unidata Dataset Discovery v1.0")?;
    if let Some(ref creator_name) = meta.creator_name {
        file.add_attribute("creator_name", creator_name.as_str())?;
    }
    if let Some(ref creator_url) = meta.creator_url {
        file.add_attribute("creator_url", creator_url.as_str())?;
    }
    if let Some(ref creator_email) = meta.creator_email {
        file.add_attribute("creator_email", creator_email.as_str())?;
    }
    if let Some(ref institution) = meta.institution {
        file.add_attribute("institution", institution.as_str())?;
    }
    if let Some(ref acknowledgment) = meta.acknowledgment {
        file.add_attribute("acknowledgment", acknowledgment.as_str())?;
    }
    if let Some(ref license) = meta.license {
        file.add_attribute("license", license.as_str())?;
    }
    if let Some(ref comment) = meta.comment {
        file.add_attribute("comment", comment.as_str())?;
    }
    if let Some(ref source) = meta.source {
        file.add_attribute("source", source.as_str())?;
    }

    let now = Utc::now();
    let created = format!("NetCDF version created {}", now.format("%Y-%m-%d %H:%M:%S UTC"));
    let history = match meta.history {
        Some(ref h) => format!("{}. {}", h, created),
        None => created,
    };
    file.add_attribute("history", history.as_str())?;

    file.add_attribute("geospatial_lat_min", shape.lat.min())?;
    file.add_attribute("geospatial_lat_max", shape.lat.max())?;
    file.add_attribute("geospatial_lat_units", "degrees_north")?;
    file.add_attribute("geospatial_lat_resolution", shape.lat.resolution())?;
    file.add_attribute("geospatial_lon_min", shape.lon.min())?;
    file.add_attribute("geospatial_lon_max", shape.lon.max())?;
    file.add_attribute("geospatial_lon_units", "degrees_east")?;
    file.add_attribute("geospatial_lon_resolution", shape.lon.resolution())?;

    let (z_min, z_max) = axis_bounds(&mesh.depths_km);
    file.add_attribute("geospatial_vertical_min", z_min)?;
    file.add_attribute("geospatial_vertical_max", z_max)?;
    file.add_attribute("geospatial_vertical_units", "km")?;
    file.add_attribute("geospatial_vertical_resolution", axis_step(&mesh.depths_km)?)?;
    file.add_attribute("geospatial_vertical_positive", "up")?;

    Ok(())
}

fn axis_bounds(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
}

/// Spacing between the first two samples of an axis.
fn axis_step(values: &[f64]) -> Result<f64, NetCDFError> {
    match values {
        [first, second, ..] => Ok(second - first),
        _ => Err(NetCDFError::InvalidData(format!(
            "axis needs at least 2 samples, got {}",
            values.len()
        ))),
    }
}

#[inline]
fn to_f32(values: &[f64]) -> Vec<f32> {
    values.iter().map(|&x| x as f32).collect()
}
