//! Run configuration: lattice axes and dataset metadata.
//!
//! Configurations are TOML files:
//!
//! ```toml
//! [grid.lon]
//! start = -120.862
//! end = -113.333
//! steps = 754
//!
//! [grid.lat]
//! start = 30.956
//! end = 36.613
//! steps = 566
//!
//! [grid.depth]
//! start = -50.0
//! end = 4.0
//! steps = 109
//!
//! [metadata]
//! title = "Community Velocity Model - Harvard (CVM-H) v15.1"
//! id = "SCEC_CVM_H_v15_1"
//! ```
//!
//! Every table except `[grid]` is optional.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::GridShape;
use crate::types::{AxisError, AxisSpec};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or schema error
    #[error("Failed to parse TOML config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Axis that cannot be sampled
    #[error("Invalid {axis} axis: {source}")]
    InvalidAxis {
        axis: &'static str,
        #[source]
        source: AxisError,
    },
}

/// Lattice axes of a model run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub lon: AxisSpec,
    pub lat: AxisSpec,
    /// Elevation (m) for point generation, depth (km) for mesh conversion
    pub depth: AxisSpec,
}

impl GridConfig {
    /// CVM-H low resolution region, elevation in meters from the surface down.
    ///
    /// 377 x 283 x 191 points, roughly 1.1 km horizontally and 100 m vertically.
    pub fn cvmh_elevation_grid() -> Self {
        Self {
            lon: AxisSpec {
                start: -120.862,
                end: -113.333,
                step_count: 377,
            },
            lat: AxisSpec {
                start: 30.956,
                end: 36.613,
                step_count: 283,
            },
            depth: AxisSpec {
                start: 4000.0,
                end: -15000.0,
                step_count: 191,
            },
        }
    }

    /// CVM-H low resolution region at full horizontal resolution, depth in km.
    pub fn cvmh_depth_mesh() -> Self {
        Self {
            lon: AxisSpec {
                start: -120.862,
                end: -113.333,
                step_count: 754,
            },
            lat: AxisSpec {
                start: 30.956,
                end: 36.613,
                step_count: 566,
            },
            depth: AxisSpec {
                start: -50.0,
                end: 4.0,
                step_count: 109,
            },
        }
    }

    /// Validate each axis.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (axis, spec) in [("lon", &self.lon), ("lat", &self.lat), ("depth", &self.depth)] {
            spec.validate()
                .map_err(|source| ConfigError::InvalidAxis { axis, source })?;
        }
        Ok(())
    }

    /// Validated lattice.
    pub fn shape(&self) -> Result<GridShape, ConfigError> {
        self.validate()?;
        Ok(GridShape {
            lon: self.lon,
            lat: self.lat,
            depth: self.depth,
        })
    }
}

/// Descriptive global attributes of an output volume.
///
/// Defaults describe CVM-H v15.1 as extracted through UCVM.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetMetadata {
    pub title: String,
    pub id: Option<String>,
    pub summary: Option<String>,
    pub reference: Option<String>,
    pub references: Option<String>,
    pub keywords: Option<String>,
    pub creator_name: Option<String>,
    pub creator_url: Option<String>,
    pub creator_email: Option<String>,
    pub institution: Option<String>,
    pub acknowledgment: Option<String>,
    pub license: Option<String>,
    /// Model release note; the creation timestamp is appended on write
    pub history: Option<String>,
    pub comment: Option<String>,
    pub source: Option<String>,
}

impl Default for DatasetMetadata {
    fn default() -> Self {
        Self {
            title: "Community Velocity Model - Harvard (CVM-H) v15.1".to_string(),
            id: Some("SCEC_CVM_H_v15_1".to_string()),
            summary: Some(
                "CVM-H v15.1 is a 3D structural velocity model for the southern California \
                 crust and upper mantle. CVM-H v15.1 is comprised of detailed basin velocity \
                 descriptions based on tens of thousands of direct velocity (Vp, Vs) \
                 measurements and incorporates the locations and displacement of major fault \
                 zones that influence basin structure. These basin descriptions were used to \
                 developed tomographic models of crust and upper mantle velocity and density \
                 structure, which were subsequently iterated and improved using 3D waveform \
                 adjoint tomography."
                    .to_string(),
            ),
            reference: Some("Shaw et al. (2015)".to_string()),
            references: Some("https://doi.org/10.1016/j.epsl.2015.01.016".to_string()),
            keywords: Some(
                "seismic, shear wave, s wave, p wave, density, elastic waveform, tomography"
                    .to_string(),
            ),
            creator_name: Some("SCEC".to_string()),
            creator_url: Some("https://www.scec.org/research/ucvm".to_string()),
            creator_email: Some("maechlin@usc.edu".to_string()),
            institution: Some("Southern California Earthquake Center (SCEC)".to_string()),
            acknowledgment: Some(
                "CVM-H v15.1 model development was lead by Department of Earth and Planetary \
                 Sciences, Harvard University"
                    .to_string(),
            ),
            license: Some(
                "These data may be redistributed and used without restriction.".to_string(),
            ),
            history: Some("CVM-H v15.1 model released 2015-01-15".to_string()),
            comment: Some(
                "netCDF model extracted from CVM-H using UCVM and converted to netCDF by SCEC. \
                 CVM-H flags setting used are: cvmh_param=USE_1D_BKG,True and \
                 cvmh_param=USE_GTL,False"
                    .to_string(),
            ),
            source: Some("SCEC CVM-H v15.1 NetCDF file".to_string()),
        }
    }
}

/// Complete run configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub grid: GridConfig,
    #[serde(default)]
    pub metadata: DatasetMetadata,
}

impl Config {
    /// Configuration around a grid, with default metadata.
    pub fn with_grid(grid: GridConfig) -> Self {
        Self {
            grid,
            metadata: DatasetMetadata::default(),
        }
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse and validate TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SMALL: &str = r#"
[grid.lon]
start = -121.0
end = -113.0
steps = 3

[grid.lat]
start = 31.0
end = 36.0
steps = 2

[grid.depth]
start = -50.0
end = 4.0
steps = 2
"#;

    #[test]
    fn test_parse_grid_only() {
        let config = Config::parse(SMALL).unwrap();
        let shape = config.grid.shape().unwrap();
        assert_eq!(shape.len(), 12);
        assert_eq!(config.metadata, DatasetMetadata::default());
    }

    #[test]
    fn test_partial_metadata_uses_defaults() {
        let text = format!(
            "{}\n[metadata]\ntitle = \"Test model\"\ncomment = \"synthetic\"\n",
            SMALL
        );
        let config = Config::parse(&text).unwrap();
        assert_eq!(config.metadata.title, "Test model");
        assert_eq!(config.metadata.comment.as_deref(), Some("synthetic"));
        assert_eq!(config.metadata.id.as_deref(), Some("SCEC_CVM_H_v15_1"));
    }

    #[test]
    fn test_rejects_single_step_axis() {
        let text = SMALL.replace("steps = 3", "steps = 1");
        match Config::parse(&text) {
            Err(ConfigError::InvalidAxis { axis, source }) => {
                assert_eq!(axis, "lon");
                assert_eq!(source, AxisError::TooFewSteps(1));
            }
            other => panic!("Expected invalid axis, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_grid_table() {
        assert!(matches!(Config::parse("[metadata]\n"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", SMALL).unwrap();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.grid.lat.values(), vec![31.0, 36.0]);
    }

    #[test]
    fn test_from_missing_file() {
        let err = Config::from_file(Path::new("/nonexistent/run.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/run.toml"));
    }

    #[test]
    fn test_default_metadata() {
        let meta = DatasetMetadata::default();
        assert!(meta.summary.as_deref().unwrap().ends_with("3D waveform adjoint tomography."));
        assert!(meta.acknowledgment.as_deref().unwrap().ends_with("Harvard University"));
        assert_eq!(
            meta.comment.as_deref(),
            Some(
                "netCDF model extracted from CVM-H using UCVM and converted to netCDF by SCEC. \
                 CVM-H flags setting used are: cvmh_param=USE_1D_BKG,True and \
                 cvmh_param=USE_GTL,False"
            )
        );
    }

    #[test]
    fn test_presets() {
        let elev = GridConfig::cvmh_elevation_grid().shape().unwrap();
        assert_eq!(elev.len(), 377 * 283 * 191);
        assert_eq!(elev.depth.value(0), 4000.0);

        let mesh = GridConfig::cvmh_depth_mesh().shape().unwrap();
        assert_eq!(mesh.len(), 754 * 566 * 109);
    }
}
