//! Resolution report for a lattice.

use std::fmt;

use crate::grid::GridShape;

/// Kilometers per 0.01 degree, used for a rough horizontal spacing estimate.
const KM_PER_CENTIDEGREE: f64 = 1.11;

/// Axis resolutions and point count of a lattice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSummary {
    pub n_lon: usize,
    pub n_lat: usize,
    pub n_depth: usize,
    /// Longitude spacing (degrees)
    pub lon_resolution: f64,
    /// Latitude spacing (degrees)
    pub lat_resolution: f64,
    /// Depth spacing in axis units (negative for a descending axis)
    pub depth_resolution: f64,
    /// Approximate longitude spacing in km
    pub lon_resolution_km: f64,
    /// Total number of lattice points
    pub n_points: usize,
}

impl GridSummary {
    pub fn from_shape(shape: &GridShape) -> Self {
        let lon_resolution = shape.lon.resolution();
        Self {
            n_lon: shape.n_lon(),
            n_lat: shape.n_lat(),
            n_depth: shape.n_depth(),
            lon_resolution,
            lat_resolution: shape.lat.resolution(),
            depth_resolution: shape.depth.resolution(),
            lon_resolution_km: lon_resolution / 0.01 * KM_PER_CENTIDEGREE,
            n_points: shape.len(),
        }
    }
}

impl fmt::Display for GridSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "lon_steps: {} (size {:.6} deg, ~{:.3} km)",
            self.n_lon, self.lon_resolution, self.lon_resolution_km
        )?;
        writeln!(
            f,
            "lat_steps: {} (size {:.6} deg)",
            self.n_lat, self.lat_resolution
        )?;
        writeln!(
            f,
            "depth_steps: {} (size {:.3})",
            self.n_depth, self.depth_resolution
        )?;
        write!(f, "Number of pts: {}", self.n_points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AxisSpec;

    #[test]
    fn test_cvmh_low_res_summary() {
        let shape = GridShape::new(
            AxisSpec::new(-120.862, -113.333, 377).unwrap(),
            AxisSpec::new(30.956, 36.613, 283).unwrap(),
            AxisSpec::new(4000.0, -15000.0, 191).unwrap(),
        )
        .unwrap();
        let summary = GridSummary::from_shape(&shape);

        assert_eq!(summary.n_points, 377 * 283 * 191);
        assert!((summary.lat_resolution - 0.0200602836879).abs() < 1e-9);
        assert!((summary.depth_resolution + 100.0).abs() < 1e-9);
        assert!((summary.lon_resolution_km - summary.lon_resolution * 111.0).abs() < 1e-9);
        assert!(summary.to_string().ends_with("Number of pts: 20377981"));
    }
}
