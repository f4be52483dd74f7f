//! 3D property volumes addressed as `[lat][lon][depth]`.

use crate::types::{DepthIndex, LatIndex, LonIndex, Sample};

/// A 3D field of samples with shape `[n_lat][n_lon][n_depth]`.
///
/// Storage is row-major with depth fastest, matching the dimension order
/// `(latitude, longitude, depth)` of the output variables.
#[derive(Clone, Debug, PartialEq)]
pub struct VolumeField {
    n_lat: usize,
    n_lon: usize,
    n_depth: usize,
    data: Vec<Sample>,
}

impl VolumeField {
    /// Create a field with every cell missing.
    pub fn missing(n_lat: usize, n_lon: usize, n_depth: usize) -> Self {
        Self {
            n_lat,
            n_lon,
            n_depth,
            data: vec![Sample::Missing; n_lat * n_lon * n_depth],
        }
    }

    /// Shape as `(n_lat, n_lon, n_depth)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.n_lat, self.n_lon, self.n_depth)
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn offset(&self, lat: LatIndex, lon: LonIndex, depth: DepthIndex) -> usize {
        (lat.get() * self.n_lon + lon.get()) * self.n_depth + depth.get()
    }

    /// Sample at a lattice position.
    #[inline]
    pub fn get(&self, lat: LatIndex, lon: LonIndex, depth: DepthIndex) -> Sample {
        self.data[self.offset(lat, lon, depth)]
    }

    /// Overwrite the sample at a lattice position.
    #[inline]
    pub fn set(&mut self, lat: LatIndex, lon: LonIndex, depth: DepthIndex, value: Sample) {
        let offset = self.offset(lat, lon, depth);
        self.data[offset] = value;
    }

    /// Number of cells holding a valid value.
    pub fn valid_count(&self) -> usize {
        self.data.iter().filter(|s| s.is_valid()).count()
    }

    /// Storage-order values with missing cells encoded as the sentinel.
    pub fn encode_f32(&self) -> Vec<f32> {
        self.data.iter().map(Sample::encode_f32).collect()
    }
}
