//! The three axes of a model lattice and its flat addressing.

use std::fmt;

use crate::types::{AxisError, AxisSpec, LatticeIndex};

/// Lattice definition shared by the point enumerator and the mesh reshaper.
///
/// The flat record order is longitude outermost, latitude in the middle and
/// depth innermost:
///
/// ```text
/// flat = (lon_i * n_lat + lat_i) * n_depth + depth_i
/// ```
///
/// # Example
///
/// ```
/// use cvm_grid::grid::GridShape;
/// use cvm_grid::types::AxisSpec;
///
/// let shape = GridShape::new(
///     AxisSpec::new(-121.0, -113.0, 3).unwrap(),
///     AxisSpec::new(31.0, 36.0, 2).unwrap(),
///     AxisSpec::new(-50.0, 4.0, 2).unwrap(),
/// ).unwrap();
///
/// assert_eq!(shape.len(), 12);
/// assert_eq!(shape.index(1, 0, 1), 5);
/// assert_eq!(shape.unflatten(5).lon.get(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridShape {
    /// Longitude axis (degrees east)
    pub lon: AxisSpec,
    /// Latitude axis (degrees north)
    pub lat: AxisSpec,
    /// Depth or elevation axis
    pub depth: AxisSpec,
}

impl GridShape {
    /// Create a lattice from three validated axes.
    pub fn new(lon: AxisSpec, lat: AxisSpec, depth: AxisSpec) -> Result<Self, AxisError> {
        let shape = Self { lon, lat, depth };
        shape.validate()?;
        Ok(shape)
    }

    /// Validate all three axes.
    pub fn validate(&self) -> Result<(), AxisError> {
        self.lon.validate()?;
        self.lat.validate()?;
        self.depth.validate()
    }

    /// Number of longitude samples.
    #[inline]
    pub fn n_lon(&self) -> usize {
        self.lon.step_count
    }

    /// Number of latitude samples.
    #[inline]
    pub fn n_lat(&self) -> usize {
        self.lat.step_count
    }

    /// Number of depth samples.
    #[inline]
    pub fn n_depth(&self) -> usize {
        self.depth.step_count
    }

    /// Total number of lattice points.
    #[inline]
    pub fn len(&self) -> usize {
        self.n_lon() * self.n_lat() * self.n_depth()
    }

    /// True when the lattice has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Records spanned by one longitude column (all lats and depths).
    #[inline]
    pub fn lon_stride(&self) -> usize {
        self.n_lat() * self.n_depth()
    }

    /// Records spanned by one latitude column (all depths).
    #[inline]
    pub fn lat_stride(&self) -> usize {
        self.n_depth()
    }

    /// Flat record offset of a lattice position.
    #[inline]
    pub fn index(&self, lon_i: usize, lat_i: usize, depth_i: usize) -> usize {
        debug_assert!(lon_i < self.n_lon() && lat_i < self.n_lat() && depth_i < self.n_depth());
        lon_i * self.lon_stride() + lat_i * self.lat_stride() + depth_i
    }

    /// Flat record offset of a typed lattice position.
    #[inline]
    pub fn index_of(&self, idx: LatticeIndex) -> usize {
        self.index(idx.lon.get(), idx.lat.get(), idx.depth.get())
    }

    /// Lattice position of a flat record offset.
    #[inline]
    pub fn unflatten(&self, flat: usize) -> LatticeIndex {
        debug_assert!(flat < self.len());
        let lon_i = flat / self.lon_stride();
        let rem = flat % self.lon_stride();
        LatticeIndex::new(lon_i, rem / self.lat_stride(), rem % self.lat_stride())
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lon {} x lat {} x depth {} = {} points",
            self.n_lon(),
            self.n_lat(),
            self.n_depth(),
            self.len()
        )
    }
}
