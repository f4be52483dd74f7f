//! Lazy enumeration of lattice query points.

use std::fmt;
use std::iter::FusedIterator;

use crate::grid::GridShape;

/// One query point written to a grid point file.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPoint {
    /// Longitude (degrees east)
    pub lon: f64,
    /// Latitude (degrees north)
    pub lat: f64,
    /// Elevation in meters, truncated toward zero
    pub elev: i64,
}

impl GridPoint {
    /// Build a point, truncating the elevation to whole meters.
    #[inline]
    pub fn new(lon: f64, lat: f64, elev: f64) -> Self {
        Self {
            lon,
            lat,
            elev: elev.trunc() as i64,
        }
    }
}

/// Grid file line: `lon lat elev` with three decimals on the angles.
impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} {:.3} {}", self.lon, self.lat, self.elev)
    }
}

/// Iterator over all lattice points in record order.
///
/// Elevation varies fastest, then latitude, then longitude, so an upstream
/// model evaluator sees every depth of one horizontal location before moving
/// on. The iterator is a pure function of the shape: create a new one to
/// restart.
///
/// # Example
///
/// ```
/// use cvm_grid::grid::{GridEnumerator, GridShape};
/// use cvm_grid::types::AxisSpec;
///
/// let shape = GridShape::new(
///     AxisSpec::new(-121.0, -113.0, 3).unwrap(),
///     AxisSpec::new(31.0, 36.0, 2).unwrap(),
///     AxisSpec::new(0.0, -1000.0, 2).unwrap(),
/// ).unwrap();
///
/// let points: Vec<_> = GridEnumerator::new(&shape).collect();
/// assert_eq!(points.len(), 12);
/// assert_eq!(points[1].elev, -1000);
/// assert_eq!(points[2].lat, 36.0);
/// ```
#[derive(Clone, Debug)]
pub struct GridEnumerator {
    lons: Vec<f64>,
    lats: Vec<f64>,
    elevs: Vec<f64>,
    shape: GridShape,
    next: usize,
}

impl GridEnumerator {
    /// Start enumerating `shape` from its first point.
    pub fn new(shape: &GridShape) -> Self {
        Self {
            lons: shape.lon.values(),
            lats: shape.lat.values(),
            elevs: shape.depth.values(),
            shape: *shape,
            next: 0,
        }
    }
}

impl Iterator for GridEnumerator {
    type Item = GridPoint;

    fn next(&mut self) -> Option<GridPoint> {
        if self.next >= self.shape.len() {
            return None;
        }
        let idx = self.shape.unflatten(self.next);
        self.next += 1;
        Some(GridPoint::new(
            self.lons[idx.lon.get()],
            self.lats[idx.lat.get()],
            self.elevs[idx.depth.get()],
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.shape.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridEnumerator {}

impl FusedIterator for GridEnumerator {}
