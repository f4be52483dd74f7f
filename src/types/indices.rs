//! Strongly-typed lattice index newtypes.
//!
//! These types prevent mixing up longitude, latitude and depth positions
//! when addressing a volume or a flat record stream.

use std::fmt;

/// Macro to generate axis index newtypes with common functionality.
macro_rules! define_axis_index {
    (
        $(#[$meta:meta])*
        $name:ident, $display_prefix:literal
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name(usize);

        impl $name {
            /// Create a new index.
            #[inline]
            pub const fn new(index: usize) -> Self {
                Self(index)
            }

            /// Get the raw index value.
            #[inline]
            pub const fn get(self) -> usize {
                self.0
            }

            /// First index (0).
            pub const ZERO: Self = Self(0);
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(index: usize) -> Self {
                Self(index)
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(idx: $name) -> usize {
                idx.0
            }
        }
    };
}

define_axis_index!(
    /// Position along the longitude axis.
    ///
    /// # Example
    ///
    /// ```
    /// use cvm_grid::types::LonIndex;
    ///
    /// let i = LonIndex::new(3);
    /// assert_eq!(i.get(), 3);
    /// assert_eq!(i.to_string(), "lon3");
    /// ```
    LonIndex,
    "lon"
);

define_axis_index!(
    /// Position along the latitude axis.
    LatIndex,
    "lat"
);

define_axis_index!(
    /// Position along the depth (elevation) axis.
    ///
    /// Depth is the fastest-varying axis of the enumeration order.
    DepthIndex,
    "depth"
);

/// A full lattice position `(lon, lat, depth)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LatticeIndex {
    pub lon: LonIndex,
    pub lat: LatIndex,
    pub depth: DepthIndex,
}

impl LatticeIndex {
    /// Create a lattice index from raw axis positions.
    #[inline]
    pub fn new(lon: usize, lat: usize, depth: usize) -> Self {
        Self {
            lon: LonIndex::new(lon),
            lat: LatIndex::new(lat),
            depth: DepthIndex::new(depth),
        }
    }
}

impl fmt::Display for LatticeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.lon, self.lat, self.depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_conversions() {
        let lat = LatIndex::from(7);
        assert_eq!(usize::from(lat), 7);
        assert_eq!(DepthIndex::ZERO.get(), 0);
    }

    #[test]
    fn test_lattice_display() {
        let idx = LatticeIndex::new(1, 2, 3);
        assert_eq!(idx.to_string(), "(lon1, lat2, depth3)");
    }
}
