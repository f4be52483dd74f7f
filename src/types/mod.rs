//! Strongly-typed domain types for lattice addressing.
//!
//! # Design Philosophy
//!
//! - **Newtypes prevent mix-ups**: `LatIndex(2)` and `LonIndex(2)` are distinct types
//! - **Validated construction**: an [`AxisSpec`] always has at least two samples
//! - **Explicit missing data**: [`Sample::Missing`] instead of a magic number
//!
//! # Example
//!
//! ```
//! use cvm_grid::types::{AxisSpec, Sample, MISSING_VALUE};
//!
//! let lon = AxisSpec::new(-121.0, -113.0, 3).unwrap();
//! assert_eq!(lon.values(), vec![-121.0, -117.0, -113.0]);
//!
//! assert_eq!(Sample::Missing.encode(), MISSING_VALUE);
//! ```

mod axis;
mod indices;
mod sample;

pub use axis::{AxisError, AxisSpec};
pub use indices::{DepthIndex, LatIndex, LatticeIndex, LonIndex};
pub use sample::{MISSING_VALUE, MISSING_VALUE_F32, Sample};
