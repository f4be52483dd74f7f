//! Lattice definition and point enumeration.
//!
//! A [`GridShape`] fixes the longitude, latitude and depth axes of a model
//! run. [`GridEnumerator`] walks it in record order (depth fastest), and the
//! same ordering is decoded again by [`crate::mesh::reshape`].

mod enumerator;
mod shape;
mod summary;

pub use enumerator::{GridEnumerator, GridPoint};
pub use shape::GridShape;
pub use summary::GridSummary;
