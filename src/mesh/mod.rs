//! Material-property meshes and their volumetric form.
//!
//! - [`MeshRecord`]: one row of a mesh file (point + vp, vs, rho)
//! - [`VolumeField`]: a `[lat][lon][depth]` field of [`Sample`](crate::types::Sample)s
//! - [`reshape`]: flat record stream to coordinate axes and three volumes

mod record;
mod reshape;
mod volume;

pub use record::MeshRecord;
pub use reshape::{ReshapeError, ReshapedMesh, reshape};
pub use volume::VolumeField;
