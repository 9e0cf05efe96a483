//! Geometry foundation: interned coordinates and log-space simplex kernels.
//!
//! Purpose
//! - Keep one dense table of coordinates (`PointStore`) so facets and ridges
//!   are hashable tuples of integer ids rather than shared float vectors.
//! - Provide the two determinant kernels everything else is built on:
//!   signed d-simplex volume and squared (d−1)-simplex content, both in
//!   log-space so dimension and coordinate scale cannot overflow them.
//!
//! Tolerances live in `GeomCfg`; the kernels themselves are exact up to
//! floating point and leave near-zero policy to the facet predicates.

mod simplex;
mod types;

pub use simplex::{signed_volume, squared_area, GeomError, SignedVolume};
pub use types::{GeomCfg, Label, LabeledPoint, PointId, PointStore};
