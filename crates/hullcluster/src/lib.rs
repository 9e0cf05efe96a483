//! Label-aware convex-hull clustering for labeled point sets in R^d (d ≥ 2).
//!
//! The engine partitions a labeled dataset into a sequence of pure clusters:
//! each cluster is the point set enclosed by a convex hull that contains no
//! point of any other label. Hulls are grown by incremental gift wrapping
//! (Chand–Kapur) with a feedback loop that lets the driver veto pivots whose
//! hull would swallow foreign-label points.
//!
//! Module map
//! - `geom`: interned point store, tolerances, log-space simplex kernels.
//! - `hull`: facet/ridge types, predicates, the ridge work-queue, seed
//!   selection, the pivot selector, the gift-wrapping driver, and volume
//!   accounting.
//! - `cluster`: the outer peeling loop and the emitted cluster records.

pub mod cluster;
pub mod geom;
pub mod hull;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cluster::{cluster, cluster_with_defaults, Cluster};
    pub use crate::geom::{
        signed_volume, squared_area, GeomCfg, GeomError, Label, LabeledPoint, PointId, PointStore,
        SignedVolume,
    };
    pub use crate::hull::{
        check_inside, gift_wrap, hull_volume, inside_hull, Facet, Hull, Ridge,
    };
}
