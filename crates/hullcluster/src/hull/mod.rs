//! Gift-wrapping hull construction with label-purity feedback.
//!
//! Purpose
//! - Grow one convex hull per label around the seed ridge, negotiating every
//!   pivot with the driver so the finished hull never encloses a point of a
//!   foreign label.
//!
//! Why this design
//! - Facets and ridges are ordered tuples of interned point ids; orientation
//!   is carried by tuple order and read off through the signed-volume kernel.
//! - The pivot selector is the inverted-control rendering of a two-way
//!   coroutine: it yields one candidate, waits for exactly one verdict, and
//!   always runs to completion over the dataset.
//!
//! Split for readability: `types.rs` (facet/ridge/hull data), `predicates.rs`
//! (facet and hull membership), `queue.rs` (ridge work-list), `seed.rs`
//! (initial ridge), `pivot.rs` (selector state machine), `wrap.rs` (driver),
//! `volume.rs` (facet-fan volume).

mod pivot;
mod predicates;
mod queue;
mod seed;
mod types;
mod volume;
mod wrap;

pub use pivot::{PivotScan, Step, Verdict};
pub use predicates::{check_inside, inside_hull, InsideCheck};
pub use queue::RidgeQueue;
pub use seed::seed_ridge;
pub use types::{Facet, Hull, Ridge};
pub use volume::hull_volume;
pub use wrap::{check_homogeneity, gift_wrap};
