//! Outer clustering loop: peel one pure hull at a time.
//!
//! Each iteration wraps a hull around the label of the first remaining
//! point, partitions the working dataset against it (hull vertices, interior
//! points, survivors), accounts the volume, and emits a cluster record. The
//! working dataset shrinks by at least the seed vertices per iteration, so
//! the loop terminates in at most ⌈n/d⌉ rounds.

use serde::Serialize;

use crate::geom::{GeomCfg, GeomError, LabeledPoint, PointId, PointStore};
use crate::hull::{gift_wrap, hull_volume, inside_hull};

/// One emitted cluster: hull vertices, strictly enclosed points, their
/// count, and the hull volume.
#[derive(Clone, Debug, Serialize)]
pub struct Cluster {
    pub vertices: Vec<Vec<f64>>,
    pub points: Vec<Vec<f64>>,
    pub size: usize,
    pub volume: f64,
}

/// Partition the dataset into pure convex-hull clusters.
///
/// Consumes the dataset destructively: every record lands in exactly one
/// cluster, either as a hull vertex or as an interior point. An empty
/// dataset yields an empty cluster sequence.
pub fn cluster(
    store: &PointStore,
    mut dataset: Vec<LabeledPoint>,
    cfg: &GeomCfg,
) -> Result<Vec<Cluster>, GeomError> {
    let mut clusters = Vec::new();
    while !dataset.is_empty() {
        let (_label, hull) = gift_wrap(store, &dataset, cfg)?;
        let mut vertices = Vec::new();
        let mut points = Vec::new();
        let mut survivors = Vec::new();
        for point in dataset {
            if hull.is_used(point.id) {
                vertices.push(coord_row(store, point.id));
            } else if inside_hull(store, &hull, point.id, cfg)? {
                points.push(coord_row(store, point.id));
            } else {
                survivors.push(point);
            }
        }
        let volume = hull_volume(store, &hull)?;
        clusters.push(Cluster {
            size: vertices.len() + points.len(),
            vertices,
            points,
            volume,
        });
        dataset = survivors;
    }
    Ok(clusters)
}

/// Convenience: cluster with default tolerances.
pub fn cluster_with_defaults(
    store: &PointStore,
    dataset: Vec<LabeledPoint>,
) -> Result<Vec<Cluster>, GeomError> {
    cluster(store, dataset, &GeomCfg::default())
}

fn coord_row(store: &PointStore, id: PointId) -> Vec<f64> {
    store.coord(id).iter().copied().collect()
}
