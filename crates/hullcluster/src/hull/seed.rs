//! Seed ridge selection: the d−1 smallest coordinates of the first label.

use std::cmp::Ordering;

use nalgebra::DVector;

use crate::geom::{GeomError, Label, LabeledPoint, PointId, PointStore};

use super::types::Ridge;

/// Pick the seed (label, ridge) for a hull: the label of the first dataset
/// point, and the d−1 lexicographically smallest coordinates of that label.
///
/// Selection is a k-smallest partition (O(n)) followed by sorting the
/// k-prefix, so the ridge vertex order is deterministic regardless of input
/// order.
pub fn seed_ridge(
    store: &PointStore,
    dataset: &[LabeledPoint],
) -> Result<(Label, Ridge), GeomError> {
    let first = dataset.first().ok_or(GeomError::EmptyDataset)?;
    if store.dim() < 2 {
        return Err(GeomError::ZeroDimension);
    }
    let label = first.label;
    let k = store.dim() - 1;

    let mut ids: Vec<PointId> = dataset
        .iter()
        .filter(|p| p.label == label)
        .map(|p| p.id)
        .collect();
    if ids.len() > k {
        ids.select_nth_unstable_by(k - 1, |a, b| lex_cmp(store.coord(*a), store.coord(*b)));
        ids.truncate(k);
    }
    ids.sort_by(|a, b| lex_cmp(store.coord(*a), store.coord(*b)));
    Ok((label, Ridge(ids)))
}

/// Lexicographic, componentwise total order on coordinates.
pub(crate) fn lex_cmp(a: &DVector<f64>, b: &DVector<f64>) -> Ordering {
    for (x, y) in a.iter().zip(b.iter()) {
        match x.total_cmp(y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}
