//! Gift-wrapping driver with label-purity feedback.
//!
//! The driver grows one hull per invocation: seed ridge, initial facet, then
//! a FIFO sweep over open ridges. For every ridge it runs a pivot scan
//! anchored at the ridge's parent vertex and answers each candidate with a
//! verdict — same-label candidates are tentatively wrapped and
//! purity-checked, opposite-label candidates are classified against the
//! current hull. A ridge whose scan accepts no pivot triggers the
//! backtracking recovery: the newest facet and vertex are dropped and the
//! oldest hull vertex closes the facet on the previous ridge.

use crate::geom::{GeomCfg, GeomError, Label, LabeledPoint, PointId, PointStore};

use super::pivot::{PivotScan, Step, Verdict};
use super::predicates::inside_hull;
use super::queue::RidgeQueue;
use super::seed::seed_ridge;
use super::types::{Facet, Hull, Ridge};

/// Build one pure hull over the dataset, returning its label and the hull
/// (facets plus used pivots).
pub fn gift_wrap(
    store: &PointStore,
    dataset: &[LabeledPoint],
    cfg: &GeomCfg,
) -> Result<(Label, Hull), GeomError> {
    WrapRunner {
        store,
        dataset,
        cfg,
    }
    .run()
}

/// Purity check: no foreign-label point outside the used-pivot set may lie
/// inside the (tentative) hull.
pub fn check_homogeneity(
    store: &PointStore,
    dataset: &[LabeledPoint],
    hull: &Hull,
    label: Label,
    cfg: &GeomCfg,
) -> Result<bool, GeomError> {
    for point in dataset {
        if point.label == label || hull.is_used(point.id) {
            continue;
        }
        if inside_hull(store, hull, point.id, cfg)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Driver carrying shared context for one hull construction.
struct WrapRunner<'a> {
    store: &'a PointStore,
    dataset: &'a [LabeledPoint],
    cfg: &'a GeomCfg,
}

impl<'a> WrapRunner<'a> {
    fn run(&self) -> Result<(Label, Hull), GeomError> {
        let (label, seed) = seed_ridge(self.store, self.dataset)?;
        let mut hull = Hull::default();
        for &id in &seed.0 {
            hull.record_vertex(id);
        }

        // Grow the initial facet from the seed ridge, anchored at the first
        // dataset point (whose label defines the hull).
        let seed_anchor = self.dataset[0].id;
        let (pivot, found) = self.select_pivot(&seed, label, seed_anchor, &hull)?;
        let pivot = if found {
            pivot
        } else {
            // No acceptable pivot even for the seed: fall back to the first
            // seed vertex; the facet degenerates but the wrap stays closed.
            hull.vertices.first().copied().unwrap_or(pivot)
        };
        let face = Facet::from_ridge(&seed, pivot);
        hull.record_vertex(pivot);
        hull.push_facet(face.clone());
        let mut queue = RidgeQueue::new();
        queue.push_facet_ridges(&face);

        let mut prev_edge: Option<Ridge> = None;
        while let Some((edge, anchor)) = queue.pop() {
            if !queue.is_processed(&edge) {
                let (mut pivot, found) = self.select_pivot(&edge, label, anchor, &hull)?;
                let mut wrap_edge = edge.clone();
                if !found {
                    // Backtrack: undo the newest facet and vertex, close the
                    // previous ridge with the oldest hull vertex instead.
                    if let Some(prev) = prev_edge.clone() {
                        wrap_edge = prev;
                    }
                    hull.pop_facet();
                    hull.pop_last_vertex();
                    if let Some(&fallback) = hull.vertices.first() {
                        pivot = fallback;
                    }
                }
                let face = Facet::from_ridge(&wrap_edge, pivot);
                hull.record_vertex(pivot);
                if hull.push_facet(face.clone()) {
                    queue.push_facet_ridges(&face);
                }
                queue.mark_processed(&edge);
            }
            prev_edge = Some(edge);
        }
        Ok((label, hull))
    }

    /// Run one pivot scan over `edge`, answering every candidate, and return
    /// the accepted pivot plus the found flag.
    fn select_pivot(
        &self,
        edge: &Ridge,
        label: Label,
        anchor: PointId,
        hull: &Hull,
    ) -> Result<(PointId, bool), GeomError> {
        // Tentative facets are probed on a scratch copy of the hull,
        // mirroring the append/check/pop discipline without disturbing the
        // real facet set.
        let mut probe = hull.clone();
        let (mut scan, mut step) =
            PivotScan::start(self.store, self.dataset, edge, label, anchor, self.cfg)?;
        loop {
            match step {
                Step::Candidate {
                    pivot,
                    label: candidate_label,
                } => {
                    let verdict = if candidate_label == label {
                        probe.facets.push(Facet::from_ridge(edge, pivot));
                        let pure =
                            check_homogeneity(self.store, self.dataset, &probe, label, self.cfg)?;
                        probe.facets.pop();
                        if pure {
                            Verdict::Homogeneous
                        } else {
                            Verdict::Heterogeneous
                        }
                    } else if inside_hull(self.store, &probe, pivot, self.cfg)? {
                        Verdict::OppositeInside
                    } else {
                        Verdict::OppositeOutside
                    };
                    step = scan.next(verdict)?;
                }
                Step::Done { pivot, found } => return Ok((pivot, found)),
            }
        }
    }
}
