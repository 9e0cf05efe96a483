//! Pivot selector with purity feedback.
//!
//! The selector is the producer half of a synchronous two-way channel: it
//! yields exactly one candidate pivot, then waits for exactly one verdict
//! before advancing. The driver owns the geometry of verdicts (tentative
//! purity checks, hull membership); the selector owns the scan order and the
//! incumbent bookkeeping. Abandoning a scan mid-way discards its remaining
//! work harmlessly.

use crate::geom::{squared_area, GeomCfg, GeomError, Label, LabeledPoint, PointId, PointStore};

use super::predicates::{check_inside, coords};
use super::types::{Facet, Ridge};

/// Driver verdict on the candidate the selector just yielded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Same-label pivot accepted: its hull stays pure. Becomes the incumbent.
    Homogeneous,
    /// Same-label pivot rejected: wrapping it would break purity.
    Heterogeneous,
    /// Opposite-label pivot currently interior to the hull.
    OppositeInside,
    /// Opposite-label pivot outside the hull; no action.
    OppositeOutside,
}

/// One step of the selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// A candidate awaiting a verdict.
    Candidate { pivot: PointId, label: Label },
    /// Scan complete: the best same-label pivot and whether any candidate
    /// was ever accepted.
    Done { pivot: PointId, found: bool },
}

/// Incumbent candidate: the pivot plus the facet it forms with the scan edge
/// and that facet's log squared content.
#[derive(Clone, Debug)]
struct Incumbent {
    pivot: PointId,
    face: Facet,
    log_area: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// The anchored incumbent has been yielded; its verdict is pending.
    Initial,
    /// Mid-scan; `pending` holds the yielded candidate.
    Scanning,
    Finished,
}

/// Selector state machine over one (edge, label) pair.
///
/// `start` primes the incumbent from the anchor pivot (the parent facet's
/// opposite vertex, or the first dataset point for the seed run) and yields
/// it as the first candidate; each `next(verdict)` applies the verdict and
/// either yields the next candidate or finishes.
pub struct PivotScan<'a> {
    store: &'a PointStore,
    dataset: &'a [LabeledPoint],
    edge: &'a Ridge,
    label: Label,
    cfg: GeomCfg,
    cursor: usize,
    homo: Incumbent,
    /// Best opposite-label pivot seen interior to the hull. Optional: a
    /// dataset without foreign points simply never fills it.
    opp: Option<Incumbent>,
    pending: Option<Incumbent>,
    found: bool,
    phase: Phase,
}

impl<'a> PivotScan<'a> {
    /// Prime the incumbents and yield the anchor as the first candidate.
    pub fn start(
        store: &'a PointStore,
        dataset: &'a [LabeledPoint],
        edge: &'a Ridge,
        label: Label,
        anchor: PointId,
        cfg: &GeomCfg,
    ) -> Result<(Self, Step), GeomError> {
        let homo = Self::prime(store, edge, anchor)?;
        let opp = match dataset.iter().find(|p| p.label != label) {
            Some(point) => Some(Self::prime(store, edge, point.id)?),
            None => None,
        };
        let step = Step::Candidate {
            pivot: homo.pivot,
            label,
        };
        let scan = Self {
            store,
            dataset,
            edge,
            label,
            cfg: *cfg,
            cursor: 0,
            homo,
            opp,
            pending: None,
            found: false,
            phase: Phase::Initial,
        };
        Ok((scan, step))
    }

    /// Best opposite-label pivot seen interior to the hull so far, if any.
    pub fn opposite_pivot(&self) -> Option<PointId> {
        self.opp.as_ref().map(|o| o.pivot)
    }

    fn prime(store: &PointStore, edge: &Ridge, pivot: PointId) -> Result<Incumbent, GeomError> {
        let face = Facet::from_ridge(edge, pivot);
        let log_area = squared_area(&coords(store, &face.0))?;
        Ok(Incumbent {
            pivot,
            face,
            log_area,
        })
    }

    /// Apply the driver's verdict to the yielded candidate, then scan on.
    pub fn next(&mut self, verdict: Verdict) -> Result<Step, GeomError> {
        match self.phase {
            Phase::Initial => {
                if verdict == Verdict::Homogeneous {
                    self.found = true;
                }
                self.phase = Phase::Scanning;
            }
            Phase::Scanning => {
                let pending = self.pending.take();
                match (verdict, pending) {
                    (Verdict::Homogeneous, Some(candidate)) => {
                        self.homo = candidate;
                        self.found = true;
                    }
                    (Verdict::OppositeInside, Some(candidate)) => {
                        self.opp = Some(candidate);
                    }
                    _ => {}
                }
            }
            Phase::Finished => {
                return Ok(Step::Done {
                    pivot: self.homo.pivot,
                    found: self.found,
                });
            }
        }
        self.advance()
    }

    /// Resume the dataset scan from the cursor, yielding the next point that
    /// challenges the incumbent.
    fn advance(&mut self) -> Result<Step, GeomError> {
        while self.cursor < self.dataset.len() {
            let point = self.dataset[self.cursor];
            self.cursor += 1;
            let check = check_inside(
                self.store,
                &self.homo.face,
                point.id,
                Some(self.edge),
                Some(self.homo.log_area),
                &self.cfg,
            )?;
            // Same-label points challenge only from the outer side of the
            // incumbent facet; opposite-label polarity is inverted.
            let updated = if point.label == self.label {
                !check.inside
            } else {
                check.inside
            };
            if updated {
                self.pending = Some(Incumbent {
                    pivot: point.id,
                    face: check.face,
                    log_area: check.log_area,
                });
                return Ok(Step::Candidate {
                    pivot: point.id,
                    label: point.label,
                });
            }
        }
        self.phase = Phase::Finished;
        Ok(Step::Done {
            pivot: self.homo.pivot,
            found: self.found,
        })
    }
}
