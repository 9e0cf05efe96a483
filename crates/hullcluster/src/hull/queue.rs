//! FIFO work-list of open ridges awaiting an opposite pivot.

use std::collections::{HashSet, VecDeque};

use crate::geom::PointId;

use super::types::{Facet, Ridge};

/// First-in-first-out ridge queue with a processed set guarding re-entry.
///
/// Every facet contributes its d ridges, each paired with its anchor (the
/// facet vertex deleted to form it). Ridges are handed out in arrival order;
/// the processed set keys on the ridge's vertex set, since tuple order is a
/// per-facet artifact of the same (d−2)-face.
#[derive(Clone, Debug, Default)]
pub struct RidgeQueue {
    pending: VecDeque<(Ridge, PointId)>,
    processed: HashSet<Vec<PointId>>,
}

impl RidgeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue each of the d ridges of `face` with its anchor.
    ///
    /// The ridge tuple is orientation-adjusted so that re-appending the
    /// anchor yields the parent facet with flipped orientation: deleting
    /// index i and re-appending at the end is a (d−1−i)-transposition
    /// permutation, so an even deletion parity needs one extra swap. A
    /// 1-vertex ridge (2D) cannot be swapped; its rescan stalls on the
    /// parent facet and is absorbed by the hull's facet dedup.
    pub fn push_facet_ridges(&mut self, face: &Facet) {
        let d = face.0.len();
        for (skip, &anchor) in face.0.iter().enumerate() {
            let mut ridge: Vec<PointId> = face
                .0
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != skip)
                .map(|(_, &id)| id)
                .collect();
            if (d - 1 - skip) % 2 == 0 && ridge.len() >= 2 {
                ridge.swap(0, 1);
            }
            self.pending.push_back((Ridge(ridge), anchor));
        }
    }

    pub fn pop(&mut self) -> Option<(Ridge, PointId)> {
        self.pending.pop_front()
    }

    #[inline]
    pub fn is_processed(&self, ridge: &Ridge) -> bool {
        self.processed.contains(&Self::key(ridge))
    }

    pub fn mark_processed(&mut self, ridge: &Ridge) {
        self.processed.insert(Self::key(ridge));
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    fn key(ridge: &Ridge) -> Vec<PointId> {
        let mut ids = ridge.0.clone();
        ids.sort_unstable();
        ids
    }
}
