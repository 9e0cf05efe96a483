//! Data types for hull construction.
//!
//! Kept small and explicit to make `wrap` and `pivot` easy to read. Vertex
//! coordinates live in the `PointStore`; everything here is id tuples.

use std::collections::HashSet;

use crate::geom::PointId;

/// Ordered tuple of d−1 point ids: the shared boundary of adjacent facets.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ridge(pub Vec<PointId>);

/// Ordered tuple of d point ids: a (d−1)-simplex facet of the hull.
/// Tuple order carries the orientation read by the signed-volume kernel.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Facet(pub Vec<PointId>);

impl Facet {
    /// `form_face`: extend a ridge by one pivot, preserving vertex order.
    pub fn from_ridge(edge: &Ridge, pivot: PointId) -> Self {
        let mut verts = Vec::with_capacity(edge.0.len() + 1);
        verts.extend_from_slice(&edge.0);
        verts.push(pivot);
        Facet(verts)
    }

    /// The default edge used by the facet predicate: all vertices but the
    /// last.
    pub fn leading_ridge(&self) -> Ridge {
        Ridge(self.0[..self.0.len() - 1].to_vec())
    }

    /// Oriented identity: vertex set plus permutation parity. Two facets
    /// with equal keys describe the same oriented hyperplane patch; equal
    /// sets with opposite parity are the two sides of a flat boundary.
    pub fn oriented_key(&self) -> (Vec<PointId>, bool) {
        let mut ids = self.0.clone();
        let mut odd = false;
        // Insertion sort, counting swaps; facets are tiny.
        for i in 1..ids.len() {
            let mut j = i;
            while j > 0 && ids[j - 1] > ids[j] {
                ids.swap(j - 1, j);
                odd = !odd;
                j -= 1;
            }
        }
        (ids, odd)
    }
}

/// A hull under construction: facet set (append-order preserved), pivot
/// insertion order, and the used-pivot set.
///
/// `vertices` keeps insertion order (with repeats) because the driver's
/// backtracking pops the newest vertex and falls back to the oldest; `used`
/// is the membership view and is insert-only.
#[derive(Clone, Debug, Default)]
pub struct Hull {
    pub facets: Vec<Facet>,
    pub vertices: Vec<PointId>,
    used: HashSet<PointId>,
    seen: HashSet<(Vec<PointId>, bool)>,
}

impl Hull {
    /// Append a facet unless its oriented identity is already present.
    /// Returns whether the facet was actually added.
    pub fn push_facet(&mut self, facet: Facet) -> bool {
        if self.seen.insert(facet.oriented_key()) {
            self.facets.push(facet);
            true
        } else {
            false
        }
    }

    /// Backtracking support: remove and return the newest facet.
    pub fn pop_facet(&mut self) -> Option<Facet> {
        let facet = self.facets.pop()?;
        self.seen.remove(&facet.oriented_key());
        Some(facet)
    }

    pub fn record_vertex(&mut self, id: PointId) {
        self.vertices.push(id);
        self.used.insert(id);
    }

    /// Backtracking support: drop the newest vertex from the order list.
    /// The used-pivot set is insert-only and keeps the entry.
    pub fn pop_last_vertex(&mut self) -> Option<PointId> {
        self.vertices.pop()
    }

    #[inline]
    pub fn is_used(&self, id: PointId) -> bool {
        self.used.contains(&id)
    }

    #[inline]
    pub fn used(&self) -> &HashSet<PointId> {
        &self.used
    }
}
