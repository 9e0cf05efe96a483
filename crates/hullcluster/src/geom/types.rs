//! Basic data types: ids, labels, the interned point table, and tolerances.
//!
//! - `PointStore`: append-only coordinate table. Equal coordinates are
//!   canonicalized through their bit patterns at intern time, so one id
//!   stands for all equal points across a run and downstream sets/maps key
//!   on plain integers.
//! - `GeomCfg`: centralizes the degeneracy epsilon for the colinear
//!   tie-break.

use std::collections::HashMap;

use nalgebra::DVector;

/// Identifier of an interned coordinate in a [`PointStore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub usize);

/// Integer class label attached to each input point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Label(pub i64);

/// One dataset record: an interned coordinate plus its label.
#[derive(Clone, Copy, Debug)]
pub struct LabeledPoint {
    pub id: PointId,
    pub label: Label,
}

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Simplex volumes with magnitude below this count as degenerate for the
    /// colinear tie-break in `hull::check_inside`.
    pub eps_volume: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps_volume: 1e-12 }
    }
}

/// Dense table of interned coordinates, indexed by [`PointId`].
///
/// All coordinates share one ambient dimension fixed at construction.
#[derive(Clone, Debug, Default)]
pub struct PointStore {
    dim: usize,
    coords: Vec<DVector<f64>>,
    index: HashMap<Vec<u64>, PointId>,
}

impl PointStore {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            coords: Vec::new(),
            index: HashMap::new(),
        }
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Intern a coordinate, returning the id shared by all equal coordinates.
    ///
    /// Equality is bitwise after mapping both zeroes onto +0.0, so records
    /// that print the same cluster together.
    pub fn intern(&mut self, coord: DVector<f64>) -> PointId {
        debug_assert_eq!(coord.len(), self.dim, "coordinate dimension mismatch");
        let key: Vec<u64> = coord
            .iter()
            .map(|&c| {
                let canonical = if c == 0.0 { 0.0f64 } else { c };
                canonical.to_bits()
            })
            .collect();
        if let Some(&id) = self.index.get(&key) {
            return id;
        }
        let id = PointId(self.coords.len());
        self.coords.push(coord);
        self.index.insert(key, id);
        id
    }

    #[inline]
    pub fn coord(&self, id: PointId) -> &DVector<f64> {
        &self.coords[id.0]
    }
}
