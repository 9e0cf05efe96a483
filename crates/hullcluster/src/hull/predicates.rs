//! Facet and hull membership predicates.

use crate::geom::{signed_volume, squared_area, GeomCfg, GeomError, PointId, PointStore};

use super::types::{Facet, Hull, Ridge};

/// Outcome of the facet predicate: the verdict plus the replacement facet
/// `edge ∪ {pivot}` and its log squared content, reused by the pivot scan as
/// the next incumbent.
#[derive(Clone, Debug)]
pub struct InsideCheck {
    pub inside: bool,
    pub face: Facet,
    pub log_area: f64,
}

/// Does `pivot` lie on the inner side of the oriented facet `face`?
///
/// The sign of the (d+1)-vertex simplex volume encodes the side. A
/// numerically degenerate volume falls into the colinear tie-break: the
/// pivot counts as outside exactly when the replacement facet covers more of
/// the hyperplane (`area' > area`), so degenerate configurations expand
/// toward the widest facet.
///
/// `edge` defaults to all but the last vertex of `face`; `log_area` defaults
/// to the squared content of `face`. Callers in the pivot scan pass both to
/// compare against the incumbent instead.
pub fn check_inside(
    store: &PointStore,
    face: &Facet,
    pivot: PointId,
    edge: Option<&Ridge>,
    log_area: Option<f64>,
    cfg: &GeomCfg,
) -> Result<InsideCheck, GeomError> {
    let default_edge;
    let edge = match edge {
        Some(e) => e,
        None => {
            default_edge = face.leading_ridge();
            &default_edge
        }
    };
    let area = match log_area {
        Some(a) => a,
        None => squared_area(&coords(store, &face.0))?,
    };

    let mut simplex = face.0.clone();
    simplex.push(pivot);
    let vol = signed_volume(&coords(store, &simplex))?;

    let new_face = Facet::from_ridge(edge, pivot);
    let new_area = squared_area(&coords(store, &new_face.0))?;

    let degenerate = vol.log < cfg.eps_volume.ln();
    let inside = !((degenerate && new_area > area) || vol.sign < 0.0);
    Ok(InsideCheck {
        inside,
        face: new_face,
        log_area: new_area,
    })
}

/// True iff `pivot` lies on the inner side of every facet of `hull`.
/// O(|hull|·d³) per query from the linear-algebra kernels.
pub fn inside_hull(
    store: &PointStore,
    hull: &Hull,
    pivot: PointId,
    cfg: &GeomCfg,
) -> Result<bool, GeomError> {
    for face in &hull.facets {
        if !check_inside(store, face, pivot, None, None, cfg)?.inside {
            return Ok(false);
        }
    }
    Ok(true)
}

pub(crate) fn coords<'a>(
    store: &'a PointStore,
    ids: &[PointId],
) -> Vec<&'a nalgebra::DVector<f64>> {
    ids.iter().map(|&id| store.coord(id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::dvector;

    fn square_store() -> (PointStore, Vec<PointId>) {
        let mut store = PointStore::new(2);
        let ids = vec![
            store.intern(dvector![0.0, 0.0]),
            store.intern(dvector![1.0, 0.0]),
            store.intern(dvector![1.0, 1.0]),
            store.intern(dvector![0.0, 1.0]),
        ];
        (store, ids)
    }

    #[test]
    fn sign_separates_sides_of_a_facet() {
        let (mut store, ids) = square_store();
        let cfg = GeomCfg::default();
        // Oriented edge (0,0) -> (1,0); (1,1) lies on its positive side.
        let face = Facet(vec![ids[0], ids[1]]);
        let above = check_inside(&store, &face, ids[2], None, None, &cfg).unwrap();
        assert!(above.inside);
        let below = store.intern(dvector![0.5, -1.0]);
        let out = check_inside(&store, &face, below, None, None, &cfg).unwrap();
        assert!(!out.inside);
    }

    #[test]
    fn colinear_tie_break_prefers_wider_facet() {
        let mut store = PointStore::new(2);
        let a = store.intern(dvector![0.0, 0.0]);
        let b = store.intern(dvector![1.0, 0.0]);
        let c = store.intern(dvector![2.0, 0.0]);
        let cfg = GeomCfg::default();
        let face = Facet(vec![a, b]);
        let edge = Ridge(vec![a]);
        // (2,0) is colinear with the facet but extends it: outside.
        let widened = check_inside(&store, &face, c, Some(&edge), None, &cfg).unwrap();
        assert!(!widened.inside);
        assert_eq!(widened.face, Facet(vec![a, c]));
        // A point interior to the facet's span does not extend it: inside.
        let mid = store.intern(dvector![0.5, 0.0]);
        let kept = check_inside(&store, &face, mid, Some(&edge), None, &cfg).unwrap();
        assert!(kept.inside);
    }

    #[test]
    fn inside_hull_requires_every_facet() {
        let (mut store, ids) = square_store();
        let cfg = GeomCfg::default();
        // CCW square boundary: each edge keeps the interior on its inner side.
        let mut hull = Hull::default();
        for k in 0..4 {
            hull.facets.push(Facet(vec![ids[k], ids[(k + 1) % 4]]));
        }
        let center = store.intern(dvector![0.5, 0.5]);
        let outside = store.intern(dvector![1.5, 0.5]);
        assert!(inside_hull(&store, &hull, center, &cfg).unwrap());
        assert!(!inside_hull(&store, &hull, outside, &cfg).unwrap());
    }
}
