//! Hull volume via a simplex fan anchored at an on-hull origin vertex.

use crate::geom::{signed_volume, GeomError, PointStore};

use super::predicates::coords;
use super::types::Hull;

/// Volume enclosed by a closed, consistently oriented hull.
///
/// Cones every facet to the first vertex of the first facet and sums the
/// simplex volumes (`exp(log) / d!`). Facets incident to the origin are
/// degenerate cones and contribute zero, so the remaining fan tiles the hull
/// exactly.
pub fn hull_volume(store: &PointStore, hull: &Hull) -> Result<f64, GeomError> {
    let Some(first) = hull.facets.first() else {
        return Ok(0.0);
    };
    let origin = first.0[0];
    let factorial: f64 = (1..=store.dim()).map(|k| k as f64).product();
    let mut total = 0.0;
    for face in &hull.facets {
        let mut simplex = face.0.clone();
        simplex.push(origin);
        let vol = signed_volume(&coords(store, &simplex))?;
        total += vol.log.exp();
    }
    Ok(total / factorial)
}
