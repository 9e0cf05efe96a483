//! Signed simplex volume and squared simplex content, in log-space.
//!
//! Why log-space
//! - Dimensions and coordinate scales vary wildly across datasets; a raw
//!   determinant product under- or overflows long before the comparison
//!   logic cares. Both kernels therefore run an LU factorization and sum
//!   logarithms of the diagonal, the slogdet formulation. Downstream code
//!   compares magnitudes via the log and only exponentiates for the final
//!   volume sum.

use std::fmt;

use nalgebra::{DMatrix, DVector};

/// Errors surfaced by the geometry kernels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeomError {
    /// A kernel was handed the wrong number of vertices for the ambient
    /// dimension.
    VertexCount { expected: usize, got: usize },
    /// Zero-dimensional coordinates (or no vertices at all).
    ZeroDimension,
    /// The driver was invoked on an empty dataset.
    EmptyDataset,
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::VertexCount { expected, got } => {
                write!(f, "simplex needs {expected} vertices, got {got}")
            }
            GeomError::ZeroDimension => write!(f, "coordinates must have dimension >= 1"),
            GeomError::EmptyDataset => write!(f, "dataset is empty"),
        }
    }
}

impl std::error::Error for GeomError {}

/// (sign, log-magnitude) of an oriented simplex volume.
///
/// `sign` is 1.0, 0.0, or -1.0; when it is 0.0 the log is −∞. The volume is
/// `sign * exp(log)` up to the d! simplex normalization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SignedVolume {
    pub sign: f64,
    pub log: f64,
}

/// Signed volume of the d-simplex spanned by `d + 1` vertices in R^d.
///
/// Rows of the difference matrix are `v_i − v_0`; the sign encodes the
/// orientation of the vertex order.
pub fn signed_volume(verts: &[&DVector<f64>]) -> Result<SignedVolume, GeomError> {
    let dim = ambient_dim(verts)?;
    if verts.len() != dim + 1 {
        return Err(GeomError::VertexCount {
            expected: dim + 1,
            got: verts.len(),
        });
    }
    Ok(slogdet(&difference_matrix(verts)))
}

/// Log of the squared (d−1)-content of the simplex spanned by `d` vertices
/// in R^d (the Gram determinant of the difference vectors).
///
/// Degenerate (rank-deficient) simplices report −∞. Only used for
/// tie-breaking facet size on near-coplanar configurations.
pub fn squared_area(verts: &[&DVector<f64>]) -> Result<f64, GeomError> {
    let dim = ambient_dim(verts)?;
    if verts.len() != dim {
        return Err(GeomError::VertexCount {
            expected: dim,
            got: verts.len(),
        });
    }
    let m = difference_matrix(verts);
    let gram = &m * m.transpose();
    let det = slogdet(&gram);
    // The Gram matrix is positive semi-definite; a non-positive sign only
    // arises from rank deficiency or roundoff and counts as degenerate.
    if det.sign > 0.0 {
        Ok(det.log)
    } else {
        Ok(f64::NEG_INFINITY)
    }
}

fn ambient_dim(verts: &[&DVector<f64>]) -> Result<usize, GeomError> {
    let first = verts.first().ok_or(GeomError::ZeroDimension)?;
    if first.is_empty() {
        return Err(GeomError::ZeroDimension);
    }
    Ok(first.len())
}

/// Rows are `verts[i] − verts[0]` for i ≥ 1.
fn difference_matrix(verts: &[&DVector<f64>]) -> DMatrix<f64> {
    let dim = verts[0].len();
    DMatrix::from_fn(verts.len() - 1, dim, |r, c| verts[r + 1][c] - verts[0][c])
}

/// slogdet of a square matrix via LU with partial pivoting.
fn slogdet(m: &DMatrix<f64>) -> SignedVolume {
    debug_assert_eq!(m.nrows(), m.ncols());
    let n = m.nrows();
    let lu = m.clone().lu();
    let mut sign: f64 = lu.p().determinant::<f64>();
    let mut log = 0.0;
    let u = lu.u();
    for i in 0..n {
        let d = u[(i, i)];
        if d == 0.0 {
            return SignedVolume {
                sign: 0.0,
                log: f64::NEG_INFINITY,
            };
        }
        sign *= d.signum();
        log += d.abs().ln();
    }
    SignedVolume { sign, log }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::dvector;
    use proptest::prelude::*;

    fn refs(verts: &[DVector<f64>]) -> Vec<&DVector<f64>> {
        verts.iter().collect()
    }

    #[test]
    fn unit_triangle_volume() {
        let verts = [dvector![0.0, 0.0], dvector![1.0, 0.0], dvector![0.0, 1.0]];
        let v = signed_volume(&refs(&verts)).unwrap();
        assert_eq!(v.sign, 1.0);
        assert!(v.log.abs() < 1e-12, "det should be 1, log {}", v.log);
    }

    #[test]
    fn unit_tetrahedron_volume() {
        let verts = [
            dvector![0.0, 0.0, 0.0],
            dvector![1.0, 0.0, 0.0],
            dvector![0.0, 1.0, 0.0],
            dvector![0.0, 0.0, 1.0],
        ];
        let v = signed_volume(&refs(&verts)).unwrap();
        assert_eq!(v.sign, 1.0);
        // det = 1 before the 1/d! simplex normalization
        assert!(v.log.abs() < 1e-12);
    }

    #[test]
    fn colinear_simplex_has_sign_zero() {
        let verts = [dvector![0.0, 0.0], dvector![1.0, 0.0], dvector![2.0, 0.0]];
        let v = signed_volume(&refs(&verts)).unwrap();
        assert_eq!(v.sign, 0.0);
        assert_eq!(v.log, f64::NEG_INFINITY);
    }

    #[test]
    fn swap_flips_sign_keeps_magnitude() {
        let verts = [
            dvector![0.2, -0.3],
            dvector![1.4, 0.1],
            dvector![-0.5, 2.2],
        ];
        let swapped = [verts[1].clone(), verts[0].clone(), verts[2].clone()];
        let a = signed_volume(&refs(&verts)).unwrap();
        let b = signed_volume(&refs(&swapped)).unwrap();
        assert_eq!(a.sign, -b.sign);
        assert!((a.log - b.log).abs() < 1e-9);
    }

    #[test]
    fn huge_scale_stays_finite_in_log_space() {
        let s = 1e200;
        let verts = [
            dvector![0.0, 0.0],
            dvector![s, 0.0],
            dvector![0.0, s],
        ];
        let v = signed_volume(&refs(&verts)).unwrap();
        assert_eq!(v.sign, 1.0);
        assert!(v.log.is_finite());
        assert!((v.log - 2.0 * s.ln()).abs() < 1e-6);
    }

    #[test]
    fn wrong_cardinality_is_domain_error() {
        let verts = [dvector![0.0, 0.0], dvector![1.0, 0.0]];
        assert_eq!(
            signed_volume(&refs(&verts)),
            Err(GeomError::VertexCount {
                expected: 3,
                got: 2
            })
        );
        assert_eq!(
            squared_area(&refs(&verts[..1])),
            Err(GeomError::VertexCount {
                expected: 2,
                got: 1
            })
        );
        assert_eq!(signed_volume(&[]), Err(GeomError::ZeroDimension));
    }

    #[test]
    fn squared_area_of_segment_and_triangle() {
        // |(2,0)|^2 = 4
        let seg = [dvector![0.0, 0.0], dvector![2.0, 0.0]];
        let a = squared_area(&refs(&seg)).unwrap();
        assert!((a - 4.0f64.ln()).abs() < 1e-12);

        // Unit right triangle in R^3: squared 2-content = (1/2)^2 * 4 = 1
        let tri = [
            dvector![0.0, 0.0, 0.0],
            dvector![1.0, 0.0, 0.0],
            dvector![0.0, 1.0, 0.0],
        ];
        let b = squared_area(&refs(&tri)).unwrap();
        assert!(b.abs() < 1e-12, "Gram det should be 1, log {b}");
    }

    #[test]
    fn degenerate_area_is_minus_infinity() {
        let seg = [dvector![1.0, 1.0], dvector![1.0, 1.0]];
        assert_eq!(squared_area(&refs(&seg)).unwrap(), f64::NEG_INFINITY);
    }

    proptest! {
        // Orientation law: swapping any two vertices flips the sign and
        // preserves the log-magnitude.
        #[test]
        fn orientation_law(
            coords in proptest::collection::vec(-100.0f64..100.0, 6),
            i in 0usize..3,
            j in 0usize..3,
        ) {
            prop_assume!(i != j);
            let verts: Vec<DVector<f64>> = coords
                .chunks(2)
                .map(|c| dvector![c[0], c[1]])
                .collect();
            let mut swapped = verts.clone();
            swapped.swap(i, j);
            let a = signed_volume(&refs(&verts)).unwrap();
            let b = signed_volume(&refs(&swapped)).unwrap();
            prop_assert_eq!(a.sign, -b.sign);
            if a.sign != 0.0 {
                prop_assert!((a.log - b.log).abs() < 1e-6);
            }
        }
    }
}
