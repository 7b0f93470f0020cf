//! Dense vector and matrix primitives
//!
//! - Euclidean norm, with a zero-norm guard that substitutes 1
//! - Dot product and in-place normalisation
//! - Matrix-vector product over smartcore `DenseMatrix`
//! - Rayleigh quotient x^T M x / x^T x

use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;

/// Computes the Euclidean norm (L2) without allocating.
#[inline]
pub fn norm(a: &[f64]) -> f64 {
    a.iter().map(|&x| x * x).sum::<f64>().sqrt()
}

/// Euclidean norm with zero replaced by 1.
///
/// Dividing by this leaves an all-zero vector at zero instead of producing NaN.
/// Non-zero norms are returned unchanged, including norms below 1.
#[inline]
pub fn guarded_norm(a: &[f64]) -> f64 {
    let n = norm(a);
    if n == 0.0 {
        1.0
    } else {
        n
    }
}

#[inline]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Scales `v` to unit length in place (zero vectors stay zero).
#[inline]
pub fn normalise(v: &mut [f64]) {
    let n = guarded_norm(v);
    v.iter_mut().for_each(|x| *x /= n);
}

/// Dense matrix-vector product `M·v`.
///
/// # Panics
///
/// Panics if the matrix column count differs from `v.len()`.
pub fn mat_vec(m: &DenseMatrix<f64>, v: &[f64]) -> Vec<f64> {
    let (n_rows, n_cols) = m.shape();
    assert_eq!(n_cols, v.len(), "matrix columns must match vector length");
    (0..n_rows)
        .map(|i| (0..n_cols).map(|j| *m.get((i, j)) * v[j]).sum())
        .collect()
}

/// Rayleigh quotient x^T M x / x^T x for a dense square matrix.
///
/// Returns 0.0 for a zero vector.
pub fn rayleigh_quotient(m: &DenseMatrix<f64>, x: &[f64]) -> f64 {
    let den = dot(x, x);
    if den <= 0.0 {
        return 0.0;
    }
    dot(x, &mat_vec(m, x)) / den
}
