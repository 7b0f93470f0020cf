//! # Deterministic 2D Projection
//!
//! Reduces a batch of N feature vectors of dimension D to N points in the plane
//! for scatter-plot layouts. The projection is the top-2 principal component
//! basis, found with power iteration plus a single deflation instead of a full
//! eigendecomposition.
//!
//! ## Pipeline
//!
//! 1. Centre: subtract the batch centroid from every row.
//! 2. D ≤ 2: the centred coordinates are the layout (D = 1 pads y with 0).
//! 3. D > 2: covariance `C = (1/N) Σ cᵢ cᵢᵀ`, dominant eigenvector `e1` by power
//!    iteration, `λ1 = e1ᵀ C e1`, deflation `C2 = C − λ1 e1 e1ᵀ`, second axis
//!    `e2` by power iteration on `C2`.
//! 4. Point i is `(cᵢ·e1, cᵢ·e2)`.
//!
//! ## Determinism
//!
//! Power iteration always starts from the normalised all-ones vector and runs a
//! fixed number of steps, so identical input yields bit-identical layouts across
//! calls. Library eigensolvers are free to flip eigenvector signs between runs,
//! which would make plotted points jump on every re-render.
//!
//! ## Degenerate input
//!
//! A zero-variance batch has an all-zero covariance. `C·b` is then the zero
//! vector, the zero-norm guard keeps it at zero, and every point collapses onto
//! the origin. This is the defined output, not an error.
//!
//! ```
//! use vecscope::reduction::project;
//!
//! let points = project(&[
//!     vec![1.0, 0.0, 0.0],
//!     vec![0.0, 1.0, 0.0],
//!     vec![0.0, 0.0, 1.0],
//!     vec![1.0, 1.0, 1.0],
//! ])
//! .unwrap();
//!
//! assert_eq!(points.len(), 4);
//! let mean_x: f64 = points.iter().map(|p| p.x).sum::<f64>() / 4.0;
//! assert!(mean_x.abs() < 1e-12);
//! ```

use log::{debug, info, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use smartcore::linalg::basic::{
    arrays::{Array, Array2, MutArray},
    matrix::DenseMatrix,
};

use crate::core::{batch_dimension, ProjectedPoint};
use crate::errors::{Result, VectorError};
use crate::operators::{dot, mat_vec, normalise, rayleigh_quotient};

/// Reference power-iteration budget per eigenvector.
pub const DEFAULT_ITERATIONS: usize = 80;

/// Serializable projector configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionParams {
    /// Power-iteration steps per eigenvector (at least 1).
    pub iterations: usize,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

/// Top-2 principal basis of one batch, plus the centroid it was computed around.
///
/// For D ≤ 2 the axes are the identity basis (padded with zeros when D < 2)
/// and `lambda1`/`lambda2` are the per-coordinate variances.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrincipalAxes {
    pub mean: Vec<f64>,
    pub e1: Vec<f64>,
    pub e2: Vec<f64>,
    pub lambda1: f64,
    pub lambda2: f64,
    /// Trace of the covariance matrix.
    pub total_variance: f64,
}

impl PrincipalAxes {
    #[inline]
    pub fn dim(&self) -> usize {
        self.mean.len()
    }

    /// Places a vector into the layout defined by these axes.
    ///
    /// A length mismatch is reported as `InvalidDimension` with `index` 0,
    /// since the single input vector is the only candidate.
    pub fn transform(&self, vector: &[f64]) -> Result<ProjectedPoint> {
        if vector.len() != self.dim() {
            return Err(VectorError::InvalidDimension {
                index: 0,
                expected: self.dim(),
                actual: vector.len(),
            });
        }
        let centred: Vec<f64> = vector
            .iter()
            .zip(self.mean.iter())
            .map(|(x, m)| x - m)
            .collect();
        Ok(self.project_centred(&centred))
    }

    /// Fraction of total variance carried by each axis, `(λ1, λ2) / trace(C)`.
    ///
    /// Returns `(0.0, 0.0)` for a zero-variance batch.
    pub fn explained_variance(&self) -> (f64, f64) {
        if self.total_variance > 0.0 {
            (
                self.lambda1 / self.total_variance,
                self.lambda2 / self.total_variance,
            )
        } else {
            (0.0, 0.0)
        }
    }

    fn project_centred(&self, centred: &[f64]) -> ProjectedPoint {
        match self.dim() {
            0 => ProjectedPoint::default(),
            1 => (centred[0], 0.0).into(),
            2 => (centred[0], centred[1]).into(),
            _ => (dot(centred, &self.e1), dot(centred, &self.e2)).into(),
        }
    }
}

/// Deterministic top-2 PCA projector.
///
/// Holds configuration only; every call recomputes from its input.
#[derive(Clone, Debug, Default)]
pub struct Projector {
    params: ProjectionParams,
}

impl Projector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_params(params: ProjectionParams) -> Self {
        Self::new().with_iterations(params.iterations)
    }

    /// Override the power-iteration budget. Zero is raised to one.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        info!("Configuring projector with {} power iterations", iterations);
        self.params.iterations = iterations.max(1);
        self
    }

    pub fn params(&self) -> ProjectionParams {
        self.params
    }

    /// Computes the principal axes of a batch without projecting it.
    pub fn fit<V>(&self, vectors: &[V]) -> Result<PrincipalAxes>
    where
        V: AsRef<[f64]> + Sync,
    {
        self.fit_centred(vectors).map(|(axes, _)| axes)
    }

    /// Projects a batch to 2D, index-aligned with the input.
    ///
    /// Empty input returns an empty layout. Rows of differing length fail with
    /// `VectorError::InvalidDimension`.
    pub fn project<V>(&self, vectors: &[V]) -> Result<Vec<ProjectedPoint>>
    where
        V: AsRef<[f64]> + Sync,
    {
        if vectors.is_empty() {
            debug!("Empty batch, nothing to project");
            return Ok(Vec::new());
        }
        let (axes, centred) = self.fit_centred(vectors)?;
        Ok(centred
            .par_iter()
            .map(|c| axes.project_centred(c))
            .collect())
    }

    fn fit_centred<V>(&self, vectors: &[V]) -> Result<(PrincipalAxes, Vec<Vec<f64>>)>
    where
        V: AsRef<[f64]> + Sync,
    {
        let dim = batch_dimension(vectors)?;
        let n_items = vectors.len();
        debug!("Fitting principal axes for {} items × {} dims", n_items, dim);

        let mean = centroid(vectors, dim);
        let centred: Vec<Vec<f64>> = vectors
            .par_iter()
            .map(|v| v.as_ref().iter().zip(mean.iter()).map(|(x, m)| x - m).collect())
            .collect();

        // slice binding: smartcore's `Array` is implemented for `Vec`
        let variances: &[f64] = &coordinate_variances(&centred, dim);
        let total_variance: f64 = variances.iter().sum();

        let axes = if dim <= 2 {
            trace!("Dimension {} ≤ 2, using centred coordinates directly", dim);
            PrincipalAxes {
                e1: unit_axis(dim, 0),
                e2: unit_axis(dim, 1),
                lambda1: variances.first().copied().unwrap_or(0.0),
                lambda2: variances.get(1).copied().unwrap_or(0.0),
                mean,
                total_variance,
            }
        } else {
            let cov = covariance(&centred, dim);
            let e1 = power_iteration(&cov, self.params.iterations);
            let lambda1 = rayleigh_quotient(&cov, &e1);

            let deflated = deflate(&cov, &e1, lambda1);
            let e2 = power_iteration(&deflated, self.params.iterations);
            let lambda2 = rayleigh_quotient(&deflated, &e2);
            debug!(
                "Principal eigenvalues: λ1={:.6}, λ2={:.6}, trace={:.6}",
                lambda1, lambda2, total_variance
            );

            PrincipalAxes {
                mean,
                e1,
                e2,
                lambda1,
                lambda2,
                total_variance,
            }
        };

        Ok((axes, centred))
    }
}

/// Projects a batch to 2D with the default iteration budget.
pub fn project<V>(vectors: &[V]) -> Result<Vec<ProjectedPoint>>
where
    V: AsRef<[f64]> + Sync,
{
    Projector::new().project(vectors)
}

/// Column means of a batch already validated by `batch_dimension`.
/// Returns zeros for an empty batch.
pub(crate) fn centroid<V: AsRef<[f64]>>(vectors: &[V], dim: usize) -> Vec<f64> {
    let mut mean = vec![0.0; dim];
    if vectors.is_empty() {
        return mean;
    }
    for v in vectors {
        for (m, x) in mean.iter_mut().zip(v.as_ref().iter()) {
            *m += x;
        }
    }
    let n = vectors.len() as f64;
    mean.iter_mut().for_each(|m| *m /= n);
    mean
}

/// Covariance `(1/N) Σ cᵢ cᵢᵀ` of already-centred rows of length `dim`.
pub(crate) fn covariance(centred: &[Vec<f64>], dim: usize) -> DenseMatrix<f64> {
    let n = centred.len().max(1) as f64;
    let rows: Vec<Vec<f64>> = (0..dim)
        .into_par_iter()
        .map(|i| {
            let mut row = vec![0.0; dim];
            for c in centred {
                let ci = c[i];
                for (r, cj) in row.iter_mut().zip(c.iter()) {
                    *r += ci * cj;
                }
            }
            row.iter_mut().for_each(|r| *r /= n);
            row
        })
        .collect();

    DenseMatrix::from_iterator(rows.into_iter().flatten(), dim, dim, 0)
}

/// Dominant eigenvector of a square matrix by power iteration.
///
/// Starts from the normalised all-ones vector and applies `b ← normalise(M·b)`
/// `iterations` times. An all-zero matrix yields the zero vector.
pub fn power_iteration(m: &DenseMatrix<f64>, iterations: usize) -> Vec<f64> {
    let (dim, _) = m.shape();
    let mut b = vec![1.0; dim];
    normalise(&mut b);

    for step in 0..iterations {
        let mut next = mat_vec(m, &b);
        normalise(&mut next);
        b = next;
        trace!("power iteration step {}: {:?}", step, b);
    }

    normalise(&mut b);
    b
}

/// Removes the contribution of eigenpair `(lambda, e)`: `M − λ e eᵀ`.
pub fn deflate(m: &DenseMatrix<f64>, e: &[f64], lambda: f64) -> DenseMatrix<f64> {
    let (dim, _) = m.shape();
    let mut out = m.clone();
    for i in 0..dim {
        for j in 0..dim {
            out.set((i, j), *m.get((i, j)) - lambda * e[i] * e[j]);
        }
    }
    out
}

fn coordinate_variances(centred: &[Vec<f64>], dim: usize) -> Vec<f64> {
    let n = centred.len().max(1) as f64;
    (0..dim)
        .map(|j| centred.iter().map(|c| c[j] * c[j]).sum::<f64>() / n)
        .collect()
}

fn unit_axis(dim: usize, axis: usize) -> Vec<f64> {
    let mut e = vec![0.0; dim];
    if axis < dim {
        e[axis] = 1.0;
    }
    e
}
