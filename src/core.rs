//! Value types shared by the projector and the similarity ranker.
//!
//! - `LabeledItem`: a display label paired with a feature vector. Labels are not
//!   required to be unique; everything downstream addresses items by position.
//! - `ProjectedPoint`: one 2D coordinate, index-aligned with the input batch.
//! - `SimilarityResult`: one ranked neighbour `(index, label, score)`.
//!
//! All types are plain owned data with serde derives so a host application can
//! ship them to a front-end unchanged. None of them carry state between calls.
//!
//! # Examples
//!
//! ```
//! use vecscope::core::LabeledItem;
//!
//! let a = LabeledItem::new("grid operator", vec![1.0, 0.0, 1.0]);
//! let b = LabeledItem::new("utility analyst", vec![1.0, 0.0, 0.0]);
//!
//! assert_eq!(a.dim(), 3);
//! assert!((a.cosine_similarity(&b) - 1.0 / 2f64.sqrt()).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{Result, VectorError};
use crate::operators::dot;
use crate::similarity::cosine;

/// A display label paired with a feature vector.
///
/// # Panics
///
/// - `dot` and `cosine_similarity` panic if lengths differ. Batch-level entry
///   points validate dimensions first and return `VectorError` instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabeledItem {
    pub label: String,
    pub vector: Vec<f64>,
}

impl LabeledItem {
    /// Creates a new item from a label and an owned vector.
    #[inline]
    pub fn new(label: impl Into<String>, vector: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            vector,
        }
    }

    /// Dimensionality of the feature vector.
    #[inline]
    pub fn dim(&self) -> usize {
        self.vector.len()
    }

    /// Dot product with another item.
    ///
    /// ```
    /// use vecscope::core::LabeledItem;
    /// let a = LabeledItem::new("a", vec![1.0, 2.0, 3.0]);
    /// let b = LabeledItem::new("b", vec![4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b), 32.0);
    /// ```
    #[inline]
    pub fn dot(&self, other: &LabeledItem) -> f64 {
        assert_eq!(self.dim(), other.dim(), "Dimension mismatch");
        dot(&self.vector, &other.vector)
    }

    /// Cosine similarity with another item.
    ///
    /// A zero-norm vector has its norm replaced by 1, so the similarity of an
    /// all-zero vector with anything is 0.0 rather than NaN. The result is
    /// clamped to `[-1, 1]`.
    ///
    /// ```
    /// use vecscope::core::LabeledItem;
    /// let a = LabeledItem::new("a", vec![0.0, 0.0]);
    /// let b = LabeledItem::new("b", vec![0.0, 1.0]);
    /// assert_eq!(a.cosine_similarity(&b), 0.0);
    /// ```
    #[inline]
    pub fn cosine_similarity(&self, other: &LabeledItem) -> f64 {
        assert_eq!(self.dim(), other.dim(), "Dimension mismatch");
        cosine(&self.vector, &other.vector)
    }
}

/// A 2D coordinate produced by the projector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
}

impl ProjectedPoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for ProjectedPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<ProjectedPoint> for [f64; 2] {
    fn from(p: ProjectedPoint) -> Self {
        [p.x, p.y]
    }
}

/// One ranked neighbour of a query item.
///
/// `index` is the neighbour's position in the ranked collection; `score` is the
/// cosine similarity in `[-1, 1]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    pub index: usize,
    pub label: String,
    pub score: f64,
}

/// Checks that every row has the dimension of the first row.
///
/// Returns the shared dimension, or 0 for an empty batch.
pub fn batch_dimension<V: AsRef<[f64]>>(rows: &[V]) -> Result<usize> {
    let Some(first) = rows.first() else {
        return Ok(0);
    };
    let expected = first.as_ref().len();
    for (index, row) in rows.iter().enumerate().skip(1) {
        let actual = row.as_ref().len();
        if actual != expected {
            return Err(VectorError::InvalidDimension {
                index,
                expected,
                actual,
            });
        }
    }
    Ok(expected)
}
