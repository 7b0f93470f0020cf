//! Cosine-similarity top-k ranking over labelled items.
//!
//! Given a collection and a query position, every other item is scored by
//! cosine similarity against the query and the best `k` are returned, sorted
//! descending. Ties keep ascending index order (stable sort).
//!
//! ```
//! use vecscope::core::LabeledItem;
//! use vecscope::similarity::top_k_similar;
//!
//! let items = vec![
//!     LabeledItem::new("A", vec![1.0, 0.0]),
//!     LabeledItem::new("B", vec![0.0, 1.0]),
//!     LabeledItem::new("C", vec![1.0, 0.0]),
//! ];
//! let top = top_k_similar(&items, 0, 2).unwrap();
//! assert_eq!(top[0].label, "C");
//! assert_eq!(top[1].label, "B");
//! ```

use std::cmp::Ordering;

use log::{debug, info};
use rayon::prelude::*;

use crate::core::{LabeledItem, SimilarityResult};
use crate::errors::{Result, VectorError};
use crate::operators::{dot, guarded_norm};

/// Number of neighbours shown by the detail view.
pub const DEFAULT_TOP_K: usize = 3;

/// Cosine similarity with the zero-norm guard; the result is clamped to `[-1, 1]`.
#[inline]
pub fn cosine(a: &[f64], b: &[f64]) -> f64 {
    (dot(a, b) / (guarded_norm(a) * guarded_norm(b))).clamp(-1.0, 1.0)
}

/// Ranks all items except `query_index` by cosine similarity to it.
///
/// Returns `min(k, items.len() - 1)` results. Fails with `OutOfRange` if
/// `query_index` is not a valid position, and with `InvalidDimension` if any
/// item's vector length differs from the query's.
pub fn top_k_similar(
    items: &[LabeledItem],
    query_index: usize,
    k: usize,
) -> Result<Vec<SimilarityResult>> {
    let Some(query) = items.get(query_index) else {
        return Err(VectorError::OutOfRange {
            index: query_index,
            len: items.len(),
        });
    };

    let expected = query.dim();
    if let Some((index, item)) = items
        .iter()
        .enumerate()
        .find(|(_, it)| it.dim() != expected)
    {
        return Err(VectorError::InvalidDimension {
            index,
            expected,
            actual: item.dim(),
        });
    }

    let mut scored: Vec<(usize, f64)> = items
        .par_iter()
        .enumerate()
        .filter(|(i, _)| *i != query_index)
        .map(|(i, it)| (i, cosine(&query.vector, &it.vector)))
        .collect();

    // stable: equal scores stay in index order
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored.truncate(k);

    debug!(
        "Ranked {} neighbours of item {} ({}), keeping {}",
        items.len() - 1,
        query_index,
        query.label,
        scored.len()
    );

    Ok(scored
        .into_iter()
        .map(|(index, score)| SimilarityResult {
            index,
            label: items[index].label.clone(),
            score,
        })
        .collect())
}

/// Top-k ranker with a configured `k`.
#[derive(Clone, Copy, Debug)]
pub struct Ranker {
    top_k: usize,
}

impl Default for Ranker {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl Ranker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_top_k(mut self, k: usize) -> Self {
        info!("Configuring ranker with top_k={}", k);
        self.top_k = k;
        self
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn rank(&self, items: &[LabeledItem], query_index: usize) -> Result<Vec<SimilarityResult>> {
        top_k_similar(items, query_index, self.top_k)
    }
}
