//! # vecscope
//!
//! Numerical core for vector dashboards: a deterministic top-2 PCA projector
//! for scatter-plot layouts and a cosine-similarity top-k ranker for
//! "related items" panels.
//!
//! ```
//! use vecscope::core::LabeledItem;
//! use vecscope::keywords::{KeywordVocabulary, VISUAL_DIMS};
//! use vecscope::reduction::project;
//! use vecscope::similarity::{Ranker, DEFAULT_TOP_K};
//!
//! let vocab = KeywordVocabulary::energy();
//! let items: Vec<LabeledItem> = vec![
//!     vocab.posting_item("Grid Engineer", "MISO", "energy, grid", VISUAL_DIMS),
//!     vocab.posting_item("Hydrogen Lead", "Acme", "hydrogen, renewable", VISUAL_DIMS),
//!     vocab.posting_item("Analyst", "Utility Co", "energy", VISUAL_DIMS),
//! ];
//!
//! let layout = project(&items.iter().map(|it| it.vector.clone()).collect::<Vec<_>>()).unwrap();
//! assert_eq!(layout.len(), items.len());
//!
//! let related = Ranker::new().rank(&items, 0).unwrap();
//! assert!(related.len() <= DEFAULT_TOP_K);
//! assert!(related.iter().all(|r| r.index != 0));
//! ```

pub mod core;
pub mod errors;
pub mod keywords;
pub mod operators;
pub mod reduction;
pub mod similarity;

pub use crate::errors::{Result, VectorError};

#[cfg(test)]
mod tests;
