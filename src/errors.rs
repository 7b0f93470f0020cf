//! Error types for projection and similarity ranking.

use thiserror::Error;

/// Errors raised by the projector and the similarity ranker.
///
/// Zero-variance batches and zero-norm vectors are not errors: they produce
/// well-defined (if uninformative) output.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum VectorError {
    /// A vector in the batch does not share the batch dimension.
    #[error("Dimension mismatch at item {index}: expected {expected}, got {actual}")]
    InvalidDimension {
        /// Position of the offending vector in the batch (0 for a single vector)
        index: usize,
        /// Dimension of the first vector (or of the query)
        expected: usize,
        /// Dimension of the offending vector
        actual: usize,
    },

    /// Query index is not a valid position in the item list.
    #[error("Index {index} out of range for {len} items")]
    OutOfRange {
        /// Requested index
        index: usize,
        /// Number of items available
        len: usize,
    },
}

pub type Result<T> = std::result::Result<T, VectorError>;
