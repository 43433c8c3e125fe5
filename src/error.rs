// src/error.rs
//! Errors raised while building vectors or reading their components.

use thiserror::Error;

/// Failure modes of [`Vector`](crate::vector::Vector).
///
/// Both variants are raised synchronously by the call that detected them.
/// Nothing is truncated, padded or defaulted in their place.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// A sequence (or a vector of another dimension) did not hold exactly
    /// `expected` components.
    #[error("cannot initialize vector of size {found} for dimension {expected}")]
    LengthMismatch { expected: usize, found: usize },
    /// A component was addressed at or past the vector's dimension.
    #[error("no component {index} for dimension {dimension}")]
    OutOfRange { index: usize, dimension: usize },
}

pub type Result<T> = std::result::Result<T, VectorError>;
