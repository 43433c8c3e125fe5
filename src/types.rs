// src/types.rs
//! Scalar type shared by every vector in the crate.

/// Component type of a [`Vector`](crate::vector::Vector).
pub type Scalar = f64;
