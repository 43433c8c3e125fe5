//! # bradbury Quickstart
//!
//! ```rust
//! use bradbury::prelude::*;
//!
//! let a = vec3(4, 5, 6);
//! let b = vec3(7, 8, 9);
//!
//! assert_eq!(a.cross(&b).unwrap(), vec3(-3, 6, -3));
//!
//! // Sequences are length-checked against the dimension.
//! let err = Vector::<3>::from_slice(&[1.0, 2.0]).unwrap_err();
//! assert_eq!(err, VectorError::LengthMismatch { expected: 3, found: 2 });
//!
//! // Named accessors fail past the dimension instead of returning 0.
//! assert!(vec2(1, 2).z().is_err());
//! ```
//!
#![doc = include_str!("../README.md")]

pub mod error;
pub mod prelude;
pub mod types;
pub mod vector;

// --- Public API exports ---
pub use error::VectorError;
pub use types::Scalar;
pub use vector::{vec2, vec3, vec4, Rounded, Vector, Vector2, Vector3, Vector4};
