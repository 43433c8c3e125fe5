// src/prelude.rs
//! The “everything” import for bradbury.
//!
//! ```rust
//! use bradbury::prelude::*;
//! ```

pub use crate::error::VectorError;
pub use crate::types::Scalar;
pub use crate::vector::{vec2, vec3, vec4, Rounded, Vector, Vector2, Vector3, Vector4};
