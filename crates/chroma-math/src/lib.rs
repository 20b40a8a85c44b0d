//! # chroma-math
//!
//! Math primitives for color management.
//!
//! This crate provides the numeric foundation the rest of the workspace
//! builds on:
//!
//! - [`Vec3`] - 3-component vector used as the neutral interchange format
//!   for tristimulus values (RGB, XYZ, Lab triplets)
//! - [`Mat3`] - 3x3 matrix for linear color space transforms
//!
//! # Design
//!
//! All arithmetic is `f64`. Color conversion formulas are chained through
//! the conversion graph, and double precision keeps accumulated rounding
//! error negligible across multi-hop paths. NaN and infinity propagate
//! per IEEE semantics; nothing in this crate treats them as errors.
//!
//! Matrices are stored **row-major** and multiply **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use chroma_math::{Mat3, Vec3};
//!
//! // sRGB to XYZ (D65)
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let rgb = Vec3::new(1.0, 0.0, 0.0);
//! let xyz = rgb_to_xyz * rgb;
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - interop with `DMat3`/`DVec3` for callers already on glam
//!
//! # Used By
//!
//! - `chroma-spaces` - primaries-derived RGB/XYZ matrices
//! - `chroma-graph` - interchange values flowing through converters

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;

pub use mat3::*;
pub use vec3::*;
