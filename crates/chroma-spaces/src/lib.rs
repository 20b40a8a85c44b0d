//! # chroma-spaces
//!
//! Color space representations for the chroma workspace.
//!
//! Each color space is a concrete, immutable value type with named `f64`
//! components, plus pure converter functions to its sibling spaces. The
//! conversion graph in `chroma-graph` wires these converters together;
//! this crate knows nothing about the graph.
//!
//! # Included Color Spaces
//!
//! | Space | Components | Hub Conversion | White Point |
//! |-------|------------|----------------|-------------|
//! | sRGB (encoded) | r, g, b | via Linear sRGB | D65 |
//! | Linear sRGB | r, g, b | matrix to/from XYZ | D65 |
//! | Linear Rec.2020 | r, g, b | matrix to/from XYZ | D65 |
//! | CIE XYZ | x, y, z | hub | D65 |
//! | CIE L\*a\*b\* | l, a, b | nonlinear to/from XYZ | D65 |
//! | Oklab | l, a, b | nonlinear to/from XYZ | D65 |
//!
//! CIE XYZ (D65) is the hub representation: every other space converts
//! directly to and from it, so N spaces need O(N) formulas instead of
//! O(N^2).
//!
//! # Usage
//!
//! ```rust
//! use chroma_spaces::{LinearSrgb, Srgb};
//!
//! let display = Srgb::new(0.5, 0.3, 0.2);
//! let linear = display.to_linear();
//! let xyz = linear.to_xyz();
//! ```
//!
//! # Dependencies
//!
//! - [`chroma-math`] - `Vec3`/`Mat3` primitives
//!
//! # Used By
//!
//! - `chroma-graph` - registers these converters as graph edges

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod lab;
mod oklab;
mod rec2020;
mod space;
mod srgb;
mod xyz;
pub mod primaries;
pub mod transfer;

pub use lab::Lab;
pub use oklab::Oklab;
pub use rec2020::LinearRec2020;
pub use space::{ColorSpace, SpaceId};
pub use srgb::{LinearSrgb, Srgb};
pub use xyz::{Xyz, D65_WHITE};
