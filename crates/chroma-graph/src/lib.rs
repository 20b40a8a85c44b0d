//! # chroma-graph
//!
//! The conversion graph at the heart of the chroma workspace.
//!
//! Color space modules register pairwise converter functions as directed
//! edges; the graph composes them transitively so any registered pair of
//! representations can be converted, even when no direct formula connects
//! them.
//!
//! # Architecture
//!
//! ```text
//!                  chroma-graph
//!                       |
//!            +----------+----------+
//!            |                     |
//!      chroma-spaces         chroma-math
//!   (value types, formulas)  (Vec3, Mat3)
//! ```
//!
//! - [`ConversionGraph`] - explicit context object holding nodes
//!   ([`SpaceId`]) and edges (pure `Vec3 -> Vec3` closures)
//! - [`Provider`] - self-registration hook each color-space module supplies
//! - [`ComposedConverter`] - a resolved path flattened into one callable,
//!   cached per (source, target) pair
//!
//! # Quick Start
//!
//! ```rust
//! use chroma_graph::ConversionGraph;
//! use chroma_spaces::{Lab, Srgb};
//!
//! let graph = ConversionGraph::with_builtin_spaces();
//!
//! // Multi-hop: sRGB -> linear -> XYZ -> Lab
//! let lab: Lab = graph.convert(Srgb::new(1.0, 1.0, 1.0)).unwrap();
//! assert!((lab.l - 100.0).abs() < 0.1);
//! ```
//!
//! # Phases
//!
//! Registration happens first, on `&mut ConversionGraph`, single-threaded
//! by construction. After that the graph is immutable and any number of
//! threads may call [`ConversionGraph::convert`] concurrently; the
//! composed-converter cache synchronizes internally.
//!
//! # Failure modes
//!
//! Resolution fails with [`GraphError::UnknownColorSpace`] when an
//! endpoint was never registered, or [`GraphError::NoConversionPath`]
//! when both are known but no directed chain connects them. Numeric edge
//! cases (NaN, infinity) are not errors; they propagate through the pure
//! arithmetic per IEEE semantics.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod converter;
mod error;
mod graph;
mod providers;

pub use converter::ComposedConverter;
pub use error::{GraphError, GraphResult};
pub use graph::{ConversionGraph, ConvertFn, Edge};
pub use providers::{
    builtin_providers, LabProvider, LinearSrgbProvider, OklabProvider, Provider,
    Rec2020Provider, SrgbProvider,
};

// Re-export the types callers need to use the graph API
pub use chroma_math::Vec3;
pub use chroma_spaces::{ColorSpace, SpaceId};
