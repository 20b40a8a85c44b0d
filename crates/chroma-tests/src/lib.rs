//! Integration tests for the chroma workspace.
//!
//! End-to-end scenarios that cross crate boundaries: real color space
//! providers registered into real graphs, multi-hop conversions, and the
//! documented failure modes.
