//! Self-registration hooks for the built-in color spaces.
//!
//! Each provider owns one color-space module's edges and registers them
//! without knowing about any other module. Most spaces contribute exactly
//! two edges: one to the CIE XYZ hub and one back. Encoded sRGB is the
//! exception - its natural sibling is linear sRGB, and the graph composes
//! the rest.
//!
//! The composition root assembles providers into an explicit, ordered
//! list ([`builtin_providers`]) so registration order - and therefore BFS
//! tie-breaking - is deterministic and auditable.

use crate::graph::ConversionGraph;
use chroma_spaces::{ColorSpace, Lab, LinearRec2020, LinearSrgb, Oklab, Srgb, SpaceId, Xyz};

/// A color-space module's registration capability.
///
/// `register` is invoked exactly once per graph by the composition root;
/// it adds the module's outgoing edges. Providers are idempotent-safe:
/// re-registration replaces edges in place rather than duplicating them.
pub trait Provider {
    /// Name of the module, for diagnostics.
    fn name(&self) -> &'static str;

    /// Adds this module's edges to the graph.
    fn register(&self, graph: &mut ConversionGraph);
}

/// Registers encoded sRGB <-> linear sRGB.
pub struct SrgbProvider;

impl Provider for SrgbProvider {
    fn name(&self) -> &'static str {
        "sRGB"
    }

    fn register(&self, graph: &mut ConversionGraph) {
        graph.add_edge(SpaceId::Srgb, SpaceId::LinearSrgb, |v| {
            Srgb::from_vec3(v).to_linear().to_vec3()
        });
        graph.add_edge(SpaceId::LinearSrgb, SpaceId::Srgb, |v| {
            LinearSrgb::from_vec3(v).encode().to_vec3()
        });
    }
}

/// Registers linear sRGB <-> CIE XYZ.
pub struct LinearSrgbProvider;

impl Provider for LinearSrgbProvider {
    fn name(&self) -> &'static str {
        "Linear sRGB"
    }

    fn register(&self, graph: &mut ConversionGraph) {
        graph.add_edge(SpaceId::LinearSrgb, SpaceId::CieXyz, |v| {
            LinearSrgb::from_vec3(v).to_xyz().to_vec3()
        });
        graph.add_edge(SpaceId::CieXyz, SpaceId::LinearSrgb, |v| {
            LinearSrgb::from_xyz(Xyz::from_vec3(v)).to_vec3()
        });
    }
}

/// Registers linear Rec.2020 <-> CIE XYZ.
pub struct Rec2020Provider;

impl Provider for Rec2020Provider {
    fn name(&self) -> &'static str {
        "Linear Rec.2020"
    }

    fn register(&self, graph: &mut ConversionGraph) {
        graph.add_edge(SpaceId::LinearRec2020, SpaceId::CieXyz, |v| {
            LinearRec2020::from_vec3(v).to_xyz().to_vec3()
        });
        graph.add_edge(SpaceId::CieXyz, SpaceId::LinearRec2020, |v| {
            LinearRec2020::from_xyz(Xyz::from_vec3(v)).to_vec3()
        });
    }
}

/// Registers CIE Lab <-> CIE XYZ.
pub struct LabProvider;

impl Provider for LabProvider {
    fn name(&self) -> &'static str {
        "CIE Lab"
    }

    fn register(&self, graph: &mut ConversionGraph) {
        graph.add_edge(SpaceId::CieLab, SpaceId::CieXyz, |v| {
            Lab::from_vec3(v).to_xyz().to_vec3()
        });
        graph.add_edge(SpaceId::CieXyz, SpaceId::CieLab, |v| {
            Lab::from_xyz(Xyz::from_vec3(v)).to_vec3()
        });
    }
}

/// Registers Oklab <-> CIE XYZ.
pub struct OklabProvider;

impl Provider for OklabProvider {
    fn name(&self) -> &'static str {
        "Oklab"
    }

    fn register(&self, graph: &mut ConversionGraph) {
        graph.add_edge(SpaceId::Oklab, SpaceId::CieXyz, |v| {
            Oklab::from_vec3(v).to_xyz().to_vec3()
        });
        graph.add_edge(SpaceId::CieXyz, SpaceId::Oklab, |v| {
            Oklab::from_xyz(Xyz::from_vec3(v)).to_vec3()
        });
    }
}

/// The built-in providers, in registration order.
///
/// Order matters: it fixes adjacency-list order and therefore which of
/// several equally short paths BFS finds first.
pub fn builtin_providers() -> Vec<Box<dyn Provider>> {
    vec![
        Box::new(SrgbProvider),
        Box::new(LinearSrgbProvider),
        Box::new(Rec2020Provider),
        Box::new(LabProvider),
        Box::new(OklabProvider),
    ]
}
