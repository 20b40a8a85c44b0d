//! Composed converters: a resolved path flattened into one callable.

use crate::graph::{ConvertFn, Edge};
use chroma_math::Vec3;
use chroma_spaces::SpaceId;
use std::fmt;

/// A resolved conversion path flattened into a single function.
///
/// Applies each step's converter in order, feeding each result into the
/// next. An empty step list is the identity conversion (source == target).
///
/// Composed converters are built by
/// [`ConversionGraph::converter`](crate::ConversionGraph::converter) and
/// shared behind `Arc`, so repeated conversions between the same pair of
/// spaces reuse one instance across threads.
pub struct ComposedConverter {
    from: SpaceId,
    to: SpaceId,
    steps: Vec<ConvertFn>,
}

impl ComposedConverter {
    pub(crate) fn from_path(from: SpaceId, to: SpaceId, path: &[Edge]) -> Self {
        Self {
            from,
            to,
            steps: path.iter().map(Edge::convert_fn).collect(),
        }
    }

    /// Source color space.
    pub fn from(&self) -> SpaceId {
        self.from
    }

    /// Target color space.
    pub fn to(&self) -> SpaceId {
        self.to
    }

    /// Number of chained edges.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether this is the identity conversion (zero edges).
    pub fn is_identity(&self) -> bool {
        self.steps.is_empty()
    }

    /// Runs the chain on interchange components.
    ///
    /// Pure: allocates nothing, mutates nothing, same input gives same
    /// output for a given graph state.
    #[inline]
    pub fn apply(&self, v: Vec3) -> Vec3 {
        self.steps.iter().fold(v, |acc, step| step(acc))
    }
}

impl fmt::Debug for ComposedConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ComposedConverter({} -> {}, {} steps)",
            self.from,
            self.to,
            self.steps.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConversionGraph;

    #[test]
    fn test_identity() {
        let mut graph = ConversionGraph::new();
        graph.add_edge(SpaceId::Srgb, SpaceId::CieXyz, |v| v);

        let conv = graph.converter(SpaceId::Srgb, SpaceId::Srgb).unwrap();
        assert!(conv.is_identity());
        assert_eq!(conv.len(), 0);

        let v = Vec3::new(0.3, 0.6, 0.9);
        assert_eq!(conv.apply(v), v);
    }

    #[test]
    fn test_chain_order() {
        let mut graph = ConversionGraph::new();
        graph.add_edge(SpaceId::Srgb, SpaceId::LinearSrgb, |v| v + Vec3::ONE);
        graph.add_edge(SpaceId::LinearSrgb, SpaceId::CieXyz, |v| v * 2.0);

        let conv = graph.converter(SpaceId::Srgb, SpaceId::CieXyz).unwrap();
        assert_eq!(conv.len(), 2);
        assert_eq!(conv.from(), SpaceId::Srgb);
        assert_eq!(conv.to(), SpaceId::CieXyz);

        // (0 + 1) * 2, not 0 * 2 + 1
        assert_eq!(conv.apply(Vec3::ZERO), Vec3::splat(2.0));
    }

    #[test]
    fn test_nan_flows_through() {
        let mut graph = ConversionGraph::new();
        graph.add_edge(SpaceId::Srgb, SpaceId::CieXyz, |v| v * 2.0);

        let conv = graph.converter(SpaceId::Srgb, SpaceId::CieXyz).unwrap();
        let out = conv.apply(Vec3::new(f64::NAN, 1.0, f64::INFINITY));
        assert!(out.x.is_nan());
        assert_eq!(out.y, 2.0);
        assert!(out.z.is_infinite());
    }
}
