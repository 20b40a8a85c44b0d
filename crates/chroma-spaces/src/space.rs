//! Color space identity and the typed-value bridge.
//!
//! [`SpaceId`] is the runtime key the conversion graph is indexed by:
//! one variant per distinct representation, not per instance. The
//! [`ColorSpace`] trait connects each typed value struct to its id and to
//! the neutral [`Vec3`] interchange format.

use chroma_math::Vec3;
use std::fmt;

/// Identifies a color space representation.
///
/// Two values compare equal iff they name the same representation; the
/// conversion graph uses this as its node key.
///
/// # Example
///
/// ```rust
/// use chroma_spaces::SpaceId;
///
/// assert_eq!(SpaceId::CieXyz.name(), "CIE XYZ");
/// assert_ne!(SpaceId::Srgb, SpaceId::LinearSrgb);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpaceId {
    /// sRGB with the standard transfer function applied (display-encoded).
    Srgb,
    /// sRGB primaries, linear light.
    LinearSrgb,
    /// Rec.2020 primaries, linear light.
    LinearRec2020,
    /// CIE 1931 XYZ (D65) - the hub representation.
    CieXyz,
    /// CIE L*a*b* (D65 reference white).
    CieLab,
    /// Oklab perceptual space.
    Oklab,
}

impl SpaceId {
    /// All built-in color space identities, in registration order.
    pub const ALL: [SpaceId; 6] = [
        SpaceId::Srgb,
        SpaceId::LinearSrgb,
        SpaceId::LinearRec2020,
        SpaceId::CieXyz,
        SpaceId::CieLab,
        SpaceId::Oklab,
    ];

    /// Human-readable name of the color space.
    pub const fn name(self) -> &'static str {
        match self {
            SpaceId::Srgb => "sRGB",
            SpaceId::LinearSrgb => "Linear sRGB",
            SpaceId::LinearRec2020 => "Linear Rec.2020",
            SpaceId::CieXyz => "CIE XYZ",
            SpaceId::CieLab => "CIE Lab",
            SpaceId::Oklab => "Oklab",
        }
    }

    /// Whether values in this space are linear light.
    pub const fn is_linear(self) -> bool {
        match self {
            SpaceId::Srgb | SpaceId::CieLab | SpaceId::Oklab => false,
            SpaceId::LinearSrgb | SpaceId::LinearRec2020 | SpaceId::CieXyz => true,
        }
    }
}

impl fmt::Display for SpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Trait for typed color values.
///
/// Connects a concrete value struct to its [`SpaceId`] and to the neutral
/// 3-component interchange vector. Every built-in space is 3-dimensional,
/// so the bridge is lossless.
///
/// # Implementing
///
/// ```rust
/// use chroma_math::Vec3;
/// use chroma_spaces::{ColorSpace, SpaceId};
///
/// #[derive(Debug, Clone, Copy)]
/// struct MyXyz { x: f64, y: f64, z: f64 }
///
/// impl ColorSpace for MyXyz {
///     const ID: SpaceId = SpaceId::CieXyz;
///     fn to_vec3(self) -> Vec3 { Vec3::new(self.x, self.y, self.z) }
///     fn from_vec3(v: Vec3) -> Self { Self { x: v.x, y: v.y, z: v.z } }
/// }
/// ```
pub trait ColorSpace: Copy + Clone + fmt::Debug + Send + Sync + 'static {
    /// Identity of the representation this type models.
    const ID: SpaceId;

    /// Components as the neutral interchange vector.
    fn to_vec3(self) -> Vec3;

    /// Reconstructs a typed value from interchange components.
    fn from_vec3(v: Vec3) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(SpaceId::Srgb.name(), "sRGB");
        assert_eq!(SpaceId::Oklab.name(), "Oklab");
        assert_eq!(format!("{}", SpaceId::CieLab), "CIE Lab");
    }

    #[test]
    fn test_identity_semantics() {
        assert_eq!(SpaceId::CieXyz, SpaceId::CieXyz);
        assert_ne!(SpaceId::Srgb, SpaceId::LinearSrgb);
    }

    #[test]
    fn test_linearity() {
        assert!(SpaceId::LinearSrgb.is_linear());
        assert!(SpaceId::CieXyz.is_linear());
        assert!(!SpaceId::Srgb.is_linear());
        assert!(!SpaceId::Oklab.is_linear());
    }

    #[test]
    fn test_all_is_unique() {
        for (i, a) in SpaceId::ALL.iter().enumerate() {
            for b in &SpaceId::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
