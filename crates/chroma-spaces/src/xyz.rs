//! CIE 1931 XYZ - the hub representation.
//!
//! Every other built-in space converts directly to and from XYZ, so the
//! conversion graph composes arbitrary pairs through it.

use crate::{ColorSpace, SpaceId};
use chroma_math::Vec3;

/// D65 reference white as XYZ (Y=1).
///
/// Shared by all built-in spaces; the Lab converters normalize against it.
pub const D65_WHITE: Vec3 = Vec3::new(0.95047, 1.0, 1.08883);

/// A color in CIE 1931 XYZ (D65).
///
/// Tristimulus values; Y carries luminance, normalized so that the D65
/// white point has Y = 1.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    /// X tristimulus value.
    pub x: f64,
    /// Y tristimulus value (luminance).
    pub y: f64,
    /// Z tristimulus value.
    pub z: f64,
}

impl Xyz {
    /// Creates a new XYZ value.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl ColorSpace for Xyz {
    const ID: SpaceId = SpaceId::CieXyz;

    #[inline]
    fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    #[inline]
    fn from_vec3(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
