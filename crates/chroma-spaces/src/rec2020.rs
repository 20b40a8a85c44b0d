//! Linear Rec.2020 - wide-gamut UHD color space.

use crate::primaries::{self, REC2020};
use crate::{ColorSpace, SpaceId, Xyz};
use chroma_math::{Mat3, Vec3};
use std::sync::LazyLock;

// Derived once; steady-state conversions are a single matrix multiply.
static RGB_TO_XYZ: LazyLock<Mat3> = LazyLock::new(|| primaries::rgb_to_xyz_matrix(&REC2020));
static XYZ_TO_RGB: LazyLock<Mat3> = LazyLock::new(|| primaries::xyz_to_rgb_matrix(&REC2020));

/// A linear-light color with Rec.2020 primaries.
///
/// Shares the D65 white point with sRGB, so hub conversions through XYZ
/// need no chromatic adaptation. Colors outside the sRGB gamut map to
/// negative sRGB components rather than being clipped.
///
/// # Example
///
/// ```rust
/// use chroma_spaces::LinearRec2020;
///
/// let white = LinearRec2020::new(1.0, 1.0, 1.0);
/// let xyz = white.to_xyz();
/// assert!((xyz.y - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearRec2020 {
    /// Red component (linear).
    pub r: f64,
    /// Green component (linear).
    pub g: f64,
    /// Blue component (linear).
    pub b: f64,
}

impl LinearRec2020 {
    /// Creates a new linear Rec.2020 value.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Converts to CIE XYZ (D65).
    #[inline]
    pub fn to_xyz(self) -> Xyz {
        Xyz::from_vec3(*RGB_TO_XYZ * self.to_vec3())
    }

    /// Converts from CIE XYZ (D65).
    #[inline]
    pub fn from_xyz(xyz: Xyz) -> Self {
        Self::from_vec3(*XYZ_TO_RGB * xyz.to_vec3())
    }
}

impl ColorSpace for LinearRec2020 {
    const ID: SpaceId = SpaceId::LinearRec2020;

    #[inline]
    fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    #[inline]
    fn from_vec3(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cached_matrices_match_derivation() {
        assert_eq!(*RGB_TO_XYZ, primaries::rgb_to_xyz_matrix(&REC2020));
        assert_eq!(*XYZ_TO_RGB, primaries::xyz_to_rgb_matrix(&REC2020));
    }

    #[test]
    fn test_xyz_roundtrip() {
        let rgb = LinearRec2020::new(0.2, 0.6, 0.9);
        let back = LinearRec2020::from_xyz(rgb.to_xyz());

        assert_relative_eq!(back.r, rgb.r, epsilon = 1e-12);
        assert_relative_eq!(back.g, rgb.g, epsilon = 1e-12);
        assert_relative_eq!(back.b, rgb.b, epsilon = 1e-12);
    }

    #[test]
    fn test_white_matches_srgb_white() {
        use crate::LinearSrgb;

        let w2020 = LinearRec2020::new(1.0, 1.0, 1.0).to_xyz();
        let wsrgb = LinearSrgb::new(1.0, 1.0, 1.0).to_xyz();

        // Same D65 white point in both gamuts
        assert!(w2020.to_vec3().max_abs_diff(wsrgb.to_vec3()) < 1e-12);
    }
}
