//! sRGB - display-encoded and linear variants.
//!
//! [`Srgb`] carries values with the standard transfer function applied;
//! [`LinearSrgb`] carries linear light with the same primaries. The two
//! differ only by the per-channel curve, so converting between them never
//! touches XYZ.

use crate::primaries::{self, SRGB};
use crate::transfer::srgb as curve;
use crate::{ColorSpace, SpaceId, Xyz};
use chroma_math::{Mat3, Vec3};
use std::sync::LazyLock;

// Derived once; steady-state conversions are a single matrix multiply.
static RGB_TO_XYZ: LazyLock<Mat3> = LazyLock::new(|| primaries::rgb_to_xyz_matrix(&SRGB));
static XYZ_TO_RGB: LazyLock<Mat3> = LazyLock::new(|| primaries::xyz_to_rgb_matrix(&SRGB));

/// A display-encoded sRGB color.
///
/// Component range is nominally [0, 1]; out-of-range values are preserved,
/// not clamped.
///
/// # Example
///
/// ```rust
/// use chroma_spaces::Srgb;
///
/// let gray = Srgb::new(0.5, 0.5, 0.5);
/// let linear = gray.to_linear();
/// assert!((linear.r - 0.214).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Srgb {
    /// Red component (encoded).
    pub r: f64,
    /// Green component (encoded).
    pub g: f64,
    /// Blue component (encoded).
    pub b: f64,
}

impl Srgb {
    /// Creates a new encoded sRGB value.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Decodes to linear light via the sRGB EOTF.
    #[inline]
    pub fn to_linear(self) -> LinearSrgb {
        LinearSrgb::new(curve::eotf(self.r), curve::eotf(self.g), curve::eotf(self.b))
    }

    /// Encodes linear light via the sRGB OETF.
    #[inline]
    pub fn from_linear(linear: LinearSrgb) -> Self {
        Self::new(curve::oetf(linear.r), curve::oetf(linear.g), curve::oetf(linear.b))
    }
}

impl ColorSpace for Srgb {
    const ID: SpaceId = SpaceId::Srgb;

    #[inline]
    fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    #[inline]
    fn from_vec3(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// A linear-light color with sRGB primaries.
///
/// The working representation for arithmetic on sRGB-gamut colors; the
/// transfer function is applied only at the [`Srgb`] boundary.
///
/// # Example
///
/// ```rust
/// use chroma_spaces::LinearSrgb;
///
/// let white = LinearSrgb::new(1.0, 1.0, 1.0);
/// let xyz = white.to_xyz();
/// assert!((xyz.y - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearSrgb {
    /// Red component (linear).
    pub r: f64,
    /// Green component (linear).
    pub g: f64,
    /// Blue component (linear).
    pub b: f64,
}

impl LinearSrgb {
    /// Creates a new linear sRGB value.
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

    /// Encodes for display via the sRGB OETF.
    #[inline]
    pub fn encode(self) -> Srgb {
        Srgb::from_linear(self)
    }
}

impl ColorSpace for LinearSrgb {
    const ID: SpaceId = SpaceId::LinearSrgb;

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
        assert_eq!(*RGB_TO_XYZ, primaries::rgb_to_xyz_matrix(&SRGB));
        assert_eq!(*XYZ_TO_RGB, primaries::xyz_to_rgb_matrix(&SRGB));
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let display = Srgb::new(0.5, 0.3, 0.2);
        let back = display.to_linear().encode();

        assert_relative_eq!(back.r, display.r, epsilon = 1e-12);
        assert_relative_eq!(back.g, display.g, epsilon = 1e-12);
        assert_relative_eq!(back.b, display.b, epsilon = 1e-12);
    }

    #[test]
    fn test_white_to_xyz() {
        let xyz = LinearSrgb::new(1.0, 1.0, 1.0).to_xyz();

        assert_relative_eq!(xyz.x, 0.9505, epsilon = 1e-3);
        assert_relative_eq!(xyz.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(xyz.z, 1.0890, epsilon = 1e-3);
    }

    #[test]
    fn test_xyz_roundtrip() {
        let rgb = LinearSrgb::new(0.5, 0.3, 0.8);
        let back = LinearSrgb::from_xyz(rgb.to_xyz());

        assert_relative_eq!(back.r, rgb.r, epsilon = 1e-12);
        assert_relative_eq!(back.g, rgb.g, epsilon = 1e-12);
        assert_relative_eq!(back.b, rgb.b, epsilon = 1e-12);
    }

    #[test]
    fn test_nan_propagates() {
        let xyz = LinearSrgb::new(f64::NAN, 0.5, 0.5).to_xyz();
        // NaN spreads through the matrix multiply, never an error
        assert!(xyz.x.is_nan() && xyz.y.is_nan() && xyz.z.is_nan());
    }
}
