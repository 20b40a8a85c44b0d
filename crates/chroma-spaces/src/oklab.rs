//! Oklab - perceptually uniform opponent space.
//!
//! Bjorn Ottosson's 2020 space: XYZ is mapped to an LMS-like cone
//! response (M1), compressed with a cube root, then rotated into
//! lightness/opponent axes (M2). Better hue uniformity than CIE Lab for
//! gamut mapping and interpolation.
//!
//! # Reference
//!
//! <https://bottosson.github.io/posts/oklab/>

use crate::{ColorSpace, SpaceId, Xyz};
use chroma_math::{Mat3, Vec3};

/// XYZ (D65) to cone response.
const M1: Mat3 = Mat3::from_rows([
    [0.8189330101, 0.3618667424, -0.1288597137],
    [0.0329845436, 0.9293118715, 0.0361456387],
    [0.0482003018, 0.2643662691, 0.6338517070],
]);

/// Nonlinear cone response to Lab axes.
const M2: Mat3 = Mat3::from_rows([
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
]);

/// A color in Oklab.
///
/// # Example
///
/// ```rust
/// use chroma_spaces::{Oklab, Xyz};
///
/// // D65 white is L=1, a=b=0
/// let ok = Oklab::from_xyz(Xyz::new(0.95047, 1.0, 1.08883));
/// assert!((ok.l - 1.0).abs() < 1e-3);
/// assert!(ok.a.abs() < 1e-3 && ok.b.abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Oklab {
    /// Perceptual lightness (0 = black, 1 = reference white).
    pub l: f64,
    /// Green-red opponent axis.
    pub a: f64,
    /// Blue-yellow opponent axis.
    pub b: f64,
}

impl Oklab {
    /// Creates a new Oklab value.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Converts from CIE XYZ (D65).
    pub fn from_xyz(xyz: Xyz) -> Self {
        let lms = M1 * xyz.to_vec3();
        let lms_prime = Vec3::new(lms.x.cbrt(), lms.y.cbrt(), lms.z.cbrt());
        Self::from_vec3(M2 * lms_prime)
    }

    /// Converts to CIE XYZ (D65).
    pub fn to_xyz(self) -> Xyz {
        let m2_inv = M2.inverse().unwrap_or(Mat3::IDENTITY);
        let m1_inv = M1.inverse().unwrap_or(Mat3::IDENTITY);

        let lms_prime = m2_inv * self.to_vec3();
        let lms = Vec3::new(
            lms_prime.x * lms_prime.x * lms_prime.x,
            lms_prime.y * lms_prime.y * lms_prime.y,
            lms_prime.z * lms_prime.z * lms_prime.z,
        );
        Xyz::from_vec3(m1_inv * lms)
    }
}

impl ColorSpace for Oklab {
    const ID: SpaceId = SpaceId::Oklab;

    #[inline]
    fn to_vec3(self) -> Vec3 {
        Vec3::new(self.l, self.a, self.b)
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
    fn test_white() {
        let ok = Oklab::from_xyz(Xyz::new(0.95047, 1.0, 1.08883));
        assert_relative_eq!(ok.l, 1.0, epsilon = 1e-3);
        assert_relative_eq!(ok.a, 0.0, epsilon = 1e-3);
        assert_relative_eq!(ok.b, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn test_black() {
        let ok = Oklab::from_xyz(Xyz::new(0.0, 0.0, 0.0));
        assert_relative_eq!(ok.l, 0.0, epsilon = 1e-9);
        assert_relative_eq!(ok.a, 0.0, epsilon = 1e-9);
        assert_relative_eq!(ok.b, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_roundtrip() {
        let xyz = Xyz::new(0.3, 0.45, 0.2);
        let back = Oklab::from_xyz(xyz).to_xyz();

        assert_relative_eq!(back.x, xyz.x, epsilon = 1e-9);
        assert_relative_eq!(back.y, xyz.y, epsilon = 1e-9);
        assert_relative_eq!(back.z, xyz.z, epsilon = 1e-9);
    }

    #[test]
    fn test_reference_values() {
        // Spot checks from the Oklab reference tables
        let ok = Oklab::from_xyz(Xyz::new(1.0, 0.0, 0.0));
        assert_relative_eq!(ok.l, 0.450, epsilon = 1e-3);
        assert_relative_eq!(ok.a, 1.236, epsilon = 1e-3);
        assert_relative_eq!(ok.b, -0.019, epsilon = 1e-3);

        let ok = Oklab::from_xyz(Xyz::new(0.0, 1.0, 0.0));
        assert_relative_eq!(ok.l, 0.922, epsilon = 1e-3);
        assert_relative_eq!(ok.a, -0.671, epsilon = 1e-3);
        assert_relative_eq!(ok.b, 0.263, epsilon = 1e-3);
    }
}
