//! RGB primaries, white points, and RGB-XYZ matrix derivation.
//!
//! Primaries define the gamut of an RGB color space as CIE xy
//! chromaticity coordinates. From those coordinates this module derives
//! the 3x3 matrices converting linear RGB to and from CIE XYZ.
//!
//! Deriving the inverse matrix numerically (rather than hard-coding a
//! rounded published inverse) keeps RGB -> XYZ -> RGB round trips exact
//! to machine precision.
//!
//! # Usage
//!
//! ```rust
//! use chroma_spaces::primaries::{SRGB, rgb_to_xyz_matrix};
//! use chroma_math::Vec3;
//!
//! let m = rgb_to_xyz_matrix(&SRGB);
//! let xyz = m * Vec3::ONE;
//! // White maps to the D65 white point, Y normalized to 1
//! assert!((xyz.y - 1.0).abs() < 1e-12);
//! ```

use chroma_math::{Mat3, Vec3};

/// RGB color space primaries definition.
///
/// Defines a color space by its three primary colors and white point,
/// all specified as CIE xy chromaticity coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y) chromaticity
    pub r: (f64, f64),
    /// Green primary (x, y) chromaticity
    pub g: (f64, f64),
    /// Blue primary (x, y) chromaticity
    pub b: (f64, f64),
    /// White point (x, y) chromaticity
    pub w: (f64, f64),
    /// Color space name
    pub name: &'static str,
}

impl Primaries {
    /// White point as XYZ (Y=1).
    #[inline]
    pub fn white_xyz(&self) -> Vec3 {
        xy_to_xyz(self.w.0, self.w.1)
    }
}

/// D65 white point chromaticity (daylight, ~6500K).
pub const D65_XY: (f64, f64) = (0.31270, 0.32900);

/// sRGB / Rec.709 primaries (D65 white point).
pub const SRGB: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.3000, 0.6000),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "sRGB",
};

/// Rec.2020 primaries (D65 white point).
///
/// Ultra HD TV color space with a much wider gamut than Rec.709.
pub const REC2020: Primaries = Primaries {
    r: (0.7080, 0.2920),
    g: (0.1700, 0.7970),
    b: (0.1310, 0.0460),
    w: D65_XY,
    name: "Rec.2020",
};

/// Converts xy chromaticity to XYZ (with Y=1).
pub fn xy_to_xyz(x: f64, y: f64) -> Vec3 {
    if y.abs() < 1e-14 {
        Vec3::ZERO
    } else {
        Vec3::new(x / y, 1.0, (1.0 - x - y) / y)
    }
}

/// Computes the RGB to XYZ matrix for a set of primaries.
///
/// Standard derivation: convert each primary and the white point from xy
/// to XYZ (Y=1), then solve for the per-primary scaling factors that map
/// RGB white (1,1,1) onto the white point.
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> Mat3 {
    let r_xyz = xy_to_xyz(primaries.r.0, primaries.r.1);
    let g_xyz = xy_to_xyz(primaries.g.0, primaries.g.1);
    let b_xyz = xy_to_xyz(primaries.b.0, primaries.b.1);
    let w_xyz = xy_to_xyz(primaries.w.0, primaries.w.1);

    // Solve M * S = W for the scaling factors S
    let m = Mat3::from_col_vecs(r_xyz, g_xyz, b_xyz);
    let m_inv = m.inverse().unwrap_or(Mat3::IDENTITY);
    let s = m_inv * w_xyz;

    Mat3::from_col_vecs(r_xyz * s.x, g_xyz * s.y, b_xyz * s.z)
}

/// Computes the XYZ to RGB matrix for a set of primaries.
///
/// This is the inverse of [`rgb_to_xyz_matrix`].
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> Mat3 {
    rgb_to_xyz_matrix(primaries)
        .inverse()
        .unwrap_or(Mat3::IDENTITY)
}

/// Computes a matrix to convert from one RGB color space to another.
///
/// The conversion goes through XYZ: `RGB_src -> XYZ -> RGB_dst`. Both
/// built-in gamuts share the D65 white point, so no chromatic adaptation
/// is involved.
pub fn rgb_to_rgb_matrix(src: &Primaries, dst: &Primaries) -> Mat3 {
    let src_to_xyz = rgb_to_xyz_matrix(src);
    let xyz_to_dst = xyz_to_rgb_matrix(dst);
    xyz_to_dst * src_to_xyz
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_srgb_matrix() {
        let m = rgb_to_xyz_matrix(&SRGB);

        // Check against the published IEC 61966-2-1 values
        assert_relative_eq!(m.m[0][0], 0.4124564, epsilon = 1e-4);
        assert_relative_eq!(m.m[1][0], 0.2126729, epsilon = 1e-4);
        assert_relative_eq!(m.m[2][2], 0.9503041, epsilon = 1e-4);
    }

    #[test]
    fn test_white_point() {
        let m = rgb_to_xyz_matrix(&SRGB);
        let white = m * Vec3::ONE;

        assert_relative_eq!(white.x, 0.9505, epsilon = 1e-3);
        assert_relative_eq!(white.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(white.z, 1.0890, epsilon = 1e-3);
    }

    #[test]
    fn test_roundtrip_exact() {
        let to_xyz = rgb_to_xyz_matrix(&SRGB);
        let to_rgb = xyz_to_rgb_matrix(&SRGB);

        let rgb = Vec3::new(0.5, 0.3, 0.8);
        let back = to_rgb * (to_xyz * rgb);

        assert!(rgb.max_abs_diff(back) < 1e-12);
    }

    #[test]
    fn test_rgb_to_rgb_identity() {
        let m = rgb_to_rgb_matrix(&SRGB, &SRGB);

        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(m.m[i][j], expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_rec2020_wider_than_srgb() {
        // A saturated sRGB red fits inside Rec.2020 with positive components
        let m = rgb_to_rgb_matrix(&SRGB, &REC2020);
        let red = m * Vec3::new(1.0, 0.0, 0.0);
        assert!(red.x > 0.0 && red.y > 0.0 && red.z >= 0.0);
        // And Rec.2020 red is outside sRGB (negative components appear)
        let m_back = rgb_to_rgb_matrix(&REC2020, &SRGB);
        let wide_red = m_back * Vec3::new(1.0, 0.0, 0.0);
        assert!(wide_red.y < 0.0 || wide_red.z < 0.0);
    }
}
