//! CIE L*a*b* - perceptually ordered opponent space.
//!
//! L* is lightness (0..100), a* runs green-red, b* runs blue-yellow.
//! Defined relative to a reference white; the built-in spaces all use
//! D65, so these converters normalize against [`D65_WHITE`].

use crate::xyz::D65_WHITE;
use crate::{ColorSpace, SpaceId, Xyz};
use chroma_math::Vec3;

// CIE constants: delta = 6/29
const DELTA: f64 = 6.0 / 29.0;
const DELTA_CUBED: f64 = DELTA * DELTA * DELTA;

#[inline]
fn f(t: f64) -> f64 {
    if t > DELTA_CUBED {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

#[inline]
fn f_inv(t: f64) -> f64 {
    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}

/// A color in CIE L*a*b* (D65 reference white).
///
/// # Example
///
/// ```rust
/// use chroma_spaces::{Lab, Xyz};
///
/// // D65 white is L*=100, a*=b*=0
/// let lab = Lab::from_xyz(Xyz::new(0.95047, 1.0, 1.08883));
/// assert!((lab.l - 100.0).abs() < 1e-9);
/// assert!(lab.a.abs() < 1e-9 && lab.b.abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    /// Lightness L* (0 = black, 100 = reference white).
    pub l: f64,
    /// Green-red opponent axis a*.
    pub a: f64,
    /// Blue-yellow opponent axis b*.
    pub b: f64,
}

impl Lab {
    /// Creates a new Lab value.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Converts from CIE XYZ (D65).
    pub fn from_xyz(xyz: Xyz) -> Self {
        let fx = f(xyz.x / D65_WHITE.x);
        let fy = f(xyz.y / D65_WHITE.y);
        let fz = f(xyz.z / D65_WHITE.z);

        Self::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
    }

    /// Converts to CIE XYZ (D65).
    pub fn to_xyz(self) -> Xyz {
        let fy = (self.l + 16.0) / 116.0;
        let fx = fy + self.a / 500.0;
        let fz = fy - self.b / 200.0;

        Xyz::new(
            D65_WHITE.x * f_inv(fx),
            D65_WHITE.y * f_inv(fy),
            D65_WHITE.z * f_inv(fz),
        )
    }
}

impl ColorSpace for Lab {
    const ID: SpaceId = SpaceId::CieLab;

    #[inline]
    fn to_vec3(self) -> Vec3 {
        Vec3::new(self.l, self.a, self.b)
    }

    #[inline]
    fn from_vec3(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
