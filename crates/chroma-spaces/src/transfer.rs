//! Transfer functions (encode/decode curves).
//!
//! Only the sRGB curve is needed by the built-in spaces; the module keeps
//! the per-curve submodule layout so further curves slot in alongside.

/// sRGB transfer function (IEC 61966-2-1).
///
/// Piecewise: a linear segment near black, a ~2.4 power curve elsewhere.
pub mod srgb {
    /// sRGB EOTF: decodes display-encoded values to linear light.
    ///
    /// # Formula
    ///
    /// ```text
    /// if V <= 0.04045:
    ///     L = V / 12.92
    /// else:
    ///     L = ((V + 0.055) / 1.055)^2.4
    /// ```
    ///
    /// # Example
    ///
    /// ```rust
    /// use chroma_spaces::transfer::srgb::eotf;
    ///
    /// let linear = eotf(0.5);
    /// assert!((linear - 0.214).abs() < 0.01);
    /// ```
    #[inline]
    pub fn eotf(v: f64) -> f64 {
        if v <= 0.04045 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    }

    /// sRGB OETF: encodes linear light for display.
    ///
    /// # Formula
    ///
    /// ```text
    /// if L <= 0.0031308:
    ///     V = L * 12.92
    /// else:
    ///     V = 1.055 * L^(1/2.4) - 0.055
    /// ```
    #[inline]
    pub fn oetf(l: f64) -> f64 {
        if l <= 0.0031308 {
            l * 12.92
        } else {
            1.055 * l.powf(1.0 / 2.4) - 0.055
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use approx::assert_relative_eq;

        #[test]
        fn test_roundtrip() {
            for i in 0..=100 {
                let v = i as f64 / 100.0;
                assert_relative_eq!(oetf(eotf(v)), v, epsilon = 1e-12);
            }
        }

        #[test]
        fn test_boundaries() {
            assert_eq!(eotf(0.0), 0.0);
            assert_relative_eq!(eotf(1.0), 1.0, epsilon = 1e-12);
            assert_eq!(oetf(0.0), 0.0);
            assert_relative_eq!(oetf(1.0), 1.0, epsilon = 1e-12);
        }

        #[test]
        fn test_midpoint() {
            // sRGB 0.5 should be approximately 0.214 linear
            assert_relative_eq!(eotf(0.5), 0.214, epsilon = 0.01);
        }

        #[test]
        fn test_nan_propagates() {
            assert!(eotf(f64::NAN).is_nan());
            assert!(oetf(f64::NAN).is_nan());
        }
    }
}
