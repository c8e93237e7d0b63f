use super::math::{cbrt3, cube3, transform};
use super::matrices::{LMS_TO_OKLAB, OKLAB_TO_LMS};
use crate::{Float, Matrix};

/// Convert Oklab coordinates to a space with the given LMS matrix.
///
/// This function expands Oklab to the nonlinear LMS cone responses, cubes
/// them, and then applies the target's matrix. With the matrix for a linear
/// RGB space, the result is that space's coordinates.
#[inline]
pub fn oklab_to(oklab: &[Float; 3], lms_to_output: &Matrix) -> [Float; 3] {
    let lms = cube3(&transform(&OKLAB_TO_LMS, oklab));
    transform(lms_to_output, &lms)
}

/// Convert coordinates from a space with the given LMS matrix to Oklab.
///
/// This function is the inverse of [`oklab_to`], taking cube roots of the cone
/// responses before compressing them into Oklab.
#[inline]
pub fn oklab_from(input: &[Float; 3], input_to_lms: &Matrix) -> [Float; 3] {
    let lms = cbrt3(&transform(input_to_lms, input));
    transform(&LMS_TO_OKLAB, &lms)
}

// --------------------------------------------------------------------------------------------------------------------

/// The threshold below which both a and b denote an achromatic color.
///
/// When converting Oklab to Oklch, colors with `|a|` and `|b|` below this
/// threshold have zero chroma and, by convention, zero hue.
pub const ACHROMATIC_EPSILON: Float = 1e-7;

/// Convert Oklch to Oklab.
///
/// Chroma is not clamped. A negative chroma thus produces the point mirrored
/// through the neutral axis.
///
/// ```
/// # use okcolor::oklch_to_oklab;
/// let [l, a, b] = oklch_to_oklab(&[0.5, -0.36, 90.0]);
/// assert_eq!(l, 0.5);
/// assert!(a.abs() < 1e-15);
/// assert!((b + 0.36).abs() < 1e-15);
/// ```
#[allow(non_snake_case)]
pub fn oklch_to_oklab(value: &[Float; 3]) -> [Float; 3] {
    let [L, C, h] = *value;
    let (sin, cos) = h.to_radians().sin_cos();
    [L, C * cos, C * sin]
}

/// Convert Oklab to Oklch with the default [`ACHROMATIC_EPSILON`].
pub fn oklab_to_oklch(value: &[Float; 3]) -> [Float; 3] {
    oklab_to_oklch_with(value, ACHROMATIC_EPSILON)
}

/// Convert Oklab to Oklch with the given achromatic threshold.
///
/// If both a and b have smaller magnitude than the threshold, the result has
/// zero chroma and zero hue. Otherwise, hue is normalized to `0..360`.
#[allow(non_snake_case)]
pub fn oklab_to_oklch_with(value: &[Float; 3], epsilon: Float) -> [Float; 3] {
    let [L, a, b] = *value;

    if a.abs() < epsilon && b.abs() < epsilon {
        return [L, 0.0, 0.0];
    }

    let h = b.atan2(a).to_degrees();
    let h = if h.is_sign_negative() { h + 360.0 } else { h };
    // Adding 360 to a tiny negative angle rounds to 360
    let h = if h >= 360.0 { 0.0 } else { h };

    [L, a.hypot(b), h]
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::matrices::{LMS_TO_XYZ, XYZ_TO_LMS};
    use crate::core::{assert_close_enough, assert_same_coordinates};

    #[test]
    fn test_oklab_matrices() {
        // Björn Ottosson's reference values, rounded to 3 decimals
        for (xyz, oklab) in [
            ([0.95, 1.0, 1.089], [1.0, 0.0, 0.0]),
            ([1.0, 0.0, 0.0], [0.450, 1.236, -0.019]),
            ([0.0, 1.0, 0.0], [0.922, -0.671, 0.263]),
            ([0.0, 0.0, 1.0], [0.153, -1.415, -0.449]),
        ] {
            let actual = oklab_from(&xyz, &XYZ_TO_LMS);
            assert_same_coordinates!(&actual, &oklab, 5e-4);
            assert_same_coordinates!(&oklab_to(&actual, &LMS_TO_XYZ), &xyz);
        }
    }

    #[test]
    fn test_polar() {
        let oklch = oklab_to_oklch(&[0.6, 0.1, -0.1]);
        assert_close_enough!(oklch[1], 0.14142135623730953);
        assert_close_enough!(oklch[2], 315.0);
        assert_same_coordinates!(&oklch_to_oklab(&oklch), &[0.6, 0.1, -0.1]);

        for l in [0.0, 0.3, 1.0] {
            assert_eq!(oklab_to_oklch(&[l, 0.0, 0.0]), [l, 0.0, 0.0], "achromatic");
        }

        assert_eq!(
            oklab_to_oklch(&[0.5, 5e-8, -5e-8]),
            [0.5, 0.0, 0.0],
            "below threshold"
        );
        let [_, c, h] = oklab_to_oklch_with(&[0.5, 5e-8, -5e-8], 1e-9);
        assert!(c > 0.0 && h > 300.0, "above smaller threshold: {} {}", c, h);
    }
}
