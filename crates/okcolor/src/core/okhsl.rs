//! Okhsl and Okhsv, Björn Ottosson's perceptual takes on HSL and HSV.
//!
//! Both are derived from Oklab for a specific RGB gamut. Saturation is
//! relative to the gamut boundary, so that full saturation is the most
//! chromatic color of the gamut for the hue and lightness. Lightness and value
//! are remapped with a *toe* function that approximates CIE Lab's lightness
//! for dark colors. Coordinates are ordered hue (in degrees), saturation, and
//! lightness or value.

use super::gamut::{cusp_with, intersection_with, Cusp, Gamut, GamutCoefficients, SRGB_COEFFICIENTS};
use super::math::constrain_angle;
use super::matrices::LMS_TO_LINEAR_SRGB;
use super::oklab::oklab_to;
use crate::error::ConversionError;
use crate::{Float, Matrix};

const K1: Float = 0.206;
const K2: Float = 0.03;
const K3: Float = (1.0 + K1) / (1.0 + K2);

/// Map Oklab lightness to perceived lightness.
pub fn toe(x: Float) -> Float {
    let k = K3.mul_add(x, -K1);
    0.5 * (k + k.mul_add(k, 4.0 * K2 * K3 * x).sqrt())
}

/// Map perceived lightness to Oklab lightness.
pub fn toe_inv(x: Float) -> Float {
    x.mul_add(x, K1 * x) / (K3 * (x + K2))
}

/// Convert the cusp into the slopes of the gamut triangle's two edges.
fn to_st(cusp: &Cusp) -> (Float, Float) {
    (
        cusp.chroma / cusp.lightness,
        cusp.chroma / (1.0 - cusp.lightness),
    )
}

/// Approximate the slopes of a smoothed gamut triangle.
///
/// The polynomials were fitted for sRGB. Since they only shape the curve
/// between the triangle's edges, they serve other gamuts well enough.
#[allow(clippy::excessive_precision)]
fn st_mid(a: Float, b: Float) -> (Float, Float) {
    let s = 0.11516993
        + 1.0
            / (7.44778970
                + 4.15901240 * b
                + a * (-2.19557347
                    + 1.75198401 * b
                    + a * (-2.13704948
                        - 10.02301043 * b
                        + a * (-4.24894561 + 5.38770819 * b + 4.69891013 * a))));

    let t = 0.11239642
        + 1.0
            / (1.61320320 - 0.68124379 * b
                + a * (0.40370612
                    + 0.90148123 * b
                    + a * (-0.27087943
                        + 0.61223990 * b
                        + a * (0.00299215 - 0.45399568 * b - 0.14661872 * a))));

    (s, t)
}

/// The chroma values anchoring the saturation scale for a hue and lightness.
struct ChromaAnchors {
    zero: Float,
    mid: Float,
    max: Float,
}

#[allow(non_snake_case)]
fn chroma_anchors(
    L: Float,
    a: Float,
    b: Float,
    cusp: &Cusp,
    lms_to_rgb: &Matrix,
) -> ChromaAnchors {
    let max = intersection_with(a, b, L, 1.0, L, cusp, lms_to_rgb);
    let (S, T) = to_st(cusp);

    // Scale factor compensating for the curved part of the gamut shape
    let k = max / (L * S).min((1.0 - L) * T);

    let (s_mid, t_mid) = st_mid(a, b);
    let ca = L * s_mid;
    let cb = (1.0 - L) * t_mid;
    let mid = 0.9 * k * (1.0 / (1.0 / ca.powi(4) + 1.0 / cb.powi(4))).sqrt().sqrt();

    let ca = L * 0.4;
    let cb = (1.0 - L) * 0.8;
    let zero = (1.0 / (1.0 / (ca * ca) + 1.0 / (cb * cb))).sqrt();

    ChromaAnchors { zero, mid, max }
}

/// Determine the hue in degrees, which is zero for achromatic colors.
fn hue_of(a: Float, b: Float, c: Float) -> Float {
    if c == 0.0 {
        0.0
    } else {
        constrain_angle(180.0 + (-b).atan2(-a).to_degrees())
    }
}

// ====================================================================================================================

const ACHROMATIC_LIGHTNESS_EPSILON: Float = 1e-7;
const ACHROMATIC_SATURATION_EPSILON: Float = 1e-4;

#[allow(non_snake_case)]
fn okhsl_to_oklab_in(
    value: &[Float; 3],
    lms_to_rgb: &Matrix,
    coefficients: &GamutCoefficients,
) -> [Float; 3] {
    let [h, s, l] = *value;
    let L = toe_inv(l);

    if L == 0.0 || L == 1.0 || s == 0.0 {
        return [L, 0.0, 0.0];
    }

    let (b_, a_) = constrain_angle(h).to_radians().sin_cos();
    let cusp = cusp_with(a_, b_, lms_to_rgb, coefficients);
    let ChromaAnchors { zero, mid, max } = chroma_anchors(L, a_, b_, &cusp, lms_to_rgb);

    let c = if s < 0.8 {
        let t = 1.25 * s;
        let k1 = 0.8 * zero;
        let k2 = 1.0 - k1 / mid;
        t * k1 / (1.0 - k2 * t)
    } else {
        let t = 5.0 * (s - 0.8);
        let k1 = 0.2 * mid * mid * 1.25 * 1.25 / zero;
        let k2 = 1.0 - k1 / (max - mid);
        mid + t * k1 / (1.0 - k2 * t)
    };

    [L, c * a_, c * b_]
}

#[allow(non_snake_case)]
fn oklab_to_okhsl_in(
    value: &[Float; 3],
    lms_to_rgb: &Matrix,
    coefficients: &GamutCoefficients,
) -> [Float; 3] {
    let [L, a, b] = *value;
    let l = toe(L);
    let c = a.hypot(b);
    let h = hue_of(a, b, c);

    let s = if l == 0.0 || l == 1.0 || c == 0.0 {
        0.0
    } else {
        let (a_, b_) = (a / c, b / c);
        let cusp = cusp_with(a_, b_, lms_to_rgb, coefficients);
        let ChromaAnchors { zero, mid, max } = chroma_anchors(L, a_, b_, &cusp, lms_to_rgb);

        if c < mid {
            let k1 = 0.8 * zero;
            let k2 = 1.0 - k1 / mid;
            let t = c / k2.mul_add(c, k1);
            t * 0.8
        } else {
            let k1 = 0.2 * mid * mid * 1.25 * 1.25 / zero;
            let k2 = 1.0 - k1 / (max - mid);
            let t = (c - mid) / k2.mul_add(c - mid, k1);
            t.mul_add(0.2, 0.8)
        }
    };

    // Near black and white, saturation is meaningless
    let achromatic = s.abs() < ACHROMATIC_SATURATION_EPSILON;
    if !achromatic && (l == 0.0 || (1.0 - l).abs() < ACHROMATIC_LIGHTNESS_EPSILON) {
        return [h, 0.0, l];
    }

    [h, s, l]
}

#[allow(non_snake_case)]
fn okhsv_to_oklab_in(
    value: &[Float; 3],
    lms_to_rgb: &Matrix,
    coefficients: &GamutCoefficients,
) -> [Float; 3] {
    let [h, s, v] = *value;
    let L = toe_inv(v);

    if L == 0.0 || s == 0.0 {
        return [L, 0.0, 0.0];
    }

    let (b_, a_) = constrain_angle(h).to_radians().sin_cos();
    let cusp = cusp_with(a_, b_, lms_to_rgb, coefficients);
    let (S, T) = to_st(&cusp);
    let S0 = 0.5;
    let k = 1.0 - S0 / S;

    // Lightness and chroma for the triangle with the cusp at value one
    let denominator = S0 + T - T * k * s;
    let lv = 1.0 - s * S0 / denominator;
    let cv = s * T * S0 / denominator;

    let l = v * lv;
    let c = v * cv;

    // Compensate for the toe and the curved top of the gamut
    let scale = scale_lightness(lv, cv, a_, b_, lms_to_rgb);
    let l_new = toe_inv(l);
    let c = c * l_new / l;

    let l = l_new * scale;
    let c = c * scale;

    [l, c * a_, c * b_]
}

#[allow(non_snake_case)]
fn oklab_to_okhsv_in(
    value: &[Float; 3],
    lms_to_rgb: &Matrix,
    coefficients: &GamutCoefficients,
) -> [Float; 3] {
    let [L, a, b] = *value;
    let c = a.hypot(b);
    let h = hue_of(a, b, c);

    if L == 0.0 || L == 1.0 || c == 0.0 {
        return [h, 0.0, toe(L)];
    }

    let (a_, b_) = (a / c, b / c);
    let cusp = cusp_with(a_, b_, lms_to_rgb, coefficients);
    let (S, T) = to_st(&cusp);
    let S0 = 0.5;
    let k = 1.0 - S0 / S;

    // The triangle's top edge at the color's lightness and chroma
    let t = T / L.mul_add(T, c);
    let lv = t * L;
    let cv = t * c;

    let scale = scale_lightness(lv, cv, a_, b_, lms_to_rgb);
    let v = toe(L / scale) / lv;
    let s = (S0 + T) * cv / (T * S0 + T * k * cv);

    [h, s, v]
}

/// Determine the factor that moves the color onto the gamut's curved top.
fn scale_lightness(lv: Float, cv: Float, a: Float, b: Float, lms_to_rgb: &Matrix) -> Float {
    let lvt = toe_inv(lv);
    let cvt = cv * lvt / lv;
    let [r, g, bb] = oklab_to(&[lvt, a * cvt, b * cvt], lms_to_rgb);
    (1.0 / r.max(g).max(bb).max(0.0)).cbrt()
}

// ====================================================================================================================

/// Convert Okhsl for the gamut to Oklab.
///
/// ```
/// # use okcolor::{okhsl_to_oklab, Gamut};
/// let [l, a, b] = okhsl_to_oklab(&[30.0, 0.5, 0.5], &Gamut::SRGB)?;
/// assert!((l - 0.568838198942395).abs() < 1e-9);
/// assert!((a - 0.08553885335853362).abs() < 1e-9);
/// assert!((b - 0.049385880012721296).abs() < 1e-9);
/// # Ok::<(), okcolor::error::ConversionError>(())
/// ```
///
/// # Errors
///
/// This function fails if the gamut's linear space lacks the matrix from LMS.
pub fn okhsl_to_oklab(value: &[Float; 3], gamut: &Gamut) -> Result<[Float; 3], ConversionError> {
    Ok(okhsl_to_oklab_in(value, gamut.lms_to_rgb()?, gamut.coefficients()))
}

/// Convert Oklab to Okhsl for the gamut.
///
/// # Errors
///
/// This function fails if the gamut's linear space lacks the matrix from LMS.
pub fn oklab_to_okhsl(value: &[Float; 3], gamut: &Gamut) -> Result<[Float; 3], ConversionError> {
    Ok(oklab_to_okhsl_in(value, gamut.lms_to_rgb()?, gamut.coefficients()))
}

/// Convert Okhsv for the gamut to Oklab.
///
/// # Errors
///
/// This function fails if the gamut's linear space lacks the matrix from LMS.
pub fn okhsv_to_oklab(value: &[Float; 3], gamut: &Gamut) -> Result<[Float; 3], ConversionError> {
    Ok(okhsv_to_oklab_in(value, gamut.lms_to_rgb()?, gamut.coefficients()))
}

/// Convert Oklab to Okhsv for the gamut.
///
/// # Errors
///
/// This function fails if the gamut's linear space lacks the matrix from LMS.
pub fn oklab_to_okhsv(value: &[Float; 3], gamut: &Gamut) -> Result<[Float; 3], ConversionError> {
    Ok(oklab_to_okhsv_in(value, gamut.lms_to_rgb()?, gamut.coefficients()))
}

// sRGB versions for the registered color spaces

pub(crate) fn okhsl_to_oklab_srgb(value: &[Float; 3]) -> [Float; 3] {
    okhsl_to_oklab_in(value, &LMS_TO_LINEAR_SRGB, &SRGB_COEFFICIENTS)
}

pub(crate) fn oklab_to_okhsl_srgb(value: &[Float; 3]) -> [Float; 3] {
    oklab_to_okhsl_in(value, &LMS_TO_LINEAR_SRGB, &SRGB_COEFFICIENTS)
}

pub(crate) fn okhsv_to_oklab_srgb(value: &[Float; 3]) -> [Float; 3] {
    okhsv_to_oklab_in(value, &LMS_TO_LINEAR_SRGB, &SRGB_COEFFICIENTS)
}

pub(crate) fn oklab_to_okhsv_srgb(value: &[Float; 3]) -> [Float; 3] {
    oklab_to_okhsv_in(value, &LMS_TO_LINEAR_SRGB, &SRGB_COEFFICIENTS)
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::{
        assert_close_enough, assert_same_coordinates, convert, ColorSpace, LOOSE_TOLERANCE,
    };
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_toe() {
        for x in [0.0, 0.1, 0.5, 0.9, 1.0] {
            assert_close_enough!(toe_inv(toe(x)), x);
        }
        assert_close_enough!(toe(1.0), 1.0);
        assert!(toe(0.2) < 0.2, "toe darkens dark colors");
    }

    #[test]
    fn test_okhsl() -> Result<(), ConversionError> {
        let oklab = okhsl_to_oklab(&[30.0, 0.5, 0.5], &Gamut::SRGB)?;
        assert_same_coordinates!(
            &oklab,
            &[0.568838198942395, 0.08553885335853362, 0.049385880012721296]
        );
        assert_same_coordinates!(&oklab_to_okhsl(&oklab, &Gamut::SRGB)?, &[30.0, 0.5, 0.5]);

        // Below 0.8 saturation, the curve does not depend on the maximum chroma
        let p3 = okhsl_to_oklab(&[30.0, 0.5, 0.5], &Gamut::DISPLAY_P3)?;
        assert_same_coordinates!(&p3, &oklab);

        let orange = convert(&ColorSpace::SRGB, &ColorSpace::OKHSL, &[1.0, 0.5, 0.0])?;
        assert_same_coordinates!(&orange, &[52.77573264001512, 1.0, 0.6874356547788677], 1e-6);

        // Black, white, and grays
        assert_eq!(oklab_to_okhsl(&[0.0, 0.0, 0.0], &Gamut::SRGB)?, [0.0, 0.0, 0.0]);
        let white = oklab_to_okhsl(&[1.0, 0.0, 0.0], &Gamut::SRGB)?;
        assert_same_coordinates!(&white, &[0.0, 0.0, 1.0]);
        let gray = okhsl_to_oklab(&[120.0, 0.0, 0.5], &Gamut::SRGB)?;
        assert_eq!([gray[1], gray[2]], [0.0, 0.0]);
        Ok(())
    }

    #[test]
    fn test_okhsv() -> Result<(), ConversionError> {
        let oklab = okhsv_to_oklab(&[30.0, 0.5, 0.5], &Gamut::SRGB)?;
        assert_same_coordinates!(
            &oklab,
            &[0.45178419415172344, 0.06582951989066341, 0.03800669102949833]
        );
        assert_same_coordinates!(&oklab_to_okhsv(&oklab, &Gamut::SRGB)?, &[30.0, 0.5, 0.5]);

        let orange = convert(&ColorSpace::SRGB, &ColorSpace::OKHSV, &[1.0, 0.5, 0.0])?;
        assert_same_coordinates!(&orange, &[52.77573264001512, 1.0, 1.0], 1e-6);

        assert_eq!(okhsv_to_oklab(&[200.0, 0.7, 0.0], &Gamut::SRGB)?, [0.0, 0.0, 0.0]);
        let white = oklab_to_okhsv(&[1.0, 0.0, 0.0], &Gamut::SRGB)?;
        assert_same_coordinates!(&white, &[0.0, 0.0, 1.0]);
        Ok(())
    }

    #[test]
    fn test_round_trips() -> Result<(), ConversionError> {
        let mut rng = StdRng::seed_from_u64(1_337);

        for gamut in Gamut::all() {
            for _ in 0..100 {
                let hsx: [Float; 3] = [
                    rng.random_range(0.5..359.5),
                    rng.random_range(0.01..0.99),
                    rng.random_range(0.01..0.99),
                ];

                let oklab = okhsl_to_oklab(&hsx, gamut)?;
                assert_same_coordinates!(&oklab_to_okhsl(&oklab, gamut)?, &hsx, LOOSE_TOLERANCE);

                let oklab = okhsv_to_oklab(&hsx, gamut)?;
                assert_same_coordinates!(&oklab_to_okhsv(&oklab, gamut)?, &hsx, LOOSE_TOLERANCE);
            }
        }

        Ok(())
    }

    #[test]
    fn test_full_saturation() -> Result<(), ConversionError> {
        // Full saturation and value sit on the gamut boundary
        for degrees in (0..360).step_by(15) {
            let rgb = convert(
                &ColorSpace::OKHSV,
                &ColorSpace::SRGB_LINEAR,
                &[degrees as Float, 1.0, 1.0],
            )?;
            let max = rgb[0].max(rgb[1]).max(rgb[2]);
            let min = rgb[0].min(rgb[1]).min(rgb[2]);
            assert_close_enough!(max, 1.0, 1e-3);
            assert_close_enough!(min, 0.0, 1e-3);
        }
        Ok(())
    }

    #[test]
    fn test_missing_lms() {
        let gamut = Gamut::new(&ColorSpace::PROPHOTO_RGB, *Gamut::SRGB.coefficients());
        assert!(okhsl_to_oklab(&[0.0, 0.5, 0.5], &gamut).is_err());
        assert!(oklab_to_okhsv(&[0.5, 0.1, 0.0], &gamut).is_err());
    }
}
