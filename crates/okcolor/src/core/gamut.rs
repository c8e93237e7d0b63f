//! Gamut mapping in Oklch after Björn Ottosson.
//!
//! For a given hue, the boundary of an RGB gamut in Oklab's lightness/chroma
//! plane is approximated by a triangle between black, white, and the *cusp*,
//! the point with maximum chroma. Finding the cusp amounts to finding the
//! maximum saturation `S = C / L` before one of the RGB channels clips. A
//! polynomial fitted per gamut and channel yields a first estimate, which one
//! step of Halley's method refines. Gamut mapping then projects an
//! out-of-gamut color along a line of constant hue towards a target lightness
//! until it hits the boundary.

use super::conversion::convert;
use super::math::{dot, lerp};
use super::matrices::OKLAB_TO_LMS;
use super::oklab::oklab_to;
use super::ColorSpace;
use crate::error::ConversionError;
use crate::{Float, Matrix};

/// The polynomial approximation for one RGB channel.
///
/// If the dot product of the direction with a normalized hue vector `(a, b)`
/// exceeds one, the channel is the first to clip for that hue. The red and
/// green channels are tested in that order; blue is the fallback and its
/// direction is not consulted. The polynomial evaluates to
/// `k0 + k1·a + k2·b + k3·a² + k4·a·b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelCoefficients {
    pub direction: [Float; 2],
    pub polynomial: [Float; 5],
}

/// The coefficients for the red, green, and blue channels.
pub type GamutCoefficients = [ChannelCoefficients; 3];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const SRGB_COEFFICIENTS: GamutCoefficients = [
    ChannelCoefficients {
        direction: [-1.88170328, -0.80936493],
        polynomial: [1.19086277, 1.76576728, 0.59662641, 0.75515197, 0.56771245],
    },
    ChannelCoefficients {
        direction: [1.81444104, -1.19445276],
        polynomial: [0.73956515, -0.45954404, 0.08285427, 0.12541070, 0.14503204],
    },
    ChannelCoefficients {
        direction: [0.13110757611181192, 1.813339709266605],
        polynomial: [1.35733652, -0.00915799, -1.15130210, -0.50559606, 0.00692167],
    },
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const DISPLAY_P3_COEFFICIENTS: GamutCoefficients = [
    ChannelCoefficients {
        direction: [-1.7723439275129844, -0.8207587433674095],
        polynomial: [
            1.356467340702095, 1.838936946748765, 0.6647688644191051,
            0.7277579218912058, 0.5880110539453876,
        ],
    },
    ChannelCoefficients {
        direction: [1.8031987175305466, -1.1932813966558875],
        polynomial: [
            0.7760644603220557, -0.456732087059992, 0.11774890908329301,
            0.13696728410584688, -0.17364018309650692,
        ],
    },
    ChannelCoefficients {
        direction: [0.08970487824467645, 1.9032774657416096],
        polynomial: [
            1.478562197456423, -0.03111863014323632, -1.2411159243526662,
            -0.5318768908134305, 0.02538492168696413,
        ],
    },
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const REC2020_COEFFICIENTS: GamutCoefficients = [
    ChannelCoefficients {
        direction: [-1.36834899206951, -0.4666477292401175],
        polynomial: [
            2.378219933252808, 3.415407605121699, 0.8879666669314062,
            1.4295571744820617, 0.7675039405785558,
        ],
    },
    ChannelCoefficients {
        direction: [2.011507961934277, -2.0379095965346927],
        polynomial: [
            0.9235374095224147, -0.5882534851171715, 0.2217852040928156,
            0.19920161194497057, -0.28908085828722374,
        ],
    },
    ChannelCoefficients {
        direction: [0.0645409320872005, 2.2970933629671713],
        polynomial: [
            1.7058394583197778, -0.06767827083071482, -1.4615085899472302,
            -0.6604706754529861, 0.06323445750145612,
        ],
    },
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const A98_RGB_COEFFICIENTS: GamutCoefficients = [
    ChannelCoefficients {
        direction: [-1.5916954144258013, -0.8395798483264404],
        polynomial: [
            1.6168076594051546, 2.0544700852918245, 0.8401141245005584,
            0.7494302112094349, 0.7186620284104005,
        ],
    },
    ChannelCoefficients {
        direction: [1.8144407988010978, -1.1944526678052325],
        polynomial: [
            0.7325524789772283, -0.4402001073195607, 0.07727850891271935,
            0.11268815427926351, -0.13667101998409334,
        ],
    },
    ChannelCoefficients {
        direction: [-0.014529428934080912, 2.073564997814518],
        polynomial: [
            1.449090490569819, -0.05754253629574058, -1.2310086108976275,
            -0.5436913164423703, 0.054562358937576716,
        ],
    },
];

// ====================================================================================================================

/// An RGB gamut with the coefficients for approximating its maximum
/// saturation.
///
/// The space may be the gamma-encoded or linear version of the RGB space.
/// Either way, gamut mapping operates on the linear version, which must have
/// the matrix for converting from LMS. Two gamuts are equal if their spaces are
/// equal.
#[derive(Clone, Copy, Debug)]
pub struct Gamut {
    space: &'static ColorSpace,
    coefficients: GamutCoefficients,
}

impl Gamut {
    /// The sRGB gamut.
    pub const SRGB: Gamut = Gamut::new(&ColorSpace::SRGB, SRGB_COEFFICIENTS);

    /// The Display P3 gamut.
    pub const DISPLAY_P3: Gamut = Gamut::new(&ColorSpace::DISPLAY_P3, DISPLAY_P3_COEFFICIENTS);

    /// The Rec. 2020 gamut.
    pub const REC2020: Gamut = Gamut::new(&ColorSpace::REC2020, REC2020_COEFFICIENTS);

    /// The A98 RGB gamut.
    pub const A98_RGB: Gamut = Gamut::new(&ColorSpace::A98_RGB, A98_RGB_COEFFICIENTS);

    /// Create a new gamut.
    pub const fn new(space: &'static ColorSpace, coefficients: GamutCoefficients) -> Self {
        Self {
            space,
            coefficients,
        }
    }

    /// Get the gamuts built into this crate.
    pub fn all() -> &'static [Gamut] {
        &GAMUTS
    }

    /// Get this gamut's color space.
    #[inline]
    pub const fn space(&self) -> &'static ColorSpace {
        self.space
    }

    /// Get this gamut's coefficients.
    #[inline]
    pub const fn coefficients(&self) -> &GamutCoefficients {
        &self.coefficients
    }

    /// Get the linear version of this gamut's color space.
    pub fn linear_space(&self) -> &'static ColorSpace {
        self.space.base().unwrap_or(self.space)
    }

    /// Get the matrix for converting LMS to this gamut's linear RGB.
    ///
    /// # Errors
    ///
    /// This method fails if the linear color space has no such matrix.
    pub fn lms_to_rgb(&self) -> Result<&'static Matrix, ConversionError> {
        let linear = self.linear_space();
        linear.from_lms_matrix.as_ref().ok_or_else(|| {
            log::debug!("gamut {} lacks matrix from LMS", linear.id());
            ConversionError::MissingConversionPath {
                from: ColorSpace::OKLAB.id(),
                to: linear.id(),
                missing: "fromLMS",
            }
        })
    }
}

impl PartialEq for Gamut {
    fn eq(&self, other: &Self) -> bool {
        self.space == other.space
    }
}

static GAMUTS: [Gamut; 4] = [
    Gamut::SRGB,
    Gamut::DISPLAY_P3,
    Gamut::REC2020,
    Gamut::A98_RGB,
];

/// The point of maximum chroma for a hue.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cusp {
    pub lightness: Float,
    pub chroma: Float,
}

// ====================================================================================================================

/// The tolerance for linear RGB coordinates to still count as in gamut.
pub const GAMUT_EPSILON: Float = 7.5e-5;

/// Determine whether the linear RGB coordinates are in gamut, i.e., within
/// `-epsilon..=1+epsilon`.
pub fn is_rgb_in_gamut(rgb: &[Float; 3], epsilon: Float) -> bool {
    rgb.iter().all(|c| -epsilon <= *c && *c <= 1.0 + epsilon)
}

/// Clamp the RGB coordinates to the unit range.
pub fn clamped_rgb(rgb: &[Float; 3]) -> [Float; 3] {
    rgb.map(|c| c.clamp(0.0, 1.0))
}

// --------------------------------------------------------------------------------------------------------------------

/// Determine the first derivative's multipliers for the LMS cone responses
/// along the hue direction.
#[inline]
fn lms_slopes(a: Float, b: Float) -> [Float; 3] {
    let [ref l, ref m, ref s] = OKLAB_TO_LMS;
    [
        l[1].mul_add(a, l[2] * b),
        m[1].mul_add(a, m[2] * b),
        s[1].mul_add(a, s[2] * b),
    ]
}

/// Compute the maximum saturation `S = C / L` for the hue.
///
/// The hue `(a, b)` must be normalized, i.e., `a² + b² = 1`. The result has an
/// error below 1e-6 for most hues. Some blue hues have larger errors since
/// only one step of Halley's method refines the polynomial estimate.
pub fn compute_max_saturation(
    a: Float,
    b: Float,
    lms_to_rgb: &Matrix,
    coefficients: &GamutCoefficients,
) -> Float {
    let [ref red, ref green, ref blue] = *coefficients;
    let [ref to_red, ref to_green, ref to_blue] = *lms_to_rgb;

    // Pick the channel that clips first
    let (weights, channel) = if red.direction[0].mul_add(a, red.direction[1] * b) > 1.0 {
        (to_red, red)
    } else if green.direction[0].mul_add(a, green.direction[1] * b) > 1.0 {
        (to_green, green)
    } else {
        (to_blue, blue)
    };

    let [k0, k1, k2, k3, k4] = channel.polynomial;
    let saturation = k4.mul_add(a * b, k3.mul_add(a * a, k2.mul_add(b, k1.mul_add(a, k0))));

    // Halley's method on the cubic relationship between saturation and LMS
    let slopes = lms_slopes(a, b);
    let lms_ = slopes.map(|k| saturation.mul_add(k, 1.0));
    let lms = lms_.map(|x| x * x * x);
    let ds: [Float; 3] = core::array::from_fn(|i| 3.0 * slopes[i] * lms_[i] * lms_[i]);
    let ds2: [Float; 3] = core::array::from_fn(|i| 6.0 * slopes[i] * slopes[i] * lms_[i]);

    let f = dot(weights, &lms);
    let f1 = dot(weights, &ds);
    let f2 = dot(weights, &ds2);

    saturation - f * f1 / f1.mul_add(f1, -0.5 * f * f2)
}

/// Find the cusp with the given LMS matrix and coefficients.
pub(crate) fn cusp_with(
    a: Float,
    b: Float,
    lms_to_rgb: &Matrix,
    coefficients: &GamutCoefficients,
) -> Cusp {
    let saturation = compute_max_saturation(a, b, lms_to_rgb, coefficients);
    let [r, g, bb] = oklab_to(&[1.0, saturation * a, saturation * b], lms_to_rgb);
    let lightness = (1.0 / r.max(g).max(bb)).cbrt();

    Cusp {
        lightness,
        chroma: lightness * saturation,
    }
}

/// Find the cusp for the normalized hue `(a, b)` in the gamut.
///
/// ```
/// # use okcolor::{find_cusp, Gamut};
/// let (sin, cos) = 30.0_f64.to_radians().sin_cos();
/// let cusp = find_cusp(cos, sin, &Gamut::SRGB)?;
/// assert!((cusp.lightness - 0.6322837).abs() < 1e-6);
/// assert!((cusp.chroma - 0.2535830).abs() < 1e-6);
/// # Ok::<(), okcolor::error::ConversionError>(())
/// ```
///
/// # Errors
///
/// This function fails if the gamut's linear space lacks the matrix from LMS.
pub fn find_cusp(a: Float, b: Float, gamut: &Gamut) -> Result<Cusp, ConversionError> {
    Ok(cusp_with(a, b, gamut.lms_to_rgb()?, &gamut.coefficients))
}

/// Find the intersection with the given LMS matrix.
#[allow(clippy::too_many_arguments)]
pub(crate) fn intersection_with(
    a: Float,
    b: Float,
    l1: Float,
    c1: Float,
    l0: Float,
    cusp: &Cusp,
    lms_to_rgb: &Matrix,
) -> Float {
    let Cusp {
        lightness: cusp_l,
        chroma: cusp_c,
    } = *cusp;

    if (l1 - l0).mul_add(cusp_c, -((cusp_l - l0) * c1)) <= 0.0 {
        // Lower half of the triangle, which is exact
        return cusp_c * l0 / c1.mul_add(cusp_l, cusp_c * (l0 - l1));
    }

    // Upper half of the triangle, which needs refinement
    let t = cusp_c * (l0 - 1.0) / c1.mul_add(cusp_l - 1.0, cusp_c * (l0 - l1));

    let slopes = lms_slopes(a, b);
    let dl = l1 - l0;
    let lms_dt = slopes.map(|k| c1.mul_add(k, dl));

    let lightness = lerp(l0, l1, t);
    let chroma = t * c1;
    let lms_: [Float; 3] = core::array::from_fn(|i| chroma.mul_add(slopes[i], lightness));

    let lms = lms_.map(|x| x * x * x);
    let ldt: [Float; 3] = core::array::from_fn(|i| 3.0 * lms_dt[i] * lms_[i] * lms_[i]);
    let ldt2: [Float; 3] = core::array::from_fn(|i| 6.0 * lms_dt[i] * lms_dt[i] * lms_[i]);

    let step = lms_to_rgb
        .iter()
        .map(|weights| {
            let r = dot(weights, &lms) - 1.0;
            let r1 = dot(weights, &ldt);
            let r2 = dot(weights, &ldt2);
            let u = r1 / r1.mul_add(r1, -0.5 * r * r2);
            if u >= 0.0 {
                -r * u
            } else {
                Float::MAX
            }
        })
        .fold(Float::MAX, Float::min);

    if step < Float::MAX {
        t + step
    } else {
        t
    }
}

/// Find the intersection of a line with the gamut boundary.
///
/// The line runs from `(l0, 0)` to `(l1, c1)` in the lightness/chroma plane of
/// the normalized hue `(a, b)`. The result is the parameter `t` such that
/// `(lerp(l0, l1, t), t·c1)` lies on the boundary.
///
/// # Errors
///
/// This function fails if the gamut's linear space lacks the matrix from LMS.
pub fn find_gamut_intersection(
    a: Float,
    b: Float,
    l1: Float,
    c1: Float,
    l0: Float,
    cusp: &Cusp,
    gamut: &Gamut,
) -> Result<Float, ConversionError> {
    Ok(intersection_with(a, b, l1, c1, l0, cusp, gamut.lms_to_rgb()?))
}

// ====================================================================================================================

/// The strategy for picking the lightness an out-of-gamut color is projected
/// towards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum MappingStrategy {
    /// Preserve the color's lightness.
    Lightness,
    /// Project towards lightness 0.5.
    Gray,
    /// Project towards the cusp's lightness.
    #[default]
    CuspLightness,
    /// Project towards a lightness between the color's and 0.5, with `alpha`
    /// controlling how much chroma pulls towards 0.5.
    AdaptiveGray { alpha: Float },
    /// Project towards a lightness between the color's and the cusp's, with
    /// `alpha` controlling how much chroma pulls towards the cusp.
    AdaptiveCuspLightness { alpha: Float },
}

impl MappingStrategy {
    /// The customary `alpha` for the adaptive strategies.
    pub const DEFAULT_ALPHA: Float = 0.05;

    /// Compute the target lightness for the Oklch color and its hue's cusp.
    #[allow(non_snake_case)]
    pub fn target_lightness(&self, oklch: &[Float; 3], cusp: &Cusp) -> Float {
        let [L, C, _] = *oklch;

        match *self {
            Self::Lightness => L,
            Self::Gray => 0.5,
            Self::CuspLightness => cusp.lightness,
            Self::AdaptiveGray { alpha } => {
                let Ld = L - 0.5;
                let e1 = alpha.mul_add(C, 0.5 + Ld.abs());
                let root = e1.mul_add(e1, -2.0 * Ld.abs()).sqrt();
                0.5 * Ld.signum().mul_add(e1 - root, 1.0)
            }
            Self::AdaptiveCuspLightness { alpha } => {
                let Ld = L - cusp.lightness;
                let k = 2.0
                    * if Ld > 0.0 {
                        1.0 - cusp.lightness
                    } else {
                        cusp.lightness
                    };
                let e1 = k.mul_add(0.5, Ld.abs()) + alpha * C / k;
                let root = e1.mul_add(e1, -2.0 * k * Ld.abs()).sqrt();
                (0.5 * Ld.signum()).mul_add(e1 - root, cusp.lightness)
            }
        }
    }
}

/// Map the Oklch color into the gamut and convert it to the target space.
///
/// This function uses [`gamut_map_oklch_with_cusp`] without a precomputed
/// cusp.
///
/// # Errors
///
/// See [`gamut_map_oklch_with_cusp`].
pub fn gamut_map_oklch(
    oklch: &[Float; 3],
    gamut: &Gamut,
    target: &ColorSpace,
    strategy: MappingStrategy,
) -> Result<[Float; 3], ConversionError> {
    gamut_map_oklch_with_cusp(oklch, gamut, target, strategy, None)
}

/// Map the Oklch color into the gamut and convert it to the target space.
///
/// This function first clamps lightness to the unit range and chroma to
/// nonnegative values. If the result is in gamut, it is converted to the
/// target as is. Otherwise, this function projects the color along a line of
/// constant hue towards the strategy's target lightness until it hits the
/// gamut boundary. Hue is never modified. For a target space derived from
/// Oklab, the mapped color is converted directly. For any other target space,
/// it is converted through the gamut's linear space with channels clamped to
/// the unit range, which absorbs the approximation error. The optional cusp
/// must be the cusp for the color's hue in the gamut.
///
/// ```
/// # use okcolor::{gamut_map_oklch, ColorSpace, Gamut, MappingStrategy};
/// let srgb = gamut_map_oklch(
///     &[0.9, 0.4, 30.0],
///     &Gamut::SRGB,
///     &ColorSpace::SRGB,
///     MappingStrategy::default(),
/// )?;
/// assert!(srgb.iter().all(|c| (0.0..=1.0).contains(c)));
/// # Ok::<(), okcolor::error::ConversionError>(())
/// ```
///
/// # Errors
///
/// This function fails if the gamut's linear space lacks the matrix from LMS
/// or if the target space does not support conversion.
pub fn gamut_map_oklch_with_cusp(
    oklch: &[Float; 3],
    gamut: &Gamut,
    target: &ColorSpace,
    strategy: MappingStrategy,
    cusp: Option<Cusp>,
) -> Result<[Float; 3], ConversionError> {
    let linear = gamut.linear_space();
    let lms_to_rgb = gamut.lms_to_rgb()?;
    let oklab_rooted = *target == ColorSpace::OKLAB || target.base() == Some(&ColorSpace::OKLAB);

    let [l, c, h] = *oklch;
    let clamped = [l.clamp(0.0, 1.0), c.max(0.0), h];

    let rgb = convert(&ColorSpace::OKLCH, linear, &clamped)?;
    if is_rgb_in_gamut(&rgb, GAMUT_EPSILON) {
        return if oklab_rooted {
            convert(&ColorSpace::OKLCH, target, &clamped)
        } else {
            convert(linear, target, &clamped_rgb(&rgb))
        };
    }

    let (b, a) = h.to_radians().sin_cos();
    let cusp = cusp.unwrap_or_else(|| cusp_with(a, b, lms_to_rgb, &gamut.coefficients));
    let target_lightness = strategy.target_lightness(&clamped, &cusp);
    let t = intersection_with(
        a,
        b,
        clamped[0],
        clamped[1],
        target_lightness,
        &cusp,
        lms_to_rgb,
    );
    let mapped = [lerp(target_lightness, clamped[0], t), clamped[1] * t, h];

    log::trace!(
        "mapping oklch({} {} {}) into {} with cusp ({}, {}), target lightness {}, t {}",
        clamped[0],
        clamped[1],
        h,
        gamut.space.id(),
        cusp.lightness,
        cusp.chroma,
        target_lightness,
        t
    );

    if oklab_rooted {
        return convert(&ColorSpace::OKLCH, target, &mapped);
    }

    let rgb = convert(&ColorSpace::OKLCH, linear, &mapped)?;
    convert(linear, target, &clamped_rgb(&rgb))
}

// ====================================================================================================================
