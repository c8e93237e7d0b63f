use super::gamut::Gamut;
use super::lab::{lab_to_xyz_d50, xyz_d50_to_lab};
use super::math::transform;
use super::matrices::*;
use super::oklab::{oklab_to_oklch, oklch_to_oklab};
use super::okhsl::{okhsl_to_oklab_srgb, okhsv_to_oklab_srgb, oklab_to_okhsl_srgb, oklab_to_okhsv_srgb};
use super::transfer::{
    a98_rgb_to_linear_a98_rgb, linear_a98_rgb_to_a98_rgb, linear_prophoto_rgb_to_prophoto_rgb,
    linear_rec2020_to_rec2020, linear_rgb_to_rgb, prophoto_rgb_to_linear_prophoto_rgb,
    rec2020_to_linear_rec2020, rgb_to_linear_rgb,
};
use crate::error::ColorFormatError;
use crate::{Float, Matrix, Transfer};

/// The link between a derived color space and its base.
///
/// A derived color space, such as gamma-encoded sRGB or polar Oklch, is
/// defined entirely by two functions that convert to and from its base. The
/// base itself must not be derived.
#[derive(Clone, Copy)]
pub struct Derivation {
    pub(crate) base: &'static ColorSpace,
    pub(crate) to_base: Transfer,
    pub(crate) from_base: Transfer,
}

impl Derivation {
    /// Get the base color space.
    #[inline]
    pub const fn base(&self) -> &'static ColorSpace {
        self.base
    }
}

/// A pair of chromatic adaptation matrices.
///
/// The first matrix adapts XYZ relative to the color space's white point to
/// XYZ D65, the second matrix does the inverse.
#[derive(Clone, Copy)]
pub struct Adaptation {
    pub(crate) to_d65: Matrix,
    pub(crate) from_d65: Matrix,
}

/// A color space descriptor.
///
/// A color space is a static set of capabilities: Besides its unique
/// identifier and human-readable name, it may have a [`Derivation`] from a
/// base space, matrices or functions converting to and from XYZ D65, matrices
/// converting to and from the LMS cone responses underlying Oklab, and a
/// chromatic [`Adaptation`] for spaces not relative to D65. The conversion
/// engine checks for the capabilities it needs when it needs them. Two color
/// spaces are equal if they have the same identifier.
///
/// This crate's color spaces are associated constants, e.g.,
/// [`ColorSpace::SRGB`] or [`ColorSpace::OKLCH`], and are listed in registry
/// order by [`ColorSpace::all`]. Additional color spaces can be built with
/// the const builder methods.
///
/// ```
/// # use okcolor::{convert, ColorSpace};
/// const GRAYSCALE: ColorSpace = ColorSpace::new("grayscale", "Grayscale")
///     .with_xyz_matrices(
///         [[0.0, 0.9505, 0.0], [0.0, 1.0, 0.0], [0.0, 1.089, 0.0]],
///         [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]],
///     );
///
/// let white = convert(&GRAYSCALE, &ColorSpace::XYZ, &[0.0, 1.0, 0.0])?;
/// assert_eq!(white, [0.9505, 1.0, 1.089]);
/// # Ok::<(), okcolor::error::ConversionError>(())
/// ```
#[derive(Clone, Copy)]
pub struct ColorSpace {
    pub(crate) id: &'static str,
    pub(crate) name: &'static str,
    pub(crate) derivation: Option<Derivation>,
    pub(crate) to_xyz_matrix: Option<Matrix>,
    pub(crate) from_xyz_matrix: Option<Matrix>,
    pub(crate) to_xyz: Option<Transfer>,
    pub(crate) from_xyz: Option<Transfer>,
    pub(crate) to_lms_matrix: Option<Matrix>,
    pub(crate) from_lms_matrix: Option<Matrix>,
    pub(crate) adaptation: Option<Adaptation>,
}

impl ColorSpace {
    /// Create a new color space without any conversion capabilities.
    pub const fn new(id: &'static str, name: &'static str) -> Self {
        Self {
            id,
            name,
            derivation: None,
            to_xyz_matrix: None,
            from_xyz_matrix: None,
            to_xyz: None,
            from_xyz: None,
            to_lms_matrix: None,
            from_lms_matrix: None,
            adaptation: None,
        }
    }

    /// Create a new color space derived from the given base.
    ///
    /// Conversions to and from a derived color space go through the base, so
    /// the derived space needs no further capabilities.
    pub const fn derived(
        id: &'static str,
        name: &'static str,
        base: &'static ColorSpace,
        to_base: Transfer,
        from_base: Transfer,
    ) -> Self {
        Self {
            derivation: Some(Derivation {
                base,
                to_base,
                from_base,
            }),
            ..Self::new(id, name)
        }
    }

    /// Add matrices for converting to and from XYZ D65.
    #[must_use = "method returns a new color space and does not mutate original value"]
    pub const fn with_xyz_matrices(self, to_xyz: Matrix, from_xyz: Matrix) -> Self {
        Self {
            to_xyz_matrix: Some(to_xyz),
            from_xyz_matrix: Some(from_xyz),
            ..self
        }
    }

    /// Add functions for converting to and from XYZ. They take precedence over
    /// matrices.
    #[must_use = "method returns a new color space and does not mutate original value"]
    pub const fn with_xyz_functions(self, to_xyz: Transfer, from_xyz: Transfer) -> Self {
        Self {
            to_xyz: Some(to_xyz),
            from_xyz: Some(from_xyz),
            ..self
        }
    }

    /// Add matrices for converting to and from the LMS cone responses.
    #[must_use = "method returns a new color space and does not mutate original value"]
    pub const fn with_lms_matrices(self, to_lms: Matrix, from_lms: Matrix) -> Self {
        Self {
            to_lms_matrix: Some(to_lms),
            from_lms_matrix: Some(from_lms),
            ..self
        }
    }

    /// Add chromatic adaptation to and from D65.
    #[must_use = "method returns a new color space and does not mutate original value"]
    pub const fn with_adaptation(self, to_d65: Matrix, from_d65: Matrix) -> Self {
        Self {
            adaptation: Some(Adaptation { to_d65, from_d65 }),
            ..self
        }
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get this color space's unique identifier.
    #[inline]
    pub const fn id(&self) -> &'static str {
        self.id
    }

    /// Get this color space's human-readable name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Get the derivation from the base color space, if any.
    #[inline]
    pub const fn derivation(&self) -> Option<&Derivation> {
        self.derivation.as_ref()
    }

    /// Get the base color space, if any.
    ///
    /// ```
    /// # use okcolor::ColorSpace;
    /// assert_eq!(ColorSpace::SRGB.base(), Some(&ColorSpace::SRGB_LINEAR));
    /// assert_eq!(ColorSpace::SRGB_LINEAR.base(), None);
    /// ```
    #[inline]
    pub fn base(&self) -> Option<&'static ColorSpace> {
        self.derivation.as_ref().map(|derivation| derivation.base)
    }

    /// Determine whether this color space is derived from a base space.
    #[inline]
    pub const fn is_derived(&self) -> bool {
        self.derivation.is_some()
    }

    /// Determine whether this color space uses polar coordinates with hue in
    /// degrees as the first or third coordinate.
    #[inline]
    pub fn is_polar(&self) -> bool {
        matches!(self.id, "oklch" | "okhsl" | "okhsv")
    }

    /// Determine whether this color space is an RGB space.
    #[inline]
    pub fn is_rgb(&self) -> bool {
        Gamut::all().iter().any(|gamut| {
            gamut.space() == self || gamut.linear_space() == self
        }) || matches!(self.id, "prophoto-rgb" | "prophoto-rgb-linear")
    }

    /// Determine whether this color space's identifier is empty and thus
    /// unsuitable for conversion.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        !self.id.is_empty()
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Get the color spaces built into this crate, in registry order.
    pub fn all() -> &'static [ColorSpace] {
        &REGISTRY
    }

    /// Look up the color space with the given identifier.
    ///
    /// The lookup ignores ASCII case.
    ///
    /// ```
    /// # use okcolor::ColorSpace;
    /// # use okcolor::error::ColorFormatError;
    /// assert_eq!(ColorSpace::from_id("Display-P3")?, &ColorSpace::DISPLAY_P3);
    /// assert_eq!(
    ///     ColorSpace::from_id("cmyk"),
    ///     Err(ColorFormatError::UnknownColorSpace)
    /// );
    /// # Ok::<(), ColorFormatError>(())
    /// ```
    pub fn from_id(id: &str) -> Result<&'static ColorSpace, ColorFormatError> {
        REGISTRY
            .iter()
            .find(|space| space.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| {
                log::debug!("no registered color space with id {:?}", id);
                ColorFormatError::UnknownColorSpace
            })
    }
}

impl PartialEq for ColorSpace {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ColorSpace {}

impl core::hash::Hash for ColorSpace {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl core::fmt::Debug for ColorSpace {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("ColorSpace").field(&self.id).finish()
    }
}

impl core::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name)
    }
}

// ====================================================================================================================

fn xyz_d50_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    transform(&D50_TO_D65, value)
}

fn xyz_to_xyz_d50(value: &[Float; 3]) -> [Float; 3] {
    transform(&D65_TO_D50, value)
}

impl ColorSpace {
    /// XYZ relative to the D65 white point, the hub of all conversions.
    pub const XYZ: ColorSpace =
        ColorSpace::new("xyz", "XYZ").with_lms_matrices(XYZ_TO_LMS, LMS_TO_XYZ);

    /// XYZ relative to the D50 white point.
    pub const XYZ_D50: ColorSpace = ColorSpace::derived(
        "xyz-d50",
        "XYZ D50",
        &ColorSpace::XYZ,
        xyz_d50_to_xyz,
        xyz_to_xyz_d50,
    );

    /// The perceptually uniform Oklab.
    pub const OKLAB: ColorSpace = ColorSpace::new("oklab", "Oklab");

    /// Oklch, the polar version of Oklab.
    pub const OKLCH: ColorSpace = ColorSpace::derived(
        "oklch",
        "Oklch",
        &ColorSpace::OKLAB,
        oklch_to_oklab,
        oklab_to_oklch,
    );

    /// Okhsv for the sRGB gamut, with coordinates hue, saturation, value.
    pub const OKHSV: ColorSpace = ColorSpace::derived(
        "okhsv",
        "Okhsv",
        &ColorSpace::OKLAB,
        okhsv_to_oklab_srgb,
        oklab_to_okhsv_srgb,
    );

    /// Okhsl for the sRGB gamut, with coordinates hue, saturation, lightness.
    pub const OKHSL: ColorSpace = ColorSpace::derived(
        "okhsl",
        "Okhsl",
        &ColorSpace::OKLAB,
        okhsl_to_oklab_srgb,
        oklab_to_okhsl_srgb,
    );

    /// Gamma-encoded sRGB.
    pub const SRGB: ColorSpace = ColorSpace::derived(
        "srgb",
        "sRGB",
        &ColorSpace::SRGB_LINEAR,
        rgb_to_linear_rgb,
        linear_rgb_to_rgb,
    );

    /// Linear sRGB.
    pub const SRGB_LINEAR: ColorSpace = ColorSpace::new("srgb-linear", "Linear sRGB")
        .with_xyz_matrices(LINEAR_SRGB_TO_XYZ, XYZ_TO_LINEAR_SRGB)
        .with_lms_matrices(LINEAR_SRGB_TO_LMS, LMS_TO_LINEAR_SRGB);

    /// Gamma-encoded Display P3, using the sRGB transfer function.
    pub const DISPLAY_P3: ColorSpace = ColorSpace::derived(
        "display-p3",
        "Display P3",
        &ColorSpace::DISPLAY_P3_LINEAR,
        rgb_to_linear_rgb,
        linear_rgb_to_rgb,
    );

    /// Linear Display P3.
    pub const DISPLAY_P3_LINEAR: ColorSpace =
        ColorSpace::new("display-p3-linear", "Linear Display P3")
            .with_xyz_matrices(LINEAR_DISPLAY_P3_TO_XYZ, XYZ_TO_LINEAR_DISPLAY_P3)
            .with_lms_matrices(LINEAR_DISPLAY_P3_TO_LMS, LMS_TO_LINEAR_DISPLAY_P3);

    /// Gamma-encoded Rec. 2020.
    pub const REC2020: ColorSpace = ColorSpace::derived(
        "rec2020",
        "Rec. 2020",
        &ColorSpace::REC2020_LINEAR,
        rec2020_to_linear_rec2020,
        linear_rec2020_to_rec2020,
    );

    /// Linear Rec. 2020.
    pub const REC2020_LINEAR: ColorSpace = ColorSpace::new("rec2020-linear", "Linear Rec. 2020")
        .with_xyz_matrices(LINEAR_REC2020_TO_XYZ, XYZ_TO_LINEAR_REC2020)
        .with_lms_matrices(LINEAR_REC2020_TO_LMS, LMS_TO_LINEAR_REC2020);

    /// Gamma-encoded A98 RGB, i.e., Adobe RGB (1998).
    pub const A98_RGB: ColorSpace = ColorSpace::derived(
        "a98-rgb",
        "A98 RGB",
        &ColorSpace::A98_RGB_LINEAR,
        a98_rgb_to_linear_a98_rgb,
        linear_a98_rgb_to_a98_rgb,
    );

    /// Linear A98 RGB.
    pub const A98_RGB_LINEAR: ColorSpace = ColorSpace::new("a98-rgb-linear", "Linear A98 RGB")
        .with_xyz_matrices(LINEAR_A98_RGB_TO_XYZ, XYZ_TO_LINEAR_A98_RGB)
        .with_lms_matrices(LINEAR_A98_RGB_TO_LMS, LMS_TO_LINEAR_A98_RGB);

    /// Gamma-encoded ProPhoto RGB.
    pub const PROPHOTO_RGB: ColorSpace = ColorSpace::derived(
        "prophoto-rgb",
        "ProPhoto RGB",
        &ColorSpace::PROPHOTO_RGB_LINEAR,
        prophoto_rgb_to_linear_prophoto_rgb,
        linear_prophoto_rgb_to_prophoto_rgb,
    );

    /// Linear ProPhoto RGB, which is relative to D50.
    pub const PROPHOTO_RGB_LINEAR: ColorSpace =
        ColorSpace::new("prophoto-rgb-linear", "Linear ProPhoto RGB")
            .with_xyz_matrices(
                LINEAR_PROPHOTO_RGB_TO_XYZ_D50,
                XYZ_D50_TO_LINEAR_PROPHOTO_RGB,
            )
            .with_adaptation(D50_TO_D65, D65_TO_D50);

    /// CIE Lab, which is relative to D50.
    pub const LAB: ColorSpace = ColorSpace::new("lab", "CIE Lab")
        .with_xyz_functions(lab_to_xyz_d50, xyz_d50_to_lab)
        .with_adaptation(D50_TO_D65, D65_TO_D50);
}

static REGISTRY: [ColorSpace; 17] = [
    ColorSpace::XYZ,
    ColorSpace::XYZ_D50,
    ColorSpace::OKLAB,
    ColorSpace::OKLCH,
    ColorSpace::OKHSV,
    ColorSpace::OKHSL,
    ColorSpace::SRGB,
    ColorSpace::SRGB_LINEAR,
    ColorSpace::DISPLAY_P3,
    ColorSpace::DISPLAY_P3_LINEAR,
    ColorSpace::REC2020,
    ColorSpace::REC2020_LINEAR,
    ColorSpace::A98_RGB,
    ColorSpace::A98_RGB_LINEAR,
    ColorSpace::PROPHOTO_RGB,
    ColorSpace::PROPHOTO_RGB_LINEAR,
    ColorSpace::LAB,
];

// ====================================================================================================================
