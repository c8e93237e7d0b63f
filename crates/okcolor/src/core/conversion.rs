use super::math::transform;
use super::matrices::{LMS_TO_XYZ, XYZ_TO_LMS};
use super::oklab::{oklab_from, oklab_to};
use super::ColorSpace;
use crate::error::ConversionError;
use crate::Float;

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub fn from_24bit(r: u8, g: u8, b: u8) -> [Float; 3] {
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert the floating point coordinate to a byte.
///
/// This function clamps the coordinate to the unit range before scaling it to
/// `0x00..=0xff`. Not-a-number becomes zero.
///
/// ```
/// # use okcolor::float_to_byte;
/// assert_eq!(float_to_byte(0.5), 128);
/// assert_eq!(float_to_byte(-0.1), 0);
/// assert_eq!(float_to_byte(1.7), 255);
/// ```
#[inline]
pub fn float_to_byte(value: Float) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Convert the color coordinates to 24-bit representation.
///
/// This function assumes that the coordinates are those of an in-gamut RGB
/// color. Even if that is not the case, the conversion clamps coordinates to
/// the range `0x00..=0xff`.
#[inline]
pub fn to_24bit(coordinates: &[Float; 3]) -> [u8; 3] {
    coordinates.map(float_to_byte)
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert xyY chromaticity and luminance to XYZ.
///
/// A zero y denotes black.
#[allow(non_snake_case)]
pub fn xyy_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let [x, y, Y] = *value;
    if y == 0.0 {
        return [0.0, 0.0, 0.0];
    }

    [x * Y / y, Y, (1.0 - x - y) * Y / y]
}

/// Convert XYZ to xyY chromaticity and luminance.
///
/// Colors with zero sum, notably black, have zero chromaticity.
#[allow(non_snake_case)]
pub fn xyz_to_xyy(value: &[Float; 3]) -> [Float; 3] {
    let [X, Y, Z] = *value;
    let sum = X + Y + Z;
    if sum == 0.0 {
        return [0.0, 0.0, Y];
    }

    [X / sum, Y / sum, Y]
}

// ====================================================================================================================

fn check_valid(space: &ColorSpace) -> Result<(), ConversionError> {
    if space.is_valid() {
        Ok(())
    } else {
        log::debug!("refusing to convert with nameless color space {}", space.name);
        Err(ConversionError::InvalidSpace { name: space.name })
    }
}

/// Determine the space's root, i.e., its base or the space itself.
fn root_of(space: &ColorSpace) -> Result<&ColorSpace, ConversionError> {
    let Some(derivation) = space.derivation.as_ref() else {
        return Ok(space);
    };

    if derivation.base.is_derived() {
        log::debug!(
            "color space {} has base {} with base of its own",
            space.id,
            derivation.base.id
        );
        return Err(ConversionError::UnsupportedBaseDepth {
            space: space.id,
            base: derivation.base.id,
        });
    }

    Ok(derivation.base)
}

fn missing(
    source: &ColorSpace,
    target: &ColorSpace,
    missing: &'static str,
) -> ConversionError {
    log::debug!(
        "no conversion from {} to {} because of missing {}",
        source.id,
        target.id,
        missing
    );
    ConversionError::MissingConversionPath {
        from: source.id,
        to: target.id,
        missing,
    }
}

fn adapt_to_d65(space: &ColorSpace, xyz: &[Float; 3]) -> [Float; 3] {
    space
        .adaptation
        .as_ref()
        .map_or(*xyz, |adaptation| transform(&adaptation.to_d65, xyz))
}

fn adapt_from_d65(space: &ColorSpace, xyz: &[Float; 3]) -> [Float; 3] {
    space
        .adaptation
        .as_ref()
        .map_or(*xyz, |adaptation| transform(&adaptation.from_d65, xyz))
}

/// Convert root coordinates to XYZ relative to the root's own white point.
fn to_xyz(
    root: &ColorSpace,
    (source, target): (&ColorSpace, &ColorSpace),
    value: &[Float; 3],
) -> Result<[Float; 3], ConversionError> {
    if *root == ColorSpace::XYZ {
        Ok(*value)
    } else if let Some(to_xyz) = root.to_xyz {
        Ok(to_xyz(value))
    } else if let Some(ref matrix) = root.to_xyz_matrix {
        Ok(transform(matrix, value))
    } else {
        Err(missing(source, target, "toXYZ"))
    }
}

/// Convert XYZ relative to the root's own white point to root coordinates.
fn from_xyz(
    root: &ColorSpace,
    (source, target): (&ColorSpace, &ColorSpace),
    value: &[Float; 3],
) -> Result<[Float; 3], ConversionError> {
    if *root == ColorSpace::XYZ {
        Ok(*value)
    } else if let Some(from_xyz) = root.from_xyz {
        Ok(from_xyz(value))
    } else if let Some(ref matrix) = root.from_xyz_matrix {
        Ok(transform(matrix, value))
    } else {
        Err(missing(source, target, "fromXYZ"))
    }
}

/// Convert between two distinct roots.
///
/// Conversions from or to Oklab take the short path through LMS if the other
/// root has the necessary matrix. All other conversions take the long path
/// through XYZ D65, adapting the white point as needed.
fn convert_roots(
    (source_root, target_root): (&ColorSpace, &ColorSpace),
    spaces: (&ColorSpace, &ColorSpace),
    value: &[Float; 3],
) -> Result<[Float; 3], ConversionError> {
    if *source_root == ColorSpace::OKLAB {
        if let Some(ref lms_to_target) = target_root.from_lms_matrix {
            return Ok(oklab_to(value, lms_to_target));
        }

        let xyz = adapt_from_d65(target_root, &oklab_to(value, &LMS_TO_XYZ));
        return from_xyz(target_root, spaces, &xyz);
    }

    if *target_root == ColorSpace::OKLAB {
        if let Some(ref source_to_lms) = source_root.to_lms_matrix {
            return Ok(oklab_from(value, source_to_lms));
        }

        let xyz = adapt_to_d65(source_root, &to_xyz(source_root, spaces, value)?);
        return Ok(oklab_from(&xyz, &XYZ_TO_LMS));
    }

    let xyz = adapt_to_d65(source_root, &to_xyz(source_root, spaces, value)?);
    from_xyz(target_root, spaces, &adapt_from_d65(target_root, &xyz))
}

/// Convert the coordinates from one color space to another.
///
/// If both color spaces are the same, this function returns the coordinates
/// unchanged. Otherwise, it converts a derived source to its base, converts
/// between the two roots, and converts to a derived target from its base. The
/// conversion between roots takes the shortest path available: none at all if
/// both roots are the same, through LMS if one root is Oklab and the other has
/// the LMS matrix, and through XYZ D65 otherwise. This function does not check
/// whether the result is in gamut for the target color space.
///
/// ```
/// # use okcolor::{convert, ColorSpace};
/// let oklab = convert(&ColorSpace::SRGB, &ColorSpace::OKLAB, &[1.0, 1.0, 1.0])?;
/// assert!((oklab[0] - 1.0).abs() < 1e-9);
/// assert!(oklab[1].abs() < 1e-9 && oklab[2].abs() < 1e-9);
/// # Ok::<(), okcolor::error::ConversionError>(())
/// ```
///
/// # Errors
///
/// This function fails if either color space has an empty identifier, if a
/// color space is derived from a derived base, or if a root lacks the function
/// or matrix for converting to or from XYZ.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub fn convert(
    source: &ColorSpace,
    target: &ColorSpace,
    coordinates: &[Float; 3],
) -> Result<[Float; 3], ConversionError> {
    check_valid(source)?;
    check_valid(target)?;
    if source == target {
        return Ok(*coordinates);
    }

    let source_root = root_of(source)?;
    let target_root = root_of(target)?;

    let value = source
        .derivation
        .as_ref()
        .map_or(*coordinates, |derivation| (derivation.to_base)(coordinates));

    let value = if source_root == target_root {
        value
    } else {
        convert_roots((source_root, target_root), (source, target), &value)?
    };

    Ok(target
        .derivation
        .as_ref()
        .map_or(value, |derivation| (derivation.from_base)(&value)))
}

// ====================================================================================================================

#[cfg(test)]
#[allow(clippy::excessive_precision)]
mod test {
    use super::*;
    use crate::core::{
        assert_close_enough, assert_same_coordinates, LOOSE_TOLERANCE, TOLERANCE,
    };
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    struct Representations {
        srgb: [Float; 3],
        linear_srgb: [Float; 3],
        p3: [Float; 3],
        linear_p3: [Float; 3],
        rec2020: [Float; 3],
        linear_rec2020: [Float; 3],
        oklch: [Float; 3],
        oklab: [Float; 3],
        xyz: [Float; 3],
        xyz_d50: [Float; 3],
    }

    impl Representations {
        fn all(&self) -> [(&'static ColorSpace, &[Float; 3]); 10] {
            [
                (&ColorSpace::SRGB, &self.srgb),
                (&ColorSpace::SRGB_LINEAR, &self.linear_srgb),
                (&ColorSpace::DISPLAY_P3, &self.p3),
                (&ColorSpace::DISPLAY_P3_LINEAR, &self.linear_p3),
                (&ColorSpace::REC2020, &self.rec2020),
                (&ColorSpace::REC2020_LINEAR, &self.linear_rec2020),
                (&ColorSpace::OKLCH, &self.oklch),
                (&ColorSpace::OKLAB, &self.oklab),
                (&ColorSpace::XYZ, &self.xyz),
                (&ColorSpace::XYZ_D50, &self.xyz_d50),
            ]
        }
    }

    const BLACK: Representations = Representations {
        // #000000
        srgb: [0.0, 0.0, 0.0],
        linear_srgb: [0.0, 0.0, 0.0],
        p3: [0.0, 0.0, 0.0],
        linear_p3: [0.0, 0.0, 0.0],
        rec2020: [0.0, 0.0, 0.0],
        linear_rec2020: [0.0, 0.0, 0.0],
        oklch: [0.0, 0.0, 0.0],
        oklab: [0.0, 0.0, 0.0],
        xyz: [0.0, 0.0, 0.0],
        xyz_d50: [0.0, 0.0, 0.0],
    };

    const YELLOW: Representations = Representations {
        // #ffca00
        srgb: [1.0, 0.792156862745098, 0.0],
        linear_srgb: [1.0, 0.5906188409193369, 0.0],
        p3: [0.967346220711791, 0.8002244967941964, 0.27134084647161244],
        linear_p3: [0.9273192749713864, 0.6042079205196976, 0.059841923211596565],
        rec2020: [0.9071245864481046, 0.7821891940186851, 0.22941491945066222],
        linear_rec2020: [0.8218846623958427, 0.6121951716762088, 0.0683737567590739],
        oklch: [0.8613332073307732, 0.1760097742886813, 89.440876452466],
        oklab: [
            0.8613332073307732,
            0.0017175723640959761,
            0.17600139371700052,
        ],
        xyz: [0.6235868473237722, 0.635031101987136, 0.08972950140152941],
        xyz_d50: [0.6635434850467424, 0.6459001538545541, 0.07126198065563918],
    };

    const BLUE: Representations = Representations {
        // #3178ea
        srgb: [0.19215686274509805, 0.47058823529411764, 0.9176470588235294],
        linear_srgb: [
            0.030713443732993635,
            0.18782077230067787,
            0.8227857543962835,
        ],
        p3: [0.26851535563550943, 0.4644576150842869, 0.8876966971452301],
        linear_p3: [0.058605969547446124, 0.18260572039525869, 0.763285235993837],
        rec2020: [0.318905170074285, 0.4141244051667745, 0.8687817570254107],
        linear_rec2020: [0.11675330225613656, 0.18417975425846383, 0.7539171810709095],
        oklch: [0.5909012953108558, 0.18665606306724153, 259.66681920272595],
        oklab: [
            0.5909012953108558,
            -0.03348086515869664,
            -0.1836287492414715,
        ],
        xyz: [0.22832473003420622, 0.20025321836938534, 0.80506528557483],
        xyz_d50: [0.20345542047334936, 0.1913569200613913, 0.6062123188831731],
    };

    const WHITE: Representations = Representations {
        // #ffffff
        srgb: [1.0, 1.0, 1.0],
        linear_srgb: [1.0, 1.0, 1.0],
        p3: [1.0, 1.0, 1.0],
        linear_p3: [1.0, 1.0, 1.0],
        rec2020: [1.0, 1.0, 1.0],
        linear_rec2020: [1.0, 1.0, 1.0],
        oklch: [1.0, 0.0, 0.0],
        oklab: [1.0, 0.0, 0.0],
        xyz: [0.9504559270516717, 1.0, 1.0890577507598784],
        xyz_d50: [0.9642956764295678, 1.0, 0.8251046025104604],
    };

    /// Compare Oklch's hue with the loose tolerance and skip it for achromatic
    /// colors.
    fn assert_same_in(space: &ColorSpace, actual: &[Float; 3], expected: &[Float; 3]) {
        if *space != ColorSpace::OKLCH {
            assert_same_coordinates!(actual, expected);
            return;
        }

        assert_close_enough!(actual[0], expected[0]);
        assert_close_enough!(actual[1], expected[1]);
        if expected[1] != 0.0 {
            assert_close_enough!(actual[2], expected[2], LOOSE_TOLERANCE);
        }
    }

    /// Pick the tolerance for a round trip between the two spaces.
    fn round_trip_tolerance(source: &ColorSpace, target: &ColorSpace) -> Float {
        if source.is_polar() || target.is_polar() || source.id() == "lab" || target.id() == "lab" {
            LOOSE_TOLERANCE
        } else {
            TOLERANCE
        }
    }

    #[test]
    fn test_conversions() -> Result<(), ConversionError> {
        for color in [&BLACK, &YELLOW, &BLUE, &WHITE] {
            for (source, coordinates) in color.all() {
                for (target, expected) in color.all() {
                    let actual = convert(source, target, coordinates)?;
                    assert_same_in(target, &actual, expected);
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_identity() -> Result<(), ConversionError> {
        let coordinates = [0.123456789, -0.987654321, 360.5];
        for space in ColorSpace::all() {
            assert_eq!(
                convert(space, space, &coordinates)?,
                coordinates,
                "identity for {}",
                space.id()
            );
        }
        Ok(())
    }

    #[test]
    fn test_round_trips() -> Result<(), ConversionError> {
        let mut rng = StdRng::seed_from_u64(665);

        // In-gamut colors for all spaces
        for _ in 0..50 {
            let srgb = [
                rng.random_range(0.05..0.95),
                rng.random_range(0.05..0.95),
                rng.random_range(0.05..0.95),
            ];

            for source in ColorSpace::all() {
                let original = convert(&ColorSpace::SRGB, source, &srgb)?;
                for target in ColorSpace::all() {
                    let there = convert(source, target, &original)?;
                    let back = convert(target, source, &there)?;
                    let tolerance = round_trip_tolerance(source, target);
                    assert_same_coordinates!(&back, &original, tolerance);
                }
            }
        }

        // Out-of-gamut colors for all spaces but Okhsl and Okhsv
        for srgb in [[-0.2, 0.4, 1.2], [1.3, -0.1, 0.5], [0.0, 1.1, -0.3]] {
            for source in ColorSpace::all() {
                if source.id().starts_with("okhs") {
                    continue;
                }

                let original = convert(&ColorSpace::SRGB, source, &srgb)?;
                for target in ColorSpace::all() {
                    if target.id().starts_with("okhs") {
                        continue;
                    }

                    let there = convert(source, target, &original)?;
                    let back = convert(target, source, &there)?;
                    let tolerance = round_trip_tolerance(source, target);
                    assert_same_coordinates!(&back, &original, tolerance);
                }
            }
        }

        Ok(())
    }

    #[test]
    fn test_long_paths() -> Result<(), ConversionError> {
        // ProPhoto white is D50 white, which adapts to D65 white
        let xyz = convert(&ColorSpace::PROPHOTO_RGB, &ColorSpace::XYZ, &[1.0, 1.0, 1.0])?;
        assert_same_coordinates!(&xyz, &WHITE.xyz, 1e-4);

        let lab = convert(&ColorSpace::SRGB, &ColorSpace::LAB, &[1.0, 1.0, 1.0])?;
        assert_same_coordinates!(&lab, &[100.0, 0.0, 0.0], 1e-4);

        let oklab = convert(&ColorSpace::LAB, &ColorSpace::OKLAB, &lab)?;
        assert_same_coordinates!(&oklab, &[1.0, 0.0, 0.0], 1e-4);

        // Negative chroma mirrors the hue
        let oklab = convert(&ColorSpace::OKLCH, &ColorSpace::OKLAB, &[0.5, -0.36, 90.0])?;
        assert_same_coordinates!(&oklab, &[0.5, 0.0, -0.36]);

        for l in [0.0, 0.25, 0.75, 1.0] {
            let oklch = convert(&ColorSpace::OKLAB, &ColorSpace::OKLCH, &[l, 0.0, 0.0])?;
            assert_eq!(oklch, [l, 0.0, 0.0], "achromatic hue is zero");
        }

        Ok(())
    }

    fn unchanged(value: &[Float; 3]) -> [Float; 3] {
        *value
    }

    static MYSTERY: ColorSpace = ColorSpace::new("mystery", "Mystery");
    static NAMELESS: ColorSpace = ColorSpace::new("", "Nameless");
    static TWICE_REMOVED: ColorSpace =
        ColorSpace::derived("twice-removed", "Twice Removed", &ColorSpace::SRGB, unchanged, unchanged);

    #[test]
    fn test_errors() {
        assert_eq!(
            convert(&ColorSpace::SRGB, &MYSTERY, &[0.0, 0.0, 0.0]),
            Err(ConversionError::MissingConversionPath {
                from: "srgb",
                to: "mystery",
                missing: "fromXYZ",
            })
        );
        assert_eq!(
            convert(&MYSTERY, &ColorSpace::OKLCH, &[0.0, 0.0, 0.0]),
            Err(ConversionError::MissingConversionPath {
                from: "mystery",
                to: "oklch",
                missing: "toXYZ",
            })
        );
        assert_eq!(
            convert(&NAMELESS, &ColorSpace::XYZ, &[0.0, 0.0, 0.0]),
            Err(ConversionError::InvalidSpace { name: "Nameless" })
        );
        assert_eq!(
            convert(&ColorSpace::XYZ, &TWICE_REMOVED, &[0.0, 0.0, 0.0]),
            Err(ConversionError::UnsupportedBaseDepth {
                space: "twice-removed",
                base: "srgb",
            })
        );
    }

    #[test]
    fn test_helpers() {
        assert_eq!(from_24bit(0, 51, 255), [0.0, 0.2, 1.0]);
        assert_eq!(to_24bit(&[0.0, 0.2, 1.0]), [0, 51, 255]);
        assert_eq!(to_24bit(&[-1.0, Float::NAN, 2.0]), [0, 0, 255]);

        let xyy = xyz_to_xyy(&WHITE.xyz);
        assert_close_enough!(xyy[0], 0.3127, 1e-4);
        assert_close_enough!(xyy[1], 0.3290, 1e-4);
        assert_same_coordinates!(&xyy_to_xyz(&xyy), &WHITE.xyz);

        assert_eq!(xyz_to_xyy(&[0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
        assert_eq!(xyy_to_xyz(&[0.3, 0.0, 0.5]), [0.0, 0.0, 0.0]);
    }
}
