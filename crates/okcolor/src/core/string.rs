use core::fmt::Write;

use super::conversion::{convert, float_to_byte, from_24bit, to_24bit};
use super::ColorSpace;
use crate::error::{ColorError, ColorFormatError, ConversionError};
use crate::{Color, Float};

/// Parse the hexadecimal digits of a hashed color. If successful, this
/// function returns the three coordinates as unsigned bytes as well as the
/// alpha byte, if present. It transparently handles single-digit coordinates.
fn parse_hex_digits(s: &str) -> Result<([u8; 3], Option<u8>), ColorFormatError> {
    if !s.is_ascii() {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    let width = match s.len() {
        3 | 4 => 1,
        6 | 8 => 2,
        _ => return Err(ColorFormatError::UnexpectedCharacters),
    };

    let byte = |index: usize| -> Result<u8, ColorFormatError> {
        let t = s
            .get(width * index..width * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;
        Ok(if width == 1 { 16 * n + n } else { n })
    };

    let rgb = [byte(0)?, byte(1)?, byte(2)?];
    let alpha = if s.len() == 4 || s.len() == 8 {
        Some(byte(3)?)
    } else {
        None
    };

    Ok((rgb, alpha))
}

/// Parse a hashed hexadecimal color into sRGB coordinates.
///
/// This function accepts three, four, six, or eight hexadecimal digits with
/// an optional leading `#`. It ignores the alpha digits.
///
/// ```
/// # use okcolor::hex_to_rgb;
/// assert_eq!(hex_to_rgb("#0f0")?, [0.0, 1.0, 0.0]);
/// assert_eq!(hex_to_rgb("3366ff80")?, [0.2, 0.4, 1.0]);
/// # Ok::<(), okcolor::error::ColorFormatError>(())
/// ```
///
/// # Errors
///
/// This function fails for strings with the wrong number of digits or with
/// characters that are not hexadecimal digits.
pub fn hex_to_rgb(s: &str) -> Result<[Float; 3], ColorFormatError> {
    let digits = s.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);
    let ([r, g, b], _) = parse_hex_digits(digits)?;
    Ok(from_24bit(r, g, b))
}

/// Format the sRGB coordinates as a hashed hexadecimal color.
///
/// Coordinates are clamped to the unit range.
///
/// ```
/// # use okcolor::rgb_to_hex;
/// assert_eq!(rgb_to_hex(&[0.0, 0.5, 1.0]), "#0080ff");
/// ```
pub fn rgb_to_hex(rgb: &[Float; 3]) -> String {
    let [r, g, b] = to_24bit(rgb);
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

// --------------------------------------------------------------------------------------------------------------------

/// Parse a coordinate, which may be a percentage or `none`.
fn parse_number(s: &str) -> Option<Float> {
    if s == "none" {
        return Some(0.0);
    }

    s.strip_suffix('%').map_or_else(
        || s.parse().ok(),
        |number| number.parse::<Float>().ok().map(|n| n / 100.0),
    )
}

fn parse_coordinate(s: Option<&str>) -> Result<Float, ColorFormatError> {
    s.ok_or(ColorFormatError::MissingCoordinate)
        .and_then(|t| parse_number(t).ok_or(ColorFormatError::MalformedFloat))
}

fn parse_alpha(s: &str) -> Result<Float, ColorFormatError> {
    parse_number(s.trim()).ok_or(ColorFormatError::MalformedAlpha)
}

/// Split the arguments of a CSS function into coordinates and alpha.
fn split_arguments(body: &str) -> Result<(Vec<&str>, Option<Float>), ColorFormatError> {
    let (coordinates, alpha) = body
        .split_once('/')
        .map_or((body, None), |(coordinates, alpha)| (coordinates, Some(alpha)));

    let alpha = alpha.map(parse_alpha).transpose()?;
    let coordinates = coordinates
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    Ok((coordinates, alpha))
}

/// Parse the arguments of `rgb()` or `rgba()`.
///
/// Channels are bytes clamped to `0..=255` or percentages. A fourth argument
/// without slash is alpha.
fn parse_rgb(body: &str) -> Result<Color, ColorFormatError> {
    let (arguments, alpha) = split_arguments(body)?;

    let channel = |index: usize| -> Result<Float, ColorFormatError> {
        let t = arguments.get(index).copied();
        let value = parse_coordinate(t)?;
        if t.is_some_and(|t| t.ends_with('%')) {
            Ok(value.clamp(0.0, 1.0))
        } else {
            Ok(value.clamp(0.0, 255.0) / 255.0)
        }
    };

    let coordinates = [channel(0)?, channel(1)?, channel(2)?];
    let alpha = match (arguments.get(3), alpha, arguments.len()) {
        (_, _, n) if 4 < n => return Err(ColorFormatError::TooManyCoordinates),
        (Some(_), Some(_), _) => return Err(ColorFormatError::TooManyCoordinates),
        (Some(t), None, _) => Some(parse_alpha(t)?),
        (None, alpha, _) => alpha,
    };

    Ok(Color::new(&ColorSpace::SRGB, coordinates).with_alpha(alpha))
}

/// Parse the arguments of `oklab()`, `oklch()`, or `color()`.
fn parse_coordinates(
    space: &'static ColorSpace,
    arguments: &[&str],
    alpha: Option<Float>,
) -> Result<Color, ColorFormatError> {
    let mut iter = arguments.iter().copied();
    let c1 = parse_coordinate(iter.next())?;
    let c2 = parse_coordinate(iter.next())?;
    let c3 = parse_coordinate(iter.next())?;
    if iter.next().is_some() {
        return Err(ColorFormatError::TooManyCoordinates);
    }

    Ok(Color::new(space, [c1, c2, c3]).with_alpha(alpha))
}

/// Look up the color space for `color()`, which also accepts CSS's `xyz-d65`.
fn lookup_space(id: Option<&str>) -> Result<&'static ColorSpace, ColorFormatError> {
    match id {
        None => Err(ColorFormatError::UnknownColorSpace),
        Some("xyz-d65") => Ok(&ColorSpace::XYZ),
        Some(id) => ColorSpace::from_id(id),
    }
}

/// Parse the string into a color.
///
/// This function recognizes hashed hexadecimal colors with three, four, six,
/// or eight digits, the `rgb()` and `rgba()` functions with byte-valued
/// channels, and the `oklab()`, `oklch()`, and `color()` functions. Arguments
/// may be separated by commas or white space. Alpha follows a slash, except
/// for `rgb()` and `rgba()`, which also accept it as fourth argument. All
/// coordinates and alpha may be percentages, which are divided by 100, or
/// `none`, which is zero. Before parsing, this function trims leading and
/// trailing white space and converts ASCII letters to lowercase.
///
/// ```
/// # use okcolor::{deserialize, ColorSpace};
/// let color = deserialize("color(display-p3 1 0 0 / 0.4523)")?;
/// assert_eq!(color.space(), &ColorSpace::DISPLAY_P3);
/// assert_eq!(color.as_ref(), &[1.0, 0.0, 0.0]);
/// assert_eq!(color.alpha(), Some(0.4523));
/// # Ok::<(), okcolor::error::ColorFormatError>(())
/// ```
///
/// # Errors
///
/// This function fails with the [`ColorFormatError`] describing the first
/// problem it encounters.
pub fn deserialize(s: &str) -> Result<Color, ColorFormatError> {
    let lowercase = s.trim().to_ascii_lowercase(); // Keep around for fn scope
    let s = lowercase.as_str();

    if let Some(digits) = s.strip_prefix('#') {
        let ([r, g, b], alpha) = parse_hex_digits(digits)?;
        let alpha = alpha.map(|a| a as Float / 255.0);
        return Ok(Color::from_24bit(r, g, b).with_alpha(alpha));
    }

    // Munge CSS function name
    let (name, rest) = ["rgba", "rgb", "oklab", "oklch", "color"]
        .iter()
        .find_map(|name| s.strip_prefix(name).map(|rest| (*name, rest)))
        .ok_or(ColorFormatError::UnknownFormat)?;

    // Munge parentheses after trimming leading whitespace
    let body = rest
        .trim_start()
        .strip_prefix('(')
        .ok_or(ColorFormatError::NoOpeningParenthesis)
        .and_then(|rest| {
            rest.strip_suffix(')')
                .ok_or(ColorFormatError::NoClosingParenthesis)
        })?;

    if !body.is_ascii() {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    match name {
        "rgb" | "rgba" => parse_rgb(body),
        "oklab" | "oklch" => {
            let space = if name == "oklab" {
                &ColorSpace::OKLAB
            } else {
                &ColorSpace::OKLCH
            };
            let (arguments, alpha) = split_arguments(body)?;
            parse_coordinates(space, &arguments, alpha)
        }
        _ => {
            let (arguments, alpha) = split_arguments(body)?;
            let space = lookup_space(arguments.first().copied())?;
            parse_coordinates(space, arguments.get(1..).unwrap_or_default(), alpha)
        }
    }
}

/// Parse the string into a color and convert it to the target space.
///
/// Alpha is carried over unchanged.
///
/// # Errors
///
/// This function fails if the string cannot be parsed or the resulting color
/// cannot be converted.
pub fn parse(s: &str, target: &'static ColorSpace) -> Result<Color, ColorError> {
    Ok(deserialize(s)?.to(target)?)
}

// --------------------------------------------------------------------------------------------------------------------

/// Write a number, which is `none` if not a number.
///
/// Without precision, the number is written with the shortest representation
/// that parses to the same value. With precision, it is rounded to as many
/// digits past the decimal, minus two for degrees, and written without
/// trailing zeros.
fn write_number<W: Write>(
    out: &mut W,
    value: Float,
    precision: Option<usize>,
    is_degrees: bool,
) -> core::fmt::Result {
    if value.is_nan() {
        return out.write_str("none");
    }

    let Some(digits) = precision else {
        // Adding zero turns negative zero into zero
        return write!(out, "{}", value + 0.0);
    };

    let mut factor = (10.0 as Float).powi(digits as i32);
    if is_degrees {
        factor /= 100.0;
    }

    let rounded = (value * factor).round() / factor + 0.0;
    write!(out, "{}", rounded)
}

fn write_css<W: Write>(
    out: &mut W,
    space: &ColorSpace,
    coordinates: &[Float; 3],
    alpha: Option<Float>,
    precision: Option<usize>,
) -> core::fmt::Result {
    if *space == ColorSpace::SRGB {
        let [r, g, b] = to_24bit(coordinates);
        if let Some(alpha) = alpha {
            write!(out, "rgba({}, {}, {}, ", r, g, b)?;
            write_number(out, alpha, precision, false)?;
            return out.write_char(')');
        }
        return write!(out, "rgb({}, {}, {})", r, g, b);
    }

    if *space == ColorSpace::OKLAB || *space == ColorSpace::OKLCH {
        write!(out, "{}(", space.id())?;
    } else {
        write!(out, "color({} ", space.id())?;
    }

    let polar = *space == ColorSpace::OKLCH;
    for (index, coordinate) in coordinates.iter().enumerate() {
        if index > 0 {
            out.write_char(' ')?;
        }
        write_number(out, *coordinate, precision, polar && index == 2)?;
    }

    if let Some(alpha) = alpha {
        out.write_str(" / ")?;
        write_number(out, alpha, precision, false)?;
    }

    out.write_char(')')
}

/// Format the color as a string.
///
/// sRGB colors are formatted as `rgb()` or, with alpha, `rgba()` with
/// byte-valued channels. Oklab and Oklch colors are formatted with the
/// `oklab()` and `oklch()` functions. All other colors are formatted with the
/// `color()` function and the color space's identifier. Arguments of the
/// latter three are separated by spaces and alpha, if any, follows a slash.
/// Not-a-number is formatted as `none`. The formatter's precision, if any,
/// limits the digits past the decimal, with two fewer digits for Oklch's hue.
pub fn format(
    space: &ColorSpace,
    coordinates: &[Float; 3],
    alpha: Option<Float>,
    f: &mut core::fmt::Formatter<'_>,
) -> core::fmt::Result {
    let precision = f.precision();
    write_css(f, space, coordinates, alpha, precision)
}

/// Serialize the coordinates, converting them to the output space first.
///
/// ```
/// # use okcolor::{serialize, ColorSpace};
/// let css = serialize(&ColorSpace::SRGB, &[0.0, 0.5, 1.0], None, &ColorSpace::SRGB)?;
/// assert_eq!(css, "rgb(0, 128, 255)");
///
/// let css = serialize(
///     &ColorSpace::DISPLAY_P3,
///     &[1.0, 0.0, 0.0],
///     Some(0.4523),
///     &ColorSpace::DISPLAY_P3,
/// )?;
/// assert_eq!(css, "color(display-p3 1 0 0 / 0.4523)");
/// # Ok::<(), okcolor::error::ConversionError>(())
/// ```
///
/// # Errors
///
/// This function fails if the coordinates cannot be converted.
pub fn serialize(
    space: &ColorSpace,
    coordinates: &[Float; 3],
    alpha: Option<Float>,
    output: &ColorSpace,
) -> Result<String, ConversionError> {
    let coordinates = convert(space, output, coordinates)?;
    let mut css = String::new();
    // Writing to a string does not fail
    let _ = write_css(&mut css, output, &coordinates, alpha, None);
    Ok(css)
}

/// Format the alpha value as a byte for hashed hexadecimal colors.
pub(crate) fn alpha_to_hex(alpha: Float) -> String {
    format!("{:02x}", float_to_byte(alpha))
}

// ====================================================================================================================
