//! Utility module with okcolor's errors.

/// An error converting between color spaces.
///
/// Conversion fails only for color space descriptors that do not support the
/// requested conversion. All color spaces built into this crate support all
/// conversions between each other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConversionError {
    /// A color space descriptor with an empty identifier.
    InvalidSpace { name: &'static str },

    /// A color space descriptor lacking the capability for a conversion step.
    /// The missing capability is `toXYZ`, `fromXYZ`, or, for gamut mapping,
    /// `fromLMS`.
    MissingConversionPath {
        from: &'static str,
        to: &'static str,
        missing: &'static str,
    },

    /// A derived color space whose base also is derived.
    UnsupportedBaseDepth {
        space: &'static str,
        base: &'static str,
    },
}

impl core::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use ConversionError::*;

        match *self {
            InvalidSpace { name } => {
                write!(f, "color space {:?} should have an identifier but does not", name)
            }
            MissingConversionPath { from, to, missing } => write!(
                f,
                "conversion from {} to {} needs {} step but there is none",
                from, to, missing
            ),
            UnsupportedBaseDepth { space, base } => write!(
                f,
                "color space {} should have a base that is not derived but {} is",
                space, base
            ),
        }
    }
}

impl core::error::Error for ConversionError {}

// ====================================================================================================================

/// An erroneous color format.
///
/// The variants carry no further state. Parsing happens on short strings, so
/// the attendant loss of information is rather limited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that does not start with a known prefix such as `#`,
    /// `rgb(`, or `color(`.
    UnknownFormat,

    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#00` is missing hexadecimal digits, whereas
    /// `#💩00` contains a character other than ASCII.
    UnexpectedCharacters,

    /// A parenthesized color format without the opening parenthesis. For
    /// example, `color display-p3 0 0 0)` is missing the opening parenthesis.
    NoOpeningParenthesis,

    /// A parenthesized color format without the closing parenthesis. For
    /// example, `oklab(1 2 3` is missing the closing parenthesis.
    NoClosingParenthesis,

    /// A color format that is using an unknown color space. For example,
    /// `color(unknown 1 1 1)` uses an unknown color space.
    UnknownColorSpace,

    /// A color format that is missing a coordinate. For example, `rgb(0 0)` is
    /// missing the third coordinate.
    MissingCoordinate,

    /// A hexadecimal color with a malformed digit. For example, `#efg` has a
    /// malformed third digit.
    MalformedHex,

    /// A color format with a malformed floating point number as coordinate.
    /// For example, `color(srgb 1.0 0..1 0.0)` has a malformed second
    /// coordinate.
    MalformedFloat,

    /// A color format with a malformed alpha value. For example, `oklab(1 0 0
    /// / )` has a slash but no alpha.
    MalformedAlpha,

    /// A color format with more than three coordinates and alpha. For example,
    /// `oklch(1 2 3 4)` has one coordinate too many.
    TooManyCoordinates,
}

impl core::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use ColorFormatError::*;

        match *self {
            UnknownFormat => f.write_str(
                "color format should start with `#`, `rgb()`, `oklab()`, `oklch()`, or `color()`",
            ),
            UnexpectedCharacters => {
                f.write_str("color format should contain only valid ASCII characters")
            }
            NoOpeningParenthesis => {
                f.write_str("color format should include an opening parenthesis but has none")
            }
            NoClosingParenthesis => {
                f.write_str("color format should include a closing parenthesis but has none")
            }
            UnknownColorSpace => {
                f.write_str("color format should have known color space but does not")
            }
            MissingCoordinate => {
                f.write_str("color format should have 3 coordinates but is missing one")
            }
            MalformedHex => {
                f.write_str("color format digits should be hexadecimal but one is not")
            }
            MalformedFloat => {
                f.write_str("color format coordinates should be floating point numbers but are not")
            }
            MalformedAlpha => {
                f.write_str("color format alpha should be a floating point number but is not")
            }
            TooManyCoordinates => {
                f.write_str("color format should have 3 coordinates but has more")
            }
        }
    }
}

impl core::error::Error for ColorFormatError {}

// ====================================================================================================================

/// Any error raised by this crate.
///
/// Operations that both parse and convert, such as [`parse`](crate::parse),
/// return this wrapper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorError {
    Format(ColorFormatError),
    Conversion(ConversionError),
}

impl From<ColorFormatError> for ColorError {
    fn from(value: ColorFormatError) -> Self {
        Self::Format(value)
    }
}

impl From<ConversionError> for ColorError {
    fn from(value: ConversionError) -> Self {
        Self::Conversion(value)
    }
}

impl core::fmt::Display for ColorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Self::Format(ref error) => write!(f, "could not parse color: {}", error),
            Self::Conversion(ref error) => write!(f, "could not convert color: {}", error),
        }
    }
}

impl core::error::Error for ColorError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match *self {
            Self::Format(ref error) => Some(error),
            Self::Conversion(ref error) => Some(error),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use core::error::Error;

    #[test]
    fn test_messages() {
        let error = ConversionError::MissingConversionPath {
            from: "srgb",
            to: "mystery",
            missing: "fromXYZ",
        };
        assert_eq!(
            error.to_string(),
            "conversion from srgb to mystery needs fromXYZ step but there is none"
        );

        let wrapped = ColorError::from(error.clone());
        assert!(wrapped.source().is_some(), "wrapper has source");
        assert_eq!(wrapped, ColorError::Conversion(error));

        let wrapped: ColorError = ColorFormatError::MalformedHex.into();
        assert!(wrapped.to_string().starts_with("could not parse color: "));
    }
}
