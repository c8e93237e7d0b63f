use core::str::FromStr;

use crate::core::{
    alpha_to_hex, convert, delta_e_ok, deserialize, format, from_24bit, gamut_map_oklch,
    is_rgb_in_gamut, rgb_to_hex, to_24bit, ColorSpace, Gamut, MappingStrategy, GAMUT_EPSILON,
};
use crate::error::{ColorFormatError, ConversionError};
use crate::Float;

/// A color value.
///
/// Every color has a [color space](ColorSpace), three coordinates, and an
/// optional alpha. The coordinates have no inherent unit; their meaning is
/// determined by the color space. For RGB color spaces, in-gamut colors have
/// unit-range coordinates. Polar spaces keep their hue in degrees, which is the
/// last coordinate for Oklch and the first coordinate for Okhsl and Okhsv.
///
/// Alpha is carried along unchanged by conversion and gamut mapping. A color
/// without alpha is fully opaque, but serializes without an alpha component.
#[derive(Clone, Copy, PartialEq)]
pub struct Color {
    space: &'static ColorSpace,
    coordinates: [Float; 3],
    alpha: Option<Float>,
}

impl Color {
    /// Instantiate a new color with the given color space and coordinates.
    ///
    /// ```
    /// # use okcolor::{Color, ColorSpace};
    /// let pink = Color::new(&ColorSpace::OKLCH, [0.7, 0.22, 3.0]);
    /// assert_eq!(pink.as_ref(), &[0.7, 0.22, 3.0]);
    /// assert_eq!(pink.alpha(), None);
    /// ```
    #[inline]
    pub const fn new(space: &'static ColorSpace, coordinates: [Float; 3]) -> Self {
        Self {
            space,
            coordinates,
            alpha: None,
        }
    }

    /// Instantiate a new sRGB color.
    #[inline]
    pub const fn srgb(r: Float, g: Float, b: Float) -> Self {
        Self::new(&ColorSpace::SRGB, [r, g, b])
    }

    /// Instantiate a new Oklab color.
    #[inline]
    pub const fn oklab(l: Float, a: Float, b: Float) -> Self {
        Self::new(&ColorSpace::OKLAB, [l, a, b])
    }

    /// Instantiate a new Oklch color.
    #[inline]
    pub const fn oklch(l: Float, c: Float, h: Float) -> Self {
        Self::new(&ColorSpace::OKLCH, [l, c, h])
    }

    /// Instantiate a new sRGB color from 24-bit integer coordinates.
    ///
    /// ```
    /// # use okcolor::Color;
    /// let orange = Color::from_24bit(0xff, 0x80, 0);
    /// assert_eq!(orange, Color::srgb(1.0, 128.0 / 255.0, 0.0));
    /// ```
    #[inline]
    pub fn from_24bit(r: u8, g: u8, b: u8) -> Self {
        Self::new(&ColorSpace::SRGB, from_24bit(r, g, b))
    }

    /// Replace this color's alpha.
    #[inline]
    #[must_use = "method returns a new color and does not mutate original value"]
    pub const fn with_alpha(self, alpha: Option<Float>) -> Self {
        Self { alpha, ..self }
    }

    /// Access the color space.
    #[inline]
    pub const fn space(&self) -> &'static ColorSpace {
        self.space
    }

    /// Access the coordinates.
    #[inline]
    pub const fn coordinates(&self) -> [Float; 3] {
        self.coordinates
    }

    /// Access the alpha, if any.
    #[inline]
    pub const fn alpha(&self) -> Option<Float> {
        self.alpha
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to the target color space.
    ///
    /// ```
    /// # use okcolor::{Color, ColorSpace};
    /// let orange = Color::srgb(1.0, 0.5, 0.0).to(&ColorSpace::OKHSL)?;
    /// let [h, s, l] = orange.coordinates();
    /// assert!((h - 52.7757).abs() < 1e-4);
    /// assert!((s - 1.0).abs() < 1e-6);
    /// assert!((l - 0.6874).abs() < 1e-4);
    /// # Ok::<(), okcolor::error::ConversionError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// This method fails if either color space is invalid or lacks a
    /// conversion path.
    #[inline]
    pub fn to(&self, target: &'static ColorSpace) -> Result<Self, ConversionError> {
        let coordinates = convert(self.space, target, &self.coordinates)?;
        Ok(Self::new(target, coordinates).with_alpha(self.alpha))
    }

    /// Determine whether this color is within the gamut.
    ///
    /// ```
    /// # use okcolor::{Color, ColorSpace, Gamut};
    /// let green = Color::new(&ColorSpace::DISPLAY_P3, [0.0, 1.0, 0.0]);
    /// assert!(green.in_gamut(&Gamut::DISPLAY_P3)?);
    /// assert!(!green.in_gamut(&Gamut::SRGB)?);
    /// # Ok::<(), okcolor::error::ConversionError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// This method fails if the color cannot be converted to the gamut's
    /// linear space.
    pub fn in_gamut(&self, gamut: &Gamut) -> Result<bool, ConversionError> {
        let rgb = convert(self.space, gamut.linear_space(), &self.coordinates)?;
        Ok(is_rgb_in_gamut(&rgb, GAMUT_EPSILON))
    }

    /// Map this color into the gamut, keeping its color space.
    ///
    /// ```
    /// # use okcolor::{Color, ColorSpace, Gamut, MappingStrategy};
    /// let green = Color::new(&ColorSpace::DISPLAY_P3, [0.0, 1.0, 0.0]);
    /// let mapped = green.to_gamut(&Gamut::SRGB, MappingStrategy::default())?;
    /// assert_eq!(mapped.space(), &ColorSpace::DISPLAY_P3);
    /// assert!(mapped.in_gamut(&Gamut::SRGB)?);
    /// # Ok::<(), okcolor::error::ConversionError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// This method fails if the color cannot be converted to Oklch or back.
    pub fn to_gamut(
        &self,
        gamut: &Gamut,
        strategy: MappingStrategy,
    ) -> Result<Self, ConversionError> {
        let oklch = convert(self.space, &ColorSpace::OKLCH, &self.coordinates)?;
        let coordinates = gamut_map_oklch(&oklch, gamut, self.space, strategy)?;
        Ok(Self::new(self.space, coordinates).with_alpha(self.alpha))
    }

    /// Compute the perceptual distance Delta-E OK between the two colors.
    ///
    /// # Errors
    ///
    /// This method fails if either color cannot be converted to Oklab.
    pub fn distance(&self, other: &Self) -> Result<Float, ConversionError> {
        let oklab1 = convert(self.space, &ColorSpace::OKLAB, &self.coordinates)?;
        let oklab2 = convert(other.space, &ColorSpace::OKLAB, &other.coordinates)?;
        Ok(delta_e_ok(&oklab1, &oklab2))
    }

    // ----------------------------------------------------------------------------------------------------------------

    /// Convert this color to 24-bit sRGB, clamping out-of-gamut channels.
    ///
    /// # Errors
    ///
    /// This method fails if the color cannot be converted to sRGB.
    pub fn to_24bit(&self) -> Result<[u8; 3], ConversionError> {
        let rgb = convert(self.space, &ColorSpace::SRGB, &self.coordinates)?;
        Ok(to_24bit(&rgb))
    }

    /// Format this color in hashed hexadecimal notation.
    ///
    /// The color is converted to sRGB with out-of-gamut channels clamped. A
    /// color with alpha has a fourth byte.
    ///
    /// ```
    /// # use okcolor::Color;
    /// assert_eq!(Color::srgb(1.0, 0.5, 0.0).to_hex()?, "#ff8000");
    /// assert_eq!(Color::srgb(1.0, 0.5, 0.0).with_alpha(Some(0.5)).to_hex()?, "#ff800080");
    /// # Ok::<(), okcolor::error::ConversionError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// This method fails if the color cannot be converted to sRGB.
    pub fn to_hex(&self) -> Result<String, ConversionError> {
        let rgb = convert(self.space, &ColorSpace::SRGB, &self.coordinates)?;
        let mut hex = rgb_to_hex(&rgb);
        if let Some(alpha) = self.alpha {
            hex.push_str(&alpha_to_hex(alpha));
        }
        Ok(hex)
    }
}

impl FromStr for Color {
    type Err = ColorFormatError;

    /// Parse a color from its CSS-like string representation.
    ///
    /// ```
    /// # use okcolor::{Color, ColorSpace};
    /// let navy: Color = "#011480".parse()?;
    /// assert_eq!(navy, Color::from_24bit(1, 20, 128));
    ///
    /// let faded: Color = "oklch(0.5 0.1 200 / 50%)".parse()?;
    /// assert_eq!(faded.space(), &ColorSpace::OKLCH);
    /// assert_eq!(faded.alpha(), Some(0.5));
    /// # Ok::<(), okcolor::error::ColorFormatError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        deserialize(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        deserialize(value)
    }
}

impl AsRef<[Float; 3]> for Color {
    fn as_ref(&self) -> &[Float; 3] {
        &self.coordinates
    }
}

impl core::fmt::Debug for Color {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [c1, c2, c3] = self.coordinates;
        match self.alpha {
            Some(alpha) => write!(
                f,
                "Color({:?}, [{}, {}, {}], {})",
                self.space, c1, c2, c3, alpha
            ),
            None => write!(f, "Color({:?}, [{}, {}, {}])", self.space, c1, c2, c3),
        }
    }
}

impl core::fmt::Display for Color {
    /// Format this color in CSS notation.
    ///
    /// The formatter's precision, if any, limits the digits past the decimal.
    ///
    /// ```
    /// # use okcolor::{Color, ColorSpace};
    /// let lime = Color::new(&ColorSpace::OKLCH, [0.81945, 0.07179, 152.812]);
    /// assert_eq!(format!("{}", lime), "oklch(0.81945 0.07179 152.812)");
    /// assert_eq!(format!("{:.3}", lime), "oklch(0.819 0.072 152.8)");
    /// ```
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        format(self.space, &self.coordinates, self.alpha, f)
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::Color;
    use crate::core::{assert_close_enough, assert_same_coordinates, ColorSpace, Gamut, MappingStrategy};
    use crate::error::{ColorFormatError, ConversionError};

    #[test]
    fn test_constructors() {
        assert_eq!(Color::srgb(1.0, 0.0, 0.0).space(), &ColorSpace::SRGB);
        assert_eq!(Color::oklab(0.5, 0.1, 0.0).space(), &ColorSpace::OKLAB);
        assert_eq!(Color::oklch(0.5, 0.1, 0.0).space(), &ColorSpace::OKLCH);
        assert_eq!(
            Color::from_24bit(0, 0x33, 0xff),
            Color::srgb(0.0, 0.2, 1.0)
        );

        let color = Color::srgb(0.1, 0.2, 0.3).with_alpha(Some(0.4));
        assert_eq!(color.alpha(), Some(0.4));
        assert_eq!(color.coordinates(), [0.1, 0.2, 0.3]);
        assert_eq!(color.with_alpha(None).alpha(), None);
    }

    #[test]
    fn test_conversion() -> Result<(), ConversionError> {
        let orange = Color::from_24bit(0xff, 0x80, 0).with_alpha(Some(0.25));
        let oklch = orange.to(&ColorSpace::OKLCH)?;
        assert_eq!(oklch.space(), &ColorSpace::OKLCH);
        assert_eq!(oklch.alpha(), Some(0.25));

        let back = oklch.to(&ColorSpace::SRGB)?;
        assert_same_coordinates!(back.as_ref(), orange.as_ref());
        assert_eq!(back.to_24bit()?, [255, 128, 0]);
        Ok(())
    }

    #[test]
    fn test_gamut() -> Result<(), ConversionError> {
        let green = Color::new(&ColorSpace::DISPLAY_P3, [0.0, 1.0, 0.0]);
        assert!(green.in_gamut(&Gamut::DISPLAY_P3)?);
        assert!(green.in_gamut(&Gamut::REC2020)?);
        assert!(!green.in_gamut(&Gamut::SRGB)?);

        for strategy in [
            MappingStrategy::CuspLightness,
            MappingStrategy::Lightness,
            MappingStrategy::AdaptiveGray {
                alpha: MappingStrategy::DEFAULT_ALPHA,
            },
        ] {
            let mapped = green.with_alpha(Some(0.5)).to_gamut(&Gamut::SRGB, strategy)?;
            assert_eq!(mapped.space(), &ColorSpace::DISPLAY_P3);
            assert_eq!(mapped.alpha(), Some(0.5));
            assert!(mapped.in_gamut(&Gamut::SRGB)?);
        }

        let gray = Color::srgb(0.5, 0.5, 0.5);
        let mapped = gray.to_gamut(&Gamut::SRGB, MappingStrategy::default())?;
        assert_same_coordinates!(mapped.as_ref(), gray.as_ref());
        Ok(())
    }

    #[test]
    fn test_distance() -> Result<(), ConversionError> {
        let white = Color::srgb(1.0, 1.0, 1.0);
        let black = Color::new(&ColorSpace::XYZ, [0.0, 0.0, 0.0]);
        assert_close_enough!(white.distance(&black)?, 1.0, 1e-6);
        assert_close_enough!(white.distance(&white)?, 0.0);
        Ok(())
    }

    #[test]
    fn test_hex() -> Result<(), ConversionError> {
        assert_eq!(Color::from_24bit(0x12, 0xab, 0xef).to_hex()?, "#12abef");
        assert_eq!(
            Color::from_24bit(0x12, 0xab, 0xef)
                .with_alpha(Some(1.0))
                .to_hex()?,
            "#12abefff"
        );

        // Out-of-gamut channels are clamped
        let green = Color::new(&ColorSpace::DISPLAY_P3, [0.0, 1.0, 0.0]);
        let hex = green.to_hex()?;
        assert!(hex.starts_with("#00ff"), "unexpected {}", hex);
        Ok(())
    }

    #[test]
    fn test_parse() -> Result<(), ColorFormatError> {
        let color: Color = "rgb(255 0 0 / 0.5)".parse()?;
        assert_eq!(color, Color::srgb(1.0, 0.0, 0.0).with_alpha(Some(0.5)));

        let color = Color::try_from("color(rec2020 0.1 0.2 0.3)")?;
        assert_eq!(color.space(), &ColorSpace::REC2020);
        assert_eq!(color.as_ref(), &[0.1, 0.2, 0.3]);

        assert_eq!(
            "hsl(120 50% 50%)".parse::<Color>(),
            Err(ColorFormatError::UnknownFormat)
        );
        Ok(())
    }

    #[test]
    fn test_format() {
        assert_eq!(Color::srgb(1.0, 0.0, 0.0).to_string(), "rgb(255, 0, 0)");
        assert_eq!(
            Color::srgb(1.0, 0.0, 0.0).with_alpha(Some(0.5)).to_string(),
            "rgba(255, 0, 0, 0.5)"
        );
        assert_eq!(
            Color::new(&ColorSpace::DISPLAY_P3, [1.0, 0.0, 0.0])
                .with_alpha(Some(0.5))
                .to_string(),
            "color(display-p3 1 0 0 / 0.5)"
        );
        assert_eq!(
            format!("{:.2}", Color::oklab(0.123_456, -0.045_678, 0.0)),
            "oklab(0.12 -0.05 0)"
        );
        assert_eq!(
            format!("{:.2}", Color::oklch(0.5, 0.1, 30.123)),
            "oklch(0.5 0.1 30)"
        );
        assert_eq!(
            format!("{:?}", Color::srgb(1.0, 0.5, 0.0)),
            "Color(ColorSpace(\"srgb\"), [1, 0.5, 0])"
        );
    }

    #[test]
    fn test_thread_safety() {
        fn is_shareable<T: Copy + Send + Sync>() {}

        is_shareable::<Color>();
        is_shareable::<ColorSpace>();
        is_shareable::<Gamut>();
    }
}
