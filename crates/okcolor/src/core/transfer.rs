//! The transfer functions of the RGB color spaces.
//!
//! Each scalar function has an exact inverse. The sRGB and A98 RGB curves
//! extend to negative values by mirroring around the origin, so that
//! out-of-gamut colors survive a round trip through the gamma-encoded space.

use crate::Float;

/// Decode an sRGB or Display P3 channel value to linear light.
pub fn srgb_to_linear(value: Float) -> Float {
    let magnitude = value.abs();
    if magnitude <= 0.04045 {
        value / 12.92
    } else {
        ((magnitude + 0.055) / 1.055).powf(2.4).copysign(value)
    }
}

/// Encode a linear sRGB or Display P3 channel value with the sRGB gamma.
///
/// The linear segment ends where the decoder's does, at `0.04045 / 12.92`,
/// which is a hair above the commonly cited `0.0031308`.
pub fn linear_to_srgb(value: Float) -> Float {
    let magnitude = value.abs();
    if magnitude > 0.04045 / 12.92 {
        magnitude
            .powf((2.4 as Float).recip())
            .mul_add(1.055, -0.055)
            .copysign(value)
    } else {
        value * 12.92
    }
}

// --------------------------------------------------------------------------------------------------------------------

#[allow(clippy::excessive_precision)]
const ALPHA: Float = 1.09929682680944;
#[allow(clippy::excessive_precision)]
const BETA: Float = 0.018053968510807;

/// Decode a Rec. 2020 channel value to linear light.
pub fn rec2020_to_linear(value: Float) -> Float {
    if value < BETA * 4.5 {
        value / 4.5
    } else {
        ((value + ALPHA - 1.0) / ALPHA).powf((0.45 as Float).recip())
    }
}

/// Encode a linear Rec. 2020 channel value.
pub fn linear_to_rec2020(value: Float) -> Float {
    if value < BETA {
        value * 4.5
    } else {
        ALPHA.mul_add(value.powf(0.45), -(ALPHA - 1.0))
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Decode an A98 RGB channel value to linear light.
pub fn a98_to_linear(value: Float) -> Float {
    value.abs().powf(563.0 / 256.0).copysign(value)
}

/// Encode a linear A98 RGB channel value.
pub fn linear_to_a98(value: Float) -> Float {
    value.abs().powf(256.0 / 563.0).copysign(value)
}

// --------------------------------------------------------------------------------------------------------------------

const ET: Float = 1.0 / 512.0;
const ET2: Float = 16.0 / 512.0;

/// Decode a ProPhoto RGB channel value to linear light.
pub fn prophoto_to_linear(value: Float) -> Float {
    if value < ET2 {
        value / 16.0
    } else {
        value.powf(1.8)
    }
}

/// Encode a linear ProPhoto RGB channel value.
pub fn linear_to_prophoto(value: Float) -> Float {
    if value >= ET {
        value.powf((1.8 as Float).recip())
    } else {
        value * 16.0
    }
}

// ====================================================================================================================
// Per-coordinate versions, as used by the color space descriptors.

pub(crate) fn rgb_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    value.map(srgb_to_linear)
}

pub(crate) fn linear_rgb_to_rgb(value: &[Float; 3]) -> [Float; 3] {
    value.map(linear_to_srgb)
}

pub(crate) fn rec2020_to_linear_rec2020(value: &[Float; 3]) -> [Float; 3] {
    value.map(rec2020_to_linear)
}

pub(crate) fn linear_rec2020_to_rec2020(value: &[Float; 3]) -> [Float; 3] {
    value.map(linear_to_rec2020)
}

pub(crate) fn a98_rgb_to_linear_a98_rgb(value: &[Float; 3]) -> [Float; 3] {
    value.map(a98_to_linear)
}

pub(crate) fn linear_a98_rgb_to_a98_rgb(value: &[Float; 3]) -> [Float; 3] {
    value.map(linear_to_a98)
}

pub(crate) fn prophoto_rgb_to_linear_prophoto_rgb(value: &[Float; 3]) -> [Float; 3] {
    value.map(prophoto_to_linear)
}

pub(crate) fn linear_prophoto_rgb_to_prophoto_rgb(value: &[Float; 3]) -> [Float; 3] {
    value.map(linear_to_prophoto)
}

// ====================================================================================================================
