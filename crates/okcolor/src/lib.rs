//! # okcolor
//!
//! Color space conversion, Oklab-based gamut mapping, and CSS-like color
//! strings.
//!
//! ## 1. Overview
//!
//! Okcolor's main abstractions are:
//!
//!   * [`ColorSpace`] is an immutable, statically-constructed **color space
//!     descriptor**. Each descriptor either is derived from a base space or is
//!     a root that converts to XYZ or, for Oklab, to LMS. The registry covers
//!     XYZ (D65 and D50), Oklab, Oklch, Okhsv, Okhsl, sRGB, Display P3,
//!     Rec. 2020, A98 RGB, ProPhoto RGB, the linear versions of the RGB
//!     spaces, and CIE Lab.
//!   * [`convert`] is the **conversion engine**. It routes coordinates from
//!     source to target through at most one base on either side, with XYZ or
//!     LMS in between.
//!   * [`Gamut`] pairs an RGB color space with the polynomial coefficients for
//!     approximating its boundary in Oklab. [`find_cusp`],
//!     [`find_gamut_intersection`], and [`gamut_map_oklch`] build on it to
//!     **map colors into gamut** while preserving hue, using one of several
//!     [`MappingStrategy`] variants.
//!   * [`okhsl_to_oklab`] and friends implement the **Okhsl and Okhsv** color
//!     spaces for any of the supported gamuts.
//!   * [`serialize`] and [`deserialize`] translate between coordinates and
//!     **CSS Color 4-like strings**.
//!   * [`Color`] combines a color space, three coordinates, and an optional
//!     alpha into a convenient **color value**.
//!
//! ## 2. Converting and Mapping Colors
//!
//! ```
//! # use okcolor::{convert, gamut_map_oklch, ColorSpace, Gamut, MappingStrategy};
//! let oklch = convert(&ColorSpace::DISPLAY_P3, &ColorSpace::OKLCH, &[0.0, 1.0, 0.0])?;
//! let srgb = gamut_map_oklch(&oklch, &Gamut::SRGB, &ColorSpace::SRGB, MappingStrategy::default())?;
//! assert!(srgb.iter().all(|c| (0.0..=1.0).contains(c)));
//! # Ok::<(), okcolor::error::ConversionError>(())
//! ```
//!
//! The same with [`Color`]:
//!
//! ```
//! # use okcolor::{Color, Gamut, MappingStrategy};
//! # use okcolor::error::ColorError;
//! let green: Color = "color(display-p3 0 1 0)".parse()?;
//! let mapped = green.to_gamut(&Gamut::SRGB, MappingStrategy::default())?;
//! assert!(mapped.in_gamut(&Gamut::SRGB)?);
//! # Ok::<(), ColorError>(())
//! ```
//!
//! ## 3. Optional Features
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     instead of `f32`. This feature is enabled by default.
//!
//! ## 4. Logging
//!
//! Okcolor logs through the [`log`](https://docs.rs/log) facade but never
//! installs a logger. Failing conversions and lookups emit `debug` records
//! and gamut mapping of out-of-gamut colors emits `trace` records.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// A 3x3 matrix in row-major order.
pub type Matrix = [[Float; 3]; 3];

/// A conversion function between coordinate triples.
pub type Transfer = fn(&[Float; 3]) -> [Float; 3];

mod core;
pub mod error;
mod object;

pub use crate::core::{
    a98_to_linear, clamped_rgb, compute_max_saturation, constrain_angle, convert, delta_angle,
    delta_e_ok, deserialize, dot, find_cusp, find_gamut_intersection, float_to_byte, format,
    from_24bit, gamut_map_oklch, gamut_map_oklch_with_cusp, hex_to_rgb, is_rgb_in_gamut, lerp,
    lerp_angle, linear_to_a98, linear_to_prophoto, linear_to_rec2020, linear_to_srgb,
    okhsl_to_oklab, okhsv_to_oklab, oklab_from, oklab_to, oklab_to_okhsl, oklab_to_okhsv,
    oklab_to_oklch, oklab_to_oklch_with, oklch_to_oklab, parse, prophoto_to_linear,
    rec2020_to_linear, rgb_to_hex, serialize, srgb_to_linear, to_24bit, toe, toe_inv, transform,
    xyy_to_xyz, xyz_to_xyy, Adaptation, ChannelCoefficients, ColorSpace, Cusp, Derivation, Gamut,
    GamutCoefficients, MappingStrategy, ACHROMATIC_EPSILON, GAMUT_EPSILON,
};
pub use object::Color;
