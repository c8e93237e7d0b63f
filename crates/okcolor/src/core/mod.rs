mod conversion;
mod difference;
mod equality;
mod gamut;
mod lab;
mod math;
mod matrices;
mod okhsl;
mod oklab;
mod space;
mod string;
mod transfer;

// conversion
pub use conversion::{convert, float_to_byte, from_24bit, to_24bit, xyy_to_xyz, xyz_to_xyy};

// difference
pub use difference::delta_e_ok;

// equality
#[cfg(test)]
pub(crate) use equality::{
    assert_close_enough, assert_same_coordinates, LOOSE_TOLERANCE, TOLERANCE,
};

// gamut
pub use gamut::{
    clamped_rgb, compute_max_saturation, find_cusp, find_gamut_intersection, gamut_map_oklch,
    gamut_map_oklch_with_cusp, is_rgb_in_gamut, ChannelCoefficients, Cusp, Gamut,
    GamutCoefficients, MappingStrategy, GAMUT_EPSILON,
};

// math
pub use math::{constrain_angle, delta_angle, dot, lerp, lerp_angle, transform};

// okhsl
pub use okhsl::{okhsl_to_oklab, okhsv_to_oklab, oklab_to_okhsl, oklab_to_okhsv, toe, toe_inv};

// oklab
pub use oklab::{
    oklab_from, oklab_to, oklab_to_oklch, oklab_to_oklch_with, oklch_to_oklab, ACHROMATIC_EPSILON,
};

// space
pub use space::{Adaptation, ColorSpace, Derivation};

// string
pub(crate) use string::alpha_to_hex;
pub use string::{deserialize, format, hex_to_rgb, parse, rgb_to_hex, serialize};

// transfer
pub use transfer::{
    a98_to_linear, linear_to_a98, linear_to_prophoto, linear_to_rec2020, linear_to_srgb,
    prophoto_to_linear, rec2020_to_linear, srgb_to_linear,
};
