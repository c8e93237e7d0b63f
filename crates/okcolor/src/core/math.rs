use crate::{Float, Matrix};

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
pub fn transform(matrix: &Matrix, vector: &[Float; 3]) -> [Float; 3] {
    let [ref row1, ref row2, ref row3] = *matrix;

    [dot(row1, vector), dot(row2, vector), dot(row3, vector)]
}

/// Compute the dot product of two 3-element vectors.
#[inline]
pub fn dot(v1: &[Float; 3], v2: &[Float; 3]) -> Float {
    v1[0].mul_add(v2[0], v1[1].mul_add(v2[1], v1[2] * v2[2]))
}

/// Cube each coordinate.
#[inline]
pub(crate) fn cube3(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = *value;
    [l * l * l, m * m * m, s * s * s]
}

/// Take the cube root of each coordinate.
#[inline]
pub(crate) fn cbrt3(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = *value;
    [l.cbrt(), m.cbrt(), s.cbrt()]
}

// --------------------------------------------------------------------------------------------------------------------

/// Linearly interpolate between `min` and `max`.
///
/// The result is `min` for `t == 0` and `max` for `t == 1`. Values of `t`
/// outside the unit range extrapolate.
///
/// ```
/// # use okcolor::lerp;
/// assert_eq!(lerp(2.0, 4.0, 0.25), 2.5);
/// ```
#[inline]
pub fn lerp(min: Float, max: Float, t: Float) -> Float {
    min.mul_add(1.0 - t, max * t)
}

/// Normalize the angle in degrees to `0..360`.
///
/// ```
/// # use okcolor::constrain_angle;
/// assert_eq!(constrain_angle(-30.0), 330.0);
/// assert_eq!(constrain_angle(720.0), 0.0);
/// ```
#[inline]
pub fn constrain_angle(degrees: Float) -> Float {
    let angle = degrees.rem_euclid(360.0);
    // rem_euclid may round up to the modulus for tiny negative inputs
    if angle >= 360.0 {
        0.0
    } else {
        angle
    }
}

/// Determine the signed difference between two hues in degrees.
///
/// The result is the shortest rotation from `start` to `end` and falls into
/// `-180..=180`.
#[inline]
pub fn delta_angle(start: Float, end: Float) -> Float {
    let delta = constrain_angle(end - start);
    if delta > 180.0 {
        delta - 360.0
    } else {
        delta
    }
}

/// Interpolate between two hues in degrees along the shorter arc.
#[inline]
pub fn lerp_angle(start: Float, end: Float, t: Float) -> Float {
    constrain_angle(delta_angle(start, end).mul_add(t, start))
}

// ====================================================================================================================
