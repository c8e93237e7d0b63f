//! CIE Lab relative to the D50 white point.

use crate::Float;

const EPSILON: Float = 216.0 / 24389.0;
const EPSILON3: Float = 24.0 / 116.0;
const KAPPA: Float = 24389.0 / 27.0;

/// The D50 white point in XYZ, derived from its xy chromaticity.
const WHITE_D50: [Float; 3] = [
    0.3457 / 0.3585,
    1.0,
    (1.0 - 0.3457 - 0.3585) / 0.3585,
];

/// Convert XYZ D50 to CIE Lab.
pub(crate) fn xyz_d50_to_lab(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn f(value: Float) -> Float {
        if value > EPSILON {
            value.cbrt()
        } else {
            KAPPA.mul_add(value, 16.0) / 116.0
        }
    }

    let f0 = f(value[0] / WHITE_D50[0]);
    let f1 = f(value[1] / WHITE_D50[1]);
    let f2 = f(value[2] / WHITE_D50[2]);

    [f1.mul_add(116.0, -16.0), 500.0 * (f0 - f1), 200.0 * (f1 - f2)]
}

/// Convert CIE Lab to XYZ D50.
#[allow(non_snake_case)]
pub(crate) fn lab_to_xyz_d50(value: &[Float; 3]) -> [Float; 3] {
    #[inline]
    fn f_inv(value: Float) -> Float {
        if value > EPSILON3 {
            value * value * value
        } else {
            value.mul_add(116.0, -16.0) / KAPPA
        }
    }

    let [L, a, b] = *value;
    let f1 = (L + 16.0) / 116.0;
    let f0 = a / 500.0 + f1;
    let f2 = f1 - b / 200.0;

    let y = if L > KAPPA * EPSILON {
        f1 * f1 * f1
    } else {
        L / KAPPA
    };

    [f_inv(f0) * WHITE_D50[0], y * WHITE_D50[1], f_inv(f2) * WHITE_D50[2]]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::{assert_close_enough, assert_same_coordinates};

    #[test]
    fn test_white_and_black() {
        let white = xyz_d50_to_lab(&WHITE_D50);
        assert_same_coordinates!(&white, &[100.0, 0.0, 0.0]);
        assert_same_coordinates!(&lab_to_xyz_d50(&white), &WHITE_D50);

        assert_same_coordinates!(&xyz_d50_to_lab(&[0.0, 0.0, 0.0]), &[0.0, 0.0, 0.0]);
        assert_same_coordinates!(&lab_to_xyz_d50(&[0.0, 0.0, 0.0]), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_round_trip() {
        for xyz in [[0.2, 0.3, 0.4], [0.001, 0.002, 0.003], [0.9, 0.5, 0.1]] {
            let lab = xyz_d50_to_lab(&xyz);
            assert_same_coordinates!(&lab_to_xyz_d50(&lab), &xyz);
        }

        // Linear segment below the threshold
        let dark = lab_to_xyz_d50(&[5.0, 0.0, 0.0]);
        assert_close_enough!(dark[1], 5.0 / KAPPA);
    }
}
