use crate::Float;

/// Compute Delta-E for Oklab, i.e., the Euclidean distance.
///
/// ```
/// # use okcolor::delta_e_ok;
/// assert_eq!(delta_e_ok(&[0.5, 0.1, 0.0], &[0.5, 0.1, 0.0]), 0.0);
/// assert!((delta_e_ok(&[0.0, 0.0, 0.0], &[0.3, 0.0, 0.4]) - 0.5).abs() < 1e-12);
/// ```
#[allow(non_snake_case)]
pub fn delta_e_ok(oklab1: &[Float; 3], oklab2: &[Float; 3]) -> Float {
    let [L1, a1, b1] = *oklab1;
    let [L2, a2, b2] = *oklab2;

    let ΔL = L1 - L2;
    let Δa = a1 - a2;
    let Δb = b1 - b2;

    ΔL.mul_add(ΔL, Δa.mul_add(Δa, Δb * Δb)).sqrt()
}
