//! Test support for comparing floating point quantities.

#[cfg(test)]
use crate::Float;

/// The default absolute tolerance for test assertions.
#[cfg(all(test, feature = "f64"))]
pub(crate) const TOLERANCE: Float = 1e-9;

/// The default absolute tolerance for test assertions.
#[cfg(all(test, not(feature = "f64")))]
pub(crate) const TOLERANCE: Float = 1e-4;

/// The tolerance for hues, Lab, Okhsl, and Okhsv, whose coordinates are
/// larger or pass through more steps.
#[cfg(all(test, feature = "f64"))]
pub(crate) const LOOSE_TOLERANCE: Float = 100.0 * TOLERANCE;

/// The tolerance for hues, Lab, Okhsl, and Okhsv, whose coordinates are
/// larger or pass through more steps.
#[cfg(all(test, not(feature = "f64")))]
pub(crate) const LOOSE_TOLERANCE: Float = 1_000.0 * TOLERANCE;

/// Test macro for asserting that two floating point numbers are close enough.
///
/// Without a third argument, this macro uses the crate's default tolerance.
///
/// # Panics
///
/// This macro panics if the absolute difference exceeds the tolerance. Its
/// message places the numbers below each other at the beginning of subsequent
/// lines for easy comparability.
#[cfg(test)]
macro_rules! assert_close_enough {
    ($f1:expr, $f2:expr $(,)?) => {
        $crate::core::assert_close_enough!($f1, $f2, $crate::core::TOLERANCE)
    };
    ($f1:expr, $f2:expr, $tolerance:expr $(,)?) => {{
        let (f1, f2, tolerance): ($crate::Float, $crate::Float, $crate::Float) =
            ($f1, $f2, $tolerance);
        assert!(
            (f1 - f2).abs() <= tolerance,
            "quantities differ by more than {}:\n{:?}\n{:?}",
            tolerance,
            f1,
            f2
        );
    }};
}

#[cfg(test)]
pub(crate) use assert_close_enough;

/// Test macro for asserting that two coordinate arrays are close enough.
///
/// # Panics
///
/// This macro panics if any pair of coordinates differs by more than the
/// tolerance. Its message places the coordinates below each other at the
/// beginning of subsequent lines for easy comparability.
#[cfg(test)]
macro_rules! assert_same_coordinates {
    ($cs1:expr, $cs2:expr $(,)?) => {
        $crate::core::assert_same_coordinates!($cs1, $cs2, $crate::core::TOLERANCE)
    };
    ($cs1:expr, $cs2:expr, $tolerance:expr $(,)?) => {{
        let (cs1, cs2, tolerance): (&[$crate::Float; 3], &[$crate::Float; 3], $crate::Float) =
            ($cs1, $cs2, $tolerance);
        assert!(
            cs1.iter().zip(cs2.iter()).all(|(c1, c2)| (c1 - c2).abs() <= tolerance),
            "color coordinates differ by more than {}:\n{:?}\n{:?}",
            tolerance,
            cs1,
            cs2
        );
    }};
}

#[cfg(test)]
pub(crate) use assert_same_coordinates;
