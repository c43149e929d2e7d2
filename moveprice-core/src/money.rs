//! Presentation rounding.
//!
//! Money and hour values are rounded exactly once, when a breakdown is
//! assembled. Intermediate arithmetic always runs on unrounded `f64`.

use crate::constants::PRESENTATION_DECIMALS;

/// Round to two decimal places, half away from zero.
///
/// Inputs are bounded upstream so every value reaching here is finite.
/// Debug builds assert it; release builds return `0.0` rather than
/// serialize `NaN` or infinity.
pub fn round2(value: f64) -> f64 {
    debug_assert!(value.is_finite(), "non-finite value reached rounding: {value}");
    if !value.is_finite() {
        return 0.0;
    }
    let scale = 10f64.powi(PRESENTATION_DECIMALS);
    let rounded = (value * scale).round() / scale;
    // Normalize -0.0 so serialized output never shows "-0.0".
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
