//! Rounding that hides binary floating-point noise.

/// Number of decimal digits kept by [`round_nice`] unless configured otherwise.
pub const DEFAULT_DECIMALS: i32 = 12;

/// Round `value` to `decimals` decimal digits.
///
/// Non-finite values are returned unchanged. Ties round away from zero.
pub fn round_nice(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
