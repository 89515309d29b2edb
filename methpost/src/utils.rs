//! Small numeric helpers shared across modules.

/// Rounds `value` to `digits` fractional digits, resolving ties towards
/// the even neighbor (the behavior of IEEE 754 roundTiesToEven applied
/// to the scaled value).
pub fn round_half_even(
    value: f64,
    digits: u32,
) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round_ties_even() / factor
}
