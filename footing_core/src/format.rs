//! # Display Formatting
//!
//! Fixed-point rendering of calculation results. Rounding is part of the
//! observable output, so it is pinned down precisely:
//!
//! - the decimal is the one nearest the exact binary value
//! - an exact tie rounds away from zero (`542.5` → `"543"`, `0.125` → `"0.13"`)
//! - `NaN`, `Infinity` and `-Infinity` render as those words
//! - negative zero renders as `"0"`
//!
//! Rust's `{:.N}` formatting breaks exact ties to even, so ties are detected
//! and rounded here before delegating the rest to `format!`.

/// Format `value` with exactly `decimals` digits after the point.
///
/// # Example
/// ```rust
/// use footing_core::format::to_fixed;
///
/// assert_eq!(to_fixed(542.0, 0), "542");
/// assert_eq!(to_fixed(542.5, 0), "543");
/// assert_eq!(to_fixed(1414.284293, 2), "1414.28");
/// assert_eq!(to_fixed(f64::NAN, 2), "NaN");
/// ```
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return format!("{:.*}", decimals, 0.0);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    let body = if is_exact_tie(magnitude, decimals) {
        round_tie_up(magnitude, decimals)
    } else {
        format!("{:.*}", decimals, magnitude)
    };
    format!("{}{}", sign, body)
}

/// True when `magnitude` lies exactly halfway between two `decimals`-place values.
///
/// A halfway value `(2n + 1) / (2 · 10^decimals)` is only representable in
/// binary when it reduces to `j / 2^(decimals + 1)` with odd `j`, so scaling by
/// that power of two (an exact operation) and checking for an odd integer
/// finds every tie.
fn is_exact_tie(magnitude: f64, decimals: usize) -> bool {
    let Ok(exp) = i32::try_from(decimals + 1) else {
        return false;
    };
    let scaled = magnitude * 2f64.powi(exp);
    scaled.is_finite() && scaled.fract() == 0.0 && scaled % 2.0 == 1.0
}

fn round_tie_up(magnitude: f64, decimals: usize) -> String {
    let factor = 10f64.powi(decimals as i32);
    let units = (magnitude * factor).ceil();
    if decimals == 0 {
        return format!("{:.0}", units);
    }
    let digits = format!("{:0>width$.0}", units, width = decimals + 1);
    let (int_part, frac_part) = digits.split_at(digits.len() - decimals);
    format!("{}.{}", int_part, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_rounding() {
        assert_eq!(to_fixed(1566.92, 2), "1566.92");
        assert_eq!(to_fixed(1567.070_885_432_780_6, 2), "1567.07");
        assert_eq!(to_fixed(541.6, 0), "542");
        assert_eq!(to_fixed(541.4, 0), "541");
        assert_eq!(to_fixed(3.0, 2), "3.00");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(to_fixed(542.5, 0), "543");
        assert_eq!(to_fixed(0.5, 0), "1");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(-0.5, 0), "-1");
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(10.375, 2), "10.38");
        assert_eq!(to_fixed(-2.625, 2), "-2.63");
    }

    #[test]
    fn test_near_ties_use_exact_value() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(to_fixed(1.005, 2), "1.00");
        // 0.285 is stored as 0.28499999999999998...
        assert_eq!(to_fixed(0.285, 2), "0.28");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(to_fixed(-58.0, 0), "-58");
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
        assert_eq!(to_fixed(-0.0, 0), "0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(to_fixed(f64::NAN, 0), "NaN");
        assert_eq!(to_fixed(f64::INFINITY, 2), "Infinity");
        assert_eq!(to_fixed(f64::NEG_INFINITY, 2), "-Infinity");
    }
}
