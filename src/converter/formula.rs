use crate::models::{ConversionDirection, ConversionResult};

/// Results smaller than this (and non-zero) keep extra decimal places
pub const SMALL_MAGNITUDE: f64 = 0.1;
/// Decimal places kept for small-magnitude results
pub const SMALL_PRECISION: u32 = 6;
/// Decimal places kept for everything else
pub const DEFAULT_PRECISION: u32 = 1;

/// Apply the conversion formula and rounding policy to an already validated value
pub fn convert_value(value: f64, direction: ConversionDirection) -> ConversionResult {
    let raw = match direction {
        ConversionDirection::CelsiusToFahrenheit => value * 9.0 / 5.0 + 32.0,
        ConversionDirection::FahrenheitToCelsius => (value - 32.0) * 5.0 / 9.0,
    };
    ConversionResult { value: round_result(raw), unit: direction.target_unit() }
}

/// Round to 6 places below [`SMALL_MAGNITUDE`], otherwise to 1 place
pub fn round_result(value: f64) -> f64 {
    let places =
        if value.abs() < SMALL_MAGNITUDE && value != 0.0 { SMALL_PRECISION } else { DEFAULT_PRECISION };
    let rounded = round_decimal(value, places);
    // Avoid reporting `-0`
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Round half away from zero, deciding on the exact binary value rather than a scaled copy.
///
/// `9.95` is stored as `9.9499999...`, so it rounds to `9.9`; scaling by ten first would
/// land on `99.5` and round up.
fn round_decimal(value: f64, places: u32) -> f64 {
    let bits = value.abs().to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };
    // Integral already (or not finite)
    if exponent >= 0 {
        return value;
    }

    let scale = 10u128.pow(places);
    let scaled = u128::from(mantissa) * scale;
    let shift = exponent.unsigned_abs();
    // scaled < 2^73, so anything shifted this far is below one half
    let units = if shift >= 128 {
        0
    } else {
        let whole = scaled >> shift;
        let remainder = scaled - (whole << shift);
        if remainder >= 1u128 << (shift - 1) { whole + 1 } else { whole }
    };
    (units as f64 / scale as f64).copysign(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_default_precision() {
        assert_eq!(round_result(98.60000000000001), 98.6);
        assert_eq!(round_result(37.77777), 37.8);
        assert_eq!(round_result(-17.77777), -17.8);
    }

    #[test]
    fn test_round_ties_away_from_zero() {
        assert_eq!(round_result(0.25), 0.3);
        assert_eq!(round_result(-0.25), -0.3);
    }

    #[test]
    fn test_round_uses_stored_value_not_scaled_copy() {
        // 9.95 and 0.15 are stored just below the tie
        assert_eq!(round_result(9.95), 9.9);
        assert_eq!(round_result(0.15), 0.1);
        assert_eq!(round_result(37.25), 37.3);
        assert_eq!(convert_value(-12.25, ConversionDirection::CelsiusToFahrenheit).value, 9.9);
        assert_eq!(convert_value(-18.49, ConversionDirection::FahrenheitToCelsius).value, -28.0);
    }

    #[test]
    fn test_round_large_and_subnormal_values() {
        assert_eq!(round_result(18032.0), 18032.0);
        assert_eq!(round_result(1.0e-320), 0.0);
        assert_eq!(round_result(1832.04), 1832.0);
    }

    #[test]
    fn test_round_small_magnitude() {
        assert_eq!(round_result(0.0555555555), 0.055556);
        assert_eq!(round_result(-0.0000004), 0.0);
        assert_eq!(round_result(0.0), 0.0);
    }

    #[test]
    fn test_round_never_negative_zero() {
        let rounded = round_result(-0.0000001);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_positive());
    }

    #[test]
    fn test_convert_value_body_temperature() {
        let result = convert_value(98.6, ConversionDirection::FahrenheitToCelsius);
        assert_eq!(result.value, 37.0);
    }
}
