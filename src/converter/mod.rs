//! Celsius/Fahrenheit conversion engine.
//!
//! Everything here is pure: no history, no I/O. The pipeline is
//! [`validate`] (trim, parse, range checks) followed by [`convert_value`] (formula and
//! rounding). [`convert`] runs both and stops at the soft confirmation threshold;
//! [`convert_confirmed`] is for callers that already asked the user.

pub mod formula;
pub mod scale;
pub mod validation;

pub use formula::{DEFAULT_PRECISION, SMALL_MAGNITUDE, SMALL_PRECISION, convert_value, round_result};
pub use scale::{ScaleBand, ScaleReading};
pub use validation::{CONFIRM_THRESHOLD, EXTREME_LIMIT, check_input, validate};

use crate::error::ValidationError;
use crate::models::{ConversionDirection, ConversionRequest, ConversionResult};

/// Preset inputs offered as quick-value buttons
pub const QUICK_VALUES: [f64; 5] = [-40.0, 0.0, 20.0, 37.0, 100.0];

/// Validate and convert raw input
///
/// Values beyond [`CONFIRM_THRESHOLD`] are not converted; the caller gets
/// [`ValidationError::RequiresConfirmation`] and should retry through
/// [`convert_confirmed`] once the user agrees.
pub fn convert(
    raw_input: &str,
    direction: ConversionDirection,
) -> Result<ConversionResult, ValidationError> {
    let value = validate(raw_input)?;
    if value.abs() > CONFIRM_THRESHOLD {
        return Err(ValidationError::RequiresConfirmation { value });
    }
    Ok(convert_value(value, direction))
}

/// Validate and convert raw input the user has already confirmed
pub fn convert_confirmed(
    raw_input: &str,
    direction: ConversionDirection,
) -> Result<ConversionResult, ValidationError> {
    let value = validate(raw_input)?;
    Ok(convert_value(value, direction))
}

impl ConversionRequest {
    pub fn convert(&self) -> Result<ConversionResult, ValidationError> {
        convert(&self.raw_input, self.direction)
    }
}
