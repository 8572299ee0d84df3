use crate::error::ValidationError;

/// Inputs with a larger magnitude are rejected outright
pub const EXTREME_LIMIT: f64 = 10_000.0;
/// Inputs with a larger magnitude need explicit user confirmation
pub const CONFIRM_THRESHOLD: f64 = 1_000.0;

/// Trim and parse raw input, applying the hard range checks
///
/// Checks run in order and the first failure wins: empty, not a number, non-finite,
/// beyond [`EXTREME_LIMIT`]. The soft [`CONFIRM_THRESHOLD`] is left to the caller.
pub fn validate(raw_input: &str) -> Result<f64, ValidationError> {
    let trimmed = raw_input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let value: f64 = trimmed.parse().map_err(|_| ValidationError::NotANumber)?;
    if value.is_nan() {
        return Err(ValidationError::NotANumber);
    }
    if value.is_infinite() {
        return Err(ValidationError::NonFiniteValue);
    }
    if value.abs() > EXTREME_LIMIT {
        return Err(ValidationError::ValueTooExtreme);
    }

    Ok(value)
}

/// Feedback while the user is still typing
///
/// Empty input is not an error yet, and values past the confirmation threshold are
/// reported so the user knows a prompt is coming.
pub fn check_input(raw_input: &str) -> Option<ValidationError> {
    if raw_input.trim().is_empty() {
        return None;
    }
    match validate(raw_input) {
        Ok(value) if value.abs() > CONFIRM_THRESHOLD => {
            Some(ValidationError::RequiresConfirmation { value })
        }
        Ok(_) => None,
        Err(e) => Some(e),
    }
}
