//! Error types for conversion and persistence.
//!
//! Validation errors are user-facing: their `Display` text is what the widget shows.
//! Persistence errors never reach the user as a failed conversion; the history store
//! logs them and carries on with in-memory state.

use std::io;

use thiserror::Error;

use crate::converter::EXTREME_LIMIT;
use crate::models::format_number;

/// Why a raw input could not be converted
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please enter a temperature")]
    EmptyInput,
    #[error("Please enter a valid number")]
    NotANumber,
    #[error("Temperature value is not valid")]
    NonFiniteValue,
    #[error("Temperature value is too extreme")]
    ValueTooExtreme,
    /// Soft warning: the caller must get explicit confirmation before converting
    #[error("This temperature seems unusually high. Continue anyway?")]
    RequiresConfirmation { value: f64 },
}

impl ValidationError {
    /// Whether the caller may still proceed after user confirmation
    pub fn is_soft(&self) -> bool {
        matches!(self, ValidationError::RequiresConfirmation { .. })
    }

    /// Message shown in the live-typing hint, where large values read differently
    pub fn hint(&self) -> String {
        match self {
            ValidationError::ValueTooExtreme => {
                format!("Temperature value is too large (> {})", group_thousands(EXTREME_LIMIT))
            }
            ValidationError::RequiresConfirmation { value } => {
                format!("{} is unusually high, you will be asked to confirm", format_number(*value))
            }
            other => other.to_string(),
        }
    }
}

/// `12345.0` as `12,345`; fractions are dropped
fn group_thousands(value: f64) -> String {
    let formatted = format_number(value.trunc());
    let (sign, digits) = match formatted.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", formatted.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{sign}{grouped}")
}

/// Failure talking to the key-value persistence collaborator
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to read `{key}`")]
    ReadFailure {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to write `{key}`")]
    WriteFailure {
        key: String,
        #[source]
        source: io::Error,
    },
    #[error("quota exceeded writing `{key}`: {size} bytes exceeds limit of {quota}")]
    QuotaExceeded { key: String, size: usize, quota: usize },
    #[error("stored value for `{key}` is corrupt")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
