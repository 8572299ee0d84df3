//! Temperature Converter - Celsius/Fahrenheit conversion with a bounded history
//!
//! The library holds the conversion-and-history engine; the binary wraps it in a
//! command line and an interactive terminal widget. It provides:
//!
//! - Validation and conversion of raw text input ([`converter`])
//! - A ten-entry, newest-first history persisted through a key-value store ([`history`])
//! - Pluggable storage backends and confirmation prompts ([`storage`], [`confirm`])
//! - The control flow tying them together ([`session`])
//!
//! # Example
//!
//! ```
//! use temp_converter::{ConversionDirection, ConversionRequest, MemoryStore, Session, Submission};
//!
//! let mut session = Session::new(MemoryStore::new());
//! let request = ConversionRequest::new("100", ConversionDirection::CelsiusToFahrenheit);
//! let outcome = session.submit(&request, &mut |_: &str| true)?;
//!
//! assert!(matches!(outcome, Submission::Converted(c) if c.to_label() == "212°F"));
//! assert_eq!(session.history().len(), 1);
//! # Ok::<(), temp_converter::ValidationError>(())
//! ```

pub mod cli;
pub mod confirm;
pub mod converter;
pub mod error;
pub mod history;
pub mod models;
pub mod session;
pub mod storage;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use converter::{convert, convert_confirmed};
pub use error::{PersistenceError, ValidationError};
pub use history::HistoryStore;
pub use models::{
    Conversion, ConversionDirection, ConversionRequest, ConversionResult, HistoryLog,
    HistoryRecord, TemperatureUnit,
};
pub use session::{Session, Submission};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
