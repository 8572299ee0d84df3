//! Data models for temperature conversion and its history.
//!
//! - [`ConversionDirection`] / [`TemperatureUnit`] - the two supported scales
//! - [`ConversionRequest`] - raw input plus direction, built per user action
//! - [`ConversionResult`] / [`Conversion`] - what a successful conversion produced
//! - [`HistoryRecord`] / [`HistoryLog`] - the bounded, persisted history
//!
//! Records serialize with serde into the same JSON shape the browser widget kept in
//! `localStorage`, so an exported history can be dropped into the data directory as-is.

pub mod history;
pub mod temperature;

pub use history::{HistoryLog, HistoryRecord, MAX_HISTORY_RECORDS};
pub use temperature::{
    Conversion, ConversionDirection, ConversionRequest, ConversionResult, TemperatureUnit,
    format_number,
};
