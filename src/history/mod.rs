//! Bounded, persisted conversion history
//!
//! # Error Handling Strategy
//!
//! Persistence is best-effort. A failed read yields an empty log, a failed write leaves
//! the in-memory log as the source of truth for the rest of the session. Either way the
//! failure is reported through `tracing` and never surfaces as a conversion error.

pub mod store;

pub use store::{HISTORY_KEY, HistoryStore, load_history};
