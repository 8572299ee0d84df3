//! Control flow between user actions, the converter and the history
//!
//! Every action that produces a number (submit, quick value, re-submit after a direction
//! toggle) funnels through [`Session::submit`]. Only successful conversions reach the
//! history.

use tracing::{debug, info};

use crate::confirm::{CONFIRM_EXTREME_PROMPT, Confirm};
use crate::converter::{self, validate};
use crate::error::ValidationError;
use crate::history::HistoryStore;
use crate::models::{Conversion, ConversionRequest, HistoryLog};
use crate::storage::KeyValueStore;

/// What happened to a submitted request that passed validation
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Converted(Conversion),
    /// The user declined the extreme-value prompt; nothing was recorded
    Declined,
}

pub struct Session<S> {
    history: HistoryStore<S>,
}

impl<S: KeyValueStore> Session<S> {
    /// Start a session, restoring history from `storage`
    pub fn new(storage: S) -> Self {
        Self { history: HistoryStore::open(storage) }
    }

    pub fn history(&self) -> &HistoryLog {
        self.history.log()
    }

    pub fn history_store(&self) -> &HistoryStore<S> {
        &self.history
    }

    pub fn history_store_mut(&mut self) -> &mut HistoryStore<S> {
        &mut self.history
    }

    /// Convert a request, asking `confirm` for values past the threshold
    pub fn submit(
        &mut self,
        request: &ConversionRequest,
        confirm: &mut dyn Confirm,
    ) -> Result<Submission, ValidationError> {
        match request.convert() {
            Ok(_) => self.submit_confirmed(request).map(Submission::Converted),
            Err(ValidationError::RequiresConfirmation { value }) => {
                if confirm.confirm(CONFIRM_EXTREME_PROMPT) {
                    self.submit_confirmed(request).map(Submission::Converted)
                } else {
                    debug!(value, "Extreme value conversion declined");
                    Ok(Submission::Declined)
                }
            }
            Err(e) => Err(e),
        }
    }

    /// Convert a request the user has already agreed to, and record it
    pub fn submit_confirmed(
        &mut self,
        request: &ConversionRequest,
    ) -> Result<Conversion, ValidationError> {
        let input = validate(&request.raw_input)?;
        let result = converter::convert_value(input, request.direction);
        let conversion = Conversion { input, direction: request.direction, result };

        info!(from = %conversion.from_label(), to = %conversion.to_label(), "Converted");
        self.history.record(conversion.from_label(), conversion.to_label());
        Ok(conversion)
    }

    /// Empty the history once `confirm` agrees
    pub fn clear_history(&mut self, confirm: &mut dyn Confirm) -> bool {
        self.history.clear(confirm)
    }
}
