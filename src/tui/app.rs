//! TUI application state and event handling.
//!
//! The `App` owns a [`Session`] and everything the widget shows: the input being typed,
//! the selected direction, the latest outcome, the scale reading and the theme. It runs
//! the event loop via `run()` and redraws only when state changes (or every 100ms to
//! pick up terminal resizes).
//!
//! Confirmation prompts cannot block here, so they become a modal state: the pending
//! action is parked until the user presses `y` (accept) or `n`/Esc (decline). While a
//! prompt is open every other key is ignored.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tracing::debug;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use super::theme::Theme;
use crate::confirm::{CONFIRM_CLEAR_PROMPT, CONFIRM_EXTREME_PROMPT};
use crate::converter::{QUICK_VALUES, ScaleReading, check_input};
use crate::error::ValidationError;
use crate::models::{Conversion, ConversionDirection, ConversionRequest, format_number};
use crate::session::Session;
use crate::storage::KeyValueStore;

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for informational status messages (milliseconds)
const STATUS_INFO_DURATION_MS: u64 = 2000;
/// Longest input accepted from the keyboard
const MAX_INPUT_LEN: usize = 32;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Info,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

/// What the result panel currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Nothing converted yet, or the input was cleared
    Idle,
    Converted(Conversion),
    Invalid(ValidationError),
}

/// Action parked behind a confirmation prompt
#[derive(Debug, Clone, PartialEq)]
pub enum PendingConfirmation {
    ExtremeValue(ConversionRequest),
    ClearHistory,
}

impl PendingConfirmation {
    pub fn prompt(&self) -> &'static str {
        match self {
            PendingConfirmation::ExtremeValue(_) => CONFIRM_EXTREME_PROMPT,
            PendingConfirmation::ClearHistory => CONFIRM_CLEAR_PROMPT,
        }
    }
}

pub struct App<S> {
    session: Session<S>,
    input: String,
    direction: ConversionDirection,
    outcome: Outcome,
    scale: ScaleReading,
    pending: Option<PendingConfirmation>,
    theme: Theme,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    // Set by the history subscription, consumed by the event loop
    history_changed: Rc<Cell<bool>>,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(mut session: Session<S>) -> Self {
        let history_changed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&history_changed);
        session.history_store_mut().subscribe(move |_| flag.set(true));

        Self {
            session,
            input: String::new(),
            direction: ConversionDirection::default(),
            outcome: Outcome::Idle,
            scale: ScaleReading::default(),
            pending: None,
            theme: Theme::default(),
            should_quit: false,
            status_message: None,
            history_changed,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            let had_status = self.status_message.is_some();
            self.check_and_clear_expired_status();
            if had_status && self.status_message.is_none() {
                self.needs_redraw = true;
            }
            if self.history_changed.replace(false) {
                self.needs_redraw = true;
            }

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                terminal.draw(|f| render_ui(f, &self.render_state()))?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    fn render_state(&self) -> RenderState<'_> {
        RenderState {
            input: &self.input,
            direction: self.direction,
            outcome: &self.outcome,
            scale: self.scale,
            history: self.session.history(),
            theme: self.theme,
            prompt: self.pending.as_ref().map(PendingConfirmation::prompt),
            status_message: self.status_message.as_ref(),
        }
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        if self.pending.is_some() {
            self.handle_prompt_action(action);
            return;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::ClearInput => {
                if self.input.is_empty() {
                    self.should_quit = true;
                } else {
                    self.input.clear();
                    self.outcome = Outcome::Idle;
                    self.needs_redraw = true;
                }
            }
            Action::Submit => self.submit(),
            Action::ToggleDirection => {
                self.direction = self.direction.toggle();
                self.needs_redraw = true;
                if !self.input.trim().is_empty() {
                    self.submit();
                }
            }
            Action::ToggleTheme => {
                self.theme = self.theme.toggle();
                self.needs_redraw = true;
            }
            Action::ClearHistory => {
                if !self.session.history().is_empty() {
                    self.pending = Some(PendingConfirmation::ClearHistory);
                    self.needs_redraw = true;
                }
            }
            Action::QuickValue(idx) => {
                if let Some(value) = QUICK_VALUES.get(idx) {
                    self.input = format_number(*value);
                    self.submit();
                }
            }
            Action::Input(c) => self.insert_char(c),
            Action::DeleteChar => {
                if self.input.pop().is_some() {
                    self.refresh_live_check();
                }
            }
            Action::None => {}
        }
    }

    /// Keys while a confirmation prompt is open: only yes/no and quit get through
    fn handle_prompt_action(&mut self, action: Action) {
        let accepted = match action {
            Action::Input('y') | Action::Input('Y') => true,
            Action::Input('n') | Action::Input('N') | Action::ClearInput => false,
            Action::Quit => {
                self.should_quit = true;
                return;
            }
            _ => return,
        };

        let Some(pending) = self.pending.take() else {
            return;
        };
        self.needs_redraw = true;

        match (pending, accepted) {
            (PendingConfirmation::ExtremeValue(request), true) => {
                match self.session.submit_confirmed(&request) {
                    Ok(conversion) => self.show_conversion(conversion),
                    Err(e) => self.outcome = Outcome::Invalid(e),
                }
            }
            (PendingConfirmation::ExtremeValue(request), false) => {
                debug!(input = %request.raw_input, "Extreme value conversion declined");
                self.set_status("Conversion cancelled", MessageType::Info, STATUS_INFO_DURATION_MS);
            }
            (PendingConfirmation::ClearHistory, true) => {
                if self.session.clear_history(&mut |_: &str| true) {
                    self.set_status(
                        "✓ History cleared",
                        MessageType::Success,
                        STATUS_SUCCESS_DURATION_MS,
                    );
                }
            }
            (PendingConfirmation::ClearHistory, false) => {}
        }
    }

    fn submit(&mut self) {
        let request = ConversionRequest::new(self.input.clone(), self.direction);

        match request.convert() {
            Ok(_) => match self.session.submit_confirmed(&request) {
                Ok(conversion) => self.show_conversion(conversion),
                Err(e) => self.outcome = Outcome::Invalid(e),
            },
            // Answered later through the modal
            Err(ValidationError::RequiresConfirmation { .. }) => {
                self.pending = Some(PendingConfirmation::ExtremeValue(request));
            }
            Err(e) => self.outcome = Outcome::Invalid(e),
        }
        self.needs_redraw = true;
    }

    fn show_conversion(&mut self, conversion: Conversion) {
        self.scale = ScaleReading::for_result(&conversion.result);
        self.outcome = Outcome::Converted(conversion);
        self.needs_redraw = true;
    }

    fn insert_char(&mut self, c: char) {
        if self.input.len() < MAX_INPUT_LEN && !c.is_control() {
            self.input.push(c);
            self.refresh_live_check();
        }
    }

    /// Re-validate while typing, like the browser widget's `input` handler
    fn refresh_live_check(&mut self) {
        self.outcome = match check_input(&self.input) {
            Some(e) => Outcome::Invalid(e),
            None => Outcome::Idle,
        };
        self.needs_redraw = true;
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let should_clear = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if should_clear {
            self.status_message = None;
        }
    }
}
