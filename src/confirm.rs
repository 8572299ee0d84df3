//! Yes/no confirmation capability
//!
//! Extreme values and clearing the history both need the user's explicit agreement.
//! The core never prompts on its own; callers hand in something that implements
//! [`Confirm`]. Any `FnMut(&str) -> bool` closure works, which keeps tests deterministic:
//!
//! ```
//! use temp_converter::confirm::Confirm;
//!
//! let mut always = |_: &str| true;
//! assert!(always.confirm("Continue anyway?"));
//! ```

use std::io::{self, BufRead, Write};

/// Prompt shown before converting a value past the confirmation threshold
pub const CONFIRM_EXTREME_PROMPT: &str = "This temperature seems unusually high. Continue anyway?";
/// Prompt shown before wiping the history
pub const CONFIRM_CLEAR_PROMPT: &str = "Are you sure you want to clear all conversion history?";

pub trait Confirm {
    /// Ask `prompt` and block until the user answers
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Line-based prompt over a reader/writer pair (stdin/stdout for the CLI)
pub struct PromptConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl PromptConfirm<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for PromptConfirm<R, W> {
    /// `y` or `yes` (any case) accepts; anything else, EOF or an I/O error declines
    fn confirm(&mut self, prompt: &str) -> bool {
        if write!(self.output, "{} [y/N] ", prompt).and_then(|_| self.output.flush()).is_err() {
            return false;
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(input: &str) -> (bool, String) {
        let mut output = Vec::new();
        let answer = PromptConfirm::new(input.as_bytes(), &mut output).confirm("Proceed?");
        (answer, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_prompt_accepts_yes() {
        assert!(ask("y\n").0);
        assert!(ask("YES\n").0);
        assert!(ask("  yes  \n").0);
    }

    #[test]
    fn test_prompt_declines_everything_else() {
        assert!(!ask("n\n").0);
        assert!(!ask("\n").0);
        assert!(!ask("sure\n").0);
    }

    #[test]
    fn test_prompt_declines_on_eof() {
        assert!(!ask("").0);
    }

    #[test]
    fn test_prompt_is_written() {
        let (_, output) = ask("n\n");
        assert_eq!(output, "Proceed? [y/N] ");
    }

    #[test]
    fn test_closure_records_prompt() {
        let mut seen = Vec::new();
        let mut confirm = |prompt: &str| {
            seen.push(prompt.to_string());
            false
        };
        assert!(!confirm.confirm(CONFIRM_CLEAR_PROMPT));
        assert_eq!(seen, vec![CONFIRM_CLEAR_PROMPT.to_string()]);
    }
}
