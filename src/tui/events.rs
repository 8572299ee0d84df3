use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User actions from keyboard events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    /// Clear the input, or quit when it is already empty
    ClearInput,
    Submit,
    ToggleDirection,
    ToggleTheme,
    ClearHistory,
    /// Index into the quick-value presets
    QuickValue(usize),
    Input(char),
    DeleteChar,
    None,
}

/// Poll for keyboard events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
        && key.kind != KeyEventKind::Release
    {
        return Ok(key_to_action(key));
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::ClearInput,

        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Tab, _) | (KeyCode::BackTab, _) => Action::ToggleDirection,
        (KeyCode::Char('t'), KeyModifiers::CONTROL) => Action::ToggleTheme,
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => Action::ClearHistory,

        // F1..F5 stand in for the quick-value buttons
        (KeyCode::F(n @ 1..=5), _) => Action::QuickValue(usize::from(n - 1)),

        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::Input(c)
        }
        (KeyCode::Backspace, _) => Action::DeleteChar,

        _ => Action::None,
    }
}
