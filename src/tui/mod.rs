//! Interactive terminal widget: input box, result, thermometer gauge and history list
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;
mod theme;

use anyhow::Result;
pub use app::App;
use terminal::TerminalGuard;

use crate::session::Session;
use crate::storage::KeyValueStore;

/// Run the interactive TUI until the user quits
pub fn run_interactive<S: KeyValueStore>(session: Session<S>) -> Result<()> {
    let mut guard = TerminalGuard::enter()?;
    let mut app = App::new(session);

    let res = app.run(guard.terminal_mut());

    guard.restore()?;
    res
}
