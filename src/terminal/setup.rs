//! Terminal setup and teardown functions.
//!
//! Low-level helpers for entering and leaving TUI mode. `leave_tui_mode`
//! is also used from the panic hook, so it must never panic itself.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter TUI mode: raw mode plus the alternate screen, so the user's
/// scrollback is preserved for when we leave.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(writer, EnterAlternateScreen)
}

/// Leave TUI mode and restore the terminal to a usable state.
///
/// Safe to call multiple times and from the panic hook; all errors are
/// ignored because there is nothing sensible left to do with them.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, LeaveAlternateScreen);
    let _ = execute!(writer, Show);
    let _ = writer.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_tui_mode_does_not_panic() {
        // Must not panic even when the writer is not a real terminal.
        let mut buffer = Vec::new();
        leave_tui_mode(&mut buffer);
    }
}
