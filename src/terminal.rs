use std::io::{self, Write};
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;

/// Owns the terminal while the game runs: raw mode, alternate screen and a
/// hidden cursor. Everything is undone on drop, including when unwinding.
pub struct TerminalGuard<W: Write> {
    out: W,
    raw: bool,
}

impl<W: Write> TerminalGuard<W> {
    /// `raw` toggles raw mode; the screen and cursor are always switched.
    pub fn enter(out: W, raw: bool) -> io::Result<Self> {
        if raw {
            terminal::enable_raw_mode()?;
        }
        let mut guard = Self { out, raw };
        guard.out.execute(EnterAlternateScreen)?;
        guard.out.execute(Hide)?;
        Ok(guard)
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        let _ = self.out.execute(Show);
        let _ = self.out.execute(LeaveAlternateScreen);
        if self.raw {
            let _ = terminal::disable_raw_mode();
        }
    }
}

/// Restores stdout before the default hook prints a panic message, so the
/// message lands on the normal screen.
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let mut stdout = io::stdout();
        let _ = stdout.execute(Show);
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        previous(info);
    }));
}

#[cfg(test)]
mod tests {
    use std::panic::AssertUnwindSafe;

    use super::*;

    const ENTER: &str = "\x1b[?1049h\x1b[?25l";
    const LEAVE: &str = "\x1b[?25h\x1b[?1049l";

    #[test]
    fn drop_restores_screen_and_cursor() {
        let mut buf = Vec::new();
        {
            let mut guard = TerminalGuard::enter(&mut buf, false).unwrap();
            guard.writer().write_all(b"frame").unwrap();
        }
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, format!("{ENTER}frame{LEAVE}"));
    }

    #[test]
    fn panic_inside_the_session_still_restores() {
        let mut buf = Vec::new();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _guard = TerminalGuard::enter(&mut buf, false).unwrap();
            panic!("grid query outside maze");
        }));
        assert!(result.is_err());
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with(LEAVE), "{text:?}");
    }
}
