//! Terminal mode switching

use crossterm::{
    cursor::Show,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use std::io::{self, Stdout, Write};
use tracing::warn;

/// Switches raw mode on (`true`) or off (`false`)
type RawModeSwitch = fn(bool) -> io::Result<()>;

fn crossterm_raw_mode(on: bool) -> io::Result<()> {
    if on {
        enable_raw_mode()
    } else {
        disable_raw_mode()
    }
}

/// Raw mode and the alternate screen for as long as the guard lives.
///
/// Dropping the guard restores the terminal, including when setup fails
/// partway through.
pub struct TerminalGuard<W: Write> {
    out: W,
    raw_mode: RawModeSwitch,
    enhanced: bool,
}

impl TerminalGuard<Stdout> {
    pub fn enter() -> io::Result<Self> {
        // Needed to tell Ctrl+Enter apart from Enter
        let enhance = supports_keyboard_enhancement().unwrap_or(false);
        Self::enter_with(io::stdout(), crossterm_raw_mode, enhance)
    }
}

impl<W: Write> TerminalGuard<W> {
    fn enter_with(out: W, raw_mode: RawModeSwitch, enhance: bool) -> io::Result<Self> {
        raw_mode(true)?;
        let mut guard = Self {
            out,
            raw_mode,
            enhanced: false,
        };

        execute!(guard.out, EnterAlternateScreen)?;
        if enhance {
            execute!(
                guard.out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
            )?;
            guard.enhanced = true;
        }
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if self.enhanced {
            if let Err(e) = execute!(self.out, PopKeyboardEnhancementFlags) {
                warn!("Could not pop keyboard flags: {}", e);
            }
        }
        if let Err(e) = (self.raw_mode)(false) {
            warn!("Could not leave raw mode: {}", e);
        }
        if let Err(e) = execute!(self.out, LeaveAlternateScreen, Show) {
            warn!("Could not leave alternate screen: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    thread_local! {
        static RAW_MODE_CALLS: RefCell<Vec<bool>> = const { RefCell::new(Vec::new()) };
    }

    fn record_raw_mode(on: bool) -> io::Result<()> {
        RAW_MODE_CALLS.with(|calls| calls.borrow_mut().push(on));
        Ok(())
    }

    fn raw_mode_calls() -> Vec<bool> {
        RAW_MODE_CALLS.with(|calls| calls.borrow().clone())
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_failed_setup_leaves_raw_mode() {
        let result = TerminalGuard::enter_with(BrokenPipe, record_raw_mode, true);
        assert!(result.is_err());
        assert_eq!(raw_mode_calls(), vec![true, false]);
    }

    #[test]
    fn test_drop_restores_terminal() {
        let mut out = Vec::new();
        {
            let _guard = TerminalGuard::enter_with(&mut out, record_raw_mode, false).unwrap();
            assert_eq!(raw_mode_calls(), vec![true]);
        }
        assert_eq!(raw_mode_calls(), vec![true, false]);

        let written = String::from_utf8(out).unwrap();
        let entered = written.find("\x1b[?1049h").unwrap();
        let left = written.find("\x1b[?1049l").unwrap();
        assert!(entered < left);
    }
}
