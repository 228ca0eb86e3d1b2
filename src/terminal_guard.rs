use std::io::{self, IsTerminal};
use std::sync::{Arc, Mutex};

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Restores the terminal on drop or panic.
pub struct TerminalGuard {
    cleanup: Arc<Mutex<Option<Box<dyn FnOnce() + Send + 'static>>>>,
    raw_mode: bool,
}

impl TerminalGuard {
    fn new(raw_mode: bool) -> Self {
        Self {
            cleanup: Arc::new(Mutex::new(None)),
            raw_mode,
        }
    }

    /// Whether raw mode was enabled.
    pub fn raw_mode(&self) -> bool {
        self.raw_mode
    }

    fn set_cleanup<F: FnOnce() + Send + 'static>(&self, cleanup: F) {
        if let Ok(mut slot) = self.cleanup.lock() {
            *slot = Some(Box::new(cleanup));
        }
    }

    fn install_panic_hook(&self) {
        let cleanup = Arc::clone(&self.cleanup);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if let Ok(mut slot) = cleanup.lock() {
                if let Some(cleanup) = slot.take() {
                    cleanup();
                }
            }
            default_hook(info);
        }));
    }

    fn restore(&self) {
        if let Ok(mut slot) = self.cleanup.lock() {
            if let Some(cleanup) = slot.take() {
                cleanup();
            }
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Puts stdin into raw mode when it is a terminal.
///
/// Piped or redirected stdin leaves the terminal untouched; the returned
/// guard then reports `raw_mode() == false`.
pub fn setup_terminal() -> io::Result<TerminalGuard> {
    if !io::stdin().is_terminal() {
        tracing::debug!("stdin is not a terminal, skipping raw mode");
        return Ok(TerminalGuard::new(false));
    }

    enable_raw_mode()?;
    let guard = TerminalGuard::new(true);
    guard.set_cleanup(|| {
        let _ = disable_raw_mode();
    });
    guard.install_panic_hook();

    Ok(guard)
}
