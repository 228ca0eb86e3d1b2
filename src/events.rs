use std::io::{self, Read};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::shutdown::ShutdownHandle;

/// How long the input thread blocks before rechecking the shutdown flag.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
}

/// Reads input on a background thread and queues it for the driver.
pub struct EventHandler {
    rx: UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    /// Key events from a terminal in raw mode.
    pub fn terminal(shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        spawn_input("input", move || input_loop(tx, shutdown));
        Self { rx }
    }

    /// Characters from a piped or redirected stdin, until EOF.
    pub fn stdin() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        spawn_input("stdin", move || stdin_loop(io::stdin(), tx));
        Self { rx }
    }

    /// Builds a handler fed by the given channel instead of the terminal.
    pub fn from_channel(rx: UnboundedReceiver<AppEvent>) -> Self {
        Self { rx }
    }

    /// Next queued event, without waiting.
    pub fn try_next(&mut self) -> Option<AppEvent> {
        self.rx.try_recv().ok()
    }
}

fn spawn_input<F: FnOnce() + Send + 'static>(name: &str, body: F) {
    thread::Builder::new()
        .name(name.to_string())
        .spawn(body)
        .map_err(|err| tracing::error!("Failed to spawn {} thread: {}", name, err))
        .ok();
}

fn input_loop(tx: UnboundedSender<AppEvent>, shutdown: ShutdownHandle) {
    loop {
        if shutdown.is_shutting_down() {
            break;
        }

        match event::poll(POLL_INTERVAL) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(err) => {
                tracing::error!("Terminal poll failed: {}", err);
                break;
            }
        }

        match event::read() {
            Ok(Event::Key(key)) => {
                if tx.send(AppEvent::Key(key)).is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(err) => {
                tracing::error!("Terminal read failed: {}", err);
                break;
            }
        }
    }
    tracing::debug!("Input thread stopped");
}

/// Forwards each character of `reader` as a key press. Stops on EOF, on a
/// read error or when the receiver is gone.
fn stdin_loop<R: Read>(mut reader: R, tx: UnboundedSender<AppEvent>) {
    let mut buffer = [0u8; 1024];
    loop {
        let read_bytes = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(count) => count,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => {
                tracing::error!("stdin read failed: {}", err);
                break;
            }
        };

        let text = String::from_utf8_lossy(&buffer[..read_bytes]);
        for key in text.chars().filter_map(char_to_key) {
            if tx.send(AppEvent::Key(key)).is_err() {
                return;
            }
        }
    }
    tracing::debug!("stdin closed");
}

/// ETX (0x03) maps to Ctrl+C; other control characters are dropped.
fn char_to_key(ch: char) -> Option<KeyEvent> {
    match ch {
        '\u{3}' => Some(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        ch if ch.is_control() => None,
        ch => Some(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)),
    }
}

/// The configured quit key, or Ctrl+C since raw mode swallows SIGINT.
pub fn is_quit_key(key: &KeyEvent, quit_key: char) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    if is_ctrl_char(key, 'c') {
        return true;
    }
    matches!(key.code, KeyCode::Char(ch) if ch == quit_key)
        && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn is_ctrl_char(key: &KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
