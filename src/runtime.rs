use std::io::{self, Write};

use crate::driver::{Driver, Reporter};
use crate::events::{is_quit_key, AppEvent, EventHandler};
use crate::random::RandomSource;
use crate::shutdown::ShutdownHandle;

/// Knobs for one run of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub quit_key: char,
    /// Quit after this many reports.
    pub iterations: Option<u64>,
}

/// Runs the driver until quit, yielding to the runtime after every step.
///
/// Pending input is drained between steps, so a quit key always preempts
/// whatever is queued. Returns the number of reports written.
pub async fn run<R, W>(
    mut driver: Driver<R>,
    reporter: &mut Reporter<W>,
    mut events: Option<EventHandler>,
    shutdown: ShutdownHandle,
    options: RunOptions,
) -> io::Result<u64>
where
    R: RandomSource,
    W: Write,
{
    let mut reported = 0u64;

    while !driver.is_idle() {
        if let Some(events) = events.as_mut() {
            while let Some(event) = events.try_next() {
                match event {
                    AppEvent::Key(key) if is_quit_key(&key, options.quit_key) => {
                        tracing::debug!("Quit key pressed");
                        driver.preempt_quit();
                    }
                    AppEvent::Key(_) => {}
                }
            }
        }

        if shutdown.is_shutting_down() {
            driver.preempt_quit();
        }

        if options.iterations.is_some_and(|limit| reported >= limit) {
            tracing::debug!(reported, "Iteration limit reached");
            driver.preempt_quit();
        }

        if let Some(report) = driver.step() {
            reporter.emit(&report)?;
            reported += 1;
        }

        tokio::task::yield_now().await;
    }

    tracing::info!(reported, "Census loop finished");
    Ok(reported)
}
