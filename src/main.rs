use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use enclosed::census::State;
use enclosed::cli::Cli;
use enclosed::driver::{Driver, Reporter};
use enclosed::events::EventHandler;
use enclosed::logging::init_tracing;
use enclosed::random::RngSource;
use enclosed::runtime::{run, RunOptions};
use enclosed::shutdown::{listen_for_signals, ShutdownCoordinator};
use enclosed::terminal_guard::setup_terminal;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing("warn");

    let cli = Cli::parse();
    let config = cli.load_config()?;
    let settings = cli.resolve(&config)?;

    let coordinator = ShutdownCoordinator::new();
    let signals = tokio::spawn(listen_for_signals(coordinator.handle()));

    let guard = setup_terminal().context("Failed to enable raw terminal mode")?;
    let events = if guard.raw_mode() {
        EventHandler::terminal(coordinator.handle())
    } else {
        EventHandler::stdin()
    };
    let mut reporter = Reporter::new(io::stdout().lock(), guard.raw_mode());

    let state = State::new(settings.max_value, settings.default_count);
    let options = RunOptions {
        quit_key: settings.quit_key,
        iterations: settings.iterations,
    };
    let handle = coordinator.handle();

    let result = match settings.seed {
        Some(seed) => {
            let driver = Driver::new(state, settings.count, RngSource::seeded(seed));
            run(driver, &mut reporter, Some(events), handle, options).await
        }
        None => {
            let driver = Driver::new(state, settings.count, RngSource::thread());
            run(driver, &mut reporter, Some(events), handle, options).await
        }
    };

    coordinator.signal();
    let _ = signals.await;
    drop(guard);

    result.context("Failed to write to stdout")?;
    Ok(())
}
