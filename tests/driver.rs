mod common;

use common::ScriptedRandom;
use enclosed::census::{Action, Report, State};
use enclosed::driver::{Driver, Reporter};
use enclosed::events::{AppEvent, EventHandler};
use enclosed::random::RngSource;
use enclosed::runtime::{run, RunOptions};
use enclosed::shutdown::ShutdownCoordinator;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

fn key(ch: char) -> AppEvent {
    AppEvent::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE))
}

#[test]
fn first_step_initializes_and_queues_next_number() {
    let mut driver = Driver::new(State::new(100, 10), Some(3), RngSource::seeded(1));
    assert_eq!(driver.step(), None);
    assert_eq!(driver.state().intervals.len(), 3);
    assert_eq!(driver.pending().iter().copied().collect::<Vec<_>>(), vec![Action::NextNumber]);
}

#[test]
fn steps_report_in_fifo_order() {
    // Init draws lo then hi for each interval, then one draw per number.
    let rng = ScriptedRandom::new([0, 5, 3, 10, 7, 9, 4, 8, 12]);
    let mut driver = Driver::new(State::new(20, 3), None, rng);

    assert_eq!(driver.step(), None);
    let reports: Vec<Report> = (0..3).filter_map(|_| driver.step()).collect();

    assert_eq!(
        reports,
        vec![
            Report { number: 4, enclosed: 2 },
            Report { number: 8, enclosed: 2 },
            Report { number: 12, enclosed: 0 },
        ]
    );
}

#[test]
fn preempt_quit_replaces_queued_work() {
    let mut driver = Driver::new(State::new(100, 2), None, RngSource::seeded(2));
    driver.step();
    driver.preempt_quit();
    assert_eq!(driver.pending().iter().copied().collect::<Vec<_>>(), vec![Action::Quit]);

    assert_eq!(driver.step(), None);
    assert!(driver.is_finished());
    assert!(driver.is_idle());
}

#[test]
fn no_steps_run_after_quit() {
    let mut driver = Driver::new(State::new(100, 2), None, RngSource::seeded(3));
    driver.step();
    driver.preempt_quit();
    driver.step();

    let before = driver.state().clone();
    for _ in 0..5 {
        assert_eq!(driver.step(), None);
    }
    assert_eq!(driver.state(), &before);
}

#[test]
fn quit_before_init_never_generates_intervals() {
    let mut driver = Driver::new(State::new(100, 2), None, RngSource::seeded(4));
    driver.preempt_quit();
    driver.step();
    assert!(driver.is_finished());
    assert!(driver.state().intervals.is_empty());
}

#[tokio::test]
async fn run_stops_after_iteration_limit() {
    let driver = Driver::new(State::new(100, 4), None, RngSource::seeded(5));
    let mut reporter = Reporter::new(Vec::new(), false);
    let coordinator = ShutdownCoordinator::new();
    let options = RunOptions {
        quit_key: 'q',
        iterations: Some(3),
    };

    let reported = run(driver, &mut reporter, None, coordinator.handle(), options)
        .await
        .unwrap();

    assert_eq!(reported, 3);
    let output = String::from_utf8(reporter.into_inner()).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|line| line.contains(" => Enclosed by ")));
    assert!(lines.iter().all(|line| line.ends_with(" range(s)")));
}

#[tokio::test]
async fn quit_key_preempts_queued_work() {
    let (tx, rx) = mpsc::unbounded_channel();
    tx.send(key('x')).unwrap();
    tx.send(key('q')).unwrap();

    let driver = Driver::new(State::new(100, 4), None, RngSource::seeded(6));
    let mut reporter = Reporter::new(Vec::new(), false);
    let coordinator = ShutdownCoordinator::new();
    let options = RunOptions {
        quit_key: 'q',
        iterations: None,
    };

    let reported = run(
        driver,
        &mut reporter,
        Some(EventHandler::from_channel(rx)),
        coordinator.handle(),
        options,
    )
    .await
    .unwrap();

    assert_eq!(reported, 0);
    assert!(reporter.into_inner().is_empty());
}

#[tokio::test]
async fn shutdown_signal_ends_the_loop() {
    let driver = Driver::new(State::new(100, 4), None, RngSource::seeded(7));
    let mut reporter = Reporter::new(Vec::new(), false);
    let coordinator = ShutdownCoordinator::new();
    coordinator.signal();
    let options = RunOptions {
        quit_key: 'q',
        iterations: None,
    };

    let reported = run(driver, &mut reporter, None, coordinator.handle(), options)
        .await
        .unwrap();

    assert_eq!(reported, 0);
}
