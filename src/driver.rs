//! Action queue and census state, owned together by one driver.

use std::collections::VecDeque;
use std::io::{self, Write};

use crate::census::{Action, CensusReducer, Report, State};
use crate::mvi::Reducer;
use crate::random::RandomSource;

/// Single owner of the census state and its FIFO action queue.
///
/// Every call to [`Driver::step`] is one atomic unit of work; input handling
/// happens between steps and can only replace the queue.
pub struct Driver<R> {
    state: State,
    queue: VecDeque<Action>,
    rng: R,
}

impl<R: RandomSource> Driver<R> {
    /// Creates a driver whose queue holds `Init { count }`.
    pub fn new(state: State, count: Option<usize>, rng: R) -> Self {
        Self {
            state,
            queue: VecDeque::from([Action::Init { count }]),
            rng,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn pending(&self) -> &VecDeque<Action> {
        &self.queue
    }

    /// Quit has been processed.
    pub fn is_finished(&self) -> bool {
        self.state.quit
    }

    /// Nothing left to do, either because quit was processed or the queue ran dry.
    pub fn is_idle(&self) -> bool {
        self.state.quit || self.queue.is_empty()
    }

    /// Drops all queued work and schedules `Quit` next.
    pub fn preempt_quit(&mut self) {
        self.queue.clear();
        self.queue.push_back(Action::Quit);
    }

    /// Pops one action, reduces it, and queues the follow-up.
    ///
    /// Does nothing once the driver is idle.
    pub fn step(&mut self) -> Option<Report> {
        if self.state.quit {
            return None;
        }
        let action = self.queue.pop_front()?;
        let state = std::mem::take(&mut self.state);
        let step = CensusReducer::reduce(state, action, &mut self.rng);
        self.state = step.state;
        self.queue.push_back(step.next);
        step.effect
    }
}

/// Writes report lines to an output stream.
///
/// Raw terminal mode disables output post-processing, so lines need an
/// explicit carriage return there.
pub struct Reporter<W> {
    out: W,
    line_ending: &'static str,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, raw_mode: bool) -> Self {
        Self {
            out,
            line_ending: if raw_mode { "\r\n" } else { "\n" },
        }
    }

    pub fn emit(&mut self, report: &Report) -> io::Result<()> {
        write!(self.out, "{}{}", report, self.line_ending)?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
