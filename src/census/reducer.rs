//! Reducer for the census loop.

use std::fmt;

use crate::interval::{count_enclosing, make_intervals};
use crate::mvi::{Reducer, Step};
use crate::random::RandomSource;

use super::intent::Action;
use super::state::{State, MAX_COUNT};

/// One drawn number and how many intervals enclose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub number: u64,
    pub enclosed: usize,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => Enclosed by {} range(s)", self.number, self.enclosed)
    }
}

/// Reducer for census state transitions.
///
/// Printing is left to the caller: a drawn number comes back as a
/// [`Report`] effect.
pub struct CensusReducer;

impl Reducer for CensusReducer {
    type State = State;
    type Intent = Action;
    type Effect = Report;

    fn reduce<R: RandomSource>(
        state: Self::State,
        intent: Self::Intent,
        rng: &mut R,
    ) -> Step<Self::State, Self::Intent, Self::Effect> {
        match intent {
            Action::NoOp => Step::new(state, Action::NoOp),

            Action::Init { count } => {
                let count = count
                    .filter(|&n| n != 0 && n <= MAX_COUNT)
                    .unwrap_or(state.count)
                    .min(MAX_COUNT);
                let intervals = make_intervals(rng, count, state.max_value);
                tracing::info!(count, max_value = state.max_value, "Generated intervals");
                Step::new(
                    State {
                        intervals,
                        count,
                        ..state
                    },
                    Action::NextNumber,
                )
            }

            Action::NextNumber => {
                let number = rng.uniform_int(0, state.max_value);
                let enclosed = count_enclosing(number, &state.intervals);
                Step::new(state, Action::NextNumber).with_effect(Report { number, enclosed })
            }

            Action::Quit => {
                tracing::debug!("Quit requested");
                Step::new(
                    State {
                        quit: true,
                        ..state
                    },
                    Action::NoOp,
                )
            }
        }
    }
}
