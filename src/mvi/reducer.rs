//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::AppState;
use crate::random::RandomSource;

/// Outcome of a single reduction.
#[derive(Debug, Clone, PartialEq)]
pub struct Step<S, I, E> {
    /// The state that replaces the current one.
    pub state: S,
    /// Intent to push to the back of the queue.
    pub next: I,
    /// Side effect for the caller to perform, if any.
    pub effect: Option<E>,
}

impl<S, I, E> Step<S, I, E> {
    pub fn new(state: S, next: I) -> Self {
        Self {
            state,
            next,
            effect: None,
        }
    }

    pub fn with_effect(mut self, effect: E) -> Self {
        self.effect = Some(effect);
        self
    }
}

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// Given the same random draws it is a pure function:
/// (State, Intent) -> (State, Intent, Effect?)
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: AppState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Effect emitted for the caller to carry out.
    type Effect;

    /// Process an intent and return the new state with its follow-up intent.
    fn reduce<R: RandomSource>(
        state: Self::State,
        intent: Self::Intent,
        rng: &mut R,
    ) -> Step<Self::State, Self::Intent, Self::Effect>;
}
