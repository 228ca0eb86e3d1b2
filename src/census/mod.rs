//! Interval census feature module.
//!
//! Generates a collection of random intervals once, then repeatedly draws
//! a number and reports how many intervals enclose it.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Immutable census snapshot
//! - `intent.rs` - Actions (NoOp, Init, NextNumber, Quit)
//! - `reducer.rs` - Transitions, emitting a `Report` per drawn number

mod intent;
mod reducer;
mod state;

pub use intent::Action;
pub use reducer::{CensusReducer, Report};
pub use state::{State, DEFAULT_COUNT, DEFAULT_MAX_VALUE, MAX_COUNT};
