//! Actions consumed by the census reducer.

use crate::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    NoOp,
    /// (Re)generate the interval collection. `None` or `Some(0)` keeps the
    /// current count.
    Init { count: Option<usize> },
    /// Draw a number and report how many intervals enclose it.
    NextNumber,
    Quit,
}

impl Intent for Action {}
