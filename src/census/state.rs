use crate::interval::Interval;
use crate::mvi::AppState;

/// Upper bound for generated numbers and interval ends.
pub const DEFAULT_MAX_VALUE: u64 = 1_000_000_000;
/// Number of intervals generated when no count is requested.
pub const DEFAULT_COUNT: usize = 1_000_000;
/// Largest interval count accepted; bigger requests fall back like invalid input.
pub const MAX_COUNT: usize = 100_000_000;

#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub intervals: Vec<Interval>,
    pub max_value: u64,
    /// Target number of intervals for the next `Init`.
    pub count: usize,
    pub quit: bool,
}

impl State {
    pub fn new(max_value: u64, count: usize) -> Self {
        Self {
            intervals: Vec::new(),
            max_value,
            count,
            quit: false,
        }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VALUE, DEFAULT_COUNT)
    }
}

impl AppState for State {}
