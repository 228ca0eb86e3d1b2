//! Half-open intervals and containment counting.

use crate::random::RandomSource;

/// A half-open range `[lo, hi)` with `lo < hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    lo: u64,
    hi: u64,
}

impl Interval {
    /// Returns `None` unless `lo < hi`.
    pub fn new(lo: u64, hi: u64) -> Option<Self> {
        (lo < hi).then_some(Self { lo, hi })
    }

    pub fn lo(&self) -> u64 {
        self.lo
    }

    pub fn hi(&self) -> u64 {
        self.hi
    }

    /// `lo <= num < hi`
    pub fn contains(&self, num: u64) -> bool {
        self.lo <= num && num < self.hi
    }
}

/// Generates one interval inside `[0, max_value]`.
///
/// `lo` is drawn from `[0, max_value - 1]` so that `[lo + 1, max_value]`
/// is never empty. Returns `None` when `max_value` is 0.
pub fn make_interval<R: RandomSource>(rng: &mut R, max_value: u64) -> Option<Interval> {
    let top = max_value.checked_sub(1)?;
    let lo = rng.uniform_int(0, top);
    let hi = rng.uniform_int(lo + 1, max_value);
    Interval::new(lo, hi)
}

/// Generates `n` independent intervals.
pub fn make_intervals<R: RandomSource>(rng: &mut R, n: usize, max_value: u64) -> Vec<Interval> {
    if max_value == 0 {
        return Vec::new();
    }
    (0..n).filter_map(|_| make_interval(rng, max_value)).collect()
}

/// Number of intervals containing `num`.
pub fn count_enclosing(num: u64, intervals: &[Interval]) -> usize {
    intervals.iter().filter(|interval| interval.contains(num)).count()
}
