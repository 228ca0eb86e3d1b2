use std::collections::VecDeque;

use enclosed::random::RandomSource;

/// Replays a fixed list of draws, clamped into the requested range.
pub struct ScriptedRandom {
    draws: VecDeque<u64>,
}

impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = u64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform_int(&mut self, min: u64, max: u64) -> u64 {
        let draw = self.draws.pop_front().expect("script ran out of draws");
        draw.clamp(min, max)
    }
}
