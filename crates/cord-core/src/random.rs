use std::collections::VecDeque;

/// Uniform draws used to pick animation parameters.
pub trait RandomSource {
    /// A value in `[0, 1)`.
    fn next_unit(&mut self) -> f32;

    fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_unit() * (hi - lo)
    }
}

impl<R: rand::Rng> RandomSource for R {
    fn next_unit(&mut self) -> f32 {
        self.gen::<f32>()
    }
}

/// Replays a fixed list of draws, then repeats `fallback`.
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    queue: VecDeque<f32>,
    fallback: f32,
    drawn: usize,
}

impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = f32>) -> Self {
        Self {
            queue: draws.into_iter().collect(),
            fallback: 0.5,
            drawn: 0,
        }
    }

    /// Number of draws taken so far.
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f32 {
        self.drawn += 1;
        self.queue.pop_front().unwrap_or(self.fallback)
    }
}
