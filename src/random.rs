use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of every random choice the algorithms make.
pub trait RandomSource {
    /// Uniformly distributed integer in `low..=high`.
    fn uniform_int(&mut self, low: usize, high: usize) -> usize;
}

impl RandomSource for ThreadRng {
    fn uniform_int(&mut self, low: usize, high: usize) -> usize {
        self.gen_range(low, high + 1)
    }
}

impl RandomSource for StdRng {
    fn uniform_int(&mut self, low: usize, high: usize) -> usize {
        self.gen_range(low, high + 1)
    }
}

/// Reproducible source for a given seed.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Picks one of `items` uniformly, `None` only when there is nothing to pick.
/// A source answering outside the requested range is wrapped back into it.
pub fn pick<T: Copy>(rng: &mut dyn RandomSource, items: &[T]) -> Option<T> {
    if items.is_empty() {
        return None;
    }
    let index = rng.uniform_int(0, items.len() - 1) % items.len();
    Some(items[index])
}

#[cfg(test)]
pub(crate) mod stub {
    use std::collections::VecDeque;

    use super::RandomSource;

    /// always the first candidate
    pub struct Lowest;

    impl RandomSource for Lowest {
        fn uniform_int(&mut self, low: usize, _high: usize) -> usize {
            low
        }
    }

    /// always the last candidate
    pub struct Highest;

    impl RandomSource for Highest {
        fn uniform_int(&mut self, _low: usize, high: usize) -> usize {
            high
        }
    }

    /// answers one past the top of every range
    pub struct PastTheEnd;

    impl RandomSource for PastTheEnd {
        fn uniform_int(&mut self, _low: usize, high: usize) -> usize {
            high + 1
        }
    }

    /// Replays offsets from `low`, clamped to the range; `low` once exhausted.
    pub struct Scripted(pub VecDeque<usize>);

    impl Scripted {
        pub fn new(offsets: &[usize]) -> Self {
            Self(offsets.iter().copied().collect())
        }
    }

    impl RandomSource for Scripted {
        fn uniform_int(&mut self, low: usize, high: usize) -> usize {
            let offset = self.0.pop_front().unwrap_or(0);
            (low + offset).min(high)
        }
    }
}
