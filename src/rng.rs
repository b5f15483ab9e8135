use thiserror::Error;

/// Number of slots in the rolling seed window.
pub const SEED_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeedError {
    #[error("exactly 3 seeds are required, got {found}")]
    InvalidSeedCount { found: usize },
}

/// Itamaraca generator.
///
/// Each step computes `Pn = |s2 - s0|`, emits `|bound - Pn * lambda|` and
/// slides the window so the emitted value becomes the newest seed. The
/// sequence is fully determined by the construction parameters.
///
/// `bound` is only the subtrahend of the output formula; outputs above it
/// are possible and are not clamped.
#[derive(Debug, Clone)]
pub struct ItamaracaRng {
    seeds: [f64; SEED_COUNT],
    bound: f64,
    lambda: f64,
}

impl ItamaracaRng {
    /// Copies `seeds` into the generator. Fails unless exactly three are given.
    pub fn new(bound: f64, seeds: &[f64], lambda: f64) -> Result<Self, SeedError> {
        let seeds: [f64; SEED_COUNT] = seeds
            .try_into()
            .map_err(|_| SeedError::InvalidSeedCount { found: seeds.len() })?;

        Ok(Self {
            seeds,
            bound,
            lambda,
        })
    }

    pub fn next_value(&mut self) -> f64 {
        let pn = (self.seeds[2] - self.seeds[0]).abs();
        let value = (self.bound - pn * self.lambda).abs();

        self.seeds.rotate_left(1);
        self.seeds[2] = value;

        value
    }

    pub fn sample(&mut self, count: usize) -> Vec<f64> {
        self.by_ref().take(count).collect()
    }

    /// Current window, oldest first.
    pub fn seeds(&self) -> [f64; SEED_COUNT] {
        self.seeds
    }

    pub fn bound(&self) -> f64 {
        self.bound
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl Iterator for ItamaracaRng {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
