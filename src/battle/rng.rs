use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Injectable source of randomness for a battle.
///
/// Every draw carries a `reason` so a replay can be traced back to the roll
/// that consumed it. Implementors only provide `next_unit`; the helpers
/// define how a unit value maps onto each kind of roll.
pub trait BattleRng {
    /// A value in `[0, 1)`.
    fn next_unit(&mut self, reason: &str) -> f64;

    /// Uniform integer roll in `1..=100`.
    fn roll_percent(&mut self, reason: &str) -> u8 {
        ((self.next_unit(reason) * 100.0).floor() as u8).min(99) + 1
    }

    /// True with probability `probability`.
    fn chance(&mut self, probability: f64, reason: &str) -> bool {
        self.next_unit(reason) < probability
    }

    fn uniform(&mut self, low: f64, high: f64, reason: &str) -> f64 {
        low + (high - low) * self.next_unit(reason)
    }

    /// Uniform index into a collection of `len` items. `len` must be non-zero.
    fn pick_index(&mut self, len: usize, reason: &str) -> usize {
        let index = (self.next_unit(reason) * len as f64).floor() as usize;
        index.min(len.saturating_sub(1))
    }
}

/// Seedable production source backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct SeededRng {
    rng: StdRng,
}

impl SeededRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl BattleRng for SeededRng {
    fn next_unit(&mut self, reason: &str) -> f64 {
        let value = self.rng.random::<f64>();
        tracing::trace!(value, reason, "rng draw");
        value
    }
}

/// Scripted source that replays a fixed cycle of unit values.
///
/// Running off the end wraps around to the first value, so a short script
/// such as `[0.5]` covers a battle of any length.
#[derive(Debug, Clone)]
pub struct TurnRng {
    outcomes: Vec<f64>,
    index: usize,
}

impl TurnRng {
    pub fn new_for_test(outcomes: Vec<f64>) -> Self {
        let outcomes = if outcomes.is_empty() {
            vec![0.5]
        } else {
            outcomes
                .into_iter()
                .map(|value| value.clamp(0.0, 0.999_999))
                .collect()
        };
        Self { outcomes, index: 0 }
    }

    /// Script in terms of percent rolls: each roll `r` in 1..=100 is mapped to
    /// a unit value that `roll_percent` turns back into `r`.
    pub fn from_percent_rolls(rolls: &[u8]) -> Self {
        Self::new_for_test(
            rolls
                .iter()
                .map(|&roll| (f64::from(roll.clamp(1, 100)) - 1.0) / 100.0 + 0.005)
                .collect(),
        )
    }

    /// Always 0.5: never misses a move with accuracy of 51 or more, never
    /// lands a critical hit, always applies 92.5% damage variance.
    pub fn midpoint() -> Self {
        Self::new_for_test(vec![0.5])
    }

    /// Number of values consumed so far.
    pub fn consumed(&self) -> usize {
        self.index
    }
}

impl BattleRng for TurnRng {
    fn next_unit(&mut self, reason: &str) -> f64 {
        let outcome = self.outcomes[self.index % self.outcomes.len()];

        #[cfg(test)]
        println!("[RNG] Consumed {} for: {}", outcome, reason);
        tracing::trace!(value = outcome, reason, "scripted rng draw");

        self.index += 1;
        outcome
    }
}
