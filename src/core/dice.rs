//! Die rolls and deterministic dice.
//!
//! The engine never rolls for itself: rolls arrive through the input
//! source boundary. `DiceRng` is the crate's stock die for shells and
//! benchmarks: seeded ChaCha8, so the same seed replays the same match.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// A validated die roll in 1..=6.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DieRoll(u8);

impl DieRoll {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    /// Wrap a raw value.
    ///
    /// # Panics
    ///
    /// Panics if `value` is outside 1..=6. Out-of-range rolls are an
    /// input-source bug; the shell validates raw input before the core
    /// ever sees it.
    #[must_use]
    pub fn new(value: u8) -> Self {
        assert!(
            (Self::MIN..=Self::MAX).contains(&value),
            "die roll must be 1..=6, got {}",
            value
        );
        Self(value)
    }

    /// Get the rolled value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The exit rule reads fives.
    #[must_use]
    pub const fn is_five(self) -> bool {
        self.0 == 5
    }

    /// The extra-turn rule reads sixes.
    #[must_use]
    pub const fn is_six(self) -> bool {
        self.0 == 6
    }
}

impl std::fmt::Display for DieRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Deterministic six-sided die.
///
/// Same seed, same sequence. Scripted replays and benchmarks rely on it.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DiceRng {
    /// Create a die with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Get the seed this die was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Roll the die.
    pub fn roll(&mut self) -> DieRoll {
        DieRoll::new(self.inner.gen_range(DieRoll::MIN..=DieRoll::MAX))
    }

    /// Pick a uniform index in `0..n`. Used to select among eligible tokens.
    pub fn pick(&mut self, n: usize) -> usize {
        assert!(n > 0, "cannot pick from an empty set");
        self.inner.gen_range(0..n)
    }
}
