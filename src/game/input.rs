//! The input-source boundary.
//!
//! The engine consumes validated values only: re-prompting on malformed
//! console input is the shell's job. The crate ships two stock sources,
//! a seeded random one for shells and benchmarks and a scripted one for
//! tests.

use std::collections::VecDeque;

use crate::core::{DiceRng, DieRoll};

/// Supplies die rolls and token selections for the active player.
pub trait InputSource {
    /// Produce the die roll for the current turn.
    fn provide_roll(&mut self) -> DieRoll;

    /// Pick among the eligible tokens: a 0-based index into the
    /// eligible list, which has `eligible_count` entries.
    fn provide_selection(&mut self, eligible_count: usize) -> usize;
}

/// Seeded random source: uniform rolls, uniform selection.
#[derive(Clone, Debug)]
pub struct RandomInput {
    rng: DiceRng,
}

impl RandomInput {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: DiceRng::new(seed),
        }
    }
}

impl InputSource for RandomInput {
    fn provide_roll(&mut self) -> DieRoll {
        self.rng.roll()
    }

    fn provide_selection(&mut self, eligible_count: usize) -> usize {
        self.rng.pick(eligible_count)
    }
}

/// Replays fixed roll and selection queues. Scenario test vehicle.
///
/// Selections default to 0 (the first eligible token) once the queue is
/// empty; running out of rolls panics, since a scripted scenario that
/// rolls more often than scripted is itself broken.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    rolls: VecDeque<DieRoll>,
    selections: VecDeque<usize>,
}

impl ScriptedInput {
    #[must_use]
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        Self {
            rolls: rolls.into_iter().map(DieRoll::new).collect(),
            selections: VecDeque::new(),
        }
    }

    /// Queue selection indices, consumed in order by `provide_selection`.
    #[must_use]
    pub fn with_selections(mut self, selections: impl IntoIterator<Item = usize>) -> Self {
        self.selections = selections.into_iter().collect();
        self
    }

    /// Rolls left in the script.
    #[must_use]
    pub fn rolls_remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl InputSource for ScriptedInput {
    fn provide_roll(&mut self) -> DieRoll {
        self.rolls.pop_front().expect("scripted rolls exhausted")
    }

    fn provide_selection(&mut self, _eligible_count: usize) -> usize {
        self.selections.pop_front().unwrap_or(0)
    }
}
