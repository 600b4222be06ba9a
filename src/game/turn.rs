//! The match orchestrator and its turn state machine.
//!
//! A turn is one cycle of the phase machine:
//!
//! ```text
//! TurnResolved -> AwaitingRoll -> AwaitingSelection -> MoveApplied -> TurnResolved
//!                      |_______________(no eligible)_______^
//! ```
//!
//! [`Match::play_turn`] drives one full cycle and is the entry point the
//! shell loops over; the phase methods are public so a shell can also
//! step the machine itself. Calling them out of order is a caller bug
//! and panics. The shell owns the outer loop and any turn cap; the
//! match itself only stops once a winner is found.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{DieRoll, Player, PlayerId, TokenId, TokenRef};
use crate::events::{MatchEvent, Presenter};
use crate::rules;

use super::input::InputSource;

/// Where the turn cycle currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// A turn has started and needs its die roll.
    AwaitingRoll,
    /// The roll produced eligible tokens; one must be selected.
    AwaitingSelection,
    /// The move (or the no-move) is applied; the outcome is pending.
    MoveApplied,
    /// The cycle completed; ready for the next `start_turn`.
    TurnResolved,
}

/// How a completed turn cycle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// A six: the same player rolls again.
    ExtraTurn,
    /// The turn passed to the next player.
    TurnPassed,
    /// Third consecutive six: penalty applied, turn passed.
    PenaltyApplied,
    /// The active player finished their last token.
    MatchWon(PlayerId),
}

/// One completed turn cycle, as recorded in the match history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub player: PlayerId,
    pub roll: DieRoll,
    /// The token moved this cycle, if any.
    pub moved: Option<TokenRef>,
    pub outcome: TurnOutcome,
}

/// A running match: players, board, turn order, and the streak counter.
#[derive(Clone, Debug)]
pub struct Match {
    players: Vec<Player>,
    board: Board,
    active: PlayerId,
    phase: TurnPhase,
    six_streak: u8,
    /// Penalty target: the last token moved by anyone, as an ID pair.
    /// Cleared when that token returns home for any reason.
    last_moved: Option<TokenRef>,
    /// Eligible set of the roll being resolved, kept for selection
    /// validation.
    pending_eligible: SmallVec<[TokenId; 4]>,
    /// Token moved in the current cycle, for the history record.
    turn_moved: Option<TokenRef>,
    history: Vector<TurnRecord>,
    winner: Option<PlayerId>,
}

impl Match {
    pub(crate) fn new(mut players: Vec<Player>) -> Self {
        players[0].set_turn(true);
        Self {
            players,
            board: Board::new(),
            active: PlayerId::new(0),
            phase: TurnPhase::TurnResolved,
            six_streak: 0,
            last_moved: None,
            pending_eligible: SmallVec::new(),
            turn_moved: None,
            history: Vector::new(),
            winner: None,
        }
    }

    // === Accessors ===

    /// Registered players, in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up one player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Consecutive sixes rolled by the active player.
    #[must_use]
    pub fn six_streak(&self) -> u8 {
        self.six_streak
    }

    /// The triple-six penalty target, if one is on the track.
    #[must_use]
    pub fn last_moved(&self) -> Option<TokenRef> {
        self.last_moved
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Completed turn cycles, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Finished-token counts per player, in registration order.
    #[must_use]
    pub fn standings(&self) -> Vec<(PlayerId, usize)> {
        self.players
            .iter()
            .map(|p| (p.id(), p.finished_count()))
            .collect()
    }

    // === Turn cycle ===

    /// Run one full turn cycle: roll, move if possible, resolve.
    ///
    /// Returns how the cycle ended; on [`TurnOutcome::ExtraTurn`] the
    /// same player is still active and the shell simply calls again.
    ///
    /// # Panics
    ///
    /// Panics if the match already has a winner.
    pub fn play_turn(
        &mut self,
        input: &mut dyn InputSource,
        presenter: &mut dyn Presenter,
    ) -> TurnOutcome {
        self.start_turn(presenter);
        let roll = input.provide_roll();
        let eligible = self.resolve_roll(roll, presenter);
        if !eligible.is_empty() {
            let choice = input.provide_selection(eligible.len());
            self.select_and_move(choice, roll, presenter);
        }
        self.resolve_turn_outcome(roll, presenter)
    }

    /// Open the active player's turn and request a roll.
    ///
    /// # Panics
    ///
    /// Panics if a cycle is already in flight or the match is over.
    pub fn start_turn(&mut self, presenter: &mut dyn Presenter) {
        assert!(self.winner.is_none(), "the match is already won");
        assert_eq!(
            self.phase,
            TurnPhase::TurnResolved,
            "start_turn called while a turn is in flight"
        );
        debug_assert!(self.players[self.active.index()].has_turn());

        self.turn_moved = None;
        self.phase = TurnPhase::AwaitingRoll;
        presenter.handle(&MatchEvent::TurnStarted {
            player: self.active,
        });
    }

    /// Resolve a die roll into the eligible token set.
    ///
    /// With no eligible tokens the cycle skips selection: the turn
    /// passes with no move, but the roll still feeds the six-streak
    /// logic in [`Match::resolve_turn_outcome`].
    ///
    /// # Panics
    ///
    /// Panics unless a turn is awaiting its roll.
    pub fn resolve_roll(
        &mut self,
        roll: DieRoll,
        presenter: &mut dyn Presenter,
    ) -> SmallVec<[TokenId; 4]> {
        assert_eq!(
            self.phase,
            TurnPhase::AwaitingRoll,
            "resolve_roll needs a started turn awaiting its roll"
        );
        presenter.handle(&MatchEvent::RollResult {
            player: self.active,
            roll,
        });

        let eligible = rules::eligible_tokens(&self.players[self.active.index()], roll);
        if eligible.is_empty() {
            log::debug!("{} rolled {} with nothing to move", self.active, roll);
            presenter.handle(&MatchEvent::NoEligibleTokens {
                player: self.active,
            });
            self.phase = TurnPhase::MoveApplied;
        } else {
            self.pending_eligible = eligible.clone();
            self.phase = TurnPhase::AwaitingSelection;
        }
        eligible
    }

    /// Apply the selected move and its consequences.
    ///
    /// `choice` indexes the eligible set returned by the preceding
    /// [`Match::resolve_roll`].
    ///
    /// # Panics
    ///
    /// Panics unless a selection is pending, or if `choice` is outside
    /// the eligible set.
    pub fn select_and_move(
        &mut self,
        choice: usize,
        roll: DieRoll,
        presenter: &mut dyn Presenter,
    ) {
        assert_eq!(
            self.phase,
            TurnPhase::AwaitingSelection,
            "select_and_move needs a resolved roll with eligible tokens"
        );
        assert!(
            choice < self.pending_eligible.len(),
            "selection {} outside the eligible set of {}",
            choice,
            self.pending_eligible.len()
        );

        let token_id = self.pending_eligible[choice];
        let player = self.active;
        let color = self.players[player.index()].color();
        let token_ref = TokenRef::new(player, token_id);

        if self.players[player.index()].token(token_id).is_at_home() {
            // Eligibility guarantees the roll was a five.
            let entry = color.exit_square();
            self.players[player.index()]
                .token_mut(token_id)
                .exit_home(entry);
            self.board.enter(token_ref, color, entry);
            log::debug!("{} exits home to square {}", token_ref, entry);
            presenter.handle(&MatchEvent::TokenExitedHome {
                token: token_ref,
                square: entry,
            });
        } else {
            let from = self.players[player.index()]
                .token(token_id)
                .position()
                .expect("eligible token neither at home nor in transit");
            let to = from + roll.value();
            self.players[player.index()]
                .token_mut(token_id)
                .advance(roll.value());
            self.board.advance(token_ref, to);
            log::debug!("{} advances {} to {}", token_ref, roll, to);
            presenter.handle(&MatchEvent::TokenAdvanced {
                token: token_ref,
                position: to,
            });
        }

        let mut effects = Vec::new();
        rules::apply_post_move_effects(
            player,
            token_id,
            &mut self.players,
            &mut self.board,
            &mut effects,
        );
        for event in effects {
            // A captured token returned home no longer backs the penalty.
            if let MatchEvent::TokenCaptured { captured, .. } = event {
                if self.last_moved == Some(captured) {
                    self.last_moved = None;
                }
            }
            presenter.handle(&event);
        }

        self.last_moved = Some(token_ref);
        self.turn_moved = Some(token_ref);
        self.pending_eligible.clear();
        self.phase = TurnPhase::MoveApplied;
    }

    /// Close the cycle: victory, extra turn, penalty, or turn pass.
    ///
    /// # Panics
    ///
    /// Panics unless the cycle's move has been applied.
    pub fn resolve_turn_outcome(
        &mut self,
        roll: DieRoll,
        presenter: &mut dyn Presenter,
    ) -> TurnOutcome {
        assert_eq!(
            self.phase,
            TurnPhase::MoveApplied,
            "resolve_turn_outcome needs an applied move"
        );
        let player = self.active;

        let outcome = if let Some(winner) = self.check_victory() {
            self.winner = Some(winner);
            log::debug!("{} wins the match", winner);
            presenter.handle(&MatchEvent::MatchWon { player: winner });
            TurnOutcome::MatchWon(winner)
        } else if rules::grants_extra_turn(roll) {
            self.six_streak += 1;
            if rules::is_triple_six_penalty(self.six_streak) {
                let returned = self.apply_triple_six_penalty();
                presenter.handle(&MatchEvent::TripleSixPenalty { returned });
                self.advance_turn(presenter);
                TurnOutcome::PenaltyApplied
            } else {
                presenter.handle(&MatchEvent::ExtraTurnGranted { player });
                TurnOutcome::ExtraTurn
            }
        } else {
            self.advance_turn(presenter);
            TurnOutcome::TurnPassed
        };

        self.history.push_back(TurnRecord {
            player,
            roll,
            moved: self.turn_moved,
            outcome,
        });
        self.phase = TurnPhase::TurnResolved;
        outcome
    }

    /// First player, in registration order, with all four tokens
    /// finished.
    #[must_use]
    pub fn check_victory(&self) -> Option<PlayerId> {
        self.players.iter().find(|p| p.has_won()).map(Player::id)
    }

    /// Send the last moved token home, unless it has finished or was
    /// already sent home. Clears the back-reference either way.
    fn apply_triple_six_penalty(&mut self) -> Option<TokenRef> {
        let target = self.last_moved.take()?;
        if self.players[target.player.index()]
            .token(target.token)
            .is_finished()
        {
            return None;
        }
        self.board.remove(target);
        self.players[target.player.index()]
            .token_mut(target.token)
            .return_home();
        Some(target)
    }

    fn advance_turn(&mut self, presenter: &mut dyn Presenter) {
        self.six_streak = 0;
        self.players[self.active.index()].set_turn(false);
        let next = PlayerId::new(((self.active.index() + 1) % self.players.len()) as u8);
        self.players[next.index()].set_turn(true);
        self.active = next;
        presenter.handle(&MatchEvent::TurnAdvanced { next });
    }
}
