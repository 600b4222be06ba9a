//! Match events and the presenter boundary.
//!
//! Everything observable that happens during a turn is reported as a
//! [`MatchEvent`] value handed to a [`Presenter`]. The engine never
//! renders or prints; a console shell subscribes and decides what each
//! event looks like. Notifications are fire-and-forget: presenters
//! return nothing and cannot influence the turn.

use serde::{Deserialize, Serialize};

use crate::core::{Color, DieRoll, PlayerId, TokenRef};

/// Something that happened during a turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// A player's turn began.
    TurnStarted { player: PlayerId },

    /// The active player's die roll.
    RollResult { player: PlayerId, roll: DieRoll },

    /// The roll left the active player with nothing to move.
    NoEligibleTokens { player: PlayerId },

    /// A token left home and entered the track.
    TokenExitedHome { token: TokenRef, square: u8 },

    /// A token advanced along the track.
    TokenAdvanced { token: TokenRef, position: u8 },

    /// A rival token was captured and sent home.
    TokenCaptured { captured: TokenRef, by: TokenRef },

    /// Two or more same-color tokens now share a square.
    BarrierFormed { square: u8, color: Color },

    /// A token reached the finish.
    TokenFinished { token: TokenRef },

    /// A six grants the same player another turn.
    ExtraTurnGranted { player: PlayerId },

    /// Third consecutive six: the last moved token went home, if it
    /// was still on the track.
    TripleSixPenalty { returned: Option<TokenRef> },

    /// The turn passed to the next player.
    TurnAdvanced { next: PlayerId },

    /// A player finished all four tokens.
    MatchWon { player: PlayerId },
}

/// Receives event notifications. Implemented by the driving shell.
pub trait Presenter {
    fn handle(&mut self, event: &MatchEvent);
}

/// Presenter that discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn handle(&mut self, _event: &MatchEvent) {}
}

/// Presenter that buffers events. Test and debugging aid.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<MatchEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, in order.
    #[must_use]
    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    /// Whether any recorded event satisfies `pred`.
    pub fn any(&self, pred: impl Fn(&MatchEvent) -> bool) -> bool {
        self.events.iter().any(|e| pred(e))
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Presenter for EventLog {
    fn handle(&mut self, event: &MatchEvent) {
        self.events.push(event.clone());
    }
}
