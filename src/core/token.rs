//! Tokens: the movable pieces.
//!
//! Each player owns four tokens. A token is always in exactly one of
//! three states:
//!
//! - `AtHome`: waiting to enter play; no board presence.
//! - `InTransit { position }`: on the shared track at `position`.
//! - `Finished`: done; irreversible, no board presence.
//!
//! The track position exists only inside `InTransit`, so the
//! "position defined iff in transit" invariant holds by construction.
//! Lifecycle operations panic on illegal transitions; those are caller
//! bugs, not recoverable conditions.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::player::PlayerId;

/// Unique token identifier, stable for the token's lifetime.
///
/// IDs are assigned at match setup as `player index * 4 + slot`, so they
/// are deterministic and reproducible across runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenId(pub u8);

impl TokenId {
    /// Create the ID for a player's token slot (0..4).
    #[must_use]
    pub const fn for_slot(player: PlayerId, slot: u8) -> Self {
        Self(player.0 * 4 + slot)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// The slot (0..4) this token occupies in its owner's collection.
    #[must_use]
    pub const fn slot(self) -> u8 {
        self.0 % 4
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({})", self.0)
    }
}

/// Non-owning reference to a token: owner plus token ID.
///
/// Board occupancy and the match's last-moved tracking use this pair
/// instead of live references, so clearing or returning a token home
/// can never dangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenRef {
    pub player: PlayerId,
    pub token: TokenId,
}

impl TokenRef {
    #[must_use]
    pub const fn new(player: PlayerId, token: TokenId) -> Self {
        Self { player, token }
    }
}

impl std::fmt::Display for TokenRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.player, self.token)
    }
}

/// Token lifecycle state. The track position lives inside `InTransit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenStatus {
    AtHome,
    InTransit { position: u8 },
    Finished,
}

/// A single game piece.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    id: TokenId,
    color: Color,
    status: TokenStatus,
}

impl Token {
    /// Create a token at home.
    #[must_use]
    pub fn new(id: TokenId, color: Color) -> Self {
        Self {
            id,
            color,
            status: TokenStatus::AtHome,
        }
    }

    #[must_use]
    pub fn id(&self) -> TokenId {
        self.id
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn status(&self) -> TokenStatus {
        self.status
    }

    /// Track position, if the token is in transit.
    #[must_use]
    pub fn position(&self) -> Option<u8> {
        match self.status {
            TokenStatus::InTransit { position } => Some(position),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_at_home(&self) -> bool {
        self.status == TokenStatus::AtHome
    }

    #[must_use]
    pub fn is_in_transit(&self) -> bool {
        matches!(self.status, TokenStatus::InTransit { .. })
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == TokenStatus::Finished
    }

    /// Leave home and enter the track at `entry_square`.
    ///
    /// # Panics
    ///
    /// Panics if the token is not at home.
    pub fn exit_home(&mut self, entry_square: u8) {
        assert!(
            self.is_at_home(),
            "{} cannot exit home from {:?}",
            self.id,
            self.status
        );
        self.status = TokenStatus::InTransit {
            position: entry_square,
        };
    }

    /// Advance along the track by `steps`.
    ///
    /// # Panics
    ///
    /// Panics if the token is not in transit.
    pub fn advance(&mut self, steps: u8) {
        match &mut self.status {
            TokenStatus::InTransit { position } => *position += steps,
            other => panic!("{} cannot advance from {:?}", self.id, other),
        }
    }

    /// Return to home. Used for captures and the triple-six penalty.
    ///
    /// # Panics
    ///
    /// Panics if the token has finished; finished tokens never move again.
    pub fn return_home(&mut self) {
        assert!(
            !self.is_finished(),
            "{} cannot return home once finished",
            self.id
        );
        self.status = TokenStatus::AtHome;
    }

    /// Transition to finished. Irreversible.
    ///
    /// # Panics
    ///
    /// Panics if the token is not in transit.
    pub fn arrive_finish(&mut self) {
        assert!(
            self.is_in_transit(),
            "{} cannot finish from {:?}",
            self.id,
            self.status
        );
        self.status = TokenStatus::Finished;
    }
}
