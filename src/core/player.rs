//! Player identity and per-player token ownership.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::token::{Token, TokenId};

/// Player identifier. Indices are 0-based in registration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Number of tokens each player owns.
pub const TOKENS_PER_PLAYER: usize = 4;

/// A registered player: display name, color, four tokens, turn flag.
///
/// Exactly one player holds the turn flag while a match is running.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    color: Color,
    tokens: [Token; TOKENS_PER_PLAYER],
    has_turn: bool,
}

impl Player {
    /// Create a player with four tokens at home.
    ///
    /// Token IDs are derived from the player index, so setup is
    /// deterministic regardless of construction order.
    #[must_use]
    pub(crate) fn new(id: PlayerId, name: String, color: Color) -> Self {
        let tokens =
            std::array::from_fn(|slot| Token::new(TokenId::for_slot(id, slot as u8), color));
        Self {
            id,
            name,
            color,
            tokens,
            has_turn: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn has_turn(&self) -> bool {
        self.has_turn
    }

    pub(crate) fn set_turn(&mut self, has_turn: bool) {
        self.has_turn = has_turn;
    }

    /// All four tokens, in slot order.
    #[must_use]
    pub fn tokens(&self) -> &[Token; TOKENS_PER_PLAYER] {
        &self.tokens
    }

    /// Look up a token by ID.
    ///
    /// # Panics
    ///
    /// Panics if the token does not belong to this player.
    #[must_use]
    pub fn token(&self, id: TokenId) -> &Token {
        self.tokens
            .iter()
            .find(|t| t.id() == id)
            .unwrap_or_else(|| panic!("{} does not own {}", self.id, id))
    }

    pub(crate) fn token_mut(&mut self, id: TokenId) -> &mut Token {
        let player = self.id;
        self.tokens
            .iter_mut()
            .find(|t| t.id() == id)
            .unwrap_or_else(|| panic!("{} does not own {}", player, id))
    }

    /// Number of tokens that have finished.
    #[must_use]
    pub fn finished_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_finished()).count()
    }

    /// Number of tokens still at home.
    #[must_use]
    pub fn at_home_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_at_home()).count()
    }

    /// A player wins when all four tokens have finished.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.finished_count() == TOKENS_PER_PLAYER
    }
}
