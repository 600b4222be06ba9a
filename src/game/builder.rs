//! Match setup.

use crate::core::{Color, Player, PlayerId, SetupError};

use super::turn::Match;

/// Builder registering 2-4 players, each with a distinct color.
///
/// ## Example
///
/// ```
/// use parchis::core::Color;
/// use parchis::game::MatchBuilder;
///
/// let game = MatchBuilder::new()
///     .player("Ana", Color::Yellow)
///     .player("Luis", Color::Blue)
///     .build()
///     .unwrap();
///
/// assert_eq!(game.players().len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MatchBuilder {
    players: Vec<(String, Color)>,
}

impl MatchBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a player. Registration order is turn order.
    #[must_use]
    pub fn player(mut self, name: impl Into<String>, color: Color) -> Self {
        self.players.push((name.into(), color));
        self
    }

    /// Build the match, or refuse to start on a bad configuration.
    pub fn build(self) -> Result<Match, SetupError> {
        let count = self.players.len();
        if !(2..=4).contains(&count) {
            return Err(SetupError::PlayerCount(count));
        }

        let mut taken: Vec<Color> = Vec::with_capacity(count);
        for (_, color) in &self.players {
            if taken.contains(color) {
                return Err(SetupError::DuplicateColor(*color));
            }
            taken.push(*color);
        }

        let players = self
            .players
            .into_iter()
            .enumerate()
            .map(|(i, (name, color))| Player::new(PlayerId::new(i as u8), name, color))
            .collect();

        Ok(Match::new(players))
    }
}
