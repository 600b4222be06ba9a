//! Core engine types: colors, tokens, players, dice, errors.
//!
//! These are the value types the rest of the engine is built from.

pub mod color;
pub mod dice;
pub mod error;
pub mod player;
pub mod token;

pub use color::Color;
pub use dice::{DiceRng, DieRoll};
pub use error::SetupError;
pub use player::{Player, PlayerId, TOKENS_PER_PLAYER};
pub use token::{Token, TokenId, TokenRef, TokenStatus};
